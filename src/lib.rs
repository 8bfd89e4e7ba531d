//! # zcl-meter-rs - Decoding ZCL Energy-Meter Attribute Reports
//!
//! The zcl-meter-rs crate decodes periodic attribute reports from multi-phase
//! energy meters (Metering and Electrical Measurement clusters) into a
//! normalized set of physical measurements.
//!
//! ## Features
//!
//! - Table-driven mapping from raw attribute identifiers to named quantities
//! - Dynamic scale-factor resolution from device-reported multiplier/divisor
//!   pairs, tolerating pairs that arrive after the data they scale
//! - Reconstruction of 64-bit cumulative energy counters from 32-bit words,
//!   with per-device carry-over across partial reports
//! - Per-quantity calibration (percentual or absolute) and precision rounding
//! - Idempotent handling of retransmitted reports
//! - One-time device configuration priming the factor caches
//!
//! ## Usage
//!
//! ```rust
//! use std::sync::Arc;
//! use zcl_meter_rs::{
//!     AttributeReport, Cluster, InMemoryAttributeStore, MeterDeviceManager,
//! };
//!
//! let store = Arc::new(InMemoryAttributeStore::new());
//! store.set_scalar("0xcafe", 1, Cluster::Metering, "multiplier", 1.0);
//! store.set_scalar("0xcafe", 1, Cluster::Metering, "divisor", 100.0);
//!
//! let manager = MeterDeviceManager::new(store);
//! let report = AttributeReport::new("0xcafe", 1, Cluster::Metering)
//!     .with_words("currentSummDelivered", vec![0, 1000]);
//!
//! let payload = manager.decode(&report).unwrap();
//! assert_eq!(payload.numeric("energy"), Some(10.0));
//! ```

pub mod calibrate;
pub mod constants;
pub mod convert;
pub mod dedup;
pub mod device;
pub mod device_manager;
pub mod error;
pub mod exposes;
pub mod factor;
pub mod logging;
pub mod report;

pub use crate::error::MeterError;
pub use crate::logging::{init_logger, log_debug, log_error, log_info, log_warn};

// Core report types
pub use report::quantity::{
    QuantityClass, QuantitySpec, ELECTRICAL_QUANTITIES, METERING_COUNTERS,
};
pub use report::{AttributeReport, AttributeValue, Cluster, OutputPayload, OutputValue};

// Decode pipeline
pub use calibrate::{round_to_digits, CalibrationMode, CalibrationOptions, QuantityOptions};
pub use convert::electrical::AcAlarmMask;
pub use convert::metering::CumulativeState;
pub use dedup::DuplicateFilter;
pub use device_manager::MeterDeviceManager;
pub use report::counter::combine;

// Host-environment interfaces
pub use device::{configure_device, AttributeStore, InMemoryAttributeStore, MeterTransport};
pub use exposes::{
    metering_options, Expose, OptionKind, OptionSpec, ELECTRICAL_OPTIONS, SPM02_EXPOSES,
};
