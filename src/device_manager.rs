//! # Meter Device Manager
//!
//! The host-facing entry point. Owns the duplicate filter and the per-device
//! decode state (cumulative counters, calibration options, endpoint names) and
//! routes accepted reports to the cluster converters.
//!
//! State is keyed by device identity: reports for different devices never
//! share mutable state, and reports for the same device are serialized behind
//! a per-device lock because the cumulative update-then-read is not atomic
//! across the two counters.

use crate::calibrate::CalibrationOptions;
use crate::convert::{electrical, metering};
use crate::convert::metering::CumulativeState;
use crate::dedup::DuplicateFilter;
use crate::device::AttributeStore;
use crate::error::MeterError;
use crate::report::{AttributeReport, Cluster, OutputPayload};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Per-device decode state.
#[derive(Debug, Default)]
struct DeviceState {
    cumulative: CumulativeState,
    options: CalibrationOptions,
    endpoint_names: HashMap<u8, String>,
}

/// Represents a manager for decoding reports from a fleet of energy meters.
pub struct MeterDeviceManager {
    /// Attribute cache shared with the transport layer.
    store: Arc<dyn AttributeStore>,
    /// Idempotency records, consulted before any state mutation.
    filter: Mutex<DuplicateFilter>,
    /// Per-device state with per-key serialization.
    devices: Mutex<HashMap<String, Arc<Mutex<DeviceState>>>>,
}

impl MeterDeviceManager {
    /// Creates a manager reading factors through the given attribute store.
    pub fn new(store: Arc<dyn AttributeStore>) -> Self {
        MeterDeviceManager {
            store,
            filter: Mutex::new(DuplicateFilter::new()),
            devices: Mutex::new(HashMap::new()),
        }
    }

    /// Installs calibration/precision options for a device.
    pub fn set_calibration_options(&self, device: &str, options: CalibrationOptions) {
        let entry = self.device_entry(device);
        entry.lock().unwrap().options = options;
    }

    /// Names a logical endpoint so its quantities get disambiguated output names.
    pub fn set_endpoint_name(&self, device: &str, endpoint: u8, name: &str) {
        let entry = self.device_entry(device);
        entry
            .lock()
            .unwrap()
            .endpoint_names
            .insert(endpoint, name.to_string());
    }

    /// Returns a copy of the device's cumulative counter state.
    pub fn cumulative_state(&self, device: &str) -> CumulativeState {
        self.device_entry(device).lock().unwrap().cumulative
    }

    /// Drops all state for a device that left the network.
    pub fn forget_device(&self, device: &str) {
        self.devices.lock().unwrap().remove(device);
        self.filter.lock().unwrap().forget(device);
    }

    /// Decodes one attribute report into a flat output payload.
    ///
    /// Duplicate reports and reports whose fields all lack a resolved factor
    /// yield an empty payload; per-field decode faults are logged and skipped.
    pub fn decode(&self, report: &AttributeReport) -> Result<OutputPayload, MeterError> {
        if !self
            .filter
            .lock()
            .unwrap()
            .accept(&report.device, report.sequence)
        {
            log::debug!(
                "Dropping duplicate report from {} (sequence {:?})",
                report.device,
                report.sequence
            );
            return Ok(OutputPayload::new());
        }

        let entry = self.device_entry(&report.device);
        let mut guard = entry.lock().unwrap();
        let state = &mut *guard;

        let payload = match report.cluster {
            Cluster::Metering => metering::convert(
                report,
                self.store.as_ref(),
                &mut state.cumulative,
                &state.options,
            ),
            Cluster::ElectricalMeasurement => electrical::convert(
                report,
                self.store.as_ref(),
                &state.options,
                state.endpoint_names.get(&report.endpoint).map(String::as_str),
            ),
        };

        log::debug!(
            "Decoded {} values from {} report for {}",
            payload.len(),
            report.cluster.wire_name(),
            report.device
        );
        Ok(payload)
    }

    fn device_entry(&self, device: &str) -> Arc<Mutex<DeviceState>> {
        let mut devices = self.devices.lock().unwrap();
        devices
            .entry(device.to_string())
            .or_insert_with(|| Arc::new(Mutex::new(DeviceState::default())))
            .clone()
    }
}
