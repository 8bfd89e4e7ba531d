//! # Report Converters
//!
//! One converter per cluster: [`metering`] decodes the cumulative energy
//! counters with cross-report carry-over, [`electrical`] decodes the table of
//! instantaneous quantities plus the power-factor and alarm-mask specials.
//!
//! Per-field failures are isolated everywhere: a malformed field is logged and
//! omitted, and decoding of the remaining fields in the same report continues.

pub mod electrical;
pub mod metering;

use crate::error::MeterError;
use crate::report::{AttributeReport, AttributeValue};

/// Reads a scalar attribute from a report, logging and skipping non-scalar shapes.
pub(crate) fn scalar_field(report: &AttributeReport, attribute: &str) -> Option<f64> {
    match report.get(attribute) {
        Some(AttributeValue::Scalar(value)) => Some(*value),
        Some(AttributeValue::Words(_)) => {
            let err = MeterError::UnexpectedValueType {
                attribute: attribute.to_string(),
                expected: "scalar",
            };
            log::warn!("Skipping field from {}: {err}", report.device);
            None
        }
        None => None,
    }
}
