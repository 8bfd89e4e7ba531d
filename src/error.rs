//! # Meter Decoder Error Handling
//!
//! This module defines the MeterError enum, which represents the different error
//! types that can occur in the zcl-meter-rs crate.

use thiserror::Error;

/// Represents the different error types that can occur while decoding meter reports.
///
/// An unresolved scale factor and a duplicate report are deliberately *not* errors:
/// both are expected states and the affected fields are silently omitted instead.
#[derive(Debug, Error)]
pub enum MeterError {
    /// Indicates a cumulative counter whose word sequence cannot be reconstructed.
    #[error("Malformed wide counter in '{attribute}': {reason}")]
    MalformedCounter { attribute: String, reason: String },

    /// Indicates an attribute value of the wrong shape for its field.
    #[error("Unexpected value type for attribute '{attribute}': expected {expected}")]
    UnexpectedValueType {
        attribute: String,
        expected: &'static str,
    },

    /// Indicates a failure in the transport-facing setup path.
    #[error("Transport error: {0}")]
    TransportError(String),
}
