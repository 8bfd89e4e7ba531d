//! # Metering Converter
//!
//! Decodes the two cumulative energy counters (`currentSummDelivered`,
//! `currentSummReceived`) into `energy` and `produced_energy`. Devices report
//! the counters independently and not necessarily together, so the last known
//! value of the counter absent from a report is carried forward; a counter
//! never seen is omitted entirely rather than emitted as a synthetic zero.

use crate::calibrate::CalibrationOptions;
use crate::constants::ATTR_CURRENT_SUMM_DELIVERED;
use crate::device::AttributeStore;
use crate::error::MeterError;
use crate::factor;
use crate::report::counter;
use crate::report::quantity::{QuantityClass, METERING_COUNTERS};
use crate::report::{AttributeReport, OutputPayload};

/// Last successfully computed value of each cumulative counter, per device.
///
/// The one piece of cross-report memory in the decoder. Scoped per device
/// identity by the owning manager, never process-global.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct CumulativeState {
    /// Scaled value of the delivered-energy counter, if ever decoded.
    pub delivered: Option<f64>,
    /// Scaled value of the received-energy counter, if ever decoded.
    pub received: Option<f64>,
}

impl CumulativeState {
    fn slot(&self, attribute: &str) -> Option<f64> {
        if attribute == ATTR_CURRENT_SUMM_DELIVERED {
            self.delivered
        } else {
            self.received
        }
    }

    fn slot_mut(&mut self, attribute: &str) -> &mut Option<f64> {
        if attribute == ATTR_CURRENT_SUMM_DELIVERED {
            &mut self.delivered
        } else {
            &mut self.received
        }
    }
}

/// Decodes one Metering-cluster report.
///
/// Driven by the [`METERING_COUNTERS`] table. When the energy-class factor is
/// unresolved the whole conversion is skipped and nothing is emitted,
/// including carried-over values.
pub fn convert(
    report: &AttributeReport,
    store: &dyn AttributeStore,
    state: &mut CumulativeState,
    options: &CalibrationOptions,
) -> OutputPayload {
    let mut payload = OutputPayload::new();

    if !METERING_COUNTERS
        .iter()
        .any(|spec| report.has(spec.attribute))
    {
        return payload;
    }

    let Some(factor) = factor::resolve(store, &report.device, report.endpoint, QuantityClass::Energy)
    else {
        log::debug!(
            "Energy factor unresolved for {}, skipping metering report",
            report.device
        );
        return payload;
    };

    for spec in METERING_COUNTERS {
        match decode_counter(report, spec.attribute, factor) {
            Ok(Some(value)) => *state.slot_mut(spec.attribute) = Some(value),
            Ok(None) => {}
            Err(err) => log::warn!(
                "Failed to decode '{}' from {}: {err}",
                spec.attribute,
                report.device
            ),
        }
    }

    for spec in METERING_COUNTERS {
        if let Some(value) = state.slot(spec.attribute) {
            payload.insert_numeric(spec.name, options.apply(spec.name, value));
        }
    }

    payload
}

/// Reconstructs and scales one wide counter from the report.
///
/// `Ok(None)` when the counter is absent; a malformed encoding is an error for
/// the caller to log and skip without touching carry-over state.
fn decode_counter(
    report: &AttributeReport,
    attribute: &str,
    factor: f64,
) -> Result<Option<f64>, MeterError> {
    let Some(value) = report.get(attribute) else {
        return Ok(None);
    };

    let words = value
        .as_words()
        .ok_or_else(|| MeterError::UnexpectedValueType {
            attribute: attribute.to_string(),
            expected: "counter word sequence",
        })?;

    let raw = counter::reconstruct(attribute, words)?;
    Ok(Some(raw as f64 * factor))
}
