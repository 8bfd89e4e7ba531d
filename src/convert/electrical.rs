//! # Electrical Measurement Converter
//!
//! Iterates the static quantity table for the instantaneous per-phase and
//! aggregate readings, then handles the two field families that sit outside
//! the table: the AC alarms mask (emitted as a binary-digit string, unscaled
//! and uncalibrated) and the power-factor trio (fixed /100 convention, rounded
//! to two digits regardless of configuration).

use crate::calibrate::{round_to_digits, CalibrationOptions};
use crate::constants::{
    ATTR_AC_ALARMS_MASK, ATTR_POWER_FACTOR, ATTR_POWER_FACTOR_PH_B, ATTR_POWER_FACTOR_PH_C,
    POWER_FACTOR_SCALE, RATIO_PRECISION,
};
use crate::convert::scalar_field;
use crate::device::AttributeStore;
use crate::factor;
use crate::report::quantity::ELECTRICAL_QUANTITIES;
use crate::report::{AttributeReport, OutputPayload};
use bitflags::bitflags;

bitflags! {
    /// Known bits of the AC alarms mask.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct AcAlarmMask: u32 {
        const VOLTAGE_OVERLOAD = 0b001;
        const CURRENT_OVERLOAD = 0b010;
        const POWER_OVERLOAD = 0b100;
    }
}

/// Power-factor fields, fixed-point and exempt from factor lookup.
static POWER_FACTOR_FIELDS: &[(&str, &str)] = &[
    (ATTR_POWER_FACTOR, "power_factor"),
    (ATTR_POWER_FACTOR_PH_B, "power_factor_phase_b"),
    (ATTR_POWER_FACTOR_PH_C, "power_factor_phase_c"),
];

/// Decodes one Electrical Measurement report.
///
/// `endpoint_suffix` disambiguates output names when the device exposes the
/// same quantity on multiple logical endpoints; calibration options stay keyed
/// by the undisambiguated quantity name.
pub fn convert(
    report: &AttributeReport,
    store: &dyn AttributeStore,
    options: &CalibrationOptions,
    endpoint_suffix: Option<&str>,
) -> OutputPayload {
    let mut payload = OutputPayload::new();

    for spec in ELECTRICAL_QUANTITIES {
        let Some(raw) = scalar_field(report, spec.attribute) else {
            continue;
        };

        let Some(factor) = factor::resolve(store, &report.device, report.endpoint, spec.class)
        else {
            log::debug!(
                "{:?} factor unresolved for {}, skipping '{}'",
                spec.class,
                report.device,
                spec.attribute
            );
            continue;
        };

        let value = options.apply(spec.name, raw * factor);
        let property = match endpoint_suffix {
            Some(suffix) => format!("{}_{suffix}", spec.name),
            None => spec.name.to_string(),
        };
        payload.insert_numeric(&property, value);
    }

    if let Some(mask) = scalar_field(report, ATTR_AC_ALARMS_MASK) {
        let bits = mask as u32;
        let alarms = AcAlarmMask::from_bits_truncate(bits);
        if !alarms.is_empty() {
            log::warn!("Device {} raised AC alarms: {alarms:?}", report.device);
        }
        payload.insert_text("Alarm", format!("{bits:b}"));
    }

    for (attribute, name) in POWER_FACTOR_FIELDS {
        if let Some(raw) = scalar_field(report, attribute) {
            payload.insert_numeric(name, round_to_digits(raw / POWER_FACTOR_SCALE, RATIO_PRECISION));
        }
    }

    payload
}
