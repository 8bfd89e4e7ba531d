//! # Calibration and Precision Pipeline
//!
//! Every emitted numeric field passes through this pipeline: an optional
//! user-configured calibration (percentual or absolute) followed by rounding to
//! a configured number of decimal digits. Calibration always runs before
//! rounding; reversing the order changes results.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// User-configured calibration mode for one output quantity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CalibrationMode {
    /// `value * (1 + calibration / 100)`
    Percentual,
    /// `value + calibration`
    Absolute,
}

/// Calibration and precision settings for one output quantity.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct QuantityOptions {
    /// Calibration mode, or `None` for identity.
    #[serde(default)]
    pub calibration: Option<CalibrationMode>,
    /// Calibration value (percent or additive offset depending on mode).
    #[serde(default)]
    pub calibration_value: f64,
    /// Decimal digits to round to, or `None` to pass through unrounded.
    #[serde(default)]
    pub precision: Option<u32>,
}

/// Per-device calibration options, keyed by output quantity name.
///
/// Absent entries fall back to identity calibration and the field's default
/// precision.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CalibrationOptions {
    entries: HashMap<String, QuantityOptions>,
}

impl CalibrationOptions {
    /// Creates empty options (identity calibration everywhere).
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a percentual calibration for a quantity.
    pub fn with_percentual(mut self, name: &str, percent: f64) -> Self {
        let entry = self.entries.entry(name.to_string()).or_default();
        entry.calibration = Some(CalibrationMode::Percentual);
        entry.calibration_value = percent;
        self
    }

    /// Sets an absolute calibration for a quantity.
    pub fn with_absolute(mut self, name: &str, offset: f64) -> Self {
        let entry = self.entries.entry(name.to_string()).or_default();
        entry.calibration = Some(CalibrationMode::Absolute);
        entry.calibration_value = offset;
        self
    }

    /// Sets the rounding precision for a quantity.
    pub fn with_precision(mut self, name: &str, digits: u32) -> Self {
        self.entries.entry(name.to_string()).or_default().precision = Some(digits);
        self
    }

    /// Returns the configured options for a quantity, if any.
    pub fn get(&self, name: &str) -> Option<&QuantityOptions> {
        self.entries.get(name)
    }

    /// Runs a raw value through calibration and rounding for `name`.
    ///
    /// An unconfigured quantity passes through unchanged.
    pub fn apply(&self, name: &str, raw: f64) -> f64 {
        let Some(entry) = self.entries.get(name) else {
            return raw;
        };

        let calibrated = match entry.calibration {
            Some(CalibrationMode::Percentual) => raw * (1.0 + entry.calibration_value / 100.0),
            Some(CalibrationMode::Absolute) => raw + entry.calibration_value,
            None => raw,
        };

        match entry.precision {
            Some(digits) => round_to_digits(calibrated, digits),
            None => calibrated,
        }
    }
}

/// Rounds to `digits` decimal digits, half away from zero.
pub fn round_to_digits(value: f64, digits: u32) -> f64 {
    let scale = 10f64.powi(digits as i32);
    (value * scale).round() / scale
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_half_away_from_zero() {
        assert_eq!(round_to_digits(0.875, 2), 0.88);
        assert_eq!(round_to_digits(-0.875, 2), -0.88);
        assert_eq!(round_to_digits(2.5, 0), 3.0);
        assert_eq!(round_to_digits(230.04, 1), 230.0);
    }

    #[test]
    fn test_identity_when_unconfigured() {
        let options = CalibrationOptions::new();
        assert_eq!(options.apply("voltage", 230.04), 230.04);
        assert_eq!(options.apply("power_factor", 0.8712), 0.8712);
    }

    #[test]
    fn test_percentual_calibration() {
        let options = CalibrationOptions::new().with_percentual("power", 10.0);
        assert!((options.apply("power", 100.0) - 110.0).abs() < 1e-9);

        let options = CalibrationOptions::new().with_percentual("power", -50.0);
        assert_eq!(options.apply("power", 100.0), 50.0);
    }

    #[test]
    fn test_absolute_calibration() {
        let options = CalibrationOptions::new().with_absolute("voltage", -1.5);
        assert_eq!(options.apply("voltage", 231.5), 230.0);
    }

    #[test]
    fn test_calibrate_then_round_order() {
        // round(0.444 * 2.0, 2) = 0.89 -- rounding first would give 0.44 * 2.0 = 0.88
        let options = CalibrationOptions::new()
            .with_percentual("power", 100.0)
            .with_precision("power", 2);
        assert_eq!(options.apply("power", 0.444), 0.89);
    }

    #[test]
    fn test_configured_precision_rounds() {
        let options = CalibrationOptions::new().with_precision("ac_frequency", 0);
        assert_eq!(options.apply("ac_frequency", 49.98), 50.0);
        // precision entries for other quantities do not leak
        assert_eq!(options.apply("voltage", 230.04), 230.04);
    }

    #[test]
    fn test_options_deserialize() {
        let json = r#"{"power_phase_a": {"calibration": "percentual", "calibration_value": 2.0, "precision": 1}}"#;
        let options: CalibrationOptions = serde_json::from_str(json).unwrap();
        assert_eq!(options.apply("power_phase_a", 100.0), 102.0);
    }
}
