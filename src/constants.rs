//! Protocol-level identifiers and fixed conventions shared across the crate.

/// Wire name of the Metering cluster carrying the cumulative energy counters.
pub const CLUSTER_METERING: &str = "seMetering";

/// Wire name of the Electrical Measurement cluster carrying instantaneous readings.
pub const CLUSTER_ELECTRICAL_MEASUREMENT: &str = "haElectricalMeasurement";

/// Cumulative counter of energy delivered to the premises (two 32-bit words).
pub const ATTR_CURRENT_SUMM_DELIVERED: &str = "currentSummDelivered";

/// Cumulative counter of energy received from the premises (two 32-bit words).
pub const ATTR_CURRENT_SUMM_RECEIVED: &str = "currentSummReceived";

/// Metering cluster scale-factor pair.
pub const ATTR_METERING_MULTIPLIER: &str = "multiplier";
pub const ATTR_METERING_DIVISOR: &str = "divisor";

/// AC alarms bitmask, emitted verbatim as a binary-digit string.
pub const ATTR_AC_ALARMS_MASK: &str = "ACAlarmsMask";

/// Power-factor attributes for phases A, B and C.
pub const ATTR_POWER_FACTOR: &str = "powerFactor";
pub const ATTR_POWER_FACTOR_PH_B: &str = "powerFactorPhB";
pub const ATTR_POWER_FACTOR_PH_C: &str = "powerFactorPhC";

/// Power-factor fields use a fixed-point convention: the device reports the
/// ratio multiplied by this scale, independent of any multiplier/divisor pair.
pub const POWER_FACTOR_SCALE: f64 = 100.0;

/// Decimal digits applied to power-factor style ratios.
pub const RATIO_PRECISION: u32 = 2;

/// Number of 32-bit words forming one cumulative counter.
pub const COUNTER_WORD_COUNT: usize = 2;
