//! Static mapping from raw attribute identifiers to named physical quantities.
//!
//! The [`ELECTRICAL_QUANTITIES`] table is the single source of truth for which
//! instantaneous fields the Electrical Measurement converter understands; the
//! two cumulative energy counters are declared separately because they follow
//! the wide-counter encoding.

use crate::report::Cluster;
use serde::{Deserialize, Serialize};

/// Category of measurement sharing one device-reported scale factor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum QuantityClass {
    Power,
    Current,
    Voltage,
    Frequency,
    Energy,
}

impl QuantityClass {
    /// Cluster whose attribute store holds this class's multiplier/divisor pair.
    pub fn cluster(&self) -> Cluster {
        match self {
            QuantityClass::Energy => Cluster::Metering,
            _ => Cluster::ElectricalMeasurement,
        }
    }

    /// Attribute name of the multiplier for this class.
    pub fn multiplier_attribute(&self) -> &'static str {
        match self {
            QuantityClass::Power => "acPowerMultiplier",
            QuantityClass::Current => "acCurrentMultiplier",
            QuantityClass::Voltage => "acVoltageMultiplier",
            QuantityClass::Frequency => "acFrequencyMultiplier",
            QuantityClass::Energy => crate::constants::ATTR_METERING_MULTIPLIER,
        }
    }

    /// Attribute name of the divisor for this class.
    pub fn divisor_attribute(&self) -> &'static str {
        match self {
            QuantityClass::Power => "acPowerDivisor",
            QuantityClass::Current => "acCurrentDivisor",
            QuantityClass::Voltage => "acVoltageDivisor",
            QuantityClass::Frequency => "acFrequencyDivisor",
            QuantityClass::Energy => crate::constants::ATTR_METERING_DIVISOR,
        }
    }
}

/// One table entry mapping a raw attribute to an output quantity.
#[derive(Debug, Clone, Copy)]
pub struct QuantitySpec {
    /// Raw attribute identifier as reported by the device.
    pub attribute: &'static str,
    /// Output quantity name, before endpoint disambiguation.
    pub name: &'static str,
    /// Class whose scale factor applies to the raw value.
    pub class: QuantityClass,
}

/// Instantaneous electrical quantities, per phase and aggregate.
pub static ELECTRICAL_QUANTITIES: &[QuantitySpec] = &[
    QuantitySpec { attribute: "activePower", name: "power_phase_a", class: QuantityClass::Power },
    QuantitySpec { attribute: "activePowerPhB", name: "power_phase_b", class: QuantityClass::Power },
    QuantitySpec { attribute: "activePowerPhC", name: "power_phase_c", class: QuantityClass::Power },
    QuantitySpec { attribute: "totalActivePower", name: "power", class: QuantityClass::Power },
    QuantitySpec { attribute: "apparentPower", name: "power_apparent_phase_a", class: QuantityClass::Power },
    QuantitySpec { attribute: "apparentPowerPhB", name: "power_apparent_phase_b", class: QuantityClass::Power },
    QuantitySpec { attribute: "apparentPowerPhC", name: "power_apparent_phase_c", class: QuantityClass::Power },
    QuantitySpec { attribute: "totalApparentPower", name: "power_apparent", class: QuantityClass::Power },
    QuantitySpec { attribute: "reactivePower", name: "power_reactive_phase_a", class: QuantityClass::Power },
    QuantitySpec { attribute: "reactivePowerPhB", name: "power_reactive_phase_b", class: QuantityClass::Power },
    QuantitySpec { attribute: "reactivePowerPhC", name: "power_reactive_phase_c", class: QuantityClass::Power },
    QuantitySpec { attribute: "totalReactivePower", name: "power_reactive", class: QuantityClass::Power },
    QuantitySpec { attribute: "rmsCurrent", name: "current", class: QuantityClass::Current },
    QuantitySpec { attribute: "rmsCurrentPhB", name: "current_phase_b", class: QuantityClass::Current },
    QuantitySpec { attribute: "rmsCurrentPhC", name: "current_phase_c", class: QuantityClass::Current },
    QuantitySpec { attribute: "rmsVoltage", name: "voltage", class: QuantityClass::Voltage },
    QuantitySpec { attribute: "rmsVoltagePhB", name: "voltage_phase_b", class: QuantityClass::Voltage },
    QuantitySpec { attribute: "rmsVoltagePhC", name: "voltage_phase_c", class: QuantityClass::Voltage },
    QuantitySpec { attribute: "acFrequency", name: "ac_frequency", class: QuantityClass::Frequency },
];

/// Cumulative energy counters on the Metering cluster (wide-counter encoding).
pub static METERING_COUNTERS: &[QuantitySpec] = &[
    QuantitySpec {
        attribute: crate::constants::ATTR_CURRENT_SUMM_DELIVERED,
        name: "energy",
        class: QuantityClass::Energy,
    },
    QuantitySpec {
        attribute: crate::constants::ATTR_CURRENT_SUMM_RECEIVED,
        name: "produced_energy",
        class: QuantityClass::Energy,
    },
];
