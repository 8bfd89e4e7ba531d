//! # Device Capability Declaration
//!
//! Static list of the output quantities a meter model exposes, with units and
//! human labels, plus the rule deciding which calibration/precision options are
//! relevant for a given capability set.

/// One exposed output quantity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Expose {
    /// Output quantity name as it appears in decoded payloads.
    pub name: &'static str,
    /// Unit of the emitted value.
    pub unit: &'static str,
    /// Human-readable label.
    pub label: &'static str,
}

/// Kind of user-configurable option for a quantity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionKind {
    Calibration,
    Precision,
}

/// One relevant option entry: which quantity, which knob.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OptionSpec {
    pub name: &'static str,
    pub kind: OptionKind,
}

/// Quantities exposed by the SPM02-class three-phase monitors (3P+N systems).
pub static SPM02_EXPOSES: &[Expose] = &[
    Expose { name: "power", unit: "W", label: "Power" },
    Expose { name: "power_phase_a", unit: "W", label: "Power phase A" },
    Expose { name: "power_phase_b", unit: "W", label: "Power phase B" },
    Expose { name: "power_phase_c", unit: "W", label: "Power phase C" },
    Expose { name: "power_apparent", unit: "VA", label: "Apparent power" },
    Expose { name: "power_apparent_phase_a", unit: "VA", label: "Apparent power phase A" },
    Expose { name: "power_apparent_phase_b", unit: "VA", label: "Apparent power phase B" },
    Expose { name: "power_apparent_phase_c", unit: "VA", label: "Apparent power phase C" },
    Expose { name: "power_reactive", unit: "VAR", label: "Reactive power" },
    Expose { name: "power_reactive_phase_a", unit: "VAR", label: "Reactive power phase A" },
    Expose { name: "power_reactive_phase_b", unit: "VAR", label: "Reactive power phase B" },
    Expose { name: "power_reactive_phase_c", unit: "VAR", label: "Reactive power phase C" },
    Expose { name: "voltage", unit: "V", label: "Voltage phase A" },
    Expose { name: "voltage_phase_b", unit: "V", label: "Voltage phase B" },
    Expose { name: "voltage_phase_c", unit: "V", label: "Voltage phase C" },
    Expose { name: "current", unit: "A", label: "Current phase A" },
    Expose { name: "current_phase_b", unit: "A", label: "Current phase B" },
    Expose { name: "current_phase_c", unit: "A", label: "Current phase C" },
    Expose { name: "ac_frequency", unit: "Hz", label: "AC frequency" },
    Expose { name: "power_factor", unit: "pf", label: "Power factor phase A" },
    Expose { name: "power_factor_phase_b", unit: "pf", label: "Power factor phase B" },
    Expose { name: "power_factor_phase_c", unit: "pf", label: "Power factor phase C" },
    Expose { name: "energy", unit: "kWh", label: "Energy" },
    Expose { name: "produced_energy", unit: "kWh", label: "Produced energy" },
];

/// Calibration/precision options relevant to the electrical converter.
pub static ELECTRICAL_OPTIONS: &[OptionSpec] = &[
    OptionSpec { name: "ac_frequency", kind: OptionKind::Precision },
    OptionSpec { name: "power_phase_a", kind: OptionKind::Calibration },
    OptionSpec { name: "power_phase_a", kind: OptionKind::Precision },
    OptionSpec { name: "voltage_phase_a", kind: OptionKind::Calibration },
    OptionSpec { name: "voltage_phase_a", kind: OptionKind::Precision },
    OptionSpec { name: "current_phase_a", kind: OptionKind::Calibration },
    OptionSpec { name: "current_phase_a", kind: OptionKind::Precision },
];

/// Options relevant to the metering converter for a given capability set.
///
/// Energy calibration and produced-energy precision only apply when the device
/// actually exposes `produced_energy`.
pub fn metering_options(exposes: &[Expose]) -> Vec<OptionSpec> {
    let mut result = Vec::new();
    if exposes.iter().any(|e| e.name == "produced_energy") {
        result.push(OptionSpec { name: "produced_energy", kind: OptionKind::Precision });
        result.push(OptionSpec { name: "energy", kind: OptionKind::Calibration });
    }
    result
}

/// Looks up an expose by output name.
pub fn lookup(exposes: &[Expose], name: &str) -> Option<Expose> {
    exposes.iter().find(|e| e.name == name).copied()
}
