//! Converter-level tests: cumulative carry-over, per-field fault isolation,
//! factor-gated emission and endpoint disambiguation.

use std::sync::Arc;
use zcl_meter_rs::{
    AttributeReport, CalibrationOptions, Cluster, InMemoryAttributeStore, MeterDeviceManager,
};

fn metering_store(device: &str, multiplier: f64, divisor: f64) -> Arc<InMemoryAttributeStore> {
    let store = Arc::new(InMemoryAttributeStore::new());
    store.set_scalar(device, 1, Cluster::Metering, "multiplier", multiplier);
    store.set_scalar(device, 1, Cluster::Metering, "divisor", divisor);
    store
}

#[test]
fn carry_over_keeps_last_known_counter() {
    let manager = MeterDeviceManager::new(metering_store("dev", 1.0, 100.0));

    // delivered counter first: 1000 * 0.01 = 10.0
    let report = AttributeReport::new("dev", 1, Cluster::Metering)
        .with_words("currentSummDelivered", vec![0, 1000]);
    let payload = manager.decode(&report).unwrap();
    assert_eq!(payload.numeric("energy"), Some(10.0));
    assert!(payload.get("produced_energy").is_none());

    // received-only report: energy carried forward, not dropped to zero
    let report = AttributeReport::new("dev", 1, Cluster::Metering)
        .with_words("currentSummReceived", vec![0, 500]);
    let payload = manager.decode(&report).unwrap();
    assert_eq!(payload.numeric("produced_energy"), Some(5.0));
    assert_eq!(payload.numeric("energy"), Some(10.0));
}

#[test]
fn counter_never_seen_is_omitted_not_zero() {
    let manager = MeterDeviceManager::new(metering_store("dev", 1.0, 100.0));

    let report = AttributeReport::new("dev", 1, Cluster::Metering)
        .with_words("currentSummReceived", vec![0, 500]);
    let payload = manager.decode(&report).unwrap();

    assert_eq!(payload.numeric("produced_energy"), Some(5.0));
    assert!(payload.get("energy").is_none());
}

#[test]
fn unresolved_energy_factor_skips_whole_conversion() {
    let store = Arc::new(InMemoryAttributeStore::new());
    store.set_scalar("dev", 1, Cluster::Metering, "multiplier", 1.0);
    // divisor never reported
    let manager = MeterDeviceManager::new(store);

    let report = AttributeReport::new("dev", 1, Cluster::Metering)
        .with_words("currentSummDelivered", vec![0, 1000]);
    assert!(manager.decode(&report).unwrap().is_empty());
    // nothing was committed to carry-over state either
    assert_eq!(manager.cumulative_state("dev").delivered, None);
}

#[test]
fn zero_divisor_means_unresolved() {
    let manager = MeterDeviceManager::new(metering_store("dev", 1.0, 0.0));
    let report = AttributeReport::new("dev", 1, Cluster::Metering)
        .with_words("currentSummDelivered", vec![0, 1000]);
    assert!(manager.decode(&report).unwrap().is_empty());
}

#[test]
fn malformed_counter_is_isolated_from_other_fields() {
    let manager = MeterDeviceManager::new(metering_store("dev", 1.0, 100.0));

    // delivered words malformed (three words), received fine
    let report = AttributeReport::new("dev", 1, Cluster::Metering)
        .with_words("currentSummDelivered", vec![1, 2, 3])
        .with_words("currentSummReceived", vec![0, 500]);
    let payload = manager.decode(&report).unwrap();

    assert_eq!(payload.numeric("produced_energy"), Some(5.0));
    assert!(payload.get("energy").is_none());
    assert_eq!(manager.cumulative_state("dev").delivered, None);
}

#[test]
fn counter_with_scalar_shape_is_rejected() {
    let manager = MeterDeviceManager::new(metering_store("dev", 1.0, 100.0));

    let report = AttributeReport::new("dev", 1, Cluster::Metering)
        .with_scalar("currentSummDelivered", 1000.0);
    assert!(manager.decode(&report).unwrap().is_empty());
    assert_eq!(manager.cumulative_state("dev").delivered, None);
}

#[test]
fn counter_word_out_of_range_is_rejected() {
    let manager = MeterDeviceManager::new(metering_store("dev", 1.0, 1.0));

    let report = AttributeReport::new("dev", 1, Cluster::Metering)
        .with_words("currentSummDelivered", vec![u64::from(u32::MAX) + 1, 0]);
    assert!(manager.decode(&report).unwrap().is_empty());
}

#[test]
fn high_word_contributes_upper_bits() {
    let manager = MeterDeviceManager::new(metering_store("dev", 1.0, 1.0));

    let report = AttributeReport::new("dev", 1, Cluster::Metering)
        .with_words("currentSummDelivered", vec![1, 0]);
    let payload = manager.decode(&report).unwrap();
    assert_eq!(payload.numeric("energy"), Some((1u64 << 32) as f64));
}

#[test]
fn electrical_fields_skip_when_class_factor_unresolved() {
    let store = Arc::new(InMemoryAttributeStore::new());
    store.set_scalar("dev", 1, Cluster::ElectricalMeasurement, "acVoltageMultiplier", 1.0);
    store.set_scalar("dev", 1, Cluster::ElectricalMeasurement, "acVoltageDivisor", 10.0);
    // no current factor pair
    let manager = MeterDeviceManager::new(store);

    let report = AttributeReport::new("dev", 1, Cluster::ElectricalMeasurement)
        .with_scalar("rmsVoltage", 2300.0)
        .with_scalar("rmsCurrent", 1500.0);
    let payload = manager.decode(&report).unwrap();

    assert_eq!(payload.numeric("voltage"), Some(230.0));
    assert!(payload.get("current").is_none());
}

#[test]
fn endpoint_name_disambiguates_output() {
    let store = Arc::new(InMemoryAttributeStore::new());
    store.set_scalar("dev", 2, Cluster::ElectricalMeasurement, "acVoltageMultiplier", 1.0);
    store.set_scalar("dev", 2, Cluster::ElectricalMeasurement, "acVoltageDivisor", 10.0);
    let manager = MeterDeviceManager::new(store);
    manager.set_endpoint_name("dev", 2, "l2");

    let report = AttributeReport::new("dev", 2, Cluster::ElectricalMeasurement)
        .with_scalar("rmsVoltage", 2300.0);
    let payload = manager.decode(&report).unwrap();

    assert_eq!(payload.numeric("voltage_l2"), Some(230.0));
    assert!(payload.get("voltage").is_none());
}

#[test]
fn calibration_is_keyed_by_base_quantity_name() {
    let store = Arc::new(InMemoryAttributeStore::new());
    store.set_scalar("dev", 2, Cluster::ElectricalMeasurement, "acVoltageMultiplier", 1.0);
    store.set_scalar("dev", 2, Cluster::ElectricalMeasurement, "acVoltageDivisor", 10.0);
    let manager = MeterDeviceManager::new(store);
    manager.set_endpoint_name("dev", 2, "l2");
    manager.set_calibration_options("dev", CalibrationOptions::new().with_absolute("voltage", -5.0));

    let report = AttributeReport::new("dev", 2, Cluster::ElectricalMeasurement)
        .with_scalar("rmsVoltage", 2300.0);
    let payload = manager.decode(&report).unwrap();

    // calibration entry for "voltage" applies to the disambiguated property
    assert_eq!(payload.numeric("voltage_l2"), Some(225.0));
}

#[test]
fn metering_report_without_counters_emits_nothing() {
    let manager = MeterDeviceManager::new(metering_store("dev", 1.0, 100.0));

    // prime a known value first
    let report = AttributeReport::new("dev", 1, Cluster::Metering)
        .with_words("currentSummDelivered", vec![0, 1000]);
    assert!(!manager.decode(&report).unwrap().is_empty());

    // a metering report carrying only other attributes emits no payload
    let report =
        AttributeReport::new("dev", 1, Cluster::Metering).with_scalar("status", 0.0);
    assert!(manager.decode(&report).unwrap().is_empty());
}

#[test]
fn devices_do_not_share_cumulative_state() {
    let store = Arc::new(InMemoryAttributeStore::new());
    for dev in ["dev-a", "dev-b"] {
        store.set_scalar(dev, 1, Cluster::Metering, "multiplier", 1.0);
        store.set_scalar(dev, 1, Cluster::Metering, "divisor", 1.0);
    }
    let manager = MeterDeviceManager::new(store);

    let report = AttributeReport::new("dev-a", 1, Cluster::Metering)
        .with_words("currentSummDelivered", vec![0, 100]);
    manager.decode(&report).unwrap();

    // dev-b reporting only the received counter must not inherit dev-a's energy
    let report = AttributeReport::new("dev-b", 1, Cluster::Metering)
        .with_words("currentSummReceived", vec![0, 50]);
    let payload = manager.decode(&report).unwrap();
    assert!(payload.get("energy").is_none());
    assert_eq!(payload.numeric("produced_energy"), Some(50.0));
}
