//! # Device-Facing Interfaces
//!
//! The decoder consumes per-endpoint attribute storage and a report transport
//! from the host environment; both are expressed as traits here so hosts and
//! tests can plug in their own implementations. The module also carries the
//! one-time device configuration step that subscribes to report delivery and
//! primes the multiplier/divisor caches.

use crate::constants::{
    ATTR_METERING_DIVISOR, ATTR_METERING_MULTIPLIER, CLUSTER_ELECTRICAL_MEASUREMENT,
    CLUSTER_METERING,
};
use crate::error::MeterError;
use crate::report::quantity::QuantityClass;
use crate::report::{AttributeValue, Cluster};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;

/// Read access to previously cached device attributes.
///
/// The decode path only ever reads through this trait; attribute writes are the
/// transport layer's business.
pub trait AttributeStore: Send + Sync {
    /// Reads a cached attribute, or `None` if the device has not reported it yet.
    fn get_attribute(
        &self,
        device: &str,
        endpoint: u8,
        cluster: Cluster,
        attribute: &str,
    ) -> Option<AttributeValue>;
}

/// In-memory attribute store for hosts without their own cache, and for tests.
#[derive(Default)]
pub struct InMemoryAttributeStore {
    inner: Mutex<HashMap<(String, u8, Cluster, String), AttributeValue>>,
}

impl InMemoryAttributeStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Caches an attribute value for a device endpoint.
    pub fn set_attribute(
        &self,
        device: &str,
        endpoint: u8,
        cluster: Cluster,
        attribute: &str,
        value: AttributeValue,
    ) {
        self.inner.lock().unwrap().insert(
            (device.to_string(), endpoint, cluster, attribute.to_string()),
            value,
        );
    }

    /// Convenience for priming scalar attributes such as multiplier/divisor pairs.
    pub fn set_scalar(&self, device: &str, endpoint: u8, cluster: Cluster, attribute: &str, value: f64) {
        self.set_attribute(device, endpoint, cluster, attribute, AttributeValue::Scalar(value));
    }
}

impl AttributeStore for InMemoryAttributeStore {
    fn get_attribute(
        &self,
        device: &str,
        endpoint: u8,
        cluster: Cluster,
        attribute: &str,
    ) -> Option<AttributeValue> {
        self.inner
            .lock()
            .unwrap()
            .get(&(device.to_string(), endpoint, cluster, attribute.to_string()))
            .cloned()
    }
}

/// Transport-side operations needed for one-time device setup.
///
/// All calls are fire-and-forget configuration, never part of the hot decode
/// path. Hosts map these onto their session layer.
#[async_trait]
pub trait MeterTransport: Send + Sync {
    /// Subscribes the coordinator to attribute reports for the given clusters.
    async fn bind_reporting(
        &self,
        device: &str,
        endpoint: u8,
        clusters: &[Cluster],
    ) -> Result<(), MeterError>;

    /// Requests a read of the named attributes so their values land in the cache.
    async fn read_attributes(
        &self,
        device: &str,
        endpoint: u8,
        cluster: Cluster,
        attributes: &[&str],
    ) -> Result<(), MeterError>;

    /// Writes attribute values into the local cache without touching the device.
    async fn save_attributes(
        &self,
        device: &str,
        endpoint: u8,
        cluster: Cluster,
        values: &[(&str, AttributeValue)],
    ) -> Result<(), MeterError>;
}

/// One-time configuration for a freshly joined meter.
///
/// Binds reporting for both clusters and primes every multiplier/divisor pair
/// the converters will later resolve. The power pair is not device-reported on
/// these meters and is saved locally as 1/1.
pub async fn configure_device(
    transport: &dyn MeterTransport,
    device: &str,
    endpoint: u8,
) -> Result<(), MeterError> {
    log::info!("Configuring meter {device} endpoint {endpoint}");

    transport
        .bind_reporting(
            device,
            endpoint,
            &[Cluster::ElectricalMeasurement, Cluster::Metering],
        )
        .await?;

    transport
        .read_attributes(
            device,
            endpoint,
            Cluster::Metering,
            &[ATTR_METERING_MULTIPLIER, ATTR_METERING_DIVISOR],
        )
        .await?;

    for class in [
        QuantityClass::Voltage,
        QuantityClass::Current,
        QuantityClass::Frequency,
    ] {
        transport
            .read_attributes(
                device,
                endpoint,
                Cluster::ElectricalMeasurement,
                &[class.multiplier_attribute(), class.divisor_attribute()],
            )
            .await?;
    }

    transport
        .save_attributes(
            device,
            endpoint,
            Cluster::ElectricalMeasurement,
            &[
                (
                    QuantityClass::Power.multiplier_attribute(),
                    AttributeValue::Scalar(1.0),
                ),
                (
                    QuantityClass::Power.divisor_attribute(),
                    AttributeValue::Scalar(1.0),
                ),
            ],
        )
        .await?;

    log::debug!(
        "Meter {device} bound to {CLUSTER_ELECTRICAL_MEASUREMENT}/{CLUSTER_METERING} and factor caches primed"
    );
    Ok(())
}
