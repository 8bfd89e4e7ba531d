//! # Attribute Reports and Decoded Payloads
//!
//! Wire-facing data model for the decoder: the immutable [`AttributeReport`]
//! delivered by the transport layer, the per-attribute [`AttributeValue`]
//! shapes, and the flat [`OutputPayload`] a converter emits per report.

pub mod counter;
pub mod quantity;

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

/// The two device clusters this crate understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cluster {
    /// Cumulative energy counters and their multiplier/divisor pair.
    #[serde(rename = "seMetering")]
    Metering,
    /// Instantaneous per-phase and aggregate electrical quantities.
    #[serde(rename = "haElectricalMeasurement")]
    ElectricalMeasurement,
}

impl Cluster {
    /// The cluster name as it appears on the wire.
    pub fn wire_name(&self) -> &'static str {
        match self {
            Cluster::Metering => crate::constants::CLUSTER_METERING,
            Cluster::ElectricalMeasurement => crate::constants::CLUSTER_ELECTRICAL_MEASUREMENT,
        }
    }
}

/// A single reported attribute value.
///
/// Scalar fields carry one numeric value; cumulative counters arrive as an
/// ordered sequence of unsigned 32-bit words. The words are kept as `u64` here
/// so that out-of-range values can be rejected with a decode error instead of
/// silently wrapping during deserialization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AttributeValue {
    Scalar(f64),
    Words(Vec<u64>),
}

impl AttributeValue {
    /// Returns the scalar value, or `None` for a word sequence.
    pub fn as_scalar(&self) -> Option<f64> {
        match self {
            AttributeValue::Scalar(v) => Some(*v),
            AttributeValue::Words(_) => None,
        }
    }

    /// Returns the counter word sequence, or `None` for a scalar.
    pub fn as_words(&self) -> Option<&[u64]> {
        match self {
            AttributeValue::Scalar(_) => None,
            AttributeValue::Words(words) => Some(words),
        }
    }
}

/// One attribute report as delivered by the transport layer.
///
/// Immutable once delivered. `sequence` is the transport-assigned transaction
/// marker used for duplicate detection; reports without a marker are always
/// treated as new.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AttributeReport {
    /// Device identity (e.g. the IEEE address).
    pub device: String,
    /// Source endpoint on the device.
    pub endpoint: u8,
    /// Cluster the report belongs to.
    pub cluster: Cluster,
    /// Transaction marker, monotonically assigned by the transport.
    #[serde(default)]
    pub sequence: Option<u8>,
    /// Reported attribute values, keyed by attribute name.
    pub data: HashMap<String, AttributeValue>,
}

impl AttributeReport {
    /// Creates an empty report for the given device, endpoint and cluster.
    pub fn new(device: &str, endpoint: u8, cluster: Cluster) -> Self {
        AttributeReport {
            device: device.to_string(),
            endpoint,
            cluster,
            sequence: None,
            data: HashMap::new(),
        }
    }

    /// Sets the transaction marker.
    pub fn with_sequence(mut self, sequence: u8) -> Self {
        self.sequence = Some(sequence);
        self
    }

    /// Adds a scalar attribute value.
    pub fn with_scalar(mut self, attribute: &str, value: f64) -> Self {
        self.data
            .insert(attribute.to_string(), AttributeValue::Scalar(value));
        self
    }

    /// Adds a wide-counter word sequence.
    pub fn with_words(mut self, attribute: &str, words: Vec<u64>) -> Self {
        self.data
            .insert(attribute.to_string(), AttributeValue::Words(words));
        self
    }

    /// Looks up a reported attribute by name.
    pub fn get(&self, attribute: &str) -> Option<&AttributeValue> {
        self.data.get(attribute)
    }

    /// Returns true if the report carries the named attribute.
    pub fn has(&self, attribute: &str) -> bool {
        self.data.contains_key(attribute)
    }
}

/// A decoded output value: numeric for measurements, text for the alarm mask.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OutputValue {
    Numeric(f64),
    Text(String),
}

/// The per-report decode result: output quantity name to final value.
///
/// Transient; constructed and discarded per report. Serializes to a flat JSON
/// object with deterministic key order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OutputPayload {
    values: BTreeMap<String, OutputValue>,
}

impl OutputPayload {
    /// Creates an empty payload.
    pub fn new() -> Self {
        Self::default()
    }

    /// Writes a numeric quantity into the payload.
    pub fn insert_numeric(&mut self, name: &str, value: f64) {
        self.values
            .insert(name.to_string(), OutputValue::Numeric(value));
    }

    /// Writes a textual quantity into the payload.
    pub fn insert_text(&mut self, name: &str, value: String) {
        self.values.insert(name.to_string(), OutputValue::Text(value));
    }

    /// Looks up an emitted value by output name.
    pub fn get(&self, name: &str) -> Option<&OutputValue> {
        self.values.get(name)
    }

    /// Returns the numeric value for `name`, if present and numeric.
    pub fn numeric(&self, name: &str) -> Option<f64> {
        match self.values.get(name) {
            Some(OutputValue::Numeric(v)) => Some(*v),
            _ => None,
        }
    }

    /// Returns true if the payload carries no values.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Number of emitted values.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Iterates emitted (name, value) pairs in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &OutputValue)> {
        self.values.iter()
    }

    /// Merges another payload into this one, overwriting on collision.
    pub fn extend(&mut self, other: OutputPayload) {
        self.values.extend(other.values);
    }
}
