//! Duplicate-report filtering.
//!
//! The transport retransmits reports, and decoding a cumulative counter twice
//! would double-count energy. The filter keeps the last accepted transaction
//! marker per device and rejects a report bearing the same marker again.
//! Markers are monotonically assigned by the transport, so equality against the
//! most recent marker is sufficient. Reports without a marker are always new.

use std::collections::HashMap;

/// Idempotency filter over (device identity, transaction marker) pairs.
#[derive(Debug, Default)]
pub struct DuplicateFilter {
    last_accepted: HashMap<String, u8>,
}

impl DuplicateFilter {
    /// Creates an empty filter.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true and records the marker if this (device, marker) pair has
    /// not been accepted before; false for a duplicate. Pure predicate over
    /// idempotent state, no other side effects.
    ///
    /// Only the most recently accepted marker is compared: an older marker
    /// re-presented after a newer one counts as new. This relies on the
    /// transport assigning markers monotonically and retransmitting only the
    /// latest report.
    pub fn accept(&mut self, device: &str, sequence: Option<u8>) -> bool {
        let Some(sequence) = sequence else {
            return true;
        };

        if self.last_accepted.get(device) == Some(&sequence) {
            return false;
        }

        self.last_accepted.insert(device.to_string(), sequence);
        true
    }

    /// Drops the recorded marker for a device, e.g. when it leaves the network.
    pub fn forget(&mut self, device: &str) {
        self.last_accepted.remove(device);
    }
}
