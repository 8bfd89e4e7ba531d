//! Wide-counter reconstruction.
//!
//! Cumulative energy counters arrive as two 32-bit words forming one 64-bit
//! unsigned integer. Word sequences of the wrong arity, or carrying values
//! outside the 32-bit range, are protocol violations reported as decode errors
//! rather than silently wrapped.

use crate::constants::COUNTER_WORD_COUNT;
use crate::error::MeterError;

/// Combines the two 32-bit words of a cumulative counter into its 64-bit value.
pub fn combine(high: u32, low: u32) -> u64 {
    (u64::from(high) << 32) | u64::from(low)
}

/// Validates a reported word sequence and reconstructs the 64-bit counter.
///
/// `attribute` names the raw field for error reporting only.
pub fn reconstruct(attribute: &str, words: &[u64]) -> Result<u64, MeterError> {
    if words.len() != COUNTER_WORD_COUNT {
        return Err(MeterError::MalformedCounter {
            attribute: attribute.to_string(),
            reason: format!("expected {} words, got {}", COUNTER_WORD_COUNT, words.len()),
        });
    }

    for (index, word) in words.iter().enumerate() {
        if *word > u64::from(u32::MAX) {
            return Err(MeterError::MalformedCounter {
                attribute: attribute.to_string(),
                reason: format!("word {index} out of 32-bit range: {word}"),
            });
        }
    }

    Ok(combine(words[0] as u32, words[1] as u32))
}
