//! Scale-factor resolution from device-reported multiplier/divisor pairs.
//!
//! Multiplier and divisor may arrive out of order relative to the readings they
//! scale: an unresolved factor is a "device not yet calibrated" condition, not
//! an error, and callers skip the affected field instead of emitting a garbage
//! value.

use crate::device::AttributeStore;
use crate::report::quantity::QuantityClass;

/// Resolves the scale factor for a quantity class on the given device endpoint.
///
/// Returns `None` when either component is absent or zero. A present factor is
/// the real-valued ratio `multiplier / divisor`, never an integer division.
pub fn resolve(
    store: &dyn AttributeStore,
    device: &str,
    endpoint: u8,
    class: QuantityClass,
) -> Option<f64> {
    let cluster = class.cluster();

    let multiplier = store
        .get_attribute(device, endpoint, cluster, class.multiplier_attribute())?
        .as_scalar()?;
    let divisor = store
        .get_attribute(device, endpoint, cluster, class.divisor_attribute())?
        .as_scalar()?;

    if multiplier == 0.0 || divisor == 0.0 {
        return None;
    }

    Some(multiplier / divisor)
}
