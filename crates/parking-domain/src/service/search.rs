//! Lookup by ticket ID

use crate::model::Vehicle;

/// Scan in current order and return the first record with `id`
pub fn linear_search(vehicles: &[Vehicle], id: u32) -> Option<&Vehicle> {
    vehicles.iter().find(|v| v.id == id)
}

/// Binary search over records in ascending ID order
///
/// The caller guarantees the ordering; on unsorted input the result is
/// unspecified (but never panics).
pub fn binary_search(vehicles: &[Vehicle], id: u32) -> Option<&Vehicle> {
    let mut low = 0;
    let mut high = vehicles.len();

    while low < high {
        let mid = low + (high - low) / 2;
        let candidate = &vehicles[mid];
        if candidate.id == id {
            return Some(candidate);
        }
        if candidate.id < id {
            low = mid + 1;
        } else {
            high = mid;
        }
    }

    None
}
