//! Record ordering algorithms
//!
//! Each sort reorders whole records and never edits a field. Only the ID sort
//! leaves the records in an order binary search can rely on.

use serde::{Deserialize, Serialize};

use crate::model::Vehicle;

/// Field a sort orders by
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    /// Ascending ticket ID (bubble sort)
    Id,
    /// Ascending charge (selection sort)
    Charge,
    /// Ascending duration (insertion sort)
    Duration,
}

impl SortKey {
    /// Name of the algorithm used for this key
    pub fn algorithm(self) -> &'static str {
        match self {
            SortKey::Id => "Bubble Sort",
            SortKey::Charge => "Selection Sort",
            SortKey::Duration => "Insertion Sort",
        }
    }
}

impl std::fmt::Display for SortKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SortKey::Id => write!(f, "ID"),
            SortKey::Charge => write!(f, "Charge"),
            SortKey::Duration => write!(f, "Duration"),
        }
    }
}

/// Adjacent-swap passes by ascending ID until a pass makes no swap
///
/// O(n²) worst case. Returns the number of passes made.
pub fn bubble_sort_by_id(vehicles: &mut [Vehicle]) -> usize {
    let mut end = vehicles.len();
    let mut passes = 0;

    loop {
        passes += 1;
        let mut swapped = false;
        for i in 1..end {
            if vehicles[i - 1].id > vehicles[i].id {
                vehicles.swap(i - 1, i);
                swapped = true;
            }
        }
        if !swapped || end <= 2 {
            break;
        }
        // The largest remaining ID has settled at the end of the window
        end -= 1;
    }

    passes
}

/// Selection sort by ascending charge
///
/// A swap happens only when a strictly smaller charge is found, so among
/// equal minimums the first one encountered is chosen.
pub fn selection_sort_by_charge(vehicles: &mut [Vehicle]) {
    for i in 0..vehicles.len() {
        let mut min = i;
        for j in (i + 1)..vehicles.len() {
            if vehicles[j].charge < vehicles[min].charge {
                min = j;
            }
        }
        if min != i {
            vehicles.swap(i, min);
        }
    }
}

/// Stable insertion sort by ascending duration over a snapshot
///
/// The input is left untouched; the sorted copy is returned for the caller to
/// adopt as the new order.
pub fn insertion_sort_by_duration(vehicles: &[Vehicle]) -> Vec<Vehicle> {
    let mut sorted: Vec<Vehicle> = Vec::with_capacity(vehicles.len());

    for vehicle in vehicles {
        let position = sorted
            .iter()
            .rposition(|placed| placed.duration_hours <= vehicle.duration_hours)
            .map_or(0, |last_not_greater| last_not_greater + 1);
        sorted.insert(position, vehicle.clone());
    }

    sorted
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vehicle(id: u32, vehicle_type: &str, duration_hours: f64) -> Vehicle {
        Vehicle::new(id, format!("P{id}"), vehicle_type, duration_hours).unwrap()
    }

    fn ids(vehicles: &[Vehicle]) -> Vec<u32> {
        vehicles.iter().map(|v| v.id).collect()
    }

    #[test]
    fn test_bubble_sort_orders_ids() {
        let mut list = vec![
            vehicle(5, "car", 1.0),
            vehicle(1, "car", 1.0),
            vehicle(4, "car", 1.0),
            vehicle(2, "car", 1.0),
            vehicle(3, "car", 1.0),
        ];
        bubble_sort_by_id(&mut list);
        assert_eq!(ids(&list), vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_bubble_sort_already_sorted_takes_one_pass() {
        let mut list = vec![vehicle(1, "car", 1.0), vehicle(2, "car", 1.0), vehicle(3, "car", 1.0)];
        assert_eq!(bubble_sort_by_id(&mut list), 1);
        assert_eq!(ids(&list), vec![1, 2, 3]);
    }

    #[test]
    fn test_bubble_sort_handles_empty_and_single() {
        let mut empty: Vec<Vehicle> = Vec::new();
        bubble_sort_by_id(&mut empty);
        assert!(empty.is_empty());

        let mut single = vec![vehicle(9, "car", 1.0)];
        bubble_sort_by_id(&mut single);
        assert_eq!(ids(&single), vec![9]);
    }

    #[test]
    fn test_bubble_sort_moves_whole_records() {
        let mut list = vec![vehicle(2, "truck", 3.0), vehicle(1, "bike", 1.0)];
        bubble_sort_by_id(&mut list);
        assert_eq!(list[0].plate, "P1");
        assert_eq!(list[0].vehicle_type, "bike");
        assert!((list[1].charge - 9.0).abs() < 1e-9);
    }

    #[test]
    fn test_selection_sort_orders_charges() {
        let mut list = vec![
            vehicle(1, "truck", 2.0),
            vehicle(2, "bike", 1.0),
            vehicle(3, "car", 2.0),
            vehicle(4, "bike", 0.5),
        ];
        selection_sort_by_charge(&mut list);
        assert_eq!(ids(&list), vec![4, 2, 3, 1]);
    }

    #[test]
    fn test_selection_sort_picks_first_minimum_on_tie() {
        // 2 and 3 both cost 4.0; 2 comes first in the suffix and is picked first
        let mut list = vec![
            vehicle(1, "truck", 3.0),
            vehicle(2, "car", 2.0),
            vehicle(3, "bike", 4.0),
        ];
        selection_sort_by_charge(&mut list);
        assert_eq!(ids(&list), vec![2, 3, 1]);
    }

    #[test]
    fn test_selection_sort_leaves_tied_prefix_in_place() {
        let mut list = vec![
            vehicle(1, "car", 2.0),
            vehicle(2, "bike", 4.0),
            vehicle(3, "truck", 3.0),
        ];
        selection_sort_by_charge(&mut list);
        assert_eq!(ids(&list), vec![1, 2, 3]);
    }

    #[test]
    fn test_insertion_sort_orders_durations() {
        let list = vec![
            vehicle(1, "car", 3.0),
            vehicle(2, "car", 0.5),
            vehicle(3, "car", 2.25),
            vehicle(4, "car", 1.0),
        ];
        let sorted = insertion_sort_by_duration(&list);
        assert_eq!(ids(&sorted), vec![2, 4, 3, 1]);
    }

    #[test]
    fn test_insertion_sort_is_stable_and_non_destructive() {
        let list = vec![
            vehicle(1, "car", 2.0),
            vehicle(2, "car", 1.0),
            vehicle(3, "bike", 2.0),
            vehicle(4, "truck", 1.0),
        ];
        let sorted = insertion_sort_by_duration(&list);
        assert_eq!(ids(&sorted), vec![2, 4, 1, 3]);
        assert_eq!(ids(&list), vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_insertion_sort_empty() {
        assert!(insertion_sort_by_duration(&[]).is_empty());
    }

    #[test]
    fn test_sort_key_labels() {
        assert_eq!(SortKey::Id.algorithm(), "Bubble Sort");
        assert_eq!(SortKey::Charge.to_string(), "Charge");
    }
}
