//! Vehicle store for parked vehicles

use parking_domain::model::Vehicle;
use parking_domain::service::{
    binary_search, bubble_sort_by_id, insertion_sort_by_duration, linear_search,
    selection_sort_by_charge, SortKey,
};
use parking_types::StoreError;
use tracing::{debug, info, warn};

/// Outcome of merging loaded records into the store
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MergeReport {
    /// Number of records added
    pub added: usize,
    /// IDs that were already present and therefore skipped
    pub duplicate_ids: Vec<u32>,
}

/// Ordered collection of vehicle records
///
/// New records go to the front. `sorted_by_id` is true only while the current
/// order is ascending by ID; it is what makes [`VehicleStore::binary_search`]
/// available.
#[derive(Debug, Default)]
pub struct VehicleStore {
    vehicles: Vec<Vehicle>,
    sorted_by_id: bool,
}

impl VehicleStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// True iff `id` is positive and not used by any record
    pub fn is_unique_id(&self, id: u32) -> bool {
        id > 0 && !self.vehicles.iter().any(|v| v.id == id)
    }

    /// True iff some record already carries `plate`
    pub fn is_plate_duplicate(&self, plate: &str) -> bool {
        self.vehicles.iter().any(|v| v.plate == plate)
    }

    /// Prepend a new vehicle
    ///
    /// A repeated plate is allowed and only logged; a repeated ID is refused.
    pub fn add_vehicle(&mut self, vehicle: Vehicle) -> Result<(), StoreError> {
        if self.linear_search(vehicle.id).is_some() {
            return Err(StoreError::DuplicateId(vehicle.id));
        }
        if self.is_plate_duplicate(&vehicle.plate) {
            debug!(plate = %vehicle.plate, "Plate number already exists");
        }

        info!(id = vehicle.id, charge = vehicle.charge, "Vehicle added");
        self.vehicles.insert(0, vehicle);
        self.sorted_by_id = false;
        Ok(())
    }

    /// Remove the first vehicle with `id`; returns whether one was found
    pub fn remove_vehicle(&mut self, id: u32) -> bool {
        match self.vehicles.iter().position(|v| v.id == id) {
            Some(index) => {
                self.vehicles.remove(index);
                self.sorted_by_id = false;
                info!(id, "Vehicle deleted");
                true
            }
            None => false,
        }
    }

    /// Prepend every record whose ID is not yet present, in iteration order
    ///
    /// The ID-sorted flag is cleared even when nothing was added.
    pub fn merge_vehicles<I>(&mut self, vehicles: I) -> MergeReport
    where
        I: IntoIterator<Item = Vehicle>,
    {
        let mut report = MergeReport::default();
        for vehicle in vehicles {
            if self.is_unique_id(vehicle.id) {
                self.vehicles.insert(0, vehicle);
                report.added += 1;
            } else {
                warn!(id = vehicle.id, "Skipping duplicate ID");
                report.duplicate_ids.push(vehicle.id);
            }
        }
        self.sorted_by_id = false;
        report
    }

    /// Records in current store order
    pub fn as_slice(&self) -> &[Vehicle] {
        &self.vehicles
    }

    /// Snapshot of all records in current store order
    pub fn all_vehicles(&self) -> Vec<Vehicle> {
        self.vehicles.clone()
    }

    /// Get total vehicle count
    pub fn count(&self) -> usize {
        self.vehicles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vehicles.is_empty()
    }

    pub fn is_sorted_by_id(&self) -> bool {
        self.sorted_by_id
    }

    /// First record with `id` in current order
    pub fn linear_search(&self, id: u32) -> Option<&Vehicle> {
        linear_search(&self.vehicles, id)
    }

    /// Binary search by ID; requires a prior ID sort
    pub fn binary_search(&self, id: u32) -> Result<Option<&Vehicle>, StoreError> {
        if !self.sorted_by_id {
            return Err(StoreError::NotSortedById);
        }
        Ok(binary_search(&self.vehicles, id))
    }

    /// Reorder by ascending ID (bubble sort); enables binary search
    pub fn bubble_sort_by_id(&mut self) {
        let passes = bubble_sort_by_id(&mut self.vehicles);
        debug!(passes, "Bubble sort by ID finished");
        self.sorted_by_id = true;
    }

    /// Reorder by ascending charge (selection sort)
    pub fn selection_sort_by_charge(&mut self) {
        selection_sort_by_charge(&mut self.vehicles);
        self.sorted_by_id = false;
    }

    /// Reorder by ascending duration (insertion sort over a snapshot)
    pub fn insertion_sort_by_duration(&mut self) {
        self.vehicles = insertion_sort_by_duration(&self.vehicles);
        self.sorted_by_id = false;
    }

    /// Dispatch to the sort for `key`
    pub fn sort_by(&mut self, key: SortKey) {
        match key {
            SortKey::Id => self.bubble_sort_by_id(),
            SortKey::Charge => self.selection_sort_by_charge(),
            SortKey::Duration => self.insertion_sort_by_duration(),
        }
        info!(key = %key, algorithm = key.algorithm(), "Vehicles sorted");
    }
}
