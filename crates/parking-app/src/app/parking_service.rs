//! Parking Service - use cases for one interactive session
//!
//! Owns the record store and the repository behind it, and tracks whether the
//! store has changed since it was last saved.

use parking_domain::model::Vehicle;
use parking_domain::repository::{SkippedLine, VehicleRepository};
use parking_domain::service::{summarize, DashboardSummary, SortKey};
use parking_store::VehicleStore;
use parking_types::{Result, StoreError};
use tracing::debug;

/// What a load did to the store
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadSummary {
    /// False when the data file does not exist yet
    pub source_found: bool,
    /// Records added to the store
    pub loaded: usize,
    /// Lines that could not be parsed
    pub skipped_lines: Vec<SkippedLine>,
    /// Records skipped because their ID was already in the store
    pub duplicate_ids: Vec<u32>,
}

impl LoadSummary {
    /// Total number of source records that were not added
    pub fn skipped_count(&self) -> usize {
        self.skipped_lines.len() + self.duplicate_ids.len()
    }
}

/// Session over a vehicle store backed by a repository
pub struct ParkingService<R: VehicleRepository> {
    store: VehicleStore,
    repo: R,
    unsaved_changes: bool,
}

impl<R: VehicleRepository> ParkingService<R> {
    /// Start a session with an empty store
    pub fn new(repo: R) -> Self {
        Self {
            store: VehicleStore::new(),
            repo,
            unsaved_changes: false,
        }
    }

    pub fn repository(&self) -> &R {
        &self.repo
    }

    /// Merge the repository's records into the store
    pub fn load(&mut self) -> Result<LoadSummary> {
        let Some(loaded) = self.repo.load()? else {
            return Ok(LoadSummary::default());
        };

        let had_records = !self.store.is_empty();
        let report = self.store.merge_vehicles(loaded.vehicles);
        debug!(added = report.added, had_records, "Merged data file into store");
        if had_records && report.added > 0 {
            self.unsaved_changes = true;
        }

        Ok(LoadSummary {
            source_found: true,
            loaded: report.added,
            skipped_lines: loaded.skipped,
            duplicate_ids: report.duplicate_ids,
        })
    }

    /// Write the store in its current order; returns the record count
    pub fn save(&mut self) -> Result<usize> {
        self.repo.save(self.store.as_slice())?;
        self.unsaved_changes = false;
        Ok(self.store.count())
    }

    pub fn is_unique_id(&self, id: u32) -> bool {
        self.store.is_unique_id(id)
    }

    pub fn is_plate_duplicate(&self, plate: &str) -> bool {
        self.store.is_plate_duplicate(plate)
    }

    /// Register a vehicle, computing its charge
    pub fn add_vehicle(
        &mut self,
        id: u32,
        plate: &str,
        vehicle_type: &str,
        duration_hours: f64,
    ) -> Result<Vehicle> {
        let vehicle = Vehicle::new(id, plate, vehicle_type, duration_hours)?;
        self.store.add_vehicle(vehicle.clone())?;
        self.unsaved_changes = true;
        Ok(vehicle)
    }

    /// Remove a vehicle by ID; returns whether it existed
    pub fn delete_vehicle(&mut self, id: u32) -> bool {
        let removed = self.store.remove_vehicle(id);
        if removed {
            self.unsaved_changes = true;
        }
        removed
    }

    pub fn linear_search(&self, id: u32) -> Option<&Vehicle> {
        self.store.linear_search(id)
    }

    pub fn binary_search(&self, id: u32) -> std::result::Result<Option<&Vehicle>, StoreError> {
        self.store.binary_search(id)
    }

    pub fn is_sorted_by_id(&self) -> bool {
        self.store.is_sorted_by_id()
    }

    pub fn sort(&mut self, key: SortKey) {
        self.store.sort_by(key);
        if !self.store.is_empty() {
            self.unsaved_changes = true;
        }
    }

    /// Records in current store order
    pub fn vehicles(&self) -> &[Vehicle] {
        self.store.as_slice()
    }

    pub fn dashboard(&self) -> DashboardSummary {
        summarize(self.store.as_slice())
    }

    pub fn has_unsaved_changes(&self) -> bool {
        self.unsaved_changes
    }
}
