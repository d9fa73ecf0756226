//! Repository trait definitions for data persistence

use parking_types::Error;

use crate::model::Vehicle;

/// A source line that could not be turned into a record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedLine {
    /// 1-based line number in the source
    pub line: u64,
    /// Why the line was rejected
    pub reason: String,
}

/// Records read from a source, plus the lines that were skipped
#[derive(Debug, Clone, Default)]
pub struct LoadedVehicles {
    /// Accepted records in source order
    pub vehicles: Vec<Vehicle>,
    pub skipped: Vec<SkippedLine>,
}

/// Repository for parked vehicle records
pub trait VehicleRepository {
    /// Read every record
    ///
    /// Returns `Ok(None)` when the backing source does not exist yet.
    fn load(&self) -> Result<Option<LoadedVehicles>, Error>;

    /// Replace the stored records with `vehicles`
    fn save(&self, vehicles: &[Vehicle]) -> Result<(), Error>;
}
