//! File-based vehicle repository implementation
//!
//! One record per line, no header:
//!
//! ```text
//! id,plate,type,durationHours,charge
//! 12,ABC-123,Car,1.50,3.00
//! ```
//!
//! Fields are not quoted or escaped, so a comma inside a plate or type
//! corrupts that line on the next load.

use std::collections::HashSet;
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::{Path, PathBuf};

use parking_domain::model::Vehicle;
use parking_domain::repository::{LoadedVehicles, SkippedLine, VehicleRepository};
use parking_types::{Error, Result, ValidationError};
use thiserror::Error;
use tracing::{info, warn};

const FIELD_COUNT: usize = 5;

/// Reasons a single data-file line is skipped
#[derive(Debug, Error)]
enum LineError {
    #[error("expected 5 fields, found {0}")]
    FieldCount(usize),

    #[error("invalid number in column {column}: {value:?}")]
    InvalidNumber { column: &'static str, value: String },

    #[error(transparent)]
    Invalid(#[from] ValidationError),

    #[error("duplicate ID {0}")]
    DuplicateId(u32),

    #[error("unreadable line: {0}")]
    Unreadable(#[from] csv::Error),
}

/// File-based implementation of VehicleRepository
///
/// The file handle is held only for the duration of one load or save.
#[derive(Debug, Clone)]
pub struct FileVehicleRepository {
    data_path: PathBuf,
}

impl FileVehicleRepository {
    /// Create a repository backed by `data_path`; the file need not exist
    pub fn new(data_path: impl Into<PathBuf>) -> Self {
        Self {
            data_path: data_path.into(),
        }
    }

    /// Get the data file path
    pub fn data_path(&self) -> &Path {
        &self.data_path
    }
}

impl VehicleRepository for FileVehicleRepository {
    fn load(&self) -> Result<Option<LoadedVehicles>> {
        if !self.data_path.exists() {
            info!(path = %self.data_path.display(), "No existing data file found");
            return Ok(None);
        }

        let file = File::open(&self.data_path)?;
        let loaded = read_vehicles(BufReader::new(file));
        info!(
            path = %self.data_path.display(),
            loaded = loaded.vehicles.len(),
            skipped = loaded.skipped.len(),
            "Data file loaded"
        );
        Ok(Some(loaded))
    }

    fn save(&self, vehicles: &[Vehicle]) -> Result<()> {
        if let Some(parent) = self.data_path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let file = File::create(&self.data_path)?;
        write_vehicles(BufWriter::new(file), vehicles)?;
        info!(path = %self.data_path.display(), count = vehicles.len(), "Data file saved");
        Ok(())
    }
}

/// Parse records from `reader`, skipping malformed lines and repeated IDs
pub fn read_vehicles<R: Read>(reader: R) -> LoadedVehicles {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .quoting(false)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut loaded = LoadedVehicles::default();
    let mut seen_ids = HashSet::new();

    for (index, result) in csv_reader.records().enumerate() {
        let fallback_line = index as u64 + 1;
        let parsed = result
            .map_err(|e| (e.position().map_or(fallback_line, |p| p.line()), LineError::from(e)))
            .and_then(|record| {
                let line = record.position().map_or(fallback_line, |p| p.line());
                parse_record(&record)
                    .and_then(|vehicle| {
                        if seen_ids.insert(vehicle.id) {
                            Ok(vehicle)
                        } else {
                            Err(LineError::DuplicateId(vehicle.id))
                        }
                    })
                    .map_err(|e| (line, e))
            });

        match parsed {
            Ok(vehicle) => loaded.vehicles.push(vehicle),
            Err((line, error)) => {
                warn!(line, reason = %error, "Skipping invalid line in data file");
                loaded.skipped.push(SkippedLine {
                    line,
                    reason: error.to_string(),
                });
            }
        }
    }

    loaded
}

/// Write one line per vehicle; duration and charge with two decimals
pub fn write_vehicles<W: Write>(writer: W, vehicles: &[Vehicle]) -> Result<()> {
    let mut csv_writer = csv::WriterBuilder::new()
        .has_headers(false)
        .quote_style(csv::QuoteStyle::Never)
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(writer);

    for vehicle in vehicles {
        csv_writer.write_record([
            vehicle.id.to_string(),
            vehicle.plate.clone(),
            vehicle.vehicle_type.clone(),
            format!("{:.2}", vehicle.duration_hours),
            format!("{:.2}", vehicle.charge),
        ])?;
    }

    csv_writer.flush().map_err(Error::from)
}

fn parse_record(record: &csv::StringRecord) -> std::result::Result<Vehicle, LineError> {
    if record.len() != FIELD_COUNT {
        return Err(LineError::FieldCount(record.len()));
    }

    let id = parse_number::<i64>(&record[0], "id")?;
    let id = u32::try_from(id).map_err(|_| ValidationError::InvalidId(id))?;
    let duration_hours = parse_number::<f64>(&record[3], "durationHours")?;
    let charge = parse_number::<f64>(&record[4], "charge")?;

    Ok(Vehicle::with_charge(
        id,
        &record[1],
        &record[2],
        duration_hours,
        charge,
    )?)
}

fn parse_number<T: std::str::FromStr>(
    value: &str,
    column: &'static str,
) -> std::result::Result<T, LineError> {
    value.parse().map_err(|_| LineError::InvalidNumber {
        column,
        value: value.to_string(),
    })
}
