//! Repository adapters for persistence layer

use std::path::PathBuf;

pub use parking_infra::persistence::FileVehicleRepository;

use crate::config::Config;

/// Open the data-file repository named by the configuration
pub fn open_vehicle_repo(config: &Config) -> FileVehicleRepository {
    FileVehicleRepository::new(config.data_file.clone())
}

/// Open a data-file repository at a custom path
pub fn open_vehicle_repo_at(data_file: PathBuf) -> FileVehicleRepository {
    FileVehicleRepository::new(data_file)
}
