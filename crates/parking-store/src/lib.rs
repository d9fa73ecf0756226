//! In-memory record store for parked vehicles

pub mod vehicles;

pub use vehicles::{MergeReport, VehicleStore};
