//! Use cases driven by the CLI

pub mod parking_service;

pub use parking_service::{LoadSummary, ParkingService};
