//! Domain layer for the parking manager
//!
//! Vehicle records, the charge rate table, the search/sort algorithms the
//! record store is built on, and the repository trait persistence implements.

pub mod model;
pub mod repository;
pub mod service;
