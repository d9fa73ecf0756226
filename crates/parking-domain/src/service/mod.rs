//! Domain services

pub mod charge_calculator;
pub mod dashboard;
pub mod search;
pub mod sort;

pub use charge_calculator::{compute_charge, rate_for};
pub use dashboard::{summarize, DashboardSummary, TypeCounts};
pub use search::{binary_search, linear_search};
pub use sort::{bubble_sort_by_id, insertion_sort_by_duration, selection_sort_by_charge, SortKey};
