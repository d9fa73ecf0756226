//! Dashboard summary over the current records

use serde::Serialize;

use crate::model::{Vehicle, VehicleKind};

/// Per-type vehicle counts; unrecognized types are counted in none of them
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct TypeCounts {
    pub car: usize,
    pub bike: usize,
    pub truck: usize,
}

/// Totals shown on the dashboard
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DashboardSummary {
    pub total: usize,
    pub total_charge: f64,
    pub average_charge: f64,
    pub count_by_type: TypeCounts,
}

/// Single-pass accumulation of counts and charges
pub fn summarize(vehicles: &[Vehicle]) -> DashboardSummary {
    let mut summary = DashboardSummary::default();

    for vehicle in vehicles {
        summary.total += 1;
        summary.total_charge += vehicle.charge;
        match vehicle.kind() {
            Some(VehicleKind::Car) => summary.count_by_type.car += 1,
            Some(VehicleKind::Bike) => summary.count_by_type.bike += 1,
            Some(VehicleKind::Truck) => summary.count_by_type.truck += 1,
            None => {}
        }
    }

    if summary.total > 0 {
        summary.average_charge = summary.total_charge / summary.total as f64;
    }

    summary
}
