//! Parking charge calculation

use tracing::warn;

use crate::model::VehicleKind;

/// Rate applied to types outside the rate table
pub const FALLBACK_KIND: VehicleKind = VehicleKind::Car;

/// Hourly rate for a free-text vehicle type
///
/// Unrecognized types are charged at the car rate.
pub fn rate_for(vehicle_type: &str) -> f64 {
    match VehicleKind::parse(vehicle_type) {
        Some(kind) => kind.rate_per_hour(),
        None => {
            warn!(
                vehicle_type,
                "Unknown vehicle type. Default charge applied as {} rate", FALLBACK_KIND
            );
            FALLBACK_KIND.rate_per_hour()
        }
    }
}

/// Charge for parking `duration_hours` hours; not rounded
pub fn compute_charge(vehicle_type: &str, duration_hours: f64) -> f64 {
    rate_for(vehicle_type) * duration_hours
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_car_rate() {
        assert!((compute_charge("car", 2.0) - 4.0).abs() < 1e-9);
    }

    #[test]
    fn test_bike_rate() {
        assert!((compute_charge("bike", 1.5) - 1.5).abs() < 1e-9);
    }

    #[test]
    fn test_truck_rate() {
        assert!((compute_charge("truck", 3.0) - 9.0).abs() < 1e-9);
    }

    #[test]
    fn test_unknown_type_falls_back_to_car() {
        assert!((compute_charge("scooter", 2.0) - 4.0).abs() < 1e-9);
        assert!((rate_for("") - 2.0).abs() < 1e-9);
    }

    #[test]
    fn test_rate_lookup_ignores_case() {
        assert!((rate_for("TRUCK") - 3.0).abs() < 1e-9);
        assert!((rate_for("Bike") - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_no_rounding_at_computation() {
        let charge = compute_charge("truck", 0.333);
        assert!((charge - 0.999).abs() < 1e-9);
    }
}
