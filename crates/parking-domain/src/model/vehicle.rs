//! Parked vehicle record

use parking_types::ValidationError;
use serde::{Deserialize, Serialize};

use crate::service::charge_calculator::compute_charge;

/// Canonical vehicle categories with a dedicated hourly rate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VehicleKind {
    Car,
    Bike,
    Truck,
}

impl VehicleKind {
    pub const ALL: [VehicleKind; 3] = [VehicleKind::Car, VehicleKind::Bike, VehicleKind::Truck];

    /// Case-insensitive exact match against "car", "bike" and "truck"
    pub fn parse(vehicle_type: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.label().eq_ignore_ascii_case(vehicle_type))
    }

    /// Hourly parking rate in dollars
    pub fn rate_per_hour(self) -> f64 {
        match self {
            VehicleKind::Car => 2.0,
            VehicleKind::Bike => 1.0,
            VehicleKind::Truck => 3.0,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            VehicleKind::Car => "car",
            VehicleKind::Bike => "bike",
            VehicleKind::Truck => "truck",
        }
    }
}

impl std::fmt::Display for VehicleKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// A parked vehicle and its frozen charge
///
/// Records are never edited after creation. `charge` is computed once from
/// the type and duration (or read back verbatim from the data file) and is
/// not recomputed afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vehicle {
    /// Ticket ID, positive and unique within a store
    pub id: u32,
    /// License plate, duplicates allowed
    pub plate: String,
    /// Vehicle type as entered (car/bike/truck, any case, or free text)
    pub vehicle_type: String,
    /// Parking duration in hours
    pub duration_hours: f64,
    /// Parking charge in dollars
    pub charge: f64,
}

impl Vehicle {
    /// Create a record and compute its charge from the rate table
    pub fn new(
        id: u32,
        plate: impl Into<String>,
        vehicle_type: impl Into<String>,
        duration_hours: f64,
    ) -> Result<Self, ValidationError> {
        let plate = canonical(plate.into());
        let vehicle_type = canonical(vehicle_type.into());
        validate(id, &plate, duration_hours)?;
        let charge = compute_charge(&vehicle_type, duration_hours);
        Ok(Self {
            id,
            plate,
            vehicle_type,
            duration_hours,
            charge,
        })
    }

    /// Rebuild a record with a previously computed charge
    pub fn with_charge(
        id: u32,
        plate: impl Into<String>,
        vehicle_type: impl Into<String>,
        duration_hours: f64,
        charge: f64,
    ) -> Result<Self, ValidationError> {
        let plate = canonical(plate.into());
        validate(id, &plate, duration_hours)?;
        if !charge.is_finite() || charge < 0.0 {
            return Err(ValidationError::InvalidCharge(charge));
        }
        Ok(Self {
            id,
            plate,
            vehicle_type: canonical(vehicle_type.into()),
            duration_hours,
            charge,
        })
    }

    /// Canonical kind, or `None` for unrecognized types
    pub fn kind(&self) -> Option<VehicleKind> {
        VehicleKind::parse(&self.vehicle_type)
    }
}

/// Plate and type are stored without surrounding whitespace
fn canonical(field: String) -> String {
    let trimmed = field.trim();
    if trimmed.len() == field.len() {
        field
    } else {
        trimmed.to_string()
    }
}

fn validate(id: u32, plate: &str, duration_hours: f64) -> Result<(), ValidationError> {
    if id == 0 {
        return Err(ValidationError::InvalidId(0));
    }
    if plate.trim().is_empty() {
        return Err(ValidationError::EmptyPlate);
    }
    if !duration_hours.is_finite() || duration_hours <= 0.0 {
        return Err(ValidationError::InvalidDuration(duration_hours));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_parse_is_case_insensitive() {
        assert_eq!(VehicleKind::parse("Car"), Some(VehicleKind::Car));
        assert_eq!(VehicleKind::parse("BIKE"), Some(VehicleKind::Bike));
        assert_eq!(VehicleKind::parse("truck"), Some(VehicleKind::Truck));
        assert_eq!(VehicleKind::parse("scooter"), None);
        assert_eq!(VehicleKind::parse("cars"), None);
    }

    #[test]
    fn test_new_computes_charge() {
        let vehicle = Vehicle::new(1, "ABC123", "Truck", 2.5).unwrap();
        assert!((vehicle.charge - 7.5).abs() < 1e-9);
        assert_eq!(vehicle.kind(), Some(VehicleKind::Truck));
        assert_eq!(vehicle.vehicle_type, "Truck");
    }

    #[test]
    fn test_new_rejects_zero_id() {
        assert_eq!(
            Vehicle::new(0, "ABC123", "car", 1.0),
            Err(ValidationError::InvalidId(0))
        );
    }

    #[test]
    fn test_new_rejects_non_positive_duration() {
        assert!(matches!(
            Vehicle::new(1, "ABC123", "car", 0.0),
            Err(ValidationError::InvalidDuration(_))
        ));
        assert!(matches!(
            Vehicle::new(1, "ABC123", "car", -1.5),
            Err(ValidationError::InvalidDuration(_))
        ));
        assert!(matches!(
            Vehicle::new(1, "ABC123", "car", f64::NAN),
            Err(ValidationError::InvalidDuration(_))
        ));
    }

    #[test]
    fn test_new_rejects_blank_plate() {
        assert_eq!(
            Vehicle::new(1, "  ", "car", 1.0),
            Err(ValidationError::EmptyPlate)
        );
    }

    #[test]
    fn test_new_trims_plate_and_type() {
        let vehicle = Vehicle::new(1, " AB 12 ", " car", 2.0).unwrap();
        assert_eq!(vehicle.plate, "AB 12");
        assert_eq!(vehicle.vehicle_type, "car");
        assert_eq!(vehicle.kind(), Some(VehicleKind::Car));
        assert!((vehicle.charge - 4.0).abs() < 1e-9);
    }

    #[test]
    fn test_with_charge_keeps_stored_charge() {
        let vehicle = Vehicle::with_charge(4, "XYZ", "car", 2.0, 99.0).unwrap();
        assert!((vehicle.charge - 99.0).abs() < 1e-9);
    }

    #[test]
    fn test_with_charge_rejects_negative_charge() {
        assert_eq!(
            Vehicle::with_charge(4, "XYZ", "car", 2.0, -1.0),
            Err(ValidationError::InvalidCharge(-1.0))
        );
    }

    #[test]
    fn test_vehicle_serializes_to_json() {
        let vehicle = Vehicle::new(3, "KL-9", "bike", 1.5).unwrap();
        let json = serde_json::to_value(&vehicle).unwrap();
        assert_eq!(json["id"], 3);
        assert_eq!(json["plate"], "KL-9");
        assert_eq!(json["vehicle_type"], "bike");
    }
}
