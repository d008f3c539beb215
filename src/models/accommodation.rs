//! Accommodation claim model.
//!
//! The claim is a closed set of tagged variants so every combination of
//! trip type, venue, method and room type can be matched exhaustively.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Where a training course is held.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrainingVenue {
    /// A government-owned facility.
    StateFacility,
    /// A privately operated hotel or venue.
    PrivateFacility,
}

impl TrainingVenue {
    /// Returns the snake_case identifier used in JSON.
    pub fn code(&self) -> &'static str {
        match self {
            TrainingVenue::StateFacility => "state_facility",
            TrainingVenue::PrivateFacility => "private_facility",
        }
    }
}

/// The purpose of the trip, which selects the ceiling tables.
///
/// ```
/// use travel_claim_engine::models::{TrainingVenue, TripType};
///
/// let trip: TripType = serde_json::from_str(
///     r#"{"kind": "training", "venue": "private_facility"}"#,
/// ).unwrap();
/// assert_eq!(trip, TripType::Training { venue: TrainingVenue::PrivateFacility });
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TripType {
    /// Ordinary official travel.
    General,
    /// Travel to attend a training course.
    Training {
        /// The venue of the course.
        venue: TrainingVenue,
    },
}

/// How accommodation is reimbursed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AccommodationMethod {
    /// Fixed nightly rate without receipts.
    LumpSum,
    /// Receipted spend capped at a nightly ceiling.
    ActualCost,
    /// The traveler slept aboard a vehicle.
    VehicleSleep,
}

/// Room occupancy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoomType {
    /// One occupant.
    #[default]
    Single,
    /// Shared by two occupants.
    Double,
}

impl RoomType {
    /// Returns the snake_case identifier used in JSON and remarks.
    pub fn code(&self) -> &'static str {
        match self {
            RoomType::Single => "single",
            RoomType::Double => "double",
        }
    }
}

/// The accommodation facts of a trip.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccommodationClaim {
    /// The purpose of the trip (and the venue, for training).
    pub trip: TripType,
    /// The reimbursement method chosen by the claimant.
    pub method: AccommodationMethod,
    /// Number of nights stayed.
    pub nights: u32,
    /// Room occupancy.
    #[serde(default)]
    pub room_type: RoomType,
    /// The receipted total spend across all nights.
    #[serde(default)]
    pub actual_cost: Decimal,
    /// A nightly rate overriding the lump-sum table.
    #[serde(default)]
    pub manual_rate: Option<Decimal>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_general_actual_cost_claim() {
        let json = r#"{
            "trip": {"kind": "general"},
            "method": "actual_cost",
            "nights": 2,
            "room_type": "double",
            "actual_cost": "1650.50"
        }"#;

        let claim: AccommodationClaim = serde_json::from_str(json).unwrap();
        assert_eq!(claim.trip, TripType::General);
        assert_eq!(claim.method, AccommodationMethod::ActualCost);
        assert_eq!(claim.nights, 2);
        assert_eq!(claim.room_type, RoomType::Double);
        assert_eq!(claim.actual_cost, Decimal::new(165050, 2));
        assert_eq!(claim.manual_rate, None);
    }

    #[test]
    fn test_defaults_for_lump_sum_claim() {
        let json = r#"{
            "trip": {"kind": "training", "venue": "state_facility"},
            "method": "lump_sum",
            "nights": 3
        }"#;

        let claim: AccommodationClaim = serde_json::from_str(json).unwrap();
        assert_eq!(
            claim.trip,
            TripType::Training {
                venue: TrainingVenue::StateFacility
            }
        );
        assert_eq!(claim.room_type, RoomType::Single);
        assert_eq!(claim.actual_cost, Decimal::ZERO);
    }

    #[test]
    fn test_negative_nights_rejected_at_deserialization() {
        let json = r#"{
            "trip": {"kind": "general"},
            "method": "lump_sum",
            "nights": -1
        }"#;

        let result: Result<AccommodationClaim, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }

    #[test]
    fn test_training_without_venue_rejected() {
        let result: Result<TripType, _> = serde_json::from_str(r#"{"kind": "training"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_method_serialization() {
        assert_eq!(
            serde_json::to_string(&AccommodationMethod::VehicleSleep).unwrap(),
            "\"vehicle_sleep\""
        );
        assert_eq!(
            serde_json::to_string(&AccommodationMethod::LumpSum).unwrap(),
            "\"lump_sum\""
        );
    }
}
