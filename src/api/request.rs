//! Request types for the Travel Claim Engine API.
//!
//! Endpoints whose engine takes a single model accept that model directly
//! (`TransportItem`, `PublicFareRequest`, `TaxiFareRequest`,
//! `TrainingMealRequest`, `ClaimRequest`). The types here bundle the grade
//! with the facts for engines that take both.

use serde::{Deserialize, Serialize};

use crate::models::{AccommodationClaim, PersonnelGrade, TravelWindow};

/// Request body for the `/per-diem` endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PerDiemRequest {
    /// The traveler's grade.
    pub grade: PersonnelGrade,
    /// Departure, return and the overnight flag.
    pub window: TravelWindow,
    /// Meals provided by the host agency.
    #[serde(default)]
    pub meals_provided: u32,
}

/// Request body for the `/accommodation` endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccommodationRequest {
    /// The traveler's grade.
    pub grade: PersonnelGrade,
    /// The accommodation facts.
    pub accommodation: AccommodationClaim,
}
