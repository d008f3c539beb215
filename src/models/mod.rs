//! Core data models for the Travel Claim Engine.
//!
//! This module contains the trip facts the engines consume and the result
//! records they produce.

mod accommodation;
mod calculation_result;
mod claim;
mod grade;
mod training;
mod transport;
mod travel_window;
mod warning;

pub use accommodation::{AccommodationClaim, AccommodationMethod, RoomType, TrainingVenue, TripType};
pub use calculation_result::{
    AccommodationResult, ActualCostOutcome, AuditStep, AuditTrace, LumpSumOutcome,
    MealAllowanceResult, PerDiemResult, PublicFareResult, Reimbursement, TaxiBandCharge,
    TaxiFareResult, TransportResult, VehicleSleepOutcome,
};
pub use claim::{ClaimRequest, ClaimSummary, ClaimTotals, TrainingMealPlan};
pub use grade::PersonnelGrade;
pub use training::{TrainingMealRequest, TrainingType};
pub use transport::{
    DistanceLookup, FareVehicle, PrivateVehicle, PublicFareRequest, PublicRouteType,
    TaxiFareRequest, TransportItem, VehicleKind,
};
pub use travel_window::TravelWindow;
pub use warning::{ComplianceWarning, format_baht};
