//! Whole-claim request and summary models.
//!
//! A [`ClaimRequest`] bundles the facts of one trip; the resulting
//! [`ClaimSummary`] carries every engine result, the totals and an audit trace.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{
    AccommodationClaim, AccommodationResult, AuditTrace, MealAllowanceResult, PerDiemResult,
    PersonnelGrade, Reimbursement, TrainingVenue, TransportItem, TransportResult, TravelWindow,
};

/// Meal and snack counts of a training course attached to a claim.
///
/// The grade comes from the claim itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrainingMealPlan {
    /// Where the course is held.
    pub venue: TrainingVenue,
    /// Number of main meals served.
    #[serde(default)]
    pub meal_count: u32,
    /// Number of snack breaks served.
    #[serde(default)]
    pub snack_count: u32,
}

/// Everything needed to compute one travel claim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClaimRequest {
    /// Optional reference of the traveler, echoed into logs.
    #[serde(default)]
    pub traveler_id: Option<String>,
    /// The traveler's grade.
    pub grade: PersonnelGrade,
    /// Departure and return.
    pub window: TravelWindow,
    /// Meals provided by the host agency.
    #[serde(default)]
    pub meals_provided: u32,
    /// Accommodation facts, if any nights were spent away.
    #[serde(default)]
    pub accommodation: Option<AccommodationClaim>,
    /// Transport legs.
    #[serde(default)]
    pub transport: Vec<TransportItem>,
    /// Training meal budget, for training trips.
    #[serde(default)]
    pub training_meals: Option<TrainingMealPlan>,
}

/// Per-category totals of a claim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClaimTotals {
    /// Net per-diem allowance.
    pub per_diem: Decimal,
    /// Reimbursable accommodation.
    pub accommodation: Decimal,
    /// Sum of all transport legs.
    pub transport: Decimal,
    /// Training meal budget.
    pub training_meals: Decimal,
    /// Sum of the above.
    pub grand_total: Decimal,
}

/// The complete result of a claim calculation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClaimSummary {
    /// Unique identifier for this calculation.
    pub calculation_id: Uuid,
    /// When the calculation was performed.
    pub timestamp: DateTime<Utc>,
    /// The version of the engine that performed the calculation.
    pub engine_version: String,
    /// The version of the rate schedule applied.
    pub schedule_version: String,
    /// The traveler's grade.
    pub grade: PersonnelGrade,
    /// Per-diem result.
    pub per_diem: PerDiemResult,
    /// Accommodation result, if the claim had accommodation.
    pub accommodation: Option<AccommodationResult>,
    /// One result per transport leg, in claim order.
    pub transport: Vec<TransportResult>,
    /// Training meal result, if the claim had a meal plan.
    pub training_meals: Option<MealAllowanceResult>,
    /// Per-category totals.
    pub totals: ClaimTotals,
    /// Every compliance warning from every result, in calculation order.
    pub warnings: Vec<String>,
    /// Complete audit trace of calculation decisions.
    pub audit_trace: AuditTrace,
}

impl Reimbursement for ClaimSummary {
    fn reimbursable_amount(&self) -> Decimal {
        self.totals.grand_total
    }

    /// A claim is approved when its accommodation is within the ceiling.
    fn is_approved(&self) -> bool {
        self.accommodation
            .as_ref()
            .map(|a| a.is_approved())
            .unwrap_or(true)
    }

    fn warnings(&self) -> &[String] {
        &self.warnings
    }
}
