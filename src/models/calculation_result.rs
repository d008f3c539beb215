//! Calculation result models for the Travel Claim Engine.
//!
//! Each engine returns its own immutable result record. Document rendering
//! consumes these records unmodified, so their field names are a stable contract.
//! All money-bearing records implement [`Reimbursement`].

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{PublicRouteType, RoomType, TrainingType, TrainingVenue, TripType, VehicleKind};

/// The contract shared by every money-bearing result.
///
/// # Example
///
/// ```
/// use travel_claim_engine::models::{Reimbursement, TransportResult, VehicleKind, PrivateVehicle};
/// use rust_decimal::Decimal;
///
/// let result = TransportResult {
///     vehicle: VehicleKind::Private(PrivateVehicle::Motorcycle),
///     description: None,
///     distance_km: Some(Decimal::new(120, 0)),
///     rate: Some(Decimal::new(2, 0)),
///     reimbursable_amount: Decimal::new(240, 0),
/// };
/// assert_eq!(result.reimbursable_amount(), Decimal::new(240, 0));
/// assert!(result.is_approved());
/// assert!(result.warnings().is_empty());
/// ```
pub trait Reimbursement {
    /// The amount the claimant may be paid.
    fn reimbursable_amount(&self) -> Decimal;

    /// Whether the claimed amount is within every applicable ceiling.
    fn is_approved(&self) -> bool {
        true
    }

    /// Advisory compliance warnings, in display order.
    fn warnings(&self) -> &[String] {
        &[]
    }
}

/// The per-diem allowance for a trip.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PerDiemResult {
    /// Entitlement days, quantized to half days.
    pub days_count: Decimal,
    /// The daily rate for the traveler's grade.
    pub rate_per_day: Decimal,
    /// `days_count * rate_per_day`.
    pub base_amount: Decimal,
    /// Meals provided by the host agency.
    pub meals_provided: u32,
    /// Deduction for provided meals; may exceed the base amount.
    pub deduction: Decimal,
    /// The allowance after deduction, never negative.
    pub net_amount: Decimal,
}

impl Reimbursement for PerDiemResult {
    fn reimbursable_amount(&self) -> Decimal {
        self.net_amount
    }
}

/// Accommodation outcome when the traveler slept aboard a vehicle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VehicleSleepOutcome {
    /// The trip context of the claim.
    pub trip: TripType,
    /// Always zero: no nights are reimbursable.
    pub nights: u32,
    /// Always zero.
    pub rate_per_night: Decimal,
    /// Always zero.
    pub reimbursable_amount: Decimal,
    /// Always true.
    pub approved: bool,
    /// Always empty.
    pub warnings: Vec<String>,
    /// Explanation printed on the claim form.
    pub remark: String,
}

/// Accommodation outcome for a lump-sum claim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LumpSumOutcome {
    /// The trip context of the claim.
    pub trip: TripType,
    /// Number of nights reimbursed.
    pub nights: u32,
    /// The nightly rate applied.
    pub rate_per_night: Decimal,
    /// Room occupancy, where it selected the rate.
    pub room_type: Option<RoomType>,
    /// `rate_per_night * nights`.
    pub reimbursable_amount: Decimal,
    /// Always true for lump sums.
    pub approved: bool,
    /// Compliance warnings.
    pub warnings: Vec<String>,
    /// Explanation printed on the claim form.
    pub remark: String,
}

/// Accommodation outcome for a receipted claim capped at a ceiling.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActualCostOutcome {
    /// The trip context of the claim.
    pub trip: TripType,
    /// Number of nights stayed.
    pub nights: u32,
    /// The nightly ceiling.
    pub rate_per_night: Decimal,
    /// Room occupancy.
    pub room_type: RoomType,
    /// `rate_per_night * nights`.
    pub ceiling_total: Decimal,
    /// The receipted spend.
    pub actual_cost: Decimal,
    /// `min(actual_cost, ceiling_total)`.
    pub reimbursable_amount: Decimal,
    /// Whether `actual_cost <= ceiling_total`.
    pub approved: bool,
    /// Compliance warnings.
    pub warnings: Vec<String>,
    /// Explanation printed on the claim form.
    pub remark: String,
}

/// The accommodation result, one variant per reimbursement method.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum AccommodationResult {
    /// No entitlement: the traveler slept aboard a vehicle.
    VehicleSleep(VehicleSleepOutcome),
    /// Fixed nightly rate.
    LumpSum(LumpSumOutcome),
    /// Receipted spend capped at a ceiling.
    ActualCost(ActualCostOutcome),
}

impl AccommodationResult {
    /// The trip context of the claim.
    pub fn trip(&self) -> TripType {
        match self {
            AccommodationResult::VehicleSleep(o) => o.trip,
            AccommodationResult::LumpSum(o) => o.trip,
            AccommodationResult::ActualCost(o) => o.trip,
        }
    }

    /// Nights counted by the result.
    pub fn nights(&self) -> u32 {
        match self {
            AccommodationResult::VehicleSleep(o) => o.nights,
            AccommodationResult::LumpSum(o) => o.nights,
            AccommodationResult::ActualCost(o) => o.nights,
        }
    }

    /// The nightly rate or ceiling used.
    pub fn rate_per_night(&self) -> Decimal {
        match self {
            AccommodationResult::VehicleSleep(o) => o.rate_per_night,
            AccommodationResult::LumpSum(o) => o.rate_per_night,
            AccommodationResult::ActualCost(o) => o.rate_per_night,
        }
    }

    /// The ceiling for the stay, for capped claims.
    pub fn ceiling_total(&self) -> Option<Decimal> {
        match self {
            AccommodationResult::ActualCost(o) => Some(o.ceiling_total),
            _ => None,
        }
    }

    /// The receipted spend, for capped claims.
    pub fn actual_cost(&self) -> Option<Decimal> {
        match self {
            AccommodationResult::ActualCost(o) => Some(o.actual_cost),
            _ => None,
        }
    }

    /// Explanation printed on the claim form.
    pub fn remark(&self) -> &str {
        match self {
            AccommodationResult::VehicleSleep(o) => &o.remark,
            AccommodationResult::LumpSum(o) => &o.remark,
            AccommodationResult::ActualCost(o) => &o.remark,
        }
    }
}

impl Reimbursement for AccommodationResult {
    fn reimbursable_amount(&self) -> Decimal {
        match self {
            AccommodationResult::VehicleSleep(o) => o.reimbursable_amount,
            AccommodationResult::LumpSum(o) => o.reimbursable_amount,
            AccommodationResult::ActualCost(o) => o.reimbursable_amount,
        }
    }

    fn is_approved(&self) -> bool {
        match self {
            AccommodationResult::VehicleSleep(o) => o.approved,
            AccommodationResult::LumpSum(o) => o.approved,
            AccommodationResult::ActualCost(o) => o.approved,
        }
    }

    fn warnings(&self) -> &[String] {
        match self {
            AccommodationResult::VehicleSleep(o) => &o.warnings,
            AccommodationResult::LumpSum(o) => &o.warnings,
            AccommodationResult::ActualCost(o) => &o.warnings,
        }
    }
}

/// A reimbursed transport leg.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransportResult {
    /// The vehicle used.
    pub vehicle: VehicleKind,
    /// Route description carried from the claim line.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub description: Option<String>,
    /// Distance driven, for self-driven legs.
    pub distance_km: Option<Decimal>,
    /// Per-kilometer rate, for self-driven legs.
    pub rate: Option<Decimal>,
    /// The amount payable for the leg.
    pub reimbursable_amount: Decimal,
}

impl Reimbursement for TransportResult {
    fn reimbursable_amount(&self) -> Decimal {
        self.reimbursable_amount
    }
}

/// A public-transport fare checked against its route cap.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublicFareResult {
    /// The route class.
    pub route_type: PublicRouteType,
    /// The fare paid.
    pub actual_cost: Decimal,
    /// The route cap; `None` means reimbursed at actual cost.
    pub limit: Option<Decimal>,
    /// `min(actual_cost, limit)`.
    pub reimbursable_amount: Decimal,
    /// Whether the fare is within the cap.
    pub approved: bool,
    /// Compliance warnings.
    pub warnings: Vec<String>,
}

impl Reimbursement for PublicFareResult {
    fn reimbursable_amount(&self) -> Decimal {
        self.reimbursable_amount
    }

    fn is_approved(&self) -> bool {
        self.approved
    }

    fn warnings(&self) -> &[String] {
        &self.warnings
    }
}

/// The fare accrued within one taxi meter band.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxiBandCharge {
    /// Odometer reading where the band starts.
    pub from_km: Decimal,
    /// Odometer reading where the band ends; `None` for the open-ended band.
    pub to_km: Option<Decimal>,
    /// Distance billed within the band.
    pub distance_km: Decimal,
    /// The band rate per kilometer.
    pub rate_per_km: Decimal,
    /// `distance_km * rate_per_km`.
    pub amount: Decimal,
}

/// A metered taxi fare estimate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxiFareResult {
    /// Trip distance in kilometers.
    pub distance_km: Decimal,
    /// Per-band breakdown of the distance charge beyond the flag-fall.
    pub bands: Vec<TaxiBandCharge>,
    /// Flag-fall plus all band charges, before traffic and surcharges.
    pub distance_fare: Decimal,
    /// Minutes charged for traffic.
    pub traffic_minutes: u32,
    /// Traffic time charge.
    pub traffic_fare: Decimal,
    /// App booking and airport surcharges.
    pub surcharges: Decimal,
    /// `distance_fare + traffic_fare + surcharges`.
    pub total_fare: Decimal,
}

impl Reimbursement for TaxiFareResult {
    fn reimbursable_amount(&self) -> Decimal {
        self.total_fare
    }
}

/// The meal and snack budget for a training course.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MealAllowanceResult {
    /// Course classification derived from the grade.
    pub training_type: TrainingType,
    /// Where the course is held.
    pub venue: TrainingVenue,
    /// Budget per main meal.
    pub meal_rate: Decimal,
    /// Budget per snack break.
    pub snack_rate: Decimal,
    /// Main meals served.
    pub meal_count: u32,
    /// Snack breaks served.
    pub snack_count: u32,
    /// `meal_count * meal_rate`.
    pub meal_total: Decimal,
    /// `snack_count * snack_rate`.
    pub snack_total: Decimal,
    /// `meal_total + snack_total`.
    pub grand_total: Decimal,
}

impl Reimbursement for MealAllowanceResult {
    fn reimbursable_amount(&self) -> Decimal {
        self.grand_total
    }
}

/// A single step in the audit trace recording a calculation decision.
///
/// Each step captures the input, output, and reasoning for one engine call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditStep {
    /// The sequential step number.
    pub step_number: u32,
    /// The unique identifier of the rule that was applied.
    pub rule_id: String,
    /// The human-readable name of the rule.
    pub rule_name: String,
    /// The input data for this step.
    pub input: serde_json::Value,
    /// The output data from this step.
    pub output: serde_json::Value,
    /// Human-readable explanation of the decision.
    pub reasoning: String,
}

/// The complete audit trace for a claim calculation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditTrace {
    /// The sequence of calculation steps.
    pub steps: Vec<AuditStep>,
    /// The total calculation duration in microseconds.
    pub duration_us: u64,
}
