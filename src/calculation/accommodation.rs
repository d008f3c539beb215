//! Accommodation reimbursement calculation functionality.
//!
//! This module selects the nightly rate or ceiling for an accommodation claim
//! and produces the reimbursable amount with its compliance warnings.
//!
//! ## Decision Structure
//!
//! - **Vehicle sleep** overrides everything: no entitlement.
//! - **General travel**: lump sum at the grade rate (or a manual override),
//!   or actual cost capped at the general ceiling for the room type.
//! - **Training at a state venue**: same as general travel, with a note about
//!   the venue-based ceiling.
//! - **Training at a private venue**: the private-venue ceiling is the lump-sum
//!   rate and the actual-cost cap; junior grades are expected to share a room.

use rust_decimal::Decimal;

use crate::config::{AccommodationTables, GradeRates, RoomRates};
use crate::error::{EngineError, EngineResult};
use crate::models::{
    AccommodationClaim, AccommodationMethod, AccommodationResult, ActualCostOutcome,
    ComplianceWarning, LumpSumOutcome, PersonnelGrade, RoomType, TrainingVenue, TripType,
    VehicleSleepOutcome, format_baht,
};

use super::checked_mul;

/// Calculates the reimbursable accommodation for a claim.
///
/// # Arguments
///
/// * `grade` - The traveler's grade
/// * `claim` - The accommodation facts
/// * `tables` - Lump-sum rates and ceilings
///
/// # Returns
///
/// An [`AccommodationResult`] variant matching the method, or `InvalidInput`
/// when the actual cost or manual rate is negative or the total cannot be
/// represented.
///
/// # Examples
///
/// ```
/// use travel_claim_engine::calculation::compute_accommodation;
/// use travel_claim_engine::config::RateSchedule;
/// use travel_claim_engine::models::{
///     AccommodationClaim, AccommodationMethod, PersonnelGrade, Reimbursement, RoomType, TripType,
/// };
/// use rust_decimal::Decimal;
///
/// let schedule = RateSchedule::thai_2568();
/// let claim = AccommodationClaim {
///     trip: TripType::General,
///     method: AccommodationMethod::ActualCost,
///     nights: 2,
///     room_type: RoomType::Single,
///     actual_cost: Decimal::from(3500),
///     manual_rate: None,
/// };
///
/// let result = compute_accommodation(PersonnelGrade::Junior, &claim, &schedule.accommodation).unwrap();
/// assert_eq!(result.ceiling_total(), Some(Decimal::from(3000)));
/// assert_eq!(result.reimbursable_amount(), Decimal::from(3000));
/// assert!(!result.is_approved());
/// ```
pub fn compute_accommodation(
    grade: PersonnelGrade,
    claim: &AccommodationClaim,
    tables: &AccommodationTables,
) -> EngineResult<AccommodationResult> {
    validate_claim(claim)?;

    match (claim.method, claim.trip) {
        (AccommodationMethod::VehicleSleep, trip) => Ok(vehicle_sleep(trip)),

        (AccommodationMethod::LumpSum, TripType::General) => {
            let rate = lump_sum_rate(grade, claim.manual_rate, tables);
            let remark = format!(
                "เหมาจ่าย {} บาท/คืน x {} คืน",
                format_baht(rate, 0),
                claim.nights
            );
            lump_sum(claim, rate, None, Vec::new(), remark)
        }
        (AccommodationMethod::ActualCost, TripType::General) => {
            let ceiling = tables.actual_cost.get(grade).get(claim.room_type);
            actual_cost(claim, ceiling, Vec::new(), general_ceiling_warning, |approved| {
                format!(
                    "จ่ายจริง {} เพดาน {} บาท/คืน{}",
                    claim.room_type.code(),
                    format_baht(ceiling, 0),
                    over_ceiling_suffix(approved)
                )
            })
        }

        (
            AccommodationMethod::LumpSum,
            TripType::Training {
                venue: TrainingVenue::StateFacility,
            },
        ) => {
            let rate = lump_sum_rate(grade, claim.manual_rate, tables);
            let remark = format!(
                "ฝึกอบรม (สถานที่ราชการ) เหมาจ่าย {} บาท/คืน",
                format_baht(rate, 0)
            );
            lump_sum(claim, rate, None, state_venue_warnings(), remark)
        }
        (
            AccommodationMethod::ActualCost,
            TripType::Training {
                venue: TrainingVenue::StateFacility,
            },
        ) => {
            let ceiling = tables.actual_cost.get(grade).get(claim.room_type);
            let warnings = state_venue_warnings();
            actual_cost(claim, ceiling, warnings, state_ceiling_warning, |approved| {
                format!(
                    "ฝึกอบรม (สถานที่ราชการ) จ่ายจริง เพดาน {} บาท/คืน{}",
                    format_baht(ceiling, 0),
                    over_ceiling_suffix(approved)
                )
            })
        }

        (
            AccommodationMethod::LumpSum,
            TripType::Training {
                venue: TrainingVenue::PrivateFacility,
            },
        ) => {
            let rate = private_ceiling(grade, claim.room_type, &tables.private_training);
            let remark = format!(
                "ฝึกอบรม (เอกชน) เหมาจ่าย {} บาท/คืน ({})",
                format_baht(rate, 0),
                claim.room_type.code()
            );
            let mut warnings = private_venue_warnings(grade, claim.room_type);
            warnings.push(ComplianceWarning::ReceiptRequired.to_string());
            lump_sum(claim, rate, Some(claim.room_type), warnings, remark)
        }
        (
            AccommodationMethod::ActualCost,
            TripType::Training {
                venue: TrainingVenue::PrivateFacility,
            },
        ) => {
            let ceiling = private_ceiling(grade, claim.room_type, &tables.private_training);
            let warnings = private_venue_warnings(grade, claim.room_type);
            actual_cost(claim, ceiling, warnings, general_ceiling_warning, |approved| {
                format!(
                    "ฝึกอบรม (เอกชน) จ่ายจริง {} เพดาน {} บาท/คืน{}",
                    claim.room_type.code(),
                    format_baht(ceiling, 0),
                    over_ceiling_suffix(approved)
                )
            })
        }
    }
}

fn validate_claim(claim: &AccommodationClaim) -> EngineResult<()> {
    if claim.actual_cost < Decimal::ZERO {
        return Err(EngineError::invalid_input(
            "actual_cost",
            format!("must not be negative, got {}", claim.actual_cost),
        ));
    }
    match claim.manual_rate {
        Some(rate) if rate < Decimal::ZERO => Err(EngineError::invalid_input(
            "manual_rate",
            format!("must not be negative, got {}", rate),
        )),
        _ => Ok(()),
    }
}

fn vehicle_sleep(trip: TripType) -> AccommodationResult {
    AccommodationResult::VehicleSleep(VehicleSleepOutcome {
        trip,
        nights: 0,
        rate_per_night: Decimal::ZERO,
        reimbursable_amount: Decimal::ZERO,
        approved: true,
        warnings: Vec::new(),
        remark: "พักแรมบนยานพาหนะ — ไม่มีสิทธิ์เบิกค่าที่พัก (ระเบียบฯ ม.17)".to_string(),
    })
}

/// A positive manual rate wins over the grade table; zero means "not set".
fn lump_sum_rate(
    grade: PersonnelGrade,
    manual_rate: Option<Decimal>,
    tables: &AccommodationTables,
) -> Decimal {
    match manual_rate {
        Some(rate) if rate > Decimal::ZERO => rate,
        _ => *tables.lump_sum.get(grade),
    }
}

fn private_ceiling(
    grade: PersonnelGrade,
    room_type: RoomType,
    table: &GradeRates<RoomRates>,
) -> Decimal {
    table.get(grade).get(room_type)
}

fn lump_sum(
    claim: &AccommodationClaim,
    rate: Decimal,
    room_type: Option<RoomType>,
    warnings: Vec<String>,
    remark: String,
) -> EngineResult<AccommodationResult> {
    let reimbursable_amount = checked_mul(rate, Decimal::from(claim.nights), "manual_rate")?;

    Ok(AccommodationResult::LumpSum(LumpSumOutcome {
        trip: claim.trip,
        nights: claim.nights,
        rate_per_night: rate,
        room_type,
        reimbursable_amount,
        approved: true,
        warnings,
        remark,
    }))
}

/// Caps the receipted spend at `ceiling * nights`.
///
/// The receipt warning always follows any branch-specific warnings, and the
/// over-ceiling warning comes last.
fn actual_cost(
    claim: &AccommodationClaim,
    ceiling: Decimal,
    mut warnings: Vec<String>,
    over_ceiling: fn(Decimal, Decimal) -> ComplianceWarning,
    remark: impl FnOnce(bool) -> String,
) -> EngineResult<AccommodationResult> {
    let ceiling_total = checked_mul(ceiling, Decimal::from(claim.nights), "nights")?;
    let approved = claim.actual_cost <= ceiling_total;
    let reimbursable_amount = claim.actual_cost.min(ceiling_total);

    warnings.push(ComplianceWarning::ReceiptRequired.to_string());
    if !approved {
        warnings.push(over_ceiling(claim.actual_cost, ceiling_total).to_string());
    }

    Ok(AccommodationResult::ActualCost(ActualCostOutcome {
        trip: claim.trip,
        nights: claim.nights,
        rate_per_night: ceiling,
        room_type: claim.room_type,
        ceiling_total,
        actual_cost: claim.actual_cost,
        reimbursable_amount,
        approved,
        warnings,
        remark: remark(approved),
    }))
}

fn general_ceiling_warning(actual_cost: Decimal, ceiling_total: Decimal) -> ComplianceWarning {
    ComplianceWarning::AccommodationCeilingExceeded {
        actual_cost,
        ceiling_total,
    }
}

fn state_ceiling_warning(_actual_cost: Decimal, ceiling_total: Decimal) -> ComplianceWarning {
    ComplianceWarning::StateVenueCeilingExceeded { ceiling_total }
}

fn state_venue_warnings() -> Vec<String> {
    vec![ComplianceWarning::StateVenueCeiling.to_string()]
}

fn private_venue_warnings(grade: PersonnelGrade, room_type: RoomType) -> Vec<String> {
    match (grade, room_type) {
        (PersonnelGrade::Junior, RoomType::Single) => {
            vec![ComplianceWarning::DoubleOccupancyRequired.to_string()]
        }
        _ => Vec::new(),
    }
}

fn over_ceiling_suffix(approved: bool) -> &'static str {
    if approved { "" } else { " (เกินเพดาน)" }
}
