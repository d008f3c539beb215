//! Whole-claim calculation.
//!
//! This module runs every engine a claim needs, in a fixed order, and
//! assembles the results, totals and audit trace into a [`ClaimSummary`].
//!
//! ## Order
//!
//! 1. Per-diem allowance
//! 2. Accommodation, when the claim lists any
//! 3. Each transport leg, in claim order
//! 4. Training meals, when the claim carries a meal plan
//!
//! The first failing engine aborts the claim; nothing is partially totalled.

use std::time::Instant;

use chrono::Utc;
use rust_decimal::Decimal;
use serde::Serialize;
use tracing::debug;
use uuid::Uuid;

use crate::config::RateSchedule;
use crate::error::EngineResult;
use crate::models::{
    AuditStep, AuditTrace, ClaimRequest, ClaimSummary, ClaimTotals, Reimbursement,
    TrainingMealRequest, TransportItem,
};

use super::{
    checked_add, compute_accommodation, compute_per_diem, compute_training_meals,
    compute_transport_item,
};

/// Computes every component of a travel claim.
///
/// # Arguments
///
/// * `request` - The trip facts
/// * `schedule` - The rate schedule to apply
///
/// # Returns
///
/// A [`ClaimSummary`] where `grand_total` is the sum of the net per-diem, the
/// reimbursable accommodation, every transport leg and the training meal budget.
///
/// # Examples
///
/// ```
/// use travel_claim_engine::calculation::compute_claim;
/// use travel_claim_engine::config::RateSchedule;
/// use travel_claim_engine::models::ClaimRequest;
/// use rust_decimal::Decimal;
///
/// let request: ClaimRequest = serde_json::from_str(r#"{
///     "grade": "C1-C8",
///     "window": {"start": "2025-11-03T07:00:00", "end": "2025-11-03T20:00:00"},
///     "transport": [
///         {"mode": "self_driven", "vehicle": "private_car",
///          "distance": {"status": "resolved", "km": "100"}}
///     ]
/// }"#).unwrap();
///
/// let summary = compute_claim(&request, &RateSchedule::thai_2568()).unwrap();
/// assert_eq!(summary.totals.per_diem, Decimal::from(240));
/// assert_eq!(summary.totals.transport, Decimal::from(400));
/// assert_eq!(summary.totals.grand_total, Decimal::from(640));
/// ```
pub fn compute_claim(request: &ClaimRequest, schedule: &RateSchedule) -> EngineResult<ClaimSummary> {
    let start_time = Instant::now();
    let mut steps: Vec<AuditStep> = Vec::new();
    let mut warnings: Vec<String> = Vec::new();

    debug!(
        traveler_id = request.traveler_id.as_deref().unwrap_or("-"),
        grade = %request.grade,
        transport_legs = request.transport.len(),
        "Computing claim"
    );

    let per_diem = compute_per_diem(
        &request.window,
        request.grade,
        request.meals_provided,
        &schedule.per_diem,
    )?;
    steps.push(audit_step(
        &steps,
        "per_diem",
        "Per-Diem Allowance",
        serde_json::json!({
            "grade": request.grade,
            "window": request.window,
            "meals_provided": request.meals_provided,
        }),
        &per_diem,
        format!(
            "{} day(s) at {} = {}, less {} for {} provided meal(s), net {}",
            per_diem.days_count,
            per_diem.rate_per_day,
            per_diem.base_amount,
            per_diem.deduction,
            per_diem.meals_provided,
            per_diem.net_amount
        ),
    ));

    let accommodation = match &request.accommodation {
        Some(claim) => {
            let result = compute_accommodation(request.grade, claim, &schedule.accommodation)?;
            warnings.extend(result.warnings().iter().cloned());
            steps.push(audit_step(
                &steps,
                "accommodation",
                "Accommodation",
                to_json(claim),
                &result,
                format!(
                    "{}; reimbursable {}{}",
                    result.remark(),
                    result.reimbursable_amount(),
                    if result.is_approved() { "" } else { ", over ceiling" }
                ),
            ));
            Some(result)
        }
        None => None,
    };

    let mut transport = Vec::with_capacity(request.transport.len());
    for item in &request.transport {
        let result = compute_transport_item(item, &schedule.transport)?;
        let reasoning = match (result.distance_km, result.rate) {
            (Some(km), Some(rate)) => format!(
                "{} km at {} per km = {}",
                km, rate, result.reimbursable_amount
            ),
            _ => format!("Fare paid {}", result.reimbursable_amount),
        };
        steps.push(audit_step(
            &steps,
            transport_rule_id(item),
            "Transport Leg",
            to_json(item),
            &result,
            reasoning,
        ));
        transport.push(result);
    }

    let training_meals = match &request.training_meals {
        Some(plan) => {
            let meal_request = TrainingMealRequest {
                grade: request.grade,
                venue: plan.venue,
                meal_count: plan.meal_count,
                snack_count: plan.snack_count,
            };
            let result = compute_training_meals(&meal_request, &schedule.training_meals);
            steps.push(audit_step(
                &steps,
                "training_meals",
                "Training Meal Budget",
                to_json(&meal_request),
                &result,
                format!(
                    "{} meal(s) at {} plus {} snack(s) at {} = {}",
                    result.meal_count,
                    result.meal_rate,
                    result.snack_count,
                    result.snack_rate,
                    result.grand_total
                ),
            ));
            Some(result)
        }
        None => None,
    };

    let accommodation_total = accommodation
        .as_ref()
        .map(|r| r.reimbursable_amount())
        .unwrap_or(Decimal::ZERO);
    let mut transport_total = Decimal::ZERO;
    for result in &transport {
        let amount = result.reimbursable_amount();
        transport_total = checked_add(transport_total, amount, "transport")?;
    }
    let meals_total = training_meals
        .as_ref()
        .map(|r| r.reimbursable_amount())
        .unwrap_or(Decimal::ZERO);

    let mut grand_total = per_diem.net_amount;
    for amount in [accommodation_total, transport_total, meals_total] {
        grand_total = checked_add(grand_total, amount, "grand_total")?;
    }

    let totals = ClaimTotals {
        per_diem: per_diem.net_amount,
        accommodation: accommodation_total,
        transport: transport_total,
        training_meals: meals_total,
        grand_total,
    };

    let duration_us = start_time.elapsed().as_micros() as u64;

    debug!(
        grand_total = %totals.grand_total,
        warnings = warnings.len(),
        duration_us,
        "Claim computed"
    );

    Ok(ClaimSummary {
        calculation_id: Uuid::new_v4(),
        timestamp: Utc::now(),
        engine_version: env!("CARGO_PKG_VERSION").to_string(),
        schedule_version: schedule.metadata.version.clone(),
        grade: request.grade,
        per_diem,
        accommodation,
        transport,
        training_meals,
        totals,
        warnings,
        audit_trace: AuditTrace { steps, duration_us },
    })
}

fn audit_step<T: Serialize>(
    previous: &[AuditStep],
    rule_id: &str,
    rule_name: &str,
    input: serde_json::Value,
    output: &T,
    reasoning: String,
) -> AuditStep {
    AuditStep {
        step_number: previous.len() as u32 + 1,
        rule_id: rule_id.to_string(),
        rule_name: rule_name.to_string(),
        input,
        output: to_json(output),
        reasoning,
    }
}

fn transport_rule_id(item: &TransportItem) -> &'static str {
    match item {
        TransportItem::SelfDriven { .. } => "transport_mileage",
        TransportItem::Fare { .. } => "transport_fare",
    }
}

// Result records are plain data; serialization cannot fail for them.
fn to_json<T: Serialize>(value: &T) -> serde_json::Value {
    serde_json::to_value(value).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::EngineError;
    use crate::models::{
        AccommodationClaim, AccommodationMethod, ComplianceWarning, DistanceLookup, FareVehicle,
        PersonnelGrade, PrivateVehicle, RoomType, TrainingMealPlan, TrainingVenue, TravelWindow,
        TripType,
    };
    use chrono::NaiveDateTime;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn at(s: &str) -> NaiveDateTime {
        NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M").unwrap()
    }

    fn overnight_window() -> TravelWindow {
        TravelWindow::new(at("2025-11-03 07:00"), at("2025-11-05 20:00"), true).unwrap()
    }

    fn base_request() -> ClaimRequest {
        ClaimRequest {
            traveler_id: Some("T-0001".to_string()),
            grade: PersonnelGrade::Junior,
            window: overnight_window(),
            meals_provided: 0,
            accommodation: None,
            transport: Vec::new(),
            training_meals: None,
        }
    }

    #[test]
    fn test_per_diem_only_claim() {
        let summary = compute_claim(&base_request(), &RateSchedule::thai_2568()).unwrap();

        // 61 hours: 2 full days plus a 13 hour remainder
        assert_eq!(summary.per_diem.days_count, dec("3"));
        assert_eq!(summary.totals.per_diem, dec("720"));
        assert_eq!(summary.totals.grand_total, dec("720"));
        assert!(summary.accommodation.is_none());
        assert!(summary.training_meals.is_none());
        assert_eq!(summary.audit_trace.steps.len(), 1);
        assert_eq!(summary.audit_trace.steps[0].rule_id, "per_diem");
        assert_eq!(summary.schedule_version, "2568");
    }

    #[test]
    fn test_full_training_claim_totals_and_audit() {
        let mut request = base_request();
        request.meals_provided = 3;
        request.accommodation = Some(AccommodationClaim {
            trip: TripType::Training {
                venue: TrainingVenue::PrivateFacility,
            },
            method: AccommodationMethod::ActualCost,
            nights: 2,
            room_type: RoomType::Single,
            actual_cost: dec("3500"),
            manual_rate: None,
        });
        request.transport = vec![
            TransportItem::SelfDriven {
                vehicle: PrivateVehicle::PrivateCar,
                description: "Office to venue".to_string(),
                distance: DistanceLookup::Resolved { km: dec("150") },
            },
            TransportItem::Fare {
                vehicle: FareVehicle::Taxi,
                description: "Venue to station".to_string(),
                cost: dec("120"),
            },
        ];
        request.training_meals = Some(TrainingMealPlan {
            venue: TrainingVenue::PrivateFacility,
            meal_count: 2,
            snack_count: 2,
        });

        let summary = compute_claim(&request, &RateSchedule::thai_2568()).unwrap();

        assert_eq!(summary.totals.per_diem, dec("480"));
        assert_eq!(summary.totals.accommodation, dec("3200"));
        assert_eq!(summary.totals.transport, dec("720"));
        assert_eq!(summary.totals.training_meals, dec("900"));
        assert_eq!(summary.totals.grand_total, dec("5300"));

        assert_eq!(
            summary.warnings[0],
            ComplianceWarning::DoubleOccupancyRequired.to_string()
        );
        assert_eq!(summary.warnings.len(), 3);

        let rule_ids: Vec<&str> = summary
            .audit_trace
            .steps
            .iter()
            .map(|s| s.rule_id.as_str())
            .collect();
        assert_eq!(
            rule_ids,
            vec![
                "per_diem",
                "accommodation",
                "transport_mileage",
                "transport_fare",
                "training_meals"
            ]
        );
        let numbers: Vec<u32> = summary
            .audit_trace
            .steps
            .iter()
            .map(|s| s.step_number)
            .collect();
        assert_eq!(numbers, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_unresolved_distance_aborts_claim() {
        let mut request = base_request();
        request.transport = vec![TransportItem::SelfDriven {
            vehicle: PrivateVehicle::Motorcycle,
            description: String::new(),
            distance: DistanceLookup::Unresolved {
                reason: "NOT_FOUND".to_string(),
            },
        }];

        assert!(matches!(
            compute_claim(&request, &RateSchedule::thai_2568()),
            Err(EngineError::DistanceUnresolved { .. })
        ));
    }

    #[test]
    fn test_oversized_fares_are_rejected() {
        let fare = TransportItem::Fare {
            vehicle: FareVehicle::Airplane,
            description: String::new(),
            cost: Decimal::MAX,
        };
        let mut request = base_request();
        request.transport = vec![fare.clone(), fare];

        match compute_claim(&request, &RateSchedule::thai_2568()) {
            Err(EngineError::InvalidInput { field, .. }) => assert_eq!(field, "transport"),
            other => panic!("Expected InvalidInput, got {:?}", other),
        }
    }

    #[test]
    fn test_audit_output_mirrors_result() {
        let summary = compute_claim(&base_request(), &RateSchedule::thai_2568()).unwrap();
        let output = &summary.audit_trace.steps[0].output;

        let field = |name: &str| output[name].as_str().map(dec);
        assert_eq!(field("net_amount"), Some(dec("720")));
        assert_eq!(field("days_count"), Some(dec("3")));
    }

    #[test]
    fn test_each_calculation_has_unique_id() {
        let schedule = RateSchedule::thai_2568();
        let first = compute_claim(&base_request(), &schedule).unwrap();
        let second = compute_claim(&base_request(), &schedule).unwrap();

        assert_ne!(first.calculation_id, second.calculation_id);
        assert_eq!(first.totals, second.totals);
    }
}
