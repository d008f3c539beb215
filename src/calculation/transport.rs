//! Transport reimbursement calculation functionality.
//!
//! Self-driven legs are paid by the kilometer at the mileage rate for the
//! vehicle. Fare legs are paid as receipted. Public-transport fares on
//! cross-province routes are additionally checked against a route cap.

use rust_decimal::Decimal;

use crate::config::{MileageRates, PublicFareCaps, TransportTables};
use crate::error::{EngineError, EngineResult};
use crate::models::{
    ComplianceWarning, DistanceLookup, PrivateVehicle, PublicFareRequest, PublicFareResult,
    TransportItem, TransportResult, VehicleKind,
};

use super::checked_mul;

/// Calculates the mileage reimbursement for a self-driven leg.
///
/// # Examples
///
/// ```
/// use travel_claim_engine::calculation::compute_transport;
/// use travel_claim_engine::config::RateSchedule;
/// use travel_claim_engine::models::PrivateVehicle;
/// use rust_decimal::Decimal;
///
/// let schedule = RateSchedule::thai_2568();
/// let result = compute_transport(
///     PrivateVehicle::PrivateCar,
///     Decimal::new(1234, 1),
///     &schedule.transport.mileage,
/// ).unwrap();
///
/// assert_eq!(result.rate, Some(Decimal::from(4)));
/// assert_eq!(result.reimbursable_amount, Decimal::new(4936, 1));
/// ```
pub fn compute_transport(
    vehicle: PrivateVehicle,
    distance_km: Decimal,
    mileage: &MileageRates,
) -> EngineResult<TransportResult> {
    if distance_km < Decimal::ZERO {
        return Err(EngineError::invalid_input(
            "distance_km",
            format!("must not be negative, got {}", distance_km),
        ));
    }

    let rate = mileage.get(vehicle);
    let reimbursable_amount = checked_mul(distance_km, rate, "distance_km")?;

    Ok(TransportResult {
        vehicle: VehicleKind::Private(vehicle),
        description: None,
        distance_km: Some(distance_km),
        rate: Some(rate),
        reimbursable_amount,
    })
}

/// Calculates the reimbursement for one transport line of a claim.
///
/// Self-driven legs need a resolved distance; an unresolved lookup fails
/// with `DistanceUnresolved` instead of guessing. Fare legs pass their cost
/// through unchanged.
pub fn compute_transport_item(
    item: &TransportItem,
    tables: &TransportTables,
) -> EngineResult<TransportResult> {
    match item {
        TransportItem::SelfDriven {
            vehicle,
            description,
            distance,
        } => {
            let km = match distance {
                DistanceLookup::Resolved { km } => *km,
                DistanceLookup::Unresolved { reason } => {
                    return Err(EngineError::DistanceUnresolved {
                        reason: reason.clone(),
                    });
                }
            };

            let mut result = compute_transport(*vehicle, km, &tables.mileage)?;
            result.description = non_empty(description);
            Ok(result)
        }
        TransportItem::Fare {
            vehicle,
            description,
            cost,
        } => {
            if *cost < Decimal::ZERO {
                return Err(EngineError::invalid_input(
                    "cost",
                    format!("must not be negative, got {}", cost),
                ));
            }

            Ok(TransportResult {
                vehicle: VehicleKind::Fare(*vehicle),
                description: non_empty(description),
                distance_km: None,
                rate: None,
                reimbursable_amount: *cost,
            })
        }
    }
}

/// Checks a public-transport fare against the cap for its route.
///
/// Intra-province fares are reimbursed as paid. Cross-province fares are
/// capped, and a fare above the cap is flagged as not approved.
///
/// # Examples
///
/// ```
/// use travel_claim_engine::calculation::compute_public_fare;
/// use travel_claim_engine::config::RateSchedule;
/// use travel_claim_engine::models::{PublicFareRequest, PublicRouteType};
/// use rust_decimal::Decimal;
///
/// let schedule = RateSchedule::thai_2568();
/// let request = PublicFareRequest {
///     route_type: PublicRouteType::CrossToBangkok,
///     actual_cost: Decimal::from(750),
/// };
///
/// let result = compute_public_fare(&request, &schedule.transport.public_fare_caps).unwrap();
/// assert_eq!(result.reimbursable_amount, Decimal::from(600));
/// assert!(!result.approved);
/// ```
pub fn compute_public_fare(
    request: &PublicFareRequest,
    caps: &PublicFareCaps,
) -> EngineResult<PublicFareResult> {
    if request.actual_cost < Decimal::ZERO {
        return Err(EngineError::invalid_input(
            "actual_cost",
            format!("must not be negative, got {}", request.actual_cost),
        ));
    }

    let limit = caps.get(request.route_type);
    let (reimbursable_amount, approved) = match limit {
        Some(cap) => (request.actual_cost.min(cap), request.actual_cost <= cap),
        None => (request.actual_cost, true),
    };

    let mut warnings = Vec::new();
    if let (Some(cap), false) = (limit, approved) {
        warnings.push(
            ComplianceWarning::FareCapExceeded {
                actual_cost: request.actual_cost,
                cap,
            }
            .to_string(),
        );
    }

    Ok(PublicFareResult {
        route_type: request.route_type,
        actual_cost: request.actual_cost,
        limit,
        reimbursable_amount,
        approved,
        warnings,
    })
}

fn non_empty(description: &str) -> Option<String> {
    let trimmed = description.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
