//! Metered taxi fare estimation.
//!
//! The tariff is a piecewise-linear ladder over distance plus additive charges.
//!
//! ## Rate Structure
//!
//! - Flag-fall covers the first kilometer.
//! - The remaining distance fills each band in order until it is used up:
//!   9 km at 6.5, 10 km at 7.0, 20 km at 8.0, 20 km at 8.5, 20 km at 9.0.
//! - Anything beyond the last band is billed at 10.5 per km.
//! - Traffic time is billed per minute; app booking and airport pickups add a
//!   flat surcharge each.
//!
//! Amounts are exact; nothing is rounded to meter increments.

use rust_decimal::Decimal;

use crate::config::TaxiTariff;
use crate::error::{EngineError, EngineResult};
use crate::models::{TaxiBandCharge, TaxiFareRequest, TaxiFareResult};

use super::{checked_add, checked_mul};

/// Estimates the metered fare for a taxi trip.
///
/// # Arguments
///
/// * `request` - Distance, traffic minutes and surcharge flags
/// * `tariff` - The taxi tariff table
///
/// # Returns
///
/// A [`TaxiFareResult`] whose `distance_fare` is the flag-fall plus every band
/// charge, before traffic and surcharges. Fails with `InvalidInput` for a
/// negative distance or a fare too large to represent.
///
/// # Examples
///
/// ```
/// use travel_claim_engine::calculation::compute_taxi_fare;
/// use travel_claim_engine::config::RateSchedule;
/// use travel_claim_engine::models::TaxiFareRequest;
/// use rust_decimal::Decimal;
///
/// let schedule = RateSchedule::thai_2568();
/// let request = TaxiFareRequest {
///     distance_km: Decimal::from(11),
///     traffic_minutes: 0,
///     app_booking: false,
///     airport: false,
/// };
///
/// let result = compute_taxi_fare(&request, &schedule.transport.taxi).unwrap();
/// assert_eq!(result.total_fare, Decimal::new(1005, 1));
/// assert_eq!(result.bands.len(), 2);
/// ```
pub fn compute_taxi_fare(
    request: &TaxiFareRequest,
    tariff: &TaxiTariff,
) -> EngineResult<TaxiFareResult> {
    if request.distance_km < Decimal::ZERO {
        return Err(EngineError::invalid_input(
            "distance_km",
            format!("must not be negative, got {}", request.distance_km),
        ));
    }

    let bands = band_charges(request.distance_km, tariff)?;
    let mut distance_fare = tariff.base_fare;
    for band in &bands {
        distance_fare = checked_add(distance_fare, band.amount, "distance_km")?;
    }

    let traffic_fare = checked_mul(
        Decimal::from(request.traffic_minutes),
        tariff.traffic_rate_per_minute,
        "traffic_minutes",
    )?;

    let mut surcharges = Decimal::ZERO;
    if request.app_booking {
        surcharges += tariff.app_booking_fee;
    }
    if request.airport {
        surcharges += tariff.airport_surcharge;
    }

    let total_fare = checked_add(distance_fare, traffic_fare, "distance_km")?;
    let total_fare = checked_add(total_fare, surcharges, "distance_km")?;

    Ok(TaxiFareResult {
        distance_km: request.distance_km,
        bands,
        distance_fare,
        traffic_minutes: request.traffic_minutes,
        traffic_fare,
        surcharges,
        total_fare,
    })
}

/// Splits the distance past the flag-fall across the tariff bands.
///
/// Only bands that actually accrue distance are returned. The overflow band
/// has no upper bound.
fn band_charges(
    distance_km: Decimal,
    tariff: &TaxiTariff,
) -> EngineResult<Vec<TaxiBandCharge>> {
    let mut charges = Vec::new();
    let mut remaining = distance_km - tariff.base_distance_km;
    let mut from_km = tariff.base_distance_km;

    for band in &tariff.bands {
        if remaining <= Decimal::ZERO {
            return Ok(charges);
        }

        let billed = remaining.min(band.length_km);
        charges.push(TaxiBandCharge {
            from_km,
            to_km: Some(from_km + band.length_km),
            distance_km: billed,
            rate_per_km: band.rate_per_km,
            amount: checked_mul(billed, band.rate_per_km, "distance_km")?,
        });

        remaining -= billed;
        from_km += band.length_km;
    }

    if remaining > Decimal::ZERO {
        charges.push(TaxiBandCharge {
            from_km,
            to_km: None,
            distance_km: remaining,
            rate_per_km: tariff.overflow_rate_per_km,
            amount: checked_mul(remaining, tariff.overflow_rate_per_km, "distance_km")?,
        });
    }

    Ok(charges)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::RateSchedule;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn tariff() -> TaxiTariff {
        RateSchedule::thai_2568().transport.taxi
    }

    fn request(distance: &str) -> TaxiFareRequest {
        TaxiFareRequest {
            distance_km: dec(distance),
            traffic_minutes: 0,
            app_booking: false,
            airport: false,
        }
    }

    /// TX-001: zero distance is the flag-fall only
    #[test]
    fn test_tx_001_zero_distance_is_base_fare() {
        let result = compute_taxi_fare(&request("0"), &tariff()).unwrap();

        assert!(result.bands.is_empty());
        assert_eq!(result.distance_fare, dec("35"));
        assert_eq!(result.surcharges, dec("0"));
        assert_eq!(result.total_fare, dec("35"));
    }

    #[test]
    fn test_within_first_kilometer_is_base_fare() {
        let result = compute_taxi_fare(&request("0.8"), &tariff()).unwrap();
        assert_eq!(result.total_fare, dec("35"));
        assert!(result.bands.is_empty());
    }

    /// TX-002: 11 km crosses into the second band
    #[test]
    fn test_tx_002_eleven_km() {
        let result = compute_taxi_fare(&request("11"), &tariff()).unwrap();

        assert_eq!(result.bands.len(), 2);
        assert_eq!(result.bands[0].distance_km, dec("9"));
        assert_eq!(result.bands[0].amount, dec("58.5"));
        assert_eq!(result.bands[1].from_km, dec("10"));
        assert_eq!(result.bands[1].to_km, Some(dec("20")));
        assert_eq!(result.bands[1].distance_km, dec("1"));
        assert_eq!(result.bands[1].amount, dec("7"));
        assert_eq!(result.distance_fare, dec("100.5"));
        assert_eq!(result.total_fare, dec("100.5"));
    }

    #[test]
    fn test_exactly_eighty_km_fills_every_band() {
        let result = compute_taxi_fare(&request("80"), &tariff()).unwrap();

        // 35 + 58.5 + 70 + 160 + 170 + 180
        assert_eq!(result.bands.len(), 5);
        assert_eq!(result.distance_fare, dec("673.5"));
    }

    /// TX-003: distance past the last band uses the overflow rate
    #[test]
    fn test_tx_003_overflow_band() {
        let result = compute_taxi_fare(&request("100"), &tariff()).unwrap();

        let overflow = result.bands.last().unwrap();
        assert_eq!(overflow.from_km, dec("80"));
        assert_eq!(overflow.to_km, None);
        assert_eq!(overflow.distance_km, dec("20"));
        assert_eq!(overflow.amount, dec("210"));
        assert_eq!(result.distance_fare, dec("883.5"));
    }

    /// TX-004: traffic minutes and surcharges are added on top
    #[test]
    fn test_tx_004_traffic_and_surcharges() {
        let mut req = request("11");
        req.traffic_minutes = 10;
        req.app_booking = true;
        req.airport = true;

        let result = compute_taxi_fare(&req, &tariff()).unwrap();

        assert_eq!(result.distance_fare, dec("100.5"));
        assert_eq!(result.traffic_fare, dec("30"));
        assert_eq!(result.surcharges, dec("70"));
        assert_eq!(result.total_fare, dec("200.5"));
    }

    #[test]
    fn test_fractional_distance_exact() {
        let result = compute_taxi_fare(&request("2.5"), &tariff()).unwrap();
        // 35 + 1.5 * 6.5
        assert_eq!(result.total_fare, dec("44.75"));
    }

    #[test]
    fn test_negative_distance_rejected() {
        assert!(matches!(
            compute_taxi_fare(&request("-3"), &tariff()),
            Err(EngineError::InvalidInput { .. })
        ));
    }

    #[test]
    fn test_oversized_distance_rejected() {
        let req = TaxiFareRequest {
            distance_km: Decimal::MAX,
            ..request("0")
        };

        match compute_taxi_fare(&req, &tariff()) {
            Err(EngineError::InvalidInput { field, .. }) => assert_eq!(field, "distance_km"),
            other => panic!("Expected InvalidInput, got {:?}", other),
        }
    }

    #[test]
    fn test_same_trip_gives_same_fare() {
        let mut req = request("37.4");
        req.traffic_minutes = 12;
        req.airport = true;

        let first = compute_taxi_fare(&req, &tariff()).unwrap();
        let second = compute_taxi_fare(&req, &tariff()).unwrap();
        assert_eq!(first, second);
    }

    mod property_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn prop_fare_non_decreasing_in_distance(
                tenths in 0i64..2_000,
                extra in 0i64..500,
            ) {
                let shorter = compute_taxi_fare(&request(&Decimal::new(tenths, 1).to_string()), &tariff()).unwrap();
                let longer = compute_taxi_fare(&request(&Decimal::new(tenths + extra, 1).to_string()), &tariff()).unwrap();
                prop_assert!(longer.total_fare >= shorter.total_fare);
            }

            #[test]
            fn prop_fare_non_decreasing_in_minutes_and_flags(
                tenths in 0i64..2_000,
                minutes in 0u32..300,
                extra_minutes in 0u32..60,
                app in any::<bool>(),
                airport in any::<bool>(),
            ) {
                let base = TaxiFareRequest {
                    distance_km: Decimal::new(tenths, 1),
                    traffic_minutes: minutes,
                    app_booking: app,
                    airport,
                };
                let more = TaxiFareRequest {
                    traffic_minutes: minutes + extra_minutes,
                    app_booking: true,
                    airport: true,
                    ..base.clone()
                };

                let base_fare = compute_taxi_fare(&base, &tariff()).unwrap();
                let more_fare = compute_taxi_fare(&more, &tariff()).unwrap();
                prop_assert!(more_fare.total_fare >= base_fare.total_fare);
            }

            #[test]
            fn prop_band_distances_sum_to_metered_distance(tenths in 0i64..2_000) {
                let km = Decimal::new(tenths, 1);
                let result = compute_taxi_fare(&request(&km.to_string()), &tariff()).unwrap();
                let billed: Decimal = result.bands.iter().map(|b| b.distance_km).sum();
                prop_assert_eq!(billed, (km - Decimal::ONE).max(Decimal::ZERO));
            }
        }
    }
}
