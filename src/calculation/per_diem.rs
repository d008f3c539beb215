//! Per-diem allowance calculation functionality.
//!
//! This module classifies a travel window into entitlement days and applies
//! the deduction for meals provided by the host agency.
//!
//! ## Day Count Rules
//!
//! **Overnight trips:** every full 24 hours counts as one day, and a remainder
//! of more than 12 hours counts as one more day.
//!
//! **Day trips:** more than 12 hours is one day, more than 6 hours is half a
//! day, anything shorter earns nothing.
//!
//! All comparisons use whole seconds and are strict.

use rust_decimal::Decimal;

use crate::config::PerDiemTable;
use crate::error::EngineResult;
use crate::models::{PerDiemResult, PersonnelGrade, TravelWindow};

/// Seconds in one entitlement day.
pub const SECONDS_PER_DAY: i64 = 24 * 3600;

/// A remainder longer than this earns a full extra day on overnight trips,
/// and a day trip longer than this earns a full day.
pub const FULL_DAY_THRESHOLD_SECONDS: i64 = 12 * 3600;

/// A day trip longer than this earns half a day.
pub const HALF_DAY_THRESHOLD_SECONDS: i64 = 6 * 3600;

/// Classifies a travel window into entitlement days.
///
/// # Examples
///
/// ```
/// use travel_claim_engine::calculation::classify_days;
/// use travel_claim_engine::models::TravelWindow;
/// use chrono::NaiveDateTime;
/// use rust_decimal::Decimal;
///
/// let start = NaiveDateTime::parse_from_str("2025-11-03 08:00:00", "%Y-%m-%d %H:%M:%S").unwrap();
/// let end = NaiveDateTime::parse_from_str("2025-11-03 16:00:00", "%Y-%m-%d %H:%M:%S").unwrap();
/// let window = TravelWindow::new(start, end, false).unwrap();
///
/// assert_eq!(classify_days(&window), Decimal::new(5, 1));
/// ```
pub fn classify_days(window: &TravelWindow) -> Decimal {
    let total_seconds = window.duration_seconds();

    if window.is_overnight {
        let mut days = total_seconds / SECONDS_PER_DAY;
        if total_seconds % SECONDS_PER_DAY > FULL_DAY_THRESHOLD_SECONDS {
            days += 1;
        }
        Decimal::from(days)
    } else if total_seconds > FULL_DAY_THRESHOLD_SECONDS {
        Decimal::ONE
    } else if total_seconds > HALF_DAY_THRESHOLD_SECONDS {
        Decimal::new(5, 1)
    } else {
        Decimal::ZERO
    }
}

/// Calculates the per-diem allowance for a trip.
///
/// # Arguments
///
/// * `window` - Departure, return and the overnight flag
/// * `grade` - The traveler's grade, selecting the daily rate
/// * `meals_provided` - Meals provided by the host agency
/// * `table` - The per-diem rate table
///
/// # Returns
///
/// A [`PerDiemResult`] where `net_amount = max(0, days * rate - rate / divisor * meals)`,
/// or `InvalidInput` if the window does not end after it starts.
///
/// # Examples
///
/// ```
/// use travel_claim_engine::calculation::compute_per_diem;
/// use travel_claim_engine::config::RateSchedule;
/// use travel_claim_engine::models::{PersonnelGrade, TravelWindow};
/// use chrono::NaiveDateTime;
/// use rust_decimal::Decimal;
///
/// let schedule = RateSchedule::thai_2568();
/// let start = NaiveDateTime::parse_from_str("2025-11-03 08:00:00", "%Y-%m-%d %H:%M:%S").unwrap();
/// let end = NaiveDateTime::parse_from_str("2025-11-05 09:00:00", "%Y-%m-%d %H:%M:%S").unwrap();
/// let window = TravelWindow::new(start, end, true).unwrap();
///
/// let result = compute_per_diem(&window, PersonnelGrade::Junior, 1, &schedule.per_diem).unwrap();
/// assert_eq!(result.days_count, Decimal::from(2));
/// assert_eq!(result.base_amount, Decimal::from(480));
/// assert_eq!(result.deduction, Decimal::from(80));
/// assert_eq!(result.net_amount, Decimal::from(400));
/// ```
pub fn compute_per_diem(
    window: &TravelWindow,
    grade: PersonnelGrade,
    meals_provided: u32,
    table: &PerDiemTable,
) -> EngineResult<PerDiemResult> {
    window.validate()?;

    let days_count = classify_days(window);
    let rate_per_day = *table.daily_rate.get(grade);
    let base_amount = days_count * rate_per_day;

    let deduction = rate_per_day / table.meal_deduction_divisor * Decimal::from(meals_provided);
    let net_amount = (base_amount - deduction).max(Decimal::ZERO);

    Ok(PerDiemResult {
        days_count,
        rate_per_day,
        base_amount,
        meals_provided,
        deduction,
        net_amount,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::RateSchedule;
    use crate::error::EngineError;
    use chrono::{Duration, NaiveDateTime};
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn departure() -> NaiveDateTime {
        NaiveDateTime::parse_from_str("2025-11-03 06:00:00", "%Y-%m-%d %H:%M:%S").unwrap()
    }

    fn window_of(seconds: i64, is_overnight: bool) -> TravelWindow {
        let start = departure();
        TravelWindow::new(start, start + Duration::seconds(seconds), is_overnight).unwrap()
    }

    fn table() -> PerDiemTable {
        RateSchedule::thai_2568().per_diem
    }

    const H: i64 = 3600;

    /// PD-001: exactly 24 hours overnight is one day
    #[test]
    fn test_pd_001_overnight_exactly_24h() {
        assert_eq!(classify_days(&window_of(24 * H, true)), dec("1"));
    }

    /// PD-002: 24h + 12h00m01s overnight is two days
    #[test]
    fn test_pd_002_overnight_remainder_just_over_12h() {
        assert_eq!(classify_days(&window_of(36 * H + 1, true)), dec("2"));
    }

    /// PD-003: 24h + 11h59m59s overnight is one day
    #[test]
    fn test_pd_003_overnight_remainder_just_under_12h() {
        assert_eq!(classify_days(&window_of(36 * H - 1, true)), dec("1"));
    }

    #[test]
    fn test_overnight_remainder_exactly_12h_not_counted() {
        assert_eq!(classify_days(&window_of(36 * H, true)), dec("1"));
    }

    #[test]
    fn test_overnight_shorter_than_a_day_with_long_remainder() {
        // 13 hours flagged overnight: zero full days, remainder over 12h
        assert_eq!(classify_days(&window_of(13 * H, true)), dec("1"));
    }

    #[test]
    fn test_overnight_three_days_and_a_half() {
        assert_eq!(classify_days(&window_of(3 * 24 * H + 13 * H, true)), dec("4"));
    }

    /// PD-004: day trip of exactly 12 hours is half a day
    #[test]
    fn test_pd_004_day_trip_exactly_12h() {
        assert_eq!(classify_days(&window_of(12 * H, false)), dec("0.5"));
    }

    /// PD-005: day trip of 12h00m01s is one day
    #[test]
    fn test_pd_005_day_trip_just_over_12h() {
        assert_eq!(classify_days(&window_of(12 * H + 1, false)), dec("1"));
    }

    /// PD-006: day trip of exactly 6 hours earns nothing
    #[test]
    fn test_pd_006_day_trip_exactly_6h() {
        assert_eq!(classify_days(&window_of(6 * H, false)), dec("0"));
    }

    /// PD-007: day trip of 6h00m01s is half a day
    #[test]
    fn test_pd_007_day_trip_just_over_6h() {
        assert_eq!(classify_days(&window_of(6 * H + 1, false)), dec("0.5"));
    }

    #[test]
    fn test_day_trip_longer_than_a_day_caps_at_one() {
        assert_eq!(classify_days(&window_of(30 * H, false)), dec("1"));
    }

    /// PD-008: deduction larger than the base clamps net at zero
    #[test]
    fn test_pd_008_meal_deduction_clamps_at_zero() {
        let result =
            compute_per_diem(&window_of(24 * H, true), PersonnelGrade::Junior, 4, &table()).unwrap();

        assert_eq!(result.days_count, dec("1"));
        assert_eq!(result.rate_per_day, dec("240"));
        assert_eq!(result.base_amount, dec("240"));
        assert_eq!(result.deduction, dec("320"));
        assert_eq!(result.net_amount, dec("0"));
    }

    #[test]
    fn test_senior_half_day_rate() {
        let result =
            compute_per_diem(&window_of(8 * H, false), PersonnelGrade::Senior, 0, &table()).unwrap();

        assert_eq!(result.rate_per_day, dec("270"));
        assert_eq!(result.base_amount, dec("135"));
        assert_eq!(result.deduction, dec("0"));
        assert_eq!(result.net_amount, dec("135"));
    }

    #[test]
    fn test_senior_meal_deduction_is_a_third_of_rate() {
        let result =
            compute_per_diem(&window_of(48 * H, true), PersonnelGrade::Senior, 2, &table()).unwrap();

        assert_eq!(result.base_amount, dec("540"));
        assert_eq!(result.deduction, dec("180"));
        assert_eq!(result.net_amount, dec("360"));
        assert_eq!(result.meals_provided, 2);
    }

    #[test]
    fn test_inverted_window_rejected() {
        let window = TravelWindow {
            start: departure(),
            end: departure() - Duration::hours(1),
            is_overnight: false,
        };

        let result = compute_per_diem(&window, PersonnelGrade::Junior, 0, &table());
        assert!(matches!(result, Err(EngineError::InvalidInput { .. })));
    }

    #[test]
    fn test_idempotent() {
        let window = window_of(40 * H, true);
        let first = compute_per_diem(&window, PersonnelGrade::Junior, 1, &table()).unwrap();
        let second = compute_per_diem(&window, PersonnelGrade::Junior, 1, &table()).unwrap();
        assert_eq!(first, second);
    }

    mod property_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn prop_net_never_negative(
                seconds in 1i64..(30 * 24 * H),
                overnight in any::<bool>(),
                meals in 0u32..20,
                senior in any::<bool>(),
            ) {
                let grade = if senior { PersonnelGrade::Senior } else { PersonnelGrade::Junior };
                let result = compute_per_diem(&window_of(seconds, overnight), grade, meals, &table()).unwrap();
                prop_assert!(result.net_amount >= Decimal::ZERO);
                prop_assert!(result.net_amount <= result.base_amount);
            }

            #[test]
            fn prop_days_quantized_to_halves(
                seconds in 1i64..(30 * 24 * H),
                overnight in any::<bool>(),
            ) {
                let days = classify_days(&window_of(seconds, overnight));
                prop_assert_eq!((days * Decimal::TWO).fract(), Decimal::ZERO);
            }

            #[test]
            fn prop_days_non_decreasing_in_duration(
                seconds in 1i64..(30 * 24 * H),
                extra in 0i64..(2 * 24 * H),
                overnight in any::<bool>(),
            ) {
                let shorter = classify_days(&window_of(seconds, overnight));
                let longer = classify_days(&window_of(seconds + extra, overnight));
                prop_assert!(longer >= shorter);
            }
        }
    }
}
