//! Training meal and snack budget calculation.
//!
//! The participants' grade selects the course type (senior grades attend
//! "Type A" courses, junior grades "Type B"), and the venue selects the row
//! of the meal budget table.

use rust_decimal::Decimal;

use crate::config::TrainingMealTables;
use crate::models::{MealAllowanceResult, TrainingMealRequest, TrainingType};

/// Calculates the meal and snack budget for a training course.
///
/// # Examples
///
/// ```
/// use travel_claim_engine::calculation::compute_training_meals;
/// use travel_claim_engine::config::RateSchedule;
/// use travel_claim_engine::models::{PersonnelGrade, TrainingMealRequest, TrainingVenue};
/// use rust_decimal::Decimal;
///
/// let schedule = RateSchedule::thai_2568();
/// let request = TrainingMealRequest {
///     grade: PersonnelGrade::Senior,
///     venue: TrainingVenue::PrivateFacility,
///     meal_count: 2,
///     snack_count: 1,
/// };
///
/// let result = compute_training_meals(&request, &schedule.training_meals);
/// assert_eq!(result.meal_total, Decimal::from(1400));
/// assert_eq!(result.snack_total, Decimal::from(50));
/// assert_eq!(result.grand_total, Decimal::from(1450));
/// ```
pub fn compute_training_meals(
    request: &TrainingMealRequest,
    tables: &TrainingMealTables,
) -> MealAllowanceResult {
    let training_type = TrainingType::from(request.grade);
    let rates = tables.get(request.venue, training_type);

    let meal_total = Decimal::from(request.meal_count) * rates.meal;
    let snack_total = Decimal::from(request.snack_count) * rates.snack;

    MealAllowanceResult {
        training_type,
        venue: request.venue,
        meal_rate: rates.meal,
        snack_rate: rates.snack,
        meal_count: request.meal_count,
        snack_count: request.snack_count,
        meal_total,
        snack_total,
        grand_total: meal_total + snack_total,
    }
}
