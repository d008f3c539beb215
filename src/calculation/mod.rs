//! Calculation logic for the Travel Claim Engine.
//!
//! This module contains the reimbursement engines: per-diem day classification
//! and meal deduction, accommodation ceilings and approval, private-vehicle
//! mileage and public fare caps, the metered taxi tariff, and training meal
//! budgets. [`compute_claim`] runs them together for a whole claim.
//!
//! Every engine is a pure function of its request and the rate table it
//! borrows.

use rust_decimal::Decimal;

use crate::error::{EngineError, EngineResult};

mod accommodation;
mod claim;
mod per_diem;
mod taxi_fare;
mod training_meal;
mod transport;

pub use accommodation::compute_accommodation;
pub use claim::compute_claim;
pub use per_diem::{
    FULL_DAY_THRESHOLD_SECONDS, HALF_DAY_THRESHOLD_SECONDS, SECONDS_PER_DAY, classify_days,
    compute_per_diem,
};
pub use taxi_fare::compute_taxi_fare;
pub use training_meal::compute_training_meals;
pub use transport::{compute_public_fare, compute_transport, compute_transport_item};

/// Multiplies two amounts; overflow is reported against `field`.
fn checked_mul(lhs: Decimal, rhs: Decimal, field: &str) -> EngineResult<Decimal> {
    lhs.checked_mul(rhs).ok_or_else(|| EngineError::amount_overflow(field))
}

/// Adds two amounts; overflow is reported against `field`.
fn checked_add(lhs: Decimal, rhs: Decimal, field: &str) -> EngineResult<Decimal> {
    lhs.checked_add(rhs).ok_or_else(|| EngineError::amount_overflow(field))
}
