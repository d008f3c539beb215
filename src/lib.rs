//! Travel Claim Engine for Thai government official travel
//!
//! This crate computes reimbursement amounts for official-travel expense claims
//! (per diem, accommodation, vehicle mileage, taxi fares and training meal budgets)
//! from the Ministry of Finance rate schedules, returning itemized, auditable results.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
