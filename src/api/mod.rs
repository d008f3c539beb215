//! HTTP API module for the Travel Claim Engine.
//!
//! This module exposes each reimbursement engine, and the whole-claim
//! calculation, as a JSON endpoint.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{AccommodationRequest, PerDiemRequest};
pub use response::{ApiError, ApiErrorResponse};
pub use state::AppState;
