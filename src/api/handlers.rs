//! HTTP request handlers for the Travel Claim Engine API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::post,
};
use serde::Serialize;
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{
    compute_accommodation, compute_claim, compute_per_diem, compute_public_fare,
    compute_taxi_fare, compute_training_meals, compute_transport_item,
};
use crate::error::EngineResult;
use crate::models::{
    ClaimRequest, PublicFareRequest, Reimbursement, TaxiFareRequest, TrainingMealRequest,
    TransportItem,
};

use super::request::{AccommodationRequest, PerDiemRequest};
use super::response::{ApiError, ApiErrorResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/per-diem", post(per_diem_handler))
        .route("/accommodation", post(accommodation_handler))
        .route("/transport", post(transport_handler))
        .route("/public-fare", post(public_fare_handler))
        .route("/taxi-fare", post(taxi_fare_handler))
        .route("/training-meals", post(training_meals_handler))
        .route("/claims", post(claim_handler))
        .with_state(state)
}

/// Handler for POST /per-diem.
async fn per_diem_handler(
    State(state): State<AppState>,
    payload: Result<Json<PerDiemRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing per-diem request");

    let request = match parse_payload(correlation_id, payload) {
        Ok(request) => request,
        Err(error) => return error.into_response(),
    };

    let start_time = Instant::now();
    let result = compute_per_diem(
        &request.window,
        request.grade,
        request.meals_provided,
        &state.schedule().per_diem,
    );
    respond(correlation_id, "per-diem", start_time, result)
}

/// Handler for POST /accommodation.
async fn accommodation_handler(
    State(state): State<AppState>,
    payload: Result<Json<AccommodationRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing accommodation request");

    let request = match parse_payload(correlation_id, payload) {
        Ok(request) => request,
        Err(error) => return error.into_response(),
    };

    let start_time = Instant::now();
    let result = compute_accommodation(
        request.grade,
        &request.accommodation,
        &state.schedule().accommodation,
    );
    respond(correlation_id, "accommodation", start_time, result)
}

/// Handler for POST /transport.
async fn transport_handler(
    State(state): State<AppState>,
    payload: Result<Json<TransportItem>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing transport request");

    let item = match parse_payload(correlation_id, payload) {
        Ok(item) => item,
        Err(error) => return error.into_response(),
    };

    let start_time = Instant::now();
    let result = compute_transport_item(&item, &state.schedule().transport);
    respond(correlation_id, "transport", start_time, result)
}

/// Handler for POST /public-fare.
async fn public_fare_handler(
    State(state): State<AppState>,
    payload: Result<Json<PublicFareRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing public fare request");

    let request = match parse_payload(correlation_id, payload) {
        Ok(request) => request,
        Err(error) => return error.into_response(),
    };

    let start_time = Instant::now();
    let result = compute_public_fare(&request, &state.schedule().transport.public_fare_caps);
    respond(correlation_id, "public-fare", start_time, result)
}

/// Handler for POST /taxi-fare.
async fn taxi_fare_handler(
    State(state): State<AppState>,
    payload: Result<Json<TaxiFareRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing taxi fare request");

    let request = match parse_payload(correlation_id, payload) {
        Ok(request) => request,
        Err(error) => return error.into_response(),
    };

    let start_time = Instant::now();
    let result = compute_taxi_fare(&request, &state.schedule().transport.taxi);
    respond(correlation_id, "taxi-fare", start_time, result)
}

/// Handler for POST /training-meals.
async fn training_meals_handler(
    State(state): State<AppState>,
    payload: Result<Json<TrainingMealRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing training meals request");

    let request = match parse_payload(correlation_id, payload) {
        Ok(request) => request,
        Err(error) => return error.into_response(),
    };

    let start_time = Instant::now();
    let result = compute_training_meals(&request, &state.schedule().training_meals);
    respond(correlation_id, "training-meals", start_time, Ok(result))
}

/// Handler for POST /claims.
///
/// Computes every component of a claim and returns the summary with its
/// audit trace.
async fn claim_handler(
    State(state): State<AppState>,
    payload: Result<Json<ClaimRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing claim request");

    let request = match parse_payload(correlation_id, payload) {
        Ok(request) => request,
        Err(error) => return error.into_response(),
    };

    if let Some(traveler_id) = &request.traveler_id {
        info!(correlation_id = %correlation_id, traveler_id = %traveler_id, "Claim traveler");
    }

    let start_time = Instant::now();
    let result = compute_claim(&request, state.schedule());
    respond(correlation_id, "claims", start_time, result)
}

/// Unwraps a JSON body, mapping extractor rejections to API errors.
fn parse_payload<T>(
    correlation_id: Uuid,
    payload: Result<Json<T>, JsonRejection>,
) -> Result<T, ApiErrorResponse> {
    let rejection = match payload {
        Ok(Json(request)) => return Ok(request),
        Err(rejection) => rejection,
    };

    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            // The body text carries serde's detailed message
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            if body_text.contains("missing field") {
                ApiError::validation_error(body_text)
            } else {
                ApiError::malformed_json(body_text)
            }
        }
        JsonRejection::JsonSyntaxError(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "JSON syntax error"
            );
            ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
        }
        JsonRejection::MissingJsonContentType(_) => {
            ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
        }
        _ => ApiError::malformed_json("Failed to parse request body"),
    };

    Err(ApiErrorResponse::bad_request(error))
}

/// Serializes an engine result, or maps its error to an API error.
fn respond<T>(
    correlation_id: Uuid,
    route: &str,
    start_time: Instant,
    result: EngineResult<T>,
) -> Response
where
    T: Serialize + Reimbursement,
{
    match result {
        Ok(result) => {
            info!(
                correlation_id = %correlation_id,
                route,
                amount = %result.reimbursable_amount(),
                approved = result.is_approved(),
                warnings = result.warnings().len(),
                duration_us = start_time.elapsed().as_micros() as u64,
                "Calculation completed successfully"
            );
            (
                StatusCode::OK,
                [(header::CONTENT_TYPE, "application/json")],
                Json(result),
            )
                .into_response()
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                route,
                error = %err,
                "Calculation failed"
            );
            ApiErrorResponse::from(err).into_response()
        }
    }
}
