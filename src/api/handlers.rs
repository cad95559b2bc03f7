//! HTTP request handlers for the rating API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{HeaderName, StatusCode, header},
    response::{IntoResponse, Response},
    routing::post,
};
use tracing::{error, info, warn};
use uuid::Uuid;

use crate::error::EngineError;
use crate::models::Workbook;
use crate::pipeline::rate_workbook;

use super::request::RatingRequest;
use super::response::{ApiError, ApiErrorResponse};
use super::state::AppState;

/// Header carrying the batch id of a successful run.
pub const BATCH_ID_HEADER: &str = "x-batch-id";

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/rate", post(rate_handler))
        .with_state(state)
}

/// Handler for POST /rate endpoint.
///
/// Accepts a workbook and returns the rated order sheet as CSV.
async fn rate_handler(
    State(state): State<AppState>,
    payload: Result<Json<RatingRequest>, JsonRejection>,
) -> Response {
    // Generate correlation ID for request tracking
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing rating request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => {
            let error = match rejection {
                JsonRejection::JsonDataError(err) => {
                    let body_text = err.body_text();
                    warn!(correlation_id = %correlation_id, error = %body_text, "JSON data error");
                    ApiError::malformed_json(body_text)
                }
                JsonRejection::JsonSyntaxError(err) => {
                    warn!(correlation_id = %correlation_id, error = %err, "JSON syntax error");
                    ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
                }
                JsonRejection::MissingJsonContentType(_) => {
                    ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
                }
                _ => ApiError::malformed_json("Failed to parse request body"),
            };
            return (StatusCode::BAD_REQUEST, Json(error)).into_response();
        }
    };

    let workbook: Workbook = request.into();
    let config = state.shared_config();
    let start_time = Instant::now();

    // Rating is synchronous; a panic inside it surfaces as a JoinError here
    let outcome = tokio::task::spawn_blocking(move || {
        let batch = rate_workbook(&workbook, config.config())?;
        let csv = batch.table.to_csv()?;
        Ok::<_, EngineError>((batch.summary, csv))
    })
    .await;

    match outcome {
        Ok(Ok((summary, csv))) => {
            info!(
                correlation_id = %correlation_id,
                batch_id = %summary.batch_id,
                orders = summary.order_count,
                total_charge = %summary.total_charge,
                duration_us = start_time.elapsed().as_micros(),
                "Rating completed successfully"
            );
            let disposition = format!(
                "attachment; filename=\"{}.csv\"",
                state.config().result_sheet
            );
            (
                StatusCode::OK,
                [
                    (header::CONTENT_TYPE, "text/csv; charset=utf-8".to_string()),
                    (header::CONTENT_DISPOSITION, disposition),
                    (
                        HeaderName::from_static(BATCH_ID_HEADER),
                        summary.batch_id.to_string(),
                    ),
                ],
                csv,
            )
                .into_response()
        }
        Ok(Err(err)) => {
            warn!(correlation_id = %correlation_id, error = %err, "Rating rejected");
            ApiErrorResponse::from(err).into_response()
        }
        Err(join_error) => {
            error!(correlation_id = %correlation_id, error = %join_error, "Rating task failed");
            ApiErrorResponse::processing_failed().into_response()
        }
    }
}
