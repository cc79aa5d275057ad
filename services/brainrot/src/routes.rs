//! Brainrot service routes

use axum::{
    Json, Router,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use serde_json::json;
use tower_http::trace::TraceLayer;
use tracing::{debug, error};
use uuid::Uuid;

use crate::{
    error::{ApiError, ApiResult},
    models::{BrainrotInput, BrainrotPayload},
    state::AppState,
};

/// Create the router for the Brainrot service
pub fn create_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .route("/brainrot", get(get_brainrots).post(create_brainrot))
        .route(
            "/brainrot/:id",
            get(get_brainrot)
                .put(update_brainrot)
                .delete(delete_brainrot),
        );

    Router::new()
        .route("/health", get(health_check))
        .nest("/api/v1", api_routes)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Path ids that are not UUIDs cannot name a stored record
fn parse_id(id: &str) -> ApiResult<Uuid> {
    Uuid::parse_str(id).map_err(|_| ApiError::brainrot_not_found())
}

/// Presence check on a request body.
///
/// A body that is absent, not JSON, or has a mistyped field is treated like
/// an empty object.
fn validate_payload(
    payload: Result<Json<BrainrotPayload>, JsonRejection>,
) -> ApiResult<BrainrotInput> {
    let payload = payload
        .map(|Json(payload)| payload)
        .unwrap_or_else(|rejection| {
            debug!("Unreadable request body: {}", rejection);
            BrainrotPayload::default()
        });

    payload.validate().ok_or_else(ApiError::missing_fields)
}

/// Health check endpoint
pub async fn health_check() -> impl IntoResponse {
    Json(json!({
        "status": "ok",
        "service": "brainrot-service"
    }))
}

/// Get all brainrots, newest first
pub async fn get_brainrots(State(state): State<AppState>) -> ApiResult<impl IntoResponse> {
    let brainrots = state.brainrot_service.get_all().await.map_err(|e| {
        error!("Failed to get brainrots: {}", e);
        ApiError::InternalServerError
    })?;

    Ok(Json(brainrots))
}

/// Get a brainrot by ID
pub async fn get_brainrot(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<impl IntoResponse> {
    let id = parse_id(&id)?;

    let brainrot = state
        .brainrot_service
        .get_by_id(id)
        .await
        .map_err(|e| {
            error!("Failed to get brainrot {}: {}", id, e);
            ApiError::InternalServerError
        })?
        .ok_or_else(ApiError::brainrot_not_found)?;

    Ok(Json(brainrot))
}

/// Create a new brainrot
pub async fn create_brainrot(
    State(state): State<AppState>,
    payload: Result<Json<BrainrotPayload>, JsonRejection>,
) -> ApiResult<impl IntoResponse> {
    let input = validate_payload(payload)?;

    let brainrot = state.brainrot_service.create(input).await.map_err(|e| {
        error!("Failed to create brainrot: {}", e);
        ApiError::InternalServerError
    })?;

    Ok((StatusCode::CREATED, Json(brainrot)))
}

/// Replace every mutable field of a brainrot
pub async fn update_brainrot(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<BrainrotPayload>, JsonRejection>,
) -> ApiResult<impl IntoResponse> {
    let input = validate_payload(payload)?;
    let id = parse_id(&id)?;

    let brainrot = state
        .brainrot_service
        .update(id, input)
        .await
        .map_err(|e| {
            error!("Failed to update brainrot {}: {}", id, e);
            ApiError::InternalServerError
        })?
        .ok_or_else(ApiError::brainrot_not_found)?;

    Ok(Json(brainrot))
}

/// Delete a brainrot by ID
pub async fn delete_brainrot(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<impl IntoResponse> {
    let id = parse_id(&id)?;

    let deleted = state.brainrot_service.delete(id).await.map_err(|e| {
        error!("Failed to delete brainrot {}: {}", id, e);
        ApiError::InternalServerError
    })?;

    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(ApiError::brainrot_not_found())
    }
}
