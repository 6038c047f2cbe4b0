//! Guest handlers
//!
//! Endpoints for guest registration and management.

use axum::{
    extract::{rejection::JsonRejection, Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use uuid::Uuid;

use super::{json_body, PageQuery};
use crate::domain::entities::{Guest, GuestId, GuestInput, GuestUpdate};
use crate::error::AppError;
use crate::AppState;

/// Request body for a loyalty adjustment
#[derive(Debug, Deserialize)]
pub struct AdjustLoyaltyRequest {
    /// Points to add; negative values redeem
    pub delta: i64,
}

/// POST /guests
///
/// Register a new guest.
pub async fn create_guest(
    State(state): State<AppState>,
    payload: Result<Json<GuestInput>, JsonRejection>,
) -> Result<(StatusCode, Json<Guest>), AppError> {
    let input = json_body(payload)?;
    let guest = state.guest_service.register(input).await?;
    Ok((StatusCode::CREATED, Json(guest)))
}

/// GET /guests
pub async fn list_guests(
    State(state): State<AppState>,
    Query(query): Query<PageQuery>,
) -> Result<Json<Vec<Guest>>, AppError> {
    let (limit, offset) = state.config.page(query.limit, query.offset);
    let guests = state.guest_service.list(limit, offset).await?;
    Ok(Json(guests))
}

/// GET /guests/:id
pub async fn get_guest(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Guest>, AppError> {
    let guest = state
        .guest_service
        .get(&GuestId(id))
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Guest {} not found", id)))?;

    Ok(Json(guest))
}

/// GET /guests/by-email/:email
pub async fn get_guest_by_email(
    State(state): State<AppState>,
    Path(email): Path<String>,
) -> Result<Json<Guest>, AppError> {
    let guest = state
        .guest_service
        .find_by_email(&email)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("No guest with email {}", email)))?;

    Ok(Json(guest))
}

/// PATCH /guests/:id
pub async fn update_guest(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    payload: Result<Json<GuestUpdate>, JsonRejection>,
) -> Result<Json<Guest>, AppError> {
    let update = json_body(payload)?;
    let guest = state.guest_service.update(&GuestId(id), update).await?;
    Ok(Json(guest))
}

/// POST /guests/:id/loyalty
pub async fn adjust_loyalty(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    payload: Result<Json<AdjustLoyaltyRequest>, JsonRejection>,
) -> Result<Json<Guest>, AppError> {
    let request = json_body(payload)?;
    let guest = state
        .guest_service
        .adjust_loyalty_points(&GuestId(id), request.delta)
        .await?;
    Ok(Json(guest))
}

/// DELETE /guests/:id
pub async fn delete_guest(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    state.guest_service.remove(&GuestId(id)).await?;
    Ok(StatusCode::NO_CONTENT)
}
