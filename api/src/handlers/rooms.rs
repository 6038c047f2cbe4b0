//! Room handlers
//!
//! Endpoints for room inventory.

use axum::{
    extract::{rejection::JsonRejection, Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use uuid::Uuid;

use super::json_body;
use crate::domain::entities::{Room, RoomId, RoomInput, RoomStatus, RoomUpdate};
use crate::error::AppError;
use crate::AppState;

/// Query parameters for listing rooms
#[derive(Debug, Default, Deserialize)]
pub struct ListRoomsQuery {
    pub limit: Option<i64>,
    pub offset: Option<i64>,
    /// Only rooms in this status (`Available`, `Occupied`, `Maintenance`)
    pub status: Option<String>,
}

/// Request body for a status change
#[derive(Debug, Deserialize)]
pub struct SetStatusRequest {
    pub status: String,
}

/// POST /rooms
///
/// Onboard a new room.
pub async fn create_room(
    State(state): State<AppState>,
    payload: Result<Json<RoomInput>, JsonRejection>,
) -> Result<(StatusCode, Json<Room>), AppError> {
    let input = json_body(payload)?;
    let room = state.room_service.onboard(input).await?;
    Ok((StatusCode::CREATED, Json(room)))
}

/// GET /rooms
pub async fn list_rooms(
    State(state): State<AppState>,
    Query(query): Query<ListRoomsQuery>,
) -> Result<Json<Vec<Room>>, AppError> {
    let status = query
        .status
        .as_deref()
        .map(|status| status.trim().parse::<RoomStatus>())
        .transpose()?;
    let (limit, offset) = state.config.page(query.limit, query.offset);

    let rooms = state.room_service.list(limit, offset, status).await?;
    Ok(Json(rooms))
}

/// GET /rooms/:id
pub async fn get_room(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Room>, AppError> {
    let room = state
        .room_service
        .get(&RoomId(id))
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Room {} not found", id)))?;

    Ok(Json(room))
}

/// GET /rooms/by-number/:number
pub async fn get_room_by_number(
    State(state): State<AppState>,
    Path(number): Path<String>,
) -> Result<Json<Room>, AppError> {
    let room = state
        .room_service
        .find_by_number(&number)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("No room numbered {}", number)))?;

    Ok(Json(room))
}

/// PATCH /rooms/:id
pub async fn update_room(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    payload: Result<Json<RoomUpdate>, JsonRejection>,
) -> Result<Json<Room>, AppError> {
    let update = json_body(payload)?;
    let room = state.room_service.update(&RoomId(id), update).await?;
    Ok(Json(room))
}

/// POST /rooms/:id/status
pub async fn set_room_status(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    payload: Result<Json<SetStatusRequest>, JsonRejection>,
) -> Result<Json<Room>, AppError> {
    let request = json_body(payload)?;
    let status = request.status.trim().parse::<RoomStatus>()?;
    let room = state.room_service.set_status(&RoomId(id), status).await?;
    Ok(Json(room))
}

/// DELETE /rooms/:id
pub async fn delete_room(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    state.room_service.decommission(&RoomId(id)).await?;
    Ok(StatusCode::NO_CONTENT)
}
