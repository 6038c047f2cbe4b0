//! HTTP handlers
//!
//! Axum request handlers for the API endpoints.

pub mod guests;
pub mod rooms;

pub use guests::{
    adjust_loyalty, create_guest, delete_guest, get_guest, get_guest_by_email, list_guests,
    update_guest,
};
pub use rooms::{
    create_room, delete_room, get_room, get_room_by_number, list_rooms, set_room_status,
    update_room,
};

use axum::extract::rejection::JsonRejection;
use axum::Json;
use serde::Deserialize;

use crate::error::AppError;

/// Query parameters shared by list endpoints
#[derive(Debug, Default, Deserialize)]
pub struct PageQuery {
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

/// Unwrap a JSON body, reporting malformed or mistyped bodies as 400
pub(crate) fn json_body<T>(payload: Result<Json<T>, JsonRejection>) -> Result<T, AppError> {
    payload
        .map(|Json(body)| body)
        .map_err(|e| AppError::BadRequest(e.body_text()))
}
