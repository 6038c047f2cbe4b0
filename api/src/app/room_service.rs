//! Room service
//!
//! Onboards rooms and keeps their number, category, price and status valid.

use std::sync::Arc;

use crate::domain::entities::{Room, RoomId, RoomInput, RoomStatus, RoomUpdate};
use crate::domain::ports::RoomRepository;
use crate::error::{DomainError, ValidationError};

/// Service for managing rooms
pub struct RoomService<RR>
where
    RR: RoomRepository + ?Sized,
{
    rooms: Arc<RR>,
}

impl<RR> RoomService<RR>
where
    RR: RoomRepository + ?Sized,
{
    pub fn new(rooms: Arc<RR>) -> Self {
        Self { rooms }
    }

    /// Validate and store a new room
    ///
    /// Checks run in this order: presence of number and type, number
    /// uniqueness, type enumeration, price, status.
    pub async fn onboard(&self, input: RoomInput) -> Result<Room, DomainError> {
        let draft = input.into_draft().inspect_err(|e| {
            tracing::debug!(error = %e, "Rejected room onboarding");
        })?;

        if self.rooms.find_by_number(&draft.number).await?.is_some() {
            tracing::debug!(room_number = %draft.number, "Rejected room with duplicate number");
            return Err(ValidationError::DuplicateNumber(draft.number).into());
        }

        let new_room = draft.normalize()?;
        let room = self.rooms.create(&new_room).await?;

        tracing::info!(
            room_id = %room.id,
            room_number = %room.number,
            room_type = %room.room_type,
            "Room onboarded"
        );
        Ok(room)
    }

    /// Find a room by ID
    pub async fn get(&self, id: &RoomId) -> Result<Option<Room>, DomainError> {
        self.rooms.find_by_id(id).await
    }

    /// Find a room by number
    pub async fn find_by_number(&self, number: &str) -> Result<Option<Room>, DomainError> {
        self.rooms.find_by_number(number.trim()).await
    }

    /// List rooms ordered by number, optionally filtered by status
    pub async fn list(
        &self,
        limit: i64,
        offset: i64,
        status: Option<RoomStatus>,
    ) -> Result<Vec<Room>, DomainError> {
        self.rooms.find_all(limit, offset, status).await
    }

    /// Apply a partial update
    pub async fn update(&self, id: &RoomId, update: RoomUpdate) -> Result<Room, DomainError> {
        let changes = update.validate()?;
        let mut room = self.require(id).await?;

        if let Some(number) = changes.number.as_deref() {
            if number != room.number {
                self.ensure_number_free(number, id).await?;
            }
        }

        room.apply(changes);
        let room = self.rooms.update(&room).await?;

        tracing::info!(room_id = %room.id, room_number = %room.number, "Room updated");
        Ok(room)
    }

    /// Move a room to `status` (check-in, checkout, maintenance)
    pub async fn set_status(&self, id: &RoomId, status: RoomStatus) -> Result<Room, DomainError> {
        let room = self.rooms.update_status(id, status).await?;
        tracing::info!(room_id = %room.id, status = %room.status, "Room status changed");
        Ok(room)
    }

    /// Delete a room
    pub async fn decommission(&self, id: &RoomId) -> Result<(), DomainError> {
        self.rooms.delete(id).await?;
        tracing::info!(room_id = %id, "Room decommissioned");
        Ok(())
    }

    async fn require(&self, id: &RoomId) -> Result<Room, DomainError> {
        self.rooms
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::NotFound(format!("Room {} not found", id)))
    }

    async fn ensure_number_free(&self, number: &str, owner: &RoomId) -> Result<(), DomainError> {
        match self.rooms.find_by_number(number).await? {
            Some(other) if other.id != *owner => {
                Err(ValidationError::DuplicateNumber(number.to_string()).into())
            }
            _ => Ok(()),
        }
    }
}
