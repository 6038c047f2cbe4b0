//! Repository port traits
//!
//! These traits define the interface for data persistence.
//! Implementations are provided by adapters (e.g., PostgreSQL).
//!
//! Uniqueness of guest emails and room numbers belongs to the store: `create`
//! and `update` must check and write atomically (a unique index, or a single
//! locked index map) and report a clash as the matching
//! `ValidationError::Duplicate*` wrapped in `DomainError::Validation`.

use async_trait::async_trait;

use crate::domain::entities::{Guest, GuestId, NewGuest, NewRoom, Room, RoomId, RoomStatus};
use crate::error::DomainError;

/// Repository for Guest entities
#[async_trait]
pub trait GuestRepository: Send + Sync {
    /// Find a guest by ID
    async fn find_by_id(&self, id: &GuestId) -> Result<Option<Guest>, DomainError>;

    /// Find a guest by email (exact match)
    async fn find_by_email(&self, email: &str) -> Result<Option<Guest>, DomainError>;

    /// List guests ordered by name
    async fn find_all(&self, limit: i64, offset: i64) -> Result<Vec<Guest>, DomainError>;

    /// Create a new guest
    async fn create(&self, guest: &NewGuest) -> Result<Guest, DomainError>;

    /// Overwrite every field of an existing guest
    async fn update(&self, guest: &Guest) -> Result<Guest, DomainError>;

    /// Delete a guest; `NotFound` if it does not exist
    async fn delete(&self, id: &GuestId) -> Result<(), DomainError>;
}

/// Repository for Room entities
#[async_trait]
pub trait RoomRepository: Send + Sync {
    /// Find a room by ID
    async fn find_by_id(&self, id: &RoomId) -> Result<Option<Room>, DomainError>;

    /// Find a room by its number (exact match)
    async fn find_by_number(&self, number: &str) -> Result<Option<Room>, DomainError>;

    /// List rooms ordered by number, optionally only those with `status`
    async fn find_all(
        &self,
        limit: i64,
        offset: i64,
        status: Option<RoomStatus>,
    ) -> Result<Vec<Room>, DomainError>;

    /// Create a new room
    async fn create(&self, room: &NewRoom) -> Result<Room, DomainError>;

    /// Overwrite every field of an existing room
    async fn update(&self, room: &Room) -> Result<Room, DomainError>;

    /// Update only the availability status
    async fn update_status(&self, id: &RoomId, status: RoomStatus) -> Result<Room, DomainError>;

    /// Delete a room; `NotFound` if it does not exist
    async fn delete(&self, id: &RoomId) -> Result<(), DomainError>;
}
