//! PostgreSQL adapters
//!
//! Implementations of repository traits using SeaORM and PostgreSQL.

pub mod guest_repo;
pub mod room_repo;


pub use guest_repo::PostgresGuestRepository;
pub use room_repo::PostgresRoomRepository;

use sea_orm::{DbErr, SqlErr};

use crate::error::{DomainError, ValidationError};

/// Map a failed insert/update, reporting a unique-index clash as `duplicate`
pub(crate) fn write_error(e: DbErr, duplicate: impl FnOnce() -> ValidationError) -> DomainError {
    match e.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => DomainError::Validation(duplicate()),
        _ => DomainError::Database(e.to_string()),
    }
}
