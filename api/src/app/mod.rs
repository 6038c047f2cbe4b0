//! Application layer
//!
//! Contains use cases and service orchestration.
//! Services coordinate between domain entities and repository ports.

pub mod guest_service;
pub mod room_service;

pub use guest_service::GuestService;
pub use room_service::RoomService;
