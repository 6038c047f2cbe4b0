//! Domain entities
//!
//! Pure domain models for guests and rooms, including their field validation.
//! These are separate from the SeaORM entities in the `entity` module.

mod fields;
pub mod guest;
pub mod room;

pub use guest::{Guest, GuestId, GuestInput, GuestUpdate, NewGuest};
pub use room::{NewRoom, Room, RoomId, RoomInput, RoomStatus, RoomType, RoomUpdate};
