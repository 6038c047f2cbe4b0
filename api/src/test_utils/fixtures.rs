//! Test fixtures
//!
//! Factory functions for creating test data with sensible defaults.
//! Each fixture function creates a valid entity that can be customized.

use uuid::Uuid;

use crate::domain::entities::{Guest, GuestId, Room, RoomId, RoomStatus, RoomType};

/// Create a test guest with default values
pub fn test_guest() -> Guest {
    Guest {
        id: GuestId(Uuid::new_v4()),
        name: "Test Guest".to_string(),
        email: "guest@hotel.test".to_string(),
        phone: "555-0100".to_string(),
        loyalty_points: 0,
    }
}

/// Create a test guest with a specific name (and an email derived from it)
pub fn test_guest_named(name: &str) -> Guest {
    Guest {
        id: GuestId(Uuid::new_v4()),
        name: name.to_string(),
        email: format!("{}@hotel.test", name.to_lowercase().replace(' ', ".")),
        phone: "555-0100".to_string(),
        loyalty_points: 0,
    }
}

/// Create a test room with default values
pub fn test_room() -> Room {
    test_room_numbered("100")
}

/// Create an available Standard room with a specific number
pub fn test_room_numbered(number: &str) -> Room {
    Room {
        id: RoomId(Uuid::new_v4()),
        number: number.to_string(),
        room_type: RoomType::Standard,
        price: 95.0,
        status: RoomStatus::Available,
    }
}
