//! Mock implementations of port traits
//!
//! These are in-memory implementations that can be configured for testing.
//! They store data in memory and allow tests to verify behavior.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::domain::entities::{Guest, GuestId, NewGuest, NewRoom, Room, RoomId, RoomStatus};
use crate::domain::ports::{GuestRepository, RoomRepository};
use crate::error::{DomainError, ValidationError};

fn unavailable() -> DomainError {
    DomainError::Database("connection refused".to_string())
}

fn page<T>(mut rows: Vec<T>, limit: i64, offset: i64) -> Vec<T> {
    let offset = offset.max(0) as usize;
    let limit = limit.max(0) as usize;
    if offset >= rows.len() {
        return Vec::new();
    }
    rows.drain(offset..).take(limit).collect()
}

// ============================================================================
// In-Memory Guest Repository
// ============================================================================

#[derive(Default)]
struct GuestTable {
    guests: HashMap<GuestId, Guest>,
    by_email: HashMap<String, GuestId>,
}

impl GuestTable {
    fn put(&mut self, guest: Guest) -> Result<Guest, DomainError> {
        if let Some(owner) = self.by_email.get(&guest.email) {
            if *owner != guest.id {
                return Err(ValidationError::DuplicateEmail(guest.email.clone()).into());
            }
        }
        if let Some(previous) = self.guests.get(&guest.id) {
            self.by_email.remove(&previous.email);
        }
        self.by_email.insert(guest.email.clone(), guest.id);
        self.guests.insert(guest.id, guest.clone());
        Ok(guest)
    }
}

#[derive(Default)]
pub struct InMemoryGuestRepository {
    table: Arc<RwLock<GuestTable>>,
    failing: bool,
}

impl InMemoryGuestRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// A repository whose every call fails with a database error
    pub fn failing() -> Self {
        Self {
            failing: true,
            ..Self::default()
        }
    }

    /// Pre-populate with a guest for testing
    pub fn with_guest(self, guest: Guest) -> Self {
        self.table
            .write()
            .unwrap()
            .put(guest)
            .expect("fixture guests must have distinct emails");
        self
    }

    fn check(&self) -> Result<(), DomainError> {
        if self.failing {
            Err(unavailable())
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl GuestRepository for InMemoryGuestRepository {
    async fn find_by_id(&self, id: &GuestId) -> Result<Option<Guest>, DomainError> {
        self.check()?;
        let table = self.table.read().unwrap();
        Ok(table.guests.get(id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<Guest>, DomainError> {
        self.check()?;
        let table = self.table.read().unwrap();
        Ok(table
            .by_email
            .get(email)
            .and_then(|id| table.guests.get(id))
            .cloned())
    }

    async fn find_all(&self, limit: i64, offset: i64) -> Result<Vec<Guest>, DomainError> {
        self.check()?;
        let table = self.table.read().unwrap();
        let mut sorted: Vec<_> = table.guests.values().cloned().collect();
        sorted.sort_by(|a, b| a.name.cmp(&b.name).then(a.id.0.cmp(&b.id.0)));
        Ok(page(sorted, limit, offset))
    }

    async fn create(&self, new_guest: &NewGuest) -> Result<Guest, DomainError> {
        self.check()?;
        let guest = Guest {
            id: GuestId::new(),
            name: new_guest.name.clone(),
            email: new_guest.email.clone(),
            phone: new_guest.phone.clone(),
            loyalty_points: new_guest.loyalty_points,
        };

        self.table.write().unwrap().put(guest)
    }

    async fn update(&self, guest: &Guest) -> Result<Guest, DomainError> {
        self.check()?;
        let mut table = self.table.write().unwrap();
        if !table.guests.contains_key(&guest.id) {
            return Err(DomainError::NotFound(format!("Guest {} not found", guest.id)));
        }
        table.put(guest.clone())
    }

    async fn delete(&self, id: &GuestId) -> Result<(), DomainError> {
        self.check()?;
        let mut table = self.table.write().unwrap();
        match table.guests.remove(id) {
            Some(guest) => {
                table.by_email.remove(&guest.email);
                Ok(())
            }
            None => Err(DomainError::NotFound(format!("Guest {} not found", id))),
        }
    }
}

// ============================================================================
// In-Memory Room Repository
// ============================================================================

#[derive(Default)]
struct RoomTable {
    rooms: HashMap<RoomId, Room>,
    by_number: HashMap<String, RoomId>,
}

impl RoomTable {
    fn put(&mut self, room: Room) -> Result<Room, DomainError> {
        if let Some(owner) = self.by_number.get(&room.number) {
            if *owner != room.id {
                return Err(ValidationError::DuplicateNumber(room.number.clone()).into());
            }
        }
        if let Some(previous) = self.rooms.get(&room.id) {
            self.by_number.remove(&previous.number);
        }
        self.by_number.insert(room.number.clone(), room.id);
        self.rooms.insert(room.id, room.clone());
        Ok(room)
    }
}

#[derive(Default)]
pub struct InMemoryRoomRepository {
    table: Arc<RwLock<RoomTable>>,
    failing: bool,
}

impl InMemoryRoomRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// A repository whose every call fails with a database error
    pub fn failing() -> Self {
        Self {
            failing: true,
            ..Self::default()
        }
    }

    /// Pre-populate with a room for testing
    pub fn with_room(self, room: Room) -> Self {
        self.table
            .write()
            .unwrap()
            .put(room)
            .expect("fixture rooms must have distinct numbers");
        self
    }

    fn check(&self) -> Result<(), DomainError> {
        if self.failing {
            Err(unavailable())
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl RoomRepository for InMemoryRoomRepository {
    async fn find_by_id(&self, id: &RoomId) -> Result<Option<Room>, DomainError> {
        self.check()?;
        let table = self.table.read().unwrap();
        Ok(table.rooms.get(id).cloned())
    }

    async fn find_by_number(&self, number: &str) -> Result<Option<Room>, DomainError> {
        self.check()?;
        let table = self.table.read().unwrap();
        Ok(table
            .by_number
            .get(number)
            .and_then(|id| table.rooms.get(id))
            .cloned())
    }

    async fn find_all(
        &self,
        limit: i64,
        offset: i64,
        status: Option<RoomStatus>,
    ) -> Result<Vec<Room>, DomainError> {
        self.check()?;
        let table = self.table.read().unwrap();
        let mut sorted: Vec<_> = table
            .rooms
            .values()
            .filter(|r| status.map_or(true, |s| r.status == s))
            .cloned()
            .collect();
        sorted.sort_by(|a, b| a.number.cmp(&b.number));
        Ok(page(sorted, limit, offset))
    }

    async fn create(&self, new_room: &NewRoom) -> Result<Room, DomainError> {
        self.check()?;
        let room = Room {
            id: RoomId::new(),
            number: new_room.number.clone(),
            room_type: new_room.room_type,
            price: new_room.price,
            status: new_room.status,
        };

        self.table.write().unwrap().put(room)
    }

    async fn update(&self, room: &Room) -> Result<Room, DomainError> {
        self.check()?;
        let mut table = self.table.write().unwrap();
        if !table.rooms.contains_key(&room.id) {
            return Err(DomainError::NotFound(format!("Room {} not found", room.id)));
        }
        table.put(room.clone())
    }

    async fn update_status(&self, id: &RoomId, status: RoomStatus) -> Result<Room, DomainError> {
        self.check()?;
        let mut table = self.table.write().unwrap();
        match table.rooms.get_mut(id) {
            Some(room) => {
                room.status = status;
                Ok(room.clone())
            }
            None => Err(DomainError::NotFound(format!("Room {} not found", id))),
        }
    }

    async fn delete(&self, id: &RoomId) -> Result<(), DomainError> {
        self.check()?;
        let mut table = self.table.write().unwrap();
        match table.rooms.remove(id) {
            Some(room) => {
                table.by_number.remove(&room.number);
                Ok(())
            }
            None => Err(DomainError::NotFound(format!("Room {} not found", id))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::RoomType;
    use crate::test_utils::{test_guest_named, test_room_numbered};

    #[tokio::test]
    async fn guest_email_index_rejects_direct_duplicate_insert() {
        let repo = InMemoryGuestRepository::new();
        let new_guest = NewGuest {
            name: "Ana".to_string(),
            email: "ana@x.com".to_string(),
            phone: "555-0101".to_string(),
            loyalty_points: 0,
        };

        repo.create(&new_guest).await.unwrap();
        let err = repo.create(&new_guest).await.unwrap_err();

        assert!(matches!(
            err,
            DomainError::Validation(ValidationError::DuplicateEmail(_))
        ));
    }

    #[tokio::test]
    async fn guest_email_change_releases_old_email() {
        let mut ana = test_guest_named("Ana");
        let repo = InMemoryGuestRepository::new().with_guest(ana.clone());
        let old_email = ana.email.clone();

        ana.email = "ana.new@hotel.test".to_string();
        repo.update(&ana).await.unwrap();

        assert!(repo.find_by_email(&old_email).await.unwrap().is_none());
        assert!(repo.find_by_email(&ana.email).await.unwrap().is_some());
    }

    #[tokio::test]
    async fn room_number_index_rejects_direct_duplicate_insert() {
        let repo = InMemoryRoomRepository::new().with_room(test_room_numbered("101"));
        let new_room = NewRoom {
            number: "101".to_string(),
            room_type: RoomType::Suite,
            price: 300.0,
            status: RoomStatus::Available,
        };

        let err = repo.create(&new_room).await.unwrap_err();

        assert!(matches!(
            err,
            DomainError::Validation(ValidationError::DuplicateNumber(_))
        ));
    }

    #[tokio::test]
    async fn paging_skips_and_limits() {
        let repo = InMemoryRoomRepository::new()
            .with_room(test_room_numbered("101"))
            .with_room(test_room_numbered("102"))
            .with_room(test_room_numbered("103"));

        let second_page = repo.find_all(2, 2, None).await.unwrap();
        let past_end = repo.find_all(2, 10, None).await.unwrap();

        assert_eq!(second_page.len(), 1);
        assert_eq!(second_page[0].number, "103");
        assert!(past_end.is_empty());
    }
}
