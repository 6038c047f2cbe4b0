//! PostgreSQL adapter for RoomRepository

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter,
    QueryOrder, QuerySelect, Set,
};
use uuid::Uuid;

use super::write_error;
use crate::domain::entities::{NewRoom, Room, RoomId, RoomStatus, RoomType};
use crate::domain::ports::RoomRepository;
use crate::entity::rooms;
use crate::error::{DomainError, ValidationError};

/// PostgreSQL implementation of RoomRepository
pub struct PostgresRoomRepository {
    db: DatabaseConnection,
}

impl PostgresRoomRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl RoomRepository for PostgresRoomRepository {
    async fn find_by_id(&self, id: &RoomId) -> Result<Option<Room>, DomainError> {
        let result = rooms::Entity::find_by_id(id.0)
            .one(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        result.map(Room::try_from).transpose()
    }

    async fn find_by_number(&self, number: &str) -> Result<Option<Room>, DomainError> {
        let result = rooms::Entity::find()
            .filter(rooms::Column::Number.eq(number))
            .one(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        result.map(Room::try_from).transpose()
    }

    async fn find_all(
        &self,
        limit: i64,
        offset: i64,
        status: Option<RoomStatus>,
    ) -> Result<Vec<Room>, DomainError> {
        let mut query = rooms::Entity::find();
        if let Some(status) = status {
            query = query.filter(rooms::Column::Status.eq(status.as_str()));
        }

        let results = query
            .order_by_asc(rooms::Column::Number)
            .offset(offset as u64)
            .limit(limit as u64)
            .all(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        results.into_iter().map(Room::try_from).collect()
    }

    async fn create(&self, room: &NewRoom) -> Result<Room, DomainError> {
        let model = rooms::ActiveModel {
            id: Set(Uuid::new_v4()),
            number: Set(room.number.clone()),
            room_type: Set(room.room_type.to_string()),
            price: Set(room.price),
            status: Set(room.status.to_string()),
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| write_error(e, || ValidationError::DuplicateNumber(room.number.clone())))?;

        Room::try_from(result)
    }

    async fn update(&self, room: &Room) -> Result<Room, DomainError> {
        let model = rooms::ActiveModel {
            id: Set(room.id.0),
            number: Set(room.number.clone()),
            room_type: Set(room.room_type.to_string()),
            price: Set(room.price),
            status: Set(room.status.to_string()),
        };

        let result = model.update(&self.db).await.map_err(|e| match e {
            DbErr::RecordNotUpdated => DomainError::NotFound(format!("Room {} not found", room.id)),
            e => write_error(e, || ValidationError::DuplicateNumber(room.number.clone())),
        })?;

        Room::try_from(result)
    }

    async fn update_status(&self, id: &RoomId, status: RoomStatus) -> Result<Room, DomainError> {
        let result = rooms::ActiveModel {
            id: Set(id.0),
            status: Set(status.to_string()),
            ..Default::default()
        }
        .update(&self.db)
        .await
        .map_err(|e| match e {
            DbErr::RecordNotUpdated => DomainError::NotFound(format!("Room {} not found", id)),
            e => DomainError::Database(e.to_string()),
        })?;

        Room::try_from(result)
    }

    async fn delete(&self, id: &RoomId) -> Result<(), DomainError> {
        let result = rooms::Entity::delete_by_id(id.0)
            .exec(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        if result.rows_affected == 0 {
            return Err(DomainError::NotFound(format!("Room {} not found", id)));
        }

        Ok(())
    }
}

/// Convert SeaORM model to domain entity
///
/// The table's CHECK constraints keep `type` and `status` inside their
/// enumerations, so a parse failure here means the schema drifted.
impl TryFrom<rooms::Model> for Room {
    type Error = DomainError;

    fn try_from(model: rooms::Model) -> Result<Self, Self::Error> {
        let room_type: RoomType = model
            .room_type
            .parse()
            .map_err(|e| DomainError::Internal(format!("Room {}: {}", model.id, e)))?;
        let status: RoomStatus = model
            .status
            .parse()
            .map_err(|e| DomainError::Internal(format!("Room {}: {}", model.id, e)))?;

        Ok(Room {
            id: RoomId(model.id),
            number: model.number,
            room_type,
            price: model.price,
            status,
        })
    }
}
