//! PostgreSQL adapter for GuestRepository

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter,
    QueryOrder, QuerySelect, Set,
};
use uuid::Uuid;

use super::write_error;
use crate::domain::entities::{Guest, GuestId, NewGuest};
use crate::domain::ports::GuestRepository;
use crate::entity::guests;
use crate::error::{DomainError, ValidationError};

/// PostgreSQL implementation of GuestRepository
pub struct PostgresGuestRepository {
    db: DatabaseConnection,
}

impl PostgresGuestRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl GuestRepository for PostgresGuestRepository {
    async fn find_by_id(&self, id: &GuestId) -> Result<Option<Guest>, DomainError> {
        let result = guests::Entity::find_by_id(id.0)
            .one(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(result.map(|m| m.into()))
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<Guest>, DomainError> {
        let result = guests::Entity::find()
            .filter(guests::Column::Email.eq(email))
            .one(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(result.map(|m| m.into()))
    }

    async fn find_all(&self, limit: i64, offset: i64) -> Result<Vec<Guest>, DomainError> {
        let results = guests::Entity::find()
            .order_by_asc(guests::Column::Name)
            .order_by_asc(guests::Column::Id)
            .offset(offset as u64)
            .limit(limit as u64)
            .all(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(results.into_iter().map(|m| m.into()).collect())
    }

    async fn create(&self, guest: &NewGuest) -> Result<Guest, DomainError> {
        let model = guests::ActiveModel {
            id: Set(Uuid::new_v4()),
            name: Set(guest.name.clone()),
            email: Set(guest.email.clone()),
            phone: Set(guest.phone.clone()),
            loyalty_points: Set(guest.loyalty_points),
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| write_error(e, || ValidationError::DuplicateEmail(guest.email.clone())))?;

        Ok(result.into())
    }

    async fn update(&self, guest: &Guest) -> Result<Guest, DomainError> {
        let model = guests::ActiveModel {
            id: Set(guest.id.0),
            name: Set(guest.name.clone()),
            email: Set(guest.email.clone()),
            phone: Set(guest.phone.clone()),
            loyalty_points: Set(guest.loyalty_points),
        };

        let result = model.update(&self.db).await.map_err(|e| match e {
            DbErr::RecordNotUpdated => DomainError::NotFound(format!("Guest {} not found", guest.id)),
            e => write_error(e, || ValidationError::DuplicateEmail(guest.email.clone())),
        })?;

        Ok(result.into())
    }

    async fn delete(&self, id: &GuestId) -> Result<(), DomainError> {
        let result = guests::Entity::delete_by_id(id.0)
            .exec(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        if result.rows_affected == 0 {
            return Err(DomainError::NotFound(format!("Guest {} not found", id)));
        }

        Ok(())
    }
}

/// Convert SeaORM model to domain entity
impl From<guests::Model> for Guest {
    fn from(model: guests::Model) -> Self {
        Guest {
            id: GuestId(model.id),
            name: model.name,
            email: model.email,
            phone: model.phone,
            loyalty_points: model.loyalty_points,
        }
    }
}
