//! Guest service
//!
//! Registers, updates and removes guests. Field checks run in this order:
//! presence of name, email and phone; email uniqueness; loyalty points.

use std::sync::Arc;

use crate::domain::entities::{Guest, GuestId, GuestInput, GuestUpdate};
use crate::domain::ports::GuestRepository;
use crate::error::{DomainError, ValidationError};

/// Service for managing guests
pub struct GuestService<GR>
where
    GR: GuestRepository + ?Sized,
{
    guests: Arc<GR>,
}

impl<GR> GuestService<GR>
where
    GR: GuestRepository + ?Sized,
{
    pub fn new(guests: Arc<GR>) -> Self {
        Self { guests }
    }

    /// Validate and store a new guest
    ///
    /// The email lookup only orders the errors; a concurrent registration
    /// with the same email is still rejected by the repository's index.
    pub async fn register(&self, input: GuestInput) -> Result<Guest, DomainError> {
        let draft = input.into_draft().inspect_err(|e| {
            tracing::debug!(error = %e, "Rejected guest registration");
        })?;

        if self.guests.find_by_email(&draft.email).await?.is_some() {
            tracing::debug!(email = %draft.email, "Rejected guest with duplicate email");
            return Err(ValidationError::DuplicateEmail(draft.email).into());
        }

        let new_guest = draft.normalize()?;
        let guest = self.guests.create(&new_guest).await?;

        tracing::info!(guest_id = %guest.id, "Guest registered");
        Ok(guest)
    }

    /// Find a guest by ID
    pub async fn get(&self, id: &GuestId) -> Result<Option<Guest>, DomainError> {
        self.guests.find_by_id(id).await
    }

    /// Find a guest by email
    pub async fn find_by_email(&self, email: &str) -> Result<Option<Guest>, DomainError> {
        self.guests.find_by_email(email.trim()).await
    }

    /// List guests ordered by name
    pub async fn list(&self, limit: i64, offset: i64) -> Result<Vec<Guest>, DomainError> {
        self.guests.find_all(limit, offset).await
    }

    /// Apply a partial update
    pub async fn update(&self, id: &GuestId, update: GuestUpdate) -> Result<Guest, DomainError> {
        let changes = update.validate()?;
        let mut guest = self.require(id).await?;

        if let Some(email) = changes.email.as_deref() {
            if email != guest.email {
                self.ensure_email_free(email, id).await?;
            }
        }

        guest.apply(changes);
        let guest = self.guests.update(&guest).await?;

        tracing::info!(guest_id = %guest.id, "Guest updated");
        Ok(guest)
    }

    /// Add `delta` (possibly negative) to a guest's loyalty balance
    pub async fn adjust_loyalty_points(
        &self,
        id: &GuestId,
        delta: i64,
    ) -> Result<Guest, DomainError> {
        let mut guest = self.require(id).await?;
        guest.loyalty_points = guest.loyalty_points_after(delta)?;

        let guest = self.guests.update(&guest).await?;

        tracing::info!(
            guest_id = %guest.id,
            delta,
            balance = guest.loyalty_points,
            "Loyalty points adjusted"
        );
        Ok(guest)
    }

    /// Delete a guest
    pub async fn remove(&self, id: &GuestId) -> Result<(), DomainError> {
        self.guests.delete(id).await?;
        tracing::info!(guest_id = %id, "Guest removed");
        Ok(())
    }

    async fn require(&self, id: &GuestId) -> Result<Guest, DomainError> {
        self.guests
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::NotFound(format!("Guest {} not found", id)))
    }

    async fn ensure_email_free(&self, email: &str, owner: &GuestId) -> Result<(), DomainError> {
        match self.guests.find_by_email(email).await? {
            Some(other) if other.id != *owner => {
                Err(ValidationError::DuplicateEmail(email.to_string()).into())
            }
            _ => Ok(()),
        }
    }
}
