//! Guest domain entity
//!
//! A hotel customer's contact details and loyalty balance.
//!
//! Validation runs in three steps so callers can interleave the email
//! uniqueness lookup: [`GuestInput::into_draft`] checks presence,
//! the caller checks the draft's email against the store, then
//! [`GuestDraft::normalize`] checks and defaults `loyaltyPoints`.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

use super::fields::{integer_value, non_negative_integer, patched_text, required_text};
use crate::error::ValidationError;

/// Loyalty balance given to guests registered without one
pub const DEFAULT_LOYALTY_POINTS: i64 = 0;

/// Unique identifier for a guest
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GuestId(pub Uuid);

impl GuestId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for GuestId {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Uuid> for GuestId {
    fn from(id: Uuid) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for GuestId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A stored guest record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Guest {
    pub id: GuestId,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub loyalty_points: i64,
}

impl Guest {
    /// Apply an already validated patch
    pub fn apply(&mut self, changes: GuestChanges) {
        if let Some(name) = changes.name {
            self.name = name;
        }
        if let Some(email) = changes.email {
            self.email = email;
        }
        if let Some(phone) = changes.phone {
            self.phone = phone;
        }
        if let Some(points) = changes.loyalty_points {
            self.loyalty_points = points;
        }
    }

    /// Loyalty balance after adding `delta`, which may be negative
    pub fn loyalty_points_after(&self, delta: i64) -> Result<i64, ValidationError> {
        let total = self
            .loyalty_points
            .checked_add(delta)
            .ok_or_else(|| ValidationError::InvalidValue {
                field: "loyaltyPoints",
                reason: "balance out of range".to_string(),
            })?;
        non_negative_integer("loyaltyPoints", total)
    }
}

/// Raw guest fields as submitted by a caller
///
/// Every field is optional so that absence is reported as
/// `MissingField` rather than as a parse failure. `loyaltyPoints` is kept
/// as raw JSON until its turn in the check order comes.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GuestInput {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub loyalty_points: Option<Value>,
}

impl GuestInput {
    /// Presence checks, in field order: name, email, phone
    pub fn into_draft(self) -> Result<GuestDraft, ValidationError> {
        Ok(GuestDraft {
            name: required_text("name", self.name)?,
            email: required_text("email", self.email)?,
            phone: required_text("phone", self.phone)?,
            loyalty_points: self.loyalty_points,
        })
    }
}

/// Guest input whose required fields are present
#[derive(Debug, Clone, PartialEq)]
pub struct GuestDraft {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub loyalty_points: Option<Value>,
}

impl GuestDraft {
    /// Type and range check, and defaulting, of `loyaltyPoints`
    pub fn normalize(self) -> Result<NewGuest, ValidationError> {
        let loyalty_points = match &self.loyalty_points {
            Some(points) => checked_loyalty_points(points)?,
            None => DEFAULT_LOYALTY_POINTS,
        };

        Ok(NewGuest {
            name: self.name,
            email: self.email,
            phone: self.phone,
            loyalty_points,
        })
    }
}

/// Fully validated data needed to create a guest
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewGuest {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub loyalty_points: i64,
}

/// Partial update to a guest, as submitted
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GuestUpdate {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub loyalty_points: Option<Value>,
}

impl GuestUpdate {
    pub fn validate(self) -> Result<GuestChanges, ValidationError> {
        Ok(GuestChanges {
            name: patched_text("name", self.name)?,
            email: patched_text("email", self.email)?,
            phone: patched_text("phone", self.phone)?,
            loyalty_points: self
                .loyalty_points
                .as_ref()
                .map(checked_loyalty_points)
                .transpose()?,
        })
    }
}

fn checked_loyalty_points(value: &Value) -> Result<i64, ValidationError> {
    non_negative_integer("loyaltyPoints", integer_value("loyaltyPoints", value)?)
}

/// A validated guest patch
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GuestChanges {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub loyalty_points: Option<i64>,
}
