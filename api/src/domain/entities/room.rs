//! Room domain entity
//!
//! Represents a single hotel room: its number, category, nightly price and
//! availability status.
//!
//! The schema this model replaces declared `price` and `status` inside the
//! definition of the `type` field, so neither was ever validated or stored.
//! Here both are top-level fields: `price` is required and non-negative,
//! `status` defaults to `Available`. See "Room price and status" in DESIGN.md.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

use super::fields::{enum_text, non_negative_amount, number_value, patched_text, required_text};
use crate::error::ValidationError;

/// Unique identifier for a room
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RoomId(pub Uuid);

impl RoomId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for RoomId {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Uuid> for RoomId {
    fn from(id: Uuid) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for RoomId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Room category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RoomType {
    Standard,
    Deluxe,
    Suite,
}

impl RoomType {
    const ALLOWED: &'static str = "Standard, Deluxe, Suite";

    pub fn as_str(&self) -> &'static str {
        match self {
            RoomType::Standard => "Standard",
            RoomType::Deluxe => "Deluxe",
            RoomType::Suite => "Suite",
        }
    }
}

impl std::fmt::Display for RoomType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Values are matched exactly; `deluxe` is not `Deluxe`.
impl std::str::FromStr for RoomType {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Standard" => Ok(RoomType::Standard),
            "Deluxe" => Ok(RoomType::Deluxe),
            "Suite" => Ok(RoomType::Suite),
            _ => Err(ValidationError::InvalidEnum {
                field: "type",
                value: s.to_string(),
                allowed: Self::ALLOWED,
            }),
        }
    }
}

/// Room availability
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RoomStatus {
    #[default]
    Available,
    Occupied,
    Maintenance,
}

impl RoomStatus {
    const ALLOWED: &'static str = "Available, Occupied, Maintenance";

    pub fn as_str(&self) -> &'static str {
        match self {
            RoomStatus::Available => "Available",
            RoomStatus::Occupied => "Occupied",
            RoomStatus::Maintenance => "Maintenance",
        }
    }
}

impl std::fmt::Display for RoomStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for RoomStatus {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Available" => Ok(RoomStatus::Available),
            "Occupied" => Ok(RoomStatus::Occupied),
            "Maintenance" => Ok(RoomStatus::Maintenance),
            _ => Err(ValidationError::InvalidEnum {
                field: "status",
                value: s.to_string(),
                allowed: Self::ALLOWED,
            }),
        }
    }
}

/// A stored room record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Room {
    pub id: RoomId,
    pub number: String,
    #[serde(rename = "type")]
    pub room_type: RoomType,
    pub price: f64,
    pub status: RoomStatus,
}

impl Room {
    /// Apply an already validated patch
    pub fn apply(&mut self, changes: RoomChanges) {
        if let Some(number) = changes.number {
            self.number = number;
        }
        if let Some(room_type) = changes.room_type {
            self.room_type = room_type;
        }
        if let Some(price) = changes.price {
            self.price = price;
        }
        if let Some(status) = changes.status {
            self.status = status;
        }
    }
}

/// Raw room fields as submitted by a caller
///
/// Enumerations arrive as text, whatever their JSON type, so an unknown value
/// is reported as `InvalidEnum` with the offending text. `price` stays raw
/// JSON until its turn in the check order comes.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RoomInput {
    pub number: Option<String>,
    #[serde(rename = "type", default, deserialize_with = "enum_text")]
    pub room_type: Option<String>,
    pub price: Option<Value>,
    #[serde(default, deserialize_with = "enum_text")]
    pub status: Option<String>,
}

impl RoomInput {
    /// Presence checks for `number` and `type`
    pub fn into_draft(self) -> Result<RoomDraft, ValidationError> {
        Ok(RoomDraft {
            number: required_text("number", self.number)?,
            room_type: required_text("type", self.room_type)?,
            price: self.price,
            status: self.status,
        })
    }
}

/// Room input whose number and type are present
#[derive(Debug, Clone, PartialEq)]
pub struct RoomDraft {
    pub number: String,
    pub room_type: String,
    pub price: Option<Value>,
    pub status: Option<String>,
}

impl RoomDraft {
    /// Enumeration checks, price check, and `status` defaulting
    pub fn normalize(self) -> Result<NewRoom, ValidationError> {
        let room_type = self.room_type.parse::<RoomType>()?;
        let price = match &self.price {
            Some(price) => checked_price(price)?,
            None => return Err(ValidationError::MissingField("price")),
        };
        let status = match self.status {
            Some(status) => status.trim().parse::<RoomStatus>()?,
            None => RoomStatus::default(),
        };

        Ok(NewRoom {
            number: self.number,
            room_type,
            price,
            status,
        })
    }
}

/// Fully validated data needed to create a room
#[derive(Debug, Clone, PartialEq)]
pub struct NewRoom {
    pub number: String,
    pub room_type: RoomType,
    pub price: f64,
    pub status: RoomStatus,
}

/// Partial update to a room, as submitted
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RoomUpdate {
    pub number: Option<String>,
    #[serde(rename = "type", default, deserialize_with = "enum_text")]
    pub room_type: Option<String>,
    pub price: Option<Value>,
    #[serde(default, deserialize_with = "enum_text")]
    pub status: Option<String>,
}

impl RoomUpdate {
    pub fn validate(self) -> Result<RoomChanges, ValidationError> {
        Ok(RoomChanges {
            number: patched_text("number", self.number)?,
            room_type: self
                .room_type
                .map(|t| t.trim().parse::<RoomType>())
                .transpose()?,
            price: self.price.as_ref().map(checked_price).transpose()?,
            status: self
                .status
                .map(|s| s.trim().parse::<RoomStatus>())
                .transpose()?,
        })
    }
}

fn checked_price(value: &Value) -> Result<f64, ValidationError> {
    non_negative_amount("price", number_value("price", value)?)
}

/// A validated room patch
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RoomChanges {
    pub number: Option<String>,
    pub room_type: Option<RoomType>,
    pub price: Option<f64>,
    pub status: Option<RoomStatus>,
}
