//! SeaORM table models
//!
//! Mirror the tables created by `migrations/`. Column names follow the SQL
//! schema; the domain entities own the wire names.

pub mod guests;
pub mod rooms;
