//! Test utilities
//!
//! Manual mock implementations and test fixtures for unit testing.
//!
//! The in-memory repositories keep each table and its unique index behind a
//! single lock, so a uniqueness check and the write that follows it are one
//! atomic step, like a unique index in PostgreSQL.

pub mod fixtures;
pub mod mocks;

pub use fixtures::*;
pub use mocks::*;
