//! Domain layer
//!
//! Guest and room records and the rules that make them valid.
//! - `entities`: Records, enumerations, input payloads and their validation
//! - `ports`: Repository traits the persistence layer implements
//!
//! Nothing here performs I/O.

pub mod entities;
pub mod ports;
