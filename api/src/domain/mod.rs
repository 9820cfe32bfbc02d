//! Domain layer
//!
//! Contains the adoption domain with no transport or storage dependencies.
//! - `entities`: Records as retrieved from storage
//! - `ports`: Repository and service traits

pub mod entities;
pub mod ports;
