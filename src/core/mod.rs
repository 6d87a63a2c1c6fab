//! Configuration and error types shared by the whole engine.

pub mod config;
pub mod error;

pub use config::{TopologyKind, TypeWeight, WorldConfig};
pub use error::{WorldError, WorldResult};
