//! Domain layer: pure business logic, types, and validation.
//!
//! This module has zero imports from `crate::infra`, `crate::commands`,
//! `crate::application`, `tokio`, `std::fs`, `std::process`, or `std::net`.
//! All functions are synchronous and take data in, returning data out.

pub mod config;
pub mod error;
pub mod instance;
pub mod selection;
pub mod ssh;

pub use config::{Overrides, RiderConfig, Settings};
pub use error::{ConfigError, FetchError};
pub use instance::{InstanceRecord, Inventory, short_zone};
pub use selection::{Effect, Event, Key, Phase, SelectionState};
