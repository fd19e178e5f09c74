//! Application layer: port trait definitions and use-case orchestration.
//!
//! This module depends only on `crate::domain`, never on `crate::infra`,
//! `crate::commands`, `crate::tui`, or `crate::output`.

pub mod ports;
pub mod services;

pub use ports::{
    CommandRunner, ComputeApi, ConfigStore, InstancePage, InventorySource, RawInstance,
    SessionLauncher,
};
pub use services::inventory::InventoryFetcher;
