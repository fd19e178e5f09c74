//! Application services: use-case orchestration over port traits.

pub mod inventory;
