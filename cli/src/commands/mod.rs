//! Command implementations

pub mod list;
pub mod pick;
pub mod version;
