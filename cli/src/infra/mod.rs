//! Infrastructure layer: concrete implementations of application port traits.
//!
//! This module contains all I/O-performing code: process execution, HTTP,
//! filesystem access and the ssh hand-off.
//!
//! Imports from `crate::domain` and `crate::application::ports` are allowed.
//! Imports from `crate::commands`, `crate::tui` or `crate::output` are forbidden.

pub mod auth;
pub mod command_runner;
pub mod compute;
pub mod config;
pub mod ssh;
