//! Interactive picker: key input, views, terminal handling and the event loop.
//!
//! Imports from `crate::domain` and `crate::application::ports` are allowed.
//! Imports from `crate::infra` and `crate::commands` are forbidden.

pub mod event_loop;
pub mod keys;
pub mod render;
pub mod screen;

pub use event_loop::{Picker, SPINNER_INTERVAL, spawn_fetch};
pub use keys::{CrosstermKeys, KeySource, map_key};
pub use render::Theme;
pub use screen::{Screen, TerminalScreen};
