//! Selection state machine for the instance picker.
//!
//! `SelectionState::apply` is the only mutation point. It is a total
//! function over `(state, event)`: every event is accepted in every phase,
//! and the ones that do not apply are no-ops. Side effects are returned as
//! an [`Effect`] for the caller to perform; the state itself never does I/O.

use crate::domain::error::FetchError;
use crate::domain::instance::{InstanceRecord, Inventory};

/// Coarse state of the picker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Fetch outstanding; only quit is meaningful.
    Loading,
    /// Inventory available (possibly empty); navigation and confirm apply.
    Ready,
    /// Fetch failed; terminal for this run, only quit is meaningful.
    Failed,
}

/// Logical keys recognized by the picker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Up,
    Down,
    Confirm,
    Quit,
    /// Anything unrecognized.
    Other,
}

/// Everything that can drive a transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    FetchSucceeded(Inventory),
    FetchFailed(FetchError),
    Key(Key),
}

/// What the caller must do after a transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    None,
    /// Hand the terminal to an interactive session on this instance.
    Launch(InstanceRecord),
    /// Stop the event loop.
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionState {
    phase: Phase,
    inventory: Inventory,
    cursor: usize,
    last_error: Option<FetchError>,
}

impl Default for SelectionState {
    fn default() -> Self {
        Self::new()
    }
}

impl SelectionState {
    /// Initial state: loading, empty inventory, cursor at 0.
    #[must_use]
    pub fn new() -> Self {
        Self {
            phase: Phase::Loading,
            inventory: Inventory::default(),
            cursor: 0,
            last_error: None,
        }
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Meaningful only in [`Phase::Ready`].
    #[must_use]
    pub fn inventory(&self) -> &Inventory {
        &self.inventory
    }

    /// Meaningful only in [`Phase::Ready`] with a non-empty inventory.
    #[must_use]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Populated only in [`Phase::Failed`].
    #[must_use]
    pub fn last_error(&self) -> Option<&FetchError> {
        self.last_error.as_ref()
    }

    /// The record under the cursor, if the picker is ready and non-empty.
    #[must_use]
    pub fn selected(&self) -> Option<&InstanceRecord> {
        match self.phase {
            Phase::Ready => self.inventory.get(self.cursor),
            Phase::Loading | Phase::Failed => None,
        }
    }

    /// Apply one event and report the effect the caller must perform.
    pub fn apply(&mut self, event: Event) -> Effect {
        match event {
            Event::FetchSucceeded(inventory) => {
                if self.phase == Phase::Loading {
                    self.phase = Phase::Ready;
                    self.inventory = inventory;
                    self.cursor = 0;
                }
                Effect::None
            }
            Event::FetchFailed(err) => {
                if self.phase == Phase::Loading {
                    self.phase = Phase::Failed;
                    self.last_error = Some(err);
                }
                Effect::None
            }
            Event::Key(key) => self.on_key(key),
        }
    }

    fn on_key(&mut self, key: Key) -> Effect {
        match (key, self.phase) {
            (Key::Quit, _) => Effect::Quit,
            (Key::Up, Phase::Ready) => {
                self.cursor = self.cursor.saturating_sub(1);
                Effect::None
            }
            (Key::Down, Phase::Ready) => {
                if self.cursor + 1 < self.inventory.len() {
                    self.cursor += 1;
                }
                Effect::None
            }
            (Key::Confirm, Phase::Ready) => self
                .inventory
                .get(self.cursor)
                .cloned()
                .map_or(Effect::None, Effect::Launch),
            _ => Effect::None,
        }
    }
}
