//! Keyboard input: crossterm events to logical picker keys.

use crossterm::event::{
    Event as TermEvent, EventStream, KeyCode, KeyEvent, KeyEventKind, KeyModifiers,
};
use futures_util::StreamExt;

use crate::domain::Key;

/// Map one crossterm key event. Releases map to `None`.
#[must_use]
pub fn map_key(event: &KeyEvent) -> Option<Key> {
    if event.kind == KeyEventKind::Release {
        return None;
    }
    let key = match event.code {
        KeyCode::Char('c') if event.modifiers.contains(KeyModifiers::CONTROL) => Key::Quit,
        KeyCode::Char('q') => Key::Quit,
        KeyCode::Up | KeyCode::Char('k') => Key::Up,
        KeyCode::Down | KeyCode::Char('j') => Key::Down,
        KeyCode::Enter => Key::Confirm,
        _ => Key::Other,
    };
    Some(key)
}

/// A source of logical keys for the event loop.
///
/// `pause` must stop all reads from the input device until `resume`, so a
/// child process that owns the terminal gets every keystroke.
#[allow(async_fn_in_trait)]
pub trait KeySource {
    /// Next key, or `None` when input has ended.
    async fn next_key(&mut self) -> Option<Key>;
    fn pause(&mut self);
    fn resume(&mut self);
}

/// Terminal keyboard via crossterm's async event stream.
pub struct CrosstermKeys {
    stream: Option<EventStream>,
}

impl CrosstermKeys {
    #[must_use]
    pub fn new() -> Self {
        Self {
            stream: Some(EventStream::new()),
        }
    }
}

impl Default for CrosstermKeys {
    fn default() -> Self {
        Self::new()
    }
}

impl KeySource for CrosstermKeys {
    async fn next_key(&mut self) -> Option<Key> {
        let Some(stream) = self.stream.as_mut() else {
            return std::future::pending().await;
        };
        loop {
            match stream.next().await? {
                Ok(TermEvent::Key(event)) => {
                    if let Some(key) = map_key(&event) {
                        return Some(key);
                    }
                }
                // Forces a redraw at the new size.
                Ok(TermEvent::Resize(..)) => return Some(Key::Other),
                Ok(_) => {}
                Err(e) => {
                    tracing::warn!(error = %e, "terminal input failed");
                    return None;
                }
            }
        }
    }

    fn pause(&mut self) {
        self.stream = None;
    }

    fn resume(&mut self) {
        if self.stream.is_none() {
            self.stream = Some(EventStream::new());
        }
    }
}
