//! The picker event loop: fetch results, keys and spinner ticks multiplexed
//! onto one owner of [`SelectionState`].

use std::time::Duration;

use anyhow::Result;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

use super::keys::KeySource;
use super::screen::Screen;
use crate::application::ports::{InventorySource, SessionLauncher};
use crate::domain::{Effect, Event, InstanceRecord, Phase, SelectionState};

/// Spinner frame interval while loading.
pub const SPINNER_INTERVAL: Duration = Duration::from_millis(80);

/// Run the inventory fetch on its own task. Posts exactly one event.
pub fn spawn_fetch<F>(source: F, project: String, tx: UnboundedSender<Event>) -> JoinHandle<()>
where
    F: InventorySource + Send + 'static,
{
    tokio::spawn(async move {
        let event = match source.fetch(&project).await {
            Ok(inventory) => Event::FetchSucceeded(inventory),
            Err(e) => Event::FetchFailed(e),
        };
        // The loop may already be gone after an early quit.
        let _ = tx.send(event);
    })
}

enum Step {
    Event(Event),
    Tick,
    InputClosed,
}

/// Owns the selection state and drives it until quit.
pub struct Picker<S, L> {
    state: SelectionState,
    screen: S,
    launcher: L,
    project: String,
    events_tx: UnboundedSender<Event>,
    events_rx: UnboundedReceiver<Event>,
}

impl<S: Screen, L: SessionLauncher> Picker<S, L> {
    pub fn new(screen: S, launcher: L, project: impl Into<String>) -> Self {
        let (events_tx, events_rx) = mpsc::unbounded_channel();
        Self {
            state: SelectionState::new(),
            screen,
            launcher,
            project: project.into(),
            events_tx,
            events_rx,
        }
    }

    /// Sender for fetch results.
    #[must_use]
    pub fn events(&self) -> UnboundedSender<Event> {
        self.events_tx.clone()
    }

    #[must_use]
    pub fn state(&self) -> &SelectionState {
        &self.state
    }

    #[must_use]
    pub fn screen(&self) -> &S {
        &self.screen
    }

    pub fn screen_mut(&mut self) -> &mut S {
        &mut self.screen
    }

    /// Process events until the user quits or input ends.
    ///
    /// Queued fetch results are handled before keys. Session failures are
    /// logged and the loop carries on.
    ///
    /// # Errors
    ///
    /// Returns an error if the screen cannot be drawn, suspended or resumed.
    pub async fn run<K: KeySource>(&mut self, keys: &mut K) -> Result<()> {
        let mut ticker = tokio::time::interval(SPINNER_INTERVAL);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
        self.screen.draw(&self.state)?;

        loop {
            let loading = self.state.phase() == Phase::Loading;
            let step = tokio::select! {
                biased;
                Some(event) = self.events_rx.recv() => Step::Event(event),
                key = keys.next_key() => {
                    key.map_or(Step::InputClosed, |k| Step::Event(Event::Key(k)))
                }
                _ = ticker.tick(), if loading => Step::Tick,
            };

            match step {
                Step::Tick => self.screen.tick(),
                Step::InputClosed => {
                    tracing::debug!("input closed, leaving picker");
                    return Ok(());
                }
                Step::Event(event) => {
                    log_fetch_result(&event);
                    match self.state.apply(event) {
                        Effect::None => {}
                        Effect::Quit => return Ok(()),
                        Effect::Launch(record) => self.launch(keys, &record).await?,
                    }
                }
            }
            self.screen.draw(&self.state)?;
        }
    }

    async fn launch<K: KeySource>(&mut self, keys: &mut K, record: &InstanceRecord) -> Result<()> {
        keys.pause();
        self.screen.suspend()?;

        match self.launcher.launch(record, &self.project).await {
            Ok(status) if status.success() => {
                tracing::info!(instance = %record.name, "ssh session ended");
            }
            Ok(status) => {
                tracing::warn!(
                    instance = %record.name,
                    code = ?status.code(),
                    "ssh session exited with failure"
                );
            }
            Err(e) => {
                tracing::warn!(
                    instance = %record.name,
                    error = %format!("{e:#}"),
                    "ssh launch failed"
                );
            }
        }

        self.screen.resume()?;
        keys.resume();
        Ok(())
    }
}

fn log_fetch_result(event: &Event) {
    match event {
        Event::FetchSucceeded(inventory) => {
            tracing::info!(count = inventory.len(), "inventory loaded");
        }
        Event::FetchFailed(e) => tracing::warn!(error = %e, "inventory fetch failed"),
        Event::Key(_) => {}
    }
}
