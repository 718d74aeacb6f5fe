//! Generic runtime for application orchestration.
//!
//! The Runtime drives the application event loop, coordinating between:
//! - [`App`]: presenter state machine
//! - [`DeckStore`]: persistence of the deck snapshot
//! - [`Driver`]: Platform-specific I/O

use std::time::Duration;

use crate::{App, AppAction, AppEvent, DeckStore, Driver, PresenterConfig, store::Store};

/// Generic runtime that orchestrates App, storage, and Driver.
///
/// # Type Parameters
///
/// - `D`: Platform-specific I/O driver
/// - `S`: Key/value store holding the deck
pub struct Runtime<D, S>
where
    D: Driver,
    S: Store,
{
    driver: D,
    app: App,
    store: DeckStore<S>,
    idle_poll: Duration,
    started: D::Instant,
}

impl<D, S> Runtime<D, S>
where
    D: Driver,
    S: Store + Send,
{
    /// Load the deck from `store` and create a runtime around it.
    pub fn new(driver: D, store: S, config: &PresenterConfig) -> Self {
        let mut store = DeckStore::new(store);
        let deck = store.load();
        tracing::info!(slides = deck.slide_count(), index = deck.current_index(), "loaded deck");

        let app = App::new(deck, config);
        let started = driver.now();
        Self { driver, app, store, idle_poll: config.idle_poll, started }
    }

    /// Run the main event loop until the App asks to quit.
    ///
    /// # Errors
    ///
    /// Returns an error if the driver encounters an I/O error.
    pub async fn run(mut self) -> Result<App, D::Error> {
        self.driver.render(&self.app)?;

        loop {
            let should_quit = self.process_cycle().await?;
            if should_quit {
                break;
            }
        }

        self.driver.stop();
        tracing::info!("session ended");
        Ok(self.app)
    }

    /// Process one cycle of the event loop.
    ///
    /// Waits for input no longer than the next timer deadline, advances the
    /// App's clock, then feeds it the input event if one arrived.
    ///
    /// Returns `true` if the application should quit.
    async fn process_cycle(&mut self) -> Result<bool, D::Error> {
        let timeout = self.poll_timeout();
        let event = self.driver.poll_event(timeout).await?;

        let now = self.elapsed();
        let mut actions = self.app.handle(AppEvent::Tick { now });
        if let Some(event) = event {
            actions.extend(self.app.handle(event));
        }

        self.process_actions(&actions)
    }

    /// Execute actions returned by the App.
    ///
    /// Persisting and rendering are coalesced: one save and one frame per
    /// cycle however many actions asked for them. Returns `true` if should
    /// quit.
    fn process_actions(&mut self, actions: &[AppAction]) -> Result<bool, D::Error> {
        if actions.contains(&AppAction::Persist) {
            self.persist();
        }
        if actions.contains(&AppAction::Quit) {
            return Ok(true);
        }
        if actions.contains(&AppAction::Render) {
            self.driver.render(&self.app)?;
        }
        Ok(false)
    }

    /// Save the deck. Failures are logged; the session continues.
    fn persist(&mut self) {
        if let Err(e) = self.store.save(self.app.deck()) {
            tracing::warn!("failed to save deck: {e}");
        }
    }

    fn elapsed(&self) -> Duration {
        self.driver.now() - self.started
    }

    fn poll_timeout(&self) -> Duration {
        let now = self.elapsed();
        self.app
            .next_deadline()
            .map_or(self.idle_poll, |due| due.saturating_sub(now).min(self.idle_poll))
    }

    /// Get a reference to the App
    pub fn app(&self) -> &App {
        &self.app
    }
}
