//! Simulation driver implementing the Driver trait.
//!
//! `SimDriver` provides the same interface as the terminal driver but for
//! deterministic testing. It implements [`Driver`] so the same
//! [`dotdash_app::Runtime`] orchestration code runs in both production and
//! simulation.

use std::{
    collections::VecDeque,
    sync::{Arc, Mutex, MutexGuard, PoisonError},
};

use dotdash_app::{App, AppAction, AppEvent, Driver, KeyInput};

use crate::invariants::{AppSnapshot, InvariantRegistry};

/// Error type for simulation driver.
#[derive(Debug, Clone)]
pub struct SimDriverError(pub String);

impl std::fmt::Display for SimDriverError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "SimDriverError: {}", self.0)
    }
}

impl std::error::Error for SimDriverError {}

/// Shared state for event injection.
///
/// This allows injection and inspection from outside the runtime, which
/// owns the driver.
#[derive(Default)]
struct SharedState {
    pending_events: VecDeque<AppEvent>,
    renders: Vec<AppSnapshot>,
    stopped: bool,
}

/// Simulation driver for deterministic testing.
///
/// Implements [`Driver`] trait so the same [`dotdash_app::Runtime`]
/// orchestration code runs in both the terminal and simulation tests.
/// Cloning shares the underlying queue.
#[derive(Clone)]
pub struct SimDriver {
    state: Arc<Mutex<SharedState>>,
    invariants: Option<Arc<InvariantRegistry>>,
}

impl Default for SimDriver {
    fn default() -> Self {
        Self::new()
    }
}

impl SimDriver {
    /// Create a new simulation driver.
    pub fn new() -> Self {
        Self { state: Arc::new(Mutex::new(SharedState::default())), invariants: None }
    }

    /// Enable invariant checking on every render.
    #[must_use]
    pub fn with_invariants(mut self, registry: InvariantRegistry) -> Self {
        self.invariants = Some(Arc::new(registry));
        self
    }

    fn lock(&self) -> MutexGuard<'_, SharedState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Inject an `AppEvent` for processing.
    pub fn inject_event(&self, event: AppEvent) {
        self.lock().pending_events.push_back(event);
    }

    /// Inject a key press.
    pub fn inject_key(&self, key: KeyInput) {
        self.inject_event(AppEvent::Key(key));
    }

    /// Inject one character key press per character of `keys`.
    pub fn inject_keys(&self, keys: &str) {
        let mut state = self.lock();
        state.pending_events.extend(keys.chars().map(|c| AppEvent::Key(KeyInput::Char(c))));
    }

    /// Inject a tick event.
    pub fn inject_tick(&self) {
        self.inject_event(AppEvent::Tick);
    }

    /// Check if there are pending events to process.
    pub fn has_pending(&self) -> bool {
        !self.lock().pending_events.is_empty()
    }

    /// Snapshots captured at each render, oldest first.
    pub fn renders(&self) -> Vec<AppSnapshot> {
        self.lock().renders.clone()
    }

    /// Number of renders so far.
    pub fn render_count(&self) -> usize {
        self.lock().renders.len()
    }

    /// Whether the runtime stopped the driver.
    pub fn is_stopped(&self) -> bool {
        self.lock().stopped
    }

    /// Check invariants against App state.
    pub fn check_invariants(&self, app: &App, context: &str) {
        if let Some(ref registry) = self.invariants {
            registry.assert_all(&AppSnapshot::from_app(app), context);
        }
    }
}

impl Driver for SimDriver {
    type Error = SimDriverError;

    async fn poll_event(&mut self, app: &mut App) -> Result<Vec<AppAction>, Self::Error> {
        let event = self.lock().pending_events.pop_front();
        Ok(event.map_or_else(Vec::new, |event| app.handle(event)))
    }

    fn render(&mut self, app: &App) -> Result<(), Self::Error> {
        let count = self.render_count();
        self.check_invariants(app, &format!("at render {count}"));
        self.lock().renders.push(AppSnapshot::from_app(app));
        Ok(())
    }

    fn stop(&mut self) {
        tracing::debug!("simulation driver stopped");
        self.lock().stopped = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inject_event_queues_event() {
        let driver = SimDriver::new();
        driver.inject_event(AppEvent::ButtonPressed { tag: 0 });

        assert!(driver.has_pending());
    }

    #[tokio::test]
    async fn poll_event_processes_event() {
        let mut driver = SimDriver::new();
        let mut app = App::new();
        driver.inject_keys(".");

        let actions = driver.poll_event(&mut app).await.unwrap();
        assert_eq!(actions, vec![AppAction::Render]);
        assert_eq!(app.current_symbol(), ".");
        assert!(!driver.has_pending());
    }

    #[tokio::test]
    async fn poll_empty_queue_yields_nothing() {
        let mut driver = SimDriver::new();
        let mut app = App::new();

        assert!(driver.poll_event(&mut app).await.unwrap().is_empty());
    }

    #[test]
    fn render_captures_snapshot() {
        let mut driver = SimDriver::new();
        let app = App::new();

        driver.render(&app).unwrap();

        assert_eq!(driver.render_count(), 1);
        assert_eq!(driver.renders()[0], AppSnapshot::default());
    }
}
