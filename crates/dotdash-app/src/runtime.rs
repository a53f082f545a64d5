//! Generic runtime for application orchestration.
//!
//! The Runtime drives the application event loop, coordinating between:
//! - [`App`]: UI state machine
//! - [`Driver`]: Platform-specific I/O
//!
//! Each polled input is processed to completion (state mutation, processor
//! notification, render) before the next one is polled.

use crate::{App, AppAction, Driver};

/// Generic runtime that orchestrates App and Driver.
pub struct Runtime<D: Driver> {
    driver: D,
    app: App,
}

impl<D: Driver> Runtime<D> {
    /// Create a new runtime with a fresh App.
    pub fn new(driver: D) -> Self {
        Self::with_app(driver, App::new())
    }

    /// Create a runtime around an existing App.
    pub fn with_app(driver: D, app: App) -> Self {
        Self { driver, app }
    }

    /// Run the main event loop until the App asks to quit.
    ///
    /// # Errors
    ///
    /// Returns an error if the driver encounters an I/O error.
    pub async fn run(mut self) -> Result<(), D::Error> {
        tracing::info!("runtime started");
        self.driver.render(&self.app)?;

        loop {
            if self.step().await? {
                break;
            }
        }

        self.driver.stop();
        tracing::info!(result = %self.app.result(), "runtime stopped");
        Ok(())
    }

    /// Process one cycle of the event loop.
    ///
    /// Returns `true` if the application should quit.
    pub async fn step(&mut self) -> Result<bool, D::Error> {
        let actions = self.driver.poll_event(&mut self.app).await?;
        self.process_actions(actions)
    }

    /// Execute actions returned by the App.
    ///
    /// Returns `true` if should quit.
    fn process_actions(&mut self, actions: Vec<AppAction>) -> Result<bool, D::Error> {
        for action in actions {
            match action {
                AppAction::Render => self.driver.render(&self.app)?,
                AppAction::Quit => return Ok(true),
            }
        }
        Ok(false)
    }

    /// Get a reference to the App
    pub fn app(&self) -> &App {
        &self.app
    }

    /// Get a mutable reference to the App
    pub fn app_mut(&mut self) -> &mut App {
        &mut self.app
    }

    /// Get a reference to the Driver
    pub fn driver(&self) -> &D {
        &self.driver
    }
}
