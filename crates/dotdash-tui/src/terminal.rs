//! Terminal driver for the TUI.
//!
//! Implements the [`Driver`] trait for terminal I/O using crossterm for
//! keyboard events and ratatui for rendering.

use std::{
    io::{self, Stdout, stdout},
    time::Duration,
};

use crossterm::{
    ExecutableCommand,
    event::{Event, EventStream, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use dotdash_app::{App, AppAction, AppEvent, Driver, KeyInput};
use futures::StreamExt;
use ratatui::{Terminal, backend::CrosstermBackend};
use thiserror::Error;

use crate::ui::{self, RenderOptions};

/// Terminal driver errors.
#[derive(Debug, Error)]
pub enum TerminalError {
    /// I/O error from terminal operations.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

/// Terminal driver implementing the [`Driver`] trait.
///
/// Handles terminal I/O (crossterm) and rendering (ratatui). Raw mode and the
/// alternate screen are entered on creation and restored on drop.
pub struct TerminalDriver {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    event_stream: EventStream,
    tick: Duration,
    options: RenderOptions,
}

impl TerminalDriver {
    /// Create a new terminal driver.
    ///
    /// `tick` bounds how long [`Driver::poll_event`] waits for input.
    pub fn new(tick: Duration, options: RenderOptions) -> Result<Self, TerminalError> {
        enable_raw_mode()?;
        stdout().execute(EnterAlternateScreen)?;

        let backend = CrosstermBackend::new(stdout());
        let terminal = Terminal::new(backend)?;
        let event_stream = EventStream::new();

        Ok(Self { terminal, event_stream, tick, options })
    }

    /// Convert crossterm `KeyCode` to `KeyInput`.
    fn convert_key(code: KeyCode) -> Option<KeyInput> {
        match code {
            KeyCode::Char(c) => Some(KeyInput::Char(c)),
            KeyCode::Enter => Some(KeyInput::Enter),
            KeyCode::Esc => Some(KeyInput::Esc),
            KeyCode::Tab => Some(KeyInput::Tab),
            KeyCode::BackTab => Some(KeyInput::BackTab),
            KeyCode::Left => Some(KeyInput::Left),
            KeyCode::Right => Some(KeyInput::Right),
            KeyCode::Up => Some(KeyInput::Up),
            KeyCode::Down => Some(KeyInput::Down),
            _ => None,
        }
    }

    fn handle_key(app: &mut App, key: KeyEvent) -> Vec<AppAction> {
        // Raw mode swallows SIGINT
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return app.quit();
        }

        match Self::convert_key(key.code) {
            Some(key_input) => app.handle(AppEvent::Key(key_input)),
            None => vec![],
        }
    }
}

impl Driver for TerminalDriver {
    type Error = TerminalError;

    async fn poll_event(&mut self, app: &mut App) -> Result<Vec<AppAction>, Self::Error> {
        tokio::select! {
            biased;

            // Terminal events
            maybe_event = self.event_stream.next() => {
                match maybe_event {
                    Some(Ok(Event::Key(key_event))) if key_event.kind == KeyEventKind::Press => {
                        Ok(Self::handle_key(app, key_event))
                    },
                    Some(Ok(Event::Resize(cols, rows))) => {
                        Ok(app.handle(AppEvent::Resize(cols, rows)))
                    },
                    Some(Err(e)) => Err(TerminalError::Io(e)),
                    // Input closed
                    None => Ok(app.quit()),
                    _ => Ok(vec![]),
                }
            }

            // Tick timeout
            () = tokio::time::sleep(self.tick) => {
                Ok(app.handle(AppEvent::Tick))
            }
        }
    }

    fn render(&mut self, app: &App) -> Result<(), Self::Error> {
        let options = self.options;
        self.terminal.draw(|frame| {
            ui::render(frame, app, options);
        })?;
        Ok(())
    }

    fn stop(&mut self) {
        if let Err(e) = self.terminal.show_cursor() {
            tracing::warn!("Failed to restore cursor: {:?}", e);
        }
    }
}

impl Drop for TerminalDriver {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = stdout().execute(LeaveAlternateScreen);
    }
}
