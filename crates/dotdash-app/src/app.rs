//! Application state machine.
//!
//! This module defines the [`App`] state machine, which manages the
//! interactive state of the screen completely decoupled from terminal I/O.
//!
//! This is a pure state machine: it consumes [`crate::AppEvent`] inputs and
//! produces [`crate::AppAction`] instructions for the runtime to execute.
//!
//! # Responsibilities
//!
//! - Owns the Morse [`Processor`] and forwards user intents to it.
//! - Turns processor notifications into render requests.
//! - Tracks which button has focus and whether the decode alert is showing.
//! - Stores terminal dimensions to handle resize events.

use dotdash_core::{Action, Processor, ProcessorState, StateObserver};

use crate::{AppAction, AppEvent, KeyInput, button};

/// Result label text while nothing has been decoded.
pub const PLACEHOLDER: &str = "Try Input";

/// Records that the processor asked for a redraw.
#[derive(Debug, Clone, Copy, Default)]
struct RenderRequest {
    pending: bool,
}

impl RenderRequest {
    fn take(&mut self) -> bool {
        std::mem::take(&mut self.pending)
    }
}

impl StateObserver for RenderRequest {
    fn state_changed(&mut self, _state: &ProcessorState) {
        self.pending = true;
    }
}

/// Application state machine.
///
/// Pure state machine that processes events and produces actions.
/// No I/O dependencies - fully testable in simulation.
#[derive(Debug, Clone)]
pub struct App {
    /// Morse processor. Notifies `RenderRequest` after every input.
    processor: Processor<RenderRequest>,
    /// Index into [`button::BUTTONS`].
    focus: usize,
    /// Terminal dimensions (columns, rows).
    terminal_size: (u16, u16),
    /// Transient status message. `None` if no message.
    status_message: Option<String>,
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

impl App {
    /// Create a new App with an empty processor.
    pub fn new() -> Self {
        Self {
            processor: Processor::with_observer(RenderRequest::default()),
            focus: 0,
            terminal_size: (80, 24),
            status_message: None,
        }
    }

    /// Process an event and return actions.
    pub fn handle(&mut self, event: AppEvent) -> Vec<AppAction> {
        match event {
            AppEvent::Tick => vec![],
            AppEvent::Resize(cols, rows) => {
                self.terminal_size = (cols, rows);
                vec![AppAction::Render]
            },
            AppEvent::ButtonPressed { tag } => self.press(tag),
            AppEvent::Key(key) => self.handle_key(key),
        }
    }

    /// Press the button carrying `tag`.
    ///
    /// Unknown tags leave the processor state alone and set a status message;
    /// the processor still notifies, so a render is still requested. While
    /// the alert is showing, known tags other than Close are ignored.
    pub fn press(&mut self, tag: u8) -> Vec<AppAction> {
        if self.is_alert_visible()
            && Action::from_tag(tag).is_ok_and(|action| action != Action::CloseAlert)
        {
            tracing::debug!(tag, "button ignored while alert is showing");
            return vec![];
        }

        if self.processor.process_tag(tag).is_err() {
            self.status_message = Some(format!("Unknown button tag {tag}"));
        } else {
            self.status_message = None;
        }
        self.drain_render()
    }

    /// Feed an action straight into the processor.
    pub fn submit(&mut self, action: Action) -> Vec<AppAction> {
        self.status_message = None;
        self.processor.process(action);
        self.drain_render()
    }

    /// Quit the application.
    pub fn quit(&self) -> Vec<AppAction> {
        vec![AppAction::Quit]
    }

    /// Set a status message to display to the user.
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    fn handle_key(&mut self, key: KeyInput) -> Vec<AppAction> {
        if self.is_alert_visible() {
            return self.handle_alert_key(key);
        }

        match key {
            KeyInput::Char('.') => self.submit(Action::Dot),
            KeyInput::Char('-') => self.submit(Action::Hyphen),
            KeyInput::Char(' ' | '_') => self.submit(Action::Space),
            KeyInput::Char('r' | 'R') => self.submit(Action::Reset),
            KeyInput::Char('q') | KeyInput::Esc => self.quit(),
            KeyInput::Enter => self.press(self.focused_button().tag()),
            KeyInput::Right | KeyInput::Tab => self.move_focus(button::next),
            KeyInput::Left | KeyInput::BackTab => self.move_focus(button::prev),
            KeyInput::Down => self.move_focus(button::down),
            KeyInput::Up => self.move_focus(button::up),
            KeyInput::Char(_) => vec![],
        }
    }

    /// Alert is modal: only dismissal keys get through.
    fn handle_alert_key(&mut self, key: KeyInput) -> Vec<AppAction> {
        match key {
            KeyInput::Enter | KeyInput::Esc | KeyInput::Char('c' | 'C' | ' ') => {
                self.submit(Action::CloseAlert)
            },
            _ => vec![],
        }
    }

    fn move_focus(&mut self, step: fn(usize) -> usize) -> Vec<AppAction> {
        let focus = step(self.focus);
        if focus == self.focus {
            return vec![];
        }
        self.focus = focus;
        vec![AppAction::Render]
    }

    fn drain_render(&mut self) -> Vec<AppAction> {
        if self.processor.observer_mut().take() { vec![AppAction::Render] } else { vec![] }
    }

    /// Processor state (symbol buffer, result, error flag).
    pub fn processor_state(&self) -> &ProcessorState {
        self.processor.state()
    }

    /// Characters decoded so far.
    pub fn result(&self) -> &str {
        self.processor.result()
    }

    /// Pattern accumulated since the last space.
    pub fn current_symbol(&self) -> &str {
        self.processor.current_symbol()
    }

    /// Result label text: the result, or [`PLACEHOLDER`] when empty.
    pub fn display_text(&self) -> &str {
        let result = self.processor.result();
        if result.is_empty() { PLACEHOLDER } else { result }
    }

    /// Decode alert is showing.
    pub fn is_alert_visible(&self) -> bool {
        self.processor.is_error()
    }

    /// Index of the focused button.
    pub fn focus(&self) -> usize {
        self.focus
    }

    /// Action of the focused button.
    pub fn focused_button(&self) -> Action {
        button::BUTTONS.get(self.focus).copied().unwrap_or(Action::Dot)
    }

    /// Terminal dimensions (columns, rows).
    pub fn terminal_size(&self) -> (u16, u16) {
        self.terminal_size
    }

    /// Transient status message. `None` if no message.
    pub fn status_message(&self) -> Option<&str> {
        self.status_message.as_deref()
    }
}
