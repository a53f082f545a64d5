//! Fuzz target for App key and button handling
//!
//! # Strategy
//!
//! - Arbitrary characters, including the mapped signal keys
//! - Navigation and dismissal keys
//! - Button presses with arbitrary tags
//!
//! # Invariants
//!
//! - Standard App invariants hold after every event
//! - Neither keys nor buttons change processor state while the alert is
//!   showing, except dismissal

#![no_main]

use arbitrary::Arbitrary;
use dotdash_app::{App, AppEvent, KeyInput};
use dotdash_harness::{AppSnapshot, InvariantRegistry};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Clone, Arbitrary)]
enum FuzzEvent {
    Char(char),
    Signal(bool),
    Space,
    Enter,
    Esc,
    Tab,
    BackTab,
    Left,
    Right,
    Up,
    Down,
    Button(u8),
    Tick,
}

impl FuzzEvent {
    fn into_event(self) -> AppEvent {
        let key = match self {
            Self::Char(c) => KeyInput::Char(c),
            Self::Signal(long) => KeyInput::Char(if long { '-' } else { '.' }),
            Self::Space => KeyInput::Char(' '),
            Self::Enter => KeyInput::Enter,
            Self::Esc => KeyInput::Esc,
            Self::Tab => KeyInput::Tab,
            Self::BackTab => KeyInput::BackTab,
            Self::Left => KeyInput::Left,
            Self::Right => KeyInput::Right,
            Self::Up => KeyInput::Up,
            Self::Down => KeyInput::Down,
            Self::Button(tag) => return AppEvent::ButtonPressed { tag },
            Self::Tick => return AppEvent::Tick,
        };
        AppEvent::Key(key)
    }
}

fuzz_target!(|events: Vec<FuzzEvent>| {
    let registry = InvariantRegistry::standard();
    let mut app = App::new();

    for (step, event) in events.into_iter().enumerate() {
        let event = event.into_event();
        let alert_before = app.is_alert_visible();
        let before = app.processor_state().clone();

        let _ = app.handle(event);

        if alert_before && app.is_alert_visible() {
            assert_eq!(app.processor_state(), &before);
        }
        registry.assert_all(&AppSnapshot::from_app(&app), &format!("at step {step}"));
    }
});
