//! Application layer for dotdash
//!
//! Pure UI state machine and generic runtime over the Morse
//! [`Processor`](dotdash_core::Processor), enabling deterministic simulation
//! testing with the same code that runs in the terminal.
//!
//! # Components
//!
//! - [`App`]: UI state machine (button focus, key map, modal alert)
//! - [`Driver`]: Trait for platform-specific I/O abstraction
//! - [`Runtime`]: Generic orchestration loop using Driver

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod action;
mod app;
pub mod button;
mod driver;
mod event;
mod input;
mod runtime;

pub use action::AppAction;
pub use app::{App, PLACEHOLDER};
pub use driver::Driver;
pub use event::AppEvent;
pub use input::KeyInput;
pub use runtime::Runtime;
