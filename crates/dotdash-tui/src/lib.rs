//! Terminal UI for dotdash
//!
//! A thin shell over [`dotdash_app::Driver`] that provides terminal-specific
//! I/O. All orchestration logic lives in the generic [`dotdash_app::Runtime`]
//!
//! This crate only handles terminal input and rendering.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod terminal;
pub mod ui;

pub use dotdash_app::{App, AppAction, AppEvent, Driver, KeyInput, Runtime};
pub use terminal::{TerminalDriver, TerminalError};
