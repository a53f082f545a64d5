//! Core state machine for dotdash
//!
//! Pure, synchronous Morse composition logic with no I/O dependencies. The
//! presentation layer feeds [`Action`]s into a [`Processor`] and reads the
//! resulting [`ProcessorState`] back after each notification.
//!
//! # Components
//!
//! - [`Action`]: closed set of user intents, each with a label and a tag
//! - [`morse`]: static pattern table with exact-match decoding
//! - [`Processor`]: symbol buffer, decoded result and error flag
//! - [`StateObserver`]: synchronous state-changed notification seam

#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod action;
pub mod error;
pub mod morse;
mod observer;
mod processor;
mod state;

pub use action::Action;
pub use error::{DecodeError, UnknownAction};
pub use observer::{NoopObserver, StateObserver};
pub use processor::Processor;
pub use state::ProcessorState;
