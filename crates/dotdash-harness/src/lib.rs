//! Deterministic simulation harness for dotdash.
//!
//! # Simulation Driver
//!
//! [`SimDriver`] implements [`dotdash_app::Driver`] over a scripted event
//! queue, so the production [`dotdash_app::Runtime`] loop runs unchanged in
//! tests.
//!
//! # Model-Based Testing
//!
//! The `model` module provides a reference implementation of the symbol
//! processor. Operations are applied to both the model and the real
//! processor, and their observable states are compared.
//!
//! # Invariant Testing
//!
//! The `invariants` module provides behavioral testing through invariant
//! checks. Invariants verify WHAT must be true across all execution paths, not
//! specific scenarios. Use [`InvariantRegistry::standard()`] for the common
//! App invariants.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod invariants;
pub mod model;
pub mod sim_driver;

pub use invariants::{
    AppSnapshot, ErrorDiscardsSymbol, FocusInBounds, Invariant, InvariantKind, InvariantRegistry,
    InvariantResult, ResultFromTable, SymbolAlphabet, Violation,
};
pub use model::{ModelAction, ModelProcessor, Operation};
pub use sim_driver::{SimDriver, SimDriverError};
