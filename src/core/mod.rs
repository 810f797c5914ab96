//! Core automaton data types.
//!
//! This module holds the plain values an automaton run is made of:
//! - The symbol stack with its never-popped sentinel
//! - The run status and halting verdicts
//! - Input symbols, including the end-of-input marker
//! - The append-only step trace
//!
//! Nothing here decides transitions; that lives in [`crate::rules`] and
//! [`crate::engine`].

mod stack;
mod status;
mod symbol;
mod trace;

pub use stack::{Stack, SENTINEL};
pub use status::{Status, Verdict};
pub use symbol::{Symbol, EPSILON};
pub use trace::{StepRecord, Trace};
