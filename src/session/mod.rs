//! Lab sessions: the reset-on-edit lifecycle around a live configuration.
//!
//! Hosts that want the lab behaviour (mode switching, sample loading, reset
//! on every edit) drive a [`Lab`]; hosts that only need the automaton can use
//! [`crate::engine`] directly.

mod builder;
mod lab;

pub use builder::LabBuilder;
pub use lab::Lab;
