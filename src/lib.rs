//! PDA Lab: a deterministic pushdown automaton engine
//!
//! The engine consumes an input string symbol by symbol, mutates a single
//! stack and decides acceptance, recording one trace entry per step for
//! step-by-step visualization. It is a pure core: no global state, no I/O,
//! no logging. Hosts own the [`Configuration`](engine::Configuration) they
//! drive and read it back after every call.
//!
//! # Core Concepts
//!
//! - **Rule sets**: Closed set of declarative transition tables
//!   (balanced parentheses, `a^n b^n`)
//! - **Configuration**: Input, read position, stack, control state, status
//!   and trace
//! - **Step / Run**: Apply one transition, or step under a bounded budget
//! - **Snapshot**: Read-only display view for visualization layers
//!
//! # Example
//!
//! ```rust
//! use pdalab::core::Status;
//! use pdalab::engine::{self, DEFAULT_STEP_LIMIT};
//!
//! let config = engine::create("())(", "parens").unwrap();
//! let config = engine::run(config, DEFAULT_STEP_LIMIT);
//!
//! assert_eq!(config.status(), Status::Rejected);
//! assert_eq!(config.trace().last_note(), Some("mismatched ')'"));
//! ```

pub mod core;
pub mod engine;
pub mod inspect;
pub mod rules;
pub mod session;

// Re-export commonly used types
pub use crate::core::{Stack, Status, StepRecord, Symbol, Trace, Verdict, SENTINEL};
pub use engine::{
    create, run, step, Configuration, ConfigurationError, RunReport, StepResult,
    DEFAULT_STEP_LIMIT,
};
pub use inspect::Snapshot;
pub use rules::RuleSet;
pub use session::{Lab, LabBuilder};
