//! The automaton configuration: an instantaneous snapshot of a run.

use crate::core::{Stack, Status, Symbol, Trace};
use crate::engine::error::ConfigurationError;
use crate::rules::{AuxFlags, Lookahead, RuleSet};
use serde::Serialize;

/// Control state every configuration starts in.
pub const INITIAL_CONTROL_STATE: &str = "q0";

/// A complete, caller-owned snapshot of one automaton run.
///
/// A configuration is created fresh for each input/rule-set pair and is only
/// ever mutated by [`step`](Configuration::step) and
/// [`run`](Configuration::run). Editing the input means creating a new one.
///
/// # Example
///
/// ```rust
/// use pdalab::core::Status;
/// use pdalab::engine::Configuration;
///
/// let mut config = Configuration::create("(()())", "parens").unwrap();
/// assert_eq!(config.status(), Status::Idle);
///
/// config.run(512);
/// assert_eq!(config.status(), Status::Accepted);
/// assert_eq!(config.stack(), &['Z']);
/// ```
#[derive(Clone, PartialEq, Eq, Debug, Serialize)]
pub struct Configuration {
    pub(crate) rule_set: RuleSet,
    pub(crate) input: String,
    #[serde(skip)]
    pub(crate) tape: Vec<char>,
    pub(crate) position: usize,
    pub(crate) stack: Stack,
    pub(crate) control_state: String,
    pub(crate) status: Status,
    pub(crate) flags: AuxFlags,
    pub(crate) trace: Trace,
}

impl Configuration {
    /// Create the initial configuration for `input` under `rule_set`.
    pub fn new(input: impl Into<String>, rule_set: RuleSet) -> Self {
        let input = input.into();
        let tape = input.chars().collect();
        Self {
            rule_set,
            input,
            tape,
            position: 0,
            stack: Stack::new(),
            control_state: INITIAL_CONTROL_STATE.to_string(),
            status: Status::Idle,
            flags: AuxFlags::empty(),
            trace: Trace::new(),
        }
    }

    /// Create the initial configuration, resolving the rule set by name.
    ///
    /// Fails only if `rule_set_name` is unsupported; any input string,
    /// including the empty one, is accepted here.
    pub fn create(input: &str, rule_set_name: &str) -> Result<Self, ConfigurationError> {
        let rule_set = rule_set_name.parse()?;
        Ok(Self::new(input, rule_set))
    }

    pub fn rule_set(&self) -> RuleSet {
        self.rule_set
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    /// Input length in symbols (characters, not bytes).
    pub fn input_len(&self) -> usize {
        self.tape.len()
    }

    /// Index of the next unread symbol.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Symbols not yet read.
    pub fn remaining(&self) -> &[char] {
        &self.tape[self.position..]
    }

    /// Stack contents, bottom-first. Always starts with the sentinel.
    pub fn stack(&self) -> &[char] {
        self.stack.as_slice()
    }

    pub fn stack_depth(&self) -> usize {
        self.stack.depth()
    }

    pub fn control_state(&self) -> &str {
        &self.control_state
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn flags(&self) -> AuxFlags {
        self.flags
    }

    pub fn trace(&self) -> &Trace {
        &self.trace
    }

    pub fn is_terminal(&self) -> bool {
        self.status.is_terminal()
    }

    /// The local view rules decide on (pure).
    pub fn lookahead(&self) -> Lookahead {
        Lookahead {
            symbol: Symbol::at(&self.tape, self.position),
            top: self.stack.top(),
            depth: self.stack.depth(),
            flags: self.flags,
        }
    }
}
