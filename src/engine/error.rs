//! Configuration error types.

use thiserror::Error;

/// Errors raised at the engine boundary.
///
/// Rejected input is never an error; it is an ordinary
/// [`Status::Rejected`](crate::core::Status::Rejected) outcome.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigurationError {
    /// The rule-set name is not one of the supported automata
    #[error("Unknown rule set '{name}', supported: parens, anbn")]
    UnknownRuleSet { name: String },

    /// A lab was built without choosing a rule set
    #[error("Rule set not specified. Call .rule_set(..) or .rule_set_name(..) before .build()")]
    MissingRuleSet,

    /// A step limit of zero would never let a run make progress
    #[error("Step limit must be at least 1")]
    ZeroStepLimit,
}
