//! Builder for lab sessions.

use crate::engine::{ConfigurationError, DEFAULT_STEP_LIMIT};
use crate::rules::RuleSet;
use crate::session::lab::Lab;

/// Builder for constructing a [`Lab`] with a fluent API.
///
/// # Example
///
/// ```rust
/// use pdalab::session::LabBuilder;
///
/// let lab = LabBuilder::new()
///     .rule_set_name("anbn")
///     .unwrap()
///     .input("aabb")
///     .step_limit(64)
///     .build()
///     .unwrap();
///
/// assert_eq!(lab.config().input(), "aabb");
/// assert_eq!(lab.step_limit(), 64);
/// ```
#[derive(Clone, Debug)]
pub struct LabBuilder {
    rule_set: Option<RuleSet>,
    input: Option<String>,
    step_limit: usize,
}

impl LabBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            rule_set: None,
            input: None,
            step_limit: DEFAULT_STEP_LIMIT,
        }
    }

    /// Set the rule set (required).
    pub fn rule_set(mut self, rule_set: RuleSet) -> Self {
        self.rule_set = Some(rule_set);
        self
    }

    /// Set the rule set by name.
    /// Returns an error if the name is not a supported rule set.
    pub fn rule_set_name(self, name: &str) -> Result<Self, ConfigurationError> {
        let rule_set = name.parse()?;
        Ok(self.rule_set(rule_set))
    }

    /// Set the input. Defaults to the rule set's accepted sample.
    pub fn input(mut self, input: impl Into<String>) -> Self {
        self.input = Some(input.into());
        self
    }

    /// Set the per-run step budget. Defaults to [`DEFAULT_STEP_LIMIT`].
    pub fn step_limit(mut self, limit: usize) -> Self {
        self.step_limit = limit;
        self
    }

    /// Build the lab.
    /// Returns an error if the rule set is missing or the limit is zero.
    pub fn build(self) -> Result<Lab, ConfigurationError> {
        let rule_set = self.rule_set.ok_or(ConfigurationError::MissingRuleSet)?;

        if self.step_limit == 0 {
            return Err(ConfigurationError::ZeroStepLimit);
        }

        let input = self
            .input
            .unwrap_or_else(|| rule_set.samples().accepted.to_string());

        Ok(Lab::from_parts(rule_set, input, self.step_limit))
    }
}

impl Default for LabBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_requires_rule_set() {
        let result = LabBuilder::new().input("()").build();

        assert!(matches!(result, Err(ConfigurationError::MissingRuleSet)));
    }

    #[test]
    fn builder_rejects_zero_step_limit() {
        let result = LabBuilder::new()
            .rule_set(RuleSet::BalancedParens)
            .step_limit(0)
            .build();

        assert!(matches!(result, Err(ConfigurationError::ZeroStepLimit)));
    }

    #[test]
    fn builder_rejects_unknown_name() {
        let result = LabBuilder::new().rule_set_name("regex");

        assert!(matches!(
            result,
            Err(ConfigurationError::UnknownRuleSet { .. })
        ));
    }

    #[test]
    fn builder_defaults_to_accepted_sample() {
        let lab = LabBuilder::new()
            .rule_set(RuleSet::EqualCount)
            .build()
            .unwrap();

        assert_eq!(lab.config().input(), "aaabbb");
        assert_eq!(lab.step_limit(), DEFAULT_STEP_LIMIT);
    }
}
