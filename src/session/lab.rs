//! Interactive lab session.

use crate::engine::{Configuration, RunReport, StepResult};
use crate::inspect::Snapshot;
use crate::rules::RuleSet;
use crate::session::builder::LabBuilder;

/// Owns the configuration a host is currently driving.
///
/// Any change to the input or rule set discards the live run and starts a
/// fresh configuration; there is no incremental editing of a run.
#[derive(Clone, Debug)]
pub struct Lab {
    rule_set: RuleSet,
    input: String,
    step_limit: usize,
    config: Configuration,
}

impl Lab {
    pub fn builder() -> LabBuilder {
        LabBuilder::new()
    }

    pub(crate) fn from_parts(rule_set: RuleSet, input: String, step_limit: usize) -> Self {
        let config = Configuration::new(input.clone(), rule_set);
        Self {
            rule_set,
            input,
            step_limit,
            config,
        }
    }

    pub fn rule_set(&self) -> RuleSet {
        self.rule_set
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn step_limit(&self) -> usize {
        self.step_limit
    }

    /// The live configuration.
    pub fn config(&self) -> &Configuration {
        &self.config
    }

    pub fn snapshot(&self) -> Snapshot {
        self.config.snapshot()
    }

    /// Discard the live run and start over on the same input.
    pub fn reset(&mut self) {
        self.config = Configuration::new(self.input.clone(), self.rule_set);
    }

    /// Replace the input. Always resets.
    pub fn set_input(&mut self, input: impl Into<String>) {
        self.input = input.into();
        self.reset();
    }

    /// Switch automaton and load its accepted sample.
    pub fn switch_rule_set(&mut self, rule_set: RuleSet) {
        self.rule_set = rule_set;
        self.load_accepted_sample();
    }

    pub fn load_accepted_sample(&mut self) {
        self.set_input(self.rule_set.samples().accepted);
    }

    pub fn load_rejected_sample(&mut self) {
        self.set_input(self.rule_set.samples().rejected);
    }

    pub fn step(&mut self) -> StepResult {
        self.config.step()
    }

    /// Run with the session's step limit.
    pub fn run(&mut self) -> RunReport {
        self.config.run(self.step_limit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Status;

    fn lab(rule_set: RuleSet) -> Lab {
        Lab::builder().rule_set(rule_set).build().unwrap()
    }

    #[test]
    fn accepted_sample_runs_to_acceptance() {
        let mut lab = lab(RuleSet::BalancedParens);

        assert_eq!(lab.run().status, Status::Accepted);
    }

    #[test]
    fn rejected_sample_runs_to_rejection() {
        for rule_set in RuleSet::ALL {
            let mut lab = lab(rule_set);
            lab.load_rejected_sample();

            assert_eq!(lab.run().status, Status::Rejected);
        }
    }

    #[test]
    fn editing_input_resets_the_run() {
        let mut lab = lab(RuleSet::BalancedParens);
        lab.step();
        lab.step();
        assert_eq!(lab.config().trace().len(), 2);

        lab.set_input("()");

        assert_eq!(lab.config().input(), "()");
        assert_eq!(lab.config().status(), Status::Idle);
        assert!(lab.config().trace().is_empty());
    }

    #[test]
    fn switching_rule_set_loads_its_sample() {
        let mut lab = lab(RuleSet::BalancedParens);
        lab.run();

        lab.switch_rule_set(RuleSet::EqualCount);

        assert_eq!(lab.rule_set(), RuleSet::EqualCount);
        assert_eq!(lab.input(), "aaabbb");
        assert_eq!(lab.config().rule_set(), RuleSet::EqualCount);
        assert_eq!(lab.config().status(), Status::Idle);
    }

    #[test]
    fn reset_keeps_input_and_rule_set() {
        let mut lab = lab(RuleSet::EqualCount);
        lab.run();

        lab.reset();

        assert_eq!(lab.input(), "aaabbb");
        assert_eq!(lab.config().position(), 0);
        assert_eq!(lab.config().stack(), &['Z']);
    }

    #[test]
    fn steps_after_halt_are_ignored() {
        let mut lab = lab(RuleSet::EqualCount);
        lab.run();
        let len = lab.config().trace().len();

        assert_eq!(lab.step(), StepResult::Unchanged);
        assert_eq!(lab.run().steps, 0);
        assert_eq!(lab.config().trace().len(), len);
    }
}
