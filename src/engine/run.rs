//! Bounded run driver.

use crate::core::Status;
use crate::engine::config::Configuration;
use serde::Serialize;

/// Default iteration budget for [`Configuration::run`].
///
/// Both built-in rule sets halt within `input length + 1` steps, so this is
/// only a guard against non-termination.
pub const DEFAULT_STEP_LIMIT: usize = 512;

/// Summary of a bounded run.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct RunReport {
    /// Steps applied during this run
    pub steps: usize,
    /// Status when the run stopped
    pub status: Status,
}

impl RunReport {
    /// True if the run hit its step limit before halting.
    ///
    /// An inconclusive run is neither accepted nor rejected.
    pub fn is_inconclusive(&self) -> bool {
        !self.status.is_terminal()
    }
}

impl Configuration {
    /// Step until the configuration halts or `step_limit` steps were applied.
    ///
    /// Hitting the limit is not an error: the status stays `Running`.
    pub fn run(&mut self, step_limit: usize) -> RunReport {
        if self.status == Status::Idle {
            self.status = Status::Running;
        }

        let mut steps = 0;
        while steps < step_limit && !self.status.is_terminal() {
            self.step();
            steps += 1;
        }

        RunReport {
            steps,
            status: self.status,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::RuleSet;

    #[test]
    fn run_halts_within_input_length_plus_one() {
        let mut config = Configuration::new("(()())", RuleSet::BalancedParens);
        let report = config.run(DEFAULT_STEP_LIMIT);

        assert_eq!(report.status, Status::Accepted);
        assert_eq!(report.steps, 7);
        assert!(!report.is_inconclusive());
    }

    #[test]
    fn step_limit_leaves_run_inconclusive() {
        let mut config = Configuration::new("aaabbb", RuleSet::EqualCount);
        let report = config.run(3);

        assert_eq!(report.steps, 3);
        assert_eq!(report.status, Status::Running);
        assert!(report.is_inconclusive());
        assert_eq!(config.position(), 3);
        assert_eq!(config.stack_depth(), 4);
    }

    #[test]
    fn run_resumes_after_limit() {
        let mut config = Configuration::new("aaabbb", RuleSet::EqualCount);
        config.run(3);
        let report = config.run(DEFAULT_STEP_LIMIT);

        assert_eq!(report.steps, 4);
        assert_eq!(report.status, Status::Accepted);
        assert_eq!(config.trace().len(), 7);
    }

    #[test]
    fn zero_limit_only_leaves_idle() {
        let mut config = Configuration::new("()", RuleSet::BalancedParens);
        let report = config.run(0);

        assert_eq!(report.steps, 0);
        assert_eq!(config.status(), Status::Running);
        assert!(config.trace().is_empty());
    }

    #[test]
    fn run_on_terminal_configuration_changes_nothing() {
        let mut config = Configuration::new("())(", RuleSet::BalancedParens);
        config.run(DEFAULT_STEP_LIMIT);
        let before = config.clone();

        let report = config.run(DEFAULT_STEP_LIMIT);

        assert_eq!(report.steps, 0);
        assert_eq!(config, before);
    }
}
