//! Single-step transition engine.

use crate::core::{Status, StepRecord, Symbol, Verdict};
use crate::engine::config::Configuration;
use crate::rules::{Action, Rule};

/// Result of executing a single step
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StepResult {
    /// A symbol was consumed and the run continues
    Advanced,

    /// The automaton halted with a verdict
    Halted(Verdict),

    /// The configuration was already terminal; nothing changed
    Unchanged,
}

impl Configuration {
    /// Apply exactly one transition of the active rule set.
    ///
    /// An `Idle` configuration becomes `Running` first. A terminal
    /// configuration is left untouched and no trace record is added;
    /// otherwise exactly one record is appended.
    pub fn step(&mut self) -> StepResult {
        if self.status.is_terminal() {
            return StepResult::Unchanged;
        }
        self.status = Status::Running;

        let view = self.lookahead();
        let rule = self.rule_set.decide(&view);
        let consumed = self.apply(rule, view.symbol);

        self.trace.record(StepRecord {
            index: self.trace.len() + 1,
            read: view.symbol,
            consumed,
            position: self.position,
            stack: self.stack.as_slice().to_vec(),
            control_state: self.control_state.clone(),
            note: rule.note.to_string(),
        });

        match rule.action.verdict() {
            Some(verdict) => StepResult::Halted(verdict),
            None => StepResult::Advanced,
        }
    }

    /// Mutate stack, flags, head and status per `rule`. Returns the
    /// consumed character, if any.
    fn apply(&mut self, rule: &Rule, symbol: Symbol) -> Option<char> {
        match rule.action {
            Action::Push(cell) => self.stack.push(cell),
            Action::PopOne => {
                self.stack.pop();
            }
            Action::Halt(verdict) => self.status = verdict.into(),
        }
        self.flags.insert(rule.marks);

        let consumed = symbol.as_char().filter(|_| rule.action.consumes_input());
        if consumed.is_some() {
            self.position += 1;
        }
        consumed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::{AuxFlags, RuleSet};

    #[test]
    fn first_step_leaves_idle() {
        let mut config = Configuration::new("(", RuleSet::BalancedParens);

        assert_eq!(config.step(), StepResult::Advanced);
        assert_eq!(config.status(), Status::Running);
    }

    #[test]
    fn push_consumes_and_records() {
        let mut config = Configuration::new("(", RuleSet::BalancedParens);
        config.step();

        assert_eq!(config.position(), 1);
        assert_eq!(config.stack(), &['Z', '(']);

        let record = config.trace().last().unwrap();
        assert_eq!(record.index, 1);
        assert_eq!(record.read, Symbol::Char('('));
        assert_eq!(record.consumed, Some('('));
        assert_eq!(record.position, 1);
        assert_eq!(record.stack, vec!['Z', '(']);
        assert_eq!(record.control_state, "q0");
        assert_eq!(record.note, "push '('");
    }

    #[test]
    fn halting_step_consumes_nothing() {
        let mut config = Configuration::new(")", RuleSet::BalancedParens);

        assert_eq!(config.step(), StepResult::Halted(Verdict::Rejected));
        assert_eq!(config.position(), 0);
        assert_eq!(config.status(), Status::Rejected);

        let record = config.trace().last().unwrap();
        assert_eq!(record.read, Symbol::Char(')'));
        assert_eq!(record.consumed, None);
        assert_eq!(record.consumed_label(), "ε");
        assert_eq!(record.note, "mismatched ')'");
    }

    #[test]
    fn empty_input_accepts_parens_in_one_step() {
        let mut config = Configuration::new("", RuleSet::BalancedParens);

        assert_eq!(config.step(), StepResult::Halted(Verdict::Accepted));
        assert_eq!(config.trace().len(), 1);
        assert_eq!(config.trace().last_note(), Some("empty stack → accept"));
    }

    #[test]
    fn terminal_step_is_a_no_op() {
        let mut config = Configuration::new("", RuleSet::EqualCount);
        config.step();
        let before = config.clone();

        assert_eq!(config.step(), StepResult::Unchanged);
        assert_eq!(config, before);
    }

    #[test]
    fn flags_follow_consumed_letters() {
        let mut config = Configuration::new("ab", RuleSet::EqualCount);

        config.step();
        assert_eq!(config.flags(), AuxFlags::SEEN_A);

        config.step();
        assert_eq!(config.flags(), AuxFlags::SEEN_A | AuxFlags::SEEN_B);
        assert_eq!(config.stack(), &['Z']);
    }

    #[test]
    fn a_after_b_is_rejected() {
        let mut config = Configuration::new("aba", RuleSet::EqualCount);
        config.step();
        config.step();

        assert_eq!(config.step(), StepResult::Halted(Verdict::Rejected));
        assert_eq!(
            config.trace().last_note(),
            Some("invalid symbol or underflow")
        );
        assert_eq!(config.position(), 2);
    }
}
