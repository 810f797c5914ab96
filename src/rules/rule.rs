//! Rules and the actions they trigger.

use super::flags::AuxFlags;
use super::guard::{Guard, Lookahead};
use crate::core::Verdict;
use serde::{Deserialize, Serialize};

/// Stack/tape effect of a rule.
///
/// `Push` and `PopOne` consume the symbol under the read head; `Halt` never
/// consumes input.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum Action {
    Push(char),
    PopOne,
    Halt(Verdict),
}

impl Action {
    pub fn consumes_input(&self) -> bool {
        !matches!(self, Action::Halt(_))
    }

    pub fn verdict(&self) -> Option<Verdict> {
        match self {
            Action::Halt(verdict) => Some(*verdict),
            Action::Push(_) | Action::PopOne => None,
        }
    }
}

/// One row of a rule table.
#[derive(Clone, Copy, Debug)]
pub struct Rule {
    pub guard: Guard,
    pub action: Action,
    /// Flags set when the rule fires
    pub marks: AuxFlags,
    /// Trace note
    pub note: &'static str,
}

impl Rule {
    pub const fn new(guard: Guard, action: Action, note: &'static str) -> Self {
        Self {
            guard,
            action,
            marks: AuxFlags::empty(),
            note,
        }
    }

    /// Same rule, additionally setting `marks` when it fires.
    pub const fn marking(self, marks: AuxFlags) -> Self {
        Self {
            guard: self.guard,
            action: self.action,
            marks,
            note: self.note,
        }
    }

    /// Check if this rule applies to the view (pure)
    pub fn applies(&self, view: &Lookahead) -> bool {
        self.guard.check(view)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Symbol;

    fn reads_a(la: &Lookahead) -> bool {
        la.symbol.is('a')
    }

    #[test]
    fn only_halting_actions_leave_input_alone() {
        assert!(Action::Push('A').consumes_input());
        assert!(Action::PopOne.consumes_input());
        assert!(!Action::Halt(Verdict::Accepted).consumes_input());
        assert!(!Action::Halt(Verdict::Rejected).consumes_input());
    }

    #[test]
    fn marking_keeps_guard_action_and_note() {
        let rule = Rule::new(Guard::new(reads_a), Action::Push('A'), "push A")
            .marking(AuxFlags::SEEN_A);

        assert_eq!(rule.action, Action::Push('A'));
        assert_eq!(rule.marks, AuxFlags::SEEN_A);
        assert_eq!(rule.note, "push A");

        let view = Lookahead {
            symbol: Symbol::Char('a'),
            top: 'Z',
            depth: 1,
            flags: AuxFlags::empty(),
        };
        assert!(rule.applies(&view));
    }
}
