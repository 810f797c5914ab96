//! Balanced parentheses.
//!
//! Push on `(`, pop on `)`, accept when the input is exhausted with only the
//! sentinel left.

use super::guard::{Guard, Lookahead};
use super::rule::{Action, Rule};
use crate::core::Verdict;

pub(super) const ALPHABET: &[char] = &['(', ')'];

fn opens(la: &Lookahead) -> bool {
    la.symbol.is('(')
}

fn closes_open(la: &Lookahead) -> bool {
    la.symbol.is(')') && la.top == '(' && la.can_pop()
}

fn stray_close(la: &Lookahead) -> bool {
    la.symbol.is(')')
}

fn ends_empty(la: &Lookahead) -> bool {
    la.symbol.is_end() && la.stack_is_bottom()
}

fn ends(la: &Lookahead) -> bool {
    la.symbol.is_end()
}

pub(super) static RULES: [Rule; 6] = [
    Rule::new(Guard::new(opens), Action::Push('('), "push '('"),
    Rule::new(Guard::new(closes_open), Action::PopOne, "pop '('"),
    Rule::new(
        Guard::new(stray_close),
        Action::Halt(Verdict::Rejected),
        "mismatched ')'",
    ),
    Rule::new(
        Guard::new(ends_empty),
        Action::Halt(Verdict::Accepted),
        "empty stack → accept",
    ),
    Rule::new(
        Guard::new(ends),
        Action::Halt(Verdict::Rejected),
        "leftover '(' on stack",
    ),
    Rule::new(Guard::ALWAYS, Action::Halt(Verdict::Rejected), "invalid symbol"),
];
