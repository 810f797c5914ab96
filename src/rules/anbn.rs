//! Equal-count `a^n b^n` for `n >= 1`.
//!
//! Each `a` pushes an `A`, each `b` pops one. Once a `b` has been read no
//! further `a` is allowed. Acceptance additionally requires having seen at
//! least one of each letter, so the empty string is rejected.

use super::flags::AuxFlags;
use super::guard::{Guard, Lookahead};
use super::rule::{Action, Rule};
use crate::core::Verdict;

pub(super) const ALPHABET: &[char] = &['a', 'b'];

fn reads_a_before_b(la: &Lookahead) -> bool {
    la.symbol.is('a') && !la.flags.contains(AuxFlags::SEEN_B)
}

fn reads_b_without_a(la: &Lookahead) -> bool {
    la.symbol.is('b') && la.can_pop() && !la.flags.contains(AuxFlags::SEEN_A)
}

fn reads_b(la: &Lookahead) -> bool {
    la.symbol.is('b') && la.can_pop()
}

fn ends_balanced(la: &Lookahead) -> bool {
    la.symbol.is_end()
        && la.stack_is_bottom()
        && la.flags.contains(AuxFlags::SEEN_A | AuxFlags::SEEN_B)
}

fn ends(la: &Lookahead) -> bool {
    la.symbol.is_end()
}

pub(super) static RULES: [Rule; 6] = [
    Rule::new(Guard::new(reads_a_before_b), Action::Push('A'), "push A")
        .marking(AuxFlags::SEEN_A),
    Rule::new(
        Guard::new(reads_b_without_a),
        Action::Halt(Verdict::Rejected),
        "cannot see b before a",
    ),
    Rule::new(Guard::new(reads_b), Action::PopOne, "pop A").marking(AuxFlags::SEEN_B),
    Rule::new(
        Guard::new(ends_balanced),
        Action::Halt(Verdict::Accepted),
        "stack empty + seen a/b",
    ),
    Rule::new(
        Guard::new(ends),
        Action::Halt(Verdict::Rejected),
        "stack not empty or missing a/b",
    ),
    Rule::new(
        Guard::ALWAYS,
        Action::Halt(Verdict::Rejected),
        "invalid symbol or underflow",
    ),
];
