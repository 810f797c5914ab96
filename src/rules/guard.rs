//! Guard predicates for rule selection.
//!
//! A guard is a pure function of the automaton's local view: the symbol under
//! the read head, the stack top and depth, and the auxiliary flags. Guards are
//! plain function pointers so rule tables can live in statics.

use super::flags::AuxFlags;
use crate::core::Symbol;

/// Everything a rule may look at when deciding whether it applies.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Lookahead {
    /// Next input symbol, or end of input
    pub symbol: Symbol,
    /// Current stack top
    pub top: char,
    /// Stack depth, sentinel included
    pub depth: usize,
    /// Rule-set specific flags
    pub flags: AuxFlags,
}

impl Lookahead {
    /// True when only the sentinel is on the stack.
    pub fn stack_is_bottom(&self) -> bool {
        self.depth == 1
    }

    /// True when a pop would leave the sentinel in place.
    pub fn can_pop(&self) -> bool {
        self.depth > 1
    }
}

/// Pure predicate deciding whether a rule fires.
///
/// # Example
///
/// ```rust
/// use pdalab::core::Symbol;
/// use pdalab::rules::{AuxFlags, Guard, Lookahead};
///
/// fn at_end(la: &Lookahead) -> bool {
///     la.symbol.is_end()
/// }
///
/// let guard = Guard::new(at_end);
/// let view = Lookahead {
///     symbol: Symbol::End,
///     top: 'Z',
///     depth: 1,
///     flags: AuxFlags::empty(),
/// };
///
/// assert!(guard.check(&view));
/// ```
#[derive(Clone, Copy)]
pub struct Guard {
    predicate: fn(&Lookahead) -> bool,
}

fn always(_: &Lookahead) -> bool {
    true
}

impl Guard {
    /// Guard that matches every view. Used for catch-all rules.
    pub const ALWAYS: Guard = Guard::new(always);

    pub const fn new(predicate: fn(&Lookahead) -> bool) -> Self {
        Self { predicate }
    }

    pub fn check(&self, view: &Lookahead) -> bool {
        (self.predicate)(view)
    }
}

impl std::fmt::Debug for Guard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Guard").finish_non_exhaustive()
    }
}
