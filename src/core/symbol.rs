//! Input symbols as seen by the read head.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Rendering of the end-of-input marker and of "nothing consumed".
pub const EPSILON: &str = "ε";

/// The symbol under the read head.
///
/// Once the head has moved past the last character the automaton sees
/// [`Symbol::End`] instead of running off the tape.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Symbol {
    Char(char),
    End,
}

impl Symbol {
    /// Read the symbol at `position` on `tape`.
    pub fn at(tape: &[char], position: usize) -> Self {
        tape.get(position).copied().map_or(Symbol::End, Symbol::Char)
    }

    pub fn is_end(&self) -> bool {
        matches!(self, Symbol::End)
    }

    /// True if this is exactly the character `c`.
    pub fn is(&self, c: char) -> bool {
        matches!(self, Symbol::Char(x) if *x == c)
    }

    pub fn as_char(&self) -> Option<char> {
        match self {
            Symbol::Char(c) => Some(*c),
            Symbol::End => None,
        }
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Symbol::Char(c) => write!(f, "{c}"),
            Symbol::End => f.write_str(EPSILON),
        }
    }
}
