//! The automaton's single stack.
//!
//! The bottom cell always holds the sentinel [`SENTINEL`]. It is pushed once
//! when the stack is created and never popped, so a depth of 1 means the
//! stack is logically empty.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Stack-bottom marker.
pub const SENTINEL: char = 'Z';

/// Owned stack of symbols, bottom-most first.
///
/// # Example
///
/// ```rust
/// use pdalab::core::{Stack, SENTINEL};
///
/// let mut stack = Stack::new();
/// stack.push('(');
/// assert_eq!(stack.top(), '(');
/// assert_eq!(stack.pop(), Some('('));
/// assert_eq!(stack.as_slice(), &[SENTINEL]);
/// ```
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct Stack {
    cells: Vec<char>,
}

impl Default for Stack {
    fn default() -> Self {
        Self::new()
    }
}

impl Stack {
    /// Create a stack holding only the sentinel.
    pub fn new() -> Self {
        Self {
            cells: vec![SENTINEL],
        }
    }

    /// Topmost symbol. The sentinel when logically empty.
    pub fn top(&self) -> char {
        self.cells.last().copied().unwrap_or(SENTINEL)
    }

    /// Number of cells, sentinel included.
    pub fn depth(&self) -> usize {
        self.cells.len()
    }

    /// True when only the sentinel remains.
    pub fn is_bottom(&self) -> bool {
        self.cells.len() == 1
    }

    pub fn push(&mut self, symbol: char) {
        self.cells.push(symbol);
    }

    /// Pop the top symbol.
    ///
    /// Rule guards only allow a pop above the sentinel. The sentinel itself is
    /// never removed: debug builds assert on the attempt, release builds
    /// return `None`.
    pub fn pop(&mut self) -> Option<char> {
        debug_assert!(self.cells.len() > 1, "rule guard allowed a sentinel pop");
        if self.cells.len() > 1 {
            self.cells.pop()
        } else {
            None
        }
    }

    /// Cells bottom-first.
    pub fn as_slice(&self) -> &[char] {
        &self.cells
    }
}

impl fmt::Display for Stack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, cell) in self.cells.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            write!(f, "{cell}")?;
        }
        f.write_str("]")
    }
}
