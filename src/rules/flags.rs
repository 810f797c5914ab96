//! Auxiliary flags a rule set may need for its acceptance test.

use serde::{Deserialize, Serialize};

bitflags::bitflags! {
    /// Booleans carried alongside the stack.
    ///
    /// Only the equal-count rule set uses these; balanced parentheses
    /// decides on symbol and stack alone.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
    #[serde(transparent)]
    pub struct AuxFlags: u8 {
        /// At least one `a` has been consumed
        const SEEN_A = 1 << 0;
        /// At least one `b` has been consumed
        const SEEN_B = 1 << 1;
    }
}
