//! Read-only inspection surface for visualization layers.
//!
//! A [`Snapshot`] copies out everything a display needs to redraw after a
//! step: the tape with its read head, the stack, the status badge and the
//! rendered step log. Snapshots serialize to JSON for hosts that render
//! out of process.

use crate::core::{Status, EPSILON};
use crate::engine::Configuration;
use crate::rules::RuleSet;
use serde::Serialize;

/// One cell of the rendered input tape.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct TapeCell {
    pub symbol: String,
    /// True for the cell under the read head
    pub under_head: bool,
}

/// Display view of a configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Snapshot {
    pub rule_set: RuleSet,
    pub input: String,
    pub position: usize,
    pub input_len: usize,
    /// Bottom-first
    pub stack: Vec<char>,
    pub stack_depth: usize,
    pub control_state: String,
    pub status: Status,
    pub status_label: String,
    /// One rendered line per step
    pub trace: Vec<String>,
}

impl Snapshot {
    /// Input tape cells. Once the head has passed the last symbol an extra
    /// `ε` cell marks the end of input.
    pub fn tape(&self) -> Vec<TapeCell> {
        let mut cells: Vec<TapeCell> = self
            .input
            .chars()
            .enumerate()
            .map(|(i, c)| TapeCell {
                symbol: c.to_string(),
                under_head: i == self.position,
            })
            .collect();
        if self.position >= self.input_len {
            cells.push(TapeCell {
                symbol: EPSILON.to_string(),
                under_head: true,
            });
        }
        cells
    }

    /// Read progress as `position/length`.
    pub fn progress(&self) -> String {
        format!("{}/{}", self.position, self.input_len)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

impl Configuration {
    /// Copy out a display view (pure).
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            rule_set: self.rule_set(),
            input: self.input().to_string(),
            position: self.position(),
            input_len: self.input_len(),
            stack: self.stack().to_vec(),
            stack_depth: self.stack_depth(),
            control_state: self.control_state().to_string(),
            status: self.status(),
            status_label: self.status().name().to_string(),
            trace: self.trace().lines(),
        }
    }
}
