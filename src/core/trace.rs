//! Step trace recording.
//!
//! The trace is append-only and purely observational: the engine writes one
//! record per step and never reads it back.

use super::symbol::{Symbol, EPSILON};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Record of a single step.
///
/// `position` and `stack` describe the configuration *after* the step was
/// applied.
///
/// # Example
///
/// ```rust
/// use pdalab::core::{StepRecord, Symbol};
///
/// let record = StepRecord {
///     index: 1,
///     read: Symbol::Char('('),
///     consumed: Some('('),
///     position: 1,
///     stack: vec!['Z', '('],
///     control_state: "q0".to_string(),
///     note: "push '('".to_string(),
/// };
///
/// assert_eq!(record.to_string(), "[1] read ( | pos 1 | stack [Z,(] | push '('");
/// ```
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct StepRecord {
    /// 1-based step number
    pub index: usize,
    /// Symbol under the read head when the step was taken
    pub read: Symbol,
    /// Character the step consumed, `None` for halting steps
    pub consumed: Option<char>,
    /// Read position after the step
    pub position: usize,
    /// Stack contents after the step, bottom-first
    pub stack: Vec<char>,
    /// Control state after the step
    pub control_state: String,
    /// Human-readable note from the rule that fired
    pub note: String,
}

impl StepRecord {
    /// The consumed character, or `ε` if the step consumed nothing.
    pub fn consumed_label(&self) -> String {
        self.consumed
            .map_or_else(|| EPSILON.to_string(), |c| c.to_string())
    }

    pub fn stack_depth(&self) -> usize {
        self.stack.len()
    }
}

impl fmt::Display for StepRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let stack: Vec<String> = self.stack.iter().map(char::to_string).collect();
        write!(
            f,
            "[{}] read {} | pos {} | stack [{}] | {}",
            self.index,
            self.read,
            self.position,
            stack.join(","),
            self.note
        )
    }
}

/// Ordered log of step records.
#[derive(Clone, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
pub struct Trace {
    records: Vec<StepRecord>,
}

impl Trace {
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    /// Append a record.
    pub fn record(&mut self, record: StepRecord) {
        self.records.push(record);
    }

    /// All records in step order.
    pub fn records(&self) -> &[StepRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn last(&self) -> Option<&StepRecord> {
        self.records.last()
    }

    /// Note of the most recent step.
    pub fn last_note(&self) -> Option<&str> {
        self.records.last().map(|r| r.note.as_str())
    }

    /// Stack depth after each step, in order.
    pub fn depth_profile(&self) -> Vec<usize> {
        self.records.iter().map(StepRecord::stack_depth).collect()
    }

    /// One rendered log line per step.
    pub fn lines(&self) -> Vec<String> {
        self.records.iter().map(ToString::to_string).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(index: usize, read: Symbol, consumed: Option<char>, stack: &[char]) -> StepRecord {
        StepRecord {
            index,
            read,
            consumed,
            position: index,
            stack: stack.to_vec(),
            control_state: "q0".to_string(),
            note: format!("step {index}"),
        }
    }

    #[test]
    fn new_trace_is_empty() {
        let trace = Trace::new();

        assert!(trace.is_empty());
        assert_eq!(trace.len(), 0);
        assert!(trace.last().is_none());
        assert!(trace.last_note().is_none());
    }

    #[test]
    fn record_preserves_order() {
        let mut trace = Trace::new();
        trace.record(record(1, Symbol::Char('a'), Some('a'), &['Z', 'A']));
        trace.record(record(2, Symbol::Char('b'), Some('b'), &['Z']));

        assert_eq!(trace.len(), 2);
        assert_eq!(trace.records()[0].index, 1);
        assert_eq!(trace.last_note(), Some("step 2"));
    }

    #[test]
    fn depth_profile_follows_stack_sizes() {
        let mut trace = Trace::new();
        trace.record(record(1, Symbol::Char('('), Some('('), &['Z', '(']));
        trace.record(record(2, Symbol::Char('('), Some('('), &['Z', '(', '(']));
        trace.record(record(3, Symbol::Char(')'), Some(')'), &['Z', '(']));

        assert_eq!(trace.depth_profile(), vec![2, 3, 2]);
    }

    #[test]
    fn halting_step_renders_epsilon() {
        let halt = record(1, Symbol::End, None, &['Z']);

        assert_eq!(halt.consumed_label(), "ε");
        assert_eq!(halt.to_string(), "[1] read ε | pos 1 | stack [Z] | step 1");
    }

    #[test]
    fn trace_serializes_correctly() {
        let mut trace = Trace::new();
        trace.record(record(1, Symbol::Char('a'), Some('a'), &['Z', 'A']));

        let json = serde_json::to_string(&trace).unwrap();
        let deserialized: Trace = serde_json::from_str(&json).unwrap();

        assert_eq!(trace, deserialized);
    }
}
