//! Run status of an automaton configuration.
//!
//! Status values are plain data with pure inspection methods, so the host
//! can poll them freely between steps.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Where a configuration sits in its lifecycle.
///
/// `Idle` only exists before the first step or run. `Accepted` and
/// `Rejected` are absorbing: once reached, stepping is a no-op.
///
/// # Example
///
/// ```rust
/// use pdalab::core::Status;
///
/// assert!(!Status::Running.is_terminal());
/// assert!(Status::Accepted.is_terminal());
/// assert!(Status::Rejected.is_rejected());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Idle,
    Running,
    Accepted,
    Rejected,
}

impl Status {
    /// Display label, as shown in the lab's status badge.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Idle => "Idle",
            Self::Running => "Running",
            Self::Accepted => "Accepted",
            Self::Rejected => "Rejected",
        }
    }

    /// True for the absorbing statuses.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Accepted | Self::Rejected)
    }

    pub fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted)
    }

    pub fn is_rejected(&self) -> bool {
        matches!(self, Self::Rejected)
    }

    /// The verdict carried by a terminal status, if any.
    pub fn verdict(&self) -> Option<Verdict> {
        match self {
            Self::Accepted => Some(Verdict::Accepted),
            Self::Rejected => Some(Verdict::Rejected),
            Self::Idle | Self::Running => None,
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Outcome of a halting transition.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Verdict {
    Accepted,
    Rejected,
}

impl From<Verdict> for Status {
    fn from(verdict: Verdict) -> Self {
        match verdict {
            Verdict::Accepted => Status::Accepted,
            Verdict::Rejected => Status::Rejected,
        }
    }
}
