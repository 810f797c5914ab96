//! Rule sets: declarative transition tables for the built-in automata.
//!
//! A rule set is a closed, named variant selected once when a configuration
//! is created. Each variant owns an ordered table of [`Rule`]s; the first rule
//! whose guard matches the current [`Lookahead`] fires. Every table ends with
//! an unconditional reject, so decisions are total and deterministic.
//!
//! # Example
//!
//! ```rust
//! use pdalab::core::Symbol;
//! use pdalab::rules::{Action, AuxFlags, Lookahead, RuleSet};
//!
//! let rules: RuleSet = "parens".parse().unwrap();
//! let view = Lookahead {
//!     symbol: Symbol::Char('('),
//!     top: 'Z',
//!     depth: 1,
//!     flags: AuxFlags::empty(),
//! };
//!
//! assert_eq!(rules.decide(&view).action, Action::Push('('));
//! ```

mod anbn;
mod flags;
mod guard;
mod parens;
mod rule;

pub use flags::AuxFlags;
pub use guard::{Guard, Lookahead};
pub use rule::{Action, Rule};

use crate::core::Verdict;
use crate::engine::ConfigurationError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

static NO_RULE: Rule = Rule::new(
    Guard::ALWAYS,
    Action::Halt(Verdict::Rejected),
    "no applicable rule",
);

/// Sample inputs shipped with each rule set.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Samples {
    pub accepted: &'static str,
    pub rejected: &'static str,
}

/// The supported automata.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum RuleSet {
    /// Balanced parentheses over `{ (, ) }`
    #[serde(rename = "parens")]
    BalancedParens,
    /// `a^n b^n` for `n >= 1` over `{ a, b }`
    #[serde(rename = "anbn")]
    EqualCount,
}

impl RuleSet {
    pub const ALL: [RuleSet; 2] = [RuleSet::BalancedParens, RuleSet::EqualCount];

    /// Identifier accepted by [`RuleSet::from_str`].
    pub fn name(&self) -> &'static str {
        match self {
            Self::BalancedParens => "parens",
            Self::EqualCount => "anbn",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Self::BalancedParens => "Balanced Parens",
            Self::EqualCount => "a^n b^n",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::BalancedParens => {
                "Accepts balanced parentheses using a stack (push '(' / pop ')')."
            }
            Self::EqualCount => "Accepts a^n b^n by pushing for each 'a' then popping for each 'b'.",
        }
    }

    /// Input symbols this rule set gives meaning to. Anything else rejects.
    pub fn alphabet(&self) -> &'static [char] {
        match self {
            Self::BalancedParens => parens::ALPHABET,
            Self::EqualCount => anbn::ALPHABET,
        }
    }

    pub fn recognizes(&self, symbol: char) -> bool {
        self.alphabet().contains(&symbol)
    }

    pub fn samples(&self) -> Samples {
        match self {
            Self::BalancedParens => Samples {
                accepted: "(()())",
                rejected: "())(",
            },
            Self::EqualCount => Samples {
                accepted: "aaabbb",
                rejected: "aab",
            },
        }
    }

    /// The ordered rule table.
    pub fn rules(&self) -> &'static [Rule] {
        match self {
            Self::BalancedParens => &parens::RULES,
            Self::EqualCount => &anbn::RULES,
        }
    }

    /// Pick the rule that fires for `view` (pure).
    pub fn decide(&self, view: &Lookahead) -> &'static Rule {
        self.rules()
            .iter()
            .find(|rule| rule.applies(view))
            .unwrap_or(&NO_RULE)
    }
}

impl FromStr for RuleSet {
    type Err = ConfigurationError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        RuleSet::ALL
            .into_iter()
            .find(|rules| rules.name() == name)
            .ok_or_else(|| ConfigurationError::UnknownRuleSet {
                name: name.to_string(),
            })
    }
}

impl fmt::Display for RuleSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
