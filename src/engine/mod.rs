//! Step engine and run driver.
//!
//! The engine holds no state of its own: every operation takes an explicit
//! [`Configuration`] and mutates or returns it.
//!
//! - [`create`] builds the initial configuration for a rule-set name
//! - [`step`] applies exactly one transition
//! - [`run`] steps under a bounded budget until the automaton halts
//!
//! The value-in/value-out functions here mirror the in-place methods on
//! [`Configuration`].

mod config;
mod error;
mod run;
mod step;

pub use config::{Configuration, INITIAL_CONTROL_STATE};
pub use error::ConfigurationError;
pub use run::{RunReport, DEFAULT_STEP_LIMIT};
pub use step::StepResult;

/// Create the initial configuration for `input` under the named rule set.
pub fn create(input: &str, rule_set_name: &str) -> Result<Configuration, ConfigurationError> {
    Configuration::create(input, rule_set_name)
}

/// Apply one step and return the updated configuration.
pub fn step(mut config: Configuration) -> Configuration {
    config.step();
    config
}

/// Run under `step_limit` and return the final configuration.
///
/// A configuration still `Running` afterwards is inconclusive, not rejected.
pub fn run(mut config: Configuration, step_limit: usize) -> Configuration {
    config.run(step_limit);
    config
}
