//! Result documents returned to the automation host

use serde::Serialize;

use crate::apply::Outcome;
use crate::error::Error;

/// Successful run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ModuleResult {
    pub changed: bool,
    pub original_message: String,
    pub message: String,
}

impl From<&Outcome> for ModuleResult {
    fn from(outcome: &Outcome) -> Self {
        Self {
            changed: outcome.changed,
            ..Self::default()
        }
    }
}

/// Failed run. `failed` is always `true`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ModuleFailure {
    pub failed: bool,
    pub msg: String,
}

impl ModuleFailure {
    pub fn new(msg: impl Into<String>) -> Self {
        Self {
            failed: true,
            msg: msg.into(),
        }
    }
}

impl From<&Error> for ModuleFailure {
    fn from(error: &Error) -> Self {
        Self::new(error.host_message())
    }
}
