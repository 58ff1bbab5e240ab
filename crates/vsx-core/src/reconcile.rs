//! Desired-vs-installed diffing
//!
//! Both filters borrow the desired list and return a new one; the caller's
//! list is never modified.

use std::fmt;
use std::str::FromStr;

use crate::apply::Operation;
use crate::error::Error;
use crate::extension::ExtensionRecord;

/// Target state for the desired extensions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum State {
    #[default]
    Present,
    Absent,
}

impl State {
    pub fn as_str(&self) -> &'static str {
        match self {
            State::Present => "present",
            State::Absent => "absent",
        }
    }

    /// The mutation that moves an extension towards this state.
    pub fn operation(&self) -> Operation {
        match self {
            State::Present => Operation::Install,
            State::Absent => Operation::Uninstall,
        }
    }
}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for State {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "present" => Ok(State::Present),
            "absent" => Ok(State::Absent),
            other => Err(Error::InvalidParams(format!(
                "value of state must be one of: present, absent, got: {}",
                other
            ))),
        }
    }
}

/// Identifiers that need a mutating call, in the order they were requested.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Delta {
    pub operation: Operation,
    pub identifiers: Vec<String>,
}

impl Delta {
    pub fn is_empty(&self) -> bool {
        self.identifiers.is_empty()
    }

    pub fn len(&self) -> usize {
        self.identifiers.len()
    }
}

fn is_installed(identifier: &str, inventory: &[ExtensionRecord]) -> bool {
    inventory.iter().any(|record| record.matches(identifier))
}

/// Desired identifiers that match no installed record, pinned or bare.
pub fn filter_not_installed(desired: &[String], inventory: &[ExtensionRecord]) -> Vec<String> {
    desired
        .iter()
        .filter(|id| !is_installed(id, inventory))
        .cloned()
        .collect()
}

/// Desired identifiers that match at least one installed record.
///
/// Identifiers with no match are dropped since there is nothing to remove.
pub fn filter_installed(desired: &[String], inventory: &[ExtensionRecord]) -> Vec<String> {
    desired
        .iter()
        .filter(|id| is_installed(id, inventory))
        .cloned()
        .collect()
}

/// Compute the delta needed to bring `inventory` to `state` for `desired`.
pub fn plan(state: State, desired: &[String], inventory: &[ExtensionRecord]) -> Delta {
    let identifiers = match state {
        State::Present => filter_not_installed(desired, inventory),
        State::Absent => filter_installed(desired, inventory),
    };
    Delta {
        operation: state.operation(),
        identifiers,
    }
}
