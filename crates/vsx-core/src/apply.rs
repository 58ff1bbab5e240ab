//! Applying a computed delta against the editor

use std::fmt;
use std::path::PathBuf;

use crate::editor::EditorCli;
use crate::error::Result;
use crate::params::ModuleParams;
use crate::reconcile::{Delta, State, plan};
use crate::runner::CommandRunner;

/// Mutating action issued for a delta item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Install,
    Uninstall,
}

impl Operation {
    /// Editor flag that performs this operation.
    pub fn flag(&self) -> &'static str {
        match self {
            Operation::Install => "--install-extension",
            Operation::Uninstall => "--uninstall-extension",
        }
    }

    pub fn past_tense(&self) -> &'static str {
        match self {
            Operation::Install => "Installed",
            Operation::Uninstall => "Uninstalled",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operation::Install => f.write_str("install"),
            Operation::Uninstall => f.write_str("uninstall"),
        }
    }
}

/// Result of a successful reconciliation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    pub changed: bool,
    pub delta: Delta,
}

/// Converge the editor's installed extensions to `state` for `desired`.
///
/// The inventory is loaded once, the delta computed once, then each item is
/// applied in order. The first failing item aborts the run; later items are
/// not attempted.
pub fn reconcile<R: CommandRunner>(
    editor: &mut EditorCli<R>,
    state: State,
    desired: &[String],
) -> Result<Outcome> {
    editor.load()?;

    let delta = plan(state, desired, editor.extensions());
    tracing::debug!(
        %state,
        requested = desired.len(),
        pending = delta.len(),
        "Computed extension delta"
    );

    for identifier in &delta.identifiers {
        if let Err(e) = editor.apply(delta.operation, identifier) {
            tracing::warn!("Aborting after failed {} of {}", delta.operation, identifier);
            return Err(e);
        }
    }

    Ok(Outcome {
        changed: !delta.is_empty(),
        delta,
    })
}

/// Run one module invocation against the editor at `bin`.
pub fn run<R: CommandRunner>(
    runner: R,
    bin: impl Into<PathBuf>,
    params: &ModuleParams,
) -> Result<Outcome> {
    let mut editor = EditorCli::new(runner, bin).with_check_mode(params.check_mode);
    reconcile(&mut editor, params.state, &params.name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_operation_display() {
        assert_eq!(Operation::Install.to_string(), "install");
        assert_eq!(Operation::Uninstall.to_string(), "uninstall");
    }

    #[test]
    fn test_operation_flags() {
        assert_eq!(Operation::Install.flag(), "--install-extension");
        assert_eq!(Operation::Uninstall.flag(), "--uninstall-extension");
    }

    #[test]
    fn test_state_maps_to_operation() {
        assert_eq!(State::Present.operation(), Operation::Install);
        assert_eq!(State::Absent.operation(), Operation::Uninstall);
    }
}
