//! Declarative reconciliation of installed editor extensions.
//!
//! Given a list of extension identifiers (bare `publisher.name` or pinned
//! `publisher.name@version`) and a target [`State`], this crate asks the
//! editor binary what is installed, computes the minimal [`Delta`] and
//! applies it one item at a time.
//!
//! The editor is reached through the [`CommandRunner`] trait so the whole
//! flow can be driven by a fake in tests.

pub mod apply;
pub mod binary;
pub mod editor;
pub mod error;
pub mod extension;
pub mod params;
pub mod reconcile;
pub mod report;
pub mod runner;

pub use apply::{Operation, Outcome, reconcile, run};
pub use binary::{DEFAULT_CANDIDATES, resolve_binary};
pub use editor::EditorCli;
pub use error::{Error, Result};
pub use extension::{ExtensionRecord, parse_inventory};
pub use params::ModuleParams;
pub use reconcile::{Delta, State, filter_installed, filter_not_installed, plan};
pub use report::{ModuleFailure, ModuleResult};
pub use runner::{CommandOutput, CommandRunner, SystemRunner};
