//! Shared test utilities for the vscode-extension-manager workspace.
//!
//! This crate is a dev-dependency only — never published.
//!
//! # Modules
//!
//! - [`editor`] — [`FakeEditor`], an in-memory editor driven through
//!   [`vsx_core::CommandRunner`]
//! - [`script`] — [`FakeCodeScript`], a shell-script `code` binary for
//!   end-to-end tests of the compiled CLI (unix only)

pub mod editor;
#[cfg(unix)]
pub mod script;

pub use editor::FakeEditor;
#[cfg(unix)]
pub use script::FakeCodeScript;
