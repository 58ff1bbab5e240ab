//! Wrapper around the editor's extension command line
//!
//! Owns the installed-extension snapshot and keeps it fresh after every
//! successful mutation.

use std::path::PathBuf;

use crate::apply::Operation;
use crate::error::{Error, Result};
use crate::extension::{ExtensionRecord, parse_inventory};
use crate::runner::CommandRunner;

const LIST_ARGS: &[&str] = &["--list-extensions", "--show-versions"];
const FORCE_FLAG: &str = "--force";

/// Editor binary plus the inventory it last reported.
pub struct EditorCli<R> {
    runner: R,
    bin: PathBuf,
    check_mode: bool,
    extensions: Vec<ExtensionRecord>,
}

impl<R: CommandRunner> EditorCli<R> {
    /// Create a wrapper with an empty inventory. Call [`load`](Self::load)
    /// before relying on [`extensions`](Self::extensions).
    pub fn new(runner: R, bin: impl Into<PathBuf>) -> Self {
        Self {
            runner,
            bin: bin.into(),
            check_mode: false,
            extensions: Vec::new(),
        }
    }

    /// Skip mutating calls and report them as successful.
    pub fn with_check_mode(mut self, check_mode: bool) -> Self {
        self.check_mode = check_mode;
        self
    }

    /// Installed extensions as of the last load.
    pub fn extensions(&self) -> &[ExtensionRecord] {
        &self.extensions
    }

    /// Query the editor and replace the inventory snapshot.
    ///
    /// A non-zero exit from the listing is an error rather than an empty
    /// inventory.
    pub fn load(&mut self) -> Result<()> {
        let output = self.runner.run(&self.bin, LIST_ARGS)?;
        if !output.success() {
            return Err(Error::QueryFailed {
                exit_code: output.exit_code,
                stderr: output.stderr,
            });
        }

        self.extensions = parse_inventory(&output.stdout)?;
        tracing::debug!(count = self.extensions.len(), "Loaded installed extensions");
        Ok(())
    }

    pub fn install(&mut self, identifier: &str) -> Result<()> {
        self.apply(Operation::Install, identifier)
    }

    pub fn uninstall(&mut self, identifier: &str) -> Result<()> {
        self.apply(Operation::Uninstall, identifier)
    }

    /// Run one install or uninstall and reload the inventory on success.
    ///
    /// In check mode nothing is executed and the inventory is left as is.
    pub fn apply(&mut self, operation: Operation, identifier: &str) -> Result<()> {
        if self.check_mode {
            tracing::info!("[check mode] Would {} {}", operation, identifier);
            return Ok(());
        }

        let args = [FORCE_FLAG, operation.flag(), identifier];
        let output = self.runner.run(&self.bin, &args)?;
        if !output.success() {
            return Err(Error::MutationFailed {
                operation,
                identifier: identifier.to_string(),
                exit_code: output.exit_code,
                output: output.combined(),
            });
        }

        tracing::info!("{} {}", operation.past_tense(), identifier);
        self.load()
    }
}
