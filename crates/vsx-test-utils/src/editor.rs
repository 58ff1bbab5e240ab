//! [`FakeEditor`]: an in-memory stand-in for the editor binary.

use std::cell::RefCell;
use std::collections::HashMap;
use std::path::Path;

use vsx_core::{CommandOutput, CommandRunner, Result};

/// Version given to extensions installed by bare name.
pub const DEFAULT_VERSION: &str = "1.0.0";

#[derive(Default)]
struct Inner {
    installed: Vec<String>,
    calls: Vec<Vec<String>>,
    failures: HashMap<String, CommandOutput>,
    listing_failure: Option<(usize, CommandOutput)>,
    listings: usize,
    raw_listing: Option<String>,
}

/// Editor that keeps its installed set in memory and records every call.
///
/// Install of a pinned identifier replaces any other version of the same
/// extension; install of a bare name adds it at [`DEFAULT_VERSION`] unless
/// some version is already present. Uninstall removes every version.
///
/// # Example
///
/// ```rust
/// use vsx_test_utils::FakeEditor;
///
/// let editor = FakeEditor::with_installed(&["foo.bar@1.0.0"]).fail_on("baz.qux", 1, "boom");
/// assert_eq!(editor.installed(), vec!["foo.bar@1.0.0"]);
/// ```
#[derive(Default)]
pub struct FakeEditor {
    inner: RefCell<Inner>,
}

impl FakeEditor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with the given `name@version` records installed.
    pub fn with_installed(raw: &[&str]) -> Self {
        let editor = Self::new();
        editor.inner.borrow_mut().installed = raw.iter().map(|s| s.to_string()).collect();
        editor
    }

    /// Make install/uninstall of `identifier` exit with `exit_code`.
    pub fn fail_on(self, identifier: &str, exit_code: i32, output: &str) -> Self {
        self.inner.borrow_mut().failures.insert(
            identifier.to_string(),
            CommandOutput {
                exit_code: Some(exit_code),
                stdout: output.to_string(),
                stderr: String::new(),
            },
        );
        self
    }

    /// Make every inventory query exit with `exit_code`.
    pub fn fail_listing(self, exit_code: i32, stderr: &str) -> Self {
        self.fail_listing_after(0, exit_code, stderr)
    }

    /// Answer the first `successes` inventory queries normally, then exit
    /// with `exit_code` on every later one.
    pub fn fail_listing_after(self, successes: usize, exit_code: i32, stderr: &str) -> Self {
        self.inner.borrow_mut().listing_failure = Some((
            successes,
            CommandOutput {
                exit_code: Some(exit_code),
                stdout: String::new(),
                stderr: stderr.to_string(),
            },
        ));
        self
    }

    /// Report `listing` verbatim from the inventory query instead of the
    /// installed set.
    pub fn with_raw_listing(self, listing: &str) -> Self {
        self.inner.borrow_mut().raw_listing = Some(listing.to_string());
        self
    }

    /// Currently installed `name@version` records.
    pub fn installed(&self) -> Vec<String> {
        self.inner.borrow().installed.clone()
    }

    /// Every argument list the editor was invoked with.
    pub fn calls(&self) -> Vec<Vec<String>> {
        self.inner.borrow().calls.clone()
    }

    /// Install/uninstall calls as `(flag, identifier)` pairs.
    pub fn mutations(&self) -> Vec<(String, String)> {
        self.inner
            .borrow()
            .calls
            .iter()
            .filter(|args| args.first().map(String::as_str) == Some("--force"))
            .map(|args| (args[1].clone(), args[2].clone()))
            .collect()
    }

    /// Number of inventory queries.
    pub fn list_calls(&self) -> usize {
        self.inner
            .borrow()
            .calls
            .iter()
            .filter(|args| args.first().map(String::as_str) == Some("--list-extensions"))
            .count()
    }
}

fn ok(stdout: impl Into<String>) -> CommandOutput {
    CommandOutput {
        exit_code: Some(0),
        stdout: stdout.into(),
        stderr: String::new(),
    }
}

fn name_of(identifier: &str) -> &str {
    identifier.split('@').next().unwrap_or(identifier)
}

impl CommandRunner for FakeEditor {
    fn run(&self, _program: &Path, args: &[&str]) -> Result<CommandOutput> {
        let mut inner = self.inner.borrow_mut();
        inner.calls.push(args.iter().map(|a| a.to_string()).collect());

        match args {
            ["--list-extensions", "--show-versions"] => {
                let served = inner.listings;
                inner.listings += 1;
                if let Some((successes, failure)) = &inner.listing_failure
                    && served >= *successes
                {
                    return Ok(failure.clone());
                }
                let listing = match &inner.raw_listing {
                    Some(raw) => raw.clone(),
                    None => inner.installed.join("\n"),
                };
                Ok(ok(listing))
            }
            ["--force", flag, identifier] => {
                if let Some(failure) = inner.failures.get(*identifier) {
                    return Ok(failure.clone());
                }
                let name = name_of(identifier);
                let before = inner.installed.len();
                inner.installed.retain(|raw| name_of(raw) != name);
                let removed = before != inner.installed.len();

                match *flag {
                    "--install-extension" => {
                        let raw = if identifier.contains('@') {
                            identifier.to_string()
                        } else {
                            format!("{identifier}@{DEFAULT_VERSION}")
                        };
                        inner.installed.push(raw);
                        Ok(ok(format!(
                            "Extension '{identifier}' was successfully installed."
                        )))
                    }
                    "--uninstall-extension" if removed => Ok(ok(format!(
                        "Extension '{identifier}' was successfully uninstalled!"
                    ))),
                    "--uninstall-extension" => Ok(CommandOutput {
                        exit_code: Some(1),
                        stdout: String::new(),
                        stderr: format!("Extension '{identifier}' is not installed."),
                    }),
                    other => Ok(CommandOutput {
                        exit_code: Some(2),
                        stdout: String::new(),
                        stderr: format!("unknown option '{other}'"),
                    }),
                }
            }
            other => Ok(CommandOutput {
                exit_code: Some(2),
                stdout: String::new(),
                stderr: format!("unexpected arguments: {other:?}"),
            }),
        }
    }
}
