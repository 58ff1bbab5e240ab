//! CLI argument parsing using clap derive

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use vsx_core::{ModuleParams, State};

use crate::error::Result;

/// Ensure Visual Studio Code extensions are installed or removed
///
/// Compares the requested extensions with `code --list-extensions` and
/// installs or uninstalls only what differs.
///
/// Examples:
///   vscode-extension -n ms-python.python -n esbenp.prettier-vscode@10.1.0
///   vscode-extension --ext ms-python.python --state absent
///   vscode-extension --check -n rust-lang.rust-analyzer
///   vscode-extension args.json          # module arguments from the host
#[derive(Parser, Debug)]
#[command(name = "vscode-extension")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// JSON file with module arguments (name, state, check_mode)
    #[arg(value_name = "ARGS_FILE", conflicts_with_all = ["name", "state", "check"])]
    pub args_file: Option<PathBuf>,

    /// Extension to manage (publisher.name or publisher.name@version)
    #[arg(
        short,
        long = "name",
        visible_aliases = ["ext", "extension"],
        aliases = ["exts", "extensions"],
        value_delimiter = ',',
        required_unless_present = "args_file"
    )]
    pub name: Vec<String>,

    /// Whether the extensions should be installed or removed
    #[arg(short, long, value_enum, default_value_t = StateArg::Present)]
    pub state: StateArg,

    /// Report what would change without installing or uninstalling anything
    #[arg(long, alias = "dry-run")]
    pub check: bool,

    /// Editor binary to use instead of looking up code / code-insiders on PATH
    #[arg(long, env = "VSX_CODE_BIN", value_name = "PATH")]
    pub code_bin: Option<PathBuf>,

    /// Output the result as JSON
    #[arg(long)]
    pub json: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

/// Target state accepted on the command line
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum StateArg {
    Present,
    Absent,
}

impl From<StateArg> for State {
    fn from(arg: StateArg) -> Self {
        match arg {
            StateArg::Present => State::Present,
            StateArg::Absent => State::Absent,
        }
    }
}

impl Cli {
    /// Arguments handed over by an automation host are always answered in JSON.
    pub fn json_output(&self) -> bool {
        self.json || self.args_file.is_some()
    }

    /// Build module parameters from the args file or from the flags.
    pub fn module_params(&self) -> Result<ModuleParams> {
        match &self.args_file {
            Some(path) => {
                let content = std::fs::read_to_string(path)?;
                Ok(ModuleParams::from_json_str(&content)?)
            }
            None => Ok(ModuleParams {
                name: self
                    .name
                    .iter()
                    .map(|n| n.trim())
                    .filter(|n| !n.is_empty())
                    .map(String::from)
                    .collect(),
                state: self.state.into(),
                check_mode: self.check,
            }),
        }
    }

    /// Candidate binaries in lookup order.
    pub fn candidates(&self) -> Vec<String> {
        match &self.code_bin {
            Some(path) => vec![path.to_string_lossy().into_owned()],
            None => vsx_core::DEFAULT_CANDIDATES
                .iter()
                .map(|c| c.to_string())
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use pretty_assertions::assert_eq;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("vscode-extension").chain(args.iter().copied()))
            .unwrap()
    }

    #[test]
    fn test_cli_debug_assert() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_repeated_and_delimited_names() {
        let cli = parse(&["-n", "a.a", "--ext", "b.b,c.c@1.0.0", "--extensions", "d.d"]);
        assert_eq!(cli.name, vec!["a.a", "b.b", "c.c@1.0.0", "d.d"]);
        assert_eq!(cli.state, StateArg::Present);
        assert!(!cli.json_output());
    }

    #[test]
    fn test_flags_to_module_params() {
        let cli = parse(&["--name", "a.a", "--state", "absent", "--check"]);
        let params = cli.module_params().unwrap();
        assert_eq!(
            params,
            ModuleParams {
                name: vec!["a.a".to_string()],
                state: State::Absent,
                check_mode: true,
            }
        );
    }

    #[test]
    fn test_name_required_without_args_file() {
        let result = Cli::try_parse_from(["vscode-extension", "--state", "absent"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_args_file_conflicts_with_name() {
        let result = Cli::try_parse_from(["vscode-extension", "args.json", "--name", "a.a"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_args_file_forces_json() {
        let cli = parse(&["args.json"]);
        assert!(cli.json_output());
    }

    #[test]
    fn test_args_file_is_read() {
        let temp = tempfile::TempDir::new().unwrap();
        let path = temp.path().join("args.json");
        std::fs::write(&path, r#"{"ext": "a.a,b.b", "_ansible_check_mode": true}"#).unwrap();

        let cli = parse(&[path.to_str().unwrap()]);
        let params = cli.module_params().unwrap();
        assert_eq!(params.name, vec!["a.a", "b.b"]);
        assert!(params.check_mode);
    }

    #[test]
    fn test_default_candidates() {
        let cli = parse(&["-n", "a.a"]);
        assert_eq!(cli.candidates(), vec!["code", "code-insiders"]);
    }

    #[test]
    fn test_code_bin_replaces_candidates() {
        let cli = parse(&["-n", "a.a", "--code-bin", "/opt/vscode/bin/code"]);
        assert_eq!(cli.candidates(), vec!["/opt/vscode/bin/code"]);
    }
}
