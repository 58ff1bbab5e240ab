//! vscode-extension CLI
//!
//! Ensures a set of Visual Studio Code extensions is installed or removed and
//! reports whether anything changed.

mod cli;
mod error;
mod logging;
mod output;

use clap::Parser;
use colored::Colorize;

use cli::Cli;
use error::Result;
use vsx_core::SystemRunner;

fn main() {
    let cli = Cli::parse();
    let json = cli.json_output();

    if let Err(e) = logging::init(cli.verbose) {
        eprintln!("{}: failed to set up logging: {}", "warning".yellow().bold(), e);
    }

    if let Err(e) = run(&cli) {
        output::print_failure(&e, json);
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    let params = cli.module_params()?;
    let bin = vsx_core::resolve_binary(&cli.candidates())?;
    tracing::debug!(bin = %bin.display(), state = %params.state, "Reconciling extensions");

    let outcome = vsx_core::run(SystemRunner, bin, &params)?;
    output::print_success(&outcome, params.check_mode, cli.json_output())
}
