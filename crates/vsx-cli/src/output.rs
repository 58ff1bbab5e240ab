//! Result rendering: JSON for automation hosts, coloured text for people

use colored::Colorize;
use serde::Serialize;
use vsx_core::{ModuleFailure, ModuleResult, Operation, Outcome};

use crate::error::{CliError, Result};

fn to_json<T: Serialize>(document: &T) -> Result<String> {
    serde_json::to_string(document)
        .map_err(|e| CliError::user(format!("Failed to encode result: {}", e)))
}

/// Print the outcome of a successful run.
pub fn print_success(outcome: &Outcome, check_mode: bool, json: bool) -> Result<()> {
    if json {
        println!("{}", to_json(&ModuleResult::from(outcome))?);
        return Ok(());
    }

    if !outcome.changed {
        let state = match outcome.delta.operation {
            Operation::Install => "installed",
            Operation::Uninstall => "absent",
        };
        println!(
            "{} All extensions already {}. No changes needed.",
            "OK".green().bold(),
            state
        );
        return Ok(());
    }

    let verb = match (outcome.delta.operation, check_mode) {
        (Operation::Install, false) => "Installed",
        (Operation::Uninstall, false) => "Uninstalled",
        (Operation::Install, true) => "Would install",
        (Operation::Uninstall, true) => "Would uninstall",
    };
    let marker = match outcome.delta.operation {
        Operation::Install => "+".green(),
        Operation::Uninstall => "-".red(),
    };

    println!(
        "{} {} {} extension(s):",
        "OK".green().bold(),
        verb,
        outcome.delta.len()
    );
    for identifier in &outcome.delta.identifiers {
        println!("   {} {}", marker, identifier);
    }
    Ok(())
}

/// Print a failed run.
///
/// In JSON mode the failure document goes to stdout, where the host expects
/// exactly one result.
pub fn print_failure(error: &CliError, json: bool) {
    if json {
        let failure = ModuleFailure::new(error.host_message());
        match serde_json::to_string(&failure) {
            Ok(doc) => println!("{}", doc),
            Err(e) => eprintln!("{}: {}", "error".red().bold(), e),
        }
    } else {
        eprintln!("{}: {}", "error".red().bold(), error);
    }
}
