//! Integration tests for the vscode-extension CLI binary.
//!
//! These tests exercise the compiled binary using assert_cmd, against a
//! shell-script stand-in for the `code` executable.

use assert_cmd::Command;
use predicates::prelude::*;
use pretty_assertions::assert_eq;

/// Get a Command for the vscode-extension binary
fn vsx_cmd() -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("vscode-extension"));
    cmd.env_remove("VSX_CODE_BIN").env_remove("RUST_LOG");
    cmd
}

fn parse_json(stdout: &[u8]) -> serde_json::Value {
    serde_json::from_slice(stdout).expect("stdout should be a single JSON document")
}

// ============================================================================
// Help and Version Tests
// ============================================================================

#[test]
fn test_help_output() {
    vsx_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Visual Studio Code extensions"))
        .stdout(predicate::str::contains("--state"));
}

#[test]
fn test_version_output() {
    vsx_cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("vscode-extension"));
}

#[test]
fn test_missing_name_is_usage_error() {
    vsx_cmd()
        .assert()
        .failure()
        .stderr(predicate::str::contains("--name"));
}

#[test]
fn test_invalid_state_rejected() {
    vsx_cmd()
        .args(["-n", "a.a", "--state", "latest"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("latest"));
}

// ============================================================================
// Reconciliation against the fake editor (unix only)
// ============================================================================

#[cfg(unix)]
mod with_fake_code {
    use super::*;
    use pretty_assertions::assert_eq;
    use vsx_test_utils::FakeCodeScript;

    #[test]
    fn test_present_installs_missing_extension() {
        let code = FakeCodeScript::with_installed(&["foo.bar@1.0.0"]);

        let out = vsx_cmd()
            .arg("--code-bin")
            .arg(code.bin())
            .args(["--json", "-n", "foo.bar@1.0.0", "-n", "baz.qux"])
            .assert()
            .success()
            .get_output()
            .stdout
            .clone();

        assert_eq!(
            parse_json(&out),
            serde_json::json!({"changed": true, "original_message": "", "message": ""})
        );
        assert_eq!(
            code.mutation_calls(),
            vec!["--force --install-extension baz.qux"]
        );
        assert_eq!(code.installed(), vec!["foo.bar@1.0.0", "baz.qux@1.0.0"]);
    }

    #[test]
    fn test_present_second_run_unchanged() {
        let code = FakeCodeScript::new();

        for expected in [true, false] {
            let out = vsx_cmd()
                .arg("--code-bin")
                .arg(code.bin())
                .args(["--json", "--ext", "a.a,b.b@2.0.0"])
                .assert()
                .success()
                .get_output()
                .stdout
                .clone();
            assert_eq!(parse_json(&out)["changed"], expected);
        }
        assert_eq!(code.mutation_calls().len(), 2);
    }

    #[test]
    fn test_absent_human_output() {
        let code = FakeCodeScript::with_installed(&["foo.bar@1.0.0", "keep.me@0.1.0"]);

        vsx_cmd()
            .arg("--code-bin")
            .arg(code.bin())
            .args(["-n", "foo.bar", "-n", "not.there", "--state", "absent"])
            .assert()
            .success()
            .stdout(predicate::str::contains("Uninstalled 1 extension(s)"))
            .stdout(predicate::str::contains("foo.bar"));

        assert_eq!(
            code.mutation_calls(),
            vec!["--force --uninstall-extension foo.bar"]
        );
        assert_eq!(code.installed(), vec!["keep.me@0.1.0"]);
    }

    #[test]
    fn test_check_mode_runs_no_mutation() {
        let code = FakeCodeScript::new();

        vsx_cmd()
            .arg("--code-bin")
            .arg(code.bin())
            .args(["--check", "-n", "a.a"])
            .assert()
            .success()
            .stdout(predicate::str::contains("Would install 1 extension(s)"));

        assert!(code.mutation_calls().is_empty());
        assert_eq!(code.calls(), vec!["--list-extensions --show-versions"]);
    }

    #[test]
    fn test_args_file_with_host_check_mode() {
        let code = FakeCodeScript::with_installed(&["foo.bar@1.0.0"]);
        let args = code.dir().join("args.json");
        std::fs::write(
            &args,
            r#"{"ANSIBLE_MODULE_ARGS": {"extensions": ["foo.bar"], "state": "absent", "_ansible_check_mode": true}}"#,
        )
        .unwrap();

        let out = vsx_cmd()
            .env("VSX_CODE_BIN", code.bin())
            .arg(&args)
            .assert()
            .success()
            .get_output()
            .stdout
            .clone();

        assert_eq!(parse_json(&out)["changed"], true);
        assert!(code.mutation_calls().is_empty());
        assert_eq!(code.installed(), vec!["foo.bar@1.0.0"]);
    }

    #[test]
    fn test_install_failure_aborts() {
        let code = FakeCodeScript::new();
        code.fail_on("b.b");

        let out = vsx_cmd()
            .arg("--code-bin")
            .arg(code.bin())
            .args(["--json", "-n", "a.a,b.b,c.c"])
            .assert()
            .failure()
            .code(1)
            .get_output()
            .stdout
            .clone();

        let doc = parse_json(&out);
        assert_eq!(doc["failed"], true);
        let msg = doc["msg"].as_str().unwrap();
        assert!(msg.starts_with("Error install Visual Studio Code extension : b.b"), "{msg}");
        assert!(msg.contains("Failed Installing Extensions: b.b"), "{msg}");

        assert_eq!(
            code.mutation_calls(),
            vec![
                "--force --install-extension a.a",
                "--force --install-extension b.b",
            ]
        );
        assert_eq!(code.installed(), vec!["a.a@1.0.0"]);
    }

    #[test]
    fn test_listing_failure_is_fatal() {
        let code = FakeCodeScript::new();
        code.fail_listing();

        let out = vsx_cmd()
            .arg("--code-bin")
            .arg(code.bin())
            .args(["--json", "-n", "a.a"])
            .assert()
            .failure()
            .get_output()
            .stdout
            .clone();

        let msg = parse_json(&out)["msg"].as_str().unwrap().to_string();
        assert!(msg.starts_with("Exception Unknown : "), "{msg}");
        assert!(msg.contains("cannot read extensions directory"), "{msg}");
        assert!(code.mutation_calls().is_empty());
    }

    #[test]
    fn test_malformed_listing_is_fatal() {
        let code = FakeCodeScript::with_installed(&["foo.bar@1.0.0", "broken"]);

        vsx_cmd()
            .arg("--code-bin")
            .arg(code.bin())
            .args(["-n", "a.a"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("Malformed extension token"))
            .stderr(predicate::str::contains("broken"));

        assert!(code.mutation_calls().is_empty());
    }
}

#[test]
fn test_binary_not_found_reported_as_json() {
    let empty = tempfile::TempDir::new().unwrap();

    let out = vsx_cmd()
        .env("PATH", empty.path())
        .args(["--json", "-n", "a.a"])
        .assert()
        .failure()
        .get_output()
        .stdout
        .clone();

    let doc = parse_json(&out);
    assert_eq!(doc["failed"], true);
    let msg = doc["msg"].as_str().unwrap();
    assert!(msg.starts_with("Exception Unknown : "), "{msg}");
    assert!(msg.contains("code, code-insiders"), "{msg}");
}

#[test]
fn test_invalid_args_file_reported_as_json() {
    let temp = tempfile::TempDir::new().unwrap();
    let args = temp.path().join("args.json");
    std::fs::write(&args, r#"{"name": ["a.a"], "version": "1.0"}"#).unwrap();

    let out = vsx_cmd()
        .arg(&args)
        .assert()
        .failure()
        .get_output()
        .stdout
        .clone();

    let msg = parse_json(&out)["msg"].as_str().unwrap().to_string();
    assert!(msg.contains("Unsupported parameters: version"), "{msg}");
}
