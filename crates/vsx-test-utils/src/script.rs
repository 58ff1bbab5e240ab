//! [`FakeCodeScript`]: a shell script that answers like the `code` binary.
//!
//! State lives next to the script in a temporary directory:
//!
//! - `extensions.txt` — installed `name@version` records, one per line
//! - `calls.log` — one line per invocation with the arguments received
//! - `fail` — identifiers whose install/uninstall should exit 1
//! - `list_fail` — when present, the inventory query exits 1

use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

const SCRIPT: &str = r#"#!/bin/sh
DIR="$(cd "$(dirname "$0")" && pwd)"
STATE="$DIR/extensions.txt"
echo "$*" >> "$DIR/calls.log"

case "$1" in
  --list-extensions)
    if [ -f "$DIR/list_fail" ]; then
      echo "cannot read extensions directory" >&2
      exit 1
    fi
    cat "$STATE" 2>/dev/null
    exit 0
    ;;
  --force)
    op="$2"
    id="$3"
    if [ -f "$DIR/fail" ] && grep -qx "$id" "$DIR/fail"; then
      echo "Failed Installing Extensions: $id"
      exit 1
    fi
    case "$id" in
      *@*) name="${id%%@*}"; raw="$id" ;;
      *) name="$id"; raw="$id@1.0.0" ;;
    esac
    case "$op" in
      --install-extension)
        grep -v "^$name@" "$STATE" > "$STATE.tmp" 2>/dev/null
        echo "$raw" >> "$STATE.tmp"
        mv "$STATE.tmp" "$STATE"
        echo "Extension '$id' was successfully installed."
        ;;
      --uninstall-extension)
        if ! grep -q "^$name@" "$STATE" 2>/dev/null; then
          echo "Extension '$id' is not installed." >&2
          exit 1
        fi
        grep -v "^$name@" "$STATE" > "$STATE.tmp"
        mv "$STATE.tmp" "$STATE"
        echo "Extension '$id' was successfully uninstalled!"
        ;;
    esac
    exit 0
    ;;
  *)
    echo "unexpected arguments: $*" >&2
    exit 2
    ;;
esac
"#;

/// A fake `code` executable in its own temporary directory.
pub struct FakeCodeScript {
    temp_dir: TempDir,
}

impl Default for FakeCodeScript {
    fn default() -> Self {
        Self::new()
    }
}

impl FakeCodeScript {
    /// Write the script with nothing installed.
    pub fn new() -> Self {
        let temp_dir = TempDir::new().unwrap();
        let bin = temp_dir.path().join("code");
        fs::write(&bin, SCRIPT).unwrap();
        fs::set_permissions(&bin, fs::Permissions::from_mode(0o755)).unwrap();
        Self { temp_dir }
    }

    /// Write the script with `raw` records pre-installed.
    pub fn with_installed(raw: &[&str]) -> Self {
        let script = Self::new();
        script.set_installed(raw);
        script
    }

    pub fn dir(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Path to pass as the editor binary.
    pub fn bin(&self) -> PathBuf {
        self.dir().join("code")
    }

    pub fn set_installed(&self, raw: &[&str]) {
        let mut content = raw.join("\n");
        if !content.is_empty() {
            content.push('\n');
        }
        fs::write(self.dir().join("extensions.txt"), content).unwrap();
    }

    /// Make install/uninstall of `identifier` fail.
    pub fn fail_on(&self, identifier: &str) {
        let path = self.dir().join("fail");
        let mut content = fs::read_to_string(&path).unwrap_or_default();
        content.push_str(identifier);
        content.push('\n');
        fs::write(path, content).unwrap();
    }

    /// Make the inventory query fail.
    pub fn fail_listing(&self) {
        fs::write(self.dir().join("list_fail"), "").unwrap();
    }

    /// Installed records, in file order.
    pub fn installed(&self) -> Vec<String> {
        fs::read_to_string(self.dir().join("extensions.txt"))
            .unwrap_or_default()
            .lines()
            .filter(|l| !l.trim().is_empty())
            .map(String::from)
            .collect()
    }

    /// Argument lines the script was invoked with.
    pub fn calls(&self) -> Vec<String> {
        fs::read_to_string(self.dir().join("calls.log"))
            .unwrap_or_default()
            .lines()
            .map(String::from)
            .collect()
    }

    /// Calls that attempted an install or uninstall.
    pub fn mutation_calls(&self) -> Vec<String> {
        self.calls()
            .into_iter()
            .filter(|c| c.starts_with("--force"))
            .collect()
    }
}
