//! Thin wrappers around the git CLI. Every call is a single blocking
//! subprocess; failures are surfaced immediately and never retried.

use crate::error::{Result, SpecError};
use std::path::Path;
use std::process::Command;

/// True if a `git` binary is resolvable on PATH.
pub fn git_available() -> bool {
    which::which("git").is_ok()
}

fn run(dir: &Path, args: &[&str]) -> Result<String> {
    let output = Command::new("git")
        .args(args)
        .current_dir(dir)
        .output()
        .map_err(|e| SpecError::Git(format!("failed to spawn git: {e}")))?;
    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(SpecError::Git(format!(
            "git {} failed: {}",
            args.join(" "),
            stderr.trim()
        )));
    }
    Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
}

/// `git rev-parse --show-toplevel` from `dir`. Errors if not inside a work tree.
pub fn toplevel(dir: &Path) -> Result<String> {
    run(dir, &["rev-parse", "--show-toplevel"])
}

/// Name of the currently checked-out branch.
pub fn current_branch(root: &Path) -> Result<String> {
    run(root, &["rev-parse", "--abbrev-ref", "HEAD"])
}

/// Create and switch to a new branch.
pub fn create_branch(root: &Path, name: &str) -> Result<()> {
    run(root, &["checkout", "-b", name])?;
    Ok(())
}
