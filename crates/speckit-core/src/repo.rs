use crate::error::{Result, SpecError};
use crate::git;
use serde::Serialize;
use std::path::{Path, PathBuf};

/// Marker directory for projects managed without version control.
pub const PROJECT_MARKER: &str = ".specify";

#[derive(Debug, Clone, Serialize)]
pub struct RepoInfo {
    pub root: PathBuf,
    pub has_version_control: bool,
}

/// Locate the repository root starting from `start`.
///
/// Priority:
/// 1. `git rev-parse --show-toplevel` (when a git binary is on PATH)
/// 2. Walk upward looking for a `.git/` directory
/// 3. Walk upward looking for a `.specify/` marker directory
///
/// Read-only probing; fails with `RepositoryNotFound` when nothing matches
/// before the filesystem root.
pub fn locate(start: &Path) -> Result<RepoInfo> {
    if git::git_available() {
        if let Ok(top) = git::toplevel(start) {
            return Ok(RepoInfo {
                root: PathBuf::from(top),
                has_version_control: true,
            });
        }
    }

    if let Some(root) = walk_up(start, ".git") {
        return Ok(RepoInfo {
            root,
            has_version_control: true,
        });
    }
    if let Some(root) = walk_up(start, PROJECT_MARKER) {
        return Ok(RepoInfo {
            root,
            has_version_control: false,
        });
    }

    Err(SpecError::RepositoryNotFound(start.display().to_string()))
}

fn walk_up(start: &Path, marker: &str) -> Option<PathBuf> {
    let mut dir = start.to_path_buf();
    loop {
        if dir.join(marker).is_dir() {
            return Some(dir);
        }
        match dir.parent() {
            Some(p) => dir = p.to_path_buf(),
            None => return None,
        }
    }
}
