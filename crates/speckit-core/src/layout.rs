use crate::error::Result;
use crate::identity::FeatureIdentity;
use crate::io;
use serde::Serialize;
use std::path::{Path, PathBuf};

// ---------------------------------------------------------------------------
// Directory and filename constants
// ---------------------------------------------------------------------------

pub const DEFAULT_SPEC_ROOT: &str = "specs";
pub const MEMORY_DIR: &str = "memory";
pub const CONSTITUTION_FILE: &str = "memory/constitution.md";
pub const SPECIFY_DIR: &str = ".specify";
pub const CONFIG_FILE: &str = ".specify/config.json";
pub const TEMPLATES_DIR: &str = "templates";

pub const SPEC_MD: &str = "spec.md";
pub const PLAN_MD: &str = "plan.md";
pub const TASKS_MD: &str = "tasks.md";
pub const RESEARCH_MD: &str = "research.md";
pub const DATA_MODEL_MD: &str = "data-model.md";
pub const QUICKSTART_MD: &str = "quickstart.md";
pub const CONTRACTS_DIR: &str = "contracts";

pub fn constitution_path(root: &Path) -> PathBuf {
    root.join(CONSTITUTION_FILE)
}

pub fn config_path(root: &Path) -> PathBuf {
    root.join(CONFIG_FILE)
}

pub fn template_path(root: &Path, filename: &str) -> PathBuf {
    root.join(TEMPLATES_DIR).join(filename)
}

// ---------------------------------------------------------------------------
// LayoutOptions
// ---------------------------------------------------------------------------

/// Layout overrides. `spec_roots` is an ordered list of candidate root
/// directory names; the first that exists wins, and the first candidate is
/// created when none exist.
#[derive(Debug, Clone)]
pub struct LayoutOptions {
    pub spec_roots: Vec<String>,
}

impl Default for LayoutOptions {
    fn default() -> Self {
        Self {
            spec_roots: vec![DEFAULT_SPEC_ROOT.to_string()],
        }
    }
}

// ---------------------------------------------------------------------------
// WorkspaceLayout
// ---------------------------------------------------------------------------

/// Canonical artifact paths for one feature. Computed deterministically,
/// never persisted; callers check existence of individual files themselves.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WorkspaceLayout {
    pub repo_root: PathBuf,
    pub specs_root: PathBuf,
    /// Directory holding this invocation's artifacts. For capability
    /// branches this is `<parent_dir>/<cap-NNN>/`.
    pub feature_dir: PathBuf,
    /// Parent feature directory, for capability lookback. Equal to
    /// `feature_dir` when the identity has no capability.
    pub parent_dir: PathBuf,
    pub spec_file: PathBuf,
    pub plan_file: PathBuf,
    pub tasks_file: PathBuf,
    pub research_file: PathBuf,
    pub data_model_file: PathBuf,
    pub quickstart_file: PathBuf,
    pub contracts_dir: PathBuf,
}

/// Resolve the workspace layout for a feature identity.
///
/// The only filesystem effects are the spec-root probe and, when no
/// candidate exists, creation of the first candidate. Everything else is
/// plain path joining, so resolving twice yields identical paths.
pub fn resolve(
    repo_root: &Path,
    identity: &FeatureIdentity,
    options: &LayoutOptions,
) -> Result<WorkspaceLayout> {
    let specs_root = resolve_specs_root(repo_root, options)?;
    let parent_dir = specs_root.join(identity.dir_name());
    let feature_dir = match &identity.capability {
        Some(cap) => parent_dir.join(cap),
        None => parent_dir.clone(),
    };

    Ok(WorkspaceLayout {
        repo_root: repo_root.to_path_buf(),
        specs_root,
        spec_file: feature_dir.join(SPEC_MD),
        plan_file: feature_dir.join(PLAN_MD),
        tasks_file: feature_dir.join(TASKS_MD),
        research_file: feature_dir.join(RESEARCH_MD),
        data_model_file: feature_dir.join(DATA_MODEL_MD),
        quickstart_file: feature_dir.join(QUICKSTART_MD),
        contracts_dir: feature_dir.join(CONTRACTS_DIR),
        feature_dir,
        parent_dir,
    })
}

/// Resolve the specs root alone: probe `spec_roots` in order, first
/// existing candidate wins, create the first candidate when none exist.
/// Shared by `resolve` and by callers that place new features before any
/// identity exists.
pub fn resolve_specs_root(repo_root: &Path, options: &LayoutOptions) -> Result<PathBuf> {
    for candidate in &options.spec_roots {
        let dir = repo_root.join(candidate);
        if dir.is_dir() {
            return Ok(dir);
        }
    }
    let first = options
        .spec_roots
        .first()
        .map(String::as_str)
        .unwrap_or(DEFAULT_SPEC_ROOT);
    let dir = repo_root.join(first);
    io::ensure_dir(&dir)?;
    Ok(dir)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::identity;
    use tempfile::TempDir;

    #[test]
    fn resolves_under_default_specs_root() {
        let dir = TempDir::new().unwrap();
        let id = identity::parse("alice/proj-1.login").unwrap();
        let layout = resolve(dir.path(), &id, &LayoutOptions::default()).unwrap();

        assert_eq!(layout.feature_dir, dir.path().join("specs/proj-1.login"));
        assert_eq!(layout.parent_dir, layout.feature_dir);
        assert_eq!(
            layout.spec_file,
            dir.path().join("specs/proj-1.login/spec.md")
        );
        assert_eq!(
            layout.contracts_dir,
            dir.path().join("specs/proj-1.login/contracts")
        );
    }

    #[test]
    fn capability_resolves_under_parent_dir() {
        let dir = TempDir::new().unwrap();
        let id = identity::parse("owner/TICKET-1.slug-cap-002").unwrap();
        let layout = resolve(dir.path(), &id, &LayoutOptions::default()).unwrap();

        assert_eq!(layout.parent_dir, dir.path().join("specs/TICKET-1.slug"));
        assert_eq!(
            layout.feature_dir,
            dir.path().join("specs/TICKET-1.slug/cap-002")
        );
        assert_eq!(
            layout.tasks_file,
            dir.path().join("specs/TICKET-1.slug/cap-002/tasks.md")
        );
    }

    #[test]
    fn first_existing_spec_root_wins() {
        let dir = TempDir::new().unwrap();
        std::fs::create_dir_all(dir.path().join("docs/features")).unwrap();
        let options = LayoutOptions {
            spec_roots: vec!["specifications".into(), "docs/features".into()],
        };
        let id = identity::parse("001-auth").unwrap();
        let layout = resolve(dir.path(), &id, &options).unwrap();

        assert_eq!(layout.specs_root, dir.path().join("docs/features"));
        // Losing candidate was not created.
        assert!(!dir.path().join("specifications").exists());
    }

    #[test]
    fn creates_first_candidate_when_none_exist() {
        let dir = TempDir::new().unwrap();
        let id = identity::parse("001-auth").unwrap();
        let layout = resolve(dir.path(), &id, &LayoutOptions::default()).unwrap();

        assert!(dir.path().join("specs").is_dir());
        assert_eq!(layout.specs_root, dir.path().join("specs"));
    }

    #[test]
    fn resolve_is_idempotent() {
        let dir = TempDir::new().unwrap();
        let id = identity::parse("002-search-cap-001").unwrap();
        let options = LayoutOptions::default();
        let a = resolve(dir.path(), &id, &options).unwrap();
        let b = resolve(dir.path(), &id, &options).unwrap();
        assert_eq!(a, b);
    }
}
