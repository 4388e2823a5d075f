pub mod check;
pub mod new;
pub mod paths;
pub mod plan;
pub mod status;
pub mod validate;

use anyhow::Context;
use speckit_core::config::Config;
use speckit_core::identity::{self, FeatureIdentity};
use speckit_core::layout::{self, WorkspaceLayout};
use speckit_core::repo::{self, RepoInfo};
use speckit_core::{git, SpecError};
use std::path::PathBuf;

/// Flags shared by every subcommand. Environment and flag reads stay here,
/// at the entry point; core components only ever see explicit values.
pub struct Invocation {
    pub root: Option<PathBuf>,
    pub branch: Option<String>,
    pub json: bool,
}

impl Invocation {
    /// Locate the repository. An explicit `--root` wins and is trusted
    /// as-is; otherwise probe from the current directory.
    pub fn repo(&self) -> anyhow::Result<RepoInfo> {
        match &self.root {
            Some(root) => Ok(RepoInfo {
                has_version_control: root.join(".git").is_dir(),
                root: root.clone(),
            }),
            None => {
                let cwd = std::env::current_dir().context("cannot read current directory")?;
                Ok(repo::locate(&cwd)?)
            }
        }
    }

    /// The branch to operate on: `--branch` override, else git HEAD.
    pub fn branch(&self, repo: &RepoInfo) -> anyhow::Result<String> {
        if let Some(branch) = &self.branch {
            return Ok(branch.clone());
        }
        if !repo.has_version_control {
            return Err(SpecError::Git(
                "no version control detected; pass --branch explicitly".to_string(),
            )
            .into());
        }
        Ok(git::current_branch(&repo.root)?)
    }

    /// Full resolution chain: locator -> branch -> identity -> layout.
    /// Fails fast when not on a feature branch.
    pub fn feature(&self) -> anyhow::Result<FeatureContext> {
        let repo = self.repo()?;
        let branch = self.branch(&repo)?;
        let identity = identity::parse(&branch)?;
        let config = Config::load(&repo.root).context("failed to load .specify/config.json")?;
        let layout = layout::resolve(&repo.root, &identity, &config.layout_options())?;
        Ok(FeatureContext {
            repo,
            branch,
            identity,
            layout,
        })
    }
}

pub struct FeatureContext {
    pub repo: RepoInfo,
    pub branch: String,
    pub identity: FeatureIdentity,
    pub layout: WorkspaceLayout,
}
