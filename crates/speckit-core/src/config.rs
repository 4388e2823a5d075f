use crate::error::Result;
use crate::io;
use crate::layout::{self, LayoutOptions};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Project configuration stored at `.specify/config.json`. All fields are
/// optional overrides; a missing file means defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Candidate spec-root directory names, probed in order.
    #[serde(default = "default_spec_roots")]
    pub spec_roots: Vec<String>,
}

fn default_spec_roots() -> Vec<String> {
    vec![layout::DEFAULT_SPEC_ROOT.to_string()]
}

impl Default for Config {
    fn default() -> Self {
        Self {
            spec_roots: default_spec_roots(),
        }
    }
}

impl Config {
    /// Load config from the repository root. Absent file yields defaults;
    /// a malformed file is an error, never silently ignored.
    pub fn load(root: &Path) -> Result<Config> {
        let path = layout::config_path(root);
        if !path.exists() {
            return Ok(Config::default());
        }
        let content = std::fs::read_to_string(&path)?;
        Ok(serde_json::from_str(&content)?)
    }

    pub fn save(&self, root: &Path) -> Result<()> {
        let path = layout::config_path(root);
        let json = serde_json::to_string_pretty(self)?;
        io::atomic_write(&path, json.as_bytes())
    }

    pub fn layout_options(&self) -> LayoutOptions {
        LayoutOptions {
            spec_roots: self.spec_roots.clone(),
        }
    }
}
