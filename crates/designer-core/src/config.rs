use crate::agent::AgentRole;
use crate::error::Result;
use crate::paths;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

// ---------------------------------------------------------------------------
// AgentsConfig
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgentsConfig {
    #[serde(default = "default_model")]
    pub default_model: String,
    /// Per-role model overrides, keyed by role name (e.g. `architect`).
    #[serde(default)]
    pub models: HashMap<AgentRole, String>,
}

fn default_model() -> String {
    "gpt-4o".to_string()
}

impl Default for AgentsConfig {
    fn default() -> Self {
        Self {
            default_model: default_model(),
            models: HashMap::new(),
        }
    }
}

impl AgentsConfig {
    pub fn model_for(&self, role: AgentRole) -> &str {
        self.models
            .get(&role)
            .map(String::as_str)
            .unwrap_or(&self.default_model)
    }
}

// ---------------------------------------------------------------------------
// Config
// ---------------------------------------------------------------------------

/// Project configuration from `designer.yaml`. Every field has a default, so
/// a missing file is equivalent to an empty one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_version")]
    pub version: u32,
    #[serde(default = "default_idea_file")]
    pub idea_file: PathBuf,
    #[serde(default = "default_prompts_dir")]
    pub prompts_dir: PathBuf,
    #[serde(default)]
    pub agents: AgentsConfig,
}

fn default_version() -> u32 {
    1
}

fn default_idea_file() -> PathBuf {
    PathBuf::from(paths::DEFAULT_IDEA_FILE)
}

fn default_prompts_dir() -> PathBuf {
    PathBuf::from(paths::DEFAULT_PROMPTS_DIR)
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: default_version(),
            idea_file: default_idea_file(),
            prompts_dir: default_prompts_dir(),
            agents: AgentsConfig::default(),
        }
    }
}

impl Config {
    pub fn load(root: &Path) -> Result<Self> {
        let path = paths::config_path(root);
        if !path.exists() {
            return Ok(Self::default());
        }
        let data = std::fs::read_to_string(&path)?;
        if data.trim().is_empty() {
            return Ok(Self::default());
        }
        let cfg: Config = serde_yaml::from_str(&data)?;
        Ok(cfg)
    }

    pub fn idea_path(&self, root: &Path) -> PathBuf {
        paths::resolve(root, &self.idea_file)
    }

    pub fn prompts_path(&self, root: &Path) -> PathBuf {
        paths::resolve(root, &self.prompts_dir)
    }
}
