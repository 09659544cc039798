//! Agent prompt templates.
//!
//! A prompt file is YAML frontmatter between `---` lines followed by the
//! prompt body:
//!
//! ```text
//! ---
//! name: Marketing Expert
//! description: Builds user personas
//! ---
//! # Instructions
//! - Create three personas
//! ```

use crate::error::{DesignError, Result};
use crate::paths;
use regex::Regex;
use serde::Deserialize;
use std::path::Path;
use std::sync::OnceLock;

static FRONTMATTER_RE: OnceLock<Regex> = OnceLock::new();

fn frontmatter_re() -> &'static Regex {
    FRONTMATTER_RE.get_or_init(|| Regex::new(r"(?s)\A---\n(.*?)\n---\n(.*)\z").unwrap())
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Frontmatter {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub model: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PromptFile {
    pub frontmatter: Frontmatter,
    pub body: String,
}

impl PromptFile {
    pub fn parse(path: &Path, content: &str) -> Result<Self> {
        let content = content.replace("\r\n", "\n");
        let caps = frontmatter_re()
            .captures(&content)
            .ok_or_else(|| DesignError::InvalidPrompt {
                path: path.to_path_buf(),
                reason: "expected YAML frontmatter separated by ---".to_string(),
            })?;
        let yaml = &caps[1];
        let frontmatter = if yaml.trim().is_empty() {
            Frontmatter::default()
        } else {
            serde_yaml::from_str(yaml).map_err(|e| DesignError::InvalidPrompt {
                path: path.to_path_buf(),
                reason: format!("invalid YAML in frontmatter: {e}"),
            })?
        };
        Ok(Self {
            frontmatter,
            body: caps[2].to_string(),
        })
    }

    /// Load `<prompts_dir>/<agent>.prompt`.
    pub fn load(prompts_dir: &Path, agent: &str) -> Result<Self> {
        let path = paths::prompt_path(prompts_dir, agent);
        if !path.exists() {
            return Err(DesignError::PromptNotFound(path));
        }
        let content = std::fs::read_to_string(&path)?;
        Self::parse(&path, &content)
    }

    /// The whole trimmed body as a single instruction.
    pub fn single_instruction(&self) -> Vec<String> {
        vec![self.body.trim().to_string()]
    }

    /// One instruction per meaningful line. Blank lines, headings, and bare
    /// bullet markers are dropped; a leading `- ` is stripped.
    pub fn line_instructions(&self) -> Vec<String> {
        self.body
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#') && *line != "-")
            .map(|line| line.strip_prefix("- ").unwrap_or(line).to_string())
            .filter(|line| !line.is_empty())
            .collect()
    }
}
