use crate::store::ValidationIssue;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DesignError {
    #[error("{0}")]
    Invalid(ValidationIssue),

    #[error("Section '{0}' not found in DESIGN.json")]
    UnknownSection(String),

    #[error("unknown agent '{0}': expected manager, marketing, architect, or designer")]
    UnknownAgent(String),

    #[error("Prompt file not found: {}", .0.display())]
    PromptNotFound(PathBuf),

    #[error("invalid prompt {}: {reason}", .path.display())]
    InvalidPrompt { path: PathBuf, reason: String },

    #[error("File not found: {}", .0.display())]
    IdeaNotFound(PathBuf),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Yaml(#[from] serde_yaml::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl From<ValidationIssue> for DesignError {
    fn from(issue: ValidationIssue) -> Self {
        DesignError::Invalid(issue)
    }
}

pub type Result<T> = std::result::Result<T, DesignError>;
