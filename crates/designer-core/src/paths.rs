use std::path::{Path, PathBuf};

// ---------------------------------------------------------------------------
// File name constants
// ---------------------------------------------------------------------------

pub const DESIGN_FILE: &str = "DESIGN.json";
pub const CONFIG_FILE: &str = "designer.yaml";
pub const DEFAULT_IDEA_FILE: &str = "IDEA.md";
pub const DEFAULT_PROMPTS_DIR: &str = "prompts";
pub const PROMPT_EXTENSION: &str = "prompt";

// ---------------------------------------------------------------------------
// Path helpers
// ---------------------------------------------------------------------------

pub fn design_path(root: &Path) -> PathBuf {
    root.join(DESIGN_FILE)
}

pub fn config_path(root: &Path) -> PathBuf {
    root.join(CONFIG_FILE)
}

pub fn prompt_path(prompts_dir: &Path, agent: &str) -> PathBuf {
    prompts_dir.join(format!("{agent}.{PROMPT_EXTENSION}"))
}

/// Resolve `path` against `root` unless it is already absolute.
pub fn resolve(root: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        root.join(path)
    }
}
