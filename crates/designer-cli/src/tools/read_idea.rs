use super::{agent_name, DesignerTool};
use designer_core::{config::Config, idea, paths};
use std::path::Path;

pub struct ReadIdeaFileTool;

impl DesignerTool for ReadIdeaFileTool {
    fn name(&self) -> &str {
        "read_idea_file"
    }

    fn description(&self) -> &str {
        "Read the product idea markdown file and return it as JSON"
    }

    fn schema(&self) -> serde_json::Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "file_path": {
                    "type": "string",
                    "description": "Path to the idea file, relative to the project root (default: IDEA.md)"
                },
                "agent_name": {
                    "type": "string",
                    "description": "Name of the agent calling this tool"
                }
            }
        })
    }

    fn call(&self, args: serde_json::Value, root: &Path) -> Result<serde_json::Value, String> {
        let path = match args["file_path"].as_str() {
            Some(p) => paths::resolve(root, Path::new(p)),
            None => Config::load(root)
                .map_err(|e| format!("Error: {e}"))?
                .idea_path(root),
        };
        tracing::info!(agent = agent_name(&args), path = %path.display(), "read_idea_file");

        idea::read_idea_file(&path).map_err(|e| match e {
            designer_core::DesignError::IdeaNotFound(_) => format!("Error: {e}"),
            other => format!("Error reading or converting file: {other}"),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::TempDir;

    #[test]
    fn reads_default_idea_file() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("IDEA.md"), "# Problem\n\nToo many tabs.\n").unwrap();
        let result = ReadIdeaFileTool.call(json!({}), dir.path()).unwrap();
        assert_eq!(result, json!({"Problem": "Too many tabs."}));
    }

    #[test]
    fn relative_path_resolves_against_root() {
        let dir = TempDir::new().unwrap();
        std::fs::create_dir_all(dir.path().join("docs")).unwrap();
        std::fs::write(dir.path().join("docs/pitch.md"), "Just a pitch.").unwrap();
        let result = ReadIdeaFileTool
            .call(json!({"file_path": "docs/pitch.md"}), dir.path())
            .unwrap();
        assert_eq!(result, json!("Just a pitch."));
    }

    #[test]
    fn missing_file_reports_error() {
        let dir = TempDir::new().unwrap();
        let err = ReadIdeaFileTool
            .call(json!({"file_path": "IDEA.md"}), dir.path())
            .unwrap_err();
        assert!(err.starts_with("Error: File not found: "));
    }
}
