use super::{agent_name, DesignerTool};
use designer_core::envelope::{self, GetOutcome};
use designer_core::DesignStore;
use std::path::Path;

pub struct GetDesignJsonTool;

impl DesignerTool for GetDesignJsonTool {
    fn name(&self) -> &str {
        "get_design_json"
    }

    fn description(&self) -> &str {
        "Get the whole DESIGN.json document, or one section of it"
    }

    fn schema(&self) -> serde_json::Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "section": {
                    "type": "string",
                    "description": "Section to retrieve: idea, marketing, architecture, design, tasks. Omit for the whole document."
                },
                "agent_name": {
                    "type": "string",
                    "description": "Name of the agent calling this tool"
                }
            }
        })
    }

    fn call(&self, args: serde_json::Value, root: &Path) -> Result<serde_json::Value, String> {
        // An empty section name means "everything", same as omitting it.
        let section = args["section"].as_str().filter(|s| !s.is_empty());
        tracing::info!(
            agent = agent_name(&args),
            section = section.unwrap_or("<all>"),
            "get_design_json"
        );

        let store = DesignStore::for_root(root);
        match envelope::get_section(&store, section) {
            GetOutcome::Found(value) => Ok(value),
            GetOutcome::Failed(envelope) => Err(envelope.to_json()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::TempDir;

    #[test]
    fn whole_document_on_fresh_project() {
        let dir = TempDir::new().unwrap();
        let result = GetDesignJsonTool.call(json!({}), dir.path()).unwrap();
        assert_eq!(
            result,
            json!({"idea": {}, "marketing": {}, "architecture": {}, "design": {}, "tasks": {}})
        );
        assert!(dir.path().join("DESIGN.json").exists());
    }

    #[test]
    fn empty_section_name_means_whole_document() {
        let dir = TempDir::new().unwrap();
        let result = GetDesignJsonTool
            .call(json!({"section": ""}), dir.path())
            .unwrap();
        assert!(result.get("tasks").is_some());
    }

    #[test]
    fn unknown_section_returns_envelope() {
        let dir = TempDir::new().unwrap();
        let err = GetDesignJsonTool
            .call(json!({"section": "nonexistent"}), dir.path())
            .unwrap_err();
        let envelope: serde_json::Value = serde_json::from_str(&err).unwrap();
        assert_eq!(
            envelope,
            json!({"error": "Section 'nonexistent' not found in DESIGN.json"})
        );
    }

    #[test]
    fn malformed_file_is_not_repaired() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("DESIGN.json"), "{oops").unwrap();
        let err = GetDesignJsonTool.call(json!({}), dir.path()).unwrap_err();
        assert!(err.contains("invalid JSON"));
        assert_eq!(
            std::fs::read_to_string(dir.path().join("DESIGN.json")).unwrap(),
            "{oops"
        );
    }
}
