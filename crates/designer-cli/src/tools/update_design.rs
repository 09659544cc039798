use super::{agent_name, DesignerTool};
use designer_core::envelope::{self, Envelope};
use designer_core::DesignStore;
use std::path::Path;

pub struct UpdateDesignJsonTool;

impl DesignerTool for UpdateDesignJsonTool {
    fn name(&self) -> &str {
        "update_design_json"
    }

    fn description(&self) -> &str {
        "Replace one section of DESIGN.json with new content"
    }

    fn schema(&self) -> serde_json::Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "section": {
                    "type": "string",
                    "enum": ["idea", "marketing", "architecture", "design", "tasks"],
                    "description": "Section to replace"
                },
                "content": {
                    "type": "object",
                    "description": "JSON content stored as the section's new value"
                },
                "agent_name": {
                    "type": "string",
                    "description": "Name of the agent calling this tool"
                }
            },
            "required": ["section", "content"]
        })
    }

    fn call(&self, mut args: serde_json::Value, root: &Path) -> Result<serde_json::Value, String> {
        let section = args["section"]
            .as_str()
            .ok_or_else(|| missing("section"))?
            .to_string();
        let content = args
            .get_mut("content")
            .map(serde_json::Value::take)
            .ok_or_else(|| missing("content"))?;
        tracing::info!(agent = agent_name(&args), %section, "update_design_json");

        let store = DesignStore::for_root(root);
        match envelope::update_section(&store, &section, content) {
            Envelope::Success(msg) => Ok(serde_json::json!({ "success": msg })),
            err => Err(err.to_json()),
        }
    }
}

fn missing(arg: &str) -> String {
    Envelope::Error(format!("missing required argument: {arg}")).to_json()
}
