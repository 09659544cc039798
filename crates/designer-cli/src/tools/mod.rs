use std::path::Path;

pub mod get_design;
pub mod read_idea;
pub mod update_design;

/// A tool exposed to agents over MCP.
///
/// `call` returns the tool's JSON result, or the error text to hand back to
/// the agent verbatim.
pub trait DesignerTool: Send + Sync {
    fn name(&self) -> &str;
    fn description(&self) -> &str;
    fn schema(&self) -> serde_json::Value;
    fn call(&self, args: serde_json::Value, root: &Path) -> Result<serde_json::Value, String>;
}

pub fn all_tools() -> Vec<Box<dyn DesignerTool>> {
    vec![
        Box::new(read_idea::ReadIdeaFileTool),
        Box::new(get_design::GetDesignJsonTool),
        Box::new(update_design::UpdateDesignJsonTool),
    ]
}

/// The calling agent's name, for logging only.
pub(crate) fn agent_name(args: &serde_json::Value) -> &str {
    args["agent_name"].as_str().unwrap_or("Unknown Agent")
}
