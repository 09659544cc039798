use crate::config::Config;
use crate::error::{DesignError, Result};
use crate::prompt::PromptFile;
use crate::section::Section;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

// ---------------------------------------------------------------------------
// AgentRole
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AgentRole {
    Manager,
    Marketing,
    Architect,
    Designer,
}

impl AgentRole {
    pub const ALL: [AgentRole; 4] = [
        AgentRole::Manager,
        AgentRole::Marketing,
        AgentRole::Architect,
        AgentRole::Designer,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            AgentRole::Manager => "manager",
            AgentRole::Marketing => "marketing",
            AgentRole::Architect => "architect",
            AgentRole::Designer => "designer",
        }
    }

    pub fn role_description(self) -> &'static str {
        match self {
            AgentRole::Manager => "Design document coordinator and process manager",
            AgentRole::Marketing => "User persona specialist and audience analyst",
            AgentRole::Architect => "Software architecture and system design expert",
            AgentRole::Designer => "User interface and experience design specialist",
        }
    }

    /// The document section this agent is responsible for writing.
    pub fn section(self) -> Section {
        match self {
            AgentRole::Manager => Section::Idea,
            AgentRole::Marketing => Section::Marketing,
            AgentRole::Architect => Section::Architecture,
            AgentRole::Designer => Section::Design,
        }
    }

    fn default_name(self) -> String {
        let name = self.as_str();
        let mut chars = name.chars();
        let title: String = match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        };
        format!("{title} Agent")
    }
}

impl fmt::Display for AgentRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for AgentRole {
    type Err = DesignError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "manager" => Ok(AgentRole::Manager),
            "marketing" => Ok(AgentRole::Marketing),
            "architect" => Ok(AgentRole::Architect),
            "designer" => Ok(AgentRole::Designer),
            _ => Err(DesignError::UnknownAgent(s.to_string())),
        }
    }
}

// ---------------------------------------------------------------------------
// AgentProfile
// ---------------------------------------------------------------------------

/// Everything the agent framework needs to construct one agent.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AgentProfile {
    pub name: String,
    pub agent: AgentRole,
    pub role: String,
    pub description: String,
    pub model: String,
    pub section: Section,
    pub instructions: Vec<String>,
}

impl AgentProfile {
    /// Build a profile from the agent's prompt template.
    ///
    /// Model precedence: prompt frontmatter, then the per-role override in
    /// `designer.yaml`, then the configured default.
    pub fn load(root: &Path, config: &Config, agent: AgentRole) -> Result<Self> {
        let prompt = PromptFile::load(&config.prompts_path(root), agent.as_str())?;
        Ok(Self::from_prompt(agent, prompt, config))
    }

    pub fn from_prompt(agent: AgentRole, prompt: PromptFile, config: &Config) -> Self {
        // The architect prompt is a single structured brief; the others are
        // bullet lists of independent instructions.
        let instructions = match agent {
            AgentRole::Architect => prompt.single_instruction(),
            _ => prompt.line_instructions(),
        };
        let fm = prompt.frontmatter;
        Self {
            name: fm.name.unwrap_or_else(|| agent.default_name()),
            agent,
            role: agent.role_description().to_string(),
            description: fm.description.unwrap_or_default(),
            model: fm
                .model
                .unwrap_or_else(|| config.agents.model_for(agent).to_string()),
            section: agent.section(),
            instructions,
        }
    }
}
