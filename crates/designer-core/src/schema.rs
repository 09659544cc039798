//! Expected shapes of the populated design document sections.
//!
//! The store never enforces these; they are checked on demand (see
//! `designer validate --strict`) so agents can be told when a section they
//! wrote is incomplete.

use crate::section::Section;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("section '{section}' does not match its schema: {message}")]
pub struct SchemaError {
    pub section: Section,
    pub message: String,
}

// ---------------------------------------------------------------------------
// Idea
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Problem {
    pub description: String,
    pub example: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Solution {
    pub summary: String,
    pub challenges: Vec<String>,
    pub requirements: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Features {
    pub core_features: Vec<String>,
    pub optional_features: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IdeaDocument {
    pub problem: Problem,
    pub solution: Solution,
    pub audience: String,
    pub features: Features,
    pub business_model: String,
    /// Candidate marketing strategies.
    pub marketing: Vec<String>,
}

// ---------------------------------------------------------------------------
// Marketing
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserPersona {
    pub name: String,
    pub role: String,
    pub age: u32,
    pub technical_level: String,
    pub background: String,
    pub goals: Vec<String>,
    pub pain_points: Vec<String>,
    pub usage_scenario: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarketAnalysis {
    pub target_audience_overview: String,
    pub market_size_potential: String,
    pub key_competitors: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserRequirement {
    pub description: String,
    /// `functional` or `non-functional`.
    #[serde(rename = "type")]
    pub kind: String,
    pub priority: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarketingDocument {
    pub market_analysis: MarketAnalysis,
    pub user_personas: Vec<UserPersona>,
    pub user_requirements: Vec<UserRequirement>,
}

// ---------------------------------------------------------------------------
// Architecture
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TechnicalRequirement {
    pub name: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TechnologyImplementation {
    pub technologies: Vec<String>,
    pub component_interactions: String,
    pub data_requirements: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoreFeatureImplementation {
    pub name: String,
    pub description: String,
    pub detailed_requirements: Vec<String>,
    pub implementation_approach: String,
    pub technical_considerations: String,
    pub technology_implementation: TechnologyImplementation,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptionalFeatureImplementation {
    pub name: String,
    pub technical_approach: String,
    pub integration_with_mvp: String,
    pub additional_requirements: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SystemOverview {
    pub purpose: String,
    pub key_constraints: Vec<String>,
    pub architecture_pattern: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TechnologyStack {
    pub frontend: Vec<String>,
    pub backend: Vec<String>,
    pub database: String,
    pub infrastructure: Vec<String>,
    pub third_party: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SystemArchitecture {
    pub components: String,
    pub data_flow: String,
    pub api_specifications: String,
    pub auth_approach: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SecurityPerformance {
    pub security_details: String,
    pub performance_strategies: Vec<String>,
    pub scalability: String,
    pub monitoring: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TechnicalConsiderations {
    pub risks: Vec<String>,
    pub scalability_concerns: String,
    pub development_workflow: String,
    pub testing_strategy: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArchitectureDocument {
    pub technical_requirements: Vec<TechnicalRequirement>,
    pub core_features: Vec<CoreFeatureImplementation>,
    pub optional_features: Vec<OptionalFeatureImplementation>,
    pub system_overview: SystemOverview,
    pub technology_stack: TechnologyStack,
    pub system_architecture: SystemArchitecture,
    pub security_performance: SecurityPerformance,
    pub technical_considerations: TechnicalConsiderations,
}

// ---------------------------------------------------------------------------
// Design
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UiComponent {
    pub name: String,
    pub variants: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScreenDefinition {
    pub name: String,
    pub path: String,
    pub purpose: String,
    pub components: Vec<String>,
    pub user_interactions: Vec<String>,
    pub mockup_description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserFlow {
    pub name: String,
    pub steps: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Typography {
    pub primary_font: String,
    pub code_font: String,
    pub heading_sizes: BTreeMap<String, String>,
    pub body_text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DesignSpec {
    pub design_principles: Vec<String>,
    /// Color name to hex value.
    pub color_palette: BTreeMap<String, String>,
    pub typography: Typography,
    pub components: Vec<UiComponent>,
    pub screens: Vec<ScreenDefinition>,
    pub user_flows: Vec<UserFlow>,
    pub accessibility_considerations: Vec<String>,
    pub responsive_breakpoints: BTreeMap<String, String>,
    pub animations_and_transitions: Vec<String>,
}

// ---------------------------------------------------------------------------
// Checking
// ---------------------------------------------------------------------------

/// Check a section's value against its expected shape.
///
/// An empty object means the section has not been written yet and passes.
/// `tasks` is free-form but must be an object.
pub fn check(section: Section, value: &Value) -> Result<(), SchemaError> {
    if value.as_object().is_some_and(|m| m.is_empty()) {
        return Ok(());
    }
    let result = match section {
        Section::Idea => parse::<IdeaDocument>(value),
        Section::Marketing => parse::<MarketingDocument>(value),
        Section::Architecture => parse::<ArchitectureDocument>(value),
        Section::Design => parse::<DesignSpec>(value),
        Section::Tasks => {
            if value.is_object() {
                Ok(())
            } else {
                Err("expected an object".to_string())
            }
        }
    };
    result.map_err(|message| SchemaError { section, message })
}

fn parse<T: serde::de::DeserializeOwned>(value: &Value) -> Result<(), String> {
    T::deserialize(value).map(|_| ()).map_err(|e| e.to_string())
}
