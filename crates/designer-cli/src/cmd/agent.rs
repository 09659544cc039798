use crate::output::{print_json, print_table};
use anyhow::Context;
use clap::Subcommand;
use designer_core::agent::{AgentProfile, AgentRole};
use designer_core::config::Config;
use std::path::Path;
use std::str::FromStr;

#[derive(Subcommand)]
pub enum AgentSubcommand {
    /// List the agents, their roles, and the section each one writes
    List,

    /// Show an agent's resolved profile (name, model, instructions)
    Show {
        /// Agent: manager, marketing, architect, designer
        agent: String,
    },
}

pub fn run(root: &Path, subcmd: AgentSubcommand, json: bool) -> anyhow::Result<()> {
    let config = Config::load(root).context("failed to load designer.yaml")?;
    match subcmd {
        AgentSubcommand::List => list(&config, json),
        AgentSubcommand::Show { agent } => show(root, &config, &agent, json),
    }
}

fn list(config: &Config, json: bool) -> anyhow::Result<()> {
    if json {
        let agents: Vec<serde_json::Value> = AgentRole::ALL
            .iter()
            .map(|r| {
                serde_json::json!({
                    "agent": r,
                    "role": r.role_description(),
                    "section": r.section(),
                    "model": config.agents.model_for(*r),
                })
            })
            .collect();
        return print_json(&agents);
    }

    let rows = AgentRole::ALL
        .iter()
        .map(|r| {
            vec![
                r.to_string(),
                r.section().to_string(),
                config.agents.model_for(*r).to_string(),
                r.role_description().to_string(),
            ]
        })
        .collect();
    print_table(&["AGENT", "SECTION", "MODEL", "ROLE"], rows);
    Ok(())
}

fn show(root: &Path, config: &Config, agent: &str, json: bool) -> anyhow::Result<()> {
    let role = AgentRole::from_str(agent)?;
    let profile = AgentProfile::load(root, config, role)
        .with_context(|| format!("failed to load profile for '{role}'"))?;

    if json {
        return print_json(&profile);
    }

    println!("Name:        {}", profile.name);
    println!("Role:        {}", profile.role);
    println!("Model:       {}", profile.model);
    println!("Section:     {}", profile.section);
    if !profile.description.is_empty() {
        println!("Description: {}", profile.description);
    }
    println!("\nInstructions:");
    for instruction in &profile.instructions {
        println!("  - {instruction}");
    }
    Ok(())
}
