use anyhow::Context;
use designer_core::{config::Config, envelope, idea, paths, DesignStore, Section};
use std::path::Path;

/// Convert the idea file to JSON and print it, optionally storing it as the
/// `idea` section.
pub fn run(root: &Path, file: Option<&Path>, save: bool) -> anyhow::Result<()> {
    let path = match file {
        Some(f) => paths::resolve(root, f),
        None => Config::load(root)
            .context("failed to load designer.yaml")?
            .idea_path(root),
    };
    let value = idea::read_idea_file(&path)?;

    if !save {
        println!("{}", serde_json::to_string_pretty(&value)?);
        return Ok(());
    }

    let store = DesignStore::for_root(root);
    let result = envelope::update_section(&store, Section::Idea.as_str(), value);
    println!("{}", result.to_json());
    if result.is_error() {
        anyhow::bail!("idea from {} was not saved", path.display());
    }
    Ok(())
}
