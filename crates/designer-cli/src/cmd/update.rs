use anyhow::Context;
use designer_core::{envelope, DesignStore};
use std::path::Path;

pub fn run(
    root: &Path,
    section: &str,
    value: Option<&str>,
    file: Option<&Path>,
) -> anyhow::Result<()> {
    let content = read_content(value, file)?;
    let store = DesignStore::for_root(root);
    let result = envelope::update_section(&store, section, content);
    println!("{}", result.to_json());
    if result.is_error() {
        anyhow::bail!("section '{section}' was not updated");
    }
    Ok(())
}

fn read_content(value: Option<&str>, file: Option<&Path>) -> anyhow::Result<serde_json::Value> {
    let (text, source) = match (value, file) {
        (Some(v), None) => (v.to_string(), "--value".to_string()),
        (None, Some(f)) => (
            std::fs::read_to_string(f).with_context(|| format!("failed to read {}", f.display()))?,
            f.display().to_string(),
        ),
        _ => anyhow::bail!("provide exactly one of --value or --file"),
    };
    serde_json::from_str(&text).with_context(|| format!("{source} is not valid JSON"))
}

