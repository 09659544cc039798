use crate::output::print_json;
use anyhow::Context;
use designer_core::DesignStore;
use std::path::Path;

pub fn run(root: &Path, json: bool) -> anyhow::Result<()> {
    let store = DesignStore::for_root(root);
    let existed = store.path().exists() && std::fs::metadata(store.path())?.len() > 0;
    let path = store
        .initialize()
        .with_context(|| format!("failed to initialize {}", store.path().display()))?;

    if json {
        return print_json(&serde_json::json!({
            "path": path,
            "created": !existed,
        }));
    }

    if existed {
        println!("DESIGN.json already exists: {}", path.display());
    } else {
        println!("Initialized DESIGN.json: {}", path.display());
    }
    Ok(())
}
