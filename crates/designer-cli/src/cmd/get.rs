use designer_core::{envelope, DesignStore};
use std::path::Path;

/// Print a section (or the whole document) exactly as the agent tool would.
pub fn run(root: &Path, section: Option<&str>) -> anyhow::Result<()> {
    let store = DesignStore::for_root(root);
    let outcome = envelope::get_section(&store, section);
    println!("{}", outcome.to_json());
    if outcome.is_error() {
        anyhow::bail!("could not read DESIGN.json");
    }
    Ok(())
}
