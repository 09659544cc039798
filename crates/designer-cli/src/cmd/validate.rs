use crate::output::{print_json, print_table};
use designer_core::{schema, DesignStore, Section};
use serde::Serialize;
use serde_json::Value;
use std::path::Path;
use std::str::FromStr;

#[derive(Debug, Serialize)]
struct SectionStatus {
    section: String,
    status: &'static str,
    bytes: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    schema_error: Option<String>,
}

#[derive(Debug, Serialize)]
struct ValidateOutput {
    path: String,
    valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
    sections: Vec<SectionStatus>,
}

pub fn run(root: &Path, strict: bool, json: bool) -> anyhow::Result<()> {
    let store = DesignStore::for_root(root);
    let report = store.validate();
    let mut error = report.error();

    let sections = match &report.document {
        Some(Value::Object(map)) => map
            .iter()
            .map(|(name, content)| section_status(name, content, strict))
            .collect::<anyhow::Result<Vec<_>>>()?,
        _ => Vec::new(),
    };

    let schema_failures: Vec<&SectionStatus> = sections
        .iter()
        .filter(|s| s.schema_error.is_some())
        .collect();
    if error.is_none() && !schema_failures.is_empty() {
        error = Some(format!(
            "{} section(s) do not match their schema",
            schema_failures.len()
        ));
    }
    let valid = error.is_none();

    if json {
        print_json(&ValidateOutput {
            path: store.path().display().to_string(),
            valid,
            error: error.clone(),
            sections,
        })?;
    } else {
        print_human(&sections, error.as_deref());
    }

    if let Some(e) = error {
        anyhow::bail!("DESIGN.json validation failed: {e}");
    }
    Ok(())
}

fn section_status(name: &str, content: &Value, strict: bool) -> anyhow::Result<SectionStatus> {
    let bytes = serde_json::to_string(content)?.len();
    let schema_error = match Section::from_str(name) {
        Ok(section) if strict => schema::check(section, content).err().map(|e| e.message),
        _ => None,
    };
    Ok(SectionStatus {
        section: name.to_string(),
        status: if bytes <= 2 { "empty" } else { "populated" },
        bytes,
        schema_error,
    })
}

fn print_human(sections: &[SectionStatus], error: Option<&str>) {
    match error {
        None => println!("DESIGN.json is valid"),
        Some(e) => println!("DESIGN.json validation failed: {e}"),
    }
    if sections.is_empty() {
        return;
    }
    println!();
    let rows = sections
        .iter()
        .map(|s| {
            vec![
                s.section.clone(),
                s.status.to_string(),
                s.bytes.to_string(),
                s.schema_error.clone().unwrap_or_default(),
            ]
        })
        .collect();
    print_table(&["SECTION", "STATUS", "BYTES", "SCHEMA"], rows);
}
