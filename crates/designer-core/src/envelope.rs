//! JSON-text wrappers around the store for agent-facing tools.
//!
//! Every failure becomes an `{"error": ...}` envelope; these functions never
//! return `Err`.

use crate::error::DesignError;
use crate::store::DesignStore;
use serde::Serialize;
use serde_json::Value;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Envelope {
    Success(String),
    Error(String),
}

impl Envelope {
    pub fn is_error(&self) -> bool {
        matches!(self, Envelope::Error(_))
    }

    pub fn to_json(&self) -> String {
        match self {
            Envelope::Success(msg) => serde_json::json!({ "success": msg }).to_string(),
            Envelope::Error(msg) => serde_json::json!({ "error": msg }).to_string(),
        }
    }
}

/// Result of a get call: the requested JSON, or an error envelope.
#[derive(Debug, Clone, PartialEq)]
pub enum GetOutcome {
    Found(Value),
    Failed(Envelope),
}

impl GetOutcome {
    pub fn is_error(&self) -> bool {
        matches!(self, GetOutcome::Failed(_))
    }

    /// Pretty JSON for a found value, compact envelope otherwise.
    pub fn to_json(&self) -> String {
        match self {
            GetOutcome::Found(value) => {
                serde_json::to_string_pretty(value).unwrap_or_else(|e| {
                    Envelope::Error(format!("Error accessing DESIGN.json: {e}")).to_json()
                })
            }
            GetOutcome::Failed(envelope) => envelope.to_json(),
        }
    }
}

pub fn get_section(store: &DesignStore, name: Option<&str>) -> GetOutcome {
    match store.get_section(name) {
        Ok(value) => GetOutcome::Found(value),
        Err(e) => {
            tracing::warn!(error = %e, "get_section failed");
            GetOutcome::Failed(Envelope::Error(error_message(e, "Error accessing DESIGN.json")))
        }
    }
}

pub fn update_section(store: &DesignStore, name: &str, content: Value) -> Envelope {
    match store.update_section(name, content) {
        Ok(section) => Envelope::Success(format!("Section '{section}' updated successfully")),
        Err(e) => {
            tracing::warn!(error = %e, section = name, "update_section failed");
            Envelope::Error(error_message(e, "Error updating DESIGN.json"))
        }
    }
}

pub fn get_section_json(store: &DesignStore, name: Option<&str>) -> String {
    get_section(store, name).to_json()
}

pub fn update_section_json(store: &DesignStore, name: &str, content: Value) -> String {
    update_section(store, name, content).to_json()
}

/// Validation and lookup failures are reported as-is; anything else is an
/// unexpected I/O or encoding failure and gets the operation's prefix.
fn error_message(err: DesignError, prefix: &str) -> String {
    match err {
        DesignError::Invalid(_) | DesignError::UnknownSection(_) => err.to_string(),
        other => format!("{prefix}: {other}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::TempDir;

    fn parse(text: &str) -> Value {
        serde_json::from_str(text).unwrap()
    }

    #[test]
    fn envelope_shapes() {
        assert_eq!(
            parse(&Envelope::Success("ok".into()).to_json()),
            json!({"success": "ok"})
        );
        assert_eq!(
            parse(&Envelope::Error("bad".into()).to_json()),
            json!({"error": "bad"})
        );
    }

    #[test]
    fn update_success_envelope() {
        let dir = TempDir::new().unwrap();
        let store = DesignStore::for_root(dir.path());
        let text = update_section_json(&store, "idea", json!({"description": "A todo app"}));
        assert_eq!(
            parse(&text),
            json!({"success": "Section 'idea' updated successfully"})
        );
    }

    #[test]
    fn get_unknown_section_envelope() {
        let dir = TempDir::new().unwrap();
        let store = DesignStore::for_root(dir.path());
        let text = get_section_json(&store, Some("nonexistent"));
        assert_eq!(
            parse(&text),
            json!({"error": "Section 'nonexistent' not found in DESIGN.json"})
        );
    }

    #[test]
    fn get_returns_pretty_section() {
        let dir = TempDir::new().unwrap();
        let store = DesignStore::for_root(dir.path());
        update_section(&store, "idea", json!({"description": "A todo app"}));
        let text = get_section_json(&store, Some("idea"));
        assert_eq!(text, "{\n  \"description\": \"A todo app\"\n}");
    }

    #[test]
    fn empty_file_reported_verbatim() {
        let dir = TempDir::new().unwrap();
        let store = DesignStore::for_root(dir.path());
        std::fs::write(store.path(), "").unwrap();
        let outcome = get_section(&store, None);
        assert!(outcome.is_error());
        assert_eq!(
            parse(&outcome.to_json()),
            json!({"error": "DESIGN.json exists but is empty"})
        );
    }

    #[test]
    fn unknown_update_is_error_envelope() {
        let dir = TempDir::new().unwrap();
        let store = DesignStore::for_root(dir.path());
        let envelope = update_section(&store, "bogus", json!({}));
        assert!(envelope.is_error());
        assert_eq!(
            envelope,
            Envelope::Error("Section 'bogus' not found in DESIGN.json".into())
        );
    }

    #[test]
    fn io_failure_gets_operation_prefix() {
        let dir = TempDir::new().unwrap();
        // The parent of DESIGN.json is a regular file, so creating it fails.
        let blocker = dir.path().join("blocker");
        std::fs::write(&blocker, "x").unwrap();
        let store = DesignStore::new(blocker.join("DESIGN.json"));

        let envelope = update_section(&store, "idea", json!({}));
        match envelope {
            Envelope::Error(msg) => assert!(msg.starts_with("Error updating DESIGN.json: ")),
            Envelope::Success(_) => panic!("expected error envelope"),
        }
    }
}
