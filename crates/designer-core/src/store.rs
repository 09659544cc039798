//! DESIGN.json document store.
//!
//! The store owns a single JSON file holding the evolving design document.
//! Every operation re-reads the file from disk; nothing is cached between
//! calls. Updates replace one section's whole value and rewrite the file.
//!
//! Writes are atomic (tempfile + rename) but there is no locking: two
//! processes updating the same file concurrently are last-writer-wins.

use crate::error::{DesignError, Result};
use crate::io::{atomic_write, write_if_missing_or_empty};
use crate::paths;
use crate::section::Section;
use serde_json::{Map, Value};
use std::path::{Path, PathBuf};
use thiserror::Error;

// ---------------------------------------------------------------------------
// Validation types
// ---------------------------------------------------------------------------

/// Why a DESIGN.json file is not a valid design document.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationIssue {
    #[error("DESIGN.json not found at {}", .0.display())]
    NotFound(PathBuf),

    #[error("DESIGN.json exists but is empty")]
    Empty,

    #[error("DESIGN.json contains invalid JSON: {0}")]
    Malformed(String),

    #[error("DESIGN.json is missing required sections: {}", Section::join(.0))]
    MissingSections(Vec<Section>),

    #[error("Error validating DESIGN.json: {0}")]
    Unreadable(String),
}

/// Outcome of [`DesignStore::validate`].
///
/// `document` is present when the store is valid, and also when the file
/// parsed but lacks required sections so callers can inspect what exists.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationReport {
    pub issue: Option<ValidationIssue>,
    pub document: Option<Value>,
}

impl ValidationReport {
    fn valid(document: Map<String, Value>) -> Self {
        Self {
            issue: None,
            document: Some(Value::Object(document)),
        }
    }

    fn invalid(issue: ValidationIssue, document: Option<Value>) -> Self {
        Self {
            issue: Some(issue),
            document,
        }
    }

    pub fn is_valid(&self) -> bool {
        self.issue.is_none()
    }

    pub fn error(&self) -> Option<String> {
        self.issue.as_ref().map(|i| i.to_string())
    }

    /// The `(is_valid, error, document)` triple.
    pub fn into_parts(self) -> (bool, Option<String>, Option<Value>) {
        let error = self.error();
        (self.issue.is_none(), error, self.document)
    }
}

/// A fresh document: every section mapped to an empty object.
pub fn empty_document() -> Map<String, Value> {
    Section::ALL
        .iter()
        .map(|s| (s.as_str().to_string(), Value::Object(Map::new())))
        .collect()
}

/// Sections absent from `document`, in canonical order. A non-object top
/// level is missing all of them.
pub fn missing_sections(document: &Value) -> Vec<Section> {
    match document.as_object() {
        Some(map) => Section::ALL
            .into_iter()
            .filter(|s| !map.contains_key(s.as_str()))
            .collect(),
        None => Section::ALL.to_vec(),
    }
}

// ---------------------------------------------------------------------------
// DesignStore
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
pub struct DesignStore {
    path: PathBuf,
}

impl DesignStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store backed by `<root>/DESIGN.json`.
    pub fn for_root(root: &Path) -> Self {
        Self::new(paths::design_path(root))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn absolute_path(&self) -> PathBuf {
        std::path::absolute(&self.path).unwrap_or_else(|_| self.path.clone())
    }

    /// Create the file with all five sections empty if it is absent or
    /// zero-length. A populated file is never touched.
    pub fn initialize(&self) -> Result<PathBuf> {
        let data = serde_json::to_string_pretty(&empty_document())?;
        if write_if_missing_or_empty(&self.path, data.as_bytes())? {
            tracing::info!(path = %self.path.display(), "initialized DESIGN.json");
        } else {
            tracing::debug!(path = %self.path.display(), "DESIGN.json already exists");
        }
        Ok(std::path::absolute(&self.path)?)
    }

    pub fn validate(&self) -> ValidationReport {
        match self.read_document() {
            Ok(document) => ValidationReport::valid(document),
            Err((issue, document)) => ValidationReport::invalid(issue, document),
        }
    }

    /// Return the whole document (`None`) or one section's value.
    pub fn get_section(&self, name: Option<&str>) -> Result<Value> {
        let mut document = self.load()?;
        match name {
            None => Ok(Value::Object(document)),
            Some(name) => document
                .remove(name)
                .ok_or_else(|| DesignError::UnknownSection(name.to_string())),
        }
    }

    /// Replace the whole value of a known section and rewrite the file.
    pub fn update_section(&self, name: &str, content: Value) -> Result<Section> {
        let mut document = self.load()?;
        let section: Section = name.parse()?;
        document.insert(section.as_str().to_string(), content);
        self.write(&document)?;
        tracing::info!(%section, path = %self.path.display(), "section updated");
        Ok(section)
    }

    // -----------------------------------------------------------------------
    // Internals
    // -----------------------------------------------------------------------

    /// Validate, auto-initializing once if and only if the file is missing.
    fn load(&self) -> Result<Map<String, Value>> {
        match self.read_document() {
            Ok(document) => Ok(document),
            Err((ValidationIssue::NotFound(_), _)) => {
                self.initialize()?;
                self.read_document().map_err(|(issue, _)| issue.into())
            }
            Err((issue, _)) => Err(issue.into()),
        }
    }

    fn read_document(
        &self,
    ) -> std::result::Result<Map<String, Value>, (ValidationIssue, Option<Value>)> {
        if !self.path.exists() {
            return Err((ValidationIssue::NotFound(self.absolute_path()), None));
        }
        let meta = std::fs::metadata(&self.path)
            .map_err(|e| (ValidationIssue::Unreadable(e.to_string()), None))?;
        if meta.len() == 0 {
            return Err((ValidationIssue::Empty, None));
        }

        let data = std::fs::read_to_string(&self.path)
            .map_err(|e| (ValidationIssue::Unreadable(e.to_string()), None))?;
        let document: Value = serde_json::from_str(&data)
            .map_err(|e| (ValidationIssue::Malformed(e.to_string()), None))?;

        let missing = missing_sections(&document);
        if !missing.is_empty() {
            return Err((ValidationIssue::MissingSections(missing), Some(document)));
        }
        match document {
            Value::Object(map) => Ok(map),
            other => Err((
                ValidationIssue::MissingSections(Section::ALL.to_vec()),
                Some(other),
            )),
        }
    }

    fn write(&self, document: &Map<String, Value>) -> Result<()> {
        let data = serde_json::to_string_pretty(document)?;
        atomic_write(&self.path, data.as_bytes())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::TempDir;

    fn store(dir: &TempDir) -> DesignStore {
        DesignStore::for_root(dir.path())
    }

    fn read(store: &DesignStore) -> String {
        std::fs::read_to_string(store.path()).unwrap()
    }

    #[test]
    fn initialize_creates_five_empty_sections() {
        let dir = TempDir::new().unwrap();
        let store = store(&dir);
        let path = store.initialize().unwrap();

        assert!(path.is_absolute());
        assert!(path.ends_with("DESIGN.json"));
        let doc: Value = serde_json::from_str(&read(&store)).unwrap();
        assert_eq!(
            doc,
            json!({"idea": {}, "marketing": {}, "architecture": {}, "design": {}, "tasks": {}})
        );
    }

    #[test]
    fn initialize_writes_sections_in_canonical_order() {
        let dir = TempDir::new().unwrap();
        let store = store(&dir);
        store.initialize().unwrap();
        assert_eq!(
            read(&store),
            "{\n  \"idea\": {},\n  \"marketing\": {},\n  \"architecture\": {},\n  \"design\": {},\n  \"tasks\": {}\n}"
        );
    }

    #[test]
    fn initialize_is_idempotent() {
        let dir = TempDir::new().unwrap();
        let store = store(&dir);
        let first_path = store.initialize().unwrap();
        let first = read(&store);
        let second_path = store.initialize().unwrap();
        assert_eq!(first_path, second_path);
        assert_eq!(read(&store), first);
    }

    #[test]
    fn initialize_leaves_populated_file_untouched() {
        let dir = TempDir::new().unwrap();
        let store = store(&dir);
        std::fs::write(store.path(), "not even json").unwrap();
        store.initialize().unwrap();
        assert_eq!(read(&store), "not even json");
    }

    #[test]
    fn initialize_fills_empty_file() {
        let dir = TempDir::new().unwrap();
        let store = store(&dir);
        std::fs::write(store.path(), "").unwrap();
        store.initialize().unwrap();
        assert!(store.validate().is_valid());
    }

    #[test]
    fn validate_missing_file() {
        let dir = TempDir::new().unwrap();
        let report = store(&dir).validate();
        assert!(!report.is_valid());
        assert!(matches!(report.issue, Some(ValidationIssue::NotFound(_))));
        assert!(report.error().unwrap().contains("not found"));
        assert!(report.document.is_none());
    }

    #[test]
    fn validate_empty_file() {
        let dir = TempDir::new().unwrap();
        let store = store(&dir);
        std::fs::write(store.path(), "").unwrap();
        let (valid, error, document) = store.validate().into_parts();
        assert!(!valid);
        assert_eq!(error.unwrap(), "DESIGN.json exists but is empty");
        assert!(document.is_none());
    }

    #[test]
    fn validate_malformed_json() {
        let dir = TempDir::new().unwrap();
        let store = store(&dir);
        std::fs::write(store.path(), "{\"idea\": ").unwrap();
        let report = store.validate();
        assert!(matches!(report.issue, Some(ValidationIssue::Malformed(_))));
        assert!(report
            .error()
            .unwrap()
            .starts_with("DESIGN.json contains invalid JSON: "));
        assert!(report.document.is_none());
    }

    #[test]
    fn validate_whitespace_only_is_malformed_not_empty() {
        let dir = TempDir::new().unwrap();
        let store = store(&dir);
        std::fs::write(store.path(), "   \n").unwrap();
        assert!(matches!(
            store.validate().issue,
            Some(ValidationIssue::Malformed(_))
        ));
    }

    #[test]
    fn validate_missing_sections_returns_partial_document() {
        let dir = TempDir::new().unwrap();
        let store = store(&dir);
        std::fs::write(
            store.path(),
            r#"{"marketing": {"personas": []}, "architecture": {}, "design": {}}"#,
        )
        .unwrap();
        let report = store.validate();
        assert_eq!(
            report.issue,
            Some(ValidationIssue::MissingSections(vec![
                Section::Idea,
                Section::Tasks
            ]))
        );
        assert_eq!(
            report.error().unwrap(),
            "DESIGN.json is missing required sections: idea, tasks"
        );
        assert_eq!(report.document.unwrap()["marketing"], json!({"personas": []}));
    }

    #[test]
    fn validate_non_object_is_missing_everything() {
        let dir = TempDir::new().unwrap();
        let store = store(&dir);
        std::fs::write(store.path(), "[1, 2, 3]").unwrap();
        let report = store.validate();
        assert_eq!(
            report.issue,
            Some(ValidationIssue::MissingSections(Section::ALL.to_vec()))
        );
        assert_eq!(report.document, Some(json!([1, 2, 3])));
    }

    #[test]
    fn validate_tolerates_extra_keys() {
        let dir = TempDir::new().unwrap();
        let store = store(&dir);
        store.initialize().unwrap();
        let mut doc: Value = serde_json::from_str(&read(&store)).unwrap();
        doc["notes"] = json!("extra");
        std::fs::write(store.path(), doc.to_string()).unwrap();
        assert!(store.validate().is_valid());
        assert_eq!(store.get_section(Some("notes")).unwrap(), json!("extra"));
    }

    #[test]
    fn get_section_auto_initializes_missing_file() {
        let dir = TempDir::new().unwrap();
        let store = store(&dir);
        let doc = store.get_section(None).unwrap();
        assert_eq!(Value::Object(empty_document()), doc);
        assert!(store.path().exists());
    }

    #[test]
    fn get_section_does_not_repair_empty_file() {
        let dir = TempDir::new().unwrap();
        let store = store(&dir);
        std::fs::write(store.path(), "").unwrap();
        let err = store.get_section(None).unwrap_err();
        assert!(matches!(err, DesignError::Invalid(ValidationIssue::Empty)));
        assert_eq!(std::fs::metadata(store.path()).unwrap().len(), 0);
    }

    #[test]
    fn get_section_does_not_repair_incomplete_document() {
        let dir = TempDir::new().unwrap();
        let store = store(&dir);
        std::fs::write(store.path(), r#"{"idea": {}}"#).unwrap();
        let err = store.get_section(Some("idea")).unwrap_err();
        assert!(err.to_string().contains("missing required sections"));
        assert_eq!(read(&store), r#"{"idea": {}}"#);
    }

    #[test]
    fn get_unknown_section() {
        let dir = TempDir::new().unwrap();
        let store = store(&dir);
        let err = store.get_section(Some("nonexistent")).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Section 'nonexistent' not found in DESIGN.json"
        );
    }

    #[test]
    fn update_then_get_roundtrip() {
        let dir = TempDir::new().unwrap();
        let store = store(&dir);
        let values = [
            json!({"personas": [{"name": "Ada", "age": 36, "goals": ["ship", "learn"]}]}),
            json!([1, "two", null, {"three": 3.5}]),
            json!({}),
            json!({"tagline": "Café für alle, 日本語も 🚀"}),
        ];
        for value in values {
            store.update_section("marketing", value.clone()).unwrap();
            assert_eq!(store.get_section(Some("marketing")).unwrap(), value);
        }
    }

    #[test]
    fn update_replaces_without_merging() {
        let dir = TempDir::new().unwrap();
        let store = store(&dir);
        store
            .update_section("design", json!({"palette": {"primary": "#000"}, "screens": []}))
            .unwrap();
        store
            .update_section("design", json!({"palette": {"accent": "#fff"}}))
            .unwrap();
        assert_eq!(
            store.get_section(Some("design")).unwrap(),
            json!({"palette": {"accent": "#fff"}})
        );
    }

    #[test]
    fn update_unknown_section_leaves_file_unchanged() {
        let dir = TempDir::new().unwrap();
        let store = store(&dir);
        store
            .update_section("idea", json!({"description": "A todo app"}))
            .unwrap();
        let before = read(&store);

        let err = store.update_section("bogus", json!({})).unwrap_err();
        assert!(matches!(err, DesignError::UnknownSection(ref s) if s == "bogus"));
        assert_eq!(read(&store), before);
    }

    #[test]
    fn update_cannot_target_extra_keys() {
        let dir = TempDir::new().unwrap();
        let store = store(&dir);
        store.initialize().unwrap();
        let mut doc: Value = serde_json::from_str(&read(&store)).unwrap();
        doc["notes"] = json!("extra");
        std::fs::write(store.path(), doc.to_string()).unwrap();

        assert!(store.update_section("notes", json!("changed")).is_err());
        assert_eq!(store.get_section(Some("notes")).unwrap(), json!("extra"));
    }

    #[test]
    fn update_on_empty_file_is_rejected() {
        let dir = TempDir::new().unwrap();
        let store = store(&dir);
        std::fs::write(store.path(), "").unwrap();
        assert!(store.update_section("idea", json!({})).is_err());
        assert_eq!(std::fs::metadata(store.path()).unwrap().len(), 0);
    }

    #[test]
    fn update_preserves_key_order() {
        let dir = TempDir::new().unwrap();
        let store = store(&dir);
        store.update_section("tasks", json!({"T1": "open"})).unwrap();
        let doc: Value = serde_json::from_str(&read(&store)).unwrap();
        let keys: Vec<&String> = doc.as_object().unwrap().keys().collect();
        assert_eq!(keys, ["idea", "marketing", "architecture", "design", "tasks"]);
    }

    #[test]
    fn todo_app_scenario() {
        let dir = TempDir::new().unwrap();
        let store = store(&dir);
        assert!(!store.path().exists());

        let section = store
            .update_section("idea", json!({"description": "A todo app"}))
            .unwrap();
        assert_eq!(section, Section::Idea);

        let on_disk: Value = serde_json::from_str(&read(&store)).unwrap();
        assert_eq!(
            on_disk,
            json!({
                "idea": {"description": "A todo app"},
                "marketing": {},
                "architecture": {},
                "design": {},
                "tasks": {}
            })
        );
        assert_eq!(
            store.get_section(Some("idea")).unwrap(),
            json!({"description": "A todo app"})
        );
    }
}
