use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// Section
// ---------------------------------------------------------------------------

/// One of the five required top-level keys of DESIGN.json.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Section {
    Idea,
    Marketing,
    Architecture,
    Design,
    Tasks,
}

impl Section {
    /// Canonical order, which is also the key order of a fresh document.
    pub const ALL: [Section; 5] = [
        Section::Idea,
        Section::Marketing,
        Section::Architecture,
        Section::Design,
        Section::Tasks,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Section::Idea => "idea",
            Section::Marketing => "marketing",
            Section::Architecture => "architecture",
            Section::Design => "design",
            Section::Tasks => "tasks",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Section::Idea => "Product idea and concept",
            Section::Marketing => "Marketing strategy and user personas",
            Section::Architecture => "Technical architecture and system design",
            Section::Design => "UI/UX design specifications",
            Section::Tasks => "Implementation tasks and status",
        }
    }

    /// Comma-separated list of section names, e.g. for error messages.
    pub fn join(sections: &[Section]) -> String {
        sections
            .iter()
            .map(|s| s.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Section {
    type Err = crate::error::DesignError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "idea" => Ok(Section::Idea),
            "marketing" => Ok(Section::Marketing),
            "architecture" => Ok(Section::Architecture),
            "design" => Ok(Section::Design),
            "tasks" => Ok(Section::Tasks),
            _ => Err(crate::error::DesignError::UnknownSection(s.to_string())),
        }
    }
}
