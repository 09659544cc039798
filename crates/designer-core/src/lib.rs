pub mod agent;
pub mod config;
pub mod envelope;
pub mod error;
pub mod idea;
pub mod io;
pub mod paths;
pub mod prompt;
pub mod schema;
pub mod section;
pub mod store;

pub use error::{DesignError, Result};
pub use section::Section;
pub use store::{DesignStore, ValidationIssue, ValidationReport};
