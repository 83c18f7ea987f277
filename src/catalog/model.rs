//! Records produced by the extraction pipeline.
use serde::{Deserialize, Serialize};
use std::fmt;

/// Closed category taxonomy used to group features.
#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Functional,
    Ui,
    Integration,
    Security,
    Performance,
}

impl Category {
    /// Return the stable string identifier used in JSON output.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Functional => "functional",
            Category::Ui => "ui",
            Category::Integration => "integration",
            Category::Security => "security",
            Category::Performance => "performance",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One emitted catalog entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeatureRecord {
    pub category: Category,
    pub description: String,
    pub steps: Vec<String>,
    pub passes: bool,
}

/// Top-level `# ` block of the document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Section<'a> {
    pub(crate) title: &'a str,
    pub(crate) body: &'a str,
}

/// A `### <id> <title>` subsection recognized as describing one feature.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct FeatureSpan<'a> {
    pub(crate) section_title: &'a str,
    pub(crate) id: &'a str,
    pub(crate) title: &'a str,
    pub(crate) description: &'a str,
    pub(crate) content: &'a str,
}
