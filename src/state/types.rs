//! Core value types shared between the facet, the host state and the UI layer.

use std::collections::HashMap;

use serde::Deserialize;

/// Per-file issue counts keyed by file identifier.
pub type FileStats = HashMap<String, u64>;

/// Metadata for a component referenced by the issues, keyed by component key.
pub type ReferencedComponents = HashMap<String, ReferencedComponent>;

/// Unit used to render facet statistics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FacetMode {
    /// Number of issues, rendered as a short integer (`1.2k`).
    #[default]
    Count,
    /// Remediation effort in minutes, rendered as a work duration (`1d 2h`).
    Effort,
}

impl FacetMode {
    /// Return the string key used in settings files and on the command line.
    ///
    /// Inputs: none
    ///
    /// Output: Static config key string.
    #[must_use]
    pub const fn as_config_key(&self) -> &'static str {
        match self {
            Self::Count => "count",
            Self::Effort => "effort",
        }
    }

    /// Parse a facet mode from its settings key or aliases.
    ///
    /// Inputs: `s` config string (case-insensitive).
    ///
    /// Output: `Some(FacetMode)` on recognized value; `None` otherwise.
    #[must_use]
    pub fn from_config_key(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "count" | "issues" => Some(Self::Count),
            "effort" | "debt" => Some(Self::Effort),
            _ => None,
        }
    }

    /// The other mode; used by the mode switch key.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Count => Self::Effort,
            Self::Effort => Self::Count,
        }
    }
}

/// A component (file, directory, project) referenced by the loaded issues.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ReferencedComponent {
    /// Unique component key, e.g. `my-project:src/main/App.java`.
    pub key: String,
    /// Short name, usually the file name.
    #[serde(default)]
    pub name: String,
    /// Path relative to the project root; used for display.
    #[serde(default)]
    pub path: String,
    /// Optional stable identifier.
    #[serde(default)]
    pub uuid: Option<String>,
}

/// The issue query owned by the host. Only the file dimension is modelled.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Query {
    /// File identifiers currently used as a filter.
    pub files: Vec<String>,
}

/// A partial query update emitted by facets.
///
/// Fields left as `None` are not touched when merged into a [`Query`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryChange {
    /// Replacement for [`Query::files`].
    pub files: Option<Vec<String>>,
}

impl QueryChange {
    /// Build a change that replaces the file selection.
    #[must_use]
    pub const fn files(files: Vec<String>) -> Self {
        Self { files: Some(files) }
    }
}

impl Query {
    /// What: Merge a partial update into this query.
    ///
    /// Inputs:
    /// - `change`: Partial update; `None` fields are ignored
    ///
    /// Output:
    /// - `true` when the query changed
    pub fn apply(&mut self, change: QueryChange) -> bool {
        let mut changed = false;
        if let Some(files) = change.files
            && files != self.files
        {
            self.files = files;
            changed = true;
        }
        changed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    /// What: `FacetMode` config key mapping and alias handling
    ///
    /// - Input: Known keys, aliases and an unknown key
    /// - Output: Correct variants; `None` for unknown
    fn facet_mode_config_keys_and_aliases() {
        assert_eq!(FacetMode::Count.as_config_key(), "count");
        assert_eq!(FacetMode::Effort.as_config_key(), "effort");
        assert_eq!(FacetMode::from_config_key("count"), Some(FacetMode::Count));
        assert_eq!(FacetMode::from_config_key(" Issues "), Some(FacetMode::Count));
        assert_eq!(FacetMode::from_config_key("DEBT"), Some(FacetMode::Effort));
        assert_eq!(FacetMode::from_config_key("percent"), None);
        assert_eq!(FacetMode::Count.toggled(), FacetMode::Effort);
        assert_eq!(FacetMode::Effort.toggled(), FacetMode::Count);
    }

    #[test]
    /// What: Merging a partial change only touches provided fields
    ///
    /// - Input: Empty change, then a files change, then the same files again
    /// - Output: Reports change only for the first real replacement
    fn query_apply_partial_change() {
        let mut q = Query {
            files: vec!["a.js".into()],
        };
        assert!(!q.apply(QueryChange::default()));
        assert_eq!(q.files, vec!["a.js".to_string()]);
        assert!(q.apply(QueryChange::files(vec![])));
        assert!(q.files.is_empty());
        assert!(!q.apply(QueryChange::files(vec![])));
    }

    #[test]
    /// What: Referenced components deserialize with optional fields defaulted
    fn referenced_component_deserializes_with_defaults() {
        let c: ReferencedComponent =
            serde_json::from_str(r#"{"key":"p:src/a.js","path":"src/a.js"}"#)
                .expect("valid component json");
        assert_eq!(c.key, "p:src/a.js");
        assert_eq!(c.path, "src/a.js");
        assert!(c.name.is_empty());
        assert!(c.uuid.is_none());
    }
}
