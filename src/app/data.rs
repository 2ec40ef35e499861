//! Issue statistics data files.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::state::{AppState, FileStats, ReferencedComponent};

/// Contents of an issue statistics JSON file.
///
/// ```json
/// {
///   "stats": { "proj:src/a.js": 5 },
///   "components": [{ "key": "proj:src/a.js", "name": "a.js", "path": "src/a.js" }],
///   "selected": ["proj:src/a.js"]
/// }
/// ```
///
/// `stats` may be `null` or absent to simulate statistics that are not loaded yet.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct IssueData {
    /// Issue count per file.
    #[serde(default)]
    pub stats: Option<FileStats>,
    /// Components referenced by the issues.
    #[serde(default)]
    pub components: Vec<ReferencedComponent>,
    /// Initially selected files.
    #[serde(default)]
    pub selected: Vec<String>,
}

/// What: Read and parse an issue statistics file.
///
/// Inputs:
/// - `path`: JSON file
///
/// Output:
/// - Parsed data
///
/// # Errors
/// - Returns `Err` when the file cannot be read or is not valid JSON of the expected shape
pub fn load_issue_data(path: &Path) -> Result<IssueData, String> {
    let contents = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read issue data {}: {e}", path.display()))?;
    serde_json::from_str(&contents)
        .map_err(|e| format!("Failed to parse issue data {}: {e}", path.display()))
}

impl IssueData {
    /// What: Move the loaded data into the host state.
    ///
    /// Details:
    /// - Components are keyed by their `key`
    /// - The initial selection is sorted and deduplicated, matching what facets report
    pub fn apply_to(self, app: &mut AppState) {
        app.stats = self.stats;
        app.referenced_components = self
            .components
            .into_iter()
            .map(|c| (c.key.clone(), c))
            .collect();
        let mut selected = self.selected;
        selected.sort();
        selected.dedup();
        app.query.files = selected;
        app.facet_cursor = 0;
    }
}
