//! Central `AppState` container: the host that owns everything the facets display.

use std::collections::HashMap;

use crate::i18n::TranslationMap;
use crate::state::types::{FacetMode, FileStats, Query, QueryChange, ReferencedComponents};
use crate::ui::facet::{FacetEnv, FacetHandler, FacetHitMap};
use crate::ui::file_facet::FileFacetProps;

/// Application state shared by the event and UI layers.
///
/// Facets only read from it during rendering; their callbacks
/// ([`FacetHandler`]) are the only way the query and expand state change.
#[derive(Debug)]
pub struct AppState {
    /// Active issue query.
    pub query: Query,
    /// Expand state per facet property; missing entries use `facets_open_default`.
    pub open_facets: HashMap<String, bool>,
    /// Expand state of facets not toggled yet.
    pub facets_open_default: bool,
    /// Issue count per file; `None` until loaded.
    pub stats: Option<FileStats>,
    /// Component metadata keyed by component key.
    pub referenced_components: ReferencedComponents,
    /// Statistics are being refreshed.
    pub loading: bool,
    /// Unit of the facet statistics.
    pub facet_mode: FacetMode,
    /// Highlighted row in the file facet.
    pub facet_cursor: usize,
    /// Clickable regions recorded by the last draw.
    pub facet_hits: FacetHitMap,
    /// Active locale code.
    pub locale: String,
    /// Translations of the active locale.
    pub translations: TranslationMap,
    /// English translations used when a key is missing.
    pub translations_fallback: TranslationMap,
    /// Show the key hints line in the footer.
    pub show_keybinds_footer: bool,
    /// Percentage of the width used by the sidebar.
    pub sidebar_width_pct: u16,
    /// Set when the user asked to quit.
    pub should_quit: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            query: Query::default(),
            open_facets: HashMap::new(),
            facets_open_default: true,
            stats: None,
            referenced_components: ReferencedComponents::new(),
            loading: false,
            facet_mode: FacetMode::Count,
            facet_cursor: 0,
            facet_hits: FacetHitMap::default(),
            locale: crate::i18n::DEFAULT_LOCALE.to_string(),
            translations: TranslationMap::new(),
            translations_fallback: TranslationMap::new(),
            show_keybinds_footer: true,
            sidebar_width_pct: 50,
            should_quit: false,
        }
    }
}

impl AppState {
    /// Whether the facet for `property` is expanded.
    #[must_use]
    pub fn is_facet_open(&self, property: &str) -> bool {
        self.open_facets
            .get(property)
            .copied()
            .unwrap_or(self.facets_open_default)
    }

    /// Props for the file facet, borrowing from this state.
    #[must_use]
    pub fn file_facet_props(&self) -> FileFacetProps<'_> {
        FileFacetProps::new(
            &self.query.files,
            self.stats.as_ref(),
            &self.referenced_components,
        )
        .open(self.is_facet_open(crate::ui::file_facet::FILES_PROPERTY))
        .loading(self.loading)
        .facet_mode(self.facet_mode)
    }

    /// Number of rows the file facet currently shows.
    #[must_use]
    pub fn file_facet_row_count(&self) -> usize {
        if self.is_facet_open(crate::ui::file_facet::FILES_PROPERTY) {
            self.stats.as_ref().map_or(0, HashMap::len)
        } else {
            0
        }
    }

    /// What: Move the file facet cursor by `delta`, clamped to the rows.
    ///
    /// Inputs:
    /// - `delta`: Signed step
    pub fn move_facet_cursor(&mut self, delta: isize) {
        let len = self.file_facet_row_count();
        if len == 0 {
            self.facet_cursor = 0;
            return;
        }
        self.facet_cursor = self
            .facet_cursor
            .saturating_add_signed(delta)
            .min(len - 1);
    }
}

impl FacetEnv for AppState {
    fn translate(&self, namespace: &str, key: &str) -> String {
        crate::i18n::translator(self).t_ns(namespace, key)
    }

    fn format_stat(&self, stat: Option<u64>, mode: FacetMode) -> Option<String> {
        crate::util::format_facet_stat(stat, mode, &crate::i18n::translator(self))
    }
}

impl FacetHandler for AppState {
    fn on_change(&mut self, changes: QueryChange) {
        if self.query.apply(changes) {
            tracing::info!(files = ?self.query.files, "query changed");
        }
    }

    fn on_toggle(&mut self, property: &str) {
        let open = !self.is_facet_open(property);
        self.open_facets.insert(property.to_string(), open);
        tracing::debug!(property, open, "facet toggled");
        if !open {
            self.facet_cursor = 0;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app_with_stats(n: usize) -> AppState {
        AppState {
            stats: Some((0..n).map(|i| (format!("f{i}.js"), 1)).collect()),
            ..Default::default()
        }
    }

    #[test]
    /// What: Toggle flips the stored expand state starting from the default
    fn on_toggle_flips_open_state() {
        let mut app = app_with_stats(2);
        assert!(app.is_facet_open("files"));
        app.on_toggle("files");
        assert!(!app.is_facet_open("files"));
        assert_eq!(app.file_facet_row_count(), 0);
        app.on_toggle("files");
        assert!(app.is_facet_open("files"));
        assert_eq!(app.file_facet_row_count(), 2);
    }

    #[test]
    /// What: Changes are merged into the query
    fn on_change_updates_query() {
        let mut app = AppState::default();
        app.on_change(QueryChange::files(vec!["a.js".into()]));
        assert_eq!(app.query.files, vec!["a.js".to_string()]);
        app.on_change(QueryChange::default());
        assert_eq!(app.query.files, vec!["a.js".to_string()]);
    }

    #[test]
    /// What: Cursor movement clamps to the visible rows
    fn cursor_clamps() {
        let mut app = app_with_stats(3);
        app.move_facet_cursor(-1);
        assert_eq!(app.facet_cursor, 0);
        app.move_facet_cursor(10);
        assert_eq!(app.facet_cursor, 2);
        app.stats = None;
        app.move_facet_cursor(1);
        assert_eq!(app.facet_cursor, 0);
    }

    #[test]
    /// What: Props mirror the host state
    fn props_follow_state() {
        let mut app = app_with_stats(1);
        app.loading = true;
        app.facet_mode = FacetMode::Effort;
        app.facets_open_default = false;
        let props = app.file_facet_props();
        assert!(props.loading);
        assert!(!props.open);
        assert_eq!(props.facet_mode, FacetMode::Effort);
        assert!(props.stats.is_some());
    }
}
