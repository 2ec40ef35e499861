//! The file facet: one row per file with its issue count, selectable.
//!
//! The facet is a controlled view. Selection, expand state, statistics and
//! component metadata all belong to the host and arrive as
//! [`FileFacetProps`]; clicks are reported through a [`FacetHandler`] and
//! never applied locally.

use crate::logic::{keys_by_stat_desc, toggle_value};
use crate::state::{FacetMode, FileStats, QueryChange, ReferencedComponents};
use crate::ui::facet::{
    FacetBoxView, FacetEnv, FacetHandler, FacetHeaderView, FacetItemName, FacetItemView,
    FacetItemsListView,
};
use crate::ui::icons::Qualifier;

/// Query property filtered by this facet.
pub const FILES_PROPERTY: &str = "files";

/// Translation namespace of facet titles.
const FACET_TITLE_NAMESPACE: &str = "issues.facet";

/// Length budget for the middle part of collapsed file paths.
const PATH_COLLAPSE_LIMIT: usize = 15;

/// Inputs of the file facet for one render.
#[derive(Debug, Clone, Copy)]
pub struct FileFacetProps<'a> {
    /// Unit used to format the statistics.
    pub facet_mode: FacetMode,
    /// Currently selected file identifiers.
    pub files: &'a [String],
    /// Statistics are being refreshed.
    pub loading: bool,
    /// Facet is expanded.
    pub open: bool,
    /// Metadata used to resolve display names.
    pub referenced_components: &'a ReferencedComponents,
    /// Issue count per file; `None` while not loaded.
    pub stats: Option<&'a FileStats>,
}

impl<'a> FileFacetProps<'a> {
    /// What: Props with the defaults applied: open, not loading, count mode.
    ///
    /// Inputs:
    /// - `files`: Current selection
    /// - `stats`: Statistics, if loaded
    /// - `referenced_components`: Component metadata
    #[must_use]
    pub const fn new(
        files: &'a [String],
        stats: Option<&'a FileStats>,
        referenced_components: &'a ReferencedComponents,
    ) -> Self {
        Self {
            facet_mode: FacetMode::Count,
            files,
            loading: false,
            open: true,
            referenced_components,
            stats,
        }
    }

    /// Set whether the facet is expanded.
    #[must_use]
    pub const fn open(mut self, open: bool) -> Self {
        self.open = open;
        self
    }

    /// Set the loading flag forwarded to the rows.
    #[must_use]
    pub const fn loading(mut self, loading: bool) -> Self {
        self.loading = loading;
        self
    }

    /// Set the statistic unit.
    #[must_use]
    pub const fn facet_mode(mut self, mode: FacetMode) -> Self {
        self.facet_mode = mode;
        self
    }
}

/// File facet component.
#[derive(Debug, Clone, Copy)]
pub struct FileFacet<'a> {
    /// Inputs of the current render.
    props: FileFacetProps<'a>,
}

impl<'a> FileFacet<'a> {
    /// Query property this facet controls.
    pub const PROPERTY: &'static str = FILES_PROPERTY;

    /// Create the facet for one render.
    #[must_use]
    pub const fn new(props: FileFacetProps<'a>) -> Self {
        Self { props }
    }

    /// What: A row was clicked.
    ///
    /// Inputs:
    /// - `item_value`: File identifier of the row
    /// - `handler`: Receives the new selection
    ///
    /// Details:
    /// - Removes the file when selected, adds it otherwise; the reported list is sorted.
    pub fn handle_item_click(&self, item_value: &str, handler: &mut dyn FacetHandler) {
        let new_value = toggle_value(self.props.files, item_value);
        tracing::debug!(file = item_value, selected = new_value.len(), "file facet item clicked");
        handler.on_change(QueryChange::files(new_value));
    }

    /// The header was clicked; asks the host to flip the expand state.
    pub fn handle_header_click(&self, handler: &mut dyn FacetHandler) {
        handler.on_toggle(Self::PROPERTY);
    }

    /// The clear control was clicked; always reports an empty selection.
    pub fn handle_clear(&self, handler: &mut dyn FacetHandler) {
        handler.on_change(QueryChange::files(Vec::new()));
    }

    fn get_stat(&self, file: &str) -> Option<u64> {
        self.props.stats.and_then(|stats| stats.get(file).copied())
    }

    /// Display name: collapsed component path when known, raw identifier otherwise.
    fn get_file_name(&self, file: &str, env: &dyn FacetEnv) -> String {
        self.props.referenced_components.get(file).map_or_else(
            || file.to_string(),
            |component| env.collapse_path(&component.path, PATH_COLLAPSE_LIMIT),
        )
    }

    fn render_name(&self, file: &str, env: &dyn FacetEnv) -> FacetItemName {
        FacetItemName {
            icon: Qualifier::File,
            text: self.get_file_name(file, env),
        }
    }

    fn render_list(&self, env: &dyn FacetEnv) -> Option<FacetItemsListView> {
        let stats = self.props.stats?;
        let items = keys_by_stat_desc(stats)
            .into_iter()
            .map(|file| FacetItemView {
                active: self.props.files.iter().any(|f| f == file),
                loading: self.props.loading,
                name: self.render_name(file, env),
                stat: env.format_stat(self.get_stat(file), self.props.facet_mode),
                value: file.to_string(),
            })
            .collect();
        Some(FacetItemsListView { items })
    }

    /// What: Describe the facet for the current props.
    ///
    /// Inputs:
    /// - `env`: Translation, formatting and path services
    ///
    /// Output:
    /// - Box with the header (title, open flag, selected display names) and,
    ///   when open and statistics are loaded, one row per statistics key
    #[must_use]
    pub fn render(&self, env: &dyn FacetEnv) -> FacetBoxView {
        let values = self
            .props
            .files
            .iter()
            .map(|file| self.get_file_name(file, env))
            .collect();
        FacetBoxView {
            property: Self::PROPERTY,
            header: FacetHeaderView {
                name: env.translate(FACET_TITLE_NAMESPACE, Self::PROPERTY),
                open: self.props.open,
                values,
            },
            list: if self.props.open {
                self.render_list(env)
            } else {
                None
            },
        }
    }
}
