//! Generic facet primitives: a box, a header, and an item list.
//!
//! Facets describe what to show as plain view values ([`FacetBoxView`]);
//! [`draw`] turns such a description into ratatui output and records where
//! the clickable parts ended up ([`FacetHitMap`]). User intent flows back
//! through [`FacetHandler`], and host services (translation, formatting,
//! path shortening) come in through [`FacetEnv`].

mod draw;

pub use draw::{draw_facet_box, visible_window};

use crate::state::{FacetMode, QueryChange};
use crate::ui::icons::Qualifier;

/// Rectangle as `(x, y, width, height)` in terminal cells.
pub type CellRect = (u16, u16, u16, u16);

/// Services a facet needs from the surrounding application.
pub trait FacetEnv {
    /// Translate `namespace.key`.
    fn translate(&self, namespace: &str, key: &str) -> String;

    /// Format a statistic for display; `None` renders an empty cell.
    fn format_stat(&self, stat: Option<u64>, mode: FacetMode) -> Option<String>;

    /// Shorten a component path for display.
    fn collapse_path(&self, path: &str, limit: usize) -> String {
        crate::util::collapse_path(path, limit)
    }
}

/// Receiver of facet callbacks. The facet never mutates anything itself.
pub trait FacetHandler {
    /// The selection of a facet changed.
    fn on_change(&mut self, changes: QueryChange);

    /// The header of facet `property` was clicked.
    fn on_toggle(&mut self, property: &str);
}

/// A callback invocation captured as a value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FacetEvent {
    /// See [`FacetHandler::on_change`].
    Change(QueryChange),
    /// See [`FacetHandler::on_toggle`].
    Toggle(String),
}

impl FacetEvent {
    /// Replay this event into `handler`.
    pub fn dispatch(self, handler: &mut dyn FacetHandler) {
        match self {
            Self::Change(changes) => handler.on_change(changes),
            Self::Toggle(property) => handler.on_toggle(&property),
        }
    }
}

/// Records callbacks so they can be inspected or replayed once the facet
/// no longer borrows the host state.
impl FacetHandler for Vec<FacetEvent> {
    fn on_change(&mut self, changes: QueryChange) {
        self.push(FacetEvent::Change(changes));
    }

    fn on_toggle(&mut self, property: &str) {
        self.push(FacetEvent::Toggle(property.to_string()));
    }
}

/// Container grouping a header and an optional item list under a property.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FacetBoxView {
    /// Query property the facet filters on, e.g. `files`.
    pub property: &'static str,
    /// Header row.
    pub header: FacetHeaderView,
    /// Item rows; `None` when collapsed or when statistics are not loaded.
    pub list: Option<FacetItemsListView>,
}

/// Header row: title, expand state and summary of the selected values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FacetHeaderView {
    /// Translated facet title.
    pub name: String,
    /// Whether the facet is expanded.
    pub open: bool,
    /// Display names of the selected values.
    pub values: Vec<String>,
}

/// Ordered rows of a facet.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FacetItemsListView {
    /// Rows in display order.
    pub items: Vec<FacetItemView>,
}

/// Visible name of a row: icon and text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FacetItemName {
    /// Icon drawn before the text.
    pub icon: Qualifier,
    /// Display text.
    pub text: String,
}

/// One selectable row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FacetItemView {
    /// Value is part of the current selection.
    pub active: bool,
    /// Statistics are being refreshed.
    pub loading: bool,
    /// What the row shows.
    pub name: FacetItemName,
    /// Pre-formatted statistic, empty cell when `None`.
    pub stat: Option<String>,
    /// Identifier passed back on click.
    pub value: String,
}

/// Clickable regions recorded by the last draw.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FacetHitMap {
    /// Property of the drawn facet.
    pub property: Option<&'static str>,
    /// Header row (toggles open/closed).
    pub header: Option<CellRect>,
    /// Clear control inside the header row.
    pub clear: Option<CellRect>,
    /// Visible rows with their item values.
    pub items: Vec<(CellRect, String)>,
}

/// What a click landed on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FacetTarget {
    /// The clear control.
    Clear,
    /// The header outside the clear control.
    Header,
    /// A row carrying this value.
    Item(String),
}

/// Whether the point lies inside `rect` (inclusive start, exclusive end).
const fn is_point_in_rect(mx: u16, my: u16, rect: CellRect) -> bool {
    let (x, y, w, h) = rect;
    mx >= x && mx < x.saturating_add(w) && my >= y && my < y.saturating_add(h)
}

impl FacetHitMap {
    /// What: Resolve a mouse position against the recorded regions.
    ///
    /// Inputs:
    /// - `mx`, `my`: Column and row of the click
    ///
    /// Output:
    /// - The target hit, checking the clear control before the rest of the header
    #[must_use]
    pub fn hit(&self, mx: u16, my: u16) -> Option<FacetTarget> {
        if self.clear.is_some_and(|r| is_point_in_rect(mx, my, r)) {
            return Some(FacetTarget::Clear);
        }
        if self.header.is_some_and(|r| is_point_in_rect(mx, my, r)) {
            return Some(FacetTarget::Header);
        }
        self.items
            .iter()
            .find(|(r, _)| is_point_in_rect(mx, my, *r))
            .map(|(_, value)| FacetTarget::Item(value.clone()))
    }
}
