//! Library entry for issue-facets exposing the facet component and its host for integration tests.

pub mod app;
pub mod args;
pub mod events;
pub mod i18n;
pub mod logic;
pub mod state;
pub mod theme;
pub mod ui;
pub mod util;
