//! Application state and the value types it is built from.

pub mod app_state;
pub mod types;

pub use app_state::AppState;
pub use types::{
    FacetMode, FileStats, Query, QueryChange, ReferencedComponent, ReferencedComponents,
};
