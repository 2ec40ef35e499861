//! Facet selection and ordering logic, independent of rendering.

pub mod facet;

pub use facet::{keys_by_stat_desc, toggle_value};
