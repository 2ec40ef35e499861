//! Theme palette, user settings and config paths.

/// Configuration parsing utilities.
mod parsing;
/// Path resolution for config directories.
mod paths;
/// Settings access.
mod settings;
/// Theme store and caching.
mod store;
/// Theme type definitions.
mod types;

pub use paths::{config_dir, logs_dir};
pub use settings::{load_settings_from, settings};
pub use store::theme;
pub use types::{Settings, Theme};
