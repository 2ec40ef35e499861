use std::fs;
use std::path::Path;

use super::parsing::{parse_bool, parse_key_value};
use super::paths::resolve_settings_config_path;
use super::types::Settings;
use crate::state::FacetMode;

/// Load user settings from `settings.conf`.
/// Falls back to `Settings::default()` when missing or invalid.
pub fn settings() -> Settings {
    resolve_settings_config_path().map_or_else(Settings::default, |p| load_settings_from(&p))
}

/// What: Load settings from a specific file.
///
/// Inputs:
/// - `path`: Settings file path
///
/// Output:
/// - Parsed settings; defaults when the file cannot be read
pub fn load_settings_from(path: &Path) -> Settings {
    match fs::read_to_string(path) {
        Ok(content) => {
            tracing::debug!(path = %path.display(), "loading settings");
            parse_settings(&content)
        }
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "failed to read settings; using defaults");
            Settings::default()
        }
    }
}

/// What: Parse `key = value` settings text.
///
/// Inputs:
/// - `content`: File contents
///
/// Output:
/// - Settings with recognized keys applied over the defaults
///
/// Details:
/// - Unknown keys and unparsable values are logged and ignored
pub(crate) fn parse_settings(content: &str) -> Settings {
    let mut out = Settings::default();
    for (key, val) in content.lines().filter_map(parse_key_value) {
        match key.as_str() {
            "locale" => val.clone_into(&mut out.locale),
            "facet_mode" => match FacetMode::from_config_key(val) {
                Some(mode) => out.facet_mode = mode,
                None => tracing::warn!(value = val, "unknown facet_mode"),
            },
            "facet_open" => {
                if let Some(b) = parse_bool(val) {
                    out.facet_open = b;
                }
            }
            "show_keybinds_footer" => {
                if let Some(b) = parse_bool(val) {
                    out.show_keybinds_footer = b;
                }
            }
            "sidebar_width_pct" => {
                if let Ok(v) = val.parse::<u16>()
                    && (10..=100).contains(&v)
                {
                    out.sidebar_width_pct = v;
                }
            }
            other => tracing::debug!(key = other, "ignoring unknown settings key"),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    /// What: Recognized keys override defaults; bad values are ignored
    ///
    /// - Input: Settings text with valid, invalid and unknown entries
    /// - Output: Valid entries applied, others left at defaults
    fn parse_settings_applies_known_keys() {
        let s = parse_settings(
            "# settings\nlocale = de-DE\nfacet_mode = effort\nfacet_open = no\n\
             show_keybinds_footer = maybe\nsidebar_width_pct = 500\nunknown = 1\n",
        );
        assert_eq!(s.locale, "de-DE");
        assert_eq!(s.facet_mode, FacetMode::Effort);
        assert!(!s.facet_open);
        assert!(s.show_keybinds_footer);
        assert_eq!(s.sidebar_width_pct, Settings::default().sidebar_width_pct);
    }

    #[test]
    /// What: Reading from disk, and defaults for a missing file
    fn load_settings_from_file_and_missing() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("settings.conf");
        fs::write(&path, "sidebar_width_pct = 70\n").expect("write settings");
        assert_eq!(load_settings_from(&path).sidebar_width_pct, 70);
        assert_eq!(
            load_settings_from(&dir.path().join("missing.conf")),
            Settings::default()
        );
    }
}
