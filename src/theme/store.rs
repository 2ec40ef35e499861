use std::fs;
use std::path::Path;
use std::sync::OnceLock;

use super::parsing::{parse_color_value, parse_key_value};
use super::paths::resolve_theme_config_path;
use super::types::Theme;

/// Global theme, loaded once on first use.
static THEME_STORE: OnceLock<Theme> = OnceLock::new();

/// What: Apply `name = color` overrides on top of the default palette.
///
/// Inputs:
/// - `content`: `theme.conf` text
///
/// Output:
/// - Theme with every recognized, parsable entry replaced
pub(crate) fn parse_theme(content: &str) -> Theme {
    let mut th = Theme::default();
    for (key, val) in content.lines().filter_map(parse_key_value) {
        let Some(color) = parse_color_value(val) else {
            tracing::warn!(key = %key, value = val, "invalid theme color");
            continue;
        };
        let slot = match key.as_str() {
            "base" => &mut th.base,
            "surface1" => &mut th.surface1,
            "surface2" => &mut th.surface2,
            "overlay1" => &mut th.overlay1,
            "text" => &mut th.text,
            "subtext0" => &mut th.subtext0,
            "sapphire" => &mut th.sapphire,
            "mauve" => &mut th.mauve,
            "green" => &mut th.green,
            "yellow" => &mut th.yellow,
            "red" => &mut th.red,
            "lavender" => &mut th.lavender,
            _ => {
                tracing::debug!(key = %key, "ignoring unknown theme key");
                continue;
            }
        };
        *slot = color;
    }
    th
}

/// Load the theme from `path`, or the default palette when unreadable.
fn load_theme_from_file(path: &Path) -> Theme {
    match fs::read_to_string(path) {
        Ok(content) => {
            tracing::info!(path = %path.display(), "loaded theme configuration");
            parse_theme(&content)
        }
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "failed to read theme; using defaults");
            Theme::default()
        }
    }
}

/// Return the application's theme palette, loading `theme.conf` overrides if present.
pub fn theme() -> Theme {
    *THEME_STORE.get_or_init(|| {
        resolve_theme_config_path().map_or_else(Theme::default, |p| load_theme_from_file(&p))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::style::Color;

    #[test]
    /// What: Overrides replace only the named colors
    fn parse_theme_overrides() {
        let th = parse_theme("green = #000001\nred = 1,2,3\nmauve = nonsense\nunknown = #ffffff\n");
        assert_eq!(th.green, Color::Rgb(0, 0, 1));
        assert_eq!(th.red, Color::Rgb(1, 2, 3));
        assert_eq!(th.mauve, Theme::default().mauve);
    }
}
