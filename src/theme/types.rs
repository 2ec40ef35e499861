use ratatui::style::Color;

use crate::state::FacetMode;

/// Application theme palette used by rendering code.
///
/// All colors are provided as [`ratatui::style::Color`] and are suitable for
/// direct use with widgets and styles.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Theme {
    /// Primary background color for the canvas.
    pub base: Color,
    /// Subtle surface color used behind the cursor row.
    pub surface1: Color,
    /// Stronger surface color used behind buttons.
    pub surface2: Color,
    /// Muted border and secondary text color.
    pub overlay1: Color,
    /// Primary foreground text color.
    pub text: Color,
    /// Low-emphasis text, e.g. loading rows and hints.
    pub subtext0: Color,
    /// Accent used for the header summary values.
    pub sapphire: Color,
    /// Accent used for the facet title and controls.
    pub mauve: Color,
    /// Active (selected) row color.
    pub green: Color,
    /// File icon color.
    pub yellow: Color,
    /// Clear control color.
    pub red: Color,
    /// Statistic column color.
    pub lavender: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            base: Color::Rgb(0x1e, 0x1e, 0x2e),
            surface1: Color::Rgb(0x45, 0x47, 0x5a),
            surface2: Color::Rgb(0x58, 0x5b, 0x70),
            overlay1: Color::Rgb(0x7f, 0x84, 0x9c),
            text: Color::Rgb(0xcd, 0xd6, 0xf4),
            subtext0: Color::Rgb(0xa6, 0xad, 0xc8),
            sapphire: Color::Rgb(0x74, 0xc7, 0xec),
            mauve: Color::Rgb(0xcb, 0xa6, 0xf7),
            green: Color::Rgb(0xa6, 0xe3, 0xa1),
            yellow: Color::Rgb(0xf9, 0xe2, 0xaf),
            red: Color::Rgb(0xf3, 0x8b, 0xa8),
            lavender: Color::Rgb(0xb4, 0xbe, 0xfe),
        }
    }
}

/// User-configurable application settings parsed from `settings.conf`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Settings {
    /// Locale code; empty means auto-detect from the environment.
    pub locale: String,
    /// Initial statistic unit of the facets.
    pub facet_mode: FacetMode,
    /// Whether facets start expanded.
    pub facet_open: bool,
    /// Show the key hints line in the footer.
    pub show_keybinds_footer: bool,
    /// Percentage of the screen width used by the facet sidebar.
    pub sidebar_width_pct: u16,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            locale: String::new(),
            facet_mode: FacetMode::Count,
            facet_open: true,
            show_keybinds_footer: true,
            sidebar_width_pct: 50,
        }
    }
}
