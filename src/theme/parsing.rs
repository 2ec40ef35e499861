use ratatui::style::Color;

/// What: Remove a trailing `# ...` or `// ...` comment from a config value.
///
/// Inputs:
/// - `s`: Raw value text after the `=`
///
/// Output:
/// - Trimmed value without the comment. A leading `#` (hex colors) is kept.
pub(crate) fn strip_inline_comment(s: &str) -> &str {
    let mut t = s.trim();
    if let Some(i) = t.find("//") {
        t = &t[..i];
    }
    let hash = t
        .strip_prefix('#')
        .map_or_else(|| t.find('#'), |rest| rest.find('#').map(|j| j + 1));
    if let Some(i) = hash {
        t = &t[..i];
    }
    t.trim()
}

/// What: Split a `key = value` config line.
///
/// Inputs:
/// - `line`: One line of a config file
///
/// Output:
/// - `Some((normalized_key, value))`; `None` for blanks, comments and lines without `=`
///
/// Details:
/// - Keys are lowercased and `.`, `-`, spaces become `_`.
pub(crate) fn parse_key_value(line: &str) -> Option<(String, &str)> {
    let trimmed = line.trim();
    if trimmed.is_empty() || trimmed.starts_with('#') || trimmed.starts_with("//") {
        return None;
    }
    let (raw_key, raw_val) = trimmed.split_once('=')?;
    let key = raw_key.trim().to_lowercase().replace(['.', '-', ' '], "_");
    Some((key, strip_inline_comment(raw_val)))
}

/// Parse `true/false`, `yes/no`, `on/off`, `1/0`.
pub(crate) fn parse_bool(s: &str) -> Option<bool> {
    match s.trim().to_ascii_lowercase().as_str() {
        "true" | "yes" | "on" | "1" => Some(true),
        "false" | "no" | "off" | "0" => Some(false),
        _ => None,
    }
}

/// What: Parse a color literal from configuration text into a [`Color`].
///
/// Inputs:
/// - `s`: `#RRGGBB` hex or `R,G,B` decimal triplet
///
/// Output:
/// - `Some(Color)` for recognized formats; `None` otherwise.
pub(crate) fn parse_color_value(s: &str) -> Option<Color> {
    let t = strip_inline_comment(s);
    if let Some(hex) = t.strip_prefix('#') {
        if hex.len() != 6 {
            return None;
        }
        let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
        let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
        let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
        return Some(Color::Rgb(r, g, b));
    }
    let channels: Vec<u8> = t
        .split(',')
        .map(|p| p.trim().parse::<u8>())
        .collect::<Result<_, _>>()
        .ok()?;
    match channels.as_slice() {
        [r, g, b] => Some(Color::Rgb(*r, *g, *b)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    /// What: Comment stripping keeps hex colors intact
    fn strip_inline_comment_variants() {
        assert_eq!(strip_inline_comment(" effort # default"), "effort");
        assert_eq!(strip_inline_comment("#aabbcc # accent"), "#aabbcc");
        assert_eq!(strip_inline_comment("true // on"), "true");
    }

    #[test]
    /// What: Key/value lines normalize keys and skip comments
    fn key_value_lines() {
        assert_eq!(
            parse_key_value("Facet-Mode = effort # unit"),
            Some(("facet_mode".to_string(), "effort"))
        );
        assert_eq!(parse_key_value("# facet_mode = count"), None);
        assert_eq!(parse_key_value("no equals sign"), None);
        assert_eq!(parse_key_value("   "), None);
    }

    #[test]
    fn bools_and_colors() {
        assert_eq!(parse_bool("Yes"), Some(true));
        assert_eq!(parse_bool("off"), Some(false));
        assert_eq!(parse_bool("maybe"), None);
        assert_eq!(parse_color_value("#ff0080"), Some(Color::Rgb(255, 0, 128)));
        assert_eq!(parse_color_value("1, 2, 3"), Some(Color::Rgb(1, 2, 3)));
        assert_eq!(parse_color_value("#fff"), None);
        assert_eq!(parse_color_value("300,0,0"), None);
    }
}
