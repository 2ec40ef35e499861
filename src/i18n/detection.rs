//! System locale detection.

use std::env;

/// What: Detect the system locale from environment variables.
///
/// Output:
/// - Locale code such as `de-DE`, or `None` if nothing usable is set
///
/// Details:
/// - Checks `LC_ALL`, `LC_MESSAGES`, then `LANG`
pub fn detect_system_locale() -> Option<String> {
    ["LC_ALL", "LC_MESSAGES", "LANG"]
        .iter()
        .filter_map(|var| env::var(var).ok())
        .find_map(|value| parse_locale_string(&value))
}

/// What: Normalize an environment locale string.
///
/// Inputs:
/// - `locale_str`: e.g. `de_DE.UTF-8`, `en_US@euro`, `fr`
///
/// Output:
/// - `language-REGION` or bare `language`; `None` for empty, `C` and `POSIX`
pub(crate) fn parse_locale_string(locale_str: &str) -> Option<String> {
    let trimmed = locale_str.trim();
    let base = trimmed.split(['.', '@']).next()?;
    if base.is_empty() || base.eq_ignore_ascii_case("c") || base.eq_ignore_ascii_case("posix") {
        return None;
    }

    let normalized = base.replace('_', "-");
    let mut parts = normalized.split('-');
    let language = parts.next()?.to_lowercase();
    match parts.next() {
        Some(region) if !region.is_empty() => Some(format!("{language}-{}", region.to_uppercase())),
        _ => Some(language),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    /// What: Environment locale strings normalize to BCP 47-like codes
    fn parse_locale_string_variants() {
        assert_eq!(parse_locale_string("de_DE.UTF-8"), Some("de-DE".to_string()));
        assert_eq!(parse_locale_string("en_us.utf8"), Some("en-US".to_string()));
        assert_eq!(parse_locale_string("de_DE@euro"), Some("de-DE".to_string()));
        assert_eq!(parse_locale_string("fr"), Some("fr".to_string()));
        assert_eq!(parse_locale_string("C.UTF-8"), None);
        assert_eq!(parse_locale_string("POSIX"), None);
        assert_eq!(parse_locale_string("   "), None);
    }
}
