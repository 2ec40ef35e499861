//! Locale resolution with fallback chain support.

use std::fs;
use std::path::Path;

use crate::i18n::detection::detect_system_locale;
use crate::i18n::loader::is_valid_locale_format;

/// Locale used when nothing else matches; always shipped.
pub const DEFAULT_LOCALE: &str = "en-US";

/// What: Resolve the effective locale.
///
/// Inputs:
/// - `requested`: Locale from the command line or settings (empty means auto-detect)
/// - `locales_dir`: Directory holding `{locale}.yml` files
///
/// Output:
/// - A locale code for which a file exists, or [`DEFAULT_LOCALE`]
///
/// Details:
/// - Priority: `requested` -> system locale -> default
/// - A code without a file falls back to another locale with the same
///   language (`de-CH` -> `de-DE`), then to the default
#[must_use]
pub fn resolve_locale(requested: &str, locales_dir: &Path) -> String {
    let trimmed = requested.trim();
    let initial = if trimmed.is_empty() {
        detect_system_locale().unwrap_or_else(|| DEFAULT_LOCALE.to_string())
    } else if is_valid_locale_format(trimmed) {
        trimmed.to_string()
    } else {
        tracing::warn!(locale = trimmed, "invalid locale code; using system locale or default");
        detect_system_locale().unwrap_or_else(|| DEFAULT_LOCALE.to_string())
    };

    let available = available_locales(locales_dir);
    let resolved = resolve_with_fallbacks(&initial, &available);
    if resolved != initial {
        tracing::debug!(from = %initial, to = %resolved, "locale resolved via fallback");
    }
    resolved
}

/// List locale codes for which a `.yml` file exists in `locales_dir`, sorted.
fn available_locales(locales_dir: &Path) -> Vec<String> {
    let Ok(entries) = fs::read_dir(locales_dir) else {
        return Vec::new();
    };
    let mut out: Vec<String> = entries
        .filter_map(Result::ok)
        .filter_map(|e| {
            let path = e.path();
            if path.extension().and_then(|x| x.to_str()) == Some("yml") {
                path.file_stem().and_then(|s| s.to_str()).map(str::to_string)
            } else {
                None
            }
        })
        .collect();
    out.sort();
    out
}

/// Pick `locale` when available, else the first available locale sharing its language.
fn resolve_with_fallbacks(locale: &str, available: &[String]) -> String {
    if available.iter().any(|a| a == locale) {
        return locale.to_string();
    }
    let language = locale.split('-').next().unwrap_or(locale).to_lowercase();
    available
        .iter()
        .find(|a| a.split('-').next().is_some_and(|l| l.eq_ignore_ascii_case(&language)))
        .cloned()
        .unwrap_or_else(|| DEFAULT_LOCALE.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    /// What: Exact, same-language and default fallbacks
    ///
    /// - Input: Available `de-DE` and `en-US`; requests for each case
    /// - Output: Exact match, language match, default
    fn fallback_chain() {
        let available = vec!["de-DE".to_string(), "en-US".to_string()];
        assert_eq!(resolve_with_fallbacks("de-DE", &available), "de-DE");
        assert_eq!(resolve_with_fallbacks("de-CH", &available), "de-DE");
        assert_eq!(resolve_with_fallbacks("de", &available), "de-DE");
        assert_eq!(resolve_with_fallbacks("ja-JP", &available), "en-US");
    }

    #[test]
    /// What: Explicit request resolves against files on disk
    fn resolve_locale_uses_directory_listing() {
        let dir = tempfile::tempdir().expect("tempdir");
        std::fs::write(dir.path().join("en-US.yml"), "en-US:\n  a: b\n").expect("write");
        std::fs::write(dir.path().join("de-DE.yml"), "de-DE:\n  a: b\n").expect("write");
        assert_eq!(resolve_locale("de-AT", dir.path()), "de-DE");
        assert_eq!(resolve_locale("en-US", dir.path()), "en-US");
        assert_eq!(resolve_locale("pt-BR", dir.path()), "en-US");
    }
}
