//! Internationalization (i18n): locale detection, resolution, loading and lookup.
//!
//! Locale files live in `config/locales/{locale}.yml` and hold a nested YAML
//! structure below a top-level locale key:
//!
//! ```yaml
//! en-US:
//!   issues:
//!     facet:
//!       files: "File"
//! ```
//!
//! which becomes accessible as `issues.facet.files`.
//!
//! # Error Handling
//!
//! - Missing locale files fall back to English
//! - Missing translation keys return the key itself and log at debug level
//! - Nothing here aborts the application

mod detection;
mod loader;
mod resolver;
pub mod translations;

pub use detection::detect_system_locale;
pub use loader::load_locale_file;
pub use resolver::{DEFAULT_LOCALE, resolve_locale};
pub use translations::{TranslationMap, Translator, translate_with_fallback};

use std::path::PathBuf;

use crate::state::AppState;

/// What: Find the locales directory in development and installed locations.
///
/// Output:
/// - `Some(PathBuf)` pointing to the first existing locales directory, or `None`
///
/// Details:
/// - Tries `CARGO_MANIFEST_DIR/config/locales` first, then
///   `/usr/share/issue-facets/locales`
#[must_use]
pub fn find_locales_dir() -> Option<PathBuf> {
    let dev_path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("config")
        .join("locales");
    if dev_path.is_dir() {
        return Some(dev_path);
    }

    let installed_path = PathBuf::from("/usr/share/issue-facets/locales");
    if installed_path.is_dir() {
        return Some(installed_path);
    }

    None
}

/// What: Load the primary and English fallback translation maps.
///
/// Inputs:
/// - `requested_locale`: Locale from CLI or settings; empty means auto-detect
///
/// Output:
/// - `(locale, primary, fallback)`; maps are empty when no locales directory exists
///
/// Details:
/// - Load failures are logged and leave the affected map empty, so lookups
///   degrade to returning keys
#[must_use]
pub fn load_translations(requested_locale: &str) -> (String, TranslationMap, TranslationMap) {
    let Some(dir) = find_locales_dir() else {
        tracing::warn!("locales directory not found; translation keys will be shown verbatim");
        return (DEFAULT_LOCALE.to_string(), TranslationMap::new(), TranslationMap::new());
    };

    let locale = resolve_locale(requested_locale, &dir);
    let fallback = load_locale_file(DEFAULT_LOCALE, &dir).unwrap_or_else(|e| {
        tracing::warn!(error = %e, "failed to load fallback locale");
        TranslationMap::new()
    });
    let primary = if locale == DEFAULT_LOCALE {
        fallback.clone()
    } else {
        load_locale_file(&locale, &dir).unwrap_or_else(|e| {
            tracing::warn!(locale = %locale, error = %e, "failed to load locale; using English");
            TranslationMap::new()
        })
    };
    tracing::info!(locale = %locale, keys = primary.len(), "translations loaded");
    (locale, primary, fallback)
}

/// Get a translation for `key` from the application state.
#[must_use]
pub fn t(app: &AppState, key: &str) -> String {
    translate_with_fallback(key, &app.translations, &app.translations_fallback)
}

/// Get a translation with a single format argument.
#[must_use]
pub fn t_fmt1<T: std::fmt::Display>(app: &AppState, key: &str, arg: T) -> String {
    translator(app).t_fmt1(key, arg)
}

/// Borrow the application's translation maps as a [`Translator`].
#[must_use]
pub const fn translator(app: &AppState) -> Translator<'_> {
    Translator::new(&app.translations, &app.translations_fallback)
}
