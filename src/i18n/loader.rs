//! Locale files: `config/locales/<locale>.yml`, one top-level key naming the locale.

use std::fs;
use std::path::Path;

use serde_norway::Value;

use crate::i18n::translations::TranslationMap;

/// What: Read `<locales_dir>/<locale>.yml` into a flat translation map.
///
/// Inputs:
/// - `locale`: Locale code such as `de-DE`
/// - `locales_dir`: Directory holding the locale files
///
/// Output:
/// - Map from dot-notation keys to strings
///
/// # Errors
/// - Returns `Err` for malformed locale codes, which also keeps paths like `../x` out
/// - Returns `Err` when the file is missing, unreadable, empty or not YAML
pub fn load_locale_file(locale: &str, locales_dir: &Path) -> Result<TranslationMap, String> {
    if !is_valid_locale_format(locale) {
        return Err(format!("Invalid locale code '{locale}' (expected e.g. en-US)"));
    }
    let path = locales_dir.join(format!("{locale}.yml"));
    let contents = fs::read_to_string(&path)
        .map_err(|e| format!("Failed to read locale file {}: {e}", path.display()))?;
    if contents.trim().is_empty() {
        return Err(format!("Locale file is empty: {}", path.display()));
    }
    let doc: Value = serde_norway::from_str(&contents)
        .map_err(|e| format!("Failed to parse locale file {}: {e}", path.display()))?;

    let mut out = TranslationMap::new();
    // The top-level key only names the locale; it is not part of the keys.
    if let Value::Mapping(root) = &doc {
        for (_, body) in root {
            collect_strings(body, String::new(), &mut out);
        }
    }
    Ok(out)
}

/// Whether `locale` looks like `language[-REGION]`: alphanumeric parts joined by single dashes.
pub(crate) fn is_valid_locale_format(locale: &str) -> bool {
    locale.len() <= 20
        && !locale.is_empty()
        && locale
            .split('-')
            .all(|part| !part.is_empty() && part.chars().all(char::is_alphanumeric))
}

/// Walk nested mappings, storing scalar leaves under their dotted path.
fn collect_strings(value: &Value, path: String, out: &mut TranslationMap) {
    let leaf = match value {
        Value::Mapping(map) => {
            for (k, v) in map {
                let Some(k) = k.as_str() else { continue };
                let child = if path.is_empty() {
                    k.to_string()
                } else {
                    format!("{path}.{k}")
                };
                collect_strings(v, child, out);
            }
            return;
        }
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        _ => return,
    };
    out.insert(path, leaf);
}
