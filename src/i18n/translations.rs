//! Translation maps and the lookup chain: active locale, English, key.

use std::collections::HashMap;

/// Flattened translations: `issues.facet.files` -> `Files`.
pub type TranslationMap = HashMap<String, String>;

/// What: Resolve `key` against the active locale, then English.
///
/// Inputs:
/// - `key`: Dot-notation key
/// - `primary`: Active locale
/// - `fallback`: English
///
/// Output:
/// - The first translation found, else the key itself
///
/// Details:
/// - Fallback hits and misses are logged at debug level; a missing
///   string shows up in the UI as its key
pub fn translate_with_fallback(key: &str, primary: &TranslationMap, fallback: &TranslationMap) -> String {
    if let Some(s) = primary.get(key) {
        return s.clone();
    }
    if let Some(s) = fallback.get(key) {
        tracing::debug!(key, "translation missing in active locale; using English");
        return s.clone();
    }
    tracing::debug!(key, "translation missing");
    key.to_string()
}

/// Borrowed view over a primary and a fallback translation map.
///
/// Lets helpers such as the statistic formatter translate without
/// depending on the whole application state.
#[derive(Debug, Clone, Copy)]
pub struct Translator<'a> {
    /// Active locale.
    primary: &'a TranslationMap,
    /// English.
    fallback: &'a TranslationMap,
}

impl<'a> Translator<'a> {
    /// Create a translator over the two maps.
    #[must_use]
    pub const fn new(primary: &'a TranslationMap, fallback: &'a TranslationMap) -> Self {
        Self { primary, fallback }
    }

    /// Translate `key`.
    #[must_use]
    pub fn t(&self, key: &str) -> String {
        translate_with_fallback(key, self.primary, self.fallback)
    }

    /// Translate `key`, replacing the first `{}` with `arg`.
    #[must_use]
    pub fn t_fmt1<T: std::fmt::Display>(&self, key: &str, arg: T) -> String {
        self.t(key).replacen("{}", &arg.to_string(), 1)
    }

    /// Translate the key `namespace.key`, e.g. `issues.facet` + `files`.
    #[must_use]
    pub fn t_ns(&self, namespace: &str, key: &str) -> String {
        self.t(&format!("{namespace}.{key}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn map(entries: &[(&str, &str)]) -> TranslationMap {
        entries
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect()
    }

    #[test]
    /// What: German wins, English fills gaps, unknown keys come back verbatim
    fn lookup_chain() {
        let de = map(&[("issues.facet.files", "Dateien")]);
        let en = map(&[("issues.facet.files", "Files"), ("app.facets.clear", "Clear")]);
        assert_eq!(translate_with_fallback("issues.facet.files", &de, &en), "Dateien");
        assert_eq!(translate_with_fallback("app.facets.clear", &de, &en), "Clear");
        assert_eq!(
            translate_with_fallback("app.facets.missing", &de, &en),
            "app.facets.missing"
        );
    }

    #[test]
    /// What: Namespaced and formatted lookups through a `Translator`
    fn translator_namespace_and_placeholders() {
        let en = map(&[("issues.facet.files", "Files"), ("work_duration.x_days", "{}d")]);
        let empty = TranslationMap::new();
        let tr = Translator::new(&empty, &en);
        assert_eq!(tr.t_ns("issues.facet", "files"), "Files");
        assert_eq!(tr.t_fmt1("work_duration.x_days", 3), "3d");
        assert_eq!(tr.t_ns("issues.facet", "rules"), "issues.facet.rules");
    }
}
