use std::collections::HashMap;

/// What: Toggle `value` in a selection and return the new, sorted selection.
///
/// Inputs:
/// - `selected`: Current selection (order irrelevant, no duplicates)
/// - `value`: Identifier that was clicked
///
/// Output:
/// - Selection without `value` if it was present, with it otherwise;
///   always sorted ascending so the reported order does not depend on click order.
#[must_use]
pub fn toggle_value(selected: &[String], value: &str) -> Vec<String> {
    let mut next: Vec<String> = if selected.iter().any(|s| s == value) {
        selected.iter().filter(|s| *s != value).cloned().collect()
    } else {
        let mut v = selected.to_vec();
        v.push(value.to_string());
        v
    };
    next.sort();
    next
}

/// What: Order the keys of a statistics map for display.
///
/// Inputs:
/// - `stats`: Identifier -> count
///
/// Output:
/// - Identifiers by descending count; equal counts ordered by ascending identifier
#[must_use]
pub fn keys_by_stat_desc(stats: &HashMap<String, u64>) -> Vec<&str> {
    let mut keys: Vec<(&str, u64)> = stats.iter().map(|(k, v)| (k.as_str(), *v)).collect();
    keys.sort_by(|(ka, va), (kb, vb)| vb.cmp(va).then_with(|| ka.cmp(kb)));
    keys.into_iter().map(|(k, _)| k).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn owned(v: &[&str]) -> Vec<String> {
        v.iter().map(|s| (*s).to_string()).collect()
    }

    #[test]
    /// What: Adding a value sorts the result regardless of click order
    ///
    /// - Input: `["b.js", "a.js"]` + `"c.js"`
    /// - Output: `["a.js", "b.js", "c.js"]`
    fn toggle_adds_and_sorts() {
        assert_eq!(
            toggle_value(&owned(&["b.js", "a.js"]), "c.js"),
            owned(&["a.js", "b.js", "c.js"])
        );
    }

    #[test]
    /// What: Removing a selected value, then re-adding it, restores the selection
    fn toggle_twice_round_trips() {
        let start = owned(&["a.js", "b.js"]);
        let removed = toggle_value(&start, "a.js");
        assert_eq!(removed, owned(&["b.js"]));
        assert_eq!(toggle_value(&removed, "a.js"), start);
        assert_eq!(toggle_value(&[], "x"), owned(&["x"]));
        assert!(toggle_value(&owned(&["x"]), "x").is_empty());
    }

    #[test]
    /// What: Stats order is descending by value, ties by identifier
    fn stats_order_with_tie_break() {
        let stats: HashMap<String, u64> = [("a.js", 5), ("b.js", 12), ("d.js", 5), ("c.js", 5)]
            .into_iter()
            .map(|(k, v)| (k.to_string(), v))
            .collect();
        assert_eq!(keys_by_stat_desc(&stats), vec!["b.js", "a.js", "c.js", "d.js"]);
        assert!(keys_by_stat_desc(&HashMap::new()).is_empty());
    }
}
