//! Small string helpers shared by the facet rendering code.
//!
//! - Collapsing long component paths for display
//! - Fitting text into a fixed number of terminal cells
//! - UTC timestamps for log lines
//! - Formatting facet statistics (see [`format`])

pub mod format;

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

pub use format::{format_facet_stat, format_short_int, format_work_duration};

/// Marker inserted where path segments were dropped.
const ELLIPSIS_SEGMENT: &str = "...";

/// What: Shorten a `/`-separated path by dropping leading middle segments.
///
/// Inputs:
/// - `path`: Component path, e.g. `src/main/java/org/acme/Foo.java`
/// - `limit`: Maximum length of the middle part (segments joined by `,`)
///
/// Output:
/// - The path itself when it has at most two segments or already fits;
///   otherwise `head/.../<remaining middle>/tail`.
///
/// Details:
/// - The first and last segments are always kept.
/// - Middle segments are removed from the front until the comma-joined
///   remainder is no longer than `limit`.
#[must_use]
pub fn collapse_path(path: &str, limit: usize) -> String {
    let tokens: Vec<&str> = path.split('/').collect();
    if tokens.len() <= 2 {
        return path.to_string();
    }

    let head = tokens[0];
    let tail = tokens[tokens.len() - 1];
    let mut middle: &[&str] = &tokens[1..tokens.len() - 1];
    let mut cut = false;
    while !middle.is_empty() && middle.join(",").len() > limit {
        middle = &middle[1..];
        cut = true;
    }

    let mut body: Vec<&str> = Vec::with_capacity(middle.len() + 3);
    body.push(head);
    if cut {
        body.push(ELLIPSIS_SEGMENT);
    }
    body.extend_from_slice(middle);
    body.push(tail);
    body.join("/")
}

/// What: Fit a string into `max_width` terminal cells.
///
/// Inputs:
/// - `s`: Text to fit
/// - `max_width`: Available cells
///
/// Output:
/// - `s` unchanged when it fits; otherwise a prefix followed by `…`.
///   Returns an empty string when `max_width` is zero.
#[must_use]
pub fn fit_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }
    if max_width == 0 {
        return String::new();
    }
    let budget = max_width - 1;
    let mut used = 0;
    let mut out = String::new();
    for ch in s.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w > budget {
            break;
        }
        used += w;
        out.push(ch);
    }
    out.push('…');
    out
}

/// What: Format seconds since the Unix epoch as `YYYY-MM-DD HH:MM:SS` (UTC).
///
/// Details:
/// - Uses the days-to-civil conversion on a 400-year era, so no calendar
///   tables are needed.
#[must_use]
pub fn utc_timestamp(secs: u64) -> String {
    let days = secs / 86_400;
    let sod = secs % 86_400;
    let (hour, minute, second) = (sod / 3600, (sod % 3600) / 60, sod % 60);

    // Shift the epoch to 0000-03-01 so leap days fall at the end of a year.
    let z = days + 719_468;
    let era = z / 146_097;
    let doe = z % 146_097;
    let yoe = (doe - doe / 1460 + doe / 36_524 - doe / 146_096) / 365;
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
    let mp = (5 * doy + 2) / 153;
    let day = doy - (153 * mp + 2) / 5 + 1;
    let month = if mp < 10 { mp + 3 } else { mp - 9 };
    let year = yoe + era * 400 + u64::from(month <= 2);

    format!("{year:04}-{month:02}-{day:02} {hour:02}:{minute:02}:{second:02}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    /// What: Short paths are returned untouched
    ///
    /// - Input: Paths with one or two segments, and a path whose middle fits
    /// - Output: Same string back
    fn collapse_path_keeps_short_paths() {
        assert_eq!(collapse_path("Foo.java", 15), "Foo.java");
        assert_eq!(collapse_path("src/Foo.java", 15), "src/Foo.java");
        assert_eq!(collapse_path("src/main/Foo.java", 15), "src/main/Foo.java");
        assert_eq!(collapse_path("", 15), "");
    }

    #[test]
    /// What: Long paths drop leading middle segments and mark the cut
    ///
    /// - Input: Ten segment path, limit 15
    /// - Output: Head and tail kept, `...` inserted, result shorter than input
    fn collapse_path_cuts_middle() {
        let path = "src/main/java/org/acme/server/issue/index/file/Facet.java";
        let collapsed = collapse_path(path, 15);
        assert_eq!(collapsed, "src/.../index/file/Facet.java");
        assert!(collapsed.len() < path.len());
    }

    #[test]
    /// What: A single very long middle segment is dropped entirely
    fn collapse_path_drops_oversized_middle() {
        let collapsed = collapse_path("a/averyveryverylongdirectoryname/b.rs", 10);
        assert_eq!(collapsed, "a/.../b.rs");
    }

    #[test]
    /// What: Width fitting respects wide characters and the ellipsis
    fn fit_width_truncates_with_ellipsis() {
        assert_eq!(fit_width("abc", 3), "abc");
        assert_eq!(fit_width("abcdef", 4), "abc…");
        assert_eq!(fit_width("abc", 0), "");
        // Each CJK char takes two cells
        assert_eq!(fit_width("日本語", 5), "日本…");
    }

    #[test]
    /// What: Epoch conversion, including a leap day
    fn utc_timestamp_formats_dates() {
        assert_eq!(utc_timestamp(0), "1970-01-01 00:00:00");
        assert_eq!(utc_timestamp(951_782_400), "2000-02-29 00:00:00");
        assert_eq!(utc_timestamp(1_700_000_000), "2023-11-14 22:13:20");
    }
}
