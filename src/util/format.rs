//! Facet statistic formatting: short integers and work durations.

use crate::i18n::Translator;
use crate::state::FacetMode;

/// Minutes in a working hour.
const MINUTES_PER_HOUR: u64 = 60;
/// Working hours per day used to split effort into days.
const HOURS_PER_DAY: u64 = 8;

/// Threshold table for short integers: (lower bound, divisor, fraction digits, suffix key).
const SHORT_INT_FORMATS: [(u64, u64, usize, &str); 6] = [
    (10_000_000_000, 1_000_000_000, 0, "short_number_suffix.g"),
    (1_000_000_000, 1_000_000_000, 1, "short_number_suffix.g"),
    (10_000_000, 1_000_000, 0, "short_number_suffix.m"),
    (1_000_000, 1_000_000, 1, "short_number_suffix.m"),
    (10_000, 1_000, 0, "short_number_suffix.k"),
    (1_000, 1_000, 1, "short_number_suffix.k"),
];

/// What: Format a facet statistic according to the facet mode.
///
/// Inputs:
/// - `stat`: Raw value, `None` when unknown
/// - `mode`: [`FacetMode::Count`] or [`FacetMode::Effort`]
/// - `tr`: Translator used for unit suffixes
///
/// Output:
/// - `None` for an unknown value, the formatted text otherwise.
#[must_use]
pub fn format_facet_stat(stat: Option<u64>, mode: FacetMode, tr: &Translator<'_>) -> Option<String> {
    let value = stat?;
    Some(match mode {
        FacetMode::Count => format_short_int(value, tr),
        FacetMode::Effort => format_work_duration(value, tr),
    })
}

/// What: Render a count compactly (`999`, `1.2k`, `12k`, `3.4M`, `5G`).
///
/// Inputs:
/// - `value`: Count
/// - `tr`: Translator for the `k`/`M`/`G` suffixes
///
/// Output:
/// - Short representation; a trailing `.0` is dropped.
#[must_use]
pub fn format_short_int(value: u64, tr: &Translator<'_>) -> String {
    let Some(&(_, divisor, fraction, suffix_key)) = SHORT_INT_FORMATS
        .iter()
        .find(|(bound, ..)| value >= *bound)
    else {
        return value.to_string();
    };
    #[allow(clippy::cast_precision_loss)]
    let scaled = value as f64 / divisor as f64;
    let mut number = format!("{scaled:.fraction$}");
    if number.contains('.') {
        number = number.trim_end_matches('0').trim_end_matches('.').to_string();
    }
    format!("{number}{}", tr.t(suffix_key))
}

/// What: Render an effort in minutes as a work duration.
///
/// Inputs:
/// - `minutes`: Effort in minutes
/// - `tr`: Translator for the `work_duration.*` templates
///
/// Output:
/// - `"0"` for zero, else up to two significant parts such as `2d 3h` or `4h 30min`.
///
/// Details:
/// - One day is eight working hours.
/// - Hours are omitted from ten days on; minutes only appear below ten hours.
#[must_use]
pub fn format_work_duration(minutes: u64, tr: &Translator<'_>) -> String {
    if minutes == 0 {
        return "0".to_string();
    }
    let minutes_per_day = HOURS_PER_DAY * MINUTES_PER_HOUR;
    let days = minutes / minutes_per_day;
    let rest = minutes % minutes_per_day;
    let hours = rest / MINUTES_PER_HOUR;
    let mins = rest % MINUTES_PER_HOUR;

    let mut parts: Vec<String> = Vec::with_capacity(2);
    if days > 0 {
        parts.push(tr.t_fmt1("work_duration.x_days", days));
    }
    if days < 10 && hours > 0 {
        parts.push(tr.t_fmt1("work_duration.x_hours", hours));
    }
    if days == 0 && hours < 10 && mins > 0 {
        parts.push(tr.t_fmt1("work_duration.x_minutes", mins));
    }
    parts.join(" ")
}
