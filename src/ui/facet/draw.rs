use ratatui::{
    Frame,
    prelude::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};
use unicode_width::UnicodeWidthStr;

use super::{CellRect, FacetBoxView, FacetEnv, FacetHeaderView, FacetHitMap, FacetItemView};
use crate::theme::Theme;
use crate::util::fit_width;

/// Width of the caret plus its trailing space.
const CARET_WIDTH: usize = 2;
/// Width of the active marker plus its trailing space.
const MARKER_WIDTH: usize = 2;
/// Width of the icon plus its trailing space.
const ICON_WIDTH: usize = 2;

/// What: Compute the scroll window for a list so the cursor stays visible.
///
/// Inputs:
/// - `total`: Number of rows
/// - `height`: Rows available
/// - `cursor`: Highlighted row, if any
///
/// Output:
/// - `(offset, visible_count)`
#[must_use]
pub fn visible_window(total: usize, height: usize, cursor: Option<usize>) -> (usize, usize) {
    if height == 0 || total == 0 {
        return (0, 0);
    }
    let cursor = cursor.unwrap_or(0).min(total - 1);
    let offset = if cursor >= height { cursor + 1 - height } else { 0 };
    (offset, height.min(total - offset))
}

/// Convert a cell count to `u16`, saturating.
fn cells(n: usize) -> u16 {
    u16::try_from(n).unwrap_or(u16::MAX)
}

/// What: Draw a facet box into `area` and return its clickable regions.
///
/// Inputs:
/// - `f`: Frame to draw into
/// - `view`: Facet description
/// - `area`: Target rectangle; first row is the header
/// - `cursor`: Highlighted row index into the item list
/// - `env`: Used for the clear and loading labels
/// - `th`: Active theme
///
/// Output:
/// - Hit map for the header, the clear control and every visible row
///
/// Details:
/// - Rows beyond the area are scrolled so that `cursor` stays visible.
pub fn draw_facet_box(
    f: &mut Frame,
    view: &FacetBoxView,
    area: Rect,
    cursor: Option<usize>,
    env: &dyn FacetEnv,
    th: &Theme,
) -> FacetHitMap {
    let mut hits = FacetHitMap {
        property: Some(view.property),
        ..FacetHitMap::default()
    };
    if area.width == 0 || area.height == 0 {
        return hits;
    }

    let header_rect = Rect::new(area.x, area.y, area.width, 1);
    hits.header = Some((header_rect.x, header_rect.y, header_rect.width, 1));
    hits.clear = draw_header(f, &view.header, header_rect, env, th);

    let Some(list) = &view.list else {
        return hits;
    };
    let list_height = usize::from(area.height.saturating_sub(1));
    if list.items.is_empty() {
        if list_height > 0 {
            let hint = Paragraph::new(Line::from(Span::styled(
                env.translate("app.facets", "empty"),
                Style::default()
                    .fg(th.subtext0)
                    .add_modifier(Modifier::ITALIC),
            )));
            f.render_widget(hint, Rect::new(area.x, area.y + 1, area.width, 1));
        }
        return hits;
    }

    let (offset, count) = visible_window(list.items.len(), list_height, cursor);
    for (row, (idx, item)) in list.items.iter().enumerate().skip(offset).take(count).enumerate() {
        let y = area.y + 1 + cells(row);
        let rect = Rect::new(area.x, y, area.width, 1);
        draw_item(f, item, rect, cursor == Some(idx), env, th);
        hits.items.push(((rect.x, rect.y, rect.width, 1), item.value.clone()));
    }
    tracing::trace!(
        property = view.property,
        offset,
        visible = count,
        total = list.items.len(),
        "drew facet rows"
    );
    hits
}

/// Draw the header row; returns the clear control rect when one is shown.
fn draw_header(
    f: &mut Frame,
    header: &FacetHeaderView,
    rect: Rect,
    env: &dyn FacetEnv,
    th: &Theme,
) -> Option<CellRect> {
    let width = usize::from(rect.width);
    let caret = if header.open { "▾ " } else { "▸ " };
    let clear_label = if header.values.is_empty() {
        None
    } else {
        Some(format!("[{}]", env.translate("app.facets", "clear")))
    };
    let clear_w = clear_label.as_deref().map_or(0, UnicodeWidthStr::width);

    let name = fit_width(&header.name, width.saturating_sub(CARET_WIDTH + clear_w));
    let mut spans: Vec<Span> = vec![
        Span::styled(caret, Style::default().fg(th.overlay1)),
        Span::styled(
            name.clone(),
            Style::default().fg(th.mauve).add_modifier(Modifier::BOLD),
        ),
    ];
    let used = CARET_WIDTH + name.width();
    let summary_budget = width.saturating_sub(used + 2 + clear_w + 1);
    if !header.values.is_empty() && summary_budget > 0 {
        let summary = fit_width(&header.values.join(", "), summary_budget);
        spans.push(Span::raw("  "));
        spans.push(Span::styled(summary, Style::default().fg(th.sapphire)));
    }
    f.render_widget(Paragraph::new(Line::from(spans)), rect);

    let label = clear_label?;
    if clear_w > width.saturating_sub(used) {
        return None;
    }
    let x = rect.x + rect.width - cells(clear_w);
    let clear_rect = Rect::new(x, rect.y, cells(clear_w), 1);
    f.render_widget(
        Paragraph::new(Span::styled(
            label,
            Style::default()
                .fg(th.red)
                .bg(th.surface2)
                .add_modifier(Modifier::BOLD),
        )),
        clear_rect,
    );
    Some((clear_rect.x, clear_rect.y, clear_rect.width, 1))
}

/// Draw one item row: marker, icon, name and right-aligned statistic.
fn draw_item(
    f: &mut Frame,
    item: &FacetItemView,
    rect: Rect,
    highlighted: bool,
    env: &dyn FacetEnv,
    th: &Theme,
) {
    let width = usize::from(rect.width);
    let stat = if item.loading && item.stat.is_none() {
        env.translate("app.facets", "loading")
    } else {
        item.stat.clone().unwrap_or_default()
    };
    let stat_w = stat.width();
    let name_budget = width.saturating_sub(MARKER_WIDTH + ICON_WIDTH + stat_w + 1);
    let name = fit_width(&item.name.text, name_budget);
    let pad = width.saturating_sub(MARKER_WIDTH + ICON_WIDTH + name.width() + stat_w);

    let name_style = if item.active {
        Style::default().fg(th.green).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(th.text)
    };
    let marker = if item.active { "✓ " } else { "  " };
    let line = Line::from(vec![
        Span::styled(marker, Style::default().fg(th.green)),
        item.name.icon.span(th),
        Span::styled(name, name_style),
        Span::raw(" ".repeat(pad)),
        Span::styled(stat, Style::default().fg(th.lavender)),
    ]);

    let mut row_style = Style::default();
    if highlighted {
        row_style = row_style.bg(th.surface1);
    }
    if item.loading {
        row_style = row_style.add_modifier(Modifier::DIM);
    }
    f.render_widget(Paragraph::new(line).style(row_style), rect);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    /// What: Scroll window keeps the cursor on screen
    ///
    /// - Input: Various totals, heights and cursors
    /// - Output: Expected offsets and visible counts
    fn visible_window_follows_cursor() {
        assert_eq!(visible_window(0, 5, None), (0, 0));
        assert_eq!(visible_window(3, 0, Some(1)), (0, 0));
        assert_eq!(visible_window(3, 5, None), (0, 3));
        assert_eq!(visible_window(10, 4, Some(2)), (0, 4));
        assert_eq!(visible_window(10, 4, Some(6)), (3, 4));
        assert_eq!(visible_window(10, 4, Some(42)), (6, 4));
    }
}
