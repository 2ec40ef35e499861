use ratatui::{
    Frame,
    prelude::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph},
};

use crate::i18n;
use crate::logic::keys_by_stat_desc;
use crate::state::AppState;
use crate::theme::theme;
use crate::ui::facet::FacetEnv;

/// What: Render the issues pane: files matching the current query with their counts.
///
/// Inputs:
/// - `f`: Frame to draw into
/// - `app`: Host state (query, stats, components)
/// - `area`: Target rectangle
///
/// Details:
/// - An empty file filter matches every file.
/// - Full component paths are shown here; only the facet collapses them.
pub fn render_issues(f: &mut Frame, app: &AppState, area: Rect) {
    let th = theme();
    let block = Block::default()
        .title(Span::styled(
            format!(" {} ", i18n::t(app, "app.title")),
            Style::default().fg(th.mauve).add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(th.overlay1));

    let Some(stats) = &app.stats else {
        let loading = Paragraph::new(Span::styled(
            i18n::t(app, "app.facets.loading"),
            Style::default().fg(th.subtext0),
        ))
        .block(block);
        f.render_widget(loading, area);
        return;
    };

    let items: Vec<ListItem> = keys_by_stat_desc(stats)
        .into_iter()
        .filter(|file| app.query.files.is_empty() || app.query.files.iter().any(|s| s == file))
        .map(|file| {
            let name = app
                .referenced_components
                .get(file)
                .map_or(file, |c| c.path.as_str());
            let stat = app
                .format_stat(stats.get(file).copied(), app.facet_mode)
                .unwrap_or_default();
            ListItem::new(Line::from(vec![
                Span::styled(format!("{stat:>8}  "), Style::default().fg(th.lavender)),
                Span::styled(name.to_string(), Style::default().fg(th.text)),
            ]))
        })
        .collect();
    f.render_widget(List::new(items).block(block), area);
}
