//! TUI rendering: facet sidebar, issues pane and footer.

pub mod facet;
pub mod file_facet;
pub mod icons;
mod issues;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
    prelude::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use crate::i18n;
use crate::state::AppState;
use crate::theme::theme;
use facet::draw_facet_box;
use file_facet::FileFacet;

/// What: Render one full frame.
///
/// Inputs:
/// - `f`: Frame to draw into
/// - `app`: Host state; `facet_hits` is refreshed for mouse handling
///
/// Details:
/// - Left: bordered sidebar with the file facet. Right: files matching the query.
/// - Bottom: current query, mode and optional key hints.
pub fn ui(f: &mut Frame, app: &mut AppState) {
    let area = f.area();
    let footer_height = if app.show_keybinds_footer { 2 } else { 1 };
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(footer_height)])
        .split(area);
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(app.sidebar_width_pct),
            Constraint::Percentage(100 - app.sidebar_width_pct.min(100)),
        ])
        .split(rows[0]);

    render_sidebar(f, app, columns[0]);
    issues::render_issues(f, app, columns[1]);
    render_footer(f, app, rows[1]);
}

/// Draw the sidebar block on the base background and the file facet inside it.
fn render_sidebar(f: &mut Frame, app: &mut AppState, area: Rect) {
    let th = theme();
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(th.overlay1))
        .style(Style::default().bg(th.base));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let hits = {
        let env: &AppState = app;
        let view = FileFacet::new(env.file_facet_props()).render(env);
        let cursor = view.list.as_ref().map(|_| env.facet_cursor);
        draw_facet_box(f, &view, inner, cursor, env, &th)
    };
    app.facet_hits = hits;
}

/// Draw the query summary and key hints.
fn render_footer(f: &mut Frame, app: &AppState, area: Rect) {
    let th = theme();
    let files = if app.query.files.is_empty() {
        i18n::t(app, "app.footer.no_filter")
    } else {
        app.query.files.join(", ")
    };
    let mode = i18n::t(app, &format!("app.modes.{}", app.facet_mode.as_config_key()));
    let mut lines = vec![Line::from(vec![
        Span::styled(
            i18n::t_fmt1(app, "app.footer.query", files),
            Style::default().fg(th.text),
        ),
        Span::raw("   "),
        Span::styled(
            i18n::t_fmt1(app, "app.footer.mode", mode),
            Style::default().fg(th.mauve).add_modifier(Modifier::BOLD),
        ),
    ])];
    if app.show_keybinds_footer {
        lines.push(Line::from(Span::styled(
            i18n::t(app, "app.footer.hints"),
            Style::default().fg(th.subtext0),
        )));
    }
    f.render_widget(Paragraph::new(lines), area);
}
