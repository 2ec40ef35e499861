use std::path::PathBuf;
use std::time::Duration;

use crossterm::event;
use ratatui::{Terminal, backend::CrosstermBackend};

use crate::events::handle_event;
use crate::i18n;
use crate::state::{AppState, FacetMode};
use crate::theme::Settings;
use crate::ui::ui;

use super::Result;
use super::data::load_issue_data;
use super::terminal::{restore_terminal, setup_terminal};

/// Poll interval of the event loop.
const POLL_INTERVAL: Duration = Duration::from_millis(250);

/// Startup options collected from the command line.
#[derive(Debug, Clone, Default)]
pub struct RunOptions {
    /// Issue statistics JSON file.
    pub data_path: PathBuf,
    /// Statistic unit override.
    pub mode: Option<FacetMode>,
    /// Locale override; takes precedence over `settings.conf`.
    pub locale: Option<String>,
    /// Start with the facets collapsed.
    pub collapsed: bool,
    /// Start in the loading state.
    pub loading: bool,
}

/// What: Build the initial application state from settings, options and the data file.
///
/// Inputs:
/// - `opts`: Command line options
/// - `prefs`: Settings from `settings.conf`
///
/// Output:
/// - Ready-to-draw state
///
/// # Errors
/// - Returns `Err` when the data file cannot be loaded
pub fn initialize_app_state(opts: &RunOptions, prefs: &Settings) -> Result<AppState> {
    let requested_locale = opts.locale.as_deref().unwrap_or(&prefs.locale);
    let (locale, translations, translations_fallback) = i18n::load_translations(requested_locale);

    let mut app = AppState {
        facets_open_default: prefs.facet_open && !opts.collapsed,
        facet_mode: opts.mode.unwrap_or(prefs.facet_mode),
        loading: opts.loading,
        locale,
        translations,
        translations_fallback,
        show_keybinds_footer: prefs.show_keybinds_footer,
        sidebar_width_pct: prefs.sidebar_width_pct,
        ..Default::default()
    };

    let data = load_issue_data(&opts.data_path)?;
    tracing::info!(
        path = %opts.data_path.display(),
        files = data.stats.as_ref().map_or(0, std::collections::HashMap::len),
        components = data.components.len(),
        selected = data.selected.len(),
        "issue data loaded"
    );
    data.apply_to(&mut app);
    Ok(app)
}

/// What: Run the facet browser until the user quits.
///
/// Inputs:
/// - `opts`: Command line options
///
/// Output:
/// - `Ok(())` on a clean exit; `Err` on data or terminal errors
///
/// Details:
/// - With `ISSUE_FACETS_HEADLESS=1` the state is initialized and the function
///   returns without touching the terminal.
/// - The terminal is restored even when the loop fails.
pub fn run(opts: &RunOptions) -> Result<()> {
    let app = initialize_app_state(opts, &crate::theme::settings())?;
    if std::env::var("ISSUE_FACETS_HEADLESS").ok().as_deref() == Some("1") {
        tracing::info!("headless mode; skipping terminal");
        return Ok(());
    }

    setup_terminal()?;
    let outcome = event_loop(app);
    if let Err(e) = restore_terminal() {
        tracing::warn!(error = %e, "failed to restore terminal");
    }
    outcome
}

fn event_loop(mut app: AppState) -> Result<()> {
    let mut terminal = Terminal::new(CrosstermBackend::new(std::io::stdout()))?;
    loop {
        terminal.draw(|f| ui(f, &mut app))?;
        if !event::poll(POLL_INTERVAL)? {
            continue;
        }
        let ev = event::read()?;
        if handle_event(&ev, &mut app) || app.should_quit {
            break;
        }
    }
    tracing::info!(selected = ?app.query.files, "leaving event loop");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_data(dir: &std::path::Path, body: &str) -> PathBuf {
        let path = dir.join("issues.json");
        std::fs::write(&path, body).expect("write data");
        path
    }

    #[test]
    /// What: Options override settings when building the state
    ///
    /// - Input: Settings open/Count, options collapsed/Effort/loading
    /// - Output: Collapsed facets, Effort mode, loading set, data applied
    fn options_override_settings() {
        let dir = tempfile::tempdir().expect("tempdir");
        let opts = RunOptions {
            data_path: write_data(dir.path(), r#"{"stats":{"a":1},"selected":["a"]}"#),
            mode: Some(FacetMode::Effort),
            locale: Some("en-US".into()),
            collapsed: true,
            loading: true,
        };
        let app = initialize_app_state(&opts, &Settings::default()).expect("state");
        assert!(!app.is_facet_open("files"));
        assert_eq!(app.facet_mode, FacetMode::Effort);
        assert!(app.loading);
        assert_eq!(app.query.files, vec!["a"]);
        assert_eq!(app.locale, "en-US");
    }

    #[test]
    /// What: Settings apply when no option overrides them; bad data is an error
    fn settings_apply_and_missing_data_fails() {
        let dir = tempfile::tempdir().expect("tempdir");
        let prefs = Settings {
            facet_mode: FacetMode::Effort,
            sidebar_width_pct: 40,
            ..Settings::default()
        };
        let opts = RunOptions {
            data_path: write_data(dir.path(), "{}"),
            locale: Some("en-US".into()),
            ..RunOptions::default()
        };
        let app = initialize_app_state(&opts, &prefs).expect("state");
        assert_eq!(app.facet_mode, FacetMode::Effort);
        assert_eq!(app.sidebar_width_pct, 40);
        assert!(app.stats.is_none());

        let missing = RunOptions {
            data_path: dir.path().join("nope.json"),
            ..opts
        };
        assert!(initialize_app_state(&missing, &prefs).is_err());
    }
}
