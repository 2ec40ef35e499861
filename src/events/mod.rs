//! Event handling layer: maps terminal input to facet actions.

mod mouse;

use crossterm::event::{Event as CEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::logic::keys_by_stat_desc;
use crate::state::AppState;
use crate::ui::facet::{FacetEvent, FacetTarget};
use crate::ui::file_facet::FileFacet;

pub use mouse::handle_mouse_event;

/// What: Apply a click on the file facet to the host state.
///
/// Inputs:
/// - `app`: Host state; receives the facet callbacks
/// - `target`: What was clicked
///
/// Details:
/// - The facet borrows `app` for its props, so callbacks are recorded first
///   and replayed into `app` once the facet is gone.
pub fn dispatch_file_facet(app: &mut AppState, target: &FacetTarget) {
    let mut events: Vec<FacetEvent> = Vec::new();
    {
        let facet = FileFacet::new(app.file_facet_props());
        match target {
            FacetTarget::Clear => facet.handle_clear(&mut events),
            FacetTarget::Header => facet.handle_header_click(&mut events),
            FacetTarget::Item(value) => facet.handle_item_click(value, &mut events),
        }
    }
    for ev in events {
        ev.dispatch(app);
    }
}

/// Identifier of the file facet row at `index`, in display order.
#[must_use]
pub fn file_facet_value_at(app: &AppState, index: usize) -> Option<String> {
    if app.file_facet_row_count() == 0 {
        return None;
    }
    let stats = app.stats.as_ref()?;
    keys_by_stat_desc(stats).get(index).map(|s| (*s).to_string())
}

/// Display position of the row for `value`, if it is shown.
#[must_use]
pub fn file_facet_value_index(app: &AppState, value: &str) -> Option<usize> {
    if app.file_facet_row_count() == 0 {
        return None;
    }
    let stats = app.stats.as_ref()?;
    keys_by_stat_desc(stats).iter().position(|k| *k == value)
}

/// What: Handle a key press.
///
/// Inputs:
/// - `ke`: Key event
/// - `app`: Mutable host state
///
/// Output:
/// - `true` when the application should exit
pub fn handle_key_event(ke: KeyEvent, app: &mut AppState) -> bool {
    if ke.kind != KeyEventKind::Press {
        return false;
    }
    match (ke.code, ke.modifiers) {
        (KeyCode::Char('c'), KeyModifiers::CONTROL) | (KeyCode::Char('q') | KeyCode::Esc, _) => {
            app.should_quit = true;
        }
        (KeyCode::Up | KeyCode::Char('k'), _) => app.move_facet_cursor(-1),
        (KeyCode::Down | KeyCode::Char('j'), _) => app.move_facet_cursor(1),
        (KeyCode::PageUp, _) => app.move_facet_cursor(-10),
        (KeyCode::PageDown, _) => app.move_facet_cursor(10),
        (KeyCode::Home, _) => app.facet_cursor = 0,
        (KeyCode::End, _) => app.move_facet_cursor(isize::MAX),
        (KeyCode::Char(' ') | KeyCode::Enter, _) => {
            if let Some(value) = file_facet_value_at(app, app.facet_cursor) {
                dispatch_file_facet(app, &FacetTarget::Item(value));
            }
        }
        (KeyCode::Tab, _) => dispatch_file_facet(app, &FacetTarget::Header),
        (KeyCode::Char('c') | KeyCode::Backspace, _) => {
            dispatch_file_facet(app, &FacetTarget::Clear);
        }
        (KeyCode::Char('m'), _) => {
            app.facet_mode = app.facet_mode.toggled();
            tracing::debug!(mode = app.facet_mode.as_config_key(), "facet mode switched");
        }
        _ => {}
    }
    app.should_quit
}

/// What: Dispatch any terminal event.
///
/// Output:
/// - `true` when the application should exit
pub fn handle_event(ev: &CEvent, app: &mut AppState) -> bool {
    match ev {
        CEvent::Key(ke) => handle_key_event(*ke, app),
        CEvent::Mouse(me) => {
            handle_mouse_event(*me, app);
            false
        }
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEventState;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    fn app() -> AppState {
        AppState {
            stats: Some(
                [("a.js", 5_u64), ("b.js", 12), ("c.js", 1)]
                    .into_iter()
                    .map(|(k, v)| (k.to_string(), v))
                    .collect(),
            ),
            ..Default::default()
        }
    }

    #[test]
    /// What: Space selects the row under the cursor and toggles it back off
    ///
    /// - Input: Cursor on the second row (`a.js`), Space twice
    /// - Output: Query `["a.js"]`, then empty
    fn space_toggles_row_under_cursor() {
        let mut app = app();
        handle_key_event(key(KeyCode::Down), &mut app);
        handle_key_event(key(KeyCode::Char(' ')), &mut app);
        assert_eq!(app.query.files, vec!["a.js".to_string()]);
        handle_key_event(key(KeyCode::Char(' ')), &mut app);
        assert!(app.query.files.is_empty());
    }

    #[test]
    /// What: Selections accumulate sorted; clear empties them
    fn selections_sorted_then_cleared() {
        let mut app = app();
        handle_key_event(key(KeyCode::Enter), &mut app); // b.js
        handle_key_event(key(KeyCode::End), &mut app);
        handle_key_event(key(KeyCode::Enter), &mut app); // c.js
        handle_key_event(key(KeyCode::Up), &mut app);
        handle_key_event(key(KeyCode::Enter), &mut app); // a.js
        assert_eq!(app.query.files, vec!["a.js", "b.js", "c.js"]);
        handle_key_event(key(KeyCode::Char('c')), &mut app);
        assert!(app.query.files.is_empty());
    }

    #[test]
    /// What: Tab collapses the facet, which hides rows and disables row selection
    fn tab_collapses_facet() {
        let mut app = app();
        handle_key_event(key(KeyCode::Tab), &mut app);
        assert!(!app.is_facet_open("files"));
        handle_key_event(key(KeyCode::Enter), &mut app);
        assert!(app.query.files.is_empty());
        handle_key_event(key(KeyCode::Tab), &mut app);
        assert!(app.is_facet_open("files"));
    }

    #[test]
    /// What: Mode switch and quit keys
    fn mode_and_quit_keys() {
        let mut app = app();
        handle_key_event(key(KeyCode::Char('m')), &mut app);
        assert_eq!(app.facet_mode, crate::state::FacetMode::Effort);
        assert!(!app.should_quit);
        assert!(handle_key_event(key(KeyCode::Char('q')), &mut app));
    }
}
