//! Mouse handling for the facet sidebar.

use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};

use crate::state::AppState;
use crate::ui::facet::FacetTarget;
use crate::ui::file_facet::FileFacet;

/// What: Handle a mouse event using the regions recorded by the last draw.
///
/// Inputs:
/// - `me`: Mouse event
/// - `app`: Mutable host state
///
/// Output:
/// - `true` when the event hit the facet
///
/// Details:
/// - Left clicks on the clear control, the header or a row dispatch the
///   matching facet action; clicking a row also moves the cursor there.
/// - Clicks are routed by the property of the drawn facet; regions of a
///   facet other than the file facet are ignored.
/// - The wheel moves the cursor.
pub fn handle_mouse_event(me: MouseEvent, app: &mut AppState) -> bool {
    match me.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            if app.facet_hits.property != Some(FileFacet::PROPERTY) {
                return false;
            }
            let Some(target) = app.facet_hits.hit(me.column, me.row) else {
                return false;
            };
            if let FacetTarget::Item(value) = &target
                && let Some(pos) = super::file_facet_value_index(app, value)
            {
                app.facet_cursor = pos;
            }
            tracing::trace!(?target, x = me.column, y = me.row, "facet click");
            super::dispatch_file_facet(app, &target);
            true
        }
        MouseEventKind::ScrollDown => {
            app.move_facet_cursor(1);
            true
        }
        MouseEventKind::ScrollUp => {
            app.move_facet_cursor(-1);
            true
        }
        _ => false,
    }
}
