//! Mouse hover handling
//!
//! Updates hover feedback: the highlighted card in the overview and the
//! parallax shift of the focused window.

use ratatui::crossterm::event::MouseEvent;
use ratatui::layout::Rect;

use super::app_state::App;
use crate::layout::Region;

/// Handle mouse hover for the given region
pub fn handle_hover(app: &mut App, region: Option<Region>, mouse: MouseEvent) {
    if app.nav.show_help_modal() {
        return;
    }

    if app.nav.is_overview() {
        app.hovered_card = match region {
            Some(Region::Card(index)) => Some(index),
            _ => None,
        };
        return;
    }

    app.parallax = if app.parallax_enabled {
        parallax_offset(app.layout_regions.frame, mouse.column, mouse.row)
    } else {
        (0, 0)
    };
}

/// One-cell shift toward the pointer once it leaves the central third of
/// the frame on either axis
pub fn parallax_offset(frame: Rect, column: u16, row: u16) -> (i16, i16) {
    fn axis(pos: u16, start: u16, len: u16) -> i16 {
        if len == 0 {
            return 0;
        }
        let third = len / 3;
        let rel = pos.saturating_sub(start);
        if rel < third {
            -1
        } else if rel >= len - third {
            1
        } else {
            0
        }
    }

    (
        axis(column, frame.x, frame.width),
        axis(row, frame.y, frame.height),
    )
}

#[cfg(test)]
#[path = "mouse_hover_tests.rs"]
mod mouse_hover_tests;
