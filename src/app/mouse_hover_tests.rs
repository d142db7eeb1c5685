//! Tests for mouse hover handling

use super::*;
use crate::test_utils::test_helpers::{key, render_to_string, test_app};
use ratatui::crossterm::event::{Event, KeyCode, KeyModifiers, MouseEventKind};

fn move_to(app: &mut App, column: u16, row: u16) {
    app.handle_event(Event::Mouse(MouseEvent {
        kind: MouseEventKind::Moved,
        column,
        row,
        modifiers: KeyModifiers::empty(),
    }));
}

fn frame() -> Rect {
    Rect {
        x: 0,
        y: 0,
        width: 90,
        height: 30,
    }
}

#[test]
fn test_parallax_center_is_still() {
    assert_eq!(parallax_offset(frame(), 45, 15), (0, 0));
}

#[test]
fn test_parallax_corners() {
    assert_eq!(parallax_offset(frame(), 0, 0), (-1, -1));
    assert_eq!(parallax_offset(frame(), 89, 29), (1, 1));
    assert_eq!(parallax_offset(frame(), 89, 0), (1, -1));
}

#[test]
fn test_parallax_empty_frame() {
    assert_eq!(parallax_offset(Rect::default(), 3, 3), (0, 0));
}

#[test]
fn test_hover_in_focused_mode_sets_parallax() {
    let mut app = test_app();
    render_to_string(&mut app, 90, 30);

    move_to(&mut app, 2, 2);
    assert_eq!(app.parallax, (-1, -1));

    move_to(&mut app, 45, 15);
    assert_eq!(app.parallax, (0, 0));
}

#[test]
fn test_parallax_disabled() {
    let mut app = test_app();
    app.parallax_enabled = false;
    render_to_string(&mut app, 90, 30);

    move_to(&mut app, 2, 2);
    assert_eq!(app.parallax, (0, 0));
}

#[test]
fn test_hover_card_in_overview() {
    let mut app = test_app();
    app.handle_key_event(key(KeyCode::Char('w')));
    render_to_string(&mut app, 80, 40);

    let (index, rect) = app.layout_regions.cards[1];
    move_to(&mut app, rect.x + 1, rect.y + 1);
    assert_eq!(app.hovered_card, Some(index));
    // Hover is feedback only; keyboard focus does not follow it
    assert_eq!(app.nav.overview_focused_index(), 0);

    let search = app.layout_regions.search_bar.unwrap();
    move_to(&mut app, search.x, search.y);
    assert_eq!(app.hovered_card, None);
}

#[test]
fn test_hover_ignored_while_help_open() {
    let mut app = test_app();
    app.handle_key_event(key(KeyCode::Char('?')));
    render_to_string(&mut app, 90, 30);

    move_to(&mut app, 0, 0);
    assert_eq!(app.parallax, (0, 0));
}
