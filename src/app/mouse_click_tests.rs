//! Tests for mouse click handling

use super::*;
use crate::layout::WindowButton;
use crate::test_utils::test_helpers::{key, render_to_string, test_app};
use ratatui::crossterm::event::{Event, KeyCode, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Rect;

fn left_click_at(app: &mut App, rect: Rect) {
    app.handle_event(Event::Mouse(MouseEvent {
        kind: MouseEventKind::Down(MouseButton::Left),
        column: rect.x,
        row: rect.y,
        modifiers: KeyModifiers::empty(),
    }));
}

#[test]
fn test_every_window_button_opens_overview() {
    for button in WindowButton::ALL {
        let mut app = test_app();
        app.nav.jump_to_topic(2);
        render_to_string(&mut app, 80, 24);

        let rect = app
            .layout_regions
            .window_buttons
            .iter()
            .find(|(b, _)| *b == button)
            .map(|(_, r)| *r)
            .unwrap();
        left_click_at(&mut app, rect);

        assert!(app.nav.is_overview(), "{:?} should open overview", button);
        assert_eq!(app.nav.overview_focused_index(), 1);
    }
}

#[test]
fn test_click_card_selects_topic() {
    let mut app = test_app();
    app.handle_key_event(key(KeyCode::Char('w')));
    render_to_string(&mut app, 80, 40);

    let (_, rect) = app.layout_regions.cards[2];
    left_click_at(&mut app, rect);

    assert!(!app.nav.is_overview());
    assert_eq!(app.nav.current_index(), 2);
}

#[test]
fn test_click_filtered_card_maps_to_absolute_index() {
    let mut app = test_app();
    app.handle_key_event(key(KeyCode::Char('w')));
    app.nav.set_search_query("community");
    render_to_string(&mut app, 80, 40);

    assert_eq!(app.layout_regions.cards.len(), 1);
    let (_, rect) = app.layout_regions.cards[0];
    left_click_at(&mut app, rect);

    assert_eq!(app.nav.current_index(), 3);
}

#[test]
fn test_click_search_bar_focuses_input() {
    let mut app = test_app();
    app.handle_key_event(key(KeyCode::Char('w')));
    render_to_string(&mut app, 80, 40);

    let rect = app.layout_regions.search_bar.unwrap();
    left_click_at(&mut app, rect);
    assert_eq!(app.focus, Focus::SearchInput);
}

#[test]
fn test_click_status_bar_toggles_collapse() {
    let mut app = test_app();
    render_to_string(&mut app, 80, 24);

    let rect = app.layout_regions.status_bar.unwrap();
    left_click_at(&mut app, rect);
    assert!(app.nav.is_status_bar_collapsed());
}

#[test]
fn test_help_close_button() {
    let mut app = test_app();
    app.handle_key_event(key(KeyCode::Char('?')));
    render_to_string(&mut app, 80, 30);

    let rect = app.layout_regions.help_close.unwrap();
    left_click_at(&mut app, rect);
    assert!(!app.nav.show_help_modal());
}

#[test]
fn test_help_blocks_clicks_behind_it() {
    let mut app = test_app();
    app.handle_key_event(key(KeyCode::Char('?')));
    render_to_string(&mut app, 80, 30);

    let rect = app.layout_regions.status_bar.unwrap();
    left_click_at(&mut app, rect);
    assert!(!app.nav.is_status_bar_collapsed());
    assert!(app.nav.show_help_modal());
}

#[test]
fn test_click_on_nothing_is_noop() {
    let mut app = test_app();
    handle_click(&mut app, None);
    handle_click(&mut app, Some(Region::Window));
    assert!(!app.nav.is_overview());
    assert_eq!(app.nav.current_index(), 0);
}

#[test]
fn test_card_click_outside_overview_is_noop() {
    let mut app = test_app();
    handle_click(&mut app, Some(Region::Card(2)));
    assert_eq!(app.nav.current_index(), 0);
}

#[test]
fn test_help_blocks_clicks_when_popup_does_not_fit() {
    let mut app = test_app();
    app.handle_key_event(key(KeyCode::Char('?')));
    render_to_string(&mut app, 40, 7);
    assert!(app.layout_regions.help_popup.is_none());

    let (_, rect) = app.layout_regions.window_buttons[0];
    left_click_at(&mut app, rect);
    let rect = app.layout_regions.status_bar.unwrap();
    left_click_at(&mut app, rect);

    assert!(app.nav.show_help_modal());
    assert!(!app.nav.is_overview());
    assert!(!app.nav.is_status_bar_collapsed());
}

#[test]
fn test_help_blocks_card_clicks_in_overview() {
    let mut app = test_app();
    app.handle_key_event(key(KeyCode::Char('w')));
    app.handle_key_event(key(KeyCode::Char('?')));
    render_to_string(&mut app, 40, 7);
    assert!(!app.layout_regions.cards.is_empty());

    let (_, rect) = app.layout_regions.cards[0];
    left_click_at(&mut app, rect);
    let rect = app.layout_regions.search_bar.unwrap();
    left_click_at(&mut app, rect);

    assert!(app.nav.is_overview());
    assert!(app.nav.show_help_modal());
    assert_eq!(app.nav.current_index(), 0);
    assert_eq!(app.focus, Focus::Windows);
}

#[test]
fn test_only_help_close_acts_while_help_is_open() {
    let mut app = test_app();
    app.nav.open_help();
    handle_click(&mut app, Some(Region::WindowButton(WindowButton::Close)));
    handle_click(&mut app, Some(Region::StatusBar));
    assert!(!app.nav.is_overview());
    assert!(!app.nav.is_status_bar_collapsed());

    handle_click(&mut app, Some(Region::HelpClose));
    assert!(!app.nav.show_help_modal());
}
