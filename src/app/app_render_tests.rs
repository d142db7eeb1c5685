//! Tests for whole-screen rendering

use crate::test_utils::test_helpers::{key, render_to_string, test_app};
use proptest::prelude::*;
use ratatui::crossterm::event::KeyCode;

const TEST_WIDTH: u16 = 100;
const TEST_HEIGHT: u16 = 40;

#[test]
fn test_focused_view_shows_only_current_topic() {
    let mut app = test_app();
    app.handle_key_event(key(KeyCode::Char('2')));

    let output = render_to_string(&mut app, TEST_WIDTH, TEST_HEIGHT);
    assert!(output.contains("Free/Open-Source Software"));
    assert!(!output.contains("Hardware & Sobriety"));
    assert!(output.contains("Current topic: Free Software"));
}

#[test]
fn test_overview_shows_all_cards() {
    let mut app = test_app();
    app.handle_key_event(key(KeyCode::Char('w')));

    let output = render_to_string(&mut app, TEST_WIDTH, TEST_HEIGHT);
    for title in [
        "Hardware & Sobriety",
        "Free/Open-Source Software",
        "Digital Education & Awareness",
    ] {
        assert!(output.contains(title), "missing card {}", title);
    }
    assert!(output.contains("Overview: 4 of 4 topics"));
    assert_eq!(app.layout_regions.cards.len(), 4);
    assert!(app.layout_regions.window.is_none());
}

#[test]
fn test_help_overlay_renders_on_top() {
    let mut app = test_app();
    app.handle_key_event(key(KeyCode::Char('?')));

    let output = render_to_string(&mut app, TEST_WIDTH, TEST_HEIGHT);
    assert!(output.contains("Keyboard Shortcuts"));
    assert!(output.contains("Alt+Shift+Q"));
    assert!(app.layout_regions.help_popup.is_some());
}

#[test]
fn test_regions_are_reset_between_renders() {
    let mut app = test_app();
    render_to_string(&mut app, TEST_WIDTH, TEST_HEIGHT);
    assert!(app.layout_regions.window.is_some());
    assert_eq!(app.layout_regions.window_buttons.len(), 3);

    app.handle_key_event(key(KeyCode::Char('w')));
    render_to_string(&mut app, TEST_WIDTH, TEST_HEIGHT);
    assert!(app.layout_regions.window.is_none());
    assert!(app.layout_regions.window_buttons.is_empty());
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(50))]

    // Any terminal size renders without panicking, in every mode
    #[test]
    fn prop_render_any_size(
        width in 1u16..160,
        height in 1u16..60,
        overview in prop::bool::ANY,
        help in prop::bool::ANY,
    ) {
        let mut app = test_app();
        if overview {
            app.nav.enter_overview();
        }
        if help {
            app.nav.open_help();
        }
        render_to_string(&mut app, width, height);
    }
}
