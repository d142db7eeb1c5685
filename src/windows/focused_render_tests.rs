//! Tests for the focused window

use super::*;
use crate::navigation::SlideDirection;
use crate::test_utils::test_helpers::test_app;
use crate::topics::TOPICS;
use ratatui::Terminal;
use ratatui::backend::TestBackend;
use std::time::Instant;

fn render_focused(app: &mut App, width: u16, height: u16) -> String {
    let backend = TestBackend::new(width, height);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal
        .draw(|f| {
            let area = f.area();
            super::render(app, f, area);
        })
        .unwrap();
    terminal.backend().to_string()
}

fn line_text(line: &Line) -> String {
    line.spans.iter().map(|s| s.content.as_ref()).collect()
}

#[test]
fn test_topic_text_layout() {
    let topic = &TOPICS[0];
    let text = topic_text(topic);
    let lines: Vec<String> = text.lines.iter().map(line_text).collect();

    assert!(lines[0].contains(topic.title));
    assert!(lines[0].starts_with(topic.icon));
    assert_eq!(lines[1], topic.tagline);
    assert_eq!(lines[2], "");
    assert_eq!(lines[3], topic.body.paragraphs[0]);

    let bullets: Vec<&String> = lines.iter().filter(|l| l.starts_with("  • ")).collect();
    assert_eq!(bullets.len(), topic.body.points.len());
    assert_eq!(lines.len(), 3 + topic.body.paragraphs.len() * 2 + topic.body.points.len());
}

#[test]
fn test_window_shows_title_and_buttons() {
    let mut app = test_app();
    let output = render_focused(&mut app, 100, 30);

    assert!(output.contains("Hardware & Sobriety"));
    assert!(output.contains("Less waste, longer life for devices"));
    assert!(output.contains("[_]"));
    assert!(output.contains("[x]"));
}

#[test]
fn test_window_region_is_inset() {
    let mut app = test_app();
    render_focused(&mut app, 80, 24);

    assert_eq!(
        app.layout_regions.window,
        Some(Rect {
            x: 2,
            y: 1,
            width: 76,
            height: 22
        })
    );

    let buttons = &app.layout_regions.window_buttons;
    assert_eq!(buttons.len(), 3);
    assert!(buttons.iter().all(|(_, r)| r.y == 1));
    assert!(buttons.windows(2).all(|w| w[0].1.x < w[1].1.x));
}

#[test]
fn test_parallax_shifts_window() {
    let mut app = test_app();
    app.parallax = (1, -1);
    render_focused(&mut app, 80, 24);

    let window = app.layout_regions.window.unwrap();
    assert_eq!((window.x, window.y), (3, 0));
}

#[test]
fn test_tiny_window_has_no_buttons() {
    let mut app = test_app();
    render_focused(&mut app, 12, 6);
    assert!(app.layout_regions.window_buttons.is_empty());
}

#[test]
fn test_slide_direction_indicator() {
    let mut app = test_app();
    app.nav.go_to_next(Instant::now());
    assert_eq!(app.nav.slide_direction(), SlideDirection::Right);

    let output = render_focused(&mut app, 100, 30);
    assert!(output.contains("▶ Free/Open-Source Software"));
}
