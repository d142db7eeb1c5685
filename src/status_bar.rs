//! Status bar rendering
//!
//! The bottom line shows where the user is and the shortcuts that apply in
//! the current mode. It can be collapsed to a single hint.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::app::App;

const SEPARATOR: &str = " │ ";

/// Location label on the left of the status bar
pub fn location_label(app: &App) -> String {
    if app.nav.is_overview() {
        format!(
            "Overview: {} of {} topics",
            app.nav.filtered_topics().len(),
            app.nav.topic_count()
        )
    } else {
        format!("Current topic: {}", app.nav.current_topic().short_title)
    }
}

/// Key/label pairs for the current mode
pub fn shortcut_hints(app: &App) -> &'static [(&'static str, &'static str)] {
    if app.nav.is_status_bar_collapsed() {
        return &[("?", "help"), ("b", "expand")];
    }

    if !app.nav.is_overview() {
        &[
            ("Alt+Q", "next topic"),
            ("Alt+Shift+Q", "previous"),
            ("1-4", "jump"),
            ("W", "overview"),
            ("?", "help"),
            ("b", "collapse"),
        ]
    } else if app.input_focused() {
        &[
            ("Type", "filter"),
            ("Enter", "windows"),
            ("Esc", "close overview"),
            ("?", "help"),
        ]
    } else {
        &[
            ("←→", "move"),
            ("Enter", "open"),
            ("/", "search"),
            ("Esc", "close overview"),
            ("?", "help"),
        ]
    }
}

/// Plain-text rendition of the bar, without styling
pub fn status_text(app: &App) -> String {
    let hints: Vec<String> = shortcut_hints(app)
        .iter()
        .map(|(key, label)| format!("{} {}", key, label))
        .collect();

    if app.nav.is_status_bar_collapsed() {
        hints.join(SEPARATOR)
    } else {
        format!("{}{}{}", location_label(app), SEPARATOR, hints.join(SEPARATOR))
    }
}

pub fn render_bar(app: &mut App, frame: &mut Frame, area: Rect) {
    let key_style = Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD);
    let label_style = Style::default().fg(Color::DarkGray);

    let mut spans = vec![Span::raw(" ")];
    if !app.nav.is_status_bar_collapsed() {
        spans.push(Span::styled(location_label(app), Style::default().fg(Color::Cyan)));
        spans.push(Span::styled(SEPARATOR, label_style));
    }

    for (i, (key, label)) in shortcut_hints(app).iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(SEPARATOR, label_style));
        }
        spans.push(Span::styled(*key, key_style));
        spans.push(Span::styled(format!(" {}", label), label_style));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
    app.layout_regions.status_bar = Some(area);
}

#[cfg(test)]
#[path = "status_bar_tests.rs"]
mod status_bar_tests;
