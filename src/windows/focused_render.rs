//! Focused view rendering
//!
//! Draws the current topic as a full window with its header bar buttons.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Paragraph, Wrap},
};

use super::window_frame::{render_buttons, window_block};
use crate::app::App;
use crate::topics::Topic;
use crate::widgets::popup;

// Margin around the window, leaving room for the parallax shift
const WINDOW_MARGIN_X: u16 = 2;
const WINDOW_MARGIN_Y: u16 = 1;

pub fn render(app: &mut App, frame: &mut Frame, area: Rect) {
    let topic = app.nav.current_topic();

    let (dx, dy) = app.parallax;
    let window = popup::offset_rect(
        popup::inset_rect(area, WINDOW_MARGIN_X, WINDOW_MARGIN_Y),
        dx,
        dy,
        area,
    );

    let block = window_block(topic.title, app.nav.slide_direction(), Color::Cyan);
    let inner = block.inner(window);
    frame.render_widget(block, window);
    render_buttons(frame, window, &mut app.layout_regions);

    let content = Paragraph::new(topic_text(topic)).wrap(Wrap { trim: false });
    frame.render_widget(content, popup::inset_rect(inner, 2, 1));

    app.layout_regions.window = Some(window);
}

/// Icon, title, tagline, paragraphs and bullet points of a topic
pub fn topic_text(topic: &Topic) -> Text<'static> {
    let mut lines: Vec<Line> = vec![
        Line::from(vec![
            Span::raw(format!("{}  ", topic.icon)),
            Span::styled(
                topic.title,
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(Span::styled(
            topic.tagline,
            Style::default()
                .fg(Color::Gray)
                .add_modifier(Modifier::ITALIC),
        )),
        Line::from(""),
    ];

    for paragraph in topic.body.paragraphs {
        lines.push(Line::from(*paragraph));
        lines.push(Line::from(""));
    }

    for point in topic.body.points {
        lines.push(Line::from(vec![
            Span::styled("  • ", Style::default().fg(Color::Yellow)),
            Span::raw(*point),
        ]));
    }

    Text::from(lines)
}

#[cfg(test)]
#[path = "focused_render_tests.rs"]
mod focused_render_tests;
