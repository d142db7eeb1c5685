//! Help popup rendering
//!
//! This module handles rendering of the help popup modal with keyboard shortcuts.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Paragraph},
};

use crate::app::App;
use crate::help::{HELP_FOOTER, HELP_SECTIONS, help_line_count};
use crate::widgets::popup;

// Help popup display constants
pub const HELP_POPUP_WIDTH: u16 = 60;
pub const HELP_POPUP_PADDING: u16 = 4; // borders, footer and one spare line
pub const HELP_CLOSE_LABEL: &str = "[x]";

/// Render the help popup (centered modal with keyboard shortcuts)
pub fn render_popup(app: &mut App, frame: &mut Frame) {
    let frame_area = frame.area();

    // Don't render if terminal is too small
    if frame_area.width < 20 || frame_area.height < 8 {
        return;
    }

    let ideal_popup_height = help_line_count() as u16 + HELP_POPUP_PADDING;
    let popup_area = popup::centered_popup(frame_area, HELP_POPUP_WIDTH, ideal_popup_height);

    // Clear the background for floating effect
    popup::clear_area(frame, popup_area);

    let mut lines: Vec<Line> = Vec::new();
    for section in HELP_SECTIONS {
        lines.push(Line::from(vec![
            Span::raw("  "),
            Span::styled(
                section.title,
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
        ]));
        for (key, desc) in section.entries {
            let key_span = Span::styled(
                format!("  {:<15}", key),
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            );
            let desc_span = Span::styled(*desc, Style::default().fg(Color::White));
            lines.push(Line::from(vec![key_span, desc_span]));
        }
        lines.push(Line::from(""));
    }

    lines.push(Line::from(vec![Span::styled(
        format!("  {}", HELP_FOOTER),
        Style::default().fg(Color::DarkGray),
    )]));

    // Update scroll bounds based on content and viewport
    let content_height = lines.len() as u32;
    let visible_height = popup_area.height.saturating_sub(2); // -2 for borders
    app.help.scroll.update_bounds(content_height, visible_height);

    let popup = Paragraph::new(Text::from(lines))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Keyboard Shortcuts ")
                .border_style(Style::default().fg(Color::Cyan))
                .style(Style::default().bg(Color::Black)),
        )
        .scroll((app.help.scroll.offset, 0));

    frame.render_widget(popup, popup_area);

    let close_area = close_button_area(popup_area);
    frame.render_widget(
        Paragraph::new(HELP_CLOSE_LABEL).style(Style::default().fg(Color::Red).bg(Color::Black)),
        close_area,
    );

    app.layout_regions.help_popup = Some(popup_area);
    app.layout_regions.help_close = Some(close_area);
}

/// Close button on the top border, two cells from the right corner
fn close_button_area(popup_area: Rect) -> Rect {
    let width = HELP_CLOSE_LABEL.len() as u16;
    Rect {
        x: popup_area.right().saturating_sub(width + 2).max(popup_area.x),
        y: popup_area.y,
        width: width.min(popup_area.width),
        height: 1,
    }
}

#[cfg(test)]
#[path = "help_popup_render_tests.rs"]
mod help_popup_render_tests;
