//! Search bar rendering
//!
//! This module handles rendering of the search bar at the top of the overview.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders},
};

use crate::app::{App, Focus};

// Search bar display constants
pub const SEARCH_BAR_HEIGHT: u16 = 3;

/// Render the search bar with its "(matches/total)" counter
pub fn render_bar(app: &mut App, frame: &mut Frame, area: Rect) {
    let matched = app.nav.filtered_topics().len();
    let total = app.nav.topic_count();
    let focused = app.focus == Focus::SearchInput;

    let match_count_style = if matched == 0 {
        Style::default().fg(Color::Red)
    } else {
        Style::default().fg(Color::Gray)
    };

    let border_color = if focused { Color::Cyan } else { Color::DarkGray };

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Search ")
        .title_top(
            Line::from(Span::styled(
                format!(" ({}/{}) ", matched, total),
                match_count_style,
            ))
            .alignment(Alignment::Right),
        )
        .border_style(Style::default().fg(border_color))
        .style(Style::default().bg(Color::Black));

    let inner_area = block.inner(area);
    frame.render_widget(block, area);

    let search_textarea = app.search.search_textarea_mut();
    search_textarea.set_style(Style::default().fg(Color::White).bg(Color::Black));
    if focused {
        search_textarea.set_cursor_style(Style::default().add_modifier(Modifier::REVERSED));
    } else {
        // Hide the cursor while the grid has focus
        search_textarea.set_cursor_style(Style::default());
    }
    frame.render_widget(&*search_textarea, inner_area);

    app.layout_regions.search_bar = Some(area);
}

#[cfg(test)]
#[path = "search_render_tests.rs"]
mod search_render_tests;
