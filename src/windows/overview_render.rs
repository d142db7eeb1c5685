//! Overview grid rendering
//!
//! Draws the search bar and the filtered topics as a grid of cards. The
//! grid scrolls by card rows; after each focus change the focused card's
//! row is brought into view using the layout of the same render pass.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use crate::app::{App, Focus};
use crate::search::search_render::{self, SEARCH_BAR_HEIGHT};
use crate::topics::Topic;
use crate::widgets::text::truncate_to_width;

pub const CARD_HEIGHT: u16 = 7;
pub const MIN_CARD_WIDTH: u16 = 32;

/// Number of card columns that fit in `width`
pub fn grid_columns(width: u16) -> usize {
    if width >= MIN_CARD_WIDTH * 2 { 2 } else { 1 }
}

pub fn render(app: &mut App, frame: &mut Frame, area: Rect) {
    let [search_area, grid_area] =
        Layout::vertical([Constraint::Length(SEARCH_BAR_HEIGHT), Constraint::Min(0)]).areas(area);

    search_render::render_bar(app, frame, search_area);

    let filtered = app.nav.filtered_topics();
    if filtered.is_empty() {
        render_no_matches(app, frame, grid_area);
        return;
    }

    let columns = grid_columns(grid_area.width);
    let rows = filtered.len().div_ceil(columns);
    let visible_rows = (grid_area.height / CARD_HEIGHT).max(1);

    app.grid_scroll.update_bounds(rows as u32, visible_rows);
    if let Some(focused) = app.nav.take_reveal_request() {
        app.grid_scroll.ensure_visible((focused / columns) as u32);
    }

    let first_row = app.grid_scroll.offset as usize;
    let focused_absolute = match app.focus {
        Focus::Windows => app.nav.focused_topic().map(|(absolute, _)| absolute),
        Focus::SearchInput => None,
    };
    let card_width = grid_area.width / columns as u16;

    for (index, (absolute, topic)) in filtered.iter().enumerate() {
        let row = index / columns;
        if row < first_row || row >= first_row + visible_rows as usize {
            continue;
        }
        let column = index % columns;

        let card = Rect {
            x: grid_area.x + column as u16 * card_width,
            y: grid_area.y + (row - first_row) as u16 * CARD_HEIGHT,
            width: card_width,
            height: CARD_HEIGHT.min(grid_area.height),
        }
        .intersection(grid_area);

        let style = CardStyle {
            focused: focused_absolute == Some(*absolute),
            hovered: app.hovered_card == Some(index),
            current: *absolute == app.nav.current_index(),
        };
        render_card(frame, card, *absolute, topic, style);
        app.layout_regions.cards.push((index, card));
    }
}

#[derive(Debug, Clone, Copy)]
struct CardStyle {
    focused: bool,
    hovered: bool,
    current: bool,
}

fn render_card(frame: &mut Frame, area: Rect, absolute: usize, topic: &Topic, style: CardStyle) {
    let (border_type, border_color) = if style.focused {
        (BorderType::Thick, Color::Cyan)
    } else if style.hovered {
        (BorderType::Rounded, Color::Yellow)
    } else {
        (BorderType::Rounded, Color::DarkGray)
    };

    let marker = if style.current { " ●" } else { "" };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(border_type)
        .border_style(Style::default().fg(border_color))
        .title(format!(" {}{} ", absolute + 1, marker));

    let text_width = block.inner(area).width.saturating_sub(2) as usize;
    let title_style = if style.focused {
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD)
    };

    let lines = vec![
        Line::from(Span::styled(
            truncate_to_width(&format!("{}  {}", topic.icon, topic.title), text_width),
            title_style,
        )),
        Line::from(Span::styled(
            truncate_to_width(topic.tagline, text_width),
            Style::default().fg(Color::Gray),
        )),
        Line::from(""),
        Line::from(Span::styled(
            truncate_to_width("Enter or click to open", text_width),
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let card = Paragraph::new(lines)
        .block(block)
        .alignment(Alignment::Center);
    frame.render_widget(card, area);
}

fn render_no_matches(app: &App, frame: &mut Frame, area: Rect) {
    let message = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled(
            format!("No topics match \"{}\"", app.nav.search_query()),
            Style::default().fg(Color::Red),
        )),
        Line::from(Span::styled(
            "Edit the search or press Esc to leave the overview",
            Style::default().fg(Color::DarkGray),
        )),
    ])
    .alignment(Alignment::Center);
    frame.render_widget(message, area);
}

#[cfg(test)]
#[path = "overview_render_tests.rs"]
mod overview_render_tests;
