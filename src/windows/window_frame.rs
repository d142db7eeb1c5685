use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};
use unicode_width::UnicodeWidthStr;

use crate::layout::{LayoutRegions, WindowButton};
use crate::navigation::SlideDirection;

// Header bar layout: buttons separated by one space, two cells from the corner
const BUTTON_GAP: u16 = 1;
const BUTTON_RIGHT_MARGIN: u16 = 2;

/// Bordered block styled as a desktop window with a title in its header bar
pub fn window_block(title: &str, slide: SlideDirection, border_color: Color) -> Block<'static> {
    let indicator = match slide {
        SlideDirection::Left => "◀ ",
        SlideDirection::Right => "▶ ",
        SlideDirection::None => "",
    };

    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(border_color))
        .title(
            Line::from(vec![
                Span::raw(" "),
                Span::styled(indicator, Style::default().fg(Color::Yellow)),
                Span::styled(
                    title.to_string(),
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::raw(" "),
            ])
            .centered(),
        )
}

/// Draw minimize/maximize/close buttons on the top border of `window` and
/// record their hit areas
pub fn render_buttons(frame: &mut Frame, window: Rect, regions: &mut LayoutRegions) {
    let total: u16 = WindowButton::ALL
        .iter()
        .map(|b| b.glyph().width() as u16)
        .sum::<u16>()
        + BUTTON_GAP * (WindowButton::ALL.len() as u16 - 1);

    // Leave room for the corners and a centered title
    if window.width < total + BUTTON_RIGHT_MARGIN + 2 || window.height == 0 {
        return;
    }

    let mut x = window.right() - BUTTON_RIGHT_MARGIN - total;
    for button in WindowButton::ALL {
        let width = button.glyph().width() as u16;
        let rect = Rect {
            x,
            y: window.y,
            width,
            height: 1,
        };
        let color = match button {
            WindowButton::Close => Color::Red,
            _ => Color::Gray,
        };
        frame.render_widget(
            Paragraph::new(button.glyph()).style(Style::default().fg(color)),
            rect,
        );
        regions.window_buttons.push((button, rect));
        x += width + BUTTON_GAP;
    }
}
