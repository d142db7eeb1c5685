use ratatui::{Frame, layout::Rect, widgets::Clear};

pub fn centered_popup(frame_area: Rect, width: u16, height: u16) -> Rect {
    let popup_width = width.min(frame_area.width);
    let popup_height = height.min(frame_area.height);

    let popup_x = frame_area.x + (frame_area.width.saturating_sub(popup_width)) / 2;
    let popup_y = frame_area.y + (frame_area.height.saturating_sub(popup_height)) / 2;

    Rect {
        x: popup_x,
        y: popup_y,
        width: popup_width,
        height: popup_height,
    }
}

pub fn inset_rect(area: Rect, horizontal_margin: u16, vertical_margin: u16) -> Rect {
    Rect {
        x: area.x + horizontal_margin.min(area.width / 2),
        y: area.y + vertical_margin.min(area.height / 2),
        width: area.width.saturating_sub(horizontal_margin * 2),
        height: area.height.saturating_sub(vertical_margin * 2),
    }
}

/// Shift `area` by a signed offset while keeping it inside `bounds`
pub fn offset_rect(area: Rect, dx: i16, dy: i16, bounds: Rect) -> Rect {
    let shift = |pos: u16, delta: i16, min: u16, max: u16| -> u16 {
        let moved = pos as i32 + delta as i32;
        moved.clamp(min as i32, max.max(min) as i32) as u16
    };

    Rect {
        x: shift(
            area.x,
            dx,
            bounds.x,
            bounds.right().saturating_sub(area.width),
        ),
        y: shift(
            area.y,
            dy,
            bounds.y,
            bounds.bottom().saturating_sub(area.height),
        ),
        ..area
    }
}

pub fn clear_area(frame: &mut Frame, area: Rect) {
    frame.render_widget(Clear, area);
}

#[cfg(test)]
#[path = "popup_tests.rs"]
mod popup_tests;
