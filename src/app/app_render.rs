use ratatui::{
    Frame,
    layout::{Constraint, Layout},
};

use super::app_state::App;
use crate::windows::{focused_render, overview_render};

impl App {
    pub fn render(&mut self, frame: &mut Frame) {
        self.layout_regions.clear();
        self.layout_regions.frame = frame.area();

        let [main_area, status_area] =
            Layout::vertical([Constraint::Min(3), Constraint::Length(1)]).areas(frame.area());

        if self.nav.is_overview() {
            overview_render::render(self, frame, main_area);
        } else {
            focused_render::render(self, frame, main_area);
        }

        crate::status_bar::render_bar(self, frame, status_area);

        if self.nav.show_help_modal() {
            crate::help::help_popup_render::render_popup(self, frame);
        }
    }
}

#[cfg(test)]
#[path = "app_render_tests.rs"]
mod app_render_tests;
