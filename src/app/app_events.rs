use std::time::Instant;

use ratatui::crossterm::event::{
    Event, KeyEvent, KeyEventKind, MouseButton, MouseEvent, MouseEventKind,
};

use super::app_state::{App, Focus};
use super::{mouse_click, mouse_hover};
use crate::keys::{Action, Dispatch, dispatch_key};
use crate::layout::region_at;

impl App {
    /// Route one terminal event
    pub fn handle_event(&mut self, event: Event) {
        match event {
            // Check that it's a key press event to avoid duplicates
            Event::Key(key) if key.kind == KeyEventKind::Press => self.handle_key_event(key),
            Event::Mouse(mouse) => self.handle_mouse_event(mouse),
            _ => {}
        }
    }

    pub fn handle_key_event(&mut self, key: KeyEvent) {
        match dispatch_key(key, self.key_context()) {
            Dispatch::Handled(action) => self.apply_action(action, Instant::now()),
            Dispatch::Blocked => {}
            Dispatch::Unhandled => {
                if self.input_focused() {
                    self.forward_to_search(key);
                }
            }
        }
    }

    pub fn apply_action(&mut self, action: Action, now: Instant) {
        log::debug!("Action: {:?}", action);

        match action {
            Action::OpenHelp => {
                self.nav.open_help();
                self.help.reset();
            }
            Action::CloseHelp => self.nav.close_help(),
            Action::ScrollHelp(scroll) => self.help.apply_scroll(scroll),
            Action::CloseOverview => {
                self.nav.close_overview();
                self.leave_overview();
            }
            Action::ToggleOverview => {
                self.nav.toggle_overview();
                self.focus = Focus::Windows;
                self.hovered_card = None;
            }
            Action::JumpToTopic(position) => self.nav.jump_to_topic(position),
            Action::NextTopic => self.nav.go_to_next(now),
            Action::PreviousTopic => self.nav.go_to_previous(now),
            Action::FocusNextWindow => self.nav.focus_next(),
            Action::FocusPreviousWindow => self.nav.focus_previous(),
            Action::SelectFocusedWindow => self.select_window(self.nav.overview_focused_index()),
            Action::FocusSearch => self.focus = Focus::SearchInput,
            Action::FocusWindows => self.focus = Focus::Windows,
            Action::ToggleStatusBar => self.nav.toggle_status_bar(),
            Action::Quit => self.should_quit = true,
        }
    }

    /// Open the window at a filtered-list position and return to focused view
    pub fn select_window(&mut self, filtered_index: usize) {
        self.nav.select_window(filtered_index);
        self.leave_overview();
    }

    /// Expire the transient slide indicator
    pub fn tick(&mut self, now: Instant) {
        self.nav.tick(now);
    }

    fn handle_mouse_event(&mut self, mouse: MouseEvent) {
        let region = region_at(&self.layout_regions, mouse.column, mouse.row);

        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => mouse_click::handle_click(self, region),
            MouseEventKind::Moved => mouse_hover::handle_hover(self, region, mouse),
            MouseEventKind::ScrollDown => self.scroll_with_wheel(true),
            MouseEventKind::ScrollUp => self.scroll_with_wheel(false),
            _ => {}
        }
    }

    fn scroll_with_wheel(&mut self, down: bool) {
        let scroll = if self.nav.show_help_modal() {
            &mut self.help.scroll
        } else if self.nav.is_overview() {
            &mut self.grid_scroll
        } else {
            return;
        };

        if down {
            scroll.scroll_down(1);
        } else {
            scroll.scroll_up(1);
        }
    }

    /// Reset overview-only UI state once the overview is no longer shown
    fn leave_overview(&mut self) {
        if !self.nav.is_overview() {
            self.focus = Focus::Windows;
            self.hovered_card = None;
        }
    }

    fn forward_to_search(&mut self, key: KeyEvent) {
        if self.search.input(key) {
            let query = self.search.query().to_string();
            self.nav.set_search_query(&query);
            self.hovered_card = None;
        }
    }
}

#[cfg(test)]
#[path = "app_events_tests.rs"]
mod app_events_tests;
