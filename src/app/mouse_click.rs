//! Mouse click handling
//!
//! Routes left clicks to the component under the pointer.

use super::app_state::{App, Focus};
use crate::layout::Region;

/// Handle left mouse button click for the given region
pub fn handle_click(app: &mut App, region: Option<Region>) {
    // Help is modal even when the frame was too small to draw it
    if app.nav.show_help_modal() {
        if region == Some(Region::HelpClose) {
            app.nav.close_help();
        }
        return;
    }

    match region {
        // Minimize, maximize and close all open the overview
        Some(Region::WindowButton(_)) => click_window_button(app),
        Some(Region::Card(index)) => click_card(app, index),
        Some(Region::SearchBar) => click_search_bar(app),
        Some(Region::StatusBar) => app.nav.toggle_status_bar(),
        _ => {}
    }
}

fn click_window_button(app: &mut App) {
    if !app.nav.is_overview() {
        app.nav.enter_overview();
        app.focus = Focus::Windows;
    }
}

fn click_card(app: &mut App, index: usize) {
    if app.nav.is_overview() {
        app.select_window(index);
    }
}

fn click_search_bar(app: &mut App) {
    if app.nav.is_overview() {
        app.focus = Focus::SearchInput;
    }
}

#[cfg(test)]
#[path = "mouse_click_tests.rs"]
mod mouse_click_tests;
