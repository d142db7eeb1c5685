use crate::config::Config;
use crate::help::HelpPopupState;
use crate::keys::KeyContext;
use crate::layout::LayoutRegions;
use crate::navigation::NavigationState;
use crate::scroll::ScrollState;
use crate::search::SearchState;
use crate::topics::TOPICS;

/// Where keyboard input goes while the overview is shown
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Windows,
    SearchInput,
}

/// Application state
pub struct App {
    pub nav: NavigationState,
    pub search: SearchState,
    pub help: HelpPopupState,
    pub focus: Focus,
    pub layout_regions: LayoutRegions,
    /// Overview grid scroll, in card rows
    pub grid_scroll: ScrollState,
    /// Overview card under the mouse pointer
    pub hovered_card: Option<usize>,
    /// One-cell shift of the focused window toward the pointer
    pub parallax: (i16, i16),
    pub parallax_enabled: bool,
    pub should_quit: bool,
}

impl App {
    pub fn new(config: &Config) -> Self {
        let mut nav = NavigationState::new(TOPICS, config.ui.slide_duration());
        nav.set_status_bar_collapsed(config.ui.status_bar_collapsed);

        Self {
            nav,
            search: SearchState::new(),
            help: HelpPopupState::new(),
            focus: Focus::Windows,
            layout_regions: LayoutRegions::new(),
            grid_scroll: ScrollState::new(),
            hovered_card: None,
            parallax: (0, 0),
            parallax_enabled: config.ui.parallax,
            should_quit: false,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Whether keystrokes currently land in the search field
    pub fn input_focused(&self) -> bool {
        self.nav.is_overview() && self.focus == Focus::SearchInput
    }

    pub fn key_context(&self) -> KeyContext {
        KeyContext {
            overview: self.nav.is_overview(),
            help_open: self.nav.show_help_modal(),
            input_focused: self.input_focused(),
            filtered_len: self.nav.filtered_topics().len(),
        }
    }
}

#[cfg(test)]
#[path = "app_state_tests.rs"]
mod app_state_tests;
