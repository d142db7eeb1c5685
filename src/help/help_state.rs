use crate::keys::HelpScroll;
use crate::scroll::ScrollState;

pub struct HelpPopupState {
    pub scroll: ScrollState,
}

impl HelpPopupState {
    pub fn new() -> Self {
        Self {
            scroll: ScrollState::new(),
        }
    }

    pub fn apply_scroll(&mut self, scroll: HelpScroll) {
        match scroll {
            HelpScroll::LineUp => self.scroll.scroll_up(1),
            HelpScroll::LineDown => self.scroll.scroll_down(1),
            HelpScroll::PageUp => self.scroll.page_up(),
            HelpScroll::PageDown => self.scroll.page_down(),
            HelpScroll::Top => self.scroll.jump_to_top(),
            HelpScroll::Bottom => self.scroll.jump_to_bottom(),
        }
    }

    pub fn reset(&mut self) {
        self.scroll.reset();
    }
}

impl Default for HelpPopupState {
    fn default() -> Self {
        Self::new()
    }
}
