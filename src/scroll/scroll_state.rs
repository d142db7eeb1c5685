#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScrollState {
    pub offset: u16,
    pub max_offset: u16,
    pub viewport_height: u16,
}

impl ScrollState {
    pub fn new() -> Self {
        Self {
            offset: 0,
            max_offset: 0,
            viewport_height: 0,
        }
    }

    pub fn update_bounds(&mut self, content_lines: u32, viewport_height: u16) {
        self.viewport_height = viewport_height;

        // Clamp to u16::MAX for ratatui compatibility
        self.max_offset = content_lines
            .saturating_sub(viewport_height as u32)
            .min(u16::MAX as u32) as u16;

        self.offset = self.offset.min(self.max_offset);
    }

    pub fn scroll_down(&mut self, lines: u16) {
        self.offset = self.offset.saturating_add(lines).min(self.max_offset);
    }

    pub fn scroll_up(&mut self, lines: u16) {
        self.offset = self.offset.saturating_sub(lines);
    }

    pub fn page_down(&mut self) {
        let half_page = (self.viewport_height / 2).max(1);
        self.scroll_down(half_page);
    }

    pub fn page_up(&mut self) {
        let half_page = (self.viewport_height / 2).max(1);
        self.scroll_up(half_page);
    }

    pub fn jump_to_top(&mut self) {
        self.offset = 0;
    }

    pub fn jump_to_bottom(&mut self) {
        self.offset = self.max_offset;
    }

    pub fn reset(&mut self) {
        self.offset = 0;
    }

    /// Scroll the least amount needed for `line` to be inside the viewport
    pub fn ensure_visible(&mut self, line: u32) {
        if self.viewport_height == 0 {
            return;
        }

        let line = line.min(u16::MAX as u32) as u16;
        let visible_end = self.offset.saturating_add(self.viewport_height);

        if line < self.offset {
            self.offset = line;
        } else if line >= visible_end {
            self.offset = line
                .saturating_add(1)
                .saturating_sub(self.viewport_height)
                .min(self.max_offset);
        }
    }
}

impl Default for ScrollState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "scroll_state_tests.rs"]
mod scroll_state_tests;
