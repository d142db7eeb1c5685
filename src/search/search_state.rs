use ratatui::crossterm::event::KeyEvent;
use ratatui::style::{Modifier, Style};
use tui_textarea::TextArea;

/// Creates a TextArea configured for search input.
fn create_search_textarea() -> TextArea<'static> {
    let mut textarea = TextArea::default();
    textarea.set_cursor_line_style(Style::default());
    textarea.set_cursor_style(Style::default().add_modifier(Modifier::REVERSED));
    textarea.set_placeholder_text("Type to filter topics");
    textarea
}

/// Single-line text field holding the overview search query
pub struct SearchState {
    search_textarea: TextArea<'static>,
}

impl Default for SearchState {
    fn default() -> Self {
        Self::new()
    }
}

impl SearchState {
    pub fn new() -> Self {
        Self {
            search_textarea: create_search_textarea(),
        }
    }

    /// Returns the current search query
    pub fn query(&self) -> &str {
        self.search_textarea
            .lines()
            .first()
            .map(|s| s.as_str())
            .unwrap_or("")
    }

    /// Feed a key to the text field. Returns true if the text changed.
    ///
    /// Line breaks are never inserted; the field stays single-line.
    pub fn input(&mut self, key: KeyEvent) -> bool {
        use ratatui::crossterm::event::{KeyCode, KeyModifiers};

        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Enter => return false,
            KeyCode::Char('m') | KeyCode::Char('j') if ctrl => return false,
            _ => {}
        }
        self.search_textarea.input(key)
    }

    /// Returns a mutable reference to the search TextArea for rendering
    pub fn search_textarea_mut(&mut self) -> &mut TextArea<'static> {
        &mut self.search_textarea
    }
}

#[cfg(test)]
#[path = "search_state_tests.rs"]
mod search_state_tests;
