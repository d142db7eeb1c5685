use ratatui::layout::Rect;

/// Header bar buttons of a focused window
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowButton {
    Minimize,
    Maximize,
    Close,
}

impl WindowButton {
    pub const ALL: [WindowButton; 3] = [
        WindowButton::Minimize,
        WindowButton::Maximize,
        WindowButton::Close,
    ];

    pub fn glyph(&self) -> &'static str {
        match self {
            WindowButton::Minimize => "[_]",
            WindowButton::Maximize => "[□]",
            WindowButton::Close => "[x]",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Region {
    Window,
    WindowButton(WindowButton),
    /// Overview card, by position in the filtered list
    Card(usize),
    SearchBar,
    StatusBar,
    HelpPopup,
    HelpClose,
}

/// Screen areas drawn during the last render pass
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LayoutRegions {
    pub frame: Rect,
    pub window: Option<Rect>,
    pub window_buttons: Vec<(WindowButton, Rect)>,
    pub cards: Vec<(usize, Rect)>,
    pub search_bar: Option<Rect>,
    pub status_bar: Option<Rect>,
    pub help_popup: Option<Rect>,
    pub help_close: Option<Rect>,
}

impl LayoutRegions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Forget everything; called at the start of each render pass
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}
