/// A state transition requested by a key press
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    OpenHelp,
    CloseHelp,
    ScrollHelp(HelpScroll),
    CloseOverview,
    ToggleOverview,
    /// 1-based topic position, validated by the navigation state
    JumpToTopic(usize),
    NextTopic,
    PreviousTopic,
    FocusNextWindow,
    FocusPreviousWindow,
    SelectFocusedWindow,
    FocusSearch,
    FocusWindows,
    ToggleStatusBar,
    Quit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HelpScroll {
    LineUp,
    LineDown,
    PageUp,
    PageDown,
    Top,
    Bottom,
}

/// Outcome of running a key through the dispatcher
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dispatch {
    /// Key maps to an action; it is consumed
    Handled(Action),
    /// Key is swallowed without effect (modal help)
    Blocked,
    /// Key is free for the focused text input, if any
    Unhandled,
}

impl Dispatch {
    /// Whether the key must not reach the text input
    pub fn is_consumed(&self) -> bool {
        !matches!(self, Dispatch::Unhandled)
    }
}
