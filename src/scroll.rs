//! Scroll offset tracking shared by the help popup and the overview grid

mod scroll_state;

pub use scroll_state::ScrollState;
