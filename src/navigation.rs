//! Navigation module
//!
//! Owns the interactive state of the presentation: which topic is current,
//! whether the overview grid is shown, the search filter and the transient
//! slide indicator.

mod nav_state;
mod slide;

pub use nav_state::NavigationState;
pub use slide::{DEFAULT_SLIDE_DURATION, SlideDirection, SlideTransition};
