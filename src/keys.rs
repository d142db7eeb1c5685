//! Keyboard dispatch module
//!
//! Translates key events into navigation actions through an ordered guard
//! chain. Kept free of rendering and app state so precedence rules can be
//! tested on their own.

mod action;
mod dispatch;

pub use action::{Action, Dispatch, HelpScroll};
pub use dispatch::{KeyContext, dispatch_key};
