//! Search module
//!
//! The overview search field. Its text drives the topic filter held by the
//! navigation state.

pub mod search_render;
mod search_state;

pub use search_state::SearchState;
