//! Topic window rendering
//!
//! Two mutually exclusive views: the focused view draws the current topic
//! as a full window, the overview draws the filtered topics as a grid of
//! cards.

pub mod focused_render;
pub mod overview_render;
mod window_frame;
