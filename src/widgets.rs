//! Shared rendering helpers

pub mod popup;
pub mod text;
