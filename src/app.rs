mod app_events;
mod app_render;
mod app_state;
mod mouse_click;
mod mouse_hover;

// Re-export public types
pub use app_state::{App, Focus};
pub use mouse_hover::parallax_offset;
