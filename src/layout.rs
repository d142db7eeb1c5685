//! Layout module for tracking UI component regions
//!
//! Render passes record where components were drawn in `LayoutRegions`;
//! `region_at()` then resolves which component sits under the mouse.

mod layout_regions;

pub use layout_hit_test::region_at;
pub use layout_regions::{LayoutRegions, Region, WindowButton};
