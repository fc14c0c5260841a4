//! Blur - localized softening written back into the live buffer
//!
//! Unlike liquify there is no per-stroke baseline: every dab reads whatever
//! the buffer currently holds, so overlapping strokes keep compounding. Only
//! the image captured at initialization can be restored.

pub mod compositor;
mod tool;

pub use compositor::{blur_dab, box_blur};
pub use tool::BlurTool;
