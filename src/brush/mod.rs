//! Brush model shared by the liquify and blur tools
//!
//! - `falloff`: distance-based weight of a pixel under the brush
//! - `footprint`: iteration over the brush's bounding box, clipped to the raster
//! - `blend`: premultiplied compositing for the blur write-back

pub mod blend;
pub mod falloff;
pub mod footprint;

pub use falloff::weight;
pub use footprint::{Footprint, FootprintPixel};
