//! Liquify - geometric warps driven by a displacement field
//!
//! Every recomposition reads from the base snapshot captured when the tool
//! first touched the raster, so the output is always a pure function of
//! (base, field) and reset is exact.

pub mod compositor;
pub mod field;
pub mod modes;
mod tool;

pub use compositor::recompose;
pub use field::{DisplacementField, Offset};
pub use modes::{PointerDelta, TwirlDirection, WarpMode};
pub use tool::LiquifyTool;
