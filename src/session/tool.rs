//! Stroke tool interface - the per-tool half of a brush session
//!
//! The controller owns the lifecycle; a tool owns its snapshots and knows
//! how to turn brush samples into pixels.

use image::RgbaImage;

use super::host::HistoryKind;
use crate::error::Result;
use crate::input::Point;
use crate::raster::{RasterTarget, Rect, TargetId};

/// When processed samples become visible on the scene
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlushPolicy {
    /// Publish after every sample
    Immediate,
    /// Publish at most once per animation frame
    Coalesced,
}

pub trait StrokeTool {
    /// Short name used as the log prefix
    fn name(&self) -> &'static str;

    fn history_kind(&self) -> HistoryKind;

    fn flush_policy(&self) -> FlushPolicy;

    fn is_initialized(&self) -> bool;

    /// Size of the snapshot the tool was initialized from
    fn dimensions(&self) -> Option<(u32, u32)>;

    /// Capture snapshots from `raster`. Fails if it has no pixel data.
    fn initialize(&mut self, id: TargetId, raster: &RasterTarget) -> Result<()>;

    /// Pointer went down at image-local `at`. Returns the modified region.
    fn begin_stroke(&mut self, raster: &RasterTarget, at: Point) -> Rect;

    /// Pointer moved from `from` to `to`. Returns the modified region.
    fn stroke_to(&mut self, from: Point, to: Point) -> Rect;

    /// Bring the output up to date and return it
    fn flush(&mut self) -> Option<&RgbaImage>;

    /// Drop all state and return the pixels captured at initialization
    fn reset(&mut self) -> Option<RgbaImage>;

    /// Drop all state for the current target
    fn invalidate(&mut self);
}
