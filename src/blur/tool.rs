//! Blur tool - live working buffer blurred dab by dab

use image::RgbaImage;

use super::compositor::blur_dab;
use crate::config::BlurSettings;
use crate::error::{DeformError, Result};
use crate::input::Point;
use crate::raster::{RasterTarget, Rect, TargetId};
use crate::session::{FlushPolicy, HistoryKind, StrokeTool};

/// Blur brush state for one bound raster
pub struct BlurTool {
    settings: BlurSettings,
    /// Image as it was when the tool first touched the raster
    original: Option<RgbaImage>,
    /// Live buffer every dab reads from and writes to
    working: RgbaImage,
}

impl BlurTool {
    pub fn new(settings: BlurSettings) -> Self {
        Self {
            settings,
            original: None,
            working: RgbaImage::new(0, 0),
        }
    }

    pub fn settings(&self) -> &BlurSettings {
        &self.settings
    }

    pub fn settings_mut(&mut self) -> &mut BlurSettings {
        &mut self.settings
    }

    pub fn set_size(&mut self, size: f32) {
        self.settings.size = size;
    }

    pub fn set_strength(&mut self, strength: f32) {
        self.settings.strength = strength;
    }

    pub fn set_hardness(&mut self, hardness: f32) {
        self.settings.hardness = hardness;
    }

    /// Current contents of the live buffer
    pub fn buffer(&self) -> &RgbaImage {
        &self.working
    }

    fn dab(&mut self, at: Point) -> Rect {
        blur_dab(
            &mut self.working,
            at,
            self.settings.brush_size(),
            self.settings.blur_radius(),
            self.settings.opacity(),
        )
    }
}

impl Default for BlurTool {
    fn default() -> Self {
        Self::new(BlurSettings::default())
    }
}

impl StrokeTool for BlurTool {
    fn name(&self) -> &'static str {
        "Blur"
    }

    fn history_kind(&self) -> HistoryKind {
        HistoryKind::BlurApplied
    }

    fn flush_policy(&self) -> FlushPolicy {
        FlushPolicy::Immediate
    }

    fn is_initialized(&self) -> bool {
        self.original.is_some()
    }

    fn dimensions(&self) -> Option<(u32, u32)> {
        self.original.as_ref().map(|o| o.dimensions())
    }

    fn initialize(&mut self, id: TargetId, raster: &RasterTarget) -> Result<()> {
        if !raster.has_pixels() {
            return Err(DeformError::NoPixelData(id));
        }
        self.original = Some(raster.pixels.clone());
        self.working = raster.pixels.clone();
        tracing::info!(
            "[Blur] Captured original {}x{} for {:?}",
            raster.width(),
            raster.height(),
            id
        );
        Ok(())
    }

    fn begin_stroke(&mut self, raster: &RasterTarget, at: Point) -> Rect {
        // Pick up whatever the scene holds now
        if raster.pixels.dimensions() == self.working.dimensions() {
            self.working.copy_from_slice(raster.pixels.as_raw());
        }
        self.dab(at)
    }

    fn stroke_to(&mut self, _from: Point, to: Point) -> Rect {
        self.dab(to)
    }

    fn flush(&mut self) -> Option<&RgbaImage> {
        self.original.as_ref()?;
        Some(&self.working)
    }

    fn reset(&mut self) -> Option<RgbaImage> {
        let original = self.original.take()?;
        self.invalidate();
        tracing::info!("[Blur] Reset to original image");
        Some(original)
    }

    fn invalidate(&mut self) {
        self.original = None;
        self.working = RgbaImage::new(0, 0);
    }
}
