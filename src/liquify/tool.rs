//! Liquify tool - base snapshot, displacement field and coalesced recompose

use image::RgbaImage;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use super::compositor::recompose_into;
use super::field::DisplacementField;
use super::modes::{self, PointerDelta, TwirlDirection, WarpMode};
use crate::brush::Footprint;
use crate::config::LiquifySettings;
use crate::error::{DeformError, Result};
use crate::input::Point;
use crate::raster::{RasterTarget, Rect, TargetId};
use crate::session::{FlushPolicy, HistoryKind, StrokeTool};

/// Liquify brush state for one bound raster
pub struct LiquifyTool {
    settings: LiquifySettings,
    /// Pristine pixels; `None` until the first stroke touches the raster
    base: Option<RgbaImage>,
    field: DisplacementField,
    output: RgbaImage,
    rng: ChaCha8Rng,
    /// Field changed since the last recomposition
    dirty: bool,
}

impl LiquifyTool {
    pub fn new(settings: LiquifySettings) -> Self {
        let rng = ChaCha8Rng::seed_from_u64(settings.seed);
        Self {
            settings,
            base: None,
            field: DisplacementField::default(),
            output: RgbaImage::new(0, 0),
            rng,
            dirty: false,
        }
    }

    pub fn settings(&self) -> &LiquifySettings {
        &self.settings
    }

    pub fn settings_mut(&mut self) -> &mut LiquifySettings {
        &mut self.settings
    }

    pub fn set_size(&mut self, size: f32) {
        self.settings.size = size;
    }

    pub fn set_strength(&mut self, strength: f32) {
        self.settings.strength = strength;
    }

    pub fn set_mode(&mut self, mode: WarpMode) {
        self.settings.mode = mode;
    }

    pub fn set_twirl_direction(&mut self, direction: TwirlDirection) {
        self.settings.twirl_direction = direction;
    }

    pub fn field(&self) -> &DisplacementField {
        &self.field
    }

    pub fn base(&self) -> Option<&RgbaImage> {
        self.base.as_ref()
    }

    /// Apply the current mode around `to`, using the movement since `from`.
    fn warp(&mut self, from: Point, to: Point) -> Rect {
        let Some(base) = &self.base else {
            return Rect::empty();
        };
        let (width, height) = base.dimensions();
        let footprint = Footprint::new(
            to,
            self.settings.brush_size(),
            self.settings.brush_strength(),
            width,
            height,
        );
        let delta = PointerDelta {
            dx: to.x - from.x,
            dy: to.y - from.y,
        };
        let mode = self.settings.mode;
        let direction = self.settings.twirl_direction;

        for px in footprint.pixels() {
            modes::apply(&mut self.field, &px, mode, delta, direction, &mut self.rng);
            self.dirty = true;
        }
        footprint.bounds()
    }
}

impl Default for LiquifyTool {
    fn default() -> Self {
        Self::new(LiquifySettings::default())
    }
}

impl StrokeTool for LiquifyTool {
    fn name(&self) -> &'static str {
        "Liquify"
    }

    fn history_kind(&self) -> HistoryKind {
        HistoryKind::LiquifyApplied
    }

    fn flush_policy(&self) -> FlushPolicy {
        FlushPolicy::Coalesced
    }

    fn is_initialized(&self) -> bool {
        self.base.is_some()
    }

    fn dimensions(&self) -> Option<(u32, u32)> {
        self.base.as_ref().map(|b| b.dimensions())
    }

    fn initialize(&mut self, id: TargetId, raster: &RasterTarget) -> Result<()> {
        if !raster.has_pixels() {
            return Err(DeformError::NoPixelData(id));
        }
        let (width, height) = raster.pixels.dimensions();
        self.base = Some(raster.pixels.clone());
        self.output = raster.pixels.clone();
        self.field = DisplacementField::new(width, height);
        self.rng = ChaCha8Rng::seed_from_u64(self.settings.seed);
        self.dirty = false;
        tracing::info!("[Liquify] Captured base snapshot {}x{} for {:?}", width, height, id);
        Ok(())
    }

    fn begin_stroke(&mut self, _raster: &RasterTarget, _at: Point) -> Rect {
        Rect::empty()
    }

    fn stroke_to(&mut self, from: Point, to: Point) -> Rect {
        self.warp(from, to)
    }

    fn flush(&mut self) -> Option<&RgbaImage> {
        let base = self.base.as_ref()?;
        if self.dirty {
            recompose_into(base, &self.field, &mut self.output);
            self.dirty = false;
            tracing::trace!("[Liquify] Recomposed with {} field entries", self.field.len());
        }
        Some(&self.output)
    }

    fn reset(&mut self) -> Option<RgbaImage> {
        let base = self.base.take()?;
        self.invalidate();
        tracing::info!("[Liquify] Reset to base snapshot");
        Some(base)
    }

    fn invalidate(&mut self) {
        self.base = None;
        self.field = DisplacementField::default();
        self.output = RgbaImage::new(0, 0);
        self.dirty = false;
    }
}
