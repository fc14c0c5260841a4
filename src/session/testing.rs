//! In-memory host collaborators for lifecycle tests

use std::collections::HashMap;

use image::{Rgba, RgbaImage};

use super::host::{HistoryEntry, HistorySink, SceneHost};
use crate::input::ViewTransform;
use crate::raster::{copy_region, RasterTarget, RasterTransform, Rect, TargetId};

#[derive(Default)]
pub struct MemoryScene {
    pub rasters: HashMap<TargetId, RasterTarget>,
    pub view: ViewTransform,
    pub publish_count: usize,
    /// Dirty rect of every publish, in order
    pub published: Vec<Rect>,
}

impl MemoryScene {
    pub fn with_raster(id: TargetId, raster: RasterTarget) -> Self {
        let mut scene = Self::default();
        scene.rasters.insert(id, raster);
        scene
    }

    pub fn pixels(&self, id: TargetId) -> &RgbaImage {
        &self.rasters[&id].pixels
    }
}

impl SceneHost for MemoryScene {
    fn raster(&self, id: TargetId) -> Option<&RasterTarget> {
        self.rasters.get(&id)
    }

    fn publish(&mut self, id: TargetId, pixels: &RgbaImage, dirty: Rect) {
        if let Some(raster) = self.rasters.get_mut(&id) {
            copy_region(&mut raster.pixels, pixels, dirty);
            self.publish_count += 1;
            self.published.push(dirty);
        }
    }

    fn view(&self) -> ViewTransform {
        self.view
    }
}

#[derive(Default)]
pub struct RecordingHistory {
    pub entries: Vec<HistoryEntry>,
}

impl HistorySink for RecordingHistory {
    fn commit_history_entry(&mut self, entry: HistoryEntry) {
        self.entries.push(entry);
    }
}

/// Opaque `size x size` raster at the scene origin with distinct pixels
pub fn gradient_raster(size: u32) -> RasterTarget {
    RasterTarget::new(
        RgbaImage::from_fn(size, size, |x, y| {
            Rgba([(x * 255 / size) as u8, (y * 255 / size) as u8, ((x + y) % 256) as u8, 255])
        }),
        RasterTransform::default(),
    )
}
