//! Pointer input and view-space mapping
//!
//! Pointer events arrive in container (viewport) coordinates. The mapper
//! turns them into image-local pixel coordinates of a raster target.

pub mod mapper;

pub use mapper::{resolve, to_canvas_space, to_image_local};

use serde::{Deserialize, Serialize};

/// A 2D point in whatever space the caller is working in
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn distance_to(&self, other: &Point) -> f32 {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        (dx * dx + dy * dy).sqrt()
    }
}

/// Raw pointer sample as delivered by the host UI
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PointerSample {
    /// Position relative to the client viewport
    pub client_x: f32,
    pub client_y: f32,
    /// Timestamp in milliseconds (host clock)
    pub timestamp_ms: u64,
}

impl PointerSample {
    pub fn new(client_x: f32, client_y: f32) -> Self {
        Self {
            client_x,
            client_y,
            timestamp_ms: 0,
        }
    }
}

/// Current view transform of the editor canvas, read on every event
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewTransform {
    /// Top-left of the canvas container in client coordinates
    pub container_origin: Point,
    pub pan: Point,
    /// Zoom level, 100 = 1:1
    pub zoom_percent: f32,
}

impl Default for ViewTransform {
    fn default() -> Self {
        Self {
            container_origin: Point::default(),
            pan: Point::default(),
            zoom_percent: 100.0,
        }
    }
}
