//! Coordinate mapper: client space -> canvas space -> image-local pixels
//!
//! `to_image_local` is the only bounds gate for brush work. Anything that
//! resolves to `None` here never reaches a warp or blur write.

use super::{Point, PointerSample, ViewTransform};
use crate::raster::RasterTarget;

const MIN_SCALE: f32 = 1e-6;

/// Convert client coordinates to unzoomed canvas coordinates.
///
/// Returns `None` for a non-positive zoom.
pub fn to_canvas_space(client_x: f32, client_y: f32, view: &ViewTransform) -> Option<Point> {
    let zoom = view.zoom_percent / 100.0;
    if !zoom.is_finite() || zoom <= MIN_SCALE {
        return None;
    }
    Some(Point {
        x: (client_x - view.container_origin.x - view.pan.x) / zoom,
        y: (client_y - view.container_origin.y - view.pan.y) / zoom,
    })
}

/// Convert a canvas point into the raster's local pixel space.
///
/// Undoes position, rotation and scale, then re-applies the pivot offset.
/// Returns `None` when the result falls outside `[0, width) x [0, height)`
/// or the raster has a degenerate scale.
pub fn to_image_local(canvas: Point, target: &RasterTarget) -> Option<Point> {
    let t = &target.transform;
    if t.scale_x.abs() < MIN_SCALE || t.scale_y.abs() < MIN_SCALE {
        return None;
    }

    let tx = canvas.x - t.x;
    let ty = canvas.y - t.y;

    let (sin, cos) = (-t.rotation).sin_cos();
    let rx = tx * cos - ty * sin;
    let ry = tx * sin + ty * cos;

    let lx = rx / t.scale_x + t.offset_x;
    let ly = ry / t.scale_y + t.offset_y;

    if !lx.is_finite() || !ly.is_finite() {
        return None;
    }
    if lx < 0.0 || ly < 0.0 || lx >= target.width() as f32 || ly >= target.height() as f32 {
        return None;
    }
    Some(Point { x: lx, y: ly })
}

/// Full pointer-to-pixel mapping used by the session controller
pub fn resolve(sample: &PointerSample, view: &ViewTransform, target: &RasterTarget) -> Option<Point> {
    let canvas = to_canvas_space(sample.client_x, sample.client_y, view)?;
    to_image_local(canvas, target)
}
