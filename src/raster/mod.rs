//! Raster targets - the image layers a brush deforms
//!
//! A raster target is owned by the host scene. The engine only ever reads its
//! pixels and transform, and hands replacement pixels back through
//! [`SceneHost::publish`](crate::session::SceneHost::publish).

mod pixel;
mod rect;

pub use pixel::Pixel;
pub use rect::Rect;

use image::RgbaImage;
use serde::{Deserialize, Serialize};

/// Host-side identifier of a raster node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TargetId(pub u64);

/// Placement of a raster on the scene
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RasterTransform {
    /// Scene position of the raster's pivot
    pub x: f32,
    pub y: f32,
    pub scale_x: f32,
    pub scale_y: f32,
    /// Rotation in radians
    pub rotation: f32,
    /// Pivot offset in image-local pixels
    pub offset_x: f32,
    pub offset_y: f32,
}

impl Default for RasterTransform {
    fn default() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            scale_x: 1.0,
            scale_y: 1.0,
            rotation: 0.0,
            offset_x: 0.0,
            offset_y: 0.0,
        }
    }
}

impl RasterTransform {
    pub fn at(x: f32, y: f32) -> Self {
        Self {
            x,
            y,
            ..Default::default()
        }
    }
}

/// Pixel buffer plus scene transform
#[derive(Debug, Clone)]
pub struct RasterTarget {
    pub pixels: RgbaImage,
    pub transform: RasterTransform,
}

impl RasterTarget {
    pub fn new(pixels: RgbaImage, transform: RasterTransform) -> Self {
        Self { pixels, transform }
    }

    pub fn width(&self) -> u32 {
        self.pixels.width()
    }

    pub fn height(&self) -> u32 {
        self.pixels.height()
    }

    /// Whether the buffer holds at least one pixel
    pub fn has_pixels(&self) -> bool {
        self.pixels.width() > 0 && self.pixels.height() > 0
    }

    /// Full-image rect
    pub fn bounds(&self) -> Rect {
        Rect::new(0, 0, self.width() as i32, self.height() as i32)
    }
}

/// Copy `region` of `src` into `dst`.
///
/// Falls back to a full copy when the dimensions differ.
pub fn copy_region(dst: &mut RgbaImage, src: &RgbaImage, region: Rect) {
    if dst.dimensions() != src.dimensions() {
        *dst = src.clone();
        return;
    }
    let (width, height) = src.dimensions();
    let region = region.clamped(width, height);
    if region.is_empty() {
        return;
    }
    let stride = width as usize * 4;
    let (left, right) = (region.left as usize * 4, region.right as usize * 4);
    let src_raw: &[u8] = src;
    let dst_raw: &mut [u8] = dst;
    for y in region.top as usize..region.bottom as usize {
        let row = y * stride;
        dst_raw[row + left..row + right].copy_from_slice(&src_raw[row + left..row + right]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    #[test]
    fn test_empty_raster_has_no_pixels() {
        let raster = RasterTarget::new(RgbaImage::new(0, 10), RasterTransform::default());
        assert!(!raster.has_pixels());
    }

    #[test]
    fn test_raster_dimensions() {
        let raster = RasterTarget::new(
            RgbaImage::from_pixel(4, 3, Rgba([1, 2, 3, 255])),
            RasterTransform::at(10.0, 20.0),
        );
        assert!(raster.has_pixels());
        assert_eq!((raster.width(), raster.height()), (4, 3));
        assert_eq!(raster.transform.scale_x, 1.0);
        assert_eq!(raster.bounds(), Rect::new(0, 0, 4, 3));
    }

    #[test]
    fn test_copy_region_touches_only_region() {
        let src = RgbaImage::from_pixel(6, 6, Rgba([200, 0, 0, 255]));
        let mut dst = RgbaImage::from_pixel(6, 6, Rgba([0, 0, 200, 255]));

        copy_region(&mut dst, &src, Rect::new(2, 1, 4, 3));

        assert_eq!(dst.get_pixel(2, 1), &Rgba([200, 0, 0, 255]));
        assert_eq!(dst.get_pixel(3, 2), &Rgba([200, 0, 0, 255]));
        assert_eq!(dst.get_pixel(4, 2), &Rgba([0, 0, 200, 255]));
        assert_eq!(dst.get_pixel(2, 3), &Rgba([0, 0, 200, 255]));
    }

    #[test]
    fn test_copy_region_resizes_mismatched_target() {
        let src = RgbaImage::from_pixel(3, 3, Rgba([1, 2, 3, 4]));
        let mut dst = RgbaImage::new(5, 5);
        copy_region(&mut dst, &src, Rect::empty());
        assert_eq!(dst, src);
    }
}
