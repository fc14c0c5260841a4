//! Blur compositor
//!
//! 1. copy the brush region (plus a blur-radius margin) out of the live buffer
//! 2. box blur the copy in premultiplied space
//! 3. write it back inside the brush circle at a global opacity

use image::RgbaImage;

use crate::brush::blend::blend_over_with_opacity;
use crate::brush::Footprint;
use crate::input::Point;
use crate::raster::{Pixel, Rect};

/// Separable box blur with clamp-to-edge sampling.
///
/// `pixels` is a row-major `width x height` region.
pub fn box_blur(pixels: &mut [Pixel], width: usize, height: usize, radius: usize) {
    if radius == 0 || width == 0 || height == 0 || pixels.len() < width * height {
        return;
    }
    let norm = 1.0 / (2 * radius + 1) as f32;
    let mut horizontal = vec![Pixel::transparent(); width * height];

    for y in 0..height {
        let row = &pixels[y * width..(y + 1) * width];
        for x in 0..width {
            let mut sum = Pixel::transparent();
            for k in 0..=2 * radius {
                let sx = (x + k).saturating_sub(radius).min(width - 1);
                sum = sum.added(&row[sx]);
            }
            horizontal[y * width + x] = sum.scaled(norm);
        }
    }

    for y in 0..height {
        for x in 0..width {
            let mut sum = Pixel::transparent();
            for k in 0..=2 * radius {
                let sy = (y + k).saturating_sub(radius).min(height - 1);
                sum = sum.added(&horizontal[sy * width + x]);
            }
            pixels[y * width + x] = sum.scaled(norm);
        }
    }
}

/// Blur one brush dab into `buffer`.
///
/// `size` is the brush diameter, `blur_radius` the box kernel radius and
/// `opacity` the write-back alpha. Returns the region actually written.
pub fn blur_dab(
    buffer: &mut RgbaImage,
    center: Point,
    size: f32,
    blur_radius: u32,
    opacity: f32,
) -> Rect {
    let (width, height) = buffer.dimensions();
    let footprint = Footprint::new(center, size, 100.0, width, height);
    if opacity <= 0.0 || footprint.bounds().is_empty() {
        return Rect::empty();
    }

    let region = Rect::around(center.x, center.y, footprint.radius() + blur_radius as f32)
        .clamped(width, height);
    let (rw, rh) = (region.width() as usize, region.height() as usize);

    let mut scratch = Vec::with_capacity(rw * rh);
    for y in region.top..region.bottom {
        for x in region.left..region.right {
            scratch.push(Pixel::from_rgba(buffer.get_pixel(x as u32, y as u32)));
        }
    }

    box_blur(&mut scratch, rw, rh, blur_radius as usize);

    let mut written = Rect::empty();
    for px in footprint.pixels() {
        let sx = (px.x as i32 - region.left) as usize;
        let sy = (px.y as i32 - region.top) as usize;
        let blurred = scratch[sy * rw + sx];
        let live = Pixel::from_rgba(buffer.get_pixel(px.x, px.y));
        let out = blend_over_with_opacity(blurred, live, opacity);
        buffer.put_pixel(px.x, px.y, out.to_rgba());
        written.union(&Rect::new(px.x as i32, px.y as i32, px.x as i32 + 1, px.y as i32 + 1));
    }
    written
}
