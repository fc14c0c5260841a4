//! Liquify compositor
//!
//! Output is a pure function of (base snapshot, field): every destination
//! pixel with a field entry samples the base at `(x - dx, y - dy)` rounded to
//! the nearest pixel (ties toward +infinity), everything else is copied straight from the base.
//! Samples that land outside the base become fully transparent so pixels
//! dragged off the raster vanish instead of smearing the edge.

use image::{Rgba, RgbaImage};

use super::field::DisplacementField;

const TRANSPARENT: Rgba<u8> = Rgba([0, 0, 0, 0]);

/// Rebuild the full output image from the base snapshot and field
pub fn recompose(base: &RgbaImage, field: &DisplacementField) -> RgbaImage {
    let mut output = base.clone();
    recompose_into(base, field, &mut output);
    output
}

/// Like [`recompose`], reusing `output`'s allocation.
///
/// `output` must have the same dimensions as `base`; it is overwritten
/// entirely.
pub fn recompose_into(base: &RgbaImage, field: &DisplacementField, output: &mut RgbaImage) {
    if output.dimensions() != base.dimensions() {
        *output = base.clone();
    } else {
        output.copy_from_slice(base.as_raw());
    }

    let (width, height) = base.dimensions();
    for (x, y, offset) in field.iter() {
        if x >= width || y >= height {
            continue;
        }
        let sx = round_half_up(x as f32 - offset.dx);
        let sy = round_half_up(y as f32 - offset.dy);
        let px = if sx < 0.0 || sy < 0.0 || sx >= width as f32 || sy >= height as f32 {
            TRANSPARENT
        } else {
            *base.get_pixel(sx as u32, sy as u32)
        };
        output.put_pixel(x, y, px);
    }
}

/// Nearest integer, halves rounded up so `-0.5` still lands on column 0
fn round_half_up(v: f32) -> f32 {
    (v + 0.5).floor()
}

#[cfg(test)]
mod tests {
    use super::*;

    /// 10x10 image whose red channel encodes x and green channel encodes y
    fn gradient() -> RgbaImage {
        RgbaImage::from_fn(10, 10, |x, y| Rgba([x as u8 * 10, y as u8 * 10, 0, 255]))
    }

    #[test]
    fn test_empty_field_copies_base() {
        let base = gradient();
        let field = DisplacementField::new(10, 10);
        assert_eq!(recompose(&base, &field), base);
    }

    #[test]
    fn test_entry_samples_displaced_source() {
        let base = gradient();
        let mut field = DisplacementField::new(10, 10);
        field.add(5, 5, 2.0, -1.0);

        let out = recompose(&base, &field);

        // (5 - 2, 5 + 1) = (3, 6)
        assert_eq!(*out.get_pixel(5, 5), Rgba([30, 60, 0, 255]));
        assert_eq!(*out.get_pixel(4, 4), *base.get_pixel(4, 4));
    }

    #[test]
    fn test_rounds_to_nearest() {
        let base = gradient();
        let mut field = DisplacementField::new(10, 10);
        field.add(5, 5, 1.6, 0.4);

        let out = recompose(&base, &field);

        assert_eq!(*out.get_pixel(5, 5), *base.get_pixel(3, 5));
    }

    #[test]
    fn test_half_pixel_ties_round_up() {
        let base = gradient();
        let mut field = DisplacementField::new(10, 10);
        field.add(0, 4, 0.5, 0.0);
        field.add(6, 0, 0.0, 0.5);
        field.add(3, 3, -1.5, 0.0);

        let out = recompose(&base, &field);

        // -0.5 stays on the raster edge instead of turning transparent
        assert_eq!(*out.get_pixel(0, 4), *base.get_pixel(0, 4));
        assert_eq!(*out.get_pixel(6, 0), *base.get_pixel(6, 0));
        // 4.5 -> 5
        assert_eq!(*out.get_pixel(3, 3), *base.get_pixel(5, 3));
    }

    #[test]
    fn test_out_of_bounds_source_is_transparent() {
        let base = gradient();
        let mut field = DisplacementField::new(10, 10);
        field.add(1, 1, 5.0, 0.0);
        field.add(8, 8, 0.0, -3.0);

        let out = recompose(&base, &field);

        assert_eq!(*out.get_pixel(1, 1), TRANSPARENT);
        assert_eq!(*out.get_pixel(8, 8), TRANSPARENT);
    }

    #[test]
    fn test_recompose_is_deterministic() {
        let base = gradient();
        let mut field = DisplacementField::new(10, 10);
        for i in 0..10 {
            field.add(i, 9 - i, i as f32 * 0.7, -(i as f32) * 0.3);
        }

        let first = recompose(&base, &field);
        let mut second = RgbaImage::new(10, 10);
        recompose_into(&base, &field, &mut second);

        assert_eq!(first, second);
    }

    #[test]
    fn test_recompose_into_resizes_mismatched_output() {
        let base = gradient();
        let field = DisplacementField::new(10, 10);
        let mut output = RgbaImage::new(3, 3);
        recompose_into(&base, &field, &mut output);
        assert_eq!(output, base);
    }
}
