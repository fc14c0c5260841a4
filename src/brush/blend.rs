//! Blend algorithms for brush write-back
//!
//! All functions work with premultiplied alpha format for correct compositing.

use crate::raster::Pixel;

/// Standard alpha blending (Porter-Duff "over" operator) for premultiplied alpha
///
/// Formula: result = src + dst * (1 - src.a)
#[inline]
pub fn blend_normal_premul(src: Pixel, dst: Pixel) -> Pixel {
    let inv_src_a = 1.0 - src.a;
    Pixel {
        r: src.r + dst.r * inv_src_a,
        g: src.g + dst.g * inv_src_a,
        b: src.b + dst.b * inv_src_a,
        a: src.a + dst.a * inv_src_a,
    }
}

/// Draw `src` over `dst` at a global opacity (0-1)
#[inline]
pub fn blend_over_with_opacity(src: Pixel, dst: Pixel, opacity: f32) -> Pixel {
    let opacity = opacity.clamp(0.0, 1.0);
    if opacity <= 0.0 {
        return dst;
    }
    blend_normal_premul(src.scaled(opacity), dst)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: f32, b: f32) -> bool {
        (a - b).abs() < 0.01
    }

    #[test]
    fn test_blend_normal_opaque() {
        let src = Pixel::new(1.0, 0.0, 0.0, 1.0); // Red, fully opaque
        let dst = Pixel::new(0.0, 1.0, 0.0, 1.0); // Green, fully opaque

        let result = blend_normal_premul(src, dst);

        assert!(approx_eq(result.r, 1.0));
        assert!(approx_eq(result.g, 0.0));
        assert!(approx_eq(result.a, 1.0));
    }

    #[test]
    fn test_blend_normal_transparent() {
        let src = Pixel::transparent();
        let dst = Pixel::new(0.0, 1.0, 0.0, 1.0);

        let result = blend_normal_premul(src, dst);

        assert!(approx_eq(result.g, 1.0));
        assert!(approx_eq(result.a, 1.0));
    }

    #[test]
    fn test_opacity_lerps_opaque_pixels() {
        let src = Pixel::new(1.0, 1.0, 1.0, 1.0);
        let dst = Pixel::new(0.0, 0.0, 0.0, 1.0);

        let result = blend_over_with_opacity(src, dst, 0.25);

        assert!(approx_eq(result.r, 0.25));
        assert!(approx_eq(result.a, 1.0));
    }

    #[test]
    fn test_zero_opacity_keeps_destination() {
        let src = Pixel::new(1.0, 1.0, 1.0, 1.0);
        let dst = Pixel::new(0.2, 0.3, 0.4, 1.0);

        assert_eq!(blend_over_with_opacity(src, dst, 0.0), dst);
    }
}
