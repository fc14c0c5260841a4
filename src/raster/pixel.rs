//! Premultiplied RGBA pixel used by the blur scratch buffer
//!
//! Blurring in premultiplied space keeps transparent neighbours from
//! bleeding their (meaningless) color into opaque pixels.

use image::Rgba;

/// RGBA pixel in premultiplied alpha format
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Pixel {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Pixel {
    pub fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub fn transparent() -> Self {
        Self::default()
    }

    pub fn from_rgba(px: &Rgba<u8>) -> Self {
        let [r, g, b, a] = px.0;
        let a_f = a as f32 / 255.0;
        Self {
            r: (r as f32 / 255.0) * a_f,
            g: (g as f32 / 255.0) * a_f,
            b: (b as f32 / 255.0) * a_f,
            a: a_f,
        }
    }

    pub fn to_rgba(&self) -> Rgba<u8> {
        if self.a < 0.001 {
            return Rgba([0, 0, 0, 0]);
        }
        // Back to straight alpha
        let inv_a = 1.0 / self.a;
        Rgba([
            ((self.r * inv_a).clamp(0.0, 1.0) * 255.0).round() as u8,
            ((self.g * inv_a).clamp(0.0, 1.0) * 255.0).round() as u8,
            ((self.b * inv_a).clamp(0.0, 1.0) * 255.0).round() as u8,
            (self.a.clamp(0.0, 1.0) * 255.0).round() as u8,
        ])
    }

    /// Scale all premultiplied channels, i.e. apply a global opacity
    pub fn scaled(&self, factor: f32) -> Self {
        Self {
            r: self.r * factor,
            g: self.g * factor,
            b: self.b * factor,
            a: self.a * factor,
        }
    }

    pub fn added(&self, other: &Pixel) -> Self {
        Self {
            r: self.r + other.r,
            g: self.g + other.g,
            b: self.b + other.b,
            a: self.a + other.a,
        }
    }
}
