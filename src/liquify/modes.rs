//! Warp mode strategies
//!
//! Each additive mode turns one brush sample at one pixel into a
//! contribution that is added to the pixel's field entry. Reconstruct is the
//! odd one out: it decays existing entries and is the only mode that can
//! shrink the field. Nothing clamps the accumulated magnitude.

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::field::DisplacementField;
use crate::brush::FootprintPixel;

const TWIRL_RATE: f32 = 0.2;
const PINCH_RATE: f32 = 0.3;
const CRYSTAL_JITTER: f32 = 0.5;
const EDGE_RATE: f32 = 0.4;
const RECONSTRUCT_RATE: f32 = 0.1;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum WarpMode {
    /// Drag pixels along with the pointer
    #[default]
    Push,
    /// Rotate pixels around the brush center
    Twirl,
    /// Pull pixels toward the center
    Pinch,
    /// Push pixels away from the center
    Expand,
    /// Radial push with a jittered angle
    #[serde(rename = "crystals", alias = "crystallize")]
    Crystallize,
    /// Fold pixels toward a vertical line through the center
    Edge,
    /// Heal existing displacement back toward zero
    Reconstruct,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TwirlDirection {
    #[default]
    Clockwise,
    CounterClockwise,
}

impl TwirlDirection {
    fn sign(self) -> f32 {
        match self {
            TwirlDirection::Clockwise => 1.0,
            TwirlDirection::CounterClockwise => -1.0,
        }
    }
}

/// Pointer movement since the previous sample, in image-local pixels
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PointerDelta {
    pub dx: f32,
    pub dy: f32,
}

pub fn push(px: &FootprintPixel, delta: PointerDelta) -> (f32, f32) {
    (delta.dx * px.weight, delta.dy * px.weight)
}

pub fn twirl(px: &FootprintPixel, direction: TwirlDirection) -> (f32, f32) {
    let angle = direction.sign() * px.weight * TWIRL_RATE;
    let (sin, cos) = angle.sin_cos();
    let rx = px.dist_x * cos - px.dist_y * sin;
    let ry = px.dist_x * sin + px.dist_y * cos;
    (rx - px.dist_x, ry - px.dist_y)
}

fn radial(px: &FootprintPixel, sign: f32) -> (f32, f32) {
    if px.distance <= 0.0 {
        return (0.0, 0.0);
    }
    let magnitude = sign * px.weight * PINCH_RATE * px.distance;
    (
        px.dist_x / px.distance * magnitude,
        px.dist_y / px.distance * magnitude,
    )
}

pub fn pinch(px: &FootprintPixel) -> (f32, f32) {
    radial(px, -1.0)
}

pub fn expand(px: &FootprintPixel) -> (f32, f32) {
    radial(px, 1.0)
}

pub fn crystallize<R: Rng + ?Sized>(px: &FootprintPixel, rng: &mut R) -> (f32, f32) {
    // Draw even at the center so the RNG stream only depends on pixel count
    let jitter = (rng.random::<f32>() * 2.0 - 1.0) * CRYSTAL_JITTER;
    if px.distance <= 0.0 {
        return (0.0, 0.0);
    }
    let angle = px.dist_y.atan2(px.dist_x) + jitter;
    let magnitude = px.weight * PINCH_RATE * px.distance;
    let (sin, cos) = angle.sin_cos();
    (cos * magnitude, sin * magnitude)
}

pub fn edge(px: &FootprintPixel) -> (f32, f32) {
    let toward_line = -px.dist_x.signum();
    (toward_line * px.weight * EDGE_RATE * px.dist_x.abs(), 0.0)
}

/// Decay factor applied by reconstruct at the given weight
pub fn reconstruct_factor(weight: f32) -> f32 {
    1.0 - RECONSTRUCT_RATE * weight
}

/// Apply one mode at one footprint pixel
pub fn apply<R: Rng + ?Sized>(
    field: &mut DisplacementField,
    px: &FootprintPixel,
    mode: WarpMode,
    delta: PointerDelta,
    direction: TwirlDirection,
    rng: &mut R,
) {
    let (cx, cy) = match mode {
        WarpMode::Push => push(px, delta),
        WarpMode::Twirl => twirl(px, direction),
        WarpMode::Pinch => pinch(px),
        WarpMode::Expand => expand(px),
        WarpMode::Crystallize => crystallize(px, rng),
        WarpMode::Edge => edge(px),
        WarpMode::Reconstruct => {
            field.decay(px.x, px.y, reconstruct_factor(px.weight));
            return;
        }
    };
    if cx == 0.0 && cy == 0.0 {
        return;
    }
    field.add(px.x, px.y, cx, cy);
}
