//! Tool options as sent by the tool-options UI
//!
//! All fields default, so the UI may send partial JSON. Values are clamped
//! where they are used, not on parse.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::liquify::{TwirlDirection, WarpMode};

/// Liquify brush configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LiquifySettings {
    /// Brush diameter in pixels
    pub size: f32,
    /// 0-100
    pub strength: f32,
    pub mode: WarpMode,
    pub twirl_direction: TwirlDirection,
    /// Seed for crystallize jitter
    pub seed: u64,
}

impl Default for LiquifySettings {
    fn default() -> Self {
        Self {
            size: 50.0,
            strength: 50.0,
            mode: WarpMode::Push,
            twirl_direction: TwirlDirection::Clockwise,
            seed: 0,
        }
    }
}

impl LiquifySettings {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn brush_size(&self) -> f32 {
        self.size.max(1.0)
    }

    pub fn brush_strength(&self) -> f32 {
        self.strength.clamp(0.0, 100.0)
    }
}

/// Blur brush configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BlurSettings {
    /// Brush diameter in pixels
    pub size: f32,
    /// 0-100, controls blur radius
    pub strength: f32,
    /// 0-100, inverted into write-back opacity
    pub hardness: f32,
}

impl Default for BlurSettings {
    fn default() -> Self {
        Self {
            size: 40.0,
            strength: 50.0,
            hardness: 0.0,
        }
    }
}

impl BlurSettings {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn brush_size(&self) -> f32 {
        self.size.max(1.0)
    }

    /// Blur kernel radius: `max(1, floor(strength / 10))`
    pub fn blur_radius(&self) -> u32 {
        ((self.strength.clamp(0.0, 100.0) / 10.0).floor() as u32).max(1)
    }

    /// Write-back opacity: `(100 - hardness) / 100`
    pub fn opacity(&self) -> f32 {
        (100.0 - self.hardness.clamp(0.0, 100.0)) / 100.0
    }
}
