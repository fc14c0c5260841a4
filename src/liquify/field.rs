//! Displacement field - sparse per-pixel accumulated offsets
//!
//! Keys are packed `(x, y)` pixel coordinates. An absent entry means zero
//! displacement, so an untouched image costs nothing to store.

use std::collections::HashMap;

/// Offsets smaller than this on both axes are dropped by `decay`
pub const MIN_OFFSET: f32 = 0.1;

/// Accumulated displacement of one pixel
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Offset {
    pub dx: f32,
    pub dy: f32,
}

impl Offset {
    pub fn new(dx: f32, dy: f32) -> Self {
        Self { dx, dy }
    }

    pub fn magnitude(&self) -> f32 {
        (self.dx * self.dx + self.dy * self.dy).sqrt()
    }

    fn is_negligible(&self) -> bool {
        self.dx.abs() < MIN_OFFSET && self.dy.abs() < MIN_OFFSET
    }
}

#[inline]
fn pack(x: u32, y: u32) -> u64 {
    ((y as u64) << 32) | x as u64
}

#[inline]
fn unpack(key: u64) -> (u32, u32) {
    ((key & 0xFFFF_FFFF) as u32, (key >> 32) as u32)
}

/// Sparse displacement field sized to a raster
#[derive(Debug, Clone, Default)]
pub struct DisplacementField {
    width: u32,
    height: u32,
    entries: HashMap<u64, Offset>,
}

impl DisplacementField {
    /// Create an empty field for a `width x height` raster
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            entries: HashMap::new(),
        }
    }

    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    #[inline]
    fn contains_pixel(&self, x: u32, y: u32) -> bool {
        x < self.width && y < self.height
    }

    pub fn get(&self, x: u32, y: u32) -> Option<Offset> {
        self.entries.get(&pack(x, y)).copied()
    }

    /// Add a contribution to a pixel's entry, creating it if absent.
    /// Out-of-raster pixels are ignored.
    pub fn add(&mut self, x: u32, y: u32, dx: f32, dy: f32) {
        if !self.contains_pixel(x, y) {
            return;
        }
        let entry = self.entries.entry(pack(x, y)).or_default();
        entry.dx += dx;
        entry.dy += dy;
    }

    /// Scale an existing entry by `factor`, removing it once it is negligible.
    ///
    /// Returns `true` if the entry was removed.
    pub fn decay(&mut self, x: u32, y: u32, factor: f32) -> bool {
        let key = pack(x, y);
        let Some(entry) = self.entries.get_mut(&key) else {
            return false;
        };
        entry.dx *= factor;
        entry.dy *= factor;
        if entry.is_negligible() {
            self.entries.remove(&key);
            return true;
        }
        false
    }

    /// All entries as `(x, y, offset)`, in no particular order
    pub fn iter(&self) -> impl Iterator<Item = (u32, u32, Offset)> + '_ {
        self.entries.iter().map(|(&key, &offset)| {
            let (x, y) = unpack(key);
            (x, y, offset)
        })
    }
}
