//! Dirty-region rectangle in raster pixel coordinates

use serde::{Deserialize, Serialize};

/// Half-open rectangle `[left, right) x [top, bottom)`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rect {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl Default for Rect {
    fn default() -> Self {
        Self::empty()
    }
}

impl Rect {
    pub fn new(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    pub fn empty() -> Self {
        Self {
            left: i32::MAX,
            top: i32::MAX,
            right: i32::MIN,
            bottom: i32::MIN,
        }
    }

    /// Square around a (possibly fractional) center, covering every pixel
    /// whose integer coordinate lies within `radius`
    pub fn around(cx: f32, cy: f32, radius: f32) -> Self {
        Self {
            left: (cx - radius).floor() as i32,
            top: (cy - radius).floor() as i32,
            right: ((cx + radius).ceil() as i32).saturating_add(1),
            bottom: ((cy + radius).ceil() as i32).saturating_add(1),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.left >= self.right || self.top >= self.bottom
    }

    pub fn width(&self) -> u32 {
        if self.is_empty() {
            0
        } else {
            (self.right as i64 - self.left as i64) as u32
        }
    }

    pub fn height(&self) -> u32 {
        if self.is_empty() {
            0
        } else {
            (self.bottom as i64 - self.top as i64) as u32
        }
    }

    pub fn union(&mut self, other: &Rect) {
        if other.is_empty() {
            return;
        }
        self.left = self.left.min(other.left);
        self.top = self.top.min(other.top);
        self.right = self.right.max(other.right);
        self.bottom = self.bottom.max(other.bottom);
    }

    pub fn clamp_to(&mut self, width: u32, height: u32) {
        self.left = self.left.max(0);
        self.top = self.top.max(0);
        self.right = self.right.min(width as i32);
        self.bottom = self.bottom.min(height as i32);
    }

    /// Copy clamped to `[0, width) x [0, height)`
    pub fn clamped(mut self, width: u32, height: u32) -> Self {
        self.clamp_to(width, height);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_rect() {
        let rect = Rect::empty();
        assert!(rect.is_empty());
        assert_eq!(rect.width(), 0);
        assert_eq!(rect.height(), 0);
    }

    #[test]
    fn test_around_covers_radius() {
        let rect = Rect::around(50.0, 50.0, 10.0);
        assert_eq!(rect.left, 40);
        assert_eq!(rect.right, 61);
        assert_eq!(rect.width(), 21);
    }

    #[test]
    fn test_around_huge_radius_saturates() {
        let rect = Rect::around(10.0, 10.0, 2.5e9);
        assert_eq!(rect.left, i32::MIN);
        assert_eq!(rect.right, i32::MAX);
        assert_eq!(rect.width(), u32::MAX);

        let clamped = rect.clamped(20, 20);
        assert_eq!(clamped, Rect::new(0, 0, 20, 20));
    }

    #[test]
    fn test_union_ignores_empty() {
        let mut rect = Rect::new(0, 0, 10, 10);
        rect.union(&Rect::empty());
        assert_eq!(rect, Rect::new(0, 0, 10, 10));

        rect.union(&Rect::new(5, -5, 20, 8));
        assert_eq!(rect, Rect::new(0, -5, 20, 10));
    }

    #[test]
    fn test_clamp_to_bounds() {
        let rect = Rect::around(2.0, 98.0, 10.0).clamped(100, 100);
        assert_eq!(rect.left, 0);
        assert_eq!(rect.top, 88);
        assert_eq!(rect.right, 13);
        assert_eq!(rect.bottom, 100);
    }

    #[test]
    fn test_clamp_outside_is_empty() {
        let rect = Rect::new(120, 120, 140, 140).clamped(100, 100);
        assert!(rect.is_empty());
    }
}
