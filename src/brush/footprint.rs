//! Brush footprint - the set of raster pixels a single brush sample touches
//!
//! Cost is bounded by the brush's bounding box, never the whole image.

use super::falloff::weight;
use crate::input::Point;
use crate::raster::Rect;

/// A pixel under the brush with its falloff weight
#[derive(Debug, Clone, Copy)]
pub struct FootprintPixel {
    pub x: u32,
    pub y: u32,
    /// Offset from the brush center
    pub dist_x: f32,
    pub dist_y: f32,
    /// Euclidean distance from the brush center
    pub distance: f32,
    /// Falloff weight in (0, 1]
    pub weight: f32,
}

/// Circular brush placed on a raster of known size
#[derive(Debug, Clone, Copy)]
pub struct Footprint {
    center: Point,
    radius: f32,
    strength: f32,
    bounds: Rect,
}

impl Footprint {
    /// `size` is the brush diameter, `strength` the 0-100 falloff scale
    pub fn new(center: Point, size: f32, strength: f32, width: u32, height: u32) -> Self {
        let radius = (size / 2.0).max(0.0);
        let bounds = Rect::around(center.x, center.y, radius).clamped(width, height);
        Self {
            center,
            radius,
            strength,
            bounds,
        }
    }

    pub fn center(&self) -> Point {
        self.center
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    /// Bounding box clipped to the raster
    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    /// Pixels with a non-zero weight, row-major
    pub fn pixels(&self) -> impl Iterator<Item = FootprintPixel> + '_ {
        let b = self.bounds;
        (b.top..b.bottom).flat_map(move |py| {
            (b.left..b.right).filter_map(move |px| {
                let dist_x = px as f32 - self.center.x;
                let dist_y = py as f32 - self.center.y;
                let distance = (dist_x * dist_x + dist_y * dist_y).sqrt();
                let w = weight(distance, self.radius, self.strength);
                if w <= 0.0 {
                    return None;
                }
                Some(FootprintPixel {
                    x: px as u32,
                    y: py as u32,
                    dist_x,
                    dist_y,
                    distance,
                    weight: w,
                })
            })
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_footprint_stays_inside_radius() {
        let fp = Footprint::new(Point::new(50.0, 50.0), 40.0, 100.0, 100, 100);
        assert_eq!(fp.radius(), 20.0);
        for p in fp.pixels() {
            assert!(p.distance < 20.0);
            assert!(p.weight > 0.0 && p.weight <= 1.0);
        }
    }

    #[test]
    fn test_footprint_center_pixel() {
        let fp = Footprint::new(Point::new(50.0, 50.0), 40.0, 80.0, 100, 100);
        let center = fp.pixels().find(|p| p.x == 50 && p.y == 50).unwrap();
        assert_eq!(center.distance, 0.0);
        assert!((center.weight - 0.8).abs() < 0.0001);
    }

    #[test]
    fn test_footprint_clipped_to_raster() {
        let fp = Footprint::new(Point::new(1.0, 1.0), 20.0, 100.0, 30, 30);
        let bounds = fp.bounds();
        assert_eq!(bounds.left, 0);
        assert_eq!(bounds.top, 0);
        assert!(fp.pixels().all(|p| p.x < 30 && p.y < 30));
    }

    #[test]
    fn test_zero_strength_yields_nothing() {
        let fp = Footprint::new(Point::new(10.0, 10.0), 10.0, 0.0, 20, 20);
        assert_eq!(fp.pixels().count(), 0);
    }

    #[test]
    fn test_pixel_count_matches_disc_area() {
        let fp = Footprint::new(Point::new(50.0, 50.0), 40.0, 100.0, 100, 100);
        let count = fp.pixels().count() as f32;
        let area = std::f32::consts::PI * 20.0 * 20.0;
        assert!((count - area).abs() / area < 0.1);
    }
}
