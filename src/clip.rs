//! Clipping rectangle for edge generation

/// Axis-aligned clip bounds in the rasterizer's working coordinates
///
/// Horizontal bounds are pixel coordinates, vertical bounds are
/// sub-scanline row indices (inclusive). Edge generation compares x
/// against the float bounds and rows against the integer bounds, so
/// both units are kept instead of a single rectangle type.
#[derive(Debug, Copy, Clone)]
pub struct ClipRectangle {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: i32,
    pub y_max: i32,
}

impl ClipRectangle {
    /// Build clip bounds from a pixel rectangle and the sub-scanline scale
    pub fn new(x: u32, y: u32, width: u32, height: u32, scale: i32) -> Self {
        Self {
            x_min: f64::from(x),
            x_max: f64::from(x + width),
            y_min: y as i32 * scale,
            y_max: (y + height) as i32 * scale - 1,
        }
    }
    /// Shrink to the intersection with another clip rectangle
    pub fn intersect(&mut self, other: &ClipRectangle) {
        if other.x_min > self.x_min {
            self.x_min = other.x_min;
        }
        if other.x_max < self.x_max {
            self.x_max = other.x_max;
        }
        if other.y_min > self.y_min {
            self.y_min = other.y_min;
        }
        if other.y_max < self.y_max {
            self.y_max = other.y_max;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::SUBPIXEL_COUNT;

    #[test]
    fn subpixel_rows() {
        let c = ClipRectangle::new(0, 0, 100, 50, SUBPIXEL_COUNT);
        assert_eq!(c.y_min, 0);
        assert_eq!(c.y_max, 399);
        assert_eq!(c.x_max, 100.0);
    }
    #[test]
    fn intersection() {
        let mut a = ClipRectangle::new(0, 0, 200, 200, SUBPIXEL_COUNT);
        let b = ClipRectangle::new(10, 20, 50, 30, SUBPIXEL_COUNT);
        a.intersect(&b);
        assert_eq!(a.x_min, 10.0);
        assert_eq!(a.x_max, 60.0);
        assert_eq!(a.y_min, 160);
        assert_eq!(a.y_max, 399);
    }
}
