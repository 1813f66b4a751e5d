//! Affine transformations

/// A 2x3 affine transformation matrix
///
/// The append operations compose so that the appended transform is
/// applied after the existing one.
///
/// ```
/// use edgeflag::Transform2d;
/// let mut t = Transform2d::new();
/// t.scale(2.0, 2.0);
/// t.translate(10.0, 0.0);
/// assert_eq!(t.transform(1.0, 1.0), (12.0, 2.0));
/// ```
#[derive(Debug, Copy, Clone)]
pub struct Transform2d {
    pub sx: f64,
    pub sy: f64,
    pub shx: f64,
    pub shy: f64,
    pub tx: f64,
    pub ty: f64,
}

impl Default for Transform2d {
    fn default() -> Self {
        Self::new()
    }
}

impl Transform2d {
    /// Create an identity transform
    pub fn new() -> Self {
        Self {
            sx: 1.0,
            sy: 1.0,
            shx: 0.0,
            shy: 0.0,
            tx: 0.0,
            ty: 0.0,
        }
    }
    /// Append a translation
    pub fn translate(&mut self, dx: f64, dy: f64) {
        self.tx += dx;
        self.ty += dy;
    }
    /// Append a scaling
    pub fn scale(&mut self, sx: f64, sy: f64) {
        self.sx *= sx;
        self.shx *= sx;
        self.tx *= sx;
        self.sy *= sy;
        self.shy *= sy;
        self.ty *= sy;
    }
    /// Append a rotation, angle in radians
    pub fn rotate(&mut self, angle: f64) {
        let ca = angle.cos();
        let sa = angle.sin();
        let t0 = self.sx * ca - self.shy * sa;
        let t2 = self.shx * ca - self.sy * sa;
        let t4 = self.tx * ca - self.ty * sa;
        self.shy = self.sx * sa + self.shy * ca;
        self.sy = self.shx * sa + self.sy * ca;
        self.ty = self.tx * sa + self.ty * ca;
        self.sx = t0;
        self.shx = t2;
        self.tx = t4;
    }
    /// Transform a point
    pub fn transform(&self, x: f64, y: f64) -> (f64, f64) {
        (
            x * self.sx + y * self.shx + self.tx,
            x * self.shy + y * self.sy + self.ty,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    #[test]
    fn identity() {
        let t = Transform2d::new();
        assert_eq!(t.transform(3.5, -2.0), (3.5, -2.0));
    }
    #[test]
    fn scale_then_translate() {
        let mut t = Transform2d::new();
        t.scale(1.0, 8.0);
        t.translate(0.0625, -0.5);
        let (x, y) = t.transform(10.0, 10.0);
        assert_eq!(x, 10.0625);
        assert_eq!(y, 79.5);
    }
    #[test]
    fn rotation_quarter_turn() {
        let mut t = Transform2d::new();
        t.rotate(std::f64::consts::FRAC_PI_2);
        let (x, y) = t.transform(1.0, 0.0);
        assert!(x.abs() < 1e-12);
        assert!((y - 1.0).abs() < 1e-12);
    }
}
