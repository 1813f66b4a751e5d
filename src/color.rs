//! Solid fill colors

use crate::bitmap::BitmapFormat;

/// 8-bit per channel RGB color
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Rgb8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb8 {
    pub fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
    pub fn white() -> Self {
        Self::new(255, 255, 255)
    }
    pub fn black() -> Self {
        Self::new(0, 0, 0)
    }

    /// Pack into a 32-bit pixel with the given channel ordering
    ///
    /// The unused channel is left zero.
    pub fn pack(self, format: BitmapFormat) -> u32 {
        let (r, g, b) = (u32::from(self.r), u32::from(self.g), u32::from(self.b));
        match format {
            BitmapFormat::Xrgb | BitmapFormat::Argb => (r << 16) | (g << 8) | b,
            BitmapFormat::Xbgr | BitmapFormat::Abgr => (b << 16) | (g << 8) | r,
            BitmapFormat::Rgbx | BitmapFormat::Rgba => (r << 24) | (g << 16) | (b << 8),
            BitmapFormat::Bgrx | BitmapFormat::Bgra => (b << 24) | (g << 16) | (r << 8),
        }
    }

    /// Recover the color from a 32-bit pixel with the given ordering
    pub fn unpack(pixel: u32, format: BitmapFormat) -> Self {
        let byte = |shift: u32| ((pixel >> shift) & 0xff) as u8;
        match format {
            BitmapFormat::Xrgb | BitmapFormat::Argb => Self::new(byte(16), byte(8), byte(0)),
            BitmapFormat::Xbgr | BitmapFormat::Abgr => Self::new(byte(0), byte(8), byte(16)),
            BitmapFormat::Rgbx | BitmapFormat::Rgba => Self::new(byte(24), byte(16), byte(8)),
            BitmapFormat::Bgrx | BitmapFormat::Bgra => Self::new(byte(8), byte(16), byte(24)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pack_orderings() {
        let c = Rgb8::new(0x12, 0x34, 0x56);
        assert_eq!(c.pack(BitmapFormat::Xrgb), 0x0012_3456);
        assert_eq!(c.pack(BitmapFormat::Xbgr), 0x0056_3412);
        assert_eq!(c.pack(BitmapFormat::Rgbx), 0x1234_5600);
        assert_eq!(c.pack(BitmapFormat::Bgrx), 0x5634_1200);
    }

    #[test]
    fn unpack_inverts_pack() {
        let c = Rgb8::new(200, 100, 50);
        for &f in &[
            BitmapFormat::Xrgb,
            BitmapFormat::Xbgr,
            BitmapFormat::Rgbx,
            BitmapFormat::Bgrx,
        ] {
            assert_eq!(Rgb8::unpack(c.pack(f), f), c);
        }
    }
}
