//! Target bitmap description

/// Channel ordering of a packed 32-bit pixel
///
/// Only the four orderings without an alpha channel can be rendered
/// into; the alpha-bearing ones are reported unsupported and render
/// calls against them do nothing.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BitmapFormat {
    Xrgb,
    Argb,
    Xbgr,
    Abgr,
    Rgbx,
    Rgba,
    Bgrx,
    Bgra,
}

impl BitmapFormat {
    /// True if the format can be rendered into
    pub fn is_supported(self) -> bool {
        match self {
            BitmapFormat::Xrgb
            | BitmapFormat::Xbgr
            | BitmapFormat::Rgbx
            | BitmapFormat::Bgrx => true,
            _ => false,
        }
    }
}

/// A caller-owned packed 32-bit pixel target
///
/// The rasterizer borrows the pixel data for the duration of a render
/// call and never owns it. Pitch is in bytes and must be a multiple of
/// four and at least `width * 4`.
#[derive(Debug)]
pub struct BitmapData<'a> {
    pub width: u32,
    pub height: u32,
    pub pitch: u32,
    pub format: BitmapFormat,
    pub data: &'a mut [u32],
}

impl<'a> BitmapData<'a> {
    /// Wrap a tightly packed pixel buffer
    ///
    /// Returns None if the buffer is too small for the dimensions.
    pub fn new(width: u32, height: u32, format: BitmapFormat, data: &'a mut [u32]) -> Option<Self> {
        Self::with_pitch(width, height, width * 4, format, data)
    }

    /// Wrap a pixel buffer with an explicit row pitch in bytes
    pub fn with_pitch(
        width: u32,
        height: u32,
        pitch: u32,
        format: BitmapFormat,
        data: &'a mut [u32],
    ) -> Option<Self> {
        if pitch % 4 != 0 || pitch / 4 < width {
            return None;
        }
        if data.len() < (pitch / 4) as usize * height as usize {
            return None;
        }
        Some(Self {
            width,
            height,
            pitch,
            format,
            data,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alpha_formats_unsupported() {
        assert!(BitmapFormat::Xrgb.is_supported());
        assert!(BitmapFormat::Bgrx.is_supported());
        assert!(!BitmapFormat::Argb.is_supported());
        assert!(!BitmapFormat::Rgba.is_supported());
    }

    #[test]
    fn buffer_size_checked() {
        let mut buf = vec![0u32; 10 * 10];
        assert!(BitmapData::new(10, 10, BitmapFormat::Xrgb, &mut buf).is_some());
        assert!(BitmapData::new(11, 10, BitmapFormat::Xrgb, &mut buf).is_none());
        assert!(BitmapData::with_pitch(10, 10, 42, BitmapFormat::Xrgb, &mut buf).is_none());
    }
}
