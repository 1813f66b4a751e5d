//! Fixed point math and the sub-pixel sampling constants

/// 16.16 fixed point value
pub type Fixed = i64;

/// Number of fraction bits in a [Fixed](type.Fixed.html)
pub const FIXED_SHIFT: i64 = 16;

/// Log2 of the sub-scanline count per pixel row
pub const SUBPIXEL_SHIFT: i32 = 3;
/// Sub-scanlines per pixel row
pub const SUBPIXEL_COUNT: i32 = 1 << SUBPIXEL_SHIFT;
/// Mask value with every sub-scanline lane set
pub const SUBPIXEL_FULL_COVERAGE: u8 = 0xff;

/// Horizontal sample offsets per sub-scanline lane, in fixed point.
///
/// A scrambled permutation of k/8 so that vertically adjacent lanes
/// sample different horizontal phases of the pixel.
pub const SUBPIXEL_OFFSETS: [Fixed; SUBPIXEL_COUNT as usize] = [
    5 << (FIXED_SHIFT - 3),
    0,
    3 << (FIXED_SHIFT - 3),
    6 << (FIXED_SHIFT - 3),
    1 << (FIXED_SHIFT - 3),
    4 << (FIXED_SHIFT - 3),
    7 << (FIXED_SHIFT - 3),
    2 << (FIXED_SHIFT - 3),
];

/// Log2 of the slope correction step, in sub-scanline rows
pub const SLOPE_FIX_SHIFT: i32 = 6;
/// Edges at least this many sub-scanline rows tall carry a correction term
pub const SLOPE_FIX_STEP: i32 = 1 << SLOPE_FIX_SHIFT;
/// The correction is applied on scanlines where `line & mask == 0`
pub const SLOPE_FIX_SCANLINE_MASK: i32 = (1 << (SLOPE_FIX_SHIFT - SUBPIXEL_SHIFT)) - 1;

/// Convert a float to fixed point, rounding down
pub fn to_fixed(v: f64) -> Fixed {
    (v * f64::from(1u32 << FIXED_SHIFT)).floor() as Fixed
}

/// Truncate a fixed point value to an integer, rounding down
pub fn fixed_to_int(v: Fixed) -> i32 {
    (v >> FIXED_SHIFT) as i32
}

#[cfg(test)]
mod tests {
    use super::*;
    #[test]
    fn round_down() {
        assert_eq!(fixed_to_int(to_fixed(2.75)), 2);
        assert_eq!(fixed_to_int(to_fixed(-0.25)), -1);
        assert_eq!(fixed_to_int(to_fixed(3.0)), 3);
        assert_eq!(fixed_to_int(to_fixed(-2.0)), -2);
    }
    #[test]
    fn offsets_are_a_permutation() {
        let mut seen = [false; SUBPIXEL_COUNT as usize];
        for &o in SUBPIXEL_OFFSETS.iter() {
            let k = (o >> (FIXED_SHIFT - 3)) as usize;
            assert!(!seen[k]);
            seen[k] = true;
        }
    }
}
