//! Coverage to color compositing
//!
//! Walks one row of the coverage buffer between the touched extents,
//! classifying runs as empty (skip), fully covered (solid write) or
//! partial (blend). A sentinel cell placed one past the extent forces a
//! run change so the inner loops need no per-pixel bounds compare.
//! Every consumed cell is zeroed, which is what lets the next render
//! call start from a clean buffer without clearing it wholesale.

use crate::mask::{self, NonZeroMask, SubpixelMask};
use crate::math::{SUBPIXEL_COUNT, SUBPIXEL_FULL_COVERAGE, SUBPIXEL_SHIFT};

/// Blend `color` over `dst` with alpha in units of sub-scanline lanes
///
/// Both 16-bit-spaced channel pairs of the packed pixel are scaled at
/// once through the 0xff00ff mask.
fn blend_packed(dst: u32, cs1: u32, cs2: u32, alpha: u32) -> u32 {
    let inv_alpha = SUBPIXEL_COUNT as u32 - alpha;
    let ct1 = (dst & 0x00ff_00ff) * inv_alpha;
    let ct2 = ((dst >> 8) & 0x00ff_00ff) * inv_alpha;
    let ct1 = ((ct1 + cs1 * alpha) >> SUBPIXEL_SHIFT) & 0x00ff_00ff;
    let ct2 = ((ct2 + cs2 * alpha) << (8 - SUBPIXEL_SHIFT)) & 0xff00_ff00;
    ct1 + ct2
}

/// Composite one row of even-odd coverage into `row`
///
/// `min_x..=max_x` is the touched column range including the flag
/// column one past the rightmost edge sample.
pub(crate) fn fill_even_odd_row(
    row: &mut [u32],
    mask_buffer: &mut [SubpixelMask],
    min_x: usize,
    max_x: usize,
    color: u32,
) {
    let cs1 = color & 0x00ff_00ff;
    let cs2 = (color >> 8) & 0x00ff_00ff;

    let end = max_x + 1;
    mask_buffer[end] = SUBPIXEL_FULL_COVERAGE;

    let mut bx = min_x; // next buffer cell to consume
    let mut tx = min_x; // target column
    let mut cur = mask_buffer[bx];
    mask_buffer[bx] = 0;
    bx += 1;

    while bx <= end {
        if cur == 0 {
            // Skip empty columns without touching the destination.
            let start = bx;
            loop {
                cur = mask_buffer[bx];
                bx += 1;
                if cur != 0 {
                    break;
                }
            }
            mask_buffer[bx - 1] = 0;
            tx += bx - start;
        } else if cur == SUBPIXEL_FULL_COVERAGE {
            // Solid run, no blending needed.
            loop {
                row[tx] = color;
                tx += 1;
                let t = mask_buffer[bx];
                bx += 1;
                if t != 0 || bx > end {
                    mask_buffer[bx - 1] = 0;
                    cur ^= t;
                    break;
                }
            }
        } else {
            loop {
                let alpha = mask::coverage(cur);
                row[tx] = blend_packed(row[tx], cs1, cs2, alpha);
                tx += 1;
                cur ^= mask_buffer[bx];
                mask_buffer[bx] = 0;
                bx += 1;
                if cur == 0 || cur == SUBPIXEL_FULL_COVERAGE || bx > end {
                    break;
                }
            }
        }
    }
}

/// Composite one row of winding state into `row`
pub(crate) fn fill_non_zero_row(
    row: &mut [u32],
    winding_buffer: &mut [NonZeroMask],
    min_x: usize,
    max_x: usize,
    color: u32,
) {
    let cs1 = color & 0x00ff_00ff;
    let cs2 = (color >> 8) & 0x00ff_00ff;

    let end = max_x + 1;
    winding_buffer[end].set_sentinel();

    let mut values = NonZeroMask::default();

    let mut bx = min_x;
    let mut tx = min_x;
    values.reset_from(&mut winding_buffer[bx]);
    bx += 1;

    while bx <= end {
        if values.mask == 0 {
            loop {
                let start = bx;
                loop {
                    let present = winding_buffer[bx].mask != 0;
                    bx += 1;
                    if present || bx > end {
                        break;
                    }
                }
                tx += bx - start;
                values.init_from(&mut winding_buffer[bx - 1]);
                if values.mask != 0 || bx > end {
                    break;
                }
            }
        } else if values.mask == SUBPIXEL_FULL_COVERAGE {
            loop {
                row[tx] = color;
                tx += 1;
                if winding_buffer[bx].mask != 0 {
                    values.apply_from(&mut winding_buffer[bx]);
                    bx += 1;
                    // Safeguard for winding overflow hiding the end marker.
                    if bx > end {
                        break;
                    }
                    if values.mask != SUBPIXEL_FULL_COVERAGE {
                        break;
                    }
                } else {
                    bx += 1;
                }
            }
        } else {
            let mut alpha = mask::coverage(values.mask);
            loop {
                row[tx] = blend_packed(row[tx], cs1, cs2, alpha);
                tx += 1;
                if winding_buffer[bx].mask != 0 {
                    values.apply_from(&mut winding_buffer[bx]);
                    bx += 1;
                    alpha = mask::coverage(values.mask);
                    if bx > end {
                        break;
                    }
                    if values.mask == 0 || values.mask == SUBPIXEL_FULL_COVERAGE {
                        break;
                    }
                } else {
                    bx += 1;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blend_half_coverage() {
        // 4 of 8 lanes over white with black: mid gray per channel.
        let out = blend_packed(0x00ff_ffff, 0, 0, 4);
        assert_eq!(out, 0x007f_7f7f);
    }

    #[test]
    fn blend_extremes() {
        let c = 0x0012_3456u32;
        let cs1 = c & 0x00ff_00ff;
        let cs2 = (c >> 8) & 0x00ff_00ff;
        assert_eq!(blend_packed(0x00ff_ffff, cs1, cs2, 8), c);
        assert_eq!(blend_packed(0x00ab_cdef, cs1, cs2, 0), 0x00ab_cdef);
    }

    #[test]
    fn even_odd_row_fills_between_flags() {
        let mut row = vec![0x00ff_ffffu32; 16];
        let mut buffer = vec![0u8; 19];
        buffer[3] = 0xff;
        buffer[9] = 0xff;
        fill_even_odd_row(&mut row, &mut buffer, 3, 10, 0);
        for x in 0..16 {
            let expect = if (3..9).contains(&x) { 0 } else { 0x00ff_ffff };
            assert_eq!(row[x], expect, "column {}", x);
        }
        // Consumed cells and the sentinel are zeroed.
        assert!(buffer.iter().all(|&m| m == 0));
    }

    #[test]
    fn even_odd_partial_columns_blend() {
        let mut row = vec![0x00ff_ffffu32; 8];
        let mut buffer = vec![0u8; 11];
        buffer[2] = 0b0000_1111; // half the lanes on
        buffer[5] = 0b0000_1111; // and off again
        fill_even_odd_row(&mut row, &mut buffer, 2, 6, 0);
        for x in 2..5 {
            assert_eq!(row[x], 0x007f_7f7f);
        }
        assert_eq!(row[0], 0x00ff_ffff);
        assert_eq!(row[5], 0x00ff_ffff);
    }

    #[test]
    fn non_zero_row_fills_between_flags() {
        let mut row = vec![0x00ff_ffffu32; 16];
        let mut buffer = vec![NonZeroMask::default(); 19];
        for n in 0..8 {
            buffer[3].mask |= 1 << n;
            buffer[3].cover[n] = 1;
            buffer[9].mask |= 1 << n;
            buffer[9].cover[n] = -1;
        }
        fill_non_zero_row(&mut row, &mut buffer, 3, 10, 0);
        for x in 0..16 {
            let expect = if (3..9).contains(&x) { 0 } else { 0x00ff_ffff };
            assert_eq!(row[x], expect, "column {}", x);
        }
        assert!(buffer.iter().all(|c| *c == NonZeroMask::default()));
    }

    #[test]
    fn non_zero_double_winding_still_full() {
        let mut row = vec![0x00ff_ffffu32; 12];
        let mut buffer = vec![NonZeroMask::default(); 15];
        for n in 0..8 {
            buffer[2].mask |= 1 << n;
            buffer[2].cover[n] = 2;
            buffer[8].mask |= 1 << n;
            buffer[8].cover[n] = -2;
        }
        fill_non_zero_row(&mut row, &mut buffer, 2, 9, 0);
        for x in 2..8 {
            assert_eq!(row[x], 0, "column {}", x);
        }
        assert_eq!(row[8], 0x00ff_ffff);
    }
}
