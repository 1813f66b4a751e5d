//! Per-column coverage and winding state

use crate::math::SUBPIXEL_COUNT;

/// Even-odd coverage cell, one parity bit per sub-scanline lane
pub type SubpixelMask = u8;

/// Returns the number of covered sub-scanline lanes, 0 to 8
pub fn coverage(mask: SubpixelMask) -> u32 {
    mask.count_ones()
}

/// Non-zero winding cell
///
/// One signed accumulator per sub-scanline lane plus a presence mask
/// with a bit set for every lane whose accumulator is non-zero. The
/// presence mask lets the fill loop classify a column without reading
/// all eight lanes.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct NonZeroMask {
    pub mask: SubpixelMask,
    pub cover: [i16; SUBPIXEL_COUNT as usize],
}

impl NonZeroMask {
    /// Start accumulation from a buffer cell, zeroing the cell
    ///
    /// Unlike [init_from](#method.init_from) this discards any lanes
    /// already present in `self`.
    pub fn reset_from(&mut self, source: &mut NonZeroMask) {
        self.mask = 0;
        for n in 0..SUBPIXEL_COUNT as usize {
            let bit = 1 << n;
            if source.mask & bit != 0 {
                self.cover[n] = source.cover[n];
                source.cover[n] = 0;
                if self.cover[n] != 0 {
                    self.mask |= bit;
                }
            } else {
                self.cover[n] = 0;
            }
        }
        source.mask = 0;
    }

    /// Take over the lanes present in a buffer cell, zeroing the cell
    pub fn init_from(&mut self, source: &mut NonZeroMask) {
        for n in 0..SUBPIXEL_COUNT as usize {
            let bit = 1 << n;
            if source.mask & bit != 0 {
                self.cover[n] = source.cover[n];
                source.cover[n] = 0;
                if self.cover[n] != 0 {
                    self.mask |= bit;
                }
            }
        }
        source.mask = 0;
    }

    /// Accumulate a buffer cell into the running state, zeroing the cell
    ///
    /// A lane's presence bit toggles when the accumulator moves between
    /// zero and non-zero, which is what makes opposite windings cancel.
    pub fn apply_from(&mut self, source: &mut NonZeroMask) {
        for n in 0..SUBPIXEL_COUNT as usize {
            let bit = 1 << n;
            if source.mask & bit != 0 {
                let t = self.cover[n];
                self.cover[n] = t.wrapping_add(source.cover[n]);
                source.cover[n] = 0;
                if (t == 0) != (self.cover[n] == 0) {
                    self.mask ^= bit;
                }
            }
        }
        source.mask = 0;
    }

    /// Make the cell an end marker that forces a state change in the
    /// fill loop
    pub fn set_sentinel(&mut self) {
        self.mask = 0xff;
        self.cover = [-1; SUBPIXEL_COUNT as usize];
    }
}
