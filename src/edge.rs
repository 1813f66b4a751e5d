//! Scan edge records

use crate::math::Fixed;

/// A directed edge prepared for the scanline sweep
///
/// Edges live in a growable arena owned by the filler and link to each
/// other by index, first through the per-scanline bucket table and then
/// through the active edge table. Index links keep the lists valid when
/// the arena reallocates.
#[derive(Debug, Copy, Clone)]
pub struct ScanEdge {
    /// Current x position, 16.16 fixed point pixels
    pub x: Fixed,
    /// X advance per sub-scanline row
    pub slope: Fixed,
    /// Correction added on slope-fix scanlines to cancel accumulated
    /// quantization drift
    pub slope_fix: Fixed,
    /// First sub-scanline row covered, inclusive
    pub first_line: i32,
    /// Last sub-scanline row covered, inclusive
    pub last_line: i32,
    /// Winding contribution, +1 or -1
    pub winding: i16,
    /// Next edge in the current bucket or active edge table
    pub next: Option<u32>,
}
