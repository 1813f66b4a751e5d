//! Active edge table sweep
//!
//! One call processes a single pixel row: edges already in the active
//! edge table are plotted across all eight sub-scanlines (or up to their
//! last row and dropped), then this row's bucket is drained, plotting
//! new edges from their first sub-scanline and keeping those that
//! continue past the row. All lists are index links into the edge arena.

use crate::edge::ScanEdge;
use crate::extents::SpanExtents;
use crate::mask::{NonZeroMask, SubpixelMask};
use crate::math::{
    fixed_to_int, SLOPE_FIX_SCANLINE_MASK, SUBPIXEL_COUNT, SUBPIXEL_OFFSETS, SUBPIXEL_SHIFT,
};

// Slope quantization rounds down, so x can dip a hair below the clip
// bound between corrections; clamp keeps the buffer index valid.
fn column(x: crate::math::Fixed) -> usize {
    fixed_to_int(x).max(0) as usize
}

/// Plot one pixel row of even-odd coverage flags
pub(crate) fn even_odd_row(
    edges: &mut [ScanEdge],
    edge_table: &mut [Option<u32>],
    mask_buffer: &mut [SubpixelMask],
    aet: &mut Option<u32>,
    extents: &mut SpanExtents,
    line: i32,
) {
    let mut prev: Option<u32> = None;
    let mut cur = *aet;

    while let Some(ci) = cur {
        let i = ci as usize;
        let last_line = edges[i].last_line >> SUBPIXEL_SHIFT;

        if last_line == line {
            // Ends within this row: plot up to its last sub-scanline and
            // unlink it from the active edge table.
            let mut x = edges[i].x;
            let slope = edges[i].slope;
            let xs = fixed_to_int(x);
            let ye = edges[i].last_line & (SUBPIXEL_COUNT - 1);
            for ysub in 0..=ye {
                mask_buffer[column(x + SUBPIXEL_OFFSETS[ysub as usize])] ^= 1 << ysub;
                x += slope;
            }
            let xe = fixed_to_int(x - slope);
            extents.mark_with_sort(xs.max(0), xe.max(0));

            cur = edges[i].next;
            match prev {
                Some(p) => edges[p as usize].next = cur,
                None => *aet = cur,
            }
        } else {
            // Spans the full row.
            let mut x = edges[i].x;
            let slope = edges[i].slope;
            let xs = fixed_to_int(x);
            for ysub in 0..SUBPIXEL_COUNT {
                mask_buffer[column(x + SUBPIXEL_OFFSETS[ysub as usize])] ^= 1 << ysub;
                x += slope;
            }
            let xe = fixed_to_int(x - slope);
            extents.mark_with_sort(xs.max(0), xe.max(0));

            edges[i].x = if line & SLOPE_FIX_SCANLINE_MASK == 0 {
                x + edges[i].slope_fix
            } else {
                x
            };

            prev = cur;
            cur = edges[i].next;
        }
    }

    // Drain this row's bucket.
    let mut cur = edge_table[line as usize].take();
    while let Some(ci) = cur {
        let i = ci as usize;
        let last_line = edges[i].last_line >> SUBPIXEL_SHIFT;
        let ys = edges[i].first_line & (SUBPIXEL_COUNT - 1);

        if last_line == line {
            // Fully contained in this row; plot and discard.
            let mut x = edges[i].x;
            let slope = edges[i].slope;
            let xs = fixed_to_int(x);
            let ye = edges[i].last_line & (SUBPIXEL_COUNT - 1);
            for ysub in ys..=ye {
                mask_buffer[column(x + SUBPIXEL_OFFSETS[ysub as usize])] ^= 1 << ysub;
                x += slope;
            }
            let xe = fixed_to_int(x - slope);
            extents.mark_with_sort(xs.max(0), xe.max(0));

            cur = edges[i].next;
        } else {
            // Starts here and continues: plot the remaining sub-scanlines
            // and move it into the active edge table.
            let mut x = edges[i].x;
            let slope = edges[i].slope;
            let xs = fixed_to_int(x);
            for ysub in ys..SUBPIXEL_COUNT {
                mask_buffer[column(x + SUBPIXEL_OFFSETS[ysub as usize])] ^= 1 << ysub;
                x += slope;
            }
            let xe = fixed_to_int(x - slope);
            extents.mark_with_sort(xs.max(0), xe.max(0));

            edges[i].x = x;

            let next = edges[i].next;
            match prev {
                Some(p) => edges[p as usize].next = Some(ci),
                None => *aet = Some(ci),
            }
            prev = Some(ci);
            cur = next;
        }
    }

    if let Some(p) = prev {
        edges[p as usize].next = None;
    }
}

/// Plot one pixel row of winding deltas
pub(crate) fn non_zero_row(
    edges: &mut [ScanEdge],
    edge_table: &mut [Option<u32>],
    winding_buffer: &mut [NonZeroMask],
    aet: &mut Option<u32>,
    extents: &mut SpanExtents,
    line: i32,
) {
    let mut prev: Option<u32> = None;
    let mut cur = *aet;

    while let Some(ci) = cur {
        let i = ci as usize;
        let last_line = edges[i].last_line >> SUBPIXEL_SHIFT;
        let winding = edges[i].winding;

        if last_line == line {
            let mut x = edges[i].x;
            let slope = edges[i].slope;
            let xs = fixed_to_int(x);
            let ye = edges[i].last_line & (SUBPIXEL_COUNT - 1);
            for ysub in 0..=ye {
                let cell = &mut winding_buffer[column(x + SUBPIXEL_OFFSETS[ysub as usize])];
                cell.mask |= 1 << ysub;
                cell.cover[ysub as usize] = cell.cover[ysub as usize].wrapping_add(winding);
                x += slope;
            }
            let xe = fixed_to_int(x - slope);
            extents.mark_with_sort(xs.max(0), xe.max(0));

            cur = edges[i].next;
            match prev {
                Some(p) => edges[p as usize].next = cur,
                None => *aet = cur,
            }
        } else {
            let mut x = edges[i].x;
            let slope = edges[i].slope;
            let xs = fixed_to_int(x);
            for ysub in 0..SUBPIXEL_COUNT {
                let cell = &mut winding_buffer[column(x + SUBPIXEL_OFFSETS[ysub as usize])];
                cell.mask |= 1 << ysub;
                cell.cover[ysub as usize] = cell.cover[ysub as usize].wrapping_add(winding);
                x += slope;
            }
            let xe = fixed_to_int(x - slope);
            extents.mark_with_sort(xs.max(0), xe.max(0));

            edges[i].x = if line & SLOPE_FIX_SCANLINE_MASK == 0 {
                x + edges[i].slope_fix
            } else {
                x
            };

            prev = cur;
            cur = edges[i].next;
        }
    }

    let mut cur = edge_table[line as usize].take();
    while let Some(ci) = cur {
        let i = ci as usize;
        let last_line = edges[i].last_line >> SUBPIXEL_SHIFT;
        let winding = edges[i].winding;
        let ys = edges[i].first_line & (SUBPIXEL_COUNT - 1);

        if last_line == line {
            let mut x = edges[i].x;
            let slope = edges[i].slope;
            let xs = fixed_to_int(x);
            let ye = edges[i].last_line & (SUBPIXEL_COUNT - 1);
            for ysub in ys..=ye {
                let cell = &mut winding_buffer[column(x + SUBPIXEL_OFFSETS[ysub as usize])];
                cell.mask |= 1 << ysub;
                cell.cover[ysub as usize] = cell.cover[ysub as usize].wrapping_add(winding);
                x += slope;
            }
            let xe = fixed_to_int(x - slope);
            extents.mark_with_sort(xs.max(0), xe.max(0));

            cur = edges[i].next;
        } else {
            let mut x = edges[i].x;
            let slope = edges[i].slope;
            let xs = fixed_to_int(x);
            for ysub in ys..SUBPIXEL_COUNT {
                let cell = &mut winding_buffer[column(x + SUBPIXEL_OFFSETS[ysub as usize])];
                cell.mask |= 1 << ysub;
                cell.cover[ysub as usize] = cell.cover[ysub as usize].wrapping_add(winding);
                x += slope;
            }
            let xe = fixed_to_int(x - slope);
            extents.mark_with_sort(xs.max(0), xe.max(0));

            edges[i].x = x;

            let next = edges[i].next;
            match prev {
                Some(p) => edges[p as usize].next = Some(ci),
                None => *aet = Some(ci),
            }
            prev = Some(ci);
            cur = next;
        }
    }

    if let Some(p) = prev {
        edges[p as usize].next = None;
    }
}
