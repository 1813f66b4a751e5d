//! Polygon filler facade

use log::debug;

use crate::bitmap::BitmapData;
use crate::clip::ClipRectangle;
use crate::color::Rgb8;
use crate::edge::ScanEdge;
use crate::extents::SpanExtents;
use crate::geometry::Polygon;
use crate::mask::{NonZeroMask, SubpixelMask};
use crate::math::{SUBPIXEL_COUNT, SUBPIXEL_SHIFT};
use crate::paint;
use crate::sweep;
use crate::transform::Transform2d;

/// Fill rule selecting how crossings map to coverage
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum FillRule {
    EvenOdd,
    NonZeroWinding,
}

/// Antialiased polygon filler
///
/// A filler is sized once for the largest bitmap it will render into
/// and reuses its buffers across calls. Rendering into a larger bitmap
/// crops to the sized bound; smaller bitmaps work as is.
///
/// ```
/// use edgeflag::{BitmapData, BitmapFormat, Filler, Polygon, Rgb8, Transform2d};
///
/// let mut filler = Filler::new(64, 64, 32).unwrap();
/// let mut pixels = vec![0xffff_ffffu32; 64 * 64];
/// let mut target = BitmapData::new(64, 64, BitmapFormat::Xrgb, &mut pixels).unwrap();
/// let square = Polygon::from_parts(&[&[8.0, 8.0, 56.0, 8.0, 56.0, 56.0, 8.0, 56.0]]);
/// filler.render_even_odd(&mut target, &square, Rgb8::black(), &Transform2d::new());
/// assert_eq!(pixels[32 * 64 + 32], 0);
/// ```
pub struct Filler {
    mask_buffer: Vec<SubpixelMask>,
    winding_buffer: Vec<NonZeroMask>,
    vertical_extents: SpanExtents,
    edge_table: Vec<Option<u32>>,
    edges: Vec<ScanEdge>,
    width: u32,
    height: u32,
    clip_rect: ClipRectangle,
}

impl Filler {
    /// Create a filler for bitmaps up to `width` x `height` pixels
    ///
    /// `edge_count` sizes the initial edge storage; it grows on demand.
    /// Returns None when an allocation fails.
    pub fn new(width: u32, height: u32, edge_count: usize) -> Option<Filler> {
        // The coverage buffers are three cells wider than the bitmap:
        // one for the turn-off flag past the rightmost edge, one for the
        // maximum sample offset and one for the end sentinel.
        let buffer_width = width as usize + 3;

        let mut mask_buffer = Vec::new();
        mask_buffer.try_reserve_exact(buffer_width).ok()?;
        mask_buffer.resize(buffer_width, 0);

        let mut winding_buffer = Vec::new();
        winding_buffer.try_reserve_exact(buffer_width).ok()?;
        winding_buffer.resize(buffer_width, NonZeroMask::default());

        let mut edge_table = Vec::new();
        edge_table.try_reserve_exact(height as usize).ok()?;
        edge_table.resize(height as usize, None);

        let mut edges = Vec::new();
        edges.try_reserve(edge_count).ok()?;

        Some(Filler {
            mask_buffer,
            winding_buffer,
            vertical_extents: SpanExtents::new(),
            edge_table,
            edges,
            width,
            height,
            clip_rect: ClipRectangle::new(0, 0, width, height, SUBPIXEL_COUNT),
        })
    }

    /// Restrict rendering to a pixel rectangle
    ///
    /// Out-of-range values are clamped to the filler bound, not
    /// rejected.
    pub fn set_clip_rect(&mut self, x: u32, y: u32, width: u32, height: u32) {
        let x = x.min(self.width);
        let y = y.min(self.height);
        let max_x = x.saturating_add(width).min(self.width);
        let max_y = y.saturating_add(height).min(self.height);
        self.clip_rect = ClipRectangle::new(x, y, max_x - x, max_y - y, SUBPIXEL_COUNT);
    }

    /// Render with the even-odd fill rule
    pub fn render_even_odd(
        &mut self,
        target: &mut BitmapData,
        polygon: &Polygon,
        color: Rgb8,
        transform: &Transform2d,
    ) {
        self.render(target, polygon, color, transform, FillRule::EvenOdd)
    }

    /// Render with the non-zero winding fill rule
    pub fn render_non_zero_winding(
        &mut self,
        target: &mut BitmapData,
        polygon: &Polygon,
        color: Rgb8,
        transform: &Transform2d,
    ) {
        self.render(target, polygon, color, transform, FillRule::NonZeroWinding)
    }

    /// Render with an explicit fill rule
    pub fn render(
        &mut self,
        target: &mut BitmapData,
        polygon: &Polygon,
        color: Rgb8,
        transform: &Transform2d,
        rule: FillRule,
    ) {
        if !target.format.is_supported() {
            return;
        }

        self.vertical_extents.reset();
        self.edges.clear();

        // Scale onto the sub-scanline grid and move the sample point
        // from the sub-pixel's top right corner to the pixel center.
        let mut transform = *transform;
        transform.scale(1.0, f64::from(SUBPIXEL_COUNT));
        transform.translate(0.5 / f64::from(SUBPIXEL_COUNT), -0.5);

        let mut clip = ClipRectangle::new(0, 0, target.width, target.height, SUBPIXEL_COUNT);
        clip.intersect(&self.clip_rect);

        for n in 0..polygon.sub_polygon_count() {
            let poly = polygon.sub_polygon(n);
            // Clipping can split a segment in three, so reserve 3x the
            // vertices up front; the arena never reallocates mid-contour.
            if self.edges.try_reserve(poly.vertex_count() * 3).is_err() {
                for bucket in self.edge_table.iter_mut() {
                    *bucket = None;
                }
                return;
            }
            let start = self.edges.len();
            poly.scan_edges(&transform, &clip, &mut self.edges);
            for i in start..self.edges.len() {
                let first = self.edges[i].first_line >> SUBPIXEL_SHIFT;
                let last = self.edges[i].last_line >> SUBPIXEL_SHIFT;
                self.edges[i].next = self.edge_table[first as usize];
                self.edge_table[first as usize] = Some(i as u32);
                self.vertical_extents.mark(first, last);
            }
        }

        if self.vertical_extents.is_empty() {
            return;
        }
        debug!(
            "{:?} fill: {} edges over rows {}..={}",
            rule,
            self.edges.len(),
            self.vertical_extents.min,
            self.vertical_extents.max
        );

        let color = color.pack(target.format);
        match rule {
            FillRule::EvenOdd => self.fill_even_odd(target, color),
            FillRule::NonZeroWinding => self.fill_non_zero(target, color),
        }
    }

    fn fill_even_odd(&mut self, target: &mut BitmapData, color: u32) {
        let pitch = (target.pitch / 4) as usize;
        let Filler {
            ref mut edges,
            ref mut edge_table,
            ref mut mask_buffer,
            ref vertical_extents,
            ..
        } = *self;

        let mut aet: Option<u32> = None;
        let mut extents = SpanExtents::new();
        for y in vertical_extents.min..=vertical_extents.max {
            extents.reset();
            sweep::even_odd_row(edges, edge_table, mask_buffer, &mut aet, &mut extents, y);
            if !extents.is_empty() {
                let row_start = y as usize * pitch;
                let row = &mut target.data[row_start..row_start + pitch];
                paint::fill_even_odd_row(
                    row,
                    mask_buffer,
                    extents.min as usize,
                    (extents.max + 1) as usize,
                    color,
                );
            }
        }
    }

    fn fill_non_zero(&mut self, target: &mut BitmapData, color: u32) {
        let pitch = (target.pitch / 4) as usize;
        let Filler {
            ref mut edges,
            ref mut edge_table,
            ref mut winding_buffer,
            ref vertical_extents,
            ..
        } = *self;

        let mut aet: Option<u32> = None;
        let mut extents = SpanExtents::new();
        for y in vertical_extents.min..=vertical_extents.max {
            extents.reset();
            sweep::non_zero_row(edges, edge_table, winding_buffer, &mut aet, &mut extents, y);
            if !extents.is_empty() {
                let row_start = y as usize * pitch;
                let row = &mut target.data[row_start..row_start + pitch];
                paint::fill_non_zero_row(
                    row,
                    winding_buffer,
                    extents.min as usize,
                    (extents.max + 1) as usize,
                    color,
                );
            }
        }
    }
}
