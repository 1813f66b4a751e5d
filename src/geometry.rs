//! Polygon geometry and scan edge generation

use crate::clip::ClipRectangle;
use crate::edge::ScanEdge;
use crate::math::{self, SLOPE_FIX_SHIFT, SLOPE_FIX_STEP};
use crate::transform::Transform2d;

/// A 2D point
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Vertex {
    pub x: f64,
    pub y: f64,
}

impl Vertex {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// A closed contour
///
/// The last vertex connects implicitly back to the first. Contours with
/// fewer than three vertices produce no edges.
#[derive(Debug, Clone)]
pub struct SubPolygon {
    vertices: Vec<Vertex>,
}

impl SubPolygon {
    pub fn new(vertices: Vec<Vertex>) -> Self {
        Self { vertices }
    }

    /// Build a contour from interleaved x,y coordinate pairs
    pub fn from_coords(coords: &[f64]) -> Self {
        let vertices = coords
            .chunks(2)
            .filter(|c| c.len() == 2)
            .map(|c| Vertex::new(c[0], c[1]))
            .collect();
        Self { vertices }
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Generate the scan edges for this contour
    ///
    /// Vertices are transformed, rounded onto the sub-scanline grid with
    /// the half-open rule `first = floor(y0) + 1`, `last = floor(y1)`,
    /// and clipped. Parts beyond the horizontal clip bounds become
    /// vertical edges pinned at the boundary so winding is preserved;
    /// a segment crossing a bound splits into up to three edges.
    ///
    /// Edges are appended to `edges` and the number added is returned.
    pub fn scan_edges(
        &self,
        transform: &Transform2d,
        clip: &ClipRectangle,
        edges: &mut Vec<ScanEdge>,
    ) -> usize {
        let n = self.vertices.len();
        if n < 3 {
            return 0;
        }
        let mut count = 0;
        let (mut px, mut py) = transform.transform(self.vertices[n - 1].x, self.vertices[n - 1].y);
        for v in &self.vertices {
            let (cx, cy) = transform.transform(v.x, v.y);
            count += add_segment_edges(px, py, cx, cy, clip, edges);
            px = cx;
            py = cy;
        }
        count
    }
}

/// An ordered set of closed contours
///
/// Built once from input geometry and reused across render calls; the
/// rasterizer only reads it.
#[derive(Debug, Clone)]
pub struct Polygon {
    sub_polygons: Vec<SubPolygon>,
}

impl Polygon {
    pub fn new(sub_polygons: Vec<SubPolygon>) -> Self {
        Self { sub_polygons }
    }

    /// Build a polygon from per-contour interleaved coordinate arrays
    ///
    /// ```
    /// use edgeflag::Polygon;
    /// let square = Polygon::from_parts(&[&[0.0, 0.0, 10.0, 0.0, 10.0, 10.0, 0.0, 10.0]]);
    /// assert_eq!(square.sub_polygon_count(), 1);
    /// ```
    pub fn from_parts(parts: &[&[f64]]) -> Self {
        Self {
            sub_polygons: parts.iter().map(|p| SubPolygon::from_coords(p)).collect(),
        }
    }

    pub fn sub_polygon_count(&self) -> usize {
        self.sub_polygons.len()
    }

    pub fn sub_polygon(&self, index: usize) -> &SubPolygon {
        &self.sub_polygons[index]
    }
}

fn floor_i32(v: f64) -> i32 {
    v.floor() as i32
}

fn push_edge(
    edges: &mut Vec<ScanEdge>,
    x: f64,
    slope: f64,
    first_line: i32,
    last_line: i32,
    winding: i16,
) {
    let slope_fixed = math::to_fixed(slope);
    // The exact advance over a full correction step, minus what the
    // quantized slope accumulates over it.
    let slope_fix = if last_line - first_line >= SLOPE_FIX_STEP {
        math::to_fixed(slope * f64::from(SLOPE_FIX_STEP)) - (slope_fixed << SLOPE_FIX_SHIFT)
    } else {
        0
    };
    edges.push(ScanEdge {
        x: math::to_fixed(x),
        slope: slope_fixed,
        slope_fix,
        first_line,
        last_line,
        winding,
        next: None,
    });
}

/// Convert one contour segment into 0 to 3 clipped scan edges
fn add_segment_edges(
    x0: f64,
    y0: f64,
    x1: f64,
    y1: f64,
    clip: &ClipRectangle,
    edges: &mut Vec<ScanEdge>,
) -> usize {
    if !(y0 != y1) {
        // horizontal or non-finite
        return 0;
    }
    let (winding, sx, sy, ex, ey) = if y1 > y0 {
        (1i16, x0, y0, x1, y1)
    } else {
        (-1i16, x1, y1, x0, y0)
    };

    let mut first = floor_i32(sy).saturating_add(1);
    let mut last = floor_i32(ey);
    if first > last || last < clip.y_min || first > clip.y_max {
        return 0;
    }
    if first < clip.y_min {
        first = clip.y_min;
    }
    if last > clip.y_max {
        last = clip.y_max;
    }

    let slope = (ex - sx) / (ey - sy);
    let x_at = |row: i32| sx + (f64::from(row) - sy) * slope;

    let xf = x_at(first);
    let xl = x_at(last);
    let (lo, hi) = if xf <= xl { (xf, xl) } else { (xl, xf) };

    // Fully on one side of the clip bounds: a single edge.
    if lo >= clip.x_min && hi <= clip.x_max {
        push_edge(edges, xf, slope, first, last, winding);
        return 1;
    }
    if hi < clip.x_min {
        push_edge(edges, clip.x_min, 0.0, first, last, winding);
        return 1;
    }
    if lo > clip.x_max {
        push_edge(edges, clip.x_max, 0.0, first, last, winding);
        return 1;
    }

    // The segment crosses a horizontal clip bound. Split the row range
    // into boundary-pinned and interior pieces.
    let mut count = 0;
    let mut a = first;
    let mut b = last;

    if slope > 0.0 {
        if xf < clip.x_min {
            // Last row still left of the bound.
            let mut k = floor_i32((clip.x_min - sx) / slope + sy).max(first - 1).min(last);
            while k >= first && x_at(k) >= clip.x_min {
                k -= 1;
            }
            while k < last && x_at(k + 1) < clip.x_min {
                k += 1;
            }
            if k >= first {
                push_edge(edges, clip.x_min, 0.0, first, k, winding);
                count += 1;
            }
            a = k + 1;
        }
        if xl > clip.x_max {
            // First row already right of the bound.
            let mut k = floor_i32((clip.x_max - sx) / slope + sy)
                .saturating_add(1)
                .max(first)
                .min(last + 1);
            while k <= last && x_at(k) <= clip.x_max {
                k += 1;
            }
            while k > first && x_at(k - 1) > clip.x_max {
                k -= 1;
            }
            if k <= last {
                push_edge(edges, clip.x_max, 0.0, k, last, winding);
                count += 1;
            }
            b = k - 1;
        }
    } else {
        // x decreases with row: the right-side piece comes first.
        if xf > clip.x_max {
            let mut k = floor_i32((clip.x_max - sx) / slope + sy).max(first - 1).min(last);
            while k >= first && x_at(k) <= clip.x_max {
                k -= 1;
            }
            while k < last && x_at(k + 1) > clip.x_max {
                k += 1;
            }
            if k >= first {
                push_edge(edges, clip.x_max, 0.0, first, k, winding);
                count += 1;
            }
            a = k + 1;
        }
        if xl < clip.x_min {
            let mut k = floor_i32((clip.x_min - sx) / slope + sy)
                .saturating_add(1)
                .max(first)
                .min(last + 1);
            while k <= last && x_at(k) >= clip.x_min {
                k += 1;
            }
            while k > first && x_at(k - 1) < clip.x_min {
                k -= 1;
            }
            if k <= last {
                push_edge(edges, clip.x_min, 0.0, k, last, winding);
                count += 1;
            }
            b = k - 1;
        }
    }

    if a <= b {
        let x = x_at(a).max(clip.x_min).min(clip.x_max);
        push_edge(edges, x, slope, a, b, winding);
        count += 1;
    }
    count
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::{fixed_to_int, to_fixed, SUBPIXEL_COUNT};

    fn clip_200() -> ClipRectangle {
        ClipRectangle::new(0, 0, 200, 200, SUBPIXEL_COUNT)
    }

    fn remap() -> Transform2d {
        let mut t = Transform2d::new();
        t.scale(1.0, f64::from(SUBPIXEL_COUNT));
        t.translate(0.5 / f64::from(SUBPIXEL_COUNT), -0.5);
        t
    }

    #[test]
    fn square_yields_two_vertical_edges() {
        let square = SubPolygon::from_coords(&[10.0, 10.0, 110.0, 10.0, 110.0, 110.0, 10.0, 110.0]);
        let mut edges = Vec::new();
        let n = square.scan_edges(&remap(), &clip_200(), &mut edges);
        assert_eq!(n, 2);
        for e in &edges {
            assert_eq!(e.first_line, 80);
            assert_eq!(e.last_line, 879);
            assert_eq!(e.slope, 0);
        }
        assert_ne!(edges[0].winding, edges[1].winding);
        let mut xs: Vec<i32> = edges.iter().map(|e| fixed_to_int(e.x)).collect();
        xs.sort();
        assert_eq!(xs, vec![10, 110]);
    }

    #[test]
    fn degenerate_contour_yields_nothing() {
        let two = SubPolygon::from_coords(&[0.0, 0.0, 5.0, 5.0]);
        let mut edges = Vec::new();
        assert_eq!(two.scan_edges(&remap(), &clip_200(), &mut edges), 0);
        assert!(edges.is_empty());
    }

    #[test]
    fn fully_left_geometry_pins_to_boundary() {
        let square =
            SubPolygon::from_coords(&[-50.0, 10.0, -20.0, 10.0, -20.0, 40.0, -50.0, 40.0]);
        let mut edges = Vec::new();
        let n = square.scan_edges(&remap(), &clip_200(), &mut edges);
        assert_eq!(n, 2);
        for e in &edges {
            assert_eq!(e.x, to_fixed(0.0));
            assert_eq!(e.slope, 0);
        }
        // Opposite windings at the same column cancel during the sweep.
        let total: i16 = edges.iter().map(|e| e.winding).sum();
        assert_eq!(total, 0);
    }

    #[test]
    fn crossing_segment_splits() {
        // A segment running from x = -40 to x = 40 over 80 pixel rows.
        let tri = SubPolygon::from_coords(&[-40.0, 10.0, 40.0, 90.0, -40.0, 90.0]);
        let mut edges = Vec::new();
        let n = tri.scan_edges(&remap(), &clip_200(), &mut edges);
        // Diagonal: boundary piece + interior piece. Left vertical edge
        // pins to the bound, bottom is horizontal.
        assert_eq!(n, 3);
        let boundary = edges.iter().filter(|e| e.slope == 0).count();
        assert_eq!(boundary, 2);
        for e in &edges {
            assert!(fixed_to_int(e.x) >= 0);
        }
        // Piece rows must tile the full segment span without overlap.
        let mut diag: Vec<&ScanEdge> = edges.iter().filter(|e| e.winding == 1).collect();
        diag.sort_by_key(|e| e.first_line);
        assert_eq!(diag.len(), 2);
        assert_eq!(diag[0].last_line + 1, diag[1].first_line);
    }

    #[test]
    fn vertical_rows_clamped_to_clip() {
        let tall = SubPolygon::from_coords(&[5.0, -100.0, 15.0, -100.0, 15.0, 300.0, 5.0, 300.0]);
        let mut edges = Vec::new();
        tall.scan_edges(&remap(), &clip_200(), &mut edges);
        for e in &edges {
            assert!(e.first_line >= 0);
            assert!(e.last_line <= 200 * SUBPIXEL_COUNT - 1);
        }
    }

    #[test]
    fn slope_fix_only_on_tall_edges() {
        let mut edges = Vec::new();
        push_edge(&mut edges, 0.0, 1.0 / 3.0, 0, 500, 1);
        push_edge(&mut edges, 0.0, 1.0 / 3.0, 0, 10, 1);
        assert_ne!(edges[0].slope_fix, 0);
        assert_eq!(edges[1].slope_fix, 0);
        // Correction equals the exact step advance minus the accumulated one.
        let exact = to_fixed(1.0 / 3.0 * 64.0);
        assert_eq!(edges[0].slope_fix, exact - (edges[0].slope << 6));
    }
}
