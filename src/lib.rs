//! Antialiased polygon filling with the scanline edge-flag algorithm
//!
//! Horizontal coverage comes from exact edge crossings; vertical
//! coverage is supersampled at eight sub-scanlines per pixel row.
//! Polygons may have holes, self-intersections and disjoint contours
//! and are filled with a solid color under an affine transform and an
//! axis-aligned clip rectangle, using either fill rule.
//!
//! ```
//! use edgeflag::{BitmapData, BitmapFormat, Filler, Polygon, Rgb8, Transform2d};
//!
//! let mut filler = Filler::new(200, 200, 64).unwrap();
//! let mut pixels = vec![0x00ff_ffffu32; 200 * 200];
//! let mut target = BitmapData::new(200, 200, BitmapFormat::Xrgb, &mut pixels).unwrap();
//!
//! let triangle = Polygon::from_parts(&[&[100.0, 20.0, 180.0, 180.0, 20.0, 180.0]]);
//! filler.render_non_zero_winding(&mut target, &triangle, Rgb8::black(), &Transform2d::new());
//! assert_eq!(pixels[100 * 200 + 100], 0);
//! ```

pub mod bitmap;
pub mod clip;
pub mod color;
pub mod edge;
pub mod extents;
pub mod filler;
pub mod geometry;
pub mod mask;
pub mod math;
mod paint;
pub mod ppm;
mod sweep;
pub mod transform;

pub use crate::bitmap::{BitmapData, BitmapFormat};
pub use crate::clip::ClipRectangle;
pub use crate::color::Rgb8;
pub use crate::edge::ScanEdge;
pub use crate::extents::SpanExtents;
pub use crate::filler::{FillRule, Filler};
pub use crate::geometry::{Polygon, SubPolygon, Vertex};
pub use crate::mask::NonZeroMask;
pub use crate::math::{Fixed, SUBPIXEL_COUNT, SUBPIXEL_SHIFT};
pub use crate::transform::Transform2d;
