//! Image file helpers for tests
//!
//! Converts packed 32-bit pixel buffers to RGB files and back; the
//! rasterizer core never touches files itself.

use std::path::Path;

use crate::bitmap::BitmapFormat;
use crate::color::Rgb8;

/// Write a packed pixel buffer as an image file, format from extension
pub fn write_file<P: AsRef<Path>>(
    pixels: &[u32],
    width: usize,
    height: usize,
    format: BitmapFormat,
    filename: P,
) -> Result<(), std::io::Error> {
    let mut buf = Vec::with_capacity(width * height * 3);
    for &p in pixels.iter().take(width * height) {
        let c = Rgb8::unpack(p, format);
        buf.push(c.r);
        buf.push(c.g);
        buf.push(c.b);
    }
    image::save_buffer(filename, &buf, width as u32, height as u32, image::RGB(8))
}

/// Read an image file into RGB bytes
pub fn read_file<P: AsRef<Path>>(
    filename: P,
) -> Result<(Vec<u8>, usize, usize), image::ImageError> {
    let img = image::open(filename)?.to_rgb();
    let (w, h) = img.dimensions();
    let buf = img.into_raw();
    Ok((buf, w as usize, h as usize))
}

/// Compare two image files pixel by pixel
pub fn img_diff<P: AsRef<Path>>(f1: P, f2: P) -> Result<bool, image::ImageError> {
    let (d1, w1, h1) = read_file(f1)?;
    let (d2, w2, h2) = read_file(f2)?;
    if w1 != w2 || h1 != h2 || d1.len() != d2.len() {
        return Ok(false);
    }
    let mut flag = true;
    for (i, (v1, v2)) in d1.iter().zip(d2.iter()).enumerate() {
        if v1 != v2 {
            println!("{} [{},{},{}]: {} {}", i, (i / 3) % w1, (i / 3) / w1, i % 3, v1, v2);
            flag = false;
        }
    }
    Ok(flag)
}
