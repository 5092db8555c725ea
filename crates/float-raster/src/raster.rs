//! Conversion between float buffers and 8-bit interleaved rasters.
//!
//! Channels map to bytes as `clamp(c * 255, 0, 255)` truncated toward zero;
//! NaN maps to 0. Bytes map back as `b / 255`.

use fr_core::{Buffer, BufferView, Error, Pixel};
use image::{Rgb, RgbImage};

/// Byte order of the three channels within each output pixel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ChannelOrder {
    #[default]
    Rgb,
    Bgr,
}

#[inline]
fn channel_to_byte(c: f64) -> u8 {
    (c * 255.0).clamp(0.0, 255.0) as u8
}

#[inline]
fn pixel_to_bytes(p: &Pixel) -> [u8; 3] {
    [
        channel_to_byte(p.r),
        channel_to_byte(p.g),
        channel_to_byte(p.b),
    ]
}

/// Packs `src` row-major, top-down, three bytes per pixel.
pub fn to_bytes(src: &BufferView<'_>, order: ChannelOrder) -> Vec<u8> {
    let mut out = Vec::with_capacity(src.height() * src.width() * 3);
    for y in 0..src.height() {
        for p in src.row(y) {
            let [r, g, b] = pixel_to_bytes(p);
            match order {
                ChannelOrder::Rgb => out.extend_from_slice(&[r, g, b]),
                ChannelOrder::Bgr => out.extend_from_slice(&[b, g, r]),
            }
        }
    }
    out
}

/// Fails with [`Error::InvalidArgument`] when a dimension does not fit in `u32`.
pub fn to_rgb_image(src: &BufferView<'_>) -> Result<RgbImage, Error> {
    let width = u32::try_from(src.width())
        .map_err(|_| Error::InvalidArgument(format!("width {} exceeds u32", src.width())))?;
    let height = u32::try_from(src.height())
        .map_err(|_| Error::InvalidArgument(format!("height {} exceeds u32", src.height())))?;

    let bytes = to_bytes(src, ChannelOrder::Rgb);
    let expected = bytes.len();
    tracing::trace!(height, width, bytes = expected, "packing rgb image");
    RgbImage::from_raw(width, height, bytes).ok_or(Error::SizeMismatch {
        expected,
        actual: (width as usize) * (height as usize) * 3,
    })
}

pub fn from_rgb_image(img: &RgbImage) -> Buffer {
    let width = img.width() as usize;
    let height = img.height() as usize;
    let mut buf = Buffer::new(height, width);
    for (x, y, &Rgb([r, g, b])) in img.enumerate_pixels() {
        buf[(y as usize, x as usize)] = Pixel::new(f64::from(r), f64::from(g), f64::from(b)) / 255.0;
    }
    buf
}
