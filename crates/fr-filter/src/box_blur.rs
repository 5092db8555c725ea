use fr_core::{Buffer, BufferView};
use serde::{Deserialize, Serialize};

use crate::sat::SummedAreaTable;

/// Window half-extents for [`box_blur`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct BlurConfig {
    pub half_height: usize,
    pub half_width: usize,
}

impl BlurConfig {
    pub fn apply(&self, src: &BufferView<'_>) -> Buffer {
        box_blur(src, self.half_height, self.half_width)
    }
}

/// Mean over the `(2 * half_height + 1) x (2 * half_width + 1)` window around
/// each pixel, clipped to the buffer.
///
/// Near the border the window is intersected with the buffer and the sum is
/// divided by the number of pixels actually covered, so edges are averaged
/// over fewer samples instead of padded ones. Cost per output pixel does not
/// depend on the window size.
///
/// `half_height == half_width == 0` returns an exact copy.
pub fn box_blur(src: &BufferView<'_>, half_height: usize, half_width: usize) -> Buffer {
    let (height, width) = src.shape();
    tracing::debug!(height, width, half_height, half_width, "box blur");

    if src.is_empty() || (half_height == 0 && half_width == 0) {
        return src.to_buffer();
    }

    let table = SummedAreaTable::new(src);
    let mut out = Buffer::new(height, width);

    for y in 0..height {
        let top = y.saturating_sub(half_height);
        let bottom = y.saturating_add(half_height).min(height - 1);
        let rows = bottom - top + 1;

        let out_row = out.row_mut(y);
        for (x, out_px) in out_row.iter_mut().enumerate() {
            let left = x.saturating_sub(half_width);
            let right = x.saturating_add(half_width).min(width - 1);
            let count = rows * (right - left + 1);

            *out_px = table.rect_sum(top, left, bottom, right) / count as f64;
        }
    }

    out
}
