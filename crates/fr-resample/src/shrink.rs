use fr_core::{Buffer, BufferView, Pixel};

/// Area-weighted downsample to `dst_h x dst_w`.
///
/// Output pixel `(y, x)` covers the source box of size
/// `(src_h / dst_h) x (src_w / dst_w)` anchored at
/// `(y * src_h / dst_h, x * src_w / dst_w)`. Each overlapping source pixel is
/// weighted by its overlap with the box (fractional along straddled edges, the
/// product of both fractions at corners) and the sum is divided by the box
/// area.
///
/// Caller guarantees `0 < dst_h <= src_h` and `0 < dst_w <= src_w`.
pub(crate) fn shrink(src: &BufferView<'_>, dst_h: usize, dst_w: usize) -> Buffer {
    let (src_h, src_w) = src.shape();
    debug_assert!(dst_h > 0 && dst_h <= src_h);
    debug_assert!(dst_w > 0 && dst_w <= src_w);

    let box_h = src_h as f64 / dst_h as f64;
    let box_w = src_w as f64 / dst_w as f64;
    let area = box_h * box_w;

    let row_taps = axis_coverage(src_h, dst_h, box_h);
    let col_taps = axis_coverage(src_w, dst_w, box_w);

    let mut dst = Buffer::new(dst_h, dst_w);
    for (y, rows) in row_taps.iter().enumerate() {
        let dst_row = dst.row_mut(y);
        for (out, cols) in dst_row.iter_mut().zip(col_taps.iter()) {
            let mut sum = Pixel::ZERO;
            for &(sy, wy) in rows {
                let src_row = src.row(sy);
                let mut acc = Pixel::ZERO;
                for &(sx, wx) in cols {
                    acc += src_row[sx] * wx;
                }
                sum += acc * wy;
            }
            *out = sum / area;
        }
    }

    dst
}

fn axis_coverage(src_len: usize, dst_len: usize, box_len: f64) -> Vec<Vec<(usize, f64)>> {
    (0..dst_len)
        .map(|i| {
            let start = (i * src_len) as f64 / dst_len as f64;
            coverage(start, box_len, src_len)
        })
        .collect()
}

/// Source cells overlapping `[start, start + len)` on an axis of `extent`
/// cells, paired with the overlap length.
///
/// The interval end is clipped to `extent`, so rounding never reaches past the
/// last cell.
fn coverage(start: f64, len: f64, extent: usize) -> Vec<(usize, f64)> {
    let end = (start + len).min(extent as f64);
    let mut taps = Vec::with_capacity(len.ceil() as usize + 1);

    let mut i = start.floor() as usize;
    while i < extent && (i as f64) < end {
        let lo = start.max(i as f64);
        let hi = end.min((i + 1) as f64);
        if hi > lo {
            taps.push((i, hi - lo));
        }
        i += 1;
    }

    taps
}
