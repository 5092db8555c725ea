use fr_core::{Buffer, BufferView, Pixel};

use crate::warp::Warp;

/// Interpolation neighbors along one axis.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Tap {
    lo: usize,
    hi: usize,
    t: f64,
}

/// Separable bilinear upsample to `dst_h x dst_w`.
///
/// Destination pixel centers map back to source coordinates with the
/// half-pixel convention `s = (i + 0.5) * src / dst - 0.5`, so corner pixels
/// line up at any scale. The fractional offset is passed through `warp`
/// before weighting. Coordinates beyond the first or last pixel center
/// replicate the edge.
///
/// Caller guarantees `0 < src_h <= dst_h` and `0 < src_w <= dst_w`.
pub(crate) fn grow<W: Warp + ?Sized>(
    src: &BufferView<'_>,
    dst_h: usize,
    dst_w: usize,
    warp: &W,
) -> Buffer {
    let (src_h, src_w) = src.shape();
    debug_assert!(src_h > 0 && src_h <= dst_h);
    debug_assert!(src_w > 0 && src_w <= dst_w);

    let row_taps = axis_taps(src_h, dst_h, warp);
    let col_taps = axis_taps(src_w, dst_w, warp);

    let mut dst = Buffer::new(dst_h, dst_w);
    for (y, ty) in row_taps.iter().enumerate() {
        let upper = src.row(ty.lo);
        let lower = src.row(ty.hi);
        let dst_row = dst.row_mut(y);
        for (out, tx) in dst_row.iter_mut().zip(col_taps.iter()) {
            let top = lerp(upper[tx.lo], upper[tx.hi], tx.t);
            let bottom = lerp(lower[tx.lo], lower[tx.hi], tx.t);
            *out = lerp(top, bottom, ty.t);
        }
    }

    dst
}

fn axis_taps<W: Warp + ?Sized>(src_len: usize, dst_len: usize, warp: &W) -> Vec<Tap> {
    let scale = src_len as f64 / dst_len as f64;
    (0..dst_len)
        .map(|i| tap_at((i as f64 + 0.5) * scale - 0.5, src_len, warp))
        .collect()
}

fn tap_at<W: Warp + ?Sized>(s: f64, extent: usize, warp: &W) -> Tap {
    let last = extent - 1;
    if s <= 0.0 {
        return Tap {
            lo: 0,
            hi: 0,
            t: 0.0,
        };
    }
    if s >= last as f64 {
        return Tap {
            lo: last,
            hi: last,
            t: 0.0,
        };
    }

    let lo = s.floor() as usize;
    Tap {
        lo,
        hi: lo + 1,
        t: warp.warp(s - lo as f64),
    }
}

#[inline]
fn lerp(a: Pixel, b: Pixel, t: f64) -> Pixel {
    if t == 0.0 {
        return a;
    }
    a * (1.0 - t) + b * t
}

#[cfg(test)]
mod tests {
    use fr_core::{Buffer, Pixel};

    use super::{Tap, grow, tap_at};
    use crate::warp::Easing;

    fn corners_2x2() -> Buffer {
        Buffer::from_vec(
            2,
            2,
            vec![
                Pixel::new(0.0, 0.0, 0.0),
                Pixel::new(1.0, 0.0, 0.0),
                Pixel::new(0.0, 1.0, 0.0),
                Pixel::new(1.0, 1.0, 0.0),
            ],
        )
        .expect("valid buffer")
    }

    #[test]
    fn grow_2x2_to_4x4_keeps_corners() {
        let src = corners_2x2();
        let dst = grow(&src.as_view(), 4, 4, &Easing::Linear);

        assert_eq!(dst[(0, 0)], src[(0, 0)]);
        assert_eq!(dst[(0, 3)], src[(0, 1)]);
        assert_eq!(dst[(3, 0)], src[(1, 0)]);
        assert_eq!(dst[(3, 3)], src[(1, 1)]);
    }

    #[test]
    fn grow_2x2_to_4x4_interpolates_edges() {
        let src = corners_2x2();
        let dst = grow(&src.as_view(), 4, 4, &Easing::Linear);

        let top: Vec<f64> = (0..4).map(|x| dst[(0, x)].r).collect();
        assert_eq!(top, vec![0.0, 0.25, 0.75, 1.0]);

        let left: Vec<f64> = (0..4).map(|y| dst[(y, 0)].g).collect();
        assert_eq!(left, vec![0.0, 0.25, 0.75, 1.0]);

        for y in 0..4 {
            for x in 1..4 {
                assert!(dst[(y, x)].r >= dst[(y, x - 1)].r);
            }
        }
    }

    #[test]
    fn interior_is_bilinear() {
        let src = corners_2x2();
        let dst = grow(&src.as_view(), 4, 4, &Easing::Linear);
        assert_eq!(dst[(1, 2)], Pixel::new(0.75, 0.25, 0.0));
    }

    #[test]
    fn warp_reshapes_weights() {
        let src = corners_2x2();
        let stepped = grow(&src.as_view(), 4, 4, &|t: f64| if t < 0.5 { 0.0 } else { 1.0 });
        let top: Vec<f64> = (0..4).map(|x| stepped[(0, x)].r).collect();
        assert_eq!(top, vec![0.0, 0.0, 1.0, 1.0]);

        let cosine = grow(&src.as_view(), 4, 4, &Easing::Cosine);
        let expected = 0.5 - (core::f64::consts::PI * 0.25).cos() / 2.0;
        assert!((cosine[(0, 1)].r - expected).abs() < 1e-12);
    }

    #[test]
    fn single_pixel_source_replicates() {
        let c = Pixel::new(0.1, 0.2, 0.3);
        let src = Buffer::new_fill(1, 1, c);
        let dst = grow(&src.as_view(), 3, 5, &Easing::Linear);
        assert!(dst.data().iter().all(|&p| p == c));
    }

    #[test]
    fn constant_image_stays_constant() {
        let c = Pixel::new(0.3, 0.6, 0.9);
        let src = Buffer::new_fill(3, 4, c);
        let dst = grow(&src.as_view(), 7, 13, &Easing::Smoothstep);
        for p in dst.data() {
            assert!((p.r - c.r).abs() < 1e-12);
            assert!((p.g - c.g).abs() < 1e-12);
            assert!((p.b - c.b).abs() < 1e-12);
        }
    }

    #[test]
    fn out_of_range_coordinates_clamp_to_edges() {
        let linear = Easing::Linear;
        let first = Tap {
            lo: 0,
            hi: 0,
            t: 0.0,
        };
        let last = Tap {
            lo: 3,
            hi: 3,
            t: 0.0,
        };

        assert_eq!(tap_at(-0.25, 4, &linear), first);
        assert_eq!(tap_at(-7.0, 4, &linear), first);
        assert_eq!(tap_at(3.25, 4, &linear), last);
        assert_eq!(tap_at(40.0, 4, &linear), last);

        let mid = tap_at(1.25, 4, &linear);
        assert_eq!((mid.lo, mid.hi), (1, 2));
        assert!((mid.t - 0.25).abs() < 1e-12);
    }
}
