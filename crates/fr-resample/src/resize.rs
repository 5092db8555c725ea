use fr_core::{Buffer, BufferView, Error};
use serde::{Deserialize, Serialize};

use crate::grow::grow;
use crate::shrink::shrink;
use crate::warp::{Easing, Warp};

/// How a resize reaches its target shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResizeMode {
    /// Target equals the source shape.
    Identity,
    /// Neither axis grows.
    Shrink,
    /// Neither axis shrinks.
    Grow,
    /// One axis grows while the other shrinks.
    Mixed,
}

impl ResizeMode {
    pub fn select(src: (usize, usize), dst: (usize, usize)) -> Self {
        let (src_h, src_w) = src;
        let (dst_h, dst_w) = dst;

        if dst_h == src_h && dst_w == src_w {
            ResizeMode::Identity
        } else if dst_h <= src_h && dst_w <= src_w {
            ResizeMode::Shrink
        } else if dst_h >= src_h && dst_w >= src_w {
            ResizeMode::Grow
        } else {
            ResizeMode::Mixed
        }
    }
}

/// Target shape and warp for [`resize_with`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ResizeConfig {
    pub target_height: usize,
    pub target_width: usize,
    #[serde(default)]
    pub easing: Easing,
}

impl ResizeConfig {
    pub fn apply(&self, src: &BufferView<'_>) -> Result<Buffer, Error> {
        resize_with(src, self.target_height, self.target_width, &self.easing)
    }
}

/// Resizes with plain bilinear weights when growing.
pub fn resize(
    src: &BufferView<'_>,
    target_height: usize,
    target_width: usize,
) -> Result<Buffer, Error> {
    resize_with(src, target_height, target_width, &Easing::Linear)
}

/// Resizes `src` to `target_height x target_width`.
///
/// - Same shape: returns a copy.
/// - Shrink: area-weighted box average, normalized by the continuous box area.
/// - Grow: half-pixel-aligned bilinear interpolation with `warp` applied to the
///   fractional offsets and edge replication outside the source.
/// - Mixed: the shrinking axis is resized first with the other axis kept, then
///   the growing axis.
///
/// Resizing from or to a shape with a zero dimension fails with
/// [`Error::InvalidArgument`], except when source and target are the same
/// shape.
pub fn resize_with<W: Warp + ?Sized>(
    src: &BufferView<'_>,
    target_height: usize,
    target_width: usize,
    warp: &W,
) -> Result<Buffer, Error> {
    let (src_h, src_w) = src.shape();
    let mode = ResizeMode::select((src_h, src_w), (target_height, target_width));
    tracing::debug!(
        src_h,
        src_w,
        target_height,
        target_width,
        ?mode,
        "resize"
    );

    if mode == ResizeMode::Identity {
        return Ok(src.to_buffer());
    }

    if src_h == 0 || src_w == 0 || target_height == 0 || target_width == 0 {
        return Err(Error::InvalidArgument(format!(
            "cannot resize {src_h}x{src_w} to {target_height}x{target_width}: \
             zero-sized shape"
        )));
    }

    match mode {
        ResizeMode::Identity => Ok(src.to_buffer()),
        ResizeMode::Shrink => Ok(shrink(src, target_height, target_width)),
        ResizeMode::Grow => Ok(grow(src, target_height, target_width, warp)),
        ResizeMode::Mixed => {
            let partial = if src_h > target_height {
                resize_with(src, target_height, src_w, warp)?
            } else {
                resize_with(src, src_h, target_width, warp)?
            };
            tracing::trace!(
                partial_h = partial.height(),
                partial_w = partial.width(),
                "mixed resize: shrink pass done"
            );
            resize_with(&partial.as_view(), target_height, target_width, warp)
        }
    }
}
