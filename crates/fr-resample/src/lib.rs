//! Resizing for float-raster buffers.
//!
//! [`resize`] picks a strategy from the source and target shapes:
//!
//! - Shrinking averages the source over each destination pixel's footprint,
//!   weighting partially covered source pixels by their overlap. The result
//!   is normalized by the continuous footprint area, so constant images stay
//!   constant.
//! - Growing is separable bilinear interpolation with half-pixel-aligned
//!   sampling. Source samples past the first or last pixel center replicate
//!   the edge.
//! - When one axis grows and the other shrinks, the shrinking axis is handled
//!   first and the growing axis second.
//!
//! [`resize_with`] accepts a [`Warp`] that reshapes the interpolation weight
//! while growing. [`Easing`] provides the common curves; any
//! `Fn(f64) -> f64` also works.

mod grow;
mod resize;
mod shrink;
mod warp;

pub use resize::{ResizeConfig, ResizeMode, resize, resize_with};
pub use warp::{Easing, Warp};
