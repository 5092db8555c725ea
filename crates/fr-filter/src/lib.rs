//! Neighborhood filters over [`fr_core::Buffer`]s.
//!
//! The box blur averages a rectangular window clipped to the image bounds.
//! Border pixels are averaged over the pixels that actually fall inside the
//! image; no padding (clamp, reflect, or constant) is synthesized. Window sums
//! come from a summed-area table built once per call, so each output pixel
//! costs four table lookups regardless of the window size.

mod box_blur;
mod sat;

pub use box_blur::{BlurConfig, box_blur};
