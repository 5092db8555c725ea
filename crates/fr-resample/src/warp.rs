use core::f64::consts::PI;

use serde::{Deserialize, Serialize};

/// Reshapes the fractional interpolation weight used when growing a buffer.
///
/// Implementations map `[0, 1]` monotonically onto `[0, 1]`. Any
/// `Fn(f64) -> f64` closure is a warp.
pub trait Warp {
    fn warp(&self, t: f64) -> f64;
}

impl<F: Fn(f64) -> f64> Warp for F {
    #[inline]
    fn warp(&self, t: f64) -> f64 {
        self(t)
    }
}

/// Named warp curves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Easing {
    /// Plain bilinear weights.
    #[default]
    Linear,
    /// `0.5 - cos(pi * t) / 2`.
    Cosine,
    /// `3t^2 - 2t^3`.
    Smoothstep,
    /// `6t^5 - 15t^4 + 10t^3`.
    Smootherstep,
}

impl Warp for Easing {
    #[inline]
    fn warp(&self, t: f64) -> f64 {
        match self {
            Easing::Linear => t,
            Easing::Cosine => 0.5 - (PI * t).cos() / 2.0,
            Easing::Smoothstep => t * t * (3.0 - 2.0 * t),
            Easing::Smootherstep => t * t * t * (t * (6.0 * t - 15.0) + 10.0),
        }
    }
}
