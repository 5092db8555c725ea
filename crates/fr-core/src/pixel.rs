use core::fmt;
use core::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Sub, SubAssign};

/// A three-channel color sample.
///
/// Channels are unconstrained `f64` values. Nothing is clamped internally, and
/// division by zero yields IEEE infinities or NaN rather than an error.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Pixel {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

impl Pixel {
    pub const ZERO: Pixel = Pixel::splat(0.0);

    #[inline]
    pub const fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }

    #[inline]
    pub const fn splat(v: f64) -> Self {
        Self { r: v, g: v, b: v }
    }

    /// Applies `f` to every channel.
    #[inline]
    pub fn map(self, f: impl Fn(f64) -> f64) -> Self {
        Self::new(f(self.r), f(self.g), f(self.b))
    }

    /// Combines matching channels of `self` and `other` with `f`.
    #[inline]
    pub fn zip_with(self, other: Pixel, f: impl Fn(f64, f64) -> f64) -> Self {
        Self::new(f(self.r, other.r), f(self.g, other.g), f(self.b, other.b))
    }

    /// Clamps every channel into `[low, high]`.
    ///
    /// A NaN channel becomes `low`.
    #[inline]
    pub fn clamp(self, low: f64, high: f64) -> Self {
        self.map(|c| c.max(low).min(high))
    }

    /// Natural logarithm of every channel.
    #[inline]
    pub fn ln(self) -> Self {
        self.map(f64::ln)
    }
}

impl fmt::Display for Pixel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgb({}, {}, {})", self.r, self.g, self.b)
    }
}

macro_rules! impl_componentwise_op {
    ($Op:ident, $op:ident, $OpAssign:ident, $op_assign:ident, $sym:tt) => {
        impl $Op for Pixel {
            type Output = Pixel;

            #[inline]
            fn $op(self, rhs: Pixel) -> Pixel {
                self.zip_with(rhs, |a, b| a $sym b)
            }
        }

        impl $Op<f64> for Pixel {
            type Output = Pixel;

            #[inline]
            fn $op(self, rhs: f64) -> Pixel {
                self.map(|a| a $sym rhs)
            }
        }

        impl $OpAssign for Pixel {
            #[inline]
            fn $op_assign(&mut self, rhs: Pixel) {
                *self = *self $sym rhs;
            }
        }

        impl $OpAssign<f64> for Pixel {
            #[inline]
            fn $op_assign(&mut self, rhs: f64) {
                *self = *self $sym rhs;
            }
        }
    };
}

impl_componentwise_op!(Add, add, AddAssign, add_assign, +);
impl_componentwise_op!(Sub, sub, SubAssign, sub_assign, -);
impl_componentwise_op!(Mul, mul, MulAssign, mul_assign, *);
impl_componentwise_op!(Div, div, DivAssign, div_assign, /);
