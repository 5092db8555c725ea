//! Elementwise arithmetic on [`Buffer`].
//!
//! Every operation is built on two helpers: [`Buffer::map`] broadcasts a
//! per-pixel function, and [`Buffer::zip_with`] combines two buffers of equal
//! shape. Buffer-buffer operations fail with [`Error::DimensionMismatch`] when
//! the shapes differ; pixel and scalar operands broadcast and always succeed.

use crate::{Buffer, Error, Pixel};

impl Buffer {
    pub fn map(&self, f: impl Fn(Pixel) -> Pixel) -> Buffer {
        let data = self.data().iter().map(|&p| f(p)).collect();
        Buffer::from_parts(self.height(), self.width(), data)
    }

    pub fn map_in_place(&mut self, f: impl Fn(Pixel) -> Pixel) -> &mut Self {
        for p in self.data_mut() {
            *p = f(*p);
        }
        self
    }

    pub fn zip_with(
        &self,
        rhs: &Buffer,
        f: impl Fn(Pixel, Pixel) -> Pixel,
    ) -> Result<Buffer, Error> {
        self.check_same_shape(rhs)?;
        let data = self
            .data()
            .iter()
            .zip(rhs.data())
            .map(|(&a, &b)| f(a, b))
            .collect();
        Ok(Buffer::from_parts(self.height(), self.width(), data))
    }

    pub fn zip_with_in_place(
        &mut self,
        rhs: &Buffer,
        f: impl Fn(Pixel, Pixel) -> Pixel,
    ) -> Result<&mut Self, Error> {
        self.check_same_shape(rhs)?;
        for (a, &b) in self.data_mut().iter_mut().zip(rhs.data()) {
            *a = f(*a, b);
        }
        Ok(self)
    }

    /// Clamps every channel of every pixel into `[low, high]`.
    pub fn clip(&self, low: f64, high: f64) -> Buffer {
        self.map(|p| p.clamp(low, high))
    }

    pub fn clip_in_place(&mut self, low: f64, high: f64) -> &mut Self {
        self.map_in_place(|p| p.clamp(low, high))
    }

    /// Natural logarithm of every channel of every pixel.
    pub fn ln(&self) -> Buffer {
        self.map(Pixel::ln)
    }

    pub fn ln_in_place(&mut self) -> &mut Self {
        self.map_in_place(Pixel::ln)
    }

    fn check_same_shape(&self, rhs: &Buffer) -> Result<(), Error> {
        if self.shape() != rhs.shape() {
            return Err(Error::DimensionMismatch {
                expected_height: self.height(),
                expected_width: self.width(),
                actual_height: rhs.height(),
                actual_width: rhs.width(),
            });
        }
        Ok(())
    }
}

macro_rules! elementwise_ops {
    (
        $sym:tt,
        $name:ident,
        $name_pixel:ident,
        $name_scalar:ident,
        $name_in_place:ident,
        $name_pixel_in_place:ident,
        $name_scalar_in_place:ident
    ) => {
        impl Buffer {
            #[doc = concat!("`self ", stringify!($sym), " rhs`, pixel by pixel.")]
            pub fn $name(&self, rhs: &Buffer) -> Result<Buffer, Error> {
                self.zip_with(rhs, |a, b| a $sym b)
            }

            #[doc = concat!("Every pixel `", stringify!($sym), " rhs`.")]
            pub fn $name_pixel(&self, rhs: Pixel) -> Buffer {
                self.map(|a| a $sym rhs)
            }

            #[doc = concat!("Every channel `", stringify!($sym), " rhs`.")]
            pub fn $name_scalar(&self, rhs: f64) -> Buffer {
                self.map(|a| a $sym rhs)
            }

            pub fn $name_in_place(&mut self, rhs: &Buffer) -> Result<&mut Self, Error> {
                self.zip_with_in_place(rhs, |a, b| a $sym b)
            }

            pub fn $name_pixel_in_place(&mut self, rhs: Pixel) -> &mut Self {
                self.map_in_place(|a| a $sym rhs)
            }

            pub fn $name_scalar_in_place(&mut self, rhs: f64) -> &mut Self {
                self.map_in_place(|a| a $sym rhs)
            }
        }
    };
}

elementwise_ops!(+, add, add_pixel, add_scalar, add_in_place, add_pixel_in_place, add_scalar_in_place);
elementwise_ops!(-, sub, sub_pixel, sub_scalar, sub_in_place, sub_pixel_in_place, sub_scalar_in_place);
elementwise_ops!(*, mul, mul_pixel, mul_scalar, mul_in_place, mul_pixel_in_place, mul_scalar_in_place);
elementwise_ops!(/, div, div_pixel, div_scalar, div_in_place, div_pixel_in_place, div_scalar_in_place);

#[cfg(test)]
mod tests {
    use crate::{Buffer, Error, Pixel};

    fn ramp(height: usize, width: usize) -> Buffer {
        let data = (0..height * width)
            .map(|i| Pixel::new(i as f64, 2.0 * i as f64, 1.0))
            .collect();
        Buffer::from_vec(height, width, data).expect("valid buffer")
    }

    #[test]
    fn add_mismatched_shapes_fails() {
        let a = ramp(2, 3);
        let b = ramp(3, 2);

        let err = a.add(&b).unwrap_err();
        assert_eq!(
            err,
            Error::DimensionMismatch {
                expected_height: 2,
                expected_width: 3,
                actual_height: 3,
                actual_width: 2,
            }
        );

        let mut c = a.clone();
        assert!(c.mul_in_place(&b).is_err());
        assert_eq!(c, a, "failed in-place op must leave the buffer untouched");
    }

    #[test]
    fn add_to_itself_doubles() {
        let a = ramp(2, 3);
        let sum = a.add(&a).expect("same shape");
        assert_eq!(sum, a.mul_scalar(2.0));

        let mut b = a.clone();
        b.add_in_place(&a).expect("same shape");
        assert_eq!(b, sum);
    }

    #[test]
    fn pixel_and_scalar_broadcast() {
        let a = ramp(1, 2);
        let shifted = a.sub_pixel(Pixel::new(1.0, 0.0, 1.0));
        assert_eq!(shifted.data(), &[Pixel::new(-1.0, 0.0, 0.0), Pixel::new(0.0, 2.0, 0.0)]);

        let halved = a.div_scalar(2.0);
        assert_eq!(halved[(0, 1)], Pixel::new(0.5, 1.0, 0.5));

        let mut c = a.clone();
        c.add_scalar_in_place(1.0).mul_pixel_in_place(Pixel::new(1.0, 0.5, 2.0));
        assert_eq!(c[(0, 1)], Pixel::new(2.0, 1.5, 4.0));
    }

    #[test]
    fn broadcast_on_empty_buffer_is_valid() {
        let empty = Buffer::new(0, 3);
        assert_eq!(empty.add_scalar(1.0), empty);
        assert_eq!(empty.add(&Buffer::new(0, 3)).expect("same shape"), empty);
    }

    #[test]
    fn elementwise_divide_propagates_non_finite() {
        let a = Buffer::new_fill(1, 2, Pixel::splat(1.0));
        let zero = Buffer::new(1, 2);
        let q = a.div(&zero).expect("same shape");
        assert!(q.data().iter().all(|p| p.r.is_infinite()));

        let nan = zero.div(&zero).expect("same shape");
        assert!(nan.data().iter().all(|p| p.g.is_nan()));
    }

    #[test]
    fn clip_and_ln_forms_agree() {
        let a = ramp(2, 2).sub_scalar(1.0);
        let clipped = a.clip(0.0, 2.0);
        assert_eq!(clipped[(1, 1)], Pixel::new(2.0, 2.0, 0.0));
        assert_eq!(clipped[(0, 0)], Pixel::new(0.0, 0.0, 0.0));

        let mut b = a.clone();
        b.clip_in_place(0.0, 2.0);
        assert_eq!(b, clipped);

        let e = Buffer::new_fill(1, 1, Pixel::splat(core::f64::consts::E));
        let mut l = e.clone();
        l.ln_in_place();
        assert_eq!(l, e.ln());
        assert!((l[(0, 0)].b - 1.0).abs() < 1e-12);
    }
}
