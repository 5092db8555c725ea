use fr_core::{BufferView, Pixel};

/// Inclusive 2-D prefix sums of a buffer.
///
/// `at(y, x)` is the sum of every source pixel in `[0, y] x [0, x]`.
#[derive(Debug, Clone)]
pub(crate) struct SummedAreaTable {
    height: usize,
    width: usize,
    sums: Vec<Pixel>,
}

impl SummedAreaTable {
    pub(crate) fn new(src: &BufferView<'_>) -> Self {
        let (height, width) = src.shape();
        let mut sums = vec![Pixel::ZERO; height * width];

        for y in 0..height {
            let row = src.row(y);
            let mut running = Pixel::ZERO;
            for (x, &px) in row.iter().enumerate() {
                running += px;
                let above = if y > 0 {
                    sums[(y - 1) * width + x]
                } else {
                    Pixel::ZERO
                };
                sums[y * width + x] = running + above;
            }
        }

        Self {
            height,
            width,
            sums,
        }
    }

    #[inline]
    pub(crate) fn at(&self, y: usize, x: usize) -> Pixel {
        self.sums[y * self.width + x]
    }

    /// Sum over the whole source buffer.
    #[cfg(test)]
    pub(crate) fn total(&self) -> Pixel {
        if self.height == 0 || self.width == 0 {
            return Pixel::ZERO;
        }
        self.at(self.height - 1, self.width - 1)
    }

    /// Sum over rows `top..=bottom` and columns `left..=right`.
    #[inline]
    pub(crate) fn rect_sum(&self, top: usize, left: usize, bottom: usize, right: usize) -> Pixel {
        debug_assert!(top <= bottom && bottom < self.height);
        debug_assert!(left <= right && right < self.width);

        let mut sum = self.at(bottom, right);
        if top > 0 {
            sum -= self.at(top - 1, right);
        }
        if left > 0 {
            sum -= self.at(bottom, left - 1);
        }
        if top > 0 && left > 0 {
            sum += self.at(top - 1, left - 1);
        }
        sum
    }
}
