use core::ops::{Index, IndexMut};

use crate::{Error, Pixel};

/// Owned, row-major image of [`Pixel`]s.
///
/// Indexing is `(row, column)`. A buffer with `height * width == 0` is valid
/// and holds no storage. Cloning copies the pixel data; buffers never share
/// storage.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Buffer {
    height: usize,
    width: usize,
    data: Vec<Pixel>,
}

impl Buffer {
    /// Allocates a `height x width` buffer with every pixel set to zero.
    pub fn new(height: usize, width: usize) -> Self {
        Self::new_fill(height, width, Pixel::ZERO)
    }

    pub fn new_fill(height: usize, width: usize, value: Pixel) -> Self {
        let len = height.checked_mul(width).expect("buffer size overflow");
        Self {
            height,
            width,
            data: vec![value; len],
        }
    }

    pub fn from_vec(height: usize, width: usize, data: Vec<Pixel>) -> Result<Self, Error> {
        let expected = height.checked_mul(width).ok_or(Error::SizeMismatch {
            expected: usize::MAX,
            actual: data.len(),
        })?;

        if data.len() != expected {
            return Err(Error::SizeMismatch {
                expected,
                actual: data.len(),
            });
        }

        Ok(Self {
            height,
            width,
            data,
        })
    }

    /// Caller guarantees `data.len() == height * width`.
    pub(crate) fn from_parts(height: usize, width: usize, data: Vec<Pixel>) -> Self {
        debug_assert_eq!(data.len(), height * width);
        Self {
            height,
            width,
            data,
        }
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn shape(&self) -> (usize, usize) {
        (self.height, self.width)
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn data(&self) -> &[Pixel] {
        &self.data
    }

    pub fn data_mut(&mut self) -> &mut [Pixel] {
        &mut self.data
    }

    pub fn row(&self, y: usize) -> &[Pixel] {
        assert!(y < self.height, "row index out of bounds");
        let start = y * self.width;
        &self.data[start..start + self.width]
    }

    pub fn row_mut(&mut self, y: usize) -> &mut [Pixel] {
        assert!(y < self.height, "row index out of bounds");
        let start = y * self.width;
        &mut self.data[start..start + self.width]
    }

    pub fn get(&self, y: usize, x: usize) -> Option<&Pixel> {
        if y >= self.height || x >= self.width {
            return None;
        }
        self.data.get(y * self.width + x)
    }

    pub fn get_mut(&mut self, y: usize, x: usize) -> Option<&mut Pixel> {
        if y >= self.height || x >= self.width {
            return None;
        }
        self.data.get_mut(y * self.width + x)
    }

    /// Sets every pixel to `value`.
    pub fn fill(&mut self, value: Pixel) -> &mut Self {
        self.data.fill(value);
        self
    }

    pub fn as_view(&self) -> BufferView<'_> {
        BufferView {
            height: self.height,
            width: self.width,
            stride: self.width,
            data: &self.data,
        }
    }
}

impl Index<(usize, usize)> for Buffer {
    type Output = Pixel;

    #[inline]
    fn index(&self, (y, x): (usize, usize)) -> &Pixel {
        debug_assert!(y < self.height && x < self.width, "pixel index out of bounds");
        &self.data[y * self.width + x]
    }
}

impl IndexMut<(usize, usize)> for Buffer {
    #[inline]
    fn index_mut(&mut self, (y, x): (usize, usize)) -> &mut Pixel {
        debug_assert!(y < self.height && x < self.width, "pixel index out of bounds");
        &mut self.data[y * self.width + x]
    }
}

/// Borrowed, read-only window into pixel storage.
///
/// `stride` is the distance, in pixels, between the starts of adjacent rows
/// and may exceed `width` for subviews.
#[derive(Debug, Clone, Copy)]
pub struct BufferView<'a> {
    height: usize,
    width: usize,
    stride: usize,
    data: &'a [Pixel],
}

impl<'a> BufferView<'a> {
    pub fn from_slice(
        height: usize,
        width: usize,
        stride: usize,
        data: &'a [Pixel],
    ) -> Result<Self, Error> {
        if stride < width {
            return Err(Error::InvalidStride);
        }

        let min_len = min_required_len(height, width, stride).ok_or(Error::SizeMismatch {
            expected: usize::MAX,
            actual: data.len(),
        })?;

        if data.len() < min_len {
            return Err(Error::SizeMismatch {
                expected: min_len,
                actual: data.len(),
            });
        }

        Ok(Self {
            height,
            width,
            stride,
            data,
        })
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn stride(&self) -> usize {
        self.stride
    }

    pub fn shape(&self) -> (usize, usize) {
        (self.height, self.width)
    }

    pub fn is_empty(&self) -> bool {
        self.height == 0 || self.width == 0
    }

    pub fn row(&self, y: usize) -> &'a [Pixel] {
        assert!(y < self.height, "row index out of bounds");
        let start = y * self.stride;
        &self.data[start..start + self.width]
    }

    pub fn get(&self, y: usize, x: usize) -> Option<&'a Pixel> {
        if y >= self.height || x >= self.width {
            return None;
        }
        self.data.get(y * self.stride + x)
    }

    /// Returns the `height x width` window whose top-left pixel is `(y, x)`.
    pub fn subview(
        &self,
        y: usize,
        x: usize,
        height: usize,
        width: usize,
    ) -> Result<BufferView<'a>, Error> {
        if y > self.height
            || x > self.width
            || height > (self.height - y)
            || width > (self.width - x)
        {
            return Err(Error::OutOfBounds);
        }

        let start = y
            .checked_mul(self.stride)
            .and_then(|v| v.checked_add(x))
            .ok_or(Error::OutOfBounds)?;
        let min_len = min_required_len(height, width, self.stride).ok_or(Error::OutOfBounds)?;
        let tail = self.data.get(start..).ok_or(Error::OutOfBounds)?;

        if tail.len() < min_len {
            return Err(Error::OutOfBounds);
        }

        Ok(BufferView {
            height,
            width,
            stride: self.stride,
            data: tail,
        })
    }

    pub fn is_contiguous(&self) -> bool {
        self.stride == self.width
    }

    pub fn as_contiguous_slice(&self) -> Option<&'a [Pixel]> {
        if !self.is_contiguous() {
            return None;
        }
        self.data.get(0..self.width * self.height)
    }

    /// Copies the viewed pixels into a new, tightly packed [`Buffer`].
    pub fn to_buffer(&self) -> Buffer {
        if let Some(contig) = self.as_contiguous_slice() {
            return Buffer::from_parts(self.height, self.width, contig.to_vec());
        }

        let mut data = Vec::with_capacity(self.width * self.height);
        for y in 0..self.height {
            data.extend_from_slice(self.row(y));
        }
        Buffer::from_parts(self.height, self.width, data)
    }
}

impl Index<(usize, usize)> for BufferView<'_> {
    type Output = Pixel;

    #[inline]
    fn index(&self, (y, x): (usize, usize)) -> &Pixel {
        debug_assert!(y < self.height && x < self.width, "pixel index out of bounds");
        &self.data[y * self.stride + x]
    }
}

fn min_required_len(height: usize, width: usize, stride: usize) -> Option<usize> {
    if width == 0 || height == 0 {
        return Some(0);
    }

    let rows_before_last = height.checked_sub(1)?;
    let base = rows_before_last.checked_mul(stride)?;
    base.checked_add(width)
}
