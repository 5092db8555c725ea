//! Foundational pixel and buffer types for float-raster.
//!
//! ## Layout
//! A [`Buffer`] stores `height * width` [`Pixel`]s row-major and is indexed
//! `(row, column)`. [`BufferView`] borrows a possibly strided window; the
//! stride is counted in pixels, not bytes.
//!
//! ## Arithmetic
//! Pixels support `+ - * /` against pixels and `f64` scalars. Buffers expose
//! named elementwise operations (`add`, `add_pixel`, `add_scalar`, and the
//! `*_in_place` forms) instead of operator overloads. Buffer-buffer operations
//! require equal shapes.
//!
//! ## Non-finite values
//! Channels are never clamped implicitly. Division by zero propagates
//! infinities and NaN; use [`Buffer::clip`] to bound values.

mod arith;
mod buffer;
mod error;
mod pixel;

pub use buffer::{Buffer, BufferView};
pub use error::Error;
pub use pixel::Pixel;
