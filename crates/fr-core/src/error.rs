use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("size mismatch: expected {expected}, got {actual}")]
    SizeMismatch { expected: usize, actual: usize },

    #[error(
        "dimension mismatch: expected {expected_height}x{expected_width}, \
         got {actual_height}x{actual_width}"
    )]
    DimensionMismatch {
        expected_height: usize,
        expected_width: usize,
        actual_height: usize,
        actual_width: usize,
    },

    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("out of bounds")]
    OutOfBounds,

    #[error("invalid stride")]
    InvalidStride,
}
