//! Umbrella crate for the `float-raster` workspace.
//!
//! Re-exports the buffer primitives, the box blur and the resizer, and adds
//! [`raster`] for handing buffers to byte-oriented consumers.

pub mod raster;

pub use fr_core::*;
pub use fr_filter::*;
pub use fr_resample::*;
