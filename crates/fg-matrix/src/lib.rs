//! `fg-matrix` - Matrix descriptors and flat binary matrix I/O for flashgemm.
//!
//! This crate provides:
//! - `Layout` and `Transpose` enums following the CBLAS conventions
//! - A `MatrixDescriptor` type owning contiguous f32 storage plus its geometry
//! - Readers and writers for headerless flat binary f32 matrix files

pub mod descriptor;
pub mod error;
pub mod io;
pub mod layout;

// Re-export primary types at the crate root for convenience.
pub use descriptor::MatrixDescriptor;
pub use error::{MatrixError, Result};
pub use io::{read_matrix, write_matrix};
pub use layout::{Layout, Transpose};
