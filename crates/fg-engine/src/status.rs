//! Status codes reported by the reference engine.
//!
//! The `GemmEngine` contract only distinguishes zero from non-zero; the
//! non-zero vocabulary belongs to each engine. These are the codes
//! `CpuEngine` uses.

/// Successful completion.
pub const OK: i32 = 0;

/// A leading dimension is below the minimum for its operand's stored shape.
pub const BAD_LEADING_DIM: i32 = 1;

/// An operand buffer is too small for the extent its geometry implies.
pub const BAD_EXTENT: i32 = 2;
