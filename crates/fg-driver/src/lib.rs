//! `fg-driver` - Out-of-core GEMM command-line driver for flashgemm.
//!
//! The driver computes C := alpha * op(A) * op(B) + beta * C over flat
//! binary f32 matrix files. One run moves through a fixed sequence:
//! validate arguments, acquire the staging area, load the operands, invoke
//! a `GemmEngine`, persist the result, tear down. Each failure class maps
//! to its own process exit code.

pub mod adapter;
pub mod driver;
pub mod error;
pub mod params;

// Re-export primary types at the crate root for convenience.
pub use adapter::{run_gemm, ComputeResult};
pub use driver::execute;
pub use error::{DriverError, Result};
pub use params::{parse_args, GemmInvocation, GemmParameters};
