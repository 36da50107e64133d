//! `fg-engine` - Staging context and GEMM engine contract for flashgemm.
//!
//! This crate provides:
//! - A `StagingContext` handle owning the on-disk staging area
//! - The `GemmEngine` trait every storage-backed GEMM implementation exposes
//! - A reference `CpuEngine` implementation that keeps operands in memory
//! - The status codes the reference engine reports

pub mod cpu;
pub mod engine;
pub mod error;
pub mod staging;
pub mod status;

// Re-export primary types at the crate root for convenience.
pub use cpu::CpuEngine;
pub use engine::GemmEngine;
pub use error::{Result, StagingError};
pub use staging::StagingContext;
