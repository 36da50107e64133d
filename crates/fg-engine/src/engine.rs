use std::fmt::Debug;

use fg_matrix::{Layout, Transpose};

use crate::staging::StagingContext;

/// Trait for storage-backed GEMM engines.
///
/// An engine computes C := alpha * op(A) * op(B) + beta * C over
/// caller-owned f32 buffers and reports an integer status: zero for success,
/// any other value an engine-level failure (dimension, I/O, or numeric).
/// Whether the engine stages operands through `ctx` or keeps everything
/// resident is its own residency decision; the call is synchronous either
/// way and the caller's buffers hold the full operands.
pub trait GemmEngine: Send + Sync + Debug {
    /// Returns the name of this engine (e.g., "cpu").
    fn name(&self) -> &str;

    /// General matrix multiply: C := alpha * op(A) * op(B) + beta * C.
    ///
    /// op(A) is m x k, op(B) is k x n, and C is m x n. `order` fixes how all
    /// three buffers are indexed together with their leading dimensions.
    /// When `beta` is zero the initial contents of `c` must not influence
    /// the result, NaN included.
    #[allow(clippy::too_many_arguments)]
    fn gemm(
        &self,
        ctx: &StagingContext,
        order: Layout,
        trans_a: Transpose,
        trans_b: Transpose,
        m: usize,
        n: usize,
        k: usize,
        alpha: f32,
        beta: f32,
        a: &[f32],
        b: &[f32],
        c: &mut [f32],
        lda_a: usize,
        lda_b: usize,
        lda_c: usize,
    ) -> i32;
}
