use fg_matrix::{Layout, Transpose};
use tracing::trace;

use crate::engine::GemmEngine;
use crate::staging::StagingContext;
use crate::status;

/// Pure-Rust in-memory GEMM engine.
///
/// Implements the full contract with straightforward loops optimized for
/// correctness rather than peak throughput. Operands stay resident in the
/// caller's buffers and the staging area goes unused, which is a legitimate
/// residency strategy whenever the problem fits in memory. Intended as a
/// reference implementation and fallback.
#[derive(Debug, Clone)]
pub struct CpuEngine;

impl CpuEngine {
    pub fn new() -> Self {
        CpuEngine
    }
}

impl Default for CpuEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl GemmEngine for CpuEngine {
    fn name(&self) -> &str {
        "cpu"
    }

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
    ) -> i32 {
        let (a_rows, a_cols) = trans_a.stored_dims(m, k);
        let (b_rows, b_cols) = trans_b.stored_dims(k, n);

        if lda_a < order.leading_dim(a_rows, a_cols)
            || lda_b < order.leading_dim(b_rows, b_cols)
            || lda_c < order.leading_dim(m, n)
        {
            return status::BAD_LEADING_DIM;
        }
        // Reject undersized buffers up front; slice indexing must never
        // reach past what the caller handed over.
        if a.len() < extent(order, a_rows, a_cols, lda_a)
            || b.len() < extent(order, b_rows, b_cols, lda_b)
            || c.len() < extent(order, m, n, lda_c)
        {
            return status::BAD_EXTENT;
        }

        trace!(
            "cpu engine: {}x{}x{} gemm resident in memory, staging at {} untouched",
            m,
            n,
            k,
            ctx.root().display()
        );

        // Scale C by beta first; beta == 0 overwrites and never reads.
        if beta == 0.0 {
            for i in 0..m {
                for j in 0..n {
                    c[order.index(i, j, lda_c)] = 0.0;
                }
            }
        } else if beta != 1.0 {
            for i in 0..m {
                for j in 0..n {
                    let idx = order.index(i, j, lda_c);
                    c[idx] *= beta;
                }
            }
        }

        if alpha == 0.0 || m == 0 || n == 0 || k == 0 {
            return status::OK;
        }

        for i in 0..m {
            for j in 0..n {
                let mut sum = 0.0f32;
                for p in 0..k {
                    sum += op_at(order, trans_a, a, lda_a, i, p)
                        * op_at(order, trans_b, b, lda_b, p, j);
                }
                c[order.index(i, j, lda_c)] += alpha * sum;
            }
        }

        status::OK
    }
}

/// Minimum buffer length for a stored rows x cols matrix with leading
/// dimension `ld`.
fn extent(order: Layout, rows: usize, cols: usize, ld: usize) -> usize {
    if rows == 0 || cols == 0 {
        return 0;
    }
    match order {
        Layout::RowMajor => (rows - 1) * ld + cols,
        Layout::ColMajor => (cols - 1) * ld + rows,
    }
}

/// Element (i, j) of op(X) for a stored buffer indexed by `order` and `ld`.
#[inline(always)]
fn op_at(order: Layout, trans: Transpose, x: &[f32], ld: usize, i: usize, j: usize) -> f32 {
    match trans {
        Transpose::NoTrans => x[order.index(i, j, ld)],
        Transpose::Trans => x[order.index(j, i, ld)],
    }
}
