//! The single point of contact between the driver and a `GemmEngine`.

use std::time::{Duration, Instant};

use fg_engine::{GemmEngine, StagingContext};
use fg_matrix::MatrixDescriptor;
use tracing::info;

use crate::error::{DriverError, Result};
use crate::params::GemmParameters;

/// Outcome of one engine invocation.
#[derive(Debug, Clone, Copy)]
pub struct ComputeResult {
    /// Raw status the engine reported. Zero by the time callers see this.
    pub status: i32,
    /// Wall-clock time spent inside the engine call.
    pub elapsed: Duration,
}

/// Invoke the engine exactly once over the loaded operands.
///
/// The wall-clock duration and raw status are logged whatever the outcome.
/// Status zero maps to success; any other value becomes `ComputeFailure`
/// with the code passed through uninterpreted.
pub fn run_gemm(
    engine: &dyn GemmEngine,
    ctx: &StagingContext,
    params: &GemmParameters,
    a: &MatrixDescriptor,
    b: &MatrixDescriptor,
    c: &mut MatrixDescriptor,
) -> Result<ComputeResult> {
    info!("running gemm on engine '{}'", engine.name());
    let started = Instant::now();
    let status = engine.gemm(
        ctx,
        params.layout,
        params.trans_a,
        params.trans_b,
        params.m,
        params.n,
        params.k,
        params.alpha,
        params.beta,
        a.data(),
        b.data(),
        c.data_mut(),
        params.lda_a,
        params.lda_b,
        params.lda_c,
    );
    let elapsed = started.elapsed();
    info!("gemm() took {:.6}s", elapsed.as_secs_f64());
    info!("gemm() returned with {}", status);

    if status != 0 {
        return Err(DriverError::ComputeFailure { status });
    }
    Ok(ComputeResult { status, elapsed })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{staging_lock, FixedStatusEngine};
    use fg_engine::CpuEngine;
    use fg_matrix::{Layout, Transpose};
    use tempfile::tempdir;

    fn identity_problem() -> (GemmParameters, MatrixDescriptor, MatrixDescriptor, MatrixDescriptor)
    {
        let params = GemmParameters {
            m: 2,
            k: 2,
            n: 2,
            alpha: 1.0,
            beta: 0.0,
            trans_a: Transpose::NoTrans,
            trans_b: Transpose::NoTrans,
            layout: Layout::RowMajor,
            lda_a: 2,
            lda_b: 2,
            lda_c: 2,
        };
        let a = MatrixDescriptor::new(
            vec![1.0, 0.0, 0.0, 1.0],
            2,
            2,
            2,
            Layout::RowMajor,
            Transpose::NoTrans,
        )
        .unwrap();
        let b = MatrixDescriptor::new(
            vec![5.0, 6.0, 7.0, 8.0],
            2,
            2,
            2,
            Layout::RowMajor,
            Transpose::NoTrans,
        )
        .unwrap();
        let c = MatrixDescriptor::new(
            vec![0.0; 4],
            2,
            2,
            2,
            Layout::RowMajor,
            Transpose::NoTrans,
        )
        .unwrap();
        (params, a, b, c)
    }

    #[test]
    fn test_success_status_maps_to_result() {
        let _guard = staging_lock();
        let dir = tempdir().unwrap();
        let ctx = StagingContext::acquire(&dir.path().join("staging")).unwrap();
        let (params, a, b, mut c) = identity_problem();
        let result = run_gemm(&CpuEngine::new(), &ctx, &params, &a, &b, &mut c).unwrap();
        assert_eq!(result.status, 0);
        assert_eq!(c.data(), &[5.0, 6.0, 7.0, 8.0]);
    }

    #[test]
    fn test_nonzero_status_maps_to_compute_failure() {
        let _guard = staging_lock();
        let dir = tempdir().unwrap();
        let ctx = StagingContext::acquire(&dir.path().join("staging")).unwrap();
        let (params, a, b, mut c) = identity_problem();
        let err = run_gemm(&FixedStatusEngine(7), &ctx, &params, &a, &b, &mut c).unwrap_err();
        match err {
            DriverError::ComputeFailure { status } => assert_eq!(status, 7),
            other => panic!("unexpected error: {other:?}"),
        }
        // Result buffer is whatever the engine left behind, here untouched.
        assert_eq!(c.data(), &[0.0; 4]);
    }
}
