//! End-to-end execution of one validated GEMM run.

use std::path::Path;

use fg_engine::{GemmEngine, StagingContext};
use fg_matrix::io::{read_matrix, write_matrix};
use fg_matrix::{Layout, MatrixDescriptor, Transpose};
use tracing::info;

use crate::adapter::{run_gemm, ComputeResult};
use crate::error::{DriverError, Result};
use crate::params::GemmInvocation;

/// Run the full pipeline: acquire staging, load A/B/C, compute, persist C.
///
/// The stages run in that strict order and the first failure wins. The
/// staging context is released on every exit path; a persist failure is
/// surfaced only after teardown has already run.
pub fn execute(
    invocation: &GemmInvocation,
    engine: &dyn GemmEngine,
    staging_root: &Path,
) -> Result<ComputeResult> {
    let params = &invocation.params;
    info!(
        "dimensions: A = {}x{}, B = {}x{}",
        params.m, params.k, params.k, params.n
    );

    let staging = StagingContext::acquire(staging_root)?;

    let (a_rows, a_cols) = params.a_stored_dims();
    let a = load_operand(
        'A',
        &invocation.a_path,
        a_rows,
        a_cols,
        params.lda_a,
        params.layout,
        params.trans_a,
    )?;
    let (b_rows, b_cols) = params.b_stored_dims();
    let b = load_operand(
        'B',
        &invocation.b_path,
        b_rows,
        b_cols,
        params.lda_b,
        params.layout,
        params.trans_b,
    )?;
    let mut c = load_operand(
        'C',
        &invocation.c_path,
        params.m,
        params.n,
        params.lda_c,
        params.layout,
        Transpose::NoTrans,
    )?;

    let result = run_gemm(engine, &staging, params, &a, &b, &mut c)?;

    info!("writing matrix C to {}", invocation.c_path.display());
    let persisted = write_matrix(&invocation.c_path, c.data())
        .map_err(|source| DriverError::Persist { source });
    // Teardown must complete before a persist failure reaches the caller.
    drop(staging);
    persisted?;

    Ok(result)
}

fn load_operand(
    name: char,
    path: &Path,
    rows: usize,
    cols: usize,
    ld: usize,
    layout: Layout,
    transpose: Transpose,
) -> Result<MatrixDescriptor> {
    info!("reading matrix {} into memory from {}", name, path.display());
    let data =
        read_matrix(path, rows, cols).map_err(|source| DriverError::Load { matrix: name, source })?;
    MatrixDescriptor::new(data, rows, cols, ld, layout, transpose)
        .map_err(|source| DriverError::Load { matrix: name, source })
}
