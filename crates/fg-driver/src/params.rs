//! Positional argument validation for the GEMM driver.
//!
//! Everything the rest of the pipeline consumes is checked here first: the
//! argument count, every numeric and flag field, and the leading dimension
//! minimums implied by the storage order and transpose flags. Nothing in
//! this module touches the filesystem.

use std::path::PathBuf;

use fg_matrix::{Layout, Transpose};

use crate::error::{DriverError, Result};

/// Number of positional values a run requires.
pub const ARG_COUNT: usize = 14;

/// Positional argument order, logged when the argument list is malformed.
pub const USAGE: &str = "<A_path> <B_path> <C_path> <A_rows> <A_cols> <B_cols> \
<alpha> <beta> <trans_a> <trans_b> <storage_order> <lda_a> <lda_b> <lda_c>";

/// A validated GEMM problem: C := alpha * op(A) * op(B) + beta * C where
/// op(A) is m x k and op(B) is k x n.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GemmParameters {
    pub m: usize,
    pub k: usize,
    pub n: usize,
    pub alpha: f32,
    pub beta: f32,
    pub trans_a: Transpose,
    pub trans_b: Transpose,
    pub layout: Layout,
    pub lda_a: usize,
    pub lda_b: usize,
    pub lda_c: usize,
}

impl GemmParameters {
    /// Stored shape of the A operand file.
    pub fn a_stored_dims(&self) -> (usize, usize) {
        self.trans_a.stored_dims(self.m, self.k)
    }

    /// Stored shape of the B operand file.
    pub fn b_stored_dims(&self) -> (usize, usize) {
        self.trans_b.stored_dims(self.k, self.n)
    }

    /// Stored shape of the C operand file. C is never transposed.
    pub fn c_stored_dims(&self) -> (usize, usize) {
        (self.m, self.n)
    }

    /// Check the three leading dimensions against their stored shapes.
    pub fn check_dimensions(&self) -> Result<()> {
        let (a_rows, a_cols) = self.a_stored_dims();
        let (b_rows, b_cols) = self.b_stored_dims();
        check_ld("lda_a", self.lda_a, self.layout, a_rows, a_cols)?;
        check_ld("lda_b", self.lda_b, self.layout, b_rows, b_cols)?;
        check_ld("lda_c", self.lda_c, self.layout, self.m, self.n)?;
        Ok(())
    }
}

/// A fully validated invocation: the three matrix paths plus the problem.
#[derive(Debug, Clone)]
pub struct GemmInvocation {
    pub a_path: PathBuf,
    pub b_path: PathBuf,
    pub c_path: PathBuf,
    pub params: GemmParameters,
}

/// Validate the raw positional arguments into a `GemmInvocation`.
///
/// Fails on a wrong argument count, on any field that does not parse, and
/// on leading dimensions below the minimum their stored shape demands.
pub fn parse_args(args: &[String]) -> Result<GemmInvocation> {
    if args.len() != ARG_COUNT {
        return Err(DriverError::ArgumentCount {
            expected: ARG_COUNT,
            got: args.len(),
        });
    }

    let a_path = PathBuf::from(&args[0]);
    let b_path = PathBuf::from(&args[1]);
    let c_path = PathBuf::from(&args[2]);
    let m = parse_usize("A_rows", &args[3])?;
    let k = parse_usize("A_cols", &args[4])?;
    let n = parse_usize("B_cols", &args[5])?;
    let alpha = parse_f32("alpha", &args[6])?;
    let beta = parse_f32("beta", &args[7])?;
    let trans_a = parse_transpose("trans_a", &args[8])?;
    let trans_b = parse_transpose("trans_b", &args[9])?;
    let layout = parse_layout("storage_order", &args[10])?;
    let lda_a = parse_usize("lda_a", &args[11])?;
    let lda_b = parse_usize("lda_b", &args[12])?;
    let lda_c = parse_usize("lda_c", &args[13])?;

    let params = GemmParameters {
        m,
        k,
        n,
        alpha,
        beta,
        trans_a,
        trans_b,
        layout,
        lda_a,
        lda_b,
        lda_c,
    };
    params.check_dimensions()?;

    Ok(GemmInvocation {
        a_path,
        b_path,
        c_path,
        params,
    })
}

fn bad_arg(field: &'static str, value: &str) -> DriverError {
    DriverError::ArgumentParse {
        field,
        value: value.to_string(),
    }
}

fn parse_usize(field: &'static str, value: &str) -> Result<usize> {
    value.parse().map_err(|_| bad_arg(field, value))
}

fn parse_f32(field: &'static str, value: &str) -> Result<f32> {
    value.parse().map_err(|_| bad_arg(field, value))
}

fn single_char(field: &'static str, value: &str) -> Result<char> {
    let mut chars = value.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok(c),
        _ => Err(bad_arg(field, value)),
    }
}

fn parse_transpose(field: &'static str, value: &str) -> Result<Transpose> {
    let c = single_char(field, value)?;
    Transpose::from_flag(c).ok_or_else(|| bad_arg(field, value))
}

fn parse_layout(field: &'static str, value: &str) -> Result<Layout> {
    let c = single_char(field, value)?;
    Layout::from_flag(c).ok_or_else(|| bad_arg(field, value))
}

fn check_ld(field: &'static str, ld: usize, layout: Layout, rows: usize, cols: usize) -> Result<()> {
    let min = layout.leading_dim(rows, cols);
    if ld < min {
        return Err(DriverError::DimensionMismatch(format!(
            "{field} = {ld} below minimum {min} for {rows}x{cols} {layout} storage"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_args() -> Vec<String> {
        [
            "a.bin", "b.bin", "c.bin", "2", "3", "4", "1.0", "0.0", "n", "n", "r", "3", "4", "4",
        ]
        .iter()
        .map(|s| s.to_string())
        .collect()
    }

    #[test]
    fn test_parse_valid_invocation() {
        let inv = parse_args(&base_args()).unwrap();
        assert_eq!(inv.a_path, PathBuf::from("a.bin"));
        assert_eq!(inv.params.m, 2);
        assert_eq!(inv.params.k, 3);
        assert_eq!(inv.params.n, 4);
        assert_eq!(inv.params.alpha, 1.0);
        assert_eq!(inv.params.beta, 0.0);
        assert_eq!(inv.params.trans_a, Transpose::NoTrans);
        assert_eq!(inv.params.layout, Layout::RowMajor);
        assert_eq!(inv.params.lda_c, 4);
    }

    #[test]
    fn test_wrong_argument_count() {
        let args: Vec<String> = base_args().into_iter().take(5).collect();
        let err = parse_args(&args).unwrap_err();
        match err {
            DriverError::ArgumentCount { expected, got } => {
                assert_eq!(expected, ARG_COUNT);
                assert_eq!(got, 5);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_unparsable_dimension() {
        let mut args = base_args();
        args[3] = "two".to_string();
        let err = parse_args(&args).unwrap_err();
        match err {
            DriverError::ArgumentParse { field, value } => {
                assert_eq!(field, "A_rows");
                assert_eq!(value, "two");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_negative_dimension_rejected() {
        let mut args = base_args();
        args[5] = "-4".to_string();
        assert!(matches!(
            parse_args(&args).unwrap_err(),
            DriverError::ArgumentParse { field: "B_cols", .. }
        ));
    }

    #[test]
    fn test_unparsable_scalar() {
        let mut args = base_args();
        args[6] = "fast".to_string();
        assert!(matches!(
            parse_args(&args).unwrap_err(),
            DriverError::ArgumentParse { field: "alpha", .. }
        ));
    }

    #[test]
    fn test_unknown_transpose_flag() {
        let mut args = base_args();
        args[8] = "x".to_string();
        assert!(matches!(
            parse_args(&args).unwrap_err(),
            DriverError::ArgumentParse { field: "trans_a", .. }
        ));
    }

    #[test]
    fn test_multi_char_flag_rejected() {
        let mut args = base_args();
        args[10] = "rm".to_string();
        assert!(matches!(
            parse_args(&args).unwrap_err(),
            DriverError::ArgumentParse {
                field: "storage_order",
                ..
            }
        ));
    }

    #[test]
    fn test_flags_are_case_insensitive() {
        let mut args = base_args();
        args[8] = "T".to_string();
        args[10] = "C".to_string();
        // trans_a = T stores A as 3x2; column-major minimum for it is 3,
        // for B 3x4 it is 3, for C 2x4 it is 2.
        args[11] = "3".to_string();
        args[12] = "3".to_string();
        args[13] = "2".to_string();
        let inv = parse_args(&args).unwrap();
        assert_eq!(inv.params.trans_a, Transpose::Trans);
        assert_eq!(inv.params.layout, Layout::ColMajor);
    }

    #[test]
    fn test_lda_c_below_minimum() {
        let mut args = base_args();
        args[13] = "3".to_string();
        let err = parse_args(&args).unwrap_err();
        match err {
            DriverError::DimensionMismatch(msg) => {
                assert!(msg.contains("lda_c"), "message was: {msg}");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_lda_minimum_follows_transpose() {
        // With trans_a = t the stored A is k x m = 3x2, so the row-major
        // minimum for lda_a drops from 3 to 2.
        let mut args = base_args();
        args[8] = "t".to_string();
        args[11] = "2".to_string();
        let inv = parse_args(&args).unwrap();
        assert_eq!(inv.params.a_stored_dims(), (3, 2));

        args[11] = "1".to_string();
        assert!(matches!(
            parse_args(&args).unwrap_err(),
            DriverError::DimensionMismatch(_)
        ));
    }

    #[test]
    fn test_padded_lda_accepted() {
        let mut args = base_args();
        args[11] = "10".to_string();
        let inv = parse_args(&args).unwrap();
        assert_eq!(inv.params.lda_a, 10);
    }

    #[test]
    fn test_stored_dims_reported_per_operand() {
        let inv = parse_args(&base_args()).unwrap();
        assert_eq!(inv.params.a_stored_dims(), (2, 3));
        assert_eq!(inv.params.b_stored_dims(), (3, 4));
        assert_eq!(inv.params.c_stored_dims(), (2, 4));
    }
}
