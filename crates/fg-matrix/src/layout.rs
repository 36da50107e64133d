//! CBLAS-style layout and transpose enumerations.
//!
//! Matrices are stored as flat f32 buffers; these enums fix how element
//! (i, j) maps into that buffer and how the transpose flag reshapes an
//! operand before multiplication.

use std::fmt;

/// Memory layout for matrices.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layout {
    /// Row-major (C-style): elements in a row are contiguous.
    RowMajor,
    /// Column-major (Fortran-style): elements in a column are contiguous.
    ColMajor,
}

impl Layout {
    /// Parse the single-character command-line flag (`r`/`R` or `c`/`C`).
    pub fn from_flag(flag: char) -> Option<Layout> {
        match flag {
            'r' | 'R' => Some(Layout::RowMajor),
            'c' | 'C' => Some(Layout::ColMajor),
            _ => None,
        }
    }

    /// Minimum legal leading dimension for a rows x cols matrix.
    #[inline(always)]
    pub fn leading_dim(self, rows: usize, cols: usize) -> usize {
        match self {
            Layout::RowMajor => cols,
            Layout::ColMajor => rows,
        }
    }

    /// Linear index into a flat buffer for element (i, j) given the leading
    /// dimension.
    #[inline(always)]
    pub fn index(self, i: usize, j: usize, ld: usize) -> usize {
        match self {
            Layout::RowMajor => i * ld + j,
            Layout::ColMajor => j * ld + i,
        }
    }
}

impl fmt::Display for Layout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Layout::RowMajor => write!(f, "row-major"),
            Layout::ColMajor => write!(f, "column-major"),
        }
    }
}

/// Transpose operation applied to an operand before multiplication.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transpose {
    /// No transpose.
    NoTrans,
    /// Transpose.
    Trans,
}

impl Transpose {
    /// Parse the single-character command-line flag (`n`/`N` or `t`/`T`).
    pub fn from_flag(flag: char) -> Option<Transpose> {
        match flag {
            'n' | 'N' => Some(Transpose::NoTrans),
            't' | 'T' => Some(Transpose::Trans),
            _ => None,
        }
    }

    /// Stored dimensions of a matrix whose post-op shape is rows x cols.
    ///
    /// A transposed operand is stored with its axes swapped, so op(X) being
    /// rows x cols means X itself occupies cols x rows on disk.
    #[inline(always)]
    pub fn stored_dims(self, rows: usize, cols: usize) -> (usize, usize) {
        match self {
            Transpose::NoTrans => (rows, cols),
            Transpose::Trans => (cols, rows),
        }
    }
}

impl fmt::Display for Transpose {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Transpose::NoTrans => write!(f, "N"),
            Transpose::Trans => write!(f, "T"),
        }
    }
}
