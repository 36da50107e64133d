use std::path::PathBuf;

use thiserror::Error;

/// Errors arising from matrix descriptors and matrix file I/O.
#[derive(Error, Debug)]
pub enum MatrixError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("truncated matrix file {}: expected {} bytes, got {}", .path.display(), .expected_bytes, .got_bytes)]
    TruncatedInput {
        path: PathBuf,
        expected_bytes: u64,
        got_bytes: u64,
    },

    #[error("failed to persist matrix to {}: {}", .path.display(), .source)]
    Persist {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("leading dimension {ld} below minimum {min} for {rows}x{cols} matrix")]
    LeadingDim {
        rows: usize,
        cols: usize,
        ld: usize,
        min: usize,
    },
}

pub type Result<T> = std::result::Result<T, MatrixError>;
