use std::path::PathBuf;

use thiserror::Error;

/// Errors arising while acquiring the staging area.
#[derive(Error, Debug)]
pub enum StagingError {
    #[error("failed to create staging directory {}: {}", .path.display(), .source)]
    CreateDir {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("staging directory {} is not writable: {}", .path.display(), .source)]
    NotWritable {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("a staging context is already active in this process")]
    AlreadyActive,
}

pub type Result<T> = std::result::Result<T, StagingError>;
