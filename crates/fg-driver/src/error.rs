use fg_engine::StagingError;
use fg_matrix::MatrixError;
use thiserror::Error;

/// Process exit code for a successful run.
pub const EXIT_SUCCESS: i32 = 0;
/// Process exit code for malformed arguments or dimension violations.
pub const EXIT_USAGE: i32 = 2;
/// Process exit code for staging acquisition failures.
pub const EXIT_STAGING: i32 = 3;
/// Process exit code for operand load failures.
pub const EXIT_MATRIX_IO: i32 = 4;
/// Process exit code for a non-zero engine status.
pub const EXIT_COMPUTE: i32 = 5;
/// Process exit code for result persist failures.
pub const EXIT_PERSIST: i32 = 6;

/// Errors arising from one driver run, one variant per failure class.
#[derive(Error, Debug)]
pub enum DriverError {
    #[error("expected {expected} positional arguments, got {got}")]
    ArgumentCount { expected: usize, got: usize },

    #[error("cannot parse {field} from '{value}'")]
    ArgumentParse { field: &'static str, value: String },

    #[error("dimension mismatch: {0}")]
    DimensionMismatch(String),

    #[error("staging acquisition failed: {0}")]
    Staging(#[from] StagingError),

    #[error("failed to load matrix {matrix}: {source}")]
    Load { matrix: char, source: MatrixError },

    #[error("engine returned failure status {status}")]
    ComputeFailure { status: i32 },

    #[error("failed to persist result: {source}")]
    Persist { source: MatrixError },
}

impl DriverError {
    /// Map the failure class to its process exit code.
    pub fn exit_code(&self) -> i32 {
        match self {
            DriverError::ArgumentCount { .. }
            | DriverError::ArgumentParse { .. }
            | DriverError::DimensionMismatch(_) => EXIT_USAGE,
            DriverError::Staging(_) => EXIT_STAGING,
            DriverError::Load { .. } => EXIT_MATRIX_IO,
            DriverError::ComputeFailure { .. } => EXIT_COMPUTE,
            DriverError::Persist { .. } => EXIT_PERSIST,
        }
    }
}

pub type Result<T> = std::result::Result<T, DriverError>;
