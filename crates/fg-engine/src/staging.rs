//! Exclusive handle over the engine's on-disk staging area.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};

use tracing::{debug, warn};

use crate::error::{Result, StagingError};

/// Name of the scratch subdirectory reserved for engine paging state.
const SCRATCH_DIR: &str = "scratch";

/// Set while a `StagingContext` is live anywhere in the process.
static ACTIVE: AtomicBool = AtomicBool::new(false);

/// Disk-backed working area shared between the driver and the engine.
///
/// A context is bound to one staging root for its whole lifetime and is
/// acquired at most once per process at a time. Dropping the context removes
/// the scratch state and releases the process-wide claim, so teardown runs
/// on every exit path, early returns included.
#[derive(Debug)]
pub struct StagingContext {
    root: PathBuf,
    scratch: PathBuf,
}

impl StagingContext {
    /// Acquire the staging area rooted at `root`.
    ///
    /// Creates the root if absent, probes that it is writable, and creates
    /// the scratch subdirectory the engine may page through. Fails with
    /// `AlreadyActive` while another context is live in this process.
    pub fn acquire(root: &Path) -> Result<StagingContext> {
        if ACTIVE
            .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .is_err()
        {
            return Err(StagingError::AlreadyActive);
        }
        match Self::init(root) {
            Ok(ctx) => Ok(ctx),
            Err(e) => {
                ACTIVE.store(false, Ordering::SeqCst);
                Err(e)
            }
        }
    }

    fn init(root: &Path) -> Result<StagingContext> {
        debug!("setting up staging area at {}", root.display());
        fs::create_dir_all(root).map_err(|source| StagingError::CreateDir {
            path: root.to_path_buf(),
            source,
        })?;

        // create_dir_all succeeds on an existing unusable directory, so a
        // real write has to prove the root accepts files.
        let probe = root.join(".probe");
        fs::write(&probe, b"").map_err(|source| StagingError::NotWritable {
            path: root.to_path_buf(),
            source,
        })?;
        let _ = fs::remove_file(&probe);

        let scratch = root.join(SCRATCH_DIR);
        fs::create_dir_all(&scratch).map_err(|source| StagingError::CreateDir {
            path: scratch.clone(),
            source,
        })?;

        Ok(StagingContext {
            root: root.to_path_buf(),
            scratch,
        })
    }

    /// The staging root this context is bound to.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// The scratch directory reserved for engine paging state.
    pub fn scratch_dir(&self) -> &Path {
        &self.scratch
    }
}

impl Drop for StagingContext {
    fn drop(&mut self) {
        debug!("releasing staging area at {}", self.root.display());
        if let Err(e) = fs::remove_dir_all(&self.scratch) {
            warn!(
                "failed to clear staging scratch {}: {}",
                self.scratch.display(),
                e
            );
        }
        ACTIVE.store(false, Ordering::SeqCst);
    }
}
