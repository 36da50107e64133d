//! Readers and writers for headerless flat binary matrix files.
//!
//! A matrix file holds exactly rows * cols IEEE-754 f32 values in
//! little-endian byte order, in the storage order the caller has agreed on
//! out of band. There is no header, no padding, no trailing data.

use std::fs::{self, File};
use std::io::{self, BufReader, Read, Write};
use std::path::Path;

use crate::error::{MatrixError, Result};

/// Bytes per stored element.
const ELEM_SIZE: usize = 4;

/// Read a rows x cols matrix from `path` into a freshly allocated buffer.
///
/// The file must hold at least rows * cols * 4 bytes; a shorter file is
/// reported as `TruncatedInput` rather than returned partially filled.
/// Trailing bytes beyond the expected length are ignored.
pub fn read_matrix(path: &Path, rows: usize, cols: usize) -> Result<Vec<f32>> {
    let numel = rows * cols;
    let expected_bytes = (numel * ELEM_SIZE) as u64;

    let file = File::open(path)?;
    let mut reader = BufReader::new(file);
    let mut bytes = vec![0u8; numel * ELEM_SIZE];
    if let Err(e) = reader.read_exact(&mut bytes) {
        // A short read must never be passed off as data; report the actual
        // file length alongside what the dimensions demanded.
        if e.kind() == io::ErrorKind::UnexpectedEof {
            let got_bytes = fs::metadata(path).map(|m| m.len()).unwrap_or(0);
            return Err(MatrixError::TruncatedInput {
                path: path.to_path_buf(),
                expected_bytes,
                got_bytes,
            });
        }
        return Err(MatrixError::Io(e));
    }

    let mut data = Vec::with_capacity(numel);
    for chunk in bytes.chunks_exact(ELEM_SIZE) {
        data.push(f32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]));
    }
    Ok(data)
}

/// Write `data` to `path` as little-endian f32 values, replacing any prior
/// content.
///
/// The file is synced to storage before this returns, so a successful return
/// means the bytes are durable, not sitting in a kernel buffer.
pub fn write_matrix(path: &Path, data: &[f32]) -> Result<()> {
    let persist = |source: io::Error| MatrixError::Persist {
        path: path.to_path_buf(),
        source,
    };

    let mut bytes = Vec::with_capacity(data.len() * ELEM_SIZE);
    for value in data {
        bytes.extend_from_slice(&value.to_le_bytes());
    }

    let mut file = File::create(path).map_err(persist)?;
    file.write_all(&bytes).map_err(persist)?;
    file.sync_all().map_err(persist)?;
    Ok(())
}
