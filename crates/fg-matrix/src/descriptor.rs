use crate::error::{MatrixError, Result};
use crate::layout::{Layout, Transpose};

/// A matrix held in memory: owned contiguous f32 storage plus its geometry.
///
/// `rows` and `cols` describe the matrix as stored; the transpose flag is
/// carried for the compute call and never reshapes the storage itself. The
/// buffer lives exactly as long as the descriptor.
#[derive(Debug, Clone)]
pub struct MatrixDescriptor {
    data: Vec<f32>,
    rows: usize,
    cols: usize,
    leading_dim: usize,
    layout: Layout,
    transpose: Transpose,
}

impl MatrixDescriptor {
    /// Create a descriptor over `data`.
    ///
    /// The leading dimension must be at least the stride implied by the
    /// layout and the stored dimensions, otherwise `LeadingDim` is returned.
    ///
    /// # Panics
    /// Panics if `data.len() != rows * cols`.
    pub fn new(
        data: Vec<f32>,
        rows: usize,
        cols: usize,
        leading_dim: usize,
        layout: Layout,
        transpose: Transpose,
    ) -> Result<MatrixDescriptor> {
        assert_eq!(
            data.len(),
            rows * cols,
            "data length {} does not match {}x{} matrix",
            data.len(),
            rows,
            cols
        );
        let min = layout.leading_dim(rows, cols);
        if leading_dim < min {
            return Err(MatrixError::LeadingDim {
                rows,
                cols,
                ld: leading_dim,
                min,
            });
        }
        Ok(MatrixDescriptor {
            data,
            rows,
            cols,
            leading_dim,
            layout,
            transpose,
        })
    }

    /// Number of stored rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of stored columns.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Leading dimension used to index the buffer.
    pub fn leading_dim(&self) -> usize {
        self.leading_dim
    }

    /// Memory layout of the buffer.
    pub fn layout(&self) -> Layout {
        self.layout
    }

    /// Transpose flag to apply when this matrix enters a multiplication.
    pub fn transpose(&self) -> Transpose {
        self.transpose
    }

    /// Returns the underlying data as an f32 slice.
    pub fn data(&self) -> &[f32] {
        &self.data
    }

    /// Returns the underlying data as a mutable f32 slice.
    pub fn data_mut(&mut self) -> &mut [f32] {
        &mut self.data
    }
}
