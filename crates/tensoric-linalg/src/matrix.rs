//! Matrix Adapter - Zero-Copy Rank-2 Bridge to the GEMM Backend
//!
//! A [`MatrixView`] exposes a rank-2 tensor to the dense multiplication
//! backend for the duration of one call. It never owns data: it records the
//! dimensions and element strides of the borrowed tensor and hands a strided
//! window to the kernel, so transposed views multiply without materializing
//! a contiguous copy.
//!
//! @version 0.1.0
//! @author Tensoric Contributors

use tensoric_core::error::{Error, Result};
use tensoric_core::kernels;
use tensoric_core::scalar::{Numeric, Scalar};

use tensoric_tensor::Tensor;

// =============================================================================
// MatrixView Struct
// =============================================================================

/// A borrowed rank-2 window over a tensor's storage.
#[derive(Debug, Clone, Copy)]
pub struct MatrixView<'a, T: Scalar> {
    tensor: &'a Tensor<T>,
    rows: usize,
    cols: usize,
    row_stride: isize,
    col_stride: isize,
}

impl<'a, T: Scalar> MatrixView<'a, T> {
    /// Adapts a rank-2 tensor.
    ///
    /// # Errors
    /// Fails with a rank mismatch for any other rank; callers slice or
    /// reshape to rank 2 first.
    pub fn new(tensor: &'a Tensor<T>) -> Result<Self> {
        if tensor.ndim() != 2 {
            return Err(Error::rank_mismatch(2, tensor.ndim()));
        }

        Ok(Self {
            tensor,
            rows: tensor.shape()[0],
            cols: tensor.shape()[1],
            row_stride: tensor.strides()[0],
            col_stride: tensor.strides()[1],
        })
    }

    /// Returns the number of rows.
    #[must_use]
    pub const fn rows(&self) -> usize {
        self.rows
    }

    /// Returns the number of columns.
    #[must_use]
    pub const fn cols(&self) -> usize {
        self.cols
    }
}

impl<T: Numeric> MatrixView<'_, T> {
    /// Multiplies two matrices: `C = self @ other`.
    ///
    /// # Errors
    /// Fails with a dimension mismatch unless `self.cols == other.rows`.
    /// The result is a fresh contiguous tensor of shape
    /// `(self.rows, other.cols)`.
    pub fn matmul(&self, other: &MatrixView<'_, T>) -> Result<Tensor<T>> {
        if self.cols != other.rows {
            return Err(Error::DimensionMismatch {
                lhs: self.cols,
                rhs: other.rows,
            });
        }

        let (m, k, n) = (self.rows, self.cols, other.cols);
        let mut out = vec![T::ZERO; m * n];

        {
            let a = self.tensor.storage().as_slice();
            let b = other.tensor.storage().as_slice();
            kernels::gemm(
                &mut out,
                &a[self.tensor.offset()..],
                &b[other.tensor.offset()..],
                m,
                n,
                k,
                self.row_stride,
                self.col_stride,
                other.row_stride,
                other.col_stride,
            );
        }

        Tensor::from_vec(out, &[m, n])
    }
}

// =============================================================================
// Tests
// =============================================================================
