//! Linear-Algebra Operations - matmul, Batched matmul, inner, outer
//!
//! Free functions over tensors. `matmul` handles rank-2 operands directly
//! through the [`MatrixView`] adapter and generalizes to stacks of matrices:
//! leading batch axes broadcast like elementwise operands, and each batch
//! cell multiplies independently. Batch cells write disjoint output regions,
//! so large batches run in parallel with identical results to the
//! sequential loop.
//!
//! @version 0.1.0
//! @author Tensoric Contributors

use rayon::prelude::*;

use tensoric_core::error::{Error, Result};
use tensoric_core::kernels;
use tensoric_core::scalar::Numeric;

use tensoric_tensor::shape::{
    broadcast_shape, broadcast_strides, linear_index, numel, unravel_index, Shape,
};
use tensoric_tensor::Tensor;

use crate::matrix::MatrixView;

/// Element count above which batched multiplication fans out across
/// batch cells.
const PARALLEL_THRESHOLD: usize = 4096;

// =============================================================================
// Matrix Multiplication
// =============================================================================

/// Multiplies two matrices or stacks of matrices.
///
/// Rank-2 operands multiply directly: `(m, k) @ (k, n) -> (m, n)`, failing
/// with a dimension mismatch when the contraction extents differ. Higher
/// ranks treat the last two axes as matrices and broadcast the leading batch
/// axes; the result shape is `broadcast(batch_a, batch_b) + (m, n)`.
///
/// # Errors
/// Rank below 2 fails with a rank mismatch (use [`inner`] for vectors);
/// incompatible batch axes fail with a broadcast error.
pub fn matmul<T: Numeric>(a: &Tensor<T>, b: &Tensor<T>) -> Result<Tensor<T>> {
    if a.ndim() < 2 {
        return Err(Error::rank_mismatch(2, a.ndim()));
    }
    if b.ndim() < 2 {
        return Err(Error::rank_mismatch(2, b.ndim()));
    }

    if a.ndim() == 2 && b.ndim() == 2 {
        return MatrixView::new(a)?.matmul(&MatrixView::new(b)?);
    }

    batched_matmul(a, b)
}

fn batched_matmul<T: Numeric>(a: &Tensor<T>, b: &Tensor<T>) -> Result<Tensor<T>> {
    let (ra, rb) = (a.ndim(), b.ndim());
    let (m, ka) = (a.shape()[ra - 2], a.shape()[ra - 1]);
    let (kb, n) = (b.shape()[rb - 2], b.shape()[rb - 1]);
    if ka != kb {
        return Err(Error::DimensionMismatch { lhs: ka, rhs: kb });
    }

    let batch_a = &a.shape()[..ra - 2];
    let batch_b = &b.shape()[..rb - 2];
    let batch_shape = broadcast_shape(batch_a, batch_b)?;
    let batch_count = numel(&batch_shape);

    // Stride of each broadcast batch axis into either operand; repeated
    // axes get stride 0 and reuse the same matrix.
    let batch_strides_a = broadcast_strides(batch_a, &a.strides()[..ra - 2], &batch_shape);
    let batch_strides_b = broadcast_strides(batch_b, &b.strides()[..rb - 2], &batch_shape);

    let (rsa, csa) = (a.strides()[ra - 2], a.strides()[ra - 1]);
    let (rsb, csb) = (b.strides()[rb - 2], b.strides()[rb - 1]);

    let mut out_shape = Shape::from_slice(&batch_shape);
    out_shape.push(m);
    out_shape.push(n);

    let cell = m * n;
    let mut out = vec![T::ZERO; batch_count * cell];

    {
        let a_guard = a.storage().as_slice();
        let b_guard = b.storage().as_slice();
        let a_all: &[T] = &a_guard;
        let b_all: &[T] = &b_guard;

        let multiply_cell = |(bi, chunk): (usize, &mut [T])| {
            let idx = unravel_index(bi, &batch_shape);
            let a_off = a.offset() as isize + linear_index(&idx, &batch_strides_a);
            let b_off = b.offset() as isize + linear_index(&idx, &batch_strides_b);
            kernels::gemm(
                chunk,
                &a_all[a_off as usize..],
                &b_all[b_off as usize..],
                m,
                n,
                ka,
                rsa,
                csa,
                rsb,
                csb,
            );
        };

        if cell > 0 {
            if out.len() >= PARALLEL_THRESHOLD && batch_count > 1 {
                out.par_chunks_mut(cell).enumerate().for_each(multiply_cell);
            } else {
                out.chunks_mut(cell).enumerate().for_each(multiply_cell);
            }
        }
    }

    Tensor::from_vec(out, &out_shape)
}

// =============================================================================
// Vector Products
// =============================================================================

/// Computes the inner (dot) product of two rank-1 tensors.
///
/// # Errors
/// Non-vector operands fail with a rank mismatch; unequal lengths fail with
/// a dimension mismatch.
pub fn inner<T: Numeric>(a: &Tensor<T>, b: &Tensor<T>) -> Result<T> {
    if a.ndim() != 1 {
        return Err(Error::rank_mismatch(1, a.ndim()));
    }
    if b.ndim() != 1 {
        return Err(Error::rank_mismatch(1, b.ndim()));
    }
    if a.numel() != b.numel() {
        return Err(Error::DimensionMismatch {
            lhs: a.numel(),
            rhs: b.numel(),
        });
    }

    Ok(kernels::dot(&a.to_vec(), &b.to_vec()))
}

/// Computes the outer product of two rank-1 tensors:
/// `out[i, j] = a[i] * b[j]` with shape `(a.len, b.len)`.
pub fn outer<T: Numeric>(a: &Tensor<T>, b: &Tensor<T>) -> Result<Tensor<T>> {
    if a.ndim() != 1 {
        return Err(Error::rank_mismatch(1, a.ndim()));
    }
    if b.ndim() != 1 {
        return Err(Error::rank_mismatch(1, b.ndim()));
    }

    let (av, bv) = (a.to_vec(), b.to_vec());
    let mut out = Vec::with_capacity(av.len() * bv.len());
    for &x in &av {
        for &y in &bv {
            out.push(x * y);
        }
    }

    Tensor::from_vec(out, &[av.len(), bv.len()])
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use tensoric_tensor::stack;

    #[test]
    fn test_matmul_rank2() {
        let a = Tensor::from_vec(vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0], &[2, 3]).unwrap();
        let b = Tensor::from_vec(
            vec![7.0, 8.0, 9.0, 10.0, 11.0, 12.0, 13.0, 14.0, 15.0, 16.0, 17.0, 18.0],
            &[3, 4],
        )
        .unwrap();
        let c = matmul(&a, &b).unwrap();
        assert_eq!(c.shape(), &[2, 4]);
        assert_eq!(c.get(&[0, 0]).unwrap(), 74.0);
        assert_eq!(c.get(&[1, 3]).unwrap(), 218.0);
    }

    #[test]
    fn test_matmul_dimension_mismatch() {
        let a = Tensor::<f64>::zeros(&[2, 3]);
        let b = Tensor::<f64>::zeros(&[4, 5]);
        assert!(matches!(
            matmul(&a, &b),
            Err(Error::DimensionMismatch { lhs: 3, rhs: 4 })
        ));
    }

    #[test]
    fn test_matmul_rank_check() {
        let v = Tensor::<f64>::zeros(&[3]);
        let m = Tensor::<f64>::zeros(&[3, 2]);
        assert!(matches!(
            matmul(&v, &m),
            Err(Error::RankMismatch { .. })
        ));
    }

    #[test]
    fn test_batched_matmul_equal_batches() {
        let a0 = Tensor::from_vec(vec![1.0, 0.0, 0.0, 1.0], &[2, 2]).unwrap();
        let a1 = Tensor::from_vec(vec![2.0, 0.0, 0.0, 2.0], &[2, 2]).unwrap();
        let b = Tensor::from_vec(vec![1.0, 2.0, 3.0, 4.0], &[2, 2]).unwrap();

        let stack_a = stack(&[a0, a1], 0).unwrap(); // (2,2,2)
        let stack_b = stack(&[b.clone(), b.clone()], 0).unwrap();

        let c = matmul(&stack_a, &stack_b).unwrap();
        assert_eq!(c.shape(), &[2, 2, 2]);
        assert_eq!(
            c.to_vec(),
            vec![1.0, 2.0, 3.0, 4.0, 2.0, 4.0, 6.0, 8.0]
        );
    }

    #[test]
    fn test_batched_matmul_broadcast_batch() {
        // (3,2,2) @ (2,2): the rank-2 operand repeats across the batch.
        let ident = Tensor::from_vec(vec![1.0, 0.0, 0.0, 1.0], &[2, 2]).unwrap();
        let double = ident.mul_scalar(2.0);
        let triple = ident.mul_scalar(3.0);
        let batch = stack(&[ident.clone(), double, triple], 0).unwrap();

        let b = Tensor::from_vec(vec![1.0, 2.0, 3.0, 4.0], &[2, 2]).unwrap();
        let c = matmul(&batch, &b).unwrap();

        assert_eq!(c.shape(), &[3, 2, 2]);
        assert_eq!(
            c.to_vec(),
            vec![1.0, 2.0, 3.0, 4.0, 2.0, 4.0, 6.0, 8.0, 3.0, 6.0, 9.0, 12.0]
        );
    }

    #[test]
    fn test_batched_matmul_incompatible_batches() {
        let a = Tensor::<f64>::zeros(&[2, 2, 2]);
        let b = Tensor::<f64>::zeros(&[3, 2, 2]);
        assert!(matches!(
            matmul(&a, &b),
            Err(Error::BroadcastError { .. })
        ));
    }

    #[test]
    fn test_inner() {
        let a = Tensor::from_vec(vec![1.0, 2.0, 3.0], &[3]).unwrap();
        let b = Tensor::from_vec(vec![4.0, 5.0, 6.0], &[3]).unwrap();
        assert_eq!(inner(&a, &b).unwrap(), 32.0);

        let short = Tensor::from_vec(vec![1.0, 2.0], &[2]).unwrap();
        assert!(matches!(
            inner(&a, &short),
            Err(Error::DimensionMismatch { lhs: 3, rhs: 2 })
        ));

        let m = Tensor::<f64>::zeros(&[2, 2]);
        assert!(matches!(inner(&a, &m), Err(Error::RankMismatch { .. })));
    }

    #[test]
    fn test_outer() {
        let a = Tensor::from_vec(vec![1.0, 2.0, 3.0], &[3]).unwrap();
        let b = Tensor::from_vec(vec![4.0, 5.0], &[2]).unwrap();
        let o = outer(&a, &b).unwrap();
        assert_eq!(o.shape(), &[3, 2]);
        assert_eq!(o.to_vec(), vec![4.0, 5.0, 8.0, 10.0, 12.0, 15.0]);
    }

    #[test]
    fn test_outer_matches_matmul_of_columns() {
        let a = Tensor::from_vec(vec![1.0, 2.0], &[2]).unwrap();
        let b = Tensor::from_vec(vec![3.0, 4.0, 5.0], &[3]).unwrap();

        let o = outer(&a, &b).unwrap();
        let col = a.reshape(&[2, 1]).unwrap();
        let row = b.reshape(&[1, 3]).unwrap();
        let m = matmul(&col, &row).unwrap();
        assert_eq!(o.to_vec(), m.to_vec());
    }
}
