//! Views and Rearrangement - Slicing, Joining, and Rotation
//!
//! Zero-copy slicing (select, narrow) adjusts shape, strides, and offset
//! over shared storage. Joining operations (concat, stack, append) and
//! rearrangements (flip, rot90) allocate fresh output.
//!
//! @version 0.1.0
//! @author Tensoric Contributors

use tensoric_core::error::{Error, Result};
use tensoric_core::scalar::Scalar;

use crate::shape::{
    contiguous_strides, linear_index, numel, unravel_index, validate_axes, Shape, Strides,
};
use crate::tensor::Tensor;

// =============================================================================
// Slicing Views
// =============================================================================

impl<T: Scalar> Tensor<T> {
    /// Selects one position along `axis`, removing that axis. Pure view.
    ///
    /// `select(0, i)` of a matrix is its i-th row as a rank-1 view.
    pub fn select(&self, axis: usize, index: usize) -> Result<Self> {
        if axis >= self.ndim() {
            return Err(Error::InvalidAxis {
                axis: axis as i64,
                ndim: self.ndim(),
            });
        }
        if index >= self.shape()[axis] {
            return Err(Error::IndexOutOfBounds {
                index,
                size: self.shape()[axis],
            });
        }

        let mut shape = Shape::from_slice(self.shape());
        let mut strides = Strides::from_slice(self.strides());
        let offset =
            (self.offset() as isize + index as isize * strides[axis]) as usize;
        shape.remove(axis);
        strides.remove(axis);

        Ok(Self::from_parts(self.storage().clone(), shape, strides, offset))
    }

    /// Restricts `axis` to the half-open range `[start, start + len)`.
    /// Pure view.
    pub fn narrow(&self, axis: usize, start: usize, len: usize) -> Result<Self> {
        if axis >= self.ndim() {
            return Err(Error::InvalidAxis {
                axis: axis as i64,
                ndim: self.ndim(),
            });
        }
        let extent = self.shape()[axis];
        if start + len > extent {
            return Err(Error::IndexOutOfBounds {
                index: start + len,
                size: extent,
            });
        }

        let mut shape = Shape::from_slice(self.shape());
        let strides = Strides::from_slice(self.strides());
        let offset =
            (self.offset() as isize + start as isize * strides[axis]) as usize;
        shape[axis] = len;

        Ok(Self::from_parts(self.storage().clone(), shape, strides, offset))
    }
}

// =============================================================================
// Rearrangement
// =============================================================================

impl<T: Scalar> Tensor<T> {
    /// Reverses the element order along the given axes. Allocates a fresh
    /// contiguous result.
    pub fn flip(&self, axes: &[usize]) -> Result<Self> {
        validate_axes(axes, self.ndim())?;

        let n = self.numel();
        let data = self.storage().as_slice();
        let mut out = Vec::with_capacity(n);

        for lin in 0..n {
            let mut idx = unravel_index(lin, self.shape());
            for &a in axes {
                idx[a] = self.shape()[a] - 1 - idx[a];
            }
            let pos = self.offset() as isize + linear_index(&idx, self.strides());
            out.push(data[pos as usize]);
        }
        drop(data);

        Tensor::from_vec(out, self.shape())
    }

    /// Rotates a rank-2 tensor by `k` quarter turns counter-clockwise.
    /// `k` may be negative; it is normalized modulo 4. Allocates a fresh
    /// result.
    pub fn rot90(&self, k: i64) -> Result<Self> {
        if self.ndim() != 2 {
            return Err(Error::rank_mismatch(2, self.ndim()));
        }

        match k.rem_euclid(4) {
            0 => Ok(self.clone_deep()),
            1 => self.transpose(0, 1)?.flip(&[0]),
            2 => self.flip(&[0, 1]),
            _ => self.transpose(0, 1)?.flip(&[1]),
        }
    }
}

// =============================================================================
// Joining
// =============================================================================

/// Concatenates tensors along an existing axis.
///
/// All inputs must have equal rank and matching extents on every non-concat
/// axis; the output extent on `axis` is the sum of the input extents.
pub fn concat<T: Scalar>(tensors: &[Tensor<T>], axis: usize) -> Result<Tensor<T>> {
    let first = tensors
        .first()
        .ok_or_else(|| Error::invalid_operation("concat requires at least one tensor"))?;
    let rank = first.ndim();
    if axis >= rank {
        return Err(Error::InvalidAxis {
            axis: axis as i64,
            ndim: rank,
        });
    }

    let mut out_shape = Shape::from_slice(first.shape());
    out_shape[axis] = 0;

    for t in tensors {
        if t.ndim() != rank {
            return Err(Error::rank_mismatch(rank, t.ndim()));
        }
        for (a, (&expected, &actual)) in out_shape.iter().zip(t.shape().iter()).enumerate() {
            if a != axis && expected != actual {
                return Err(Error::shape_mismatch(first.shape(), t.shape()));
            }
        }
        out_shape[axis] += t.shape()[axis];
    }

    let out_strides = contiguous_strides(&out_shape);
    let mut out = vec![T::default(); numel(&out_shape)];

    // Scatter each input into its span along the concat axis.
    let mut span_start = 0usize;
    for t in tensors {
        let data = t.storage().as_slice();
        for lin in 0..t.numel() {
            let mut idx = unravel_index(lin, t.shape());
            let src = t.offset() as isize + linear_index(&idx, t.strides());
            idx[axis] += span_start;
            let dst = linear_index(&idx, &out_strides) as usize;
            out[dst] = data[src as usize];
        }
        span_start += t.shape()[axis];
    }

    Tensor::from_vec(out, &out_shape)
}

/// Stacks tensors along a new axis inserted at `axis`.
///
/// All inputs must share one shape; the output gains an axis whose extent is
/// the number of inputs.
pub fn stack<T: Scalar>(tensors: &[Tensor<T>], axis: usize) -> Result<Tensor<T>> {
    let first = tensors
        .first()
        .ok_or_else(|| Error::invalid_operation("stack requires at least one tensor"))?;
    for t in tensors {
        if t.shape() != first.shape() {
            return Err(Error::shape_mismatch(first.shape(), t.shape()));
        }
    }

    let lifted: Vec<Tensor<T>> = tensors
        .iter()
        .map(|t| t.unsqueeze(axis))
        .collect::<Result<_>>()?;
    concat(&lifted, axis)
}

/// Appends `b` to `a` along `axis`. Two-tensor convenience over [`concat`].
pub fn append<T: Scalar>(a: &Tensor<T>, b: &Tensor<T>, axis: usize) -> Result<Tensor<T>> {
    concat(&[a.clone(), b.clone()], axis)
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn matrix() -> Tensor<f64> {
        Tensor::from_vec(vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0], &[2, 3]).unwrap()
    }

    #[test]
    fn test_select_row_and_column() {
        let m = matrix();

        let row = m.select(0, 1).unwrap();
        assert_eq!(row.shape(), &[3]);
        assert_eq!(row.to_vec(), vec![4.0, 5.0, 6.0]);

        let col = m.select(1, 2).unwrap();
        assert_eq!(col.shape(), &[2]);
        assert_eq!(col.to_vec(), vec![3.0, 6.0]);

        assert!(m.select(0, 2).is_err());
        assert!(m.select(2, 0).is_err());
    }

    #[test]
    fn test_select_is_a_view() {
        let m = matrix();
        let row = m.select(0, 0).unwrap();
        row.set(&[1], 42.0).unwrap();
        assert_eq!(m.get(&[0, 1]).unwrap(), 42.0);
    }

    #[test]
    fn test_narrow() {
        let m = matrix();
        let mid = m.narrow(1, 1, 2).unwrap();
        assert_eq!(mid.shape(), &[2, 2]);
        assert_eq!(mid.to_vec(), vec![2.0, 3.0, 5.0, 6.0]);

        assert!(m.narrow(1, 2, 2).is_err());
    }

    #[test]
    fn test_flip() {
        let m = matrix();
        let rows = m.flip(&[0]).unwrap();
        assert_eq!(rows.to_vec(), vec![4.0, 5.0, 6.0, 1.0, 2.0, 3.0]);

        let cols = m.flip(&[1]).unwrap();
        assert_eq!(cols.to_vec(), vec![3.0, 2.0, 1.0, 6.0, 5.0, 4.0]);

        let both = m.flip(&[0, 1]).unwrap();
        assert_eq!(both.to_vec(), vec![6.0, 5.0, 4.0, 3.0, 2.0, 1.0]);
    }

    #[test]
    fn test_rot90() {
        let m = Tensor::from_vec(vec![1.0, 2.0, 3.0, 4.0], &[2, 2]).unwrap();

        let r1 = m.rot90(1).unwrap();
        assert_eq!(r1.to_vec(), vec![2.0, 4.0, 1.0, 3.0]);

        let r2 = m.rot90(2).unwrap();
        assert_eq!(r2.to_vec(), vec![4.0, 3.0, 2.0, 1.0]);

        let r3 = m.rot90(3).unwrap();
        assert_eq!(r3.to_vec(), vec![3.0, 1.0, 4.0, 2.0]);

        // Negative counts normalize: -1 == 3 quarter turns.
        assert_eq!(m.rot90(-1).unwrap().to_vec(), r3.to_vec());

        // Four rotations compose to the identity.
        let full = m.rot90(1).unwrap().rot90(1).unwrap().rot90(1).unwrap().rot90(1).unwrap();
        assert_eq!(full.to_vec(), m.to_vec());
    }

    #[test]
    fn test_rot90_rank_check() {
        let v = Tensor::<f64>::zeros(&[3]);
        assert!(matches!(v.rot90(1), Err(Error::RankMismatch { .. })));
    }

    #[test]
    fn test_rot90_rectangular() {
        let m = matrix(); // 2x3
        let r = m.rot90(1).unwrap();
        assert_eq!(r.shape(), &[3, 2]);
        assert_eq!(r.to_vec(), vec![3.0, 6.0, 2.0, 5.0, 1.0, 4.0]);
    }

    #[test]
    fn test_concat_axis0() {
        let a = matrix();
        let b = matrix();
        let c = concat(&[a, b], 0).unwrap();
        assert_eq!(c.shape(), &[4, 3]);
        assert_eq!(c.get(&[2, 0]).unwrap(), 1.0);
    }

    #[test]
    fn test_concat_axis1() {
        let a = Tensor::from_vec(vec![1.0, 2.0, 3.0, 4.0], &[2, 2]).unwrap();
        let b = Tensor::from_vec(vec![5.0, 6.0], &[2, 1]).unwrap();
        let c = concat(&[a, b], 1).unwrap();
        assert_eq!(c.shape(), &[2, 3]);
        assert_eq!(c.to_vec(), vec![1.0, 2.0, 5.0, 3.0, 4.0, 6.0]);
    }

    #[test]
    fn test_concat_validation() {
        let a = Tensor::<f64>::zeros(&[2, 3]);
        let b = Tensor::<f64>::zeros(&[2, 4]);
        assert!(concat(&[a.clone(), b], 0).is_err());

        let v = Tensor::<f64>::zeros(&[3]);
        assert!(matches!(
            concat(&[a.clone(), v], 0),
            Err(Error::RankMismatch { .. })
        ));

        assert!(concat::<f64>(&[], 0).is_err());
        assert!(matches!(
            concat(&[a], 2),
            Err(Error::InvalidAxis { .. })
        ));
    }

    #[test]
    fn test_concat_strided_input() {
        let a = matrix().transpose(0, 1).unwrap(); // 3x2 view
        let b = Tensor::from_vec(vec![7.0, 8.0], &[1, 2]).unwrap();
        let c = concat(&[a, b], 0).unwrap();
        assert_eq!(c.shape(), &[4, 2]);
        assert_eq!(c.to_vec(), vec![1.0, 4.0, 2.0, 5.0, 3.0, 6.0, 7.0, 8.0]);
    }

    #[test]
    fn test_stack() {
        let a = Tensor::from_vec(vec![1.0, 2.0], &[2]).unwrap();
        let b = Tensor::from_vec(vec![3.0, 4.0], &[2]).unwrap();

        let s0 = stack(&[a.clone(), b.clone()], 0).unwrap();
        assert_eq!(s0.shape(), &[2, 2]);
        assert_eq!(s0.to_vec(), vec![1.0, 2.0, 3.0, 4.0]);

        let s1 = stack(&[a.clone(), b.clone()], 1).unwrap();
        assert_eq!(s1.shape(), &[2, 2]);
        assert_eq!(s1.to_vec(), vec![1.0, 3.0, 2.0, 4.0]);

        let c = Tensor::<f64>::zeros(&[3]);
        assert!(stack(&[a, c], 0).is_err());
    }

    #[test]
    fn test_append() {
        let a = Tensor::from_vec(vec![1.0, 2.0], &[1, 2]).unwrap();
        let b = Tensor::from_vec(vec![3.0, 4.0], &[1, 2]).unwrap();
        let c = append(&a, &b, 0).unwrap();
        assert_eq!(c.shape(), &[2, 2]);
        assert_eq!(c.to_vec(), vec![1.0, 2.0, 3.0, 4.0]);
    }
}
