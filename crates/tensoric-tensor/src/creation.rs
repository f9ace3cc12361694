//! Creation Routines - Constructing Tensors from Descriptions
//!
//! Free functions for building tensors that do not start from caller data:
//! checked allocation, identity matrices, ranges, and `_like` variants that
//! copy another tensor's shape.
//!
//! @version 0.1.0
//! @author Tensoric Contributors

use tensoric_core::error::Result;
use tensoric_core::scalar::{Float, Numeric, Scalar};
use tensoric_core::storage::Storage;

use crate::shape::{contiguous_strides, numel, Shape};
use crate::tensor::Tensor;

/// Wraps a vector whose length matches the shape by construction.
fn from_exact<T: Scalar>(data: Vec<T>, shape: &[usize]) -> Tensor<T> {
    debug_assert_eq!(data.len(), numel(shape));
    Tensor::from_parts(
        Storage::from_vec(data),
        Shape::from_slice(shape),
        contiguous_strides(shape),
        0,
    )
}

/// Allocates a zeroed tensor, validating the request against the
/// addressable-memory limit.
///
/// # Errors
/// Fails with an allocation error when the byte size overflows or exceeds
/// `isize::MAX`.
pub fn try_zeros<T: Scalar>(shape: &[usize]) -> Result<Tensor<T>> {
    let storage = Storage::try_zeros(numel(shape))?;
    Ok(Tensor::from_parts(
        storage,
        Shape::from_slice(shape),
        contiguous_strides(shape),
        0,
    ))
}

/// Creates a zeroed tensor with the same shape as `other`.
#[must_use]
pub fn zeros_like<T: Scalar>(other: &Tensor<T>) -> Tensor<T> {
    Tensor::zeros(other.shape())
}

/// Creates a tensor of ones with the same shape as `other`.
#[must_use]
pub fn ones_like<T: Numeric>(other: &Tensor<T>) -> Tensor<T> {
    Tensor::ones(other.shape())
}

/// Creates a tensor filled with `value`, shaped like `other`.
#[must_use]
pub fn full_like<T: Numeric>(other: &Tensor<T>, value: T) -> Tensor<T> {
    Tensor::full(other.shape(), value)
}

/// Creates the rank-2 identity matrix of size `n`.
#[must_use]
pub fn eye<T: Numeric>(n: usize) -> Tensor<T> {
    let mut data = vec![T::ZERO; n * n];
    for i in 0..n {
        data[i * n + i] = T::ONE;
    }
    from_exact(data, &[n, n])
}

/// Creates a rank-1 tensor of evenly stepped values in `[start, stop)`.
///
/// An empty tensor results when the range is empty or the step points away
/// from `stop`.
#[must_use]
pub fn arange<T: Float>(start: T, stop: T, step: T) -> Tensor<T> {
    let span = (stop - start) / step;
    let count = if span > T::ZERO {
        span.ceil().to_usize().unwrap_or(0)
    } else {
        0
    };

    let mut data = Vec::with_capacity(count);
    let mut value = start;
    for _ in 0..count {
        data.push(value);
        value = value + step;
    }

    let len = data.len();
    from_exact(data, &[len])
}

/// Creates a rank-1 tensor of `num` evenly spaced values from `start` to
/// `stop` inclusive.
#[must_use]
pub fn linspace<T: Float>(start: T, stop: T, num: usize) -> Tensor<T> {
    let data = match num {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (stop - start) / T::from_usize(num - 1);
            (0..num)
                .map(|i| start + step * T::from_usize(i))
                .collect()
        }
    };

    let len = data.len();
    from_exact(data, &[len])
}

// =============================================================================
// Tests
// =============================================================================
