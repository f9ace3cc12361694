//! Transform Entry Points - fft, ifft, fft2, ifft2, fftn, ifftn
//!
//! Tensor-level wrappers around the 1-D kernel. Each N-dimensional transform
//! is a sequence of independent 1-D passes, one per requested axis, applied
//! most-contiguous axis first. Within a pass, every lane along the axis is
//! gathered into a scratch buffer, transformed, and scattered back.
//!
//! Real inputs are promoted to interleaved complex layout with zero
//! imaginary components; outputs are always interleaved complex.
//!
//! @version 0.1.0
//! @author Tensoric Contributors

use tensoric_core::error::{Error, Result};
use tensoric_core::scalar::Float;

use tensoric_tensor::shape::{validate_axes, Shape};
use tensoric_tensor::Tensor;

use crate::complex::{logical_shape, to_complex};
use crate::kernel;

// =============================================================================
// Axis Passes
// =============================================================================

/// Runs the 1-D transform along each requested logical axis of an
/// interleaved complex buffer of the given logical shape.
///
/// Axes are processed largest-index first, so the contiguous trailing axis
/// (stride 1 in the logical layout) goes before strided ones.
fn axis_passes<T: Float>(
    data: &mut [T],
    logical: &[usize],
    axes: &[usize],
    inverse: bool,
) -> Result<()> {
    validate_axes(axes, logical.len())?;
    for &axis in axes {
        if logical[axis] == 0 {
            return Err(Error::EmptyInput);
        }
    }

    let mut order = Shape::from_slice(axes);
    order.sort_unstable_by(|a, b| b.cmp(a));

    for &axis in &order {
        let len = logical[axis];
        let stride: usize = logical[axis + 1..].iter().product();
        let repeats: usize = logical[..axis].iter().product();
        let block = len * stride;

        let mut re = vec![T::ZERO; len];
        let mut im = vec![T::ZERO; len];

        for r in 0..repeats {
            let base_block = r * block;
            for lane in 0..stride {
                for j in 0..len {
                    let p = 2 * (base_block + j * stride + lane);
                    re[j] = data[p];
                    im[j] = data[p + 1];
                }

                kernel::transform(&mut re, &mut im, inverse);

                for j in 0..len {
                    let p = 2 * (base_block + j * stride + lane);
                    data[p] = re[j];
                    data[p + 1] = im[j];
                }
            }
        }
    }

    Ok(())
}

/// Promotes a real tensor of the expected logical rank, or validates an
/// already-complex one, returning (interleaved data, logical shape).
fn prepare<T: Float>(t: &Tensor<T>, logical_rank: usize) -> Result<(Vec<T>, Shape)> {
    if t.ndim() == logical_rank {
        let c = to_complex(t)?;
        return Ok((c.to_vec(), Shape::from_slice(t.shape())));
    }
    if t.ndim() == logical_rank + 1 {
        let logical = logical_shape(t)?;
        return Ok((t.to_vec(), logical));
    }
    Err(Error::rank_mismatch(logical_rank, t.ndim()))
}

fn run<T: Float>(
    t: &Tensor<T>,
    logical_rank: usize,
    axes: &[usize],
    inverse: bool,
) -> Result<Tensor<T>> {
    let (mut data, logical) = prepare(t, logical_rank)?;
    axis_passes(&mut data, &logical, axes, inverse)?;

    let mut out_shape = logical;
    out_shape.push(2);
    Tensor::from_vec(data, &out_shape)
}

// =============================================================================
// 1-D Transforms
// =============================================================================

/// Computes the forward transform of a length-N sequence.
///
/// Accepts a rank-1 real tensor `(N,)` or an interleaved complex tensor
/// `(N, 2)`; returns the `(N, 2)` spectrum. Length 1 is the identity.
///
/// # Errors
/// An empty sequence fails with [`Error::EmptyInput`]; any other rank fails
/// with a rank mismatch.
pub fn fft<T: Float>(t: &Tensor<T>) -> Result<Tensor<T>> {
    run(t, 1, &[0], false)
}

/// Computes the inverse transform of a length-N sequence: the conjugate
/// transform scaled by `1/N`, so `ifft(fft(x)) == x` up to rounding.
///
/// Accepts the same layouts as [`fft`] and returns an `(N, 2)` tensor.
pub fn ifft<T: Float>(t: &Tensor<T>) -> Result<Tensor<T>> {
    run(t, 1, &[0], true)
}

// =============================================================================
// 2-D Transforms
// =============================================================================

/// Computes the forward transform over both axes of a matrix.
///
/// Accepts a rank-2 real tensor `(R, C)` or an interleaved complex tensor
/// `(R, C, 2)`; returns the `(R, C, 2)` spectrum.
pub fn fft2<T: Float>(t: &Tensor<T>) -> Result<Tensor<T>> {
    run(t, 2, &[0, 1], false)
}

/// Computes the inverse transform over both axes of a matrix. Each axis
/// contributes its own `1/N` scale, so `ifft2(fft2(x)) == x` up to rounding.
pub fn ifft2<T: Float>(t: &Tensor<T>) -> Result<Tensor<T>> {
    run(t, 2, &[0, 1], true)
}

// =============================================================================
// N-D Transforms
// =============================================================================

/// Computes the forward transform along the requested logical axes of an
/// interleaved complex tensor `(d0, .., dk, 2)`.
///
/// # Errors
/// Inputs without the trailing component axis, out-of-range or duplicate
/// axes, and empty transform axes all fail.
pub fn fftn<T: Float>(t: &Tensor<T>, axes: &[usize]) -> Result<Tensor<T>> {
    let logical = logical_shape(t)?;
    run(t, logical.len(), axes, false)
}

/// Computes the inverse transform along the requested logical axes of an
/// interleaved complex tensor, scaling by `1/N` per axis.
pub fn ifftn<T: Float>(t: &Tensor<T>, axes: &[usize]) -> Result<Tensor<T>> {
    let logical = logical_shape(t)?;
    run(t, logical.len(), axes, true)
}

// =============================================================================
// Tests
// =============================================================================
