//! Complex Layout Helpers - Interleaved Representation
//!
//! A complex array of logical shape `[d0, .., dk]` is stored as a real
//! tensor of shape `[d0, .., dk, 2]`: index 0 of the trailing axis is the
//! real component, index 1 the imaginary component. These helpers move
//! between real and interleaved-complex layouts.
//!
//! @version 0.1.0
//! @author Tensoric Contributors

use tensoric_core::error::{Error, Result};
use tensoric_core::scalar::Float;

use tensoric_tensor::shape::Shape;
use tensoric_tensor::Tensor;

/// Promotes a real tensor to interleaved complex layout with zero imaginary
/// components. The result has the source shape plus a trailing axis of 2.
pub fn to_complex<T: Float>(real: &Tensor<T>) -> Result<Tensor<T>> {
    let src = real.to_vec();
    let mut data = Vec::with_capacity(src.len() * 2);
    for v in src {
        data.push(v);
        data.push(T::ZERO);
    }

    let mut shape = Shape::from_slice(real.shape());
    shape.push(2);
    Tensor::from_vec(data, &shape)
}

/// Validates interleaved complex layout and returns the logical shape
/// (the shape without the trailing component axis).
pub(crate) fn logical_shape<T: Float>(t: &Tensor<T>) -> Result<Shape> {
    if t.ndim() < 1 || *t.shape().last().unwrap_or(&0) != 2 {
        return Err(Error::invalid_operation(
            "expected interleaved complex layout with a trailing axis of 2",
        ));
    }
    Ok(Shape::from_slice(&t.shape()[..t.ndim() - 1]))
}

/// Extracts the real components of an interleaved complex tensor as a view
/// of the logical shape.
pub fn real_part<T: Float>(t: &Tensor<T>) -> Result<Tensor<T>> {
    logical_shape(t)?;
    t.select(t.ndim() - 1, 0)
}

/// Extracts the imaginary components of an interleaved complex tensor as a
/// view of the logical shape.
pub fn imag_part<T: Float>(t: &Tensor<T>) -> Result<Tensor<T>> {
    logical_shape(t)?;
    t.select(t.ndim() - 1, 1)
}

// =============================================================================
// Tests
// =============================================================================
