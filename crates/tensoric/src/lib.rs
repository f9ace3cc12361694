//! # Tensoric - An N-Dimensional Array Engine in Pure Rust
//!
//! Tensoric provides dense numeric arrays with shared refcounted storage,
//! zero-copy views, NumPy-style broadcasting, reductions, matrix
//! multiplication, and discrete Fourier transforms.
//!
//! ## Core Features
//!
//! - **Tensors**: N-dimensional arrays over shared contiguous storage with
//!   explicit shapes and strides
//! - **Broadcasting**: elementwise arithmetic aligns shapes from the right,
//!   with IEEE-754 semantics for floating-point division
//! - **Views**: reshape, transpose, permute, select, narrow, and
//!   `broadcast_to` share storage instead of copying
//! - **Reductions**: sum, mean, max, min over the whole tensor or any set
//!   of axes, with or without kept axes
//! - **Linear Algebra**: rank-2 and batched matrix multiplication with
//!   broadcast batch axes, inner and outer products
//! - **FFT**: radix-2 Cooley-Tukey transforms with a direct-DFT fallback
//!   for arbitrary lengths, 1-D through N-D, forward and inverse
//!
//! All operations are stateless and reentrant: no global configuration, no
//! hidden caches, and concurrent calls on shared inputs are safe.
//!
//! # Quick Start
//!
//! ```rust
//! use tensoric::prelude::*;
//!
//! // Broadcasting: (2, 3) + (3,)
//! let a = Tensor::from_vec(vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0], &[2, 3]).unwrap();
//! let b = Tensor::from_vec(vec![10.0, 20.0, 30.0], &[3]).unwrap();
//! let c = a.add(&b).unwrap();
//! assert_eq!(c.to_vec(), vec![11.0, 22.0, 33.0, 14.0, 25.0, 36.0]);
//!
//! // Matrix multiplication
//! let m = matmul(&a, &b.reshape(&[3, 1]).unwrap()).unwrap();
//! assert_eq!(m.shape(), &[2, 1]);
//!
//! // FFT round trip
//! let x: Tensor<f64> = Tensor::from_vec(vec![1.0, 2.0, 3.0, 4.0], &[4]).unwrap();
//! let back = ifft(&fft(&x).unwrap()).unwrap();
//! let recovered = real_part(&back).unwrap();
//! assert!((recovered.get(&[0]).unwrap() - 1.0).abs() < 1e-12);
//! ```
//!
//! @version 0.1.0
//! @author Tensoric Contributors

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
// Numerics-specific allowances
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::uninlined_format_args)]

// =============================================================================
// Subcrate Re-exports
// =============================================================================

pub use tensoric_core as core;
pub use tensoric_fft as fft_mod;
pub use tensoric_linalg as linalg;
pub use tensoric_tensor as tensor;

// =============================================================================
// Flat Re-exports
// =============================================================================

pub use tensoric_core::error::{Error, Result};
pub use tensoric_core::scalar::{Float, Numeric, Scalar};

pub use tensoric_tensor::{
    append, arange, concat, eye, full_like, linspace, ones_like, stack, try_zeros, zeros_like,
    Shape, Strides, Tensor,
};

pub use tensoric_linalg::{inner, matmul, outer, MatrixView};

pub use tensoric_fft::{
    fft, fft2, fftn, ifft, ifft2, ifftn, imag_part, real_part, to_complex,
};

// =============================================================================
// Prelude
// =============================================================================

/// Common imports for array programming.
///
/// ```rust
/// use tensoric::prelude::*;
/// ```
pub mod prelude {
    pub use tensoric_core::error::{Error, Result};
    pub use tensoric_core::scalar::{Float, Numeric, Scalar};

    pub use tensoric_tensor::{append, arange, concat, eye, linspace, stack, Tensor};

    pub use tensoric_linalg::{inner, matmul, outer, MatrixView};

    pub use tensoric_fft::{
        fft, fft2, fftn, ifft, ifft2, ifftn, imag_part, real_part, to_complex,
    };
}

// =============================================================================
// Version Information
// =============================================================================

/// Returns the version of the Tensoric engine.
#[must_use]
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!version().is_empty());
    }

    #[test]
    fn test_prelude_imports() {
        use crate::prelude::*;

        let t = Tensor::from_vec(vec![1.0, 2.0, 3.0, 4.0], &[2, 2]).unwrap();
        assert_eq!(t.shape(), &[2, 2]);
        assert_eq!(t.sum(), 10.0);
    }

    #[test]
    fn test_flat_reexports() {
        let a = Tensor::from_vec(vec![1.0, 2.0], &[2]).unwrap();
        let b = Tensor::from_vec(vec![3.0, 4.0], &[2]).unwrap();
        assert_eq!(inner(&a, &b).unwrap(), 11.0);
    }
}
