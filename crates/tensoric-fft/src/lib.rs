//! Tensoric FFT - Discrete Fourier Transforms over Tensors
//!
//! Stateless, pure transforms. Complex arrays use an interleaved
//! representation throughout: a complex array of logical shape
//! `[d0, .., dk]` is a real tensor of shape `[d0, .., dk, 2]` whose trailing
//! axis holds (real, imaginary).
//!
//! Power-of-two lengths run the iterative radix-2 Cooley-Tukey algorithm
//! (bit-reversal permutation, then log2(N) butterfly passes). Other lengths
//! fall back to a direct O(N^2) DFT; output length always equals input
//! length, so the `ifft(fft(x)) == x` round trip holds at every N. The
//! inverse applies the conjugate transform and scales by 1/N.
//!
//! N-dimensional transforms apply the 1-D transform along each requested
//! axis in sequence, most-contiguous axis first.
//!
//! # Example
//! ```rust
//! use tensoric_tensor::Tensor;
//! use tensoric_fft::{fft, ifft, real_part};
//!
//! let x: Tensor<f64> = Tensor::from_vec(vec![1.0, 2.0, 3.0, 4.0], &[4]).unwrap();
//! let spectrum = fft(&x).unwrap();
//! assert_eq!(spectrum.get(&[0, 0]).unwrap(), 10.0); // DC bin
//!
//! let back = ifft(&spectrum).unwrap();
//! let recovered = real_part(&back).unwrap();
//! assert!((recovered.get(&[2]).unwrap() - 3.0).abs() < 1e-12);
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
#![allow(clippy::similar_names)]
#![allow(clippy::many_single_char_names)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::needless_range_loop)]
#![allow(clippy::uninlined_format_args)]

// =============================================================================
// Modules
// =============================================================================

pub mod complex;
mod kernel;
pub mod transforms;

// =============================================================================
// Re-exports
// =============================================================================

pub use complex::{imag_part, real_part, to_complex};
pub use transforms::{fft, fft2, fftn, ifft, ifft2, ifftn};

// =============================================================================
// Prelude
// =============================================================================

/// Convenient imports for common usage.
pub mod prelude {
    pub use crate::complex::{imag_part, real_part, to_complex};
    pub use crate::transforms::{fft, fft2, fftn, ifft, ifft2, ifftn};
}
