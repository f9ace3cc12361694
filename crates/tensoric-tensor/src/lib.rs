//! Tensoric Tensor - N-Dimensional Arrays for the Tensoric Engine
//!
//! This crate provides [`Tensor`], the user-facing N-dimensional array type:
//! a reference-counted storage buffer paired with a shape, strides, and an
//! element offset. Views (reshape of contiguous data, transpose, permute,
//! select, narrow, broadcast) share storage without copying; arithmetic and
//! reductions allocate fresh output.
//!
//! # Key Features
//! - NumPy-compatible broadcasting for elementwise arithmetic
//! - Zero-copy views through stride manipulation
//! - Axis-set reductions (sum, mean, max, min)
//! - Joining and rearrangement: concat, stack, append, flip, rot90
//!
//! # Example
//! ```rust
//! use tensoric_tensor::Tensor;
//!
//! let a = Tensor::from_vec(vec![1.0, 2.0, 3.0, 4.0], &[2, 2]).unwrap();
//! let b = Tensor::<f64>::ones(&[2]);
//! let c = a.add(&b).unwrap(); // broadcasts [2] across rows
//! assert_eq!(c.to_vec(), vec![2.0, 3.0, 4.0, 5.0]);
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
#![allow(clippy::cast_lossless)]
#![allow(clippy::needless_range_loop)]
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::return_self_not_must_use)]

// =============================================================================
// Modules
// =============================================================================

pub mod creation;
pub mod shape;
pub mod tensor;
pub mod view;

// =============================================================================
// Re-exports
// =============================================================================

pub use creation::{arange, eye, full_like, linspace, ones_like, try_zeros, zeros_like};
pub use shape::{Shape, Strides};
pub use tensor::Tensor;
pub use view::{append, concat, stack};

// =============================================================================
// Prelude
// =============================================================================

/// Convenient imports for common usage.
pub mod prelude {
    pub use crate::creation::{arange, eye, linspace};
    pub use crate::shape::{Shape, Strides};
    pub use crate::tensor::Tensor;
    pub use crate::view::{append, concat, stack};
    pub use tensoric_core::error::{Error, Result};
}
