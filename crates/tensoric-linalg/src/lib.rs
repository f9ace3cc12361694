//! Tensoric Linalg - Dense Linear Algebra over N-Dimensional Arrays
//!
//! Bridges the N-dimensional [`Tensor`](tensoric_tensor::Tensor) type to the
//! rank-2 GEMM backend. A [`MatrixView`] adapts a rank-2 tensor (or a rank-2
//! view sliced from a higher-rank array) to the backend without copying:
//! the backend consumes arbitrary row/column strides, so transposed views
//! feed it directly. Batched multiplication loops the rank-2 operation over
//! leading batch axes, which broadcast like elementwise operands.
//!
//! # Key Features
//! - Zero-copy rank-2 adapter with strict rank validation
//! - matmul with contraction-dimension checking
//! - Batched matmul with broadcast batch axes, parallelized per batch
//! - Vector inner and outer products
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

pub mod matrix;
pub mod ops;

// =============================================================================
// Re-exports
// =============================================================================

pub use matrix::MatrixView;
pub use ops::{inner, matmul, outer};

// =============================================================================
// Prelude
// =============================================================================

/// Convenient imports for common usage.
pub mod prelude {
    pub use crate::matrix::MatrixView;
    pub use crate::ops::{inner, matmul, outer};
}
