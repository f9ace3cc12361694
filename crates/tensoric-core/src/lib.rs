//! Tensoric Core - Foundation Layer for the Tensoric Array Engine
//!
//! This crate provides the primitives that underpin the Tensoric numeric
//! array engine: the error taxonomy, the scalar trait hierarchy, reference-
//! counted storage, and the CPU compute kernels.
//!
//! # Key Features
//! - Unified error type covering every contract violation in the engine
//! - Type-safe scalar traits (f32, f64, and the integer types)
//! - Reference-counted storage with zero-copy slicing
//! - Elementwise, reduction, and GEMM kernels with optional parallelism
//!
//! # Example
//! ```rust
//! use tensoric_core::Storage;
//!
//! let storage = Storage::<f64>::zeros(1024);
//! assert_eq!(storage.len(), 1024);
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
#![allow(clippy::too_many_arguments)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::cast_lossless)]
#![allow(clippy::needless_range_loop)]
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::items_after_statements)]
#![allow(clippy::return_self_not_must_use)]

// =============================================================================
// Modules
// =============================================================================

pub mod error;
pub mod kernels;
pub mod scalar;
pub mod storage;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{Error, Result};
pub use scalar::{Float, Numeric, Scalar};
pub use storage::Storage;

// =============================================================================
// Prelude
// =============================================================================

/// Convenient imports for common usage.
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::scalar::{Float, Numeric, Scalar};
    pub use crate::storage::Storage;
}
