//! Scalar Traits - Tensoric Element Type System
//!
//! Defines the trait hierarchy for array element types. The engine fixes the
//! element type per instantiation: every array is generic over one scalar
//! type, chosen at the call site, with floating-point types carrying the
//! transform and mean operations.
//!
//! # Key Features
//! - Type-safe numeric operations via traits
//! - Floating-point constants and helpers for f32/f64
//! - No runtime dtype dispatch
//!
//! @version 0.1.0
//! @author Tensoric Contributors

use num_traits::{Float as NumFloat, Num, NumCast, One, Zero};

use core::fmt::Debug;

// =============================================================================
// Scalar Trait
// =============================================================================

/// Trait for all scalar types that can be stored in an array.
///
/// This is the base trait that all element types must implement.
pub trait Scalar: Copy + Clone + Debug + Default + Send + Sync + 'static {}

// =============================================================================
// Numeric Trait
// =============================================================================

/// Trait for numeric types that support arithmetic operations.
pub trait Numeric: Scalar + Num + NumCast + PartialOrd + Zero + One {
    /// The zero value for this type.
    const ZERO: Self;

    /// The one value for this type.
    const ONE: Self;

    /// Returns the minimum value for this type.
    fn min_value() -> Self;

    /// Returns the maximum value for this type.
    fn max_value() -> Self;
}

// =============================================================================
// Float Trait
// =============================================================================

/// Trait for floating point types.
pub trait Float: Numeric + NumFloat {
    /// Not a Number value.
    const NAN: Self;

    /// Positive infinity.
    const INFINITY: Self;

    /// Negative infinity.
    const NEG_INFINITY: Self;

    /// Machine epsilon.
    const EPSILON: Self;

    /// Archimedes' constant.
    const PI: Self;

    /// Returns true if this value is NaN.
    fn is_nan_value(self) -> bool;

    /// Returns true if this value is infinite.
    fn is_infinite_value(self) -> bool;

    /// Returns the square root of this value.
    fn sqrt_value(self) -> Self;

    /// Returns the sine of this value.
    fn sin_value(self) -> Self;

    /// Returns the cosine of this value.
    fn cos_value(self) -> Self;

    /// Converts a usize, saturating through the widest float.
    fn from_usize(n: usize) -> Self;
}

// =============================================================================
// Scalar Implementations
// =============================================================================

macro_rules! impl_scalar {
    ($($ty:ty),*) => {
        $(impl Scalar for $ty {})*
    };
}

impl_scalar!(f32, f64, i8, i16, i32, i64, u8, u16, u32, u64);

// =============================================================================
// Numeric Implementations
// =============================================================================

macro_rules! impl_numeric {
    ($ty:ty, $zero:expr, $one:expr) => {
        impl Numeric for $ty {
            const ZERO: Self = $zero;
            const ONE: Self = $one;

            fn min_value() -> Self {
                <$ty>::MIN
            }

            fn max_value() -> Self {
                <$ty>::MAX
            }
        }
    };
}

impl_numeric!(f32, 0.0, 1.0);
impl_numeric!(f64, 0.0, 1.0);
impl_numeric!(i8, 0, 1);
impl_numeric!(i16, 0, 1);
impl_numeric!(i32, 0, 1);
impl_numeric!(i64, 0, 1);
impl_numeric!(u8, 0, 1);
impl_numeric!(u16, 0, 1);
impl_numeric!(u32, 0, 1);
impl_numeric!(u64, 0, 1);

// =============================================================================
// Float Implementations
// =============================================================================

macro_rules! impl_float {
    ($ty:ident) => {
        impl Float for $ty {
            const NAN: Self = <$ty>::NAN;
            const INFINITY: Self = <$ty>::INFINITY;
            const NEG_INFINITY: Self = <$ty>::NEG_INFINITY;
            const EPSILON: Self = <$ty>::EPSILON;
            const PI: Self = core::$ty::consts::PI;

            fn is_nan_value(self) -> bool {
                self.is_nan()
            }

            fn is_infinite_value(self) -> bool {
                self.is_infinite()
            }

            fn sqrt_value(self) -> Self {
                self.sqrt()
            }

            fn sin_value(self) -> Self {
                self.sin()
            }

            fn cos_value(self) -> Self {
                self.cos()
            }

            fn from_usize(n: usize) -> Self {
                n as $ty
            }
        }
    };
}

impl_float!(f32);
impl_float!(f64);

// =============================================================================
// Tests
// =============================================================================
