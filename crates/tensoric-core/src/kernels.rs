//! CPU Kernels - Host Compute Routines
//!
//! Provides the compute kernels that array operations lower to: elementwise
//! arithmetic over contiguous slices, reduction primitives, and dense matrix
//! multiplication. Elementwise kernels parallelize with rayon above a size
//! threshold, partitioning by output index so parallel units write disjoint
//! regions; the sequential and parallel paths produce identical output.
//!
//! # Key Features
//! - Multi-threaded execution via rayon
//! - matrixmultiply crate for optimized f32/f64 GEMM with arbitrary strides
//! - Cache-tiled generic GEMM fallback for other element types
//!
//! @version 0.1.0
//! @author Tensoric Contributors

use rayon::prelude::*;

use crate::scalar::{Float, Numeric};

/// Threshold for using parallel processing (in elements).
const PARALLEL_THRESHOLD: usize = 4096;

// =============================================================================
// Elementwise Operations
// =============================================================================

macro_rules! impl_binary_kernel {
    ($name:ident, $op:tt, $doc:expr) => {
        #[doc = $doc]
        pub fn $name<T: Numeric>(dst: &mut [T], a: &[T], b: &[T]) {
            debug_assert_eq!(a.len(), b.len());
            debug_assert_eq!(a.len(), dst.len());

            if dst.len() >= PARALLEL_THRESHOLD {
                dst.par_iter_mut()
                    .zip(a.par_iter().zip(b.par_iter()))
                    .for_each(|(d, (a_val, b_val))| {
                        *d = *a_val $op *b_val;
                    });
            } else {
                for i in 0..dst.len() {
                    dst[i] = a[i] $op b[i];
                }
            }
        }
    };
}

impl_binary_kernel!(add, +, "Adds two slices element-wise.");
impl_binary_kernel!(sub, -, "Subtracts two slices element-wise.");
impl_binary_kernel!(mul, *, "Multiplies two slices element-wise.");
impl_binary_kernel!(div, /, "Divides two slices element-wise. Division by zero follows IEEE semantics for float types.");

macro_rules! impl_scalar_kernel {
    ($name:ident, $op:tt, $doc:expr) => {
        #[doc = $doc]
        pub fn $name<T: Numeric>(dst: &mut [T], a: &[T], scalar: T) {
            debug_assert_eq!(a.len(), dst.len());

            if dst.len() >= PARALLEL_THRESHOLD {
                dst.par_iter_mut().zip(a.par_iter()).for_each(|(d, a_val)| {
                    *d = *a_val $op scalar;
                });
            } else {
                for i in 0..dst.len() {
                    dst[i] = a[i] $op scalar;
                }
            }
        }
    };
}

impl_scalar_kernel!(add_scalar, +, "Adds a scalar to each element.");
impl_scalar_kernel!(sub_scalar, -, "Subtracts a scalar from each element.");
impl_scalar_kernel!(mul_scalar, *, "Multiplies each element by a scalar.");
impl_scalar_kernel!(div_scalar, /, "Divides each element by a scalar.");

/// Negates each element.
pub fn neg<T: Numeric>(dst: &mut [T], a: &[T]) {
    debug_assert_eq!(a.len(), dst.len());

    if dst.len() >= PARALLEL_THRESHOLD {
        dst.par_iter_mut().zip(a.par_iter()).for_each(|(d, a_val)| {
            *d = T::zero() - *a_val;
        });
    } else {
        for i in 0..dst.len() {
            dst[i] = T::zero() - a[i];
        }
    }
}

// =============================================================================
// Reduction Primitives
// =============================================================================

/// Computes the sum of all elements. Returns zero for an empty slice.
pub fn sum<T: Numeric>(a: &[T]) -> T {
    let mut result = T::zero();
    for &val in a {
        result = result + val;
    }
    result
}

/// Finds the maximum element, or None for an empty slice.
pub fn max<T: Numeric>(a: &[T]) -> Option<T> {
    let mut iter = a.iter().copied();
    let first = iter.next()?;
    Some(iter.fold(first, |acc, val| if val > acc { val } else { acc }))
}

/// Finds the minimum element, or None for an empty slice.
pub fn min<T: Numeric>(a: &[T]) -> Option<T> {
    let mut iter = a.iter().copied();
    let first = iter.next()?;
    Some(iter.fold(first, |acc, val| if val < acc { val } else { acc }))
}

/// Computes the mean of all elements. An empty slice yields the IEEE result
/// of 0/0 (NaN).
pub fn mean<T: Float>(a: &[T]) -> T {
    sum(a) / T::from_usize(a.len())
}

/// Computes the dot product of two equal-length slices.
pub fn dot<T: Numeric>(a: &[T], b: &[T]) -> T {
    debug_assert_eq!(a.len(), b.len());

    let mut acc = T::zero();
    for i in 0..a.len() {
        acc = acc + a[i] * b[i];
    }
    acc
}

// =============================================================================
// Matrix Multiplication
// =============================================================================

/// Performs matrix multiplication: C = A @ B.
///
/// A is (m x k) with element strides (`rsa`, `csa`), B is (k x n) with
/// (`rsb`, `csb`); C is (m x n) row-major contiguous. Strided operands let
/// transposed views feed the kernel without materializing a copy.
///
/// Dispatches to the matrixmultiply crate for f32/f64 and falls back to a
/// cache-tiled loop for other element types.
pub fn gemm<T: Numeric>(
    c: &mut [T],
    a: &[T],
    b: &[T],
    m: usize,
    n: usize,
    k: usize,
    rsa: isize,
    csa: isize,
    rsb: isize,
    csb: isize,
) {
    debug_assert_eq!(c.len(), m * n);

    use core::any::TypeId;
    if TypeId::of::<T>() == TypeId::of::<f32>() {
        // SAFETY: T is f32, so the slice casts are identity casts.
        unsafe {
            let a_f32: &[f32] = &*(core::ptr::from_ref::<[T]>(a) as *const [f32]);
            let b_f32: &[f32] = &*(core::ptr::from_ref::<[T]>(b) as *const [f32]);
            let c_f32: &mut [f32] = &mut *(core::ptr::from_mut::<[T]>(c) as *mut [f32]);
            sgemm(c_f32, a_f32, b_f32, m, n, k, rsa, csa, rsb, csb);
        }
        return;
    }

    if TypeId::of::<T>() == TypeId::of::<f64>() {
        // SAFETY: T is f64, so the slice casts are identity casts.
        unsafe {
            let a_f64: &[f64] = &*(core::ptr::from_ref::<[T]>(a) as *const [f64]);
            let b_f64: &[f64] = &*(core::ptr::from_ref::<[T]>(b) as *const [f64]);
            let c_f64: &mut [f64] = &mut *(core::ptr::from_mut::<[T]>(c) as *mut [f64]);
            dgemm(c_f64, a_f64, b_f64, m, n, k, rsa, csa, rsb, csb);
        }
        return;
    }

    // Fallback: cache-tiled multiplication. Block size chosen for a typical
    // 32KB L1 cache.
    const BLOCK_SIZE: usize = 64;

    for val in c.iter_mut() {
        *val = T::zero();
    }

    for i0 in (0..m).step_by(BLOCK_SIZE) {
        let i_end = (i0 + BLOCK_SIZE).min(m);
        for p0 in (0..k).step_by(BLOCK_SIZE) {
            let p_end = (p0 + BLOCK_SIZE).min(k);
            for j0 in (0..n).step_by(BLOCK_SIZE) {
                let j_end = (j0 + BLOCK_SIZE).min(n);

                for i in i0..i_end {
                    for p in p0..p_end {
                        let a_val = a[(i as isize * rsa + p as isize * csa) as usize];
                        for j in j0..j_end {
                            let b_val = b[(p as isize * rsb + j as isize * csb) as usize];
                            c[i * n + j] = c[i * n + j] + a_val * b_val;
                        }
                    }
                }
            }
        }
    }
}

/// Optimized f32 GEMM via the matrixmultiply crate: C = A @ B.
fn sgemm(
    c: &mut [f32],
    a: &[f32],
    b: &[f32],
    m: usize,
    n: usize,
    k: usize,
    rsa: isize,
    csa: isize,
    rsb: isize,
    csb: isize,
) {
    debug_assert_eq!(c.len(), m * n);

    unsafe {
        matrixmultiply::sgemm(
            m,
            k,
            n,
            1.0,
            a.as_ptr(),
            rsa,
            csa,
            b.as_ptr(),
            rsb,
            csb,
            0.0,
            c.as_mut_ptr(),
            n as isize,
            1,
        );
    }
}

/// Optimized f64 GEMM via the matrixmultiply crate: C = A @ B.
fn dgemm(
    c: &mut [f64],
    a: &[f64],
    b: &[f64],
    m: usize,
    n: usize,
    k: usize,
    rsa: isize,
    csa: isize,
    rsb: isize,
    csb: isize,
) {
    debug_assert_eq!(c.len(), m * n);

    unsafe {
        matrixmultiply::dgemm(
            m,
            k,
            n,
            1.0,
            a.as_ptr(),
            rsa,
            csa,
            b.as_ptr(),
            rsb,
            csb,
            0.0,
            c.as_mut_ptr(),
            n as isize,
            1,
        );
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_kernel() {
        let a = [1.0_f64, 2.0, 3.0];
        let b = [4.0, 5.0, 6.0];
        let mut dst = [0.0; 3];
        add(&mut dst, &a, &b);
        assert_eq!(dst, [5.0, 7.0, 9.0]);
    }

    #[test]
    fn test_div_by_zero_is_ieee() {
        let a = [1.0_f64, -1.0, 0.0];
        let b = [0.0, 0.0, 0.0];
        let mut dst = [0.0; 3];
        div(&mut dst, &a, &b);
        assert_eq!(dst[0], f64::INFINITY);
        assert_eq!(dst[1], f64::NEG_INFINITY);
        assert!(dst[2].is_nan());
    }

    #[test]
    fn test_parallel_path_matches_scalar() {
        let n = PARALLEL_THRESHOLD + 17;
        let a: Vec<f64> = (0..n).map(|i| i as f64).collect();
        let b: Vec<f64> = (0..n).map(|i| (i * 2) as f64).collect();
        let mut dst = vec![0.0; n];
        add(&mut dst, &a, &b);
        for i in 0..n {
            assert_eq!(dst[i], a[i] + b[i]);
        }
    }

    #[test]
    fn test_reductions() {
        let a = [3.0_f64, 1.0, 4.0, 1.0, 5.0];
        assert_eq!(sum(&a), 14.0);
        assert_eq!(max(&a), Some(5.0));
        assert_eq!(min(&a), Some(1.0));
        assert!((mean(&a) - 2.8).abs() < 1e-12);
    }

    #[test]
    fn test_empty_reductions() {
        let a: [f64; 0] = [];
        assert_eq!(sum(&a), 0.0);
        assert_eq!(max(&a), None);
        assert_eq!(min(&a), None);
        assert!(mean(&a).is_nan());
    }

    #[test]
    fn test_dot() {
        let a = [1.0_f64, 2.0, 3.0];
        let b = [4.0, 5.0, 6.0];
        assert_eq!(dot(&a, &b), 32.0);
    }

    #[test]
    fn test_gemm_f64() {
        // (2x3) @ (3x2), both row-major contiguous
        let a = [1.0_f64, 2.0, 3.0, 4.0, 5.0, 6.0];
        let b = [7.0, 8.0, 9.0, 10.0, 11.0, 12.0];
        let mut c = [0.0; 4];
        gemm(&mut c, &a, &b, 2, 2, 3, 3, 1, 2, 1);
        assert_eq!(c, [58.0, 64.0, 139.0, 154.0]);
    }

    #[test]
    fn test_gemm_transposed_strides() {
        // A stored column-major (a transposed view): rsa=1, csa=2 over [2x3]
        let a_t = [1.0_f64, 4.0, 2.0, 5.0, 3.0, 6.0];
        let b = [7.0, 8.0, 9.0, 10.0, 11.0, 12.0];
        let mut c = [0.0; 4];
        gemm(&mut c, &a_t, &b, 2, 2, 3, 1, 2, 2, 1);
        assert_eq!(c, [58.0, 64.0, 139.0, 154.0]);
    }

    #[test]
    fn test_gemm_generic_fallback() {
        let a = [1_i64, 2, 3, 4];
        let b = [5, 6, 7, 8];
        let mut c = [0_i64; 4];
        gemm(&mut c, &a, &b, 2, 2, 2, 2, 1, 2, 1);
        assert_eq!(c, [19, 22, 43, 50]);
    }
}
