//! Transform Kernels - Radix-2 Butterflies and the Direct DFT
//!
//! Operates on split (real, imaginary) slices of one 1-D sequence.
//! Power-of-two lengths use the iterative radix-2 Cooley-Tukey algorithm:
//! a bit-reversal permutation followed by log2(N) butterfly passes. Other
//! lengths use the direct O(N^2) transform, which is exact at every length.
//! The inverse transform conjugates the twiddle factors and scales by 1/N.
//!
//! @version 0.1.0
//! @author Tensoric Contributors

use tensoric_core::scalar::Float;

/// Reorders elements into bit-reversed index order. Length must be a power
/// of two.
fn bit_reverse_permute<T: Float>(re: &mut [T], im: &mut [T]) {
    let n = re.len();
    debug_assert!(n.is_power_of_two());
    let bits = n.trailing_zeros();

    for i in 0..n {
        let j = i.reverse_bits() >> (usize::BITS - bits);
        if j > i {
            re.swap(i, j);
            im.swap(i, j);
        }
    }
}

/// In-place radix-2 decimation-in-time transform. Length must be a power of
/// two and at least 2. No normalization is applied here.
fn radix2<T: Float>(re: &mut [T], im: &mut [T], inverse: bool) {
    bit_reverse_permute(re, im);

    let n = re.len();
    let sign = if inverse { T::ONE } else { -T::ONE };

    let mut len = 2;
    while len <= n {
        let half = len / 2;
        let angle_step = sign * T::PI / T::from_usize(half);

        for start in (0..n).step_by(len) {
            for k in 0..half {
                let angle = angle_step * T::from_usize(k);
                let (wr, wi) = (angle.cos_value(), angle.sin_value());

                let (er, ei) = (re[start + k], im[start + k]);
                let (pr, pi) = (re[start + k + half], im[start + k + half]);
                let tr = wr * pr - wi * pi;
                let ti = wr * pi + wi * pr;

                re[start + k] = er + tr;
                im[start + k] = ei + ti;
                re[start + k + half] = er - tr;
                im[start + k + half] = ei - ti;
            }
        }

        len *= 2;
    }
}

/// Direct O(N^2) transform for lengths that are not powers of two.
/// The twiddle exponent is reduced modulo N to keep the angle small.
fn naive_dft<T: Float>(re: &mut [T], im: &mut [T], inverse: bool) {
    let n = re.len();
    let sign = if inverse { T::ONE } else { -T::ONE };
    let step = sign * (T::ONE + T::ONE) * T::PI / T::from_usize(n);

    let mut out_re = vec![T::ZERO; n];
    let mut out_im = vec![T::ZERO; n];

    for k in 0..n {
        let mut acc_re = T::ZERO;
        let mut acc_im = T::ZERO;
        for j in 0..n {
            let angle = step * T::from_usize((k * j) % n);
            let (wr, wi) = (angle.cos_value(), angle.sin_value());
            acc_re = acc_re + re[j] * wr - im[j] * wi;
            acc_im = acc_im + re[j] * wi + im[j] * wr;
        }
        out_re[k] = acc_re;
        out_im[k] = acc_im;
    }

    re.copy_from_slice(&out_re);
    im.copy_from_slice(&out_im);
}

/// Transforms one sequence in place. Length 1 is the identity; length 0 is
/// the caller's contract violation and never reaches here.
pub(crate) fn transform<T: Float>(re: &mut [T], im: &mut [T], inverse: bool) {
    let n = re.len();
    debug_assert_eq!(n, im.len());
    debug_assert!(n > 0);

    if n > 1 {
        if n.is_power_of_two() {
            radix2(re, im, inverse);
        } else {
            naive_dft(re, im, inverse);
        }
    }

    if inverse {
        let scale = T::ONE / T::from_usize(n);
        for v in re.iter_mut() {
            *v = *v * scale;
        }
        for v in im.iter_mut() {
            *v = *v * scale;
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
