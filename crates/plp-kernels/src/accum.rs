//! Accumulation rules shared by the multiply and dot-product kernels.
//!
//! Products are summed in [`Element::Wide`] with wrapping arithmetic, so the
//! order in which partial sums are combined never changes the result. That
//! is what lets packed kernels and any worker count reproduce the scalar
//! single-core output bit for bit.

use num_complex::Complex;

use crate::dtype::Element;
use crate::error::{KernelError, Result};

/// Width of the accumulator fixed-point results are rescaled from.
pub const FIXED_ACC_BITS: u32 = 32;

/// Widening multiply-accumulate over two equally long slices.
#[inline]
pub fn dot_wide<T: Element>(a: &[T], b: &[T]) -> T::Wide {
    debug_assert_eq!(a.len(), b.len());
    a.iter()
        .zip(b)
        .fold(T::Wide::default(), |acc, (&x, &y)| T::mac(acc, x, y))
}

/// Complex multiply-accumulate into two independent wide accumulators.
///
/// `re += a.re * b.re - a.im * b.im`, `im += a.re * b.im + a.im * b.re`.
#[inline(always)]
pub fn cmac<T: Element>(acc: Complex<T::Wide>, a: Complex<T>, b: Complex<T>) -> Complex<T::Wide> {
    let (a_re, a_im) = (a.re.widen(), a.im.widen());
    let (b_re, b_im) = (b.re.widen(), b.im.widen());
    let re = T::wide_sub(T::wide_mul(a_re, b_re), T::wide_mul(a_im, b_im));
    let im = T::wide_add(T::wide_mul(a_re, b_im), T::wide_mul(a_im, b_re));
    Complex::new(T::wide_add(acc.re, re), T::wide_add(acc.im, im))
}

/// Complex dot product over interleaved `(re, im)` slices.
#[inline]
pub fn cdot_wide<T: Element>(a: &[T], b: &[T]) -> Complex<T::Wide> {
    debug_assert_eq!(a.len(), b.len());
    debug_assert_eq!(a.len() % 2, 0);
    a.chunks_exact(2)
        .zip(b.chunks_exact(2))
        .fold(Complex::new(T::Wide::default(), T::Wide::default()), |acc, (x, y)| {
            cmac::<T>(acc, Complex::new(x[0], x[1]), Complex::new(y[0], y[1]))
        })
}

/// Store a wide complex accumulator as an interleaved 32-bit pair.
#[inline(always)]
pub fn store_complex<T: Element>(dst: &mut [i32], acc: Complex<T::Wide>) {
    dst[0] = T::narrow(acc.re);
    dst[1] = T::narrow(acc.im);
}

/// Rescale a Q-format accumulator by `deci_point` fractional bits.
///
/// Arithmetic shift: negative sums round toward negative infinity.
#[inline(always)]
pub fn rescale(acc: i32, deci_point: u32) -> i32 {
    debug_assert!(
        deci_point < FIXED_ACC_BITS,
        "deci_point {} exceeds the accumulator width",
        deci_point
    );
    acc >> deci_point
}

/// Reject a decimal point the 32-bit accumulator cannot shift by.
pub fn check_deci_point(deci_point: u32) -> Result<()> {
    if deci_point >= FIXED_ACC_BITS {
        return Err(KernelError::DeciPointOutOfRange {
            deci_point,
            max: FIXED_ACC_BITS,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_complex_product() {
        // (1 + 2i)(3 + 4i) = -5 + 10i
        let acc = cmac::<i16>(Complex::new(0, 0), Complex::new(1, 2), Complex::new(3, 4));
        assert_eq!(acc, Complex::new(-5, 10));
    }

    #[test]
    fn test_complex_dot_accumulates() {
        // (1 + 2i)(3 + 4i) + (0 + 1i)(0 + 1i) = -6 + 10i
        let a = [1i32, 2, 0, 1];
        let b = [3i32, 4, 0, 1];
        assert_eq!(cdot_wide::<i32>(&a, &b), Complex::new(-6i64, 10));
    }

    #[test]
    fn test_complex_i16_extremes_no_overflow() {
        let m = i16::MIN;
        let acc = cmac::<i16>(Complex::new(0, 0), Complex::new(m, 0), Complex::new(m, 0));
        assert_eq!(acc.re, 1 << 30);
    }

    #[test]
    fn test_dot_wide_empty() {
        assert_eq!(dot_wide::<i8>(&[], &[]), 0);
    }

    #[test]
    fn test_rescale() {
        assert_eq!(rescale(8, 0), 8);
        assert_eq!(rescale(8, 2), 2);
        assert_eq!(rescale(-8, 2), -2);
        assert_eq!(rescale(-9, 2), -3);
    }

    #[test]
    fn test_check_deci_point() {
        assert!(check_deci_point(31).is_ok());
        assert_eq!(
            check_deci_point(32),
            Err(KernelError::DeciPointOutOfRange {
                deci_point: 32,
                max: 32
            })
        );
    }
}
