use crate::accum::{check_deci_point, rescale};
use crate::dtype::Element;
use crate::error::{KernelError, Result};
use crate::isa::Isa;

/// An element type with a dot-product kernel on every [`Isa`].
pub trait DotElement: Element {
    /// Dot product accumulated in 32 bits, wrapping on overflow.
    fn dot<I: Isa>(a: &[Self], b: &[Self]) -> i32;
}

impl DotElement for i8 {
    #[inline(always)]
    fn dot<I: Isa>(a: &[i8], b: &[i8]) -> i32 {
        I::dot_i8(a, b)
    }
}

impl DotElement for i16 {
    #[inline(always)]
    fn dot<I: Isa>(a: &[i16], b: &[i16]) -> i32 {
        I::dot_i16(a, b)
    }
}

impl DotElement for i32 {
    #[inline(always)]
    fn dot<I: Isa>(a: &[i32], b: &[i32]) -> i32 {
        I::dot_i32(a, b)
    }
}

/// `sum(a[i] * b[i])` for `i` in `0..a.len()`.
///
/// Both vectors must have the same length (debug-checked).
#[inline]
pub fn dot_prod<I: Isa, T: DotElement>(a: &[T], b: &[T]) -> i32 {
    debug_assert_eq!(a.len(), b.len(), "dot product of unequal vectors");
    T::dot::<I>(a, b)
}

/// Fixed-point dot product: the full sum shifted right by `deci_point`.
///
/// Partial sums are never shifted, so the packed and scalar kernels agree.
#[inline]
pub fn dot_prod_q<I: Isa, T: DotElement>(a: &[T], b: &[T], deci_point: u32) -> i32 {
    rescale(dot_prod::<I, T>(a, b), deci_point)
}

fn check_lengths<T>(a: &[T], b: &[T]) -> Result<()> {
    if a.len() != b.len() {
        return Err(KernelError::LengthMismatch {
            a: a.len(),
            b: b.len(),
        });
    }
    Ok(())
}

/// [`dot_prod`] with its preconditions checked.
pub fn try_dot_prod<I: Isa, T: DotElement>(a: &[T], b: &[T]) -> Result<i32> {
    check_lengths(a, b)?;
    Ok(dot_prod::<I, T>(a, b))
}

/// [`dot_prod_q`] with its preconditions checked.
pub fn try_dot_prod_q<I: Isa, T: DotElement>(a: &[T], b: &[T], deci_point: u32) -> Result<i32> {
    check_lengths(a, b)?;
    check_deci_point(deci_point)?;
    Ok(dot_prod_q::<I, T>(a, b, deci_point))
}
