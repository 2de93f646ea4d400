//! Strided matrix multiplication, real and complex, plain and transposed.
//!
//! The `*_rows` functions are the engine: they fill whichever output rows
//! they are handed and nothing else, so a single core passes every row and
//! a cluster worker passes only the rows it owns. Results are stored as
//! 32-bit integers regardless of the input width.

use num_complex::Complex;

use super::dot::DotElement;
use crate::accum::{cdot_wide, cmac, store_complex};
use crate::dtype::Element;
use crate::isa::Isa;
use crate::view::{MatView, MatViewMut};

fn debug_check_mult<T: Element>(
    a: &MatView<'_, T>,
    b: &MatView<'_, T>,
    c_rows: usize,
    c_cols: usize,
) {
    debug_assert_eq!(a.cols(), b.rows(), "inner dimensions differ");
    debug_assert_eq!(c_rows, a.rows(), "output row count differs from A");
    debug_assert_eq!(c_cols, b.cols(), "output column count differs from B");
}

fn debug_check_trans<T: Element>(
    a: &MatView<'_, T>,
    b: &MatView<'_, T>,
    c_rows: usize,
    c_cols: usize,
) {
    debug_assert_eq!(a.cols(), b.cols(), "contraction lengths differ");
    debug_assert_eq!(c_rows, a.rows(), "output row count differs from A");
    debug_assert_eq!(c_cols, b.rows(), "output column count differs from B rows");
}

/// `C[m, o] = sum_n A[m, n] * B[n, o]` for the given output rows.
///
/// `A` is `M x N`, `B` is `N x O`, each row of `rows` holds `O` outputs.
pub fn mat_mult_rows<'d, T: Element>(
    a: &MatView<'_, T>,
    b: &MatView<'_, T>,
    rows: impl IntoIterator<Item = (usize, &'d mut [i32])>,
) {
    let n_len = a.cols();
    for (m, dst) in rows {
        for (o, out) in dst.iter_mut().enumerate() {
            let mut sum = T::Wide::default();
            for n in 0..n_len {
                sum = T::mac(sum, a.get(m, n), b.get(n, o));
            }
            *out = T::narrow(sum);
        }
    }
}

/// `C[m, o] = sum_n A[m, n] * B[o, n]` for the given output rows.
///
/// `B` is stored `O x N`: its rows are the columns of the product, so both
/// operands are read along contiguous rows and the inner loop is the ISA's
/// dot-product kernel.
pub fn mat_mult_trans_rows<'d, I: Isa, T: DotElement>(
    a: &MatView<'_, T>,
    b: &MatView<'_, T>,
    rows: impl IntoIterator<Item = (usize, &'d mut [i32])>,
) {
    for (m, dst) in rows {
        let a_row = a.row(m);
        for (o, out) in dst.iter_mut().enumerate() {
            *out = T::dot::<I>(a_row, b.row(o));
        }
    }
}

/// Complex `C = A * B` over interleaved storage; each output row holds
/// `2 * O` values.
pub fn mat_mult_cmplx_rows<'d, T: Element>(
    a: &MatView<'_, T>,
    b: &MatView<'_, T>,
    rows: impl IntoIterator<Item = (usize, &'d mut [i32])>,
) {
    let n_len = a.cols();
    for (m, dst) in rows {
        for (o, out) in dst.chunks_exact_mut(2).enumerate() {
            let mut sum = Complex::new(T::Wide::default(), T::Wide::default());
            for n in 0..n_len {
                sum = cmac::<T>(sum, a.get_complex(m, n), b.get_complex(n, o));
            }
            store_complex::<T>(out, sum);
        }
    }
}

/// Complex `C[m, o] = sum_n A[m, n] * B[o, n]`, no conjugation.
pub fn mat_mult_trans_cmplx_rows<'d, T: Element>(
    a: &MatView<'_, T>,
    b: &MatView<'_, T>,
    rows: impl IntoIterator<Item = (usize, &'d mut [i32])>,
) {
    for (m, dst) in rows {
        let a_row = a.row(m);
        for (o, out) in dst.chunks_exact_mut(2).enumerate() {
            store_complex::<T>(out, cdot_wide::<T>(a_row, b.row(o)));
        }
    }
}

/// Single-core strided `C = A * B`.
pub fn mat_mult_stride<T: Element>(a: &MatView<'_, T>, b: &MatView<'_, T>, c: MatViewMut<'_, i32>) {
    debug_check_mult(a, b, c.rows(), c.cols());
    mat_mult_rows(a, b, c.rows_mut());
}

/// Single-core strided `C = A * B^T` with `B` stored `O x N`.
pub fn mat_mult_trans_stride<I: Isa, T: DotElement>(
    a: &MatView<'_, T>,
    b: &MatView<'_, T>,
    c: MatViewMut<'_, i32>,
) {
    debug_check_trans(a, b, c.rows(), c.cols());
    mat_mult_trans_rows::<I, T>(a, b, c.rows_mut());
}

/// Single-core strided complex `C = A * B`.
pub fn mat_mult_cmplx_stride<T: Element>(
    a: &MatView<'_, T>,
    b: &MatView<'_, T>,
    c: MatViewMut<'_, i32>,
) {
    debug_assert!(a.is_complex() && b.is_complex() && c.is_complex());
    debug_check_mult(a, b, c.rows(), c.cols());
    mat_mult_cmplx_rows(a, b, c.rows_mut());
}

/// Single-core strided complex `C = A * B^T` with `B` stored `O x N`.
pub fn mat_mult_trans_cmplx_stride<T: Element>(
    a: &MatView<'_, T>,
    b: &MatView<'_, T>,
    c: MatViewMut<'_, i32>,
) {
    debug_assert!(a.is_complex() && b.is_complex() && c.is_complex());
    debug_check_trans(a, b, c.rows(), c.cols());
    mat_mult_trans_cmplx_rows(a, b, c.rows_mut());
}
