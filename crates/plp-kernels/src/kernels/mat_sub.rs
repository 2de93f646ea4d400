use crate::dtype::Element;
use crate::view::{MatView, MatViewMut};

/// `Y[m, n] = A[m, n] - B[m, n]` for the given output rows.
///
/// The difference is stored in the input width and wraps on overflow,
/// the usual two's complement behavior of fixed-point arithmetic.
pub fn mat_sub_rows<'d, T: Element>(
    a: &MatView<'_, T>,
    b: &MatView<'_, T>,
    rows: impl IntoIterator<Item = (usize, &'d mut [T])>,
) {
    for (m, dst) in rows {
        for ((y, &x), &z) in dst.iter_mut().zip(a.row(m)).zip(b.row(m)) {
            *y = x.wrapping_sub(z);
        }
    }
}

/// Single-core strided `Y = A - B`.
pub fn mat_sub_stride<T: Element>(a: &MatView<'_, T>, b: &MatView<'_, T>, y: MatViewMut<'_, T>) {
    debug_assert_eq!((a.rows(), a.cols()), (b.rows(), b.cols()), "operand shapes differ");
    debug_assert_eq!((a.rows(), a.cols()), (y.rows(), y.cols()), "output shape differs");
    mat_sub_rows(a, b, y.rows_mut());
}
