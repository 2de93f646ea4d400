pub mod dot;
pub mod mat_mult;
pub mod mat_sub;

pub use dot::{dot_prod, dot_prod_q, try_dot_prod, try_dot_prod_q, DotElement};
pub use mat_mult::{
    mat_mult_cmplx_rows, mat_mult_cmplx_stride, mat_mult_rows, mat_mult_stride,
    mat_mult_trans_cmplx_rows, mat_mult_trans_cmplx_stride, mat_mult_trans_rows,
    mat_mult_trans_stride,
};
pub use mat_sub::{mat_sub_rows, mat_sub_stride};

use crate::isa::Environment;
use crate::partition::Worker;
use crate::view::WorkerRows;

/// Pair each row index the executing worker is assigned with the
/// destination row it was handed by [`crate::view::MatViewMut::split_cyclic`].
///
/// The worker is identified through the environment queries; the
/// assignment drives the loop and the split only supplies the storage.
pub fn owned_rows<'a, E, T>(
    env: &E,
    total: usize,
    set: WorkerRows<'a, T>,
) -> impl Iterator<Item = (usize, &'a mut [T])>
where
    E: Environment + ?Sized,
{
    let worker = Worker::of(env);
    debug_assert_eq!(worker.id, set.worker, "row set handed to the wrong worker");
    worker
        .rows(total)
        .zip(set.rows)
        .map(|(m, (split_m, row))| {
            debug_assert_eq!(m, split_m, "split and assignment disagree");
            (m, row)
        })
}
