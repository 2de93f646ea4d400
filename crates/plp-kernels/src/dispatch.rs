//! Glue entry points.
//!
//! Each function picks the kernel for the caller's [`CoreKind`] and
//! forwards to it unchanged. The choice is a `match` over a `Copy` enum
//! selecting between monomorphized kernels, so it inlines to a single
//! branch. Operations with one implementation take the environment anyway,
//! keeping every glue function's signature the same shape.
//!
//! The `*_parallel` variants consume a job descriptor, split the output
//! rows over `n_pe` cluster workers and return once all of them finish.
//! Splitting the destination allocates one small list of row handles per
//! worker; the kernels themselves never allocate. A multiplication job
//! must have been built for the product the glue computes, which is
//! checked once per call.

use crate::dtype::Element;
use crate::isa::{ClusterIsa, CoreKind, Environment, FabricIsa};
use crate::job::{MatMultJob, MatSubJob, MultLayout};
use crate::kernels::{self, owned_rows, DotElement};
use crate::parallel::fork;
use crate::view::{MatView, MatViewMut};

/// Dot product of two equally long vectors.
#[inline(always)]
pub fn dot_prod<E, T>(env: &E, a: &[T], b: &[T]) -> i32
where
    E: Environment + ?Sized,
    T: DotElement,
{
    match env.core_kind() {
        CoreKind::FabricController => kernels::dot_prod::<FabricIsa, T>(a, b),
        CoreKind::Cluster => kernels::dot_prod::<ClusterIsa, T>(a, b),
    }
}

/// Fixed-point dot product, rescaled by `deci_point` after accumulation.
#[inline(always)]
pub fn dot_prod_q<E, T>(env: &E, a: &[T], b: &[T], deci_point: u32) -> i32
where
    E: Environment + ?Sized,
    T: DotElement,
{
    match env.core_kind() {
        CoreKind::FabricController => kernels::dot_prod_q::<FabricIsa, T>(a, b, deci_point),
        CoreKind::Cluster => kernels::dot_prod_q::<ClusterIsa, T>(a, b, deci_point),
    }
}

#[inline(always)]
pub fn mat_mult_stride<E, T>(
    _env: &E,
    a: &MatView<'_, T>,
    b: &MatView<'_, T>,
    c: MatViewMut<'_, i32>,
) where
    E: Environment + ?Sized,
    T: Element,
{
    kernels::mat_mult_stride(a, b, c)
}

#[inline(always)]
pub fn mat_mult_trans_stride<E, T>(
    env: &E,
    a: &MatView<'_, T>,
    b: &MatView<'_, T>,
    c: MatViewMut<'_, i32>,
) where
    E: Environment + ?Sized,
    T: DotElement,
{
    match env.core_kind() {
        CoreKind::FabricController => kernels::mat_mult_trans_stride::<FabricIsa, T>(a, b, c),
        CoreKind::Cluster => kernels::mat_mult_trans_stride::<ClusterIsa, T>(a, b, c),
    }
}

#[inline(always)]
pub fn mat_mult_cmplx_stride<E, T>(
    _env: &E,
    a: &MatView<'_, T>,
    b: &MatView<'_, T>,
    c: MatViewMut<'_, i32>,
) where
    E: Environment + ?Sized,
    T: Element,
{
    kernels::mat_mult_cmplx_stride(a, b, c)
}

#[inline(always)]
pub fn mat_mult_trans_cmplx_stride<E, T>(
    _env: &E,
    a: &MatView<'_, T>,
    b: &MatView<'_, T>,
    c: MatViewMut<'_, i32>,
) where
    E: Environment + ?Sized,
    T: Element,
{
    kernels::mat_mult_trans_cmplx_stride(a, b, c)
}

#[inline(always)]
pub fn mat_sub_stride<E, T>(
    _env: &E,
    a: &MatView<'_, T>,
    b: &MatView<'_, T>,
    y: MatViewMut<'_, T>,
) where
    E: Environment + ?Sized,
    T: Element,
{
    kernels::mat_sub_stride(a, b, y)
}

/// Check that a job was built for the product a parallel glue computes.
///
/// The shapes of a job are validated against its layout, so running it
/// as another product would read outside the operands.
fn expect_job<T: Element>(job: &MatMultJob<'_, T>, layout: MultLayout, complex: bool) {
    assert_eq!(job.layout, layout, "job built for another product");
    assert_eq!(job.a.is_complex(), complex, "job element kind differs");
}

pub fn mat_mult_stride_parallel<T: Element>(job: MatMultJob<'_, T>) {
    expect_job(&job, MultLayout::Plain, false);
    let MatMultJob { a, b, c, n_pe, .. } = job;
    let m = a.rows();
    log::trace!("mat_mult_stride_parallel: {:?} x {:?} on {} workers", a, b, n_pe);
    fork(c.split_cyclic(n_pe), |worker, set| {
        kernels::mat_mult_rows(&a, &b, owned_rows(&worker, m, set));
    });
}

pub fn mat_mult_trans_stride_parallel<T: DotElement>(job: MatMultJob<'_, T>) {
    expect_job(&job, MultLayout::Transposed, false);
    let MatMultJob { a, b, c, n_pe, .. } = job;
    let m = a.rows();
    log::trace!("mat_mult_trans_stride_parallel: {:?} x {:?} on {} workers", a, b, n_pe);
    fork(c.split_cyclic(n_pe), |worker, set| {
        let rows = owned_rows(&worker, m, set);
        kernels::mat_mult_trans_rows::<ClusterIsa, T>(&a, &b, rows);
    });
}

pub fn mat_mult_cmplx_stride_parallel<T: Element>(job: MatMultJob<'_, T>) {
    expect_job(&job, MultLayout::Plain, true);
    let MatMultJob { a, b, c, n_pe, .. } = job;
    let m = a.rows();
    log::trace!("mat_mult_cmplx_stride_parallel: {:?} x {:?} on {} workers", a, b, n_pe);
    fork(c.split_cyclic(n_pe), |worker, set| {
        kernels::mat_mult_cmplx_rows(&a, &b, owned_rows(&worker, m, set));
    });
}

pub fn mat_mult_trans_cmplx_stride_parallel<T: Element>(job: MatMultJob<'_, T>) {
    expect_job(&job, MultLayout::Transposed, true);
    let MatMultJob { a, b, c, n_pe, .. } = job;
    let m = a.rows();
    log::trace!(
        "mat_mult_trans_cmplx_stride_parallel: {:?} x {:?} on {} workers",
        a,
        b,
        n_pe
    );
    fork(c.split_cyclic(n_pe), |worker, set| {
        kernels::mat_mult_trans_cmplx_rows(&a, &b, owned_rows(&worker, m, set));
    });
}

pub fn mat_sub_stride_parallel<T: Element>(job: MatSubJob<'_, T>) {
    let MatSubJob { a, b, y, n_pe } = job;
    let m = a.rows();
    log::trace!("mat_sub_stride_parallel: {:?} - {:?} on {} workers", a, b, n_pe);
    fork(y.split_cyclic(n_pe), |worker, set| {
        kernels::mat_sub_rows(&a, &b, owned_rows(&worker, m, set));
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::isa::HostEnvironment;
    use crate::partition::Worker;

    #[test]
    fn test_dot_prod_both_contexts() {
        let a = [1i16, 2, 3, 4, 5];
        let b = [5i16, 4, 3, 2, 1];
        let host = HostEnvironment::with_cores(1);
        let cluster = Worker::new(0, 1);
        assert_eq!(dot_prod(&host, &a, &b), 35);
        assert_eq!(dot_prod(&cluster, &a, &b), 35);
    }

    #[test]
    fn test_dot_prod_q() {
        let host = HostEnvironment::with_cores(1);
        assert_eq!(dot_prod_q(&host, &[4i8, 4], &[1, 1], 0), 8);
        assert_eq!(dot_prod_q(&host, &[4i8, 4], &[1, 1], 2), 2);
    }

    #[test]
    fn test_parallel_trans_matches_single() {
        let a: Vec<i16> = (0..35).map(|v| v * 3 - 50).collect();
        let b: Vec<i16> = (0..21).map(|v| 7 - v).collect();
        let host = HostEnvironment::with_cores(1);

        let mut single = vec![0i32; 5 * 3];
        mat_mult_trans_stride(
            &host,
            &MatView::contiguous(&a, 5, 7),
            &MatView::contiguous(&b, 3, 7),
            MatViewMut::contiguous(&mut single, 5, 3),
        );

        let mut par = vec![0i32; 5 * 3];
        mat_mult_trans_stride_parallel(MatMultJob::new(
            MultLayout::Transposed,
            MatView::contiguous(&a, 5, 7),
            MatView::contiguous(&b, 3, 7),
            MatViewMut::contiguous(&mut par, 5, 3),
            3,
        ));
        assert_eq!(single, par);
    }

    #[test]
    fn test_parallel_sub() {
        let a = [9i32, 8, 7, 6, 5, 4];
        let b = [1i32, 1, 1, 1, 1, 1];
        let mut y = [0i32; 6];
        mat_sub_stride_parallel(MatSubJob::new(
            MatView::contiguous(&a, 3, 2),
            MatView::contiguous(&b, 3, 2),
            MatViewMut::contiguous(&mut y, 3, 2),
            2,
        ));
        assert_eq!(y, [8, 7, 6, 5, 4, 3]);
    }

    #[test]
    #[should_panic(expected = "job built for another product")]
    fn test_transposed_job_rejected_by_plain_glue() {
        let a = [1i32, 2, 3, 4];
        let b = [5i32, 6, 7, 8];
        let mut c = [0i32; 4];
        let job = MatMultJob::try_new(
            MultLayout::Transposed,
            MatView::contiguous(&a, 2, 2),
            MatView::contiguous(&b, 2, 2),
            MatViewMut::contiguous(&mut c, 2, 2),
            2,
        )
        .unwrap();
        mat_mult_stride_parallel(job);
    }

    #[test]
    #[should_panic(expected = "job built for another product")]
    fn test_plain_job_rejected_by_trans_glue() {
        let a = [1i8, 2];
        let b = [3i8, 4];
        let mut c = [0i32; 2];
        // 1x1 times 1x2 plain; read transposed it would run past B.
        mat_mult_trans_stride_parallel(MatMultJob::new(
            MultLayout::Plain,
            MatView::contiguous(&a[..1], 1, 1),
            MatView::contiguous(&b, 1, 2),
            MatViewMut::contiguous(&mut c, 1, 2),
            1,
        ));
    }

    #[test]
    #[should_panic(expected = "job element kind differs")]
    fn test_real_job_rejected_by_cmplx_glue() {
        let a = [1i16, 2, 3, 4];
        let mut c = [0i32; 4];
        mat_mult_cmplx_stride_parallel(MatMultJob::new(
            MultLayout::Plain,
            MatView::contiguous(&a, 2, 2),
            MatView::contiguous(&a, 2, 2),
            MatViewMut::contiguous(&mut c, 2, 2),
            2,
        ));
    }

    #[test]
    fn test_matching_job_runs() {
        let a = [1i32, 2, 3, 4];
        let b = [5i32, 6, 7, 8];
        let mut c = [0i32; 4];
        mat_mult_trans_stride_parallel(
            MatMultJob::try_new(
                MultLayout::Transposed,
                MatView::contiguous(&a, 2, 2),
                MatView::contiguous(&b, 2, 2),
                MatViewMut::contiguous(&mut c, 2, 2),
                2,
            )
            .unwrap(),
        );
        assert_eq!(c, [17, 23, 39, 53]);
    }

    #[test]
    fn test_job_sized_from_environment() {
        let a: Vec<i32> = (0..12).collect();
        let b = [1i32, 0, 0, 1];
        let mut c = vec![0i32; 12];
        let host = HostEnvironment::with_cores(4);
        let job = MatMultJob::sized_for(
            &host,
            MultLayout::Plain,
            MatView::contiguous(&a, 6, 2),
            MatView::contiguous(&b, 2, 2),
            MatViewMut::contiguous(&mut c, 6, 2),
        );
        assert_eq!(job.n_pe, 4);
        mat_mult_stride_parallel(job);
        assert_eq!(c, a);
    }
}
