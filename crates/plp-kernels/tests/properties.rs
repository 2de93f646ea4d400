use plp_kernels::dispatch;
use plp_kernels::kernels::{dot_prod, dot_prod_q, mat_sub_stride};
use plp_kernels::{
    assigned_rows, CoreKind, Environment, HostEnvironment, MatView, MatViewMut, Rv32im, Worker,
    XpulpV2,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

#[test]
fn test_partition_covers_rows_once() {
    for total in [0usize, 1, 2, 7, 16, 33] {
        for count in 1..=9 {
            let mut rows: Vec<usize> = (0..count)
                .flat_map(|id| assigned_rows(total, count, id))
                .collect();
            rows.sort_unstable();
            assert_eq!(rows, (0..total).collect::<Vec<_>>());
        }
    }
}

#[test]
fn test_transpose_multiply_example() {
    let host = HostEnvironment::with_cores(1);
    let a = [1i8, 2, 3, 4];
    let b = [5i8, 6, 7, 8];
    let mut c = [0i32; 4];
    dispatch::mat_mult_trans_stride(
        &host,
        &MatView::contiguous(&a, 2, 2),
        &MatView::contiguous(&b, 2, 2),
        MatViewMut::contiguous(&mut c, 2, 2),
    );
    assert_eq!(c, [17, 23, 39, 53]);
}

#[test]
fn test_complex_multiply_example() {
    let cluster = Worker::single();
    assert_eq!(cluster.core_kind(), CoreKind::Cluster);
    let a = [1i32, 2];
    let b = [3i32, 4];
    let mut c = [0i32; 2];
    dispatch::mat_mult_cmplx_stride(
        &cluster,
        &MatView::complex(&a, 1, 1, 1),
        &MatView::complex(&b, 1, 1, 1),
        MatViewMut::complex(&mut c, 1, 1, 1),
    );
    assert_eq!(c, [-5, 10]);
}

#[test]
fn test_subtraction_antisymmetry() {
    let mut rng = StdRng::seed_from_u64(42);
    let (m, n) = (6, 9);
    let a: Vec<i16> = (0..m * n).map(|_| rng.gen()).collect();
    let b: Vec<i16> = (0..m * n).map(|_| rng.gen()).collect();
    let mut ab = vec![0i16; m * n];
    let mut ba = vec![0i16; m * n];
    mat_sub_stride(
        &MatView::contiguous(&a, m, n),
        &MatView::contiguous(&b, m, n),
        MatViewMut::contiguous(&mut ab, m, n),
    );
    mat_sub_stride(
        &MatView::contiguous(&b, m, n),
        &MatView::contiguous(&a, m, n),
        MatViewMut::contiguous(&mut ba, m, n),
    );
    for (x, y) in ab.iter().zip(&ba) {
        assert_eq!(*x, y.wrapping_neg());
    }
}

#[test]
fn test_fixed_point_rescale_example() {
    let host = HostEnvironment::with_cores(1);
    assert_eq!(dispatch::dot_prod_q(&host, &[4i32, 4], &[1, 1], 0), 8);
    assert_eq!(dispatch::dot_prod_q(&host, &[4i32, 4], &[1, 1], 2), 2);
    assert_eq!(dispatch::dot_prod_q(&host, &[4i16, 4], &[1, 1], 2), 2);
    assert_eq!(dispatch::dot_prod_q(&host, &[4i8, 4], &[1, 1], 2), 2);
}

#[test]
fn test_packed_matches_scalar_randomized() {
    let mut rng = StdRng::seed_from_u64(2024);
    for _ in 0..200 {
        let len = rng.gen_range(0..70);
        let a8: Vec<i8> = (0..len).map(|_| rng.gen()).collect();
        let b8: Vec<i8> = (0..len).map(|_| rng.gen()).collect();
        let a16: Vec<i16> = (0..len).map(|_| rng.gen()).collect();
        let b16: Vec<i16> = (0..len).map(|_| rng.gen()).collect();
        let deci = rng.gen_range(0..16);

        assert_eq!(
            dot_prod::<XpulpV2, i8>(&a8, &b8),
            dot_prod::<Rv32im, i8>(&a8, &b8),
            "i8 len={}",
            len
        );
        assert_eq!(
            dot_prod::<XpulpV2, i16>(&a16, &b16),
            dot_prod::<Rv32im, i16>(&a16, &b16),
            "i16 len={}",
            len
        );
        assert_eq!(
            dot_prod_q::<XpulpV2, i16>(&a16, &b16, deci),
            dot_prod_q::<Rv32im, i16>(&a16, &b16, deci)
        );
    }
}

#[test]
fn test_dot_prod_reference_sum() {
    let mut rng = StdRng::seed_from_u64(5);
    let a: Vec<i8> = (0..101).map(|_| rng.gen()).collect();
    let b: Vec<i8> = (0..101).map(|_| rng.gen()).collect();
    let expected: i32 = a.iter().zip(&b).map(|(&x, &y)| x as i32 * y as i32).sum();
    let host = HostEnvironment::detect();
    assert_eq!(dispatch::dot_prod(&host, &a, &b), expected);
    assert_eq!(dispatch::dot_prod(&Worker::new(1, 2), &a, &b), expected);
}
