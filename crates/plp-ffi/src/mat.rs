//! `plp_mat_*_stride_*`: strided matrix glue, parallel glue and the
//! per-worker cluster kernels.
//!
//! A `*p_xpulpv2` kernel is what each cluster core runs during a fan-out.
//! It reads the shared instance struct and writes only the output rows of
//! `core_id`, so one call per core id covers the whole output.

use plp_kernels::dispatch;
use plp_kernels::kernels::{self, DotElement};
use plp_kernels::{Element, MatMultJob, MatSubJob, MatView, MultLayout, Worker, XpulpV2};

use crate::raw::{dst_view, src_view, worker_rows, COMPLEX, REAL};
use crate::types::*;
use crate::HOST;

#[derive(Debug, Clone, Copy)]
enum Product {
    Mult,
    MultTrans,
    MultCmplx,
    MultTransCmplx,
}

impl Product {
    fn layout(self) -> MultLayout {
        match self {
            Product::Mult | Product::MultCmplx => MultLayout::Plain,
            Product::MultTrans | Product::MultTransCmplx => MultLayout::Transposed,
        }
    }

    fn lanes(self) -> usize {
        match self {
            Product::Mult | Product::MultTrans => REAL,
            Product::MultCmplx | Product::MultTransCmplx => COMPLEX,
        }
    }
}

/// A and B as `args` describes them; B is `N x O`, or `O x N` when
/// transposed.
unsafe fn mult_operands<'a, T: Element>(
    product: Product,
    args: &PlpMatMultStrideInstance<T>,
) -> (MatView<'a, T>, MatView<'a, T>) {
    let (b_rows, b_cols) = match product.layout() {
        MultLayout::Plain => (args.n, args.o),
        MultLayout::Transposed => (args.o, args.n),
    };
    let lanes = product.lanes();
    let a = src_view(args.p_src_a, args.m, args.n, args.stride_a, lanes);
    let b = src_view(args.p_src_b, b_rows, b_cols, args.stride_b, lanes);
    (a, b)
}

unsafe fn mult_glue<T: DotElement>(product: Product, args: PlpMatMultStrideInstance<T>) {
    let (a, b) = mult_operands(product, &args);
    let c = dst_view(args.p_dst_c, args.m, args.o, args.stride_c, product.lanes());
    match product {
        Product::Mult => dispatch::mat_mult_stride(&HOST, &a, &b, c),
        Product::MultTrans => dispatch::mat_mult_trans_stride(&HOST, &a, &b, c),
        Product::MultCmplx => dispatch::mat_mult_cmplx_stride(&HOST, &a, &b, c),
        Product::MultTransCmplx => dispatch::mat_mult_trans_cmplx_stride(&HOST, &a, &b, c),
    }
}

unsafe fn mult_parallel<T: DotElement>(product: Product, args: PlpMatMultStrideInstance<T>) {
    log::trace!(
        "{:?} {}x{}x{} on {} cores",
        product,
        args.m,
        args.n,
        args.o,
        args.n_pe
    );
    let (a, b) = mult_operands(product, &args);
    let c = dst_view(args.p_dst_c, args.m, args.o, args.stride_c, product.lanes());
    let job = MatMultJob::new(product.layout(), a, b, c, args.n_pe as usize);
    match product {
        Product::Mult => dispatch::mat_mult_stride_parallel(job),
        Product::MultTrans => dispatch::mat_mult_trans_stride_parallel(job),
        Product::MultCmplx => dispatch::mat_mult_cmplx_stride_parallel(job),
        Product::MultTransCmplx => dispatch::mat_mult_trans_cmplx_stride_parallel(job),
    }
}

unsafe fn mult_worker<T: DotElement>(
    product: Product,
    args: *const PlpMatMultStrideInstance<T>,
    core_id: u32,
) {
    debug_assert!(!args.is_null(), "null instance");
    let args = &*args;
    let (a, b) = mult_operands(product, args);
    let worker = Worker::new(core_id as usize, args.n_pe as usize);
    let rows = worker_rows(args.p_dst_c, worker, args.m, args.o, args.stride_c, product.lanes());
    match product {
        Product::Mult => kernels::mat_mult_rows(&a, &b, rows),
        Product::MultTrans => kernels::mat_mult_trans_rows::<XpulpV2, T>(&a, &b, rows),
        Product::MultCmplx => kernels::mat_mult_cmplx_rows(&a, &b, rows),
        Product::MultTransCmplx => kernels::mat_mult_trans_cmplx_rows(&a, &b, rows),
    }
}

unsafe fn sub_glue<T: Element>(args: PlpMatSubStrideInstance<T>) {
    let a = src_view(args.p_src_a, args.m, args.n, args.stride_a, REAL);
    let b = src_view(args.p_src_b, args.m, args.n, args.stride_b, REAL);
    let y = dst_view(args.p_dst, args.m, args.n, args.stride_y, REAL);
    dispatch::mat_sub_stride(&HOST, &a, &b, y);
}

unsafe fn sub_parallel<T: Element>(args: PlpMatSubStrideInstance<T>) {
    log::trace!("Sub {}x{} on {} cores", args.m, args.n, args.n_pe);
    let a = src_view(args.p_src_a, args.m, args.n, args.stride_a, REAL);
    let b = src_view(args.p_src_b, args.m, args.n, args.stride_b, REAL);
    let y = dst_view(args.p_dst, args.m, args.n, args.stride_y, REAL);
    dispatch::mat_sub_stride_parallel(MatSubJob::new(a, b, y, args.n_pe as usize));
}

unsafe fn sub_worker<T: Element>(args: *const PlpMatSubStrideInstance<T>, core_id: u32) {
    debug_assert!(!args.is_null(), "null instance");
    let args = &*args;
    let a = src_view(args.p_src_a, args.m, args.n, args.stride_a, REAL);
    let b = src_view(args.p_src_b, args.m, args.n, args.stride_b, REAL);
    let worker = Worker::new(core_id as usize, args.n_pe as usize);
    let rows = worker_rows(args.p_dst, worker, args.m, args.n, args.stride_y, REAL);
    kernels::mat_sub_rows(&a, &b, rows);
}

/// Strided `C = A * B`, run as the fabric controller.
#[no_mangle]
#[allow(clippy::too_many_arguments)]
pub unsafe extern "C" fn plp_mat_mult_stride_i32(
    p_src_a: *const i32,
    p_src_b: *const i32,
    m: u32,
    n: u32,
    o: u32,
    stride_a: u32,
    stride_b: u32,
    stride_c: u32,
    p_dst_c: *mut i32,
) {
    let args = PlpMatMultStrideInstance {
        p_src_a,
        p_src_b,
        m,
        n,
        o,
        stride_a,
        stride_b,
        stride_c,
        n_pe: 1,
        p_dst_c,
    };
    mult_glue(Product::Mult, args);
}

/// Strided `C = A * B` on `n_pe` cluster cores.
#[no_mangle]
#[allow(clippy::too_many_arguments)]
pub unsafe extern "C" fn plp_mat_mult_stride_i32_parallel(
    p_src_a: *const i32,
    p_src_b: *const i32,
    m: u32,
    n: u32,
    o: u32,
    stride_a: u32,
    stride_b: u32,
    stride_c: u32,
    n_pe: u32,
    p_dst_c: *mut i32,
) {
    let args = PlpMatMultStrideInstance {
        p_src_a,
        p_src_b,
        m,
        n,
        o,
        stride_a,
        stride_b,
        stride_c,
        n_pe,
        p_dst_c,
    };
    mult_parallel(Product::Mult, args);
}

/// Cluster kernel for worker `core_id` of a fan-out.
#[no_mangle]
pub unsafe extern "C" fn plp_mat_mult_stride_i32p_xpulpv2(
    args: *const PlpMatMultStrideInstanceI32,
    core_id: u32,
) {
    mult_worker(Product::Mult, args, core_id);
}

/// Strided `C = A * B`, run as the fabric controller.
#[no_mangle]
#[allow(clippy::too_many_arguments)]
pub unsafe extern "C" fn plp_mat_mult_stride_i16(
    p_src_a: *const i16,
    p_src_b: *const i16,
    m: u32,
    n: u32,
    o: u32,
    stride_a: u32,
    stride_b: u32,
    stride_c: u32,
    p_dst_c: *mut i32,
) {
    let args = PlpMatMultStrideInstance {
        p_src_a,
        p_src_b,
        m,
        n,
        o,
        stride_a,
        stride_b,
        stride_c,
        n_pe: 1,
        p_dst_c,
    };
    mult_glue(Product::Mult, args);
}

/// Strided `C = A * B` on `n_pe` cluster cores.
#[no_mangle]
#[allow(clippy::too_many_arguments)]
pub unsafe extern "C" fn plp_mat_mult_stride_i16_parallel(
    p_src_a: *const i16,
    p_src_b: *const i16,
    m: u32,
    n: u32,
    o: u32,
    stride_a: u32,
    stride_b: u32,
    stride_c: u32,
    n_pe: u32,
    p_dst_c: *mut i32,
) {
    let args = PlpMatMultStrideInstance {
        p_src_a,
        p_src_b,
        m,
        n,
        o,
        stride_a,
        stride_b,
        stride_c,
        n_pe,
        p_dst_c,
    };
    mult_parallel(Product::Mult, args);
}

/// Cluster kernel for worker `core_id` of a fan-out.
#[no_mangle]
pub unsafe extern "C" fn plp_mat_mult_stride_i16p_xpulpv2(
    args: *const PlpMatMultStrideInstanceI16,
    core_id: u32,
) {
    mult_worker(Product::Mult, args, core_id);
}

/// Strided `C = A * B`, run as the fabric controller.
#[no_mangle]
#[allow(clippy::too_many_arguments)]
pub unsafe extern "C" fn plp_mat_mult_stride_i8(
    p_src_a: *const i8,
    p_src_b: *const i8,
    m: u32,
    n: u32,
    o: u32,
    stride_a: u32,
    stride_b: u32,
    stride_c: u32,
    p_dst_c: *mut i32,
) {
    let args = PlpMatMultStrideInstance {
        p_src_a,
        p_src_b,
        m,
        n,
        o,
        stride_a,
        stride_b,
        stride_c,
        n_pe: 1,
        p_dst_c,
    };
    mult_glue(Product::Mult, args);
}

/// Strided `C = A * B` on `n_pe` cluster cores.
#[no_mangle]
#[allow(clippy::too_many_arguments)]
pub unsafe extern "C" fn plp_mat_mult_stride_i8_parallel(
    p_src_a: *const i8,
    p_src_b: *const i8,
    m: u32,
    n: u32,
    o: u32,
    stride_a: u32,
    stride_b: u32,
    stride_c: u32,
    n_pe: u32,
    p_dst_c: *mut i32,
) {
    let args = PlpMatMultStrideInstance {
        p_src_a,
        p_src_b,
        m,
        n,
        o,
        stride_a,
        stride_b,
        stride_c,
        n_pe,
        p_dst_c,
    };
    mult_parallel(Product::Mult, args);
}

/// Cluster kernel for worker `core_id` of a fan-out.
#[no_mangle]
pub unsafe extern "C" fn plp_mat_mult_stride_i8p_xpulpv2(
    args: *const PlpMatMultStrideInstanceI8,
    core_id: u32,
) {
    mult_worker(Product::Mult, args, core_id);
}

/// Strided `C = A * B^T`, B stored `O x N`, run as the fabric controller.
#[no_mangle]
#[allow(clippy::too_many_arguments)]
pub unsafe extern "C" fn plp_mat_mult_trans_stride_i32(
    p_src_a: *const i32,
    p_src_b: *const i32,
    m: u32,
    n: u32,
    o: u32,
    stride_a: u32,
    stride_b: u32,
    stride_c: u32,
    p_dst_c: *mut i32,
) {
    let args = PlpMatMultStrideInstance {
        p_src_a,
        p_src_b,
        m,
        n,
        o,
        stride_a,
        stride_b,
        stride_c,
        n_pe: 1,
        p_dst_c,
    };
    mult_glue(Product::MultTrans, args);
}

/// Strided `C = A * B^T`, B stored `O x N` on `n_pe` cluster cores.
#[no_mangle]
#[allow(clippy::too_many_arguments)]
pub unsafe extern "C" fn plp_mat_mult_trans_stride_i32_parallel(
    p_src_a: *const i32,
    p_src_b: *const i32,
    m: u32,
    n: u32,
    o: u32,
    stride_a: u32,
    stride_b: u32,
    stride_c: u32,
    n_pe: u32,
    p_dst_c: *mut i32,
) {
    let args = PlpMatMultStrideInstance {
        p_src_a,
        p_src_b,
        m,
        n,
        o,
        stride_a,
        stride_b,
        stride_c,
        n_pe,
        p_dst_c,
    };
    mult_parallel(Product::MultTrans, args);
}

/// Cluster kernel for worker `core_id` of a fan-out.
#[no_mangle]
pub unsafe extern "C" fn plp_mat_mult_trans_stride_i32p_xpulpv2(
    args: *const PlpMatMultStrideInstanceI32,
    core_id: u32,
) {
    mult_worker(Product::MultTrans, args, core_id);
}

/// Strided `C = A * B^T`, B stored `O x N`, run as the fabric controller.
#[no_mangle]
#[allow(clippy::too_many_arguments)]
pub unsafe extern "C" fn plp_mat_mult_trans_stride_i16(
    p_src_a: *const i16,
    p_src_b: *const i16,
    m: u32,
    n: u32,
    o: u32,
    stride_a: u32,
    stride_b: u32,
    stride_c: u32,
    p_dst_c: *mut i32,
) {
    let args = PlpMatMultStrideInstance {
        p_src_a,
        p_src_b,
        m,
        n,
        o,
        stride_a,
        stride_b,
        stride_c,
        n_pe: 1,
        p_dst_c,
    };
    mult_glue(Product::MultTrans, args);
}

/// Strided `C = A * B^T`, B stored `O x N` on `n_pe` cluster cores.
#[no_mangle]
#[allow(clippy::too_many_arguments)]
pub unsafe extern "C" fn plp_mat_mult_trans_stride_i16_parallel(
    p_src_a: *const i16,
    p_src_b: *const i16,
    m: u32,
    n: u32,
    o: u32,
    stride_a: u32,
    stride_b: u32,
    stride_c: u32,
    n_pe: u32,
    p_dst_c: *mut i32,
) {
    let args = PlpMatMultStrideInstance {
        p_src_a,
        p_src_b,
        m,
        n,
        o,
        stride_a,
        stride_b,
        stride_c,
        n_pe,
        p_dst_c,
    };
    mult_parallel(Product::MultTrans, args);
}

/// Cluster kernel for worker `core_id` of a fan-out.
#[no_mangle]
pub unsafe extern "C" fn plp_mat_mult_trans_stride_i16p_xpulpv2(
    args: *const PlpMatMultStrideInstanceI16,
    core_id: u32,
) {
    mult_worker(Product::MultTrans, args, core_id);
}

/// Strided `C = A * B^T`, B stored `O x N`, run as the fabric controller.
#[no_mangle]
#[allow(clippy::too_many_arguments)]
pub unsafe extern "C" fn plp_mat_mult_trans_stride_i8(
    p_src_a: *const i8,
    p_src_b: *const i8,
    m: u32,
    n: u32,
    o: u32,
    stride_a: u32,
    stride_b: u32,
    stride_c: u32,
    p_dst_c: *mut i32,
) {
    let args = PlpMatMultStrideInstance {
        p_src_a,
        p_src_b,
        m,
        n,
        o,
        stride_a,
        stride_b,
        stride_c,
        n_pe: 1,
        p_dst_c,
    };
    mult_glue(Product::MultTrans, args);
}

/// Strided `C = A * B^T`, B stored `O x N` on `n_pe` cluster cores.
#[no_mangle]
#[allow(clippy::too_many_arguments)]
pub unsafe extern "C" fn plp_mat_mult_trans_stride_i8_parallel(
    p_src_a: *const i8,
    p_src_b: *const i8,
    m: u32,
    n: u32,
    o: u32,
    stride_a: u32,
    stride_b: u32,
    stride_c: u32,
    n_pe: u32,
    p_dst_c: *mut i32,
) {
    let args = PlpMatMultStrideInstance {
        p_src_a,
        p_src_b,
        m,
        n,
        o,
        stride_a,
        stride_b,
        stride_c,
        n_pe,
        p_dst_c,
    };
    mult_parallel(Product::MultTrans, args);
}

/// Cluster kernel for worker `core_id` of a fan-out.
#[no_mangle]
pub unsafe extern "C" fn plp_mat_mult_trans_stride_i8p_xpulpv2(
    args: *const PlpMatMultStrideInstanceI8,
    core_id: u32,
) {
    mult_worker(Product::MultTrans, args, core_id);
}

/// Strided complex `C = A * B`, run as the fabric controller.
#[no_mangle]
#[allow(clippy::too_many_arguments)]
pub unsafe extern "C" fn plp_mat_mult_cmplx_stride_i32(
    p_src_a: *const i32,
    p_src_b: *const i32,
    m: u32,
    n: u32,
    o: u32,
    stride_a: u32,
    stride_b: u32,
    stride_c: u32,
    p_dst_c: *mut i32,
) {
    let args = PlpMatMultStrideInstance {
        p_src_a,
        p_src_b,
        m,
        n,
        o,
        stride_a,
        stride_b,
        stride_c,
        n_pe: 1,
        p_dst_c,
    };
    mult_glue(Product::MultCmplx, args);
}

/// Strided complex `C = A * B` on `n_pe` cluster cores.
#[no_mangle]
#[allow(clippy::too_many_arguments)]
pub unsafe extern "C" fn plp_mat_mult_cmplx_stride_i32_parallel(
    p_src_a: *const i32,
    p_src_b: *const i32,
    m: u32,
    n: u32,
    o: u32,
    stride_a: u32,
    stride_b: u32,
    stride_c: u32,
    n_pe: u32,
    p_dst_c: *mut i32,
) {
    let args = PlpMatMultStrideInstance {
        p_src_a,
        p_src_b,
        m,
        n,
        o,
        stride_a,
        stride_b,
        stride_c,
        n_pe,
        p_dst_c,
    };
    mult_parallel(Product::MultCmplx, args);
}

/// Cluster kernel for worker `core_id` of a fan-out.
#[no_mangle]
pub unsafe extern "C" fn plp_mat_mult_cmplx_stride_i32p_xpulpv2(
    args: *const PlpMatMultStrideInstanceI32,
    core_id: u32,
) {
    mult_worker(Product::MultCmplx, args, core_id);
}

/// Strided complex `C = A * B`, run as the fabric controller.
#[no_mangle]
#[allow(clippy::too_many_arguments)]
pub unsafe extern "C" fn plp_mat_mult_cmplx_stride_i16(
    p_src_a: *const i16,
    p_src_b: *const i16,
    m: u32,
    n: u32,
    o: u32,
    stride_a: u32,
    stride_b: u32,
    stride_c: u32,
    p_dst_c: *mut i32,
) {
    let args = PlpMatMultStrideInstance {
        p_src_a,
        p_src_b,
        m,
        n,
        o,
        stride_a,
        stride_b,
        stride_c,
        n_pe: 1,
        p_dst_c,
    };
    mult_glue(Product::MultCmplx, args);
}

/// Strided complex `C = A * B` on `n_pe` cluster cores.
#[no_mangle]
#[allow(clippy::too_many_arguments)]
pub unsafe extern "C" fn plp_mat_mult_cmplx_stride_i16_parallel(
    p_src_a: *const i16,
    p_src_b: *const i16,
    m: u32,
    n: u32,
    o: u32,
    stride_a: u32,
    stride_b: u32,
    stride_c: u32,
    n_pe: u32,
    p_dst_c: *mut i32,
) {
    let args = PlpMatMultStrideInstance {
        p_src_a,
        p_src_b,
        m,
        n,
        o,
        stride_a,
        stride_b,
        stride_c,
        n_pe,
        p_dst_c,
    };
    mult_parallel(Product::MultCmplx, args);
}

/// Cluster kernel for worker `core_id` of a fan-out.
#[no_mangle]
pub unsafe extern "C" fn plp_mat_mult_cmplx_stride_i16p_xpulpv2(
    args: *const PlpMatMultStrideInstanceI16,
    core_id: u32,
) {
    mult_worker(Product::MultCmplx, args, core_id);
}

/// Strided complex `C = A * B`, run as the fabric controller.
#[no_mangle]
#[allow(clippy::too_many_arguments)]
pub unsafe extern "C" fn plp_mat_mult_cmplx_stride_i8(
    p_src_a: *const i8,
    p_src_b: *const i8,
    m: u32,
    n: u32,
    o: u32,
    stride_a: u32,
    stride_b: u32,
    stride_c: u32,
    p_dst_c: *mut i32,
) {
    let args = PlpMatMultStrideInstance {
        p_src_a,
        p_src_b,
        m,
        n,
        o,
        stride_a,
        stride_b,
        stride_c,
        n_pe: 1,
        p_dst_c,
    };
    mult_glue(Product::MultCmplx, args);
}

/// Strided complex `C = A * B` on `n_pe` cluster cores.
#[no_mangle]
#[allow(clippy::too_many_arguments)]
pub unsafe extern "C" fn plp_mat_mult_cmplx_stride_i8_parallel(
    p_src_a: *const i8,
    p_src_b: *const i8,
    m: u32,
    n: u32,
    o: u32,
    stride_a: u32,
    stride_b: u32,
    stride_c: u32,
    n_pe: u32,
    p_dst_c: *mut i32,
) {
    let args = PlpMatMultStrideInstance {
        p_src_a,
        p_src_b,
        m,
        n,
        o,
        stride_a,
        stride_b,
        stride_c,
        n_pe,
        p_dst_c,
    };
    mult_parallel(Product::MultCmplx, args);
}

/// Cluster kernel for worker `core_id` of a fan-out.
#[no_mangle]
pub unsafe extern "C" fn plp_mat_mult_cmplx_stride_i8p_xpulpv2(
    args: *const PlpMatMultStrideInstanceI8,
    core_id: u32,
) {
    mult_worker(Product::MultCmplx, args, core_id);
}

/// Strided complex `C = A * B^T`, run as the fabric controller.
#[no_mangle]
#[allow(clippy::too_many_arguments)]
pub unsafe extern "C" fn plp_mat_mult_trans_cmplx_stride_i32(
    p_src_a: *const i32,
    p_src_b: *const i32,
    m: u32,
    n: u32,
    o: u32,
    stride_a: u32,
    stride_b: u32,
    stride_c: u32,
    p_dst_c: *mut i32,
) {
    let args = PlpMatMultStrideInstance {
        p_src_a,
        p_src_b,
        m,
        n,
        o,
        stride_a,
        stride_b,
        stride_c,
        n_pe: 1,
        p_dst_c,
    };
    mult_glue(Product::MultTransCmplx, args);
}

/// Strided complex `C = A * B^T` on `n_pe` cluster cores.
#[no_mangle]
#[allow(clippy::too_many_arguments)]
pub unsafe extern "C" fn plp_mat_mult_trans_cmplx_stride_i32_parallel(
    p_src_a: *const i32,
    p_src_b: *const i32,
    m: u32,
    n: u32,
    o: u32,
    stride_a: u32,
    stride_b: u32,
    stride_c: u32,
    n_pe: u32,
    p_dst_c: *mut i32,
) {
    let args = PlpMatMultStrideInstance {
        p_src_a,
        p_src_b,
        m,
        n,
        o,
        stride_a,
        stride_b,
        stride_c,
        n_pe,
        p_dst_c,
    };
    mult_parallel(Product::MultTransCmplx, args);
}

/// Cluster kernel for worker `core_id` of a fan-out.
#[no_mangle]
pub unsafe extern "C" fn plp_mat_mult_trans_cmplx_stride_i32p_xpulpv2(
    args: *const PlpMatMultStrideInstanceI32,
    core_id: u32,
) {
    mult_worker(Product::MultTransCmplx, args, core_id);
}

/// Strided complex `C = A * B^T`, run as the fabric controller.
#[no_mangle]
#[allow(clippy::too_many_arguments)]
pub unsafe extern "C" fn plp_mat_mult_trans_cmplx_stride_i16(
    p_src_a: *const i16,
    p_src_b: *const i16,
    m: u32,
    n: u32,
    o: u32,
    stride_a: u32,
    stride_b: u32,
    stride_c: u32,
    p_dst_c: *mut i32,
) {
    let args = PlpMatMultStrideInstance {
        p_src_a,
        p_src_b,
        m,
        n,
        o,
        stride_a,
        stride_b,
        stride_c,
        n_pe: 1,
        p_dst_c,
    };
    mult_glue(Product::MultTransCmplx, args);
}

/// Strided complex `C = A * B^T` on `n_pe` cluster cores.
#[no_mangle]
#[allow(clippy::too_many_arguments)]
pub unsafe extern "C" fn plp_mat_mult_trans_cmplx_stride_i16_parallel(
    p_src_a: *const i16,
    p_src_b: *const i16,
    m: u32,
    n: u32,
    o: u32,
    stride_a: u32,
    stride_b: u32,
    stride_c: u32,
    n_pe: u32,
    p_dst_c: *mut i32,
) {
    let args = PlpMatMultStrideInstance {
        p_src_a,
        p_src_b,
        m,
        n,
        o,
        stride_a,
        stride_b,
        stride_c,
        n_pe,
        p_dst_c,
    };
    mult_parallel(Product::MultTransCmplx, args);
}

/// Cluster kernel for worker `core_id` of a fan-out.
#[no_mangle]
pub unsafe extern "C" fn plp_mat_mult_trans_cmplx_stride_i16p_xpulpv2(
    args: *const PlpMatMultStrideInstanceI16,
    core_id: u32,
) {
    mult_worker(Product::MultTransCmplx, args, core_id);
}

/// Strided complex `C = A * B^T`, run as the fabric controller.
#[no_mangle]
#[allow(clippy::too_many_arguments)]
pub unsafe extern "C" fn plp_mat_mult_trans_cmplx_stride_i8(
    p_src_a: *const i8,
    p_src_b: *const i8,
    m: u32,
    n: u32,
    o: u32,
    stride_a: u32,
    stride_b: u32,
    stride_c: u32,
    p_dst_c: *mut i32,
) {
    let args = PlpMatMultStrideInstance {
        p_src_a,
        p_src_b,
        m,
        n,
        o,
        stride_a,
        stride_b,
        stride_c,
        n_pe: 1,
        p_dst_c,
    };
    mult_glue(Product::MultTransCmplx, args);
}

/// Strided complex `C = A * B^T` on `n_pe` cluster cores.
#[no_mangle]
#[allow(clippy::too_many_arguments)]
pub unsafe extern "C" fn plp_mat_mult_trans_cmplx_stride_i8_parallel(
    p_src_a: *const i8,
    p_src_b: *const i8,
    m: u32,
    n: u32,
    o: u32,
    stride_a: u32,
    stride_b: u32,
    stride_c: u32,
    n_pe: u32,
    p_dst_c: *mut i32,
) {
    let args = PlpMatMultStrideInstance {
        p_src_a,
        p_src_b,
        m,
        n,
        o,
        stride_a,
        stride_b,
        stride_c,
        n_pe,
        p_dst_c,
    };
    mult_parallel(Product::MultTransCmplx, args);
}

/// Cluster kernel for worker `core_id` of a fan-out.
#[no_mangle]
pub unsafe extern "C" fn plp_mat_mult_trans_cmplx_stride_i8p_xpulpv2(
    args: *const PlpMatMultStrideInstanceI8,
    core_id: u32,
) {
    mult_worker(Product::MultTransCmplx, args, core_id);
}

/// Strided `Y = A - B`, wrapping, run as the fabric controller.
#[no_mangle]
#[allow(clippy::too_many_arguments)]
pub unsafe extern "C" fn plp_mat_sub_stride_i32(
    p_src_a: *const i32,
    p_src_b: *const i32,
    m: u32,
    n: u32,
    stride_a: u32,
    stride_b: u32,
    stride_y: u32,
    p_dst: *mut i32,
) {
    let args = PlpMatSubStrideInstance {
        p_src_a,
        p_src_b,
        m,
        n,
        stride_a,
        stride_b,
        stride_y,
        n_pe: 1,
        p_dst,
    };
    sub_glue(args);
}

/// Strided `Y = A - B` on `n_pe` cluster cores.
#[no_mangle]
#[allow(clippy::too_many_arguments)]
pub unsafe extern "C" fn plp_mat_sub_stride_i32_parallel(
    p_src_a: *const i32,
    p_src_b: *const i32,
    m: u32,
    n: u32,
    stride_a: u32,
    stride_b: u32,
    stride_y: u32,
    n_pe: u32,
    p_dst: *mut i32,
) {
    let args = PlpMatSubStrideInstance {
        p_src_a,
        p_src_b,
        m,
        n,
        stride_a,
        stride_b,
        stride_y,
        n_pe,
        p_dst,
    };
    sub_parallel(args);
}

/// Cluster kernel for worker `core_id` of a fan-out.
#[no_mangle]
pub unsafe extern "C" fn plp_mat_sub_stride_i32p_xpulpv2(
    args: *const PlpMatSubStrideInstanceI32,
    core_id: u32,
) {
    sub_worker(args, core_id);
}

/// Strided `Y = A - B`, wrapping, run as the fabric controller.
#[no_mangle]
#[allow(clippy::too_many_arguments)]
pub unsafe extern "C" fn plp_mat_sub_stride_i16(
    p_src_a: *const i16,
    p_src_b: *const i16,
    m: u32,
    n: u32,
    stride_a: u32,
    stride_b: u32,
    stride_y: u32,
    p_dst: *mut i16,
) {
    let args = PlpMatSubStrideInstance {
        p_src_a,
        p_src_b,
        m,
        n,
        stride_a,
        stride_b,
        stride_y,
        n_pe: 1,
        p_dst,
    };
    sub_glue(args);
}

/// Strided `Y = A - B` on `n_pe` cluster cores.
#[no_mangle]
#[allow(clippy::too_many_arguments)]
pub unsafe extern "C" fn plp_mat_sub_stride_i16_parallel(
    p_src_a: *const i16,
    p_src_b: *const i16,
    m: u32,
    n: u32,
    stride_a: u32,
    stride_b: u32,
    stride_y: u32,
    n_pe: u32,
    p_dst: *mut i16,
) {
    let args = PlpMatSubStrideInstance {
        p_src_a,
        p_src_b,
        m,
        n,
        stride_a,
        stride_b,
        stride_y,
        n_pe,
        p_dst,
    };
    sub_parallel(args);
}

/// Cluster kernel for worker `core_id` of a fan-out.
#[no_mangle]
pub unsafe extern "C" fn plp_mat_sub_stride_i16p_xpulpv2(
    args: *const PlpMatSubStrideInstanceI16,
    core_id: u32,
) {
    sub_worker(args, core_id);
}

/// Strided `Y = A - B`, wrapping, run as the fabric controller.
#[no_mangle]
#[allow(clippy::too_many_arguments)]
pub unsafe extern "C" fn plp_mat_sub_stride_i8(
    p_src_a: *const i8,
    p_src_b: *const i8,
    m: u32,
    n: u32,
    stride_a: u32,
    stride_b: u32,
    stride_y: u32,
    p_dst: *mut i8,
) {
    let args = PlpMatSubStrideInstance {
        p_src_a,
        p_src_b,
        m,
        n,
        stride_a,
        stride_b,
        stride_y,
        n_pe: 1,
        p_dst,
    };
    sub_glue(args);
}

/// Strided `Y = A - B` on `n_pe` cluster cores.
#[no_mangle]
#[allow(clippy::too_many_arguments)]
pub unsafe extern "C" fn plp_mat_sub_stride_i8_parallel(
    p_src_a: *const i8,
    p_src_b: *const i8,
    m: u32,
    n: u32,
    stride_a: u32,
    stride_b: u32,
    stride_y: u32,
    n_pe: u32,
    p_dst: *mut i8,
) {
    let args = PlpMatSubStrideInstance {
        p_src_a,
        p_src_b,
        m,
        n,
        stride_a,
        stride_b,
        stride_y,
        n_pe,
        p_dst,
    };
    sub_parallel(args);
}

/// Cluster kernel for worker `core_id` of a fan-out.
#[no_mangle]
pub unsafe extern "C" fn plp_mat_sub_stride_i8p_xpulpv2(
    args: *const PlpMatSubStrideInstanceI8,
    core_id: u32,
) {
    sub_worker(args, core_id);
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ptr;

    #[test]
    fn test_mult_trans_glue() {
        let a = [1i32, 2, 3, 4];
        let b = [5i32, 6, 7, 8];
        let mut c = [0i32; 4];
        unsafe {
            plp_mat_mult_trans_stride_i32(a.as_ptr(), b.as_ptr(), 2, 2, 2, 2, 2, 2, c.as_mut_ptr())
        };
        assert_eq!(c, [17, 23, 39, 53]);
    }

    #[test]
    fn test_mult_plain_parallel_matches_glue() {
        let a: Vec<i16> = (0..5 * 4).map(|x| x as i16 - 7).collect();
        let b: Vec<i16> = (0..3 * 4).map(|x| 3 - x as i16).collect();
        let mut single = vec![-1i32; 5 * 4];
        let mut multi = vec![-1i32; 5 * 4];
        // A is 5x3 in a stride-4 parent, B is 3x3 in a stride-4 parent.
        unsafe {
            plp_mat_mult_stride_i16(
                a.as_ptr(),
                b.as_ptr(),
                5,
                3,
                3,
                4,
                4,
                4,
                single.as_mut_ptr(),
            );
            plp_mat_mult_stride_i16_parallel(
                a.as_ptr(),
                b.as_ptr(),
                5,
                3,
                3,
                4,
                4,
                4,
                3,
                multi.as_mut_ptr(),
            );
        }
        assert_eq!(single, multi);
        assert!(single.iter().skip(3).step_by(4).all(|&x| x == -1));
    }

    #[test]
    fn test_per_core_kernels_cover_output() {
        let a = [1i8, 2, 3, 4, 5, 6];
        let b = [1i8, 0, 0, 1];
        let mut c = [0i32; 6];
        let args = PlpMatMultStrideInstanceI8 {
            p_src_a: a.as_ptr(),
            p_src_b: b.as_ptr(),
            m: 3,
            n: 2,
            o: 2,
            stride_a: 2,
            stride_b: 2,
            stride_c: 2,
            n_pe: 2,
            p_dst_c: c.as_mut_ptr(),
        };
        unsafe { plp_mat_mult_trans_stride_i8p_xpulpv2(&args, 1) };
        assert_eq!(c, [0, 0, 3, 4, 0, 0]);
        unsafe { plp_mat_mult_trans_stride_i8p_xpulpv2(&args, 0) };
        assert_eq!(c, [1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_cmplx_trans_i16() {
        // (1 + 2i)(3 + 4i) = -5 + 10i
        let a = [1i16, 2];
        let b = [3i16, 4];
        let mut c = [0i32; 2];
        unsafe {
            plp_mat_mult_trans_cmplx_stride_i16(
                a.as_ptr(),
                b.as_ptr(),
                1,
                1,
                1,
                1,
                1,
                1,
                c.as_mut_ptr(),
            );
        }
        assert_eq!(c, [-5, 10]);

        let mut cp = [0i32; 2];
        let args = PlpMatMultStrideInstanceI16 {
            p_src_a: a.as_ptr(),
            p_src_b: b.as_ptr(),
            m: 1,
            n: 1,
            o: 1,
            stride_a: 1,
            stride_b: 1,
            stride_c: 1,
            n_pe: 4,
            p_dst_c: cp.as_mut_ptr(),
        };
        for core_id in 0..4 {
            unsafe { plp_mat_mult_trans_cmplx_stride_i16p_xpulpv2(&args, core_id) };
        }
        assert_eq!(cp, c);
    }

    #[test]
    fn test_sub_forms_agree() {
        let a = [10i16, 20, 0, 30, 40, 0, 50, 60];
        let b = [1i16, 2, 3, 4, 5, 6];
        let mut single = [0i16; 6];
        let mut multi = [0i16; 6];
        let mut per_core = [0i16; 6];
        unsafe {
            plp_mat_sub_stride_i16(a.as_ptr(), b.as_ptr(), 3, 2, 3, 2, 2, single.as_mut_ptr());
            plp_mat_sub_stride_i16_parallel(
                a.as_ptr(),
                b.as_ptr(),
                3,
                2,
                3,
                2,
                2,
                5,
                multi.as_mut_ptr(),
            );
        }
        let args = PlpMatSubStrideInstanceI16 {
            p_src_a: a.as_ptr(),
            p_src_b: b.as_ptr(),
            m: 3,
            n: 2,
            stride_a: 3,
            stride_b: 2,
            stride_y: 2,
            n_pe: 2,
            p_dst: per_core.as_mut_ptr(),
        };
        for core_id in 0..2 {
            unsafe { plp_mat_sub_stride_i16p_xpulpv2(&args, core_id) };
        }
        assert_eq!(single, [9, 18, 27, 36, 45, 54]);
        assert_eq!(multi, single);
        assert_eq!(per_core, single);
    }

    #[test]
    fn test_empty_outputs_accept_null() {
        unsafe {
            plp_mat_mult_stride_i32(ptr::null(), ptr::null(), 0, 0, 0, 0, 0, 0, ptr::null_mut());
            plp_mat_sub_stride_i8_parallel(
                ptr::null(),
                ptr::null(),
                0,
                4,
                4,
                4,
                4,
                2,
                ptr::null_mut(),
            );
        }
    }
}
