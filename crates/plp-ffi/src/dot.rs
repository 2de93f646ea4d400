//! `plp_dot_prod_*`: glue and per-ISA kernels.
//!
//! Suffixes follow the C library: `s` scalar 32-bit, `v` packed sub-word,
//! `q` fixed point with a `deci_point` right shift.

use plp_kernels::kernels::{dot_prod, dot_prod_q};
use plp_kernels::{dispatch, Rv32im, XpulpV2};

use crate::raw::src_slice;
use crate::HOST;

unsafe fn operands<'a, T>(
    p_src_a: *const T,
    p_src_b: *const T,
    block_size: u32,
) -> (&'a [T], &'a [T]) {
    let len = block_size as usize;
    (src_slice(p_src_a, len), src_slice(p_src_b, len))
}

unsafe fn store(p_res: *mut i32, value: i32) {
    debug_assert!(!p_res.is_null(), "null result pointer");
    *p_res = value;
}

/// Glue for the 32-bit integer dot product.
#[no_mangle]
pub unsafe extern "C" fn plp_dot_prod_i32s(
    p_src_a: *const i32,
    p_src_b: *const i32,
    block_size: u32,
    p_res: *mut i32,
) {
    let (a, b) = operands(p_src_a, p_src_b, block_size);
    store(p_res, dispatch::dot_prod(&HOST, a, b));
}

#[no_mangle]
pub unsafe extern "C" fn plp_dot_prod_i32s_rv32im(
    p_src_a: *const i32,
    p_src_b: *const i32,
    block_size: u32,
    p_res: *mut i32,
) {
    let (a, b) = operands(p_src_a, p_src_b, block_size);
    store(p_res, dot_prod::<Rv32im, i32>(a, b));
}

#[no_mangle]
pub unsafe extern "C" fn plp_dot_prod_i32s_xpulpv2(
    p_src_a: *const i32,
    p_src_b: *const i32,
    block_size: u32,
    p_res: *mut i32,
) {
    let (a, b) = operands(p_src_a, p_src_b, block_size);
    store(p_res, dot_prod::<XpulpV2, i32>(a, b));
}

/// Glue for the 16-bit integer dot product, two lanes per word on XpulpV2.
#[no_mangle]
pub unsafe extern "C" fn plp_dot_prod_i16v(
    p_src_a: *const i16,
    p_src_b: *const i16,
    block_size: u32,
    p_res: *mut i32,
) {
    let (a, b) = operands(p_src_a, p_src_b, block_size);
    store(p_res, dispatch::dot_prod(&HOST, a, b));
}

#[no_mangle]
pub unsafe extern "C" fn plp_dot_prod_i16v_rv32im(
    p_src_a: *const i16,
    p_src_b: *const i16,
    block_size: u32,
    p_res: *mut i32,
) {
    let (a, b) = operands(p_src_a, p_src_b, block_size);
    store(p_res, dot_prod::<Rv32im, i16>(a, b));
}

#[no_mangle]
pub unsafe extern "C" fn plp_dot_prod_i16v_xpulpv2(
    p_src_a: *const i16,
    p_src_b: *const i16,
    block_size: u32,
    p_res: *mut i32,
) {
    let (a, b) = operands(p_src_a, p_src_b, block_size);
    store(p_res, dot_prod::<XpulpV2, i16>(a, b));
}

/// Glue for the 8-bit integer dot product, four lanes per word on XpulpV2.
#[no_mangle]
pub unsafe extern "C" fn plp_dot_prod_i8v(
    p_src_a: *const i8,
    p_src_b: *const i8,
    block_size: u32,
    p_res: *mut i32,
) {
    let (a, b) = operands(p_src_a, p_src_b, block_size);
    store(p_res, dispatch::dot_prod(&HOST, a, b));
}

#[no_mangle]
pub unsafe extern "C" fn plp_dot_prod_i8v_rv32im(
    p_src_a: *const i8,
    p_src_b: *const i8,
    block_size: u32,
    p_res: *mut i32,
) {
    let (a, b) = operands(p_src_a, p_src_b, block_size);
    store(p_res, dot_prod::<Rv32im, i8>(a, b));
}

#[no_mangle]
pub unsafe extern "C" fn plp_dot_prod_i8v_xpulpv2(
    p_src_a: *const i8,
    p_src_b: *const i8,
    block_size: u32,
    p_res: *mut i32,
) {
    let (a, b) = operands(p_src_a, p_src_b, block_size);
    store(p_res, dot_prod::<XpulpV2, i8>(a, b));
}

/// Glue for the 32-bit fixed-point dot product, shifted right by `deci_point` once.
#[no_mangle]
pub unsafe extern "C" fn plp_dot_prod_q32s(
    p_src_a: *const i32,
    p_src_b: *const i32,
    block_size: u32,
    deci_point: u32,
    p_res: *mut i32,
) {
    let (a, b) = operands(p_src_a, p_src_b, block_size);
    store(p_res, dispatch::dot_prod_q(&HOST, a, b, deci_point));
}

#[no_mangle]
pub unsafe extern "C" fn plp_dot_prod_q32s_rv32im(
    p_src_a: *const i32,
    p_src_b: *const i32,
    block_size: u32,
    deci_point: u32,
    p_res: *mut i32,
) {
    let (a, b) = operands(p_src_a, p_src_b, block_size);
    store(p_res, dot_prod_q::<Rv32im, i32>(a, b, deci_point));
}

#[no_mangle]
pub unsafe extern "C" fn plp_dot_prod_q32s_xpulpv2(
    p_src_a: *const i32,
    p_src_b: *const i32,
    block_size: u32,
    deci_point: u32,
    p_res: *mut i32,
) {
    let (a, b) = operands(p_src_a, p_src_b, block_size);
    store(p_res, dot_prod_q::<XpulpV2, i32>(a, b, deci_point));
}

/// Glue for the 16-bit fixed-point dot product, shifted right by `deci_point` once.
#[no_mangle]
pub unsafe extern "C" fn plp_dot_prod_q16v(
    p_src_a: *const i16,
    p_src_b: *const i16,
    block_size: u32,
    deci_point: u32,
    p_res: *mut i32,
) {
    let (a, b) = operands(p_src_a, p_src_b, block_size);
    store(p_res, dispatch::dot_prod_q(&HOST, a, b, deci_point));
}

#[no_mangle]
pub unsafe extern "C" fn plp_dot_prod_q16v_rv32im(
    p_src_a: *const i16,
    p_src_b: *const i16,
    block_size: u32,
    deci_point: u32,
    p_res: *mut i32,
) {
    let (a, b) = operands(p_src_a, p_src_b, block_size);
    store(p_res, dot_prod_q::<Rv32im, i16>(a, b, deci_point));
}

#[no_mangle]
pub unsafe extern "C" fn plp_dot_prod_q16v_xpulpv2(
    p_src_a: *const i16,
    p_src_b: *const i16,
    block_size: u32,
    deci_point: u32,
    p_res: *mut i32,
) {
    let (a, b) = operands(p_src_a, p_src_b, block_size);
    store(p_res, dot_prod_q::<XpulpV2, i16>(a, b, deci_point));
}

/// Glue for the 8-bit fixed-point dot product, shifted right by `deci_point` once.
#[no_mangle]
pub unsafe extern "C" fn plp_dot_prod_q8v(
    p_src_a: *const i8,
    p_src_b: *const i8,
    block_size: u32,
    deci_point: u32,
    p_res: *mut i32,
) {
    let (a, b) = operands(p_src_a, p_src_b, block_size);
    store(p_res, dispatch::dot_prod_q(&HOST, a, b, deci_point));
}

#[no_mangle]
pub unsafe extern "C" fn plp_dot_prod_q8v_rv32im(
    p_src_a: *const i8,
    p_src_b: *const i8,
    block_size: u32,
    deci_point: u32,
    p_res: *mut i32,
) {
    let (a, b) = operands(p_src_a, p_src_b, block_size);
    store(p_res, dot_prod_q::<Rv32im, i8>(a, b, deci_point));
}

#[no_mangle]
pub unsafe extern "C" fn plp_dot_prod_q8v_xpulpv2(
    p_src_a: *const i8,
    p_src_b: *const i8,
    block_size: u32,
    deci_point: u32,
    p_res: *mut i32,
) {
    let (a, b) = operands(p_src_a, p_src_b, block_size);
    store(p_res, dot_prod_q::<XpulpV2, i8>(a, b, deci_point));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dot_prod_i32s_variants_agree() {
        let a = [1i32, -2, 3, 4, 5];
        let b = [6i32, 7, -8, 9, 10];
        let mut glue = 0;
        let mut scalar = 0;
        let mut packed = 0;
        unsafe {
            plp_dot_prod_i32s(a.as_ptr(), b.as_ptr(), 5, &mut glue);
            plp_dot_prod_i32s_rv32im(a.as_ptr(), b.as_ptr(), 5, &mut scalar);
            plp_dot_prod_i32s_xpulpv2(a.as_ptr(), b.as_ptr(), 5, &mut packed);
        }
        assert_eq!(glue, 6 - 14 - 24 + 36 + 50);
        assert_eq!(scalar, glue);
        assert_eq!(packed, glue);
    }

    #[test]
    fn test_dot_prod_i8v_tail() {
        let a = [1i8, 2, 3, 4, 5, 6, 7];
        let b = [-1i8; 7];
        let mut res = 0;
        unsafe { plp_dot_prod_i8v_xpulpv2(a.as_ptr(), b.as_ptr(), 7, &mut res) };
        assert_eq!(res, -28);
    }

    #[test]
    fn test_dot_prod_empty_with_null_inputs() {
        let mut res = 99;
        unsafe { plp_dot_prod_i16v(std::ptr::null(), std::ptr::null(), 0, &mut res) };
        assert_eq!(res, 0);
    }

    #[test]
    fn test_dot_prod_q_shifts_once() {
        let a = [3i16, 3, 3];
        let b = [1i16, 1, 1];
        let mut res = 0;
        unsafe { plp_dot_prod_q16v(a.as_ptr(), b.as_ptr(), 3, 1, &mut res) };
        // 9 >> 1, not (3 >> 1) * 3.
        assert_eq!(res, 4);
        unsafe { plp_dot_prod_q8v_rv32im([-9i8].as_ptr(), [1i8].as_ptr(), 1, 2, &mut res) };
        assert_eq!(res, -3);
        let (a32, b32) = ([8i32, 8], [1i32, 1]);
        unsafe { plp_dot_prod_q32s_xpulpv2(a32.as_ptr(), b32.as_ptr(), 2, 4, &mut res) };
        assert_eq!(res, 1);
    }
}
