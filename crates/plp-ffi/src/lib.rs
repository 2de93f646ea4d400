//! C ABI for `plp-kernels`.
//!
//! Every function returns no value and writes its result through the
//! destination pointer. Argument validity is the caller's responsibility:
//! pointers must cover the storage the geometry describes, strides must be
//! at least the column count and `n_pe` must be non-zero. Debug builds
//! assert these; release builds do not check them.
//!
//! Glue functions run as the fabric controller. The `*p_xpulpv2` kernels
//! are the per-core bodies of a cluster fan-out and may be called
//! concurrently on one instance struct, once per core id.
//!
//! The build writes `include/plp_kernels.h` at the workspace root, declaring
//! every entry point and instance struct.

#![allow(clippy::missing_safety_doc)]

mod dot;
mod mat;
mod raw;
mod types;

pub use dot::*;
pub use mat::*;
pub use types::*;

use plp_kernels::HostEnvironment;

/// Execution context of the glue entry points.
const HOST: HostEnvironment = HostEnvironment::with_cores(1);

#[cfg(test)]
mod tests {
    const HEADER: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/../../include/plp_kernels.h");

    #[test]
    fn test_header_declares_entry_points() {
        let header = std::fs::read_to_string(HEADER).unwrap();
        for symbol in [
            "void plp_dot_prod_i32s(",
            "void plp_dot_prod_q8v_rv32im(",
            "void plp_mat_mult_stride_i16_parallel(",
            "void plp_mat_mult_trans_stride_i32p_xpulpv2(",
            "PlpMatMultStrideInstanceI32 *args",
            "void plp_mat_mult_trans_cmplx_stride_i8(",
            "void plp_mat_sub_stride_i8_parallel(",
            "void plp_mat_sub_stride_i16p_xpulpv2(",
            "PlpMatSubStrideInstanceI16 *args",
        ] {
            assert!(header.contains(symbol), "header lacks {}", symbol);
        }
    }

    #[test]
    fn test_header_declares_instance_structs() {
        let header = std::fs::read_to_string(HEADER).unwrap();
        assert!(header.contains("#ifndef PLP_KERNELS_H"));
        for name in ["PlpMatMultStrideInstanceI8", "PlpMatSubStrideInstanceI32"] {
            assert!(header.contains(name), "header lacks {}", name);
        }
    }
}
