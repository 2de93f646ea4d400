//! Instruction-set capabilities and the execution environment.
//!
//! Each supported ISA extension is a zero-sized type implementing [`Isa`].
//! Kernels are generic over it, so choosing an extension is a
//! monomorphization decision and the glue code in [`crate::dispatch`] only
//! branches on [`CoreKind`].

use std::fmt::Debug;

use crate::accum::dot_wide;

/// Where the calling code executes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CoreKind {
    /// The control core outside the compute cluster.
    FabricController,
    /// One of the compute cores of the cluster.
    Cluster,
}

/// Kernel implementations for one ISA extension.
///
/// The default bodies are the plain RV32IM scalar loops; extensions override
/// the ones they accelerate. Every override must return exactly what the
/// default returns.
pub trait Isa: Copy + Debug + Send + Sync + 'static {
    const NAME: &'static str;

    /// 32-bit dot product with a 32-bit wrapping accumulator.
    #[inline]
    fn dot_i32(a: &[i32], b: &[i32]) -> i32 {
        debug_assert_eq!(a.len(), b.len());
        a.iter()
            .zip(b)
            .fold(0i32, |acc, (&x, &y)| acc.wrapping_add(x.wrapping_mul(y)))
    }

    #[inline]
    fn dot_i16(a: &[i16], b: &[i16]) -> i32 {
        dot_wide(a, b)
    }

    #[inline]
    fn dot_i8(a: &[i8], b: &[i8]) -> i32 {
        dot_wide(a, b)
    }
}

/// Generic RISC-V integer core (IBEX class): scalar kernels only.
#[derive(Debug, Clone, Copy, Default)]
pub struct Rv32im;

impl Isa for Rv32im {
    const NAME: &'static str = "rv32im";
}

/// PULP cores with the XpulpV2 DSP extension.
///
/// Sub-word operands are packed into 32-bit words and reduced with a
/// sum-of-dot-products per word (2 lanes for 16-bit, 4 lanes for 8-bit).
/// The tail that does not fill a word runs scalar.
#[derive(Debug, Clone, Copy, Default)]
pub struct XpulpV2;

impl Isa for XpulpV2 {
    const NAME: &'static str = "xpulpv2";

    #[inline]
    fn dot_i32(a: &[i32], b: &[i32]) -> i32 {
        debug_assert_eq!(a.len(), b.len());
        // Unrolled by two with independent accumulators.
        let mut acc0 = 0i32;
        let mut acc1 = 0i32;
        let pairs_a = a.chunks_exact(2);
        let pairs_b = b.chunks_exact(2);
        let (tail_a, tail_b) = (pairs_a.remainder(), pairs_b.remainder());
        for (x, y) in pairs_a.zip(pairs_b) {
            acc0 = acc0.wrapping_add(x[0].wrapping_mul(y[0]));
            acc1 = acc1.wrapping_add(x[1].wrapping_mul(y[1]));
        }
        let mut acc = acc0.wrapping_add(acc1);
        for (&x, &y) in tail_a.iter().zip(tail_b) {
            acc = acc.wrapping_add(x.wrapping_mul(y));
        }
        acc
    }

    #[inline]
    fn dot_i16(a: &[i16], b: &[i16]) -> i32 {
        debug_assert_eq!(a.len(), b.len());
        let words_a = a.chunks_exact(2);
        let words_b = b.chunks_exact(2);
        let (tail_a, tail_b) = (words_a.remainder(), words_b.remainder());
        let mut acc = 0i32;
        for (x, y) in words_a.zip(words_b) {
            acc = sumdotp2(acc, [x[0], x[1]], [y[0], y[1]]);
        }
        for (&x, &y) in tail_a.iter().zip(tail_b) {
            acc = acc.wrapping_add(x as i32 * y as i32);
        }
        acc
    }

    #[inline]
    fn dot_i8(a: &[i8], b: &[i8]) -> i32 {
        debug_assert_eq!(a.len(), b.len());
        let words_a = a.chunks_exact(4);
        let words_b = b.chunks_exact(4);
        let (tail_a, tail_b) = (words_a.remainder(), words_b.remainder());
        let mut acc = 0i32;
        for (x, y) in words_a.zip(words_b) {
            acc = sumdotp4(acc, [x[0], x[1], x[2], x[3]], [y[0], y[1], y[2], y[3]]);
        }
        for (&x, &y) in tail_a.iter().zip(tail_b) {
            acc = acc.wrapping_add(x as i32 * y as i32);
        }
        acc
    }
}

/// `pv.sdotsp.h`: two 16x16 products summed into a 32-bit accumulator.
#[inline(always)]
fn sumdotp2(acc: i32, a: [i16; 2], b: [i16; 2]) -> i32 {
    let p0 = a[0] as i32 * b[0] as i32;
    let p1 = a[1] as i32 * b[1] as i32;
    acc.wrapping_add(p0).wrapping_add(p1)
}

/// `pv.sdotsp.b`: four 8x8 products summed into a 32-bit accumulator.
#[inline(always)]
fn sumdotp4(acc: i32, a: [i8; 4], b: [i8; 4]) -> i32 {
    let lanes = a
        .iter()
        .zip(b.iter())
        .fold(0i32, |s, (&x, &y)| s + x as i32 * y as i32);
    acc.wrapping_add(lanes)
}

/// ISA of the fabric controller, fixed at build time.
#[cfg(feature = "fc-riscy")]
pub type FabricIsa = XpulpV2;

/// ISA of the fabric controller, fixed at build time.
#[cfg(not(feature = "fc-riscy"))]
pub type FabricIsa = Rv32im;

/// ISA of the cluster cores.
pub type ClusterIsa = XpulpV2;

/// Queries the runtime answers about the executing worker.
pub trait Environment: Send + Sync {
    fn core_kind(&self) -> CoreKind;

    /// Identity of the executing core within its cluster.
    fn core_id(&self) -> usize;

    /// Number of cores available for a fan-out.
    fn num_cores(&self) -> usize;
}

/// Environment of a hosted process: the calling thread acts as the fabric
/// controller and cluster workers are OS threads.
#[derive(Debug, Clone, Copy)]
pub struct HostEnvironment {
    num_cores: usize,
}

impl HostEnvironment {
    /// Use every core the OS reports, or one if that is unknown.
    pub fn detect() -> Self {
        let num_cores = std::thread::available_parallelism()
            .map(|n| n.get())
            .unwrap_or(1);
        HostEnvironment { num_cores }
    }

    pub const fn with_cores(num_cores: usize) -> Self {
        HostEnvironment {
            num_cores: if num_cores == 0 { 1 } else { num_cores },
        }
    }
}

impl Default for HostEnvironment {
    fn default() -> Self {
        Self::detect()
    }
}

impl Environment for HostEnvironment {
    fn core_kind(&self) -> CoreKind {
        CoreKind::FabricController
    }

    fn core_id(&self) -> usize {
        0
    }

    fn num_cores(&self) -> usize {
        self.num_cores
    }
}
