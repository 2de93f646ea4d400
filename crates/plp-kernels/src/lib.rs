//! `plp-kernels` - Strided integer matrix and dot-product kernels for
//! multicore embedded processors.
//!
//! This crate provides:
//! - Borrowed strided matrix views (`MatView`, `MatViewMut`) addressing
//!   sub-blocks of larger buffers, real or interleaved complex
//! - A static row-cyclic work partitioner and a scoped-thread fan-out
//! - Widening, complex and fixed-point accumulation rules
//! - Per-ISA kernel specializations (`Rv32im`, `XpulpV2`) selected at
//!   compile time, and glue functions that dispatch on the core kind
//! - Job descriptors for the parallel entry points

pub mod accum;
pub mod dispatch;
pub mod dtype;
pub mod error;
pub mod isa;
pub mod job;
pub mod kernels;
pub mod parallel;
pub mod partition;
pub mod view;

// Re-export primary types at the crate root for convenience.
pub use dtype::{DType, Element};
pub use error::{KernelError, Result};
pub use isa::{ClusterIsa, CoreKind, Environment, FabricIsa, HostEnvironment, Isa, Rv32im, XpulpV2};
pub use job::{MatMultJob, MatSubJob, MultLayout};
pub use kernels::DotElement;
pub use partition::{assigned_rows, AssignedRows, Worker};
pub use view::{MatView, MatViewMut};
