use thiserror::Error;

use crate::dtype::DType;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum KernelError {
    #[error("stride {stride} is smaller than the row width {cols}")]
    StrideTooSmall { stride: usize, cols: usize },
    #[error(
        "buffer of {len} {dtype} elements is too small, view needs {needed} ({} bytes)",
        .needed * .dtype.size_in_bytes()
    )]
    BufferTooSmall {
        dtype: DType,
        needed: usize,
        len: usize,
    },
    #[error("shape mismatch: expected {expected:?}, got {got:?}")]
    ShapeMismatch {
        expected: (usize, usize),
        got: (usize, usize),
    },
    #[error("vector length mismatch: {a} vs {b}")]
    LengthMismatch { a: usize, b: usize },
    #[error("worker count must be at least 1")]
    ZeroWorkers,
    #[error("decimal point {deci_point} does not fit a {max}-bit accumulator")]
    DeciPointOutOfRange { deci_point: u32, max: u32 },
}

pub type Result<T> = std::result::Result<T, KernelError>;
