//! Borrowed views over caller-owned C buffers.
//!
//! Lengths are derived from the matrix geometry, so only the storage the
//! kernel is allowed to touch is ever borrowed. Zero-length borrows never
//! dereference the pointer, which may then be null.

use std::slice;

use plp_kernels::view::storage_len;
use plp_kernels::{Element, MatView, MatViewMut, Worker};

pub(crate) const REAL: usize = 1;
pub(crate) const COMPLEX: usize = 2;

pub(crate) unsafe fn src_slice<'a, T>(ptr: *const T, len: usize) -> &'a [T] {
    if len == 0 {
        return &[];
    }
    debug_assert!(!ptr.is_null(), "null source with {} elements", len);
    slice::from_raw_parts(ptr, len)
}

unsafe fn dst_slice<'a, T>(ptr: *mut T, len: usize) -> &'a mut [T] {
    if len == 0 {
        return &mut [];
    }
    debug_assert!(!ptr.is_null(), "null destination with {} elements", len);
    slice::from_raw_parts_mut(ptr, len)
}

pub(crate) unsafe fn src_view<'a, T: Element>(
    ptr: *const T,
    rows: u32,
    cols: u32,
    stride: u32,
    lanes: usize,
) -> MatView<'a, T> {
    let (rows, cols, stride) = (rows as usize, cols as usize, stride as usize);
    let data = src_slice(ptr, storage_len(rows, cols, stride, lanes));
    if lanes == COMPLEX {
        MatView::complex(data, rows, cols, stride)
    } else {
        MatView::new(data, rows, cols, stride)
    }
}

/// Whole destination, for callers that own every row.
pub(crate) unsafe fn dst_view<'a, T: Element>(
    ptr: *mut T,
    rows: u32,
    cols: u32,
    stride: u32,
    lanes: usize,
) -> MatViewMut<'a, T> {
    let (rows, cols, stride) = (rows as usize, cols as usize, stride as usize);
    let data = dst_slice(ptr, storage_len(rows, cols, stride, lanes));
    if lanes == COMPLEX {
        MatViewMut::complex(data, rows, cols, stride)
    } else {
        MatViewMut::new(data, rows, cols, stride)
    }
}

/// Only the destination rows `worker` owns, each borrowed separately.
///
/// Workers of the same fan-out run concurrently on one buffer, so a
/// worker must never hold a borrow that spans another worker's row.
pub(crate) unsafe fn worker_rows<'a, T: 'a>(
    ptr: *mut T,
    worker: Worker,
    rows: u32,
    cols: u32,
    stride: u32,
    lanes: usize,
) -> impl Iterator<Item = (usize, &'a mut [T])> {
    let len = cols as usize * lanes;
    let pitch = stride as usize * lanes;
    debug_assert!(stride >= cols, "stride {} below {} columns", stride, cols);
    worker
        .rows(rows as usize)
        .map(move |m| (m, dst_slice(ptr.wrapping_add(m * pitch), len)))
}
