//! Borrowed 2-D views over caller-owned buffers.
//!
//! A view addresses `rows x cols` logical elements inside a larger buffer.
//! Consecutive logical rows start `stride` elements apart, so a view with
//! `stride > cols` is a sub-block of a wider matrix and the kernels read it
//! in place. Complex views store `(re, im)` pairs interleaved; their
//! `cols` and `stride` count complex elements, each taking two storage
//! units.

use std::fmt;

use num_complex::Complex;

use crate::dtype::Element;
use crate::error::{KernelError, Result};

/// Storage units a view of this geometry spans, from the start of its first
/// row to the end of its last.
pub fn storage_len(rows: usize, cols: usize, stride: usize, lanes: usize) -> usize {
    if rows == 0 || cols == 0 {
        0
    } else {
        ((rows - 1) * stride + cols) * lanes
    }
}

fn check_geometry<T: Element>(
    len: usize,
    rows: usize,
    cols: usize,
    stride: usize,
    lanes: usize,
) -> Result<()> {
    if stride < cols {
        return Err(KernelError::StrideTooSmall { stride, cols });
    }
    let needed = storage_len(rows, cols, stride, lanes);
    if len < needed {
        return Err(KernelError::BufferTooSmall {
            dtype: T::DTYPE,
            needed,
            len,
        });
    }
    Ok(())
}

/// Read-only strided matrix view.
#[derive(Clone, Copy)]
pub struct MatView<'a, T> {
    data: &'a [T],
    rows: usize,
    cols: usize,
    stride: usize,
    lanes: usize,
}

impl<'a, T: Element> MatView<'a, T> {
    /// Create a real-valued view.
    ///
    /// The geometry is only checked in debug builds; use [`MatView::try_new`]
    /// at trust boundaries.
    pub fn new(data: &'a [T], rows: usize, cols: usize, stride: usize) -> Self {
        debug_assert!(
            check_geometry::<T>(data.len(), rows, cols, stride, 1).is_ok(),
            "invalid view: {} elements for {}x{} with stride {}",
            data.len(),
            rows,
            cols,
            stride
        );
        MatView {
            data,
            rows,
            cols,
            stride,
            lanes: 1,
        }
    }

    /// Create a real-valued view, rejecting a stride narrower than the row or
    /// a buffer too short for the last row.
    pub fn try_new(data: &'a [T], rows: usize, cols: usize, stride: usize) -> Result<Self> {
        check_geometry::<T>(data.len(), rows, cols, stride, 1)?;
        Ok(Self::new(data, rows, cols, stride))
    }

    /// View the whole of a densely packed row-major buffer.
    pub fn contiguous(data: &'a [T], rows: usize, cols: usize) -> Self {
        Self::new(data, rows, cols, cols)
    }

    /// Create a complex view over interleaved `(re, im)` storage.
    pub fn complex(data: &'a [T], rows: usize, cols: usize, stride: usize) -> Self {
        debug_assert!(
            check_geometry::<T>(data.len(), rows, cols, stride, 2).is_ok(),
            "invalid complex view: {} elements for {}x{} with stride {}",
            data.len(),
            rows,
            cols,
            stride
        );
        MatView {
            data,
            rows,
            cols,
            stride,
            lanes: 2,
        }
    }

    pub fn try_complex(data: &'a [T], rows: usize, cols: usize, stride: usize) -> Result<Self> {
        check_geometry::<T>(data.len(), rows, cols, stride, 2)?;
        Ok(Self::complex(data, rows, cols, stride))
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn stride(&self) -> usize {
        self.stride
    }

    pub fn is_complex(&self) -> bool {
        self.lanes == 2
    }

    /// True when the view covers its rows without gaps.
    pub fn is_contiguous(&self) -> bool {
        self.stride == self.cols
    }

    pub fn required_len(&self) -> usize {
        storage_len(self.rows, self.cols, self.stride, self.lanes)
    }

    /// Storage of logical row `m`: `cols` elements (`2 * cols` for complex).
    #[inline(always)]
    pub fn row(&self, m: usize) -> &'a [T] {
        debug_assert!(m < self.rows, "row {} out of {}", m, self.rows);
        if self.cols == 0 {
            return &[];
        }
        let start = m * self.stride * self.lanes;
        &self.data[start..start + self.cols * self.lanes]
    }

    #[inline(always)]
    pub fn get(&self, m: usize, n: usize) -> T {
        debug_assert!(!self.is_complex());
        self.data[m * self.stride + n]
    }

    #[inline(always)]
    pub fn get_complex(&self, m: usize, n: usize) -> Complex<T> {
        debug_assert!(self.is_complex());
        let idx = (m * self.stride + n) * 2;
        Complex::new(self.data[idx], self.data[idx + 1])
    }
}

impl<T> fmt::Debug for MatView<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MatView")
            .field("rows", &self.rows)
            .field("cols", &self.cols)
            .field("stride", &self.stride)
            .field("complex", &(self.lanes == 2))
            .finish()
    }
}

/// Rows of a destination view owned by one worker, in ascending order.
pub struct WorkerRows<'a, T> {
    pub worker: usize,
    pub rows: Vec<(usize, &'a mut [T])>,
}

/// Mutable strided matrix view for kernel output.
///
/// Only the `rows x cols` logical elements are ever written; whatever the
/// stride skips over belongs to the caller's enclosing matrix.
pub struct MatViewMut<'a, T> {
    data: &'a mut [T],
    rows: usize,
    cols: usize,
    stride: usize,
    lanes: usize,
}

impl<'a, T: Element> MatViewMut<'a, T> {
    pub fn new(data: &'a mut [T], rows: usize, cols: usize, stride: usize) -> Self {
        debug_assert!(
            check_geometry::<T>(data.len(), rows, cols, stride, 1).is_ok(),
            "invalid output view: {} elements for {}x{} with stride {}",
            data.len(),
            rows,
            cols,
            stride
        );
        MatViewMut {
            data,
            rows,
            cols,
            stride,
            lanes: 1,
        }
    }

    pub fn try_new(data: &'a mut [T], rows: usize, cols: usize, stride: usize) -> Result<Self> {
        check_geometry::<T>(data.len(), rows, cols, stride, 1)?;
        Ok(Self::new(data, rows, cols, stride))
    }

    pub fn contiguous(data: &'a mut [T], rows: usize, cols: usize) -> Self {
        Self::new(data, rows, cols, cols)
    }

    pub fn complex(data: &'a mut [T], rows: usize, cols: usize, stride: usize) -> Self {
        debug_assert!(
            check_geometry::<T>(data.len(), rows, cols, stride, 2).is_ok(),
            "invalid complex output view: {} elements for {}x{} with stride {}",
            data.len(),
            rows,
            cols,
            stride
        );
        MatViewMut {
            data,
            rows,
            cols,
            stride,
            lanes: 2,
        }
    }

    pub fn try_complex(
        data: &'a mut [T],
        rows: usize,
        cols: usize,
        stride: usize,
    ) -> Result<Self> {
        check_geometry::<T>(data.len(), rows, cols, stride, 2)?;
        Ok(Self::complex(data, rows, cols, stride))
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn stride(&self) -> usize {
        self.stride
    }

    pub fn is_complex(&self) -> bool {
        self.lanes == 2
    }

    /// All logical rows as `(index, row)` pairs, stride padding excluded.
    pub fn rows_mut(self) -> impl Iterator<Item = (usize, &'a mut [T])> {
        let width = self.cols * self.lanes;
        let pitch = (self.stride * self.lanes).max(1);
        let rows = if width == 0 { 0 } else { self.rows };
        self.data
            .chunks_mut(pitch)
            .take(rows)
            .map(move |chunk| &mut chunk[..width])
            .enumerate()
    }

    /// Split the view into `n_pe` disjoint per-worker row sets.
    ///
    /// Row `m` goes to worker `m % n_pe`, the same assignment
    /// [`crate::partition::assigned_rows`] iterates, so every row lands in
    /// exactly one set. The sets are the only allocation of a parallel
    /// call: `n_pe` lists of at most `M.div_ceil(n_pe)` row handles each.
    pub fn split_cyclic(self, n_pe: usize) -> Vec<WorkerRows<'a, T>> {
        debug_assert!(n_pe > 0, "worker count must be at least 1");
        let mut sets: Vec<WorkerRows<'a, T>> = (0..n_pe)
            .map(|worker| WorkerRows {
                worker,
                rows: Vec::with_capacity(self.rows.div_ceil(n_pe)),
            })
            .collect();
        for (m, row) in self.rows_mut() {
            sets[crate::partition::owner_of(m, n_pe)].rows.push((m, row));
        }
        sets
    }
}

impl<T> fmt::Debug for MatViewMut<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MatViewMut")
            .field("rows", &self.rows)
            .field("cols", &self.cols)
            .field("stride", &self.stride)
            .field("complex", &(self.lanes == 2))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sub_block_rows() {
        // 3x4 parent, view the 2x2 block starting at (1, 1).
        let parent: Vec<i16> = (0..12).collect();
        let v = MatView::new(&parent[5..], 2, 2, 4);
        assert_eq!(v.row(0), &[5, 6]);
        assert_eq!(v.row(1), &[9, 10]);
        assert_eq!(v.get(1, 1), 10);
        assert!(!v.is_contiguous());
    }

    #[test]
    fn test_required_len() {
        let data = [0i32; 10];
        assert_eq!(MatView::new(&data, 2, 3, 5).required_len(), 8);
        assert_eq!(MatView::new(&data, 0, 3, 5).required_len(), 0);
        assert_eq!(MatView::complex(&data, 2, 2, 3).required_len(), 10);
    }

    #[test]
    fn test_try_new_stride_too_small() {
        let data = [0i8; 16];
        let err = MatView::try_new(&data, 2, 4, 3).unwrap_err();
        assert_eq!(err, KernelError::StrideTooSmall { stride: 3, cols: 4 });
    }

    #[test]
    fn test_try_new_buffer_too_small() {
        let data = [0i32; 7];
        let err = MatView::try_new(&data, 2, 3, 5).unwrap_err();
        assert!(matches!(
            err,
            KernelError::BufferTooSmall { needed: 8, len: 7, .. }
        ));
    }

    #[test]
    fn test_empty_rows_ignore_stride() {
        let data: [i16; 0] = [];
        let v = MatView::new(&data, 3, 0, 4);
        assert!(v.row(2).is_empty());
    }

    #[test]
    fn test_complex_get() {
        // 1x2 complex matrix: (1 + 2i), (3 + 4i)
        let data = [1i16, 2, 3, 4];
        let v = MatView::complex(&data, 1, 2, 2);
        assert_eq!(v.get_complex(0, 1), Complex::new(3, 4));
        assert_eq!(v.row(0).len(), 4);
    }

    #[test]
    fn test_rows_mut_skips_padding() {
        let mut data = [0i32; 7];
        let v = MatViewMut::new(&mut data, 2, 2, 5);
        for (m, row) in v.rows_mut() {
            row.fill(m as i32 + 1);
        }
        assert_eq!(data, [1, 1, 0, 0, 0, 2, 2]);
    }

    #[test]
    fn test_split_cyclic_disjoint() {
        let mut data = [0i32; 5];
        let v = MatViewMut::contiguous(&mut data, 5, 1);
        let sets = v.split_cyclic(2);
        assert_eq!(sets.len(), 2);
        let idx: Vec<Vec<usize>> = sets
            .iter()
            .map(|s| s.rows.iter().map(|(m, _)| *m).collect())
            .collect();
        assert_eq!(idx, vec![vec![0, 2, 4], vec![1, 3]]);
        for set in sets {
            for (_, row) in set.rows {
                row[0] = set.worker as i32 + 10;
            }
        }
        assert_eq!(data, [10, 11, 10, 11, 10]);
    }

    #[test]
    fn test_split_more_workers_than_rows() {
        let mut data = [0i8; 2];
        let sets = MatViewMut::contiguous(&mut data, 2, 1).split_cyclic(4);
        let sizes: Vec<usize> = sets.iter().map(|s| s.rows.len()).collect();
        assert_eq!(sizes, vec![1, 1, 0, 0]);
    }
}
