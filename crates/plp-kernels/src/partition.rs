//! Static row-cyclic work partitioning.
//!
//! Worker `c` of `n_pe` owns rows `c, c + n_pe, c + 2 * n_pe, ...`. The
//! assignment is computed from values passed in, never from a global core
//! query, and the row sets of all workers tile `0..total` exactly once.

use std::iter::FusedIterator;

/// Identity of one worker within a fan-out of `count` workers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Worker {
    pub id: usize,
    pub count: usize,
}

impl Worker {
    pub fn new(id: usize, count: usize) -> Self {
        debug_assert!(count > 0, "worker count must be at least 1");
        debug_assert!(id < count, "worker id {} out of {}", id, count);
        Worker { id, count }
    }

    /// The only worker of a single-core run; owns every row.
    pub fn single() -> Self {
        Worker { id: 0, count: 1 }
    }

    /// Rows of a `total`-row output this worker computes.
    pub fn rows(&self, total: usize) -> AssignedRows {
        assigned_rows(total, self.count, self.id)
    }
}

/// Ascending row indices owned by one worker.
#[derive(Debug, Clone)]
pub struct AssignedRows {
    next: usize,
    total: usize,
    step: usize,
}

/// Rows `{worker, worker + count, ...}` below `total`.
pub fn assigned_rows(total: usize, count: usize, worker: usize) -> AssignedRows {
    debug_assert!(count > 0, "worker count must be at least 1");
    AssignedRows {
        next: worker,
        total,
        step: count.max(1),
    }
}

/// The worker that owns `row` when `count` workers share the output.
#[inline]
pub fn owner_of(row: usize, count: usize) -> usize {
    row % count
}

impl Iterator for AssignedRows {
    type Item = usize;

    #[inline]
    fn next(&mut self) -> Option<usize> {
        if self.next >= self.total {
            return None;
        }
        let row = self.next;
        self.next = self.next.saturating_add(self.step);
        Some(row)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = if self.next >= self.total {
            0
        } else {
            (self.total - self.next).div_ceil(self.step)
        };
        (n, Some(n))
    }
}

impl ExactSizeIterator for AssignedRows {}

impl FusedIterator for AssignedRows {}
