//! Job descriptors for the parallel entry points.
//!
//! A job bundles every operand view, the output view and the worker count
//! of one parallel kernel call. The caller builds it right before the call;
//! the parallel glue consumes it and every worker reads the same operands.

use crate::dtype::Element;
use crate::error::{KernelError, Result};
use crate::isa::Environment;
use crate::view::{MatView, MatViewMut};

/// Which multiplication a [`MatMultJob`] describes; decides how `B` is shaped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MultLayout {
    /// `B` is `N x O`.
    Plain,
    /// `B` is `O x N`, rows of `B` are columns of the product.
    Transposed,
}

/// Operands of a parallel `C = A * B` (real or complex, plain or transposed).
#[derive(Debug)]
pub struct MatMultJob<'a, T> {
    /// The product the shapes were validated for.
    pub layout: MultLayout,
    pub a: MatView<'a, T>,
    pub b: MatView<'a, T>,
    pub c: MatViewMut<'a, i32>,
    pub n_pe: usize,
}

fn mult_shape<T: Element>(
    layout: MultLayout,
    a: &MatView<'_, T>,
    b: &MatView<'_, T>,
    c: &MatViewMut<'_, i32>,
) -> Result<()> {
    let (b_inner, o) = match layout {
        MultLayout::Plain => (b.rows(), b.cols()),
        MultLayout::Transposed => (b.cols(), b.rows()),
    };
    if b_inner != a.cols() {
        return Err(KernelError::ShapeMismatch {
            expected: (a.cols(), o),
            got: (b.rows(), b.cols()),
        });
    }
    if (c.rows(), c.cols()) != (a.rows(), o) {
        return Err(KernelError::ShapeMismatch {
            expected: (a.rows(), o),
            got: (c.rows(), c.cols()),
        });
    }
    if a.is_complex() != b.is_complex() || a.is_complex() != c.is_complex() {
        return Err(KernelError::ShapeMismatch {
            expected: (a.rows(), o),
            got: (c.rows(), c.cols()),
        });
    }
    Ok(())
}

impl<'a, T: Element> MatMultJob<'a, T> {
    /// Build a job without validation beyond debug assertions.
    pub fn new(
        layout: MultLayout,
        a: MatView<'a, T>,
        b: MatView<'a, T>,
        c: MatViewMut<'a, i32>,
        n_pe: usize,
    ) -> Self {
        debug_assert!(n_pe > 0, "worker count must be at least 1");
        debug_assert!(
            mult_shape(layout, &a, &b, &c).is_ok(),
            "incompatible shapes: {:?} x {:?} -> {:?}",
            a,
            b,
            c
        );
        MatMultJob {
            layout,
            a,
            b,
            c,
            n_pe,
        }
    }

    pub fn try_new(
        layout: MultLayout,
        a: MatView<'a, T>,
        b: MatView<'a, T>,
        c: MatViewMut<'a, i32>,
        n_pe: usize,
    ) -> Result<Self> {
        if n_pe == 0 {
            return Err(KernelError::ZeroWorkers);
        }
        mult_shape(layout, &a, &b, &c)?;
        Ok(Self::new(layout, a, b, c, n_pe))
    }

    /// A job with one worker per core the environment reports.
    pub fn sized_for<E: Environment + ?Sized>(
        env: &E,
        layout: MultLayout,
        a: MatView<'a, T>,
        b: MatView<'a, T>,
        c: MatViewMut<'a, i32>,
    ) -> Self {
        Self::new(layout, a, b, c, env.num_cores())
    }

    /// Output rows.
    pub fn m(&self) -> usize {
        self.a.rows()
    }

    /// Contraction length.
    pub fn n(&self) -> usize {
        self.a.cols()
    }

    /// Output columns.
    pub fn o(&self) -> usize {
        self.c.cols()
    }
}

/// Operands of a parallel `Y = A - B`.
#[derive(Debug)]
pub struct MatSubJob<'a, T> {
    pub a: MatView<'a, T>,
    pub b: MatView<'a, T>,
    pub y: MatViewMut<'a, T>,
    pub n_pe: usize,
}

impl<'a, T: Element> MatSubJob<'a, T> {
    pub fn new(a: MatView<'a, T>, b: MatView<'a, T>, y: MatViewMut<'a, T>, n_pe: usize) -> Self {
        debug_assert!(n_pe > 0, "worker count must be at least 1");
        debug_assert_eq!((a.rows(), a.cols()), (b.rows(), b.cols()));
        debug_assert_eq!((a.rows(), a.cols()), (y.rows(), y.cols()));
        MatSubJob { a, b, y, n_pe }
    }

    pub fn try_new(
        a: MatView<'a, T>,
        b: MatView<'a, T>,
        y: MatViewMut<'a, T>,
        n_pe: usize,
    ) -> Result<Self> {
        if n_pe == 0 {
            return Err(KernelError::ZeroWorkers);
        }
        for got in [(b.rows(), b.cols()), (y.rows(), y.cols())] {
            if got != (a.rows(), a.cols()) {
                return Err(KernelError::ShapeMismatch {
                    expected: (a.rows(), a.cols()),
                    got,
                });
            }
        }
        Ok(MatSubJob { a, b, y, n_pe })
    }

    /// A job with one worker per core the environment reports.
    pub fn sized_for<E: Environment + ?Sized>(
        env: &E,
        a: MatView<'a, T>,
        b: MatView<'a, T>,
        y: MatViewMut<'a, T>,
    ) -> Self {
        Self::new(a, b, y, env.num_cores())
    }

    pub fn m(&self) -> usize {
        self.a.rows()
    }

    pub fn n(&self) -> usize {
        self.a.cols()
    }
}
