//! The k-th diagonal of a matrix.
//!
//! `k = 0` is the main diagonal, `k > 0` the k-th super-diagonal and
//! `k < 0` the k-th sub-diagonal. Consecutive elements are one row and one
//! column apart, i.e. `n_rows + 1` physical offsets.

use super::base::{view_common, Cursor, Traverse};
use crate::{
    config::{view_config, ViewConfig},
    error::{Result, ViewError},
    layout::Layout,
    types::Shape,
};

/// Column view of the k-th diagonal of a matrix.
#[derive(Debug)]
pub struct Diagonal<'a, P: ?Sized> {
    parent: &'a P,
    k: isize,
    start: usize,
    stride: usize,
    shape: Shape,
    cursor: Cursor,
    config: ViewConfig,
}

view_common!(Diagonal);

impl<'a, P: Layout + ?Sized> Diagonal<'a, P> {
    /// Create a view of the main diagonal.
    pub fn main(parent: &'a P) -> Result<Self> {
        Self::new(parent, 0)
    }

    /// Create a view of the k-th diagonal.
    ///
    /// Fails with `InvalidShape` when `parent` is a vector and with
    /// `OutOfBounds` when `k` lies outside the matrix.
    pub fn new(parent: &'a P, k: isize) -> Result<Self> {
        let ps = parent.shape();
        // Only vector orientation is rejected: a dynamically sized matrix
        // with a single row or column is still a matrix.
        if ps.orientation.is_vector() {
            return Err(ViewError::invalid_shape(format!(
                "diagonal requested on a {ps} vector"
            )));
        }

        let offset = k.unsigned_abs();
        let (start, len) = if k >= 0 {
            if offset > 0 && offset >= ps.n_cols {
                return Err(ViewError::out_of_bounds("super-diagonal", k, ps.n_cols));
            }
            (offset * ps.n_rows, ps.n_rows.min(ps.n_cols - offset))
        } else {
            if offset >= ps.n_rows {
                return Err(ViewError::out_of_bounds("sub-diagonal", k, ps.n_rows));
            }
            (offset, (ps.n_rows - offset).min(ps.n_cols))
        };
        tracing::trace!(k, len, "constructed diagonal view");

        Ok(Self {
            parent,
            k,
            start,
            stride: ps.n_rows + 1,
            shape: Shape::column(len),
            cursor: Cursor::default(),
            config: *view_config(),
        })
    }

    /// The diagonal index this view was built with.
    pub const fn k(&self) -> isize {
        self.k
    }
}

impl<P: Layout + ?Sized> Layout for Diagonal<'_, P> {
    fn shape(&self) -> Shape {
        self.shape
    }

    fn position(&self, row: usize, _col: usize) -> usize {
        self.parent.resolve(self.start + row * self.stride)
    }

    fn resolve(&self, n: usize) -> usize {
        self.parent.resolve(self.start + n * self.stride)
    }
}

impl<P: Layout + ?Sized> Traverse for Diagonal<'_, P> {
    fn reset(&mut self) {
        self.cursor.reset();
    }

    fn next(&mut self) -> Result<usize> {
        if self.cursor.claim(self.shape.n_elem(), &self.config)? {
            self.cursor.start(self.start);
        } else {
            self.cursor.local += self.stride;
        }
        Ok(self.parent.resolve(self.cursor.local))
    }

    fn remaining(&self) -> usize {
        self.cursor.remaining(self.shape.n_elem())
    }
}
