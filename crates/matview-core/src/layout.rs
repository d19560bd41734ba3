//! The coordinate contract shared by backing matrices and views.
//!
//! [`Layout`] is the only thing a view needs from whatever it wraps: the
//! logical shape and a way to turn a logical position into a physical
//! offset. Plain column-major buffers resolve a linear index to itself;
//! views delegate to their parent, which is what makes views of views work.

use crate::{
    error::{Result, ViewError},
    types::{Orientation, Shape},
};
use nalgebra::{
    storage::{IsContiguous, RawStorage},
    Dim, Matrix,
};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A matrix-shaped object that maps logical coordinates to physical offsets.
///
/// Offsets always refer to the innermost column-major buffer. Both mapping
/// functions are unchecked: callers either stay within [`Layout::shape`] or
/// use the `try_` variants.
pub trait Layout {
    /// Logical shape, fixed for the lifetime of the object.
    fn shape(&self) -> Shape;

    /// Physical offset of element `(row, col)`.
    fn position(&self, row: usize, col: usize) -> usize;

    /// Physical offset of the `n`-th element in column-major order.
    fn resolve(&self, n: usize) -> usize {
        let (row, col) = self.shape().coords(n);
        self.position(row, col)
    }

    /// Number of rows.
    fn n_rows(&self) -> usize {
        self.shape().n_rows
    }

    /// Number of columns.
    fn n_cols(&self) -> usize {
        self.shape().n_cols
    }

    /// Number of elements.
    fn n_elem(&self) -> usize {
        self.shape().n_elem()
    }

    /// Orientation of the object.
    fn orientation(&self) -> Orientation {
        self.shape().orientation
    }

    /// Bounds-checked [`Layout::position`].
    fn try_position(&self, row: usize, col: usize) -> Result<usize> {
        let shape = self.shape();
        if row >= shape.n_rows {
            return Err(ViewError::out_of_bounds("row", row, shape.n_rows));
        }
        if col >= shape.n_cols {
            return Err(ViewError::out_of_bounds("column", col, shape.n_cols));
        }
        Ok(self.position(row, col))
    }

    /// Bounds-checked [`Layout::resolve`].
    fn try_resolve(&self, n: usize) -> Result<usize> {
        let n_elem = self.n_elem();
        if n >= n_elem {
            return Err(ViewError::out_of_bounds("element", n, n_elem));
        }
        Ok(self.resolve(n))
    }
}

/// Shape of a plain column-major buffer, detached from its storage.
///
/// Views built on a `MatrixLayout` borrow only this descriptor, so the
/// buffer itself stays free to be written through the offsets they yield.
/// Resizing the buffer while such views are alive invalidates them; keeping
/// the two in sync is the caller's job.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MatrixLayout {
    shape: Shape,
}

impl MatrixLayout {
    /// Layout of an `n_rows x n_cols` matrix.
    pub const fn new(n_rows: usize, n_cols: usize) -> Self {
        Self {
            shape: Shape::matrix(n_rows, n_cols),
        }
    }

    /// Layout of a column vector of `len` elements.
    pub const fn column(len: usize) -> Self {
        Self {
            shape: Shape::column(len),
        }
    }

    /// Layout of a row vector of `len` elements.
    pub const fn row(len: usize) -> Self {
        Self {
            shape: Shape::row(len),
        }
    }

    /// Capture the shape of an existing backing matrix.
    pub fn of<L: Layout + ?Sized>(matrix: &L) -> Self {
        Self {
            shape: matrix.shape(),
        }
    }
}

impl Layout for MatrixLayout {
    fn shape(&self) -> Shape {
        self.shape
    }

    #[inline]
    fn position(&self, row: usize, col: usize) -> usize {
        row + col * self.shape.n_rows
    }

    #[inline]
    fn resolve(&self, n: usize) -> usize {
        n
    }
}

/// Contiguous nalgebra matrices are column-major buffers.
///
/// Statically sized single-column types report [`Orientation::Column`],
/// single-row types [`Orientation::Row`]; everything else, including
/// dynamically sized matrices that happen to have one column, is a matrix.
impl<T, R, C, S> Layout for Matrix<T, R, C, S>
where
    R: Dim,
    C: Dim,
    S: RawStorage<T, R, C> + IsContiguous,
{
    fn shape(&self) -> Shape {
        let orientation = if C::try_to_usize() == Some(1) {
            Orientation::Column
        } else if R::try_to_usize() == Some(1) {
            Orientation::Row
        } else {
            Orientation::Matrix
        };
        Shape {
            n_rows: self.nrows(),
            n_cols: self.ncols(),
            orientation,
        }
    }

    #[inline]
    fn position(&self, row: usize, col: usize) -> usize {
        row + col * self.nrows()
    }

    #[inline]
    fn resolve(&self, n: usize) -> usize {
        n
    }
}
