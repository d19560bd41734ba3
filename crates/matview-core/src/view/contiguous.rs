//! Views whose offsets form a few arithmetic progressions.
//!
//! Within one view column consecutive elements are one physical offset
//! apart; crossing into the next view column skips whatever part of the
//! parent column lies outside the view. Single rows and diagonals are the
//! degenerate case of one progression with a larger stride.

use super::base::{check_band, view_common, Cursor, Traverse};
use crate::{
    config::{view_config, ViewConfig},
    error::{Result, ViewError},
    layout::Layout,
    types::{Shape, Span},
};

/// Rectangular block: rows `row0..row0 + n_rows`, columns `col0..col0 + n_cols`.
#[derive(Debug)]
pub struct Block<'a, P: ?Sized> {
    parent: &'a P,
    row0: usize,
    col0: usize,
    parent_rows: usize,
    /// Parent rows outside the block, skipped at each column boundary.
    skip: usize,
    shape: Shape,
    cursor: Cursor,
    config: ViewConfig,
}

view_common!(Block);

impl<'a, P: Layout + ?Sized> Block<'a, P> {
    /// Create a block view of `n_rows x n_cols` elements whose top-left
    /// corner is `(row0, col0)`.
    ///
    /// Zero rows or columns give an empty view.
    pub fn new(
        parent: &'a P,
        row0: usize,
        col0: usize,
        n_rows: usize,
        n_cols: usize,
    ) -> Result<Self> {
        let ps = parent.shape();
        check_band("row", row0, n_rows, ps.n_rows)?;
        check_band("column", col0, n_cols, ps.n_cols)?;

        let shape = Shape {
            n_rows,
            n_cols,
            // a piece of a column is still a column
            orientation: ps.orientation,
        };
        tracing::trace!(row0, col0, n_rows, n_cols, "constructed block view");

        Ok(Self {
            parent,
            row0,
            col0,
            parent_rows: ps.n_rows,
            skip: ps.n_rows - n_rows,
            shape,
            cursor: Cursor::default(),
            config: *view_config(),
        })
    }

    /// Create a block from its inclusive corners `(first_row, first_col)`
    /// and `(last_row, last_col)`.
    pub fn from_corners(
        parent: &'a P,
        (first_row, first_col): (usize, usize),
        (last_row, last_col): (usize, usize),
    ) -> Result<Self> {
        Self::from_spans(
            parent,
            Span::new(first_row, last_row),
            Span::new(first_col, last_col),
        )
    }

    /// Create a block from a row span and a column span.
    pub fn from_spans(parent: &'a P, rows: Span, cols: Span) -> Result<Self> {
        let (row0, n_rows) = rows.resolve(parent.n_rows())?;
        let (col0, n_cols) = cols.resolve(parent.n_cols())?;
        Self::new(parent, row0, col0, n_rows, n_cols)
    }

    /// Top-left corner of the block in parent coordinates.
    pub const fn origin(&self) -> (usize, usize) {
        (self.row0, self.col0)
    }
}

impl<P: Layout + ?Sized> Layout for Block<'_, P> {
    fn shape(&self) -> Shape {
        self.shape
    }

    fn position(&self, row: usize, col: usize) -> usize {
        self.parent
            .resolve(self.row0 + row + (self.col0 + col) * self.parent_rows)
    }
}

impl<P: Layout + ?Sized> Traverse for Block<'_, P> {
    fn reset(&mut self) {
        self.cursor.reset();
    }

    fn next(&mut self) -> Result<usize> {
        if self.cursor.claim(self.shape.n_elem(), &self.config)? {
            self.cursor.start(self.row0 + self.col0 * self.parent_rows);
        } else if self.cursor.step_row(self.shape.n_rows) {
            self.cursor.local += 1 + self.skip;
        } else {
            self.cursor.local += 1;
        }
        Ok(self.parent.resolve(self.cursor.local))
    }

    fn remaining(&self) -> usize {
        self.cursor.remaining(self.shape.n_elem())
    }
}

/// Band of whole rows `row0..row0 + n_rows`.
///
/// Traverses like a [`Block`] spanning every parent column.
#[derive(Debug)]
pub struct Rows<'a, P: ?Sized> {
    block: Block<'a, P>,
}

impl<P: ?Sized> Clone for Rows<'_, P> {
    fn clone(&self) -> Self {
        Self {
            block: self.block.clone(),
        }
    }
}

impl<'a, P: Layout + ?Sized> Rows<'a, P> {
    /// Create a view of `n_rows` consecutive rows starting at `row0`.
    pub fn new(parent: &'a P, row0: usize, n_rows: usize) -> Result<Self> {
        let block = Block::new(parent, row0, 0, n_rows, parent.n_cols())?;
        Ok(Self { block })
    }

    /// Create a row band from a span of rows.
    pub fn from_span(parent: &'a P, rows: Span) -> Result<Self> {
        let (row0, n_rows) = rows.resolve(parent.n_rows())?;
        Self::new(parent, row0, n_rows)
    }

    /// Replace the traversal configuration of this view.
    pub fn with_config(self, config: ViewConfig) -> Self {
        Self {
            block: self.block.with_config(config),
        }
    }

    /// The traversal configuration of this view.
    pub fn config(&self) -> &ViewConfig {
        self.block.config()
    }

    /// The object this view was built on.
    pub fn parent(&self) -> &'a P {
        self.block.parent()
    }
}

impl<P: Layout + ?Sized> Layout for Rows<'_, P> {
    fn shape(&self) -> Shape {
        self.block.shape()
    }

    fn position(&self, row: usize, col: usize) -> usize {
        self.block.position(row, col)
    }
}

impl<P: Layout + ?Sized> Traverse for Rows<'_, P> {
    fn reset(&mut self) {
        self.block.reset();
    }

    fn next(&mut self) -> Result<usize> {
        self.block.next()
    }

    fn remaining(&self) -> usize {
        self.block.remaining()
    }
}

/// Band of whole columns `col0..col0 + n_cols`.
///
/// Parent column boundaries line up with the band's own, so the band is a
/// single contiguous run.
#[derive(Debug)]
pub struct Cols<'a, P: ?Sized> {
    parent: &'a P,
    col0: usize,
    parent_rows: usize,
    shape: Shape,
    cursor: Cursor,
    config: ViewConfig,
}

view_common!(Cols);

impl<'a, P: Layout + ?Sized> Cols<'a, P> {
    /// Create a view of `n_cols` consecutive columns starting at `col0`.
    pub fn new(parent: &'a P, col0: usize, n_cols: usize) -> Result<Self> {
        let ps = parent.shape();
        check_band("column", col0, n_cols, ps.n_cols)?;

        let shape = Shape {
            n_rows: ps.n_rows,
            n_cols,
            orientation: ps.orientation,
        };
        tracing::trace!(col0, n_cols, "constructed column band view");

        Ok(Self {
            parent,
            col0,
            parent_rows: ps.n_rows,
            shape,
            cursor: Cursor::default(),
            config: *view_config(),
        })
    }

    /// Create a column band from a span of columns.
    pub fn from_span(parent: &'a P, cols: Span) -> Result<Self> {
        let (col0, n_cols) = cols.resolve(parent.n_cols())?;
        Self::new(parent, col0, n_cols)
    }
}

impl<P: Layout + ?Sized> Layout for Cols<'_, P> {
    fn shape(&self) -> Shape {
        self.shape
    }

    fn position(&self, row: usize, col: usize) -> usize {
        self.parent.resolve(row + (self.col0 + col) * self.parent_rows)
    }

    fn resolve(&self, n: usize) -> usize {
        self.parent.resolve(self.col0 * self.parent_rows + n)
    }
}

impl<P: Layout + ?Sized> Traverse for Cols<'_, P> {
    fn reset(&mut self) {
        self.cursor.reset();
    }

    fn next(&mut self) -> Result<usize> {
        if self.cursor.claim(self.shape.n_elem(), &self.config)? {
            self.cursor.start(self.col0 * self.parent_rows);
        } else {
            self.cursor.local += 1;
        }
        Ok(self.parent.resolve(self.cursor.local))
    }

    fn remaining(&self) -> usize {
        self.cursor.remaining(self.shape.n_elem())
    }
}

/// Part of a single row, stepping one parent column at a time.
#[derive(Debug)]
pub struct Row<'a, P: ?Sized> {
    parent: &'a P,
    row: usize,
    col0: usize,
    parent_rows: usize,
    shape: Shape,
    cursor: Cursor,
    config: ViewConfig,
}

view_common!(Row);

impl<'a, P: Layout + ?Sized> Row<'a, P> {
    /// Create a view of the whole of row `row`.
    pub fn new(parent: &'a P, row: usize) -> Result<Self> {
        Self::with_span(parent, row, Span::All)
    }

    /// Create a view of row `row` restricted to a span of columns.
    pub fn with_span(parent: &'a P, row: usize, cols: Span) -> Result<Self> {
        let ps = parent.shape();
        if row >= ps.n_rows {
            return Err(ViewError::out_of_bounds("row", row, ps.n_rows));
        }
        let (col0, len) = cols.resolve(ps.n_cols)?;
        tracing::trace!(row, col0, len, "constructed row view");

        Ok(Self {
            parent,
            row,
            col0,
            parent_rows: ps.n_rows,
            shape: Shape::row(len),
            cursor: Cursor::default(),
            config: *view_config(),
        })
    }

    /// Index of the viewed row in the parent.
    pub const fn index(&self) -> usize {
        self.row
    }
}

impl<P: Layout + ?Sized> Layout for Row<'_, P> {
    fn shape(&self) -> Shape {
        self.shape
    }

    fn position(&self, _row: usize, col: usize) -> usize {
        self.parent
            .resolve(self.row + (self.col0 + col) * self.parent_rows)
    }

    fn resolve(&self, n: usize) -> usize {
        self.position(0, n)
    }
}

impl<P: Layout + ?Sized> Traverse for Row<'_, P> {
    fn reset(&mut self) {
        self.cursor.reset();
    }

    fn next(&mut self) -> Result<usize> {
        if self.cursor.claim(self.shape.n_elem(), &self.config)? {
            self.cursor.start(self.row + self.col0 * self.parent_rows);
        } else {
            self.cursor.local += self.parent_rows;
        }
        Ok(self.parent.resolve(self.cursor.local))
    }

    fn remaining(&self) -> usize {
        self.cursor.remaining(self.shape.n_elem())
    }
}

/// Part of a single column, a contiguous run.
#[derive(Debug)]
pub struct Col<'a, P: ?Sized> {
    parent: &'a P,
    col: usize,
    /// Parent offset of the first element.
    first: usize,
    shape: Shape,
    cursor: Cursor,
    config: ViewConfig,
}

view_common!(Col);

impl<'a, P: Layout + ?Sized> Col<'a, P> {
    /// Create a view of the whole of column `col`.
    pub fn new(parent: &'a P, col: usize) -> Result<Self> {
        Self::with_span(parent, col, Span::All)
    }

    /// Create a view of column `col` restricted to a span of rows.
    pub fn with_span(parent: &'a P, col: usize, rows: Span) -> Result<Self> {
        let ps = parent.shape();
        if col >= ps.n_cols {
            return Err(ViewError::out_of_bounds("column", col, ps.n_cols));
        }
        let (row0, len) = rows.resolve(ps.n_rows)?;
        tracing::trace!(col, row0, len, "constructed column view");

        Ok(Self {
            parent,
            col,
            first: row0 + col * ps.n_rows,
            shape: Shape::column(len),
            cursor: Cursor::default(),
            config: *view_config(),
        })
    }

    /// Index of the viewed column in the parent.
    pub const fn index(&self) -> usize {
        self.col
    }
}

impl<P: Layout + ?Sized> Layout for Col<'_, P> {
    fn shape(&self) -> Shape {
        self.shape
    }

    fn position(&self, row: usize, _col: usize) -> usize {
        self.parent.resolve(self.first + row)
    }

    fn resolve(&self, n: usize) -> usize {
        self.parent.resolve(self.first + n)
    }
}

impl<P: Layout + ?Sized> Traverse for Col<'_, P> {
    fn reset(&mut self) {
        self.cursor.reset();
    }

    fn next(&mut self) -> Result<usize> {
        if self.cursor.claim(self.shape.n_elem(), &self.config)? {
            self.cursor.start(self.first);
        } else {
            self.cursor.local += 1;
        }
        Ok(self.parent.resolve(self.cursor.local))
    }

    fn remaining(&self) -> usize {
        self.cursor.remaining(self.shape.n_elem())
    }
}

/// Contiguous run of elements of a vector.
///
/// The view is a column or a row depending on the parent vector; a general
/// matrix is rejected.
#[derive(Debug)]
pub struct SubVector<'a, P: ?Sized> {
    parent: &'a P,
    first: usize,
    shape: Shape,
    cursor: Cursor,
    config: ViewConfig,
}

view_common!(SubVector);

impl<'a, P: Layout + ?Sized> SubVector<'a, P> {
    /// Create a view of `len` elements starting at element `first`.
    pub fn new(parent: &'a P, first: usize, len: usize) -> Result<Self> {
        let ps = parent.shape();
        if !ps.orientation.is_vector() {
            return Err(ViewError::invalid_shape(format!(
                "sub-vector requested on a {ps} matrix"
            )));
        }
        check_band("element", first, len, ps.n_elem())?;
        tracing::trace!(first, len, orientation = ?ps.orientation, "constructed sub-vector view");

        Ok(Self {
            parent,
            first,
            shape: Shape::vector(len, ps.orientation),
            cursor: Cursor::default(),
            config: *view_config(),
        })
    }

    /// Create a sub-vector from a span of elements.
    pub fn from_span(parent: &'a P, span: Span) -> Result<Self> {
        let (first, len) = span.resolve(parent.n_elem())?;
        Self::new(parent, first, len)
    }

    /// Index of the first viewed element in the parent.
    pub const fn first(&self) -> usize {
        self.first
    }
}

impl<P: Layout + ?Sized> Layout for SubVector<'_, P> {
    fn shape(&self) -> Shape {
        self.shape
    }

    fn position(&self, row: usize, col: usize) -> usize {
        self.parent.resolve(self.first + row + col)
    }

    fn resolve(&self, n: usize) -> usize {
        self.parent.resolve(self.first + n)
    }
}

impl<P: Layout + ?Sized> Traverse for SubVector<'_, P> {
    fn reset(&mut self) {
        self.cursor.reset();
    }

    fn next(&mut self) -> Result<usize> {
        if self.cursor.claim(self.shape.n_elem(), &self.config)? {
            self.cursor.start(self.first);
        } else {
            self.cursor.local += 1;
        }
        Ok(self.parent.resolve(self.cursor.local))
    }

    fn remaining(&self) -> usize {
        self.cursor.remaining(self.shape.n_elem())
    }
}
