//! Views driven by caller-supplied index lists.
//!
//! Selectors are taken as given: entries may repeat or appear in any order,
//! and the view then revisits or reorders the corresponding cells. Every
//! entry is checked against the parent's extent when the view is built.

use super::base::{view_common, Cursor, Traverse};
use crate::{
    config::{view_config, ViewConfig},
    error::Result,
    layout::Layout,
    types::{check_selector, Orientation, Shape},
};

/// Whole columns picked by index, in selector order.
#[derive(Debug)]
pub struct ColumnList<'a, P: ?Sized> {
    parent: &'a P,
    cols: &'a [usize],
    parent_rows: usize,
    shape: Shape,
    cursor: Cursor,
    config: ViewConfig,
}

view_common!(ColumnList);

impl<'a, P: Layout + ?Sized> ColumnList<'a, P> {
    /// Create a view of columns `cols` of `parent`.
    pub fn new(parent: &'a P, cols: &'a [usize]) -> Result<Self> {
        let ps = parent.shape();
        check_selector("column", cols, ps.n_cols)?;

        let orientation = match ps.orientation {
            Orientation::Row => Orientation::Row,
            _ => Orientation::Matrix,
        };
        tracing::trace!(n_rows = ps.n_rows, n_cols = cols.len(), "constructed column-list view");

        Ok(Self {
            parent,
            cols,
            parent_rows: ps.n_rows,
            shape: Shape {
                n_rows: ps.n_rows,
                n_cols: cols.len(),
                orientation,
            },
            cursor: Cursor::default(),
            config: *view_config(),
        })
    }

    /// The column selector.
    pub const fn indices(&self) -> &'a [usize] {
        self.cols
    }
}

impl<P: Layout + ?Sized> Layout for ColumnList<'_, P> {
    fn shape(&self) -> Shape {
        self.shape
    }

    fn position(&self, row: usize, col: usize) -> usize {
        self.parent.resolve(self.cols[col] * self.parent_rows + row)
    }
}

impl<P: Layout + ?Sized> Traverse for ColumnList<'_, P> {
    fn reset(&mut self) {
        self.cursor.reset();
    }

    fn next(&mut self) -> Result<usize> {
        if self.cursor.claim(self.shape.n_elem(), &self.config)? {
            self.cursor.start(0);
        } else {
            self.cursor.step_row(self.shape.n_rows);
        }
        self.cursor.local = self.cols[self.cursor.col] * self.parent_rows + self.cursor.row;
        Ok(self.parent.resolve(self.cursor.local))
    }

    fn remaining(&self) -> usize {
        self.cursor.remaining(self.shape.n_elem())
    }
}

/// Whole rows picked by index, in selector order.
#[derive(Debug)]
pub struct RowList<'a, P: ?Sized> {
    parent: &'a P,
    rows: &'a [usize],
    parent_rows: usize,
    shape: Shape,
    cursor: Cursor,
    config: ViewConfig,
}

view_common!(RowList);

impl<'a, P: Layout + ?Sized> RowList<'a, P> {
    /// Create a view of rows `rows` of `parent`.
    pub fn new(parent: &'a P, rows: &'a [usize]) -> Result<Self> {
        let ps = parent.shape();
        check_selector("row", rows, ps.n_rows)?;

        let orientation = match ps.orientation {
            Orientation::Column => Orientation::Column,
            _ => Orientation::Matrix,
        };
        tracing::trace!(n_rows = rows.len(), n_cols = ps.n_cols, "constructed row-list view");

        Ok(Self {
            parent,
            rows,
            parent_rows: ps.n_rows,
            shape: Shape {
                n_rows: rows.len(),
                n_cols: ps.n_cols,
                orientation,
            },
            cursor: Cursor::default(),
            config: *view_config(),
        })
    }

    /// The row selector.
    pub const fn indices(&self) -> &'a [usize] {
        self.rows
    }
}

impl<P: Layout + ?Sized> Layout for RowList<'_, P> {
    fn shape(&self) -> Shape {
        self.shape
    }

    fn position(&self, row: usize, col: usize) -> usize {
        self.parent.resolve(self.rows[row] + col * self.parent_rows)
    }
}

impl<P: Layout + ?Sized> Traverse for RowList<'_, P> {
    fn reset(&mut self) {
        self.cursor.reset();
    }

    fn next(&mut self) -> Result<usize> {
        if self.cursor.claim(self.shape.n_elem(), &self.config)? {
            self.cursor.start(0);
        } else {
            self.cursor.step_row(self.shape.n_rows);
        }
        self.cursor.local = self.rows[self.cursor.row] + self.cursor.col * self.parent_rows;
        Ok(self.parent.resolve(self.cursor.local))
    }

    fn remaining(&self) -> usize {
        self.cursor.remaining(self.shape.n_elem())
    }
}

/// Elements picked by linear index in the parent's own offset space.
///
/// A pure gather: the result is a column in selector order.
#[derive(Debug)]
pub struct ElementList<'a, P: ?Sized> {
    parent: &'a P,
    elems: &'a [usize],
    shape: Shape,
    cursor: Cursor,
    config: ViewConfig,
}

view_common!(ElementList);

impl<'a, P: Layout + ?Sized> ElementList<'a, P> {
    /// Create a view of elements `elems` of `parent`.
    pub fn new(parent: &'a P, elems: &'a [usize]) -> Result<Self> {
        check_selector("element", elems, parent.n_elem())?;
        tracing::trace!(n_elem = elems.len(), "constructed element-list view");

        Ok(Self {
            parent,
            elems,
            shape: Shape::column(elems.len()),
            cursor: Cursor::default(),
            config: *view_config(),
        })
    }

    /// The element selector.
    pub const fn indices(&self) -> &'a [usize] {
        self.elems
    }
}

impl<P: Layout + ?Sized> Layout for ElementList<'_, P> {
    fn shape(&self) -> Shape {
        self.shape
    }

    fn position(&self, row: usize, _col: usize) -> usize {
        self.parent.resolve(self.elems[row])
    }

    fn resolve(&self, n: usize) -> usize {
        self.parent.resolve(self.elems[n])
    }
}

impl<P: Layout + ?Sized> Traverse for ElementList<'_, P> {
    fn reset(&mut self) {
        self.cursor.reset();
    }

    fn next(&mut self) -> Result<usize> {
        if self.cursor.claim(self.shape.n_elem(), &self.config)? {
            self.cursor.start(0);
        } else {
            self.cursor.row += 1;
        }
        self.cursor.local = self.elems[self.cursor.row];
        Ok(self.parent.resolve(self.cursor.local))
    }

    fn remaining(&self) -> usize {
        self.cursor.remaining(self.shape.n_elem())
    }
}

/// The cross product of a row selection and a column selection.
///
/// Rows are gathered first; the column selector then indexes the gathered
/// intermediate, whose columns are `rows.len()` elements tall. Offsets in
/// that intermediate are resolved through it to the parent.
#[derive(Debug)]
pub struct RowColumnList<'a, P: ?Sized> {
    rows: RowList<'a, P>,
    cols: &'a [usize],
    shape: Shape,
    cursor: Cursor,
    config: ViewConfig,
}

impl<P: ?Sized> Clone for RowColumnList<'_, P> {
    fn clone(&self) -> Self {
        Self {
            rows: self.rows.clone(),
            cols: self.cols,
            shape: self.shape,
            cursor: self.cursor,
            config: self.config,
        }
    }
}

impl<'a, P: Layout + ?Sized> RowColumnList<'a, P> {
    /// Create a view of rows `rows` and columns `cols` of `parent`.
    pub fn new(parent: &'a P, rows: &'a [usize], cols: &'a [usize]) -> Result<Self> {
        check_selector("column", cols, parent.n_cols())?;
        let rows = RowList::new(parent, rows)?;
        let shape = Shape::matrix(rows.n_rows(), cols.len());
        tracing::trace!(
            n_rows = shape.n_rows,
            n_cols = shape.n_cols,
            "constructed row/column-list view"
        );

        Ok(Self {
            rows,
            cols,
            shape,
            cursor: Cursor::default(),
            config: *view_config(),
        })
    }

    /// Replace the traversal configuration of this view.
    pub fn with_config(mut self, config: ViewConfig) -> Self {
        self.config = config;
        self
    }

    /// The traversal configuration of this view.
    pub fn config(&self) -> &ViewConfig {
        &self.config
    }

    /// The object this view was built on.
    pub fn parent(&self) -> &'a P {
        self.rows.parent()
    }

    /// The row selector.
    pub const fn row_indices(&self) -> &'a [usize] {
        self.rows.indices()
    }

    /// The column selector.
    pub const fn col_indices(&self) -> &'a [usize] {
        self.cols
    }

    /// Offset of `(row, col)` in the row-gathered intermediate.
    fn selection_offset(&self, row: usize, col: usize) -> usize {
        self.cols[col] * self.shape.n_rows + row
    }
}

impl<P: Layout + ?Sized> Layout for RowColumnList<'_, P> {
    fn shape(&self) -> Shape {
        self.shape
    }

    fn position(&self, row: usize, col: usize) -> usize {
        self.rows.resolve(self.selection_offset(row, col))
    }
}

impl<P: Layout + ?Sized> Traverse for RowColumnList<'_, P> {
    fn reset(&mut self) {
        self.cursor.reset();
    }

    fn next(&mut self) -> Result<usize> {
        if self.cursor.claim(self.shape.n_elem(), &self.config)? {
            self.cursor.start(0);
        } else {
            self.cursor.step_row(self.shape.n_rows);
        }
        self.cursor.local = self.selection_offset(self.cursor.row, self.cursor.col);
        Ok(self.rows.resolve(self.cursor.local))
    }

    fn remaining(&self) -> usize {
        self.cursor.remaining(self.shape.n_elem())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ViewError;
    use crate::layout::MatrixLayout;
    use pretty_assertions::assert_eq;

    fn collect<V: Traverse>(view: &mut V) -> Vec<usize> {
        view.offsets().collect()
    }

    #[test]
    fn test_column_list_offsets() {
        let m = MatrixLayout::new(4, 3);
        let cols = [2, 0, 2];
        let mut view = ColumnList::new(&m, &cols).unwrap();
        assert_eq!(view.shape(), Shape::matrix(4, 3));
        assert_eq!(
            collect(&mut view),
            vec![8, 9, 10, 11, 0, 1, 2, 3, 8, 9, 10, 11]
        );
        assert_eq!(view.indices(), &cols);
    }

    #[test]
    fn test_row_list_offsets() {
        let m = MatrixLayout::new(4, 3);
        let rows = [3, 1];
        let mut view = RowList::new(&m, &rows).unwrap();
        assert_eq!(view.shape(), Shape::matrix(2, 3));
        assert_eq!(collect(&mut view), vec![3, 1, 7, 5, 11, 9]);
    }

    #[test]
    fn test_element_list_gather() {
        let v = MatrixLayout::column(5);
        let elems = [3, 3, 0];
        let mut view = ElementList::new(&v, &elems).unwrap();
        assert_eq!(view.shape(), Shape::column(3));
        assert_eq!(collect(&mut view), vec![3, 3, 0]);
    }

    #[test]
    fn test_row_column_list_offsets() {
        let m = MatrixLayout::new(4, 3);
        let rows = [1, 3];
        let cols = [2, 0];
        let mut view = RowColumnList::new(&m, &rows, &cols).unwrap();
        assert_eq!(view.shape(), Shape::matrix(2, 2));
        assert_eq!(collect(&mut view), vec![9, 11, 1, 3]);
        assert_eq!(view.position(1, 0), 11);
        assert_eq!(view.row_indices(), &rows);
        assert_eq!(view.col_indices(), &cols);
    }

    #[test]
    fn test_selector_entries_are_validated() {
        let m = MatrixLayout::new(4, 3);
        assert!(matches!(
            ColumnList::new(&m, &[0, 3]),
            Err(ViewError::OutOfBounds { index: 3, extent: 3, .. })
        ));
        assert!(matches!(
            RowList::new(&m, &[4]),
            Err(ViewError::OutOfBounds { index: 4, extent: 4, .. })
        ));
        assert!(matches!(
            ElementList::new(&m, &[0, 12]),
            Err(ViewError::OutOfBounds { index: 12, extent: 12, .. })
        ));
        assert!(RowColumnList::new(&m, &[0], &[5]).is_err());
        assert!(RowColumnList::new(&m, &[9], &[0]).is_err());
    }

    #[test]
    fn test_empty_selectors() {
        let m = MatrixLayout::new(4, 3);
        let mut cols = ColumnList::new(&m, &[]).unwrap();
        assert_eq!(cols.shape(), Shape::matrix(4, 0));
        assert!(collect(&mut cols).is_empty());

        let mut both = RowColumnList::new(&m, &[], &[1, 2]).unwrap();
        assert_eq!(both.n_elem(), 0);
        assert!(both.next().is_err());
    }

    #[test]
    fn test_vector_orientation_is_kept() {
        let col = MatrixLayout::column(4);
        let view = RowList::new(&col, &[2, 0]).unwrap();
        assert_eq!(view.shape(), Shape::column(2));

        let row = MatrixLayout::row(4);
        let view = ColumnList::new(&row, &[1, 1, 3]).unwrap();
        assert_eq!(view.shape(), Shape::row(3));
    }
}
