//! The view family.
//!
//! Every view borrows its parent, computes its shape once at construction
//! and implements both [`Layout`] (so it can itself be the parent of another
//! view) and [`Traverse`] (so its offsets can be enumerated).
//!
//! - [`contiguous`]: blocks, row/column bands, single rows/columns, sub-vectors
//! - [`diagonal`]: main, super- and sub-diagonals
//! - [`indexed`]: column-, row- and element-lists and their row×column product

pub mod base;
pub mod contiguous;
pub mod diagonal;
pub mod indexed;

pub use base::{Offsets, Traverse};
pub use contiguous::{Block, Col, Cols, Row, Rows, SubVector};
pub use diagonal::Diagonal;
pub use indexed::{ColumnList, ElementList, RowColumnList, RowList};

use crate::{error::Result, layout::Layout, types::Span};

/// View constructors available on every [`Layout`].
///
/// Method names avoid the inherent methods of nalgebra matrices, which
/// would otherwise shadow them.
pub trait ViewExt: Layout {
    /// Block of `n_rows x n_cols` elements with top-left corner `(row0, col0)`.
    fn submat(
        &self,
        row0: usize,
        col0: usize,
        n_rows: usize,
        n_cols: usize,
    ) -> Result<Block<'_, Self>> {
        Block::new(self, row0, col0, n_rows, n_cols)
    }

    /// Block selected by a row span and a column span.
    fn submat_spans(
        &self,
        rows: impl Into<Span>,
        cols: impl Into<Span>,
    ) -> Result<Block<'_, Self>> {
        Block::from_spans(self, rows.into(), cols.into())
    }

    /// Whole rows in `rows`.
    fn row_band(&self, rows: impl Into<Span>) -> Result<Rows<'_, Self>> {
        Rows::from_span(self, rows.into())
    }

    /// Whole columns in `cols`.
    fn col_band(&self, cols: impl Into<Span>) -> Result<Cols<'_, Self>> {
        Cols::from_span(self, cols.into())
    }

    /// The first `n` rows.
    fn head_rows(&self, n: usize) -> Result<Rows<'_, Self>> {
        Rows::new(self, 0, n)
    }

    /// The last `n` rows.
    fn tail_rows(&self, n: usize) -> Result<Rows<'_, Self>> {
        Rows::new(self, self.n_rows().saturating_sub(n), n)
    }

    /// The first `n` columns.
    fn head_cols(&self, n: usize) -> Result<Cols<'_, Self>> {
        Cols::new(self, 0, n)
    }

    /// The last `n` columns.
    fn tail_cols(&self, n: usize) -> Result<Cols<'_, Self>> {
        Cols::new(self, self.n_cols().saturating_sub(n), n)
    }

    /// Row `row`.
    fn row_at(&self, row: usize) -> Result<Row<'_, Self>> {
        Row::new(self, row)
    }

    /// Column `col`.
    fn col_at(&self, col: usize) -> Result<Col<'_, Self>> {
        Col::new(self, col)
    }

    /// Elements of a vector in `span`.
    fn subvec(&self, span: impl Into<Span>) -> Result<SubVector<'_, Self>> {
        SubVector::from_span(self, span.into())
    }

    /// The first `n` elements of a vector.
    fn head_elems(&self, n: usize) -> Result<SubVector<'_, Self>> {
        SubVector::new(self, 0, n)
    }

    /// The last `n` elements of a vector.
    fn tail_elems(&self, n: usize) -> Result<SubVector<'_, Self>> {
        SubVector::new(self, self.n_elem().saturating_sub(n), n)
    }

    /// The k-th diagonal.
    fn diag(&self, k: isize) -> Result<Diagonal<'_, Self>> {
        Diagonal::new(self, k)
    }

    /// Columns picked by index.
    fn gather_cols<'a>(&'a self, cols: &'a [usize]) -> Result<ColumnList<'a, Self>> {
        ColumnList::new(self, cols)
    }

    /// Rows picked by index.
    fn gather_rows<'a>(&'a self, rows: &'a [usize]) -> Result<RowList<'a, Self>> {
        RowList::new(self, rows)
    }

    /// Elements picked by linear index.
    fn gather_elems<'a>(&'a self, elems: &'a [usize]) -> Result<ElementList<'a, Self>> {
        ElementList::new(self, elems)
    }

    /// Rows and columns picked by index.
    fn gather_submat<'a>(
        &'a self,
        rows: &'a [usize],
        cols: &'a [usize],
    ) -> Result<RowColumnList<'a, Self>> {
        RowColumnList::new(self, rows, cols)
    }
}

impl<L: Layout + ?Sized> ViewExt for L {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::MatrixLayout;
    use crate::types::Shape;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_ext_constructors() {
        let m = MatrixLayout::new(4, 3);
        let mut block = m.submat(1, 1, 2, 2).unwrap();
        assert_eq!(block.offsets().collect::<Vec<_>>(), vec![5, 6, 9, 10]);

        let block = m.submat_spans(1..3, ..).unwrap();
        assert_eq!(block.shape(), Shape::matrix(2, 3));

        assert_eq!(m.head_rows(1).unwrap().shape(), Shape::matrix(1, 3));
        assert_eq!(m.tail_cols(2).unwrap().position(0, 0), 4);
        assert_eq!(m.tail_rows(1).unwrap().position(0, 2), 11);
        assert_eq!(m.row_at(0).unwrap().shape(), Shape::row(3));
        assert_eq!(m.col_at(2).unwrap().position(3, 0), 11);

        let mut d = m.diag(1).unwrap();
        assert_eq!(d.offsets().collect::<Vec<_>>(), vec![4, 9]);
    }

    #[test]
    fn test_ext_vector_helpers() {
        let v = MatrixLayout::row(6);
        assert_eq!(v.head_elems(2).unwrap().shape(), Shape::row(2));
        assert_eq!(v.tail_elems(2).unwrap().first(), 4);
        assert_eq!(v.subvec(1..=3).unwrap().n_elem(), 3);
        assert!(v.tail_elems(7).is_err());
    }

    #[test]
    fn test_ext_gathers() {
        let m = MatrixLayout::new(3, 3);
        let idx = [2, 0];
        assert_eq!(m.gather_cols(&idx).unwrap().position(0, 0), 6);
        assert_eq!(m.gather_rows(&idx).unwrap().position(0, 1), 5);
        assert_eq!(m.gather_elems(&idx).unwrap().position(1, 0), 0);
        assert_eq!(m.gather_submat(&idx, &idx).unwrap().position(1, 0), 6);
    }

    #[test]
    fn test_dyn_traverse() {
        let m = MatrixLayout::new(2, 2);
        let mut views: Vec<Box<dyn Traverse + '_>> = vec![
            Box::new(m.row_at(1).unwrap()),
            Box::new(m.diag(0).unwrap()),
        ];
        let collected: Vec<Vec<usize>> = views
            .iter_mut()
            .map(|v| Offsets::new(v.as_mut()).collect())
            .collect();
        assert_eq!(collected, vec![vec![1, 3], vec![0, 3]]);
    }
}
