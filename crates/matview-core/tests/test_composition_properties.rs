//! Property tests for composing views.
//!
//! Nesting bands and blocks must land on the same parent offsets as the
//! equivalent direct view, and `position` must agree with traversal.

use matview_core::{
    layout::{Layout, MatrixLayout},
    view::{Traverse, ViewExt},
};
use proptest::prelude::*;

fn band(extent: usize, a: usize, b: usize) -> (usize, usize) {
    let start = a % (extent + 1);
    let len = b % (extent - start + 1);
    (start, len)
}

fn traverse<V: Traverse>(mut view: V) -> Vec<usize> {
    view.offsets().collect()
}

fn by_position<L: Layout>(layout: &L) -> Vec<usize> {
    let shape = layout.shape();
    (0..shape.n_elem())
        .map(|m| layout.position(m % shape.n_rows, m / shape.n_rows))
        .collect()
}

proptest! {
    #[test]
    fn row_band_of_col_band_equals_block(
        n_rows in 1usize..9,
        n_cols in 1usize..9,
        a in 0usize..64,
        b in 0usize..64,
        c in 0usize..64,
        d in 0usize..64,
    ) {
        let m = MatrixLayout::new(n_rows, n_cols);
        let (row0, nr) = band(n_rows, a, b);
        let (col0, nc) = band(n_cols, c, d);

        let cols = m.col_band(col0..col0 + nc).unwrap();
        let nested = cols.row_band(row0..row0 + nr).unwrap();
        let direct = m.submat(row0, col0, nr, nc).unwrap();

        prop_assert_eq!(nested.shape(), direct.shape());
        prop_assert_eq!(by_position(&nested), by_position(&direct));
        prop_assert_eq!(traverse(nested), traverse(direct));
    }

    #[test]
    fn row_of_block_is_strided_run(
        n_rows in 1usize..9,
        n_cols in 1usize..9,
        a in 0usize..64,
        c in 0usize..64,
        d in 0usize..64,
    ) {
        let m = MatrixLayout::new(n_rows, n_cols);
        let row0 = a % n_rows;
        let (col0, nc) = band(n_cols, c, d);
        let block = m.submat(row0, col0, n_rows - row0, nc).unwrap();

        let offsets = traverse(block.row_at(0).unwrap());
        let expected: Vec<usize> = (col0..col0 + nc).map(|j| row0 + j * n_rows).collect();
        prop_assert_eq!(offsets, expected);
    }
}
