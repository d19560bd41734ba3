//! Shared helpers for tests and benchmarks.
//!
//! The helpers build expected offsets straight from the column-major
//! formula, independently of any view's traversal logic.

#![cfg(any(test, feature = "test-utils"))]

use crate::{layout::Layout, view::Traverse};
use nalgebra::DMatrix;

/// A matrix whose element at `(i, j)` holds its own column-major offset.
///
/// Reading through a view then yields the view's offsets as values.
pub fn sequential_matrix(n_rows: usize, n_cols: usize) -> DMatrix<usize> {
    DMatrix::from_fn(n_rows, n_cols, |i, j| i + j * n_rows)
}

/// Offsets of a view, collected from a fresh traversal.
pub fn collect_offsets<V: Traverse + ?Sized>(view: &mut V) -> Vec<usize> {
    view.reset();
    let mut out = Vec::with_capacity(view.n_elem());
    while view.remaining() > 0 {
        match view.next() {
            Ok(offset) => out.push(offset),
            Err(_) => break,
        }
    }
    out
}

/// Offsets obtained by evaluating `position` over the view's shape in
/// column-major order.
pub fn offsets_by_position<L: Layout + ?Sized>(layout: &L) -> Vec<usize> {
    let shape = layout.shape();
    (0..shape.n_elem())
        .map(|m| {
            let (row, col) = shape.coords(m);
            layout.position(row, col)
        })
        .collect()
}

/// Expected offsets of the block with corner `(row0, col0)` in a matrix
/// with `parent_rows` rows.
pub fn expected_block(
    parent_rows: usize,
    row0: usize,
    col0: usize,
    n_rows: usize,
    n_cols: usize,
) -> Vec<usize> {
    (col0..col0 + n_cols)
        .flat_map(|j| (row0..row0 + n_rows).map(move |i| i + j * parent_rows))
        .collect()
}

/// Expected offsets of the row/column gather `rows x cols`.
pub fn expected_gather(parent_rows: usize, rows: &[usize], cols: &[usize]) -> Vec<usize> {
    cols.iter()
        .flat_map(|&j| rows.iter().map(move |&i| i + j * parent_rows))
        .collect()
}
