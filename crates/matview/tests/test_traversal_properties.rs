//! Property tests for the traversal protocol.
//!
//! Every view must visit each of its elements exactly once per cycle, in
//! column-major order over its own shape, and agree with `position`.

use matview::prelude::*;
use matview_core::utils::test_helpers::{
    collect_offsets, expected_block, expected_gather, offsets_by_position,
};
use proptest::prelude::*;

/// Pick a band `start..start + len` inside `extent` from two raw draws.
fn band(extent: usize, a: usize, b: usize) -> (usize, usize) {
    let start = a % (extent + 1);
    let len = b % (extent - start + 1);
    (start, len)
}

proptest! {
    #[test]
    fn block_offsets_follow_column_major_formula(
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
        let mut block = m.submat(row0, col0, nr, nc).unwrap();

        let traversed = collect_offsets(&mut block);
        prop_assert_eq!(traversed.len(), nr * nc);
        prop_assert_eq!(&traversed, &expected_block(n_rows, row0, col0, nr, nc));
        prop_assert_eq!(&traversed, &offsets_by_position(&block));
    }

    #[test]
    fn traversal_is_restartable(
        n_rows in 1usize..7,
        n_cols in 1usize..7,
        k in -6isize..7,
    ) {
        let m = MatrixLayout::new(n_rows, n_cols);
        prop_assume!(k < n_cols as isize && -k < n_rows as isize);
        let mut d = m.diag(k).unwrap();

        let first: Vec<usize> = d.offsets().collect();
        let second: Vec<usize> = d.offsets().collect();
        prop_assert_eq!(&first, &second);
        prop_assert_eq!(&first, &offsets_by_position(&d));
        prop_assert!(first.windows(2).all(|w| w[1] == w[0] + n_rows + 1));
    }

    #[test]
    fn gather_matches_reference(
        n_rows in 1usize..7,
        n_cols in 1usize..7,
        raw_rows in prop::collection::vec(0usize..64, 0..6),
        raw_cols in prop::collection::vec(0usize..64, 0..6),
    ) {
        let rows: Vec<usize> = raw_rows.iter().map(|r| r % n_rows).collect();
        let cols: Vec<usize> = raw_cols.iter().map(|c| c % n_cols).collect();
        let m = MatrixLayout::new(n_rows, n_cols);
        let mut view = m.gather_submat(&rows, &cols).unwrap();

        let expected = expected_gather(n_rows, &rows, &cols);
        prop_assert_eq!(collect_offsets(&mut view), expected.clone());
        prop_assert_eq!(offsets_by_position(&view), expected);
    }

    #[test]
    fn remaining_counts_down(n_rows in 0usize..6, n_cols in 0usize..6) {
        let m = MatrixLayout::new(n_rows, n_cols);
        let mut cols = m.col_band(..).unwrap();
        cols.reset();
        for left in (0..n_rows * n_cols).rev() {
            cols.next().unwrap();
            prop_assert_eq!(cols.remaining(), left);
        }
        prop_assert_eq!(cols.remaining(), 0);
    }
}

#[test]
fn test_every_view_kind_enumerates_its_shape() {
    let m = MatrixLayout::new(5, 4);
    let idx = [4, 0, 2];
    let v = MatrixLayout::column(7);

    let mut views: Vec<Box<dyn Traverse + '_>> = vec![
        Box::new(m.submat(1, 1, 3, 2).unwrap()),
        Box::new(m.row_band(2..4).unwrap()),
        Box::new(m.col_band(1..=2).unwrap()),
        Box::new(m.row_at(3).unwrap()),
        Box::new(m.col_at(0).unwrap()),
        Box::new(v.subvec(2..6).unwrap()),
        Box::new(m.diag(-1).unwrap()),
        Box::new(m.gather_cols(&idx[1..]).unwrap()),
        Box::new(m.gather_rows(&idx).unwrap()),
        Box::new(m.gather_elems(&idx).unwrap()),
        Box::new(m.gather_submat(&idx, &idx[1..]).unwrap()),
    ];

    for view in &mut views {
        let shape = view.shape();
        let traversed = collect_offsets(view.as_mut());
        assert_eq!(traversed.len(), shape.n_elem(), "{shape}");
        let by_position: Vec<usize> = (0..shape.n_elem())
            .map(|n| {
                let (row, col) = shape.coords(n);
                view.position(row, col)
            })
            .collect();
        assert_eq!(traversed, by_position, "{shape}");
    }
}

#[test]
fn test_exhaustion_policies() {
    let m = MatrixLayout::new(3, 3);
    let mut strict = m
        .row_at(0)
        .unwrap()
        .with_config(ViewConfig { exhaustion: ExhaustionPolicy::Fail });
    strict.reset();
    for _ in 0..3 {
        strict.next().unwrap();
    }
    assert_eq!(
        strict.next(),
        Err(ViewError::ProtocolMisuse { n_elem: 3 })
    );

    let mut cyclic = m
        .row_at(0)
        .unwrap()
        .with_config(ViewConfig { exhaustion: ExhaustionPolicy::Wrap });
    cyclic.reset();
    let two_cycles: Vec<usize> = (0..6).map(|_| cyclic.next().unwrap()).collect();
    assert_eq!(two_cycles, vec![0, 3, 6, 0, 3, 6]);
}

#[test]
fn test_empty_views_fail_under_either_policy() {
    let m = MatrixLayout::new(3, 3);
    for exhaustion in [ExhaustionPolicy::Fail, ExhaustionPolicy::Wrap] {
        let mut empty = m
            .submat(0, 0, 0, 2)
            .unwrap()
            .with_config(ViewConfig { exhaustion });
        empty.reset();
        assert_eq!(empty.remaining(), 0);
        assert!(matches!(empty.next(), Err(ViewError::ProtocolMisuse { n_elem: 0 })));
    }
}
