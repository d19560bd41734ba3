//! # matview
//!
//! Zero-copy views into column-major matrices.
//!
//! This crate re-exports [`matview_core`] together with the `nalgebra`
//! version it is built against, so that downstream code can depend on a
//! single crate.
//!
//! ## Quick Start
//!
//! ```
//! use matview::prelude::*;
//! use matview::nalgebra::DMatrix;
//!
//! let m = DMatrix::from_fn(4, 3, |i, j| (i + 4 * j) as f64);
//! let mut row = m.row_at(2).unwrap();
//! let mut out = [0.0; 3];
//! read_into(&mut row, m.as_slice(), &mut out).unwrap();
//! assert_eq!(out, [2.0, 6.0, 10.0]);
//! ```

pub use matview_core::*;

pub use nalgebra;

/// Commonly used items.
pub mod prelude {
    pub use matview_core::prelude::*;
}
