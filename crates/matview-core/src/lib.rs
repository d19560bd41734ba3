//! Zero-copy views into column-major matrices.
//!
//! A view never owns or copies element data. It describes a sub-region of a
//! parent matrix (a block, a row, a diagonal, an arbitrary gather of rows and
//! columns) and translates its own coordinates into physical offsets of the
//! parent's column-major buffer. Because every view is itself a [`Layout`],
//! views compose: a row of a block of a column band still resolves straight
//! to offsets of the root buffer.
//!
//! # Key Concepts
//!
//! - **Layout**: anything with a shape and a coordinate-to-offset mapping
//! - **Traversal**: a per-view cursor yielding offsets in column-major order
//! - **Selectors**: validated index lists for gather views
//!
//! # Modules
//!
//! - [`access`]: applying a view's offsets to a backing slice
//! - [`config`]: traversal configuration and the process-wide default
//! - [`error`]: error types for view construction and traversal
//! - [`layout`]: the [`Layout`] trait and the root [`MatrixLayout`]
//! - [`types`]: shapes, spans and index selectors
//! - [`view`]: the view family and the [`ViewExt`] constructors
//!
//! # Example
//! ```
//! use matview_core::prelude::*;
//!
//! let m = MatrixLayout::new(4, 3);
//! let mut block = m.submat(1, 1, 2, 2).unwrap();
//! assert_eq!(block.offsets().collect::<Vec<_>>(), vec![5, 6, 9, 10]);
//! ```
//!
//! [`Layout`]: layout::Layout
//! [`MatrixLayout`]: layout::MatrixLayout
//! [`ViewExt`]: view::ViewExt

pub mod access;
pub mod config;
pub mod error;
pub mod layout;
pub mod types;
pub mod view;

#[cfg(any(test, feature = "test-utils"))]
pub mod utils;

// Re-export commonly used items at the crate root
pub use error::{Result, ViewError};

/// Prelude module for convenient imports.
///
/// # Example
/// ```
/// use matview_core::prelude::*;
/// ```
pub mod prelude {
    pub use crate::access::{fill, for_each_mut, read_into, write_from};
    pub use crate::config::{view_config, ExhaustionPolicy, ViewConfig, ViewConfigBuilder};
    pub use crate::error::{Result, ViewError};
    pub use crate::layout::{Layout, MatrixLayout};
    pub use crate::types::{IndexSelector, Orientation, Shape, Span};
    pub use crate::view::{
        Block, Col, Cols, ColumnList, Diagonal, ElementList, Offsets, Row, RowColumnList, RowList,
        Rows, SubVector, Traverse, ViewExt,
    };
}
