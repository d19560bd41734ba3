//! Shape descriptors and selectors shared by all view kinds.
//!
//! This module provides the small value types that describe *what* a view
//! addresses: the logical [`Shape`] and [`Orientation`] of a view, the
//! [`Span`] range selector and the exact-integer [`IndexSelector`] used by
//! the index-selected views.

use crate::error::{Result, ViewError};
use num_traits::{Float, PrimInt};
use std::ops::{Deref, Range, RangeFull, RangeInclusive};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// How a matrix-shaped object is oriented.
///
/// Vectors remember whether they are columns or rows so that sub-vector
/// views inherit the orientation instead of guessing it from shape numbers
/// (a `1 x 1` column is still a column).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Orientation {
    /// A general two-dimensional matrix.
    #[default]
    Matrix,
    /// A column vector (`n x 1`).
    Column,
    /// A row vector (`1 x n`).
    Row,
}

impl Orientation {
    /// Whether this is a column or row vector.
    pub const fn is_vector(self) -> bool {
        matches!(self, Self::Column | Self::Row)
    }
}

/// Logical shape of a matrix or view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Shape {
    /// Number of rows
    pub n_rows: usize,
    /// Number of columns
    pub n_cols: usize,
    /// Orientation inherited from the parent or fixed by the view kind
    pub orientation: Orientation,
}

impl Shape {
    /// A general matrix shape.
    pub const fn matrix(n_rows: usize, n_cols: usize) -> Self {
        Self {
            n_rows,
            n_cols,
            orientation: Orientation::Matrix,
        }
    }

    /// A column vector shape `(len, 1)`.
    pub const fn column(len: usize) -> Self {
        Self {
            n_rows: len,
            n_cols: 1,
            orientation: Orientation::Column,
        }
    }

    /// A row vector shape `(1, len)`.
    pub const fn row(len: usize) -> Self {
        Self {
            n_rows: 1,
            n_cols: len,
            orientation: Orientation::Row,
        }
    }

    /// A vector of `len` elements with the given orientation.
    ///
    /// `Orientation::Matrix` is treated as a column.
    pub const fn vector(len: usize, orientation: Orientation) -> Self {
        match orientation {
            Orientation::Row => Self::row(len),
            _ => Self::column(len),
        }
    }

    /// Total number of elements.
    pub const fn n_elem(&self) -> usize {
        self.n_rows * self.n_cols
    }

    /// Whether the shape holds no elements.
    pub const fn is_empty(&self) -> bool {
        self.n_elem() == 0
    }

    /// Row and column of logical index `k` in column-major order.
    ///
    /// Must not be called on an empty shape.
    pub const fn coords(&self, k: usize) -> (usize, usize) {
        (k % self.n_rows, k / self.n_rows)
    }
}

impl std::fmt::Display for Shape {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.n_rows, self.n_cols)
    }
}

/// A contiguous range of rows, columns or vector elements.
///
/// `Span::All` selects the whole extent. Ranges are stored half-open; the
/// [`Span::new`] constructor takes an inclusive `first..=last` pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Span {
    /// The entire extent.
    All,
    /// Positions `start..end`.
    Range {
        /// First selected position
        start: usize,
        /// One past the last selected position
        end: usize,
    },
}

impl Span {
    /// Select the whole extent.
    pub const fn all() -> Self {
        Self::All
    }

    /// Select positions `first..=last`.
    pub const fn new(first: usize, last: usize) -> Self {
        Self::Range {
            start: first,
            end: last.saturating_add(1),
        }
    }

    /// Resolve the span against an extent, returning `(start, len)`.
    pub fn resolve(&self, extent: usize) -> Result<(usize, usize)> {
        match *self {
            Self::All => Ok((0, extent)),
            Self::Range { start, end } => {
                if start > end {
                    return Err(ViewError::invalid_shape(format!(
                        "span start {start} is past its end {end}"
                    )));
                }
                if end > extent {
                    return Err(ViewError::out_of_bounds("span end", end, extent));
                }
                Ok((start, end - start))
            }
        }
    }
}

impl From<Range<usize>> for Span {
    fn from(range: Range<usize>) -> Self {
        Self::Range {
            start: range.start,
            end: range.end,
        }
    }
}

impl From<RangeInclusive<usize>> for Span {
    fn from(range: RangeInclusive<usize>) -> Self {
        Self::new(*range.start(), *range.end())
    }
}

impl From<RangeFull> for Span {
    fn from(_: RangeFull) -> Self {
        Self::All
    }
}

/// An ordered sequence of exact, non-negative positions.
///
/// Duplicates and unordered entries are preserved as given; they are what
/// gives index-selected views their gather and permutation semantics.
/// Views borrow the positions as `&[usize]`, so any slice works as a
/// selector; this type adds validated conversions from loosely typed input.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct IndexSelector {
    indices: Vec<usize>,
}

impl IndexSelector {
    /// Wrap a sequence of positions.
    pub fn new(indices: Vec<usize>) -> Self {
        Self { indices }
    }

    /// Convert floating point positions, rejecting negative, fractional
    /// and non-finite values.
    pub fn from_reals<F: Float>(values: &[F]) -> Result<Self> {
        let indices = values
            .iter()
            .enumerate()
            .map(|(entry, &v)| {
                if !v.is_finite() {
                    return Err(ViewError::invalid_selector(entry, "value is not finite"));
                }
                if v.fract() != F::zero() {
                    return Err(ViewError::invalid_selector(entry, "value is fractional"));
                }
                if v < F::zero() {
                    return Err(ViewError::invalid_selector(entry, "value is negative"));
                }
                v.to_usize().ok_or_else(|| {
                    ViewError::invalid_selector(entry, "value does not fit in usize")
                })
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { indices })
    }

    /// Convert integer positions of any primitive type, rejecting negatives.
    pub fn from_integers<I: PrimInt>(values: &[I]) -> Result<Self> {
        let indices = values
            .iter()
            .enumerate()
            .map(|(entry, &v)| {
                if v < I::zero() {
                    return Err(ViewError::invalid_selector(entry, "value is negative"));
                }
                v.to_usize().ok_or_else(|| {
                    ViewError::invalid_selector(entry, "value does not fit in usize")
                })
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { indices })
    }

    /// The positions as a slice.
    pub fn as_slice(&self) -> &[usize] {
        &self.indices
    }

    /// Consume the selector, returning its positions.
    pub fn into_inner(self) -> Vec<usize> {
        self.indices
    }
}

impl Deref for IndexSelector {
    type Target = [usize];

    fn deref(&self) -> &[usize] {
        &self.indices
    }
}

impl AsRef<[usize]> for IndexSelector {
    fn as_ref(&self) -> &[usize] {
        &self.indices
    }
}

impl From<Vec<usize>> for IndexSelector {
    fn from(indices: Vec<usize>) -> Self {
        Self { indices }
    }
}

impl FromIterator<usize> for IndexSelector {
    fn from_iter<It: IntoIterator<Item = usize>>(iter: It) -> Self {
        Self {
            indices: iter.into_iter().collect(),
        }
    }
}

/// Check every entry of `indices` against `extent`.
pub(crate) fn check_selector(what: &str, indices: &[usize], extent: usize) -> Result<()> {
    match indices.iter().find(|&&i| i >= extent) {
        Some(&bad) => Err(ViewError::out_of_bounds(what, bad, extent)),
        None => Ok(()),
    }
}
