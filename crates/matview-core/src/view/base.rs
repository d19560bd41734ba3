//! Traversal protocol and the cursor state shared by every view kind.

use crate::{
    config::{ExhaustionPolicy, ViewConfig},
    error::{Result, ViewError},
    layout::Layout,
};

/// Restartable enumeration of a view's physical offsets.
///
/// After [`reset`](Traverse::reset) the view sits one before its first
/// element; each call to [`next`](Traverse::next) moves forward by one
/// logical element, in column-major order over the view's own shape, and
/// returns the offset of that element in the innermost buffer. A full cycle
/// is exactly [`Layout::n_elem`] calls. What happens on the call after that
/// is decided by the view's [`ExhaustionPolicy`].
pub trait Traverse: Layout {
    /// Rewind to the position before the first element.
    fn reset(&mut self);

    /// Advance one element and return its physical offset.
    fn next(&mut self) -> Result<usize>;

    /// Number of elements left in the current cycle.
    fn remaining(&self) -> usize;

    /// Reset and iterate over one full cycle of offsets.
    fn offsets(&mut self) -> Offsets<'_, Self>
    where
        Self: Sized,
    {
        Offsets::new(self)
    }
}

/// Iterator over one full traversal cycle of a view.
///
/// Created by [`Traverse::offsets`] or [`Offsets::new`]; both reset the
/// view first, so the iterator always yields exactly `n_elem` offsets.
#[derive(Debug)]
pub struct Offsets<'v, V: Traverse + ?Sized> {
    view: &'v mut V,
    remaining: usize,
}

impl<'v, V: Traverse + ?Sized> Offsets<'v, V> {
    /// Reset `view` and wrap it.
    pub fn new(view: &'v mut V) -> Self {
        view.reset();
        let remaining = view.n_elem();
        Self { view, remaining }
    }
}

impl<V: Traverse + ?Sized> Iterator for Offsets<'_, V> {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        let offset = self.view.next();
        // The view was reset in `new`, so a full cycle never exhausts it.
        debug_assert!(offset.is_ok(), "traversal failed within one cycle: {offset:?}");
        offset.ok()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<V: Traverse + ?Sized> ExactSizeIterator for Offsets<'_, V> {}

/// Per-instance traversal state.
///
/// `local` is the offset in the parent's own space; views hand it to
/// [`Layout::resolve`] on the parent to reach the innermost buffer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct Cursor {
    visited: usize,
    pub(crate) row: usize,
    pub(crate) col: usize,
    pub(crate) local: usize,
}

impl Cursor {
    pub(crate) fn reset(&mut self) {
        self.visited = 0;
    }

    pub(crate) const fn remaining(&self, n_elem: usize) -> usize {
        n_elem.saturating_sub(self.visited)
    }

    /// Claim the next element of a cycle of `n_elem`.
    ///
    /// Returns `true` when the claimed element is the first of its cycle, in
    /// which case the caller seeds the position with [`Cursor::start`]
    /// instead of stepping.
    pub(crate) fn claim(&mut self, n_elem: usize, config: &ViewConfig) -> Result<bool> {
        if self.visited >= n_elem {
            match config.exhaustion {
                ExhaustionPolicy::Wrap if n_elem > 0 => self.visited = 0,
                _ => return Err(ViewError::protocol_misuse(n_elem)),
            }
        }
        self.visited += 1;
        Ok(self.visited == 1)
    }

    pub(crate) fn start(&mut self, local: usize) {
        self.row = 0;
        self.col = 0;
        self.local = local;
    }

    /// Move down one row in a view with `n_rows` rows, wrapping into the
    /// next column. Returns `true` when a column boundary was crossed.
    pub(crate) fn step_row(&mut self, n_rows: usize) -> bool {
        self.row += 1;
        if self.row == n_rows {
            self.row = 0;
            self.col += 1;
            true
        } else {
            false
        }
    }
}

/// Check that `start..start + len` fits inside `extent`.
pub(crate) fn check_band(what: &str, start: usize, len: usize, extent: usize) -> Result<()> {
    match start.checked_add(len) {
        Some(end) if end <= extent => Ok(()),
        _ => Err(ViewError::out_of_bounds(
            format!("{what} end"),
            start.saturating_add(len),
            extent,
        )),
    }
}

/// Shared accessors and `Clone` for view types whose fields are all `Copy`.
macro_rules! view_common {
    ($name:ident) => {
        impl<'a, P: ?Sized> Clone for $name<'a, P> {
            fn clone(&self) -> Self {
                Self { ..*self }
            }
        }

        impl<'a, P: ?Sized> $name<'a, P> {
            /// Replace the traversal configuration of this view.
            pub fn with_config(mut self, config: $crate::config::ViewConfig) -> Self {
                self.config = config;
                self
            }

            /// The traversal configuration of this view.
            pub fn config(&self) -> &$crate::config::ViewConfig {
                &self.config
            }

            /// The object this view was built on.
            pub fn parent(&self) -> &'a P {
                self.parent
            }
        }
    };
}

pub(crate) use view_common;
