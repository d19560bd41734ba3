//! Reading and writing backing buffers through a view.
//!
//! Views only produce offsets; these helpers apply them to a column-major
//! slice. Each helper checks every offset against the buffer before it
//! touches anything, so a failed call leaves the buffer unchanged.

use crate::{
    error::{Result, ViewError},
    view::{Offsets, Traverse},
};

fn check_offsets<V: Traverse + ?Sized>(view: &mut V, buffer_len: usize) -> Result<()> {
    match Offsets::new(view).find(|&offset| offset >= buffer_len) {
        Some(offset) => Err(ViewError::out_of_bounds("offset", offset, buffer_len)),
        None => Ok(()),
    }
}

fn check_len<V: Traverse + ?Sized>(view: &V, len: usize) -> Result<()> {
    if len == view.n_elem() {
        Ok(())
    } else {
        Err(ViewError::dimension_mismatch(view.n_elem(), len))
    }
}

/// Copy the viewed elements of `buffer` into `out`, in view order.
pub fn read_into<T, V>(view: &mut V, buffer: &[T], out: &mut [T]) -> Result<()>
where
    T: Clone,
    V: Traverse + ?Sized,
{
    check_len(&*view, out.len())?;
    check_offsets(view, buffer.len())?;
    for (slot, offset) in out.iter_mut().zip(Offsets::new(view)) {
        slot.clone_from(&buffer[offset]);
    }
    Ok(())
}

/// Write `values`, in view order, into the viewed elements of `buffer`.
///
/// When the view aliases a cell more than once the last write wins.
pub fn write_from<T, V>(view: &mut V, buffer: &mut [T], values: &[T]) -> Result<()>
where
    T: Clone,
    V: Traverse + ?Sized,
{
    check_len(&*view, values.len())?;
    check_offsets(view, buffer.len())?;
    for (value, offset) in values.iter().zip(Offsets::new(view)) {
        buffer[offset].clone_from(value);
    }
    Ok(())
}

/// Set every viewed element of `buffer` to `value`.
pub fn fill<T, V>(view: &mut V, buffer: &mut [T], value: T) -> Result<()>
where
    T: Clone,
    V: Traverse + ?Sized,
{
    for_each_mut(view, buffer, |cell| cell.clone_from(&value))
}

/// Apply `f` to every viewed element of `buffer`, in view order.
///
/// Aliased cells are visited once per occurrence in the view.
pub fn for_each_mut<T, V, F>(view: &mut V, buffer: &mut [T], mut f: F) -> Result<()>
where
    V: Traverse + ?Sized,
    F: FnMut(&mut T),
{
    check_offsets(view, buffer.len())?;
    for offset in Offsets::new(view) {
        f(&mut buffer[offset]);
    }
    Ok(())
}
