//! Classic array algorithms over a [`FixedArray`].
//!
//! Every algorithm here is a free function over the container:
//! - **Sentinel scans**: [`length`], [`search`], [`find_largest`], [`find_smallest`]
//!   stop at the first sentinel cell.
//! - **Length-bounded**: [`reverse`], [`binary_search`], [`sort`] work on `[0, length)`
//!   using the length the caller obtained from [`length`]. The length is validated
//!   against the container first, so these never write or read past the sentinel.
//!
//! None of the functions keep state between calls.

use crate::core::{FixedArray, Value};
use crate::error::{ArrayError, Result};
use log::{debug, trace};

/// Computes the logical length of the container.
///
/// Scans from index 0 until the first sentinel and returns its index.
///
/// # Errors
///
/// [`ArrayError::MalformedContainer`] if no cell within capacity is a sentinel.
///
/// # Examples
///
/// ```
/// use restricted_array::prelude::*;
///
/// let array = FixedArray::from_values(10, &[4, 8, 15]).unwrap();
/// assert_eq!(length(&array), Ok(3));
/// ```
pub fn length(array: &FixedArray) -> Result<usize> {
    array.sentinel_index()
}

/// Linear search for `value` among the cells before the sentinel.
///
/// Termination comes from the sentinel, not from `length`; the parameter is
/// kept so every query takes the same arguments.
///
/// # Errors
///
/// [`ArrayError::MalformedContainer`] if the container has no sentinel.
pub fn search(array: &FixedArray, _length: usize, value: Value) -> Result<bool> {
    array.sentinel_index()?;
    Ok(array.values().any(|candidate| candidate == value))
}

/// Returns the largest value before the sentinel, or `None` when the
/// container is empty.
///
/// Ties keep the earliest occurrence.
///
/// # Errors
///
/// [`ArrayError::MalformedContainer`] if the container has no sentinel.
pub fn find_largest(array: &FixedArray, _length: usize) -> Result<Option<Value>> {
    array.sentinel_index()?;
    Ok(extremum(array.values(), |candidate, best| candidate > best))
}

/// Returns the smallest value before the sentinel, or `None` when the
/// container is empty.
///
/// # Errors
///
/// [`ArrayError::MalformedContainer`] if the container has no sentinel.
pub fn find_smallest(array: &FixedArray, _length: usize) -> Result<Option<Value>> {
    array.sentinel_index()?;
    Ok(extremum(array.values(), |candidate, best| candidate < best))
}

// Strict comparison, so the earlier of two equal values wins.
fn extremum<I, F>(mut values: I, better: F) -> Option<Value>
where
    I: Iterator<Item = Value>,
    F: Fn(Value, Value) -> bool,
{
    let first = values.next()?;
    Some(values.fold(first, |best, candidate| {
        if better(candidate, best) {
            candidate
        } else {
            best
        }
    }))
}

/// Reverses `[0, length)` in place and returns the container.
///
/// Lengths below 2 leave the container unchanged. Cells at or beyond
/// `length`, the sentinel included, are never touched.
///
/// # Errors
///
/// See [`binary_search`] for the length checks.
///
/// # Examples
///
/// ```
/// use restricted_array::prelude::*;
///
/// let mut array = FixedArray::from_values(6, &[1, 2, 3, 4]).unwrap();
/// let len = length(&array).unwrap();
/// reverse(&mut array, len).unwrap();
///
/// assert_eq!(&array.slots()[..len], &[Some(4), Some(3), Some(2), Some(1)]);
/// ```
pub fn reverse(array: &mut FixedArray, length: usize) -> Result<&mut FixedArray> {
    check_length(array, length)?;
    if length < 2 {
        return Ok(array);
    }

    let cells = &mut array.slots_mut()[..length];
    let last = length - 1;
    (0..length / 2).for_each(|front| cells.swap(front, last - front));

    trace!("reversed {length} cells with {} swaps", length / 2);
    Ok(array)
}

/// Binary search over `[0, length)`, which must be sorted ascending.
///
/// The search window is `[lower, upper)`. Each step probes the middle cell and
/// halves the window until at most one candidate is left, which is compared
/// once more. An empty range returns `false`. Unsorted data gives an
/// unspecified answer but never panics.
///
/// # Errors
///
/// - [`ArrayError::InvalidLength`] if `length` leaves no sentinel slot.
/// - [`ArrayError::SentinelWithinLength`] if a sentinel sits inside `[0, length)`.
///
/// # Examples
///
/// ```
/// use restricted_array::prelude::*;
///
/// let array = FixedArray::from_values(8, &[2, 3, 5, 7, 11]).unwrap();
/// let len = length(&array).unwrap();
///
/// assert_eq!(binary_search(&array, len, 7), Ok(true));
/// assert_eq!(binary_search(&array, len, 4), Ok(false));
/// ```
pub fn binary_search(array: &FixedArray, length: usize, value: Value) -> Result<bool> {
    check_length(array, length)?;
    if length == 0 {
        return Ok(false);
    }

    let cells = &array.slots()[..length];
    let target = Some(value);
    let mut lower = 0;
    let mut upper = length;
    let mut probes = 0;

    while upper - lower > 1 {
        let pos = lower + (upper - lower) / 2;
        probes += 1;
        if cells[pos] == target {
            trace!("found {value} at {pos} after {probes} probes");
            return Ok(true);
        }

        if target > cells[pos] {
            lower = pos;
        } else {
            upper = pos;
        }
    }

    // `lower` is the only index not yet ruled out.
    let found = cells[lower] == target;
    trace!("binary search for {value} finished after {probes} probes: {found}");
    Ok(found)
}

/// Sorts `[0, length)` ascending in place using selection sort.
///
/// For each position, the first minimum of the remaining cells is swapped in.
/// The sort is not stable. O(n^2) comparisons, O(1) extra space.
///
/// # Errors
///
/// See [`binary_search`] for the length checks.
pub fn sort(array: &mut FixedArray, length: usize) -> Result<()> {
    check_length(array, length)?;

    let cells = &mut array.slots_mut()[..length];
    let mut swaps = 0;
    for index in 0..length {
        let min_index = (index + 1..length).fold(index, |min_index, candidate| {
            if cells[candidate] < cells[min_index] {
                candidate
            } else {
                min_index
            }
        });

        if min_index != index {
            cells.swap(index, min_index);
            swaps += 1;
        }
    }

    trace!("sorted {length} cells with {swaps} swaps");
    Ok(())
}

/// Ensures `length` describes a prefix of values followed by a sentinel slot.
fn check_length(array: &FixedArray, length: usize) -> Result<()> {
    let capacity = array.capacity();
    if length >= capacity {
        debug!("rejecting length {length} for capacity {capacity}");
        return Err(ArrayError::InvalidLength { length, capacity });
    }

    if let Some(index) = array.slots()[..length].iter().position(Option::is_none) {
        debug!("length {length} runs past the sentinel at {index}");
        return Err(ArrayError::SentinelWithinLength { length, index });
    }

    Ok(())
}
