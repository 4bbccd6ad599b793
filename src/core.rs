//! Core container type for the array algorithms.
//!
//! This module defines:
//! - [`FixedArray`]: a fixed-capacity, sentinel-terminated sequence of integers.
//! - [`Cell`]: one slot of the container, either a value or the sentinel.
//! - Domain conventions ([`MAX_CAPACITY`], [`MIN_VALUE`], [`MAX_VALUE`]).

use crate::error::{ArrayError, Result};
use log::debug;
use std::fmt;

/// Element type stored in a [`FixedArray`].
pub type Value = i32;

/// A single slot. `None` is the sentinel marking the end of data.
pub type Cell = Option<Value>;

/// Largest capacity produced by the conventional construction contract.
pub const MAX_CAPACITY: usize = 20;

/// Smallest conventional value.
pub const MIN_VALUE: Value = 1;

/// Largest conventional value.
pub const MAX_VALUE: Value = 221;

/// A fixed-capacity integer container whose logical length is implicit.
///
/// The first sentinel cell (scanning from index 0) marks the end of data.
/// Cells before it hold values; cells after it are unused. The capacity is
/// chosen at creation and never changes, and the length is never cached: it is
/// recomputed with [`length`](crate::algo::length) or passed in by the caller.
///
/// # Examples
///
/// ```
/// use restricted_array::core::FixedArray;
///
/// let array = FixedArray::from_values(5, &[7, 3, 9]).unwrap();
///
/// assert_eq!(array.capacity(), 5);
/// assert_eq!(array.slots(), &[Some(7), Some(3), Some(9), None, None]);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FixedArray {
    slots: Box<[Cell]>,
}

impl FixedArray {
    /// Creates a container of `capacity` sentinel cells (logical length 0).
    pub fn new(capacity: usize) -> Result<Self> {
        if capacity == 0 {
            return Err(ArrayError::ZeroCapacity);
        }

        Ok(Self {
            slots: vec![None; capacity].into_boxed_slice(),
        })
    }

    /// Creates a container holding `values` followed by sentinels.
    ///
    /// At least one sentinel slot must remain, so `values.len()` has to be
    /// strictly less than `capacity`.
    pub fn from_values(capacity: usize, values: &[Value]) -> Result<Self> {
        let mut array = Self::new(capacity)?;
        if values.len() >= capacity {
            return Err(ArrayError::CapacityExceeded {
                capacity,
                len: values.len(),
            });
        }

        array
            .slots
            .iter_mut()
            .zip(values)
            .for_each(|(slot, &value)| *slot = Some(value));
        Ok(array)
    }

    /// Total number of cells, including the sentinel and unused cells.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Every cell of the container, in index order.
    #[inline]
    pub fn slots(&self) -> &[Cell] {
        &self.slots
    }

    /// Reads the cell at `index`.
    pub fn get(&self, index: usize) -> Result<Cell> {
        self.slots
            .get(index)
            .copied()
            .ok_or(ArrayError::IndexOutOfBounds {
                index,
                capacity: self.capacity(),
            })
    }

    /// Writes the cell at `index`.
    ///
    /// This is raw access: writing `None` moves the end of data, and filling
    /// the last sentinel leaves the container malformed.
    pub fn set(&mut self, index: usize, cell: Cell) -> Result<()> {
        let capacity = self.capacity();
        let slot = self
            .slots
            .get_mut(index)
            .ok_or(ArrayError::IndexOutOfBounds { index, capacity })?;
        *slot = cell;
        Ok(())
    }

    /// Returns `true` if the capacity and every value before the sentinel
    /// follow the conventional bounds.
    pub fn in_domain(&self) -> bool {
        (1..=MAX_CAPACITY).contains(&self.capacity())
            && self
                .values()
                .all(|value| (MIN_VALUE..=MAX_VALUE).contains(&value))
    }

    /// Index of the first sentinel, if any.
    pub(crate) fn sentinel_index(&self) -> Result<usize> {
        self.slots.iter().position(Option::is_none).ok_or_else(|| {
            debug!("no sentinel within capacity {}", self.capacity());
            ArrayError::MalformedContainer {
                capacity: self.capacity(),
            }
        })
    }

    /// Values up to the first sentinel (or every cell when there is none).
    pub(crate) fn values(&self) -> impl Iterator<Item = Value> + '_ {
        self.slots.iter().map_while(|cell| *cell)
    }

    #[inline]
    pub(crate) fn slots_mut(&mut self) -> &mut [Cell] {
        &mut self.slots
    }
}

// Renders each value up to the sentinel, one per line.
impl fmt::Display for FixedArray {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for value in self.values() {
            writeln!(f, "{value}")?;
        }
        Ok(())
    }
}

/// Prints each value up to the sentinel to stdout, one per line.
pub fn print_array(array: &FixedArray) {
    print!("{array}");
}
