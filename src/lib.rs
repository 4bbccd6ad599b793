//! # Restricted Array
//!
//! `restricted-array` is a small library of classic array algorithms that operate on a
//! fixed-capacity integer container, [`FixedArray`].
//!
//! The container never grows or shrinks, and it does not store its length. Instead, the
//! first empty cell (the **sentinel**) marks the end of data: every cell before it holds
//! a value and every cell after it is unused.
//!
//! ## Key Features
//!
//! - **Sentinel-terminated storage**: [`length`] recovers the logical length by scanning
//!   for the sentinel. The sentinel is an empty cell (`None`), so it cannot be confused
//!   with a stored value.
//! - **Caller-threaded length**: every other algorithm takes the length as a parameter,
//!   so callers decide when to pay for a rescan.
//! - **In-place mutation**: [`reverse`] and [`sort`] rearrange `[0, length)` without
//!   allocating and never touch the sentinel.
//! - **Fail fast**: containers without a sentinel and lengths that disagree with the
//!   container are reported as [`ArrayError`]s instead of being read out of bounds.
//!
//! ## Usage
//!
//! ```rust
//! use restricted_array::prelude::*;
//!
//! let mut array = FixedArray::from_values(10, &[3, 1, 4, 1, 5, 9, 2, 6]).unwrap();
//! let len = length(&array).unwrap();
//!
//! assert_eq!(find_largest(&array, len), Ok(Some(9)));
//! assert_eq!(find_smallest(&array, len), Ok(Some(1)));
//! assert_eq!(search(&array, len, 7), Ok(false));
//!
//! sort(&mut array, len).unwrap();
//! assert_eq!(binary_search(&array, len, 5), Ok(true));
//! assert_eq!(array.to_string(), "1\n1\n2\n3\n4\n5\n6\n9\n");
//! ```
//!
//! ## Performance Characteristics
//!
//! - [`length`], [`search`], [`find_largest`], [`find_smallest`], [`reverse`]: O(n).
//! - [`binary_search`]: O(log n) over sorted data.
//! - [`sort`]: selection sort, O(n^2) comparisons and at most n - 1 swaps.
//!
//! All algorithms use O(1) extra space.

pub mod algo;
pub mod core;
pub mod error;
pub use crate::algo::{binary_search, find_largest, find_smallest, length, reverse, search, sort};
pub use crate::core::{Cell, FixedArray, Value, print_array};
pub use crate::error::{ArrayError, Result};

pub mod prelude {
    pub use crate::algo::{
        binary_search, find_largest, find_smallest, length, reverse, search, sort,
    };
    pub use crate::core::{Cell, FixedArray, Value, print_array};
    pub use crate::error::ArrayError;
}
