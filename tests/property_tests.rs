//! Property-based tests for the array algorithms.
//!
//! Containers are generated within the conventional bounds: capacity up to
//! `MAX_CAPACITY`, values in `[MIN_VALUE, MAX_VALUE]`, one sentinel slot left free.

use proptest::prelude::*;

use restricted_array::core::{MAX_CAPACITY, MAX_VALUE, MIN_VALUE};
use restricted_array::prelude::*;

fn contents() -> impl Strategy<Value = Vec<Value>> {
    prop::collection::vec(MIN_VALUE..=MAX_VALUE, 0..MAX_CAPACITY)
}

fn build(values: &[Value]) -> FixedArray {
    FixedArray::from_values(MAX_CAPACITY, values).unwrap()
}

fn prefix(array: &FixedArray, len: usize) -> Vec<Value> {
    array.slots()[..len].iter().map(|cell| cell.unwrap()).collect()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(1000))]

    #[test]
    fn length_counts_values(values in contents()) {
        prop_assert_eq!(length(&build(&values)), Ok(values.len()));
    }

    #[test]
    fn search_is_membership(values in contents(), probe in 0..=MAX_VALUE + 1) {
        let array = build(&values);
        let len = values.len();
        prop_assert_eq!(search(&array, len, probe), Ok(values.contains(&probe)));
    }

    #[test]
    fn extremes_bound_every_value(values in contents()) {
        let array = build(&values);
        let len = values.len();
        let largest = find_largest(&array, len).unwrap();
        let smallest = find_smallest(&array, len).unwrap();

        prop_assert_eq!(largest.is_none(), len == 0);
        prop_assert_eq!(smallest.is_none(), len == 0);
        if let (Some(largest), Some(smallest)) = (largest, smallest) {
            prop_assert!(values.iter().all(|&v| smallest <= v && v <= largest));
            prop_assert!(values.contains(&largest));
            prop_assert!(values.contains(&smallest));
        }
    }

    #[test]
    fn reverse_is_an_involution(values in contents()) {
        let mut array = build(&values);
        let original = array.clone();
        let len = values.len();

        reverse(&mut array, len).unwrap();
        if len < 2 {
            prop_assert_eq!(&array, &original);
        }
        reverse(&mut array, len).unwrap();

        prop_assert_eq!(array, original);
    }

    #[test]
    fn sort_orders_and_keeps_multiset(values in contents()) {
        let mut array = build(&values);
        let len = values.len();
        sort(&mut array, len).unwrap();

        let sorted = prefix(&array, len);
        prop_assert!(sorted.windows(2).all(|pair| pair[0] <= pair[1]));

        let mut expected = values.clone();
        expected.sort_unstable();
        prop_assert_eq!(sorted, expected);
        prop_assert_eq!(length(&array), Ok(len));
    }

    #[test]
    fn binary_search_is_membership_on_sorted_data(mut values in contents(), probe in 0..=MAX_VALUE + 1) {
        values.sort_unstable();
        let array = build(&values);
        let len = values.len();

        prop_assert_eq!(binary_search(&array, len, probe), Ok(values.contains(&probe)));
    }
}
