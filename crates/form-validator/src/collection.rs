//! Collection validation functions

use std::collections::HashSet;
use std::hash::Hash;

/// True if every item in the slice is distinct
///
/// Compares the item count with the number of distinct items, so an empty
/// slice is unique.
pub fn unique_values<T: Eq + Hash>(items: &[T]) -> bool {
    let distinct: HashSet<&T> = items.iter().collect();
    distinct.len() == items.len()
}

/// True if no two strings are equal (case-sensitive)
pub fn unique<S: AsRef<str>>(values: &[S]) -> bool {
    let values: Vec<&str> = values.iter().map(AsRef::as_ref).collect();
    unique_values(&values)
}
