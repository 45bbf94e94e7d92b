//! Slice helpers returning owned results.

use std::collections::HashSet;
use std::hash::Hash;

/// Transform every element, preserving order
pub fn map<T, U, F>(input: &[T], transform: F) -> Vec<U>
where
    F: Fn(&T) -> U,
{
    input.iter().map(transform).collect()
}

/// Keep the elements matching `predicate`
pub fn filter<T, F>(input: &[T], predicate: F) -> Vec<T>
where
    T: Clone,
    F: Fn(&T) -> bool,
{
    input.iter().filter(|v| predicate(v)).cloned().collect()
}

/// Fold the slice into a single value, left to right
pub fn reduce<T, U, F>(input: &[T], initial: U, combine: F) -> U
where
    F: Fn(U, &T) -> U,
{
    input.iter().fold(initial, combine)
}

/// Drop duplicates, keeping the first occurrence of each value
pub fn unique<T>(input: &[T]) -> Vec<T>
where
    T: Clone + Eq + Hash,
{
    unique_by(input, |v| v.clone())
}

/// Drop elements whose key was already seen, keeping the first occurrence
pub fn unique_by<T, K, F>(input: &[T], key: F) -> Vec<T>
where
    T: Clone,
    K: Eq + Hash,
    F: Fn(&T) -> K,
{
    let mut seen = HashSet::new();
    input
        .iter()
        .filter(|v| seen.insert(key(v)))
        .cloned()
        .collect()
}

/// True if at least one element matches
pub fn any<T, F>(input: &[T], predicate: F) -> bool
where
    F: Fn(&T) -> bool,
{
    input.iter().any(predicate)
}

/// True if every element matches (vacuously true when empty)
pub fn all<T, F>(input: &[T], predicate: F) -> bool
where
    F: Fn(&T) -> bool,
{
    input.iter().all(predicate)
}
