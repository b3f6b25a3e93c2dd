//! Higher order list functions
//!
//! Free functions over anything that can be iterated. The eager operations
//! (`map`, `fold`, `reduce`, `partition`, `collect`) consume their source and
//! return owned results; `expand`, `expand_until` and `scan` return lazy
//! iterators (see [`crate::sequence`]) so they can be chained over infinite
//! sources and bounded with `take`.
//!
//! Every fallible-callback variant (`try_*`) stops at the first callback error
//! and returns it to the caller unchanged.

use crate::error::{ListError, ListResult};
use crate::sequence::{Expand, ExpandUntil, Scan};
use std::fmt::Display;

/// Map each element of `source` with `f`.
///
/// ```
/// assert_eq!(holf::list::map(vec![1, 2, 3], |i| i * 2), vec![2, 4, 6]);
/// ```
pub fn map<S, U, F>(source: S, f: F) -> Vec<U>
where
    S: IntoIterator,
    F: FnMut(S::Item) -> U,
{
    source.into_iter().map(f).collect()
}

/// Like [`map`], with a callback that may fail.
pub fn try_map<S, U, E, F>(source: S, f: F) -> Result<Vec<U>, E>
where
    S: IntoIterator,
    F: FnMut(S::Item) -> Result<U, E>,
{
    source.into_iter().map(f).collect()
}

/// Aggregate `source` left to right, starting from `init`.
///
/// An empty source returns `init` untouched.
///
/// ```
/// let joined = holf::list::fold(vec![1, 2, 3], String::new(), |acc, i| acc + &i.to_string());
/// assert_eq!(joined, "123");
/// ```
pub fn fold<S, U, F>(source: S, init: U, f: F) -> U
where
    S: IntoIterator,
    F: FnMut(U, S::Item) -> U,
{
    source.into_iter().fold(init, f)
}

/// Like [`fold`], with a callback that may fail.
pub fn try_fold<S, U, E, F>(source: S, init: U, f: F) -> Result<U, E>
where
    S: IntoIterator,
    F: FnMut(U, S::Item) -> Result<U, E>,
{
    source.into_iter().try_fold(init, f)
}

/// Reduce `source` to a single value, seeding the aggregation with its first
/// element.
///
/// Fails with [`ListError::EmptyInput`] when `source` has no elements.
///
/// ```
/// let max = holf::list::reduce(vec![1, 9, 2, 8], |a, b| a.max(b));
/// assert_eq!(max, Ok(9));
/// ```
pub fn reduce<S, F>(source: S, f: F) -> ListResult<S::Item>
where
    S: IntoIterator,
    F: FnMut(S::Item, S::Item) -> S::Item,
{
    let mut iter = source.into_iter();
    let first = iter
        .next()
        .ok_or_else(|| ListError::empty_input("reduce"))?;
    Ok(iter.fold(first, f))
}

/// Like [`reduce`], with a callback that may fail.
pub fn try_reduce<S, E, F>(source: S, f: F) -> Result<S::Item, E>
where
    S: IntoIterator,
    E: From<ListError>,
    F: FnMut(S::Item, S::Item) -> Result<S::Item, E>,
{
    let mut iter = source.into_iter();
    let first = iter
        .next()
        .ok_or_else(|| ListError::empty_input("reduce"))?;
    iter.try_fold(first, f)
}

/// Split `source` into buckets chosen by `f`.
///
/// Bucket `i` holds, in source order, the elements for which `f` returned
/// `i`. The result has `max(index) + 1` buckets; indexes nobody asked for
/// stay as empty buckets. An index that does not convert to `usize` (any
/// negative value) fails with [`ListError::InvalidPartitionIndex`], and one
/// whose buckets cannot be allocated fails with
/// [`ListError::PartitionTooLarge`]. Either way the buckets gathered so far
/// are dropped.
///
/// ```
/// let buckets = holf::list::partition(vec![1, 2, 3, 4, 5], |i| i % 2).unwrap();
/// assert_eq!(buckets, vec![vec![2, 4], vec![1, 3, 5]]);
/// ```
pub fn partition<S, K, F>(source: S, mut f: F) -> ListResult<Vec<Vec<S::Item>>>
where
    S: IntoIterator,
    K: TryInto<usize> + Copy + Display,
    F: FnMut(&S::Item) -> K,
{
    try_partition(source, |item| Ok::<K, ListError>(f(item)))
}

/// Like [`partition`], with a callback that may fail.
pub fn try_partition<S, K, E, F>(source: S, mut f: F) -> Result<Vec<Vec<S::Item>>, E>
where
    S: IntoIterator,
    K: TryInto<usize> + Copy + Display,
    E: From<ListError>,
    F: FnMut(&S::Item) -> Result<K, E>,
{
    let mut buckets: Vec<Vec<S::Item>> = Vec::new();
    for (position, item) in source.into_iter().enumerate() {
        let index = f(&item)?;
        let slot: usize = index
            .try_into()
            .map_err(|_| ListError::InvalidPartitionIndex {
                position,
                index: index.to_string(),
            })?;

        if slot >= buckets.len() {
            let too_large = || ListError::PartitionTooLarge {
                position,
                index: index.to_string(),
            };
            let len = slot.checked_add(1).ok_or_else(too_large)?;
            buckets
                .try_reserve(len - buckets.len())
                .map_err(|_| too_large())?;
            buckets.resize_with(len, Vec::new);
        }
        buckets[slot].push(item);
    }
    Ok(buckets)
}

/// Expand `init` into the infinite sequence `init, f(init), f(f(init)), ...`.
///
/// The sequence never ends on its own; bound it with `take` (or similar)
/// before collecting it.
///
/// ```
/// let taxes: Vec<f64> = holf::list::expand(10000.0, |i| i * 0.9).take(3).collect();
/// assert_eq!(taxes, vec![10000.0, 9000.0, 8100.0]);
/// ```
pub fn expand<T, F>(init: T, f: F) -> Expand<T, F>
where
    T: Clone,
    F: FnMut(&T) -> T,
{
    Expand::new(init, f)
}

/// Expand `init` until `f` returns `None`.
///
/// `init` is always the first element. The `None` that ends the sequence is
/// not part of it.
///
/// ```
/// let halves: Vec<u32> = holf::list::expand_until(40, |n| (n % 2 == 0).then(|| n / 2)).collect();
/// assert_eq!(halves, vec![40, 20, 10, 5]);
/// ```
pub fn expand_until<T, F>(init: T, f: F) -> ExpandUntil<T, F>
where
    T: Clone,
    F: FnMut(&T) -> Option<T>,
{
    ExpandUntil::new(init, f)
}

/// Emit every intermediate accumulator of a left fold over `source`.
///
/// Output element `i` is the fold of `source[0..=i]` from `init`; `init`
/// itself is not emitted. Evaluation is lazy, so `source` may be infinite.
pub fn scan<S, U, F>(source: S, init: U, f: F) -> Scan<S::IntoIter, U, F>
where
    S: IntoIterator,
    U: Clone,
    F: FnMut(U, S::Item) -> U,
{
    Scan::new(source.into_iter(), init, f)
}

/// Map each element to a sequence and concatenate the results in order.
///
/// ```
/// let flat = holf::list::collect(vec![vec![1, 2], vec![3], vec![4, 5]], |a| a);
/// assert_eq!(flat, vec![1, 2, 3, 4, 5]);
/// ```
pub fn collect<S, C, F>(source: S, f: F) -> Vec<C::Item>
where
    S: IntoIterator,
    C: IntoIterator,
    F: FnMut(S::Item) -> C,
{
    source.into_iter().flat_map(f).collect()
}

/// Like [`collect`], with a callback that may fail.
pub fn try_collect<S, C, E, F>(source: S, mut f: F) -> Result<Vec<C::Item>, E>
where
    S: IntoIterator,
    C: IntoIterator,
    F: FnMut(S::Item) -> Result<C, E>,
{
    let mut result = Vec::new();
    for item in source {
        result.extend(f(item)?);
    }
    Ok(result)
}
