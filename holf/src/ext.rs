//! Method syntax for the list operations.
//!
//! `ListOps` is implemented for slices, so it is available on `Vec<T>`,
//! `&[T]` and (after slicing) arrays. Elements are cloned out of the slice;
//! the slice itself is never modified.

use crate::error::ListResult;
use crate::list;
use crate::sequence::Scan;
use std::fmt::Display;
use std::iter::Cloned;
use std::slice::Iter;

pub trait ListOps<T: Clone> {
    /// See [`list::map`].
    fn map<U, F>(&self, f: F) -> Vec<U>
    where
        F: FnMut(T) -> U;

    /// See [`list::fold`].
    fn fold<U, F>(&self, init: U, f: F) -> U
    where
        F: FnMut(U, T) -> U;

    /// See [`list::reduce`].
    fn reduce<F>(&self, f: F) -> ListResult<T>
    where
        F: FnMut(T, T) -> T;

    /// See [`list::partition`].
    fn partition<K, F>(&self, f: F) -> ListResult<Vec<Vec<T>>>
    where
        K: TryInto<usize> + Copy + Display,
        F: FnMut(&T) -> K;

    /// See [`list::scan`].
    fn scan<U, F>(&self, init: U, f: F) -> Scan<Cloned<Iter<'_, T>>, U, F>
    where
        U: Clone,
        F: FnMut(U, T) -> U;

    /// See [`list::collect`].
    fn collect<C, F>(&self, f: F) -> Vec<C::Item>
    where
        C: IntoIterator,
        F: FnMut(T) -> C;
}

impl<T: Clone> ListOps<T> for [T] {
    fn map<U, F>(&self, f: F) -> Vec<U>
    where
        F: FnMut(T) -> U,
    {
        list::map(self.iter().cloned(), f)
    }

    fn fold<U, F>(&self, init: U, f: F) -> U
    where
        F: FnMut(U, T) -> U,
    {
        list::fold(self.iter().cloned(), init, f)
    }

    fn reduce<F>(&self, f: F) -> ListResult<T>
    where
        F: FnMut(T, T) -> T,
    {
        list::reduce(self.iter().cloned(), f)
    }

    fn partition<K, F>(&self, f: F) -> ListResult<Vec<Vec<T>>>
    where
        K: TryInto<usize> + Copy + Display,
        F: FnMut(&T) -> K,
    {
        list::partition(self.iter().cloned(), f)
    }

    fn scan<U, F>(&self, init: U, f: F) -> Scan<Cloned<Iter<'_, T>>, U, F>
    where
        U: Clone,
        F: FnMut(U, T) -> U,
    {
        list::scan(self.iter().cloned(), init, f)
    }

    fn collect<C, F>(&self, f: F) -> Vec<C::Item>
    where
        C: IntoIterator,
        F: FnMut(T) -> C,
    {
        list::collect(self.iter().cloned(), f)
    }
}
