//! Lazy sequences
//!
//! Iterator adapters behind [`expand`](crate::list::expand),
//! [`expand_until`](crate::list::expand_until) and [`scan`](crate::list::scan).
//! Each one is a single forward pass: nothing is computed before it is asked
//! for, and none of them can be rewound or cloned.

use std::fmt;
use std::iter::FusedIterator;

/// Progress of a generator: the seed has not been handed out yet, or the last
/// handed-out element is kept to compute the next one.
enum Cursor<T> {
    Seed(T),
    Last(T),
    Done,
}

/// Infinite sequence `init, f(init), f(f(init)), ...`.
///
/// Created by [`expand`](crate::list::expand). The callback is invoked once
/// per element after the first, and only when that element is requested, so
/// `expand(x, f).take(n)` calls `f` exactly `n - 1` times.
pub struct Expand<T, F> {
    cursor: Cursor<T>,
    f: F,
}

impl<T, F> Expand<T, F> {
    pub(crate) fn new(init: T, f: F) -> Self {
        Self {
            cursor: Cursor::Seed(init),
            f,
        }
    }
}

impl<T, F> Iterator for Expand<T, F>
where
    T: Clone,
    F: FnMut(&T) -> T,
{
    type Item = T;

    fn next(&mut self) -> Option<T> {
        let value = match std::mem::replace(&mut self.cursor, Cursor::Done) {
            Cursor::Seed(init) => init,
            Cursor::Last(previous) => (self.f)(&previous),
            // Only reachable if the callback panicked mid-step.
            Cursor::Done => return None,
        };
        self.cursor = Cursor::Last(value.clone());
        Some(value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self.cursor {
            Cursor::Done => (0, Some(0)),
            _ => (usize::MAX, None),
        }
    }
}

impl<T: fmt::Debug, F> fmt::Debug for Expand<T, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut s = f.debug_struct("Expand");
        match &self.cursor {
            Cursor::Seed(init) => s.field("seed", init),
            Cursor::Last(last) => s.field("last", last),
            Cursor::Done => s.field("done", &true),
        };
        s.finish_non_exhaustive()
    }
}

/// Sequence `init, f(init), ...` that ends the first time `f` returns `None`.
///
/// Created by [`expand_until`](crate::list::expand_until). The `None` that
/// stops the sequence is not an element of it, and once stopped the iterator
/// keeps returning `None` without calling `f` again.
pub struct ExpandUntil<T, F> {
    cursor: Cursor<T>,
    f: F,
}

impl<T, F> ExpandUntil<T, F> {
    pub(crate) fn new(init: T, f: F) -> Self {
        Self {
            cursor: Cursor::Seed(init),
            f,
        }
    }
}

impl<T, F> Iterator for ExpandUntil<T, F>
where
    T: Clone,
    F: FnMut(&T) -> Option<T>,
{
    type Item = T;

    fn next(&mut self) -> Option<T> {
        let value = match std::mem::replace(&mut self.cursor, Cursor::Done) {
            Cursor::Seed(init) => init,
            Cursor::Last(previous) => (self.f)(&previous)?,
            Cursor::Done => return None,
        };
        self.cursor = Cursor::Last(value.clone());
        Some(value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self.cursor {
            Cursor::Seed(_) => (1, None),
            Cursor::Last(_) => (0, None),
            Cursor::Done => (0, Some(0)),
        }
    }
}

impl<T, F> FusedIterator for ExpandUntil<T, F>
where
    T: Clone,
    F: FnMut(&T) -> Option<T>,
{
}

impl<T: fmt::Debug, F> fmt::Debug for ExpandUntil<T, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut s = f.debug_struct("ExpandUntil");
        match &self.cursor {
            Cursor::Seed(init) => s.field("seed", init),
            Cursor::Last(last) => s.field("last", last),
            Cursor::Done => s.field("done", &true),
        };
        s.finish_non_exhaustive()
    }
}

/// Running accumulation over a source sequence.
///
/// Created by [`scan`](crate::list::scan). Yields the accumulator after each
/// source element (the initial value is not yielded), so the output is
/// exactly as long as the source and may be infinite.
pub struct Scan<I, U, F> {
    iter: I,
    acc: Option<U>,
    f: F,
}

impl<I, U, F> Scan<I, U, F> {
    pub(crate) fn new(iter: I, init: U, f: F) -> Self {
        Self {
            iter,
            acc: Some(init),
            f,
        }
    }
}

impl<I, U, F> Iterator for Scan<I, U, F>
where
    I: Iterator,
    U: Clone,
    F: FnMut(U, I::Item) -> U,
{
    type Item = U;

    fn next(&mut self) -> Option<U> {
        let item = self.iter.next()?;
        let acc = (self.f)(self.acc.take()?, item);
        self.acc = Some(acc.clone());
        Some(acc)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.acc.is_some() {
            self.iter.size_hint()
        } else {
            (0, Some(0))
        }
    }
}

impl<I: fmt::Debug, U: fmt::Debug, F> fmt::Debug for Scan<I, U, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Scan")
            .field("iter", &self.iter)
            .field("acc", &self.acc)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_expand_calls_function_only_for_consumed_elements() {
        let calls = Cell::new(0);
        let values: Vec<u32> = Expand::new(1u32, |x: &u32| {
            calls.set(calls.get() + 1);
            x * 2
        })
        .take(5)
        .collect();

        assert_eq!(values, vec![1, 2, 4, 8, 16]);
        assert_eq!(calls.get(), 4);
    }

    #[test]
    fn test_expand_until_is_fused() {
        let calls = Cell::new(0);
        let mut seq = ExpandUntil::new(3u32, |x: &u32| {
            calls.set(calls.get() + 1);
            x.checked_sub(1).filter(|n| *n > 0)
        });

        assert_eq!(seq.by_ref().collect::<Vec<_>>(), vec![3, 2, 1]);
        assert_eq!(seq.next(), None);
        assert_eq!(seq.next(), None);
        assert_eq!(calls.get(), 3);
    }

    #[test]
    fn test_scan_size_hint_follows_source() {
        let scan = Scan::new(vec![1, 2, 3].into_iter(), 0, |a: i32, b: i32| a + b);
        assert_eq!(scan.size_hint(), (3, Some(3)));
    }
}
