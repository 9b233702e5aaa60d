//! Lazy query evaluation and result limiting.
//!
//! [`query`] and [`limit`] are iterator adapters. Nothing is materialized:
//! each call to `next` pulls source approaches until one passes every filter,
//! and a [`Limit`] that has produced its quota stops pulling altogether.

use crate::error::Result;
use crate::filters::ApproachFilter;
use crate::model::LinkedApproach;

/// Approaches that pass every filter, in source order.
///
/// Yields `Err` once if a filter fails to evaluate (for instance an object
/// attribute on an unlinked approach) and then ends.
pub struct Query<'f, I> {
    source: I,
    filters: &'f [Box<dyn ApproachFilter>],
    failed: bool,
}

pub fn query<'db, 'f, I>(approaches: I, filters: &'f [Box<dyn ApproachFilter>]) -> Query<'f, I::IntoIter>
where
    I: IntoIterator<Item = LinkedApproach<'db>>,
{
    Query {
        source: approaches.into_iter(),
        filters,
        failed: false,
    }
}

/// Conjunction of `filters`; an empty set matches everything.
pub fn matches_all(filters: &[Box<dyn ApproachFilter>], approach: &LinkedApproach<'_>) -> Result<bool> {
    for filter in filters {
        if !filter.evaluate(approach)? {
            return Ok(false);
        }
    }
    Ok(true)
}

impl<'db, I> Iterator for Query<'_, I>
where
    I: Iterator<Item = LinkedApproach<'db>>,
{
    type Item = Result<LinkedApproach<'db>>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        for approach in self.source.by_ref() {
            match matches_all(self.filters, &approach) {
                Ok(true) => return Some(Ok(approach)),
                Ok(false) => continue,
                Err(e) => {
                    self.failed = true;
                    return Some(Err(e));
                }
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.failed {
            (0, Some(0))
        } else {
            (0, self.source.size_hint().1)
        }
    }
}

/// At most `n` items of the inner iterator.
pub struct Limit<I> {
    inner: I,
    remaining: Option<usize>,
}

/// Limit `iter` to its first `n` items. `None` and `Some(0)` mean no limit.
pub fn limit<I: IntoIterator>(iter: I, n: Option<usize>) -> Limit<I::IntoIter> {
    Limit {
        inner: iter.into_iter(),
        remaining: n.filter(|n| *n > 0),
    }
}

impl<I: Iterator> Iterator for Limit<I> {
    type Item = I::Item;

    fn next(&mut self) -> Option<I::Item> {
        match self.remaining.as_mut() {
            None => self.inner.next(),
            Some(0) => None,
            Some(n) => {
                *n -= 1;
                self.inner.next()
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (lower, upper) = self.inner.size_hint();
        match self.remaining {
            None => (lower, upper),
            Some(n) => (
                lower.min(n),
                Some(upper.map_or(n, |upper| upper.min(n))),
            ),
        }
    }
}
