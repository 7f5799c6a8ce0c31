//! Module define the ordering contract used by tree instances.

use std::{cmp::Ordering, fmt, marker};

/// Total order over keys, along with structural equality.
///
/// `compare` decides where a key goes in the tree, and must be consistent
/// and transitive for the lifetime of a tree. `equals` is only consulted
/// to confirm an exact match once `compare` has located a candidate, it
/// need not agree with `compare`'s equivalence classes. Two keys that
/// compare as `Equal` but differ under `equals` are stored as distinct
/// entries.
///
/// Supplying an inconsistent order is not detected, tree invariants and
/// complexity bounds no longer hold in that case.
pub trait Compare<K: ?Sized> {
    fn compare(&self, a: &K, b: &K) -> Ordering;

    fn equals(&self, a: &K, b: &K) -> bool;
}

/// Natural ordering for keys implementing [Ord].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Natural;

impl<K> Compare<K> for Natural
where
    K: Ord + ?Sized,
{
    #[inline]
    fn compare(&self, a: &K, b: &K) -> Ordering {
        a.cmp(b)
    }

    #[inline]
    fn equals(&self, a: &K, b: &K) -> bool {
        a == b
    }
}

/// Ordering built out of closures, refer to [by] and [by_ord].
pub struct FnCompare<C, E, K: ?Sized> {
    compare: C,
    equals: E,
    _key: marker::PhantomData<fn(&K)>,
}

impl<C, E, K> Compare<K> for FnCompare<C, E, K>
where
    C: Fn(&K, &K) -> Ordering,
    E: Fn(&K, &K) -> bool,
    K: ?Sized,
{
    #[inline]
    fn compare(&self, a: &K, b: &K) -> Ordering {
        (self.compare)(a, b)
    }

    #[inline]
    fn equals(&self, a: &K, b: &K) -> bool {
        (self.equals)(a, b)
    }
}

impl<C, E, K> Clone for FnCompare<C, E, K>
where
    C: Clone,
    E: Clone,
    K: ?Sized,
{
    fn clone(&self) -> Self {
        FnCompare {
            compare: self.compare.clone(),
            equals: self.equals.clone(),
            _key: marker::PhantomData,
        }
    }
}

impl<C, E, K: ?Sized> fmt::Debug for FnCompare<C, E, K> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "FnCompare")
    }
}

/// Create an ordering from a `compare` closure and an `equals` closure.
///
/// ```
/// use std::cmp::Ordering;
/// use prbt::{by, Compare};
///
/// // order by length only, equality on the full string.
/// let c = by(|a: &str, b: &str| a.len().cmp(&b.len()), |a: &str, b: &str| a == b);
/// assert_eq!(c.compare("ab", "cd"), Ordering::Equal);
/// assert!(!c.equals("ab", "cd"));
/// ```
pub fn by<C, E, K>(compare: C, equals: E) -> FnCompare<C, E, K>
where
    C: Fn(&K, &K) -> Ordering,
    E: Fn(&K, &K) -> bool,
    K: ?Sized,
{
    FnCompare {
        compare,
        equals,
        _key: marker::PhantomData,
    }
}

/// Create an ordering from a `compare` closure, two keys are equal when
/// they compare as [Ordering::Equal].
pub fn by_ord<C, K>(compare: C) -> FnCompare<C, impl Fn(&K, &K) -> bool, K>
where
    C: Fn(&K, &K) -> Ordering + Clone,
    K: ?Sized,
{
    let cmp = compare.clone();
    by(compare, move |a: &K, b: &K| cmp(a, b) == Ordering::Equal)
}

#[cfg(test)]
#[path = "compare_test.rs"]
mod compare_test;
