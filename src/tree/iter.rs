use std::{
    cmp::Ordering,
    ops::{Bound, RangeBounds},
};

use super::{Cursor, RbTree};
use crate::Compare;

impl<K, V, C> RbTree<K, V, C> {
    /// Return an iterator over all entries in sort order.
    pub fn iter(&self) -> Iter<K, V, C> {
        Iter {
            cursor: self.begin(),
            frwrd: true,
        }
    }

    /// Return an iterator over all entries in reverse sort order.
    pub fn iter_rev(&self) -> Iter<K, V, C> {
        Iter {
            cursor: self.end(),
            frwrd: false,
        }
    }

    /// Return an iterator over all keys in sort order.
    pub fn keys(&self) -> Keys<K, V, C> {
        Keys { iter: self.iter() }
    }

    /// Return an iterator over all values in key order.
    pub fn values(&self) -> Values<K, V, C> {
        Values { iter: self.iter() }
    }
}

impl<K, V, C> RbTree<K, V, C>
where
    C: Compare<K>,
{
    /// Range over all entries from low to high, specified by `range`.
    ///
    /// ```
    /// use std::ops::Bound;
    /// use prbt::rc::RbTree;
    ///
    /// let tree: RbTree<u32, &str> = vec![(1, "a"), (2, "b"), (3, "c")].into_iter().collect();
    ///
    /// let r = (Bound::Excluded(1), Bound::Excluded(3));
    /// let items: Vec<(&u32, &&str)> = tree.range(r).collect();
    /// assert_eq!(items, vec![(&2, &"b")]);
    ///
    /// assert_eq!(tree.range(2..).count(), 2);
    /// ```
    pub fn range<R>(&self, range: R) -> Range<K, V, C, R>
    where
        R: RangeBounds<K>,
    {
        let cursor = match range.start_bound() {
            Bound::Unbounded => self.begin(),
            Bound::Included(low) => self.ge(low),
            Bound::Excluded(low) => self.gt(low),
        };
        let iter = Iter {
            cursor,
            frwrd: true,
        };

        Range {
            range,
            iter,
            fin: false,
        }
    }

    /// Reverse range over all entries from high to low, specified by `range`.
    ///
    /// ```
    /// use prbt::rc::RbTree;
    ///
    /// let tree: RbTree<u32, u32> = (1..=5).map(|i| (i, i)).collect();
    /// let keys: Vec<u32> = tree.reverse(2..=4).map(|(k, _)| *k).collect();
    /// assert_eq!(keys, vec![4, 3, 2]);
    /// ```
    pub fn reverse<R>(&self, range: R) -> Reverse<K, V, C, R>
    where
        R: RangeBounds<K>,
    {
        let cursor = match range.end_bound() {
            Bound::Unbounded => self.end(),
            Bound::Included(high) => self.le(high),
            Bound::Excluded(high) => self.lt(high),
        };
        let iter = Iter {
            cursor,
            frwrd: false,
        };

        Reverse {
            range,
            iter,
            fin: false,
        }
    }
}

impl<'a, K, V, C> IntoIterator for &'a RbTree<K, V, C> {
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V, C>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over entries, built on top of a [Cursor].
pub struct Iter<'a, K, V, C> {
    cursor: Cursor<'a, K, V, C>,
    frwrd: bool,
}

impl<'a, K, V, C> Iterator for Iter<'a, K, V, C> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        let item = self.cursor.entry()?;
        match self.frwrd {
            true => self.cursor.move_next(),
            false => self.cursor.move_prev(),
        }
        Some(item)
    }
}

pub struct Range<'a, K, V, C, R> {
    range: R,
    iter: Iter<'a, K, V, C>,
    fin: bool,
}

impl<'a, K, V, C, R> Iterator for Range<'a, K, V, C, R>
where
    C: Compare<K>,
    R: RangeBounds<K>,
{
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        match self.fin {
            false => {
                let (key, val) = self.iter.next()?;
                let cmp = self.iter.cursor.tree.as_compare();
                match self.range.end_bound() {
                    Bound::Included(high) if cmp.compare(key, high) != Ordering::Greater => {
                        Some((key, val))
                    }
                    Bound::Excluded(high) if cmp.compare(key, high) == Ordering::Less => {
                        Some((key, val))
                    }
                    Bound::Unbounded => Some((key, val)),
                    Bound::Included(_) | Bound::Excluded(_) => {
                        self.fin = true;
                        None
                    }
                }
            }
            true => None,
        }
    }
}

pub struct Reverse<'a, K, V, C, R> {
    range: R,
    iter: Iter<'a, K, V, C>,
    fin: bool,
}

impl<'a, K, V, C, R> Iterator for Reverse<'a, K, V, C, R>
where
    C: Compare<K>,
    R: RangeBounds<K>,
{
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        match self.fin {
            false => {
                let (key, val) = self.iter.next()?;
                let cmp = self.iter.cursor.tree.as_compare();
                match self.range.start_bound() {
                    Bound::Included(low) if cmp.compare(key, low) != Ordering::Less => {
                        Some((key, val))
                    }
                    Bound::Excluded(low) if cmp.compare(key, low) == Ordering::Greater => {
                        Some((key, val))
                    }
                    Bound::Unbounded => Some((key, val)),
                    Bound::Included(_) | Bound::Excluded(_) => {
                        self.fin = true;
                        None
                    }
                }
            }
            true => None,
        }
    }
}

pub struct Keys<'a, K, V, C> {
    iter: Iter<'a, K, V, C>,
}

impl<'a, K, V, C> Iterator for Keys<'a, K, V, C> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        self.iter.next().map(|(key, _)| key)
    }
}

pub struct Values<'a, K, V, C> {
    iter: Iter<'a, K, V, C>,
}

impl<'a, K, V, C> Iterator for Values<'a, K, V, C> {
    type Item = &'a V;

    fn next(&mut self) -> Option<Self::Item> {
        self.iter.next().map(|(_, value)| value)
    }
}

#[cfg(test)]
#[path = "iter_test.rs"]
mod iter_test;
