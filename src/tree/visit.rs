use std::{
    cmp::Ordering,
    ops::{Bound, ControlFlow, RangeBounds},
};

use super::{node::Node, RbTree};
use crate::Compare;

// Visitors walk the tree recursively, without a cursor, and stop as soon
// as the visitor returns ControlFlow::Break, which is handed back to the
// caller.

impl<K, V, C> RbTree<K, V, C> {
    /// Visit all entries in sort order.
    ///
    /// ```
    /// use std::ops::ControlFlow;
    /// use prbt::rc::RbTree;
    ///
    /// let tree: RbTree<u32, u32> = (0..10).map(|i| (i, i)).collect();
    /// let mut sum = 0;
    /// let res = tree.for_each(|k, _| {
    ///     if *k == 5 {
    ///         return ControlFlow::Break(*k);
    ///     }
    ///     sum += k;
    ///     ControlFlow::Continue(())
    /// });
    /// assert_eq!(res, ControlFlow::Break(5));
    /// assert_eq!(sum, 10);
    /// ```
    pub fn for_each<B, F>(&self, mut visit: F) -> ControlFlow<B>
    where
        F: FnMut(&K, &V) -> ControlFlow<B>,
    {
        match self.root.as_deref() {
            Some(root) => visit_all(root, &mut visit),
            None => ControlFlow::Continue(()),
        }
    }
}

impl<K, V, C> RbTree<K, V, C>
where
    C: Compare<K>,
{
    /// Visit entries within `range` in sort order.
    pub fn for_each_range<R, B, F>(&self, range: R, mut visit: F) -> ControlFlow<B>
    where
        R: RangeBounds<K>,
        F: FnMut(&K, &V) -> ControlFlow<B>,
    {
        let (low, high) = (range.start_bound(), range.end_bound());
        match self.root.as_deref() {
            Some(root) => visit_range(&*self.cmp, root, low, high, &mut visit),
            None => ControlFlow::Continue(()),
        }
    }

    /// Visit entries whose key is in `low..high`.
    pub fn for_each_between<B, F>(&self, low: &K, high: &K, visit: F) -> ControlFlow<B>
    where
        F: FnMut(&K, &V) -> ControlFlow<B>,
    {
        self.for_each_range((Bound::Included(low), Bound::Excluded(high)), visit)
    }

    /// Visit entries whose key is greater than or equal to `low`.
    pub fn for_each_ge<B, F>(&self, low: &K, visit: F) -> ControlFlow<B>
    where
        F: FnMut(&K, &V) -> ControlFlow<B>,
    {
        self.for_each_range((Bound::Included(low), Bound::Unbounded), visit)
    }

    /// Visit entries whose key is greater than `low`.
    pub fn for_each_gt<B, F>(&self, low: &K, visit: F) -> ControlFlow<B>
    where
        F: FnMut(&K, &V) -> ControlFlow<B>,
    {
        self.for_each_range((Bound::Excluded(low), Bound::Unbounded), visit)
    }

    /// Visit entries whose key is less than or equal to `high`.
    pub fn for_each_le<B, F>(&self, high: &K, visit: F) -> ControlFlow<B>
    where
        F: FnMut(&K, &V) -> ControlFlow<B>,
    {
        self.for_each_range((Bound::Unbounded, Bound::Included(high)), visit)
    }

    /// Visit entries whose key is less than `high`.
    pub fn for_each_lt<B, F>(&self, high: &K, visit: F) -> ControlFlow<B>
    where
        F: FnMut(&K, &V) -> ControlFlow<B>,
    {
        self.for_each_range((Bound::Unbounded, Bound::Excluded(high)), visit)
    }
}

fn visit_all<K, V, B, F>(node: &Node<K, V>, visit: &mut F) -> ControlFlow<B>
where
    F: FnMut(&K, &V) -> ControlFlow<B>,
{
    if let Some(left) = node.as_left_ref() {
        visit_all(left, visit)?;
    }
    visit(&node.key, &node.value)?;
    match node.as_right_ref() {
        Some(right) => visit_all(right, visit),
        None => ControlFlow::Continue(()),
    }
}

// Sub-trees entirely outside the bounds are pruned, equal keys may sit on
// either side of a node hence both sides are walked on a tie.
fn visit_range<K, V, C, B, F>(
    cmp: &C,
    node: &Node<K, V>,
    low: Bound<&K>,
    high: Bound<&K>,
    visit: &mut F,
) -> ControlFlow<B>
where
    C: Compare<K>,
    F: FnMut(&K, &V) -> ControlFlow<B>,
{
    let above = match low {
        Bound::Unbounded => true,
        Bound::Included(low) => cmp.compare(&node.key, low) != Ordering::Less,
        Bound::Excluded(low) => cmp.compare(&node.key, low) == Ordering::Greater,
    };
    let below = match high {
        Bound::Unbounded => true,
        Bound::Included(high) => cmp.compare(&node.key, high) != Ordering::Greater,
        Bound::Excluded(high) => cmp.compare(&node.key, high) == Ordering::Less,
    };

    if above {
        if let Some(left) = node.as_left_ref() {
            visit_range(cmp, left, low, high, visit)?;
        }
    }
    if above && below {
        visit(&node.key, &node.value)?;
    }
    if below {
        if let Some(right) = node.as_right_ref() {
            visit_range(cmp, right, low, high, visit)?;
        }
    }
    ControlFlow::Continue(())
}

#[cfg(test)]
#[path = "visit_test.rs"]
mod visit_test;
