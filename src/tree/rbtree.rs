use std::{cmp::Ordering, fmt, iter::FromIterator};

use super::{
    node::{count, is_red, Node},
    Ref,
};
use crate::{Compare, Error, Natural, Result};

/// Fully persistent ordered map using [red-black][rbt] tree.
///
/// Cloning a tree is O(1), and every mutation returns a new tree sharing
/// all untouched sub-trees with `self`. Refer package level documentation
/// for brief description.
///
/// [rbt]: https://en.wikipedia.org/wiki/Red%E2%80%93black_tree
pub struct RbTree<K, V, C = Natural> {
    pub(super) cmp: Ref<C>,
    pub(super) root: Option<Ref<Node<K, V>>>,
}

impl<K, V, C> Clone for RbTree<K, V, C> {
    fn clone(&self) -> Self {
        RbTree {
            cmp: Ref::clone(&self.cmp),
            root: self.root.clone(),
        }
    }
}

impl<K, V> RbTree<K, V, Natural> {
    /// Create an empty tree ordered by `K: Ord`.
    pub fn new() -> RbTree<K, V, Natural> {
        RbTree::with_compare(Natural)
    }
}

impl<K, V> Default for RbTree<K, V, Natural> {
    fn default() -> Self {
        RbTree::new()
    }
}

impl<K, V, C> RbTree<K, V, C> {
    /// Create an empty tree ordered by `cmp`. The same comparator is
    /// carried over to every tree derived from this one.
    pub fn with_compare(cmp: C) -> RbTree<K, V, C> {
        RbTree {
            cmp: Ref::new(cmp),
            root: None,
        }
    }

    /// Return number of entries in this tree.
    #[inline]
    pub fn len(&self) -> usize {
        count(self.root.as_deref())
    }

    /// Check whether this tree is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Return the comparator for this tree.
    pub fn as_compare(&self) -> &C {
        &self.cmp
    }

    /// Return entry with the smallest key.
    pub fn first(&self) -> Option<(&K, &V)> {
        let mut node = self.root.as_deref()?;
        while let Some(left) = node.as_left_ref() {
            node = left;
        }
        Some((&node.key, &node.value))
    }

    /// Return entry with the largest key.
    pub fn last(&self) -> Option<(&K, &V)> {
        let mut node = self.root.as_deref()?;
        while let Some(right) = node.as_right_ref() {
            node = right;
        }
        Some((&node.key, &node.value))
    }

    /// Return the entry at `index` in sort order, `index` out of range
    /// returns None.
    pub fn get_at(&self, mut index: usize) -> Option<(&K, &V)> {
        let mut node = self.root.as_deref();
        while let Some(nref) = node {
            let n_left = count(nref.as_left_ref());
            node = match index.cmp(&n_left) {
                Ordering::Less => nref.as_left_ref(),
                Ordering::Equal => return Some((&nref.key, &nref.value)),
                Ordering::Greater => {
                    index -= n_left + 1;
                    nref.as_right_ref()
                }
            };
        }
        None
    }

    /// Return a random entry from this tree, every entry is equally
    /// likely to be picked.
    #[cfg(feature = "rand")]
    pub fn random<R>(&self, rng: &mut R) -> Option<(&K, &V)>
    where
        R: rand::Rng,
    {
        match self.len() {
            0 => None,
            n => self.get_at(rng.gen_range(0..n)),
        }
    }

    #[allow(dead_code)]
    #[cfg(test)]
    pub fn pretty_print(&self)
    where
        K: fmt::Debug,
        V: fmt::Debug,
    {
        if let Some(n) = self.root.as_ref() {
            n.as_ref().pretty_print("".to_string())
        }
    }
}

impl<K, V, C> RbTree<K, V, C>
where
    C: Compare<K>,
{
    /// Get value for key. When there are several entries for `key`, the
    /// first one found on the search path is returned.
    pub fn get(&self, key: &K) -> Option<&V> {
        let mut node = self.root.as_deref();
        while let Some(nref) = node {
            if self.cmp.equals(key, &nref.key) {
                return Some(&nref.value);
            }
            node = match self.cmp.compare(key, &nref.key) {
                Ordering::Greater => nref.as_right_ref(),
                Ordering::Less | Ordering::Equal => nref.as_left_ref(),
            };
        }
        None
    }

    /// Check whether `key` is present in this tree.
    #[inline]
    pub fn contains_key(&self, key: &K) -> bool {
        self.get(key).is_some()
    }

    /// Return all values on the search path for `key` whose key equals
    /// `key`, in the order they were met from the root.
    ///
    /// The search routes ties to the left, entries that equal `key` but
    /// ended up elsewhere, after rebalancing, are not reported.
    pub fn find_all(&self, key: &K) -> Vec<&V> {
        let mut values = vec![];
        let mut node = self.root.as_deref();
        while let Some(nref) = node {
            if self.cmp.equals(key, &nref.key) {
                values.push(&nref.value);
            }
            node = match self.cmp.compare(key, &nref.key) {
                Ordering::Greater => nref.as_right_ref(),
                Ordering::Less | Ordering::Equal => nref.as_left_ref(),
            };
        }
        values
    }

    /// Validate tree with following rules:
    ///
    /// * Root node is black.
    /// * From root to any leaf, no consecutive reds allowed in its path.
    /// * Number of blacks should be same under left child and right child.
    /// * Sub-tree count matches the number of nodes in the sub-tree.
    /// * Make sure keys are in sorted order.
    pub fn validate(&self) -> Result<()>
    where
        K: fmt::Debug,
    {
        let root = self.root.as_deref();
        if is_red(root) {
            err_at!(RedRoot, msg: "root is red")?;
        }

        Self::validate_tree(root, false)?;

        let mut prev: Option<&K> = None;
        for (key, _) in self.iter() {
            match prev {
                Some(p) if self.cmp.compare(p, key) == Ordering::Greater => {
                    err_at!(UnsortedKeys, msg: "{:?} before {:?}", p, key)?;
                }
                _ => (),
            }
            prev = Some(key);
        }

        Ok(())
    }

    // return (n_count, n_blacks) for sub-tree under `node`.
    fn validate_tree(node: Option<&Node<K, V>>, fromred: bool) -> Result<(usize, usize)>
    where
        K: fmt::Debug,
    {
        let node = match node {
            Some(node) => node,
            None => return Ok((0, 0)),
        };

        let red = node.is_red();
        if fromred && red {
            err_at!(ConsecutiveReds, msg: "at key {:?}", node.key)?;
        }

        let (left, rigt) = (node.as_left_ref(), node.as_right_ref());
        let (lc, lb) = Self::validate_tree(left, red)?;
        let (rc, rb) = Self::validate_tree(rigt, red)?;
        if lb != rb {
            err_at!(UnbalancedBlacks, msg: "{} {} at {} key {:?}", lb, rb, node.color, node.key)?;
        }

        let n_count = lc + rc + 1;
        if n_count != node.count {
            err_at!(InvalidCount, msg: "{} != {} at key {:?}", node.count, n_count, node.key)?;
        }

        Ok((n_count, if node.is_black() { lb + 1 } else { lb }))
    }
}

impl<K, V> FromIterator<(K, V)> for RbTree<K, V, Natural>
where
    K: Clone + Ord,
    V: Clone,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        iter.into_iter()
            .fold(RbTree::new(), |tree, (key, value)| tree.insert(key, value))
    }
}

impl<K, V, C> fmt::Debug for RbTree<K, V, C>
where
    K: fmt::Debug,
    V: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

#[cfg(test)]
#[path = "rbtree_test.rs"]
mod rbtree_test;
