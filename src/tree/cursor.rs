use std::cmp::Ordering;

use super::{
    node::{copy_path, count, fold, Dir, Node},
    RbTree, Ref,
};
use crate::Compare;

/// Cursor is a position within a tree, it can move forward and backward
/// in sort order from there.
///
/// A cursor holds the path of nodes from root to its current entry and
/// never changes the tree. An invalid cursor, having no current entry,
/// is returned when a seek finds nothing, or when the cursor moves past
/// either end.
pub struct Cursor<'a, K, V, C> {
    pub(super) tree: &'a RbTree<K, V, C>,
    stack: Vec<&'a Node<K, V>>,
}

impl<'a, K, V, C> Clone for Cursor<'a, K, V, C> {
    fn clone(&self) -> Self {
        Cursor {
            tree: self.tree,
            stack: self.stack.clone(),
        }
    }
}

impl<'a, K, V, C> Cursor<'a, K, V, C> {
    /// Check whether cursor is positioned on an entry.
    #[inline]
    pub fn is_valid(&self) -> bool {
        !self.stack.is_empty()
    }

    pub fn key(&self) -> Option<&'a K> {
        self.stack.last().map(|node| &node.key)
    }

    pub fn value(&self) -> Option<&'a V> {
        self.stack.last().map(|node| &node.value)
    }

    pub fn entry(&self) -> Option<(&'a K, &'a V)> {
        self.stack.last().map(|node| (&node.key, &node.value))
    }

    /// Return the rank of current entry, for an invalid cursor this is
    /// the length of the tree.
    pub fn index(&self) -> usize {
        let node = match self.stack.last() {
            Some(node) => node,
            None => return self.tree.len(),
        };

        let mut index = count(node.as_left_ref());
        for w in self.stack.windows(2).rev() {
            if w[0].dir_to(w[1]) == Dir::Right {
                index += 1 + count(w[0].as_left_ref());
            }
        }
        index
    }

    /// Check whether there is an entry after the current one.
    pub fn has_next(&self) -> bool {
        self.has_more(Dir::Right)
    }

    /// Check whether there is an entry before the current one.
    pub fn has_prev(&self) -> bool {
        self.has_more(Dir::Left)
    }

    fn has_more(&self, dir: Dir) -> bool {
        match self.stack.last() {
            Some(node) if node.as_child_ref(dir).is_some() => true,
            Some(_) => self
                .stack
                .windows(2)
                .any(|w| w[0].dir_to(w[1]) == dir.flip()),
            None => false,
        }
    }

    /// Move to the next entry in sort order.
    pub fn move_next(&mut self) {
        self.step(Dir::Right)
    }

    /// Move to the previous entry in sort order.
    pub fn move_prev(&mut self) {
        self.step(Dir::Left)
    }

    // in-order successor toward `dir`, descend into the child at `dir` and
    // then all the way to the other side, else climb up until we arrive
    // from the other side.
    fn step(&mut self, dir: Dir) {
        let node = match self.stack.last() {
            Some(node) => *node,
            None => return,
        };

        match node.as_child_ref(dir) {
            Some(child) => build_path(child, dir.flip(), &mut self.stack),
            None => {
                let mut child = node;
                self.stack.pop();
                while let Some(parent) = self.stack.last() {
                    if parent.dir_to(child) == dir.flip() {
                        break;
                    }
                    child = *parent;
                    self.stack.pop();
                }
            }
        }
    }
}

impl<'a, K, V, C> Cursor<'a, K, V, C>
where
    K: Clone,
    V: Clone,
{
    /// Return a new tree with the current entry's value replaced by
    /// `value`. For an invalid cursor, return a clone of the tree.
    pub fn update(&self, value: V) -> RbTree<K, V, C> {
        let mut node = match self.stack.last() {
            Some(node) => (*node).clone(),
            None => return self.tree.clone(),
        };
        node.value = value;

        RbTree {
            cmp: Ref::clone(&self.tree.cmp),
            root: fold(copy_path(&self.stack), Some(Ref::new(node))),
        }
    }

    /// Return a new tree without the current entry. Among several entries
    /// with equal keys, exactly the one under this cursor is removed.
    pub fn remove(&self) -> RbTree<K, V, C> {
        self.tree.remove_path(&self.stack)
    }
}

impl<K, V, C> RbTree<K, V, C> {
    fn cursor<'a>(&'a self, stack: Vec<&'a Node<K, V>>) -> Cursor<'a, K, V, C> {
        Cursor { tree: self, stack }
    }

    /// Cursor to the first entry.
    pub fn begin(&self) -> Cursor<K, V, C> {
        let mut stack = Vec::default();
        if let Some(root) = self.root.as_deref() {
            build_path(root, Dir::Left, &mut stack);
        }
        self.cursor(stack)
    }

    /// Cursor to the last entry.
    pub fn end(&self) -> Cursor<K, V, C> {
        let mut stack = Vec::default();
        if let Some(root) = self.root.as_deref() {
            build_path(root, Dir::Right, &mut stack);
        }
        self.cursor(stack)
    }

    /// Cursor to the entry at `index` in sort order.
    pub fn at(&self, mut index: usize) -> Cursor<K, V, C> {
        let mut stack = Vec::default();
        if index >= self.len() {
            return self.cursor(stack);
        }

        let mut node = self.root.as_deref();
        while let Some(nref) = node {
            stack.push(nref);
            let n_left = count(nref.as_left_ref());
            node = match index.cmp(&n_left) {
                Ordering::Less => nref.as_left_ref(),
                Ordering::Equal => break,
                Ordering::Greater => {
                    index -= n_left + 1;
                    nref.as_right_ref()
                }
            };
        }
        self.cursor(stack)
    }
}

impl<K, V, C> RbTree<K, V, C>
where
    C: Compare<K>,
{
    /// Cursor to the entry found by [RbTree::get], invalid if `key` is
    /// not present.
    pub fn find(&self, key: &K) -> Cursor<K, V, C> {
        self.cursor(self.search_path(key))
    }

    /// Cursor to the first entry whose key is greater than or equal to
    /// `key`.
    pub fn ge(&self, key: &K) -> Cursor<K, V, C> {
        self.seek(key, |d| d != Ordering::Greater, Dir::Left)
    }

    /// Cursor to the first entry whose key is greater than `key`.
    pub fn gt(&self, key: &K) -> Cursor<K, V, C> {
        self.seek(key, |d| d == Ordering::Less, Dir::Left)
    }

    /// Cursor to the last entry whose key is less than or equal to `key`.
    pub fn le(&self, key: &K) -> Cursor<K, V, C> {
        self.seek(key, |d| d != Ordering::Less, Dir::Right)
    }

    /// Cursor to the last entry whose key is less than `key`.
    pub fn lt(&self, key: &K) -> Cursor<K, V, C> {
        self.seek(key, |d| d == Ordering::Greater, Dir::Right)
    }

    // Descend comparing `key` against each node, `qualify` tells whether
    // a node is within bound, in which case the search continues toward
    // `dir` for a tighter match. The stack is truncated at the deepest
    // qualifying node.
    fn seek<F>(&self, key: &K, qualify: F, dir: Dir) -> Cursor<K, V, C>
    where
        F: Fn(Ordering) -> bool,
    {
        let (mut stack, mut last) = (Vec::default(), 0);

        let mut node = self.root.as_deref();
        while let Some(nref) = node {
            stack.push(nref);
            node = if qualify(self.cmp.compare(key, &nref.key)) {
                last = stack.len();
                nref.as_child_ref(dir)
            } else {
                nref.as_child_ref(dir.flip())
            };
        }

        stack.truncate(last);
        self.cursor(stack)
    }

    // Root-to-node path for the first node that equals `key`, empty if
    // there is none.
    pub(super) fn search_path(&self, key: &K) -> Vec<&Node<K, V>> {
        let mut stack = Vec::default();

        let mut node = self.root.as_deref();
        while let Some(nref) = node {
            stack.push(nref);
            if self.cmp.equals(key, &nref.key) {
                return stack;
            }
            node = match self.cmp.compare(key, &nref.key) {
                Ordering::Greater => nref.as_right_ref(),
                Ordering::Less | Ordering::Equal => nref.as_left_ref(),
            };
        }

        Vec::default()
    }
}

// push `node` and all its descendants toward `dir`.
fn build_path<'a, K, V>(node: &'a Node<K, V>, dir: Dir, stack: &mut Vec<&'a Node<K, V>>) {
    let mut node = Some(node);
    while let Some(nref) = node {
        stack.push(nref);
        node = nref.as_child_ref(dir);
    }
}

#[cfg(test)]
#[path = "cursor_test.rs"]
mod cursor_test;
