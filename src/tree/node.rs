use std::{fmt, ptr};

use super::Ref;

/// Color of a node.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Color {
    Red,
    Black,
}

/// Direction of a child link.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Dir {
    Left,
    Right,
}

impl Dir {
    #[inline]
    pub fn flip(self) -> Dir {
        match self {
            Dir::Left => Dir::Right,
            Dir::Right => Dir::Left,
        }
    }
}

/// Node corresponds to a single entry in tree.
///
/// Once a node is linked into a published tree it is never mutated again,
/// mutations work on a fresh copy, refer to [unshare].
#[derive(Clone, Debug)]
pub struct Node<K, V> {
    pub key: K,
    pub value: V,
    pub color: Color,
    pub left: Option<Ref<Node<K, V>>>,  // store: left child
    pub right: Option<Ref<Node<K, V>>>, // store: right child
    pub count: usize,                   // number of nodes in this sub-tree.
}

impl<K, V> Node<K, V> {
    /// Create a red leaf.
    pub fn new(key: K, value: V) -> Node<K, V> {
        Node {
            key,
            value,
            color: Color::Red,
            left: None,
            right: None,
            count: 1,
        }
    }

    #[inline]
    pub fn as_left_ref(&self) -> Option<&Node<K, V>> {
        self.left.as_deref()
    }

    #[inline]
    pub fn as_right_ref(&self) -> Option<&Node<K, V>> {
        self.right.as_deref()
    }

    #[inline]
    pub fn as_child_ref(&self, dir: Dir) -> Option<&Node<K, V>> {
        match dir {
            Dir::Left => self.as_left_ref(),
            Dir::Right => self.as_right_ref(),
        }
    }

    #[inline]
    pub fn take_child(&mut self, dir: Dir) -> Option<Ref<Node<K, V>>> {
        match dir {
            Dir::Left => self.left.take(),
            Dir::Right => self.right.take(),
        }
    }

    /// Link `child` at `dir` and recompute the sub-tree count.
    pub fn set_child(&mut self, dir: Dir, child: Option<Ref<Node<K, V>>>) {
        match dir {
            Dir::Left => self.left = child,
            Dir::Right => self.right = child,
        }
        self.recount()
    }

    #[inline]
    pub fn recount(&mut self) {
        self.count = 1 + count(self.as_left_ref()) + count(self.as_right_ref());
    }

    /// Return the direction from this node to `child`, which must be one
    /// of its children.
    pub fn dir_to(&self, child: &Node<K, V>) -> Dir {
        match self.as_left_ref() {
            Some(left) if ptr::eq(left, child) => Dir::Left,
            _ => Dir::Right,
        }
    }

    #[inline]
    pub fn set_red(&mut self) {
        self.color = Color::Red
    }

    #[inline]
    pub fn set_black(&mut self) {
        self.color = Color::Black
    }

    #[inline]
    pub fn is_red(&self) -> bool {
        self.color == Color::Red
    }

    #[inline]
    pub fn is_black(&self) -> bool {
        self.color == Color::Black
    }

    #[allow(dead_code)]
    #[cfg(test)]
    pub fn pretty_print(&self, mut prefix: String)
    where
        K: fmt::Debug,
        V: fmt::Debug,
    {
        match self.color {
            Color::Black => println!("{}(b)<{:?},{:?}>", prefix, self.key, self.value),
            Color::Red => println!("{}(r)<{:?},{:?}>", prefix, self.key, self.value),
        }
        prefix.push_str("  ");
        if let Some(l) = self.left.as_ref() {
            l.pretty_print(prefix.clone())
        }
        if let Some(r) = self.right.as_ref() {
            r.pretty_print(prefix)
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Color::Red => write!(f, "red"),
            Color::Black => write!(f, "black"),
        }
    }
}

#[inline]
pub fn count<K, V>(node: Option<&Node<K, V>>) -> usize {
    node.map_or(0, |node| node.count)
}

#[inline]
pub fn is_red<K, V>(node: Option<&Node<K, V>>) -> bool {
    node.map_or(false, |node| node.is_red())
}

/// Take ownership of a node for mutation. Nodes created by the ongoing
/// operation are held only by us and are reclaimed as is, published nodes
/// are copied.
pub fn unshare<K, V>(node: Ref<Node<K, V>>) -> Node<K, V>
where
    K: Clone,
    V: Clone,
{
    Ref::try_unwrap(node).unwrap_or_else(|node| node.as_ref().clone())
}

//              (i)                          (i)
//               |                            |
//              node                        pivot
//              /  \                         / \
//             /    \                       /   \
//            /      \                     /     \
//          left    pivot              node      pr
//                  /  \               /  \
//                pl    pr          left   pl
//
/// Rotate `node` toward `dir`, its child on the other side becomes the
/// sub-tree root. Colors are left untouched.
pub fn rotate<K, V>(mut node: Node<K, V>, dir: Dir) -> Node<K, V>
where
    K: Clone,
    V: Clone,
{
    let mut pivot = match node.take_child(dir.flip()) {
        Some(pivot) => unshare(pivot),
        None => panic!("rotate(): missing pivot for {:?} ? Call the programmer", dir),
    };

    node.set_child(dir.flip(), pivot.take_child(dir));
    pivot.set_child(dir, Some(Ref::new(node)));

    pivot
}

#[inline]
pub fn rotate_left<K: Clone, V: Clone>(node: Node<K, V>) -> Node<K, V> {
    rotate(node, Dir::Left)
}

#[inline]
pub fn rotate_right<K: Clone, V: Clone>(node: Node<K, V>) -> Node<K, V> {
    rotate(node, Dir::Right)
}

/// Freshly copied ancestor whose child at `dir` is yet to be linked.
pub struct Step<K, V> {
    pub node: Node<K, V>,
    pub dir: Dir,
}

/// Copy the root-to-node `path` into steps, excluding the last node.
pub fn copy_path<K, V>(path: &[&Node<K, V>]) -> Vec<Step<K, V>>
where
    K: Clone,
    V: Clone,
{
    path.windows(2)
        .map(|w| Step {
            node: w[0].clone(),
            dir: w[0].dir_to(w[1]),
        })
        .collect()
}

/// Link `child` under each step, bottom-up, and return the new root.
pub fn fold<K, V>(
    mut stack: Vec<Step<K, V>>,
    mut child: Option<Ref<Node<K, V>>>,
) -> Option<Ref<Node<K, V>>> {
    while let Some(Step { mut node, dir }) = stack.pop() {
        node.set_child(dir, child);
        child = Some(Ref::new(node));
    }
    child
}

/// Force the root to black.
pub fn blacken<K, V>(root: Option<Ref<Node<K, V>>>) -> Option<Ref<Node<K, V>>>
where
    K: Clone,
    V: Clone,
{
    match root {
        Some(root) if root.is_red() => {
            let mut root = unshare(root);
            root.set_black();
            Some(Ref::new(root))
        }
        root => root,
    }
}

#[cfg(test)]
#[path = "node_test.rs"]
mod node_test;
