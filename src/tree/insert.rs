use std::cmp::Ordering;

use super::{
    node::{blacken, fold, is_red, rotate_left, rotate_right, unshare, Dir, Node, Step},
    RbTree, Ref,
};
use crate::Compare;

impl<K, V, C> RbTree<K, V, C>
where
    K: Clone,
    V: Clone,
    C: Compare<K>,
{
    /// Insert `key` and `value` and return the new tree, `self` is left
    /// untouched.
    ///
    /// Existing entries are never replaced, if an equal key is already
    /// present the new entry is placed just before it in sort order.
    pub fn insert(&self, key: K, value: V) -> Self {
        let mut stack: Vec<Step<K, V>> = Vec::default();

        let mut node = self.root.as_deref();
        while let Some(nref) = node {
            let dir = match self.cmp.compare(&key, &nref.key) {
                Ordering::Greater => Dir::Right,
                Ordering::Less | Ordering::Equal => Dir::Left,
            };
            stack.push(Step {
                node: nref.clone(),
                dir,
            });
            node = nref.as_child_ref(dir);
        }

        let (stack, subtree) = rebalance(stack, Node::new(key, value));
        let root = blacken(fold(stack, Some(Ref::new(subtree))));

        RbTree {
            cmp: Ref::clone(&self.cmp),
            root,
        }
    }
}

// Walk up from the red `node`, whose parent is the last step, fixing
// red-red violations. Return the remaining ancestors and the sub-tree
// that shall be linked under them.
fn rebalance<K, V>(mut stack: Vec<Step<K, V>>, mut node: Node<K, V>) -> (Vec<Step<K, V>>, Node<K, V>)
where
    K: Clone,
    V: Clone,
{
    loop {
        if !stack.last().map_or(false, |parent| parent.node.is_red()) {
            break (stack, node);
        }

        // a red parent is never the root, grand-parent always exist.
        let (parent, grand) = match (stack.pop(), stack.pop()) {
            (Some(parent), Some(grand)) => (parent, grand),
            _ => panic!("rebalance(): red node without parent ? Call the programmer"),
        };

        let uncle = grand.node.as_child_ref(grand.dir.flip());
        if is_red(uncle) {
            node = recolor(grand, parent, node);
            continue;
        }

        let Step { node: mut parent, dir: pdir } = parent;
        let Step { node: mut grand, dir: gdir } = grand;
        parent.set_child(pdir, Some(Ref::new(node)));
        grand.set_child(gdir, Some(Ref::new(parent)));

        let subtree = match (gdir, pdir) {
            (Dir::Left, Dir::Left) => rotate_ll(grand),
            (Dir::Left, Dir::Right) => rotate_lr(grand),
            (Dir::Right, Dir::Left) => rotate_rl(grand),
            (Dir::Right, Dir::Right) => rotate_rr(grand),
        };
        break (stack, subtree);
    }
}

//           (b)                    (r)
//          grand                  grand
//          /   \                  /   \
//        (r)   (r)     =>       (b)   (b)
//      parent  uncle          parent  uncle
//        |                      |
//       (r)                    (r)
//       node                   node
//
// Push the violation up, caller continues with the returned grand-parent.
fn recolor<K, V>(grand: Step<K, V>, parent: Step<K, V>, node: Node<K, V>) -> Node<K, V>
where
    K: Clone,
    V: Clone,
{
    let Step { node: mut parent, dir: pdir } = parent;
    let Step { node: mut grand, dir: gdir } = grand;

    parent.set_black();
    parent.set_child(pdir, Some(Ref::new(node)));

    if let Some(uncle) = grand.take_child(gdir.flip()) {
        let mut uncle = unshare(uncle);
        uncle.set_black();
        grand.set_child(gdir.flip(), Some(Ref::new(uncle)));
    }

    grand.set_red();
    grand.set_child(gdir, Some(Ref::new(parent)));
    grand
}

//            (b)                 (b)
//           grand               parent
//           /                   /    \
//         (r)          =>     (r)    (r)
//       parent               node   grand
//        /
//      (r)
//      node
//
fn rotate_ll<K: Clone, V: Clone>(mut grand: Node<K, V>) -> Node<K, V> {
    let color = grand.color;
    grand.set_red();
    let mut top = rotate_right(grand);
    top.color = color;
    top
}

fn rotate_rr<K: Clone, V: Clone>(mut grand: Node<K, V>) -> Node<K, V> {
    let color = grand.color;
    grand.set_red();
    let mut top = rotate_left(grand);
    top.color = color;
    top
}

//          grand             grand
//          /                 /
//      parent       =>     node        =>  rotate_ll
//          \               /
//          node         parent
//
fn rotate_lr<K: Clone, V: Clone>(mut grand: Node<K, V>) -> Node<K, V> {
    if let Some(parent) = grand.take_child(Dir::Left) {
        let parent = rotate_left(unshare(parent));
        grand.set_child(Dir::Left, Some(Ref::new(parent)));
    }
    rotate_ll(grand)
}

fn rotate_rl<K: Clone, V: Clone>(mut grand: Node<K, V>) -> Node<K, V> {
    if let Some(parent) = grand.take_child(Dir::Right) {
        let parent = rotate_right(unshare(parent));
        grand.set_child(Dir::Right, Some(Ref::new(parent)));
    }
    rotate_rr(grand)
}

#[cfg(test)]
#[path = "insert_test.rs"]
mod insert_test;
