//! Module implement fully-persistent red-black tree, faster but not thread safe.

use std::rc::Rc as Ref;

#[path = "./tree/cursor.rs"]
mod cursor;
#[path = "./tree/insert.rs"]
mod insert;
#[path = "./tree/iter.rs"]
mod iter;
#[path = "./tree/node.rs"]
mod node;
#[path = "./tree/rbtree.rs"]
mod rbtree;
#[path = "./tree/remove.rs"]
mod remove;
#[path = "./tree/visit.rs"]
mod visit;

pub use self::{
    cursor::Cursor,
    iter::{Iter, Keys, Range, Reverse, Values},
    rbtree::RbTree,
};

impl<K, V, C> RbTree<K, V, C> {
    /// Return whether this instance is thread-safe.
    pub fn is_thread_safe(&self) -> bool {
        false
    }
}

#[cfg(test)]
#[path = "rc_test.rs"]
mod rc_test;
