//! Module implement fully-persistent red-black tree, slower but thread safe.
//!
//! Trees can be shared across threads, every thread holding a handle
//! reads its own snapshot, unaffected by inserts and removes on other
//! handles.

use std::sync::Arc as Ref;

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
        true
    }
}

#[cfg(test)]
#[path = "arc_test.rs"]
mod arc_test;
