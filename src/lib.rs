//! Package implement Persistent Red-Black Tree.
//!
//! Quoting from [Wikipedia][pds]:
//!
//! > A data structure is *partially persistent* if all versions can be
//! > accessed but only the newest version can be modified. The data
//! > structure is *fully persistent* if every version can be both accessed
//! > and modified.
//!
//! [RbTree][rc::RbTree] is a fully persistent ordered associative container,
//! using classic [red-black][wiki-rbt] balancing with path-copying. Every
//! `insert` and `remove` returns a new tree, sharing all untouched
//! sub-trees with the tree it was derived from. Older handles stay valid
//! and unaffected.
//!
//! - Each entry correspond to a {Key, Value} pair.
//! - Ordering is supplied by a [Compare] implementation, default is
//!   [Natural] ordering on `K: Ord`.
//! - Duplicate keys are allowed, ties are always routed to the left.
//! - Rank queries, via get_at() and at(), in O(log n).
//! - Cursors, to move forward and backward from any position.
//! - Full table scan, range scan and reverse scan.
//! - Two flavours, [rc] for single threaded use and [arc] for sharing
//!   snapshots across threads.
//!
//! Constructing a new tree and CRUD operations:
//!
//! ```
//! use prbt::rc::RbTree;
//!
//! let tree: RbTree<u32, &str> = RbTree::new();
//! assert_eq!(tree.len(), 0);
//!
//! let t1 = tree.insert(5, "five").insert(3, "three").insert(8, "eight");
//! let t2 = t1.remove(&5);
//!
//! assert_eq!(t1.len(), 3);
//! assert_eq!(t1.get(&5), Some(&"five"));
//! assert_eq!(t2.len(), 2);
//! assert_eq!(t2.get(&5), None);
//!
//! assert_eq!(t1.get_at(0), Some((&3, &"three")));
//! let keys: Vec<u32> = t1.keys().cloned().collect();
//! assert_eq!(keys, vec![3, 5, 8]);
//! ```
//!
//! Range scan with cursors:
//!
//! ```
//! use prbt::rc::RbTree;
//!
//! let tree: RbTree<u32, u32> = (0..10).map(|i| (i * 10, i)).collect();
//!
//! let mut cur = tree.ge(&25);
//! assert_eq!(cur.key(), Some(&30));
//! cur.move_prev();
//! assert_eq!(cur.key(), Some(&20));
//! assert_eq!(cur.index(), 2);
//!
//! let items: Vec<u32> = tree.range(20..50).map(|(k, _)| *k).collect();
//! assert_eq!(items, vec![20, 30, 40]);
//! ```
//!
//! [wiki-rbt]: https://en.wikipedia.org/wiki/Red%E2%80%93black_tree
//! [pds]: https://en.wikipedia.org/wiki/Persistent_data_structure

use std::{error, fmt, result};

// Short form to compose Error values.
//
// ```ignore
// use crate::Error;
// err_at!(RedRoot, msg: "root is red");
// err_at!(InvalidCount, msg: "{} != {}", a, b);
// ```
macro_rules! err_at {
    ($v:ident, msg: $($arg:expr),+) => {{
        let prefix = format!("{}:{}", file!(), line!());
        Err(Error::$v(prefix, format!($($arg),+)))
    }};
}

mod compare;

pub mod arc;
pub mod rc;

pub use compare::{by, by_ord, Compare, FnCompare, Natural};

/// Error variants that are returned by this package's API.
///
/// Each variant carries a prefix, typically identifying the
/// error location.
pub enum Error {
    ConsecutiveReds(String, String),
    UnbalancedBlacks(String, String),
    UnsortedKeys(String, String),
    InvalidCount(String, String),
    RedRoot(String, String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> result::Result<(), fmt::Error> {
        use Error::*;

        match self {
            ConsecutiveReds(p, msg) => write!(f, "{} ConsecutiveReds: {}", p, msg),
            UnbalancedBlacks(p, msg) => write!(f, "{} UnbalancedBlacks: {}", p, msg),
            UnsortedKeys(p, msg) => write!(f, "{} UnsortedKeys: {}", p, msg),
            InvalidCount(p, msg) => write!(f, "{} InvalidCount: {}", p, msg),
            RedRoot(p, msg) => write!(f, "{} RedRoot: {}", p, msg),
        }
    }
}

impl fmt::Debug for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> result::Result<(), fmt::Error> {
        write!(f, "{}", self)
    }
}

impl error::Error for Error {}

/// Type alias for Result return type, used by this package.
pub type Result<T> = result::Result<T, Error>;
