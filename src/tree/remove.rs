use super::{
    node::{blacken, copy_path, fold, is_red, rotate, unshare, Color, Dir, Node, Step},
    RbTree, Ref,
};
use crate::Compare;

impl<K, V, C> RbTree<K, V, C>
where
    K: Clone,
    V: Clone,
    C: Compare<K>,
{
    /// Remove `key` and return the new tree, `self` is left untouched. If
    /// key is not present, then remove is effectively a no-op and a clone
    /// of `self` is returned.
    ///
    /// When there are several entries for `key`, the first one found on
    /// the search path is removed.
    pub fn remove(&self, key: &K) -> Self {
        self.remove_path(&self.search_path(key))
    }
}

impl<K, V, C> RbTree<K, V, C>
where
    K: Clone,
    V: Clone,
{
    // Remove the last node in `path`, which is the root-to-node path
    // into this tree.
    pub(super) fn remove_path(&self, path: &[&Node<K, V>]) -> Self {
        let target = match path.last() {
            Some(target) => *target,
            None => return self.clone(),
        };

        let mut stack = copy_path(path);
        let mut node = target.clone();

        if node.left.is_some() && node.right.is_some() {
            // swap in the in-order predecessor and remove that instead.
            let at = stack.len();
            stack.push(Step {
                node: node.clone(),
                dir: Dir::Left,
            });

            let mut pred = target.as_left_ref();
            while let Some(nref) = pred {
                match nref.as_right_ref() {
                    Some(right) => {
                        stack.push(Step {
                            node: nref.clone(),
                            dir: Dir::Right,
                        });
                        pred = Some(right);
                    }
                    None => {
                        node = nref.clone();
                        break;
                    }
                }
            }

            stack[at].node.key = node.key.clone();
            stack[at].node.value = node.value.clone();
        }

        let child = node.left.take().or_else(|| node.right.take());
        let root = match (node.color, child) {
            (Color::Red, child) => fold(stack, child),
            (Color::Black, Some(child)) => {
                let mut child = unshare(child);
                child.set_black();
                fold(stack, Some(Ref::new(child)))
            }
            (Color::Black, None) if stack.is_empty() => None,
            (Color::Black, None) => {
                let (stack, subtree) = fixup(stack, None);
                fold(stack, subtree)
            }
        };

        RbTree {
            cmp: Ref::clone(&self.cmp),
            root: blacken(root),
        }
    }
}

// Outcome of one level of double-black fix-up.
enum Fixup<K, V> {
    // deficiency resolved, sub-tree is balanced.
    Done(Node<K, V>),
    // sub-tree is balanced but one black short, move up one level.
    Up(Node<K, V>),
    // red sibling rotated above parent, parent shall be fixed again
    // beneath the new top.
    Rotated {
        top: Node<K, V>,
        parent: Node<K, V>,
        deficient: Option<Ref<Node<K, V>>>,
    },
}

// Repair the double-black `deficient` sub-tree, to be linked under the
// last step. Return the remaining ancestors and the sub-tree that shall be
// linked under them.
fn fixup<K, V>(
    mut stack: Vec<Step<K, V>>,
    mut deficient: Option<Ref<Node<K, V>>>,
) -> (Vec<Step<K, V>>, Option<Ref<Node<K, V>>>)
where
    K: Clone,
    V: Clone,
{
    loop {
        let Step {
            node: mut parent,
            dir,
        } = match stack.pop() {
            Some(step) => step,
            None => break (stack, deficient),
        };

        // black-height of the deficient side is at least one, hence the
        // other side can't be empty.
        let sibling = match parent.take_child(dir.flip()) {
            Some(sibling) => unshare(sibling),
            None => panic!("fixup(): missing sibling ? Call the programmer"),
        };

        let outcome = if sibling.is_red() {
            fix_red_sibling(parent, sibling, deficient, dir)
        } else if is_red(sibling.as_child_ref(dir.flip())) {
            Fixup::Done(fix_far_red(parent, sibling, deficient, dir))
        } else if is_red(sibling.as_child_ref(dir)) {
            Fixup::Done(fix_near_red(parent, sibling, deficient, dir))
        } else {
            fix_black_sibling(parent, sibling, deficient, dir)
        };

        match outcome {
            Fixup::Done(node) => break (stack, Some(Ref::new(node))),
            Fixup::Up(node) => deficient = Some(Ref::new(node)),
            Fixup::Rotated {
                top,
                parent,
                deficient: node,
            } => {
                stack.push(Step { node: top, dir });
                stack.push(Step { node: parent, dir });
                deficient = node;
            }
        }
    }
}

//           (x)                      (x)
//          parent                  sibling
//          /    \                  /     \
//       (db)    (b)      =>      (b)     (b)
//       node  sibling          parent    far
//              /   \           /    \
//           near   (r)       node   near
//                  far
//
fn fix_far_red<K, V>(
    mut parent: Node<K, V>,
    mut sibling: Node<K, V>,
    deficient: Option<Ref<Node<K, V>>>,
    dir: Dir,
) -> Node<K, V>
where
    K: Clone,
    V: Clone,
{
    if let Some(far) = sibling.take_child(dir.flip()) {
        let mut far = unshare(far);
        far.set_black();
        sibling.set_child(dir.flip(), Some(Ref::new(far)));
    }

    sibling.color = parent.color;
    parent.set_black();
    parent.set_child(dir, deficient);
    parent.set_child(dir.flip(), Some(Ref::new(sibling)));

    rotate(parent, dir)
}

//          parent                 parent
//          /    \                 /    \
//       (db)    (b)      =>     (db)   (b)
//       node  sibling           node   near
//              /   \                      \
//            (r)    far                   (r)
//            near                       sibling
//                                            \
//                                            far
//
// Brings the red nephew to the far side, then resolves as fix_far_red.
fn fix_near_red<K, V>(
    parent: Node<K, V>,
    mut sibling: Node<K, V>,
    deficient: Option<Ref<Node<K, V>>>,
    dir: Dir,
) -> Node<K, V>
where
    K: Clone,
    V: Clone,
{
    if let Some(near) = sibling.take_child(dir) {
        let mut near = unshare(near);
        near.set_black();
        sibling.set_child(dir, Some(Ref::new(near)));
    }
    sibling.set_red();

    let sibling = rotate(sibling, dir.flip());
    fix_far_red(parent, sibling, deficient, dir)
}

//           (x)                    (b)
//          parent                 parent
//          /    \                 /    \
//       (db)    (b)      =>     (b)    (r)
//       node  sibling           node  sibling
//              /   \                   /   \
//            (b)   (b)               (b)   (b)
//
// Deficiency is absorbed by a red parent, else pushed one level up.
fn fix_black_sibling<K, V>(
    mut parent: Node<K, V>,
    mut sibling: Node<K, V>,
    deficient: Option<Ref<Node<K, V>>>,
    dir: Dir,
) -> Fixup<K, V>
where
    K: Clone,
    V: Clone,
{
    sibling.set_red();
    parent.set_child(dir, deficient);
    parent.set_child(dir.flip(), Some(Ref::new(sibling)));

    if parent.is_red() {
        parent.set_black();
        Fixup::Done(parent)
    } else {
        Fixup::Up(parent)
    }
}

//          (b)                       (b)
//         parent                   sibling
//         /    \                   /     \
//      (db)    (r)       =>      (r)     far
//      node  sibling            parent
//             /   \             /    \
//           near   far       (db)    near
//                            node
//
// Parent turns red with a black sibling, one of the other cases follows.
fn fix_red_sibling<K, V>(
    mut parent: Node<K, V>,
    mut sibling: Node<K, V>,
    deficient: Option<Ref<Node<K, V>>>,
    dir: Dir,
) -> Fixup<K, V>
where
    K: Clone,
    V: Clone,
{
    sibling.set_black();
    parent.set_red();
    parent.set_child(dir.flip(), sibling.take_child(dir));

    Fixup::Rotated {
        top: sibling,
        parent,
        deficient,
    }
}

#[cfg(test)]
#[path = "remove_test.rs"]
mod remove_test;
