use super::super::node::Color;
use super::*;

fn mk(key: u32, color: Color, l: Option<Node<u32, u32>>, r: Option<Node<u32, u32>>) -> Node<u32, u32> {
    let mut node = Node::new(key, key);
    node.color = color;
    node.left = l.map(Ref::new);
    node.right = r.map(Ref::new);
    node.recount();
    node
}

fn leaf(key: u32, color: Color) -> Option<Node<u32, u32>> {
    Some(mk(key, color, None, None))
}

fn from_root(root: Node<u32, u32>) -> RbTree<u32, u32> {
    RbTree {
        cmp: Ref::new(Natural),
        root: Some(Ref::new(root)),
    }
}

#[test]
fn test_new() {
    let tree: RbTree<u32, u32> = RbTree::new();
    assert_eq!(tree.len(), 0);
    assert!(tree.is_empty());
    assert_eq!(tree.first(), None);
    assert_eq!(tree.last(), None);
    assert_eq!(tree.get(&1), None);
    assert_eq!(tree.get_at(0), None);
    assert!(tree.find_all(&1).is_empty());
    tree.validate().unwrap();

    let tree: RbTree<u32, u32> = RbTree::default();
    assert!(tree.is_empty());
    assert_eq!(format!("{:?}", tree), "{}");
}

#[test]
fn test_queries() {
    let tree: RbTree<u32, u32> = vec![40, 10, 30, 20, 50].into_iter().map(|k| (k, k + 1)).collect();
    tree.validate().unwrap();

    assert_eq!(tree.len(), 5);
    assert!(!tree.is_empty());
    assert_eq!(tree.first(), Some((&10, &11)));
    assert_eq!(tree.last(), Some((&50, &51)));

    for (i, key) in [10, 20, 30, 40, 50].iter().enumerate() {
        assert_eq!(tree.get(key), Some(&(key + 1)));
        assert!(tree.contains_key(key));
        assert_eq!(tree.get_at(i), Some((key, &(key + 1))));
    }
    assert_eq!(tree.get_at(5), None);
    assert_eq!(tree.get(&25), None);
    assert!(!tree.contains_key(&0));
}

#[test]
fn test_find_all() {
    let tree: RbTree<u32, u32> = RbTree::new().insert(5, 1).insert(5, 2).insert(5, 3);
    tree.validate().unwrap();

    // (5:3 5:2 5:1) rotates into 5:2 at root, ties descend to the left.
    assert_eq!(tree.get(&5), Some(&2));
    assert_eq!(tree.find_all(&5), vec![&2, &3]);
    assert!(tree.find_all(&6).is_empty());

    let values: Vec<u32> = tree.values().cloned().collect();
    assert_eq!(values, vec![3, 2, 1]);
}

#[test]
fn test_with_compare() {
    let cmp = crate::by(
        |a: &(u32, u32), b: &(u32, u32)| a.0.cmp(&b.0),
        |a: &(u32, u32), b: &(u32, u32)| a == b,
    );
    let tree = RbTree::with_compare(cmp)
        .insert((1, 10), "a")
        .insert((2, 20), "b")
        .insert((3, 30), "c");
    tree.validate().unwrap();

    assert_eq!(tree.get(&(2, 20)), Some(&"b"));
    assert_eq!(tree.get(&(2, 99)), None);
    assert!(!tree.contains_key(&(3, 0)));
    assert_eq!(tree.as_compare().compare(&(2, 0), &(2, 1)), std::cmp::Ordering::Equal);

    // comparator is carried over to derived trees.
    let tree = tree.insert((2, 21), "d").remove(&(2, 20));
    assert_eq!(tree.len(), 3);
    assert_eq!(tree.get(&(2, 21)), Some(&"d"));
    assert_eq!(tree.get(&(2, 20)), None);
}

#[test]
fn test_persistence() {
    let t1: RbTree<u32, u32> = (0..64).map(|i| (i, i)).collect();
    let t2 = t1.insert(100, 100);
    let t3 = t1.remove(&10);
    let t4 = t1.clone();

    assert_eq!(t1.len(), 64);
    assert_eq!(t2.len(), 65);
    assert_eq!(t3.len(), 63);
    assert_eq!(t1.get(&100), None);
    assert_eq!(t1.get(&10), Some(&10));
    assert_eq!(t2.get(&100), Some(&100));
    assert_eq!(t3.get(&10), None);

    let a: Vec<(&u32, &u32)> = t1.iter().collect();
    let b: Vec<(&u32, &u32)> = t4.iter().collect();
    assert_eq!(a, b);

    // removing a missing key leaves an equal tree.
    let t5 = t1.remove(&1000);
    assert_eq!(t5.len(), t1.len());
    t5.validate().unwrap();
}

#[test]
fn test_validate_red_root() {
    let tree = from_root(mk(1, Color::Red, None, None));
    match tree.validate() {
        Err(Error::RedRoot(_, _)) => (),
        res => panic!("unexpected {:?}", res),
    }
}

#[test]
fn test_validate_consecutive_reds() {
    let left = mk(1, Color::Red, leaf(0, Color::Red), None);
    let tree = from_root(mk(2, Color::Black, Some(left), None));
    match tree.validate() {
        Err(Error::ConsecutiveReds(_, msg)) => assert!(msg.contains('0'), "{}", msg),
        res => panic!("unexpected {:?}", res),
    }
}

#[test]
fn test_validate_unbalanced_blacks() {
    let tree = from_root(mk(2, Color::Black, leaf(1, Color::Black), None));
    match tree.validate() {
        Err(Error::UnbalancedBlacks(_, _)) => (),
        res => panic!("unexpected {:?}", res),
    }
}

#[test]
fn test_validate_invalid_count() {
    let mut root = mk(2, Color::Black, leaf(1, Color::Red), leaf(3, Color::Red));
    from_root(root.clone()).validate().unwrap();

    root.count = 5;
    match from_root(root).validate() {
        Err(err @ Error::InvalidCount(_, _)) => {
            assert!(err.to_string().contains("InvalidCount"), "{}", err)
        }
        res => panic!("unexpected {:?}", res),
    }
}

#[test]
fn test_validate_unsorted_keys() {
    let tree = from_root(mk(2, Color::Black, leaf(3, Color::Red), leaf(1, Color::Red)));
    match tree.validate() {
        Err(Error::UnsortedKeys(_, _)) => (),
        res => panic!("unexpected {:?}", res),
    }
}

#[cfg(feature = "rand")]
#[test]
fn test_random() {
    use rand::{rngs::SmallRng, SeedableRng};

    let mut rng = SmallRng::seed_from_u64(0x1234);

    let empty: RbTree<u32, u32> = RbTree::new();
    assert_eq!(empty.random(&mut rng), None);

    let tree: RbTree<u32, u32> = (0..16).map(|i| (i, i)).collect();
    let mut seen = [false; 16];
    for _ in 0..1000 {
        let (key, value) = tree.random(&mut rng).unwrap();
        assert_eq!(key, value);
        seen[*key as usize] = true;
    }
    assert!(seen.iter().all(|x| *x));
}
