use super::*;

fn leaf(key: u32, color: Color) -> Node<u32, u32> {
    let mut node = Node::new(key, key * 10);
    node.color = color;
    node
}

fn join(mut node: Node<u32, u32>, l: Option<Node<u32, u32>>, r: Option<Node<u32, u32>>) -> Node<u32, u32> {
    node.set_child(Dir::Left, l.map(Ref::new));
    node.set_child(Dir::Right, r.map(Ref::new));
    node
}

fn keys(node: Option<&Node<u32, u32>>, acc: &mut Vec<u32>) {
    if let Some(node) = node {
        keys(node.as_left_ref(), acc);
        acc.push(node.key);
        keys(node.as_right_ref(), acc);
    }
}

#[test]
fn test_node_new() {
    let node = Node::new(1_u32, 2_u32);
    assert!(node.is_red());
    assert!(!node.is_black());
    assert_eq!(node.count, 1);
    assert!(node.as_left_ref().is_none());
    assert!(node.as_right_ref().is_none());
    assert_eq!(count::<u32, u32>(None), 0);
    assert!(!is_red::<u32, u32>(None));
    assert_eq!(format!("{}", node.color), "red");
}

#[test]
fn test_node_set_child() {
    let mut node = leaf(10, Color::Black);
    node.set_child(Dir::Left, Some(Ref::new(leaf(5, Color::Red))));
    assert_eq!(node.count, 2);
    node.set_child(Dir::Right, Some(Ref::new(leaf(15, Color::Red))));
    assert_eq!(node.count, 3);

    let left = node.take_child(Dir::Left).unwrap();
    assert_eq!(left.key, 5);
    assert_eq!(node.count, 3, "take_child does not recount");
    node.recount();
    assert_eq!(node.count, 2);
}

#[test]
fn test_node_dir_to() {
    let node = join(
        leaf(10, Color::Black),
        Some(leaf(5, Color::Red)),
        Some(leaf(15, Color::Red)),
    );
    let (l, r) = (node.as_left_ref().unwrap(), node.as_right_ref().unwrap());
    assert_eq!(node.dir_to(l), Dir::Left);
    assert_eq!(node.dir_to(r), Dir::Right);
    assert_eq!(Dir::Left.flip(), Dir::Right);
    assert_eq!(Dir::Right.flip(), Dir::Left);
}

//      10              20
//     /  \            /  \
//    5    20   =>   10    30
//        /  \      /  \
//      15    30   5    15
#[test]
fn test_rotate_left() {
    let right = join(leaf(20, Color::Red), Some(leaf(15, Color::Black)), Some(leaf(30, Color::Black)));
    let node = join(leaf(10, Color::Black), Some(leaf(5, Color::Black)), Some(right));
    assert_eq!(node.count, 5);

    let top = rotate_left(node);
    assert_eq!(top.key, 20);
    assert_eq!(top.count, 5);
    assert!(top.is_red(), "colors are left untouched");

    let left = top.as_left_ref().unwrap();
    assert_eq!(left.key, 10);
    assert_eq!(left.count, 3);
    assert_eq!(left.as_left_ref().unwrap().key, 5);
    assert_eq!(left.as_right_ref().unwrap().key, 15);
    assert_eq!(top.as_right_ref().unwrap().key, 30);

    let mut acc = vec![];
    keys(Some(&top), &mut acc);
    assert_eq!(acc, vec![5, 10, 15, 20, 30]);
}

//        20            10
//       /  \          /  \
//     10    30  =>   5    20
//    /  \                /  \
//   5    15            15    30
#[test]
fn test_rotate_right() {
    let left = join(leaf(10, Color::Red), Some(leaf(5, Color::Black)), Some(leaf(15, Color::Black)));
    let node = join(leaf(20, Color::Black), Some(left), Some(leaf(30, Color::Black)));

    let top = rotate_right(node);
    assert_eq!(top.key, 10);
    assert_eq!(top.count, 5);

    let right = top.as_right_ref().unwrap();
    assert_eq!(right.key, 20);
    assert_eq!(right.count, 3);
    assert_eq!(right.as_left_ref().unwrap().key, 15);

    let mut acc = vec![];
    keys(Some(&top), &mut acc);
    assert_eq!(acc, vec![5, 10, 15, 20, 30]);
}

#[test]
#[should_panic]
fn test_rotate_missing_pivot() {
    rotate_left(leaf(1, Color::Black));
}

#[test]
fn test_unshare() {
    let shared = Ref::new(leaf(7, Color::Black));
    let other = Ref::clone(&shared);
    let mut copy = unshare(shared);
    copy.set_red();
    assert!(other.is_black(), "published node must not change");
    assert!(copy.is_red());

    let owned = unshare(Ref::new(leaf(8, Color::Red)));
    assert_eq!(owned.key, 8);
}

#[test]
fn test_fold_blacken() {
    let root = join(leaf(10, Color::Black), Some(leaf(5, Color::Black)), Some(leaf(15, Color::Black)));
    let stack = vec![Step { node: root, dir: Dir::Left }];

    let new_leaf = join(leaf(5, Color::Black), Some(leaf(3, Color::Red)), None);
    let root = fold(stack, Some(Ref::new(new_leaf))).unwrap();
    assert_eq!(root.count, 4);
    assert_eq!(root.as_left_ref().unwrap().count, 2);

    let red = Some(Ref::new(leaf(1, Color::Red)));
    assert!(blacken(red).unwrap().is_black());
    assert!(blacken::<u32, u32>(None).is_none());
}

#[test]
fn test_copy_path() {
    let root = join(
        leaf(10, Color::Black),
        Some(join(leaf(5, Color::Black), None, Some(leaf(7, Color::Red)))),
        Some(leaf(15, Color::Black)),
    );
    let five = root.as_left_ref().unwrap();
    let seven = five.as_right_ref().unwrap();

    let steps = copy_path(&[&root, five, seven]);
    assert_eq!(steps.len(), 2);
    assert_eq!((steps[0].node.key, steps[0].dir), (10, Dir::Left));
    assert_eq!((steps[1].node.key, steps[1].dir), (5, Dir::Right));
    assert!(copy_path(&[&root]).is_empty());
}
