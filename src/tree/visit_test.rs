use super::*;

fn collect<F>(f: F) -> Vec<u32>
where
    F: FnOnce(&mut dyn FnMut(&u32, &u32) -> ControlFlow<()>) -> ControlFlow<()>,
{
    let mut keys = vec![];
    let res = f(&mut |k: &u32, _: &u32| {
        keys.push(*k);
        ControlFlow::Continue(())
    });
    assert_eq!(res, ControlFlow::Continue(()));
    keys
}

#[test]
fn test_for_each() {
    let tree: RbTree<u32, u32> = (0..32).rev().map(|i| (i, i)).collect();
    assert_eq!(collect(|v| tree.for_each(v)), (0..32).collect::<Vec<u32>>());

    let empty: RbTree<u32, u32> = RbTree::new();
    assert_eq!(collect(|v| empty.for_each(v)), Vec::<u32>::new());
    assert_eq!(collect(|v| empty.for_each_ge(&0, v)), Vec::<u32>::new());
}

#[test]
fn test_for_each_bounds() {
    let tree: RbTree<u32, u32> = (0..20).map(|i| (i * 2, i)).collect();

    assert_eq!(collect(|v| tree.for_each_between(&4, &10, v)), vec![4, 6, 8]);
    assert_eq!(collect(|v| tree.for_each_between(&5, &11, v)), vec![6, 8, 10]);
    assert_eq!(collect(|v| tree.for_each_between(&10, &10, v)), Vec::<u32>::new());
    assert_eq!(collect(|v| tree.for_each_ge(&34, v)), vec![34, 36, 38]);
    assert_eq!(collect(|v| tree.for_each_gt(&34, v)), vec![36, 38]);
    assert_eq!(collect(|v| tree.for_each_le(&4, v)), vec![0, 2, 4]);
    assert_eq!(collect(|v| tree.for_each_lt(&4, v)), vec![0, 2]);
    assert_eq!(collect(|v| tree.for_each_range(3..=7, v)), vec![4, 6]);
}

#[test]
fn test_for_each_duplicates() {
    let tree: RbTree<u32, u32> = vec![1, 2, 2, 2, 2, 2, 3].into_iter().map(|k| (k, k)).collect();
    assert_eq!(collect(|v| tree.for_each_between(&2, &3, v)), vec![2, 2, 2, 2, 2]);
    assert_eq!(collect(|v| tree.for_each_gt(&2, v)), vec![3]);
    assert_eq!(collect(|v| tree.for_each_le(&2, v)), vec![1, 2, 2, 2, 2, 2]);
}

#[test]
fn test_for_each_break() {
    let tree: RbTree<u32, u32> = (0..100).map(|i| (i, i * 3)).collect();

    let mut seen = 0;
    let res = tree.for_each_ge(&50, |k, v| {
        seen += 1;
        match *k {
            55 => ControlFlow::Break(*v),
            _ => ControlFlow::Continue(()),
        }
    });
    assert_eq!(res, ControlFlow::Break(165));
    assert_eq!(seen, 6);

    let res: ControlFlow<u32> = tree.for_each_lt(&10, |_, _| ControlFlow::Continue(()));
    assert_eq!(res, ControlFlow::Continue(()));
}
