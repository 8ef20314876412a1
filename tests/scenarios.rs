use kdbalance::{BuildOptions, Dimensionality, Error, KdPoint, KdTree, LinkStrategy, NodeRef};

fn collect<'a, P: Clone>(start: Option<NodeRef<'a, P>>) -> Vec<P> {
    let mut out = Vec::new();
    let mut stack: Vec<NodeRef<'a, P>> = start.into_iter().collect();
    while let Some(node) = stack.pop() {
        stack.extend(node.left());
        stack.extend(node.right());
        out.push(node.data().clone());
    }
    out
}

#[test]
fn test_seven_diagonal_points() {
    let points = vec![[1, 1], [2, 2], [3, 3], [4, 4], [5, 5], [6, 6], [7, 7]];

    for strategy in [LinkStrategy::Iterative, LinkStrategy::Recursive, LinkStrategy::Select] {
        let tree = KdTree::build_with(points.clone(), BuildOptions::new().with_strategy(strategy)).unwrap();

        let root = tree.root().expect("Should have a root");
        assert_eq!(root.data(), &[4, 4], "{:?} picked the wrong root", strategy);

        let mut left = collect(root.left());
        left.sort();
        assert_eq!(left, vec![[1, 1], [2, 2], [3, 3]]);

        let mut right = collect(root.right());
        right.sort();
        assert_eq!(right, vec![[5, 5], [6, 6], [7, 7]]);

        // Second level splits on y, which here orders the same way.
        assert_eq!(root.left().unwrap().data(), &[2, 2]);
        assert_eq!(root.right().unwrap().data(), &[6, 6]);
        assert_eq!(tree.depth(), 3);
    }
}

#[test]
fn test_second_level_uses_second_axis() {
    // x and y orders disagree, so using x indices on the y ordering would pick the wrong nodes.
    let points = vec![[1, 30], [2, 10], [3, 20], [4, 0], [5, 60], [6, 40], [7, 50]];
    let tree = KdTree::build(points).unwrap();

    let root = tree.root().unwrap();
    assert_eq!(root.data(), &[4, 0]);

    let left = root.left().unwrap();
    assert_eq!(left.data(), &[3, 20], "median of the left half by y");
    assert_eq!(left.left().unwrap().data(), &[2, 10]);
    assert_eq!(left.right().unwrap().data(), &[1, 30]);

    let right = root.right().unwrap();
    assert_eq!(right.data(), &[7, 50], "median of the right half by y");
    assert_eq!(right.left().unwrap().data(), &[6, 40]);
    assert_eq!(right.right().unwrap().data(), &[5, 60]);
}

#[test]
fn test_empty_then_single_point() {
    let mut tree: KdTree<Vec<f64>> = KdTree::build(Vec::new()).unwrap();
    assert!(tree.root().is_none());
    assert!(tree.is_empty());
    assert_eq!(tree.axis_count(), 0);

    tree.grow(vec![vec![0.5, 1.5, 2.5]]).unwrap();
    assert_eq!(tree.axis_count(), 3);
    assert_eq!(tree.dimensionality(), Some(Dimensionality::Dynamic(3)));

    let root = tree.root().unwrap();
    assert_eq!(root.data(), &vec![0.5, 1.5, 2.5]);
    assert!(root.left().is_none());
    assert!(root.right().is_none());
    assert_eq!(tree.depth(), 1);
}

#[test]
fn test_identical_points() {
    let points = vec![[3.0, 3.0, 3.0]; 100];
    let tree = KdTree::build(points).unwrap();

    assert_eq!(tree.len(), 100);
    assert_eq!(tree.depth(), 7);
    assert_eq!(collect(tree.root()).len(), 100);
}

#[test]
fn test_grow_dimension_mismatch() {
    let mut tree = KdTree::build(vec![vec![1.0, 2.0], vec![3.0, 4.0]]).unwrap();
    let err = tree.grow(vec![vec![5.0]]).unwrap_err();
    assert_eq!(err, Error::DimensionMismatch { expected: 2, found: 1, index: 0 });
    assert_eq!(err.to_string(), "point 0 has 1 coordinates, but the tree uses 2 axes");
    assert_eq!(tree.len(), 2);
}

#[derive(Clone, Debug, PartialEq)]
struct Sample {
    id: u32,
    position: [f32; 2],
}

impl KdPoint for Sample {
    type Scalar = f32;
    const DIMENSIONS: Option<usize> = Some(2);

    fn axis_count(&self) -> usize {
        2
    }

    fn coordinate(&self, axis: usize) -> f32 {
        self.position[axis]
    }
}

#[test]
fn test_custom_record_type() {
    let samples: Vec<Sample> = (0..9)
        .map(|i| Sample { id: i, position: [i as f32, (8 - i) as f32] })
        .collect();
    let tree = KdTree::build(samples).unwrap();

    assert_eq!(tree.dimensionality(), Some(Dimensionality::Static(2)));
    assert_eq!(tree.root().unwrap().data().id, 4);

    let mut ids: Vec<u32> = collect(tree.root()).iter().map(|s| s.id).collect();
    ids.sort();
    assert_eq!(ids, (0..9).collect::<Vec<u32>>());
}

#[test]
fn test_borrowed_storage_outlives_tree() {
    let storage: Vec<Vec<i64>> = (0..10).map(|i| vec![i, i * i]).collect();
    let tree = KdTree::build(storage.iter().collect::<Vec<&Vec<i64>>>()).unwrap();
    assert_eq!(tree.len(), 10);
    assert!(std::ptr::eq(*tree.root().unwrap().data(), &storage[5]));
}
