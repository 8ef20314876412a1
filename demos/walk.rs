use kdbalance::{KdTree, NodeRef};

fn print_subtree(node: Option<NodeRef<'_, [i32; 2]>>, depth: usize, label: &str) {
    let Some(node) = node else { return };
    let axis = if depth % 2 == 0 { 'x' } else { 'y' };
    println!("{}{} {:?} (split on {})", "  ".repeat(depth), label, node.data(), axis);
    print_subtree(node.left(), depth + 1, "L");
    print_subtree(node.right(), depth + 1, "R");
}

fn main() {
    env_logger::init();

    let points = vec![[2, 3], [5, 4], [9, 6], [4, 7], [8, 1], [7, 2], [1, 8]];
    let mut tree = KdTree::build(points).expect("points share one dimension");

    println!("{} points, depth {}", tree.len(), tree.depth());
    print_subtree(tree.root(), 0, "*");

    tree.grow(vec![[3, 3], [6, 9], [0, 0]]).expect("points share one dimension");

    println!("\nafter grow: {} points, depth {}", tree.len(), tree.depth());
    print_subtree(tree.root(), 0, "*");
}
