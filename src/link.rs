//! Tree assembly: turns split decisions into `left`/`right` links in the node arena.
//!
//! Both forms take a `split(axis, start, end)` callback that returns the median node of the
//! range and leaves `[start, mid)` and `(mid, end)` holding the left and right subtrees.

use crate::node::{Node, NodeId};

/// Where a linked subtree root gets attached.
#[derive(Clone, Copy, Debug)]
enum Slot {
    Root,
    Left(NodeId),
    Right(NodeId),
}

#[derive(Clone, Copy, Debug)]
struct Frame {
    depth: usize,
    start: usize,
    end: usize,
    slot: Slot,
}

/// Link `nodes` with an explicit work-stack. Nodes must be unlinked beforehand.
pub(crate) fn link_iterative<F>(nodes: &mut [Node], axis_count: usize, mut split: F) -> Option<NodeId>
where
    F: FnMut(usize, usize, usize) -> NodeId,
{
    let count = nodes.len();
    if count == 0 {
        return None;
    }

    let mut root = None;
    // Depth-first: at most one pending sibling per level.
    let levels = (usize::BITS - count.leading_zeros()) as usize;
    let mut stack = Vec::with_capacity(levels + 1);
    stack.push(Frame { depth: 0, start: 0, end: count, slot: Slot::Root });

    while let Some(frame) = stack.pop() {
        let mid = frame.start + (frame.end - frame.start) / 2;
        let median = split(frame.depth % axis_count, frame.start, frame.end);

        match frame.slot {
            Slot::Root => root = Some(median),
            Slot::Left(parent) => nodes[parent.0].left = Some(median),
            Slot::Right(parent) => nodes[parent.0].right = Some(median),
        }

        let depth = frame.depth + 1;
        if mid + 1 < frame.end {
            stack.push(Frame { depth, start: mid + 1, end: frame.end, slot: Slot::Right(median) });
        }
        if frame.start < mid {
            stack.push(Frame { depth, start: frame.start, end: mid, slot: Slot::Left(median) });
        }
    }

    root
}

/// Same as [`link_iterative`], on the call stack.
pub(crate) fn link_recursive<F>(nodes: &mut [Node], axis_count: usize, mut split: F) -> Option<NodeId>
where
    F: FnMut(usize, usize, usize) -> NodeId,
{
    fn recurse<F>(
        nodes: &mut [Node],
        axis_count: usize,
        split: &mut F,
        depth: usize,
        start: usize,
        end: usize,
    ) -> Option<NodeId>
    where
        F: FnMut(usize, usize, usize) -> NodeId,
    {
        if start == end {
            return None;
        }

        let mid = start + (end - start) / 2;
        let median = split(depth % axis_count, start, end);

        let left = recurse(nodes, axis_count, split, depth + 1, start, mid);
        let right = recurse(nodes, axis_count, split, depth + 1, mid + 1, end);
        nodes[median.0].left = left;
        nodes[median.0].right = right;
        Some(median)
    }

    let count = nodes.len();
    recurse(nodes, axis_count, &mut split, 0, 0, count)
}

#[cfg(test)]
mod tests {
    use super::*;

    // Nodes already in order along every axis: the median is simply the middle index.
    fn sorted_split(_axis: usize, start: usize, end: usize) -> NodeId {
        NodeId(start + (end - start) / 2)
    }

    fn fresh(count: usize) -> Vec<Node> {
        (0..count).map(Node::new).collect()
    }

    #[test]
    fn test_link_seven_nodes() {
        let mut nodes = fresh(7);
        let root = link_iterative(&mut nodes, 2, sorted_split);

        assert_eq!(root, Some(NodeId(3)));
        assert_eq!(nodes[3].left, Some(NodeId(1)));
        assert_eq!(nodes[3].right, Some(NodeId(5)));
        assert_eq!(nodes[1].left, Some(NodeId(0)));
        assert_eq!(nodes[1].right, Some(NodeId(2)));
        assert_eq!(nodes[5].left, Some(NodeId(4)));
        assert_eq!(nodes[5].right, Some(NodeId(6)));
        for leaf in [0, 2, 4, 6] {
            assert_eq!(nodes[leaf].left, None);
            assert_eq!(nodes[leaf].right, None);
        }
    }

    #[test]
    fn test_iterative_matches_recursive() {
        for count in [0, 1, 2, 3, 10, 64, 255, 1000] {
            let mut iterative = fresh(count);
            let mut recursive = fresh(count);
            let a = link_iterative(&mut iterative, 3, sorted_split);
            let b = link_recursive(&mut recursive, 3, sorted_split);
            assert_eq!(a, b, "root mismatch for {} nodes", count);
            assert_eq!(iterative, recursive, "links mismatch for {} nodes", count);
        }
    }

    #[test]
    fn test_axis_rotates_with_depth() {
        let mut nodes = fresh(15);
        let mut seen = Vec::new();
        link_recursive(&mut nodes, 3, |axis, start, end| {
            seen.push((start, end, axis));
            sorted_split(axis, start, end)
        });
        assert!(seen.contains(&(0, 15, 0)));
        assert!(seen.contains(&(0, 7, 1)));
        assert!(seen.contains(&(0, 3, 2)));
        assert!(seen.contains(&(0, 1, 0)));
    }
}
