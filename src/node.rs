use std::fmt;

/// Stable handle to a node in the tree's arena.
///
/// Node `i` always refers to the `i`-th point supplied to the tree, across every rebuild.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    /// Position of this node in the arena, which is also the index of its point.
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Arena entry. Owns no point data, only the index of its point and its child links.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Node {
    pub point: usize,
    pub left: Option<NodeId>,
    pub right: Option<NodeId>,
}

impl Node {
    pub fn new(point: usize) -> Self {
        Node { point, left: None, right: None }
    }

    pub fn unlink(&mut self) {
        self.left = None;
        self.right = None;
    }
}

/// Read-only view of a node, borrowed from its tree.
pub struct NodeRef<'a, P> {
    nodes: &'a [Node],
    points: &'a [P],
    id: NodeId,
}

// Manual impls: deriving would require `P: Clone`.
impl<P> Clone for NodeRef<'_, P> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<P> Copy for NodeRef<'_, P> {}

impl<'a, P> NodeRef<'a, P> {
    pub(crate) fn new(nodes: &'a [Node], points: &'a [P], id: NodeId) -> Self {
        NodeRef { nodes, points, id }
    }

    pub fn id(&self) -> NodeId {
        self.id
    }

    /// Index of the referenced point in [`KdTree::points`](crate::KdTree::points).
    pub fn index(&self) -> usize {
        self.nodes[self.id.0].point
    }

    /// The point stored at this node.
    pub fn data(&self) -> &'a P {
        &self.points[self.index()]
    }

    pub fn left(&self) -> Option<NodeRef<'a, P>> {
        self.nodes[self.id.0].left.map(|id| NodeRef::new(self.nodes, self.points, id))
    }

    pub fn right(&self) -> Option<NodeRef<'a, P>> {
        self.nodes[self.id.0].right.map(|id| NodeRef::new(self.nodes, self.points, id))
    }

    pub fn is_leaf(&self) -> bool {
        let node = &self.nodes[self.id.0];
        node.left.is_none() && node.right.is_none()
    }
}

impl<P: fmt::Debug> fmt::Debug for NodeRef<'_, P> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let node = &self.nodes[self.id.0];
        f.debug_struct("NodeRef")
            .field("id", &self.id)
            .field("data", self.data())
            .field("left", &node.left)
            .field("right", &node.right)
            .finish()
    }
}
