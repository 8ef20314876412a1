use crate::dimension::Dimensionality;
use crate::error::Result;
use crate::link::{link_iterative, link_recursive};
use crate::node::{Node, NodeId, NodeRef};
use crate::options::{BuildOptions, LinkStrategy};
use crate::point::KdPoint;
use crate::presort::Presort;

/// A balanced k-d tree over an owned point set.
///
/// Every level splits on the true median along one axis, cycling through the axes with depth,
/// so the tree is at most `ceil(log2(N + 1))` levels deep. New points are incorporated with
/// [`KdTree::grow`], which rebuilds the whole tree while keeping every existing [`NodeId`].
///
/// To index points that live elsewhere, build a tree over references (`KdTree<&P>`); the borrow
/// then guarantees the storage outlives the tree.
#[derive(Debug)]
pub struct KdTree<P: KdPoint> {
    points: Vec<P>,
    nodes: Vec<Node>,
    presort: Presort,
    root: Option<NodeId>,
    dimensionality: Option<Dimensionality>,
    options: BuildOptions,
}

impl<P: KdPoint> Default for KdTree<P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: KdPoint> KdTree<P> {
    /// Creates an empty tree with default [`BuildOptions`].
    pub fn new() -> Self {
        Self::with_options(BuildOptions::default())
    }

    pub fn with_options(options: BuildOptions) -> Self {
        KdTree {
            points: Vec::new(),
            nodes: Vec::new(),
            presort: Presort::new(),
            root: None,
            dimensionality: Dimensionality::resolve::<P>(None),
            options,
        }
    }

    /// Builds a balanced tree over `points`.
    ///
    /// An empty input yields an empty tree. Fails if the points disagree on their axis count.
    pub fn build(points: Vec<P>) -> Result<Self> {
        Self::build_with(points, BuildOptions::default())
    }

    pub fn build_with(points: Vec<P>, options: BuildOptions) -> Result<Self> {
        let mut tree = Self::with_options(options);
        tree.grow(points)?;
        Ok(tree)
    }

    /// Adds `points` and rebuilds the whole tree.
    ///
    /// All new points are validated against the tree's axis count before anything changes, so
    /// on error the tree is left exactly as it was. Existing nodes keep their ids but not their
    /// position in the tree.
    pub fn grow<I>(&mut self, points: I) -> Result<()>
    where
        I: IntoIterator<Item = P>,
    {
        let incoming: Vec<P> = points.into_iter().collect();

        let Some(dimensionality) = self
            .dimensionality
            .or_else(|| Dimensionality::resolve(incoming.first()))
        else {
            // Dynamic points and nothing to infer the axis count from yet.
            return Ok(());
        };
        dimensionality.check(&incoming)?;
        self.dimensionality = Some(dimensionality);

        let offset = self.points.len();
        self.nodes.reserve(incoming.len());
        self.nodes.extend((offset..offset + incoming.len()).map(Node::new));
        self.points.extend(incoming);

        log::debug!(
            "growing tree by {} points to {} ({:?})",
            self.points.len() - offset,
            self.points.len(),
            dimensionality
        );
        self.balance();
        Ok(())
    }

    /// Rebuilds the tree from its current points without adding any.
    pub fn rebalance(&mut self) {
        self.balance();
    }

    fn balance(&mut self) {
        for node in &mut self.nodes {
            node.unlink();
        }

        let count = self.points.len();
        let axis_count = self.axis_count();
        if count == 0 || axis_count == 0 {
            self.root = None;
            return;
        }

        let points = &self.points;
        let presort = &mut self.presort;
        let nodes = &mut self.nodes;
        let parallel = self.options.presort_in_parallel(count);

        let root = match self.options.strategy {
            LinkStrategy::Iterative => {
                presort.rebuild(points, axis_count, parallel);
                link_iterative(nodes, axis_count, |axis, start, end| presort.split(axis, start, end))
            }
            LinkStrategy::Recursive => {
                presort.rebuild(points, axis_count, parallel);
                link_recursive(nodes, axis_count, |axis, start, end| presort.split(axis, start, end))
            }
            LinkStrategy::Select => {
                presort.rebuild_unsorted(count);
                link_iterative(nodes, axis_count, |axis, start, end| {
                    presort.select(points, axis, start, end)
                })
            }
        };
        self.root = root;

        log::debug!(
            "linked {} nodes over {} axes with {:?}, depth {}",
            count,
            axis_count,
            self.options.strategy,
            self.depth()
        );
    }

    /// Root of the tree, absent when the tree is empty.
    pub fn root(&self) -> Option<NodeRef<'_, P>> {
        self.root.map(|id| NodeRef::new(&self.nodes, &self.points, id))
    }

    pub fn node(&self, id: NodeId) -> Option<NodeRef<'_, P>> {
        (id.0 < self.nodes.len()).then(|| NodeRef::new(&self.nodes, &self.points, id))
    }

    /// Every node in arena order, which is the order the points were supplied in.
    pub fn nodes(&self) -> impl Iterator<Item = NodeRef<'_, P>> + '_ {
        (0..self.nodes.len()).map(move |i| NodeRef::new(&self.nodes, &self.points, NodeId(i)))
    }

    /// Number of axes the tree partitions on, or 0 while it is still undetermined.
    pub fn axis_count(&self) -> usize {
        self.dimensionality.map_or(0, |d| d.axis_count())
    }

    pub fn dimensionality(&self) -> Option<Dimensionality> {
        self.dimensionality
    }

    /// Number of levels from the root down to the deepest leaf; 0 for an empty tree.
    pub fn depth(&self) -> usize {
        let mut deepest = 0;
        let mut stack: Vec<(NodeId, usize)> = self.root.map(|id| (id, 1)).into_iter().collect();
        while let Some((id, level)) = stack.pop() {
            deepest = deepest.max(level);
            let node = &self.nodes[id.0];
            stack.extend(node.left.map(|child| (child, level + 1)));
            stack.extend(node.right.map(|child| (child, level + 1)));
        }
        deepest
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn points(&self) -> &[P] {
        &self.points
    }

    pub fn into_points(self) -> Vec<P> {
        self.points
    }

    pub fn options(&self) -> &BuildOptions {
        &self.options
    }

    /// Replaces the build options. Takes effect on the next grow or rebalance.
    pub fn set_options(&mut self, options: BuildOptions) {
        self.options = options;
    }
}
