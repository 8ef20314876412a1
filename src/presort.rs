use crate::node::NodeId;
use crate::point::{KdPoint, compare_axis};
use rayon::prelude::*;

/// Which half of the current split a node falls into.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Side {
    Left,
    Median,
    Right,
}

/// Per-axis orderings of the node arena plus the scratch space the link stage splits them with.
///
/// Buffers are cleared and refilled on every rebuild rather than reallocated.
#[derive(Debug, Default)]
pub(crate) struct Presort {
    orderings: Vec<Vec<NodeId>>,
    scratch: Vec<NodeId>,
    sides: Vec<Side>,
}

impl Presort {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fill one ordering per axis with every node `0..points.len()` and sort each by its axis.
    ///
    /// Node `i` references point `i`. Ties between equal coordinates are left in no particular order.
    pub fn rebuild<P: KdPoint>(&mut self, points: &[P], axis_count: usize, parallel: bool) {
        let count = points.len();
        self.fill(count, axis_count);

        let sort_axis = |(axis, ordering): (usize, &mut Vec<NodeId>)| {
            ordering.sort_unstable_by(|a, b| compare_axis(&points[a.0], &points[b.0], axis));
        };
        if parallel {
            self.orderings.par_iter_mut().enumerate().for_each(sort_axis);
        } else {
            self.orderings.iter_mut().enumerate().for_each(sort_axis);
        }
        log::trace!("presorted {} axes over {} nodes (parallel: {})", axis_count, count, parallel);
    }

    /// Prepare a single unsorted working ordering for median selection.
    pub fn rebuild_unsorted(&mut self, count: usize) {
        self.fill(count, 1);
    }

    fn fill(&mut self, count: usize, axis_count: usize) {
        self.orderings.truncate(axis_count);
        self.orderings.resize_with(axis_count, Vec::new);
        for ordering in &mut self.orderings {
            ordering.clear();
            ordering.reserve(count);
            ordering.extend((0..count).map(NodeId));
        }

        self.scratch.clear();
        self.scratch.resize(count, NodeId(0));
        self.sides.clear();
        self.sides.resize(count, Side::Median);
    }

    #[cfg(test)]
    pub fn ordering(&self, axis: usize) -> &[NodeId] {
        &self.orderings[axis]
    }

    /// Pick the median of `axis` within `[start, end)` and split every ordering around it.
    ///
    /// Afterwards each ordering holds the same node set in `[start, mid)` and in `(mid, end)`,
    /// still sorted by its own axis, so child ranges can be split the same way.
    pub fn split(&mut self, axis: usize, start: usize, end: usize) -> NodeId {
        let mid = start + (end - start) / 2;
        let Presort { orderings, scratch, sides } = self;

        let current = &orderings[axis];
        let median = current[mid];
        for id in &current[start..mid] {
            sides[id.0] = Side::Left;
        }
        sides[median.0] = Side::Median;
        for id in &current[mid + 1..end] {
            sides[id.0] = Side::Right;
        }

        for (other, ordering) in orderings.iter_mut().enumerate() {
            if other != axis {
                partition(&mut ordering[start..end], median, sides, scratch);
            }
        }
        median
    }

    /// Quickselect the median of `axis` within `[start, end)` of the working ordering.
    pub fn select<P: KdPoint>(&mut self, points: &[P], axis: usize, start: usize, end: usize) -> NodeId {
        let working = &mut self.orderings[0][start..end];
        let half = working.len() / 2;
        let (_, median, _) =
            working.select_nth_unstable_by(half, |a, b| compare_axis(&points[a.0], &points[b.0], axis));
        *median
    }
}

/// Stable partition of `range` into Left | median | Right according to `sides`.
fn partition(range: &mut [NodeId], median: NodeId, sides: &[Side], scratch: &mut [NodeId]) {
    let mut left = 0;
    let mut right = 0;
    for i in 0..range.len() {
        let id = range[i];
        match sides[id.0] {
            Side::Left => {
                range[left] = id;
                left += 1;
            }
            Side::Right => {
                scratch[right] = id;
                right += 1;
            }
            Side::Median => {}
        }
    }
    range[left] = median;
    range[left + 1..].copy_from_slice(&scratch[..right]);
}
