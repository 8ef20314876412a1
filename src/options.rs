/// Algorithm used to assemble the tree from the point set.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum LinkStrategy {
    /// Presorted orderings, linked with an explicit work-stack.
    #[default]
    Iterative,
    /// Presorted orderings, linked on the call stack.
    Recursive,
    /// No presort: quickselect the median of every subrange along the current axis.
    Select,
}

/// Knobs for building and rebuilding a [`KdTree`](crate::KdTree).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BuildOptions {
    pub strategy: LinkStrategy,
    /// Sort the per-axis orderings concurrently on the rayon pool.
    pub parallel_presort: bool,
    /// Point count below which the presort stays on the calling thread.
    pub parallel_threshold: usize,
}

impl Default for BuildOptions {
    fn default() -> Self {
        BuildOptions {
            strategy: LinkStrategy::Iterative,
            parallel_presort: true,
            parallel_threshold: 4096,
        }
    }
}

impl BuildOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_strategy(mut self, strategy: LinkStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    pub fn with_parallel_presort(mut self, parallel: bool) -> Self {
        self.parallel_presort = parallel;
        self
    }

    pub fn with_parallel_threshold(mut self, threshold: usize) -> Self {
        self.parallel_threshold = threshold;
        self
    }

    /// Whether a presort over `count` points should run on the rayon pool.
    pub(crate) fn presort_in_parallel(&self, count: usize) -> bool {
        self.parallel_presort && count >= self.parallel_threshold
    }
}
