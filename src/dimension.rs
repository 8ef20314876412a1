use crate::error::{Error, Result};
use crate::point::KdPoint;

/// How the axis count of a tree was established.
///
/// Resolved once per tree and never changed afterwards, including across grows.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Dimensionality {
    /// Declared by the point type at compile time.
    Static(usize),
    /// Inferred from the first point the tree received.
    Dynamic(usize),
}

impl Dimensionality {
    /// Resolve the axis count for points of type `P`.
    ///
    /// Returns `None` for dynamic points when there is no first point to infer from.
    pub fn resolve<P: KdPoint>(first: Option<&P>) -> Option<Self> {
        match P::DIMENSIONS {
            Some(d) => Some(Dimensionality::Static(d)),
            None => first.map(|p| Dimensionality::Dynamic(p.axis_count())),
        }
    }

    pub fn axis_count(&self) -> usize {
        match *self {
            Dimensionality::Static(d) | Dimensionality::Dynamic(d) => d,
        }
    }

    pub fn is_static(&self) -> bool {
        matches!(self, Dimensionality::Static(_))
    }

    /// Verify every point in `points` carries exactly `axis_count()` coordinates.
    pub fn check<P: KdPoint>(&self, points: &[P]) -> Result<()> {
        let expected = self.axis_count();
        if expected == 0 && !points.is_empty() {
            return Err(Error::ZeroAxes);
        }
        for (index, point) in points.iter().enumerate() {
            let found = point.axis_count();
            if found != expected {
                return Err(Error::DimensionMismatch { expected, found, index });
            }
        }
        Ok(())
    }
}
