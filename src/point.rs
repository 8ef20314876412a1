use std::cmp::Ordering;

/// Coordinate access for anything stored in a [`KdTree`](crate::KdTree).
///
/// Implementors with a compile-time axis count set [`KdPoint::DIMENSIONS`] to `Some(D)`;
/// variable-length coordinate sequences leave it as `None` and the tree infers the axis count
/// from the first point it receives.
///
/// ```
/// use kdbalance::KdPoint;
///
/// struct Star {
///     id: u32,
///     position: [f32; 3],
/// }
///
/// impl KdPoint for Star {
///     type Scalar = f32;
///     const DIMENSIONS: Option<usize> = Some(3);
///
///     fn axis_count(&self) -> usize {
///         3
///     }
///
///     fn coordinate(&self, axis: usize) -> f32 {
///         self.position[axis]
///     }
/// }
/// ```
pub trait KdPoint: Sync {
    /// Totally ordered scalar type of a single coordinate.
    type Scalar: Scalar;

    /// Axis count known at compile time, if any.
    const DIMENSIONS: Option<usize> = None;

    /// Number of coordinates this point carries.
    fn axis_count(&self) -> usize;

    /// Coordinate along `axis`. Only called with `axis < self.axis_count()`.
    fn coordinate(&self, axis: usize) -> Self::Scalar;
}

/// Coordinate value with a total order, as required by the presort.
///
/// Floats use IEEE 754 `totalOrder`: negative NaN sorts below `-inf`, positive NaN above `inf`,
/// and `-0.0` below `0.0`.
pub trait Scalar: PartialOrd + Copy {
    fn total_order(&self, other: &Self) -> Ordering;
}

macro_rules! impl_scalar_ord {
    ($($t:ty),*) => {
        $(impl Scalar for $t {
            #[inline]
            fn total_order(&self, other: &Self) -> Ordering {
                self.cmp(other)
            }
        })*
    };
}

macro_rules! impl_scalar_float {
    ($($t:ty),*) => {
        $(impl Scalar for $t {
            #[inline]
            fn total_order(&self, other: &Self) -> Ordering {
                self.total_cmp(other)
            }
        })*
    };
}

impl_scalar_ord!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
impl_scalar_float!(f32, f64);

/// Orders two points along `axis` by the total order of their coordinates.
#[inline]
pub fn compare_axis<P: KdPoint>(a: &P, b: &P, axis: usize) -> Ordering {
    a.coordinate(axis).total_order(&b.coordinate(axis))
}

impl<T: Scalar + Sync, const D: usize> KdPoint for [T; D] {
    type Scalar = T;
    const DIMENSIONS: Option<usize> = Some(D);

    #[inline]
    fn axis_count(&self) -> usize {
        D
    }

    #[inline]
    fn coordinate(&self, axis: usize) -> T {
        self[axis]
    }
}

impl<T: Scalar + Sync> KdPoint for Vec<T> {
    type Scalar = T;

    #[inline]
    fn axis_count(&self) -> usize {
        self.len()
    }

    #[inline]
    fn coordinate(&self, axis: usize) -> T {
        self[axis]
    }
}

impl<T: Scalar + Sync> KdPoint for Box<[T]> {
    type Scalar = T;

    #[inline]
    fn axis_count(&self) -> usize {
        self.len()
    }

    #[inline]
    fn coordinate(&self, axis: usize) -> T {
        self[axis]
    }
}

// Borrowed points: the tree holds references and the borrow checker keeps the storage alive.
impl<P: KdPoint + ?Sized> KdPoint for &P {
    type Scalar = P::Scalar;
    const DIMENSIONS: Option<usize> = P::DIMENSIONS;

    #[inline]
    fn axis_count(&self) -> usize {
        (**self).axis_count()
    }

    #[inline]
    fn coordinate(&self, axis: usize) -> P::Scalar {
        (**self).coordinate(axis)
    }
}
