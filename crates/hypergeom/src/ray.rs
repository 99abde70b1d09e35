//! Rays and ray-box intersection.

use std::fmt;

use crate::aabb::Aabb;
use crate::approx_cmp::Scalar;
use crate::rect::Rect;
use crate::util::{nan_max, nan_min};
use crate::vector::Vector;

/// Axis-aligned region that a ray can be tested against.
///
/// The region is the intersection of one slab per axis, each bounded by two
/// parallel planes.
pub trait SlabBounds<T, const N: usize> {
    /// Returns the lower and upper bound of the slab along `axis`.
    fn slab(&self, axis: usize) -> (T, T);
}

impl<T: Scalar, const N: usize> SlabBounds<T, N> for Rect<T, N> {
    fn slab(&self, axis: usize) -> (T, T) {
        (self.min[axis], self.max[axis])
    }
}
impl<T: Scalar, const N: usize> SlabBounds<T, N> for Aabb<T, N> {
    fn slab(&self, axis: usize) -> (T, T) {
        (self.lo()[axis], self.hi()[axis])
    }
}

/// Half-line starting at an origin and extending along a unit direction.
///
/// The component-wise reciprocal of the direction is computed once at
/// construction. A zero direction component gives an infinite reciprocal,
/// which the slab test relies on for rays parallel to a face.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Ray<T, const N: usize> {
    origin: Vector<T, N>,
    direction: Vector<T, N>,
    inv_direction: Vector<T, N>,
}

/// 2D ray.
pub type Ray2<T> = Ray<T, 2>;
/// 3D ray.
pub type Ray3<T> = Ray<T, 3>;

impl<T: Scalar, const N: usize> Ray<T, N> {
    /// Constructs a ray from `origin` along `direction`, which is normalized.
    ///
    /// A zero `direction` is accepted. Its normalized form is NaN and the
    /// resulting ray intersects nothing.
    pub fn new(origin: Vector<T, N>, direction: Vector<T, N>) -> Self {
        let direction = direction.normalize();
        if !direction.is_finite() {
            log::trace!("ray from {origin} has degenerate direction {direction}");
        }
        Self {
            origin,
            direction,
            inv_direction: direction.recip(),
        }
    }

    /// Returns the starting point of the ray.
    pub fn origin(&self) -> Vector<T, N> {
        self.origin
    }
    /// Returns the unit direction of the ray.
    pub fn direction(&self) -> Vector<T, N> {
        self.direction
    }
    /// Returns the component-wise reciprocal of the direction.
    pub fn inv_direction(&self) -> Vector<T, N> {
        self.inv_direction
    }

    /// Returns the point at distance `t` along the ray.
    pub fn point_at(&self, t: T) -> Vector<T, N> {
        self.origin.mad(self.direction, t)
    }

    /// Returns the range of `t` for which the line through the ray lies within
    /// every slab of `bounds`. The range is empty if `tmax < tmin`. It is NaN
    /// on both ends for a ray with a degenerate direction, and for a ray that
    /// runs inside one of the bounding planes of a slab.
    ///
    /// For zero dimensions this returns the whole line.
    pub fn slab_interval(&self, bounds: &impl SlabBounds<T, N>) -> (T, T) {
        if N == 0 {
            return (T::neg_infinity(), T::infinity());
        }
        let axis_interval = |axis: usize| {
            let (lo, hi) = bounds.slab(axis);
            let t1 = (lo - self.origin[axis]) * self.inv_direction[axis];
            let t2 = (hi - self.origin[axis]) * self.inv_direction[axis];
            (nan_min(t1, t2), nan_max(t1, t2))
        };
        // NaN from `0 * inf` (a ray lying in a slab's bounding plane) must
        // reach the result, so this uses the NaN-propagating min/max.
        (1..N).map(&axis_interval).fold(
            axis_interval(0),
            |(tmin, tmax), (axis_min, axis_max)| {
                (nan_max(tmin, axis_min), nan_min(tmax, axis_max))
            },
        )
    }

    /// Returns whether the ray touches `bounds` at some `t >= 0`. Touching a
    /// face, edge, or corner counts. A NaN interval never intersects.
    pub fn intersects(&self, bounds: &impl SlabBounds<T, N>) -> bool {
        let (tmin, tmax) = self.slab_interval(bounds);
        tmax >= nan_max(tmin, T::zero())
    }
}

impl<T: Scalar, const N: usize> fmt::Display for Ray<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(o:")?;
        fmt::Display::fmt(&self.origin, f)?;
        write!(f, ",v:")?;
        fmt::Display::fmt(&self.direction, f)?;
        write!(f, ")")
    }
}
