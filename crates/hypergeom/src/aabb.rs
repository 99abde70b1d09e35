//! Closed axis-aligned bounding boxes.

use std::fmt;
use std::ops::{Add, Sub};

use crate::approx_cmp::{ApproxEq, Scalar};
use crate::rect::Rect;
use crate::vector::Vector;

/// Closed axis-aligned bounding box, containing the points `p` with
/// `lo[i] <= p[i] <= hi[i]` on every axis.
///
/// Unlike [`Rect`], a bounding box is always well-formed: every constructor
/// orders its bounds, so `lo[i] <= hi[i]` holds on every axis.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Aabb<T, const N: usize> {
    lo: Vector<T, N>,
    hi: Vector<T, N>,
}

/// 2D bounding box.
pub type Aabb2<T> = Aabb<T, 2>;
/// 3D bounding box.
pub type Aabb3<T> = Aabb<T, 3>;

impl<T: Scalar, const N: usize> Default for Aabb<T, N> {
    fn default() -> Self {
        Self::point(Vector::zero())
    }
}

impl<T: Scalar, const N: usize> fmt::Display for Aabb<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        fmt::Display::fmt(&self.lo, f)?;
        write!(f, ", ")?;
        fmt::Display::fmt(&self.hi, f)?;
        write!(f, "]")
    }
}

impl<T: Scalar, const N: usize> Aabb<T, N> {
    /// Constructs the bounding box spanned by two opposite corners, in any
    /// order.
    pub fn from_corners(a: Vector<T, N>, b: Vector<T, N>) -> Self {
        Self {
            lo: a.min_by_component(b),
            hi: a.max_by_component(b),
        }
    }
    /// Constructs a degenerate bounding box containing a single point.
    pub fn point(p: Vector<T, N>) -> Self {
        Self { lo: p, hi: p }
    }
    /// Returns the smallest bounding box containing every point, or `None` if
    /// there are no points.
    pub fn from_points(points: impl IntoIterator<Item = Vector<T, N>>) -> Option<Self> {
        let mut points = points.into_iter();
        let first = Self::point(points.next()?);
        Some(points.fold(first, |acc, p| acc.union(&Self::point(p))))
    }

    /// Returns the minimum corner.
    pub fn lo(&self) -> Vector<T, N> {
        self.lo
    }
    /// Returns the maximum corner.
    pub fn hi(&self) -> Vector<T, N> {
        self.hi
    }

    /// Returns the extent of the bounding box along each axis. Every
    /// component is non-negative.
    pub fn size(&self) -> Vector<T, N> {
        self.hi - self.lo
    }
    /// Returns the center of the bounding box.
    pub fn center(&self) -> Vector<T, N> {
        (self.lo + self.hi) / (T::one() + T::one())
    }

    /// Returns whether `p` is in the bounding box, including its boundary.
    pub fn contains_point(&self, p: Vector<T, N>) -> bool {
        (0..N).all(|axis| self.lo[axis] <= p[axis] && p[axis] <= self.hi[axis])
    }
    /// Returns whether the interiors of the bounding boxes intersect.
    /// Boxes that only touch along a face, edge, or corner do not intersect.
    pub fn intersects(&self, other: &Self) -> bool {
        (0..N).all(|axis| self.lo[axis] < other.hi[axis] && other.lo[axis] < self.hi[axis])
    }
    /// Returns the smallest bounding box containing both bounding boxes.
    #[must_use]
    pub fn union(&self, other: &Self) -> Self {
        Self {
            lo: self.lo.min_by_component(other.lo),
            hi: self.hi.max_by_component(other.hi),
        }
    }

    /// Returns the bounding box translated by `v`.
    #[must_use]
    pub fn translate(&self, v: Vector<T, N>) -> Self {
        Self {
            lo: self.lo + v,
            hi: self.hi + v,
        }
    }

    /// Returns the half-open rectangle with the same bounds.
    pub fn to_rect(&self) -> Rect<T, N> {
        Rect::new(self.lo, self.hi)
    }
}

impl<T: Scalar> Aabb<T, 2> {
    /// Constructs a bounding box spanning `xa..xb` horizontally and `ya..yb`
    /// vertically. Each pair of bounds may be given in either order.
    pub fn new(xa: T, xb: T, ya: T, yb: T) -> Self {
        Self::from_corners(Vector([xa, ya]), Vector([xb, yb]))
    }

    /// Returns the extent along the X axis.
    pub fn size_x(&self) -> T {
        self.hi[0] - self.lo[0]
    }
    /// Returns the extent along the Y axis.
    pub fn size_y(&self) -> T {
        self.hi[1] - self.lo[1]
    }
}

impl<T: Scalar> Aabb<T, 3> {
    /// Constructs a bounding box spanning `xa..xb`, `ya..yb`, and `za..zb`.
    /// Each pair of bounds may be given in either order.
    pub fn new3(xa: T, xb: T, ya: T, yb: T, za: T, zb: T) -> Self {
        Self::from_corners(Vector([xa, ya, za]), Vector([xb, yb, zb]))
    }

    /// Returns the extent along the X axis.
    pub fn size_x(&self) -> T {
        self.hi[0] - self.lo[0]
    }
    /// Returns the extent along the Y axis.
    pub fn size_y(&self) -> T {
        self.hi[1] - self.lo[1]
    }
    /// Returns the extent along the Z axis.
    pub fn size_z(&self) -> T {
        self.hi[2] - self.lo[2]
    }
}

impl<T: Scalar, const N: usize> From<Rect<T, N>> for Aabb<T, N> {
    fn from(rect: Rect<T, N>) -> Self {
        Self::from_corners(rect.min, rect.max)
    }
}

impl_translate_ops!(impl for Aabb);

impl<T: Scalar, const N: usize> ApproxEq for Aabb<T, N> {
    type Scalar = T;

    fn approx_eq_eps(&self, other: &Self, eps: T) -> bool {
        self.lo.approx_eq_eps(&other.lo, eps) && self.hi.approx_eq_eps(&other.hi, eps)
    }
}
impl<T: Scalar, const N: usize> approx::AbsDiffEq for Aabb<T, N> {
    type Epsilon = T;

    fn default_epsilon() -> Self::Epsilon {
        T::APPROX_EPSILON
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        self.approx_eq_eps(other, epsilon)
    }
}

#[cfg(feature = "serde")]
impl<T: Scalar, const N: usize> serde::Serialize for Aabb<T, N> {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serde::Serialize::serialize(&(self.lo, self.hi), serializer)
    }
}
#[cfg(feature = "serde")]
impl<'de, T: Scalar, const N: usize> serde::Deserialize<'de> for Aabb<T, N> {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let (a, b): (Vector<T, N>, Vector<T, N>) =
            serde::Deserialize::deserialize(deserializer)?;
        Ok(Self::from_corners(a, b))
    }
}
