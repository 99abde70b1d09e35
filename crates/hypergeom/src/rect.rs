//! Half-open axis-aligned rectangles.

use std::fmt;
use std::ops::{Add, Sub};

use crate::approx_cmp::{ApproxEq, Scalar};
use crate::vector::Vector;

/// Axis-aligned rectangle containing the points `p` with
/// `min[i] <= p[i] < max[i]` on every axis.
///
/// A rectangle is well-formed if `min[i] <= max[i]` on every axis. Rectangles
/// built by [`Rect::from_corners()`] are always well-formed, and every method
/// returns well-formed outputs for well-formed inputs. A rectangle with
/// `min[i] >= max[i]` on any axis contains no points; all such rectangles
/// compare equal.
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(bound(serialize = "T: Scalar", deserialize = "T: Scalar"))
)]
#[derive(Debug, Copy, Clone)]
pub struct Rect<T, const N: usize> {
    /// Inclusive minimum corner.
    pub min: Vector<T, N>,
    /// Exclusive maximum corner.
    pub max: Vector<T, N>,
}

/// 2D rectangle.
pub type Rect2<T> = Rect<T, 2>;
/// 3D rectangle.
pub type Rect3<T> = Rect<T, 3>;

impl<T: Scalar, const N: usize> Default for Rect<T, N> {
    fn default() -> Self {
        Self::zero()
    }
}

impl<T: Scalar, const N: usize> PartialEq for Rect<T, N> {
    /// Returns whether both rectangles contain the same set of points.
    fn eq(&self, other: &Self) -> bool {
        (self.min == other.min && self.max == other.max) || (self.is_empty() && other.is_empty())
    }
}

impl<T: Scalar, const N: usize> fmt::Display for Rect<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.min, f)?;
        write!(f, "-")?;
        fmt::Display::fmt(&self.max, f)
    }
}

impl<T: Scalar, const N: usize> Rect<T, N> {
    /// Constructs a rectangle from its corners as given, without
    /// canonicalizing.
    pub const fn new(min: Vector<T, N>, max: Vector<T, N>) -> Self {
        Self { min, max }
    }
    /// Constructs the well-formed rectangle spanned by two opposite corners.
    pub fn from_corners(a: Vector<T, N>, b: Vector<T, N>) -> Self {
        Self::new(a, b).canon()
    }
    /// Constructs a rectangle from its minimum corner and its size.
    pub fn from_origin_size(origin: Vector<T, N>, size: Vector<T, N>) -> Self {
        Self::new(origin, origin + size)
    }
    /// Returns the smallest rectangle containing the ball of radius `radius`
    /// around `center`.
    pub fn around_ball(center: Vector<T, N>, radius: T) -> Self {
        let r = Vector::splat(radius);
        Self::from_origin_size(center - r, r * (T::one() + T::one()))
    }
    /// Returns the zero rectangle, which is the canonical empty rectangle.
    pub fn zero() -> Self {
        Self::new(Vector::zero(), Vector::zero())
    }

    /// Returns the size of the rectangle along each axis.
    pub fn size(&self) -> Vector<T, N> {
        self.max - self.min
    }
    /// Returns the size of the rectangle along `axis`.
    pub fn extent(&self, axis: usize) -> T {
        self.max[axis] - self.min[axis]
    }
    /// Returns the midpoint between the two corners.
    pub fn center(&self) -> Vector<T, N> {
        (self.min + self.max) / (T::one() + T::one())
    }

    /// Returns the rectangle translated by `v`.
    #[must_use]
    pub fn translate(&self, v: Vector<T, N>) -> Self {
        Self::new(self.min + v, self.max + v)
    }
    /// Returns the rectangle shrunk by `n` on every side, or grown if `n` is
    /// negative. Any axis narrower than `2 * n` collapses to its midpoint.
    #[must_use]
    pub fn inset(&self, n: T) -> Self {
        let mut ret = *self;
        for axis in 0..N {
            if self.extent(axis) < n + n {
                let mid = (self.min[axis] + self.max[axis]) / (T::one() + T::one());
                ret.min[axis] = mid;
                ret.max[axis] = mid;
            } else {
                ret.min[axis] = self.min[axis] + n;
                ret.max[axis] = self.max[axis] - n;
            }
        }
        ret
    }

    /// Returns the largest rectangle contained by both rectangles, or the
    /// zero rectangle if they do not overlap.
    #[must_use]
    pub fn intersect(&self, other: &Self) -> Self {
        let ret = Self::new(
            self.min.max_by_component(other.min),
            self.max.min_by_component(other.max),
        );
        match ret.is_empty() {
            true => Self::zero(),
            false => ret,
        }
    }
    /// Returns the smallest rectangle containing both rectangles. Empty
    /// rectangles are ignored.
    #[must_use]
    pub fn union(&self, other: &Self) -> Self {
        if self.is_empty() {
            return *other;
        }
        if other.is_empty() {
            return *self;
        }
        Self::new(
            self.min.min_by_component(other.min),
            self.max.max_by_component(other.max),
        )
    }

    /// Returns whether the rectangle contains no points.
    pub fn is_empty(&self) -> bool {
        (0..N).any(|axis| self.min[axis] >= self.max[axis])
    }
    /// Returns whether the rectangles share at least one point. Empty
    /// rectangles never overlap anything.
    pub fn overlaps(&self, other: &Self) -> bool {
        !self.is_empty()
            && !other.is_empty()
            && (0..N).all(|axis| self.min[axis] < other.max[axis] && other.min[axis] < self.max[axis])
    }
    /// Returns whether every point of `self` is in `other`. An empty rectangle
    /// is in every rectangle.
    pub fn is_in(&self, other: &Self) -> bool {
        if self.is_empty() {
            return true;
        }
        // `self.max` is an exclusive bound, so it need not be a point of
        // `other`.
        (0..N).all(|axis| other.min[axis] <= self.min[axis] && self.max[axis] <= other.max[axis])
    }
    /// Returns whether `p` is in the rectangle.
    pub fn contains_point(&self, p: Vector<T, N>) -> bool {
        (0..N).all(|axis| self.min[axis] <= p[axis] && p[axis] < self.max[axis])
    }

    /// Returns the rectangle with its corners swapped on each axis where
    /// necessary to make it well-formed.
    #[must_use]
    pub fn canon(&self) -> Self {
        Self::new(
            self.min.min_by_component(self.max),
            self.min.max_by_component(self.max),
        )
    }
}

impl<T: Scalar> Rect<T, 2> {
    /// Constructs the well-formed rectangle with corners `(x0, y0)` and
    /// `(x1, y1)`.
    pub fn from_coords(x0: T, y0: T, x1: T, y1: T) -> Self {
        Self::from_corners(Vector([x0, y0]), Vector([x1, y1]))
    }
    /// Constructs a rectangle from its minimum corner `(x, y)`, width `w`, and
    /// height `h`.
    pub fn from_xywh(x: T, y: T, w: T, h: T) -> Self {
        Self::from_origin_size(Vector([x, y]), Vector([w, h]))
    }

    /// Returns the width of the rectangle.
    pub fn width(&self) -> T {
        self.extent(0)
    }
    /// Returns the height of the rectangle.
    pub fn height(&self) -> T {
        self.extent(1)
    }
}

impl_translate_ops!(impl for Rect);

impl<T: Scalar, const N: usize> ApproxEq for Rect<T, N> {
    type Scalar = T;

    fn approx_eq_eps(&self, other: &Self, eps: T) -> bool {
        (self.is_empty() && other.is_empty())
            || (self.min.approx_eq_eps(&other.min, eps) && self.max.approx_eq_eps(&other.max, eps))
    }
}
impl<T: Scalar, const N: usize> approx::AbsDiffEq for Rect<T, N> {
    type Epsilon = T;

    fn default_epsilon() -> Self::Epsilon {
        T::APPROX_EPSILON
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        self.approx_eq_eps(other, epsilon)
    }
}

impl<T: Scalar, const N: usize> Vector<T, N> {
    /// Returns whether the point is in `rect`.
    pub fn contained_in(self, rect: &Rect<T, N>) -> bool {
        rect.contains_point(self)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{Vec2, Vec3, assert_approx_eq};

    fn r(x0: f64, y0: f64, x1: f64, y1: f64) -> Rect2<f64> {
        Rect::from_coords(x0, y0, x1, y1)
    }

    #[test]
    fn test_from_coords_canonicalizes() {
        let a = r(0.0, 0.0, 1.0, 2.0);
        let b = r(1.0, 2.0, 0.0, 0.0);
        assert_eq!(a.min, b.min);
        assert_eq!(a.max, b.max);
        assert_eq!((b.width(), b.height()), (1.0, 2.0));
        assert_eq!(b.size(), Vec2::new(1.0, 2.0));
    }

    #[test]
    fn test_from_xywh_and_center() {
        let rect = Rect2::from_xywh(1.0, -1.0, 1.0, 1.0);
        assert_eq!(rect.min, Vec2::new(1.0, -1.0));
        assert_eq!(rect.max, Vec2::new(2.0, 0.0));
        assert_eq!(rect.center(), Vec2::new(1.5, -0.5));
    }

    #[test]
    fn test_around_ball() {
        let rect = Rect::around_ball(Vec3::<f64>::new(1.0, 2.0, 3.0), 0.5);
        assert_eq!(rect.min, Vec3::new(0.5, 1.5, 2.5));
        assert_eq!(rect.max, Vec3::new(1.5, 2.5, 3.5));
    }

    #[test]
    fn test_translate() {
        let rect = r(0.0, 0.0, 1.0, 1.0);
        let v = Vec2::new(2.0, -3.0);
        assert_eq!(rect + v, r(2.0, -3.0, 3.0, -2.0));
        assert_eq!(rect + v - v, rect);
        assert_eq!(rect.translate(v), rect + v);
    }

    #[test]
    fn test_inset() {
        let rect = r(0.0, 0.0, 10.0, 4.0);
        assert_eq!(rect.inset(1.0), r(1.0, 1.0, 9.0, 3.0));
        assert_eq!(rect.inset(-1.0), r(-1.0, -1.0, 11.0, 5.0));
        // The Y axis is too narrow and collapses to its midpoint.
        let collapsed = rect.inset(3.0);
        assert_eq!(collapsed.min, Vec2::new(3.0, 2.0));
        assert_eq!(collapsed.max, Vec2::new(7.0, 2.0));
        assert!(collapsed.is_empty());
    }

    #[test]
    fn test_intersect() {
        let a = r(0.0, 0.0, 2.0, 2.0);
        let b = r(1.0, 1.0, 3.0, 3.0);
        assert_eq!(a.intersect(&b), r(1.0, 1.0, 2.0, 2.0));
        assert_eq!(b.intersect(&a), r(1.0, 1.0, 2.0, 2.0));

        // Disjoint and touching rectangles both give the zero rectangle.
        let far = r(5.0, 5.0, 6.0, 6.0);
        let touching = r(2.0, 0.0, 3.0, 2.0);
        for other in [far, touching] {
            let i = a.intersect(&other);
            assert_eq!(i.min, Vec2::zero());
            assert_eq!(i.max, Vec2::zero());
        }
    }

    #[test]
    fn test_union() {
        let a = r(0.0, 0.0, 1.0, 1.0);
        let b = r(2.0, -1.0, 3.0, 0.5);
        assert_eq!(a.union(&b), r(0.0, -1.0, 3.0, 1.0));
        let empty = r(10.0, 10.0, 10.0, 20.0);
        assert_eq!(a.union(&empty).max, a.max);
        assert_eq!(empty.union(&a).min, a.min);
    }

    #[test]
    fn test_empty_rectangles_are_equal() {
        let a = r(0.0, 0.0, 0.0, 5.0);
        let b = r(3.0, 3.0, 7.0, 3.0);
        assert!(a.is_empty() && b.is_empty());
        assert_eq!(a, b);
        assert_eq!(a, Rect::zero());
        assert_ne!(r(0.0, 0.0, 1.0, 1.0), r(0.0, 0.0, 1.0, 2.0));
        // Swapped corners are empty too.
        assert!(Rect::new(Vec2::new(1.0, 1.0), Vec2::new(0.0, 0.0)).is_empty());
    }

    #[test]
    fn test_overlaps() {
        let a = r(0.0, 0.0, 1.0, 1.0);
        assert!(a.overlaps(&r(0.5, 0.5, 2.0, 2.0)));
        assert!(a.overlaps(&a));
        assert!(!a.overlaps(&r(1.0, 0.0, 2.0, 1.0)));
        assert!(!a.overlaps(&r(-1.0, -1.0, 0.0, 0.0)));
        let empty = Rect2::<f64>::zero();
        assert!(!empty.overlaps(&empty));
        assert!(!r(0.5, 0.5, 0.5, 0.5).overlaps(&a));
    }

    #[test]
    fn test_is_in() {
        let outer = r(0.0, 0.0, 4.0, 4.0);
        assert!(r(1.0, 1.0, 2.0, 2.0).is_in(&outer));
        // The exclusive maximum may coincide with the outer maximum.
        assert!(r(1.0, 1.0, 4.0, 4.0).is_in(&outer));
        assert!(!r(1.0, 1.0, 4.5, 2.0).is_in(&outer));
        assert!(!r(-0.5, 1.0, 2.0, 2.0).is_in(&outer));
        assert!(Rect::zero().is_in(&r(10.0, 10.0, 11.0, 11.0)));
    }

    #[test]
    fn test_contains_point_half_open() {
        let rect = r(0.0, 0.0, 1.0, 1.0);
        assert!(rect.contains_point(Vec2::new(0.0, 0.0)));
        assert!(Vec2::new(0.5, 0.999).contained_in(&rect));
        assert!(!rect.contains_point(Vec2::new(1.0, 0.5)));
        assert!(!rect.contains_point(Vec2::new(0.5, 1.0)));
        assert!(!rect.contains_point(Vec2::new(-0.1, 0.5)));
    }

    #[test]
    fn test_canon() {
        let rect = Rect::new(Vec3::<f32>::new(1.0, 0.0, 5.0), Vec3::new(0.0, 2.0, -5.0));
        let canon = rect.canon();
        assert_eq!(canon.min, Vec3::new(0.0, 0.0, -5.0));
        assert_eq!(canon.max, Vec3::new(1.0, 2.0, 5.0));
        assert_eq!(canon.canon().min, canon.min);
    }

    #[test]
    fn test_approx_eq() {
        let a = r(0.0, 0.0, 1.0, 1.0);
        let b = r(1e-16, 0.0, 1.0 + 1e-15, 1.0);
        assert_approx_eq!(a, b);
        assert!(!a.approx_eq(&r(0.0, 0.0, 1.1, 1.0)));
        assert!(r(0.0, 0.0, 0.0, 1.0).approx_eq(&r(5.0, 5.0, 6.0, 5.0)));
    }

    #[test]
    fn test_display() {
        assert_eq!(r(0.0, 0.5, 1.0, 2.0).to_string(), "(0,0.5)-(1,2)");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde() {
        let rect = r(0.0, 0.5, 1.0, 2.25);
        let json = serde_json::to_string(&rect).unwrap();
        assert_eq!(json, r#"{"min":"(0,0.5)","max":"(1,2.25)"}"#);
        let loaded: Rect2<f64> = serde_json::from_str(&json).unwrap();
        assert_eq!(loaded.min, rect.min);
        assert_eq!(loaded.max, rect.max);
    }
}
