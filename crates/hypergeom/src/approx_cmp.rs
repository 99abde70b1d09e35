//! Approximate comparison of floating-point numbers.
//!
//! Two numbers `x` and `y` are considered equal if
//!
//! ```text
//! |x - y| < eps * (1 + max(|x|, |y|))
//! ```
//!
//! which behaves like an absolute tolerance of `eps` near zero and like a
//! relative tolerance of `eps` for large magnitudes. The default `eps` is
//! [`Scalar::APPROX_EPSILON`], which is derived from the machine epsilon of
//! each floating-point width separately.

use std::fmt;
use std::str::FromStr;

/// Multiplier applied to the machine epsilon to obtain the default tolerance.
///
/// This absorbs rounding error accumulated over a short chain of arithmetic.
pub const APPROX_MULTIPLIER: u16 = 100;

/// Floating-point type usable as a vector component (either `f32` or `f64`).
pub trait Scalar:
    num_traits::Float
    + fmt::Debug
    + fmt::Display
    + fmt::LowerExp
    + FromStr
    + Default
    + Send
    + Sync
    + 'static
{
    /// Difference between `1.0` and the next representable value.
    const MACHINE_EPSILON: Self;
    /// Default tolerance for [`approx_eq()`].
    const APPROX_EPSILON: Self;

    /// Converts an `f64` to this type, rounding if necessary.
    fn from_f64(x: f64) -> Self;
    /// Converts this value to an `f64`.
    fn into_f64(self) -> f64;
}

macro_rules! impl_scalar {
    ($ty:ty) => {
        impl Scalar for $ty {
            const MACHINE_EPSILON: Self = <$ty>::EPSILON;
            const APPROX_EPSILON: Self = <$ty>::EPSILON * APPROX_MULTIPLIER as $ty;

            #[allow(clippy::cast_possible_truncation)]
            fn from_f64(x: f64) -> Self {
                x as $ty
            }
            fn into_f64(self) -> f64 {
                self.into()
            }
        }
    };
}
impl_scalar!(f32);
impl_scalar!(f64);

/// Returns whether `x` and `y` are equal within [`Scalar::APPROX_EPSILON`].
///
/// NaN is never approximately equal to anything. Infinities are never
/// approximately equal to anything either, since their difference is NaN or
/// infinite.
pub fn approx_eq<T: Scalar>(x: T, y: T) -> bool {
    approx_eq_eps(x, y, T::APPROX_EPSILON)
}

/// Returns whether `x` and `y` are equal within `eps`, using the same
/// combined absolute/relative tolerance as [`approx_eq()`].
pub fn approx_eq_eps<T: Scalar>(x: T, y: T, eps: T) -> bool {
    (x - y).abs() < eps * (T::one() + x.abs().max(y.abs()))
}

/// Returns whether `x` is approximately zero.
pub fn is_approx_zero<T: Scalar>(x: T) -> bool {
    approx_eq(x, T::zero())
}

/// Approximate equality using the tolerance model of this module.
pub trait ApproxEq {
    /// Scalar type of the tolerance.
    type Scalar: Scalar;

    /// Returns whether `self` and `other` are equal within `eps`. Composite
    /// values compare component by component and fail as soon as any
    /// component fails.
    fn approx_eq_eps(&self, other: &Self, eps: Self::Scalar) -> bool;

    /// Returns whether `self` and `other` are equal within
    /// [`Scalar::APPROX_EPSILON`].
    fn approx_eq(&self, other: &Self) -> bool {
        self.approx_eq_eps(other, <Self::Scalar as Scalar>::APPROX_EPSILON)
    }
}

impl ApproxEq for f32 {
    type Scalar = f32;

    fn approx_eq_eps(&self, other: &Self, eps: f32) -> bool {
        approx_eq_eps(*self, *other, eps)
    }
}
impl ApproxEq for f64 {
    type Scalar = f64;

    fn approx_eq_eps(&self, other: &Self, eps: f64) -> bool {
        approx_eq_eps(*self, *other, eps)
    }
}

/// Asserts that both arguments are approximately equal using their default
/// tolerance.
///
/// Works for any type implementing [`ApproxEq`], including scalars, vectors,
/// rectangles, and bounding boxes from this crate.
#[macro_export]
macro_rules! assert_approx_eq {
    ($a:expr, $b:expr $(,)?) => {
        match (&$a, &$b) {
            (a, b) => assert!(
                $crate::ApproxEq::approx_eq(a, b),
                "assertion failed: `{:?} ≈ {:?}`",
                a,
                b,
            ),
        }
    };
}
