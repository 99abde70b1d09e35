//! Fixed-size vector math.

use std::fmt;
use std::ops::*;
use std::str::FromStr;

use itertools::Itertools;

use crate::approx_cmp::{self, ApproxEq, Scalar};
use crate::errors::ParseVectorError;

/// Number of significant digits used when displaying vector components.
pub const DISPLAY_SIGNIFICANT_DIGITS: usize = 4;

/// Constructs a vector, using the same syntax as an array literal.
///
/// ```
/// # use hypergeom::{vector, Vec2};
/// let v: Vec2<f64> = vector![3.0, 4.0];
/// assert_eq!(v.length(), 5.0);
/// ```
#[macro_export]
macro_rules! vector {
    [$($tok:tt)*] => {
        $crate::Vector([$($tok)*])
    };
}

/// `N`-dimensional vector representing a point or a direction.
///
/// Vectors are plain values: every operation returns a new vector. The
/// compound-assignment operators (`+=` etc.) and [`crate::VectorMut`] are the
/// only ways to modify one in place.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Vector<T, const N: usize>(pub [T; N]);

/// 2D vector.
pub type Vec2<T> = Vector<T, 2>;
/// 3D vector.
pub type Vec3<T> = Vector<T, 3>;

impl<T: Scalar, const N: usize> Default for Vector<T, N> {
    fn default() -> Self {
        Self::zero()
    }
}

impl<T, const N: usize> From<[T; N]> for Vector<T, N> {
    fn from(value: [T; N]) -> Self {
        Self(value)
    }
}
impl<T, const N: usize> From<Vector<T, N>> for [T; N] {
    fn from(value: Vector<T, N>) -> Self {
        value.0
    }
}

impl<T, const N: usize> Vector<T, N> {
    /// Returns a vector with `f` applied to each component.
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Vector<U, N> {
        Vector(self.0.map(f))
    }
}

impl<T: Scalar, const N: usize> Vector<T, N> {
    /// Returns the zero vector.
    pub fn zero() -> Self {
        Self::splat(T::zero())
    }
    /// Returns a vector with every component equal to `x`.
    pub fn splat(x: T) -> Self {
        Self([x; N])
    }
    /// Returns a vector converted from integer components.
    pub fn from_ints(ints: [i32; N]) -> Self {
        Self(ints.map(|i| T::from_f64(f64::from(i))))
    }
    /// Returns the vector converted to another floating-point width.
    pub fn cast<U: Scalar>(self) -> Vector<U, N> {
        self.map(|x| U::from_f64(x.into_f64()))
    }

    /// Returns the components as an array.
    pub fn to_array(self) -> [T; N] {
        self.0
    }

    /// Combines two vectors component by component.
    pub fn zip_map(self, rhs: Self, mut f: impl FnMut(T, T) -> T) -> Self {
        Self(std::array::from_fn(|i| f(self.0[i], rhs.0[i])))
    }

    /// Returns the dot product of this vector with another.
    pub fn dot(self, rhs: Self) -> T {
        std::iter::zip(self.0, rhs.0).fold(T::zero(), |sum, (l, r)| sum + l * r)
    }
    /// Returns a scaled copy of the vector.
    #[must_use]
    pub fn scale(self, scalar: T) -> Self {
        self * scalar
    }
    /// Returns `self + rhs * s`.
    #[must_use]
    pub fn mad(self, rhs: Self, s: T) -> Self {
        self + rhs * s
    }
    /// Linearly interpolates (unclamped) from `self` toward `rhs`.
    #[must_use]
    pub fn lerp(self, rhs: Self, t: T) -> Self {
        self + (rhs - self) * t
    }

    /// Returns the Euclidean length of the vector.
    ///
    /// This is computed with repeated `hypot()` so that squaring large or tiny
    /// components does not overflow or underflow.
    pub fn length(self) -> T {
        self.0.iter().fold(T::zero(), |acc, &x| acc.hypot(x))
    }
    /// Returns the squared length of the vector.
    pub fn length_squared(self) -> T {
        self.dot(self)
    }
    /// Returns the Euclidean distance between two points.
    pub fn distance(self, rhs: Self) -> T {
        (rhs - self).length()
    }

    /// Returns a copy of the vector scaled by the reciprocal of its length.
    ///
    /// The zero vector has no direction; normalizing it divides by zero and
    /// yields non-finite components. Check [`Vector::is_finite()`] if that
    /// matters.
    #[must_use]
    pub fn normalize(self) -> Self {
        let mult = T::one() / self.length();
        self * mult
    }
    /// Returns the component-wise reciprocal. Zero components become
    /// infinities of the same sign.
    #[must_use]
    pub fn recip(self) -> Self {
        self.map(T::recip)
    }

    /// Returns the component-wise minimum of two vectors.
    #[must_use]
    pub fn min_by_component(self, rhs: Self) -> Self {
        self.zip_map(rhs, T::min)
    }
    /// Returns the component-wise maximum of two vectors.
    #[must_use]
    pub fn max_by_component(self, rhs: Self) -> Self {
        self.zip_map(rhs, T::max)
    }

    /// Returns whether every component is finite.
    pub fn is_finite(self) -> bool {
        self.0.iter().all(|x| x.is_finite())
    }

    /// Returns whether two vectors are equal using a custom comparison
    /// function on each pair of components.
    pub fn approx_eq_by(self, rhs: Self, mut eq: impl FnMut(T, T) -> bool) -> bool {
        std::iter::zip(self.0, rhs.0).all(|(l, r)| eq(l, r))
    }
}

impl<T: Scalar> Vector<T, 2> {
    /// Constructs a 2D vector.
    pub const fn new(x: T, y: T) -> Self {
        Self([x, y])
    }

    /// Returns the X component.
    pub fn x(self) -> T {
        self.0[0]
    }
    /// Returns the Y component.
    pub fn y(self) -> T {
        self.0[1]
    }
}

impl<T: Scalar> Vector<T, 3> {
    /// Constructs a 3D vector.
    pub const fn new(x: T, y: T, z: T) -> Self {
        Self([x, y, z])
    }

    /// Returns the X component.
    pub fn x(self) -> T {
        self.0[0]
    }
    /// Returns the Y component.
    pub fn y(self) -> T {
        self.0[1]
    }
    /// Returns the Z component.
    pub fn z(self) -> T {
        self.0[2]
    }

    /// Returns the cross product of two vectors.
    #[must_use]
    pub fn cross(self, rhs: Self) -> Self {
        let [ax, ay, az] = self.0;
        let [bx, by, bz] = rhs.0;
        Self([ay * bz - az * by, az * bx - ax * bz, ax * by - ay * bx])
    }
    /// Returns the dot product of the projections of both vectors onto the
    /// XZ plane. The Y components are ignored.
    pub fn dot_xz(self, rhs: Self) -> T {
        self.0[0] * rhs.0[0] + self.0[2] * rhs.0[2]
    }
}

impl_componentwise_op! {
    impl Add, AddAssign for Vector { fn add(), fn add_assign() }
    impl Sub, SubAssign for Vector { fn sub(), fn sub_assign() }
}
impl_scalar_op! {
    impl Mul<T>, MulAssign<T> for Vector { fn mul(), fn mul_assign() }
    impl Div<T>, DivAssign<T> for Vector { fn div(), fn div_assign() }
}

impl<T: Scalar, const N: usize> Neg for Vector<T, N> {
    type Output = Self;

    fn neg(self) -> Self::Output {
        self.map(T::neg)
    }
}

impl<T, const N: usize> Index<usize> for Vector<T, N> {
    type Output = T;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}
impl<T, const N: usize> IndexMut<usize> for Vector<T, N> {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.0[index]
    }
}

impl<T: Scalar, const N: usize> ApproxEq for Vector<T, N> {
    type Scalar = T;

    fn approx_eq_eps(&self, other: &Self, eps: T) -> bool {
        self.approx_eq_by(*other, |l, r| approx_cmp::approx_eq_eps(l, r, eps))
    }
}
impl<T: Scalar, const N: usize> approx::AbsDiffEq for Vector<T, N> {
    type Epsilon = T;

    fn default_epsilon() -> Self::Epsilon {
        T::APPROX_EPSILON
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        self.approx_eq_eps(other, epsilon)
    }
}

/// Displays the vector as `(x,y)` or `(x,y,z)`.
///
/// Components are written with [`DISPLAY_SIGNIFICANT_DIGITS`] significant
/// digits, or with as many as the formatter's precision requests. The
/// alternate form (`{:#}`) writes the shortest text that parses back to the
/// exact same value.
impl<T: Scalar, const N: usize> fmt::Display for Vector<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let components = if f.alternate() {
            self.0.iter().map(|x| x.to_string()).join(",")
        } else {
            let digits = f.precision().unwrap_or(DISPLAY_SIGNIFICANT_DIGITS);
            self.0
                .iter()
                .map(|&x| format_significant(x, digits))
                .join(",")
        };
        write!(f, "({components})")
    }
}

/// Formats a number with `digits` significant digits, using scientific
/// notation for very large or very small exponents and dropping trailing
/// zeros.
fn format_significant<T: Scalar>(x: T, digits: usize) -> String {
    if !x.is_finite() {
        return x.to_string();
    }
    let digits = digits.max(1);
    let sci = format!("{:.*e}", digits - 1, x);
    let Some((mantissa, exponent)) = sci.split_once('e') else {
        return sci;
    };
    let exponent: i32 = exponent.parse().unwrap_or(0);
    let max_exponent = i32::try_from(digits).unwrap_or(i32::MAX);
    if exponent < -4 || exponent >= max_exponent {
        let sign = if exponent < 0 { '-' } else { '+' };
        format!(
            "{}e{sign}{:02}",
            trim_fraction_zeros(mantissa),
            exponent.unsigned_abs(),
        )
    } else {
        let decimals = usize::try_from(max_exponent - 1 - exponent).unwrap_or(0);
        trim_fraction_zeros(&format!("{x:.decimals$}")).to_owned()
    }
}

fn trim_fraction_zeros(s: &str) -> &str {
    match s.contains('.') {
        true => s.trim_end_matches('0').trim_end_matches('.'),
        false => s,
    }
}

impl<T: Scalar, const N: usize> FromStr for Vector<T, N> {
    type Err = ParseVectorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_components(s).map(Self).ok_or_else(|| {
            log::trace!("cannot parse {s:?} as a {N}-dimensional vector");
            ParseVectorError::InvalidSyntax(s.to_owned())
        })
    }
}

fn parse_components<T: Scalar, const N: usize>(s: &str) -> Option<[T; N]> {
    let inner = s.trim().strip_prefix('(')?.strip_suffix(')')?;
    let mut parts = inner.split(',');
    let mut ret = [T::zero(); N];
    for component in &mut ret {
        *component = parts.next()?.trim().parse().ok()?;
    }
    parts.next().is_none().then_some(ret)
}

#[cfg(feature = "serde")]
impl<T: Scalar, const N: usize> serde::Serialize for Vector<T, N> {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&format!("{self:#}"))
    }
}
#[cfg(feature = "serde")]
impl<'de, T: Scalar, const N: usize> serde::Deserialize<'de> for Vector<T, N> {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = <String as serde::Deserialize<'de>>::deserialize(deserializer)?;
        text.parse().map_err(serde::de::Error::custom)
    }
}
