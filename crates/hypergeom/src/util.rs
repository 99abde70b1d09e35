//! Scalar utility functions that didn't fit anywhere else.

use crate::approx_cmp::Scalar;

/// Returns `x` limited to the range `low..=high`.
///
/// NaN is returned unchanged.
pub fn clamp<T: Scalar>(x: T, low: T, high: T) -> T {
    if x < low {
        low
    } else if x > high {
        high
    } else {
        x
    }
}

/// Returns a closure that limits its argument to the range `low..=high`.
pub fn clamp_fn<T: Scalar>(low: T, high: T) -> impl Fn(T) -> T {
    move |x| clamp(x, low, high)
}

/// Returns whether `clamp(x, low, high)` would return `x` unchanged, using
/// exact comparison.
pub fn is_clamped<T: Scalar>(x: T, low: T, high: T) -> bool {
    low <= x && x <= high
}

/// Lowers `a` to `b` if `b` is smaller.
pub fn set_min<T: Scalar>(a: &mut T, b: T) {
    if b < *a {
        *a = b;
    }
}

/// Raises `a` to `b` if `b` is larger.
pub fn set_max<T: Scalar>(a: &mut T, b: T) {
    if *a < b {
        *a = b;
    }
}

/// Returns the smaller of `a` and `b`, or NaN if either is NaN.
///
/// Unlike [`num_traits::Float::min()`], this does not discard NaN.
pub fn nan_min<T: Scalar>(a: T, b: T) -> T {
    if a.is_nan() || b.is_nan() {
        T::nan()
    } else {
        a.min(b)
    }
}

/// Returns the larger of `a` and `b`, or NaN if either is NaN.
///
/// Unlike [`num_traits::Float::max()`], this does not discard NaN.
pub fn nan_max<T: Scalar>(a: T, b: T) -> T {
    if a.is_nan() || b.is_nan() {
        T::nan()
    } else {
        a.max(b)
    }
}

/// Rounds `x` to `precision` digits after the decimal point. Halfway values
/// round away from zero. A negative precision rounds to tens, hundreds, etc.
pub fn round<T: Scalar>(x: T, precision: i32) -> T {
    let half = T::from_f64(0.5);
    let scale = T::from_f64(10.0).powi(precision);
    let t = x * scale;
    if t > T::zero() {
        (t + half).floor() / scale
    } else {
        (t - half).ceil() / scale
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::assert_approx_eq;

    #[test]
    fn test_clamp() {
        assert_eq!(clamp(-1.0, 0.0, 1.0), 0.0);
        assert_eq!(clamp(0.25, 0.0, 1.0), 0.25);
        assert_eq!(clamp(3.0_f32, 0.0, 1.0), 1.0);
        assert!(clamp(f64::NAN, 0.0, 1.0).is_nan());

        let unit = clamp_fn(-1.0, 1.0);
        assert_eq!([-5.0, 0.5, 5.0].map(unit), [-1.0, 0.5, 1.0]);
    }

    #[test]
    fn test_is_clamped() {
        assert!(is_clamped(0.0, 0.0, 1.0));
        assert!(is_clamped(1.0, 0.0, 1.0));
        assert!(!is_clamped(1.0 + 1e-12, 0.0, 1.0));
        assert!(!is_clamped(f64::NAN, 0.0, 1.0));
    }

    #[test]
    fn test_set_min_max() {
        let mut x = 5.0;
        set_min(&mut x, 7.0);
        assert_eq!(x, 5.0);
        set_min(&mut x, 2.0);
        assert_eq!(x, 2.0);
        set_max(&mut x, 1.0);
        assert_eq!(x, 2.0);
        set_max(&mut x, 9.0);
        assert_eq!(x, 9.0);
    }

    #[test]
    fn test_nan_min_max() {
        assert_eq!(nan_min(1.0, 2.0), 1.0);
        assert_eq!(nan_max(1.0_f32, 2.0), 2.0);
        assert_eq!(nan_min(f64::NEG_INFINITY, 0.0), f64::NEG_INFINITY);
        for (a, b) in [(f64::NAN, 1.0), (1.0, f64::NAN), (f64::NAN, f64::INFINITY)] {
            assert!(nan_min(a, b).is_nan());
            assert!(nan_max(a, b).is_nan());
        }
        // `Float::max` would have returned the other operand.
        assert!(1.0_f64.max(f64::NAN) == 1.0);
    }

    #[test]
    fn test_round() {
        assert_eq!(round(23.5, 0), 24.0);
        assert_eq!(round(-23.5, 0), -24.0);
        assert_eq!(round(23.4, 0), 23.0);
        assert_eq!(round(0.0, 2), 0.0);
        assert_approx_eq!(round(3.14159, 2), 3.14);
        assert_approx_eq!(round(-3.14159, 3), -3.142);
        assert_approx_eq!(round(1234.5_f32, -2), 1200.0);
    }
}
