//! In-place vector operations on borrowed buffers.
//!
//! [`VectorMut`] is an opt-in mutable view for code that keeps its vectors in
//! flat buffers (for example, interleaved vertex data) and wants to write
//! results directly into them. Every operation computes its result with the
//! value API of [`Vector`] and writes it back, so the two APIs cannot
//! disagree.

use crate::approx_cmp::Scalar;
use crate::errors::BufferLengthError;
use crate::vector::Vector;

/// Mutable view of `N` contiguous components.
#[derive(Debug, PartialEq)]
pub struct VectorMut<'a, T, const N: usize> {
    data: &'a mut [T; N],
}

impl<'a, T: Scalar, const N: usize> VectorMut<'a, T, N> {
    /// Views a buffer of exactly `N` components as a vector.
    pub fn from_slice(buf: &'a mut [T]) -> Result<Self, BufferLengthError> {
        let actual = buf.len();
        let data = <&mut [T; N]>::try_from(buf).map_err(|_| BufferLengthError {
            expected: N,
            actual,
        })?;
        Ok(Self { data })
    }

    /// Returns a copy of the current value.
    pub fn get(&self) -> Vector<T, N> {
        Vector(*self.data)
    }
    /// Overwrites the current value.
    pub fn set(&mut self, value: Vector<T, N>) {
        *self.data = value.0;
    }
    /// Overwrites the current value with the value of another view.
    pub fn copy_from(&mut self, src: &VectorMut<'_, T, N>) {
        self.set(src.get());
    }

    /// Stores `a + b`.
    pub fn add(&mut self, a: Vector<T, N>, b: Vector<T, N>) {
        self.set(a + b);
    }
    /// Stores `a - b`.
    pub fn sub(&mut self, a: Vector<T, N>, b: Vector<T, N>) {
        self.set(a - b);
    }
    /// Stores `a + b * s`.
    pub fn mad(&mut self, a: Vector<T, N>, b: Vector<T, N>, s: T) {
        self.set(a.mad(b, s));
    }
    /// Stores the linear interpolation from `a` toward `b` by `t`.
    pub fn lerp(&mut self, a: Vector<T, N>, b: Vector<T, N>, t: T) {
        self.set(a.lerp(b, t));
    }

    /// Lowers each component to the corresponding component of `v` if that is
    /// smaller.
    pub fn min_assign(&mut self, v: Vector<T, N>) {
        self.set(self.get().min_by_component(v));
    }
    /// Raises each component to the corresponding component of `v` if that is
    /// larger.
    pub fn max_assign(&mut self, v: Vector<T, N>) {
        self.set(self.get().max_by_component(v));
    }
}

impl<T: Scalar> VectorMut<'_, T, 3> {
    /// Stores the cross product `a × b`.
    pub fn cross(&mut self, a: Vector<T, 3>, b: Vector<T, 3>) {
        self.set(a.cross(b));
    }
}

impl<'a, T: Scalar, const N: usize> From<&'a mut Vector<T, N>> for VectorMut<'a, T, N> {
    fn from(value: &'a mut Vector<T, N>) -> Self {
        Self { data: &mut value.0 }
    }
}

impl<T: Scalar, const N: usize> Vector<T, N> {
    /// Returns a mutable view of the vector.
    pub fn as_mut_view(&mut self) -> VectorMut<'_, T, N> {
        VectorMut::from(self)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{Vec3, assert_approx_eq};

    #[test]
    fn test_from_slice_length() {
        let mut buf = [0.0_f32; 4];
        assert_eq!(
            VectorMut::<f32, 3>::from_slice(&mut buf).unwrap_err(),
            BufferLengthError {
                expected: 3,
                actual: 4,
            },
        );
        assert!(VectorMut::<f32, 3>::from_slice(&mut buf[1..]).is_ok());
    }

    #[test]
    fn test_in_place_ops_write_through() {
        let mut buf = [0.0_f32; 6];
        let (head, tail) = buf.split_at_mut(3);
        let mut dst = VectorMut::<f32, 3>::from_slice(head).unwrap();
        let mut other = VectorMut::<f32, 3>::from_slice(tail).unwrap();

        dst.add(Vec3::new(1.0, 2.0, 3.0), Vec3::new(5.0, 6.0, 7.0));
        assert_eq!(dst.get(), Vec3::new(6.0, 8.0, 10.0));

        dst.mad(Vec3::new(1.0, 2.0, 3.0), Vec3::new(0.0, 2.0, 4.0), 2.0);
        assert_approx_eq!(dst.get(), Vec3::new(1.0, 6.0, 11.0));

        dst.sub(Vec3::new(1.0, 2.0, 3.0), Vec3::new(5.0, 6.0, 7.0));
        assert_eq!(dst.get(), Vec3::new(-4.0, -4.0, -4.0));

        other.copy_from(&dst);
        other.lerp(other.get(), Vec3::new(0.0, 0.0, 4.0), 0.5);
        assert_approx_eq!(other.get(), Vec3::new(-2.0, -2.0, 0.0));

        dst.cross(Vec3::new(3.0, -3.0, 1.0), Vec3::new(4.0, 9.0, 2.0));
        assert_approx_eq!(dst.get(), Vec3::new(-15.0, -2.0, 39.0));

        assert_eq!(buf, [-15.0, -2.0, 39.0, -2.0, -2.0, 0.0]);
    }

    #[test]
    fn test_min_max_assign() {
        let mut v = Vec3::<f64>::new(1.0, 5.0, -3.0);
        let mut view = v.as_mut_view();
        view.min_assign(Vec3::new(2.0, -5.0, -3.5));
        assert_eq!(view.get(), Vec3::new(1.0, -5.0, -3.5));
        view.max_assign(Vec3::new(0.0, 0.0, 0.0));
        assert_eq!(v, Vec3::new(1.0, 0.0, 0.0));
    }

    #[test]
    fn test_view_agrees_with_value_api() {
        let a = Vec3::<f64>::new(0.1, 0.2, 0.3);
        let b = Vec3::<f64>::new(-1.5, 2.25, 9.0);
        let mut v = Vec3::<f64>::zero();
        v.as_mut_view().mad(a, b, 0.7);
        assert_eq!(v, a + b * 0.7);
    }
}
