/// Implements a component-wise binary operator between two vectors, along with
/// its compound-assignment form. The assignment form is derived from the value
/// form so that both always agree.
macro_rules! impl_componentwise_op {
    () => {};

    (
        impl $trait:ident, $assign_trait:ident for Vector { fn $func:ident(), fn $assign_func:ident() }
        $($remainder:tt)*
    ) => {
        impl<T: Scalar, const N: usize> $trait for Vector<T, N> {
            type Output = Self;

            fn $func(self, rhs: Self) -> Self {
                self.zip_map(rhs, |l, r| $trait::$func(l, r))
            }
        }
        impl<T: Scalar, const N: usize> $assign_trait for Vector<T, N> {
            fn $assign_func(&mut self, rhs: Self) {
                *self = $trait::$func(*self, rhs);
            }
        }
        impl_componentwise_op! { $($remainder)* }
    };
}

/// Implements a binary operator between a vector and a scalar, applied to each
/// component, along with its compound-assignment form.
macro_rules! impl_scalar_op {
    () => {};

    (
        impl $trait:ident<T>, $assign_trait:ident<T> for Vector { fn $func:ident(), fn $assign_func:ident() }
        $($remainder:tt)*
    ) => {
        impl<T: Scalar, const N: usize> $trait<T> for Vector<T, N> {
            type Output = Self;

            fn $func(self, rhs: T) -> Self {
                self.map(|x| $trait::$func(x, rhs))
            }
        }
        impl<T: Scalar, const N: usize> $assign_trait<T> for Vector<T, N> {
            fn $assign_func(&mut self, rhs: T) {
                *self = $trait::$func(*self, rhs);
            }
        }
        impl_scalar_op! { $($remainder)* }
    };
}

/// Implements `Add<Vector>` and `Sub<Vector>` for a region type by
/// translating it.
macro_rules! impl_translate_ops {
    (impl for $type:ident) => {
        impl<T: Scalar, const N: usize> Add<Vector<T, N>> for $type<T, N> {
            type Output = Self;

            fn add(self, rhs: Vector<T, N>) -> Self {
                self.translate(rhs)
            }
        }
        impl<T: Scalar, const N: usize> Sub<Vector<T, N>> for $type<T, N> {
            type Output = Self;

            fn sub(self, rhs: Vector<T, N>) -> Self {
                self.translate(-rhs)
            }
        }
    };
}
