//! 2D and 3D vectors, rectangles, bounding boxes, and rays, with approximate
//! floating-point comparison.
//!
//! Every type is generic over the component type `T` (`f32` or `f64`) and the
//! number of dimensions `N`. The [`single`] and [`double`] modules provide
//! aliases for a fixed precision. Each precision uses its own tolerance for
//! approximate comparison; see [`approx_cmp`].
//!
//! Numeric operations never fail. Division by zero, normalizing a zero
//! vector, and similar conditions produce infinities or NaN according to
//! IEEE 754, and callers that care should check [`Vector::is_finite()`].
//!
//! ```
//! use hypergeom::double::{Ray2, Rect2, Vec2};
//!
//! let rect = Rect2::from_xywh(1.0, -1.0, 1.0, 1.0);
//! let ray = Ray2::new(Vec2::new(0.0, 0.0), Vec2::new(1.0, -0.9));
//! assert!(ray.intersects(&rect));
//! ```

pub use {approx, num_traits as num};

#[macro_use]
mod impl_macros;
#[macro_use]
mod vector;

pub mod aabb;
pub mod approx_cmp;
pub mod errors;
pub mod ray;
pub mod rect;
pub mod util;
pub mod vector_mut;

/// Structs, traits, and constants.
pub mod prelude {
    pub use crate::aabb::*;
    pub use crate::approx_cmp::*;
    pub use crate::errors::*;
    pub use crate::ray::*;
    pub use crate::rect::*;
    pub use crate::traits::*;
    pub use crate::vector::*;
    pub use crate::vector_mut::*;
    pub use crate::vector;
}
pub use prelude::*;

/// Traits only.
pub mod traits {
    pub use approx::AbsDiffEq;

    pub use crate::approx_cmp::{ApproxEq, Scalar};
    pub use crate::ray::SlabBounds;
}

/// Single-precision (`f32`) aliases.
pub mod single {
    /// 2D vector.
    pub type Vec2 = crate::Vec2<f32>;
    /// 3D vector.
    pub type Vec3 = crate::Vec3<f32>;
    /// 2D rectangle.
    pub type Rect2 = crate::Rect2<f32>;
    /// 3D rectangle.
    pub type Rect3 = crate::Rect3<f32>;
    /// 2D bounding box.
    pub type Aabb2 = crate::Aabb2<f32>;
    /// 3D bounding box.
    pub type Aabb3 = crate::Aabb3<f32>;
    /// 2D ray.
    pub type Ray2 = crate::Ray2<f32>;
    /// 3D ray.
    pub type Ray3 = crate::Ray3<f32>;
}

/// Double-precision (`f64`) aliases.
pub mod double {
    /// 2D vector.
    pub type Vec2 = crate::Vec2<f64>;
    /// 3D vector.
    pub type Vec3 = crate::Vec3<f64>;
    /// 2D rectangle.
    pub type Rect2 = crate::Rect2<f64>;
    /// 3D rectangle.
    pub type Rect3 = crate::Rect3<f64>;
    /// 2D bounding box.
    pub type Aabb2 = crate::Aabb2<f64>;
    /// 3D bounding box.
    pub type Aabb3 = crate::Aabb3<f64>;
    /// 2D ray.
    pub type Ray2 = crate::Ray2<f64>;
    /// 3D ray.
    pub type Ray3 = crate::Ray3<f64>;
}
