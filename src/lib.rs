//! Fixed-dimension numeric vectors for geometry and simulation code.
//!
//! [`Vector<T, N>`] stores `N >= 2` components of a primitive scalar type and
//! supports componentwise arithmetic with arithmetic promotion between
//! element types, lexicographic comparison, dot product and length.

pub mod fill;
#[cfg(feature = "glam")]
mod glam_ext;
mod ops;
mod promote;
mod scalar;
mod vector;

pub use fill::{FillError, Filler};
pub use ops::{comp_mult, dot};
pub use promote::Promote;
pub use scalar::Scalar;
pub use vector::{vec2, vec3, vec4, Vector};

pub type Vector2d = Vector<f64, 2>;
pub type Vector3d = Vector<f64, 3>;
pub type Vector4d = Vector<f64, 4>;
pub type Vector2f = Vector<f32, 2>;
pub type Vector3f = Vector<f32, 3>;
pub type Vector4f = Vector<f32, 4>;
pub type Vector2i = Vector<i32, 2>;
pub type Vector3i = Vector<i32, 3>;
pub type Vector4i = Vector<i32, 4>;
