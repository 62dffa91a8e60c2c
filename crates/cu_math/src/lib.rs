//! # cu_math - Transform Pipeline Math
//!
//! Small value-type math for 3D rendering: `Vec2`/`Vec3`/`Vec4`, `Quat`,
//! `Mat4`, and free functions that build rotation, view, projection,
//! translation and scale matrices for a right-handed world and a Y-down clip
//! space.
//!
//! Every operation is total. Degenerate input resolves to a fixed fallback
//! (zero vectors normalize to themselves, zero quaternions to identity)
//! instead of an error or NaN.
//!
//! With the `simd` feature, `Vec4` arithmetic uses SSE on x86 targets. The
//! results are bit-identical to the scalar build.

pub mod vector;
pub mod matrix;
pub mod quaternion;
pub mod transform;

mod simd;

pub use vector::*;
pub use matrix::*;
pub use quaternion::*;
pub use transform::*;

/// Common math constants
pub mod consts {
    /// Truncated pi. Angle conversions depend on this exact value.
    #[allow(clippy::approx_constant)]
    pub const PI: f32 = 3.141592;
    pub const DEG_TO_RAD: f32 = PI / 180.0;
    pub const RAD_TO_DEG: f32 = 180.0 / PI;
}

/// Convert degrees to radians
#[inline]
pub fn degrees_to_radians(degrees: f32) -> f32 {
    degrees * consts::DEG_TO_RAD
}

/// Convert radians to degrees
#[inline]
pub fn radians_to_degrees(radians: f32) -> f32 {
    radians * consts::RAD_TO_DEG
}

pub mod prelude {
    pub use crate::vector::{Vec2, Vec3, Vec4};
    pub use crate::matrix::Mat4;
    pub use crate::quaternion::Quat;
    pub use crate::transform::{
        get_rotation_matrix, look_at, perspective, rotate, scale, scale_vec4, translate,
        translate_vec4,
    };
    pub use crate::{degrees_to_radians, radians_to_degrees};
}
