//! Quaternion for 3D rotations
//!
//! Components are stored scalar-first (`w, x, y, z`). The 4-vector algebra
//! (add, sub, scale, length) runs on `Vec4` through the explicit
//! [`Quat::to_vec4_wxyz`] / [`Quat::from_vec4_wxyz`] pair, which puts `w` in
//! the vector's `x` lane.
//!
//! Degenerate inputs never fail: normalizing or inverting a zero quaternion
//! yields [`Quat::IDENTITY`]. Every operation that produces a rotation
//! renormalizes its input first, so non-unit intermediates (e.g. from
//! [`Quat::lerp`] before normalization or plain addition) are safe to pass.

use crate::matrix::Mat4;
use crate::vector::{Vec3, Vec4};
use core::ops::{Add, AddAssign, Div, Mul, MulAssign, Sub};

/// Below this half-angle sine, slerp and axis extraction switch to their fallbacks.
const SIN_EPSILON: f32 = 0.001;

/// Quaternion `w + xi + yj + zk`
#[derive(Clone, Copy, Debug, PartialEq)]
#[repr(C, align(16))]
pub struct Quat {
    pub w: f32,
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Quat {
    /// Identity quaternion (no rotation)
    pub const IDENTITY: Self = Self::new(1.0, 0.0, 0.0, 0.0);

    /// Create from scalar part and the three imaginary components
    #[inline]
    pub const fn new(w: f32, x: f32, y: f32, z: f32) -> Self {
        Self { w, x, y, z }
    }

    /// Create from scalar part `w` and vector part `v`
    #[inline]
    pub const fn from_scalar_vector(w: f32, v: Vec3) -> Self {
        Self::new(w, v.x, v.y, v.z)
    }

    /// Reinterpret a raw 4-vector payload: `v.x` becomes `w`, `v.y` becomes
    /// `x`, `v.z` becomes `y` and `v.w` becomes `z`.
    ///
    /// Note the shift: this is not `Quat::new(v.x, v.y, v.z, v.w)` read as
    /// `(x, y, z, w)`.
    #[inline]
    pub const fn from_vec4_wxyz(v: Vec4) -> Self {
        Self::new(v.x, v.y, v.z, v.w)
    }

    /// Inverse of [`Quat::from_vec4_wxyz`]
    #[inline]
    pub const fn to_vec4_wxyz(self) -> Vec4 {
        Vec4::new(self.w, self.x, self.y, self.z)
    }

    /// Vector (imaginary) part
    #[inline]
    pub const fn vector(self) -> Vec3 {
        Vec3::new(self.x, self.y, self.z)
    }

    /// Create from axis and angle (radians, full rotation angle)
    pub fn from_axis_angle(axis: Vec3, angle: f32) -> Self {
        let axis = Vec3::normalize(axis);
        let (sin, cos) = (angle * 0.5).sin_cos();
        Self::new(cos, axis.x * sin, axis.y * sin, axis.z * sin)
    }

    /// Create from Euler angles (radians): roll about X, pitch about Y, yaw about Z
    pub fn from_euler(roll: f32, pitch: f32, yaw: f32) -> Self {
        let (sy, cy) = (yaw * 0.5).sin_cos();
        let (sp, cp) = (pitch * 0.5).sin_cos();
        let (sr, cr) = (roll * 0.5).sin_cos();

        Self::new(
            cy * cp * cr + sy * sp * sr,
            cy * cp * sr - sy * sp * cr,
            sy * cp * sr + cy * sp * cr,
            sy * cp * cr - cy * sp * sr,
        )
    }

    #[inline]
    pub fn length_squared(self) -> f32 {
        self.to_vec4_wxyz().length_squared()
    }

    #[inline]
    pub fn length(self) -> f32 {
        self.to_vec4_wxyz().length()
    }

    /// Alias for [`Quat::length`]
    #[inline]
    pub fn magnitude(self) -> f32 {
        self.length()
    }

    /// Unit quaternion in the same direction, or identity when the length is not positive
    #[inline]
    pub fn normalized(self) -> Self {
        let len = self.length();
        if len > 0.0 { self / len } else { Self::IDENTITY }
    }

    /// In-place form of [`Quat::normalized`]
    #[inline]
    pub fn normalize(&mut self) -> &mut Self {
        *self = self.normalized();
        self
    }

    /// Conjugate (inverse for unit quaternions)
    #[inline]
    pub fn conjugate(self) -> Self {
        Self::new(self.w, -self.x, -self.y, -self.z)
    }

    /// Conjugate over squared length; identity for the zero quaternion
    #[inline]
    pub fn inverse(self) -> Self {
        let len_sq = self.length_squared();
        if len_sq == 0.0 {
            return Self::IDENTITY;
        }
        self.conjugate() / len_sq
    }

    #[inline]
    pub fn dot(self, other: Self) -> f32 {
        self.w * other.w + self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Componentwise blend, then renormalized. No shortest-path correction.
    pub fn lerp(a: Self, b: Self, t: f32) -> Self {
        (a + (b - a) * t).normalized()
    }

    /// Spherical linear interpolation along the shorter arc
    pub fn slerp(a: Self, b: Self, t: f32) -> Self {
        let qa = a.normalized();
        let mut qb = b.normalized();

        let mut d = qa.dot(qb);
        if d < 0.0 {
            qb = Self::new(-qb.w, -qb.x, -qb.y, -qb.z);
            d = -d;
        }
        let d = d.clamp(-1.0, 1.0);

        let theta = d.acos();
        let sin_theta = theta.sin();
        if sin_theta < SIN_EPSILON {
            return Self::lerp(qa, qb, t);
        }

        let w1 = ((1.0 - t) * theta).sin() / sin_theta;
        let w2 = (t * theta).sin() / sin_theta;
        (qa * w1 + qb * w2).normalized()
    }

    /// Convert to `(axis, angle)`. Near-zero rotations report the Z axis.
    pub fn to_axis_angle(self) -> (Vec3, f32) {
        let q = self.normalized();
        let angle = 2.0 * q.w.clamp(-1.0, 1.0).acos();

        let sin_half = (angle * 0.5).sin();
        if sin_half < SIN_EPSILON {
            (Vec3::Z, angle)
        } else {
            (q.vector() / sin_half, angle)
        }
    }

    /// Convert to Euler angles as `(roll, pitch, yaw)` about X, Y, Z
    pub fn to_euler(self) -> Vec3 {
        let Self { w, x, y, z } = self.normalized();

        let sinr_cosp = 2.0 * (w * x + y * z);
        let cosr_cosp = 1.0 - 2.0 * (x * x + y * y);
        let roll = sinr_cosp.atan2(cosr_cosp);

        let sinp = (2.0 * (w * y - z * x)).clamp(-1.0, 1.0);
        let pitch = sinp.asin();

        let siny_cosp = 2.0 * (w * z + x * y);
        let cosy_cosp = 1.0 - 2.0 * (y * y + z * z);
        let yaw = siny_cosp.atan2(cosy_cosp);

        Vec3::new(roll, pitch, yaw)
    }

    /// Rotate a vector as `q * (0, v) * conj(q)` with `q` normalized first
    pub fn rotate(self, v: Vec3) -> Vec3 {
        let q = self.normalized();
        let p = Self::from_scalar_vector(0.0, v);
        (q * p * q.conjugate()).vector()
    }

    /// Rotation matrix in `m[row][col]` layout, from the normalized quaternion
    pub fn to_matrix(self) -> Mat4 {
        let Self { w, x, y, z } = self.normalized();

        let (xx, yy, zz) = (x * x, y * y, z * z);
        let (xy, xz, yz) = (x * y, x * z, y * z);
        let (wx, wy, wz) = (w * x, w * y, w * z);

        Mat4::from_rows(
            Vec4::new(1.0 - 2.0 * (yy + zz), 2.0 * (xy - wz), 2.0 * (xz + wy), 0.0),
            Vec4::new(2.0 * (xy + wz), 1.0 - 2.0 * (xx + zz), 2.0 * (yz - wx), 0.0),
            Vec4::new(2.0 * (xz - wy), 2.0 * (yz + wx), 1.0 - 2.0 * (xx + yy), 0.0),
            Vec4::W,
        )
    }
}

impl Default for Quat {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Add for Quat {
    type Output = Self;
    #[inline] fn add(self, rhs: Self) -> Self { Self::from_vec4_wxyz(self.to_vec4_wxyz() + rhs.to_vec4_wxyz()) }
}
impl Sub for Quat {
    type Output = Self;
    #[inline] fn sub(self, rhs: Self) -> Self { Self::from_vec4_wxyz(self.to_vec4_wxyz() - rhs.to_vec4_wxyz()) }
}
impl Mul<f32> for Quat {
    type Output = Self;
    #[inline] fn mul(self, rhs: f32) -> Self { Self::from_vec4_wxyz(self.to_vec4_wxyz() * rhs) }
}
impl Mul<Quat> for f32 {
    type Output = Quat;
    #[inline] fn mul(self, rhs: Quat) -> Quat { rhs * self }
}
impl Div<f32> for Quat {
    type Output = Self;
    #[inline] fn div(self, rhs: f32) -> Self { Self::from_vec4_wxyz(self.to_vec4_wxyz() / rhs) }
}
impl AddAssign for Quat {
    #[inline] fn add_assign(&mut self, rhs: Self) { *self = *self + rhs; }
}

/// Hamilton product; `a * b` applies `b` first when rotating
impl Mul for Quat {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        Self::new(
            self.w * rhs.w - self.x * rhs.x - self.y * rhs.y - self.z * rhs.z,
            self.w * rhs.x + self.x * rhs.w + self.y * rhs.z - self.z * rhs.y,
            self.w * rhs.y - self.x * rhs.z + self.y * rhs.w + self.z * rhs.x,
            self.w * rhs.z + self.x * rhs.y - self.y * rhs.x + self.z * rhs.w,
        )
    }
}

impl MulAssign for Quat {
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

impl Mul<Vec3> for Quat {
    type Output = Vec3;

    fn mul(self, rhs: Vec3) -> Vec3 {
        self.rotate(rhs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::f32::consts::{FRAC_PI_2, PI};

    fn close(a: Quat, b: Quat) -> bool {
        (a.to_vec4_wxyz() - b.to_vec4_wxyz()).length() < 1e-5
    }

    #[test]
    fn test_quaternion_identity() {
        let q = Quat::IDENTITY;
        let v = Vec3::new(1.0, 2.0, 3.0);
        assert!((q * v - v).length() < 1e-6);
        assert_eq!(Quat::default(), Quat::new(1.0, 0.0, 0.0, 0.0));
    }

    #[test]
    fn test_vec4_payload_is_scalar_first() {
        let q = Quat::from_vec4_wxyz(Vec4::new(1.0, 2.0, 3.0, 4.0));
        assert_eq!((q.w, q.x, q.y, q.z), (1.0, 2.0, 3.0, 4.0));
        assert_eq!(q.to_vec4_wxyz(), Vec4::new(1.0, 2.0, 3.0, 4.0));

        let p = Quat::from_scalar_vector(0.5, Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(p, Quat::new(0.5, 1.0, 2.0, 3.0));
    }

    #[test]
    fn test_quaternion_rotation_z() {
        let q = Quat::from_axis_angle(Vec3::Z, FRAC_PI_2);
        let result = q.rotate(Vec3::X);
        assert!((result - Vec3::Y).length() < 1e-5);
    }

    #[test]
    fn test_quaternion_rotation_y() {
        let q = Quat::from_axis_angle(Vec3::Y, FRAC_PI_2);
        let result = q * Vec3::X;
        assert!((result - Vec3::NEG_Z).length() < 1e-5);
    }

    #[test]
    fn test_zero_quaternion_fallbacks() {
        let zero = Quat::new(0.0, 0.0, 0.0, 0.0);
        assert_eq!(zero.normalized(), Quat::IDENTITY);
        assert_eq!(zero.inverse(), Quat::IDENTITY);

        let mut q = zero;
        q.normalize();
        assert_eq!(q, Quat::IDENTITY);
    }

    #[test]
    fn test_inverse_of_non_unit() {
        let q = Quat::new(2.0, 0.0, 0.0, 0.0);
        assert_eq!(q.inverse(), Quat::new(0.5, 0.0, 0.0, 0.0));
        assert!(close(q * q.inverse(), Quat::IDENTITY));
    }

    #[test]
    fn test_hamilton_units() {
        let i = Quat::new(0.0, 1.0, 0.0, 0.0);
        let j = Quat::new(0.0, 0.0, 1.0, 0.0);
        let k = Quat::new(0.0, 0.0, 0.0, 1.0);
        assert_eq!(i * j, k);
        assert_eq!(j * i, Quat::new(0.0, 0.0, 0.0, -1.0));
        assert_eq!(i * i, Quat::new(-1.0, 0.0, 0.0, 0.0));
    }

    #[test]
    fn test_quaternion_slerp() {
        let q1 = Quat::IDENTITY;
        let q2 = Quat::from_axis_angle(Vec3::Y, 2.0);

        let mid = Quat::slerp(q1, q2, 0.5);
        let expected = Quat::from_axis_angle(Vec3::Y, 1.0);

        assert!(mid.dot(expected) > 0.9999);
    }

    #[test]
    fn test_slerp_half_turn_negates_end() {
        // f32 PI leaves w slightly negative, so the end quaternion is flipped
        let q2 = Quat::from_axis_angle(Vec3::Y, PI);
        assert!(Quat::IDENTITY.dot(q2) < 0.0);

        let mid = Quat::slerp(Quat::IDENTITY, q2, 0.5);
        let expected = Quat::from_axis_angle(Vec3::Y, -FRAC_PI_2);
        assert!(mid.dot(expected) > 0.9999);
    }

    #[test]
    fn test_slerp_takes_short_path() {
        let a = Quat::from_axis_angle(Vec3::Z, 0.2);
        let b = Quat::from_axis_angle(Vec3::Z, 0.6) * -1.0;
        let mid = Quat::slerp(a, b, 0.5);
        let (_, angle) = mid.to_axis_angle();
        assert!((angle - 0.4).abs() < 1e-4);
    }

    #[test]
    fn test_slerp_nearly_equal_falls_back_to_lerp() {
        let a = Quat::from_axis_angle(Vec3::X, 1e-4);
        let b = Quat::from_axis_angle(Vec3::X, 2e-4);
        assert_eq!(Quat::slerp(a, b, 0.3), Quat::lerp(a.normalized(), b.normalized(), 0.3));
    }

    #[test]
    fn test_lerp_normalizes() {
        let a = Quat::IDENTITY;
        let b = Quat::from_axis_angle(Vec3::X, FRAC_PI_2);
        assert!((Quat::lerp(a, b, 0.5).length() - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_axis_angle_near_zero_reports_z() {
        let (axis, angle) = Quat::IDENTITY.to_axis_angle();
        assert_eq!(axis, Vec3::Z);
        assert_eq!(angle, 0.0);
    }

    #[test]
    fn test_euler_single_axes() {
        let roll = Quat::from_euler(0.5, 0.0, 0.0);
        assert!(close(roll, Quat::from_axis_angle(Vec3::X, 0.5)));
        let pitch = Quat::from_euler(0.0, 0.5, 0.0);
        assert!(close(pitch, Quat::from_axis_angle(Vec3::Y, 0.5)));
        let yaw = Quat::from_euler(0.0, 0.0, 0.5);
        assert!(close(yaw, Quat::from_axis_angle(Vec3::Z, 0.5)));
    }

    #[test]
    fn test_euler_roundtrip() {
        let angles = Vec3::new(0.3, -0.7, 1.1);
        let back = Quat::from_euler(angles.x, angles.y, angles.z).to_euler();
        assert!((back - angles).length() < 1e-5);
    }

    #[test]
    fn test_to_euler_clamps_gimbal_lock() {
        let e = Quat::from_euler(0.0, FRAC_PI_2, 0.0).to_euler();
        assert!(e.y.is_finite());
        assert!((e.y - FRAC_PI_2).abs() < 1e-3);
    }

    #[test]
    fn test_to_matrix_matches_rotate() {
        let q = Quat::from_axis_angle(Vec3::new(1.0, 2.0, 3.0), 0.8);
        let v = Vec3::new(0.5, -1.0, 2.0);
        let by_matrix = (q.to_matrix() * v.extend(1.0)).truncate();
        assert!((by_matrix - q.rotate(v)).length() < 1e-5);
        assert_eq!(q.to_matrix().row(3), Vec4::W);
    }

    #[test]
    fn test_rotate_renormalizes() {
        let q = Quat::from_axis_angle(Vec3::Z, FRAC_PI_2) * 3.0;
        assert!((q.rotate(Vec3::X) - Vec3::Y).length() < 1e-5);
    }
}
