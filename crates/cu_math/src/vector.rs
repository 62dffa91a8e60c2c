//! Vector types
//!
//! `normalized` never divides by zero: a vector whose length is not positive
//! comes back unchanged. `Vec4` arithmetic goes through the lane backend in
//! [`crate::simd`].

use crate::simd::active as lanes;
use core::ops::{Add, AddAssign, Div, Mul, Neg, Sub, SubAssign};

/// 2D vector
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[repr(C)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub const ZERO: Self = Self::new(0.0, 0.0);
    pub const ONE: Self = Self::new(1.0, 1.0);
    pub const X: Self = Self::new(1.0, 0.0);
    pub const Y: Self = Self::new(0.0, 1.0);

    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    #[inline]
    pub const fn splat(v: f32) -> Self {
        Self::new(v, v)
    }

    #[inline]
    pub fn dot(self, other: Self) -> f32 {
        self.x * other.x + self.y * other.y
    }

    #[inline]
    pub fn length_squared(self) -> f32 {
        self.dot(self)
    }

    #[inline]
    pub fn length(self) -> f32 {
        self.length_squared().sqrt()
    }

    #[inline]
    pub fn normalized(self) -> Self {
        let len = self.length();
        if len > 0.0 { self / len } else { self }
    }

    #[inline]
    pub fn lerp(self, other: Self, t: f32) -> Self {
        self + (other - self) * t
    }

    #[inline]
    pub fn to_array(self) -> [f32; 2] {
        [self.x, self.y]
    }
}

/// 3D vector, used for both directions and points
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[repr(C)]
pub struct Vec3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vec3 {
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0);
    pub const ONE: Self = Self::new(1.0, 1.0, 1.0);
    pub const X: Self = Self::new(1.0, 0.0, 0.0);
    pub const Y: Self = Self::new(0.0, 1.0, 0.0);
    pub const Z: Self = Self::new(0.0, 0.0, 1.0);
    pub const NEG_X: Self = Self::new(-1.0, 0.0, 0.0);
    pub const NEG_Y: Self = Self::new(0.0, -1.0, 0.0);
    pub const NEG_Z: Self = Self::new(0.0, 0.0, -1.0);

    #[inline]
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    #[inline]
    pub const fn splat(v: f32) -> Self {
        Self::new(v, v, v)
    }

    #[inline]
    pub fn dot(self, other: Self) -> f32 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Right-handed cross product: `X.cross(Y) == Z`
    #[inline]
    pub fn cross(self, other: Self) -> Self {
        Self::new(
            self.y * other.z - self.z * other.y,
            self.z * other.x - self.x * other.z,
            self.x * other.y - self.y * other.x,
        )
    }

    #[inline]
    pub fn length_squared(self) -> f32 {
        self.dot(self)
    }

    #[inline]
    pub fn length(self) -> f32 {
        self.length_squared().sqrt()
    }

    #[inline]
    pub fn normalized(self) -> Self {
        let len = self.length();
        if len > 0.0 { self / len } else { self }
    }

    /// Free-function form of [`Vec3::normalized`]
    #[inline]
    pub fn normalize(v: Self) -> Self {
        v.normalized()
    }

    #[inline]
    pub fn lerp(self, other: Self, t: f32) -> Self {
        self + (other - self) * t
    }

    #[inline]
    pub fn to_array(self) -> [f32; 3] {
        [self.x, self.y, self.z]
    }

    #[inline]
    pub fn extend(self, w: f32) -> Vec4 {
        Vec4::new(self.x, self.y, self.z, w)
    }
}

/// 4D vector - homogeneous coordinates, quaternion payload, generic 4-tuple
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[repr(C, align(16))]
pub struct Vec4 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub w: f32,
}

impl Vec4 {
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0, 0.0);
    pub const ONE: Self = Self::new(1.0, 1.0, 1.0, 1.0);
    pub const X: Self = Self::new(1.0, 0.0, 0.0, 0.0);
    pub const Y: Self = Self::new(0.0, 1.0, 0.0, 0.0);
    pub const Z: Self = Self::new(0.0, 0.0, 1.0, 0.0);
    pub const W: Self = Self::new(0.0, 0.0, 0.0, 1.0);

    #[inline]
    pub const fn new(x: f32, y: f32, z: f32, w: f32) -> Self {
        Self { x, y, z, w }
    }

    #[inline]
    pub const fn splat(v: f32) -> Self {
        Self::new(v, v, v, v)
    }

    /// Sum of the four lane products, always accumulated x, y, z, w
    #[inline]
    pub fn dot(self, other: Self) -> f32 {
        lanes::dot(self, other)
    }

    #[inline]
    pub fn length_squared(self) -> f32 {
        self.dot(self)
    }

    #[inline]
    pub fn length(self) -> f32 {
        self.length_squared().sqrt()
    }

    #[inline]
    pub fn normalized(self) -> Self {
        let len = self.length();
        if len > 0.0 { self / len } else { self }
    }

    #[inline]
    pub fn lerp(self, other: Self, t: f32) -> Self {
        self + (other - self) * t
    }

    #[inline]
    pub fn truncate(self) -> Vec3 {
        Vec3::new(self.x, self.y, self.z)
    }

    #[inline]
    pub fn to_array(self) -> [f32; 4] {
        [self.x, self.y, self.z, self.w]
    }
}

impl From<[f32; 2]> for Vec2 {
    #[inline] fn from(a: [f32; 2]) -> Self { Self::new(a[0], a[1]) }
}
impl From<[f32; 3]> for Vec3 {
    #[inline] fn from(a: [f32; 3]) -> Self { Self::new(a[0], a[1], a[2]) }
}
impl From<[f32; 4]> for Vec4 {
    #[inline] fn from(a: [f32; 4]) -> Self { Self::new(a[0], a[1], a[2], a[3]) }
}

// Operator implementations for Vec2
impl Add for Vec2 {
    type Output = Self;
    #[inline] fn add(self, rhs: Self) -> Self { Self::new(self.x + rhs.x, self.y + rhs.y) }
}
impl Sub for Vec2 {
    type Output = Self;
    #[inline] fn sub(self, rhs: Self) -> Self { Self::new(self.x - rhs.x, self.y - rhs.y) }
}
impl Mul for Vec2 {
    type Output = Self;
    #[inline] fn mul(self, rhs: Self) -> Self { Self::new(self.x * rhs.x, self.y * rhs.y) }
}
impl Div for Vec2 {
    type Output = Self;
    #[inline] fn div(self, rhs: Self) -> Self { Self::new(self.x / rhs.x, self.y / rhs.y) }
}
impl Mul<f32> for Vec2 {
    type Output = Self;
    #[inline] fn mul(self, rhs: f32) -> Self { Self::new(self.x * rhs, self.y * rhs) }
}
impl Div<f32> for Vec2 {
    type Output = Self;
    #[inline] fn div(self, rhs: f32) -> Self { Self::new(self.x / rhs, self.y / rhs) }
}
impl Neg for Vec2 {
    type Output = Self;
    #[inline] fn neg(self) -> Self { Self::new(-self.x, -self.y) }
}
impl AddAssign for Vec2 {
    #[inline] fn add_assign(&mut self, rhs: Self) { *self = *self + rhs; }
}
impl SubAssign for Vec2 {
    #[inline] fn sub_assign(&mut self, rhs: Self) { *self = *self - rhs; }
}

// Operator implementations for Vec3
impl Add for Vec3 {
    type Output = Self;
    #[inline] fn add(self, rhs: Self) -> Self { Self::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z) }
}
impl Sub for Vec3 {
    type Output = Self;
    #[inline] fn sub(self, rhs: Self) -> Self { Self::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z) }
}
impl Mul for Vec3 {
    type Output = Self;
    #[inline] fn mul(self, rhs: Self) -> Self { Self::new(self.x * rhs.x, self.y * rhs.y, self.z * rhs.z) }
}
impl Div for Vec3 {
    type Output = Self;
    #[inline] fn div(self, rhs: Self) -> Self { Self::new(self.x / rhs.x, self.y / rhs.y, self.z / rhs.z) }
}
impl Mul<f32> for Vec3 {
    type Output = Self;
    #[inline] fn mul(self, rhs: f32) -> Self { Self::new(self.x * rhs, self.y * rhs, self.z * rhs) }
}
impl Mul<Vec3> for f32 {
    type Output = Vec3;
    #[inline] fn mul(self, rhs: Vec3) -> Vec3 { Vec3::new(self * rhs.x, self * rhs.y, self * rhs.z) }
}
impl Div<f32> for Vec3 {
    type Output = Self;
    #[inline] fn div(self, rhs: f32) -> Self { Self::new(self.x / rhs, self.y / rhs, self.z / rhs) }
}
impl Neg for Vec3 {
    type Output = Self;
    #[inline] fn neg(self) -> Self { Self::new(-self.x, -self.y, -self.z) }
}
impl AddAssign for Vec3 {
    #[inline] fn add_assign(&mut self, rhs: Self) { *self = *self + rhs; }
}
impl SubAssign for Vec3 {
    #[inline] fn sub_assign(&mut self, rhs: Self) { *self = *self - rhs; }
}

// Operator implementations for Vec4, all routed through the lane backend
impl Add for Vec4 {
    type Output = Self;
    #[inline] fn add(self, rhs: Self) -> Self { lanes::add(self, rhs) }
}
impl Sub for Vec4 {
    type Output = Self;
    #[inline] fn sub(self, rhs: Self) -> Self { lanes::sub(self, rhs) }
}
impl Mul for Vec4 {
    type Output = Self;
    #[inline] fn mul(self, rhs: Self) -> Self { lanes::mul(self, rhs) }
}
impl Div for Vec4 {
    type Output = Self;
    #[inline] fn div(self, rhs: Self) -> Self { lanes::div(self, rhs) }
}
impl Mul<f32> for Vec4 {
    type Output = Self;
    #[inline] fn mul(self, rhs: f32) -> Self { lanes::scale(self, rhs) }
}
impl Div<f32> for Vec4 {
    type Output = Self;
    #[inline] fn div(self, rhs: f32) -> Self { lanes::div_scalar(self, rhs) }
}
impl Neg for Vec4 {
    type Output = Self;
    #[inline] fn neg(self) -> Self { Self::new(-self.x, -self.y, -self.z, -self.w) }
}
impl AddAssign for Vec4 {
    #[inline] fn add_assign(&mut self, rhs: Self) { *self = *self + rhs; }
}
impl SubAssign for Vec4 {
    #[inline] fn sub_assign(&mut self, rhs: Self) { *self = *self - rhs; }
}
