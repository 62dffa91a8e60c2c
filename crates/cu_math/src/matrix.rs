//! 4x4 matrix
//!
//! Storage is `m[row][col]`. Products are plain row-by-column sums built on
//! `Vec4::dot`, so they accumulate in the same order regardless of which lane
//! backend is active. There is deliberately no inverse or determinant.

use crate::vector::Vec4;
use core::ops::{Mul, MulAssign};

/// 4x4 matrix indexed `m[row][col]`
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[repr(C)]
pub struct Mat4 {
    pub m: [[f32; 4]; 4],
}

impl Mat4 {
    pub const IDENTITY: Self = Self::new(1.0);

    pub const ZERO: Self = Self::new(0.0);

    /// Matrix with `diag` on the diagonal and zero elsewhere
    #[inline]
    pub const fn new(diag: f32) -> Self {
        Self {
            m: [
                [diag, 0.0, 0.0, 0.0],
                [0.0, diag, 0.0, 0.0],
                [0.0, 0.0, diag, 0.0],
                [0.0, 0.0, 0.0, diag],
            ],
        }
    }

    #[inline]
    pub const fn identity() -> Self {
        Self::IDENTITY
    }

    #[inline]
    pub const fn from_rows(r0: Vec4, r1: Vec4, r2: Vec4, r3: Vec4) -> Self {
        Self {
            m: [
                [r0.x, r0.y, r0.z, r0.w],
                [r1.x, r1.y, r1.z, r1.w],
                [r2.x, r2.y, r2.z, r2.w],
                [r3.x, r3.y, r3.z, r3.w],
            ],
        }
    }

    #[inline]
    pub const fn from_cols(c0: Vec4, c1: Vec4, c2: Vec4, c3: Vec4) -> Self {
        Self::from_rows(c0, c1, c2, c3).transpose()
    }

    #[inline]
    pub const fn row(&self, i: usize) -> Vec4 {
        let r = self.m[i];
        Vec4::new(r[0], r[1], r[2], r[3])
    }

    #[inline]
    pub const fn col(&self, j: usize) -> Vec4 {
        Vec4::new(self.m[0][j], self.m[1][j], self.m[2][j], self.m[3][j])
    }

    #[inline]
    pub fn set_row(&mut self, i: usize, row: Vec4) {
        self.m[i] = row.to_array();
    }

    #[inline]
    pub const fn transpose(&self) -> Self {
        let m = &self.m;
        Self {
            m: [
                [m[0][0], m[1][0], m[2][0], m[3][0]],
                [m[0][1], m[1][1], m[2][1], m[3][1]],
                [m[0][2], m[1][2], m[2][2], m[3][2]],
                [m[0][3], m[1][3], m[2][3], m[3][3]],
            ],
        }
    }

    /// Flatten in storage (row-major) order
    pub fn to_array(&self) -> [f32; 16] {
        let m = &self.m;
        [
            m[0][0], m[0][1], m[0][2], m[0][3],
            m[1][0], m[1][1], m[1][2], m[1][3],
            m[2][0], m[2][1], m[2][2], m[2][3],
            m[3][0], m[3][1], m[3][2], m[3][3],
        ]
    }
}

impl Mul for Mat4 {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        let cols = [rhs.col(0), rhs.col(1), rhs.col(2), rhs.col(3)];
        let mut r = Self::ZERO;
        for (i, out) in r.m.iter_mut().enumerate() {
            let row = self.row(i);
            for (j, col) in cols.iter().enumerate() {
                out[j] = row.dot(*col);
            }
        }
        r
    }
}

impl Mul<Vec4> for Mat4 {
    type Output = Vec4;

    #[inline]
    fn mul(self, rhs: Vec4) -> Vec4 {
        Vec4::new(
            self.row(0).dot(rhs),
            self.row(1).dot(rhs),
            self.row(2).dot(rhs),
            self.row(3).dot(rhs),
        )
    }
}

impl Mul<f32> for Mat4 {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: f32) -> Self {
        Self::from_rows(
            self.row(0) * rhs,
            self.row(1) * rhs,
            self.row(2) * rhs,
            self.row(3) * rhs,
        )
    }
}

impl MulAssign for Mat4 {
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}
