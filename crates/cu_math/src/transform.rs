//! Transform matrix constructors
//!
//! Everything here writes the layout a column-major shader uniform expects:
//! `m[i]` is column `i` of the mathematical matrix, so the translation of a
//! view matrix sits in `m[3][0..3]` and a perspective's `-1` in `m[2][3]`.
//! World space is right-handed; clip space has Y pointing down.
//!
//! [`Quat::to_matrix`](crate::Quat::to_matrix) is the exception: it fills rows.

use crate::matrix::Mat4;
use crate::vector::{Vec3, Vec4};

/// Rotation of `angle` radians about `axis` (normalized here), via Rodrigues' formula
pub fn get_rotation_matrix(angle: f32, axis: Vec3) -> Mat4 {
    let Vec3 { x, y, z } = axis.normalized();
    let (s, c) = angle.sin_cos();
    let t = 1.0 - c;

    let mut r = Mat4::ZERO;
    r.m[0][0] = c + x * x * t;
    r.m[1][0] = x * y * t - z * s;
    r.m[2][0] = x * z * t + y * s;

    r.m[0][1] = y * x * t + z * s;
    r.m[1][1] = c + y * y * t;
    r.m[2][1] = y * z * t - x * s;

    r.m[0][2] = z * x * t - y * s;
    r.m[1][2] = z * y * t + x * s;
    r.m[2][2] = c + z * z * t;

    r.m[3][3] = 1.0;
    r
}

/// Whether `up` is parallel to the unit `forward`, relative to the length of `up`
fn is_parallel(forward: Vec3, up: Vec3) -> bool {
    forward.cross(up).length_squared() <= f32::EPSILON * up.length_squared()
}

/// `model * get_rotation_matrix(angle, axis)`
#[inline]
pub fn rotate(model: Mat4, angle: f32, axis: Vec3) -> Mat4 {
    model * get_rotation_matrix(angle, axis)
}

/// Right-handed view matrix looking from `eye` toward `center`.
///
/// `up` must not be parallel to `center - eye`; that case is not guarded and
/// the side axis degenerates.
pub fn look_at(eye: Vec3, center: Vec3, up: Vec3) -> Mat4 {
    let f = Vec3::normalize(center - eye);
    let side = f.cross(up);
    if is_parallel(f, up) {
        log::warn!("look_at: up {:?} is parallel to view direction {:?}", up, f);
    }
    let s = Vec3::normalize(side);
    let u = s.cross(f);

    let mut res = Mat4::identity();

    res.m[0][0] = s.x;
    res.m[1][0] = s.y;
    res.m[2][0] = s.z;

    res.m[0][1] = u.x;
    res.m[1][1] = u.y;
    res.m[2][1] = u.z;

    res.m[0][2] = -f.x;
    res.m[1][2] = -f.y;
    res.m[2][2] = -f.z;

    res.m[3][0] = -s.dot(eye);
    res.m[3][1] = -u.dot(eye);
    res.m[3][2] = f.dot(eye);

    res
}

/// Perspective projection with a vertical field of view in radians.
///
/// The Y scale is negated for clip spaces whose vertical axis points down.
/// Requires `0 < near < far`.
pub fn perspective(fov_y: f32, aspect: f32, near: f32, far: f32) -> Mat4 {
    if !(near > 0.0 && far > near) {
        log::warn!("perspective: invalid depth range near={} far={}", near, far);
    }
    let f = 1.0 / (fov_y / 2.0).tan();

    let mut m = Mat4::ZERO;
    m.m[0][0] = f / aspect;
    m.m[1][1] = -f;
    m.m[2][2] = -(far + near) / (far - near);
    m.m[2][3] = -1.0;
    m.m[3][2] = -(2.0 * far * near) / (far - near);
    m
}

/// Compose a translation by `v` into `m`
#[inline]
pub fn translate(m: &Mat4, v: Vec3) -> Mat4 {
    translate_vec4(m, v.extend(1.0))
}

/// Compose a translation into `m`; `v.w` weights the existing translation
pub fn translate_vec4(m: &Mat4, v: Vec4) -> Mat4 {
    let mut r = *m;
    r.set_row(3, m.row(0) * v.x + m.row(1) * v.y + m.row(2) * v.z + m.row(3) * v.w);
    r
}

/// Compose a per-axis scale by `v` into `m`
#[inline]
pub fn scale(m: &Mat4, v: Vec3) -> Mat4 {
    scale_vec4(m, v.extend(1.0))
}

/// Compose a per-axis scale into `m`, `v.w` scaling the translation slot too
pub fn scale_vec4(m: &Mat4, v: Vec4) -> Mat4 {
    Mat4::from_rows(m.row(0) * v.x, m.row(1) * v.y, m.row(2) * v.z, m.row(3) * v.w)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{degrees_to_radians, Quat};
    use core::f32::consts::FRAC_PI_2;

    fn assert_mat_near(a: &Mat4, b: &Mat4, eps: f32) {
        for (x, y) in a.to_array().iter().zip(b.to_array().iter()) {
            assert!((x - y).abs() < eps, "{:?} != {:?}", a, b);
        }
    }

    #[test]
    fn test_rotation_matrix_is_transposed_quat_matrix() {
        let axis = Vec3::new(0.3, -1.0, 0.5);
        let r = get_rotation_matrix(0.9, axis);
        let q = Quat::from_axis_angle(axis, 0.9).to_matrix();
        assert_mat_near(&r, &q.transpose(), 1e-5);
    }

    #[test]
    fn test_rotation_about_z() {
        let r = get_rotation_matrix(FRAC_PI_2, Vec3::Z);
        // Column 0 of the rotation is stored in m[0]: X maps to Y.
        assert!((r.row(0) - Vec4::Y).length() < 1e-6);
        assert_eq!(r.m[3][3], 1.0);
    }

    #[test]
    fn test_rotate_composes_on_the_right() {
        let model = translate(&Mat4::identity(), Vec3::new(1.0, 2.0, 3.0));
        let r = rotate(model, 0.4, Vec3::X);
        assert_eq!(r, model * get_rotation_matrix(0.4, Vec3::X));
    }

    #[test]
    fn test_look_at_down_negative_z() {
        let view = look_at(Vec3::new(0.0, 0.0, 1.0), Vec3::ZERO, Vec3::Y);
        for i in 0..3 {
            for j in 0..3 {
                let expected = if i == j { 1.0 } else { 0.0 };
                assert!((view.m[i][j] - expected).abs() < 1e-6);
            }
        }
        assert_eq!(view.m[3][2], -1.0);
        assert_eq!(view.m[3][3], 1.0);
    }

    #[test]
    fn test_look_at_matches_translation_for_axis_aligned_camera() {
        let eye = Vec3::new(4.0, -2.0, 7.0);
        let view = look_at(eye, eye + Vec3::NEG_Z, Vec3::Y);
        assert_mat_near(&view, &translate(&Mat4::identity(), -eye), 1e-6);
    }

    #[test]
    fn test_perspective_scenario() {
        let m = perspective(degrees_to_radians(90.0), 1.0, 0.1, 100.0);
        assert!((m.m[0][0] - 1.0).abs() < 1e-5);
        assert!((m.m[1][1] + 1.0).abs() < 1e-5);
        assert!((m.m[2][2] + 100.1 / 99.9).abs() < 1e-5);
        assert_eq!(m.m[2][3], -1.0);
        assert!((m.m[3][2] + 20.0 / 99.9).abs() < 1e-5);
        assert_eq!(m.m[3][3], 0.0);
    }

    #[test]
    fn test_perspective_maps_near_and_far() {
        let m = perspective(1.0, 16.0 / 9.0, 0.5, 50.0).transpose();
        let near = m * Vec4::new(0.0, 0.0, -0.5, 1.0);
        let far = m * Vec4::new(0.0, 0.0, -50.0, 1.0);
        assert!((near.z / near.w + 1.0).abs() < 1e-5);
        assert!((far.z / far.w - 1.0).abs() < 1e-4);
    }

    #[test]
    fn test_translate_and_scale() {
        let t = translate(&Mat4::identity(), Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(t.row(3), Vec4::new(1.0, 2.0, 3.0, 1.0));

        let twice = translate(&t, Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(twice.row(3), Vec4::new(2.0, 4.0, 6.0, 1.0));

        let s = scale(&t, Vec3::new(2.0, 3.0, 4.0));
        assert_eq!(s.m[0][0], 2.0);
        assert_eq!(s.m[1][1], 3.0);
        assert_eq!(s.m[2][2], 4.0);
        assert_eq!(s.row(3), t.row(3));
    }

    #[test]
    fn test_vec4_overloads_weight_last_row() {
        let t = translate(&Mat4::identity(), Vec3::new(1.0, 2.0, 3.0));
        let moved = translate_vec4(&t, Vec4::new(1.0, 0.0, 0.0, 2.0));
        assert_eq!(moved.row(3), Vec4::new(3.0, 4.0, 6.0, 2.0));

        let s = scale_vec4(&t, Vec4::new(1.0, 1.0, 1.0, 0.5));
        assert_eq!(s.row(3), Vec4::new(0.5, 1.0, 1.5, 0.5));
    }

    #[test]
    fn test_parallel_up_scales_with_up_length() {
        let forward = Vec3::new(0.0, 0.0, -1.0);
        assert!(!is_parallel(forward, Vec3::new(0.0, 1e-4, 0.0)));
        assert!(!is_parallel(forward, Vec3::Y));
        assert!(is_parallel(forward, Vec3::new(0.0, 0.0, 5.0)));
        assert!(is_parallel(forward, Vec3::new(0.0, 0.0, -1e-4)));
    }
}
