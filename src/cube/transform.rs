//! Matrix construction for the cube.
//!
//! glam uses column vectors, so the classic row-vector `model * view * projection` chain is
//! written here as `projection * view * model`.

use glam::{Mat4, Vec3};

use crate::config::{CameraConfig, NormalMatrixMode};

/// The fixed view matrix of the camera.
pub fn view(camera: &CameraConfig) -> Mat4 {
    Mat4::look_at_rh(camera.eye, camera.target, camera.up)
}

/// Aspect ratio of a `width` x `height` surface. A zero height (minimized window) is treated
/// as one pixel tall.
pub fn aspect(width: u32, height: u32) -> f32 {
    width as f32 / height.max(1) as f32
}

/// OpenGL perspective projection for a `width` x `height` surface.
pub fn projection(camera: &CameraConfig, width: u32, height: u32) -> Mat4 {
    Mat4::perspective_rh_gl(
        camera.fov_y.to_radians(),
        aspect(width, height),
        camera.near,
        camera.far,
    )
}

/// Uniform scale followed by a rotation of `angle_degrees` about +Y.
pub fn model(scale: f32, angle_degrees: f32) -> Mat4 {
    Mat4::from_rotation_y(angle_degrees.to_radians()) * Mat4::from_scale(Vec3::splat(scale))
}

pub fn mvp(model: Mat4, view: Mat4, projection: Mat4) -> Mat4 {
    projection * view * model
}

/// The matrix used to transform normals in the vertex shader.
pub fn normal_matrix(model: Mat4, mode: NormalMatrixMode) -> Mat4 {
    match mode {
        NormalMatrixMode::Model => model,
        NormalMatrixMode::InverseTranspose => model.inverse().transpose(),
    }
}

#[cfg(test)]
mod tests {
    use glam::Vec4;

    use super::*;
    use crate::config::CAMERA;

    const EPS: f32 = 1e-5;

    fn assert_mat_eq(a: Mat4, b: Mat4) {
        assert!(a.abs_diff_eq(b, EPS), "\n{a:?}\n!=\n{b:?}");
    }

    /// Builds the expected perspective matrix entry by entry.
    fn expected_projection(fov_deg: f32, aspect: f32, near: f32, far: f32) -> Mat4 {
        let f = 1.0 / (fov_deg.to_radians() / 2.0).tan();
        Mat4::from_cols(
            Vec4::new(f / aspect, 0.0, 0.0, 0.0),
            Vec4::new(0.0, f, 0.0, 0.0),
            Vec4::new(0.0, 0.0, (far + near) / (near - far), -1.0),
            Vec4::new(0.0, 0.0, 2.0 * far * near / (near - far), 0.0),
        )
    }

    #[test]
    fn projection_is_forty_degree_perspective() {
        for (w, h) in [(250, 250), (500, 250), (640, 480), (250, 500)] {
            let expected = expected_projection(40.0, w as f32 / h as f32, 0.1, 100.0);
            assert_mat_eq(projection(&CAMERA, w, h), expected);
        }
    }

    #[test]
    fn widening_the_window_doubles_the_aspect() {
        assert_eq!(aspect(250, 250), 1.0);
        assert_eq!(aspect(500, 250), 2.0);
        let square = projection(&CAMERA, 250, 250);
        let wide = projection(&CAMERA, 500, 250);
        assert!((square.x_axis.x / wide.x_axis.x - 2.0).abs() < EPS);
        assert_eq!(square.y_axis.y, wide.y_axis.y);
    }

    #[test]
    fn zero_height_does_not_divide_by_zero() {
        assert!(projection(&CAMERA, 250, 0).is_finite());
    }

    #[test]
    fn view_places_target_straight_ahead() {
        let v = view(&CAMERA);
        let eye_space = v * Vec4::new(0.0, 0.0, 0.0, 1.0);
        let distance = CAMERA.eye.length();
        assert!(eye_space.truncate().truncate().length() < EPS);
        assert!((eye_space.z + distance).abs() < EPS);
    }

    #[test]
    fn model_scales_then_rotates() {
        let m = model(2.0, 90.0);
        // +X scaled to 2, then rotated 90 degrees about Y lands on -Z.
        let p = m.transform_point3(Vec3::X);
        assert!(p.abs_diff_eq(Vec3::new(0.0, 0.0, -2.0), EPS));
        assert_mat_eq(model(2.0, 0.0), Mat4::from_scale(Vec3::splat(2.0)));
    }

    #[test]
    fn mvp_applies_model_first() {
        let m = model(2.0, 30.0);
        let v = view(&CAMERA);
        let p = projection(&CAMERA, 250, 250);
        let point = Vec4::new(1.0, -1.0, 1.0, 1.0);
        let stepwise = p * (v * (m * point));
        assert!((mvp(m, v, p) * point).abs_diff_eq(stepwise, 1e-3));
    }

    #[test]
    fn normal_matrix_modes_agree_on_direction() {
        let m = model(2.0, 123.0);
        let raw = normal_matrix(m, NormalMatrixMode::Model);
        let fixed = normal_matrix(m, NormalMatrixMode::InverseTranspose);
        assert_mat_eq(raw, m);
        for n in [Vec3::X, Vec3::Y, Vec3::Z, -Vec3::X] {
            let a = raw.transform_vector3(n).normalize();
            let b = fixed.transform_vector3(n).normalize();
            assert!(a.abs_diff_eq(b, EPS));
        }
    }

    #[test]
    fn inverse_transpose_undoes_uniform_scale() {
        let fixed = normal_matrix(model(2.0, 0.0), NormalMatrixMode::InverseTranspose);
        assert_mat_eq(fixed, Mat4::from_scale(Vec3::splat(0.5)));
    }
}
