//! Per-frame state of the spinning cube.
//!
//! [`RenderState`] owns the rotation angle and every matrix derived from it. It never touches
//! OpenGL, so the whole update/render protocol can be driven from tests.

use glam::Mat4;

use super::transform;
use crate::config::{CameraConfig, CubeConfig};

/// Whether the cube has started turning.
///
/// The loop starts out [`Phase::WarmingUp`]; the first rendered frame moves it to
/// [`Phase::Running`], and only then do updates advance the angle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    WarmingUp,
    Running,
}

/// A GL viewport rectangle in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Viewport {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            x: 0,
            y: 0,
            width: width as i32,
            height: height as i32,
        }
    }
}

/// The uniforms of the cube shader.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UniformSlot {
    MvpMatrix,
    NormalMatrix,
    Color,
}

impl UniformSlot {
    pub const ALL: [UniformSlot; 3] = [Self::MvpMatrix, Self::NormalMatrix, Self::Color];

    /// Name of the uniform in the shader source.
    pub fn name(self) -> &'static str {
        match self {
            Self::MvpMatrix => "uMvpMatrix",
            Self::NormalMatrix => "uNormalMatrix",
            Self::Color => "uColor",
        }
    }
}

/// Matrices to upload for a single frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameUniforms {
    pub mvp: Mat4,
    pub normal: Mat4,
}

impl FrameUniforms {
    /// Every uniform write a frame performs, in upload order. The color is set once at load
    /// and is never among them.
    pub fn writes(&self) -> [(UniformSlot, Mat4); 2] {
        [
            (UniformSlot::NormalMatrix, self.normal),
            (UniformSlot::MvpMatrix, self.mvp),
        ]
    }
}

pub struct RenderState {
    cube: CubeConfig,
    camera: CameraConfig,
    phase: Phase,
    angle: f32,
    view: Mat4,
    projection: Mat4,
    model: Mat4,
    mvp: Mat4,
    viewport: Viewport,
}

impl RenderState {
    /// Sets up the state for a freshly loaded `width` x `height` surface: fixed view, identity
    /// model and a projection for the initial size.
    pub fn new(camera: CameraConfig, cube: CubeConfig, width: u32, height: u32) -> Self {
        let view = transform::view(&camera);
        let projection = transform::projection(&camera, width, height);
        let model = Mat4::IDENTITY;

        Self {
            cube,
            camera,
            phase: Phase::WarmingUp,
            angle: 0.0,
            view,
            projection,
            model,
            mvp: transform::mvp(model, view, projection),
            viewport: Viewport::new(width, height),
        }
    }

    /// Recomputes the projection for a new surface size and returns the viewport to apply.
    ///
    /// Leaves the MVP alone; the next update picks up the new projection.
    pub fn resize(&mut self, width: u32, height: u32) -> Viewport {
        self.projection = transform::projection(&self.camera, width, height);
        self.viewport = Viewport::new(width, height);
        self.viewport
    }

    /// Advances the rotation by `elapsed` seconds. Does nothing until a frame has been
    /// rendered.
    pub fn update(&mut self, elapsed: f32) {
        if self.phase == Phase::WarmingUp {
            return;
        }

        self.angle = (self.angle + self.cube.degrees_per_second * elapsed).rem_euclid(360.0);
        self.model = transform::model(self.cube.scale, self.angle);
        self.mvp = transform::mvp(self.model, self.view, self.projection);
    }

    /// Marks a frame as rendered and returns the matrices it should be drawn with.
    pub fn begin_frame(&mut self) -> FrameUniforms {
        if self.phase == Phase::WarmingUp {
            log::debug!("First frame rendered, starting rotation");
            self.phase = Phase::Running;
        }

        FrameUniforms {
            mvp: self.mvp,
            normal: transform::normal_matrix(self.model, self.cube.normal_matrix),
        }
    }

    #[cfg(test)]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Current rotation about +Y, in degrees within `[0, 360)`.
    pub fn angle(&self) -> f32 {
        self.angle
    }

    #[cfg(test)]
    pub fn projection(&self) -> Mat4 {
        self.projection
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{CAMERA, CUBE, NormalMatrixMode};

    fn state() -> RenderState {
        RenderState::new(CAMERA, CUBE, 250, 250)
    }

    fn assert_angle(state: &RenderState, expected: f32) {
        assert!(
            (state.angle() - expected).abs() < 1e-3,
            "angle {} != {expected}",
            state.angle()
        );
    }

    #[test]
    fn updates_before_first_frame_do_not_rotate() {
        let mut s = state();
        s.update(1.0);
        s.update(0.25);
        assert_eq!(s.phase(), Phase::WarmingUp);
        assert_eq!(s.angle(), 0.0);
        assert_eq!(s.begin_frame().normal, Mat4::IDENTITY);
    }

    #[test]
    fn first_frame_starts_rotation() {
        let mut s = state();
        s.update(1.0 / 60.0);
        s.begin_frame();
        assert_eq!(s.phase(), Phase::Running);

        let mut angles = Vec::new();
        for dt in [0.0, 0.5, 0.5] {
            s.update(dt);
            angles.push(s.angle());
            s.begin_frame();
        }
        assert_eq!(angles, vec![0.0, 40.0, 80.0]);
    }

    #[test]
    fn angle_accumulates_and_wraps() {
        let mut s = state();
        s.begin_frame();

        let ticks = [1.0 / 60.0; 30];
        for dt in ticks {
            s.update(dt);
            s.begin_frame();
        }
        assert_angle(&s, 80.0 * 30.0 / 60.0);

        for _ in 0..8 {
            s.update(1.0);
        }
        // 40 + 640 = 680 -> 320
        assert_angle(&s, 320.0);
        assert!((0.0..360.0).contains(&s.angle()));
    }

    #[test]
    fn update_rebuilds_mvp_from_angle() {
        let mut s = state();
        s.begin_frame();
        s.update(0.5);

        let view = transform::view(&CAMERA);
        let projection = transform::projection(&CAMERA, 250, 250);
        let model = transform::model(2.0, 40.0);
        let frame = s.begin_frame();
        assert!(frame.mvp.abs_diff_eq(transform::mvp(model, view, projection), 1e-5));
        assert!(frame.normal.abs_diff_eq(model, 1e-6));
    }

    #[test]
    fn inverse_transpose_mode_is_honored() {
        let cube = CubeConfig {
            normal_matrix: NormalMatrixMode::InverseTranspose,
            ..CUBE
        };
        let mut s = RenderState::new(CAMERA, cube, 250, 250);
        s.begin_frame();
        s.update(0.0);
        let expected = transform::normal_matrix(
            transform::model(2.0, 0.0),
            NormalMatrixMode::InverseTranspose,
        );
        assert!(s.begin_frame().normal.abs_diff_eq(expected, 1e-6));
    }

    #[test]
    fn resize_updates_projection_and_viewport() {
        let mut s = state();
        let viewport = s.resize(500, 250);
        assert_eq!(
            viewport,
            Viewport {
                x: 0,
                y: 0,
                width: 500,
                height: 250
            }
        );
        assert_eq!(s.viewport(), viewport);
        assert_eq!(s.projection(), transform::projection(&CAMERA, 500, 250));
        assert_eq!(s.phase(), Phase::WarmingUp);
    }

    #[test]
    fn resize_applies_on_next_update() {
        let mut s = state();
        s.begin_frame();
        let before = s.begin_frame().mvp;
        s.resize(500, 250);
        assert_eq!(s.begin_frame().mvp, before);

        s.update(0.0);
        let wide = transform::mvp(
            transform::model(2.0, 0.0),
            transform::view(&CAMERA),
            transform::projection(&CAMERA, 500, 250),
        );
        assert!(s.begin_frame().mvp.abs_diff_eq(wide, 1e-5));
    }

    #[test]
    fn frames_never_write_the_color() {
        let mut s = state();
        for _ in 0..120 {
            s.update(1.0 / 60.0);
            let frame = s.begin_frame();
            let slots: Vec<UniformSlot> = frame.writes().iter().map(|&(slot, _)| slot).collect();
            assert_eq!(slots, vec![UniformSlot::NormalMatrix, UniformSlot::MvpMatrix]);
        }
    }

    #[test]
    fn writes_carry_the_frame_matrices() {
        let mut s = state();
        s.begin_frame();
        s.update(0.25);
        let frame = s.begin_frame();
        assert_eq!(
            frame.writes(),
            [
                (UniformSlot::NormalMatrix, frame.normal),
                (UniformSlot::MvpMatrix, frame.mvp)
            ]
        );
    }
}
