//! Compile-time configuration for the window, camera and cube.
//!
//! Nothing here is read from disk or the environment; the values are the fixed parameters of
//! the demo.

use glam::{Vec3, Vec4};

/// Parameters of the SDL2 window and the OpenGL surface behind it.
#[derive(Debug, Clone, Copy)]
pub struct WindowConfig {
    pub title: &'static str,
    pub width: u32,
    pub height: u32,
    pub color_bits: u8,
    pub depth_bits: u8,
    pub stencil_bits: u8,
    /// Multisample count for antialiasing; 0 disables multisampling.
    pub samples: u8,
    pub target_fps: u32,
}

pub const WINDOW: WindowConfig = WindowConfig {
    title: "OpenGL 3, Rust",
    width: 250,
    height: 250,
    color_bits: 32,
    depth_bits: 24,
    stencil_bits: 8,
    samples: 8,
    target_fps: 60,
};

/// The fixed camera looking at the cube.
#[derive(Debug, Clone, Copy)]
pub struct CameraConfig {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    /// Vertical field of view, in degrees.
    pub fov_y: f32,
    pub near: f32,
    pub far: f32,
}

pub const CAMERA: CameraConfig = CameraConfig {
    eye: Vec3::new(3.0, 7.0, 10.0),
    target: Vec3::ZERO,
    up: Vec3::Y,
    fov_y: 40.0,
    near: 0.1,
    far: 100.0,
};

/// Which matrix gets uploaded as `uNormalMatrix`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NormalMatrixMode {
    /// The model matrix itself. Correct for this cube only because its scale is uniform.
    Model,
    /// The inverse-transpose of the model matrix. Select it by changing
    /// [`CUBE`]`.normal_matrix`.
    #[allow(dead_code, reason = "alternative to the default, chosen by editing CUBE")]
    InverseTranspose,
}

/// The cube's appearance and motion.
#[derive(Debug, Clone, Copy)]
pub struct CubeConfig {
    pub scale: f32,
    pub degrees_per_second: f32,
    pub color: Vec4,
    pub normal_matrix: NormalMatrixMode,
}

pub const CUBE: CubeConfig = CubeConfig {
    scale: 2.0,
    degrees_per_second: 80.0,
    color: Vec4::new(1.0, 0.0, 0.0, 1.0),
    normal_matrix: NormalMatrixMode::Model,
};

impl WindowConfig {
    /// The time budget of one frame at the target rate, in seconds.
    pub fn frame_budget(&self) -> f32 {
        1.0 / self.target_fps as f32
    }
}
