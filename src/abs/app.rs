//! SDL2 and OpenGL application management.
//!
//! This module defines the [`App`] struct which encapsulates the SDL2
//! and OpenGL context necessary for creating a windowed application.

use std::sync::Arc;

use crate::config::WindowConfig;

/// The [`App`] struct encapsulates the SDL2 and OpenGL context.
pub struct App {
    pub sdl: sdl2::Sdl,
    pub video_subsystem: sdl2::VideoSubsystem,
    pub window: sdl2::video::Window,
    pub gl_context: sdl2::video::GLContext,
    pub gl: Arc<glow::Context>,
    pub event_pump: sdl2::EventPump,
}

impl App {
    /// Opens a resizable window described by `config` with a current OpenGL 3.3 core context.
    pub fn new(config: &WindowConfig) -> Result<Self, String> {
        let sdl = sdl2::init()?;
        let video_subsystem = sdl.video()?;

        let gl_attr = video_subsystem.gl_attr();
        gl_attr.set_context_profile(sdl2::video::GLProfile::Core);
        gl_attr.set_context_version(3, 3);
        gl_attr.set_double_buffer(true);
        let channel_bits = config.color_bits / 4;
        gl_attr.set_red_size(channel_bits);
        gl_attr.set_green_size(channel_bits);
        gl_attr.set_blue_size(channel_bits);
        gl_attr.set_alpha_size(channel_bits);
        gl_attr.set_depth_size(config.depth_bits);
        gl_attr.set_stencil_size(config.stencil_bits);
        if config.samples > 0 {
            gl_attr.set_multisample_buffers(1);
            gl_attr.set_multisample_samples(config.samples);
        }

        let window = video_subsystem
            .window(config.title, config.width, config.height)
            .opengl()
            .resizable()
            .build()
            .map_err(|e| e.to_string())?;
        let gl_context = window.gl_create_context()?;
        window.gl_make_current(&gl_context)?;

        let gl = unsafe {
            glow::Context::from_loader_function(|s| {
                video_subsystem.gl_get_proc_address(s) as *const _
            })
        };
        let event_pump = sdl.event_pump()?;
        let gl = Arc::new(gl);

        log::info!(
            "Opened {}x{} window \"{}\" (depth {}, stencil {}, {} samples)",
            config.width,
            config.height,
            config.title,
            gl_attr.depth_size(),
            gl_attr.stencil_size(),
            gl_attr.multisample_samples()
        );
        if gl_attr.multisample_samples() < config.samples {
            log::warn!(
                "Requested {} samples, driver granted {}",
                config.samples,
                gl_attr.multisample_samples()
            );
        }

        Ok(Self {
            sdl,
            video_subsystem,
            window,
            gl_context,
            gl,
            event_pump,
        })
    }

    /// Size of the drawable surface in pixels, which can differ from the window size on
    /// high-DPI displays.
    pub fn drawable_size(&self) -> (u32, u32) {
        self.window.drawable_size()
    }
}
