use std::time::{Duration, Instant};

use sdl2::event::{Event, WindowEvent};

use crate::{
    abs::App,
    config::{CAMERA, CUBE, WINDOW},
    cube::state::RenderState,
    render::cube_renderer::CubeRenderer,
};

mod abs;
mod config;
mod cube;
mod logger;
mod render;

fn main() {
    if let Err(e) = logger::init() {
        eprintln!("Failed to set up logging: {e}");
    }

    if let Err(e) = run() {
        log::error!("{e}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let mut app = App::new(&WINDOW)?;

    let renderer = CubeRenderer::load(&app.gl, &CUBE)?;
    if cfg!(debug_assertions) {
        renderer.verify_upload()?;
    }

    let (width, height) = app.drawable_size();
    let mut state = RenderState::new(CAMERA, CUBE, width, height);
    renderer.resize(state.viewport());

    let frame_budget = Duration::from_secs_f32(WINDOW.frame_budget());
    let mut last_tick = Instant::now();

    'running: loop {
        let frame_start = Instant::now();
        let elapsed = frame_start.duration_since(last_tick).as_secs_f32();
        last_tick = frame_start;

        for event in app.event_pump.poll_iter() {
            match event {
                Event::Quit { .. } => break 'running,
                Event::Window {
                    win_event: WindowEvent::SizeChanged(..),
                    ..
                } => {
                    let (width, height) = app.window.drawable_size();
                    log::debug!(
                        "Resized to {width}x{height} (aspect {:.3})",
                        crate::cube::transform::aspect(width, height)
                    );
                    renderer.resize(state.resize(width, height));
                }
                _ => {}
            }
        }

        state.update(elapsed);
        renderer.draw(&state.begin_frame());
        app.window.gl_swap_window();

        if let Some(rest) = frame_budget.checked_sub(frame_start.elapsed()) {
            std::thread::sleep(rest);
        }
    }

    log::info!("Window closed at {:.1} degrees, shutting down", state.angle());
    Ok(())
}
