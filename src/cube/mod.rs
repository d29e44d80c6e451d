//! The cube itself: its geometry, its transforms and its per-frame state.
//!
//! Nothing in here talks to OpenGL.

pub mod geometry;
pub mod state;
pub mod transform;
