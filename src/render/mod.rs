//! Module for anything related to rendering.
//!
//! This module contains the cube renderer and the shaders it embeds.

pub mod cube_renderer;
