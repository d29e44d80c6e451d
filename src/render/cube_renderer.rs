//! The GPU side of the cube: shader program, uploaded geometry and the per-frame draw.

use std::sync::Arc;

use glow::HasContext;

use crate::{
    abs::{Attribute, Mesh, ShaderProgram},
    config::CubeConfig,
    cube::{
        geometry,
        state::{FrameUniforms, UniformSlot, Viewport},
    },
};

const VERTEX_SHADER: &str = include_str!("shaders/cube/vert.glsl");
const FRAGMENT_SHADER: &str = include_str!("shaders/cube/frag.glsl");

pub struct CubeRenderer {
    gl: Arc<glow::Context>,
    program: ShaderProgram,
    mesh: Mesh,
    uniforms: [Option<glow::UniformLocation>; UniformSlot::ALL.len()],
}

impl CubeRenderer {
    /// Compiles the cube shader, uploads the cube and sets up the fixed GL state.
    ///
    /// Leaves the program bound; it is the only one ever used.
    pub fn load(gl: &Arc<glow::Context>, cube: &CubeConfig) -> Result<Self, String> {
        let program = ShaderProgram::from_sources(gl, VERTEX_SHADER, FRAGMENT_SHADER)?;
        program.use_program();

        let mesh = Mesh::new(
            gl,
            &program,
            &[
                Attribute {
                    name: "aPosition",
                    components: 3,
                    data: &geometry::POSITIONS,
                },
                Attribute {
                    name: "aNormal",
                    components: 3,
                    data: &geometry::NORMALS,
                },
            ],
            &geometry::INDICES,
            glow::TRIANGLES,
        )?;

        let uniforms = UniformSlot::ALL.map(|slot| program.uniform_location(slot.name()));
        program.set_uniform(uniforms[UniformSlot::Color as usize].as_ref(), &cube.color);

        unsafe {
            gl.clear_color(0.0, 0.0, 0.0, 1.0);
            gl.enable(glow::DEPTH_TEST);
            gl.enable(glow::MULTISAMPLE);
        }

        log::info!("Loaded cube with {} indices", mesh.index_count());

        Ok(Self {
            gl: Arc::clone(gl),
            program,
            mesh,
            uniforms,
        })
    }

    pub fn resize(&self, viewport: Viewport) {
        unsafe {
            self.gl
                .viewport(viewport.x, viewport.y, viewport.width, viewport.height);
        }
    }

    /// Clears the frame and draws the cube with `uniforms`.
    pub fn draw(&self, uniforms: &FrameUniforms) {
        unsafe {
            self.gl
                .clear(glow::COLOR_BUFFER_BIT | glow::DEPTH_BUFFER_BIT);
        }

        for (slot, value) in uniforms.writes() {
            self.program
                .set_uniform(self.uniforms[slot as usize].as_ref(), value);
        }
        self.mesh.draw();
    }

    /// Checks that the GPU copies of the geometry are bit-identical to the constants they
    /// were uploaded from.
    pub fn verify_upload(&self) -> Result<(), String> {
        let (attributes, indices) = self.mesh.read_back();
        let expected: [&[f32]; 2] = [&geometry::POSITIONS, &geometry::NORMALS];

        for (name, (actual, expected)) in ["positions", "normals"]
            .iter()
            .zip(attributes.iter().zip(expected))
        {
            let same = actual.len() == expected.len()
                && actual
                    .iter()
                    .zip(expected)
                    .all(|(a, b)| a.to_bits() == b.to_bits());
            if !same {
                return Err(format!("Uploaded {name} differ from the cube geometry"));
            }
        }
        if indices != geometry::INDICES {
            return Err("Uploaded indices differ from the cube geometry".to_string());
        }
        Ok(())
    }
}
