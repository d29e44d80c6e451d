//! Mesh management module.
//!
//! This module defines the [`Mesh`] struct for managing mesh data on the GPU side. Each vertex
//! attribute lives in its own tightly packed buffer and is bound to a shader attribute by name.

use std::sync::Arc;

use glow::HasContext;

use crate::abs::ShaderProgram;

/// One non-interleaved float attribute stream.
pub struct Attribute<'a> {
    /// Name of the `in` variable in the vertex shader.
    pub name: &'a str,
    /// Floats per vertex.
    pub components: i32,
    pub data: &'a [f32],
}

/// Represents a mesh stored on the GPU side.
pub struct Mesh {
    gl: Arc<glow::Context>,
    draw_mode: u32,
    vao: glow::VertexArray,
    attribute_buffers: Vec<(glow::Buffer, usize)>,
    ebo: glow::Buffer,
    index_count: usize,
}

impl Mesh {
    /// Uploads the attribute streams and indices once, binding every stream to the attribute
    /// of the same name in `program`. Streams whose name the program does not know are still
    /// uploaded but left disabled.
    pub fn new(
        gl: &Arc<glow::Context>,
        program: &ShaderProgram,
        attributes: &[Attribute],
        indices: &[u32],
        draw_mode: u32,
    ) -> Result<Self, String> {
        unsafe {
            let vao = gl.create_vertex_array()?;
            let ebo = match gl.create_buffer() {
                Ok(ebo) => ebo,
                Err(e) => {
                    gl.delete_vertex_array(vao);
                    return Err(e);
                }
            };

            // From here on `Drop` owns every object, so an early return cleans up.
            let mut mesh = Self {
                gl: Arc::clone(gl),
                draw_mode,
                vao,
                attribute_buffers: Vec::with_capacity(attributes.len()),
                ebo,
                index_count: indices.len(),
            };

            gl.bind_vertex_array(Some(vao));

            for attribute in attributes {
                let vbo = gl.create_buffer()?;
                mesh.attribute_buffers.push((vbo, attribute.data.len()));

                gl.bind_buffer(glow::ARRAY_BUFFER, Some(vbo));
                gl.buffer_data_u8_slice(
                    glow::ARRAY_BUFFER,
                    bytemuck::cast_slice(attribute.data),
                    glow::STATIC_DRAW,
                );

                if let Some(location) = program.attrib_location(attribute.name) {
                    gl.vertex_attrib_pointer_f32(
                        location,
                        attribute.components,
                        glow::FLOAT,
                        false,
                        0,
                        0,
                    );
                    gl.enable_vertex_attrib_array(location);
                }
            }

            gl.bind_buffer(glow::ELEMENT_ARRAY_BUFFER, Some(ebo));
            gl.buffer_data_u8_slice(
                glow::ELEMENT_ARRAY_BUFFER,
                bytemuck::cast_slice(indices),
                glow::STATIC_DRAW,
            );

            gl.bind_vertex_array(None);
            gl.bind_buffer(glow::ARRAY_BUFFER, None);
            gl.bind_buffer(glow::ELEMENT_ARRAY_BUFFER, None);

            Ok(mesh)
        }
    }

    /// Draws the mesh.
    pub fn draw(&self) {
        unsafe {
            self.gl.bind_vertex_array(Some(self.vao));
            self.gl
                .draw_elements(self.draw_mode, self.index_count as i32, glow::UNSIGNED_INT, 0);
            self.gl.bind_vertex_array(None);
        }
    }

    /// Reads every buffer back from the GPU: the attribute streams in upload order, then the
    /// indices.
    pub fn read_back(&self) -> (Vec<Vec<f32>>, Vec<u32>) {
        unsafe {
            let attributes = self
                .attribute_buffers
                .iter()
                .map(|&(vbo, len)| {
                    self.gl.bind_buffer(glow::ARRAY_BUFFER, Some(vbo));
                    read_typed(len, |bytes| {
                        self.gl.get_buffer_sub_data(glow::ARRAY_BUFFER, 0, bytes)
                    })
                })
                .collect();
            self.gl.bind_buffer(glow::ARRAY_BUFFER, None);

            // The element buffer binding is VAO state, so read it through the VAO.
            self.gl.bind_vertex_array(Some(self.vao));
            let indices = read_typed(self.index_count, |bytes| {
                self.gl
                    .get_buffer_sub_data(glow::ELEMENT_ARRAY_BUFFER, 0, bytes)
            });
            self.gl.bind_vertex_array(None);

            (attributes, indices)
        }
    }

    /// Number of indices drawn per call.
    pub fn index_count(&self) -> usize {
        self.index_count
    }
}

impl Drop for Mesh {
    fn drop(&mut self) {
        unsafe {
            for &(vbo, _) in &self.attribute_buffers {
                self.gl.delete_buffer(vbo);
            }
            self.gl.delete_buffer(self.ebo);
            self.gl.delete_vertex_array(self.vao);
        }
    }
}

/// Allocates `len` zeroed values and lets `fill` write their raw bytes.
fn read_typed<T: bytemuck::Pod>(len: usize, fill: impl FnOnce(&mut [u8])) -> Vec<T> {
    let mut values = vec![T::zeroed(); len];
    fill(bytemuck::cast_slice_mut(&mut values));
    values
}
