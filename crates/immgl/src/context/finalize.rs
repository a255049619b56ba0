//! Block finalization: one `end()` becomes one draw.
//!
//! Transient objects (vertex array, vertex buffer, index buffer) live for a
//! single `end()` call and are released on every path, including the empty
//! block and allocation failures.

use anyhow::{Context, Result};
use glam::{Mat4, Vec3};

use crate::device::{BufferKind, Device, DrawMode, VertexAttribute};
use crate::matrix::MatrixMode;
use crate::record::{quad_indices, Block, Vertex};
use crate::shader::{ShaderProgram, COLOR_LOCATION, POSITION_LOCATION};

use super::ImmediateContext;

const POSITION_ATTRIBUTE: VertexAttribute = VertexAttribute {
    location: POSITION_LOCATION,
    components: Vertex::COMPONENTS,
    stride: Vertex::STRIDE,
    offset: Vertex::POSITION_OFFSET,
};

const COLOR_ATTRIBUTE: VertexAttribute = VertexAttribute {
    location: COLOR_LOCATION,
    components: Vertex::COMPONENTS,
    stride: Vertex::STRIDE,
    offset: Vertex::COLOR_OFFSET,
};

/// Uniform values sampled at `end()`.
#[derive(Debug, Copy, Clone)]
struct Transforms {
    projection: Mat4,
    model_view: Mat4,
    normal: Vec3,
}

impl<D: Device> ImmediateContext<D> {
    /// Closes the open block and draws it. A no-op when no block is open.
    ///
    /// Uses the stack tops and normal current at this call, not at `begin`.
    /// If the device cannot allocate the transient objects the block is
    /// logged and discarded.
    pub fn end(&mut self) {
        let Some(block) = self.recorder.take() else {
            log::trace!("end without begin ignored");
            return;
        };

        let transforms = Transforms {
            projection: self.matrices.top(MatrixMode::Projection),
            model_view: self.matrices.top(MatrixMode::ModelView),
            normal: self.attribs.normal(),
        };

        if self.attribs.normalize_enabled() {
            log::trace!("normalize enabled; normals are passed through unchanged");
        }

        self.device.use_program(Some(self.shader.program));
        if let Err(err) = submit(&mut self.device, &self.shader, transforms, &block) {
            log::error!("immediate-mode {:?} block discarded: {err:#}", block.topology);
        }
        self.device.use_program(None);
    }
}

fn submit<D: Device>(
    device: &mut D,
    shader: &ShaderProgram<D>,
    transforms: Transforms,
    block: &Block,
) -> Result<()> {
    let vao = device
        .create_vertex_array()
        .context("failed to create vertex array")?;
    let result = upload_and_draw(device, shader, transforms, block);
    device.delete_vertex_array(vao);
    result
}

fn upload_and_draw<D: Device>(
    device: &mut D,
    shader: &ShaderProgram<D>,
    transforms: Transforms,
    block: &Block,
) -> Result<()> {
    let vbo = device
        .create_buffer(BufferKind::Vertex, bytemuck::cast_slice(&block.vertices))
        .context("failed to create vertex buffer")?;

    device.vertex_attribute(POSITION_ATTRIBUTE);
    device.vertex_attribute(COLOR_ATTRIBUTE);

    let uniforms = &shader.uniforms;
    if let Some(u) = &uniforms.projection {
        device.set_uniform_mat4(u, &transforms.projection);
    }
    if let Some(u) = &uniforms.model_view {
        device.set_uniform_mat4(u, &transforms.model_view);
    }
    if let Some(u) = &uniforms.normal {
        device.set_uniform_vec3(u, transforms.normal);
    }

    let result = draw(device, block);
    device.delete_buffer(vbo);
    result
}

fn draw<D: Device>(device: &mut D, block: &Block) -> Result<()> {
    let count = block.vertices.len();

    let Some(mode) = block.topology.native_mode() else {
        return draw_quads(device, count);
    };

    if count == 0 {
        log::trace!("empty {:?} block, nothing drawn", block.topology);
        return Ok(());
    }

    let count = u32::try_from(count).context("vertex count exceeds u32")?;
    log::debug!("drawing {count} vertices as {mode:?}");
    device.draw_arrays(mode, count);
    Ok(())
}

fn draw_quads<D: Device>(device: &mut D, vertex_count: usize) -> Result<()> {
    let leftover = vertex_count % 4;
    if leftover != 0 {
        log::debug!("quad block has {leftover} trailing vertices; dropped");
    }

    let count = quad_index_count(vertex_count)?;
    if count == 0 {
        log::trace!("quad block without a full quad, nothing drawn");
        return Ok(());
    }

    let indices = quad_indices(vertex_count);
    let ebo = device
        .create_buffer(BufferKind::Index, bytemuck::cast_slice(&indices))
        .context("failed to create index buffer")?;

    log::debug!("drawing {count} elements");
    device.draw_indexed(DrawMode::Triangles, count);
    device.delete_buffer(ebo);
    Ok(())
}

/// Index count for a quad block, checked before any index is generated.
fn quad_index_count(vertex_count: usize) -> Result<u32> {
    u32::try_from(vertex_count).context("quad vertex count exceeds u32")?;
    u32::try_from(vertex_count / 4 * 6).context("quad index count exceeds u32")
}
