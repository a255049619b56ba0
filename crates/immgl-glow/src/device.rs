use std::rc::Rc;

use anyhow::{Result, anyhow, bail};
use glam::{Mat4, Vec3};
use glow::HasContext;

use immgl::device::{BufferKind, ContextFlavor, Device, DrawMode, VertexAttribute};

/// Native GL enum for a draw topology.
pub fn draw_mode(mode: DrawMode) -> u32 {
    match mode {
        DrawMode::Points => glow::POINTS,
        DrawMode::Lines => glow::LINES,
        DrawMode::LineLoop => glow::LINE_LOOP,
        DrawMode::LineStrip => glow::LINE_STRIP,
        DrawMode::Triangles => glow::TRIANGLES,
        DrawMode::TriangleStrip => glow::TRIANGLE_STRIP,
        DrawMode::TriangleFan => glow::TRIANGLE_FAN,
    }
}

fn buffer_target(kind: BufferKind) -> u32 {
    match kind {
        BufferKind::Vertex => glow::ARRAY_BUFFER,
        BufferKind::Index => glow::ELEMENT_ARRAY_BUFFER,
    }
}

/// [`Device`] over a live GL or GLES context.
///
/// Every method assumes the wrapped context is current on the calling thread.
pub struct GlowDevice {
    gl: Rc<glow::Context>,
    flavor: ContextFlavor,
}

impl GlowDevice {
    pub fn new(gl: Rc<glow::Context>) -> Self {
        let flavor = if gl.version().is_embedded {
            ContextFlavor::Embedded
        } else {
            ContextFlavor::Desktop
        };
        log::debug!("glow device: {:?} ({flavor:?})", gl.version());
        Self { gl, flavor }
    }

    #[inline]
    pub fn gl(&self) -> &glow::Context {
        &self.gl
    }

    fn compile(&self, stage: u32, source: &str) -> Result<glow::Shader> {
        let gl = &self.gl;
        unsafe {
            let shader = gl.create_shader(stage).map_err(|e| anyhow!("create_shader: {e}"))?;
            gl.shader_source(shader, source);
            gl.compile_shader(shader);
            if !gl.get_shader_compile_status(shader) {
                let log = gl.get_shader_info_log(shader);
                gl.delete_shader(shader);
                let name = if stage == glow::VERTEX_SHADER { "vertex" } else { "fragment" };
                bail!("{name} shader compilation failed: {log}");
            }
            Ok(shader)
        }
    }
}

impl Device for GlowDevice {
    type Program = glow::Program;
    type Buffer = glow::Buffer;
    type VertexArray = glow::VertexArray;
    type Uniform = glow::UniformLocation;

    fn flavor(&self) -> ContextFlavor {
        self.flavor
    }

    // ── programs ──────────────────────────────────────────────────────────

    fn create_program(&mut self, vertex: &str, fragment: &str) -> Result<glow::Program> {
        let vs = self.compile(glow::VERTEX_SHADER, vertex)?;
        let fs = match self.compile(glow::FRAGMENT_SHADER, fragment) {
            Ok(fs) => fs,
            Err(e) => {
                unsafe { self.gl.delete_shader(vs) };
                return Err(e);
            }
        };

        let gl = &self.gl;
        unsafe {
            let program = match gl.create_program() {
                Ok(p) => p,
                Err(e) => {
                    gl.delete_shader(vs);
                    gl.delete_shader(fs);
                    bail!("create_program: {e}");
                }
            };
            gl.attach_shader(program, vs);
            gl.attach_shader(program, fs);
            gl.link_program(program);
            let linked = gl.get_program_link_status(program);
            gl.detach_shader(program, vs);
            gl.detach_shader(program, fs);
            gl.delete_shader(vs);
            gl.delete_shader(fs);

            if !linked {
                let log = gl.get_program_info_log(program);
                gl.delete_program(program);
                bail!("program link failed: {log}");
            }
            Ok(program)
        }
    }

    fn delete_program(&mut self, program: glow::Program) {
        unsafe { self.gl.delete_program(program) };
    }

    fn uniform_location(&mut self, program: glow::Program, name: &str) -> Option<glow::UniformLocation> {
        unsafe { self.gl.get_uniform_location(program, name) }
    }

    fn use_program(&mut self, program: Option<glow::Program>) {
        unsafe { self.gl.use_program(program) };
    }

    fn set_uniform_mat4(&mut self, uniform: &glow::UniformLocation, value: &Mat4) {
        unsafe {
            self.gl
                .uniform_matrix_4_f32_slice(Some(uniform), false, &value.to_cols_array());
        }
    }

    fn set_uniform_vec3(&mut self, uniform: &glow::UniformLocation, value: Vec3) {
        unsafe { self.gl.uniform_3_f32(Some(uniform), value.x, value.y, value.z) };
    }

    // ── transient objects ─────────────────────────────────────────────────

    fn create_vertex_array(&mut self) -> Result<glow::VertexArray> {
        unsafe {
            let vao = self
                .gl
                .create_vertex_array()
                .map_err(|e| anyhow!("create_vertex_array: {e}"))?;
            self.gl.bind_vertex_array(Some(vao));
            Ok(vao)
        }
    }

    fn delete_vertex_array(&mut self, vao: glow::VertexArray) {
        unsafe {
            self.gl.bind_vertex_array(None);
            self.gl.delete_vertex_array(vao);
        }
    }

    fn create_buffer(&mut self, kind: BufferKind, contents: &[u8]) -> Result<glow::Buffer> {
        let target = buffer_target(kind);
        unsafe {
            let buffer = self
                .gl
                .create_buffer()
                .map_err(|e| anyhow!("create_buffer ({kind:?}): {e}"))?;
            self.gl.bind_buffer(target, Some(buffer));
            self.gl.buffer_data_u8_slice(target, contents, glow::STATIC_DRAW);
            Ok(buffer)
        }
    }

    fn delete_buffer(&mut self, buffer: glow::Buffer) {
        unsafe { self.gl.delete_buffer(buffer) };
    }

    fn vertex_attribute(&mut self, attribute: VertexAttribute) {
        unsafe {
            self.gl.vertex_attrib_pointer_f32(
                attribute.location,
                attribute.components as i32,
                glow::FLOAT,
                false,
                attribute.stride as i32,
                attribute.offset as i32,
            );
            self.gl.enable_vertex_attrib_array(attribute.location);
        }
    }

    // ── draws ─────────────────────────────────────────────────────────────

    fn draw_arrays(&mut self, mode: DrawMode, count: u32) {
        unsafe { self.gl.draw_arrays(draw_mode(mode), 0, count as i32) };
    }

    fn draw_indexed(&mut self, mode: DrawMode, count: u32) {
        unsafe {
            self.gl
                .draw_elements(draw_mode(mode), count as i32, glow::UNSIGNED_INT, 0);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn draw_modes_map_to_gl_enums() {
        assert_eq!(draw_mode(DrawMode::Points), 0x0000);
        assert_eq!(draw_mode(DrawMode::LineLoop), 0x0002);
        assert_eq!(draw_mode(DrawMode::Triangles), 0x0004);
        assert_eq!(draw_mode(DrawMode::TriangleFan), 0x0006);
    }

    #[test]
    fn buffer_targets() {
        assert_eq!(buffer_target(BufferKind::Vertex), glow::ARRAY_BUFFER);
        assert_eq!(buffer_target(BufferKind::Index), glow::ELEMENT_ARRAY_BUFFER);
    }
}
