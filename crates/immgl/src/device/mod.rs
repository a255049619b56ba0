//! The device seam.
//!
//! Everything the context needs from a graphics backend goes through
//! [`Device`]: program creation and uniform lookup, transient buffer and vertex
//! array objects, attribute layout and draw submission.
//!
//! Calls are synchronous. Allocation may fail; everything else is treated as
//! infallible at this layer.

mod trace;

pub use trace::{Op, TraceDevice};

use std::fmt::Debug;

use anyhow::Result;
use glam::{Mat4, Vec3};

/// Shading-language flavor of the underlying context.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub enum ContextFlavor {
    /// OpenGL ES 3.0+ style context.
    Embedded,
    /// Desktop OpenGL 3.3+ core style context.
    #[default]
    Desktop,
}

/// Topologies the device draws natively.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum DrawMode {
    Points,
    Lines,
    LineLoop,
    LineStrip,
    Triangles,
    TriangleStrip,
    TriangleFan,
}

/// Buffer binding target.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum BufferKind {
    Vertex,
    Index,
}

/// Float vertex attribute read from the currently bound vertex buffer.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct VertexAttribute {
    /// Shader location.
    pub location: u32,
    /// Number of `f32` components.
    pub components: u32,
    /// Bytes between consecutive vertices.
    pub stride: u32,
    /// Byte offset of the first component.
    pub offset: u32,
}

/// Backend operations used by the immediate-mode context.
pub trait Device {
    type Program: Copy + Debug;
    type Buffer: Copy + Debug;
    type VertexArray: Copy + Debug;
    type Uniform: Clone + Debug;

    fn flavor(&self) -> ContextFlavor;

    // ── programs ──────────────────────────────────────────────────────────

    /// Compiles and links a vertex + fragment pair given as complete sources.
    fn create_program(&mut self, vertex: &str, fragment: &str) -> Result<Self::Program>;

    fn delete_program(&mut self, program: Self::Program);

    /// `None` when the program has no active uniform of that name.
    fn uniform_location(&mut self, program: Self::Program, name: &str) -> Option<Self::Uniform>;

    fn use_program(&mut self, program: Option<Self::Program>);

    fn set_uniform_mat4(&mut self, uniform: &Self::Uniform, value: &Mat4);

    fn set_uniform_vec3(&mut self, uniform: &Self::Uniform, value: Vec3);

    // ── transient objects ─────────────────────────────────────────────────

    /// Creates a vertex array object and binds it.
    fn create_vertex_array(&mut self) -> Result<Self::VertexArray>;

    fn delete_vertex_array(&mut self, vao: Self::VertexArray);

    /// Creates a buffer, binds it to `kind` and uploads `contents` as static data.
    fn create_buffer(&mut self, kind: BufferKind, contents: &[u8]) -> Result<Self::Buffer>;

    fn delete_buffer(&mut self, buffer: Self::Buffer);

    /// Describes and enables one float attribute over the bound vertex buffer.
    fn vertex_attribute(&mut self, attribute: VertexAttribute);

    // ── draws ─────────────────────────────────────────────────────────────

    fn draw_arrays(&mut self, mode: DrawMode, count: u32);

    /// Draws `count` `u32` indices from the bound index buffer.
    fn draw_indexed(&mut self, mode: DrawMode, count: u32);
}

/// Lets a context borrow a device instead of owning it.
impl<D: Device + ?Sized> Device for &mut D {
    type Program = D::Program;
    type Buffer = D::Buffer;
    type VertexArray = D::VertexArray;
    type Uniform = D::Uniform;

    fn flavor(&self) -> ContextFlavor {
        (**self).flavor()
    }

    fn create_program(&mut self, vertex: &str, fragment: &str) -> Result<Self::Program> {
        (**self).create_program(vertex, fragment)
    }

    fn delete_program(&mut self, program: Self::Program) {
        (**self).delete_program(program)
    }

    fn uniform_location(&mut self, program: Self::Program, name: &str) -> Option<Self::Uniform> {
        (**self).uniform_location(program, name)
    }

    fn use_program(&mut self, program: Option<Self::Program>) {
        (**self).use_program(program)
    }

    fn set_uniform_mat4(&mut self, uniform: &Self::Uniform, value: &Mat4) {
        (**self).set_uniform_mat4(uniform, value)
    }

    fn set_uniform_vec3(&mut self, uniform: &Self::Uniform, value: Vec3) {
        (**self).set_uniform_vec3(uniform, value)
    }

    fn create_vertex_array(&mut self) -> Result<Self::VertexArray> {
        (**self).create_vertex_array()
    }

    fn delete_vertex_array(&mut self, vao: Self::VertexArray) {
        (**self).delete_vertex_array(vao)
    }

    fn create_buffer(&mut self, kind: BufferKind, contents: &[u8]) -> Result<Self::Buffer> {
        (**self).create_buffer(kind, contents)
    }

    fn delete_buffer(&mut self, buffer: Self::Buffer) {
        (**self).delete_buffer(buffer)
    }

    fn vertex_attribute(&mut self, attribute: VertexAttribute) {
        (**self).vertex_attribute(attribute)
    }

    fn draw_arrays(&mut self, mode: DrawMode, count: u32) {
        (**self).draw_arrays(mode, count)
    }

    fn draw_indexed(&mut self, mode: DrawMode, count: u32) {
        (**self).draw_indexed(mode, count)
    }
}
