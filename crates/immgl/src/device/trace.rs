use std::collections::BTreeSet;

use anyhow::{bail, Result};
use glam::{Mat4, Vec3};

use super::{BufferKind, ContextFlavor, Device, DrawMode, VertexAttribute};

/// One recorded device call.
#[derive(Debug, Clone, PartialEq)]
pub enum Op {
    CreateProgram { program: u32, vertex: String, fragment: String },
    DeleteProgram(u32),
    UseProgram(Option<u32>),
    SetUniformMat4 { name: String, value: Mat4 },
    SetUniformVec3 { name: String, value: Vec3 },
    CreateVertexArray(u32),
    DeleteVertexArray(u32),
    CreateBuffer { buffer: u32, kind: BufferKind, contents: Vec<u8> },
    DeleteBuffer(u32),
    VertexAttribute(VertexAttribute),
    DrawArrays { mode: DrawMode, count: u32 },
    DrawIndexed { mode: DrawMode, count: u32 },
}

/// Headless device that records every call.
///
/// Useful for tests and for inspecting what a block turns into without a GPU.
/// Handles are sequential integers; uniforms are identified by name.
#[derive(Debug, Default)]
pub struct TraceDevice {
    flavor: ContextFlavor,
    ops: Vec<Op>,
    next_id: u32,
    live: BTreeSet<u32>,
    missing_uniforms: Vec<String>,

    /// Makes `create_program` fail with this log.
    pub fail_link: Option<String>,
    /// Makes `create_buffer` fail.
    pub fail_buffers: bool,
    /// Makes `create_vertex_array` fail.
    pub fail_vertex_arrays: bool,
}

impl TraceDevice {
    pub fn new(flavor: ContextFlavor) -> Self {
        Self {
            flavor,
            ..Self::default()
        }
    }

    /// Reports `name` as inactive from `uniform_location`.
    pub fn without_uniform(mut self, name: &str) -> Self {
        self.missing_uniforms.push(name.to_owned());
        self
    }

    /// Makes `create_program` fail with `log`.
    pub fn failing_link(mut self, log: &str) -> Self {
        self.fail_link = Some(log.to_owned());
        self
    }

    #[inline]
    pub fn ops(&self) -> &[Op] {
        &self.ops
    }

    /// Forgets recorded calls. Live-object tracking is kept.
    pub fn clear_ops(&mut self) {
        self.ops.clear();
    }

    /// `DrawArrays` and `DrawIndexed` ops, in order.
    pub fn draw_calls(&self) -> Vec<&Op> {
        self.ops
            .iter()
            .filter(|op| matches!(op, Op::DrawArrays { .. } | Op::DrawIndexed { .. }))
            .collect()
    }

    /// Contents of every buffer created with `kind`, in order.
    pub fn uploads(&self, kind: BufferKind) -> Vec<&[u8]> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                Op::CreateBuffer { kind: k, contents, .. } if *k == kind => Some(contents.as_slice()),
                _ => None,
            })
            .collect()
    }

    /// Most recent value written to the named mat4 uniform.
    pub fn last_mat4(&self, name: &str) -> Option<Mat4> {
        self.ops.iter().rev().find_map(|op| match op {
            Op::SetUniformMat4 { name: n, value } if n == name => Some(*value),
            _ => None,
        })
    }

    /// Most recent value written to the named vec3 uniform.
    pub fn last_vec3(&self, name: &str) -> Option<Vec3> {
        self.ops.iter().rev().find_map(|op| match op {
            Op::SetUniformVec3 { name: n, value } if n == name => Some(*value),
            _ => None,
        })
    }

    /// Number of programs, buffers and vertex arrays not yet deleted.
    #[inline]
    pub fn live_objects(&self) -> usize {
        self.live.len()
    }

    fn alloc(&mut self) -> u32 {
        self.next_id += 1;
        self.live.insert(self.next_id);
        self.next_id
    }

    fn release(&mut self, id: u32) {
        if !self.live.remove(&id) {
            log::warn!("trace device: object {id} released twice or never created");
        }
    }
}

impl Device for TraceDevice {
    type Program = u32;
    type Buffer = u32;
    type VertexArray = u32;
    type Uniform = String;

    fn flavor(&self) -> ContextFlavor {
        self.flavor
    }

    fn create_program(&mut self, vertex: &str, fragment: &str) -> Result<u32> {
        if let Some(log) = &self.fail_link {
            bail!("link failed: {log}");
        }
        let program = self.alloc();
        self.ops.push(Op::CreateProgram {
            program,
            vertex: vertex.to_owned(),
            fragment: fragment.to_owned(),
        });
        Ok(program)
    }

    fn delete_program(&mut self, program: u32) {
        self.release(program);
        self.ops.push(Op::DeleteProgram(program));
    }

    fn uniform_location(&mut self, _program: u32, name: &str) -> Option<String> {
        if self.missing_uniforms.iter().any(|m| m == name) {
            return None;
        }
        Some(name.to_owned())
    }

    fn use_program(&mut self, program: Option<u32>) {
        self.ops.push(Op::UseProgram(program));
    }

    fn set_uniform_mat4(&mut self, uniform: &String, value: &Mat4) {
        self.ops.push(Op::SetUniformMat4 {
            name: uniform.clone(),
            value: *value,
        });
    }

    fn set_uniform_vec3(&mut self, uniform: &String, value: Vec3) {
        self.ops.push(Op::SetUniformVec3 {
            name: uniform.clone(),
            value,
        });
    }

    fn create_vertex_array(&mut self) -> Result<u32> {
        if self.fail_vertex_arrays {
            bail!("vertex array allocation failed");
        }
        let vao = self.alloc();
        self.ops.push(Op::CreateVertexArray(vao));
        Ok(vao)
    }

    fn delete_vertex_array(&mut self, vao: u32) {
        self.release(vao);
        self.ops.push(Op::DeleteVertexArray(vao));
    }

    fn create_buffer(&mut self, kind: BufferKind, contents: &[u8]) -> Result<u32> {
        if self.fail_buffers {
            bail!("{kind:?} buffer allocation failed");
        }
        let buffer = self.alloc();
        self.ops.push(Op::CreateBuffer {
            buffer,
            kind,
            contents: contents.to_vec(),
        });
        Ok(buffer)
    }

    fn delete_buffer(&mut self, buffer: u32) {
        self.release(buffer);
        self.ops.push(Op::DeleteBuffer(buffer));
    }

    fn vertex_attribute(&mut self, attribute: VertexAttribute) {
        self.ops.push(Op::VertexAttribute(attribute));
    }

    fn draw_arrays(&mut self, mode: DrawMode, count: u32) {
        self.ops.push(Op::DrawArrays { mode, count });
    }

    fn draw_indexed(&mut self, mode: DrawMode, count: u32) {
        self.ops.push(Op::DrawIndexed { mode, count });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tracks_live_objects() {
        let mut d = TraceDevice::default();
        let vao = d.create_vertex_array().unwrap();
        let buf = d.create_buffer(BufferKind::Vertex, &[1, 2, 3]).unwrap();
        assert_eq!(d.live_objects(), 2);
        d.delete_buffer(buf);
        d.delete_vertex_array(vao);
        assert_eq!(d.live_objects(), 0);
        assert_eq!(d.uploads(BufferKind::Vertex), vec![&[1u8, 2, 3][..]]);
    }

    #[test]
    fn failure_switches() {
        let mut d = TraceDevice {
            fail_link: Some("syntax error".into()),
            fail_buffers: true,
            ..TraceDevice::default()
        };
        let err = d.create_program("v", "f").unwrap_err();
        assert!(err.to_string().contains("syntax error"));
        assert!(d.create_buffer(BufferKind::Index, &[]).is_err());
        assert_eq!(d.live_objects(), 0);
    }

    #[test]
    fn failing_link_builder() {
        let mut d = TraceDevice::new(ContextFlavor::Embedded).failing_link("bad");
        assert_eq!(d.flavor(), ContextFlavor::Embedded);
        assert!(d.create_program("v", "f").is_err());
        assert!(d.ops().is_empty());
    }

    #[test]
    fn missing_uniform_is_none() {
        let mut d = TraceDevice::default().without_uniform("normal");
        assert_eq!(d.uniform_location(1, "normal"), None);
        assert_eq!(d.uniform_location(1, "projection").as_deref(), Some("projection"));
    }
}
