use glam::Vec4;

use crate::scalar::{Real, VertexInt};

use super::{Topology, Vertex};

/// An open primitive block.
#[derive(Debug, Clone, PartialEq)]
pub struct Block {
    pub topology: Topology,
    pub vertices: Vec<Vertex>,
}

/// "Last seen" registers written by the vertex arities that do not emit.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Scratch {
    pub float: [f32; 4],
    pub int: [i32; 4],
}

/// Accumulates vertices between `begin` and `end`.
///
/// Only 3- and 4-component floating positions produce records. 2-component
/// and integer positions land in [`Scratch`] and are otherwise ignored.
#[derive(Debug, Default)]
pub struct Recorder {
    block: Option<Block>,
    scratch: Scratch,
    warned_non_emitting: bool,
}

impl Recorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Opens a block. Ignored while one is already open.
    ///
    /// Storage from an earlier block is never reused; each block starts with
    /// a fresh, unallocated buffer.
    pub fn begin(&mut self, topology: Topology) {
        if self.block.is_some() {
            log::trace!("begin({topology:?}) inside an open block ignored");
            return;
        }
        self.block = Some(Block {
            topology,
            vertices: Vec::new(),
        });
    }

    /// Closes the open block and hands it over. `None` if no block is open.
    pub fn take(&mut self) -> Option<Block> {
        self.block.take()
    }

    #[inline]
    pub fn is_recording(&self) -> bool {
        self.block.is_some()
    }

    #[inline]
    pub fn topology(&self) -> Option<Topology> {
        self.block.as_ref().map(|b| b.topology)
    }

    #[inline]
    pub fn vertices(&self) -> &[Vertex] {
        match &self.block {
            Some(block) => &block.vertices,
            None => &[],
        }
    }

    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices().len()
    }

    #[inline]
    pub fn scratch(&self) -> Scratch {
        self.scratch
    }

    // ── emitting ──────────────────────────────────────────────────────────

    /// Appends `(x, y, z, 1)` stamped with `color`.
    pub fn vertex3<T: Real>(&mut self, x: T, y: T, z: T, color: Vec4) {
        self.push(Vec4::new(x.to_f32(), y.to_f32(), z.to_f32(), 1.0), color);
    }

    /// Appends `(x, y, z, w)` stamped with `color`.
    pub fn vertex4<T: Real>(&mut self, x: T, y: T, z: T, w: T, color: Vec4) {
        self.push(Vec4::new(x.to_f32(), y.to_f32(), z.to_f32(), w.to_f32()), color);
    }

    fn push(&mut self, position: Vec4, color: Vec4) {
        match self.block.as_mut() {
            Some(block) => block.vertices.push(Vertex::new(position, color)),
            None => log::trace!("vertex outside begin/end ignored"),
        }
    }

    // ── non-emitting ──────────────────────────────────────────────────────

    pub fn vertex2<T: Real>(&mut self, x: T, y: T) {
        self.scratch.float[0] = x.to_f32();
        self.scratch.float[1] = y.to_f32();
        self.note_non_emitting("2-component");
    }

    pub fn vertex2i<T: VertexInt>(&mut self, x: T, y: T) {
        self.scratch.int[0] = x.to_i32();
        self.scratch.int[1] = y.to_i32();
        self.note_non_emitting("integer");
    }

    pub fn vertex3i<T: VertexInt>(&mut self, x: T, y: T, z: T) {
        self.scratch.int[..3].copy_from_slice(&[x.to_i32(), y.to_i32(), z.to_i32()]);
        self.note_non_emitting("integer");
    }

    pub fn vertex4i<T: VertexInt>(&mut self, x: T, y: T, z: T, w: T) {
        self.scratch.int = [x.to_i32(), y.to_i32(), z.to_i32(), w.to_i32()];
        self.note_non_emitting("integer");
    }

    fn note_non_emitting(&mut self, kind: &str) {
        if !self.warned_non_emitting {
            log::debug!("{kind} vertex calls are not drawn; use 3/4-component float vertices");
            self.warned_non_emitting = true;
        }
    }
}
