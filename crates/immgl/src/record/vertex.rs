use bytemuck::{Pod, Zeroable};
use glam::Vec4;

/// One emitted vertex, laid out exactly as uploaded:
/// `[x, y, z, w, r, g, b, a]`.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 4],
    pub color: [f32; 4],
}

impl Vertex {
    /// Bytes between consecutive vertices.
    pub const STRIDE: u32 = std::mem::size_of::<Vertex>() as u32;
    /// Float components per attribute.
    pub const COMPONENTS: u32 = 4;
    /// Byte offset of `position` (attribute 0).
    pub const POSITION_OFFSET: u32 = std::mem::offset_of!(Vertex, position) as u32;
    /// Byte offset of `color` (attribute 1).
    pub const COLOR_OFFSET: u32 = std::mem::offset_of!(Vertex, color) as u32;

    #[inline]
    pub fn new(position: Vec4, color: Vec4) -> Self {
        Self {
            position: position.to_array(),
            color: color.to_array(),
        }
    }
}
