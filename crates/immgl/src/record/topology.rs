use crate::device::DrawMode;

/// Primitive topology named by `begin`.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Topology {
    Points,
    Lines,
    LineLoop,
    LineStrip,
    Triangles,
    TriangleStrip,
    TriangleFan,
    Quads,
    QuadStrip,
    Polygon,
}

impl Topology {
    /// Maps a legacy enum value (`GL_POINTS` = 0 ... `GL_POLYGON` = 9).
    pub const fn from_raw(raw: u32) -> Option<Self> {
        Some(match raw {
            0x0000 => Topology::Points,
            0x0001 => Topology::Lines,
            0x0002 => Topology::LineLoop,
            0x0003 => Topology::LineStrip,
            0x0004 => Topology::Triangles,
            0x0005 => Topology::TriangleStrip,
            0x0006 => Topology::TriangleFan,
            0x0007 => Topology::Quads,
            0x0008 => Topology::QuadStrip,
            0x0009 => Topology::Polygon,
            _ => return None,
        })
    }

    /// Device mode that draws this topology without an index list.
    ///
    /// `None` for quads, which need triangulation. A quad strip has the same
    /// vertex order as a triangle strip, and a convex polygon is a fan.
    pub const fn native_mode(self) -> Option<DrawMode> {
        match self {
            Topology::Points => Some(DrawMode::Points),
            Topology::Lines => Some(DrawMode::Lines),
            Topology::LineLoop => Some(DrawMode::LineLoop),
            Topology::LineStrip => Some(DrawMode::LineStrip),
            Topology::Triangles => Some(DrawMode::Triangles),
            Topology::TriangleStrip | Topology::QuadStrip => Some(DrawMode::TriangleStrip),
            Topology::TriangleFan | Topology::Polygon => Some(DrawMode::TriangleFan),
            Topology::Quads => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn raw_values() {
        assert_eq!(Topology::from_raw(7), Some(Topology::Quads));
        assert_eq!(Topology::from_raw(9), Some(Topology::Polygon));
        assert_eq!(Topology::from_raw(10), None);
    }

    #[test]
    fn only_quads_need_indices() {
        for raw in 0..=9 {
            let Some(t) = Topology::from_raw(raw) else { continue };
            assert_eq!(t.native_mode().is_none(), t == Topology::Quads);
        }
    }
}
