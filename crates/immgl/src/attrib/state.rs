use glam::{Vec3, Vec4};

use crate::scalar::{ColorChannel, NormalComponent};

/// Opaque black.
pub const DEFAULT_COLOR: Vec4 = Vec4::new(0.0, 0.0, 0.0, 1.0);

/// +Z.
pub const DEFAULT_NORMAL: Vec3 = Vec3::Z;

/// Current color, current normal and the normalize flag.
///
/// The normalize flag is tracked so callers can set and query it, but this
/// layer never rescales normals with it.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct AttribState {
    color: Vec4,
    normal: Vec3,
    normalize: bool,
}

impl AttribState {
    pub const fn new() -> Self {
        Self {
            color: DEFAULT_COLOR,
            normal: DEFAULT_NORMAL,
            normalize: false,
        }
    }

    #[inline]
    pub fn color(&self) -> Vec4 {
        self.color
    }

    #[inline]
    pub fn normal(&self) -> Vec3 {
        self.normal
    }

    #[inline]
    pub fn normalize_enabled(&self) -> bool {
        self.normalize
    }

    #[inline]
    pub fn set_normalize(&mut self, enabled: bool) {
        self.normalize = enabled;
    }

    /// Updates RGB; alpha keeps its previous value.
    #[inline]
    pub fn set_color3<T: ColorChannel>(&mut self, r: T, g: T, b: T) {
        self.color = Vec4::new(r.to_channel(), g.to_channel(), b.to_channel(), self.color.w);
    }

    #[inline]
    pub fn set_color4<T: ColorChannel>(&mut self, r: T, g: T, b: T, a: T) {
        self.color = Vec4::new(r.to_channel(), g.to_channel(), b.to_channel(), a.to_channel());
    }

    #[inline]
    pub fn set_normal<T: NormalComponent>(&mut self, x: T, y: T, z: T) {
        self.normal = Vec3::new(x.to_component(), y.to_component(), z.to_component());
    }
}

impl Default for AttribState {
    fn default() -> Self {
        Self::new()
    }
}
