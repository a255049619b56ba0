//! Matrix stack manager.
//!
//! Four independent stacks (projection, model-view, texture, color) selected by
//! a mode register. Every operation targets only the stack the mode selects.
//!
//! Conventions:
//! - matrices handed in by callers are row-major `[T; 16]`
//! - storage is `glam::Mat4`, single precision
//! - composition is on the right: `top = top * m`

mod mode;
mod projection;
mod stack;
mod stacks;

pub use mode::MatrixMode;
pub use projection::{frustum, ortho, perspective};
pub use stack::MatrixStack;
pub use stacks::MatrixStacks;

use glam::Mat4;

use crate::scalar::Real;

/// Builds a matrix from row-major input of any floating width.
#[inline]
pub fn from_row_major<T: Real>(m: &[T; 16]) -> Mat4 {
    Mat4::from_cols_array(&m.map(Real::to_f32)).transpose()
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec4;

    #[test]
    fn row_major_input_maps_rows() {
        let m = from_row_major(&[
            1.0f64, 2.0, 3.0, 4.0, //
            5.0, 6.0, 7.0, 8.0, //
            9.0, 10.0, 11.0, 12.0, //
            13.0, 14.0, 15.0, 16.0,
        ]);
        assert_eq!(m.row(0), Vec4::new(1.0, 2.0, 3.0, 4.0));
        assert_eq!(m.row(3), Vec4::new(13.0, 14.0, 15.0, 16.0));
        assert_eq!(m.col(0), Vec4::new(1.0, 5.0, 9.0, 13.0));
    }
}
