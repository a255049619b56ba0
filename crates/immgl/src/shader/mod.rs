//! The fixed shader pair shared by every block.
//!
//! The vertex stage reads position and color at locations 0 and 1 and
//! transforms by `projection * modelView`. The fragment stage writes the
//! interpolated color. A `#version` line matching the context flavor is
//! prepended before compilation.

mod program;
mod source;

pub use program::{ShaderProgram, Uniforms};
pub use source::{version_directive, with_version, FRAGMENT_SOURCE, VERTEX_SOURCE};

/// Uniform names looked up after linking.
pub const PROJECTION_UNIFORM: &str = "projection";
pub const MODEL_VIEW_UNIFORM: &str = "modelView";
pub const NORMAL_UNIFORM: &str = "normal";

/// Attribute locations fixed by the vertex stage.
pub const POSITION_LOCATION: u32 = 0;
pub const COLOR_LOCATION: u32 = 1;
