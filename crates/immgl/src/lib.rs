//! Immediate-mode drawing on top of a shader-based device.
//!
//! This crate reproduces the legacy fixed-function call model (`begin`/`end`
//! blocks, per-mode matrix stacks, "current" color and normal) and turns each
//! closed block into one batched draw against a [`device::Device`].
//!
//! # Structure
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`matrix`] | `MatrixMode`, `MatrixStack`, `MatrixStacks` |
//! | [`attrib`] | `AttribState` (current color, normal, normalize flag) |
//! | [`record`] | `Topology`, `Vertex`, `Recorder`, quad triangulation |
//! | [`shader`] | fixed shader pair, version directive, `ShaderProgram` |
//! | [`device`] | the `Device` seam and the recording `TraceDevice` |
//! | [`context`] | `ImmediateContext`, `ContextInit`, legacy-named entry points |
//!
//! # Quick start
//!
//! ```rust
//! use immgl::context::{ContextInit, ImmediateContext};
//! use immgl::device::TraceDevice;
//! use immgl::matrix::MatrixMode;
//! use immgl::record::Topology;
//!
//! let mut gl = ImmediateContext::new(TraceDevice::default(), ContextInit::default());
//!
//! gl.set_matrix_mode(MatrixMode::Projection);
//! gl.load_identity();
//! gl.ortho(0.0, 1.0, 0.0, 1.0, -1.0, 1.0);
//!
//! gl.begin(Topology::Quads);
//! gl.color3(1.0f32, 0.0, 0.0);
//! gl.vertex3(0.0f32, 0.0, 0.0);
//! gl.vertex3(1.0f32, 0.0, 0.0);
//! gl.vertex3(1.0f32, 1.0, 0.0);
//! gl.vertex3(0.0f32, 1.0, 0.0);
//! gl.end();
//!
//! assert_eq!(gl.device().draw_calls().len(), 1);
//! ```

pub mod attrib;
pub mod context;
pub mod device;
pub mod logging;
pub mod matrix;
pub mod record;
pub mod scalar;
pub mod shader;

pub use context::{ContextInit, ImmediateContext};
pub use matrix::MatrixMode;
pub use record::Topology;
