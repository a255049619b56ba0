//! OpenGL / OpenGL ES backend for `immgl`.
//!
//! [`GlowDevice`] implements [`immgl::device::Device`] over a shared
//! [`glow::Context`]. The host owns window and context creation; this crate
//! only issues calls on a context that is already current.
//!
//! ```ignore
//! let gl = std::rc::Rc::new(unsafe { glow::Context::from_loader_function(loader) });
//! let mut imm = immgl::ImmediateContext::new(GlowDevice::new(gl), Default::default());
//! ```

mod device;

pub use device::{GlowDevice, draw_mode};
