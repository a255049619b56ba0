use crate::matrix::MatrixMode;

/// Construction parameters for [`ImmediateContext`](super::ImmediateContext).
///
/// Keep this structure small. Add fields only when a concrete context or
/// driver requirement exists.
#[derive(Debug, Clone, Default)]
pub struct ContextInit {
    /// Full `#version` line to use instead of the one derived from the device
    /// flavor (e.g. `"#version 310 es"`).
    pub glsl_version: Option<String>,

    /// Matrix mode selected after construction.
    pub initial_mode: MatrixMode,
}
