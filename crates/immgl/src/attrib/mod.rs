//! Per-vertex "current" attribute state.
//!
//! Color and normal persist until overwritten and are sampled when a vertex is
//! emitted. Later changes never reach vertices that were already recorded.

mod state;

pub use state::{AttribState, DEFAULT_COLOR, DEFAULT_NORMAL};
