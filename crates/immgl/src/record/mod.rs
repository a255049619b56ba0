//! Primitive recording.
//!
//! Responsibilities:
//! - track the single open primitive block and its topology
//! - append vertex records stamped with the color current at emission time
//! - derive the quad index list used at block end

mod quad;
mod recorder;
mod topology;
mod vertex;

pub use quad::quad_indices;
pub use recorder::{Block, Recorder, Scratch};
pub use topology::Topology;
pub use vertex::Vertex;
