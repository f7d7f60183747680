//! GPU resource subsystem.
//!
//! Every device object follows strict create/upload/draw/free symmetry:
//! - [`ShaderProgram`]: compile → link → (debug) validate → bind → dispose
//! - [`VertexBuffer`]: unallocated → uploaded → disposed, within one frame
//! - [`VertexArray`]: one per topology kind, lives as long as the renderer
//!
//! All GPU calls go through the [`GlDevice`] seam so resource logic is
//! testable without a live context. The production backend is [`RawGl`].

mod buffer;
mod device;
mod raw;
mod shader;
mod vertex_array;

#[cfg(test)]
pub(crate) mod testing;

pub use buffer::{AttribLayout, BufferSpec, BufferState, ColorVertex, TexturedVertex, VertexBuffer};
pub use device::{GlDevice, GlHandle, ShaderStage, SharedDevice, Topology};
pub use raw::RawGl;
pub use shader::{ProgramState, ShaderProgram};
pub use vertex_array::VertexArray;
