use crate::gpu::{BufferSpec, Topology};

/// Capability set exposed by anything the renderer can draw.
///
/// This is deliberately a flat trait rather than a type hierarchy: shapes,
/// tiles, and text all qualify by answering three questions: which
/// topology batch they belong to, what vertex data they carry, and how many
/// vertices the draw call covers.
///
/// Ownership stays with the caller (registration clones an `Rc`); the
/// renderer holds a renderable for at most one frame.
pub trait Renderable {
    /// Topology batch this object draws under.
    fn topology(&self) -> Topology;

    /// Produces the buffer descriptions for one draw. Called once per
    /// registration, at draw time.
    fn buffer_specs(&self) -> Vec<BufferSpec>;

    /// Vertex count for the draw call.
    fn vertex_count(&self) -> i32;
}
