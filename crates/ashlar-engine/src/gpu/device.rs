use std::fmt;
use std::rc::Rc;

/// GL object name. `0` is the null handle, as in GL itself.
pub type GlHandle = u32;

/// Shared handle to the device seam. Single-threaded by design; the render
/// loop owns the context and nothing else touches GPU state.
pub type SharedDevice = Rc<dyn GlDevice>;

/// Shader stage kind.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum ShaderStage {
    Vertex,
    Fragment,
}

impl fmt::Display for ShaderStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShaderStage::Vertex => f.write_str("vertex"),
            ShaderStage::Fragment => f.write_str("fragment"),
        }
    }
}

/// Mesh/topology kind: the primitive type a draw call uses and the batching
/// key for grouping draws under one vertex array.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Topology {
    TriangleList,
    LineList,
}

impl Topology {
    /// All topology kinds, in the order the renderer batches them.
    pub const ALL: [Topology; 2] = [Topology::TriangleList, Topology::LineList];
}

/// Narrow GL call surface consumed by the resource types.
///
/// This is intentionally small: just the calls that shader programs, vertex
/// buffers, and vertex arrays need for their lifecycles. Methods that can
/// fail on the driver side (`compile_shader`, `link_program`,
/// `validate_program`) fold status query + info log retrieval into a
/// `Result`, with the driver diagnostic as the error payload.
///
/// Precondition for the production backend: a graphics context is current on
/// the calling thread before any method runs.
pub trait GlDevice {
    // ── shader stages ─────────────────────────────────────────────────────

    fn create_shader(&self, stage: ShaderStage) -> GlHandle;
    fn shader_source(&self, shader: GlHandle, source: &str);
    fn compile_shader(&self, shader: GlHandle) -> Result<(), String>;
    fn delete_shader(&self, shader: GlHandle);

    // ── programs ──────────────────────────────────────────────────────────

    fn create_program(&self) -> GlHandle;
    fn attach_shader(&self, program: GlHandle, shader: GlHandle);
    fn detach_shader(&self, program: GlHandle, shader: GlHandle);
    fn link_program(&self, program: GlHandle) -> Result<(), String>;
    fn validate_program(&self, program: GlHandle) -> Result<(), String>;
    fn use_program(&self, program: GlHandle);
    fn delete_program(&self, program: GlHandle);

    /// Location of a named vertex attribute on a linked program, or `None`
    /// if the program does not declare it.
    fn attrib_location(&self, program: GlHandle, name: &str) -> Option<u32>;

    // ── vertex buffers ────────────────────────────────────────────────────

    fn gen_buffer(&self) -> GlHandle;
    fn bind_array_buffer(&self, buffer: GlHandle);
    /// Uploads `data` to the currently bound array buffer.
    fn upload_array_buffer(&self, data: &[f32]);
    fn enable_attrib(&self, location: u32);
    /// Interleaved float attribute pointer. `stride` and `offset` are in
    /// floats, not bytes; the backend converts.
    fn attrib_pointer(&self, location: u32, components: i32, stride: i32, offset: i32);
    fn delete_buffer(&self, buffer: GlHandle);

    // ── vertex arrays ─────────────────────────────────────────────────────

    fn gen_vertex_array(&self) -> GlHandle;
    fn bind_vertex_array(&self, vertex_array: GlHandle);
    fn delete_vertex_array(&self, vertex_array: GlHandle);

    // ── draws ─────────────────────────────────────────────────────────────

    fn draw_arrays(&self, topology: Topology, first: i32, count: i32);
}
