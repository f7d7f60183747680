use std::rc::Rc;

use bytemuck::{Pod, Zeroable};

use crate::error::RenderError;

use super::device::{GlDevice, GlHandle};
use super::shader::ShaderProgram;

/// Interleaved attribute layout of a vertex buffer.
///
/// The field order and stride are a contract shared with the bound shader
/// program: position (2 floats), color (4 floats), then the optional texture
/// coordinate (2 floats), bound to the program inputs named `position`,
/// `color`, and `uv`.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum AttribLayout {
    PositionColor,
    PositionColorUv,
}

impl AttribLayout {
    /// Floats per vertex.
    #[inline]
    pub fn stride(self) -> usize {
        match self {
            AttribLayout::PositionColor => 6,
            AttribLayout::PositionColorUv => 8,
        }
    }

    #[inline]
    pub fn has_uv(self) -> bool {
        matches!(self, AttribLayout::PositionColorUv)
    }
}

/// Vertex with position and color, matching [`AttribLayout::PositionColor`].
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct ColorVertex {
    pub position: [f32; 2],
    pub color: [f32; 4],
}

/// Vertex with position, color, and texture coordinate, matching
/// [`AttribLayout::PositionColorUv`].
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct TexturedVertex {
    pub position: [f32; 2],
    pub color: [f32; 4],
    pub uv: [f32; 2],
}

/// CPU-side description of one vertex buffer, produced by renderables on
/// demand. The renderer turns specs into [`VertexBuffer`]s for the duration
/// of a single draw.
#[derive(Debug, Clone, PartialEq)]
pub struct BufferSpec {
    pub layout: AttribLayout,
    pub data: Vec<f32>,
}

impl BufferSpec {
    pub fn colored(vertices: &[ColorVertex]) -> Self {
        Self {
            layout: AttribLayout::PositionColor,
            data: bytemuck::cast_slice(vertices).to_vec(),
        }
    }

    pub fn textured(vertices: &[TexturedVertex]) -> Self {
        Self {
            layout: AttribLayout::PositionColorUv,
            data: bytemuck::cast_slice(vertices).to_vec(),
        }
    }

    /// Number of whole vertices the flat array holds.
    pub fn vertex_count(&self) -> i32 {
        (self.data.len() / self.layout.stride()) as i32
    }
}

/// Lifecycle state of a [`VertexBuffer`].
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum BufferState {
    Unallocated,
    Uploaded,
    Disposed,
}

impl BufferState {
    fn name(self) -> &'static str {
        match self {
            BufferState::Unallocated => "unallocated",
            BufferState::Uploaded => "uploaded",
            BufferState::Disposed => "disposed",
        }
    }
}

/// One GPU vertex buffer holding an interleaved attribute array.
///
/// A device handle exists only while the state is `Uploaded`. Buffers are
/// never retained across frames: the renderer creates, uploads, draws, and
/// deletes them within one `render_registered_objects` pass. `Drop` backstops
/// `delete` so an error path cannot leak the handle.
pub struct VertexBuffer {
    device: Rc<dyn GlDevice>,
    layout: AttribLayout,
    data: Vec<f32>,
    handle: GlHandle,
    state: BufferState,
}

impl VertexBuffer {
    pub fn from_spec(device: Rc<dyn GlDevice>, spec: BufferSpec) -> Self {
        Self {
            device,
            layout: spec.layout,
            data: spec.data,
            handle: 0,
            state: BufferState::Unallocated,
        }
    }

    /// Allocates the device handle, uploads the attribute array, and binds
    /// the attribute pointers to `program`'s named inputs. Synchronous.
    ///
    /// If the program is missing a required attribute the fresh handle is
    /// deleted before the error propagates, preserving create/free symmetry.
    pub fn initialize(&mut self, program: &ShaderProgram) -> Result<(), RenderError> {
        if self.state != BufferState::Unallocated {
            return Err(RenderError::BufferState(self.state.name(), "unallocated"));
        }

        let handle = self.device.gen_buffer();
        self.device.bind_array_buffer(handle);
        self.device.upload_array_buffer(&self.data);

        if let Err(err) = self.bind_attribs(program) {
            self.device.delete_buffer(handle);
            return Err(err);
        }

        self.handle = handle;
        self.state = BufferState::Uploaded;
        Ok(())
    }

    fn bind_attribs(&self, program: &ShaderProgram) -> Result<(), RenderError> {
        let stride = self.layout.stride() as i32;

        let position = program
            .attrib_location("position")
            .ok_or(RenderError::MissingAttribute("position"))?;
        let color = program
            .attrib_location("color")
            .ok_or(RenderError::MissingAttribute("color"))?;

        self.device.enable_attrib(position);
        self.device.attrib_pointer(position, 2, stride, 0);
        self.device.enable_attrib(color);
        self.device.attrib_pointer(color, 4, stride, 2);

        if self.layout.has_uv() {
            let uv = program
                .attrib_location("uv")
                .ok_or(RenderError::MissingAttribute("uv"))?;
            self.device.enable_attrib(uv);
            self.device.attrib_pointer(uv, 2, stride, 6);
        }

        Ok(())
    }

    /// Frees the device handle. Idempotent; `Drop` calls it too.
    pub fn delete(&mut self) {
        if self.state == BufferState::Uploaded {
            self.device.delete_buffer(self.handle);
            self.handle = 0;
        }
        self.state = BufferState::Disposed;
    }

    pub fn handle(&self) -> GlHandle {
        self.handle
    }

    pub fn state(&self) -> BufferState {
        self.state
    }

    pub fn layout(&self) -> AttribLayout {
        self.layout
    }

    /// Number of whole vertices in the attribute array.
    pub fn vertex_count(&self) -> i32 {
        (self.data.len() / self.layout.stride()) as i32
    }
}

impl Drop for VertexBuffer {
    fn drop(&mut self) {
        self.delete();
    }
}
