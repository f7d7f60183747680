use std::path::Path;
use std::rc::Rc;

use crate::error::{FatalInitError, ShaderError};

use super::device::{GlDevice, GlHandle, ShaderStage};

/// Lifecycle state of a [`ShaderProgram`].
///
/// The program handle is nonzero for every state from `Linked` until
/// `Disposed`.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum ProgramState {
    Created,
    Compiled,
    Linked,
    Validated,
    Bound,
    Disposed,
}

/// One linked GPU program.
///
/// Construction drives the compile → link → (debug) validate machine:
/// - a compile failure on either stage aborts with [`ShaderError::Compile`]
///   carrying the driver diagnostic; any stage handle already created for
///   the attempt is deleted first, so nothing is orphaned
/// - a link failure aborts with [`ShaderError::Link`]; stages and the
///   half-built program are deleted
/// - validation only runs in debug builds and is non-fatal: a failure is
///   logged as a warning and execution continues
///
/// Stage handles never outlive a successful link. Disposal is idempotent
/// and also runs from `Drop`, so no exit path leaks the program handle.
pub struct ShaderProgram {
    device: Rc<dyn GlDevice>,
    handle: GlHandle,
    state: ProgramState,
    validated: bool,
}

impl ShaderProgram {
    /// Compiles, links, and (in debug builds) validates a program from the
    /// two stage sources.
    pub fn new(
        device: Rc<dyn GlDevice>,
        vertex_src: &str,
        fragment_src: &str,
    ) -> Result<Self, ShaderError> {
        Self::with_validation(device, vertex_src, fragment_src, cfg!(debug_assertions))
    }

    /// Like [`new`](Self::new) with explicit control over the validation
    /// pass.
    pub fn with_validation(
        device: Rc<dyn GlDevice>,
        vertex_src: &str,
        fragment_src: &str,
        validate: bool,
    ) -> Result<Self, ShaderError> {
        let vertex = compile_stage(&*device, ShaderStage::Vertex, vertex_src)?;
        let fragment = match compile_stage(&*device, ShaderStage::Fragment, fragment_src) {
            Ok(handle) => handle,
            Err(err) => {
                // The vertex stage already exists for this attempt; delete
                // it before propagating so the failure leaves no GPU objects
                // behind.
                device.delete_shader(vertex);
                return Err(err);
            }
        };

        let program = device.create_program();
        device.attach_shader(program, vertex);
        device.attach_shader(program, fragment);

        let linked = device.link_program(program);

        // Stage handles are only needed up to the link; release them on both
        // outcomes.
        device.detach_shader(program, vertex);
        device.detach_shader(program, fragment);
        device.delete_shader(vertex);
        device.delete_shader(fragment);

        if let Err(log) = linked {
            device.delete_program(program);
            return Err(ShaderError::Link { log });
        }

        let mut validated = false;
        if validate {
            match device.validate_program(program) {
                Ok(()) => validated = true,
                Err(log) => log::warn!("shader program validation failed (non-fatal): {log}"),
            }
        }

        Ok(Self {
            device,
            handle: program,
            state: if validated {
                ProgramState::Validated
            } else {
                ProgramState::Linked
            },
            validated,
        })
    }

    /// Builds the program from two source files.
    ///
    /// IO errors are promoted to [`FatalInitError`] because rendering cannot
    /// proceed without the base shaders.
    pub fn from_files(
        device: Rc<dyn GlDevice>,
        vertex_path: &Path,
        fragment_path: &Path,
    ) -> Result<Self, FatalInitError> {
        let vertex_src = read_source(vertex_path)?;
        let fragment_src = read_source(fragment_path)?;
        Ok(Self::new(device, &vertex_src, &fragment_src)?)
    }

    /// Makes this program the active one.
    pub fn bind(&mut self) {
        debug_assert_ne!(self.state, ProgramState::Disposed, "bind after dispose");
        self.device.use_program(self.handle);
        self.state = ProgramState::Bound;
    }

    /// Deactivates the program.
    pub fn unbind(&mut self) {
        self.device.use_program(0);
        if self.state == ProgramState::Bound {
            self.state = if self.validated {
                ProgramState::Validated
            } else {
                ProgramState::Linked
            };
        }
    }

    /// Unbinds and deletes the program handle. Safe to call more than once;
    /// only the first call touches the device.
    pub fn dispose(&mut self) {
        if self.state == ProgramState::Disposed {
            return;
        }
        self.device.use_program(0);
        self.device.delete_program(self.handle);
        self.handle = 0;
        self.state = ProgramState::Disposed;
    }

    /// Location of a named vertex attribute, or `None` if the program does
    /// not declare it.
    pub fn attrib_location(&self, name: &str) -> Option<u32> {
        self.device.attrib_location(self.handle, name)
    }

    pub fn handle(&self) -> GlHandle {
        self.handle
    }

    pub fn state(&self) -> ProgramState {
        self.state
    }
}

impl Drop for ShaderProgram {
    fn drop(&mut self) {
        self.dispose();
    }
}

fn compile_stage(
    device: &dyn GlDevice,
    stage: ShaderStage,
    source: &str,
) -> Result<GlHandle, ShaderError> {
    let shader = device.create_shader(stage);
    device.shader_source(shader, source);
    match device.compile_shader(shader) {
        Ok(()) => Ok(shader),
        Err(log) => {
            device.delete_shader(shader);
            Err(ShaderError::Compile { stage, log })
        }
    }
}

fn read_source(path: &Path) -> Result<String, FatalInitError> {
    std::fs::read_to_string(path).map_err(|source| FatalInitError::ShaderSource {
        path: path.to_path_buf(),
        source,
    })
}
