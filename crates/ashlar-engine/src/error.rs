//! Crate-wide error taxonomy.
//!
//! Policy:
//! - startup failures (context, base shaders) are fatal and abort init
//! - per-frame failures (a single renderable, a missing glyph) are logged
//!   and skipped so the rest of the frame proceeds
//! - asset lookups fail loudly, naming the identifier, instead of silently
//!   substituting a placeholder

use std::path::PathBuf;

use thiserror::Error;

use crate::gpu::ShaderStage;

/// Fatal startup failure. No recovery is attempted; the caller should abort
/// with the diagnostic message.
#[derive(Debug, Error)]
pub enum FatalInitError {
    /// Reading a base shader source file failed. Rendering cannot proceed
    /// without the base shaders, so the IO error is promoted to fatal.
    #[error("failed to read shader source `{path}`: {source}")]
    ShaderSource {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Building the base shader program failed.
    #[error(transparent)]
    Shader(#[from] ShaderError),

    /// The graphics context is unusable (not current, or function pointers
    /// failed to load).
    #[error("graphics context init failed: {0}")]
    Context(String),
}

/// Shader program construction failure. Both variants are fatal for the
/// program being built and carry the driver diagnostic verbatim.
#[derive(Debug, Error)]
pub enum ShaderError {
    #[error("{stage} shader compile failed: {log}")]
    Compile { stage: ShaderStage, log: String },

    #[error("shader program link failed: {log}")]
    Link { log: String },
}

/// Per-object draw failure. Isolated by the renderer: logged, the object is
/// skipped, and the remaining batch still draws.
#[derive(Debug, Error)]
pub enum RenderError {
    /// The bound program does not declare an attribute the buffer layout
    /// requires.
    #[error("vertex attribute `{0}` not found on the bound shader program")]
    MissingAttribute(&'static str),

    /// The buffer is not in a state that permits the operation (e.g. a
    /// second `initialize` on an already uploaded buffer).
    #[error("vertex buffer is {0}, expected {1}")]
    BufferState(&'static str, &'static str),
}

/// A requested asset identifier is not present in the registry.
#[derive(Debug, Error)]
#[error("asset `{0}` is not registered")]
pub struct ResourceLookupError(pub String);
