//! Per-frame render registration pipeline.
//!
//! Game logic registers [`Renderable`]s during its update; the renderer
//! drains the registry once per frame, batching draws by topology kind.
//!
//! Convention:
//! - renderables bake their vertex data into clip-space `[0, 1]` coordinates
//!   (normalized against the viewport) before registration
//! - GPU buffers for an object live only inside the draw pass that consumed
//!   its registration

mod ctx;
mod registry;
mod renderable;
mod renderer;

pub use ctx::Viewport;
pub use registry::FrameRegistry;
pub use renderable::Renderable;
pub use renderer::Renderer;
