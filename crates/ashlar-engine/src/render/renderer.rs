use std::path::Path;
use std::rc::Rc;

use crate::error::{FatalInitError, RenderError};
use crate::gpu::{SharedDevice, ShaderProgram, Topology, VertexArray, VertexBuffer};

use super::registry::FrameRegistry;
use super::renderable::Renderable;

/// Fixed resource paths of the base shader program.
pub const VERTEX_SHADER_PATH: &str = "resources/shaders/flat.vert";
pub const FRAGMENT_SHADER_PATH: &str = "resources/shaders/flat.frag";

/// Orchestrates the per-frame pipeline: registration, topology batching,
/// buffer upload/draw/free, and disposal of all GPU state.
///
/// Lifecycle contract:
/// - one vertex array per topology kind is created here and deleted in
///   [`dispose`](Self::dispose)
/// - every registered object's buffers are created, drawn, and deleted
///   within the same `render_registered_objects` pass
/// - `dispose` must only run after the render loop has terminated
pub struct Renderer {
    device: SharedDevice,
    shader: ShaderProgram,
    vertex_arrays: Vec<VertexArray>,
    registry: FrameRegistry,
    disposed: bool,
}

impl Renderer {
    /// Builds a renderer around an already linked shader program.
    pub fn new(device: SharedDevice, shader: ShaderProgram) -> Self {
        let vertex_arrays = Topology::ALL
            .iter()
            .map(|&topology| VertexArray::new(device.clone(), topology))
            .collect();
        Self {
            device,
            shader,
            vertex_arrays,
            registry: FrameRegistry::new(),
            disposed: false,
        }
    }

    /// Builds a renderer with the base shader program loaded from its fixed
    /// resource paths. IO and build failures are fatal.
    pub fn with_base_shaders(device: SharedDevice) -> Result<Self, FatalInitError> {
        let shader = ShaderProgram::from_files(
            device.clone(),
            Path::new(VERTEX_SHADER_PATH),
            Path::new(FRAGMENT_SHADER_PATH),
        )?;
        Ok(Self::new(device, shader))
    }

    /// Appends `object` to the frame registry. Pure bookkeeping: no GPU work
    /// happens until the draw pass. Registering the same object twice
    /// produces two draw calls.
    pub fn register_object(&mut self, object: Rc<dyn Renderable>) {
        self.registry.push(object);
    }

    /// Draws everything registered this frame, batched by topology kind.
    ///
    /// The registry is drained up front, so it is empty for the next frame's
    /// registrations no matter what happens during the pass. A failing
    /// object is logged and skipped; the rest of its batch still draws.
    ///
    /// Draw order is insertion order *within* one topology batch. No
    /// ordering is guaranteed across topology kinds.
    pub fn render_registered_objects(&mut self) {
        let objects = self.registry.take();
        if objects.is_empty() {
            return;
        }

        self.shader.bind();

        for slot in 0..self.vertex_arrays.len() {
            let topology = self.vertex_arrays[slot].topology();
            let mut array_bound = false;

            for object in objects.iter() {
                if object.topology() != topology {
                    continue;
                }
                // The array binding persists across all objects of this
                // topology; only the first object pays for the bind.
                if !array_bound {
                    self.vertex_arrays[slot].bind();
                    array_bound = true;
                }
                if let Err(err) = self.draw_object(object.as_ref()) {
                    log::warn!("skipping renderable in {topology:?} batch: {err}");
                }
            }
        }

        self.shader.unbind();
        debug_assert!(self.registry.is_empty(), "registry must end the pass empty");
    }

    /// Upload → draw → free for one object. Buffers never outlive this call:
    /// the explicit deletes cover the success path and `VertexBuffer`'s Drop
    /// covers the error path.
    fn draw_object(&self, object: &dyn Renderable) -> Result<(), RenderError> {
        let mut buffers: Vec<VertexBuffer> = object
            .buffer_specs()
            .into_iter()
            .map(|spec| VertexBuffer::from_spec(self.device.clone(), spec))
            .collect();

        for buffer in &mut buffers {
            buffer.initialize(&self.shader)?;
        }

        self.device
            .draw_arrays(object.topology(), 0, object.vertex_count());

        for buffer in &mut buffers {
            buffer.delete();
        }
        Ok(())
    }

    /// Deletes every vertex array and the shader program. Idempotent; only
    /// the first call touches the device. Must not run while a draw pass is
    /// possible.
    pub fn dispose(&mut self) {
        if self.disposed {
            return;
        }
        debug_assert!(self.registry.is_empty(), "dispose with pending registrations");
        for vertex_array in &mut self.vertex_arrays {
            vertex_array.delete();
        }
        self.shader.dispose();
        self.disposed = true;
    }

    pub fn shader_program(&self) -> &ShaderProgram {
        &self.shader
    }

    /// Number of objects currently registered (pre-draw).
    pub fn registered_count(&self) -> usize {
        self.registry.len()
    }
}

impl Drop for Renderer {
    fn drop(&mut self) {
        self.dispose();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gpu::testing::FakeDevice;
    use crate::gpu::{AttribLayout, BufferSpec};

    struct TestObject {
        topology: Topology,
        layout: AttribLayout,
        count: i32,
    }

    impl TestObject {
        fn triangles(count: i32) -> Rc<Self> {
            Rc::new(Self {
                topology: Topology::TriangleList,
                layout: AttribLayout::PositionColor,
                count,
            })
        }

        fn lines(count: i32) -> Rc<Self> {
            Rc::new(Self {
                topology: Topology::LineList,
                layout: AttribLayout::PositionColor,
                count,
            })
        }

        fn textured_triangles(count: i32) -> Rc<Self> {
            Rc::new(Self {
                topology: Topology::TriangleList,
                layout: AttribLayout::PositionColorUv,
                count,
            })
        }
    }

    impl Renderable for TestObject {
        fn topology(&self) -> Topology {
            self.topology
        }

        fn buffer_specs(&self) -> Vec<BufferSpec> {
            vec![BufferSpec {
                layout: self.layout,
                data: vec![0.0; self.count as usize * self.layout.stride()],
            }]
        }

        fn vertex_count(&self) -> i32 {
            self.count
        }
    }

    fn renderer(dev: &Rc<FakeDevice>) -> Renderer {
        let shader = ShaderProgram::with_validation(dev.clone(), "vs", "fs", false).unwrap();
        Renderer::new(dev.clone(), shader)
    }

    // ── draw accounting ───────────────────────────────────────────────────

    #[test]
    fn one_draw_per_registration_with_declared_counts() {
        let dev = Rc::new(FakeDevice::default());
        let mut r = renderer(&dev);

        r.register_object(TestObject::triangles(3));
        r.register_object(TestObject::triangles(6));
        assert_eq!(r.registered_count(), 2);

        r.render_registered_objects();

        assert_eq!(
            dev.draw_calls.borrow().as_slice(),
            &[
                (Topology::TriangleList, 0, 3),
                (Topology::TriangleList, 0, 6)
            ]
        );
        assert_eq!(r.registered_count(), 0, "registry must be empty after the pass");
    }

    #[test]
    fn duplicate_registration_draws_twice() {
        let dev = Rc::new(FakeDevice::default());
        let mut r = renderer(&dev);

        let object = TestObject::triangles(3);
        r.register_object(object.clone());
        r.register_object(object);
        r.render_registered_objects();

        assert_eq!(dev.draw_calls.borrow().len(), 2);
    }

    #[test]
    fn empty_frame_issues_no_gpu_work() {
        let dev = Rc::new(FakeDevice::default());
        let mut r = renderer(&dev);

        r.render_registered_objects();

        assert!(dev.draw_calls.borrow().is_empty());
        assert!(dev.vertex_array_binds.borrow().is_empty());
        assert_eq!(dev.bound_program.get(), 0);
    }

    // ── buffer lifecycle ──────────────────────────────────────────────────

    #[test]
    fn buffers_live_only_inside_the_pass() {
        let dev = Rc::new(FakeDevice::default());
        let mut r = renderer(&dev);

        r.register_object(TestObject::triangles(3));
        r.register_object(TestObject::lines(2));
        r.render_registered_objects();

        assert!(dev.live_buffers.borrow().is_empty());
        assert_eq!(dev.buffer_deletes.get(), 2);
        assert_eq!(dev.uploads.borrow().len(), 2);
    }

    // ── failure isolation ─────────────────────────────────────────────────

    #[test]
    fn failing_object_is_skipped_and_batch_continues() {
        let dev = Rc::new(FakeDevice::default());
        let mut r = renderer(&dev);
        // The program lacks a `uv` attribute, so textured objects fail to
        // initialize their buffer.
        dev.attribs.borrow_mut().remove("uv");

        r.register_object(TestObject::triangles(3));
        r.register_object(TestObject::textured_triangles(6));
        r.register_object(TestObject::triangles(9));
        r.render_registered_objects();

        assert_eq!(
            dev.draw_calls.borrow().as_slice(),
            &[
                (Topology::TriangleList, 0, 3),
                (Topology::TriangleList, 0, 9)
            ]
        );
        assert!(dev.live_buffers.borrow().is_empty(), "failed draw must not leak");
        assert_eq!(r.registered_count(), 0);
    }

    // ── topology batching ─────────────────────────────────────────────────

    #[test]
    fn each_topology_batch_binds_its_array_once() {
        let dev = Rc::new(FakeDevice::default());
        let mut r = renderer(&dev);

        r.register_object(TestObject::triangles(3));
        r.register_object(TestObject::lines(2));
        r.register_object(TestObject::triangles(6));
        r.render_registered_objects();

        // Two topologies present, one bind each despite three objects.
        assert_eq!(dev.vertex_array_binds.borrow().len(), 2);

        // All triangle draws precede the line draws (insertion order only
        // holds within a batch).
        let draws = dev.draw_calls.borrow();
        assert_eq!(draws[0].0, Topology::TriangleList);
        assert_eq!(draws[1].0, Topology::TriangleList);
        assert_eq!(draws[2].0, Topology::LineList);
    }

    #[test]
    fn absent_topology_is_never_bound() {
        let dev = Rc::new(FakeDevice::default());
        let mut r = renderer(&dev);

        r.register_object(TestObject::triangles(3));
        r.render_registered_objects();

        assert_eq!(dev.vertex_array_binds.borrow().len(), 1);
    }

    // ── disposal ──────────────────────────────────────────────────────────

    #[test]
    fn dispose_releases_everything_once() {
        let dev = Rc::new(FakeDevice::default());
        let mut r = renderer(&dev);

        r.dispose();
        assert!(dev.live_vertex_arrays.borrow().is_empty());
        assert!(dev.live_programs.borrow().is_empty());

        let deletes = dev.program_deletes.get();
        r.dispose();
        assert_eq!(dev.program_deletes.get(), deletes, "second dispose is a no-op");
    }

    #[test]
    fn drop_leaves_no_live_gpu_objects() {
        let dev = Rc::new(FakeDevice::default());
        {
            let mut r = renderer(&dev);
            r.register_object(TestObject::triangles(3));
            r.render_registered_objects();
        }
        assert!(dev.no_live_objects());
    }
}
