use std::rc::Rc;

use super::device::{GlDevice, GlHandle, Topology};

/// Device-side attribute grouping for one topology kind.
///
/// Created at renderer init and deleted at renderer dispose; the handle
/// lives for the whole renderer lifetime. The array never owns vertex
/// buffers; it is bound once per topology batch while per-object buffers
/// come and go underneath it.
pub struct VertexArray {
    device: Rc<dyn GlDevice>,
    handle: GlHandle,
    topology: Topology,
}

impl VertexArray {
    pub fn new(device: Rc<dyn GlDevice>, topology: Topology) -> Self {
        let handle = device.gen_vertex_array();
        Self {
            device,
            handle,
            topology,
        }
    }

    pub fn bind(&self) {
        self.device.bind_vertex_array(self.handle);
    }

    pub fn topology(&self) -> Topology {
        self.topology
    }

    pub fn handle(&self) -> GlHandle {
        self.handle
    }

    /// Frees the device handle. Idempotent; `Drop` calls it too.
    pub fn delete(&mut self) {
        if self.handle != 0 {
            self.device.delete_vertex_array(self.handle);
            self.handle = 0;
        }
    }
}

impl Drop for VertexArray {
    fn drop(&mut self) {
        self.delete();
    }
}
