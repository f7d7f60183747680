use std::rc::Rc;

use super::renderable::Renderable;

/// Ordered registrations for the current frame.
///
/// Insertion order is the draw order within a topology batch. The registry
/// must be empty immediately before and after every
/// `render_registered_objects` call; the renderer drains it with
/// [`take`](Self::take) so that even a failing pass cannot leave stale
/// registrations behind.
#[derive(Default)]
pub struct FrameRegistry {
    items: Vec<Rc<dyn Renderable>>,
}

impl FrameRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a registration. Duplicates are allowed; each entry produces
    /// its own draw call.
    #[inline]
    pub fn push(&mut self, renderable: Rc<dyn Renderable>) {
        self.items.push(renderable);
    }

    /// Removes and returns every registration, leaving the registry empty
    /// (and with no allocation until the next push).
    pub fn take(&mut self) -> Vec<Rc<dyn Renderable>> {
        std::mem::take(&mut self.items)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gpu::{BufferSpec, Topology};

    struct Dummy;

    impl Renderable for Dummy {
        fn topology(&self) -> Topology {
            Topology::TriangleList
        }
        fn buffer_specs(&self) -> Vec<BufferSpec> {
            Vec::new()
        }
        fn vertex_count(&self) -> i32 {
            0
        }
    }

    #[test]
    fn take_drains_in_insertion_order() {
        let mut registry = FrameRegistry::new();
        let a: Rc<dyn Renderable> = Rc::new(Dummy);
        let b: Rc<dyn Renderable> = Rc::new(Dummy);

        registry.push(a.clone());
        registry.push(b.clone());
        assert_eq!(registry.len(), 2);

        let taken = registry.take();
        assert!(registry.is_empty());
        assert_eq!(taken.len(), 2);
        assert!(Rc::ptr_eq(&taken[0], &a));
        assert!(Rc::ptr_eq(&taken[1], &b));
    }

    #[test]
    fn duplicate_registrations_are_kept() {
        let mut registry = FrameRegistry::new();
        let a: Rc<dyn Renderable> = Rc::new(Dummy);
        registry.push(a.clone());
        registry.push(a);
        assert_eq!(registry.len(), 2);
    }
}
