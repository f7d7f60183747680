//! Recording fake [`GlDevice`] for tests.
//!
//! Tracks live handles per object kind so tests can assert create/delete
//! symmetry, records draw calls and bind sequences, and injects compile,
//! link, and validate failures with canned driver diagnostics.

use std::cell::{Cell, RefCell};
use std::collections::{HashMap, HashSet};

use super::device::{GlDevice, GlHandle, ShaderStage, Topology};

pub(crate) struct FakeDevice {
    next_handle: Cell<GlHandle>,

    pub live_shaders: RefCell<HashSet<GlHandle>>,
    pub live_programs: RefCell<HashSet<GlHandle>>,
    pub live_buffers: RefCell<HashSet<GlHandle>>,
    pub live_vertex_arrays: RefCell<HashSet<GlHandle>>,

    shader_stages: RefCell<HashMap<GlHandle, ShaderStage>>,

    /// Attribute name → location table the fake "program" exposes.
    pub attribs: RefCell<HashMap<String, u32>>,

    pub bound_program: Cell<GlHandle>,
    pub bound_vertex_array: Cell<GlHandle>,

    /// Every `bind_vertex_array` call in order (including rebinds).
    pub vertex_array_binds: RefCell<Vec<GlHandle>>,
    /// Float counts of every array-buffer upload.
    pub uploads: RefCell<Vec<usize>>,
    /// `(location, components, stride, offset)` per attrib_pointer call.
    pub attrib_pointers: RefCell<Vec<(u32, i32, i32, i32)>>,
    /// `(topology, first, count)` per draw call.
    pub draw_calls: RefCell<Vec<(Topology, i32, i32)>>,

    pub program_deletes: Cell<u32>,
    pub buffer_deletes: Cell<u32>,

    pub fail_vertex_compile: RefCell<Option<String>>,
    pub fail_fragment_compile: RefCell<Option<String>>,
    pub fail_link: RefCell<Option<String>>,
    pub fail_validate: RefCell<Option<String>>,
}

impl Default for FakeDevice {
    fn default() -> Self {
        let mut attribs = HashMap::new();
        attribs.insert("position".to_string(), 0);
        attribs.insert("color".to_string(), 1);
        attribs.insert("uv".to_string(), 2);

        Self {
            next_handle: Cell::new(1),
            live_shaders: RefCell::default(),
            live_programs: RefCell::default(),
            live_buffers: RefCell::default(),
            live_vertex_arrays: RefCell::default(),
            shader_stages: RefCell::default(),
            attribs: RefCell::new(attribs),
            bound_program: Cell::new(0),
            bound_vertex_array: Cell::new(0),
            vertex_array_binds: RefCell::default(),
            uploads: RefCell::default(),
            attrib_pointers: RefCell::default(),
            draw_calls: RefCell::default(),
            program_deletes: Cell::new(0),
            buffer_deletes: Cell::new(0),
            fail_vertex_compile: RefCell::default(),
            fail_fragment_compile: RefCell::default(),
            fail_link: RefCell::default(),
            fail_validate: RefCell::default(),
        }
    }
}

impl FakeDevice {
    fn alloc(&self) -> GlHandle {
        let handle = self.next_handle.get();
        self.next_handle.set(handle + 1);
        handle
    }

    /// True when no buffer, program, shader, or vertex array is live.
    pub fn no_live_objects(&self) -> bool {
        self.live_shaders.borrow().is_empty()
            && self.live_programs.borrow().is_empty()
            && self.live_buffers.borrow().is_empty()
            && self.live_vertex_arrays.borrow().is_empty()
    }
}

impl GlDevice for FakeDevice {
    fn create_shader(&self, stage: ShaderStage) -> GlHandle {
        let handle = self.alloc();
        self.live_shaders.borrow_mut().insert(handle);
        self.shader_stages.borrow_mut().insert(handle, stage);
        handle
    }

    fn shader_source(&self, _shader: GlHandle, _source: &str) {}

    fn compile_shader(&self, shader: GlHandle) -> Result<(), String> {
        let stage = self.shader_stages.borrow()[&shader];
        let failure = match stage {
            ShaderStage::Vertex => self.fail_vertex_compile.borrow().clone(),
            ShaderStage::Fragment => self.fail_fragment_compile.borrow().clone(),
        };
        match failure {
            Some(log) => Err(log),
            None => Ok(()),
        }
    }

    fn delete_shader(&self, shader: GlHandle) {
        self.live_shaders.borrow_mut().remove(&shader);
    }

    fn create_program(&self) -> GlHandle {
        let handle = self.alloc();
        self.live_programs.borrow_mut().insert(handle);
        handle
    }

    fn attach_shader(&self, _program: GlHandle, _shader: GlHandle) {}

    fn detach_shader(&self, _program: GlHandle, _shader: GlHandle) {}

    fn link_program(&self, _program: GlHandle) -> Result<(), String> {
        match self.fail_link.borrow().clone() {
            Some(log) => Err(log),
            None => Ok(()),
        }
    }

    fn validate_program(&self, _program: GlHandle) -> Result<(), String> {
        match self.fail_validate.borrow().clone() {
            Some(log) => Err(log),
            None => Ok(()),
        }
    }

    fn use_program(&self, program: GlHandle) {
        self.bound_program.set(program);
    }

    fn delete_program(&self, program: GlHandle) {
        self.live_programs.borrow_mut().remove(&program);
        self.program_deletes.set(self.program_deletes.get() + 1);
    }

    fn attrib_location(&self, _program: GlHandle, name: &str) -> Option<u32> {
        self.attribs.borrow().get(name).copied()
    }

    fn gen_buffer(&self) -> GlHandle {
        let handle = self.alloc();
        self.live_buffers.borrow_mut().insert(handle);
        handle
    }

    fn bind_array_buffer(&self, _buffer: GlHandle) {}

    fn upload_array_buffer(&self, data: &[f32]) {
        self.uploads.borrow_mut().push(data.len());
    }

    fn enable_attrib(&self, _location: u32) {}

    fn attrib_pointer(&self, location: u32, components: i32, stride: i32, offset: i32) {
        self.attrib_pointers
            .borrow_mut()
            .push((location, components, stride, offset));
    }

    fn delete_buffer(&self, buffer: GlHandle) {
        self.live_buffers.borrow_mut().remove(&buffer);
        self.buffer_deletes.set(self.buffer_deletes.get() + 1);
    }

    fn gen_vertex_array(&self) -> GlHandle {
        let handle = self.alloc();
        self.live_vertex_arrays.borrow_mut().insert(handle);
        handle
    }

    fn bind_vertex_array(&self, vertex_array: GlHandle) {
        self.bound_vertex_array.set(vertex_array);
        self.vertex_array_binds.borrow_mut().push(vertex_array);
    }

    fn delete_vertex_array(&self, vertex_array: GlHandle) {
        self.live_vertex_arrays.borrow_mut().remove(&vertex_array);
    }

    fn draw_arrays(&self, topology: Topology, first: i32, count: i32) {
        self.draw_calls.borrow_mut().push((topology, first, count));
    }
}
