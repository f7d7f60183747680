//! Production [`GlDevice`] backend over the `gl` crate.
//!
//! All unsafe FFI lives in this file. Every method requires a current GL
//! context on the calling thread; [`RawGl::load_with`] verifies that the
//! function pointers actually resolved before handing out a device.

use std::ffi::{CString, c_void};
use std::marker::PhantomData;
use std::rc::Rc;

use anyhow::Result;
use gl::types::{GLchar, GLint, GLsizei, GLsizeiptr, GLuint};

use super::device::{GlDevice, GlHandle, ShaderStage, Topology};

/// GL-backed device. `!Send`: the thread that loaded the context owns it.
pub struct RawGl {
    _not_send: PhantomData<*const ()>,
}

impl RawGl {
    /// Loads GL function pointers through `loader` (e.g. the window
    /// collaborator's `get_proc_address`) and returns a shared device.
    ///
    /// Fails if the pointers did not resolve, which almost always means no
    /// context is current on this thread.
    pub fn load_with<F>(loader: F) -> Result<Rc<Self>>
    where
        F: FnMut(&'static str) -> *const c_void,
    {
        gl::load_with(loader);
        anyhow::ensure!(
            gl::CreateShader::is_loaded() && gl::GenBuffers::is_loaded(),
            "OpenGL function pointers did not load; is a context current on this thread?"
        );
        Ok(Rc::new(Self {
            _not_send: PhantomData,
        }))
    }
}

fn shader_info_log(shader: GLuint) -> String {
    unsafe {
        let mut len: GLint = 0;
        gl::GetShaderiv(shader, gl::INFO_LOG_LENGTH, &mut len);
        if len <= 0 {
            return String::new();
        }
        let mut buf = vec![0u8; len as usize];
        let mut written: GLsizei = 0;
        gl::GetShaderInfoLog(shader, len, &mut written, buf.as_mut_ptr() as *mut GLchar);
        buf.truncate(written.max(0) as usize);
        String::from_utf8_lossy(&buf).into_owned()
    }
}

fn program_info_log(program: GLuint) -> String {
    unsafe {
        let mut len: GLint = 0;
        gl::GetProgramiv(program, gl::INFO_LOG_LENGTH, &mut len);
        if len <= 0 {
            return String::new();
        }
        let mut buf = vec![0u8; len as usize];
        let mut written: GLsizei = 0;
        gl::GetProgramInfoLog(program, len, &mut written, buf.as_mut_ptr() as *mut GLchar);
        buf.truncate(written.max(0) as usize);
        String::from_utf8_lossy(&buf).into_owned()
    }
}

impl GlDevice for RawGl {
    fn create_shader(&self, stage: ShaderStage) -> GlHandle {
        let kind = match stage {
            ShaderStage::Vertex => gl::VERTEX_SHADER,
            ShaderStage::Fragment => gl::FRAGMENT_SHADER,
        };
        unsafe { gl::CreateShader(kind) }
    }

    fn shader_source(&self, shader: GlHandle, source: &str) {
        let Ok(source) = CString::new(source) else {
            // Interior NUL cannot come from a text file read; refuse rather
            // than truncating silently. Compilation of the empty source will
            // then fail with a driver diagnostic.
            log::error!("shader source contains an interior NUL byte; ignoring");
            return;
        };
        unsafe {
            gl::ShaderSource(shader, 1, &source.as_ptr(), std::ptr::null());
        }
    }

    fn compile_shader(&self, shader: GlHandle) -> Result<(), String> {
        unsafe {
            gl::CompileShader(shader);
            let mut status: GLint = 0;
            gl::GetShaderiv(shader, gl::COMPILE_STATUS, &mut status);
            if status == gl::TRUE as GLint {
                Ok(())
            } else {
                Err(shader_info_log(shader))
            }
        }
    }

    fn delete_shader(&self, shader: GlHandle) {
        unsafe { gl::DeleteShader(shader) }
    }

    fn create_program(&self) -> GlHandle {
        unsafe { gl::CreateProgram() }
    }

    fn attach_shader(&self, program: GlHandle, shader: GlHandle) {
        unsafe { gl::AttachShader(program, shader) }
    }

    fn detach_shader(&self, program: GlHandle, shader: GlHandle) {
        unsafe { gl::DetachShader(program, shader) }
    }

    fn link_program(&self, program: GlHandle) -> Result<(), String> {
        unsafe {
            gl::LinkProgram(program);
            let mut status: GLint = 0;
            gl::GetProgramiv(program, gl::LINK_STATUS, &mut status);
            if status == gl::TRUE as GLint {
                Ok(())
            } else {
                Err(program_info_log(program))
            }
        }
    }

    fn validate_program(&self, program: GlHandle) -> Result<(), String> {
        unsafe {
            gl::ValidateProgram(program);
            let mut status: GLint = 0;
            gl::GetProgramiv(program, gl::VALIDATE_STATUS, &mut status);
            if status == gl::TRUE as GLint {
                Ok(())
            } else {
                Err(program_info_log(program))
            }
        }
    }

    fn use_program(&self, program: GlHandle) {
        unsafe { gl::UseProgram(program) }
    }

    fn delete_program(&self, program: GlHandle) {
        unsafe { gl::DeleteProgram(program) }
    }

    fn attrib_location(&self, program: GlHandle, name: &str) -> Option<u32> {
        let name = CString::new(name).ok()?;
        let location = unsafe { gl::GetAttribLocation(program, name.as_ptr()) };
        u32::try_from(location).ok()
    }

    fn gen_buffer(&self) -> GlHandle {
        let mut handle: GLuint = 0;
        unsafe { gl::GenBuffers(1, &mut handle) };
        handle
    }

    fn bind_array_buffer(&self, buffer: GlHandle) {
        unsafe { gl::BindBuffer(gl::ARRAY_BUFFER, buffer) }
    }

    fn upload_array_buffer(&self, data: &[f32]) {
        unsafe {
            gl::BufferData(
                gl::ARRAY_BUFFER,
                std::mem::size_of_val(data) as GLsizeiptr,
                data.as_ptr() as *const c_void,
                // Buffers live for exactly one draw; STREAM_DRAW matches
                // that usage pattern.
                gl::STREAM_DRAW,
            );
        }
    }

    fn enable_attrib(&self, location: u32) {
        unsafe { gl::EnableVertexAttribArray(location) }
    }

    fn attrib_pointer(&self, location: u32, components: i32, stride: i32, offset: i32) {
        let float = std::mem::size_of::<f32>();
        unsafe {
            gl::VertexAttribPointer(
                location,
                components,
                gl::FLOAT,
                gl::FALSE,
                stride * float as GLsizei,
                (offset as usize * float) as *const c_void,
            );
        }
    }

    fn delete_buffer(&self, buffer: GlHandle) {
        unsafe { gl::DeleteBuffers(1, &buffer) }
    }

    fn gen_vertex_array(&self) -> GlHandle {
        let mut handle: GLuint = 0;
        unsafe { gl::GenVertexArrays(1, &mut handle) };
        handle
    }

    fn bind_vertex_array(&self, vertex_array: GlHandle) {
        unsafe { gl::BindVertexArray(vertex_array) }
    }

    fn delete_vertex_array(&self, vertex_array: GlHandle) {
        unsafe { gl::DeleteVertexArrays(1, &vertex_array) }
    }

    fn draw_arrays(&self, topology: Topology, first: i32, count: i32) {
        let mode = match topology {
            Topology::TriangleList => gl::TRIANGLES,
            Topology::LineList => gl::LINES,
        };
        unsafe { gl::DrawArrays(mode, first, count) }
    }
}
