//! The immediate-mode context.
//!
//! [`ImmediateContext`] owns one device, the shared program, the four matrix
//! stacks, the current attributes and the primitive recorder. Its methods are
//! the legacy call model; [`compat`] adds the per-width legacy names.

pub mod compat;
mod finalize;
mod init;

pub use init::ContextInit;

use anyhow::Result;
use glam::{Mat4, Vec3, Vec4};

use crate::attrib::AttribState;
use crate::device::Device;
use crate::matrix::{MatrixMode, MatrixStacks};
use crate::record::{Recorder, Scratch, Topology, Vertex};
use crate::scalar::{ColorChannel, NormalComponent, Real, VertexInt};
use crate::shader::ShaderProgram;

/// Legacy fixed-function state machine over a [`Device`].
///
/// Single-threaded by contract: every call is a direct mutation or a direct
/// device call. The program is deleted when the context is dropped, so the
/// context must not outlive the device's GL context.
pub struct ImmediateContext<D: Device> {
    device: D,
    shader: ShaderProgram<D>,
    matrices: MatrixStacks,
    attribs: AttribState,
    recorder: Recorder,
}

impl<D: Device> ImmediateContext<D> {
    /// Creates a context and builds its program.
    ///
    /// # Panics
    /// Panics if the program fails to compile or link. Nothing can be drawn
    /// without it.
    pub fn new(device: D, init: ContextInit) -> Self {
        match Self::try_new(device, init) {
            Ok(ctx) => ctx,
            Err(err) => panic!("immediate-mode context unusable: {err:#}"),
        }
    }

    /// Like [`new`](Self::new) but hands back the build error.
    pub fn try_new(mut device: D, init: ContextInit) -> Result<Self> {
        let shader = ShaderProgram::build(&mut device, init.glsl_version.as_deref())?;
        Ok(Self {
            device,
            shader,
            matrices: MatrixStacks::new(init.initial_mode),
            attribs: AttribState::new(),
            recorder: Recorder::new(),
        })
    }

    #[inline]
    pub fn device(&self) -> &D {
        &self.device
    }

    #[inline]
    pub fn device_mut(&mut self) -> &mut D {
        &mut self.device
    }

    #[inline]
    pub fn program(&self) -> D::Program {
        self.shader.program
    }

    // ── matrix mode ───────────────────────────────────────────────────────

    #[inline]
    pub fn set_matrix_mode(&mut self, mode: MatrixMode) {
        self.matrices.set_mode(mode);
    }

    /// # Panics
    /// Panics on a value that is not a matrix mode.
    #[inline]
    pub fn set_matrix_mode_raw(&mut self, raw: u32) {
        self.matrices.set_mode_raw(raw);
    }

    #[inline]
    pub fn mode(&self) -> MatrixMode {
        self.matrices.mode()
    }

    // ── matrix stacks ─────────────────────────────────────────────────────

    #[inline]
    pub fn matrices(&self) -> &MatrixStacks {
        &self.matrices
    }

    /// Top of the active stack.
    #[inline]
    pub fn current_matrix(&self) -> Mat4 {
        self.matrices.current()
    }

    #[inline]
    pub fn matrix(&self, mode: MatrixMode) -> Mat4 {
        self.matrices.top(mode)
    }

    #[inline]
    pub fn stack_depth(&self, mode: MatrixMode) -> usize {
        self.matrices.depth(mode)
    }

    pub fn load_identity(&mut self) {
        self.matrices.load_identity();
    }

    pub fn push_matrix(&mut self) {
        self.matrices.push();
    }

    pub fn pop_matrix(&mut self) {
        self.matrices.pop();
    }

    pub fn load_matrix<T: Real>(&mut self, m: &[T; 16]) {
        self.matrices.load(m);
    }

    pub fn mult_matrix<T: Real>(&mut self, m: &[T; 16]) {
        self.matrices.multiply(m);
    }

    pub fn load_transpose_matrix<T: Real>(&mut self, m: &[T; 16]) {
        self.matrices.load_transpose(m);
    }

    pub fn mult_transpose_matrix<T: Real>(&mut self, m: &[T; 16]) {
        self.matrices.multiply_transpose(m);
    }

    pub fn translate<T: Real>(&mut self, x: T, y: T, z: T) {
        self.matrices.translate(x, y, z);
    }

    pub fn scale<T: Real>(&mut self, x: T, y: T, z: T) {
        self.matrices.scale(x, y, z);
    }

    /// `angle` in degrees.
    pub fn rotate<T: Real>(&mut self, angle: T, x: T, y: T, z: T) {
        self.matrices.rotate(angle, x, y, z);
    }

    pub fn ortho(&mut self, left: f64, right: f64, bottom: f64, top: f64, near: f64, far: f64) {
        self.matrices.ortho(left, right, bottom, top, near, far);
    }

    pub fn ortho_2d(&mut self, left: f64, right: f64, bottom: f64, top: f64) {
        self.matrices.ortho_2d(left, right, bottom, top);
    }

    pub fn frustum(&mut self, left: f64, right: f64, bottom: f64, top: f64, near: f64, far: f64) {
        self.matrices.frustum(left, right, bottom, top, near, far);
    }

    /// `fovy` in degrees.
    pub fn perspective(&mut self, fovy: f64, aspect: f64, near: f64, far: f64) {
        self.matrices.perspective(fovy, aspect, near, far);
    }

    // ── attributes ────────────────────────────────────────────────────────

    #[inline]
    pub fn current_color(&self) -> Vec4 {
        self.attribs.color()
    }

    #[inline]
    pub fn current_normal(&self) -> Vec3 {
        self.attribs.normal()
    }

    /// Sets RGB; alpha is left as it was.
    pub fn color3<T: ColorChannel>(&mut self, r: T, g: T, b: T) {
        self.attribs.set_color3(r, g, b);
    }

    pub fn color4<T: ColorChannel>(&mut self, r: T, g: T, b: T, a: T) {
        self.attribs.set_color4(r, g, b, a);
    }

    pub fn color3v<T: ColorChannel>(&mut self, v: &[T; 3]) {
        self.attribs.set_color3(v[0], v[1], v[2]);
    }

    pub fn color4v<T: ColorChannel>(&mut self, v: &[T; 4]) {
        self.attribs.set_color4(v[0], v[1], v[2], v[3]);
    }

    pub fn normal3<T: NormalComponent>(&mut self, x: T, y: T, z: T) {
        self.attribs.set_normal(x, y, z);
    }

    pub fn normal3v<T: NormalComponent>(&mut self, v: &[T; 3]) {
        self.attribs.set_normal(v[0], v[1], v[2]);
    }

    /// Tracks the normalize capability. The flag is not applied to normals.
    pub fn set_normalize(&mut self, enabled: bool) {
        self.attribs.set_normalize(enabled);
    }

    #[inline]
    pub fn normalize_enabled(&self) -> bool {
        self.attribs.normalize_enabled()
    }

    // ── recording ─────────────────────────────────────────────────────────

    /// Opens a primitive block. Ignored while one is open.
    pub fn begin(&mut self, topology: Topology) {
        self.recorder.begin(topology);
    }

    /// Opens a block from a legacy topology value. Unknown values are ignored.
    pub fn begin_raw(&mut self, raw: u32) {
        match Topology::from_raw(raw) {
            Some(topology) => self.begin(topology),
            None => log::warn!("begin with unknown primitive type {raw:#06x} ignored"),
        }
    }

    #[inline]
    pub fn is_recording(&self) -> bool {
        self.recorder.is_recording()
    }

    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.recorder.vertex_count()
    }

    /// Vertices of the open block.
    #[inline]
    pub fn recorded_vertices(&self) -> &[Vertex] {
        self.recorder.vertices()
    }

    #[inline]
    pub fn scratch(&self) -> Scratch {
        self.recorder.scratch()
    }

    pub fn vertex3<T: Real>(&mut self, x: T, y: T, z: T) {
        let color = self.attribs.color();
        self.recorder.vertex3(x, y, z, color);
    }

    pub fn vertex4<T: Real>(&mut self, x: T, y: T, z: T, w: T) {
        let color = self.attribs.color();
        self.recorder.vertex4(x, y, z, w, color);
    }

    pub fn vertex3v<T: Real>(&mut self, v: &[T; 3]) {
        self.vertex3(v[0], v[1], v[2]);
    }

    pub fn vertex4v<T: Real>(&mut self, v: &[T; 4]) {
        self.vertex4(v[0], v[1], v[2], v[3]);
    }

    /// Not drawn; only updates the scratch registers.
    pub fn vertex2<T: Real>(&mut self, x: T, y: T) {
        self.recorder.vertex2(x, y);
    }

    /// Not drawn; only updates the scratch registers.
    pub fn vertex2v<T: Real>(&mut self, v: &[T; 2]) {
        self.recorder.vertex2(v[0], v[1]);
    }

    /// Not drawn; only updates the scratch registers.
    pub fn vertex2_int<T: VertexInt>(&mut self, x: T, y: T) {
        self.recorder.vertex2i(x, y);
    }

    /// Not drawn; only updates the scratch registers.
    pub fn vertex3_int<T: VertexInt>(&mut self, x: T, y: T, z: T) {
        self.recorder.vertex3i(x, y, z);
    }

    /// Not drawn; only updates the scratch registers.
    pub fn vertex4_int<T: VertexInt>(&mut self, x: T, y: T, z: T, w: T) {
        self.recorder.vertex4i(x, y, z, w);
    }
}

impl<D: Device> Drop for ImmediateContext<D> {
    fn drop(&mut self) {
        if self.recorder.is_recording() {
            log::debug!("context dropped with an open block; {} vertices discarded", self.vertex_count());
        }
        self.device.delete_program(self.shader.program);
    }
}
