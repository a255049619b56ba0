use glam::{Mat4, Vec3};

use crate::scalar::Real;

use super::{from_row_major, projection, MatrixMode, MatrixStack};

/// The four mode-scoped stacks plus the mode register.
///
/// Each stack is owned independently; mode lookup yields exactly one of them,
/// so push/pop/load on one mode never touches the other three.
#[derive(Debug, Clone, PartialEq)]
pub struct MatrixStacks {
    stacks: [MatrixStack; 4],
    mode: MatrixMode,
}

impl MatrixStacks {
    pub fn new(mode: MatrixMode) -> Self {
        Self {
            stacks: Default::default(),
            mode,
        }
    }

    // ── mode ──────────────────────────────────────────────────────────────

    #[inline]
    pub fn mode(&self) -> MatrixMode {
        self.mode
    }

    #[inline]
    pub fn set_mode(&mut self, mode: MatrixMode) {
        self.mode = mode;
    }

    /// Sets the mode from a legacy enum value.
    ///
    /// # Panics
    /// Panics on a value that is not a matrix mode. This is a caller contract
    /// violation with no recovery path.
    pub fn set_mode_raw(&mut self, raw: u32) {
        match MatrixMode::from_raw(raw) {
            Some(mode) => self.mode = mode,
            None => panic!("unknown matrix mode {raw:#06x}"),
        }
    }

    // ── access ────────────────────────────────────────────────────────────

    #[inline]
    pub fn stack(&self, mode: MatrixMode) -> &MatrixStack {
        &self.stacks[mode.index()]
    }

    #[inline]
    fn active_mut(&mut self) -> &mut MatrixStack {
        &mut self.stacks[self.mode.index()]
    }

    /// Top of the stack selected by `mode`.
    #[inline]
    pub fn top(&self, mode: MatrixMode) -> Mat4 {
        self.stack(mode).top()
    }

    /// Top of the active stack.
    #[inline]
    pub fn current(&self) -> Mat4 {
        self.top(self.mode)
    }

    #[inline]
    pub fn depth(&self, mode: MatrixMode) -> usize {
        self.stack(mode).depth()
    }

    // ── push / pop ────────────────────────────────────────────────────────

    pub fn push(&mut self) {
        self.active_mut().push();
    }

    /// Pops the active stack; a no-op when only the base entry remains.
    pub fn pop(&mut self) {
        if !self.active_mut().pop() {
            log::trace!("pop on {:?} stack at depth 1 ignored", self.mode);
        }
    }

    // ── load / multiply ───────────────────────────────────────────────────

    pub fn load_identity(&mut self) {
        *self.active_mut().top_mut() = Mat4::IDENTITY;
    }

    pub fn load_mat4(&mut self, m: Mat4) {
        *self.active_mut().top_mut() = m;
    }

    pub fn multiply_mat4(&mut self, m: Mat4) {
        let top = self.active_mut().top_mut();
        *top *= m;
    }

    /// Replaces the top with a row-major matrix.
    pub fn load<T: Real>(&mut self, m: &[T; 16]) {
        self.load_mat4(from_row_major(m));
    }

    /// `top = top * m`, `m` row-major.
    pub fn multiply<T: Real>(&mut self, m: &[T; 16]) {
        self.multiply_mat4(from_row_major(m));
    }

    /// Replaces the top with the transpose of `m`.
    pub fn load_transpose<T: Real>(&mut self, m: &[T; 16]) {
        self.load_mat4(from_row_major(m).transpose());
    }

    /// `top = top * transpose(m)`.
    pub fn multiply_transpose<T: Real>(&mut self, m: &[T; 16]) {
        self.multiply_mat4(from_row_major(m).transpose());
    }

    // ── elementary transforms ─────────────────────────────────────────────

    pub fn translate<T: Real>(&mut self, x: T, y: T, z: T) {
        self.multiply_mat4(Mat4::from_translation(Vec3::new(x.to_f32(), y.to_f32(), z.to_f32())));
    }

    pub fn scale<T: Real>(&mut self, x: T, y: T, z: T) {
        self.multiply_mat4(Mat4::from_scale(Vec3::new(x.to_f32(), y.to_f32(), z.to_f32())));
    }

    /// Rotates by `angle` degrees around `(x, y, z)`. The axis is normalized;
    /// a zero axis leaves the top untouched.
    pub fn rotate<T: Real>(&mut self, angle: T, x: T, y: T, z: T) {
        let axis = Vec3::new(x.to_f32(), y.to_f32(), z.to_f32()).normalize_or_zero();
        if axis == Vec3::ZERO {
            return;
        }
        self.multiply_mat4(Mat4::from_axis_angle(axis, angle.to_f32().to_radians()));
    }

    // ── projections ───────────────────────────────────────────────────────

    pub fn ortho(&mut self, left: f64, right: f64, bottom: f64, top: f64, near: f64, far: f64) {
        if let Some(m) = projection::ortho(left, right, bottom, top, near, far) {
            self.multiply_mat4(m);
        }
    }

    /// `ortho` with near/far fixed at -1/1 (`gluOrtho2D`).
    pub fn ortho_2d(&mut self, left: f64, right: f64, bottom: f64, top: f64) {
        self.ortho(left, right, bottom, top, -1.0, 1.0);
    }

    pub fn frustum(&mut self, left: f64, right: f64, bottom: f64, top: f64, near: f64, far: f64) {
        if let Some(m) = projection::frustum(left, right, bottom, top, near, far) {
            self.multiply_mat4(m);
        }
    }

    pub fn perspective(&mut self, fovy: f64, aspect: f64, near: f64, far: f64) {
        if let Some(m) = projection::perspective(fovy, aspect, near, far) {
            self.multiply_mat4(m);
        }
    }
}

impl Default for MatrixStacks {
    fn default() -> Self {
        Self::new(MatrixMode::default())
    }
}

#[cfg(test)]
mod tests {
    use glam::Vec4;

    use super::*;

    const M: [f32; 16] = [
        1.0, 2.0, 3.0, 4.0, //
        0.0, 1.0, 5.0, 6.0, //
        0.0, 0.0, 1.0, 7.0, //
        0.0, 0.0, 0.0, 1.0,
    ];

    fn depths(s: &MatrixStacks) -> [usize; 4] {
        MatrixMode::ALL.map(|m| s.depth(m))
    }

    // ── push / pop ────────────────────────────────────────────────────────

    #[test]
    fn push_pop_restores_top() {
        for mode in MatrixMode::ALL {
            let mut s = MatrixStacks::new(mode);
            s.translate(1.0f32, 2.0, 3.0);
            let before = s.current();
            s.push();
            s.rotate(30.0f32, 0.0, 0.0, 1.0);
            s.scale(2.0f32, 2.0, 2.0);
            s.pop();
            assert_eq!(s.current(), before);
        }
    }

    #[test]
    fn push_pop_touches_only_active_stack() {
        for mode in MatrixMode::ALL {
            let mut s = MatrixStacks::new(mode);
            s.push();
            s.push();
            for other in MatrixMode::ALL {
                let expected = if other == mode { 3 } else { 1 };
                assert_eq!(s.depth(other), expected, "{other:?} after push on {mode:?}");
            }
            s.pop();
            for other in MatrixMode::ALL {
                let expected = if other == mode { 2 } else { 1 };
                assert_eq!(s.depth(other), expected, "{other:?} after pop on {mode:?}");
            }
        }
    }

    #[test]
    fn pop_on_other_mode_leaves_pushed_stack_alone() {
        let mut s = MatrixStacks::new(MatrixMode::ModelView);
        s.push();
        s.set_mode(MatrixMode::Projection);
        s.pop();
        assert_eq!(depths(&s), [2, 1, 1, 1]);
    }

    #[test]
    fn pop_at_base_keeps_entry() {
        let mut s = MatrixStacks::default();
        s.load(&M);
        s.pop();
        assert_eq!(s.depth(MatrixMode::ModelView), 1);
        assert_eq!(s.current(), from_row_major(&M));
    }

    // ── load / multiply ───────────────────────────────────────────────────

    #[test]
    fn load_then_read_back() {
        let mut s = MatrixStacks::new(MatrixMode::Texture);
        s.load(&M);
        assert!(s.top(MatrixMode::Texture).abs_diff_eq(from_row_major(&M), 1e-6));
        assert_eq!(s.top(MatrixMode::ModelView), Mat4::IDENTITY);
    }

    #[test]
    fn double_input_is_narrowed() {
        let mut s = MatrixStacks::default();
        s.load(&M.map(f64::from));
        assert_eq!(s.current(), from_row_major(&M));
    }

    #[test]
    fn identity_then_multiply_yields_m() {
        let mut s = MatrixStacks::default();
        s.translate(5.0f32, 5.0, 5.0);
        s.load_identity();
        s.multiply(&M);
        assert!(s.current().abs_diff_eq(from_row_major(&M), 1e-6));
    }

    #[test]
    fn multiply_composes_on_the_right() {
        let mut s = MatrixStacks::default();
        s.translate(10.0f32, 0.0, 0.0);
        s.scale(2.0f32, 2.0, 2.0);
        // Scale applies first in object space, then the translation.
        let p = s.current().transform_point3(Vec3::new(1.0, 0.0, 0.0));
        assert!(p.abs_diff_eq(Vec3::new(12.0, 0.0, 0.0), 1e-6));
    }

    const M_TRANSPOSED: [f32; 16] = [
        1.0, 0.0, 0.0, 0.0, //
        2.0, 1.0, 0.0, 0.0, //
        3.0, 5.0, 1.0, 0.0, //
        4.0, 6.0, 7.0, 1.0,
    ];

    #[test]
    fn transpose_variants_use_transposed_input() {
        let mut a = MatrixStacks::default();
        a.translate(1.0f32, 2.0, 3.0);
        let mut b = a.clone();

        a.multiply_transpose(&M);
        b.multiply(&M_TRANSPOSED);
        assert_eq!(a.current(), b.current());

        a.load_transpose(&M);
        b.load(&M_TRANSPOSED);
        assert_eq!(a.current(), b.current());
        // Columns of the loaded matrix are the rows of M.
        assert_eq!(a.current().x_axis, Vec4::new(1.0, 2.0, 3.0, 4.0));
        assert_eq!(a.current().w_axis, Vec4::new(0.0, 0.0, 0.0, 1.0));
    }

    // ── elementary transforms ─────────────────────────────────────────────

    #[test]
    fn rotate_about_z() {
        let mut s = MatrixStacks::default();
        s.rotate(90.0f64, 0.0, 0.0, 2.0);
        let p = s.current().transform_point3(Vec3::X);
        assert!(p.abs_diff_eq(Vec3::Y, 1e-6));
    }

    #[test]
    fn rotate_zero_axis_is_noop() {
        let mut s = MatrixStacks::default();
        s.rotate(45.0f32, 0.0, 0.0, 0.0);
        assert_eq!(s.current(), Mat4::IDENTITY);
    }

    // ── projections ───────────────────────────────────────────────────────

    #[test]
    fn ortho_2d_composes_onto_projection() {
        let mut s = MatrixStacks::new(MatrixMode::Projection);
        s.ortho_2d(0.0, 2.0, 0.0, 2.0);
        let p = s.current().transform_point3(Vec3::new(2.0, 2.0, 0.0));
        assert!(p.abs_diff_eq(Vec3::new(1.0, 1.0, 0.0), 1e-6));
        assert_eq!(s.top(MatrixMode::ModelView), Mat4::IDENTITY);
    }

    #[test]
    fn degenerate_projection_leaves_top() {
        let mut s = MatrixStacks::new(MatrixMode::Projection);
        s.load(&M);
        s.frustum(0.0, 0.0, -1.0, 1.0, 1.0, 10.0);
        s.perspective(60.0, 0.0, 1.0, 10.0);
        assert_eq!(s.current(), from_row_major(&M));
    }

    // ── mode ──────────────────────────────────────────────────────────────

    #[test]
    fn raw_mode_selects_stack() {
        let mut s = MatrixStacks::default();
        s.set_mode_raw(0x1701);
        assert_eq!(s.mode(), MatrixMode::Projection);
    }

    #[test]
    #[should_panic(expected = "unknown matrix mode")]
    fn unknown_raw_mode_panics() {
        let mut s = MatrixStacks::default();
        s.set_mode_raw(0x0BA6);
    }
}
