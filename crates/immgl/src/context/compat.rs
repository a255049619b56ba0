//! Legacy-named entry points.
//!
//! One method per legacy name and source width (`color3ub`, `vertex3fv`,
//! `load_matrixd`, ...). Each forwards to the generic method on
//! [`ImmediateContext`]; width conversion lives in [`crate::scalar`].

use crate::device::Device;

use super::ImmediateContext;

macro_rules! color_entry_points {
    ($($c3:ident $c4:ident $c3v:ident $c4v:ident: $t:ty;)*) => {
        impl<D: Device> ImmediateContext<D> {
            $(
                #[inline]
                pub fn $c3(&mut self, red: $t, green: $t, blue: $t) {
                    self.color3(red, green, blue);
                }

                #[inline]
                pub fn $c4(&mut self, red: $t, green: $t, blue: $t, alpha: $t) {
                    self.color4(red, green, blue, alpha);
                }

                #[inline]
                pub fn $c3v(&mut self, v: &[$t; 3]) {
                    self.color3v(v);
                }

                #[inline]
                pub fn $c4v(&mut self, v: &[$t; 4]) {
                    self.color4v(v);
                }
            )*
        }
    };
}

color_entry_points! {
    color3b  color4b  color3bv  color4bv:  i8;
    color3s  color4s  color3sv  color4sv:  i16;
    color3i  color4i  color3iv  color4iv:  i32;
    color3f  color4f  color3fv  color4fv:  f32;
    color3d  color4d  color3dv  color4dv:  f64;
    color3ub color4ub color3ubv color4ubv: u8;
    color3us color4us color3usv color4usv: u16;
    color3ui color4ui color3uiv color4uiv: u32;
}

macro_rules! normal_entry_points {
    ($($n:ident $nv:ident: $t:ty;)*) => {
        impl<D: Device> ImmediateContext<D> {
            $(
                #[inline]
                pub fn $n(&mut self, nx: $t, ny: $t, nz: $t) {
                    self.normal3(nx, ny, nz);
                }

                #[inline]
                pub fn $nv(&mut self, v: &[$t; 3]) {
                    self.normal3v(v);
                }
            )*
        }
    };
}

normal_entry_points! {
    normal3b normal3bv: i8;
    normal3s normal3sv: i16;
    normal3i normal3iv: i32;
    normal3f normal3fv: f32;
    normal3d normal3dv: f64;
}

macro_rules! float_vertex_entry_points {
    ($($v2:ident $v3:ident $v4:ident $v2v:ident $v3v:ident $v4v:ident: $t:ty;)*) => {
        impl<D: Device> ImmediateContext<D> {
            $(
                #[inline]
                pub fn $v2(&mut self, x: $t, y: $t) {
                    self.vertex2(x, y);
                }

                #[inline]
                pub fn $v3(&mut self, x: $t, y: $t, z: $t) {
                    self.vertex3(x, y, z);
                }

                #[inline]
                pub fn $v4(&mut self, x: $t, y: $t, z: $t, w: $t) {
                    self.vertex4(x, y, z, w);
                }

                #[inline]
                pub fn $v2v(&mut self, v: &[$t; 2]) {
                    self.vertex2v(v);
                }

                #[inline]
                pub fn $v3v(&mut self, v: &[$t; 3]) {
                    self.vertex3v(v);
                }

                #[inline]
                pub fn $v4v(&mut self, v: &[$t; 4]) {
                    self.vertex4v(v);
                }
            )*
        }
    };
}

float_vertex_entry_points! {
    vertex2f vertex3f vertex4f vertex2fv vertex3fv vertex4fv: f32;
    vertex2d vertex3d vertex4d vertex2dv vertex3dv vertex4dv: f64;
}

macro_rules! int_vertex_entry_points {
    ($($v2:ident $v3:ident $v4:ident $v2v:ident $v3v:ident $v4v:ident: $t:ty;)*) => {
        impl<D: Device> ImmediateContext<D> {
            $(
                #[inline]
                pub fn $v2(&mut self, x: $t, y: $t) {
                    self.vertex2_int(x, y);
                }

                #[inline]
                pub fn $v3(&mut self, x: $t, y: $t, z: $t) {
                    self.vertex3_int(x, y, z);
                }

                #[inline]
                pub fn $v4(&mut self, x: $t, y: $t, z: $t, w: $t) {
                    self.vertex4_int(x, y, z, w);
                }

                #[inline]
                pub fn $v2v(&mut self, v: &[$t; 2]) {
                    self.vertex2_int(v[0], v[1]);
                }

                #[inline]
                pub fn $v3v(&mut self, v: &[$t; 3]) {
                    self.vertex3_int(v[0], v[1], v[2]);
                }

                #[inline]
                pub fn $v4v(&mut self, v: &[$t; 4]) {
                    self.vertex4_int(v[0], v[1], v[2], v[3]);
                }
            )*
        }
    };
}

int_vertex_entry_points! {
    vertex2s vertex3s vertex4s vertex2sv vertex3sv vertex4sv: i16;
    vertex2i vertex3i vertex4i vertex2iv vertex3iv vertex4iv: i32;
}

macro_rules! matrix_entry_points {
    ($($load:ident $mult:ident $load_t:ident $mult_t:ident $tr:ident $sc:ident $rot:ident: $t:ty;)*) => {
        impl<D: Device> ImmediateContext<D> {
            $(
                #[inline]
                pub fn $load(&mut self, m: &[$t; 16]) {
                    self.load_matrix(m);
                }

                #[inline]
                pub fn $mult(&mut self, m: &[$t; 16]) {
                    self.mult_matrix(m);
                }

                #[inline]
                pub fn $load_t(&mut self, m: &[$t; 16]) {
                    self.load_transpose_matrix(m);
                }

                #[inline]
                pub fn $mult_t(&mut self, m: &[$t; 16]) {
                    self.mult_transpose_matrix(m);
                }

                #[inline]
                pub fn $tr(&mut self, x: $t, y: $t, z: $t) {
                    self.translate(x, y, z);
                }

                #[inline]
                pub fn $sc(&mut self, x: $t, y: $t, z: $t) {
                    self.scale(x, y, z);
                }

                #[inline]
                pub fn $rot(&mut self, angle: $t, x: $t, y: $t, z: $t) {
                    self.rotate(angle, x, y, z);
                }
            )*
        }
    };
}

matrix_entry_points! {
    load_matrixf mult_matrixf load_transpose_matrixf mult_transpose_matrixf translatef scalef rotatef: f32;
    load_matrixd mult_matrixd load_transpose_matrixd mult_transpose_matrixd translated scaled rotated: f64;
}

impl<D: Device> ImmediateContext<D> {
    /// `glMatrixMode`.
    ///
    /// # Panics
    /// Panics on a value that is not a matrix mode.
    #[inline]
    pub fn matrix_mode(&mut self, mode: u32) {
        self.set_matrix_mode_raw(mode);
    }

    /// Active mode as its legacy enum value.
    #[inline]
    pub fn get_matrix_mode(&self) -> u32 {
        self.mode().to_raw()
    }
}

#[cfg(test)]
mod tests {
    use glam::{Mat4, Vec3, Vec4};

    use crate::context::ContextInit;
    use crate::device::TraceDevice;
    use crate::matrix::{from_row_major, MatrixMode};
    use crate::record::Topology;

    use super::*;

    fn ctx() -> ImmediateContext<TraceDevice> {
        ImmediateContext::new(TraceDevice::default(), ContextInit::default())
    }

    #[test]
    fn integer_color_variants_normalize() {
        let mut c = ctx();
        c.color4ub(255, 0, 0, 255);
        assert_eq!(c.current_color(), Vec4::new(1.0, 0.0, 0.0, 1.0));
        c.color3us(0, 255, 0);
        assert_eq!(c.current_color(), Vec4::new(0.0, 1.0, 0.0, 1.0));
        c.color4iv(&[0, 0, 255, 0]);
        assert_eq!(c.current_color(), Vec4::new(0.0, 0.0, 1.0, 0.0));
    }

    #[test]
    fn float_color_variants_pass_through() {
        let mut c = ctx();
        c.color4d(0.25, 0.5, 0.75, 1.0);
        assert_eq!(c.current_color(), Vec4::new(0.25, 0.5, 0.75, 1.0));
        c.color3fv(&[1.0, 1.0, 1.0]);
        assert_eq!(c.current_color(), Vec4::ONE);
    }

    #[test]
    fn normal_variants() {
        let mut c = ctx();
        c.normal3s(0, -2, 0);
        assert_eq!(c.current_normal(), Vec3::new(0.0, -2.0, 0.0));
        c.normal3dv(&[1.0, 0.0, 0.0]);
        assert_eq!(c.current_normal(), Vec3::X);
    }

    #[test]
    fn vertex_variants() {
        let mut c = ctx();
        c.begin(Topology::Points);
        c.vertex3f(1.0, 2.0, 3.0);
        c.vertex4dv(&[1.0, 2.0, 3.0, 4.0]);
        c.vertex2f(9.0, 9.0);
        c.vertex3sv(&[1, 2, 3]);
        c.vertex4i(1, 2, 3, 4);
        assert_eq!(c.vertex_count(), 2);
        assert_eq!(c.scratch().int, [1, 2, 3, 4]);
        assert_eq!(c.recorded_vertices()[1].position, [1.0, 2.0, 3.0, 4.0]);
    }

    #[test]
    fn matrix_variants() {
        let m: [f64; 16] = [
            2.0, 0.0, 0.0, 1.0, //
            0.0, 2.0, 0.0, 2.0, //
            0.0, 0.0, 2.0, 3.0, //
            0.0, 0.0, 0.0, 1.0,
        ];
        let mut c = ctx();
        c.load_matrixd(&m);
        assert_eq!(c.current_matrix(), from_row_major(&m));

        c.load_transpose_matrixd(&m);
        assert_eq!(c.current_matrix(), from_row_major(&m).transpose());

        c.load_identity();
        c.translatef(1.0, 0.0, 0.0);
        c.scaled(2.0, 2.0, 2.0);
        assert_eq!(
            c.current_matrix(),
            Mat4::from_translation(Vec3::X) * Mat4::from_scale(Vec3::splat(2.0))
        );
    }

    #[test]
    fn raw_matrix_mode() {
        let mut c = ctx();
        assert_eq!(c.get_matrix_mode(), 0x1700);
        c.matrix_mode(0x1702);
        assert_eq!(c.mode(), MatrixMode::Texture);
        assert_eq!(c.get_matrix_mode(), 0x1702);
    }
}
