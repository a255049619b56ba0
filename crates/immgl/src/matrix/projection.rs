//! Projection matrix builders.
//!
//! Math is done in double precision and narrowed once. Degenerate volumes
//! return `None`; callers treat that as "leave the top untouched".

use glam::{DMat4, DVec4, Mat4};

/// Off-center orthographic projection (`glOrtho`).
pub fn ortho(left: f64, right: f64, bottom: f64, top: f64, near: f64, far: f64) -> Option<Mat4> {
    if left == right || bottom == top || near == far {
        return None;
    }
    Some(DMat4::orthographic_rh_gl(left, right, bottom, top, near, far).as_mat4())
}

/// Off-center perspective frustum (`glFrustum`).
pub fn frustum(left: f64, right: f64, bottom: f64, top: f64, near: f64, far: f64) -> Option<Mat4> {
    if left == right || bottom == top || near == far {
        return None;
    }

    let width = right - left;
    let height = top - bottom;
    let depth = far - near;

    let m = DMat4::from_cols(
        DVec4::new(2.0 * near / width, 0.0, 0.0, 0.0),
        DVec4::new(0.0, 2.0 * near / height, 0.0, 0.0),
        DVec4::new(
            (right + left) / width,
            (top + bottom) / height,
            -(far + near) / depth,
            -1.0,
        ),
        DVec4::new(0.0, 0.0, -2.0 * far * near / depth, 0.0),
    );
    Some(m.as_mat4())
}

/// Symmetric perspective projection (`gluPerspective`), `fovy` in degrees.
pub fn perspective(fovy: f64, aspect: f64, near: f64, far: f64) -> Option<Mat4> {
    if near == far || aspect == 0.0 {
        return None;
    }
    let half = (fovy / 2.0).to_radians();
    if half.sin() == 0.0 {
        return None;
    }
    Some(DMat4::perspective_rh_gl(fovy.to_radians(), aspect, near, far).as_mat4())
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::{Vec3, Vec4};

    fn project(m: Mat4, p: Vec3) -> Vec3 {
        let clip = m * p.extend(1.0);
        clip.truncate() / clip.w
    }

    // ── ortho ─────────────────────────────────────────────────────────────

    #[test]
    fn ortho_maps_box_corners_to_ndc() {
        let m = ortho(0.0, 800.0, 0.0, 600.0, -1.0, 1.0).unwrap();
        assert!(project(m, Vec3::new(0.0, 0.0, 0.0)).abs_diff_eq(Vec3::new(-1.0, -1.0, 0.0), 1e-6));
        assert!(project(m, Vec3::new(800.0, 600.0, 0.0)).abs_diff_eq(Vec3::new(1.0, 1.0, 0.0), 1e-6));
    }

    #[test]
    fn ortho_degenerate_is_none() {
        assert!(ortho(1.0, 1.0, 0.0, 1.0, -1.0, 1.0).is_none());
        assert!(ortho(0.0, 1.0, 2.0, 2.0, -1.0, 1.0).is_none());
        assert!(ortho(0.0, 1.0, 0.0, 1.0, 3.0, 3.0).is_none());
    }

    // ── frustum ───────────────────────────────────────────────────────────

    #[test]
    fn frustum_near_plane_maps_to_minus_one() {
        let m = frustum(-1.0, 1.0, -1.0, 1.0, 1.0, 10.0).unwrap();
        let p = project(m, Vec3::new(0.0, 0.0, -1.0));
        assert!((p.z + 1.0).abs() < 1e-6);
        let q = project(m, Vec3::new(0.0, 0.0, -10.0));
        assert!((q.z - 1.0).abs() < 1e-5);
    }

    #[test]
    fn symmetric_frustum_matches_perspective() {
        // fovy 90°, aspect 1 → tan(45°) = 1 → left/right/top/bottom = ±near.
        let f = frustum(-1.0, 1.0, -1.0, 1.0, 1.0, 100.0).unwrap();
        let p = perspective(90.0, 1.0, 1.0, 100.0).unwrap();
        assert!(f.abs_diff_eq(p, 1e-6));
    }

    #[test]
    fn frustum_w_row() {
        let m = frustum(-2.0, 2.0, -1.0, 1.0, 1.0, 5.0).unwrap();
        assert_eq!(m.row(3), Vec4::new(0.0, 0.0, -1.0, 0.0));
    }

    // ── perspective ───────────────────────────────────────────────────────

    #[test]
    fn perspective_degenerate_is_none() {
        assert!(perspective(60.0, 0.0, 0.1, 10.0).is_none());
        assert!(perspective(60.0, 1.0, 1.0, 1.0).is_none());
        assert!(perspective(0.0, 1.0, 0.1, 10.0).is_none());
    }
}
