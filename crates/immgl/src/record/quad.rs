/// Splits every run of four vertices into two triangles:
/// `(i0, i1, i2)` and `(i0, i2, i3)`.
///
/// A trailing group of fewer than four vertices is dropped.
pub fn quad_indices(vertex_count: usize) -> Vec<u32> {
    let quads = vertex_count / 4;
    let mut indices = Vec::with_capacity(quads * 6);
    for q in 0..quads as u32 {
        let i0 = q * 4;
        indices.extend_from_slice(&[i0, i0 + 1, i0 + 2, i0, i0 + 2, i0 + 3]);
    }
    indices
}
