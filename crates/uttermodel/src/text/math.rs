//! # Vector Math

/// The Euclidean (L2) norm of a vector.
pub fn compute_norm(vector: &[f32]) -> f32 {
    vector.iter().map(|x| x * x).sum::<f32>().sqrt()
}

/// Add `scale * source` into `target`, element-wise.
///
/// Elements past the shorter of the two slices are left untouched.
pub fn add_scaled(
    target: &mut [f32],
    source: &[f32],
    scale: f32,
) {
    for (t, s) in target.iter_mut().zip(source) {
        *t += s * scale;
    }
}

/// The Euclidean distance between two vectors.
pub fn euclidean_distance(
    a: &[f32],
    b: &[f32],
) -> f32 {
    a.iter()
        .zip(b)
        .map(|(x, y)| (x - y) * (x - y))
        .sum::<f32>()
        .sqrt()
}
