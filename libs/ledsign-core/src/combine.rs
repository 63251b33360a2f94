//! # Mesh Combiner
//!
//! Merges independent hole solids into one compound cutter.

use ledsign_mesh::Mesh;

/// Disjoint union of `solids`.
///
/// Empty solids are skipped. With nothing left, the result is the empty
/// sentinel. Vertices are not welded; the inputs are assumed not to overlap.
///
/// # Example
///
/// ```rust
/// use ledsign_core::combine;
/// use ledsign_mesh::Mesh;
///
/// assert!(combine(&[]).is_empty());
/// assert!(combine(&[Mesh::new(), Mesh::new()]).is_empty());
/// ```
pub fn combine(solids: &[Mesh]) -> Mesh {
    let live = || solids.iter().filter(|solid| !solid.is_empty());

    let vertex_total = live().map(Mesh::vertex_count).sum();
    let triangle_total = live().map(Mesh::triangle_count).sum();
    let mut combined = Mesh::with_capacity(vertex_total, triangle_total);

    for solid in live() {
        combined.merge(solid);
    }
    combined
}
