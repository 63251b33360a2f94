//! # T-Junction Repair
//!
//! BSP fragments that meet along one line are rarely split at the same
//! points. After welding, a corner of one face can sit in the middle of an
//! edge of its neighbor, and the surface stays open along that edge. This
//! pass subdivides such edges so each edge is shared by exactly two faces.

use config::constants::PLANE_EPSILON;
use glam::DVec3;
use tracing::debug;

use crate::mesh::Mesh;

/// Splits every triangle whose edges pass through other vertices of `mesh`.
///
/// A vertex counts as lying on an edge when it is within `PLANE_EPSILON` of
/// the segment and at least that far from both ends. A triangle with split
/// edges is re-fanned from a corner whose two sides are intact, or from a
/// new vertex at its centroid when no such corner exists.
pub fn split_t_junctions(mesh: &Mesh) -> Mesh {
    let vertices = mesh.vertices();
    let index = SortedByX::new(vertices);

    let mut repaired = Mesh::with_capacity(vertices.len(), mesh.triangle_count());
    for &p in vertices {
        repaired.add_vertex(p);
    }

    let mut split_faces = 0usize;
    for &face in mesh.triangles() {
        let sides = [0, 1, 2].map(|k| index.points_on(vertices, face[k], face[(k + 1) % 3]));
        if sides.iter().all(Vec::is_empty) {
            repaired.add_triangle(face[0], face[1], face[2]);
            continue;
        }
        split_faces += 1;

        // Outline: corner k, then the points on side k (from corner k to k+1)
        let mut ring = Vec::with_capacity(3 + sides.iter().map(Vec::len).sum::<usize>());
        let mut corner_at = [0usize; 3];
        for k in 0..3 {
            corner_at[k] = ring.len();
            ring.push(face[k]);
            ring.extend_from_slice(&sides[k]);
        }
        let n = ring.len();

        // Corner k borders side k and side k - 1
        let apex = (0..3).find(|&k| sides[k].is_empty() && sides[(k + 2) % 3].is_empty());
        match apex {
            Some(k) => {
                let start = corner_at[k];
                for j in 1..n - 1 {
                    repaired.add_triangle(ring[start], ring[(start + j) % n], ring[(start + j + 1) % n]);
                }
            }
            None => {
                let centroid = face
                    .iter()
                    .fold(DVec3::ZERO, |acc, &i| acc + vertices[i as usize])
                    / 3.0;
                let center = repaired.add_vertex(centroid);
                for j in 0..n {
                    repaired.add_triangle(center, ring[j], ring[(j + 1) % n]);
                }
            }
        }
    }

    if split_faces > 0 {
        debug!(
            split_faces,
            triangles = repaired.triangle_count(),
            "split faces at T-junctions"
        );
    }
    repaired
}

/// Vertex ids ordered by x, for range queries along an edge's x extent.
struct SortedByX {
    order: Vec<u32>,
    xs: Vec<f64>,
}

impl SortedByX {
    fn new(vertices: &[DVec3]) -> Self {
        let mut order: Vec<u32> = (0..vertices.len() as u32).collect();
        order.sort_by(|&a, &b| vertices[a as usize].x.total_cmp(&vertices[b as usize].x));
        let xs = order.iter().map(|&i| vertices[i as usize].x).collect();
        Self { order, xs }
    }

    /// Vertices strictly inside the edge `a → b`, ordered from `a`.
    fn points_on(&self, vertices: &[DVec3], a: u32, b: u32) -> Vec<u32> {
        let (p, q) = (vertices[a as usize], vertices[b as usize]);
        let d = q - p;
        let len2 = d.length_squared();
        if len2 == 0.0 {
            return Vec::new();
        }

        let lo = self.xs.partition_point(|&x| x < p.x.min(q.x) - PLANE_EPSILON);
        let hi = self.xs.partition_point(|&x| x <= p.x.max(q.x) + PLANE_EPSILON);

        let mut hits: Vec<(f64, u32)> = self.order[lo..hi]
            .iter()
            .copied()
            .filter(|&v| v != a && v != b)
            .filter_map(|v| {
                let w = vertices[v as usize];
                let t = (w - p).dot(d) / len2;
                let inside = t > 0.0
                    && t < 1.0
                    && w.distance(p + d * t) < PLANE_EPSILON
                    && w.distance(p) > PLANE_EPSILON
                    && w.distance(q) > PLANE_EPSILON;
                inside.then_some((t, v))
            })
            .collect();

        hits.sort_by(|x, y| x.0.total_cmp(&y.0));
        hits.into_iter().map(|(_, v)| v).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn has_edge(mesh: &Mesh, a: u32, b: u32) -> bool {
        mesh.triangles()
            .iter()
            .any(|&[x, y, z]| [(x, y), (y, z), (z, x)].contains(&(a, b)))
    }

    /// One triangle above y = 0 and two below it, meeting at a T.
    fn t_junction() -> Mesh {
        let mut mesh = Mesh::new();
        for (x, y) in [(0.0, 0.0), (2.0, 0.0), (1.0, 1.0), (1.0, 0.0), (0.0, -1.0), (2.0, -1.0)] {
            mesh.add_vertex(DVec3::new(x, y, 0.0));
        }
        mesh.add_triangle(0, 1, 2);
        mesh.add_triangle(3, 0, 4);
        mesh.add_triangle(1, 3, 5);
        mesh
    }

    #[test]
    fn test_untouched_without_junctions() {
        let mut mesh = Mesh::new();
        for p in [DVec3::ZERO, DVec3::X, DVec3::Y] {
            mesh.add_vertex(p);
        }
        mesh.add_triangle(0, 1, 2);
        assert_eq!(split_t_junctions(&mesh), mesh);
    }

    #[test]
    fn test_splits_edge_through_vertex() {
        let mesh = t_junction();
        assert!(!has_edge(&mesh, 0, 3));

        let repaired = split_t_junctions(&mesh);
        assert_eq!(repaired.triangle_count(), 4);
        assert_eq!(repaired.vertex_count(), 6);
        assert!(has_edge(&repaired, 0, 3));
        assert!(has_edge(&repaired, 3, 1));
        assert!(!has_edge(&repaired, 0, 1));
        assert!(repaired.validate());
    }

    #[test]
    fn test_area_preserved() {
        let area = |m: &Mesh| -> f64 {
            m.triangle_positions()
                .map(|[a, b, c]| (b - a).cross(c - a).z / 2.0)
                .sum()
        };
        let mesh = t_junction();
        assert!((area(&split_t_junctions(&mesh)) - area(&mesh)).abs() < 1e-12);
    }

    #[test]
    fn test_all_sides_split_uses_centroid() {
        let mut mesh = Mesh::new();
        for (x, y) in [(0.0, 0.0), (4.0, 0.0), (0.0, 4.0), (2.0, 0.0), (2.0, 2.0), (0.0, 2.0)] {
            mesh.add_vertex(DVec3::new(x, y, 0.0));
        }
        mesh.add_triangle(0, 1, 2);

        let repaired = split_t_junctions(&mesh);
        assert_eq!(repaired.vertex_count(), 7);
        assert_eq!(repaired.triangle_count(), 6);
        assert!(repaired.validate());
        assert!(has_edge(&repaired, 0, 3) && has_edge(&repaired, 3, 1));
        assert!(has_edge(&repaired, 1, 4) && has_edge(&repaired, 4, 2));
        assert!(has_edge(&repaired, 2, 5) && has_edge(&repaired, 5, 0));
    }

    #[test]
    fn test_far_vertices_ignored() {
        let mut mesh = t_junction();
        mesh.add_vertex(DVec3::new(1.0, 1e-3, 0.0));
        let repaired = split_t_junctions(&mesh);
        assert!(!has_edge(&repaired, 0, 6) && !has_edge(&repaired, 6, 1));
    }
}
