//! # Convex Polygons
//!
//! Planar faces carried through the BSP, and the conversions between them and
//! indexed meshes.

use std::collections::HashMap;

use config::constants::{VERTEX_MERGE_EPSILON, WELD_SCALE};
use glam::DVec3;

use super::plane::{Plane, Side};
use crate::mesh::Mesh;
use crate::repair::split_t_junctions;

/// Convex planar polygon.
///
/// The plane is fixed at construction and inherited by split fragments, so
/// rounding in the cut points never tilts a fragment off its parent face.
#[derive(Debug, Clone)]
pub struct Polygon {
    corners: Vec<DVec3>,
    plane: Plane,
}

/// Output buckets of [`Polygon::split_into`].
#[derive(Debug, Default)]
pub struct Fragments {
    /// On the plane, facing the same way.
    pub coplanar_front: Vec<Polygon>,
    /// On the plane, facing the opposite way.
    pub coplanar_back: Vec<Polygon>,
    pub front: Vec<Polygon>,
    pub back: Vec<Polygon>,
}

impl Polygon {
    /// Builds a polygon from at least three corners. `None` when the first
    /// three corners do not span a plane.
    pub fn from_vertices(corners: Vec<DVec3>) -> Option<Self> {
        if corners.len() < 3 {
            return None;
        }
        let plane = Plane::through(corners[0], corners[1], corners[2])?;
        Some(Self { corners, plane })
    }

    pub fn vertices(&self) -> &[DVec3] {
        &self.corners
    }

    pub fn plane(&self) -> &Plane {
        &self.plane
    }

    /// Turns the polygon inside out.
    pub fn flip(&mut self) {
        self.corners.reverse();
        self.plane = self.plane.flipped();
    }

    /// Side of the whole polygon relative to `plane`.
    pub fn side(&self, plane: &Plane) -> Side {
        self.corners
            .iter()
            .fold(Side::On, |acc, &p| acc.union(plane.side_of(p)))
    }

    /// Sorts this polygon into `out`, cutting it in two if it straddles
    /// `plane`.
    pub fn split_into(&self, plane: &Plane, out: &mut Fragments) {
        match self.side(plane) {
            Side::On if self.plane.normal().dot(plane.normal()) > 0.0 => {
                out.coplanar_front.push(self.clone())
            }
            Side::On => out.coplanar_back.push(self.clone()),
            Side::Front => out.front.push(self.clone()),
            Side::Back => out.back.push(self.clone()),
            Side::Spanning => {
                let (front, back) = self.cut(plane);
                if front.len() >= 3 {
                    out.front.push(Polygon {
                        corners: front,
                        plane: self.plane,
                    });
                }
                if back.len() >= 3 {
                    out.back.push(Polygon {
                        corners: back,
                        plane: self.plane,
                    });
                }
            }
        }
    }

    /// Corner lists of the front and back pieces of a spanning polygon.
    fn cut(&self, plane: &Plane) -> (Vec<DVec3>, Vec<DVec3>) {
        let n = self.corners.len();
        let mut front = Vec::with_capacity(n + 1);
        let mut back = Vec::with_capacity(n + 1);

        for (k, &p) in self.corners.iter().enumerate() {
            let q = self.corners[(k + 1) % n];
            let side_p = plane.side_of(p);
            let side_q = plane.side_of(q);

            match side_p {
                Side::Front => front.push(p),
                Side::Back => back.push(p),
                _ => {
                    front.push(p);
                    back.push(p);
                }
            }

            if side_p.union(side_q) == Side::Spanning {
                let (dp, dq) = (plane.distance(p), plane.distance(q));
                let crossing = p.lerp(q, dp / (dp - dq));
                front.push(crossing);
                back.push(crossing);
            }
        }

        (front, back)
    }
}

/// One polygon per usable triangle of `mesh`.
pub fn mesh_to_polygons(mesh: &Mesh) -> Vec<Polygon> {
    mesh.triangle_positions()
        .filter_map(|corners| Polygon::from_vertices(corners.to_vec()))
        .collect()
}

/// Fans every polygon into triangles, welds shared corners and closes
/// T-junctions.
///
/// Corners are keyed on a `1 / WELD_SCALE` grid. Triangles that lose a corner
/// to welding, or have no area, are dropped.
pub fn polygons_to_mesh(polygons: &[Polygon]) -> Mesh {
    let mut mesh = Mesh::new();
    let mut welder = Welder::default();

    for polygon in polygons {
        let corners = polygon.vertices();
        let Some((&apex, rest)) = corners.split_first() else {
            continue;
        };
        let apex_index = welder.index(&mut mesh, apex);

        for pair in rest.windows(2) {
            let (b, c) = (pair[0], pair[1]);
            let (ib, ic) = (welder.index(&mut mesh, b), welder.index(&mut mesh, c));
            let collapsed = apex_index == ib || ib == ic || ic == apex_index;
            if collapsed || (b - apex).cross(c - apex).length() < VERTEX_MERGE_EPSILON {
                continue;
            }
            mesh.add_triangle(apex_index, ib, ic);
        }
    }

    split_t_junctions(&mesh)
}

/// Maps quantized positions to mesh vertex indices.
#[derive(Default)]
struct Welder {
    seen: HashMap<[i64; 3], u32>,
}

impl Welder {
    fn index(&mut self, mesh: &mut Mesh, p: DVec3) -> u32 {
        let key = (p * WELD_SCALE).round().to_array().map(|v| v as i64);
        *self.seen.entry(key).or_insert_with(|| mesh.add_vertex(p))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn floor_triangle(z: f64) -> Polygon {
        Polygon::from_vertices(vec![
            DVec3::new(0.0, 0.0, z),
            DVec3::new(2.0, 0.0, z),
            DVec3::new(1.0, 2.0, z),
        ])
        .unwrap()
    }

    #[test]
    fn test_needs_three_spanning_corners() {
        assert!(Polygon::from_vertices(vec![DVec3::ZERO, DVec3::X]).is_none());
        assert!(Polygon::from_vertices(vec![DVec3::ZERO, DVec3::Y, DVec3::Y * 4.0]).is_none());
        assert_eq!(floor_triangle(0.0).vertices().len(), 3);
    }

    #[test]
    fn test_flip_reverses_corners_and_plane() {
        let up = floor_triangle(1.0);
        let mut down = up.clone();
        down.flip();

        assert_eq!(down.vertices().first(), up.vertices().last());
        assert_eq!(down.plane().normal(), -DVec3::Z);
    }

    #[test]
    fn test_side_of_whole_polygon() {
        let plane = Plane::new(DVec3::Z, 0.5);
        assert_eq!(floor_triangle(1.0).side(&plane), Side::Front);
        assert_eq!(floor_triangle(0.0).side(&plane), Side::Back);
        assert_eq!(floor_triangle(0.5).side(&plane), Side::On);
    }

    #[test]
    fn test_coplanar_sorted_by_facing() {
        let plane = Plane::new(DVec3::Z, 0.0);
        let up = floor_triangle(0.0);
        let mut down = up.clone();
        down.flip();

        let mut out = Fragments::default();
        up.split_into(&plane, &mut out);
        down.split_into(&plane, &mut out);

        assert_eq!(out.coplanar_front.len(), 1);
        assert_eq!(out.coplanar_back.len(), 1);
        assert!(out.front.is_empty() && out.back.is_empty());
    }

    #[test]
    fn test_straddling_triangle_is_cut() {
        let wall = Polygon::from_vertices(vec![
            DVec3::new(0.0, 0.0, -1.0),
            DVec3::new(2.0, 0.0, -1.0),
            DVec3::new(1.0, 0.0, 3.0),
        ])
        .unwrap();
        let mut out = Fragments::default();
        wall.split_into(&Plane::new(DVec3::Z, 0.0), &mut out);

        assert_eq!((out.front.len(), out.back.len()), (1, 1));
        assert!(out.front[0].vertices().iter().all(|p| p.z > -1e-12));
        assert!(out.back[0].vertices().iter().all(|p| p.z < 1e-12));
        assert_eq!(out.back[0].vertices().len(), 4);
        assert_eq!(out.front[0].plane(), wall.plane());
    }

    #[test]
    fn test_weld_merges_shared_edge() {
        let a = Polygon::from_vertices(vec![DVec3::ZERO, DVec3::X, DVec3::Y]).unwrap();
        let b = Polygon::from_vertices(vec![DVec3::X, DVec3::new(1.0, 1.0, 0.0), DVec3::Y])
            .unwrap();
        let mesh = polygons_to_mesh(&[a, b]);
        assert_eq!((mesh.vertex_count(), mesh.triangle_count()), (4, 2));
    }

    #[test]
    fn test_pentagon_fans_into_three_triangles() {
        let pentagon = Polygon::from_vertices(
            (0..5)
                .map(|k| {
                    let t = k as f64 * std::f64::consts::TAU / 5.0;
                    DVec3::new(t.cos(), t.sin(), 0.0)
                })
                .collect(),
        )
        .unwrap();
        let mesh = polygons_to_mesh(&[pentagon]);
        assert_eq!(mesh.triangle_count(), 3);
        assert!(mesh.validate());
    }
}
