//! # Solid Mesh
//!
//! Indexed triangle soup used for every solid in the sign pipeline: the base
//! plate, the hole cutters and the final panel.

use std::collections::HashMap;

use config::constants::VERTEX_MERGE_EPSILON;
use glam::DVec3;

use crate::error::MeshError;

/// Indexed triangle mesh.
///
/// Triangles are wound counter-clockwise when seen from outside the solid.
/// A mesh without vertices or without triangles is the *empty sentinel*: it
/// stands for "no geometry" and is never an error by itself.
///
/// # Example
///
/// ```rust
/// use glam::DVec3;
/// use ledsign_mesh::Mesh;
///
/// let mut tri = Mesh::new();
/// let a = tri.add_vertex(DVec3::ZERO);
/// let b = tri.add_vertex(DVec3::X);
/// assert!(tri.is_empty());
///
/// let c = tri.add_vertex(DVec3::Y);
/// tri.add_triangle(a, b, c);
/// assert!(!tri.is_empty());
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Mesh {
    vertices: Vec<DVec3>,
    triangles: Vec<[u32; 3]>,
}

impl Mesh {
    pub fn new() -> Self {
        Self::default()
    }

    /// Empty mesh with room for the given number of vertices and triangles.
    pub fn with_capacity(vertices: usize, triangles: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(vertices),
            triangles: Vec::with_capacity(triangles),
        }
    }

    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.triangles.len()
    }

    /// True for the empty sentinel.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.triangles.is_empty() || self.vertices.is_empty()
    }

    /// Appends a position and returns its index.
    pub fn add_vertex(&mut self, position: DVec3) -> u32 {
        self.vertices.push(position);
        (self.vertices.len() - 1) as u32
    }

    /// Appends a face. Indices are checked later by [`Mesh::check_topology`].
    pub fn add_triangle(&mut self, a: u32, b: u32, c: u32) {
        self.triangles.push([a, b, c]);
    }

    #[inline]
    pub fn vertices(&self) -> &[DVec3] {
        &self.vertices
    }

    #[inline]
    pub fn triangles(&self) -> &[[u32; 3]] {
        &self.triangles
    }

    /// Corner positions of every face, in face order.
    pub fn triangle_positions(&self) -> impl Iterator<Item = [DVec3; 3]> + '_ {
        self.triangles
            .iter()
            .map(move |face| face.map(|i| self.vertices[i as usize]))
    }

    /// Axis-aligned bounds as `(min, max)`; both zero for a mesh without
    /// vertices.
    pub fn bounding_box(&self) -> (DVec3, DVec3) {
        let Some(&first) = self.vertices.first() else {
            return (DVec3::ZERO, DVec3::ZERO);
        };
        self.vertices
            .iter()
            .fold((first, first), |(lo, hi), &p| (lo.min(p), hi.max(p)))
    }

    /// Moves every vertex by `offset`.
    pub fn translate(&mut self, offset: DVec3) {
        self.vertices.iter_mut().for_each(|p| *p += offset);
    }

    /// Appends `other` as a separate body.
    ///
    /// Face indices of `other` are shifted past the existing vertices. Shared
    /// positions are not welded.
    pub fn merge(&mut self, other: &Mesh) {
        let base = self.vertices.len() as u32;
        self.vertices.extend_from_slice(&other.vertices);
        self.triangles
            .extend(other.triangles.iter().map(|face| face.map(|i| i + base)));
    }

    /// Enclosed volume via the divergence theorem.
    ///
    /// Positive for a closed, outward-wound solid.
    pub fn signed_volume(&self) -> f64 {
        self.triangle_positions()
            .map(|[a, b, c]| a.dot(b.cross(c)))
            .sum::<f64>()
            / 6.0
    }

    /// True when no coordinate is NaN or infinite.
    pub fn is_finite(&self) -> bool {
        self.vertices.iter().all(|p| p.is_finite())
    }

    /// Rejects faces that reference missing vertices, repeat a corner, or
    /// have (near) zero area.
    pub fn check_topology(&self) -> Result<(), MeshError> {
        let n = self.vertices.len();

        for (face_index, face) in self.triangles.iter().enumerate() {
            if let Some(bad) = face.iter().find(|&&i| i as usize >= n) {
                return Err(MeshError::invalid_topology(format!(
                    "face {face_index} uses vertex {bad} but the mesh has {n}"
                )));
            }

            let [a, b, c] = *face;
            if a == b || b == c || c == a {
                return Err(MeshError::invalid_topology(format!(
                    "face {face_index} repeats a corner: {face:?}"
                )));
            }

            let [pa, pb, pc] = face.map(|i| self.vertices[i as usize]);
            if (pb - pa).cross(pc - pa).length() < VERTEX_MERGE_EPSILON {
                return Err(MeshError::invalid_topology(format!(
                    "face {face_index} is degenerate"
                )));
            }
        }

        Ok(())
    }

    /// Directed edges without a reversed partner.
    ///
    /// In a closed, consistently wound surface every edge `a → b` is matched
    /// by `b → a` from the neighboring face, as often as it occurs. Any
    /// boundary, crack or T-junction shows up here.
    pub fn open_edge_count(&self) -> usize {
        let mut directed: HashMap<(u32, u32), usize> = HashMap::new();
        for &[a, b, c] in &self.triangles {
            for edge in [(a, b), (b, c), (c, a)] {
                *directed.entry(edge).or_default() += 1;
            }
        }
        directed
            .iter()
            .filter(|&(&(a, b), &count)| directed.get(&(b, a)).copied().unwrap_or(0) != count)
            .count()
    }

    /// True when [`Mesh::open_edge_count`] is zero. The empty sentinel is
    /// trivially watertight.
    pub fn is_watertight(&self) -> bool {
        self.open_edge_count() == 0
    }

    /// Shorthand for `check_topology().is_ok()`.
    pub fn validate(&self) -> bool {
        self.check_topology().is_ok()
    }
}
