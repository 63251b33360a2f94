//! # BSP Tree
//!
//! Binary Space Partitioning tree for CSG operations.
//!
//! Nodes live in a flat arena and reference their children by index. Every
//! traversal runs on an explicit work stack, so deep trees built from
//! high-segment cylinders never exhaust the call stack.

use super::plane::Plane;
use super::polygon::{Fragments, Polygon};

const ROOT: usize = 0;

/// A single node of the tree.
#[derive(Debug, Clone, Default)]
struct BspNode {
    /// Splitting plane, taken from the first polygon inserted here.
    plane: Option<Plane>,
    /// Polygons coplanar with `plane`.
    polygons: Vec<Polygon>,
    /// Arena index of the front child.
    front: Option<usize>,
    /// Arena index of the back child.
    back: Option<usize>,
}

#[derive(Clone, Copy)]
enum Branch {
    Front,
    Back,
}

/// BSP tree over a polygon soup representing a closed solid.
#[derive(Debug, Clone)]
pub struct BspTree {
    nodes: Vec<BspNode>,
}

impl BspTree {
    /// Create a tree from polygons.
    pub fn new(polygons: Vec<Polygon>) -> Self {
        let mut tree = Self {
            nodes: vec![BspNode::default()],
        };
        tree.build(polygons);
        tree
    }

    /// Insert polygons into the tree, splitting them at each node.
    pub fn build(&mut self, polygons: Vec<Polygon>) {
        let mut stack = vec![(ROOT, polygons)];

        while let Some((idx, polygons)) = stack.pop() {
            if polygons.is_empty() {
                continue;
            }

            let plane = match self.nodes[idx].plane {
                Some(plane) => plane,
                None => {
                    let plane = *polygons[0].plane();
                    self.nodes[idx].plane = Some(plane);
                    plane
                }
            };

            let mut parts = Fragments::default();
            for polygon in &polygons {
                polygon.split_into(&plane, &mut parts);
            }
            let Fragments {
                mut coplanar_front,
                mut coplanar_back,
                front,
                back,
            } = parts;

            let node = &mut self.nodes[idx];
            node.polygons.append(&mut coplanar_front);
            node.polygons.append(&mut coplanar_back);

            if !front.is_empty() {
                let child = self.child(idx, Branch::Front);
                stack.push((child, front));
            }
            if !back.is_empty() {
                let child = self.child(idx, Branch::Back);
                stack.push((child, back));
            }
        }
    }

    /// Returns the child on `branch`, allocating it if missing.
    fn child(&mut self, idx: usize, branch: Branch) -> usize {
        let existing = match branch {
            Branch::Front => self.nodes[idx].front,
            Branch::Back => self.nodes[idx].back,
        };
        if let Some(child) = existing {
            return child;
        }

        let child = self.nodes.len();
        self.nodes.push(BspNode::default());
        match branch {
            Branch::Front => self.nodes[idx].front = Some(child),
            Branch::Back => self.nodes[idx].back = Some(child),
        }
        child
    }

    /// Convert solid space to empty space and vice versa.
    pub fn invert(&mut self) {
        for node in &mut self.nodes {
            for polygon in &mut node.polygons {
                polygon.flip();
            }
            node.plane = node.plane.map(|plane| plane.flipped());
            std::mem::swap(&mut node.front, &mut node.back);
        }
    }

    /// Remove all parts of `polygons` that lie inside this tree's solid.
    pub fn clip_polygons(&self, polygons: Vec<Polygon>) -> Vec<Polygon> {
        if self.nodes[ROOT].plane.is_none() {
            return polygons;
        }

        let mut result = Vec::new();
        let mut stack = vec![(ROOT, polygons)];

        while let Some((idx, polygons)) = stack.pop() {
            let node = &self.nodes[idx];
            let Some(plane) = node.plane else {
                result.extend(polygons);
                continue;
            };

            // Coplanar pieces follow their facing
            let mut parts = Fragments::default();
            for polygon in &polygons {
                polygon.split_into(&plane, &mut parts);
            }
            let mut front = parts.front;
            front.append(&mut parts.coplanar_front);
            let mut back = parts.back;
            back.append(&mut parts.coplanar_back);

            match node.front {
                Some(child) => stack.push((child, front)),
                None => result.extend(front),
            }
            // Polygons reaching an empty back leaf are inside the solid
            if let Some(child) = node.back {
                stack.push((child, back));
            }
        }

        result
    }

    /// Remove all polygons in this tree that lie inside `other`.
    pub fn clip_to(&mut self, other: &BspTree) {
        for node in &mut self.nodes {
            let polygons = std::mem::take(&mut node.polygons);
            node.polygons = other.clip_polygons(polygons);
        }
    }

    /// Collect every polygon stored in the tree.
    pub fn all_polygons(&self) -> Vec<Polygon> {
        self.nodes
            .iter()
            .flat_map(|node| node.polygons.iter().cloned())
            .collect()
    }

    /// Number of nodes in the arena.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of polygons stored across all nodes.
    pub fn polygon_count(&self) -> usize {
        self.nodes.iter().map(|node| node.polygons.len()).sum()
    }
}
