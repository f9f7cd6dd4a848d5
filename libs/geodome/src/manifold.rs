//! # Manifold Contract
//!
//! The capability set shared by every mesh in this crate: enumerate
//! vertices, enumerate faces, look up a vertex by grid position and query
//! immediate neighbours. Ring expansion and flattening helpers are derived
//! from those primitives only.
//!
//! ## Visited state
//!
//! Neighbour queries report only vertices not yet marked in the caller's
//! [`VisitedSet`], and mark what they report. Pass a fresh set (or one reset
//! with [`Manifold::unmark_vertices`]) for every independent traversal.

use glam::DVec3;

use crate::vertex::{Vertex, VertexIdx};
use crate::visited::VisitedSet;

/// A mesh exposing vertices, faces and neighbour queries.
pub trait Manifold {
    /// User payload type attached to vertices.
    type Data;

    /// All vertices in traversal order (the order ids are assigned in).
    fn all_vertices(&self) -> Vec<VertexIdx>;

    /// Vertex stored at arena index `v`.
    ///
    /// # Panics
    ///
    /// Panics if `v` does not belong to this manifold.
    fn vertex(&self, v: VertexIdx) -> &Vertex<Self::Data>;

    /// Mutable access to the vertex at arena index `v`.
    fn vertex_mut(&mut self, v: VertexIdx) -> &mut Vertex<Self::Data>;

    /// Number of vertices, seam duplicates included.
    fn number_of_vertices(&self) -> usize {
        self.all_vertices().len()
    }

    /// Rebuilds the face list, reassigning every vertex id first.
    ///
    /// The result is flat: each consecutive run of
    /// [`vertices_per_face`](Manifold::vertices_per_face) entries is one face.
    fn faces(&mut self) -> Vec<VertexIdx>;

    /// Number of vertices per face (3 for triangles, 4 for quads).
    fn vertices_per_face(&self) -> usize;

    /// Vertex at grid position `(x, y)`, or `None` outside the grid.
    fn vertex_at(&self, x: i32, y: i32) -> Option<VertexIdx>;

    /// Immediate neighbours of `v` not yet marked in `visited`.
    ///
    /// Marks `v` and every reported neighbour. Manifolds with seams also
    /// collect the neighbours of `v`'s duplicates unless `visit_same_vertex`
    /// is set.
    fn neighbours(
        &self,
        v: VertexIdx,
        visit_same_vertex: bool,
        visited: &mut VisitedSet,
    ) -> Vec<VertexIdx>;

    /// A fresh visited set sized for this manifold.
    fn visited_set(&self) -> VisitedSet {
        VisitedSet::new(self.number_of_vertices())
    }

    /// Resets `visited` so that every vertex of this manifold is unvisited.
    fn unmark_vertices(&self, visited: &mut VisitedSet) {
        visited.reset(self.number_of_vertices());
    }

    /// Breadth-first rings around `v`.
    ///
    /// Ring 0 holds the immediate neighbours, ring `i` the unvisited
    /// neighbours of ring `i - 1`. Visited state accumulates across rings.
    /// Returns `distance` rings (possibly empty ones).
    fn neighbours_in_distance(
        &self,
        v: VertexIdx,
        distance: usize,
        visited: &mut VisitedSet,
    ) -> Vec<Vec<VertexIdx>> {
        let mut rings: Vec<Vec<VertexIdx>> = Vec::with_capacity(distance);
        if distance == 0 {
            return rings;
        }
        rings.push(self.neighbours(v, false, visited));
        for level in 1..distance {
            let ring = rings[level - 1]
                .iter()
                .flat_map(|&w| self.neighbours(w, false, visited))
                .collect();
            rings.push(ring);
        }
        rings
    }

    /// Vertex coordinates in id order.
    fn all_xyz(&self) -> Vec<DVec3> {
        self.all_vertices()
            .into_iter()
            .map(|v| self.vertex(v).coord())
            .collect()
    }

    /// Face vertex ids, flattened; rebuilds faces so ids are current.
    fn all_triangles(&mut self) -> Vec<u32> {
        let faces = self.faces();
        faces
            .into_iter()
            .filter_map(|v| self.vertex(v).id())
            .collect()
    }
}
