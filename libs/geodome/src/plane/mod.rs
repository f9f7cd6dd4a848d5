//! # Plane Lattice
//!
//! Dense `width x height` grid of vertices, either hexagonal (odd rows
//! shifted by half a cell) or rectilinear, on a bounded plane or a torus.
//!
//! ```text
//! hexagonal            rectilinear
//!   o   o   o   o      o---o---o
//!  / \ / \ / \ /       |   |   |
//! o---o---o---o        o---o---o
//! ```
//!
//! There are no seams: every grid slot is its own physical point, and
//! `visit_same_vertex` has no effect on neighbour queries.

#[cfg(test)]
mod tests;

use config::constants::MAX_VERTICES;
use glam::DVec3;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{GeodomeError, GeodomeResult};
use crate::manifold::Manifold;
use crate::vertex::{Vertex, VertexIdx};
use crate::visited::VisitedSet;

/// Cell shape of a [`Plane`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Lattice {
    /// Triangles; six neighbours per interior vertex.
    #[default]
    Hexagonal,
    /// Quads; four neighbours per interior vertex.
    Rectilinear,
}

/// Boundary behaviour of a [`Plane`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Topology {
    /// Neighbours past the edge do not exist.
    #[default]
    Plane,
    /// Neighbour lookups wrap around both axes.
    Donut,
}

/// Planar lattice manifold with optional per-vertex payload `D`.
///
/// # Example
///
/// ```rust
/// use geodome::{Lattice, Manifold, Plane, Topology};
///
/// let mut plane = Plane::new(4, 3, Lattice::Rectilinear, Topology::Plane)?;
/// assert_eq!(plane.number_of_vertices(), 12);
/// assert_eq!(plane.faces().len(), 3 * 2 * 4);
/// # Ok::<(), geodome::GeodomeError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Plane<D = ()> {
    vertices: Vec<Vertex<D>>,
    width: usize,
    height: usize,
    lattice: Lattice,
    topology: Topology,
}

impl Plane {
    pub fn new(
        width: usize,
        height: usize,
        lattice: Lattice,
        topology: Topology,
    ) -> GeodomeResult<Self> {
        Self::build(width, height, lattice, topology)
    }
}

impl<D> Plane<D> {
    /// Creates a plane whose vertices carry payloads of type `D`.
    ///
    /// # Errors
    ///
    /// [`GeodomeError::InvalidDimensions`] if either side is zero or the
    /// vertex index would overflow, [`GeodomeError::TooManyVertices`] past
    /// [`MAX_VERTICES`].
    pub fn build(
        width: usize,
        height: usize,
        lattice: Lattice,
        topology: Topology,
    ) -> GeodomeResult<Self> {
        let invalid = GeodomeError::InvalidDimensions { width, height };
        if width == 0 || height == 0 || i32::try_from(width.max(height)).is_err() {
            return Err(invalid);
        }
        let count = width.checked_mul(height).ok_or(invalid)?;
        if count > MAX_VERTICES {
            return Err(GeodomeError::too_many_vertices(count, MAX_VERTICES));
        }

        let mut vertices = Vec::with_capacity(count);
        for y in 0..height as i32 {
            for x in 0..width as i32 {
                vertices.push(Vertex::new(x, y, lattice_coord(lattice, x, y)));
            }
        }
        debug!(width, height, ?lattice, ?topology, "built plane");

        Ok(Self {
            vertices,
            width,
            height,
            lattice,
            topology,
        })
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    #[inline]
    pub fn lattice(&self) -> Lattice {
        self.lattice
    }

    #[inline]
    pub fn topology(&self) -> Topology {
        self.topology
    }

    /// Vertex arena in row-major order.
    pub fn vertices(&self) -> &[Vertex<D>] {
        &self.vertices
    }

    /// Row-major index of an in-range `(x, y)`.
    fn index(&self, x: usize, y: usize) -> VertexIdx {
        VertexIdx::new((y * self.width + x) as u32)
    }

    /// Resolves a possibly out-of-range position according to the topology.
    fn resolve(&self, x: i32, y: i32) -> Option<VertexIdx> {
        let (w, h) = (self.width as i32, self.height as i32);
        let (x, y) = match self.topology {
            Topology::Plane => {
                if !(0..w).contains(&x) || !(0..h).contains(&y) {
                    return None;
                }
                (x, y)
            }
            Topology::Donut => (x.rem_euclid(w), y.rem_euclid(h)),
        };
        Some(self.index(x as usize, y as usize))
    }

    /// Neighbour positions of `(x, y)` before boundary handling.
    fn candidates(&self, x: i32, y: i32) -> Vec<(i32, i32)> {
        let mut out = vec![(x + 1, y), (x - 1, y)];
        let row_offsets: &[i32] = match self.lattice {
            Lattice::Hexagonal if y % 2 == 0 => &[-1, 0],
            Lattice::Hexagonal => &[1, 0],
            Lattice::Rectilinear => &[0],
        };
        for dy in [-1, 1] {
            out.extend(row_offsets.iter().map(|&dx| (x + dx, y + dy)));
        }
        out
    }

    fn update_ids(&mut self) {
        for (id, v) in self.vertices.iter_mut().enumerate() {
            v.set_id(id as u32);
        }
    }
}

/// Planar coordinate of lattice position `(x, y)`.
fn lattice_coord(lattice: Lattice, x: i32, y: i32) -> DVec3 {
    let shift = match lattice {
        Lattice::Hexagonal if y % 2 != 0 => 0.5,
        _ => 0.0,
    };
    DVec3::new(f64::from(x) + shift, f64::from(y), 0.0)
}

impl<D> Manifold for Plane<D> {
    type Data = D;

    fn all_vertices(&self) -> Vec<VertexIdx> {
        (0..self.vertices.len() as u32).map(VertexIdx::new).collect()
    }

    fn vertex(&self, v: VertexIdx) -> &Vertex<D> {
        &self.vertices[v.index()]
    }

    fn vertex_mut(&mut self, v: VertexIdx) -> &mut Vertex<D> {
        &mut self.vertices[v.index()]
    }

    fn number_of_vertices(&self) -> usize {
        self.vertices.len()
    }

    fn faces(&mut self) -> Vec<VertexIdx> {
        self.update_ids();
        let cells = (self.width - 1) * (self.height - 1);
        let mut faces = Vec::with_capacity(cells * 6);
        for y in 0..self.height - 1 {
            for x in 0..self.width - 1 {
                let p00 = self.index(x, y);
                let p10 = self.index(x + 1, y);
                let p01 = self.index(x, y + 1);
                let p11 = self.index(x + 1, y + 1);
                match self.lattice {
                    Lattice::Hexagonal if y % 2 == 0 => {
                        faces.extend_from_slice(&[p00, p10, p01, p10, p11, p01])
                    }
                    Lattice::Hexagonal => faces.extend_from_slice(&[p00, p10, p11, p00, p11, p01]),
                    Lattice::Rectilinear => faces.extend_from_slice(&[p00, p10, p11, p01]),
                }
            }
        }
        faces
    }

    fn vertices_per_face(&self) -> usize {
        match self.lattice {
            Lattice::Hexagonal => 3,
            Lattice::Rectilinear => 4,
        }
    }

    fn vertex_at(&self, x: i32, y: i32) -> Option<VertexIdx> {
        let x = usize::try_from(x).ok().filter(|&x| x < self.width)?;
        let y = usize::try_from(y).ok().filter(|&y| y < self.height)?;
        Some(self.index(x, y))
    }

    fn neighbours(
        &self,
        v: VertexIdx,
        _visit_same_vertex: bool,
        visited: &mut VisitedSet,
    ) -> Vec<VertexIdx> {
        visited.mark(v);
        let vertex = &self.vertices[v.index()];
        self.candidates(vertex.x(), vertex.y())
            .into_iter()
            .filter_map(|(x, y)| self.resolve(x, y))
            .filter(|&n| visited.mark(n))
            .collect()
    }
}
