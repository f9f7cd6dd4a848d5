//! # Geodesic Dome
//!
//! An icosahedron folded flat onto a jagged grid of columns, subdivided by
//! frequency and projected back onto the unit sphere.
//!
//! ## Layout
//!
//! At total frequency `F` the grid spans `x ∈ [0, 6F]` and `y ∈ [0, 5F]`.
//! Every unit square between two adjacent columns carries two triangles,
//! `(a(y), b(y), b(y+1))` and `(a(y), b(y+1), a(y+1))`. The outer boundary of
//! the net is glued together along eleven cut edges; vertices on those cuts
//! exist once per side and are linked through
//! [`Vertex::same_vertices`](crate::Vertex::same_vertices).
//!
//! ## Example
//!
//! ```rust
//! use geodome::{GeodesicDome, Manifold};
//!
//! let mut dome = GeodesicDome::new(2)?;
//! assert_eq!(dome.number_of_vertices(), 63);
//! assert_eq!(dome.physical_vertex_count(), 42);
//! assert_eq!(dome.faces().len(), 80 * 3);
//! # Ok::<(), geodome::GeodomeError>(())
//! ```

mod icosahedron;
mod seams;
mod split;

#[cfg(test)]
mod tests;

use std::ops::RangeInclusive;

use config::constants::{
    dome_triangle_count, dome_vertex_slots, ICOSAHEDRON_ARC_LENGTH, MAX_FREQUENCY,
};
use tracing::{debug, info};

use crate::config::DomeConfig;
use crate::error::{GeodomeError, GeodomeResult};
use crate::grid::{shared_rows, JaggedGrid};
use crate::manifold::Manifold;
use crate::vertex::{Vertex, VertexIdx};
use crate::visited::VisitedSet;

pub use split::partition_edge;
use split::Splitter;

/// Grid offsets of the six triangle-lattice neighbours, in query order.
const NEIGHBOUR_OFFSETS: [(i32, i32); 6] = [(0, 1), (0, -1), (1, 0), (1, 1), (-1, -1), (-1, 0)];

/// Geodesic dome with optional per-vertex payload `D`.
#[derive(Debug, Clone)]
pub struct GeodesicDome<D = ()> {
    vertices: Vec<Vertex<D>>,
    grid: JaggedGrid,
    frequency: u32,
    x_max: i32,
    y_max: i32,
    arc_length: f64,
    config: DomeConfig,
}

impl GeodesicDome {
    /// Base icosahedron: 22 slots, 12 physical vertices, 20 faces.
    pub fn icosahedron() -> Self {
        Self::base(DomeConfig::default())
    }

    /// Dome at `frequency` with the default configuration.
    ///
    /// `new(f)` is equivalent to `icosahedron()` followed by `split(f)`.
    pub fn new(frequency: u32) -> GeodomeResult<Self> {
        Self::build(frequency, DomeConfig::default())
    }
}

impl<D> GeodesicDome<D> {
    /// Dome at `frequency` carrying payloads of type `D`.
    pub fn build(frequency: u32, config: DomeConfig) -> GeodomeResult<Self> {
        let mut dome = Self::base(config);
        dome.split(frequency)?;
        info!(
            frequency = dome.frequency,
            vertices = dome.vertices.len(),
            "built geodesic dome"
        );
        Ok(dome)
    }

    fn base(config: DomeConfig) -> Self {
        let (vertices, grid) = icosahedron::base_vertices();
        let mut dome = Self {
            vertices,
            grid,
            frequency: 1,
            x_max: 6,
            y_max: 5,
            arc_length: ICOSAHEDRON_ARC_LENGTH,
            config,
        };
        dome.stitch_seams();
        dome
    }

    /// Subdivides every face into `frequency²` triangles.
    ///
    /// Total frequency multiplies, so `split(a)` then `split(b)` yields the
    /// same grid as a single `split(a * b)`. Existing vertices keep their arena index and
    /// coordinate; their grid position is scaled. Seams are re-stitched and
    /// face ids are invalidated until the next [`Manifold::faces`] call.
    ///
    /// On error the dome is left untouched.
    ///
    /// # Errors
    ///
    /// - [`GeodomeError::InvalidFrequency`] for `0` or a total frequency
    ///   above [`MAX_FREQUENCY`]
    /// - [`GeodomeError::TooManyVertices`] past the configured vertex limit
    /// - [`GeodomeError::UnevenPartition`] / [`GeodomeError::IncompleteGrid`]
    ///   if the grid cannot be rebuilt
    pub fn split(&mut self, frequency: u32) -> GeodomeResult<()> {
        let total = self
            .frequency
            .checked_mul(frequency)
            .filter(|&t| frequency > 0 && t <= MAX_FREQUENCY)
            .ok_or(GeodomeError::InvalidFrequency {
                frequency,
                max: MAX_FREQUENCY / self.frequency,
            })?;
        if frequency == 1 {
            return Ok(());
        }

        let projected = dome_vertex_slots(total);
        if projected > self.config.max_vertices {
            return Err(GeodomeError::too_many_vertices(
                projected,
                self.config.max_vertices,
            ));
        }

        let factor = frequency as i32;
        let spans = Splitter::<D>::spans(self.grid.columns(), factor)?;
        let (pending, grid) =
            Splitter::new(&self.vertices, &spans, factor).run(self.grid.columns())?;

        for v in &mut self.vertices {
            v.scale_grid(factor);
            v.clear_id();
        }
        self.vertices.extend(pending);
        self.grid = grid;
        self.frequency = total;
        self.x_max *= factor;
        self.y_max *= factor;
        self.arc_length /= f64::from(frequency);
        self.stitch_seams();
        debug_assert_eq!(self.grid.slot_count(), self.vertices.len());

        debug!(
            factor = frequency,
            frequency = total,
            vertices = self.vertices.len(),
            "split dome"
        );
        Ok(())
    }

    /// Total subdivision frequency.
    #[inline]
    pub fn frequency(&self) -> u32 {
        self.frequency
    }

    /// Largest column index.
    #[inline]
    pub fn x_max(&self) -> i32 {
        self.x_max
    }

    /// Largest row index.
    #[inline]
    pub fn y_max(&self) -> i32 {
        self.y_max
    }

    /// Approximate edge arc length on the unit sphere.
    #[inline]
    pub fn arc_length(&self) -> f64 {
        self.arc_length
    }

    #[inline]
    pub fn config(&self) -> &DomeConfig {
        &self.config
    }

    /// Vertex arena, indexed by [`VertexIdx`].
    pub fn vertices(&self) -> &[Vertex<D>] {
        &self.vertices
    }

    /// Rows present in column `x`.
    pub fn column_range(&self, x: i32) -> Option<RangeInclusive<i32>> {
        self.grid.column(x).map(|c| c.rows())
    }

    /// Other slots representing the same physical point as `v`.
    pub fn seam_partners(&self, v: VertexIdx) -> &[VertexIdx] {
        self.vertices[v.index()].same_vertices()
    }

    /// Lowest arena index among `v` and its seam partners.
    pub fn canonical(&self, v: VertexIdx) -> VertexIdx {
        self.seam_partners(v)
            .iter()
            .copied()
            .fold(v, VertexIdx::min)
    }

    /// Number of distinct points on the sphere: `10F² + 2`.
    pub fn physical_vertex_count(&self) -> usize {
        (0..self.vertices.len() as u32)
            .map(VertexIdx::new)
            .filter(|&v| self.canonical(v) == v)
            .count()
    }

    /// Assigns ids in column-major, row-minor grid order.
    fn update_ids(&mut self) {
        for (id, v) in self.grid.iter().enumerate() {
            self.vertices[v.index()].set_id(id as u32);
        }
    }

    /// Marks `v` and all its seam duplicates.
    fn mark_with_seams(&self, v: VertexIdx, visited: &mut VisitedSet) {
        visited.mark(v);
        for &dup in self.vertices[v.index()].same_vertices() {
            visited.mark(dup);
        }
    }

    /// Lattice neighbours of `v` alone, ignoring seams for the lookup.
    fn grid_neighbours(&self, v: VertexIdx, visited: &mut VisitedSet, found: &mut Vec<VertexIdx>) {
        self.mark_with_seams(v, visited);
        let vertex = &self.vertices[v.index()];
        let (x, y) = (vertex.x(), vertex.y());
        for (dx, dy) in NEIGHBOUR_OFFSETS {
            if let Some(n) = self.grid.get(x + dx, y + dy) {
                if !visited.is_visited(n) {
                    self.mark_with_seams(n, visited);
                    found.push(n);
                }
            }
        }
    }
}

impl<D> Manifold for GeodesicDome<D> {
    type Data = D;

    fn all_vertices(&self) -> Vec<VertexIdx> {
        self.grid.iter().collect()
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
        let mut faces = Vec::with_capacity(dome_triangle_count(self.frequency) * 3);
        for pair in self.grid.columns().windows(2) {
            let (a, b) = (&pair[0], &pair[1]);
            let Some(rows) = shared_rows(a, b) else {
                continue;
            };
            for y in *rows.start()..*rows.end() {
                if let (Some(a0), Some(a1), Some(b0), Some(b1)) =
                    (a.get(y), a.get(y + 1), b.get(y), b.get(y + 1))
                {
                    faces.extend_from_slice(&[a0, b0, b1, a0, b1, a1]);
                }
            }
        }
        debug_assert_eq!(faces.len(), dome_triangle_count(self.frequency) * 3);
        faces
    }

    fn vertices_per_face(&self) -> usize {
        3
    }

    fn vertex_at(&self, x: i32, y: i32) -> Option<VertexIdx> {
        if !(0..=self.x_max).contains(&x) || !(0..=self.y_max).contains(&y) {
            return None;
        }
        self.grid.get(x, y)
    }

    fn neighbours(
        &self,
        v: VertexIdx,
        visit_same_vertex: bool,
        visited: &mut VisitedSet,
    ) -> Vec<VertexIdx> {
        let mut found = Vec::with_capacity(6);
        self.grid_neighbours(v, visited, &mut found);
        if visit_same_vertex {
            return found;
        }

        let mut expanded = vec![v];
        for &dup in self.vertices[v.index()].same_vertices() {
            if expanded.contains(&dup) {
                continue;
            }
            expanded.push(dup);
            self.grid_neighbours(dup, visited, &mut found);
        }
        found
    }
}
