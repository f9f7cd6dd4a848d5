//! # Vertex
//!
//! Grid-addressed vertices stored in a flat arena owned by their manifold.
//! Cross-references between vertices (seam duplicates) are arena indices,
//! never ownership.

use glam::DVec3;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::sphere::{xyz_to_lat_lon, xyz_to_spherical};

/// Index of a vertex in its manifold's arena.
///
/// Arena indices are stable for the lifetime of the manifold: a split only
/// appends vertices. They are distinct from [`Vertex::id`], which follows
/// the face-building traversal order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct VertexIdx(u32);

impl VertexIdx {
    /// Wraps a raw arena position.
    #[inline]
    pub const fn new(index: u32) -> Self {
        Self(index)
    }

    /// Returns the arena position as `usize`.
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Returns the raw arena position.
    #[inline]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl fmt::Display for VertexIdx {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A vertex of a manifold.
///
/// Carries its integer grid position, its 3D coordinate (a unit vector for
/// domes, a planar point for lattices), an optional face-indexing id and an
/// optional user payload.
///
/// # Example
///
/// ```rust
/// use geodome::Vertex;
/// use glam::DVec3;
///
/// let mut v: Vertex<&str> = Vertex::new(2, 3, DVec3::Y);
/// assert_eq!((v.x(), v.y()), (2, 3));
/// assert!(v.id().is_none());
/// v.set_data("tile");
/// assert_eq!(v.data(), Some(&"tile"));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vertex<D = ()> {
    x: i32,
    y: i32,
    coord: DVec3,
    id: Option<u32>,
    same_vertices: Vec<VertexIdx>,
    data: Option<D>,
}

impl<D> Vertex<D> {
    /// Creates a vertex at grid position `(x, y)` with the given coordinate.
    pub fn new(x: i32, y: i32, coord: DVec3) -> Self {
        Self {
            x,
            y,
            coord,
            id: None,
            same_vertices: Vec::new(),
            data: None,
        }
    }

    /// Grid column.
    #[inline]
    pub fn x(&self) -> i32 {
        self.x
    }

    /// Grid row.
    #[inline]
    pub fn y(&self) -> i32 {
        self.y
    }

    /// 3D coordinate.
    #[inline]
    pub fn coord(&self) -> DVec3 {
        self.coord
    }

    /// Face-indexing id, assigned when faces are (re)built.
    #[inline]
    pub fn id(&self) -> Option<u32> {
        self.id
    }

    /// Other vertices representing the same physical point.
    #[inline]
    pub fn same_vertices(&self) -> &[VertexIdx] {
        &self.same_vertices
    }

    /// Returns true if this vertex lies on a seam of a folded net.
    #[inline]
    pub fn is_seam(&self) -> bool {
        !self.same_vertices.is_empty()
    }

    /// `(polar, azimuth)` of the coordinate, polar angle from the +Y pole.
    pub fn polar_azimuth(&self) -> (f64, f64) {
        xyz_to_spherical(self.coord)
    }

    /// Geographic `(latitude, longitude)` of the coordinate.
    pub fn lat_lon(&self) -> (f64, f64) {
        xyz_to_lat_lon(self.coord)
    }

    /// User payload, if any.
    pub fn data(&self) -> Option<&D> {
        self.data.as_ref()
    }

    /// Mutable access to the user payload.
    pub fn data_mut(&mut self) -> Option<&mut D> {
        self.data.as_mut()
    }

    /// Attaches a payload, returning the previous one.
    pub fn set_data(&mut self, data: D) -> Option<D> {
        self.data.replace(data)
    }

    /// Detaches the payload.
    pub fn take_data(&mut self) -> Option<D> {
        self.data.take()
    }

    pub(crate) fn set_id(&mut self, id: u32) {
        self.id = Some(id);
    }

    pub(crate) fn clear_id(&mut self) {
        self.id = None;
    }

    pub(crate) fn scale_grid(&mut self, factor: i32) {
        self.x *= factor;
        self.y *= factor;
    }

    pub(crate) fn set_same_vertices(&mut self, same: Vec<VertexIdx>) {
        self.same_vertices = same;
    }

    pub(crate) fn clear_same_vertices(&mut self) {
        self.same_vertices.clear();
    }
}
