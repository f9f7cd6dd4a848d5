//! # Geodome
//!
//! Subdivided polyhedral meshes behind a single manifold contract.
//!
//! ## Architecture
//!
//! ```text
//! icosahedron → split(f) → stitch seams → faces / neighbours
//!                                          ↓
//!                          geodome-projection, geodome-off
//! ```
//!
//! - [`GeodesicDome`]: an icosahedron folded onto a jagged grid, split by
//!   frequency and renormalized onto the unit sphere
//! - [`Plane`]: hexagonal or rectilinear lattice, bounded or toroidal
//! - [`Manifold`]: vertices, faces, grid lookup and neighbour queries,
//!   shared by both
//!
//! ## Usage
//!
//! ```rust
//! use geodome::{GeodesicDome, Manifold};
//!
//! let mut dome = GeodesicDome::new(3)?;
//! let north = dome.vertex_at(0, 3).unwrap();
//! let rings = dome.neighbours_in_distance(north, 2, &mut dome.visited_set());
//! assert_eq!(rings[0].len(), 5);
//!
//! let triangles = dome.all_triangles();
//! assert_eq!(triangles.len(), 180 * 3);
//! # Ok::<(), geodome::GeodomeError>(())
//! ```

pub mod config;
pub mod dome;
pub mod error;
mod grid;
pub mod manifold;
pub mod plane;
pub mod sphere;
pub mod vertex;
pub mod visited;

pub use self::config::DomeConfig;
pub use dome::{partition_edge, GeodesicDome};
pub use error::{GeodomeError, GeodomeResult};
pub use manifold::Manifold;
pub use plane::{Lattice, Plane, Topology};
pub use vertex::{Vertex, VertexIdx};
pub use visited::VisitedSet;
