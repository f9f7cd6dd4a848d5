//! # Geodome OFF
//!
//! Object File Format export and import for geodome manifolds.
//!
//! Three views of a manifold can be exported:
//!
//! - [`OffMesh::from_manifold`]: the 3D mesh (the sphere, for a dome)
//! - [`OffMesh::flat_net`]: the unfolded grid at `(x, y, 0)`
//! - [`OffMesh::from_projected`]: a map projection's front-facing triangles
//!
//! ## Usage
//!
//! ```rust
//! use geodome::GeodesicDome;
//! use geodome_off::OffMesh;
//! use geodome_projection::{project, EqualEarth};
//!
//! let mut dome = GeodesicDome::new(2)?;
//! let net = OffMesh::flat_net(&mut dome)?;
//! let map = OffMesh::from_projected(&project(&EqualEarth, &mut dome)?);
//! assert_eq!(net.vertex_count(), map.vertex_count());
//!
//! let parsed: OffMesh = net.to_string().parse()?;
//! assert_eq!(parsed, net);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod error;
pub mod io;
pub mod mesh;

pub use error::{OffError, OffResult};
pub use io::{load_off, save_off};
pub use mesh::OffMesh;
