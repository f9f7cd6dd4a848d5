//! # Geodome Projection
//!
//! Map projections of manifold vertices, and projected triangle meshes
//! filtered to the triangles that face the viewer.
//!
//! ## Usage
//!
//! ```rust
//! use geodome::GeodesicDome;
//! use geodome_projection::{project, Projection, ProjectionKind};
//!
//! let mut dome = GeodesicDome::new(3)?;
//! for kind in ProjectionKind::ALL {
//!     let mesh = project(&kind, &mut dome)?;
//!     assert_eq!(mesh.points.len(), 124);
//!     assert!(!kind.name().is_empty());
//! }
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod error;
pub mod mesh;
pub mod projections;

pub use error::{ProjectionError, ProjectionResult};
pub use mesh::{facing, project, ProjectedMesh};
pub use projections::{EqualEarth, KavrayskiyVII, Projection, ProjectionKind, WagnerIII, WagnerVI};
