//! # Projected Mesh
//!
//! Projects every vertex of a triangle manifold and keeps the triangles
//! that still face the viewer afterwards. Triangles straddling the map's
//! antimeridian flip their winding when projected and are dropped.

use geodome::Manifold;
use glam::DVec2;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{ProjectionError, ProjectionResult};
use crate::projections::Projection;

/// 2D points indexed by vertex id, plus the front-facing triangles.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProjectedMesh {
    /// `points[id]` is the projection of the vertex with that id.
    pub points: Vec<DVec2>,
    /// Vertex ids of each kept triangle.
    pub triangles: Vec<[u32; 3]>,
}

impl ProjectedMesh {
    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.triangles.len()
    }

    /// Axis-aligned bounds of the projected points, `None` when empty.
    pub fn bounds(&self) -> Option<(DVec2, DVec2)> {
        let first = *self.points.first()?;
        Some(
            self.points
                .iter()
                .fold((first, first), |(lo, hi), &p| (lo.min(p), hi.max(p))),
        )
    }
}

/// Counter-clockwise test on projected triangle corners.
#[inline]
pub fn facing(p1: DVec2, p2: DVec2, p3: DVec2) -> bool {
    (p2 - p1).perp_dot(p3 - p2) > 0.0
}

/// Projects `manifold` with `projection`.
///
/// Faces are rebuilt first, so ids are current and `points` follows the
/// manifold's vertex order.
///
/// # Errors
///
/// [`ProjectionError::NotTriangulated`] for quad manifolds.
///
/// # Example
///
/// ```rust
/// use geodome::GeodesicDome;
/// use geodome_projection::{project, WagnerVI};
///
/// let mut dome = GeodesicDome::new(4)?;
/// let mesh = project(&WagnerVI, &mut dome)?;
/// assert_eq!(mesh.points.len(), 205);
/// assert!(mesh.triangle_count() < 320);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn project<P, M>(projection: &P, manifold: &mut M) -> ProjectionResult<ProjectedMesh>
where
    P: Projection + ?Sized,
    M: Manifold,
{
    let vertices_per_face = manifold.vertices_per_face();
    if vertices_per_face != 3 {
        return Err(ProjectionError::NotTriangulated { vertices_per_face });
    }

    let faces = manifold.faces();
    let coords = manifold.all_xyz();
    let points: Vec<DVec2> = coords
        .par_iter()
        .map(|&c| projection.xyz_to_2d(c))
        .collect();

    let mut triangles = Vec::with_capacity(faces.len() / 3);
    for tri in faces.chunks_exact(3) {
        let mut ids = [0u32; 3];
        for (slot, &v) in ids.iter_mut().zip(tri) {
            *slot = manifold
                .vertex(v)
                .id()
                .ok_or(ProjectionError::MissingId { vertex: v.raw() })?;
        }
        let [a, b, c] = ids.map(|id| points[id as usize]);
        if facing(a, b, c) {
            triangles.push(ids);
        }
    }

    debug!(
        projection = projection.name(),
        points = points.len(),
        kept = triangles.len(),
        dropped = faces.len() / 3 - triangles.len(),
        "projected manifold"
    );
    Ok(ProjectedMesh { points, triangles })
}
