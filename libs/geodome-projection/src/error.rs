//! # Projection Errors

use thiserror::Error;

/// Errors raised while projecting a manifold.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ProjectionError {
    /// Front-facing selection needs triangles.
    #[error("Projection requires triangle faces, manifold has {vertices_per_face} vertices per face")]
    NotTriangulated {
        /// Face arity reported by the manifold
        vertices_per_face: usize,
    },

    /// A face referenced a vertex that was not given an id.
    #[error("Face vertex {vertex} has no id")]
    MissingId {
        /// Arena index of the vertex
        vertex: u32,
    },
}

/// Result type alias for projection operations.
pub type ProjectionResult<T> = Result<T, ProjectionError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ProjectionError::NotTriangulated {
            vertices_per_face: 4,
        };
        assert!(err.to_string().contains("4 vertices per face"));
    }
}
