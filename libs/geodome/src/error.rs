//! # Geodome Errors
//!
//! Error types for manifold construction and subdivision.
//!
//! ## Error Policy
//!
//! - Out-of-range grid lookups are not errors; they return `None`
//! - Malformed subdivision input fails before the dome is modified
//! - Errors include the grid coordinates involved

use config::constants::ConfigError;
use thiserror::Error;

/// Grid coordinate pair `(x, y)` used in error reports.
pub type GridPoint = (i32, i32);

/// Errors that can occur while building or subdividing a manifold.
#[derive(Debug, Error, PartialEq)]
pub enum GeodomeError {
    /// Split or construction frequency outside the supported range.
    #[error("Invalid frequency: {frequency} (must be between 1 and {max})")]
    InvalidFrequency {
        /// Requested frequency
        frequency: u32,
        /// Largest supported total frequency
        max: u32,
    },

    /// An edge whose grid delta is not a multiple of the step count.
    #[error("Edge {from:?} -> {to:?} cannot be partitioned into {steps} equal grid steps")]
    UnevenPartition {
        /// Grid position of the first endpoint
        from: GridPoint,
        /// Grid position of the second endpoint
        to: GridPoint,
        /// Requested number of segments
        steps: i32,
    },

    /// The subdivided grid would exceed the configured vertex limit.
    #[error("Too many vertices: {count} (max: {max})")]
    TooManyVertices {
        /// Number of vertices the operation would produce
        count: usize,
        /// Configured limit
        max: usize,
    },

    /// A grid slot was left empty after subdivision.
    #[error("Grid slot ({x}, {y}) was not filled by subdivision")]
    IncompleteGrid {
        /// Column of the empty slot
        x: i32,
        /// Row of the empty slot
        y: i32,
    },

    /// Two vertices were generated for the same grid slot.
    #[error("Grid slot ({x}, {y}) is outside its column or already occupied")]
    SlotOccupied {
        /// Column of the slot
        x: i32,
        /// Row of the slot
        y: i32,
    },

    /// A seam link was found in one direction only.
    #[error("Seam link {a} -> {b} has no reverse link")]
    AsymmetricSeam {
        /// Vertex holding the link
        a: usize,
        /// Vertex missing the reverse link
        b: usize,
    },

    /// Two stitched vertices do not coincide on the sphere.
    #[error("Seam vertices {a} and {b} are {distance} apart")]
    SeamMismatch {
        /// First vertex
        a: usize,
        /// Second vertex
        b: usize,
        /// Euclidean distance between them
        distance: f64,
    },

    /// Plane dimensions that cannot hold a lattice.
    #[error("Invalid plane dimensions: {width} x {height}")]
    InvalidDimensions {
        /// Requested number of columns
        width: usize,
        /// Requested number of rows
        height: usize,
    },

    /// Invalid configuration values.
    #[error("Invalid configuration: {0}")]
    Config(#[from] ConfigError),
}

impl GeodomeError {
    /// Creates an uneven partition error.
    pub fn uneven_partition(from: GridPoint, to: GridPoint, steps: i32) -> Self {
        Self::UnevenPartition { from, to, steps }
    }

    /// Creates a too-many-vertices error.
    pub fn too_many_vertices(count: usize, max: usize) -> Self {
        Self::TooManyVertices { count, max }
    }
}

/// Result type alias for manifold operations.
pub type GeodomeResult<T> = Result<T, GeodomeError>;
