//! Centralized configuration values shared across the geodesic dome workspace.
//!
//! Each public item in this module documents its purpose and provides a minimal
//! usage example so that downstream crates can remain declarative and avoid
//! scattering literals.

use std::fmt;

// =============================================================================
// PRECISION CONSTANTS
// =============================================================================

/// Numerical tolerance used for unit-norm and equality checks.
///
/// # Examples
/// ```
/// use config::constants::EPSILON_TOLERANCE;
/// assert!(EPSILON_TOLERANCE < 1.0e-6);
/// ```
pub const EPSILON_TOLERANCE: f64 = 1.0e-9;

/// Maximum distance allowed between two grid slots that are stitched
/// together as the same physical point on the sphere.
///
/// Both sides of a seam are interpolated independently, so their positions
/// agree only up to accumulated rounding.
///
/// # Examples
/// ```
/// use config::constants::{EPSILON_TOLERANCE, SEAM_TOLERANCE};
/// assert!(SEAM_TOLERANCE >= EPSILON_TOLERANCE);
/// ```
pub const SEAM_TOLERANCE: f64 = 1.0e-7;

// =============================================================================
// ICOSAHEDRON CONSTANTS
// =============================================================================

/// Approximate average arc length of an icosahedron edge on the unit sphere.
///
/// Each split divides the dome's arc length by the split frequency.
///
/// # Examples
/// ```
/// use config::constants::ICOSAHEDRON_ARC_LENGTH;
/// let after_split = ICOSAHEDRON_ARC_LENGTH / 4.0;
/// assert!(after_split < 0.3);
/// ```
pub const ICOSAHEDRON_ARC_LENGTH: f64 = 1.106588;

/// Polar angle (degrees, measured from the +Y pole) of the upper vertex ring.
///
/// The lower ring sits at `180 - ICOSAHEDRON_RING_POLAR_DEGREES`.
///
/// # Examples
/// ```
/// use config::constants::ICOSAHEDRON_RING_POLAR_DEGREES;
/// assert!((ICOSAHEDRON_RING_POLAR_DEGREES - 63.435).abs() < 1.0e-9);
/// ```
pub const ICOSAHEDRON_RING_POLAR_DEGREES: f64 = 90.0 - 26.565;

/// Number of columns in the base icosahedron grid (`x_max + 1`).
pub const ICOSAHEDRON_BASE_COLUMNS: usize = 7;

/// Number of rows spanned by the base icosahedron grid (`y_max + 1`).
pub const ICOSAHEDRON_BASE_ROWS: usize = 6;

/// Number of triangular faces on the base icosahedron.
pub const ICOSAHEDRON_FACES: usize = 20;

/// Frequency of a freshly constructed dome when none is requested.
///
/// # Examples
/// ```
/// use config::constants::DEFAULT_FREQUENCY;
/// assert_eq!(DEFAULT_FREQUENCY, 1);
/// ```
pub const DEFAULT_FREQUENCY: u32 = 1;

// =============================================================================
// LIMIT CONSTANTS
// =============================================================================

/// Maximum number of vertices a single manifold may allocate.
///
/// Safety limit to prevent memory exhaustion from very high frequencies.
///
/// # Examples
/// ```
/// use config::constants::{dome_vertex_slots, MAX_VERTICES};
/// assert!(dome_vertex_slots(100) < MAX_VERTICES);
/// ```
pub const MAX_VERTICES: usize = 10_000_000;

/// Largest total frequency accepted by the dome engine.
///
/// Grid coordinates are stored as `i32`; this keeps `6 * frequency`
/// comfortably inside that range.
pub const MAX_FREQUENCY: u32 = 1 << 16;

// =============================================================================
// GLOBAL CONFIGURATION
// =============================================================================

/// Immutable snapshot of global configuration settings that can be shared
/// between crates.
///
/// # Examples
/// ```
/// use config::constants::GlobalConfig;
/// let config = GlobalConfig::default();
/// assert!(config.tolerance > 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GlobalConfig {
    /// Numeric tolerance used when checking seam coincidence.
    pub tolerance: f64,
    /// Upper bound on the number of vertices a manifold may hold.
    pub max_vertices: usize,
}

impl GlobalConfig {
    /// Builds a configuration enforcing strict validation of the supplied
    /// tolerance and vertex limit.
    ///
    /// # Examples
    /// ```
    /// use config::constants::GlobalConfig;
    /// let cfg = GlobalConfig::new(1.0e-6, 1_000).expect("valid config");
    /// assert_eq!(cfg.max_vertices, 1_000);
    /// ```
    pub fn new(tolerance: f64, max_vertices: usize) -> Result<Self, ConfigError> {
        if !(tolerance > 0.0) {
            return Err(ConfigError::InvalidTolerance(tolerance));
        }
        if max_vertices < dome_vertex_slots(DEFAULT_FREQUENCY) {
            return Err(ConfigError::InvalidVertexLimit(max_vertices));
        }
        Ok(Self {
            tolerance,
            max_vertices,
        })
    }
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            tolerance: SEAM_TOLERANCE,
            max_vertices: MAX_VERTICES,
        }
    }
}

/// Error returned when invalid configuration values are provided.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ConfigError {
    /// Raised when tolerance is zero, negative or NaN.
    InvalidTolerance(f64),
    /// Raised when the vertex limit cannot even hold the base icosahedron.
    InvalidVertexLimit(usize),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidTolerance(value) => {
                write!(f, "tolerance must be positive: {value}")
            }
            ConfigError::InvalidVertexLimit(value) => {
                write!(
                    f,
                    "max_vertices must be >= {}: {value}",
                    dome_vertex_slots(DEFAULT_FREQUENCY)
                )
            }
        }
    }
}

impl std::error::Error for ConfigError {}

// =============================================================================
// HELPER FUNCTIONS
// =============================================================================

/// Number of grid slots (seam duplicates included) of a dome at `frequency`.
///
/// The folded net covers ten unit squares of the base grid, which gives
/// `10f² + 11f + 1` lattice points.
///
/// # Examples
/// ```
/// use config::constants::dome_vertex_slots;
/// assert_eq!(dome_vertex_slots(1), 22);
/// assert_eq!(dome_vertex_slots(2), 63);
/// ```
pub fn dome_vertex_slots(frequency: u32) -> usize {
    let f = frequency as usize;
    10 * f * f + 11 * f + 1
}

/// Number of distinct points on the sphere of a dome at `frequency`.
///
/// # Examples
/// ```
/// use config::constants::dome_physical_vertices;
/// assert_eq!(dome_physical_vertices(1), 12);
/// ```
pub fn dome_physical_vertices(frequency: u32) -> usize {
    let f = frequency as usize;
    10 * f * f + 2
}

/// Number of triangles of a dome at `frequency`.
///
/// # Examples
/// ```
/// use config::constants::dome_triangle_count;
/// assert_eq!(dome_triangle_count(3), 180);
/// ```
pub fn dome_triangle_count(frequency: u32) -> usize {
    let f = frequency as usize;
    ICOSAHEDRON_FACES * f * f
}

/// Checks if two f64 values are approximately equal within `EPSILON_TOLERANCE`.
///
/// # Example
///
/// ```rust
/// use config::constants::approx_equal;
///
/// assert!(approx_equal(1.0, 1.0 + 1e-11));
/// assert!(!approx_equal(1.0, 1.1));
/// ```
#[inline]
pub fn approx_equal(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON_TOLERANCE
}

/// Checks if a f64 value is approximately zero within `EPSILON_TOLERANCE`.
///
/// # Example
///
/// ```rust
/// use config::constants::approx_zero;
///
/// assert!(approx_zero(1e-11));
/// assert!(!approx_zero(0.1));
/// ```
#[inline]
pub fn approx_zero(value: f64) -> bool {
    value.abs() < EPSILON_TOLERANCE
}
