//! Dome-level configuration helpers building on the shared `config` crate.
//!
//! The module wraps the workspace configuration so the subdivision engine
//! can stay decoupled from literal constants.

use config::constants::{ConfigError, GlobalConfig, MAX_VERTICES, SEAM_TOLERANCE};

/// Subdivision engine configuration.
///
/// # Examples
/// ```
/// use geodome::config::DomeConfig;
/// let cfg = DomeConfig::default();
/// assert!(cfg.tolerance > 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DomeConfig {
    /// Largest distance tolerated between two stitched seam vertices.
    pub tolerance: f64,
    /// Upper bound on the number of grid slots a dome may allocate.
    pub max_vertices: usize,
}

impl DomeConfig {
    /// Creates a new configuration from explicit values.
    ///
    /// # Examples
    /// ```
    /// use geodome::config::DomeConfig;
    /// let cfg = DomeConfig::new(1.0e-8, 10_000).unwrap();
    /// assert_eq!(cfg.max_vertices, 10_000);
    /// ```
    pub fn new(tolerance: f64, max_vertices: usize) -> Result<Self, ConfigError> {
        GlobalConfig::new(tolerance, max_vertices).map(Self::from)
    }
}

impl From<GlobalConfig> for DomeConfig {
    fn from(cfg: GlobalConfig) -> Self {
        Self {
            tolerance: cfg.tolerance,
            max_vertices: cfg.max_vertices,
        }
    }
}

impl Default for DomeConfig {
    fn default() -> Self {
        Self {
            tolerance: SEAM_TOLERANCE,
            max_vertices: MAX_VERTICES,
        }
    }
}
