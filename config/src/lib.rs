//! # Config Crate
//!
//! Centralized configuration constants for the geodesic dome workspace.
//! All magic numbers and tunable parameters are defined here so that the
//! dome engine, the projections and the exporters agree on tolerances,
//! base-shape geometry and safety limits.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{approx_equal, dome_vertex_slots, EPSILON_TOLERANCE};
//!
//! // Compare floating point values within the shared tolerance
//! assert!(approx_equal(1.0, 1.0 + EPSILON_TOLERANCE / 10.0));
//!
//! // The base icosahedron occupies 22 grid slots
//! assert_eq!(dome_vertex_slots(1), 22);
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **Dependency Free**: Pure constants and validation, no external crates
//! - **Well-Documented**: Every constant has clear documentation

pub mod constants;
