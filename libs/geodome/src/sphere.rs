//! # Sphere Coordinates
//!
//! Conversions between Cartesian unit vectors and the two angular
//! conventions used in this crate:
//!
//! - **Spherical** `(polar, azimuth)`: polar angle measured from the +Y pole,
//!   azimuth measured from +Z towards +X. The dome is built in this frame.
//! - **Geographic** `(lat, lon)`: latitude `asin(z)` and longitude
//!   `atan2(y, x)`. Map projections consume this frame.

use glam::DVec3;
use std::f64::consts::{PI, TAU};

/// Above this |y| a vector is snapped onto a pole.
const POLE_SNAP: f64 = 0.9999;

/// Converts a polar angle and azimuth (radians) into a unit vector.
///
/// # Examples
/// ```
/// use geodome::sphere::spherical_to_xyz;
/// let north = spherical_to_xyz(0.0, 0.0);
/// assert!((north.y - 1.0).abs() < 1e-12);
/// ```
pub fn spherical_to_xyz(polar: f64, azimuth: f64) -> DVec3 {
    let (sin_p, cos_p) = polar.sin_cos();
    DVec3::new(sin_p * azimuth.sin(), cos_p, sin_p * azimuth.cos())
}

/// Converts a unit vector into `(polar, azimuth)` with azimuth in `[0, 2π)`.
///
/// Vectors within `1e-4` of a pole are snapped to it with azimuth `0`.
///
/// # Examples
/// ```
/// use geodome::sphere::{spherical_to_xyz, xyz_to_spherical};
/// let (polar, azimuth) = xyz_to_spherical(spherical_to_xyz(1.0, 2.0));
/// assert!((polar - 1.0).abs() < 1e-9);
/// assert!((azimuth - 2.0).abs() < 1e-9);
/// ```
pub fn xyz_to_spherical(coord: DVec3) -> (f64, f64) {
    if coord.y > POLE_SNAP {
        return (0.0, 0.0);
    }
    if coord.y < -POLE_SNAP {
        return (PI, 0.0);
    }
    let polar = angle_between(coord, DVec3::Y);
    let mut azimuth = angle_between(DVec3::new(coord.x, 0.0, coord.z), DVec3::Z);
    if coord.x < 0.0 {
        azimuth = TAU - azimuth;
    }
    (polar, azimuth)
}

/// Converts a unit vector into geographic `(latitude, longitude)` radians.
///
/// # Examples
/// ```
/// use geodome::sphere::xyz_to_lat_lon;
/// use glam::DVec3;
/// let (lat, lon) = xyz_to_lat_lon(DVec3::Y);
/// assert_eq!(lat, 0.0);
/// assert!((lon - std::f64::consts::FRAC_PI_2).abs() < 1e-12);
/// ```
pub fn xyz_to_lat_lon(coord: DVec3) -> (f64, f64) {
    let lat = coord.z.clamp(-1.0, 1.0).asin();
    let lon = coord.y.atan2(coord.x);
    (lat, lon)
}

/// Angle (radians) between two vectors, robust to rounding outside `[-1, 1]`.
pub fn angle_between(a: DVec3, b: DVec3) -> f64 {
    let norms = a.length() * b.length();
    if norms == 0.0 {
        return 0.0;
    }
    (a.dot(b) / norms).clamp(-1.0, 1.0).acos()
}
