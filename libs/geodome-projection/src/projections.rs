//! # Map Projections
//!
//! Pure `(latitude, longitude) -> (x, y)` transforms. Latitude and
//! longitude come from [`xyz_to_lat_lon`], so for dome vertices the
//! "equator" is the `z = 0` great circle.
//!
//! | Projection | x | y |
//! |---|---|---|
//! | Kavrayskiy VII | `1.5·λ·√(1/3 − (φ/π)²)` | `φ` |
//! | Wagner VI | `λ·√(1 − 3(φ/π)²)` | `φ` |
//! | Wagner III | `λ·cos(2φ/3)` | `φ` |
//! | Equal Earth | polynomial in `θ = asin(√3/2 · sin φ)` | polynomial in `θ` |

use geodome::sphere::xyz_to_lat_lon;
use glam::{DVec2, DVec3};
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

/// A map projection from the unit sphere to the plane.
pub trait Projection: Sync {
    /// Display name.
    fn name(&self) -> &'static str;

    /// Projects geographic coordinates (radians).
    fn lat_lon_to_2d(&self, lat: f64, lon: f64) -> DVec2;

    /// Projects a point of the unit sphere.
    fn xyz_to_2d(&self, coord: DVec3) -> DVec2 {
        let (lat, lon) = xyz_to_lat_lon(coord);
        self.lat_lon_to_2d(lat, lon)
    }
}

/// Kavrayskiy VII pseudocylindrical projection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct KavrayskiyVII;

impl Projection for KavrayskiyVII {
    fn name(&self) -> &'static str {
        "Kavrayskiy VII"
    }

    fn lat_lon_to_2d(&self, lat: f64, lon: f64) -> DVec2 {
        let x = 1.5 * lon * (1.0 / 3.0 - (lat / PI).powi(2)).sqrt();
        DVec2::new(x, lat)
    }
}

/// Wagner VI pseudocylindrical projection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WagnerVI;

impl Projection for WagnerVI {
    fn name(&self) -> &'static str {
        "Wagner VI"
    }

    fn lat_lon_to_2d(&self, lat: f64, lon: f64) -> DVec2 {
        let x = lon * (1.0 - 3.0 * (lat / PI).powi(2)).sqrt();
        DVec2::new(x, lat)
    }
}

/// Wagner III with standard parallel factor `m = 2·acos(0.5)/π = 2/3`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WagnerIII;

impl WagnerIII {
    const M: f64 = 2.0 / 3.0;
}

impl Projection for WagnerIII {
    fn name(&self) -> &'static str {
        "Wagner III"
    }

    fn lat_lon_to_2d(&self, lat: f64, lon: f64) -> DVec2 {
        DVec2::new(lon * (Self::M * lat).cos(), lat)
    }
}

/// Equal Earth equal-area projection (Šavrič, Patterson, Jenny 2018).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EqualEarth;

impl EqualEarth {
    const A1: f64 = 1.340264;
    const A2: f64 = -0.081106;
    const A3: f64 = 0.000893;
    const A4: f64 = 0.003796;
}

impl Projection for EqualEarth {
    fn name(&self) -> &'static str {
        "Equal Earth"
    }

    fn lat_lon_to_2d(&self, lat: f64, lon: f64) -> DVec2 {
        let theta = (lat.sin() * 3f64.sqrt() * 0.5).asin();
        let t2 = theta * theta;
        let t6 = t2 * t2 * t2;
        let denom = 3.0 * (9.0 * Self::A4 * t6 * t2 + 7.0 * Self::A3 * t6 + 3.0 * Self::A2 * t2 + Self::A1);
        let x = 2.0 * 3f64.sqrt() * lon * theta.cos() / denom;
        let y = theta * (Self::A4 * t6 * t2 + Self::A3 * t6 + Self::A2 * t2 + Self::A1);
        DVec2::new(x, y)
    }
}

/// Runtime choice among the built-in projections.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProjectionKind {
    #[default]
    KavrayskiyVII,
    WagnerVI,
    WagnerIII,
    EqualEarth,
}

impl ProjectionKind {
    /// Every built-in projection.
    pub const ALL: [ProjectionKind; 4] = [
        ProjectionKind::KavrayskiyVII,
        ProjectionKind::WagnerVI,
        ProjectionKind::WagnerIII,
        ProjectionKind::EqualEarth,
    ];

    fn inner(self) -> &'static dyn Projection {
        match self {
            ProjectionKind::KavrayskiyVII => &KavrayskiyVII,
            ProjectionKind::WagnerVI => &WagnerVI,
            ProjectionKind::WagnerIII => &WagnerIII,
            ProjectionKind::EqualEarth => &EqualEarth,
        }
    }
}

impl Projection for ProjectionKind {
    fn name(&self) -> &'static str {
        self.inner().name()
    }

    fn lat_lon_to_2d(&self, lat: f64, lon: f64) -> DVec2 {
        self.inner().lat_lon_to_2d(lat, lon)
    }
}
