//! Base icosahedron laid out on the 7-column jagged grid.
//!
//! ```text
//!                  v17  v20  v22
//!             v13  v16  v19  v21
//!         v9  v12  v15  v18
//!     v5  v8  v11  v14
//! v2  v4  v7  v10
//! v1  v3  v6
//! ```
//!
//! `v2 v5 v9 v13 v17` are the north pole, `v6 v10 v14 v18 v21` the south
//! pole, `v1 = v20` and `v3 = v22`: 22 slots for 12 physical vertices.

use config::constants::{ICOSAHEDRON_BASE_COLUMNS, ICOSAHEDRON_RING_POLAR_DEGREES};
use glam::DVec3;
use std::f64::consts::{PI, TAU};

use crate::grid::{Column, JaggedGrid};
use crate::sphere::spherical_to_xyz;
use crate::vertex::{Vertex, VertexIdx};

/// Latitude band of a base vertex.
#[derive(Debug, Clone, Copy)]
enum Band {
    North,
    Upper,
    Lower,
    South,
}

impl Band {
    fn polar(self) -> f64 {
        let ring = ICOSAHEDRON_RING_POLAR_DEGREES.to_radians();
        match self {
            Band::North => 0.0,
            Band::Upper => ring,
            Band::Lower => PI - ring,
            Band::South => PI,
        }
    }
}

/// Column offsets of the base grid.
const OFFSETS: [i32; ICOSAHEDRON_BASE_COLUMNS] = [0, 0, 0, 1, 2, 3, 4];

/// Per column, bottom to top: band and azimuth in fifths of a turn.
const LAYOUT: [&[(Band, f64)]; ICOSAHEDRON_BASE_COLUMNS] = [
    &[(Band::Upper, 0.0), (Band::North, 0.0)],
    &[(Band::Lower, 0.5), (Band::Upper, 1.0), (Band::North, 0.0)],
    &[
        (Band::South, 0.0),
        (Band::Lower, 1.5),
        (Band::Upper, 2.0),
        (Band::North, 0.0),
    ],
    &[
        (Band::South, 0.0),
        (Band::Lower, 2.5),
        (Band::Upper, 3.0),
        (Band::North, 0.0),
    ],
    &[
        (Band::South, 0.0),
        (Band::Lower, 3.5),
        (Band::Upper, 4.0),
        (Band::North, 0.0),
    ],
    &[(Band::South, 0.0), (Band::Lower, 4.5), (Band::Upper, 0.0)],
    &[(Band::South, 0.0), (Band::Lower, 0.5)],
];

/// Builds the 22 base vertices and their grid. Seams are left unlinked.
pub(super) fn base_vertices<D>() -> (Vec<Vertex<D>>, JaggedGrid) {
    let step = TAU / 5.0;
    let mut vertices = Vec::with_capacity(22);
    let mut columns = Vec::with_capacity(LAYOUT.len());

    for (x, (entries, &offset)) in LAYOUT.iter().zip(OFFSETS.iter()).enumerate() {
        let mut slots = Vec::with_capacity(entries.len());
        for (row, &(band, fifths)) in entries.iter().enumerate() {
            let coord: DVec3 = spherical_to_xyz(band.polar(), fifths * step);
            slots.push(VertexIdx::new(vertices.len() as u32));
            vertices.push(Vertex::new(x as i32, offset + row as i32, coord));
        }
        columns.push(Column::new(offset, slots));
    }

    (vertices, JaggedGrid::new(columns))
}
