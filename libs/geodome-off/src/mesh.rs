//! OFF (Object File Format) mesh model, writer and parser.
//!
//! ```text
//! OFF
//! <vertices> <faces> <vertices>
//! x y z                 one line per vertex
//! n id_0 ... id_{n-1}   one line per face
//! ```
//!
//! Lines starting with `#` and blank lines are ignored when parsing. The
//! third count is written as the vertex count and ignored on input.

use std::fmt;
use std::io::{self, BufRead, Write};
use std::str::FromStr;

use geodome::Manifold;
use geodome_projection::ProjectedMesh;
use glam::DVec3;
use tracing::debug;

use crate::error::{OffError, OffResult};

/// Upper bound on capacity reserved from header counts.
const PREALLOC_LIMIT: usize = 1 << 20;

/// Vertex coordinates plus faces of arbitrary arity.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OffMesh {
    pub vertices: Vec<DVec3>,
    pub faces: Vec<Vec<u32>>,
}

impl OffMesh {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    #[inline]
    pub fn face_count(&self) -> usize {
        self.faces.len()
    }

    /// Builds a mesh from a flat index list holding faces of `arity` each.
    ///
    /// # Errors
    ///
    /// [`OffError::FaceArity`] if the list does not split evenly,
    /// [`OffError::IndexOutOfRange`] for an index past the vertex list.
    pub fn from_flat_faces(vertices: Vec<DVec3>, indices: &[u32], arity: usize) -> OffResult<Self> {
        if arity == 0 || indices.len() % arity != 0 {
            return Err(OffError::FaceArity {
                arity,
                len: indices.len(),
            });
        }
        let mesh = Self {
            faces: indices.chunks_exact(arity).map(<[u32]>::to_vec).collect(),
            vertices,
        };
        mesh.check_indices()?;
        Ok(mesh)
    }

    /// The manifold's 3D mesh: sphere for a dome, flat lattice for a plane.
    ///
    /// # Example
    ///
    /// ```rust
    /// use geodome::GeodesicDome;
    /// use geodome_off::OffMesh;
    ///
    /// let mut dome = GeodesicDome::new(2)?;
    /// let mesh = OffMesh::from_manifold(&mut dome)?;
    /// assert_eq!((mesh.vertex_count(), mesh.face_count()), (63, 80));
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn from_manifold<M: Manifold>(manifold: &mut M) -> OffResult<Self> {
        let indices = manifold.all_triangles();
        let coords = manifold.all_xyz();
        Self::from_flat_faces(coords, &indices, manifold.vertices_per_face())
    }

    /// The manifold's unfolded net: every vertex placed at its grid
    /// position `(x, y, 0)`.
    pub fn flat_net<M: Manifold>(manifold: &mut M) -> OffResult<Self> {
        let indices = manifold.all_triangles();
        let coords = manifold
            .all_vertices()
            .into_iter()
            .map(|v| {
                let vertex = manifold.vertex(v);
                DVec3::new(f64::from(vertex.x()), f64::from(vertex.y()), 0.0)
            })
            .collect();
        Self::from_flat_faces(coords, &indices, manifold.vertices_per_face())
    }

    /// A projected mesh lifted to `z = 0`.
    #[must_use]
    pub fn from_projected(projected: &ProjectedMesh) -> Self {
        Self {
            vertices: projected.points.iter().map(|p| p.extend(0.0)).collect(),
            faces: projected.triangles.iter().map(|t| t.to_vec()).collect(),
        }
    }

    fn check_indices(&self) -> OffResult<()> {
        let count = self.vertices.len();
        match self.faces.iter().flatten().find(|&&i| i as usize >= count) {
            Some(&index) => Err(OffError::IndexOutOfRange { index, count }),
            None => Ok(()),
        }
    }

    /// Writes the mesh as ASCII OFF.
    ///
    /// # Errors
    ///
    /// Propagates I/O errors from `writer`.
    pub fn write<W: Write>(&self, mut writer: W) -> OffResult<()> {
        write!(writer, "{self}")?;
        Ok(())
    }

    /// Parses ASCII OFF from `reader`.
    ///
    /// # Errors
    ///
    /// Returns an error for a missing `OFF` header, malformed lines,
    /// truncated input or out-of-range face indices.
    pub fn read<R: BufRead>(reader: R) -> OffResult<Self> {
        let mut lines = reader.lines().enumerate();

        let (_, header) = next_content(&mut lines, "header")?;
        if header != "OFF" {
            return Err(OffError::InvalidHeader { found: header });
        }

        let (line, counts) = next_content(&mut lines, "counts")?;
        let counts: Vec<usize> = parse_fields(line, &counts)?;
        let [nv, nf, ..] = counts[..] else {
            return Err(OffError::invalid_content(
                line,
                "expected vertex and face counts",
            ));
        };

        let mut vertices = Vec::with_capacity(nv.min(PREALLOC_LIMIT));
        for _ in 0..nv {
            let (line, text) = next_content(&mut lines, "vertices")?;
            let coords: Vec<f64> = parse_fields(line, &text)?;
            let [x, y, z, ref extra @ ..] = coords[..] else {
                return Err(OffError::invalid_content(line, "expected 3 coordinates"));
            };
            if !extra.is_empty() {
                debug!(line, ignored = extra.len(), "ignoring extra vertex fields");
            }
            vertices.push(DVec3::new(x, y, z));
        }

        let mut faces = Vec::with_capacity(nf.min(PREALLOC_LIMIT));
        for _ in 0..nf {
            let (line, text) = next_content(&mut lines, "faces")?;
            let fields: Vec<u32> = parse_fields(line, &text)?;
            let Some((&n, ids)) = fields.split_first() else {
                return Err(OffError::invalid_content(line, "empty face"));
            };
            let n = n as usize;
            if n == 0 || ids.len() < n {
                return Err(OffError::invalid_content(
                    line,
                    format!("face declares {n} vertices but lists {}", ids.len()),
                ));
            }
            faces.push(ids[..n].to_vec());
        }

        let mesh = Self { vertices, faces };
        mesh.check_indices()?;
        Ok(mesh)
    }
}

/// Next non-blank, non-comment line with its 1-based number.
fn next_content<I>(lines: &mut I, expected: &'static str) -> OffResult<(usize, String)>
where
    I: Iterator<Item = (usize, io::Result<String>)>,
{
    for (i, line) in lines.by_ref() {
        let line = line?;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        return Ok((i + 1, trimmed.to_string()));
    }
    Err(OffError::UnexpectedEof { expected })
}

fn parse_fields<T: FromStr>(line: usize, text: &str) -> OffResult<Vec<T>> {
    text.split_whitespace()
        .map(|field| {
            field
                .parse()
                .map_err(|_| OffError::invalid_content(line, format!("cannot parse {field:?}")))
        })
        .collect()
}

impl fmt::Display for OffMesh {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let nv = self.vertices.len();
        writeln!(f, "OFF")?;
        writeln!(f, "{nv} {} {nv}", self.faces.len())?;
        for v in &self.vertices {
            writeln!(f, "{} {} {}", v.x, v.y, v.z)?;
        }
        for face in &self.faces {
            write!(f, "{}", face.len())?;
            for id in face {
                write!(f, " {id}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl FromStr for OffMesh {
    type Err = OffError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::read(s.as_bytes())
    }
}
