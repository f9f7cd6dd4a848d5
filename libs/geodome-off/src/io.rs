//! File-level OFF save and load.

use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use tracing::info;

use crate::error::{OffError, OffResult};
use crate::mesh::OffMesh;

/// Save a mesh to an OFF file.
///
/// # Errors
///
/// Returns an error if the file cannot be created or written.
///
/// # Example
///
/// ```no_run
/// use geodome::GeodesicDome;
/// use geodome_off::{save_off, OffMesh};
///
/// let mut dome = GeodesicDome::new(8)?;
/// save_off(&OffMesh::from_manifold(&mut dome)?, "dome.off")?;
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn save_off<P: AsRef<Path>>(mesh: &OffMesh, path: P) -> OffResult<()> {
    let path = path.as_ref();
    let mut writer = BufWriter::new(File::create(path)?);
    mesh.write(&mut writer)?;
    writer.flush()?;
    info!(
        path = %path.display(),
        vertices = mesh.vertex_count(),
        faces = mesh.face_count(),
        "saved OFF mesh"
    );
    Ok(())
}

/// Load a mesh from an OFF file.
///
/// # Errors
///
/// Returns [`OffError::FileNotFound`] for a missing file, or any parse
/// error from [`OffMesh::read`].
pub fn load_off<P: AsRef<Path>>(path: P) -> OffResult<OffMesh> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            OffError::FileNotFound {
                path: path.to_path_buf(),
            }
        } else {
            OffError::Io(e)
        }
    })?;
    let mesh = OffMesh::read(BufReader::new(file))?;
    info!(
        path = %path.display(),
        vertices = mesh.vertex_count(),
        faces = mesh.face_count(),
        "loaded OFF mesh"
    );
    Ok(mesh)
}
