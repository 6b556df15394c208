use crate::error::{Result, TessellationError};

/// Planar-polygon triangulation used to cap a ribbon boundary loop.
///
/// Implementations receive a flat x,y,z coordinate buffer describing a
/// simple polygon (z is ignored) and return vertex indices into that buffer,
/// three per triangle. Self-intersecting or degenerate loops may yield an
/// empty or partial index sequence; callers tolerate missing cap geometry
/// rather than failing.
pub trait CapTriangulator {
    /// Triangulates the XY projection of the loop.
    fn triangulate(&self, coords: &[f64]) -> Vec<usize>;
}

/// Ear-clipping triangulator backed by the `earcutr` crate.
#[derive(Debug, Clone, Copy, Default)]
pub struct EarcutTriangulator;

impl CapTriangulator for EarcutTriangulator {
    fn triangulate(&self, coords: &[f64]) -> Vec<usize> {
        let no_holes: &[usize] = &[];
        // `earcutr` only supports 2D input (it returns no triangles unless
        // `dims == 2`), so project the x,y,z buffer to interleaved x,y pairs
        // before triangulating. Vertex numbering is unchanged: the i-th
        // vertex maps to the same index into the original buffer.
        let mut xy = Vec::with_capacity((coords.len() / 3) * 2);
        for v in coords.chunks_exact(3) {
            xy.push(v[0]);
            xy.push(v[1]);
        }
        earcutr::earcut(&xy, no_holes, 2).unwrap_or_default()
    }
}

/// Builds the cap face list for a boundary loop.
///
/// Each triangulated vertex index, shifted by `vertex_offset` for composing
/// into a larger shared vertex buffer, is paired with the placeholder
/// texture index 0. Output length is `2 × 3 × triangleCount`.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn build_cap_faces(
    coords: &[f64],
    vertex_offset: u32,
    triangulator: &dyn CapTriangulator,
) -> Vec<u32> {
    let indices = triangulator.triangulate(coords);
    let mut faces = Vec::with_capacity(indices.len() * 2);
    for v in indices {
        faces.push(v as u32 + vertex_offset);
        faces.push(0);
    }
    faces
}

/// Reverses the winding of every triangle in a face list.
///
/// For each group of 6 values (three (vertex, texture) pairs), the first
/// pair is kept and the second and third are swapped, flipping the face
/// normal. Applying the operation twice returns the original list.
///
/// # Errors
///
/// Returns `TessellationError::InvalidFaceList` if the length is not a
/// multiple of 6. The empty list is allowed and maps to the empty list,
/// tolerating a failed cap triangulation upstream.
pub fn reverse_winding(faces: &[u32]) -> Result<Vec<u32>> {
    if faces.len() % 6 != 0 {
        return Err(TessellationError::InvalidFaceList(format!(
            "face list length {} is not a multiple of 6",
            faces.len()
        ))
        .into());
    }

    let mut reversed = Vec::with_capacity(faces.len());
    for tri in faces.chunks_exact(6) {
        reversed.extend_from_slice(&[tri[0], tri[1], tri[4], tri[5], tri[2], tri[3]]);
    }
    Ok(reversed)
}
