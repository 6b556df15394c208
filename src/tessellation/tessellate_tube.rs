use crate::math::Point3;

use super::{placeholder_tex_coords, RibbonMesh, RibbonParams};

/// Tessellates a polyline into a tube of triangular cross-section.
///
/// Every point contributes three vertices forming an equilateral triangle
/// around the path, capped at both ends and connected by six side triangles
/// per segment. No miter correction: the tube relies on small
/// segment-to-segment angle changes.
#[derive(Debug)]
pub struct TessellateTube {
    points: Vec<Point3>,
    params: RibbonParams,
}

impl TessellateTube {
    /// Creates a new triangular tube tessellation.
    #[must_use]
    pub fn new(points: Vec<Point3>, params: RibbonParams) -> Self {
        Self { points, params }
    }

    /// Executes the tessellation. Fewer than 2 points yield the empty mesh.
    ///
    /// Triangle count is `2 + 6 × (pointCount − 1)`.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn execute(&self) -> RibbonMesh {
        let n = self.points.len();
        if n < 2 {
            return RibbonMesh::default();
        }

        let half = self.params.half_width();
        let mut points = Vec::with_capacity(n * 9);
        for p in &self.points {
            points.extend_from_slice(&[
                p.x - 0.288_675 * half,
                p.y - 0.5 * half,
                p.z - 0.204_124 * half,
                p.x - 0.288_675 * half,
                p.y + 0.5 * half,
                p.z - 0.204_124 * half,
                p.x + 0.577_35 * half,
                p.y + 0.5 * half,
                p.z - 0.204_124 * half,
            ]);
        }

        let mut faces = Vec::with_capacity((n - 1) * 36 + 12);
        // Beginning end cap.
        faces.extend_from_slice(&[0, 0, 1, 0, 2, 0]);

        // Six side triangles between consecutive cross-sections, wound
        // counter-clockwise.
        for k in 1..n {
            let i = (k * 3) as u32;
            // Tube face 1.
            faces.extend_from_slice(&[i + 2, 0, i - 2, 0, i + 1, 0]);
            faces.extend_from_slice(&[i + 2, 0, i - 1, 0, i - 2, 0]);
            // Tube face 2.
            faces.extend_from_slice(&[i + 2, 0, i - 3, 0, i - 1, 0]);
            faces.extend_from_slice(&[i, 0, i - 3, 0, i + 2, 0]);
            // Tube face 3.
            faces.extend_from_slice(&[i, 0, i + 1, 0, i - 3, 0]);
            faces.extend_from_slice(&[i + 1, 0, i - 2, 0, i - 3, 0]);
        }

        // Final end cap.
        let last = (n * 3 - 1) as u32;
        faces.extend_from_slice(&[last, 0, last - 1, 0, last - 2, 0]);

        let smoothing_groups = vec![0; faces.len() / 6];
        RibbonMesh {
            points,
            tex_coords: placeholder_tex_coords(),
            faces,
            smoothing_groups,
        }
    }
}
