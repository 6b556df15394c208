use crate::math::Point3;

use super::{placeholder_tex_coords, RibbonMesh, RibbonParams};

/// Tessellates a polyline into a cheap two-rail ribbon.
///
/// Every point contributes two vertices, the second shifted along the Z axis
/// by the full width, and consecutive rail pairs are striped with explicit
/// front- and back-wound triangle pairs. No miter joins: artifacts at sharp
/// turns are expected and accepted.
#[derive(Debug)]
pub struct TessellateTwoRail {
    points: Vec<Point3>,
    params: RibbonParams,
}

impl TessellateTwoRail {
    /// Creates a new two-rail tessellation.
    #[must_use]
    pub fn new(points: Vec<Point3>, params: RibbonParams) -> Self {
        Self { points, params }
    }

    /// Executes the tessellation. Fewer than 2 points yield the empty mesh.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn execute(&self) -> RibbonMesh {
        let n = self.points.len();
        if n < 2 {
            return RibbonMesh::default();
        }

        let w = self.params.width;
        let mut points = Vec::with_capacity(n * 6);
        for p in &self.points {
            points.extend_from_slice(&[p.x, p.y, p.z, p.x, p.y, p.z + w]);
        }

        let mut faces = Vec::with_capacity((n - 1) * 24);
        for k in 1..n {
            let i = (k * 2) as u32;
            // Front side, wound counter-clockwise.
            faces.extend_from_slice(&[i, 0, i - 2, 0, i + 1, 0]);
            faces.extend_from_slice(&[i + 1, 0, i - 2, 0, i - 1, 0]);
            // The same quad rewound clockwise for the back side.
            faces.extend_from_slice(&[i + 1, 0, i - 2, 0, i, 0]);
            faces.extend_from_slice(&[i - 1, 0, i - 2, 0, i + 1, 0]);
        }

        let smoothing_groups = vec![0; faces.len() / 6];
        RibbonMesh {
            points,
            tex_coords: placeholder_tex_coords(),
            faces,
            smoothing_groups,
        }
    }
}
