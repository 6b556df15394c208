use crate::error::Result;
use crate::math::Point3;
use crate::operations::offset::{OffsetSide, ParallelOffset2D};
use crate::operations::BuildBoundaryLoop;

use super::cap_faces::{build_cap_faces, reverse_winding, CapTriangulator};
use super::{placeholder_tex_coords, RibbonMesh, RibbonParams};

/// Tessellates a polyline into a flat, double-sided ribbon centered on it.
///
/// The ribbon boundary is the parallel-curve offset of the doubled
/// forward+backward point sequence, displaced by half the width. The offset
/// runs in open mode even though the doubled sequence geometrically closes
/// on itself: the two cap edges at the polyline's start are never
/// miter-joined to each other. The interior is capped by the injected
/// triangulator, and every cap triangle is duplicated with reversed winding
/// so both sides render without culling tricks.
#[derive(Debug)]
pub struct TessellateRibbon {
    points: Vec<Point3>,
    params: RibbonParams,
}

impl TessellateRibbon {
    /// Creates a new center-ribbon tessellation.
    #[must_use]
    pub fn new(points: Vec<Point3>, params: RibbonParams) -> Self {
        Self { points, params }
    }

    /// Executes the tessellation.
    ///
    /// Fewer than 3 points yield the empty mesh. A boundary loop the
    /// triangulator cannot handle yields a mesh with vertices but few or no
    /// cap faces — a partial mesh, not an error.
    ///
    /// # Errors
    ///
    /// Propagates face-list construction failures; none occur for loops
    /// produced by this operation.
    pub fn execute(&self, triangulator: &dyn CapTriangulator) -> Result<RibbonMesh> {
        if self.points.len() < 3 {
            return Ok(RibbonMesh::default());
        }

        let boundary = BuildBoundaryLoop::new(self.points.clone()).execute();
        let offset = ParallelOffset2D::new(
            boundary,
            self.params.half_width(),
            OffsetSide::Left,
            false,
        )
        .with_degenerate_threshold(self.params.degenerate_join_threshold)
        .execute();

        let front = build_cap_faces(&offset, 0, triangulator);
        let back = reverse_winding(&front)?;

        let mut faces = front;
        faces.extend_from_slice(&back);
        let smoothing_groups = vec![0; faces.len() / 6];

        Ok(RibbonMesh {
            points: offset,
            tex_coords: placeholder_tex_coords(),
            faces,
            smoothing_groups,
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::tessellation::EarcutTriangulator;
    use approx::assert_relative_eq;

    /// Fixed fan triangulation from vertex 0, independent of geometry.
    struct FanTriangulator;

    impl CapTriangulator for FanTriangulator {
        fn triangulate(&self, coords: &[f64]) -> Vec<usize> {
            let n = coords.len() / 3;
            let mut indices = Vec::new();
            for i in 1..n.saturating_sub(1) {
                indices.extend_from_slice(&[0, i, i + 1]);
            }
            indices
        }
    }

    fn l_shape() -> Vec<Point3> {
        vec![
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(10.0, 0.0, 0.0),
            Point3::new(10.0, 10.0, 0.0),
        ]
    }

    #[test]
    fn l_shape_end_to_end() {
        let mesh = TessellateRibbon::new(l_shape(), RibbonParams::new(2.0))
            .execute(&EarcutTriangulator)
            .unwrap();

        // 3 points double to a 6-point (18-float) boundary loop.
        assert_eq!(mesh.points.len(), 18);
        assert_eq!(mesh.point_count(), 6);

        // The offset loop is a simple hexagon: 4 cap triangles per side.
        assert!(!mesh.faces.is_empty());
        assert_eq!(mesh.triangle_count(), 8);
        assert_eq!(mesh.smoothing_groups, vec![0; 8]);
        assert_eq!(mesh.tex_coords, vec![0.0, 0.0]);

        // Every vertex index addresses the 6-point loop; every texture
        // index is the placeholder.
        for pair in mesh.faces.chunks_exact(2) {
            assert!(pair[0] < 6, "vertex index {} out of range", pair[0]);
            assert_eq!(pair[1], 0);
        }

        // The back half mirrors the front half with pairs 1 and 2 swapped.
        let (front, back) = mesh.faces.split_at(mesh.faces.len() / 2);
        for (f, b) in front.chunks_exact(6).zip(back.chunks_exact(6)) {
            assert_eq!(b.to_vec(), vec![f[0], f[1], f[4], f[5], f[2], f[3]]);
        }
    }

    #[test]
    fn l_shape_offset_positions() {
        // Hand-computed boundary: the doubled L offsets to a hexagon with a
        // mitered inner corner at (9, 1) and degenerate fallbacks at the
        // far turnaround.
        let mesh = TessellateRibbon::new(l_shape(), RibbonParams::new(2.0))
            .execute(&EarcutTriangulator)
            .unwrap();

        let expected = [
            (0.0, 1.0),
            (9.0, 1.0),
            (9.0, 10.0),
            (11.0, 10.0),
            (11.0, -1.0),
            (0.0, -1.0),
        ];
        for (i, &(x, y)) in expected.iter().enumerate() {
            assert_relative_eq!(mesh.points[i * 3], x, epsilon = 1e-9);
            assert_relative_eq!(mesh.points[i * 3 + 1], y, epsilon = 1e-9);
        }
    }

    #[test]
    fn zero_width_collapses_rails_but_keeps_topology() {
        let wide = TessellateRibbon::new(l_shape(), RibbonParams::new(2.0))
            .execute(&FanTriangulator)
            .unwrap();
        let flat = TessellateRibbon::new(l_shape(), RibbonParams::new(0.0))
            .execute(&FanTriangulator)
            .unwrap();

        // Rail pairs collapse onto the original centerline points.
        let centerline = l_shape();
        let n = centerline.len();
        for (i, p) in centerline.iter().enumerate() {
            for idx in [i, 2 * n - 1 - i] {
                assert_relative_eq!(flat.points[idx * 3], p.x, epsilon = 1e-9);
                assert_relative_eq!(flat.points[idx * 3 + 1], p.y, epsilon = 1e-9);
                assert_relative_eq!(flat.points[idx * 3 + 2], p.z, epsilon = 1e-9);
            }
        }

        // Same triangle count as the wide ribbon.
        assert_eq!(flat.triangle_count(), wide.triangle_count());
        assert_eq!(flat.point_count(), wide.point_count());
    }

    #[test]
    fn fewer_than_three_points_yield_empty_mesh() {
        let two = vec![Point3::new(0.0, 0.0, 0.0), Point3::new(1.0, 0.0, 0.0)];
        let mesh = TessellateRibbon::new(two, RibbonParams::default())
            .execute(&EarcutTriangulator)
            .unwrap();
        assert!(mesh.is_empty());
    }

    #[test]
    fn degenerate_loop_keeps_vertices_without_caps() {
        // A zero-width ribbon collapses the loop to zero area; the real
        // triangulator returns nothing and the mesh stays partial.
        let mesh = TessellateRibbon::new(l_shape(), RibbonParams::new(0.0))
            .execute(&EarcutTriangulator)
            .unwrap();

        assert_eq!(mesh.point_count(), 6);
        assert!(mesh.faces.is_empty());
        assert!(mesh.smoothing_groups.is_empty());
    }
}
