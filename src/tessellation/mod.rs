mod builder;
mod cap_faces;
mod tessellate_ribbon;
mod tessellate_tube;
mod tessellate_two_rail;

pub use builder::RibbonBuilder;
pub use cap_faces::{build_cap_faces, reverse_winding, CapTriangulator, EarcutTriangulator};
pub use tessellate_ribbon::TessellateRibbon;
pub use tessellate_tube::TessellateTube;
pub use tessellate_two_rail::TessellateTwoRail;

use crate::operations::offset::DEFAULT_DEGENERATE_THRESHOLD;

/// Mesh style produced from a polyline.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RibbonStyle {
    /// Two rails per point, shifted along a fixed axis by the full width and
    /// striped with adjacent-index triangles. No miter correction; artifacts
    /// at sharp turns are expected.
    TwoRailRibbon,
    /// Flat double-sided ribbon centered on the polyline, bounded by a
    /// parallel-curve offset of the doubled point sequence and capped by
    /// triangulation.
    #[default]
    CenterOffsetRibbon,
    /// Tube of triangular cross-section around the polyline, with end caps.
    TriangularTube,
}

/// Parameters controlling ribbon meshing.
#[derive(Debug, Clone, Copy)]
pub struct RibbonParams {
    /// Full rail-to-rail width of the ribbon. Not validated: a non-positive
    /// width produces a degenerate zero- or inverted-thickness ribbon with
    /// unchanged topology.
    pub width: f64,
    /// Threshold for the offsetter's degenerate-joint fallback; see
    /// [`DEFAULT_DEGENERATE_THRESHOLD`].
    pub degenerate_join_threshold: f64,
}

impl RibbonParams {
    /// Creates parameters with the given width.
    #[must_use]
    pub fn new(width: f64) -> Self {
        Self {
            width,
            degenerate_join_threshold: DEFAULT_DEGENERATE_THRESHOLD,
        }
    }

    /// Overrides the degenerate-joint threshold.
    #[must_use]
    pub fn with_degenerate_join_threshold(mut self, threshold: f64) -> Self {
        self.degenerate_join_threshold = threshold;
        self
    }

    /// Returns half the ribbon width.
    #[must_use]
    pub fn half_width(&self) -> f64 {
        self.width * 0.5
    }
}

impl Default for RibbonParams {
    fn default() -> Self {
        Self::new(1.0)
    }
}

/// Triangle mesh buffers produced by the ribbon tessellators.
///
/// `points` is flat with stride 3 (x, y, z); `tex_coords` holds the single
/// placeholder coordinate pair; `faces` is flat with stride 2 — a (vertex
/// index, texture index) pair, three pairs per triangle, the texture index
/// always 0; `smoothing_groups` has one entry per triangle, always 0 (flat
/// shading).
///
/// A rebuild produces a complete fresh value which replaces the previous one
/// in a single assignment; no buffer is ever patched in place.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RibbonMesh {
    /// Vertex coordinates, flat, stride 3.
    pub points: Vec<f64>,
    /// The single placeholder texture coordinate.
    pub tex_coords: Vec<f64>,
    /// Face index list, flat, stride 2.
    pub faces: Vec<u32>,
    /// One smoothing-group value per triangle.
    pub smoothing_groups: Vec<u32>,
}

impl RibbonMesh {
    /// Returns the number of vertices.
    #[must_use]
    pub fn point_count(&self) -> usize {
        self.points.len() / 3
    }

    /// Returns the number of triangles.
    #[must_use]
    pub fn triangle_count(&self) -> usize {
        self.faces.len() / 6
    }

    /// Returns `true` when the mesh carries no geometry.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty() && self.faces.is_empty()
    }
}

/// The placeholder texture coordinate shared by every face.
pub(crate) fn placeholder_tex_coords() -> Vec<f64> {
    vec![0.0, 0.0]
}
