use crate::math::Point3;

/// Builds the boundary loop of a ribbon from its centerline polyline.
///
/// The loop is the polyline forward followed by the same polyline reversed,
/// flattened into an x,y,z coordinate buffer: a pseudo-closed outline whose
/// interior is later capped by triangulation. For an input of `n` points the
/// loop has `2n` points, and loop indices `i` and `2n − 1 − i` are the two
/// rail positions derived from original point `i`.
#[derive(Debug)]
pub struct BuildBoundaryLoop {
    points: Vec<Point3>,
}

impl BuildBoundaryLoop {
    /// Creates a new boundary loop construction.
    #[must_use]
    pub fn new(points: Vec<Point3>) -> Self {
        Self { points }
    }

    /// Executes the construction, returning a flat buffer of `6n` floats.
    #[must_use]
    pub fn execute(&self) -> Vec<f64> {
        let mut coords = Vec::with_capacity(self.points.len() * 6);
        for p in &self.points {
            coords.extend_from_slice(&[p.x, p.y, p.z]);
        }
        for p in self.points.iter().rev() {
            coords.extend_from_slice(&[p.x, p.y, p.z]);
        }
        coords
    }
}
