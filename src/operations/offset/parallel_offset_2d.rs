use crate::math::TOLERANCE;

/// Degenerate-joint threshold on the 2D cross product of adjacent unit edge
/// directions. Below it the joint counts as a near-0° or near-180° bend and
/// the miter intersection is replaced by a plain perpendicular displacement.
/// The value assumes coordinates of roughly unit scale; callers working at
/// other scales should override it via
/// [`ParallelOffset2D::with_degenerate_threshold`].
pub const DEFAULT_DEGENERATE_THRESHOLD: f64 = 0.1;

/// Which side of the path, relative to the walking direction, the offset
/// curve lies on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OffsetSide {
    /// Left of the walking direction.
    Left,
    /// Right of the walking direction.
    Right,
}

impl OffsetSide {
    /// Returns the sign applied to the offset displacement.
    #[must_use]
    pub fn sign(self) -> f64 {
        match self {
            Self::Left => 1.0,
            Self::Right => -1.0,
        }
    }
}

/// Offsets a path parallel to itself in the XY plane.
///
/// The path is a flat x,y,z coordinate buffer; every point is displaced
/// perpendicular to the local path direction by `distance`, with miter joins
/// at interior vertices. Offsetting is planar: z is carried through
/// unchanged per point.
///
/// # Modes
///
/// - **Open**: the first and last vertices are offset perpendicular to their
///   single adjacent edge; interior vertices get miter joins.
/// - **Closed**: the last point implicitly connects back to the first, so
///   every vertex gets a miter join; vertex 0 uses the closing edge as its
///   incoming edge, the last vertex uses it as its outgoing edge.
///
/// # Degenerate geometry
///
/// Never fails. Near-parallel or near-antiparallel joints (cross product
/// below the threshold) fall back to a perpendicular displacement instead of
/// the near-zero-denominator miter formula; zero-length edges reuse the
/// previous edge's direction; a path of fewer than 2 points comes back
/// unchanged.
#[derive(Debug)]
pub struct ParallelOffset2D {
    coords: Vec<f64>,
    distance: f64,
    side: OffsetSide,
    closed: bool,
    degenerate_threshold: f64,
}

impl ParallelOffset2D {
    /// Creates a new parallel offset operation.
    #[must_use]
    pub fn new(coords: Vec<f64>, distance: f64, side: OffsetSide, closed: bool) -> Self {
        Self {
            coords,
            distance,
            side,
            closed,
            degenerate_threshold: DEFAULT_DEGENERATE_THRESHOLD,
        }
    }

    /// Overrides the degenerate-joint threshold.
    #[must_use]
    pub fn with_degenerate_threshold(mut self, threshold: f64) -> Self {
        self.degenerate_threshold = threshold;
        self
    }

    /// Executes the offset, returning a buffer of identical length.
    #[must_use]
    pub fn execute(&self) -> Vec<f64> {
        let n = self.coords.len();
        if n < 6 || n % 3 != 0 {
            return self.coords.clone();
        }
        if self.closed {
            self.execute_closed()
        } else {
            self.execute_open()
        }
    }

    fn execute_open(&self) -> Vec<f64> {
        let coords = &self.coords;
        let n = coords.len();
        let t = self.distance;
        let s = self.side.sign();
        let mut out = vec![0.0; n];

        // Unit vector (a, b) along the first edge.
        let (mut a, mut b) = first_direction(coords[3] - coords[0], coords[4] - coords[1]);

        // First vertex: perpendicular to the first edge only.
        out[0] = coords[0] - s * t * b;
        out[1] = coords[1] + s * t * a;
        out[2] = coords[2];

        // Interior vertices: intersect successive offset edge lines.
        for i in (3..n - 4).step_by(3) {
            let in_a = a;
            let in_b = b;
            (a, b) = edge_direction(coords, i, in_a, in_b);
            offset_vertex(&mut out, coords, i, in_a, in_b, a, b, t, s, self.degenerate_threshold);
        }

        // Last vertex: perpendicular to the last edge only.
        out[n - 3] = coords[n - 3] - s * t * b;
        out[n - 2] = coords[n - 2] + s * t * a;
        out[n - 1] = coords[n - 1];

        out
    }

    fn execute_closed(&self) -> Vec<f64> {
        let coords = &self.coords;
        let n = coords.len();
        let t = self.distance;
        let s = self.side.sign();
        let mut out = vec![0.0; n];

        // Unit vector (a, b) along the closing edge, from the last point back
        // to the first. Vertex 0 uses it as its incoming edge.
        let (mut a, mut b) =
            first_direction(coords[0] - coords[n - 3], coords[1] - coords[n - 2]);
        let a0 = a;
        let b0 = b;

        for i in (0..n - 4).step_by(3) {
            let in_a = a;
            let in_b = b;
            (a, b) = edge_direction(coords, i, in_a, in_b);
            offset_vertex(&mut out, coords, i, in_a, in_b, a, b, t, s, self.degenerate_threshold);
        }

        // Last vertex: the closing edge is its outgoing edge.
        offset_vertex(
            &mut out,
            coords,
            n - 3,
            a,
            b,
            a0,
            b0,
            t,
            s,
            self.degenerate_threshold,
        );

        out
    }
}

/// Normalizes the first edge direction. A negligible edge yields the zero
/// vector, leaving the affected vertices on the centerline.
fn first_direction(a: f64, b: f64) -> (f64, f64) {
    let d = (a * a + b * b).sqrt();
    if d < TOLERANCE {
        (0.0, 0.0)
    } else {
        (a / d, b / d)
    }
}

/// Unit direction of the edge leaving the point at buffer index `i`,
/// reusing the incoming direction when the edge has negligible length
/// (coincident consecutive points).
fn edge_direction(coords: &[f64], i: usize, in_a: f64, in_b: f64) -> (f64, f64) {
    let a = coords[i + 3] - coords[i];
    let b = coords[i + 4] - coords[i + 1];
    let d = (a * a + b * b).sqrt();
    if d < TOLERANCE {
        (in_a, in_b)
    } else {
        (a / d, b / d)
    }
}

/// Writes the offset position of the vertex at buffer index `i` given its
/// unit incoming and outgoing edge directions.
#[allow(clippy::too_many_arguments)]
fn offset_vertex(
    out: &mut [f64],
    coords: &[f64],
    i: usize,
    in_a: f64,
    in_b: f64,
    out_a: f64,
    out_b: f64,
    t: f64,
    s: f64,
    threshold: f64,
) {
    let cross = in_a * out_b - out_a * in_b;

    if cross.abs() < threshold {
        // Near 0° or 180° at the vertex: perpendicular to the outgoing edge.
        out[i] = coords[i] - s * t * out_b;
        out[i + 1] = coords[i + 1] + s * t * out_a;
    } else {
        out[i] = coords[i] + s * t * (out_a - in_a) / cross;
        out[i + 1] = coords[i + 1] + s * t * (out_b - in_b) / cross;
    }
    out[i + 2] = coords[i + 2];
}
