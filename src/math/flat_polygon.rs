use crate::error::{GeometryError, Result};

/// Coordinate stride of a flat buffer: x, y, z per logical point.
pub const STRIDE: usize = 3;

/// Returns the number of logical points in a flat coordinate buffer.
#[must_use]
pub fn point_count(coords: &[f64]) -> usize {
    coords.len() / STRIDE
}

/// Determines the winding of a closed polygon given as a flat x,y,z buffer,
/// projected onto the XY plane.
///
/// Accumulates the trapezoid sum `Σ (xᵢ − xᵢ₋₁)(yᵢ + yᵢ₋₁)` over all edges
/// including the closing edge. Returns `-1` for clockwise, `+1` otherwise
/// (the degenerate zero-sum case counts as counter-clockwise).
///
/// # Errors
///
/// Returns `GeometryError::InvalidBuffer` if the buffer length is not a
/// multiple of [`STRIDE`] or describes fewer than 3 points.
pub fn winding_2d(coords: &[f64]) -> Result<i32> {
    let n = coords.len();
    if n % STRIDE != 0 || n < 3 * STRIDE {
        return Err(GeometryError::InvalidBuffer(format!(
            "polygon buffer length {n} is not a stride-{STRIDE} buffer of at least 3 points"
        ))
        .into());
    }

    let mut sum = 0.0;
    for i in (STRIDE..n - 2).step_by(STRIDE) {
        sum += (coords[i] - coords[i - 3]) * (coords[i + 1] + coords[i - 2]);
    }
    sum += (coords[0] - coords[n - 3]) * (coords[1] + coords[n - 2]);

    if sum > 0.0 {
        Ok(-1)
    } else {
        Ok(1)
    }
}

/// Computes the signed area of a polygon given as a flat x,y,z buffer,
/// projected onto the XY plane (shoelace formula).
///
/// Positive for counter-clockwise, negative for clockwise. Buffers with
/// fewer than 3 points have zero area.
#[must_use]
pub fn signed_area_2d(coords: &[f64]) -> f64 {
    let n = point_count(coords);
    if n < 3 {
        return 0.0;
    }
    let mut sum = 0.0;
    for i in 0..n {
        let j = (i + 1) % n;
        sum += coords[i * STRIDE] * coords[j * STRIDE + 1]
            - coords[j * STRIDE] * coords[i * STRIDE + 1];
    }
    sum * 0.5
}
