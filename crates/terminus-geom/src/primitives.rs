//! Elementary shape generators: straight lines, circular arcs, rounded
//! rectangles and integer grids.

use crate::Position;

/// Target spacing between consecutive points of a straight line, in drawing units.
pub const FINENESS: f64 = 1.0 / 5.0;

/// Angular step between consecutive arc samples, in degrees.
pub const ARC_STEP_DEG: f64 = 1.0 / FINENESS;

/// Slack allowed when deciding whether the last regular step already lands on `s = 1`.
const ENDPOINT_EPSILON: f64 = 1e-9;

/// Sample the segment from `(x0, y0)` to `(x1, y1)` at roughly [`FINENESS`] spacing.
///
/// Both endpoints are always emitted. A segment shorter than one spacing unit
/// (zero-length and non-finite segments included) yields just its two endpoints.
pub fn line(x0: f64, y0: f64, x1: f64, y1: f64) -> impl Iterator<Item = Position> + Clone {
    let p0 = Position::new(x0, y0);
    let p1 = Position::new(x1, y1);
    let length = p0.distance(p1);

    let (step, count) = if length < FINENESS || !length.is_finite() {
        (1.0, 2)
    } else {
        let step = FINENESS / length;
        let whole_steps = (length / FINENESS).floor() as usize;
        let lands_on_end = 1.0 - whole_steps as f64 * step <= ENDPOINT_EPSILON;
        (step, if lands_on_end { whole_steps + 1 } else { whole_steps + 2 })
    };

    (0..count).map(move |i| {
        let s = if i + 1 == count { 1.0 } else { i as f64 * step };
        p0 * (1.0 - s) + p1 * s
    })
}

/// Sample an arc of radius `r` around `(x, y)` from `start_deg` towards `finish_deg`.
///
/// Samples are [`ARC_STEP_DEG`] apart in the direction of `finish_deg - start_deg`.
/// The finishing angle itself is never emitted: sampling stops once the
/// remaining sweep is at most one step, leaving the endpoint to whatever
/// primitive follows. Equal angles produce an empty arc.
pub fn arc(
    x: f64,
    y: f64,
    r: f64,
    start_deg: f64,
    finish_deg: f64,
) -> impl Iterator<Item = Position> + Clone {
    let step = if finish_deg > start_deg {
        ARC_STEP_DEG
    } else if finish_deg < start_deg {
        -ARC_STEP_DEG
    } else {
        0.0
    };

    (0_u32..)
        .map(move |i| start_deg + f64::from(i) * step)
        .take_while(move |theta| (finish_deg - theta).abs() > step.abs())
        .map(move |theta| {
            let (sin, cos) = theta.to_radians().sin_cos();
            Position::new(x + cos * r, y + sin * r)
        })
}

/// Outline of a `width` x `height` rectangle at `(x, y)` with corners rounded by `r`.
///
/// The path starts in the corner at `(x, y)` and runs through the four corner
/// arcs and four edges in turn, as one open path: the last point is not joined
/// back to the first.
pub fn rounded_rect(
    x: f64,
    y: f64,
    width: f64,
    height: f64,
    r: f64,
) -> impl Iterator<Item = Position> + Clone {
    let (right, top) = (x + width, y + height);

    arc(x + r, y + r, r, 270.0, 180.0)
        .chain(line(x, y + r, x, top - r))
        .chain(arc(x + r, top - r, r, 180.0, 90.0))
        .chain(line(x + r, top, right - r, top))
        .chain(arc(right - r, top - r, r, 90.0, 0.0))
        .chain(line(right, top - r, right, y + r))
        .chain(arc(right - r, y + r, r, 0.0, -90.0))
        .chain(line(right - r, y, x + r, y))
}

/// Every `(x, y)` with `0 <= x < nx` and `0 <= y < ny`, `x` in the outer loop.
pub fn grid(nx: u32, ny: u32) -> impl Iterator<Item = (u32, u32)> + Clone {
    (0..nx).flat_map(move |x| (0..ny).map(move |y| (x, y)))
}
