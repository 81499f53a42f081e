//! Small circles on the sphere.

use glam::{DVec2, DVec3};

use crate::{from_unit_vector, to_unit_vector};

/// Bearing step between consecutive circle samples, in degrees.
pub const CIRCLE_PRECISION_DEG: f64 = 6.0;

/// Closed ring of points at angular distance `radius_deg` from `center`.
///
/// Points are [`CIRCLE_PRECISION_DEG`] apart in bearing and the first point is
/// repeated at the end. Works at the poles, where "east" is undefined.
pub fn circle(center: DVec2, radius_deg: f64) -> Vec<DVec2> {
    let axis = to_unit_vector(center);
    let east = {
        let e = DVec3::Z.cross(axis);
        if e.length_squared() > 1e-24 {
            e.normalize()
        } else {
            DVec3::Y
        }
    };
    let north = axis.cross(east);
    let (sin_r, cos_r) = radius_deg.to_radians().sin_cos();

    let steps = (360.0 / CIRCLE_PRECISION_DEG).round() as u32;
    let mut ring: Vec<DVec2> = (0..steps)
        .map(|k| {
            let bearing = (f64::from(k) * CIRCLE_PRECISION_DEG).to_radians();
            let (sin_b, cos_b) = bearing.sin_cos();
            from_unit_vector(axis * cos_r + (north * cos_b + east * sin_b) * sin_r)
        })
        .collect();
    if let Some(&first) = ring.first() {
        ring.push(first);
    }
    ring
}
