//! Area centroid of spherical polygons.

use glam::{DVec2, DVec3};

use crate::{from_unit_vector, to_unit_vector};

/// Below this the boundary moment is treated as vanished.
const MOMENT_EPSILON: f64 = 1e-12;

/// Centroid of the area enclosed by `rings`, as `(longitude, latitude)`.
///
/// Each ring is treated as closed (its last point joins its first). The
/// centroid direction is the sum over edges of the edge's great-circle normal
/// weighted by the edge's angle, which is proportional to the first moment of
/// the enclosed area. The result is oriented towards the vertices, so either
/// winding gives the same answer for polygons smaller than a hemisphere.
///
/// Falls back to the mean vertex direction when the area moment vanishes
/// (a degenerate ring), and returns `None` when there are no points at all.
pub fn centroid<R: AsRef<[DVec2]>>(rings: &[R]) -> Option<DVec2> {
    let mut moment = DVec3::ZERO;
    let mut mean = DVec3::ZERO;
    let mut count = 0_usize;

    for ring in rings {
        let ring = ring.as_ref();
        let vectors: Vec<DVec3> = ring.iter().map(|p| to_unit_vector(*p)).collect();
        for (i, a) in vectors.iter().enumerate() {
            let b = vectors[(i + 1) % vectors.len()];
            mean += *a;
            count += 1;

            let normal = a.cross(b);
            let sin = normal.length();
            if sin > 0.0 {
                let angle = sin.atan2(a.dot(b));
                moment += normal * (angle / sin);
            }
        }
    }

    if count == 0 {
        return None;
    }

    let direction = if moment.length() > MOMENT_EPSILON {
        if moment.dot(mean) < 0.0 { -moment } else { moment }
    } else {
        mean
    };

    if direction.length_squared() == 0.0 {
        return rings
            .iter()
            .find_map(|ring| ring.as_ref().first().copied());
    }
    Some(from_unit_vector(direction))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::circle;

    fn square(lon: f64, lat: f64, half: f64) -> Vec<DVec2> {
        vec![
            DVec2::new(lon - half, lat - half),
            DVec2::new(lon - half, lat + half),
            DVec2::new(lon + half, lat + half),
            DVec2::new(lon + half, lat - half),
        ]
    }

    #[test]
    fn test_no_points_has_no_centroid() {
        let rings: [Vec<DVec2>; 0] = [];
        assert_eq!(centroid(&rings), None);
        assert_eq!(centroid(&[Vec::<DVec2>::new()]), None);
    }

    #[test]
    fn test_small_square_centroid_is_near_its_middle() {
        let c = centroid(&[square(10.0, 20.0, 1.0)]).unwrap();
        assert!((c.x - 10.0).abs() < 1e-9, "longitude {}", c.x);
        assert!((c.y - 20.0).abs() < 0.05, "latitude {}", c.y);
    }

    #[test]
    fn test_winding_does_not_matter() {
        let ring = square(-40.0, 5.0, 3.0);
        let mut reversed = ring.clone();
        reversed.reverse();
        let a = centroid(&[ring]).unwrap();
        let b = centroid(&[reversed]).unwrap();
        assert!((a - b).length() < 1e-9);
    }

    #[test]
    fn test_circle_centroid_is_its_center() {
        let center = DVec2::new(67.0, 19.0);
        let c = centroid(&[circle(center, 3.0)]).unwrap();
        assert!((c - center).length() < 1e-6, "got {c}");
    }

    #[test]
    fn test_degenerate_ring_falls_back_to_mean() {
        let c = centroid(&[vec![DVec2::new(5.0, 5.0), DVec2::new(5.0, 5.0)]]).unwrap();
        assert!((c - DVec2::new(5.0, 5.0)).length() < 1e-9);
    }
}
