//! Night-side features: the shadow and the lights that show inside it.
//!
//! Scene construction appends line segments to a [`NightSegments`] collector.
//! Once construction ends the collector is frozen and shared by the
//! [`night_lines`] geometry, which each frame keeps only the segments lying
//! wholly within [`NIGHT_LINE_CUTOFF_DEG`] of the night center.

use std::sync::Arc;

use rand::Rng;
use terminus_geom::{Position, adjacent_pairs, line};
use terminus_sphere::{Bounds, angular_distance};

use crate::style::palette;
use crate::{DynGeometry, RotationModel, Shape, Style};

/// A straight piece of a night line.
pub type Segment = (Position, Position);

/// Both endpoints of a night segment must be within this many degrees of the
/// night center for the segment to show.
pub const NIGHT_LINE_CUTOFF_DEG: f64 = 83.0;

/// Angular radius of the drawn shadow. Larger than the line cutoff so lights
/// fade out just inside the shadow's edge.
pub const NIGHT_SHADOW_RADIUS_DEG: f64 = 87.0;

/// Append-only collector of night segments, written during scene construction.
#[derive(Debug, Default)]
pub struct NightSegments {
    segments: Vec<Segment>,
}

impl NightSegments {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append every consecutive pair of `points` as a segment.
    pub fn push_path(&mut self, points: impl IntoIterator<Item = Position>) {
        self.segments.extend(adjacent_pairs(points));
    }

    /// Append a jittered grid of vertical and horizontal lines spanning the
    /// bounding box of `ring`, roughly `spacing` apart.
    ///
    /// Line positions are jittered by up to one spacing and line ends are
    /// pulled in by a random amount up to a third of the box. A line whose
    /// position falls on or outside the box, or whose ends cross after being
    /// pulled in, is dropped rather than clamped.
    pub fn push_cross_hatching<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
        spacing: f64,
        ring: &[Position],
    ) {
        if spacing <= 0.0 || !spacing.is_finite() {
            return;
        }
        let Some(bounds) = Bounds::of_ring(ring) else {
            return;
        };
        let (min, max) = (bounds.min, bounds.max);
        let size = bounds.size();
        let center = bounds.center();

        let nx = (size.x / 2.0 / spacing).floor() as i64;
        for i in -nx..=nx {
            let x = center.x + i as f64 * spacing + rng.random::<f64>() * spacing;
            if x <= min.x || x >= max.x {
                continue;
            }
            let y0 = min.y + rng.random::<f64>() * size.y / 3.0 + spacing;
            let y1 = max.y - rng.random::<f64>() * size.y / 3.0 - spacing;
            if y0 < y1 {
                self.push_path(line(x, y0, x, y1));
            }
        }

        let ny = (size.y / 2.0 / spacing).floor() as i64;
        for i in -ny..=ny {
            let y = center.y + i as f64 * spacing + rng.random::<f64>() * spacing;
            if y <= min.y || y >= max.y {
                continue;
            }
            let x0 = min.x + rng.random::<f64>() * size.x / 3.0 + spacing;
            let x1 = max.x - rng.random::<f64>() * size.x / 3.0 - spacing;
            if x0 < x1 {
                self.push_path(line(x0, y, x1, y));
            }
        }
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// End the write phase. The frozen segments are shared read-only.
    pub fn freeze(self) -> Arc<[Segment]> {
        self.segments.into()
    }
}

/// Center of the unlit hemisphere at time `t`.
///
/// Night geometry is painted together with the surface features, which get
/// the surface rotation applied later; the surface rotation is subtracted
/// here so the shadow ends up in the right place.
pub fn night_center(rotation: &RotationModel, t: f64) -> Position {
    Position::new(
        rotation.absolute_rotation(t) - rotation.surface_rotation(t),
        0.0,
    )
}

/// Segments with both endpoints within `cutoff_deg` of `center`.
///
/// Segments straddling the cutoff are dropped whole, not clipped.
pub fn visible_segments(
    segments: &[Segment],
    center: Position,
    cutoff_deg: f64,
) -> impl Iterator<Item = &Segment> {
    segments.iter().filter(move |(p0, p1)| {
        angular_distance(*p0, center) <= cutoff_deg && angular_distance(*p1, center) <= cutoff_deg
    })
}

/// Night lights: the visible part of `segments` at each frame.
pub fn night_lines(segments: Arc<[Segment]>, rotation: RotationModel) -> DynGeometry {
    DynGeometry::time_varying(
        move |t| {
            let center = night_center(&rotation, t);
            Shape::multi_line_string(
                visible_segments(&segments, center, NIGHT_LINE_CUTOFF_DEG)
                    .map(|&(p0, p1)| vec![p0, p1])
                    .collect(),
            )
        },
        Style::stroked(palette::NIGHT_LINES),
    )
}

/// The night shadow: a dark circle around the night center.
pub fn night_shadow(rotation: RotationModel) -> DynGeometry {
    DynGeometry::time_varying(
        move |t| Shape::circle(night_center(&rotation, t), NIGHT_SHADOW_RADIUS_DEG),
        Style::filled(palette::NIGHT_SHADOW),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;
    use terminus_geom::rounded_rect;

    fn segment(a: (f64, f64), b: (f64, f64)) -> Segment {
        (Position::new(a.0, a.1), Position::new(b.0, b.1))
    }

    #[test]
    fn test_push_path_stores_adjacent_pairs() {
        let mut night = NightSegments::new();
        night.push_path([Position::ZERO, Position::X, Position::ONE]);
        night.push_path([Position::NEG_ONE]);
        assert_eq!(night.len(), 2);
        let frozen = night.freeze();
        assert_eq!(frozen[0], (Position::ZERO, Position::X));
        assert_eq!(frozen[1], (Position::X, Position::ONE));
    }

    #[test]
    fn test_night_center_moves_with_orbit_minus_spin() {
        let model = RotationModel::FIVE_SIX;
        assert_eq!(night_center(&model, 0.0), Position::ZERO);
        assert!((night_center(&model, 0.5).x - -180.0).abs() < 1e-9);
        assert_eq!(night_center(&model, 0.5).y, 0.0);
        let full = night_center(&model, 1.0).x;
        assert!((full.rem_euclid(360.0)).abs() < 1e-9, "center at t=1 was {full}");
    }

    #[test]
    fn test_antipodal_segment_is_never_visible() {
        let center = Position::new(-72.0, 0.0);
        let antipodal = [segment((108.0, 0.0), (108.0, 0.0))];
        for cutoff in [0.0, 1.0, 45.0, 83.0, 87.0, 179.0, 179.9] {
            assert_eq!(visible_segments(&antipodal, center, cutoff).count(), 0);
        }
    }

    #[test]
    fn test_segment_at_center_is_always_visible() {
        let center = Position::new(-72.0, 0.0);
        let at_center = [segment((-72.0, 0.0), (-72.0, 0.0))];
        for cutoff in [0.0, 1.0, 83.0, 180.0] {
            assert_eq!(visible_segments(&at_center, center, cutoff).count(), 1);
        }
    }

    #[test]
    fn test_straddling_segment_is_dropped_whole() {
        let segments = [
            segment((10.0, 0.0), (20.0, 0.0)),
            segment((80.0, 0.0), (86.0, 0.0)),
            segment((84.0, 0.0), (90.0, 0.0)),
        ];
        let visible: Vec<_> =
            visible_segments(&segments, Position::ZERO, NIGHT_LINE_CUTOFF_DEG).collect();
        assert_eq!(visible, vec![&segments[0]]);
    }

    #[test]
    fn test_night_lines_geometry_filters_per_frame() {
        let segments: Arc<[Segment]> = vec![
            segment((0.0, 0.0), (1.0, 0.0)),
            segment((180.0, 0.0), (181.0, 0.0)),
        ]
        .into();
        let lines = night_lines(segments, RotationModel::FIVE_SIX);

        let Shape::MultiLineString { paths } = lines.shape_at(0.0).into_owned() else {
            panic!("night lines must be lines");
        };
        assert_eq!(paths, vec![vec![Position::ZERO, Position::X]]);

        // Half a loop later the night center has moved to -180.
        let Shape::MultiLineString { paths } = lines.shape_at(0.5).into_owned() else {
            panic!("night lines must be lines");
        };
        assert_eq!(paths.len(), 1);
        assert_eq!(paths[0][0], Position::new(180.0, 0.0));
    }

    #[test]
    fn test_shadow_is_circle_around_night_center() {
        let shadow = night_shadow(RotationModel::TWO_THREE);
        let Shape::Circle { center, radius, .. } = shadow.shape_at(0.25).into_owned() else {
            panic!("shadow must be a circle");
        };
        assert!((center.x - -90.0).abs() < 1e-9);
        assert_eq!(radius, NIGHT_SHADOW_RADIUS_DEG);
        assert_eq!(shadow.style().fill, "#000a");
    }

    #[test]
    fn test_cross_hatching_stays_inside_bounds() {
        let ring: Vec<_> = rounded_rect(10.0, 20.0, 30.0, 18.0, 2.0).collect();
        let bounds = Bounds::of_ring(&ring).unwrap();
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        for spacing in [1.0, 1.5, 3.0, 5.0] {
            let mut night = NightSegments::new();
            night.push_cross_hatching(&mut rng, spacing, &ring);
            assert!(!night.is_empty(), "spacing {spacing} produced nothing");
            for (p0, p1) in night.freeze().iter() {
                assert!(bounds.contains_strict(*p0), "{p0} escaped the box");
                assert!(bounds.contains_strict(*p1), "{p1} escaped the box");
            }
        }
    }

    #[test]
    fn test_cross_hatching_is_reproducible_from_seed() {
        let ring: Vec<_> = rounded_rect(0.0, 0.0, 15.0, 15.0, 0.0).collect();
        let hatch = |seed| {
            let mut night = NightSegments::new();
            night.push_cross_hatching(&mut ChaCha8Rng::seed_from_u64(seed), 5.0, &ring);
            night.freeze()
        };
        assert_eq!(hatch(3), hatch(3));
        assert_ne!(hatch(3), hatch(4));
    }

    #[test]
    fn test_cross_hatching_ignores_degenerate_input() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let mut night = NightSegments::new();
        night.push_cross_hatching(&mut rng, 2.0, &[]);
        night.push_cross_hatching(&mut rng, 0.0, &[Position::ZERO, Position::ONE]);
        night.push_cross_hatching(&mut rng, 2.0, &[Position::ONE; 4]);
        assert!(night.is_empty());
    }
}
