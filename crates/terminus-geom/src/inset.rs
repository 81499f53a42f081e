//! Offset copy of an open polyline, used for seam lines just inside a border.

use crate::Position;
use crate::transform::{AdjacentPairs, adjacent_pairs};

/// Offset `points` sideways by `distance`.
///
/// Each edge `p0 -> p1` contributes its start `p0` pushed along the edge's
/// left normal scaled to `-distance`, so a negative distance offsets to the
/// left of the walking direction and a positive one to the right. The output
/// therefore lags one point behind the input: the final vertex has no edge of
/// its own. Once the input is exhausted one more point is extrapolated past
/// the last offset point, twice the last offset step, to cover that final
/// corner.
///
/// Inputs with fewer than two points produce nothing. Zero-length edges have
/// no normal and are skipped.
pub fn inset<I>(distance: f64, points: I) -> Inset<I::IntoIter>
where
    I: IntoIterator<Item = Position>,
{
    Inset {
        edges: adjacent_pairs(points),
        distance,
        second_last: None,
        last: None,
        finished: false,
    }
}

/// Iterator returned by [`inset`].
#[derive(Clone, Debug)]
pub struct Inset<I: Iterator<Item = Position>> {
    edges: AdjacentPairs<I>,
    distance: f64,
    second_last: Option<Position>,
    last: Option<Position>,
    finished: bool,
}

impl<I> Iterator for Inset<I>
where
    I: Iterator<Item = Position>,
{
    type Item = Position;

    fn next(&mut self) -> Option<Position> {
        if self.finished {
            return None;
        }

        for (p0, p1) in self.edges.by_ref() {
            let edge = p1 - p0;
            let length = edge.length();
            if length <= 0.0 || !length.is_finite() {
                continue;
            }
            let offset = p0 + edge.perp() * (-self.distance / length);
            self.second_last = self.last.replace(offset);
            return Some(offset);
        }

        self.finished = true;
        let (second_last, last) = (self.second_last?, self.last?);
        Some(last + 2.0 * (last - second_last))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rounded_rect;

    const EPS: f64 = 1e-9;

    #[test]
    fn test_straight_polyline_gets_two_offsets_and_one_extrapolation() {
        let points = [
            Position::new(0.0, 0.0),
            Position::new(1.0, 0.0),
            Position::new(2.0, 0.0),
        ];
        let out: Vec<_> = inset(-0.5, points).collect();
        assert_eq!(out.len(), 3);
        assert!((out[0] - Position::new(0.0, 0.5)).length() < EPS);
        assert!((out[1] - Position::new(1.0, 0.5)).length() < EPS);

        // The extrapolated point continues the segment out[0] -> out[1].
        let along = out[1] - out[0];
        let beyond = out[2] - out[1];
        assert!(along.perp_dot(beyond).abs() < EPS, "not collinear");
        assert!(along.dot(beyond) > 0.0, "extrapolation went backwards");
        assert!((out[2] - Position::new(3.0, 0.5)).length() < EPS);
    }

    #[test]
    fn test_sign_of_distance_picks_the_side() {
        let points = [Position::new(0.0, 0.0), Position::new(0.0, 3.0)];
        let left: Vec<_> = inset(-1.0, points).collect();
        let right: Vec<_> = inset(1.0, points).collect();
        assert_eq!(left.len(), 1);
        assert!((left[0] - Position::new(-1.0, 0.0)).length() < EPS);
        assert!((right[0] - Position::new(1.0, 0.0)).length() < EPS);
    }

    #[test]
    fn test_fewer_than_two_points_is_empty() {
        assert_eq!(inset(-0.5, Vec::<Position>::new()).count(), 0);
        assert_eq!(inset(-0.5, [Position::new(3.0, 4.0)]).count(), 0);
    }

    #[test]
    fn test_single_edge_has_no_extrapolation() {
        let out: Vec<_> = inset(-0.5, [Position::ZERO, Position::X]).collect();
        assert_eq!(out.len(), 1);
    }

    #[test]
    fn test_zero_length_edges_are_skipped() {
        let points = [
            Position::new(0.0, 0.0),
            Position::new(0.0, 0.0),
            Position::new(1.0, 0.0),
        ];
        let out: Vec<_> = inset(-0.5, points).collect();
        assert_eq!(out.len(), 1);
        assert!(out.iter().all(|p| p.is_finite()));
    }

    #[test]
    fn test_offset_keeps_requested_distance_from_the_outline() {
        let outline: Vec<_> = rounded_rect(0.0, 0.0, 10.0, 15.0, 2.0).collect();
        let seam: Vec<_> = inset(-0.5, outline.iter().copied()).collect();
        assert!(seam.len() > 2);
        for q in &seam[..seam.len() - 1] {
            assert!(q.is_finite());
            assert!(
                outline
                    .iter()
                    .any(|p| ((*q - *p).length() - 0.5).abs() < EPS),
                "{q} is not half a unit from any outline point"
            );
        }
    }

    #[test]
    fn test_offset_lags_one_vertex_behind() {
        let outline: Vec<_> = rounded_rect(0.0, 0.0, 10.0, 15.0, 2.0).collect();
        let seam: Vec<_> = inset(-0.5, outline.iter().copied()).collect();
        let n = outline.len();

        // The first seam point sits off the outline's first vertex and the
        // last regular one off the start of the final edge.
        assert!(((seam[0] - outline[0]).length() - 0.5).abs() < EPS);
        let last_regular = seam[seam.len() - 2];
        assert!(((last_regular - outline[n - 2]).length() - 0.5).abs() < EPS);

        // The extrapolated point carries on along the final edge far enough
        // to bridge the gap back to where the seam started.
        let extrapolated = seam[seam.len() - 1];
        let direction = (outline[n - 1] - outline[n - 2]).normalize();
        let reach = (extrapolated - last_regular).dot(direction);
        let gap = (seam[0] - last_regular).dot(direction);
        assert!(gap > 0.0, "seam start is not ahead of the last offset point");
        assert!(reach >= gap, "reach {reach} does not cover gap {gap}");
    }
}
