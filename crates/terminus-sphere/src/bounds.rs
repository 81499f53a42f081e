//! Longitude/latitude bounding boxes.

use glam::DVec2;

/// Axis-aligned box in `(longitude, latitude)` degrees.
///
/// Invariant: `min.x <= max.x` and `min.y <= max.y`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds {
    pub min: DVec2,
    pub max: DVec2,
}

impl Bounds {
    /// Smallest box holding every point of `ring`, or `None` for an empty ring.
    pub fn of_ring(ring: &[DVec2]) -> Option<Self> {
        let (first, rest) = ring.split_first()?;
        let (min, max) = rest
            .iter()
            .fold((*first, *first), |(min, max), p| (min.min(*p), max.max(*p)));
        Some(Self { min, max })
    }

    /// Extent along each axis.
    pub fn size(&self) -> DVec2 {
        self.max - self.min
    }

    pub fn center(&self) -> DVec2 {
        self.min + self.size() / 2.0
    }

    /// True if `p` lies strictly inside the box, not on its boundary.
    pub fn contains_strict(&self, p: DVec2) -> bool {
        p.x > self.min.x && p.x < self.max.x && p.y > self.min.y && p.y < self.max.y
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_ring_has_no_bounds() {
        assert_eq!(Bounds::of_ring(&[]), None);
    }

    #[test]
    fn test_single_point_is_degenerate_box() {
        let p = DVec2::new(3.0, -4.0);
        let b = Bounds::of_ring(&[p]).unwrap();
        assert_eq!(b.min, p);
        assert_eq!(b.max, p);
        assert_eq!(b.size(), DVec2::ZERO);
    }

    #[test]
    fn test_bounds_enclose_ring() {
        let ring = [
            DVec2::new(160.0, -40.0),
            DVec2::new(190.0, -40.0),
            DVec2::new(190.0, 10.0),
            DVec2::new(175.0, 12.0),
        ];
        let b = Bounds::of_ring(&ring).unwrap();
        assert_eq!(b.min, DVec2::new(160.0, -40.0));
        assert_eq!(b.max, DVec2::new(190.0, 12.0));
        assert_eq!(b.center(), DVec2::new(175.0, -14.0));
    }

    #[test]
    fn test_contains_strict_excludes_edges() {
        let b = Bounds {
            min: DVec2::ZERO,
            max: DVec2::new(10.0, 10.0),
        };
        assert!(b.contains_strict(DVec2::new(5.0, 5.0)));
        assert!(!b.contains_strict(DVec2::new(0.0, 5.0)));
        assert!(!b.contains_strict(DVec2::new(5.0, 10.0)));
        assert!(!b.contains_strict(DVec2::new(11.0, 5.0)));
    }
}
