//! One-to-one point-sequence operators.
//!
//! Each operator consumes anything iterable over [`Position`] and lazily
//! yields the same number of points in the same order, so they chain freely:
//!
//! ```
//! use terminus_geom::{rounded_rect, scale, translate};
//!
//! let outline = rounded_rect(0.0, 0.0, 95.0, 50.0, 5.0);
//! let keyboard: Vec<_> = translate(0.0, -45.0, scale(0.0, 0.0, 1.5, outline)).collect();
//! assert!(!keyboard.is_empty());
//! ```

use glam::{DMat2, DVec2};

use crate::Position;

/// Shift every point by `(dx, dy)`.
pub fn translate<I>(dx: f64, dy: f64, points: I) -> impl Iterator<Item = Position>
where
    I: IntoIterator<Item = Position>,
{
    let offset = DVec2::new(dx, dy);
    points.into_iter().map(move |p| p + offset)
}

/// Rotate every point counter-clockwise by `angle_deg` degrees around `(cx, cy)`.
pub fn rotate<I>(
    cx: f64,
    cy: f64,
    angle_deg: f64,
    points: I,
) -> impl Iterator<Item = Position>
where
    I: IntoIterator<Item = Position>,
{
    let pivot = DVec2::new(cx, cy);
    let rotation = DMat2::from_angle(angle_deg.to_radians());
    points
        .into_iter()
        .map(move |p| pivot + rotation * (p - pivot))
}

/// Scale every point's offset from `(cx, cy)` by `factor`.
pub fn scale<I>(cx: f64, cy: f64, factor: f64, points: I) -> impl Iterator<Item = Position>
where
    I: IntoIterator<Item = Position>,
{
    let pivot = DVec2::new(cx, cy);
    points.into_iter().map(move |p| pivot + (p - pivot) * factor)
}

/// Overlapping consecutive pairs: `(p[0], p[1]), (p[1], p[2]), ...`.
///
/// Fewer than two items yield nothing.
pub fn adjacent_pairs<I>(items: I) -> AdjacentPairs<I::IntoIter>
where
    I: IntoIterator,
    I::Item: Clone,
{
    AdjacentPairs {
        inner: items.into_iter(),
        previous: None,
    }
}

/// Iterator returned by [`adjacent_pairs`].
#[derive(Clone, Debug)]
pub struct AdjacentPairs<I: Iterator> {
    inner: I,
    previous: Option<I::Item>,
}

impl<I> Iterator for AdjacentPairs<I>
where
    I: Iterator,
    I::Item: Clone,
{
    type Item = (I::Item, I::Item);

    fn next(&mut self) -> Option<Self::Item> {
        if self.previous.is_none() {
            self.previous = Some(self.inner.next()?);
        }
        let current = self.inner.next()?;
        let previous = self.previous.replace(current.clone())?;
        Some((previous, current))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (lo, hi) = self.inner.size_hint();
        let pending = usize::from(self.previous.is_none());
        (
            lo.saturating_sub(pending),
            hi.map(|hi| hi.saturating_sub(pending)),
        )
    }
}
