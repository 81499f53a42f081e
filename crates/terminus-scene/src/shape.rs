//! Shapes handed to the renderer.

use serde::{Deserialize, Serialize};
use terminus_geom::Position;

/// A drawable shape in `(longitude, latitude)` degrees.
///
/// Rings are not closed automatically; use [`Shape::closed`] when the consumer
/// requires `first == last`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Shape {
    /// Filled area: the union of its rings.
    Polygon { rings: Vec<Vec<Position>> },
    /// Independent open paths.
    MultiLineString { paths: Vec<Vec<Position>> },
    /// Small circle on the sphere, realized as a closed ring.
    Circle {
        center: Position,
        radius: f64,
        ring: Vec<Position>,
    },
}

impl Shape {
    /// Single-ring polygon.
    pub fn polygon(ring: impl IntoIterator<Item = Position>) -> Self {
        Shape::Polygon {
            rings: vec![ring.into_iter().collect()],
        }
    }

    pub fn multi_line_string(paths: Vec<Vec<Position>>) -> Self {
        Shape::MultiLineString { paths }
    }

    /// Circle of angular radius `radius` degrees around `center`.
    pub fn circle(center: Position, radius: f64) -> Self {
        Shape::Circle {
            center,
            radius,
            ring: terminus_sphere::circle(center, radius),
        }
    }

    /// Area boundaries: polygon rings or the circle's ring. Paths of a
    /// multi-line string are not rings, so it has none.
    pub fn rings(&self) -> &[Vec<Position>] {
        match self {
            Shape::Polygon { rings } => rings,
            Shape::Circle { ring, .. } => std::slice::from_ref(ring),
            Shape::MultiLineString { .. } => &[],
        }
    }

    /// Total number of points across all rings or paths.
    pub fn point_count(&self) -> usize {
        match self {
            Shape::Polygon { rings } => rings.iter().map(Vec::len).sum(),
            Shape::MultiLineString { paths } => paths.iter().map(Vec::len).sum(),
            Shape::Circle { ring, .. } => ring.len(),
        }
    }

    /// Copy with every ring ending on its first point.
    pub fn closed(&self) -> Shape {
        match self {
            Shape::Polygon { rings } => Shape::Polygon {
                rings: rings.iter().map(|ring| close_ring(ring)).collect(),
            },
            Shape::Circle {
                center,
                radius,
                ring,
            } => Shape::Circle {
                center: *center,
                radius: *radius,
                ring: close_ring(ring),
            },
            Shape::MultiLineString { .. } => self.clone(),
        }
    }
}

fn close_ring(ring: &[Position]) -> Vec<Position> {
    let mut closed = ring.to_vec();
    if let (Some(&first), Some(&last)) = (ring.first(), ring.last())
        && first != last
    {
        closed.push(first);
    }
    closed
}
