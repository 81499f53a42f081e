//! Lazy 2D point-sequence generation for the Terminus scene.
//!
//! Everything here works on iterators of [`Position`]: primitive generators
//! produce them, transforms map them one-to-one, and [`inset`] derives an
//! offset polyline from them. Nothing is materialized unless the caller
//! collects.

mod inset;
mod primitives;
mod transform;

pub use inset::{Inset, inset};
pub use primitives::{ARC_STEP_DEG, FINENESS, arc, grid, line, rounded_rect};
pub use transform::{AdjacentPairs, adjacent_pairs, rotate, scale, translate};

/// A pair of reals. Planar `(x, y)` for generators and transforms,
/// `(longitude, latitude)` degrees when handed to spherical queries.
pub type Position = glam::DVec2;
