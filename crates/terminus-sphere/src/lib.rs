//! Spherical geometry on `(longitude, latitude)` pairs in degrees.
//!
//! Points are plain [`glam::DVec2`] values with `x` = longitude and
//! `y` = latitude, the same pairs the planar generators produce. Distances and
//! radii are angles in degrees on the unit sphere. Antimeridian wraparound is
//! not handled: longitudes are compared as plain numbers.

mod bounds;
mod centroid;
mod circle;
mod lonlat;

pub use bounds::Bounds;
pub use centroid::centroid;
pub use circle::{CIRCLE_PRECISION_DEG, circle};
pub use lonlat::{angular_distance, from_unit_vector, to_unit_vector};
