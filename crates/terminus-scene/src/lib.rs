//! Scene model for the Terminus planet animation.
//!
//! A [`Scene`] is an ordered list of [`DynGeometry`] entries, each a shape (or
//! a function of normalized time producing one) paired with a [`Style`].
//! Scene construction runs once and is the only place randomness is used;
//! afterwards the scene is read-only and every frame is a pure function of
//! `t` in `[0, 1)`, so frames can be evaluated on any number of threads.

mod geometry;
mod night;
mod rotation;
mod scene;
mod shape;
mod style;
mod surface;

pub use geometry::{DynGeometry, Geometry, TimeFn};
pub use night::{
    NIGHT_LINE_CUTOFF_DEG, NIGHT_SHADOW_RADIUS_DEG, NightSegments, Segment, night_center,
    night_lines, night_shadow, visible_segments,
};
pub use rotation::RotationModel;
pub use scene::{FrameItem, Scene, frame_times};
pub use shape::Shape;
pub use style::{Style, palette, with_alpha};
pub use surface::SceneBuilder;
pub use terminus_geom::Position;
