//! The finished, read-only scene and per-frame evaluation.

use std::borrow::Cow;
use std::sync::Arc;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::Serialize;

use crate::{DynGeometry, RotationModel, SceneBuilder, Segment, Shape, Style};

/// Ordered scene geometry. Later entries paint over earlier ones.
#[derive(Clone, Debug)]
pub struct Scene {
    geometries: Vec<DynGeometry>,
    night_segments: Arc<[Segment]>,
    rotation: RotationModel,
}

/// One evaluated entry of a frame.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct FrameItem<'a> {
    pub shape: Cow<'a, Shape>,
    pub style: &'a Style,
}

impl Scene {
    pub(crate) fn new(
        geometries: Vec<DynGeometry>,
        night_segments: Arc<[Segment]>,
        rotation: RotationModel,
    ) -> Self {
        Self {
            geometries,
            night_segments,
            rotation,
        }
    }

    /// Build the scene, drawing hatching jitter from `rng`.
    pub fn build<R: Rng + ?Sized>(rng: &mut R, rotation: RotationModel) -> Self {
        SceneBuilder::new(rng, rotation).build()
    }

    /// Build the scene with a ChaCha8 RNG seeded from `seed`.
    pub fn build_seeded(seed: u64, rotation: RotationModel) -> Self {
        Self::build(&mut ChaCha8Rng::seed_from_u64(seed), rotation)
    }

    pub fn geometries(&self) -> &[DynGeometry] {
        &self.geometries
    }

    /// Every night segment collected during construction, in insertion order.
    pub fn night_segments(&self) -> &[Segment] {
        &self.night_segments
    }

    /// Rotation the renderer applies: surface rotation to the surface
    /// features, absolute rotation to the whole scene.
    pub fn rotation(&self) -> RotationModel {
        self.rotation
    }

    /// Evaluate every entry at normalized time `t`, in paint order.
    pub fn frame(&self, t: f64) -> Vec<FrameItem<'_>> {
        self.geometries
            .iter()
            .map(|entry| FrameItem {
                shape: entry.shape_at(t),
                style: entry.style(),
            })
            .collect()
    }
}

/// Normalized frame times `i / count` for `i` in `0..count`. The loop's end,
/// `t = 1`, is the next loop's first frame and is not included.
pub fn frame_times(count: u32) -> impl Iterator<Item = f64> {
    (0..count).map(move |i| f64::from(i) / f64::from(count))
}
