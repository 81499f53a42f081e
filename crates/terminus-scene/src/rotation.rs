//! Global and surface rotation as functions of normalized time.
//!
//! The viewpoint orbits the planet while the planet spins underneath it. Over
//! one animation loop (`t` from 0 to 1) the view completes
//! `absolute_frequency` orbits and the surface completes `surface_frequency`
//! turns. Both counts are integers, so every surface feature and the night
//! shadow return to their starting angle at `t = 1` and the loop is seamless.

/// Rotation frequencies of one animation loop.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct RotationModel {
    /// Full surface turns per loop.
    pub surface_frequency: u32,
    /// Full orbits of the viewpoint per loop.
    pub absolute_frequency: u32,
}

impl RotationModel {
    /// Six orbits against five surface turns per loop. The default.
    pub const FIVE_SIX: Self = Self::new(5, 6);

    /// Three orbits against two surface turns per loop.
    pub const TWO_THREE: Self = Self::new(2, 3);

    pub const fn new(surface_frequency: u32, absolute_frequency: u32) -> Self {
        Self {
            surface_frequency,
            absolute_frequency,
        }
    }

    /// Surface rotation in degrees at time `t`.
    pub fn surface_rotation(&self, t: f64) -> f64 {
        -t * f64::from(self.surface_frequency) * 360.0
    }

    /// Whole-scene rotation in degrees at time `t`.
    pub fn absolute_rotation(&self, t: f64) -> f64 {
        -t * f64::from(self.absolute_frequency) * 360.0
    }
}

impl Default for RotationModel {
    fn default() -> Self {
        Self::FIVE_SIX
    }
}
