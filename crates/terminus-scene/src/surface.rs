//! Scene construction: background, the three devices drawn on the planet,
//! and the night-only seams, hatching and circuitry.

use rand::Rng;
use terminus_geom::{Position, arc, grid, inset, line, rotate, rounded_rect, scale, translate};
use terminus_sphere::{centroid, circle};
use tracing::{debug, info};

use crate::night::{NightSegments, night_lines, night_shadow};
use crate::style::palette;
use crate::{DynGeometry, RotationModel, Scene, Shape, Style, with_alpha};

/// Distance of the seam drawn just off each key, button and stick outline.
const SEAM_OFFSET: f64 = -0.5;

fn mouse(points: impl IntoIterator<Item = Position>) -> impl Iterator<Item = Position> {
    translate(160.0, -40.0, points)
}

fn keyboard(points: impl IntoIterator<Item = Position>) -> impl Iterator<Item = Position> {
    translate(0.0, -45.0, scale(0.0, 0.0, 1.5, points))
}

fn gamepad(points: impl IntoIterator<Item = Position>) -> impl Iterator<Item = Position> {
    translate(235.0, 30.0, scale(0.0, 90.0, 1.3, points))
}

/// Centroid of a single non-empty ring.
fn ring_centroid(ring: &[Position]) -> Position {
    centroid(&[ring]).unwrap_or(Position::ZERO)
}

/// Builds a [`Scene`] in paint order, drawing hatching jitter from `rng`.
///
/// Construction is the only step that consumes randomness: the same RNG state
/// always yields the same scene.
pub struct SceneBuilder<'a, R: ?Sized> {
    rng: &'a mut R,
    rotation: RotationModel,
    geometries: Vec<DynGeometry>,
    night: NightSegments,
}

impl<'a, R: Rng + ?Sized> SceneBuilder<'a, R> {
    pub fn new(rng: &'a mut R, rotation: RotationModel) -> Self {
        Self {
            rng,
            rotation,
            geometries: Vec::new(),
            night: NightSegments::new(),
        }
    }

    /// Lay out every shape and append the two night geometries last.
    pub fn build(mut self) -> Scene {
        self.background();
        self.mouse();
        self.keyboard();
        self.gamepad();
        self.finish()
    }

    fn push(&mut self, shape: Shape, style: Style) {
        self.geometries.push(DynGeometry::fixed(shape, style));
    }

    fn push_seam(&mut self, ring: &[Position]) {
        self.night.push_path(inset(SEAM_OFFSET, ring.iter().copied()));
    }

    fn push_hatching(&mut self, spacing: f64, ring: &[Position]) {
        self.night.push_cross_hatching(&mut *self.rng, spacing, ring);
    }

    fn background(&mut self) {
        // A ring along the 89th parallel: everything but a sliver at the pole.
        self.push(
            Shape::polygon(line(0.0, 89.0, 360.0, 89.0)),
            Style::filled(palette::OCEAN),
        );
        self.push(
            Shape::circle(Position::new(0.0, 90.0), 20.0),
            Style::filled(palette::ICE),
        );
        self.push(
            Shape::circle(Position::new(0.0, -90.0), 30.0),
            Style::filled(palette::ICE),
        );
    }

    fn mouse(&mut self) {
        self.push(
            Shape::polygon(mouse(rounded_rect(0.0, 0.0, 30.0, 50.0, 10.0))),
            Style::filled(palette::LAND_DARK),
        );
        for (x, y) in grid(2, 2) {
            let quadrant: Vec<_> = mouse(rounded_rect(
                f64::from(x) * 15.0,
                f64::from(y) * 15.0,
                15.0,
                15.0,
                0.0,
            ))
            .collect();
            self.push_hatching(5.0, &quadrant);
        }

        for (x, alpha) in [(4.0, 0xff), (16.0, 0x99)] {
            let button: Vec<_> = mouse(rounded_rect(x, 30.0, 10.0, 15.0, 2.0)).collect();
            self.push(
                Shape::polygon(button.iter().copied()),
                Style::filled(with_alpha(palette::LAND_LIGHT, alpha)),
            );
            self.push_seam(&button);
            self.push_hatching(3.0, &button);
        }

        // The cord only shows at night.
        let cord = arc(0.0, 40.0, 10.0, 185.0, 0.0)
            .chain(arc(20.0, 40.0, 10.0, 180.0, 270.0))
            .chain(arc(20.0, 20.0, 10.0, 90.0, -20.0));
        self.night.push_path(translate(-15.0, 30.0, mouse(cord)));

        debug!(night_segments = self.night.len(), "mouse laid out");
    }

    fn keyboard(&mut self) {
        const SPACING: f64 = 11.0;
        const SIZE: f64 = 8.0;
        const ROUNDING: f64 = 2.0;

        self.push(
            Shape::polygon(keyboard(rounded_rect(0.0, 0.0, 95.0, 50.0, 5.0))),
            Style::filled(palette::LAND_DARK),
        );

        for (x, y) in grid(8, 4) {
            // The spacebar covers the three keys to its right.
            if y == 0 && (4..=6).contains(&x) {
                continue;
            }
            let is_spacebar = y == 0 && x == 3;
            let is_wasd = (y == 1 && x <= 2) || (y == 2 && x == 1);
            let highlighted = is_spacebar || is_wasd;

            let alpha = if highlighted {
                0xff
            } else {
                (255.0 * f64::from(x + y) / 14.0).floor() as u8
            };
            let width = SIZE + if is_spacebar { SPACING * 3.0 } else { 0.0 };

            let key: Vec<_> = keyboard(rounded_rect(
                SIZE / 2.0 + SPACING * f64::from(x),
                SIZE / 2.0 + SPACING * f64::from(y),
                width,
                SIZE,
                ROUNDING,
            ))
            .collect();

            self.push(
                Shape::polygon(key.iter().copied()),
                Style::filled(with_alpha(palette::LAND_LIGHT, alpha)),
            );
            self.push_seam(&key);
            self.push_hatching(if highlighted { 1.0 } else { 4.0 }, &key);
        }

        debug!(night_segments = self.night.len(), "keyboard laid out");
    }

    fn gamepad(&mut self) {
        const BUTTON_SPACING: f64 = 6.0;

        self.push(
            Shape::polygon(gamepad(rounded_rect(0.0, 0.0, 80.0, 40.0, 5.0))),
            Style::filled(palette::LAND_DARK),
        );

        let mut handles = [Position::ZERO; 2];
        for (slot, (x, y, angle)) in handles
            .iter_mut()
            .zip([(-10.0, -10.0, -20.0), (70.0, -17.0, 20.0)])
        {
            let handle: Vec<_> = gamepad(translate(
                x,
                y,
                rotate(0.0, 0.0, angle, rounded_rect(0.0, 0.0, 20.0, 35.0, 10.0)),
            ))
            .collect();
            *slot = ring_centroid(&handle);
            self.push(Shape::polygon(handle), Style::filled(palette::LAND_DARK));
        }

        // Both bars of the cross share a center.
        let mut dpad = Position::ZERO;
        for (width, length) in [(5.0, 15.0), (15.0, 5.0)] {
            let bar: Vec<_> = gamepad(rounded_rect(
                17.0 - length / 2.0,
                25.0 - width / 2.0,
                length,
                width,
                1.0,
            ))
            .collect();
            dpad = ring_centroid(&bar);
            self.push(
                Shape::polygon(bar.iter().copied()),
                Style::filled(palette::LAND_LIGHT),
            );
            self.push_hatching(1.0, &bar);
        }

        let mut buttons = Vec::with_capacity(4);
        for (x, y) in grid(2, 2) {
            let (alpha, spacing) = if x == 0 { (0xff, 1.0) } else { (0x88, 1.5) };
            let (x, y) = (f64::from(x), f64::from(y));
            let center = Position::new(
                55.0 + BUTTON_SPACING * (x + y),
                25.0 + BUTTON_SPACING * (x - y),
            );
            let button: Vec<_> = gamepad(circle(center, 3.0)).collect();
            buttons.push(ring_centroid(&button));

            self.push(
                Shape::polygon(button.iter().copied()),
                Style::filled(with_alpha(palette::LAND_LIGHT, alpha)),
            );
            self.push_seam(&button);
            self.push_hatching(spacing, &button);
        }

        let mut sticks = [Position::ZERO; 2];
        for (slot, x) in sticks.iter_mut().zip([28.0, 47.0]) {
            let stick: Vec<_> = gamepad(circle(Position::new(x, 11.0), 4.5)).collect();
            *slot = ring_centroid(&stick);
            self.push(
                Shape::polygon(stick.iter().copied()),
                Style::filled(palette::LAND_LIGHT),
            );
            self.push_seam(&stick);
            self.push_hatching(1.0, &stick);
        }

        // Circuitry joining the controls, visible only at night.
        let hub = dpad + Position::new(20.0, 0.0);
        self.night.push_path([
            handles[0], dpad, hub, sticks[0], sticks[1], buttons[0], buttons[3], handles[1],
        ]);

        debug!(night_segments = self.night.len(), "gamepad laid out");
    }

    fn finish(self) -> Scene {
        let Self {
            rotation,
            mut geometries,
            night,
            ..
        } = self;

        let segments = night.freeze();
        geometries.push(night_lines(segments.clone(), rotation));
        geometries.push(night_shadow(rotation));

        info!(
            geometries = geometries.len(),
            night_segments = segments.len(),
            surface_frequency = rotation.surface_frequency,
            absolute_frequency = rotation.absolute_frequency,
            "scene built"
        );
        Scene::new(geometries, segments, rotation)
    }
}
