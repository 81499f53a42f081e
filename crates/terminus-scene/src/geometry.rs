//! Scene entries whose shape is either fixed or a function of time.

use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

use crate::{Shape, Style};

/// Shape generator evaluated once per frame with normalized time `t`.
pub type TimeFn = Arc<dyn Fn(f64) -> Shape + Send + Sync>;

/// The shape half of a [`DynGeometry`].
#[derive(Clone)]
pub enum Geometry {
    Static(Shape),
    TimeVarying(TimeFn),
}

impl Geometry {
    /// Shape at normalized time `t`. Static shapes are borrowed, time-varying
    /// ones are computed fresh.
    pub fn at(&self, t: f64) -> Cow<'_, Shape> {
        match self {
            Geometry::Static(shape) => Cow::Borrowed(shape),
            Geometry::TimeVarying(f) => Cow::Owned(f(t)),
        }
    }

    pub fn is_static(&self) -> bool {
        matches!(self, Geometry::Static(_))
    }
}

impl fmt::Debug for Geometry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Geometry::Static(shape) => f.debug_tuple("Static").field(shape).finish(),
            Geometry::TimeVarying(_) => f.write_str("TimeVarying(..)"),
        }
    }
}

/// A geometry paired with the style it is painted with. Immutable once built.
#[derive(Clone, Debug)]
pub struct DynGeometry {
    geometry: Geometry,
    style: Style,
}

impl DynGeometry {
    pub fn fixed(shape: Shape, style: Style) -> Self {
        Self {
            geometry: Geometry::Static(shape),
            style,
        }
    }

    pub fn time_varying<F>(f: F, style: Style) -> Self
    where
        F: Fn(f64) -> Shape + Send + Sync + 'static,
    {
        Self {
            geometry: Geometry::TimeVarying(Arc::new(f)),
            style,
        }
    }

    pub fn geometry(&self) -> &Geometry {
        &self.geometry
    }

    pub fn style(&self) -> &Style {
        &self.style
    }

    /// Shape at normalized time `t`.
    pub fn shape_at(&self, t: f64) -> Cow<'_, Shape> {
        self.geometry.at(t)
    }
}
