use serde::Serialize;
use smallvec::{SmallVec, smallvec};

/// Paint for an item or area: a flat CSS color or a linear gradient.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Fill {
    Solid(String),
    Gradient(LinearGradient),
}

impl Fill {
    #[must_use]
    pub fn solid(color: impl Into<String>) -> Self {
        Self::Solid(color.into())
    }

    /// Color of the flat fill, or of the first gradient stop.
    #[must_use]
    pub fn primary_color(&self) -> Option<&str> {
        match self {
            Self::Solid(color) => Some(color.as_str()),
            Self::Gradient(gradient) => gradient.color_stops.first().map(|stop| stop.color.as_str()),
        }
    }

    #[must_use]
    pub fn as_gradient(&self) -> Option<&LinearGradient> {
        match self {
            Self::Gradient(gradient) => Some(gradient),
            Self::Solid(_) => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColorStop {
    pub offset: f64,
    pub color: String,
}

/// Linear gradient in the renderer's object form, with coordinates relative
/// to the painted shape's bounding box.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LinearGradient {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub x: f64,
    pub y: f64,
    pub x2: f64,
    pub y2: f64,
    pub color_stops: SmallVec<[ColorStop; 2]>,
    pub global: bool,
}

impl LinearGradient {
    /// Top-to-bottom gradient.
    #[must_use]
    pub fn vertical(start: impl Into<String>, end: impl Into<String>) -> Self {
        Self::between(0.0, 0.0, 0.0, 1.0, start.into(), end.into())
    }

    /// Left-to-right gradient.
    #[must_use]
    pub fn horizontal(start: impl Into<String>, end: impl Into<String>) -> Self {
        Self::between(0.0, 0.0, 1.0, 0.0, start.into(), end.into())
    }

    fn between(x: f64, y: f64, x2: f64, y2: f64, start: String, end: String) -> Self {
        Self {
            kind: "linear",
            x,
            y,
            x2,
            y2,
            color_stops: smallvec![
                ColorStop {
                    offset: 0.0,
                    color: start,
                },
                ColorStop {
                    offset: 1.0,
                    color: end,
                },
            ],
            global: false,
        }
    }

    #[must_use]
    pub fn first_stop(&self) -> Option<&ColorStop> {
        self.color_stops.first()
    }

    #[must_use]
    pub fn last_stop(&self) -> Option<&ColorStop> {
        self.color_stops.last()
    }
}
