use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{ChartError, ChartResult};

pub const DEFAULT_WEB_WIDTH: Dimension = Dimension::Percent(100.0);
pub const DEFAULT_WEB_HEIGHT: Dimension = Dimension::Px(400.0);
pub const DEFAULT_MOBILE_HEIGHT: f64 = 300.0;
pub const DEFAULT_MOBILE_PADDING: f64 = 16.0;

/// Declared chart size: absolute pixels or a percentage of the container.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Dimension {
    Px(f64),
    Percent(f64),
}

impl Dimension {
    /// CSS length string (`"320px"`, `"100%"`).
    #[must_use]
    pub fn to_css(self) -> String {
        self.to_string()
    }

    /// Resolves against a container length in pixels.
    #[must_use]
    pub fn resolve_px(self, container_px: f64) -> f64 {
        let px = match self {
            Self::Px(px) => px,
            Self::Percent(percent) => container_px * percent / 100.0,
        };
        px.max(0.0)
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Px(px) => write!(f, "{px}px"),
            Self::Percent(percent) => write!(f, "{percent}%"),
        }
    }
}

impl FromStr for Dimension {
    type Err = ChartError;

    fn from_str(input: &str) -> ChartResult<Self> {
        let trimmed = input.trim();
        let (number, percent) = if let Some(raw) = trimmed.strip_suffix('%') {
            (raw, true)
        } else if let Some(raw) = trimmed.strip_suffix("px") {
            (raw, false)
        } else {
            (trimmed, false)
        };

        let value: f64 = number.trim().parse().map_err(|_| {
            ChartError::InvalidData(format!("invalid dimension literal: `{input}`"))
        })?;
        if !value.is_finite() || value < 0.0 {
            return Err(ChartError::InvalidData(format!(
                "dimension must be finite and >= 0: `{input}`"
            )));
        }
        Ok(if percent {
            Self::Percent(value)
        } else {
            Self::Px(value)
        })
    }
}

impl Serialize for Dimension {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Px(px) => serializer.serialize_f64(*px),
            Self::Percent(_) => serializer.serialize_str(&self.to_css()),
        }
    }
}

impl<'de> Deserialize<'de> for Dimension {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Number(f64),
            Text(String),
        }

        match Raw::deserialize(deserializer)? {
            Raw::Number(px) => Ok(Self::Px(px)),
            Raw::Text(text) => text.parse().map_err(serde::de::Error::custom),
        }
    }
}

/// Dimensions handed to a web renderer as CSS lengths.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WebDimensions {
    pub width: String,
    pub height: String,
}

/// Dimensions handed to a native renderer in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MobileDimensions {
    pub width: f64,
    pub height: f64,
}

#[must_use]
pub fn resolve_web(width: Option<Dimension>, height: Option<Dimension>) -> WebDimensions {
    WebDimensions {
        width: width.unwrap_or(DEFAULT_WEB_WIDTH).to_css(),
        height: height.unwrap_or(DEFAULT_WEB_HEIGHT).to_css(),
    }
}

/// Resolves pixel dimensions on a device.
///
/// The available width is `device_width - 2 * padding`; an absent width fills
/// it and percentage widths are taken of it. Percentage heights resolve
/// against the resolved width.
pub fn resolve_mobile(
    width: Option<Dimension>,
    height: Option<Dimension>,
    device_width: f64,
    padding: f64,
) -> ChartResult<MobileDimensions> {
    if !device_width.is_finite() || device_width < 0.0 {
        return Err(ChartError::InvalidViewport {
            width: device_width,
            height: 0.0,
        });
    }
    let padding = if padding.is_finite() { padding.max(0.0) } else { 0.0 };
    let available = (device_width - padding * 2.0).max(0.0);

    let width = width.map_or(available, |dimension| dimension.resolve_px(available));
    let height = height.map_or(DEFAULT_MOBILE_HEIGHT, |dimension| {
        dimension.resolve_px(width)
    });

    Ok(MobileDimensions { width, height })
}
