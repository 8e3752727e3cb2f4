use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

const DEFAULT_PALETTE: &[&str] = &[
    "#3b82f6", "#10b981", "#f59e0b", "#ef4444", "#8b5cf6", "#ec4899", "#06b6d4", "#84cc16",
];

const PASTEL_PALETTE: &[&str] = &[
    "#93c5fd", "#86efac", "#fde68a", "#fca5a5", "#c4b5fd", "#f9a8d4", "#a5f3fc", "#d9f99d",
];

const VIVID_PALETTE: &[&str] = &[
    "#2563eb", "#059669", "#d97706", "#dc2626", "#7c3aed", "#db2777", "#0891b2", "#65a30d",
];

const MONOCHROME_PALETTE: &[&str] = &[
    "#0f172a", "#334155", "#475569", "#64748b", "#94a3b8", "#cbd5e1",
];

/// Named series palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum ColorSchemeName {
    #[default]
    Default,
    Pastel,
    Vivid,
    Monochrome,
}

impl ColorSchemeName {
    /// Registry order.
    pub const ALL: [ColorSchemeName; 4] = [
        ColorSchemeName::Default,
        ColorSchemeName::Pastel,
        ColorSchemeName::Vivid,
        ColorSchemeName::Monochrome,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Pastel => "pastel",
            Self::Vivid => "vivid",
            Self::Monochrome => "monochrome",
        }
    }
}

impl fmt::Display for ColorSchemeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ColorSchemeName {
    type Err = ChartError;

    /// Unknown names are rejected rather than mapped to `default`.
    fn from_str(input: &str) -> ChartResult<Self> {
        Self::ALL
            .into_iter()
            .find(|scheme| scheme.as_str() == input)
            .ok_or_else(|| ChartError::InvalidScheme {
                name: input.to_owned(),
            })
    }
}

impl TryFrom<String> for ColorSchemeName {
    type Error = ChartError;

    fn try_from(name: String) -> ChartResult<Self> {
        name.parse()
    }
}

/// Ordered colors of a scheme. Never empty.
#[must_use]
pub const fn get_colors(scheme: ColorSchemeName) -> &'static [&'static str] {
    match scheme {
        ColorSchemeName::Default => DEFAULT_PALETTE,
        ColorSchemeName::Pastel => PASTEL_PALETTE,
        ColorSchemeName::Vivid => VIVID_PALETTE,
        ColorSchemeName::Monochrome => MONOCHROME_PALETTE,
    }
}

/// Looks up a palette by its string name.
pub fn get_colors_by_name(name: &str) -> ChartResult<&'static [&'static str]> {
    name.parse().map(get_colors)
}

/// Color at `index`, wrapping around the palette. An empty palette falls
/// back to the default scheme.
#[must_use]
pub fn color_at<S: AsRef<str>>(palette: &[S], index: usize) -> String {
    if palette.is_empty() {
        return DEFAULT_PALETTE[index % DEFAULT_PALETTE.len()].to_owned();
    }
    palette[index % palette.len()].as_ref().to_owned()
}
