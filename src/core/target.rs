use serde::{Deserialize, Serialize};

/// Host target whose adapter calls the compiler.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Target {
    #[default]
    Web,
    Mobile,
}

/// Numeric constants that differ between web and mobile hosts.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TargetProfile {
    pub font_size: f64,
    pub legend_font_size: f64,
    /// Category axes rotate their labels once the label count exceeds this.
    pub label_rotation_threshold: usize,
    pub label_rotation_degrees: f64,
    pub tooltip_confine: bool,
    pub scroll_legend: bool,
    pub symbol_size: f64,
}

pub const WEB_PROFILE: TargetProfile = TargetProfile {
    font_size: 12.0,
    legend_font_size: 12.0,
    label_rotation_threshold: 10,
    label_rotation_degrees: 45.0,
    tooltip_confine: false,
    scroll_legend: false,
    symbol_size: 6.0,
};

pub const MOBILE_PROFILE: TargetProfile = TargetProfile {
    font_size: 10.0,
    legend_font_size: 10.0,
    label_rotation_threshold: 6,
    label_rotation_degrees: 45.0,
    tooltip_confine: true,
    scroll_legend: true,
    symbol_size: 4.0,
};

/// Area fill opacity used on every target unless a caller overrides it.
pub const DEFAULT_AREA_OPACITY: f64 = 0.3;
/// Upper bound for bar thickness in pixels.
pub const MAX_BAR_WIDTH: f64 = 40.0;
/// End-stop alpha of the synthesized bar gradient.
pub const BAR_GRADIENT_END_ALPHA: f64 = 0.6;

impl Target {
    #[must_use]
    pub const fn profile(self) -> TargetProfile {
        match self {
            Self::Web => WEB_PROFILE,
            Self::Mobile => MOBILE_PROFILE,
        }
    }
}
