pub mod color;
pub mod color_scheme;
pub mod dimensions;
pub mod target;
pub mod theme;
pub mod types;

pub use color::{Color, alpha_variant, transparent_variant};
pub use color_scheme::{ColorSchemeName, color_at, get_colors, get_colors_by_name};
pub use dimensions::{Dimension, MobileDimensions, WebDimensions, resolve_mobile, resolve_web};
pub use target::{
    BAR_GRADIENT_END_ALPHA, DEFAULT_AREA_OPACITY, MAX_BAR_WIDTH, MOBILE_PROFILE, Target,
    TargetProfile, WEB_PROFILE,
};
pub use theme::{Theme, ThemeColors, resolve_theme};
pub use types::{BackgroundColor, ChartData, ChartDataset, ChartType, DatasetKind};
