use crate::core::{Target, TargetProfile, Theme, ThemeColors, get_colors, resolve_theme};

use super::ChartProps;

/// Resolved theme, target constants and palette shared by every builder of
/// one compile.
#[derive(Debug, Clone, PartialEq)]
pub struct CompileContext {
    pub theme: ThemeColors,
    pub profile: TargetProfile,
    pub palette: Vec<String>,
}

impl CompileContext {
    #[must_use]
    pub fn new(theme: Theme, target: Target, palette: Vec<String>) -> Self {
        Self {
            theme: resolve_theme(theme),
            profile: target.profile(),
            palette,
        }
    }

    /// Explicit `colors` win over the named scheme.
    #[must_use]
    pub fn from_props(props: &ChartProps) -> Self {
        let palette = match &props.colors {
            Some(colors) if !colors.is_empty() => colors.clone(),
            _ => get_colors(props.color_scheme)
                .iter()
                .map(|color| (*color).to_owned())
                .collect(),
        };
        Self::new(props.theme, props.target, palette)
    }
}

impl Default for CompileContext {
    fn default() -> Self {
        Self::from_props(&ChartProps::default())
    }
}
