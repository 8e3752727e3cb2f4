use serde::{Deserialize, Serialize};

/// Host color theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

/// Structural colors shared by every layout builder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeColors {
    pub axis_line: &'static str,
    pub axis_label: &'static str,
    pub grid_line: &'static str,
    pub tooltip_background: &'static str,
    pub tooltip_border: &'static str,
    pub tooltip_text: &'static str,
    pub text: &'static str,
}

const LIGHT_THEME: ThemeColors = ThemeColors {
    axis_line: "#e5e7eb",
    axis_label: "#6b7280",
    grid_line: "#f3f4f6",
    tooltip_background: "#ffffff",
    tooltip_border: "#e5e7eb",
    tooltip_text: "#111827",
    text: "#374151",
};

const DARK_THEME: ThemeColors = ThemeColors {
    axis_line: "#374151",
    axis_label: "#9ca3af",
    grid_line: "#1f2937",
    tooltip_background: "#1f2937",
    tooltip_border: "#374151",
    tooltip_text: "#f9fafb",
    text: "#d1d5db",
};

#[must_use]
pub const fn resolve_theme(theme: Theme) -> ThemeColors {
    match theme {
        Theme::Light => LIGHT_THEME,
        Theme::Dark => DARK_THEME,
    }
}
