use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::core::{
    ColorSchemeName, Dimension, MobileDimensions, Target, Theme, WebDimensions, resolve_mobile,
    resolve_web,
};
use crate::error::{ChartError, ChartResult};
use crate::render::RadarShape;

use super::validation::validate_chart_props;
use super::{GridConfig, LegendPosition, TooltipConfig};

pub const DEFAULT_EMPTY_TEXT: &str = "No data available";

/// A prop that is either a plain on/off switch or a detailed config.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum BoolOr<T> {
    Bool(bool),
    Config(T),
}

impl<T: Clone + Default> BoolOr<T> {
    /// `None` when switched off, the default config when switched on.
    #[must_use]
    pub fn resolve(&self) -> Option<T> {
        match self {
            Self::Bool(false) => None,
            Self::Bool(true) => Some(T::default()),
            Self::Config(config) => Some(config.clone()),
        }
    }
}

impl<T> Default for BoolOr<T> {
    fn default() -> Self {
        Self::Bool(true)
    }
}

impl<T> From<bool> for BoolOr<T> {
    fn from(enabled: bool) -> Self {
        Self::Bool(enabled)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BarOptions {
    pub horizontal: bool,
    /// Requested maximum bar thickness; capped at `MAX_BAR_WIDTH`.
    pub bar_max_width: Option<f64>,
    pub border_radius: f64,
    pub show_values: bool,
    pub gradient: bool,
}

impl Default for BarOptions {
    fn default() -> Self {
        Self {
            horizontal: false,
            bar_max_width: None,
            border_radius: 4.0,
            show_values: false,
            gradient: false,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AreaOptions {
    pub opacity: Option<f64>,
    pub gradient: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PieOptions {
    /// Overrides the family default (pie `0%`, donut `50%`).
    pub inner_radius: Option<Dimension>,
    pub outer_radius: Option<Dimension>,
    pub show_labels: bool,
    pub show_percentage: bool,
    pub rose_type: bool,
    pub center_text: Option<String>,
    pub center_subtext: Option<String>,
}

impl Default for PieOptions {
    fn default() -> Self {
        Self {
            inner_radius: None,
            outer_radius: None,
            show_labels: true,
            show_percentage: true,
            rose_type: false,
            center_text: None,
            center_subtext: None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RadarOptions {
    pub max_value: Option<f64>,
    pub shape: RadarShape,
    pub fill_opacity: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ScatterOptions {
    pub symbol_size: Option<f64>,
}

/// Colored band of a gauge arc, ending at `to` in value units.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GaugeZone {
    pub to: f64,
    pub color: String,
}

impl GaugeZone {
    #[must_use]
    pub fn new(to: f64, color: impl Into<String>) -> Self {
        Self {
            to,
            color: color.into(),
        }
    }
}

/// Gauge arc paint: one flat color or evenly spaced stops.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum GaugeColor {
    Single(String),
    Stops(Vec<String>),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GaugeOptions {
    pub value: Option<f64>,
    pub min: f64,
    pub max: f64,
    pub unit: Option<String>,
    pub name: Option<String>,
    pub zones: Vec<GaugeZone>,
    pub color: Option<GaugeColor>,
    pub formatter: Option<String>,
    pub split_number: u32,
    pub start_angle: f64,
    pub end_angle: f64,
    pub arc_width: f64,
    pub show_pointer: bool,
    pub show_progress: bool,
}

impl Default for GaugeOptions {
    fn default() -> Self {
        Self {
            value: None,
            min: 0.0,
            max: 100.0,
            unit: None,
            name: None,
            zones: Vec::new(),
            color: None,
            formatter: None,
            split_number: 10,
            start_angle: 225.0,
            end_angle: -45.0,
            arc_width: 18.0,
            show_pointer: true,
            show_progress: false,
        }
    }
}

/// Per-call compiler configuration.
///
/// This type is serializable so adapters can ship chart props as JSON
/// without inventing their own ad-hoc format. Every field has a default.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ChartProps {
    pub theme: Theme,
    pub color_scheme: ColorSchemeName,
    /// Explicit palette replacing the named scheme.
    pub colors: Option<Vec<String>>,
    pub target: Target,
    pub show_legend: bool,
    pub legend_position: LegendPosition,
    pub grid: BoolOr<GridConfig>,
    pub tooltip: BoolOr<TooltipConfig>,
    pub show_grid_lines: bool,
    pub x_axis_label: Option<String>,
    pub y_axis_label: Option<String>,
    pub animation: bool,
    pub data_zoom: bool,
    pub stacked: bool,
    /// Series-wide smoothing default; datasets may override it.
    pub smooth: Option<bool>,
    pub show_points: bool,
    pub width: Option<Dimension>,
    pub height: Option<Dimension>,
    pub empty_text: String,
    pub bar: BarOptions,
    pub area: AreaOptions,
    pub pie: PieOptions,
    pub radar: RadarOptions,
    pub scatter: ScatterOptions,
    pub gauge: GaugeOptions,
    /// Top-level option keys passed through to the renderer verbatim.
    pub extra_options: IndexMap<String, serde_json::Value>,
}

impl Default for ChartProps {
    fn default() -> Self {
        Self {
            theme: Theme::default(),
            color_scheme: ColorSchemeName::default(),
            colors: None,
            target: Target::default(),
            show_legend: true,
            legend_position: LegendPosition::default(),
            grid: BoolOr::default(),
            tooltip: BoolOr::default(),
            show_grid_lines: true,
            x_axis_label: None,
            y_axis_label: None,
            animation: true,
            data_zoom: false,
            stacked: false,
            smooth: None,
            show_points: true,
            width: None,
            height: None,
            empty_text: DEFAULT_EMPTY_TEXT.to_owned(),
            bar: BarOptions::default(),
            area: AreaOptions::default(),
            pie: PieOptions::default(),
            radar: RadarOptions::default(),
            scatter: ScatterOptions::default(),
            gauge: GaugeOptions::default(),
            extra_options: IndexMap::new(),
        }
    }
}

impl ChartProps {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses and validates camelCase JSON props.
    ///
    /// An unknown `colorScheme` fails with [`ChartError::InvalidScheme`].
    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        let value: serde_json::Value = serde_json::from_str(input)
            .map_err(|e| ChartError::InvalidData(format!("failed to parse chart props: {e}")))?;
        if let Some(name) = value.get("colorScheme").and_then(serde_json::Value::as_str) {
            name.parse::<ColorSchemeName>()?;
        }
        let props: Self = serde_json::from_value(value)
            .map_err(|e| ChartError::InvalidData(format!("failed to parse chart props: {e}")))?;
        props.validate()?;
        Ok(props)
    }

    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| ChartError::Serialization(format!("failed to serialize chart props: {e}")))
    }

    pub fn validate(&self) -> ChartResult<()> {
        validate_chart_props(self)
    }

    #[must_use]
    pub fn web_dimensions(&self) -> WebDimensions {
        resolve_web(self.width, self.height)
    }

    pub fn mobile_dimensions(&self, device_width: f64, padding: f64) -> ChartResult<MobileDimensions> {
        resolve_mobile(self.width, self.height, device_width, padding)
    }

    #[must_use]
    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    #[must_use]
    pub fn with_color_scheme(mut self, scheme: ColorSchemeName) -> Self {
        self.color_scheme = scheme;
        self
    }

    /// Sets the palette by scheme name, rejecting unknown names.
    pub fn with_color_scheme_name(mut self, name: &str) -> ChartResult<Self> {
        self.color_scheme = name.parse()?;
        Ok(self)
    }

    #[must_use]
    pub fn with_colors<I, S>(mut self, colors: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.colors = Some(colors.into_iter().map(Into::into).collect());
        self
    }

    #[must_use]
    pub fn with_target(mut self, target: Target) -> Self {
        self.target = target;
        self
    }

    #[must_use]
    pub fn with_legend(mut self, show: bool, position: LegendPosition) -> Self {
        self.show_legend = show;
        self.legend_position = position;
        self
    }

    #[must_use]
    pub fn with_grid(mut self, grid: BoolOr<GridConfig>) -> Self {
        self.grid = grid;
        self
    }

    #[must_use]
    pub fn with_tooltip(mut self, tooltip: BoolOr<TooltipConfig>) -> Self {
        self.tooltip = tooltip;
        self
    }

    #[must_use]
    pub fn with_axis_labels(mut self, x: Option<String>, y: Option<String>) -> Self {
        self.x_axis_label = x;
        self.y_axis_label = y;
        self
    }

    #[must_use]
    pub fn with_stacked(mut self, stacked: bool) -> Self {
        self.stacked = stacked;
        self
    }

    #[must_use]
    pub fn with_smooth(mut self, smooth: bool) -> Self {
        self.smooth = Some(smooth);
        self
    }

    #[must_use]
    pub fn with_data_zoom(mut self, enabled: bool) -> Self {
        self.data_zoom = enabled;
        self
    }

    #[must_use]
    pub fn with_size(mut self, width: Option<Dimension>, height: Option<Dimension>) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    #[must_use]
    pub fn with_bar(mut self, bar: BarOptions) -> Self {
        self.bar = bar;
        self
    }

    #[must_use]
    pub fn with_area(mut self, area: AreaOptions) -> Self {
        self.area = area;
        self
    }

    #[must_use]
    pub fn with_pie(mut self, pie: PieOptions) -> Self {
        self.pie = pie;
        self
    }

    #[must_use]
    pub fn with_radar(mut self, radar: RadarOptions) -> Self {
        self.radar = radar;
        self
    }

    #[must_use]
    pub fn with_scatter(mut self, scatter: ScatterOptions) -> Self {
        self.scatter = scatter;
        self
    }

    #[must_use]
    pub fn with_gauge(mut self, gauge: GaugeOptions) -> Self {
        self.gauge = gauge;
        self
    }

    #[must_use]
    pub fn with_extra_option(mut self, key: impl Into<String>, value: serde_json::Value) -> Self {
        self.extra_options.insert(key.into(), value);
        self
    }
}
