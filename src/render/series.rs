use serde::Serialize;

use crate::core::Dimension;

use super::{Fill, LineStyle, TextStyle, Toggle};

/// Corner radius: one value or `[top-left, top-right, bottom-right, bottom-left]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(untagged)]
pub enum BorderRadius {
    Uniform(f64),
    Corners([f64; 4]),
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemStyle {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<Fill>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_width: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_radius: Option<BorderRadius>,
}

impl ItemStyle {
    #[must_use]
    pub fn filled(color: Fill) -> Self {
        Self {
            color: Some(color),
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AreaStyle {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<Fill>,
    pub opacity: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Emphasis {
    pub focus: &'static str,
}

impl Emphasis {
    pub const SERIES: Self = Self { focus: "series" };
    pub const SELF: Self = Self { focus: "self" };
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SeriesLabel {
    pub show: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub formatter: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_size: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LineSeries {
    pub name: String,
    pub data: Vec<f64>,
    pub smooth: bool,
    pub show_symbol: bool,
    pub symbol_size: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stack: Option<String>,
    pub item_style: ItemStyle,
    pub line_style: LineStyle,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub area_style: Option<AreaStyle>,
    pub emphasis: Emphasis,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BarSeries {
    pub name: String,
    pub data: Vec<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stack: Option<String>,
    pub bar_max_width: f64,
    pub item_style: ItemStyle,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<SeriesLabel>,
    pub emphasis: Emphasis,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScatterSeries {
    pub name: String,
    pub data: Vec<[f64; 2]>,
    pub symbol_size: f64,
    pub item_style: ItemStyle,
    pub emphasis: Emphasis,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PieDataItem {
    pub name: String,
    pub value: f64,
    pub item_style: ItemStyle,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<SeriesLabel>,
    /// Share of the total, already formatted (`"25.0%"`).
    #[serde(skip)]
    pub percentage: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PieSeries {
    pub name: String,
    pub radius: [Dimension; 2],
    pub center: [Dimension; 2],
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rose_type: Option<&'static str>,
    pub avoid_label_overlap: bool,
    pub data: Vec<PieDataItem>,
    pub label: SeriesLabel,
    pub label_line: Toggle,
    pub item_style: ItemStyle,
    pub emphasis: Emphasis,
}

impl PieSeries {
    #[must_use]
    pub fn percentages(&self) -> Vec<&str> {
        self.data.iter().map(|item| item.percentage.as_str()).collect()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RadarDataItem {
    pub name: String,
    pub value: Vec<f64>,
    pub item_style: ItemStyle,
    pub line_style: LineStyle,
    pub area_style: AreaStyle,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RadarSeries {
    pub name: String,
    pub symbol_size: f64,
    pub data: Vec<RadarDataItem>,
    pub emphasis: Emphasis,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GaugeLineStyle {
    pub width: f64,
    /// `[normalized_end, color]` stops along the arc.
    pub color: Vec<(f64, String)>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GaugeAxisLine {
    pub line_style: GaugeLineStyle,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GaugePointer {
    pub show: bool,
    pub width: f64,
    pub length: Dimension,
    pub item_style: ItemStyle,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GaugeProgress {
    pub show: bool,
    pub width: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GaugeAxisLabel {
    pub color: String,
    pub font_size: f64,
    pub distance: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GaugeDetail {
    pub formatter: String,
    pub font_size: f64,
    pub color: String,
    pub offset_center: [Dimension; 2],
    pub value_animation: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GaugeTitle {
    pub show: bool,
    pub offset_center: [Dimension; 2],
    pub text_style: TextStyle,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GaugeDataItem {
    pub value: f64,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GaugeSeries {
    pub name: String,
    pub min: f64,
    pub max: f64,
    pub start_angle: f64,
    pub end_angle: f64,
    pub split_number: u32,
    pub data: Vec<GaugeDataItem>,
    pub axis_line: GaugeAxisLine,
    pub pointer: GaugePointer,
    pub progress: GaugeProgress,
    pub axis_tick: Toggle,
    pub split_line: Toggle,
    pub axis_label: GaugeAxisLabel,
    pub detail: GaugeDetail,
    pub title: GaugeTitle,
}

/// One renderable trace, tagged with the renderer's series `type`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum SeriesOption {
    Line(LineSeries),
    Bar(BarSeries),
    Scatter(ScatterSeries),
    Pie(PieSeries),
    Radar(RadarSeries),
    Gauge(GaugeSeries),
}

impl SeriesOption {
    /// Renderer series type name.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Line(_) => "line",
            Self::Bar(_) => "bar",
            Self::Scatter(_) => "scatter",
            Self::Pie(_) => "pie",
            Self::Radar(_) => "radar",
            Self::Gauge(_) => "gauge",
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Line(series) => &series.name,
            Self::Bar(series) => &series.name,
            Self::Scatter(series) => &series.name,
            Self::Pie(series) => &series.name,
            Self::Radar(series) => &series.name,
            Self::Gauge(series) => &series.name,
        }
    }

    /// Series-level fill, when the series has a single one.
    #[must_use]
    pub fn item_color(&self) -> Option<&Fill> {
        match self {
            Self::Line(series) => series.item_style.color.as_ref(),
            Self::Bar(series) => series.item_style.color.as_ref(),
            Self::Scatter(series) => series.item_style.color.as_ref(),
            Self::Radar(series) => series
                .data
                .first()
                .and_then(|item| item.item_style.color.as_ref()),
            Self::Pie(_) | Self::Gauge(_) => None,
        }
    }

    /// Area fill opacity; `0.0` for series without an area.
    #[must_use]
    pub fn area_opacity(&self) -> f64 {
        match self {
            Self::Line(series) => series.area_style.as_ref().map_or(0.0, |area| area.opacity),
            Self::Radar(series) => series.data.first().map_or(0.0, |item| item.area_style.opacity),
            _ => 0.0,
        }
    }

    /// Number of plotted values.
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::Line(series) => series.data.len(),
            Self::Bar(series) => series.data.len(),
            Self::Scatter(series) => series.data.len(),
            Self::Pie(series) => series.data.len(),
            Self::Radar(series) => series.data.first().map_or(0, |item| item.value.len()),
            Self::Gauge(series) => series.data.len(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    #[must_use]
    pub fn as_line(&self) -> Option<&LineSeries> {
        match self {
            Self::Line(series) => Some(series),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_bar(&self) -> Option<&BarSeries> {
        match self {
            Self::Bar(series) => Some(series),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_scatter(&self) -> Option<&ScatterSeries> {
        match self {
            Self::Scatter(series) => Some(series),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_pie(&self) -> Option<&PieSeries> {
        match self {
            Self::Pie(series) => Some(series),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_radar(&self) -> Option<&RadarSeries> {
        match self {
            Self::Radar(series) => Some(series),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_gauge(&self) -> Option<&GaugeSeries> {
        match self {
            Self::Gauge(series) => Some(series),
            _ => None,
        }
    }
}
