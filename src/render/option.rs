use indexmap::IndexMap;
use serde::Serialize;

use crate::error::{ChartError, ChartResult};

use super::{
    AxisBlock, DataZoomBlock, GridBlock, LegendBlock, RadarComponent, SeriesOption, TextStyle,
    TitleBlock, TooltipBlock,
};

/// Top-level keys the compiler owns. Host pass-through keys may not reuse them.
pub const COMPILED_OPTION_KEYS: &[&str] = &[
    "color",
    "backgroundColor",
    "animation",
    "textStyle",
    "title",
    "tooltip",
    "legend",
    "grid",
    "xAxis",
    "yAxis",
    "radar",
    "dataZoom",
    "series",
];

/// Renderer-ready option tree produced by one compile.
///
/// Absent blocks are omitted from the serialized form rather than written as
/// `null`, so renderers never see an empty legend or tooltip.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompiledOption {
    pub color: Vec<String>,
    pub background_color: &'static str,
    pub animation: bool,
    pub text_style: TextStyle,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<TitleBlock>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tooltip: Option<TooltipBlock>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub legend: Option<LegendBlock>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grid: Option<GridBlock>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x_axis: Option<AxisBlock>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y_axis: Option<AxisBlock>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub radar: Option<RadarComponent>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_zoom: Option<Vec<DataZoomBlock>>,
    pub series: Vec<SeriesOption>,
    /// Host-supplied top-level keys passed through verbatim.
    #[serde(flatten)]
    pub extensions: IndexMap<String, serde_json::Value>,
}

impl CompiledOption {
    /// Empty option carrying only the global blocks.
    #[must_use]
    pub fn new(color: Vec<String>, animation: bool, text_style: TextStyle) -> Self {
        Self {
            color,
            background_color: "transparent",
            animation,
            text_style,
            title: None,
            tooltip: None,
            legend: None,
            grid: None,
            x_axis: None,
            y_axis: None,
            radar: None,
            data_zoom: None,
            series: Vec::new(),
            extensions: IndexMap::new(),
        }
    }

    #[must_use]
    pub fn series_kinds(&self) -> Vec<&'static str> {
        self.series.iter().map(SeriesOption::kind).collect()
    }

    pub fn to_json_value(&self) -> ChartResult<serde_json::Value> {
        serde_json::to_value(self).map_err(|e| {
            ChartError::Serialization(format!("failed to serialize compiled option: {e}"))
        })
    }

    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| {
            ChartError::Serialization(format!("failed to serialize compiled option: {e}"))
        })
    }

    /// Structural checks a renderer relies on.
    pub fn validate(&self) -> ChartResult<()> {
        if self.series.is_empty() {
            return Err(ChartError::InvalidData(
                "compiled option must contain at least one series".to_owned(),
            ));
        }
        if self.color.is_empty() {
            return Err(ChartError::InvalidData(
                "compiled option palette must not be empty".to_owned(),
            ));
        }
        let cartesian = self.series.iter().any(|series| {
            matches!(
                series,
                SeriesOption::Line(_) | SeriesOption::Bar(_) | SeriesOption::Scatter(_)
            )
        });
        if cartesian && (self.x_axis.is_none() || self.y_axis.is_none()) {
            return Err(ChartError::InvalidData(
                "cartesian series require both axes".to_owned(),
            ));
        }
        if self.series.iter().any(|series| matches!(series, SeriesOption::Radar(_)))
            && self.radar.is_none()
        {
            return Err(ChartError::InvalidData(
                "radar series require a radar component".to_owned(),
            ));
        }
        Ok(())
    }
}
