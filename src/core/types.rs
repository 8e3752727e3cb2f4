use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// Per-dataset series shape used by mixed charts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DatasetKind {
    #[default]
    Line,
    Bar,
    Area,
}

/// Fill color declared by a dataset: one color for the whole series or one
/// color per data point (used by pie/donut slices).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum BackgroundColor {
    Single(String),
    PerPoint(Vec<String>),
}

/// One named data trace.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartDataset {
    pub label: String,
    #[serde(default)]
    pub data: Vec<f64>,
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<DatasetKind>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub border_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background_color: Option<BackgroundColor>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub border_width: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fill: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub smooth: Option<bool>,
}

impl ChartDataset {
    /// Field-wise equality with float fields compared as ordered floats.
    #[must_use]
    pub fn same_as(&self, other: &Self) -> bool {
        use ordered_float::OrderedFloat;

        self.label == other.label
            && self.kind == other.kind
            && self.color == other.color
            && self.border_color == other.border_color
            && self.background_color == other.background_color
            && self.border_width.map(OrderedFloat) == other.border_width.map(OrderedFloat)
            && self.fill == other.fill
            && self.smooth == other.smooth
            && self.data.len() == other.data.len()
            && self
                .data
                .iter()
                .zip(&other.data)
                .all(|(left, right)| OrderedFloat(*left) == OrderedFloat(*right))
    }

    #[must_use]
    pub fn new(label: impl Into<String>, data: Vec<f64>) -> Self {
        Self {
            label: label.into(),
            data,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_kind(mut self, kind: DatasetKind) -> Self {
        self.kind = Some(kind);
        self
    }

    #[must_use]
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    #[must_use]
    pub fn with_border_color(mut self, color: impl Into<String>) -> Self {
        self.border_color = Some(color.into());
        self
    }

    #[must_use]
    pub fn with_background_color(mut self, color: BackgroundColor) -> Self {
        self.background_color = Some(color);
        self
    }

    #[must_use]
    pub fn with_border_width(mut self, width: f64) -> Self {
        self.border_width = Some(width);
        self
    }

    #[must_use]
    pub fn with_fill(mut self, fill: bool) -> Self {
        self.fill = Some(fill);
        self
    }

    #[must_use]
    pub fn with_smooth(mut self, smooth: bool) -> Self {
        self.smooth = Some(smooth);
        self
    }

    /// Explicit series color, if the dataset declares one.
    #[must_use]
    pub fn declared_color(&self) -> Option<&str> {
        self.color.as_deref().or(self.border_color.as_deref())
    }
}

/// Framework-agnostic chart input: category labels plus parallel datasets.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ChartData {
    #[serde(default)]
    pub labels: Vec<String>,
    #[serde(default)]
    pub datasets: Vec<ChartDataset>,
}

impl ChartData {
    #[must_use]
    pub fn new<L, S>(labels: L, datasets: Vec<ChartDataset>) -> Self
    where
        L: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            labels: labels.into_iter().map(Into::into).collect(),
            datasets,
        }
    }

    /// `true` when there is nothing to plot: no datasets, or only empty ones.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.datasets.iter().all(|dataset| dataset.data.is_empty())
    }

    #[must_use]
    pub fn series_labels(&self) -> Vec<String> {
        self.datasets
            .iter()
            .map(|dataset| dataset.label.clone())
            .collect()
    }

    /// Structural equality that compares samples as ordered floats, so a
    /// `NaN` sample matches another `NaN` in the same slot.
    #[must_use]
    pub fn same_as(&self, other: &Self) -> bool {
        self.labels == other.labels
            && self.datasets.len() == other.datasets.len()
            && self
                .datasets
                .iter()
                .zip(&other.datasets)
                .all(|(left, right)| left.same_as(right))
    }

    /// Largest finite value across every dataset.
    #[must_use]
    pub fn max_value(&self) -> Option<f64> {
        self.datasets
            .iter()
            .flat_map(|dataset| dataset.data.iter().copied())
            .filter(|value| value.is_finite())
            .map(ordered_float::OrderedFloat)
            .max()
            .map(|value| value.0)
    }
}

/// Chart family selecting the compiler and its defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartType {
    Line,
    Bar,
    Pie,
    Donut,
    Area,
    Radar,
    Scatter,
    Mixed,
    Gauge,
}

impl ChartType {
    pub const ALL: [ChartType; 9] = [
        ChartType::Line,
        ChartType::Bar,
        ChartType::Pie,
        ChartType::Donut,
        ChartType::Area,
        ChartType::Radar,
        ChartType::Scatter,
        ChartType::Mixed,
        ChartType::Gauge,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Line => "line",
            Self::Bar => "bar",
            Self::Pie => "pie",
            Self::Donut => "donut",
            Self::Area => "area",
            Self::Radar => "radar",
            Self::Scatter => "scatter",
            Self::Mixed => "mixed",
            Self::Gauge => "gauge",
        }
    }

    /// Families plotted against category/value axes.
    #[must_use]
    pub const fn is_cartesian(self) -> bool {
        matches!(
            self,
            Self::Line | Self::Bar | Self::Area | Self::Scatter | Self::Mixed
        )
    }
}

impl fmt::Display for ChartType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ChartType {
    type Err = ChartError;

    fn from_str(input: &str) -> ChartResult<Self> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == input)
            .ok_or_else(|| ChartError::UnsupportedChartType {
                name: input.to_owned(),
            })
    }
}
