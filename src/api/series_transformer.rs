use tracing::{debug, warn};

use crate::core::{
    BAR_GRADIENT_END_ALPHA, BackgroundColor, ChartData, ChartDataset, ChartType,
    DEFAULT_AREA_OPACITY, DatasetKind, Dimension, MAX_BAR_WIDTH, alpha_variant, color_at,
    transparent_variant,
};
use crate::render::{
    AreaStyle, BarSeries, BorderRadius, Emphasis, Fill, ItemStyle, LineSeries, LineStyle,
    LinearGradient, PieDataItem, PieSeries, RadarDataItem, RadarSeries, ScatterSeries,
    SeriesLabel, SeriesOption, Toggle,
};

use super::gauge_compiler::gauge_series;
use super::percentage_formatter::{finite_total, format_percentage};
use super::{ChartProps, CompileContext, GaugeOptions};

const DEFAULT_LINE_WIDTH: f64 = 2.0;
const DEFAULT_SCATTER_SYMBOL_SIZE: f64 = 10.0;
const STACK_GROUP: &str = "total";
const PIE_OUTER_RADIUS: Dimension = Dimension::Percent(70.0);
const DONUT_INNER_RADIUS: Dimension = Dimension::Percent(50.0);
const PIE_INNER_RADIUS: Dimension = Dimension::Percent(0.0);

/// Family-specific knobs consumed by `transform_series`.
#[derive(Debug, Clone, PartialEq)]
pub struct SeriesExtras {
    pub ctx: CompileContext,
    pub smooth: bool,
    pub show_points: bool,
    pub stacked: bool,
    pub area_opacity: f64,
    pub area_gradient: bool,
    pub bar_max_width: f64,
    pub bar_border_radius: f64,
    pub bar_gradient: bool,
    pub horizontal: bool,
    pub show_values: bool,
    pub scatter_symbol_size: f64,
    pub radar_fill_opacity: f64,
    pub pie_inner_radius: Option<Dimension>,
    pub pie_outer_radius: Dimension,
    pub pie_show_labels: bool,
    pub pie_show_percentage: bool,
    pub pie_rose_type: bool,
    pub gauge: GaugeOptions,
}

impl SeriesExtras {
    #[must_use]
    pub fn from_props(props: &ChartProps, ctx: &CompileContext) -> Self {
        Self {
            ctx: ctx.clone(),
            smooth: props.smooth.unwrap_or(true),
            show_points: props.show_points,
            stacked: props.stacked,
            area_opacity: props.area.opacity.unwrap_or(DEFAULT_AREA_OPACITY),
            area_gradient: props.area.gradient,
            bar_max_width: props.bar.bar_max_width.unwrap_or(MAX_BAR_WIDTH),
            bar_border_radius: props.bar.border_radius,
            bar_gradient: props.bar.gradient,
            horizontal: props.bar.horizontal,
            show_values: props.bar.show_values,
            scatter_symbol_size: props
                .scatter
                .symbol_size
                .unwrap_or(DEFAULT_SCATTER_SYMBOL_SIZE),
            radar_fill_opacity: props.radar.fill_opacity.unwrap_or(DEFAULT_AREA_OPACITY),
            pie_inner_radius: props.pie.inner_radius,
            pie_outer_radius: props.pie.outer_radius.unwrap_or(PIE_OUTER_RADIUS),
            pie_show_labels: props.pie.show_labels,
            pie_show_percentage: props.pie.show_percentage,
            pie_rose_type: props.pie.rose_type,
            gauge: props.gauge.clone(),
        }
    }

    /// Replaces the palette used for datasets without an explicit color.
    #[must_use]
    pub fn with_palette<I, S>(mut self, palette: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.ctx.palette = palette.into_iter().map(Into::into).collect();
        self
    }

    fn effective_area_opacity(&self) -> f64 {
        if self.area_opacity.is_finite() && self.area_opacity > 0.0 {
            self.area_opacity.min(1.0)
        } else {
            DEFAULT_AREA_OPACITY
        }
    }
}

impl Default for SeriesExtras {
    fn default() -> Self {
        Self::from_props(&ChartProps::default(), &CompileContext::default())
    }
}

/// Effective color: `color`, then `borderColor`, then the palette wrapped by
/// dataset index.
#[must_use]
pub fn resolve_dataset_color(dataset: &ChartDataset, index: usize, palette: &[String]) -> String {
    dataset
        .declared_color()
        .map_or_else(|| color_at(palette, index), str::to_owned)
}

/// Converts every dataset into one series, in input order.
///
/// `mixed` picks the series shape per dataset from its `type` (missing means
/// line). Category families clip each dataset to `labels.len()`.
#[must_use]
pub fn transform_series(
    data: &ChartData,
    family: ChartType,
    extras: &SeriesExtras,
) -> Vec<SeriesOption> {
    let series: Vec<SeriesOption> = data
        .datasets
        .iter()
        .enumerate()
        .map(|(index, dataset)| {
            let color = resolve_dataset_color(dataset, index, &extras.ctx.palette);
            match family {
                ChartType::Line => {
                    let values = category_values(dataset, &data.labels);
                    SeriesOption::Line(line_series(dataset, color, values, false, extras))
                }
                ChartType::Area => {
                    let values = category_values(dataset, &data.labels);
                    SeriesOption::Line(line_series(dataset, color, values, true, extras))
                }
                ChartType::Bar => {
                    let values = category_values(dataset, &data.labels);
                    SeriesOption::Bar(bar_series(dataset, color, values, extras))
                }
                ChartType::Mixed => {
                    let values = category_values(dataset, &data.labels);
                    match dataset.kind.unwrap_or_default() {
                        DatasetKind::Line => {
                            SeriesOption::Line(line_series(dataset, color, values, false, extras))
                        }
                        DatasetKind::Area => {
                            SeriesOption::Line(line_series(dataset, color, values, true, extras))
                        }
                        DatasetKind::Bar => {
                            SeriesOption::Bar(bar_series(dataset, color, values, extras))
                        }
                    }
                }
                ChartType::Scatter => {
                    SeriesOption::Scatter(scatter_series(dataset, &data.labels, color, extras))
                }
                ChartType::Radar => SeriesOption::Radar(radar_series(dataset, color, extras)),
                ChartType::Pie | ChartType::Donut => {
                    SeriesOption::Pie(pie_series(dataset, &data.labels, family, extras))
                }
                ChartType::Gauge => SeriesOption::Gauge(gauge_series(
                    dataset.data.first().copied(),
                    &dataset.label,
                    &extras.gauge,
                    &extras.ctx,
                )),
            }
        })
        .collect();

    debug!(family = %family, series = series.len(), "transformed series");
    series
}

/// Dataset values clipped to the label count.
fn category_values(dataset: &ChartDataset, labels: &[String]) -> Vec<f64> {
    let fits = labels.is_empty() || dataset.data.len() <= labels.len();
    #[cfg(feature = "strict-data")]
    debug_assert!(
        fits,
        "dataset `{}` has {} values for {} labels",
        dataset.label,
        dataset.data.len(),
        labels.len()
    );
    if fits {
        return dataset.data.clone();
    }

    warn!(
        dataset = %dataset.label,
        values = dataset.data.len(),
        labels = labels.len(),
        "dataset longer than labels; truncating"
    );
    dataset.data[..labels.len()].to_vec()
}

fn line_series(
    dataset: &ChartDataset,
    color: String,
    values: Vec<f64>,
    area: bool,
    extras: &SeriesExtras,
) -> LineSeries {
    let area_style = (area || dataset.fill == Some(true)).then(|| area_style(&color, extras));

    LineSeries {
        name: dataset.label.clone(),
        data: values,
        smooth: dataset.smooth.unwrap_or(extras.smooth),
        show_symbol: extras.show_points,
        symbol_size: extras.ctx.profile.symbol_size,
        stack: extras.stacked.then(|| STACK_GROUP.to_owned()),
        item_style: ItemStyle::filled(Fill::solid(color.clone())),
        line_style: LineStyle {
            color: Some(color),
            width: Some(dataset.border_width.unwrap_or(DEFAULT_LINE_WIDTH)),
            kind: None,
        },
        area_style,
        emphasis: Emphasis::SERIES,
    }
}

/// Area fill for `color`; a vertical fade to transparent when gradients are on.
#[must_use]
pub fn area_style(color: &str, extras: &SeriesExtras) -> AreaStyle {
    let fill = if extras.area_gradient {
        Fill::Gradient(area_gradient(color))
    } else {
        Fill::solid(color)
    };
    AreaStyle {
        color: Some(fill),
        opacity: extras.effective_area_opacity(),
    }
}

/// Vertical gradient from `color` to its fully transparent variant.
#[must_use]
pub fn area_gradient(color: &str) -> LinearGradient {
    LinearGradient::vertical(color, transparent_variant(color))
}

/// Gradient from `color` to a translucent variant along the bar's length.
#[must_use]
pub fn bar_gradient(color: &str, horizontal: bool) -> LinearGradient {
    let end = alpha_variant(color, BAR_GRADIENT_END_ALPHA);
    if horizontal {
        LinearGradient::horizontal(color, end)
    } else {
        LinearGradient::vertical(color, end)
    }
}

fn bar_series(
    dataset: &ChartDataset,
    color: String,
    values: Vec<f64>,
    extras: &SeriesExtras,
) -> BarSeries {
    let fill = if extras.bar_gradient {
        Fill::Gradient(bar_gradient(&color, extras.horizontal))
    } else {
        Fill::solid(color)
    };
    let radius = extras.bar_border_radius;
    let corners = if extras.horizontal {
        [0.0, radius, radius, 0.0]
    } else {
        [radius, radius, 0.0, 0.0]
    };
    let label = extras.show_values.then(|| SeriesLabel {
        show: true,
        position: Some(if extras.horizontal { "right" } else { "top" }),
        formatter: None,
        color: Some(extras.ctx.theme.text.to_owned()),
        font_size: Some(extras.ctx.profile.font_size),
    });

    BarSeries {
        name: dataset.label.clone(),
        data: values,
        stack: extras.stacked.then(|| STACK_GROUP.to_owned()),
        bar_max_width: extras.bar_max_width.min(MAX_BAR_WIDTH),
        item_style: ItemStyle {
            color: Some(fill),
            border_color: None,
            border_width: None,
            border_radius: Some(BorderRadius::Corners(corners)),
        },
        label,
        emphasis: Emphasis::SERIES,
    }
}

/// Scatter points are `[x, y]`; x is the numeric label when every label is
/// numeric, the index otherwise.
fn scatter_series(
    dataset: &ChartDataset,
    labels: &[String],
    color: String,
    extras: &SeriesExtras,
) -> ScatterSeries {
    let numeric_labels: Option<Vec<f64>> = (!labels.is_empty())
        .then(|| {
            labels
                .iter()
                .map(|label| label.trim().parse::<f64>().ok().filter(|x| x.is_finite()))
                .collect()
        })
        .flatten();

    let data = dataset
        .data
        .iter()
        .enumerate()
        .map(|(index, y)| {
            let x = numeric_labels
                .as_ref()
                .and_then(|xs| xs.get(index).copied())
                .unwrap_or(index as f64);
            [x, *y]
        })
        .collect();

    ScatterSeries {
        name: dataset.label.clone(),
        data,
        symbol_size: extras.scatter_symbol_size,
        item_style: ItemStyle::filled(Fill::solid(color)),
        emphasis: Emphasis::SELF,
    }
}

fn radar_series(dataset: &ChartDataset, color: String, extras: &SeriesExtras) -> RadarSeries {
    RadarSeries {
        name: dataset.label.clone(),
        symbol_size: extras.ctx.profile.symbol_size,
        data: vec![RadarDataItem {
            name: dataset.label.clone(),
            value: dataset.data.clone(),
            item_style: ItemStyle::filled(Fill::solid(color.clone())),
            line_style: LineStyle {
                color: Some(color.clone()),
                width: Some(dataset.border_width.unwrap_or(DEFAULT_LINE_WIDTH)),
                kind: None,
            },
            area_style: AreaStyle {
                color: Some(Fill::solid(color)),
                opacity: extras.radar_fill_opacity,
            },
        }],
        emphasis: Emphasis::SERIES,
    }
}

fn pie_series(
    dataset: &ChartDataset,
    labels: &[String],
    family: ChartType,
    extras: &SeriesExtras,
) -> PieSeries {
    let values = category_values(dataset, labels);
    let total = finite_total(&values);

    let data = values
        .iter()
        .enumerate()
        .map(|(index, value)| {
            let name = labels
                .get(index)
                .cloned()
                .unwrap_or_else(|| format!("{}", index + 1));
            let color = match &dataset.background_color {
                Some(BackgroundColor::PerPoint(colors)) => colors
                    .get(index)
                    .cloned()
                    .unwrap_or_else(|| color_at(&extras.ctx.palette, index)),
                _ => color_at(&extras.ctx.palette, index),
            };
            let percentage = format_percentage(*value, total);
            let label = extras.pie_show_percentage.then(|| SeriesLabel {
                show: extras.pie_show_labels,
                position: None,
                formatter: Some(format!("{name}: {percentage}")),
                color: None,
                font_size: None,
            });
            PieDataItem {
                name,
                value: *value,
                item_style: ItemStyle::filled(Fill::solid(color)),
                label,
                percentage,
            }
        })
        .collect();

    let default_inner = if family == ChartType::Donut {
        DONUT_INNER_RADIUS
    } else {
        PIE_INNER_RADIUS
    };
    PieSeries {
        name: dataset.label.clone(),
        radius: [
            extras.pie_inner_radius.unwrap_or(default_inner),
            extras.pie_outer_radius,
        ],
        center: [Dimension::Percent(50.0), Dimension::Percent(50.0)],
        rose_type: extras.pie_rose_type.then_some("radius"),
        avoid_label_overlap: true,
        data,
        label: SeriesLabel {
            show: extras.pie_show_labels,
            position: Some("outside"),
            formatter: Some("{b}".to_owned()),
            color: Some(extras.ctx.theme.text.to_owned()),
            font_size: Some(extras.ctx.profile.font_size),
        },
        label_line: Toggle {
            show: extras.pie_show_labels,
        },
        item_style: ItemStyle {
            color: None,
            border_color: Some(extras.ctx.theme.tooltip_background.to_owned()),
            border_width: Some(2.0),
            border_radius: None,
        },
        emphasis: Emphasis::SELF,
    }
}
