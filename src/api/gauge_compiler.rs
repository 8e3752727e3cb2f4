use tracing::debug;

use crate::core::{Dimension, color_at};
use crate::render::{
    CompiledOption, Fill, GaugeAxisLabel, GaugeAxisLine, GaugeDataItem, GaugeDetail,
    GaugeLineStyle, GaugePointer, GaugeProgress, GaugeSeries, GaugeTitle, ItemStyle,
    SeriesOption, TextStyle, Toggle,
};

use super::chart_compiler::base_option;
use super::{ChartProps, CompileContext, GaugeColor, GaugeOptions, build_tooltip};

const DEFAULT_GAUGE_NAME: &str = "Value";

/// Compiles a data-less gauge from `props.gauge`.
#[must_use]
pub fn compile_gauge(props: &ChartProps, ctx: &CompileContext) -> CompiledOption {
    let gauge = &props.gauge;
    let name = gauge.name.as_deref().unwrap_or(DEFAULT_GAUGE_NAME);

    let mut option = base_option(props, ctx);
    option.tooltip = build_tooltip(&props.tooltip, crate::core::ChartType::Gauge, ctx);
    option.series = vec![SeriesOption::Gauge(gauge_series(gauge.value, name, gauge, ctx))];
    debug!(value = ?gauge.value, zones = gauge.zones.len(), "compiled gauge");
    option
}

/// Gauge series for one scalar. A missing or non-finite value reads as `min`.
#[must_use]
pub fn gauge_series(
    value: Option<f64>,
    name: &str,
    gauge: &GaugeOptions,
    ctx: &CompileContext,
) -> GaugeSeries {
    let value = value.filter(|value| value.is_finite()).unwrap_or(gauge.min);
    let formatter = gauge
        .formatter
        .clone()
        .unwrap_or_else(|| default_formatter(gauge.unit.as_deref()));
    let stops = axis_line_stops(gauge, &ctx.palette);
    let pointer_color = stops
        .last()
        .map_or_else(|| color_at(&ctx.palette, 0), |(_, color)| color.clone());

    GaugeSeries {
        name: name.to_owned(),
        min: gauge.min,
        max: gauge.max,
        start_angle: gauge.start_angle,
        end_angle: gauge.end_angle,
        split_number: gauge.split_number,
        data: vec![GaugeDataItem {
            value,
            name: name.to_owned(),
        }],
        axis_line: GaugeAxisLine {
            line_style: GaugeLineStyle {
                width: gauge.arc_width,
                color: stops,
            },
        },
        pointer: GaugePointer {
            show: gauge.show_pointer,
            width: 6.0,
            length: Dimension::Percent(60.0),
            item_style: ItemStyle::filled(Fill::solid(if gauge.zones.is_empty() {
                pointer_color
            } else {
                ctx.theme.text.to_owned()
            })),
        },
        progress: GaugeProgress {
            show: gauge.show_progress,
            width: gauge.arc_width,
        },
        axis_tick: Toggle { show: false },
        split_line: Toggle { show: false },
        axis_label: GaugeAxisLabel {
            color: ctx.theme.axis_label.to_owned(),
            font_size: ctx.profile.font_size,
            distance: gauge.arc_width + 8.0,
        },
        detail: GaugeDetail {
            formatter,
            font_size: ctx.profile.font_size * 2.0,
            color: ctx.theme.text.to_owned(),
            offset_center: [Dimension::Percent(0.0), Dimension::Percent(40.0)],
            value_animation: true,
        },
        title: GaugeTitle {
            show: true,
            offset_center: [Dimension::Percent(0.0), Dimension::Percent(70.0)],
            text_style: TextStyle::new(ctx.theme.axis_label, ctx.profile.font_size),
        },
    }
}

/// `{value}` followed by the unit, in the renderer's template syntax.
#[must_use]
pub fn default_formatter(unit: Option<&str>) -> String {
    format!("{{value}}{}", unit.unwrap_or_default())
}

/// Arc color stops as `(normalized_end, color)`.
///
/// Zones win over `color`; each zone end is normalized to
/// `(to - min) / (max - min)` and clamped to `[0, 1]`. A color list becomes
/// evenly spaced stops; a single color (default: palette color 0) spans the
/// whole arc.
#[must_use]
pub fn axis_line_stops(gauge: &GaugeOptions, palette: &[String]) -> Vec<(f64, String)> {
    if !gauge.zones.is_empty() {
        let span = gauge.max - gauge.min;
        return gauge
            .zones
            .iter()
            .map(|zone| {
                let normalized = if span > 0.0 {
                    ((zone.to - gauge.min) / span).clamp(0.0, 1.0)
                } else {
                    1.0
                };
                (normalized, zone.color.clone())
            })
            .collect();
    }

    match &gauge.color {
        Some(GaugeColor::Stops(colors)) if !colors.is_empty() => {
            let count = colors.len() as f64;
            colors
                .iter()
                .enumerate()
                .map(|(index, color)| ((index + 1) as f64 / count, color.clone()))
                .collect()
        }
        Some(GaugeColor::Single(color)) => vec![(1.0, color.clone())],
        _ => vec![(1.0, color_at(palette, 0))],
    }
}

#[cfg(test)]
mod tests {
    use super::{axis_line_stops, default_formatter};
    use crate::api::{GaugeColor, GaugeOptions, GaugeZone};

    #[test]
    fn formatter_appends_unit() {
        assert_eq!(default_formatter(Some("%")), "{value}%");
        assert_eq!(default_formatter(None), "{value}");
    }

    #[test]
    fn color_list_becomes_even_stops() {
        let gauge = GaugeOptions {
            color: Some(GaugeColor::Stops(vec![
                "#10b981".to_owned(),
                "#f59e0b".to_owned(),
                "#ef4444".to_owned(),
                "#8b5cf6".to_owned(),
            ])),
            ..GaugeOptions::default()
        };
        let stops = axis_line_stops(&gauge, &[]);
        let offsets: Vec<f64> = stops.iter().map(|(offset, _)| *offset).collect();
        assert_eq!(offsets, vec![0.25, 0.5, 0.75, 1.0]);
    }

    #[test]
    fn zones_outside_bounds_are_clamped() {
        let gauge = GaugeOptions {
            min: 0.0,
            max: 50.0,
            zones: vec![GaugeZone::new(-10.0, "#a"), GaugeZone::new(80.0, "#b")],
            ..GaugeOptions::default()
        };
        let stops = axis_line_stops(&gauge, &[]);
        assert_eq!(stops, vec![(0.0, "#a".to_owned()), (1.0, "#b".to_owned())]);
    }
}
