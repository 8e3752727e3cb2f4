use tracing::{debug, trace};

use crate::core::{ChartData, ChartType, Dimension};
use crate::render::{
    AxisLine, CompiledOption, LineStyle, RadarComponent, RadarIndicator, SplitLine, TextStyle,
    Toggle,
};

use super::chart_compiler::base_option;
use super::{
    ChartProps, CompileContext, SeriesExtras, build_legend, build_tooltip, transform_series,
};

const RADAR_RADIUS: Dimension = Dimension::Percent(65.0);
const FALLBACK_MAX: f64 = 1.0;

/// Compiles a radar chart with one indicator per label.
#[must_use]
pub fn compile_radar(data: &ChartData, props: &ChartProps, ctx: &CompileContext) -> CompiledOption {
    let extras = SeriesExtras::from_props(props, ctx);
    let max = indicator_max(data, props.radar.max_value);

    let mut option = base_option(props, ctx);
    option.legend = build_legend(
        props.show_legend,
        props.legend_position,
        &data.series_labels(),
        ctx,
    );
    option.tooltip = build_tooltip(&props.tooltip, ChartType::Radar, ctx);
    option.radar = Some(RadarComponent {
        indicator: data
            .labels
            .iter()
            .map(|label| RadarIndicator {
                name: label.clone(),
                max,
            })
            .collect(),
        shape: props.radar.shape,
        radius: RADAR_RADIUS,
        axis_name: TextStyle::new(ctx.theme.axis_label, ctx.profile.font_size),
        axis_line: AxisLine {
            show: true,
            line_style: LineStyle::colored(ctx.theme.axis_line),
        },
        split_line: SplitLine {
            show: props.show_grid_lines,
            line_style: LineStyle::colored(ctx.theme.grid_line),
        },
        split_area: Toggle { show: false },
    });
    option.series = transform_series(data, ChartType::Radar, &extras);
    debug!(indicators = data.labels.len(), max, "compiled radar chart");
    option
}

/// Shared indicator max: the explicit value, otherwise the largest value of
/// every dataset. A non-positive result falls back to 1.
#[must_use]
pub fn indicator_max(data: &ChartData, explicit: Option<f64>) -> f64 {
    if let Some(max) = explicit.filter(|max| max.is_finite() && *max > 0.0) {
        return max;
    }
    match data.max_value() {
        Some(max) if max > 0.0 => max,
        computed => {
            trace!(?computed, "radar max not positive; using fallback");
            FALLBACK_MAX
        }
    }
}
