use tracing::debug;

use crate::core::{ChartData, ChartType};
use crate::error::ChartResult;
use crate::render::{CompiledOption, TextStyle};

use super::cartesian_compiler::compile_cartesian;
use super::gauge_compiler::compile_gauge;
use super::pie_compiler::compile_pie;
use super::radar_compiler::compile_radar;
use super::{ChartProps, CompileContext};

/// Compiles one chart description into a renderer-ready option.
///
/// Props are validated first; configuration errors fail fast. Absent data,
/// no datasets, or only empty datasets yield `Ok(None)` (the empty state),
/// except for gauges, which read their value from `props.gauge`.
pub fn compile(
    chart_type: ChartType,
    data: Option<&ChartData>,
    props: &ChartProps,
) -> ChartResult<Option<CompiledOption>> {
    props.validate()?;
    let ctx = CompileContext::from_props(props);

    if chart_type == ChartType::Gauge {
        return Ok(Some(compile_gauge(props, &ctx)));
    }

    let Some(data) = data.filter(|data| !data.is_empty()) else {
        debug!(family = %chart_type, "no data to compile");
        return Ok(None);
    };

    let option = match chart_type {
        family if family.is_cartesian() => Some(compile_cartesian(family, data, props, &ctx)),
        ChartType::Pie | ChartType::Donut => compile_pie(chart_type, data, props, &ctx),
        ChartType::Radar => Some(compile_radar(data, props, &ctx)),
        _ => Some(compile_gauge(props, &ctx)),
    };

    debug!(
        family = %chart_type,
        labels = data.labels.len(),
        datasets = data.datasets.len(),
        compiled = option.is_some(),
        "compile chart"
    );
    Ok(option)
}

/// Same as [`compile`] with the chart type given by name.
pub fn compile_named(
    chart_type: &str,
    data: Option<&ChartData>,
    props: &ChartProps,
) -> ChartResult<Option<CompiledOption>> {
    let chart_type: ChartType = chart_type.parse()?;
    compile(chart_type, data, props)
}

/// Global blocks shared by every family: palette, animation, base text
/// style, and host pass-through keys.
pub(super) fn base_option(props: &ChartProps, ctx: &CompileContext) -> CompiledOption {
    let mut option = CompiledOption::new(
        ctx.palette.clone(),
        props.animation,
        TextStyle::new(ctx.theme.text, ctx.profile.font_size),
    );
    option.extensions = props.extra_options.clone();
    option
}
