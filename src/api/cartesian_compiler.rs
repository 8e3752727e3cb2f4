use tracing::debug;

use crate::core::{ChartData, ChartType};
use crate::render::{AxisKind, CompiledOption};

use super::chart_compiler::base_option;
use super::{
    ChartProps, CompileContext, SeriesExtras, build_axis, build_data_zoom, build_grid,
    build_legend, build_tooltip, transform_series,
};

/// Compiles line, bar, area, scatter and mixed charts onto one grid.
///
/// Horizontal bars swap the category and value axes. Scatter plots use two
/// value axes. Line and area axes start at the first label
/// (`boundaryGap: false`).
#[must_use]
pub fn compile_cartesian(
    family: ChartType,
    data: &ChartData,
    props: &ChartProps,
    ctx: &CompileContext,
) -> CompiledOption {
    let extras = SeriesExtras::from_props(props, ctx);
    let horizontal = family == ChartType::Bar && props.bar.horizontal;

    let mut option = base_option(props, ctx);
    option.legend = build_legend(
        props.show_legend,
        props.legend_position,
        &data.series_labels(),
        ctx,
    );
    option.grid = build_grid(&props.grid);
    option.tooltip = build_tooltip(&props.tooltip, family, ctx);

    let x_name = props.x_axis_label.as_deref();
    let y_name = props.y_axis_label.as_deref();
    let (x_axis, y_axis) = if family == ChartType::Scatter {
        (
            build_axis(&[], AxisKind::Value, ctx),
            build_axis(&[], AxisKind::Value, ctx),
        )
    } else {
        let category = build_axis(&data.labels, AxisKind::Category, ctx)
            .with_boundary_gap(!matches!(family, ChartType::Line | ChartType::Area));
        let value = build_axis(&data.labels, AxisKind::Value, ctx);
        if horizontal {
            (value, category)
        } else {
            (category, value)
        }
    };
    option.x_axis = Some(
        x_axis
            .with_name(x_name, ctx)
            .with_split_lines(props.show_grid_lines),
    );
    option.y_axis = Some(
        y_axis
            .with_name(y_name, ctx)
            .with_split_lines(props.show_grid_lines),
    );

    option.data_zoom = build_data_zoom(props.data_zoom, horizontal);
    option.series = transform_series(data, family, &extras);
    debug!(
        family = %family,
        series = option.series.len(),
        horizontal,
        "compiled cartesian chart"
    );
    option
}
