mod axis_builder;
mod cartesian_compiler;
mod chart_compiler;
mod chart_controller;
mod chart_props;
mod compile_context;
mod data_zoom_builder;
mod gauge_compiler;
mod grid_builder;
mod json_contract;
mod legend_builder;
mod percentage_formatter;
mod pie_compiler;
mod radar_compiler;
mod series_transformer;
mod tooltip_builder;
mod validation;

pub use axis_builder::build_axis;
pub use cartesian_compiler::compile_cartesian;
pub use chart_compiler::{compile, compile_named};
pub use chart_controller::{ChartController, ChartView};
pub use chart_props::{
    AreaOptions, BarOptions, BoolOr, ChartProps, DEFAULT_EMPTY_TEXT, GaugeColor, GaugeOptions,
    GaugeZone, PieOptions, RadarOptions, ScatterOptions,
};
pub use compile_context::CompileContext;
pub use data_zoom_builder::build_data_zoom;
pub use gauge_compiler::{axis_line_stops, compile_gauge, default_formatter, gauge_series};
pub use grid_builder::{DEFAULT_GRID, GridConfig, build_grid};
pub use json_contract::{
    COMPILED_OPTION_JSON_SCHEMA_V1, CompiledOptionJsonContractV1,
    option_value_from_json_compat_str,
};
pub use legend_builder::{LegendPosition, build_legend};
pub use percentage_formatter::{finite_total, format_percentage, format_percentages};
pub use pie_compiler::compile_pie;
pub use radar_compiler::{compile_radar, indicator_max};
pub use series_transformer::{
    SeriesExtras, area_gradient, area_style, bar_gradient, resolve_dataset_color,
    transform_series,
};
pub use tooltip_builder::{PIE_TOOLTIP_FORMATTER, TooltipConfig, build_tooltip, default_trigger};
