use tracing::{debug, warn};

use crate::core::{ChartData, ChartType};
use crate::render::{CompiledOption, TextStyle, TitleBlock};

use super::chart_compiler::base_option;
use super::{
    ChartProps, CompileContext, SeriesExtras, build_legend, build_tooltip, transform_series,
};

/// Compiles a pie or donut from the first dataset.
///
/// Returns `None` when the first dataset has no values. Further datasets are
/// dropped with a warning; a pie shows one ring.
#[must_use]
pub fn compile_pie(
    family: ChartType,
    data: &ChartData,
    props: &ChartProps,
    ctx: &CompileContext,
) -> Option<CompiledOption> {
    let first = data.datasets.first().filter(|dataset| !dataset.data.is_empty())?;
    if data.datasets.len() > 1 {
        warn!(
            family = %family,
            dropped = data.datasets.len() - 1,
            "pie charts render the first dataset only"
        );
    }

    let single = ChartData {
        labels: data.labels.clone(),
        datasets: vec![first.clone()],
    };
    let extras = SeriesExtras::from_props(props, ctx);
    let series = transform_series(&single, family, &extras);

    let slice_names: Vec<String> = series
        .first()
        .and_then(|series| series.as_pie())
        .map(|pie| pie.data.iter().map(|item| item.name.clone()).collect())
        .unwrap_or_default();

    let mut option = base_option(props, ctx);
    option.title = center_title(props, ctx);
    option.legend = build_legend(props.show_legend, props.legend_position, &slice_names, ctx);
    option.tooltip = build_tooltip(&props.tooltip, family, ctx);
    option.series = series;
    debug!(family = %family, slices = slice_names.len(), "compiled pie chart");
    Some(option)
}

/// Center caption for donuts; nothing when no center text is set.
fn center_title(props: &ChartProps, ctx: &CompileContext) -> Option<TitleBlock> {
    let text = props.pie.center_text.clone()?;
    let mut text_style = TextStyle::new(ctx.theme.text, ctx.profile.font_size * 2.0);
    text_style.font_weight = Some("bold");
    Some(TitleBlock {
        text,
        subtext: props.pie.center_subtext.clone(),
        left: "center",
        top: "center",
        text_style,
    })
}
