use serde::{Deserialize, Serialize};

use crate::core::ChartType;
use crate::render::{AxisPointer, AxisPointerKind, TextStyle, TooltipBlock, TooltipTrigger};

use super::{BoolOr, CompileContext};

pub const PIE_TOOLTIP_FORMATTER: &str = "{b}: {c} ({d}%)";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TooltipConfig {
    /// Overrides the family default trigger.
    pub trigger: Option<TooltipTrigger>,
    pub formatter: Option<String>,
    pub axis_pointer: Option<AxisPointerKind>,
}

/// Default trigger: `axis` for cartesian families, `item` otherwise.
#[must_use]
pub const fn default_trigger(family: ChartType) -> TooltipTrigger {
    if family.is_cartesian() {
        TooltipTrigger::Axis
    } else {
        TooltipTrigger::Item
    }
}

#[must_use]
pub fn build_tooltip(
    tooltip: &BoolOr<TooltipConfig>,
    family: ChartType,
    ctx: &CompileContext,
) -> Option<TooltipBlock> {
    let config = tooltip.resolve()?;
    let trigger = config.trigger.unwrap_or_else(|| default_trigger(family));

    let axis_pointer = (trigger == TooltipTrigger::Axis).then(|| {
        let kind = config.axis_pointer.unwrap_or(match family {
            ChartType::Bar | ChartType::Mixed => AxisPointerKind::Shadow,
            _ => AxisPointerKind::Line,
        });
        AxisPointer { kind }
    });

    let formatter = config.formatter.or_else(|| {
        matches!(family, ChartType::Pie | ChartType::Donut)
            .then(|| PIE_TOOLTIP_FORMATTER.to_owned())
    });

    Some(TooltipBlock {
        show: true,
        trigger,
        background_color: ctx.theme.tooltip_background.to_owned(),
        border_color: ctx.theme.tooltip_border.to_owned(),
        border_width: 1.0,
        text_style: TextStyle::new(ctx.theme.tooltip_text, ctx.profile.font_size),
        confine: ctx.profile.tooltip_confine,
        axis_pointer,
        formatter,
    })
}
