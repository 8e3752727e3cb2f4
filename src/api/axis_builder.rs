use tracing::trace;

use crate::render::{
    AxisBlock, AxisKind, AxisLabel, AxisLine, LineStyle, LineType, SplitLine, TextStyle, Toggle,
};

use super::CompileContext;

/// Builds a themed axis.
///
/// Category axes carry `labels` as their data and rotate tick labels once the
/// label count exceeds the target's rotation threshold. Value axes ignore
/// `labels` and draw dashed split lines.
#[must_use]
pub fn build_axis(labels: &[String], kind: AxisKind, ctx: &CompileContext) -> AxisBlock {
    let profile = ctx.profile;
    let rotate = (kind == AxisKind::Category && labels.len() > profile.label_rotation_threshold)
        .then_some(profile.label_rotation_degrees);
    if rotate.is_some() {
        trace!(labels = labels.len(), "rotate category axis labels");
    }

    let data = match kind {
        AxisKind::Category => Some(labels.to_vec()),
        AxisKind::Value => None,
    };

    AxisBlock {
        kind,
        data,
        name: None,
        name_location: None,
        name_gap: None,
        name_text_style: None,
        boundary_gap: None,
        axis_line: AxisLine {
            show: kind == AxisKind::Category,
            line_style: LineStyle::colored(ctx.theme.axis_line),
        },
        axis_tick: Toggle { show: false },
        axis_label: AxisLabel {
            show: true,
            color: ctx.theme.axis_label.to_owned(),
            font_size: profile.font_size,
            rotate,
            interval: rotate.map(|_| 0),
        },
        split_line: SplitLine {
            show: kind == AxisKind::Value,
            line_style: LineStyle {
                color: Some(ctx.theme.grid_line.to_owned()),
                width: None,
                kind: Some(LineType::Dashed),
            },
        },
    }
}

impl AxisBlock {
    /// Adds an axis title centered along the axis.
    #[must_use]
    pub fn with_name(mut self, name: Option<&str>, ctx: &CompileContext) -> Self {
        if let Some(name) = name.filter(|name| !name.is_empty()) {
            self.name = Some(name.to_owned());
            self.name_location = Some("middle");
            self.name_gap = Some(if self.kind == AxisKind::Value { 45.0 } else { 30.0 });
            self.name_text_style =
                Some(TextStyle::new(ctx.theme.axis_label, ctx.profile.font_size));
        }
        self
    }

    #[must_use]
    pub fn with_boundary_gap(mut self, boundary_gap: bool) -> Self {
        self.boundary_gap = Some(boundary_gap);
        self
    }

    #[must_use]
    pub fn with_split_lines(mut self, show: bool) -> Self {
        self.split_line.show = show && self.kind == AxisKind::Value;
        self
    }
}
