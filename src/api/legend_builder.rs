use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::render::{LegendBlock, LegendKind, Orient, TextStyle};

use super::CompileContext;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LegendPosition {
    #[default]
    Top,
    Bottom,
    Left,
    Right,
}

impl LegendPosition {
    #[must_use]
    pub const fn orient(self) -> Orient {
        match self {
            Self::Left | Self::Right => Orient::Vertical,
            Self::Top | Self::Bottom => Orient::Horizontal,
        }
    }

    /// `(left, top)` anchors in the renderer's keyword form.
    const fn anchors(self) -> (&'static str, &'static str) {
        match self {
            Self::Top => ("center", "top"),
            Self::Bottom => ("center", "bottom"),
            Self::Left => ("left", "middle"),
            Self::Right => ("right", "middle"),
        }
    }
}

/// Builds the legend block, or `None` when disabled.
///
/// Callers must omit the `legend` key for `None`; an empty block would be
/// shown with no entries.
#[must_use]
pub fn build_legend(
    enabled: bool,
    position: LegendPosition,
    series_labels: &[String],
    ctx: &CompileContext,
) -> Option<LegendBlock> {
    if !enabled {
        return None;
    }

    let (left, top) = position.anchors();
    let kind = if ctx.profile.scroll_legend {
        LegendKind::Scroll
    } else {
        LegendKind::Plain
    };
    trace!(?position, entries = series_labels.len(), "build legend");

    Some(LegendBlock {
        show: true,
        kind,
        orient: position.orient(),
        left,
        top,
        data: series_labels.to_vec(),
        text_style: TextStyle::new(ctx.theme.text, ctx.profile.legend_font_size),
        item_width: 14.0,
        item_height: 14.0,
        item_gap: if ctx.profile.scroll_legend { 8.0 } else { 16.0 },
    })
}
