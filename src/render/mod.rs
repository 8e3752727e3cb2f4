mod fill;
mod layout;
mod null_renderer;
mod option;
mod series;

pub use fill::{ColorStop, Fill, LinearGradient};
pub use layout::{
    AxisBlock, AxisKind, AxisLabel, AxisLine, AxisPointer, AxisPointerKind, DataZoomBlock,
    DataZoomKind, GridBlock, LegendBlock, LegendKind, LineStyle, LineType, Orient,
    RadarComponent, RadarIndicator, RadarShape, SplitLine, TextStyle, TitleBlock, Toggle,
    TooltipBlock, TooltipTrigger,
};
pub use null_renderer::NullOptionRenderer;
pub use option::{COMPILED_OPTION_KEYS, CompiledOption};
pub use series::{
    AreaStyle, BarSeries, BorderRadius, Emphasis, GaugeAxisLabel, GaugeAxisLine, GaugeDataItem,
    GaugeDetail, GaugeLineStyle, GaugePointer, GaugeProgress, GaugeSeries, GaugeTitle, ItemStyle,
    LineSeries, PieDataItem, PieSeries, RadarDataItem, RadarSeries, ScatterSeries, SeriesLabel,
    SeriesOption,
};

use crate::error::ChartResult;

/// Contract implemented by a host adapter's engine binding.
///
/// Bindings receive a fully compiled `CompiledOption` so engine code stays
/// isolated from chart-family logic.
pub trait OptionRenderer {
    fn set_option(&mut self, option: &CompiledOption) -> ChartResult<()>;

    /// Drops whatever is currently shown, e.g. before an empty-state placeholder.
    fn clear(&mut self);
}
