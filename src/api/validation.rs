use crate::error::{ChartError, ChartResult};
use crate::render::COMPILED_OPTION_KEYS;

use super::{ChartProps, GaugeColor, GaugeOptions};

pub(super) fn validate_chart_props(props: &ChartProps) -> ChartResult<()> {
    if let Some(colors) = &props.colors {
        if colors.is_empty() {
            return Err(ChartError::InvalidData(
                "explicit palette must contain at least one color".to_owned(),
            ));
        }
    }

    if let Some(opacity) = props.area.opacity {
        validate_opacity("area opacity", opacity)?;
    }
    if let Some(opacity) = props.radar.fill_opacity {
        validate_opacity("radar fill opacity", opacity)?;
    }

    if let Some(width) = props.bar.bar_max_width {
        if !width.is_finite() || width <= 0.0 {
            return Err(ChartError::InvalidData(
                "bar max width must be finite and > 0".to_owned(),
            ));
        }
    }
    if !props.bar.border_radius.is_finite() || props.bar.border_radius < 0.0 {
        return Err(ChartError::InvalidData(
            "bar border radius must be finite and >= 0".to_owned(),
        ));
    }

    if let Some(max_value) = props.radar.max_value {
        if !max_value.is_finite() || max_value <= 0.0 {
            return Err(ChartError::InvalidData(
                "radar max value must be finite and > 0".to_owned(),
            ));
        }
    }

    if let Some(size) = props.scatter.symbol_size {
        if !size.is_finite() || size <= 0.0 {
            return Err(ChartError::InvalidData(
                "scatter symbol size must be finite and > 0".to_owned(),
            ));
        }
    }

    if let Some(key) = props
        .extra_options
        .keys()
        .find(|key| COMPILED_OPTION_KEYS.contains(&key.as_str()))
    {
        return Err(ChartError::InvalidData(format!(
            "extra option `{key}` collides with a compiled option key"
        )));
    }

    validate_gauge_options(&props.gauge)
}

fn validate_gauge_options(gauge: &GaugeOptions) -> ChartResult<()> {
    if !gauge.min.is_finite() || !gauge.max.is_finite() || gauge.min >= gauge.max {
        return Err(ChartError::InvalidData(format!(
            "gauge bounds must be finite with min < max (min={}, max={})",
            gauge.min, gauge.max
        )));
    }
    if gauge.split_number == 0 {
        return Err(ChartError::InvalidData(
            "gauge split number must be > 0".to_owned(),
        ));
    }
    if !gauge.arc_width.is_finite() || gauge.arc_width <= 0.0 {
        return Err(ChartError::InvalidData(
            "gauge arc width must be finite and > 0".to_owned(),
        ));
    }
    for zone in &gauge.zones {
        if !zone.to.is_finite() {
            return Err(ChartError::InvalidData(
                "gauge zone bound must be finite".to_owned(),
            ));
        }
    }
    if let Some(GaugeColor::Stops(stops)) = &gauge.color {
        if stops.is_empty() {
            return Err(ChartError::InvalidData(
                "gauge color stops must not be empty".to_owned(),
            ));
        }
    }
    Ok(())
}

fn validate_opacity(name: &str, opacity: f64) -> ChartResult<()> {
    if !opacity.is_finite() || opacity <= 0.0 || opacity > 1.0 {
        return Err(ChartError::InvalidData(format!(
            "{name} must be finite and in (0, 1]"
        )));
    }
    Ok(())
}

