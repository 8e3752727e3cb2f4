use crate::render::{DataZoomBlock, DataZoomKind};

/// Inside + slider zoom on the category axis (`y` for horizontal bars).
#[must_use]
pub fn build_data_zoom(enabled: bool, horizontal: bool) -> Option<Vec<DataZoomBlock>> {
    if !enabled {
        return None;
    }
    let (x_axis_index, y_axis_index) = if horizontal {
        (None, Some(0))
    } else {
        (Some(0), None)
    };

    Some(vec![
        DataZoomBlock {
            kind: DataZoomKind::Inside,
            x_axis_index,
            y_axis_index,
            start: 0.0,
            end: 100.0,
            height: None,
        },
        DataZoomBlock {
            kind: DataZoomKind::Slider,
            x_axis_index,
            y_axis_index,
            start: 0.0,
            end: 100.0,
            height: Some(20.0),
        },
    ])
}
