use approx::assert_relative_eq;
use chart_compiler::api::{
    AreaOptions, BarOptions, ChartProps, LegendPosition, compile, compile_named,
};
use chart_compiler::core::{ChartData, ChartDataset, ChartType, DatasetKind, Target, Theme};
use chart_compiler::render::{AxisKind, COMPILED_OPTION_KEYS, ColorStop, Fill};
use chart_compiler::{ChartError, ChartResult};

fn monthly() -> ChartData {
    ChartData::new(
        ["Jan", "Feb", "Mar"],
        vec![
            ChartDataset::new("revenue", vec![120.0, 200.0, 150.0]),
            ChartDataset::new("costs", vec![80.0, 90.0, 110.0]),
        ],
    )
}

fn compile_ok(
    chart_type: ChartType,
    data: &ChartData,
    props: &ChartProps,
) -> chart_compiler::render::CompiledOption {
    compile(chart_type, Some(data), props)
        .expect("compile")
        .expect("non-empty option")
}

#[test]
fn absent_or_empty_data_is_the_empty_state() -> ChartResult<()> {
    let props = ChartProps::default();
    assert!(compile(ChartType::Line, None, &props)?.is_none());

    let no_datasets = ChartData::new(["a"], Vec::new());
    assert!(compile(ChartType::Bar, Some(&no_datasets), &props)?.is_none());

    let only_empty = ChartData::new(
        ["a", "b"],
        vec![
            ChartDataset::new("x", Vec::new()),
            ChartDataset::new("y", Vec::new()),
        ],
    );
    for chart_type in ChartType::ALL {
        if chart_type == ChartType::Gauge {
            continue;
        }
        assert!(
            compile(chart_type, Some(&only_empty), &props)?.is_none(),
            "{chart_type} should be empty"
        );
    }
    Ok(())
}

#[test]
fn line_chart_has_every_block() {
    let option = compile_ok(ChartType::Line, &monthly(), &ChartProps::default());
    option.validate().expect("valid option");

    assert_eq!(option.series_kinds(), vec!["line", "line"]);
    assert_eq!(option.color[0], "#3b82f6");
    let legend = option.legend.as_ref().expect("legend");
    assert_eq!(legend.data, vec!["revenue", "costs"]);
    assert!(option.grid.is_some());
    assert!(option.tooltip.is_some());

    let x_axis = option.x_axis.as_ref().expect("x axis");
    assert_eq!(x_axis.kind, AxisKind::Category);
    assert_eq!(x_axis.boundary_gap, Some(false));
    assert_eq!(
        x_axis.data.as_deref(),
        Some(&["Jan".to_owned(), "Feb".to_owned(), "Mar".to_owned()][..])
    );
    assert_eq!(option.y_axis.as_ref().expect("y axis").kind, AxisKind::Value);
}

#[test]
fn bar_chart_keeps_boundary_gap_and_horizontal_swaps_axes() {
    let option = compile_ok(ChartType::Bar, &monthly(), &ChartProps::default());
    assert_eq!(
        option.x_axis.as_ref().expect("x axis").boundary_gap,
        Some(true)
    );

    let props = ChartProps::default().with_bar(BarOptions {
        horizontal: true,
        ..BarOptions::default()
    });
    let option = compile_ok(ChartType::Bar, &monthly(), &props);
    assert_eq!(option.x_axis.as_ref().expect("x axis").kind, AxisKind::Value);
    assert_eq!(option.y_axis.as_ref().expect("y axis").kind, AxisKind::Category);
}

#[test]
fn requested_bar_width_is_capped_at_forty() {
    let props = ChartProps::default().with_bar(BarOptions {
        bar_max_width: Some(90.0),
        ..BarOptions::default()
    });
    let option = compile_ok(ChartType::Bar, &monthly(), &props);
    for series in &option.series {
        assert_relative_eq!(series.as_bar().expect("bar").bar_max_width, 40.0);
    }
}

#[test]
fn area_chart_always_has_area_opacity() {
    let option = compile_ok(ChartType::Area, &monthly(), &ChartProps::default());
    for series in &option.series {
        assert_relative_eq!(series.area_opacity(), 0.3);
    }

    let props = ChartProps::default().with_area(AreaOptions {
        opacity: Some(0.6),
        gradient: false,
    });
    let option = compile_ok(ChartType::Area, &monthly(), &props);
    assert_relative_eq!(option.series[0].area_opacity(), 0.6);
}

#[test]
fn area_gradient_fades_resolved_color_to_transparent() {
    let props = ChartProps::default().with_area(AreaOptions {
        opacity: None,
        gradient: true,
    });
    let option = compile_ok(ChartType::Area, &monthly(), &props);
    let line = option.series[0].as_line().expect("line series");
    let fill = line
        .area_style
        .as_ref()
        .and_then(|area| area.color.as_ref())
        .expect("area fill");
    let gradient = fill.as_gradient().expect("gradient fill");

    assert_eq!(
        gradient.first_stop(),
        Some(&ColorStop {
            offset: 0.0,
            color: "#3b82f6".to_owned()
        })
    );
    assert_eq!(
        gradient.last_stop(),
        Some(&ColorStop {
            offset: 1.0,
            color: "rgba(59, 130, 246, 0)".to_owned()
        })
    );
    assert_eq!((gradient.x, gradient.y, gradient.x2, gradient.y2), (0.0, 0.0, 0.0, 1.0));
}

#[test]
fn bar_gradient_ends_translucent() {
    let props = ChartProps::default().with_bar(BarOptions {
        gradient: true,
        ..BarOptions::default()
    });
    let option = compile_ok(ChartType::Bar, &monthly(), &props);
    let bar = option.series[1].as_bar().expect("bar");
    let Some(Fill::Gradient(gradient)) = &bar.item_style.color else {
        panic!("expected gradient fill");
    };
    assert_eq!(gradient.color_stops[0].color, "#10b981");
    assert_eq!(gradient.color_stops[1].color, "rgba(16, 185, 129, 0.6)");
}

#[test]
fn mixed_chart_maps_area_to_filled_line() {
    let data = ChartData::new(
        ["a", "b"],
        vec![
            ChartDataset::new("l", vec![1.0, 2.0]).with_kind(DatasetKind::Line),
            ChartDataset::new("b", vec![1.0, 2.0]).with_kind(DatasetKind::Bar),
            ChartDataset::new("a", vec![1.0, 2.0]).with_kind(DatasetKind::Area),
        ],
    );
    let option = compile_ok(ChartType::Mixed, &data, &ChartProps::default());
    assert_eq!(option.series_kinds(), vec!["line", "bar", "line"]);
    let opacities: Vec<f64> = option.series.iter().map(|s| s.area_opacity()).collect();
    assert_relative_eq!(opacities[0], 0.0);
    assert_relative_eq!(opacities[1], 0.0);
    assert!(opacities[2] > 0.0);
}

#[test]
fn scatter_uses_two_value_axes() {
    let data = ChartData::new(
        ["1", "2", "3"],
        vec![ChartDataset::new("pts", vec![4.0, 5.0, 6.0])],
    );
    let option = compile_ok(ChartType::Scatter, &data, &ChartProps::default());
    assert_eq!(option.x_axis.as_ref().expect("x axis").kind, AxisKind::Value);
    assert_eq!(option.y_axis.as_ref().expect("y axis").kind, AxisKind::Value);
    assert_eq!(option.series_kinds(), vec!["scatter"]);
}

#[test]
fn disabled_legend_and_tooltip_are_omitted_from_json() {
    let props = ChartProps::default()
        .with_legend(false, LegendPosition::Top)
        .with_tooltip(false.into())
        .with_grid(false.into());
    let option = compile_ok(ChartType::Line, &monthly(), &props);
    let json = option.to_json_value().expect("json");
    let object = json.as_object().expect("object");
    assert!(!object.contains_key("legend"));
    assert!(!object.contains_key("tooltip"));
    assert!(!object.contains_key("grid"));
    assert!(!object.contains_key("dataZoom"));
    assert!(object.contains_key("xAxis"));
    assert_eq!(json["series"][0]["type"], "line");
}

#[test]
fn data_zoom_and_axis_names_are_applied() {
    let props = ChartProps::default()
        .with_data_zoom(true)
        .with_axis_labels(Some("Month".to_owned()), Some("USD".to_owned()));
    let option = compile_ok(ChartType::Bar, &monthly(), &props);
    assert_eq!(option.data_zoom.as_ref().map(Vec::len), Some(2));
    assert_eq!(
        option.x_axis.as_ref().expect("x axis").name.as_deref(),
        Some("Month")
    );
    assert_eq!(
        option.y_axis.as_ref().expect("y axis").name.as_deref(),
        Some("USD")
    );
}

#[test]
fn dark_mobile_props_change_structure_colors() {
    let light = compile_ok(ChartType::Line, &monthly(), &ChartProps::default());
    let props = ChartProps::default()
        .with_theme(Theme::Dark)
        .with_target(Target::Mobile);
    let dark = compile_ok(ChartType::Line, &monthly(), &props);

    assert_ne!(light.text_style, dark.text_style);
    assert_eq!(dark.text_style.font_size, Some(10.0));
    assert!(dark.tooltip.as_ref().expect("tooltip").confine);
}

#[test]
fn explicit_colors_replace_scheme() {
    let props = ChartProps::default().with_colors(["#000000", "#ffffff"]);
    let option = compile_ok(ChartType::Line, &monthly(), &props);
    assert_eq!(option.color, vec!["#000000", "#ffffff"]);
    assert_eq!(
        option.series[1].item_color().and_then(Fill::primary_color),
        Some("#ffffff")
    );
}

#[test]
fn extra_options_pass_through() {
    let props = ChartProps::default()
        .with_extra_option("toolbox", serde_json::json!({ "show": true }));
    let option = compile_ok(ChartType::Line, &monthly(), &props);
    let json = option.to_json_value().expect("json");
    assert_eq!(json["toolbox"]["show"], true);
}

#[test]
fn extra_options_cannot_shadow_compiled_keys() {
    for key in ["series", "legend", "xAxis", "color"] {
        let props = ChartProps::default().with_extra_option(key, serde_json::json!([]));
        let err = compile(ChartType::Line, Some(&monthly()), &props).expect_err("collision");
        assert!(
            matches!(&err, ChartError::InvalidData(message) if message.contains(key)),
            "{err}"
        );
    }
}

#[test]
fn compiled_json_keys_are_all_reserved() {
    let props = ChartProps::default()
        .with_data_zoom(true)
        .with_extra_option("toolbox", serde_json::json!({ "show": true }));
    let option = compile_ok(ChartType::Line, &monthly(), &props);
    let json = option.to_json_value().expect("json");
    let keys: Vec<&String> = json
        .as_object()
        .expect("object")
        .keys()
        .filter(|key| key.as_str() != "toolbox")
        .collect();
    assert!(!keys.is_empty());
    for key in keys {
        assert!(COMPILED_OPTION_KEYS.contains(&key.as_str()), "{key}");
    }
}

#[test]
fn unknown_chart_type_name_fails_fast() {
    let err = compile_named("heatmap", Some(&monthly()), &ChartProps::default())
        .expect_err("unsupported chart type");
    assert_eq!(
        err,
        ChartError::UnsupportedChartType {
            name: "heatmap".to_owned()
        }
    );

    let option = compile_named("area", Some(&monthly()), &ChartProps::default())
        .expect("compile")
        .expect("option");
    assert_eq!(option.series_kinds(), vec!["line", "line"]);
}

#[test]
fn compiling_twice_gives_equal_fresh_values() {
    let props = ChartProps::default();
    let first = compile_ok(ChartType::Mixed, &monthly(), &props);
    let second = compile_ok(ChartType::Mixed, &monthly(), &props);
    assert_eq!(first, second);
    assert_eq!(
        first.to_json_pretty().expect("json"),
        second.to_json_pretty().expect("json")
    );
}
