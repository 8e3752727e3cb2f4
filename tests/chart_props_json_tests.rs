use chart_compiler::ChartError;
use chart_compiler::api::{BoolOr, ChartProps, LegendPosition, TooltipConfig};
use chart_compiler::core::{ColorSchemeName, Dimension, Target, Theme};
use chart_compiler::render::TooltipTrigger;

#[test]
fn empty_object_yields_defaults() {
    let props = ChartProps::from_json_str("{}").expect("defaults");
    assert_eq!(props, ChartProps::default());
    assert!(props.show_legend);
    assert!(props.animation);
    assert_eq!(props.empty_text, "No data available");
}

#[test]
fn camel_case_props_are_parsed() {
    let props = ChartProps::from_json_str(
        r#"{
            "theme": "dark",
            "colorScheme": "vivid",
            "target": "mobile",
            "legendPosition": "right",
            "grid": false,
            "tooltip": { "trigger": "item" },
            "width": "320px",
            "height": 240,
            "bar": { "horizontal": true, "showValues": true },
            "gauge": { "value": 40, "unit": "rpm" },
            "extraOptions": { "toolbox": { "show": true } }
        }"#,
    )
    .expect("props");

    assert_eq!(props.theme, Theme::Dark);
    assert_eq!(props.color_scheme, ColorSchemeName::Vivid);
    assert_eq!(props.target, Target::Mobile);
    assert_eq!(props.legend_position, LegendPosition::Right);
    assert_eq!(props.grid, BoolOr::Bool(false));
    assert_eq!(
        props.tooltip,
        BoolOr::Config(TooltipConfig {
            trigger: Some(TooltipTrigger::Item),
            ..TooltipConfig::default()
        })
    );
    assert_eq!(props.width, Some(Dimension::Px(320.0)));
    assert_eq!(props.height, Some(Dimension::Px(240.0)));
    assert!(props.bar.horizontal);
    assert!(props.bar.show_values);
    assert_eq!(props.bar.border_radius, 4.0);
    assert_eq!(props.gauge.value, Some(40.0));
    assert_eq!(props.gauge.max, 100.0);
    assert!(props.extra_options.contains_key("toolbox"));
}

#[test]
fn props_survive_a_json_round_trip() {
    let props = ChartProps::default()
        .with_theme(Theme::Dark)
        .with_colors(["#123456"])
        .with_stacked(true)
        .with_size(Some(Dimension::Percent(80.0)), Some(Dimension::Px(360.0)));
    let json = props.to_json_pretty().expect("serialize");
    let restored = ChartProps::from_json_str(&json).expect("parse");
    assert_eq!(restored, props);
}

#[test]
fn unknown_scheme_in_json_is_rejected() {
    let err = ChartProps::from_json_str(r#"{ "colorScheme": "neon" }"#).expect_err("bad scheme");
    assert_eq!(
        err,
        ChartError::InvalidScheme {
            name: "neon".to_owned()
        }
    );

    let nested: Result<ChartProps, _> =
        serde_json::from_str(r#"{ "colorScheme": "neon" }"#);
    let message = nested.expect_err("bad scheme").to_string();
    assert!(message.contains("unknown color scheme: `neon`"), "{message}");
}

#[test]
fn invalid_values_fail_validation() {
    let cases = [
        r#"{ "colors": [] }"#,
        r#"{ "area": { "opacity": 1.5 } }"#,
        r#"{ "bar": { "barMaxWidth": 0 } }"#,
        r#"{ "radar": { "maxValue": -3 } }"#,
        r#"{ "gauge": { "min": 10, "max": 10 } }"#,
        r#"{ "gauge": { "splitNumber": 0 } }"#,
        r#"{ "width": "wide" }"#,
    ];
    for case in cases {
        let err = ChartProps::from_json_str(case).expect_err(case);
        assert!(matches!(err, ChartError::InvalidData(_)), "{case}: {err}");
    }
}
