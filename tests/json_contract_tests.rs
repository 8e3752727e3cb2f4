use chart_compiler::api::{
    COMPILED_OPTION_JSON_SCHEMA_V1, ChartProps, compile, option_value_from_json_compat_str,
};
use chart_compiler::core::{ChartData, ChartDataset, ChartType};
use chart_compiler::render::{CompiledOption, NullOptionRenderer, OptionRenderer};

fn compiled() -> CompiledOption {
    let data = ChartData::new(
        ["x", "y"],
        vec![ChartDataset::new("series", vec![1.0, 2.0])],
    );
    compile(ChartType::Bar, Some(&data), &ChartProps::default())
        .expect("compile")
        .expect("option")
}

#[test]
fn contract_v1_wraps_option_with_schema_version() {
    let option = compiled();
    let json = option.to_json_contract_v1_pretty().expect("contract json");
    let value: serde_json::Value = serde_json::from_str(&json).expect("valid json");

    assert_eq!(value["schemaVersion"], COMPILED_OPTION_JSON_SCHEMA_V1);
    assert_eq!(value["option"]["series"][0]["type"], "bar");
    assert_eq!(value["option"]["backgroundColor"], "transparent");
}

#[test]
fn compat_reader_accepts_envelope_and_bare_option() {
    let option = compiled();
    let bare = option.to_json_value().expect("bare value");

    let from_envelope =
        option_value_from_json_compat_str(&option.to_json_contract_v1_pretty().expect("contract"))
            .expect("envelope");
    assert_eq!(from_envelope, bare);

    let from_bare =
        option_value_from_json_compat_str(&option.to_json_pretty().expect("json")).expect("bare");
    assert_eq!(from_bare, bare);
}

#[test]
fn compat_reader_rejects_unknown_versions() {
    let err = option_value_from_json_compat_str(r#"{ "schemaVersion": 2, "option": {} }"#)
        .expect_err("unsupported version");
    assert!(err.to_string().contains("unsupported option schema version"));
    assert!(option_value_from_json_compat_str("not json").is_err());
}

#[test]
fn null_renderer_validates_and_records() {
    let option = compiled();
    let mut renderer = NullOptionRenderer::default();
    renderer.set_option(&option).expect("valid option");
    assert_eq!(renderer.set_option_calls, 1);
    assert_eq!(renderer.last_option.as_ref(), Some(&option));

    let mut axisless = option.clone();
    axisless.x_axis = None;
    assert!(renderer.set_option(&axisless).is_err());

    renderer.clear();
    assert_eq!(renderer.clear_calls, 1);
    assert_eq!(renderer.last_series_count, 0);
}
