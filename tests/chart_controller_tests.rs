use chart_compiler::api::{ChartController, ChartProps, ChartView};
use chart_compiler::core::{ChartData, ChartDataset, ChartType, Theme};
use chart_compiler::render::{CompiledOption, NullOptionRenderer, TextStyle};

fn sample() -> ChartData {
    ChartData::new(
        ["a", "b", "c"],
        vec![ChartDataset::new("visits", vec![3.0, 7.0, 5.0])],
    )
}

#[test]
fn equal_inputs_do_not_recompile() {
    let mut controller = ChartController::new(NullOptionRenderer::default());
    let data = sample();
    let props = ChartProps::default();

    assert!(controller
        .update(ChartType::Line, Some(&data), &props)
        .expect("first update"));
    assert!(!controller
        .update(ChartType::Line, Some(&data.clone()), &props.clone())
        .expect("second update"));

    assert_eq!(controller.compile_count(), 1);
    assert_eq!(controller.renderer().set_option_calls, 1);
    assert_eq!(controller.renderer().last_series_count, 1);
}

#[test]
fn nan_samples_do_not_force_a_recompile() {
    let mut controller = ChartController::new(NullOptionRenderer::default());
    let data = ChartData::new(
        ["a", "b", "c"],
        vec![ChartDataset::new("gaps", vec![3.0, f64::NAN, 5.0])],
    );
    let props = ChartProps::default();

    assert!(controller
        .update(ChartType::Line, Some(&data), &props)
        .expect("first update"));
    assert!(!controller
        .update(ChartType::Line, Some(&data.clone()), &props)
        .expect("second update"));
    assert_eq!(controller.compile_count(), 1);
}

#[test]
fn changed_props_or_type_recompile() {
    let mut controller = ChartController::new(NullOptionRenderer::default());
    let data = sample();

    controller
        .update(ChartType::Line, Some(&data), &ChartProps::default())
        .expect("line");
    controller
        .update(
            ChartType::Line,
            Some(&data),
            &ChartProps::default().with_theme(Theme::Dark),
        )
        .expect("dark line");
    controller
        .update(
            ChartType::Bar,
            Some(&data),
            &ChartProps::default().with_theme(Theme::Dark),
        )
        .expect("dark bar");

    assert_eq!(controller.compile_count(), 3);
    let option = controller.option().expect("option");
    assert_eq!(option.series_kinds(), vec!["bar"]);
}

#[test]
fn empty_data_clears_and_shows_placeholder() {
    let mut controller = ChartController::new(NullOptionRenderer::default());
    controller
        .update(ChartType::Line, Some(&sample()), &ChartProps::default())
        .expect("line");
    controller
        .update(ChartType::Line, None, &ChartProps::default())
        .expect("empty");

    assert_eq!(controller.renderer().clear_calls, 1);
    assert!(controller.renderer().last_option.is_none());
    assert_eq!(
        controller.view(),
        ChartView::Empty {
            text: "No data available"
        }
    );
}

#[test]
fn loading_wins_over_ready() {
    let mut controller = ChartController::new(NullOptionRenderer::default());
    controller
        .update(ChartType::Pie, Some(&sample()), &ChartProps::default())
        .expect("pie");
    assert!(matches!(controller.view(), ChartView::Ready(_)));

    controller.set_loading(true);
    assert_eq!(controller.view(), ChartView::Loading);
    controller.set_loading(false);
    assert!(matches!(controller.view(), ChartView::Ready(_)));
}

#[test]
fn failed_update_keeps_previous_state() {
    let mut controller = ChartController::new(NullOptionRenderer::default());
    controller
        .update(ChartType::Line, Some(&sample()), &ChartProps::default())
        .expect("line");

    let broken = ChartProps::default().with_colors(Vec::<String>::new());
    controller
        .update(ChartType::Line, Some(&sample()), &broken)
        .expect_err("empty palette must fail");

    assert_eq!(controller.compile_count(), 1);
    assert!(controller.option().is_some());
}

#[test]
fn view_resolution_rules() {
    let option = CompiledOption::new(vec!["#3b82f6".to_owned()], true, TextStyle::default());
    assert_eq!(ChartView::resolve(true, Some(&option), None), ChartView::Loading);
    assert_eq!(
        ChartView::resolve(false, Some(&option), None),
        ChartView::Ready(&option)
    );
    assert_eq!(
        ChartView::resolve(false, None, Some("Nothing yet")),
        ChartView::Empty {
            text: "Nothing yet"
        }
    );
    assert_eq!(
        ChartView::resolve(false, None, None),
        ChartView::Empty {
            text: "No data available"
        }
    );
}
