use chart_compiler::api::{SeriesExtras, format_percentages, transform_series};
use chart_compiler::core::{ChartData, ChartDataset, ChartType};
use chart_compiler::render::SeriesOption;
use proptest::prelude::*;

fn palette_of(size: usize) -> Vec<String> {
    (0..size).map(|i| format!("#{:06x}", i * 0x111111)).collect()
}

proptest! {
    #[test]
    fn one_series_per_dataset_with_wrapped_palette(
        dataset_count in 1usize..12,
        palette_size in 1usize..6,
    ) {
        let palette = palette_of(palette_size);
        let datasets = (0..dataset_count)
            .map(|i| ChartDataset::new(format!("d{i}"), vec![i as f64]))
            .collect();
        let data = ChartData::new(["only"], datasets);
        let extras = SeriesExtras::default().with_palette(palette.clone());

        let series = transform_series(&data, ChartType::Bar, &extras);
        prop_assert_eq!(series.len(), dataset_count);
        for (index, series) in series.iter().enumerate() {
            let expected_name = format!("d{index}");
            prop_assert_eq!(series.name(), expected_name.as_str());
            let color = series.item_color().and_then(|fill| fill.primary_color());
            prop_assert_eq!(color, Some(palette[index % palette_size].as_str()));
        }
    }

    #[test]
    fn category_series_never_exceed_label_count(
        label_count in 1usize..10,
        values in prop::collection::vec(-1_000.0f64..1_000.0, 0..20),
    ) {
        let labels: Vec<String> = (0..label_count).map(|i| format!("L{i}")).collect();
        let data = ChartData::new(labels, vec![ChartDataset::new("s", values.clone())]);

        for family in [ChartType::Line, ChartType::Bar, ChartType::Area, ChartType::Mixed] {
            let series = transform_series(&data, family, &SeriesExtras::default());
            prop_assert_eq!(series[0].len(), values.len().min(label_count));
        }
    }

    #[test]
    fn area_series_always_have_visible_fill(
        opacity in 0.01f64..=1.0,
        dataset_count in 1usize..6,
    ) {
        let datasets = (0..dataset_count)
            .map(|i| ChartDataset::new(format!("d{i}"), vec![1.0, 2.0]))
            .collect();
        let data = ChartData::new(["a", "b"], datasets);
        let extras = SeriesExtras { area_opacity: opacity, ..SeriesExtras::default() };

        for series in transform_series(&data, ChartType::Area, &extras) {
            prop_assert!(matches!(series, SeriesOption::Line(_)));
            prop_assert!(series.area_opacity() > 0.0);
        }
    }

    #[test]
    fn percentages_are_finite_one_decimal_labels(
        values in prop::collection::vec(0.0f64..10_000.0, 1..12),
    ) {
        let labels = format_percentages(&values);
        prop_assert_eq!(labels.len(), values.len());

        let mut sum = 0.0;
        for label in &labels {
            let number = label.strip_suffix('%').expect("percent suffix");
            let (_, decimals) = number.split_once('.').expect("one decimal");
            prop_assert_eq!(decimals.len(), 1);
            let parsed: f64 = number.parse().expect("numeric label");
            prop_assert!((0.0..=100.0).contains(&parsed));
            sum += parsed;
        }

        let total: f64 = values.iter().sum();
        if total > 0.0 {
            prop_assert!((sum - 100.0).abs() <= 0.05 * values.len() as f64 + 1e-9);
        } else {
            prop_assert!(sum == 0.0);
        }
    }
}
