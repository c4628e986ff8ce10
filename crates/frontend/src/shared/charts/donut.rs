//! Кольцевая диаграмма с подписями долей и легендой

use super::pie::{centroid, pie_layout, pie_total};
use super::record::MetricRecord;
use super::scene::{truncate_label, ChartScene, HoverInfo, Reveal, Scene, Shape, TextAnchor};
use super::spec::ChartSpec;

const LABEL_FADE_MS: u32 = 300;
const LEGEND_OFFSET_X: f64 = 120.0;
const LEGEND_TOP: f64 = 20.0;
const LEGEND_ROW_HEIGHT: f64 = 20.0;

/// Радиус кольца для контейнера заданного размера
pub fn radius_for(width: f64, height: f64) -> f64 {
    (width.min(height) / 2.0 - 40.0).max(0.0)
}

/// Секторы в порядке записей; нулевая сумма даёт `NoData`
pub fn layout(records: &[MetricRecord], spec: &ChartSpec, size: (f64, f64)) -> ChartScene {
    let Some(series) = spec.primary() else {
        return ChartScene::NoData;
    };
    let values: Vec<f64> = records.iter().map(|r| r.value(series.metric)).collect();
    let Some(slices) = pie_layout(&values) else {
        return ChartScene::NoData;
    };
    let total = pie_total(&values);

    let (width, height) = size;
    let radius = radius_for(width, height);
    let center = (width / 2.0, height / 2.0);
    let mut shapes = Vec::with_capacity(records.len() * 2 + spec.legend_rows * 2);

    for (slice, record) in slices.iter().zip(records) {
        // подсказка показывает исходное значение, даже если сектор нулевой ширины
        let value = record.value(series.metric);
        let percent = value / total * 100.0;
        shapes.push(Shape::Arc {
            key: format!("slice:{}", record.category),
            center,
            inner: radius * 0.5,
            outer: radius,
            hover_outer: radius * 1.05,
            start_angle: slice.start_angle,
            end_angle: slice.end_angle,
            fill: spec.color_at(slice.index).to_string(),
            reveal: Reveal::new(0, spec.animation_ms),
            hover: Some(HoverInfo {
                title: record.category.clone(),
                body: format!("{} ({:.1}%)", spec.format_value(value), percent),
            }),
        });
    }

    for (slice, record) in slices.iter().zip(records) {
        let percent = slice.value / total * 100.0;
        if percent <= spec.label_threshold {
            continue;
        }
        let (dx, dy) = centroid(radius * 0.8, radius * 0.8, slice.start_angle, slice.end_angle);
        shapes.push(Shape::Text {
            key: format!("slice-label:{}", record.category),
            x: center.0 + dx,
            y: center.1 + dy,
            text: format!("{:.0}%", percent),
            anchor: TextAnchor::Middle,
            rotate: None,
            font_size: 10.0,
            fill: "#374151".to_string(),
            reveal: Reveal::new(spec.animation_ms, LABEL_FADE_MS),
        });
    }

    let legend_x = width - LEGEND_OFFSET_X;
    for (index, record) in records.iter().take(spec.legend_rows).enumerate() {
        let row_y = LEGEND_TOP + index as f64 * LEGEND_ROW_HEIGHT;
        shapes.push(Shape::Swatch {
            key: format!("legend-swatch:{}", record.category),
            x: legend_x,
            y: row_y,
            size: 12.0,
            fill: spec.color_at(index).to_string(),
        });
        shapes.push(Shape::Text {
            key: format!("legend-label:{}", record.category),
            x: legend_x + 18.0,
            y: row_y + 10.0,
            text: truncate_label(&record.category, 12, 10),
            anchor: TextAnchor::Start,
            rotate: None,
            font_size: 10.0,
            fill: "#4b5563".to_string(),
            reveal: Reveal::NONE,
        });
    }

    ChartScene::Ready(Scene {
        width,
        height,
        shapes,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::charts::record::{Metric, MetricValues};
    use crate::shared::config::ChartDefaults;
    use std::f64::consts::TAU;

    fn record(label: &str, value: f64) -> MetricRecord {
        MetricRecord::new(label, MetricValues::new().with(Metric::Value, value))
    }

    fn spec() -> ChartSpec {
        ChartSpec::pie(Metric::Value, &ChartDefaults::default())
    }

    fn texts(scene: &Scene, prefix: &str) -> Vec<String> {
        scene
            .shapes
            .iter()
            .filter_map(|s| match s {
                Shape::Text { key, text, .. } if key.starts_with(prefix) => Some(text.clone()),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_zero_total_is_no_data() {
        assert!(layout(&[], &spec(), (400.0, 300.0)).is_no_data());
        let zeros = vec![record("Net", 0.0), record("IVA", 0.0)];
        assert!(layout(&zeros, &spec(), (400.0, 300.0)).is_no_data());
    }

    #[test]
    fn test_every_record_gets_a_slice_and_spans_sum_to_full_circle() {
        let records = vec![record("France", 60.0), record("Spain", 37.0), record("Peru", 3.0), record("Chile", 0.0)];
        let scene = layout(&records, &spec(), (400.0, 300.0));
        let scene = scene.scene().unwrap();
        let spans: Vec<f64> = scene
            .arcs()
            .filter_map(|s| match s {
                Shape::Arc { start_angle, end_angle, .. } => Some(end_angle - start_angle),
                _ => None,
            })
            .collect();
        assert_eq!(spans.len(), 4);
        assert!((spans.iter().sum::<f64>() - TAU).abs() < 1e-9);
        assert_eq!(spans[3], 0.0);
    }

    #[test]
    fn test_labels_only_above_threshold() {
        let records = vec![record("France", 60.0), record("Spain", 37.0), record("Peru", 3.0)];
        let scene = layout(&records, &spec(), (400.0, 300.0));
        let scene = scene.scene().unwrap();
        assert_eq!(texts(scene, "slice-label:"), vec!["60%", "37%"]);

        let hover = scene.arcs().nth(2).and_then(|s| s.hover()).unwrap();
        assert_eq!(hover.body, "3 (3.0%)");
    }

    #[test]
    fn test_negative_value_keeps_its_hover_text() {
        let records = vec![record("Net Revenue", -500.0), record("Commissions", 700.0), record("IVA", 300.0)];
        let scene = layout(&records, &spec(), (400.0, 300.0));
        let scene = scene.scene().unwrap();

        let bodies: Vec<String> = scene
            .arcs()
            .filter_map(|s| s.hover().map(|h| h.body.clone()))
            .collect();
        assert_eq!(bodies, vec!["-500 (-50.0%)", "700 (70.0%)", "300 (30.0%)"]);

        match scene.arcs().next() {
            Some(Shape::Arc { start_angle, end_angle, .. }) => assert_eq!(end_angle - start_angle, 0.0),
            other => panic!("expected an arc, got {:?}", other),
        }
        assert_eq!(texts(scene, "slice-label:"), vec!["70%", "30%"]);
    }

    #[test]
    fn test_legend_is_capped_and_truncated() {
        let records: Vec<MetricRecord> = (0..8)
            .map(|i| record(&format!("Nationality number {}", i), 10.0 - i as f64))
            .collect();
        let scene = layout(&records, &spec(), (500.0, 300.0));
        let labels = texts(scene.scene().unwrap(), "legend-label:");
        assert_eq!(labels.len(), 6);
        assert_eq!(labels[0], "Nationalit...");
    }

    #[test]
    fn test_radius_follows_container() {
        assert_eq!(radius_for(400.0, 300.0), 110.0);
        assert_eq!(radius_for(60.0, 300.0), 0.0);
    }
}
