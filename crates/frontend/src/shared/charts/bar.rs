//! Столбчатая диаграмма одной метрики по категориям

use super::axis::{category_axis, value_axis};
use super::record::MetricRecord;
use super::scale::{BandScale, LinearScale};
use super::scene::{ChartScene, HoverInfo, Margin, Reveal, Scene, Shape};
use super::spec::ChartSpec;

pub const BAR_MARGIN: Margin = Margin::new(20.0, 30.0, 80.0, 60.0);
const BAR_RADIUS: f64 = 4.0;

/// Раскладывает записи в столбцы; пустой вход даёт `NoData`
pub fn layout(records: &[MetricRecord], spec: &ChartSpec, size: (f64, f64)) -> ChartScene {
    let Some(series) = spec.primary() else {
        return ChartScene::NoData;
    };
    if records.is_empty() {
        return ChartScene::NoData;
    }

    let (width, height) = size;
    let margin = BAR_MARGIN;
    let (inner_width, inner_height) = margin.inner(width, height);

    let x = BandScale::new(
        records.iter().map(|r| r.category.as_str()),
        (0.0, inner_width),
        spec.padding,
    );
    let max = records
        .iter()
        .map(|r| r.value(series.metric))
        .fold(f64::NEG_INFINITY, f64::max);
    let y = LinearScale::from_max(max, spec.headroom, (inner_height, 0.0)).nice(10);

    let mut shapes = value_axis(&y, &margin, inner_width, inner_height, spec);
    let baseline = margin.top + inner_height;

    for record in records {
        let Some(x0) = x.position(&record.category) else {
            continue;
        };
        let value = record.value(series.metric);
        let top = margin.top + y.map(value.max(0.0));
        shapes.push(Shape::Rect {
            key: format!("bar:{}", record.category),
            x: margin.left + x0,
            y: top,
            width: x.bandwidth(),
            height: (baseline - top).max(0.0),
            baseline,
            rx: BAR_RADIUS,
            fill: series.color.clone(),
            reveal: Reveal::new(0, spec.animation_ms),
            hover: Some(HoverInfo {
                title: record.category.clone(),
                body: spec.format_value(value),
            }),
        });
    }

    shapes.extend(category_axis(&x, &margin, inner_width, inner_height));

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
    use crate::shared::charts::spec::ValueFormat;
    use crate::shared::config::ChartDefaults;

    fn records() -> Vec<MetricRecord> {
        vec![
            MetricRecord::new("Casa Azul", MetricValues::new().with(Metric::TotalNights, 95.0)),
            MetricRecord::new("Loft", MetricValues::new().with(Metric::TotalNights, 40.0)),
            MetricRecord::new("Villa", MetricValues::new().with(Metric::TotalNights, 0.0)),
        ]
    }

    fn spec() -> ChartSpec {
        ChartSpec::bar(Metric::TotalNights, "#3b82f6", &ChartDefaults::default())
    }

    #[test]
    fn test_shapes_resolve_through_key_index() {
        let many: Vec<MetricRecord> = (0..300)
            .map(|i| {
                MetricRecord::new(
                    format!("Property {}", i),
                    MetricValues::new().with(Metric::TotalNights, (300 - i) as f64),
                )
            })
            .collect();
        let scene = layout(&many, &spec(), (1200.0, 400.0));
        let scene = scene.scene().unwrap();

        let index = scene.key_index();
        assert_eq!(index.len(), scene.shapes.len());
        for (i, shape) in scene.shapes.iter().enumerate() {
            assert_eq!(index.get(shape.key()), Some(&i));
            assert_eq!(scene.shape_at(&index, shape.key()), Some(shape));
        }
        assert_eq!(scene.shape_at(&index, "bar:Nowhere"), None);
    }

    fn rect_geometry(scene: &Scene) -> Vec<(String, f64, f64, f64, f64)> {
        scene
            .rects()
            .filter_map(|s| match s {
                Shape::Rect {
                    key,
                    x,
                    y,
                    width,
                    height,
                    ..
                } => Some((key.clone(), *x, *y, *width, *height)),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_empty_input_is_no_data() {
        assert_eq!(layout(&[], &spec(), (500.0, 300.0)), ChartScene::NoData);
    }

    #[test]
    fn test_bars_fit_plot_area() {
        let scene = layout(&records(), &spec(), (500.0, 300.0));
        let scene = scene.scene().unwrap();
        let rects = rect_geometry(scene);
        assert_eq!(rects.len(), 3);

        let baseline = BAR_MARGIN.top + (300.0 - BAR_MARGIN.top - BAR_MARGIN.bottom);
        for (_, x, y, width, height) in &rects {
            assert!(*x >= BAR_MARGIN.left);
            assert!(x + width <= 500.0 - BAR_MARGIN.right + 1e-9);
            assert!(*y >= BAR_MARGIN.top);
            assert!((y + height - baseline).abs() < 1e-9);
        }
        // 95 * 1.1 округляется до 110: столбец занимает 95/110 высоты
        let tallest = rects[0].4;
        assert!((tallest - 200.0 * 95.0 / 110.0).abs() < 1e-9);
        assert_eq!(rects[2].4, 0.0);
    }

    #[test]
    fn test_ticks_and_hover_use_format() {
        let spec = spec().with_format(ValueFormat::Currency { symbol: "€" });
        let scene = layout(&records(), &spec, (500.0, 300.0));
        let scene = scene.scene().unwrap();
        let tick_labels: Vec<&str> = scene
            .shapes
            .iter()
            .filter_map(|s| match s {
                Shape::Text { key, text, .. } if key.starts_with("ytick:") => Some(text.as_str()),
                _ => None,
            })
            .collect();
        assert_eq!(tick_labels, vec!["€0", "€20", "€40", "€60", "€80", "€100"]);

        let hover = scene.rects().next().and_then(|s| s.hover()).unwrap();
        assert_eq!(hover.title, "Casa Azul");
        assert_eq!(hover.body, "€95");
    }

    #[test]
    fn test_resize_recomputes_from_scratch() {
        let data = records();
        let spec = spec();
        let mut current = layout(&data, &spec, (500.0, 300.0));
        let first = current.clone();
        for width in [650.0, 720.0] {
            current = layout(&data, &spec, (width, 300.0));
        }
        assert_eq!(current, layout(&data, &spec, (720.0, 300.0)));
        assert_ne!(
            rect_geometry(first.scene().unwrap()),
            rect_geometry(current.scene().unwrap())
        );
    }

    #[test]
    fn test_keys_are_stable_across_sizes() {
        let keys = |width: f64| -> Vec<String> {
            layout(&records(), &spec(), (width, 300.0))
                .scene()
                .map(|s| s.shapes.iter().map(|shape| shape.key().to_string()).collect())
                .unwrap_or_default()
        };
        assert_eq!(keys(400.0), keys(900.0));
    }
}
