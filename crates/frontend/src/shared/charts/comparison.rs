//! Сгруппированные столбцы: несколько метрик по каждой категории на общей шкале

use super::axis::{category_axis, value_axis};
use super::record::MetricRecord;
use super::scale::{BandScale, LinearScale};
use super::scene::{ChartScene, HoverInfo, Margin, Reveal, Scene, Shape, TextAnchor};
use super::spec::ChartSpec;

pub const COMPARISON_MARGIN: Margin = Margin::new(40.0, 30.0, 80.0, 60.0);
const SERIES_DELAY_MS: u32 = 100;
const LEGEND_ITEM_WIDTH: f64 = 120.0;

pub fn layout(records: &[MetricRecord], spec: &ChartSpec, size: (f64, f64)) -> ChartScene {
    if records.is_empty() || spec.series.is_empty() {
        return ChartScene::NoData;
    }

    let (width, height) = size;
    let margin = COMPARISON_MARGIN;
    let (inner_width, inner_height) = margin.inner(width, height);

    let x = BandScale::new(
        records.iter().map(|r| r.category.as_str()),
        (0.0, inner_width),
        spec.padding,
    );
    let max = spec
        .series
        .iter()
        .flat_map(|s| records.iter().map(move |r| r.value(s.metric)))
        .fold(f64::NEG_INFINITY, f64::max);
    let y = LinearScale::from_max(max, spec.headroom, (inner_height, 0.0)).nice(10);

    let mut shapes = value_axis(&y, &margin, inner_width, inner_height, spec);
    let baseline = margin.top + inner_height;
    let sub = x.sub_band_width(spec.series.len());

    for (series_index, series) in spec.series.iter().enumerate() {
        let reveal = Reveal::new(series_index as u32 * SERIES_DELAY_MS, spec.animation_ms);
        for record in records {
            let Some(x0) = x.position(&record.category) else {
                continue;
            };
            let value = record.value(series.metric);
            let top = margin.top + y.map(value.max(0.0));
            shapes.push(Shape::Rect {
                key: format!("bar:{}:{}", series.metric.key(), record.category),
                x: margin.left + x0 + series_index as f64 * sub,
                y: top,
                width: (sub - 2.0).max(0.0),
                height: (baseline - top).max(0.0),
                baseline,
                rx: 2.0,
                fill: series.color.clone(),
                reveal,
                hover: Some(HoverInfo {
                    title: record.category.clone(),
                    body: format!("{}: {}", series.label, spec.format_value(value)),
                }),
            });
        }
    }

    shapes.extend(category_axis(&x, &margin, inner_width, inner_height));

    // Легенда над областью построения, по одному элементу на серию
    let legend_x = margin.left + inner_width - 150.0;
    let legend_y = margin.top - 25.0;
    for (index, series) in spec.series.iter().enumerate() {
        let item_x = legend_x + index as f64 * LEGEND_ITEM_WIDTH;
        shapes.push(Shape::Swatch {
            key: format!("legend-swatch:{}", series.metric.key()),
            x: item_x,
            y: legend_y,
            size: 12.0,
            fill: series.color.clone(),
        });
        shapes.push(Shape::Text {
            key: format!("legend-label:{}", series.metric.key()),
            x: item_x + 18.0,
            y: legend_y + 10.0,
            text: series.label.clone(),
            anchor: TextAnchor::Start,
            rotate: None,
            font_size: 11.0,
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
    use crate::shared::charts::spec::{SeriesSpec, ValueFormat};
    use crate::shared::config::ChartDefaults;

    fn spec() -> ChartSpec {
        ChartSpec::comparison(
            vec![
                SeriesSpec::new(Metric::NetValue, "#10b981", "Net Revenue"),
                SeriesSpec::new(Metric::Commission, "#ef4444", "Commission"),
            ],
            &ChartDefaults::default(),
        )
        .with_format(ValueFormat::Currency { symbol: "€" })
    }

    fn records() -> Vec<MetricRecord> {
        vec![
            MetricRecord::new(
                "Casa Azul",
                MetricValues::new()
                    .with(Metric::NetValue, 800.0)
                    .with(Metric::Commission, 150.0),
            ),
            MetricRecord::new(
                "Loft",
                MetricValues::new()
                    .with(Metric::NetValue, 300.0)
                    .with(Metric::Commission, 60.0),
            ),
        ]
    }

    #[test]
    fn test_no_data() {
        assert!(layout(&[], &spec(), (600.0, 300.0)).is_no_data());
        let mut no_series = spec();
        no_series.series.clear();
        assert!(layout(&records(), &no_series, (600.0, 300.0)).is_no_data());
    }

    #[test]
    fn test_sub_bars_share_one_band() {
        let scene = layout(&records(), &spec(), (600.0, 300.0));
        let scene = scene.scene().unwrap();
        let rects: Vec<_> = scene.rects().collect();
        assert_eq!(rects.len(), 4);

        let geometry = |key: &str| {
            scene.shapes.iter().find_map(|s| match s {
                Shape::Rect { key: k, x, width, height, reveal, .. } if k == key => {
                    Some((*x, *width, *height, *reveal))
                }
                _ => None,
            })
        };
        let (net_x, net_w, net_h, net_reveal) = geometry("bar:net_value:Casa Azul").unwrap();
        let (com_x, _, com_h, com_reveal) = geometry("bar:commission:Casa Azul").unwrap();
        assert!(com_x > net_x + net_w);
        assert!(net_h > com_h);
        assert_eq!(net_reveal.delay_ms, 0);
        assert_eq!(com_reveal.delay_ms, SERIES_DELAY_MS);
    }

    #[test]
    fn test_hover_names_series() {
        let scene = layout(&records(), &spec(), (600.0, 300.0));
        let bodies: Vec<String> = scene
            .scene()
            .unwrap()
            .rects()
            .filter_map(|s| s.hover().map(|h| h.body.clone()))
            .collect();
        assert!(bodies.contains(&"Net Revenue: €800".to_string()));
        assert!(bodies.contains(&"Commission: €60".to_string()));
    }
}
