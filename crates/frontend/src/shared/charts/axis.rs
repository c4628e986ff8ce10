//! Оси и сетка для столбчатых диаграмм

use super::scale::{BandScale, LinearScale};
use super::scene::{Margin, Reveal, Shape, TextAnchor};
use super::spec::ChartSpec;

/// Количество делений оси значений
pub const Y_TICKS: usize = 5;

const AXIS_COLOR: &str = "#6b7280";
const GRID_COLOR: &str = "#e5e7eb";
const LABEL_COLOR: &str = "#374151";

/// Ось значений слева, деления с подписями и пунктирная сетка
pub fn value_axis(
    y: &LinearScale,
    margin: &Margin,
    inner_width: f64,
    inner_height: f64,
    spec: &ChartSpec,
) -> Vec<Shape> {
    let mut shapes = Vec::new();
    for tick in y.ticks(Y_TICKS) {
        let py = margin.top + y.map(tick);
        shapes.push(Shape::Line {
            key: format!("grid:{}", tick),
            x1: margin.left,
            y1: py,
            x2: margin.left + inner_width,
            y2: py,
            stroke: GRID_COLOR.to_string(),
            dashed: true,
        });
        shapes.push(Shape::Text {
            key: format!("ytick:{}", tick),
            x: margin.left - 9.0,
            y: py + 4.0,
            text: spec.format_value(tick),
            anchor: TextAnchor::End,
            rotate: None,
            font_size: 11.0,
            fill: LABEL_COLOR.to_string(),
            reveal: Reveal::NONE,
        });
    }
    shapes.push(Shape::Line {
        key: "axis:y".to_string(),
        x1: margin.left,
        y1: margin.top,
        x2: margin.left,
        y2: margin.top + inner_height,
        stroke: AXIS_COLOR.to_string(),
        dashed: false,
    });
    shapes
}

/// Ось категорий снизу, подписи повёрнуты на -45°
pub fn category_axis(x: &BandScale, margin: &Margin, inner_width: f64, inner_height: f64) -> Vec<Shape> {
    let baseline = margin.top + inner_height;
    let mut shapes = vec![Shape::Line {
        key: "axis:x".to_string(),
        x1: margin.left,
        y1: baseline,
        x2: margin.left + inner_width,
        y2: baseline,
        stroke: AXIS_COLOR.to_string(),
        dashed: false,
    }];
    for (index, category) in x.domain().iter().enumerate() {
        let cx = margin.left + x.position_at(index) + x.bandwidth() / 2.0;
        let cy = baseline + 12.0;
        shapes.push(Shape::Text {
            key: format!("xtick:{}", category),
            x: cx,
            y: cy,
            text: category.clone(),
            anchor: TextAnchor::End,
            rotate: Some(-45.0),
            font_size: 10.0,
            fill: LABEL_COLOR.to_string(),
            reveal: Reveal::NONE,
        });
    }
    shapes
}
