//! Раскладка круговой диаграммы и геометрия дуг
//!
//! Углы отсчитываются от 12 часов по часовой стрелке, как в d3-shape.

use std::f64::consts::{FRAC_PI_2, PI, TAU};

const EPSILON: f64 = 1e-12;

/// Сектор: индекс исходной записи и его угловой диапазон
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PieSlice {
    pub index: usize,
    pub value: f64,
    pub start_angle: f64,
    pub end_angle: f64,
}

impl PieSlice {
    pub fn span(&self) -> f64 {
        self.end_angle - self.start_angle
    }

    /// Доля сектора от полного круга
    pub fn fraction(&self) -> f64 {
        self.span() / TAU
    }
}

fn slice_weight(value: f64) -> f64 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        0.0
    }
}

/// Сумма, от которой считаются доли секторов
pub fn pie_total(values: &[f64]) -> f64 {
    values.iter().fold(0.0, |acc, v| acc + slice_weight(*v))
}

/// Углы пропорциональны значениям, порядок входа сохраняется.
///
/// Неположительные значения получают сектор нулевой ширины, но остаются
/// на своём месте. Нулевая сумма означает "нет данных" (`None`).
pub fn pie_layout(values: &[f64]) -> Option<Vec<PieSlice>> {
    let total = pie_total(values);
    if !(total > 0.0) || !total.is_finite() {
        return None;
    }

    // Накопленная сумма считается тем же сложением, что и total,
    // поэтому последний сектор заканчивается ровно на TAU
    let mut cumulative = 0.0;
    let slices = values
        .iter()
        .enumerate()
        .map(|(index, value)| {
            let start_angle = TAU * (cumulative / total);
            cumulative += slice_weight(*value);
            let end_angle = TAU * (cumulative / total);
            PieSlice {
                index,
                value: slice_weight(*value),
                start_angle,
                end_angle,
            }
        })
        .collect();
    Some(slices)
}

fn point(radius: f64, angle: f64) -> (f64, f64) {
    (radius * angle.sin(), -radius * angle.cos())
}

fn fmt(v: f64) -> String {
    let v = (v * 1000.0).round() / 1000.0;
    if v == 0.0 {
        "0".to_string()
    } else {
        format!("{}", v)
    }
}

/// SVG path кольцевого сектора. Сектор нулевой ширины даёт пустую строку,
/// полный круг рисуется двумя полудугами.
pub fn arc_path(inner: f64, outer: f64, start_angle: f64, end_angle: f64) -> String {
    let span = end_angle - start_angle;
    if !(span > EPSILON) || !(outer > 0.0) {
        return String::new();
    }
    let inner = inner.clamp(0.0, outer);

    if span >= TAU - EPSILON {
        let ro = fmt(outer);
        let mut path = format!(
            "M0,{} A{},{} 0 1 1 0,{} A{},{} 0 1 1 0,{}",
            fmt(-outer),
            ro,
            ro,
            fmt(outer),
            ro,
            ro,
            fmt(-outer)
        );
        if inner > 0.0 {
            let ri = fmt(inner);
            path.push_str(&format!(
                " M0,{} A{},{} 0 1 0 0,{} A{},{} 0 1 0 0,{}",
                fmt(-inner),
                ri,
                ri,
                fmt(inner),
                ri,
                ri,
                fmt(-inner)
            ));
        }
        path.push_str(" Z");
        return path;
    }

    let large_arc = if span > PI { 1 } else { 0 };
    let (ox0, oy0) = point(outer, start_angle);
    let (ox1, oy1) = point(outer, end_angle);
    let mut path = format!(
        "M{},{} A{},{} 0 {} 1 {},{}",
        fmt(ox0),
        fmt(oy0),
        fmt(outer),
        fmt(outer),
        large_arc,
        fmt(ox1),
        fmt(oy1)
    );
    if inner > 0.0 {
        let (ix1, iy1) = point(inner, end_angle);
        let (ix0, iy0) = point(inner, start_angle);
        path.push_str(&format!(
            " L{},{} A{},{} 0 {} 0 {},{}",
            fmt(ix1),
            fmt(iy1),
            fmt(inner),
            fmt(inner),
            large_arc,
            fmt(ix0),
            fmt(iy0)
        ));
    } else {
        path.push_str(" L0,0");
    }
    path.push_str(" Z");
    path
}

/// Центр масс сектора на середине между радиусами (для подписей)
pub fn centroid(inner: f64, outer: f64, start_angle: f64, end_angle: f64) -> (f64, f64) {
    let r = (inner + outer) / 2.0;
    let a = (start_angle + end_angle) / 2.0 - FRAC_PI_2;
    (r * a.cos(), r * a.sin())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slices_cover_full_circle() {
        let values = [3.0, 1.0, 0.1, 7.3, 2.2, 0.7];
        let slices = pie_layout(&values).unwrap();
        assert_eq!(slices.len(), values.len());
        assert_eq!(slices[0].start_angle, 0.0);
        assert_eq!(slices.last().unwrap().end_angle, TAU);
        for pair in slices.windows(2) {
            assert_eq!(pair[0].end_angle, pair[1].start_angle);
        }
        let spans: f64 = slices.iter().map(|s| s.span()).sum();
        assert!((spans - TAU).abs() < 1e-9);
    }

    #[test]
    fn test_zero_and_invalid_values_keep_their_slot() {
        let slices = pie_layout(&[2.0, 0.0, -5.0, f64::NAN, 2.0]).unwrap();
        assert_eq!(slices.len(), 5);
        assert_eq!(slices[1].span(), 0.0);
        assert_eq!(slices[2].span(), 0.0);
        assert_eq!(slices[3].span(), 0.0);
        assert!((slices[0].fraction() - 0.5).abs() < 1e-12);
        assert_eq!(slices[4].end_angle, TAU);
    }

    #[test]
    fn test_zero_total_is_no_data() {
        assert_eq!(pie_layout(&[]), None);
        assert_eq!(pie_layout(&[0.0, 0.0]), None);
        assert_eq!(pie_layout(&[-1.0]), None);
    }

    #[test]
    fn test_arc_path_shapes() {
        assert_eq!(arc_path(50.0, 100.0, 1.0, 1.0), "");
        assert_eq!(
            arc_path(0.0, 100.0, 0.0, FRAC_PI_2),
            "M0,-100 A100,100 0 0 1 100,0 L0,0 Z"
        );
        assert_eq!(
            arc_path(50.0, 100.0, 0.0, FRAC_PI_2),
            "M0,-100 A100,100 0 0 1 100,0 L50,0 A50,50 0 0 0 0,-50 Z"
        );
        let full = arc_path(50.0, 100.0, 0.0, TAU);
        assert!(full.starts_with("M0,-100 A100,100 0 1 1 0,100"));
        assert!(full.contains("M0,-50"));
        let large = arc_path(0.0, 10.0, 0.0, 1.5 * PI);
        assert!(large.contains(" 0 1 1 "));
    }

    #[test]
    fn test_centroid() {
        let (x, y) = centroid(80.0, 80.0, 0.0, PI);
        assert!((x - 80.0).abs() < 1e-9);
        assert!(y.abs() < 1e-9);
        let (x, y) = centroid(0.0, 100.0, 0.0, 0.0);
        assert!(x.abs() < 1e-9);
        assert!((y + 50.0).abs() < 1e-9);
    }
}
