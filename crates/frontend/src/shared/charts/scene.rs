//! Декларативная сцена графика: набор фигур с устойчивыми ключами
//!
//! Раскладка (`layout`) строит сцену целиком, SVG-компонент только
//! отображает её. Координаты абсолютные, в пикселях контейнера.

use std::collections::HashMap;

/// Отступы области построения
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Margin {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl Margin {
    pub const fn new(top: f64, right: f64, bottom: f64, left: f64) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    /// Размер внутренней области; отрицательные размеры обрезаются до нуля
    pub fn inner(&self, width: f64, height: f64) -> (f64, f64) {
        (
            (width - self.left - self.right).max(0.0),
            (height - self.top - self.bottom).max(0.0),
        )
    }
}

/// Содержимое подсказки для фигуры
#[derive(Debug, Clone, PartialEq)]
pub struct HoverInfo {
    pub title: String,
    pub body: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAnchor {
    Start,
    Middle,
    End,
}

impl TextAnchor {
    pub fn as_str(&self) -> &'static str {
        match self {
            TextAnchor::Start => "start",
            TextAnchor::Middle => "middle",
            TextAnchor::End => "end",
        }
    }
}

/// Появление фигуры: задержка и длительность анимации
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Reveal {
    pub delay_ms: u32,
    pub duration_ms: u32,
}

impl Reveal {
    pub const NONE: Reveal = Reveal {
        delay_ms: 0,
        duration_ms: 0,
    };

    pub fn new(delay_ms: u32, duration_ms: u32) -> Self {
        Self {
            delay_ms,
            duration_ms,
        }
    }

    /// Прогресс 0..1 в момент `elapsed_ms` от начала отрисовки
    pub fn progress(&self, elapsed_ms: f64) -> f64 {
        if self.duration_ms == 0 {
            return if elapsed_ms >= self.delay_ms as f64 { 1.0 } else { 0.0 };
        }
        ((elapsed_ms - self.delay_ms as f64) / self.duration_ms as f64).clamp(0.0, 1.0)
    }

    /// Момент, когда анимация гарантированно завершена
    pub fn end_ms(&self) -> u32 {
        self.delay_ms + self.duration_ms
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    /// Столбец, растущий от `baseline`
    Rect {
        key: String,
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        baseline: f64,
        rx: f64,
        fill: String,
        reveal: Reveal,
        hover: Option<HoverInfo>,
    },
    /// Кольцевой сектор вокруг `center`
    Arc {
        key: String,
        center: (f64, f64),
        inner: f64,
        outer: f64,
        hover_outer: f64,
        start_angle: f64,
        end_angle: f64,
        fill: String,
        reveal: Reveal,
        hover: Option<HoverInfo>,
    },
    Text {
        key: String,
        x: f64,
        y: f64,
        text: String,
        anchor: TextAnchor,
        /// Поворот в градусах вокруг точки привязки
        rotate: Option<f64>,
        font_size: f64,
        fill: String,
        reveal: Reveal,
    },
    Line {
        key: String,
        x1: f64,
        y1: f64,
        x2: f64,
        y2: f64,
        stroke: String,
        dashed: bool,
    },
    /// Квадрат-образец цвета в легенде
    Swatch {
        key: String,
        x: f64,
        y: f64,
        size: f64,
        fill: String,
    },
}

impl Shape {
    pub fn key(&self) -> &str {
        match self {
            Shape::Rect { key, .. }
            | Shape::Arc { key, .. }
            | Shape::Text { key, .. }
            | Shape::Line { key, .. }
            | Shape::Swatch { key, .. } => key,
        }
    }

    pub fn hover(&self) -> Option<&HoverInfo> {
        match self {
            Shape::Rect { hover, .. } | Shape::Arc { hover, .. } => hover.as_ref(),
            _ => None,
        }
    }

    pub fn reveal(&self) -> Reveal {
        match self {
            Shape::Rect { reveal, .. } | Shape::Arc { reveal, .. } | Shape::Text { reveal, .. } => {
                *reveal
            }
            _ => Reveal::NONE,
        }
    }
}

/// Готовая сцена
#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    pub width: f64,
    pub height: f64,
    pub shapes: Vec<Shape>,
}

impl Scene {
    /// Время, после которого все анимации сцены завершены
    pub fn animation_end_ms(&self) -> u32 {
        self.shapes
            .iter()
            .map(|s| s.reveal().end_ms())
            .max()
            .unwrap_or(0)
    }

    pub fn rects(&self) -> impl Iterator<Item = &Shape> {
        self.shapes.iter().filter(|s| matches!(s, Shape::Rect { .. }))
    }

    pub fn arcs(&self) -> impl Iterator<Item = &Shape> {
        self.shapes.iter().filter(|s| matches!(s, Shape::Arc { .. }))
    }

    /// Позиция каждой фигуры по её ключу
    pub fn key_index(&self) -> HashMap<String, usize> {
        self.shapes
            .iter()
            .enumerate()
            .map(|(i, shape)| (shape.key().to_string(), i))
            .collect()
    }

    /// Фигура по ключу через индекс, построенный `key_index` для этой же сцены
    pub fn shape_at<'a>(&'a self, index: &HashMap<String, usize>, key: &str) -> Option<&'a Shape> {
        index
            .get(key)
            .and_then(|&i| self.shapes.get(i))
            .filter(|shape| shape.key() == key)
    }
}

/// Результат раскладки: либо явное "нет данных", либо сцена
#[derive(Debug, Clone, PartialEq)]
pub enum ChartScene {
    NoData,
    Ready(Scene),
}

impl ChartScene {
    pub fn is_no_data(&self) -> bool {
        matches!(self, ChartScene::NoData)
    }

    pub fn scene(&self) -> Option<&Scene> {
        match self {
            ChartScene::Ready(scene) => Some(scene),
            ChartScene::NoData => None,
        }
    }
}

/// Обрезает длинную подпись: больше `max` символов → первые `keep` + "..."
pub fn truncate_label(label: &str, max: usize, keep: usize) -> String {
    if label.chars().count() > max {
        let head: String = label.chars().take(keep).collect();
        format!("{}...", head)
    } else {
        label.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reveal_progress() {
        let reveal = Reveal::new(100, 800);
        assert_eq!(reveal.progress(0.0), 0.0);
        assert_eq!(reveal.progress(500.0), 0.5);
        assert_eq!(reveal.progress(2000.0), 1.0);
        assert_eq!(reveal.end_ms(), 900);
        assert_eq!(Reveal::NONE.progress(0.0), 1.0);
    }

    #[test]
    fn test_truncate_label() {
        assert_eq!(truncate_label("Portugal", 12, 10), "Portugal");
        assert_eq!(truncate_label("United Kingdom", 12, 10), "United Kin...");
        assert_eq!(truncate_label("Ação Ótima Çà Ü", 12, 10), "Ação Ótima...");
    }

    #[test]
    fn test_margin_inner_never_negative() {
        let margin = Margin::new(20.0, 30.0, 80.0, 60.0);
        assert_eq!(margin.inner(500.0, 300.0), (410.0, 200.0));
        assert_eq!(margin.inner(10.0, 10.0), (0.0, 0.0));
    }
}
