//! Интерполяция кадров анимации поверх уже посчитанной сцены
//!
//! Геометрия сцены окончательна с момента раскладки, анимация только
//! подменяет атрибуты промежуточными значениями.

/// Кубическое ускорение-замедление (как `d3.easeCubicInOut`, кривая по умолчанию)
pub fn ease_cubic_in_out(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0) * 2.0;
    if t <= 1.0 {
        t * t * t / 2.0
    } else {
        let t = t - 2.0;
        (t * t * t + 2.0) / 2.0
    }
}

pub fn lerp(from: f64, to: f64, t: f64) -> f64 {
    from + (to - from) * t
}

/// Столбец растёт от базовой линии: `(y, height)` в момент `t`
pub fn rect_frame(y: f64, height: f64, baseline: f64, t: f64) -> (f64, f64) {
    let e = ease_cubic_in_out(t);
    (lerp(baseline, y, e), lerp(0.0, height, e))
}

/// Сектор раскрывается от нулевого угла: `(start, end)` в момент `t`
pub fn arc_frame(start_angle: f64, end_angle: f64, t: f64) -> (f64, f64) {
    let e = ease_cubic_in_out(t);
    (lerp(0.0, start_angle, e), lerp(0.0, end_angle, e))
}

/// Счётчик поколений отрисовки: новая отрисовка делает недействительными
/// все ранее запущенные циклы анимации
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Generation(u64);

impl Generation {
    /// Следующее поколение
    pub fn bump(&mut self) -> Generation {
        self.0 = self.0.wrapping_add(1);
        *self
    }

    pub fn is_current(&self, token: Generation) -> bool {
        *self == token
    }
}
