//! Шкалы: категориальная (band) и линейная
//!
//! Поведение повторяет d3-scale: `scaleBand().padding(p)` и
//! `scaleLinear().nice()` с алгоритмом `tickIncrement`.

/// Категориальная шкала с равными полосами
#[derive(Debug, Clone, PartialEq)]
pub struct BandScale {
    domain: Vec<String>,
    start: f64,
    step: f64,
    bandwidth: f64,
}

impl BandScale {
    /// Повторяющиеся категории схлопываются, порядок первого появления сохраняется.
    /// Внутренний и внешний отступы равны `padding`, выравнивание по центру.
    pub fn new<I, S>(categories: I, range: (f64, f64), padding: f64) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut domain: Vec<String> = Vec::new();
        for category in categories {
            let category = category.as_ref();
            if !domain.iter().any(|c| c == category) {
                domain.push(category.to_string());
            }
        }

        let (r0, r1) = if range.1 >= range.0 {
            range
        } else {
            (range.1, range.0)
        };
        let width = if (r1 - r0).is_finite() { r1 - r0 } else { 0.0 };
        let padding = if padding.is_finite() {
            padding.clamp(0.0, 1.0)
        } else {
            0.0
        };

        let n = domain.len() as f64;
        let step = width / (n - padding + padding * 2.0).max(1.0);
        let start = r0 + (width - step * (n - padding)) * 0.5;
        let bandwidth = step * (1.0 - padding);

        Self {
            domain,
            start,
            step,
            bandwidth,
        }
    }

    pub fn domain(&self) -> &[String] {
        &self.domain
    }

    pub fn step(&self) -> f64 {
        self.step
    }

    pub fn bandwidth(&self) -> f64 {
        self.bandwidth
    }

    /// Левая граница полосы по индексу
    pub fn position_at(&self, index: usize) -> f64 {
        self.start + self.step * index as f64
    }

    /// Левая граница полосы категории
    pub fn position(&self, category: &str) -> Option<f64> {
        self.domain
            .iter()
            .position(|c| c == category)
            .map(|index| self.position_at(index))
    }

    /// Центр полосы категории
    pub fn center(&self, category: &str) -> Option<f64> {
        self.position(category).map(|x| x + self.bandwidth / 2.0)
    }

    /// Делит полосу на `k` равных подполос для сгруппированных столбцов
    pub fn sub_band_width(&self, k: usize) -> f64 {
        if k == 0 {
            0.0
        } else {
            self.bandwidth / k as f64
        }
    }
}

/// Линейная шкала `[d0, d1] -> [r0, r1]`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearScale {
    domain: (f64, f64),
    range: (f64, f64),
}

const E10: f64 = 7.0710678118654755; // sqrt(50)
const E5: f64 = 3.1622776601683795; // sqrt(10)
const E2: f64 = std::f64::consts::SQRT_2;

/// `Math.round` из JS: половина округляется вверх
fn js_round(x: f64) -> f64 {
    (x + 0.5).floor()
}

/// `(i1, i2, inc)` как в d3-array `tickSpec`; отрицательный `inc` означает шаг `1 / -inc`
fn tick_spec(start: f64, stop: f64, count: f64) -> (f64, f64, f64) {
    let step = (stop - start) / count.max(0.0);
    let power = step.log10().floor();
    let error = step / 10f64.powf(power);
    let factor = if error >= E10 {
        10.0
    } else if error >= E5 {
        5.0
    } else if error >= E2 {
        2.0
    } else {
        1.0
    };

    let (mut i1, mut i2, inc);
    if power < 0.0 {
        let inv = 10f64.powf(-power) / factor;
        i1 = js_round(start * inv);
        i2 = js_round(stop * inv);
        if i1 / inv < start {
            i1 += 1.0;
        }
        if i2 / inv > stop {
            i2 -= 1.0;
        }
        inc = -inv;
    } else {
        let step = 10f64.powf(power) * factor;
        i1 = js_round(start / step);
        i2 = js_round(stop / step);
        if i1 * step < start {
            i1 += 1.0;
        }
        if i2 * step > stop {
            i2 -= 1.0;
        }
        inc = step;
    }

    if i2 < i1 && (0.5..2.0).contains(&count) {
        return tick_spec(start, stop, count * 2.0);
    }
    (i1, i2, inc)
}

fn tick_increment(start: f64, stop: f64, count: f64) -> f64 {
    tick_spec(start, stop, count).2
}

impl LinearScale {
    /// Домен `[0, max * headroom]`; пустой, нулевой или невалидный максимум даёт `[0, 1]`
    pub fn from_max(max: f64, headroom: f64, range: (f64, f64)) -> Self {
        let top = max * headroom;
        let top = if top.is_finite() && top > 0.0 { top } else { 1.0 };
        Self {
            domain: (0.0, top),
            range,
        }
    }

    pub fn domain(&self) -> (f64, f64) {
        self.domain
    }

    pub fn range(&self) -> (f64, f64) {
        self.range
    }

    /// Расширяет домен до "круглых" границ
    pub fn nice(mut self, count: usize) -> Self {
        let (mut start, mut stop) = self.domain;
        let count = count as f64;
        let mut prestep: Option<f64> = None;

        for _ in 0..10 {
            let step = tick_increment(start, stop, count);
            if prestep == Some(step) {
                break;
            }
            if step > 0.0 {
                start = (start / step).floor() * step;
                stop = (stop / step).ceil() * step;
            } else if step < 0.0 {
                start = (start * step).ceil() / step;
                stop = (stop * step).floor() / step;
            } else {
                break;
            }
            prestep = Some(step);
        }

        if start.is_finite() && stop.is_finite() && stop > start {
            self.domain = (start, stop);
        }
        self
    }

    /// Значения делений оси (около `count` штук)
    pub fn ticks(&self, count: usize) -> Vec<f64> {
        let (start, stop) = self.domain;
        if count == 0 {
            return Vec::new();
        }
        if start == stop {
            return vec![start];
        }
        let (i1, i2, inc) = tick_spec(start, stop, count as f64);
        if !(i2 >= i1) {
            return Vec::new();
        }
        let n = (i2 - i1) as usize + 1;
        (0..n)
            .map(|i| {
                let k = i1 + i as f64;
                if inc < 0.0 {
                    k / -inc
                } else {
                    k * inc
                }
            })
            .collect()
    }

    pub fn map(&self, value: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        let value = if value.is_finite() { value } else { 0.0 };
        if d1 == d0 {
            return (r0 + r1) / 2.0;
        }
        r0 + (value - d0) / (d1 - d0) * (r1 - r0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(a: f64, b: f64) {
        assert!((a - b).abs() < 1e-9, "{} != {}", a, b);
    }

    #[test]
    fn test_band_scale_matches_d3_padding() {
        let scale = BandScale::new(["A", "B", "C"], (0.0, 330.0), 0.3);
        assert_close(scale.step(), 100.0);
        assert_close(scale.bandwidth(), 70.0);
        assert_close(scale.position("A").unwrap(), 30.0);
        assert_close(scale.position("C").unwrap(), 230.0);
        assert_eq!(scale.position("D"), None);
    }

    #[test]
    fn test_bands_do_not_overlap_and_stay_in_range() {
        for n in 1..20 {
            for &padding in &[0.0, 0.1, 0.3, 0.9] {
                let categories: Vec<String> = (0..n).map(|i| format!("c{}", i)).collect();
                let scale = BandScale::new(&categories, (10.0, 517.0), padding);
                let mut previous_end = f64::NEG_INFINITY;
                for i in 0..n {
                    let x = scale.position_at(i);
                    assert!(x >= 10.0 - 1e-9);
                    assert!(x + scale.bandwidth() <= 517.0 + 1e-9);
                    assert!(x >= previous_end - 1e-9);
                    previous_end = x + scale.bandwidth();
                }
            }
        }
    }

    #[test]
    fn test_band_scale_dedups_categories() {
        let scale = BandScale::new(["A", "B", "A"], (0.0, 100.0), 0.0);
        assert_eq!(scale.domain(), &["A".to_string(), "B".to_string()]);
        assert_close(scale.bandwidth(), 50.0);
    }

    #[test]
    fn test_empty_band_scale() {
        let scale = BandScale::new(Vec::<String>::new(), (0.0, 100.0), 0.3);
        assert!(scale.domain().is_empty());
        assert!(scale.bandwidth() >= 0.0);
        assert_eq!(scale.sub_band_width(0), 0.0);
    }

    #[test]
    fn test_linear_nice_and_ticks() {
        let scale = LinearScale::from_max(95.0, 1.1, (200.0, 0.0)).nice(10);
        assert_eq!(scale.domain(), (0.0, 110.0));
        assert_eq!(scale.ticks(5), vec![0.0, 20.0, 40.0, 60.0, 80.0, 100.0]);
        assert_close(scale.map(0.0), 200.0);
        assert_close(scale.map(110.0), 0.0);
        assert_close(scale.map(55.0), 100.0);
    }

    #[test]
    fn test_linear_zero_domain_degrades_to_unit() {
        let scale = LinearScale::from_max(0.0, 1.1, (100.0, 0.0)).nice(10);
        assert_eq!(scale.domain(), (0.0, 1.0));
        let scale = LinearScale::from_max(f64::NAN, 1.1, (100.0, 0.0));
        assert_eq!(scale.domain(), (0.0, 1.0));
        assert_close(scale.map(f64::NAN), 100.0);
    }

    #[test]
    fn test_small_domain_ticks() {
        let scale = LinearScale::from_max(1.0, 1.0, (0.0, 1.0));
        assert_eq!(scale.ticks(5), vec![0.0, 0.2, 0.4, 0.6, 0.8, 1.0]);
    }
}
