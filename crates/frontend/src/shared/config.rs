use leptos::prelude::*;
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct Config {
    pub api: ApiConfig,
    pub charts: ChartDefaults,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ApiConfig {
    /// Порт бэкенда обработки; хост берётся из `window.location`
    pub port: u16,
    /// Общий префикс всех маршрутов API
    pub prefix: String,
}

/// Параметры графиков по умолчанию
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ChartDefaults {
    pub height: f64,
    pub bar_padding: f64,
    pub comparison_padding: f64,
    pub headroom: f64,
    /// Минимальная доля сектора (в процентах) для подписи на круговой диаграмме
    pub label_threshold: f64,
    pub legend_rows: usize,
    pub animation_ms: u32,
}

/// Default configuration embedded in the bundle
const DEFAULT_CONFIG: &str = r#"
[api]
port = 5000
prefix = "/api"

[charts]
height = 300.0
bar_padding = 0.3
comparison_padding = 0.1
headroom = 1.1
label_threshold = 5.0
legend_rows = 6
animation_ms = 800
"#;

/// Parse the embedded configuration
pub fn load_config() -> Result<Config, toml::de::Error> {
    toml::from_str(DEFAULT_CONFIG)
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api: ApiConfig {
                port: 5000,
                prefix: "/api".to_string(),
            },
            charts: ChartDefaults::default(),
        }
    }
}

impl Default for ChartDefaults {
    fn default() -> Self {
        Self {
            height: 300.0,
            bar_padding: 0.3,
            comparison_padding: 0.1,
            headroom: 1.1,
            label_threshold: 5.0,
            legend_rows: 6,
            animation_ms: 800,
        }
    }
}

/// Конфигурация для корня приложения: при ошибке разбора берутся значения по умолчанию
pub fn load_config_or_default() -> Config {
    match load_config() {
        Ok(config) => config,
        Err(e) => {
            log::warn!("Embedded config is invalid, using defaults: {}", e);
            Config::default()
        }
    }
}

/// Конфигурация из контекста корня приложения
pub fn use_config() -> Config {
    use_context::<Config>().unwrap_or_else(|| {
        log::warn!("Config is not provided, using defaults");
        Config::default()
    })
}
