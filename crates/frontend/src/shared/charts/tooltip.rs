//! Единственная всплывающая подсказка графиков
//!
//! Состояние принадлежит корню приложения (`TooltipController` в контексте),
//! графики только публикуют события наведения. Последнее наведение побеждает:
//! двигать и скрывать подсказку может только тот источник, который её показал.

use super::scene::HoverInfo;
use leptos::portal::Portal;
use leptos::prelude::*;

/// Смещение подсказки относительно указателя
pub const OFFSET_X: f64 = 10.0;
pub const OFFSET_Y: f64 = -20.0;

/// Кто показывает подсказку: экземпляр графика и ключ фигуры
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HoverSource {
    pub chart_id: u64,
    pub shape_key: String,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct TooltipState {
    pub source: Option<HoverSource>,
    pub content: Option<HoverInfo>,
    pub x: f64,
    pub y: f64,
    pub visible: bool,
}

impl TooltipState {
    pub fn enter(&mut self, source: HoverSource, content: HoverInfo, page_x: f64, page_y: f64) {
        self.source = Some(source);
        self.content = Some(content);
        self.x = page_x + OFFSET_X;
        self.y = page_y + OFFSET_Y;
        self.visible = true;
    }

    /// Возвращает `false`, если подсказкой уже владеет другой источник
    pub fn move_to(&mut self, source: &HoverSource, page_x: f64, page_y: f64) -> bool {
        if self.source.as_ref() != Some(source) {
            return false;
        }
        self.x = page_x + OFFSET_X;
        self.y = page_y + OFFSET_Y;
        true
    }

    /// Содержимое остаётся до следующего `enter`, скрывается только видимость
    pub fn leave(&mut self, source: &HoverSource) -> bool {
        if self.source.as_ref() != Some(source) {
            return false;
        }
        self.visible = false;
        self.source = None;
        true
    }
}

/// Copy-handle над состоянием подсказки, создаётся один раз в корне приложения
#[derive(Clone, Copy)]
pub struct TooltipController {
    state: RwSignal<TooltipState>,
    next_chart_id: StoredValue<u64>,
}

impl TooltipController {
    pub fn new() -> Self {
        Self {
            state: RwSignal::new(TooltipState::default()),
            next_chart_id: StoredValue::new(1),
        }
    }

    /// Идентификатор для нового экземпляра графика
    pub fn register_chart(&self) -> u64 {
        let id = self.next_chart_id.get_value();
        self.next_chart_id.set_value(id + 1);
        id
    }

    pub fn enter(&self, source: HoverSource, content: HoverInfo, page_x: f64, page_y: f64) {
        self.state.update(|s| s.enter(source, content, page_x, page_y));
    }

    pub fn move_to(&self, source: &HoverSource, page_x: f64, page_y: f64) {
        self.state.update(|s| {
            s.move_to(source, page_x, page_y);
        });
    }

    pub fn leave(&self, source: &HoverSource) {
        self.state.update(|s| {
            s.leave(source);
        });
    }

    /// Скрыть подсказку независимо от источника (график размонтирован)
    pub fn hide_chart(&self, chart_id: u64) {
        let owned = self
            .state
            .with_untracked(|s| s.source.as_ref().map(|src| src.chart_id) == Some(chart_id));
        if owned {
            self.state.update(|s| {
                s.visible = false;
                s.source = None;
            });
        }
    }

    pub fn state(&self) -> ReadSignal<TooltipState> {
        self.state.read_only()
    }
}

impl Default for TooltipController {
    fn default() -> Self {
        Self::new()
    }
}

/// Контроллер из контекста; без корня приложения (изолированный рендер) создаётся свой
pub fn use_tooltip() -> TooltipController {
    match use_context::<TooltipController>() {
        Some(controller) => controller,
        None => {
            log::warn!("TooltipController not provided in context, using a detached one");
            TooltipController::new()
        }
    }
}

/// Узел подсказки в `document.body`. Монтируется ровно один раз в корне приложения.
#[component]
pub fn TooltipHost() -> impl IntoView {
    let controller = use_tooltip();
    let state = controller.state();

    let style = move || {
        state.with(|s| {
            format!(
                "position: absolute; left: {}px; top: {}px; opacity: {}; \
                 background: rgba(0,0,0,0.8); color: white; padding: 8px 12px; \
                 border-radius: 4px; font-size: 12px; pointer-events: none; z-index: 1000; \
                 transition: opacity 0.15s;",
                s.x,
                s.y,
                if s.visible { 1 } else { 0 }
            )
        })
    };

    view! {
        <Portal>
            <div class="chart-tooltip" style=style>
                {move || {
                    state
                        .with(|s| s.content.clone())
                        .map(|content| {
                            view! {
                                <strong>{content.title}</strong>
                                <br />
                                {content.body}
                            }
                        })
                }}
            </div>
        </Portal>
    }
}
