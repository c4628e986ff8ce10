use super::svg_scene::SvgScene;
use crate::shared::charts::record::MetricRecord;
use crate::shared::charts::scene::{ChartScene, Scene};
use crate::shared::charts::spec::ChartSpec;
use crate::shared::charts::transition::Generation;
use crate::shared::i18n::use_i18n;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// Функция раскладки конкретного типа графика
pub type LayoutFn = fn(&[MetricRecord], &ChartSpec, (f64, f64)) -> ChartScene;

const FRAME_MS: u32 = 16;

/// Общая обвязка графика: ширина контейнера, пересчёт сцены и часы анимации
///
/// Сцена пересчитывается целиком при смене записей, конфигурации или ширины.
/// Анимация перезапускается только при смене данных; изменение размера
/// показывает сразу итоговую геометрию.
#[component]
pub fn ChartView(
    #[prop(into)] records: Signal<Vec<MetricRecord>>,
    #[prop(into)] spec: Signal<ChartSpec>,
    layout: LayoutFn,
) -> impl IntoView {
    let i18n = use_i18n();
    let container_ref = NodeRef::<leptos::html::Div>::new();
    let width = RwSignal::new(0.0_f64);

    let measure = move || {
        if let Some(el) = container_ref.get_untracked() {
            let w = el.client_width() as f64;
            if w != width.get_untracked() {
                width.set(w);
            }
        }
    };

    Effect::new(move |_| {
        if container_ref.get().is_some() {
            measure();
        }
    });

    let resize_handle = window_event_listener(leptos::ev::resize, move |_| measure());
    on_cleanup(move || resize_handle.remove());

    let scene = Memo::new(move |_| {
        let w = width.get();
        records.with(|records| spec.with(|spec| layout(records, spec, (w, spec.height))))
    });

    // Часы анимации: каждая новая порция данных начинает отсчёт заново,
    // устаревший цикл замечает смену поколения и завершается
    let elapsed = RwSignal::new(0.0_f64);
    let generation = StoredValue::new(Generation::default());

    Effect::new(move |_| {
        records.track();
        spec.track();

        let mut current = generation.get_value();
        let token = current.bump();
        generation.set_value(current);
        elapsed.set(0.0);

        let started = js_sys::Date::now();
        spawn_local(async move {
            loop {
                TimeoutFuture::new(FRAME_MS).await;
                let still_current = generation
                    .try_get_value()
                    .map(|g| g.is_current(token))
                    .unwrap_or(false);
                if !still_current {
                    return;
                }
                let now = js_sys::Date::now() - started;
                if elapsed.try_set(now).is_some() {
                    return;
                }
                let end = scene
                    .try_with_untracked(|s| s.scene().map(Scene::animation_end_ms).unwrap_or(0))
                    .unwrap_or(0);
                if now >= end as f64 {
                    return;
                }
            }
        });
    });

    let ready_scene = Memo::new(move |_| {
        scene.with(|s| match s {
            ChartScene::Ready(scene) => scene.clone(),
            ChartScene::NoData => Scene {
                width: 0.0,
                height: 0.0,
                shapes: Vec::new(),
            },
        })
    });
    let height = move || spec.with(|s| s.height);

    view! {
        <div node_ref=container_ref class="chart-container" style="width: 100%;">
            <Show
                when=move || scene.with(|s| !s.is_no_data())
                fallback=move || {
                    view! {
                        <div
                            class="chart-no-data"
                            style=move || format!(
                                "display: flex; align-items: center; justify-content: center; \
                                 height: {}px; color: #9ca3af;",
                                height().min(256.0)
                            )
                        >
                            {move || i18n.t("no_data_available")}
                        </div>
                    }
                }
            >
                <SvgScene scene=ready_scene elapsed=elapsed.read_only() />
            </Show>
        </div>
    }
}
