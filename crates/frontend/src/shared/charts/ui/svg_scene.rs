use crate::shared::charts::pie::arc_path;
use crate::shared::charts::scene::{Scene, Shape};
use crate::shared::charts::tooltip::{use_tooltip, HoverSource};
use crate::shared::charts::transition::{arc_frame, rect_frame};
use leptos::prelude::*;

fn px(v: f64) -> String {
    format!("{:.2}", v)
}

/// Отрисовка сцены в SVG с ключевой сверкой фигур
///
/// Набор фигур берётся из сцены по ключам, поэтому при пересчёте
/// (новые данные, ширина) существующие элементы обновляются на месте.
/// Каждая фигура находит свои данные через индекс ключей сцены.
#[component]
pub fn SvgScene(
    #[prop(into)] scene: Signal<Scene>,
    /// Миллисекунды от начала текущей анимации
    #[prop(into)]
    elapsed: Signal<f64>,
) -> impl IntoView {
    let tooltip = use_tooltip();
    let chart_id = tooltip.register_chart();
    let hovered = RwSignal::new(None::<String>);

    on_cleanup(move || tooltip.hide_chart(chart_id));

    let index = Memo::new(move |_| scene.with(Scene::key_index));
    let keys = Memo::new(move |_| {
        scene.with(|s| {
            s.shapes
                .iter()
                .map(|shape| shape.key().to_string())
                .collect::<Vec<_>>()
        })
    });

    view! {
        <svg
            width=move || scene.with(|s| px(s.width))
            height=move || scene.with(|s| px(s.height))
            style="display: block;"
        >
            <For
                each=move || keys.get()
                key=|key| key.clone()
                children=move |key| {
                    let lookup = key.clone();
                    let shape = Memo::new(move |_| {
                        index.with(|ix| scene.with(|s| s.shape_at(ix, &lookup).cloned()))
                    });
                    render_shape(key, shape, elapsed, hovered, chart_id)
                }
            />
        </svg>
    }
}

fn render_shape(
    key: String,
    shape: Memo<Option<Shape>>,
    elapsed: Signal<f64>,
    hovered: RwSignal<Option<String>>,
    chart_id: u64,
) -> AnyView {
    let tooltip = use_tooltip();
    let source = HoverSource {
        chart_id,
        shape_key: key.clone(),
    };
    let is_hovered = {
        let key = key.clone();
        move || hovered.with(|h| h.as_deref() == Some(key.as_str()))
    };

    let on_enter = {
        let source = source.clone();
        let key = key.clone();
        move |ev: leptos::ev::MouseEvent| {
            if let Some(info) = shape.with_untracked(|s| s.as_ref().and_then(|s| s.hover().cloned())) {
                hovered.set(Some(key.clone()));
                tooltip.enter(source.clone(), info, ev.page_x() as f64, ev.page_y() as f64);
            }
        }
    };
    let on_move = {
        let source = source.clone();
        move |ev: leptos::ev::MouseEvent| {
            tooltip.move_to(&source, ev.page_x() as f64, ev.page_y() as f64);
        }
    };
    let on_leave = move |_: leptos::ev::MouseEvent| {
        hovered.set(None);
        tooltip.leave(&source);
    };

    let initial = shape.get_untracked();
    match initial {
        Some(Shape::Rect { .. }) => {
            let frame = move || {
                shape.with(|s| match s {
                    Some(Shape::Rect {
                        y,
                        height,
                        baseline,
                        reveal,
                        ..
                    }) => rect_frame(*y, *height, *baseline, reveal.progress(elapsed.get())),
                    _ => (0.0, 0.0),
                })
            };
            let attr = move |f: fn(&Shape) -> String| {
                move || shape.with(|s| s.as_ref().map(f).unwrap_or_default())
            };
            view! {
                <rect
                    x=attr(|s| match s {
                        Shape::Rect { x, .. } => px(*x),
                        _ => String::new(),
                    })
                    width=attr(|s| match s {
                        Shape::Rect { width, .. } => px(*width),
                        _ => String::new(),
                    })
                    rx=attr(|s| match s {
                        Shape::Rect { rx, .. } => px(*rx),
                        _ => String::new(),
                    })
                    fill=attr(|s| match s {
                        Shape::Rect { fill, .. } => fill.clone(),
                        _ => String::new(),
                    })
                    y=move || px(frame().0)
                    height=move || px(frame().1)
                    opacity=move || if is_hovered() { "0.8" } else { "1" }
                    style="cursor: pointer;"
                    on:mouseenter=on_enter
                    on:mousemove=on_move
                    on:mouseleave=on_leave
                />
            }
            .into_any()
        }
        Some(Shape::Arc { .. }) => {
            let path = move || {
                let hovered_now = is_hovered();
                let progress_at = elapsed.get();
                shape.with(|s| match s {
                    Some(Shape::Arc {
                        inner,
                        outer,
                        hover_outer,
                        start_angle,
                        end_angle,
                        reveal,
                        ..
                    }) => {
                        let (a0, a1) =
                            arc_frame(*start_angle, *end_angle, reveal.progress(progress_at));
                        let r = if hovered_now { *hover_outer } else { *outer };
                        arc_path(*inner, r, a0, a1)
                    }
                    _ => String::new(),
                })
            };
            let transform = move || {
                shape.with(|s| match s {
                    Some(Shape::Arc { center, .. }) => {
                        format!("translate({},{})", px(center.0), px(center.1))
                    }
                    _ => String::new(),
                })
            };
            let fill = move || {
                shape.with(|s| match s {
                    Some(Shape::Arc { fill, .. }) => fill.clone(),
                    _ => String::new(),
                })
            };
            let opacity = move || {
                let at = elapsed.get();
                shape.with(|s| {
                    s.as_ref()
                        .map(|s| s.reveal().progress(at))
                        .unwrap_or(1.0)
                        .to_string()
                })
            };
            view! {
                <g transform=transform>
                    <path
                        d=path
                        fill=fill
                        stroke="white"
                        stroke-width="2"
                        opacity=opacity
                        style="cursor: pointer;"
                        on:mouseenter=on_enter
                        on:mousemove=on_move
                        on:mouseleave=on_leave
                    />
                </g>
            }
            .into_any()
        }
        Some(Shape::Text { .. }) => {
            let text_attr = move |f: fn(&Shape) -> String| {
                move || shape.with(|s| s.as_ref().map(f).unwrap_or_default())
            };
            let opacity = move || {
                let at = elapsed.get();
                shape.with(|s| {
                    s.as_ref()
                        .map(|s| s.reveal().progress(at))
                        .unwrap_or(1.0)
                        .to_string()
                })
            };
            view! {
                <text
                    x=text_attr(|s| match s {
                        Shape::Text { x, .. } => px(*x),
                        _ => String::new(),
                    })
                    y=text_attr(|s| match s {
                        Shape::Text { y, .. } => px(*y),
                        _ => String::new(),
                    })
                    text-anchor=text_attr(|s| match s {
                        Shape::Text { anchor, .. } => anchor.as_str().to_string(),
                        _ => String::new(),
                    })
                    transform=text_attr(|s| match s {
                        Shape::Text { x, y, rotate: Some(deg), .. } => {
                            format!("rotate({} {} {})", deg, px(*x), px(*y))
                        }
                        _ => String::new(),
                    })
                    font-size=text_attr(|s| match s {
                        Shape::Text { font_size, .. } => format!("{}px", font_size),
                        _ => String::new(),
                    })
                    fill=text_attr(|s| match s {
                        Shape::Text { fill, .. } => fill.clone(),
                        _ => String::new(),
                    })
                    opacity=opacity
                    style="pointer-events: none;"
                >
                    {text_attr(|s| match s {
                        Shape::Text { text, .. } => text.clone(),
                        _ => String::new(),
                    })}
                </text>
            }
            .into_any()
        }
        Some(Shape::Line { .. }) => {
            let line_attr = move |f: fn(&Shape) -> String| {
                move || shape.with(|s| s.as_ref().map(f).unwrap_or_default())
            };
            view! {
                <line
                    x1=line_attr(|s| match s {
                        Shape::Line { x1, .. } => px(*x1),
                        _ => String::new(),
                    })
                    y1=line_attr(|s| match s {
                        Shape::Line { y1, .. } => px(*y1),
                        _ => String::new(),
                    })
                    x2=line_attr(|s| match s {
                        Shape::Line { x2, .. } => px(*x2),
                        _ => String::new(),
                    })
                    y2=line_attr(|s| match s {
                        Shape::Line { y2, .. } => px(*y2),
                        _ => String::new(),
                    })
                    stroke=line_attr(|s| match s {
                        Shape::Line { stroke, .. } => stroke.clone(),
                        _ => String::new(),
                    })
                    stroke-dasharray=line_attr(|s| match s {
                        Shape::Line { dashed: true, .. } => "2,2".to_string(),
                        _ => "none".to_string(),
                    })
                />
            }
            .into_any()
        }
        Some(Shape::Swatch { .. }) => {
            let swatch_attr = move |f: fn(&Shape) -> String| {
                move || shape.with(|s| s.as_ref().map(f).unwrap_or_default())
            };
            view! {
                <rect
                    x=swatch_attr(|s| match s {
                        Shape::Swatch { x, .. } => px(*x),
                        _ => String::new(),
                    })
                    y=swatch_attr(|s| match s {
                        Shape::Swatch { y, .. } => px(*y),
                        _ => String::new(),
                    })
                    width=swatch_attr(|s| match s {
                        Shape::Swatch { size, .. } => px(*size),
                        _ => String::new(),
                    })
                    height=swatch_attr(|s| match s {
                        Shape::Swatch { size, .. } => px(*size),
                        _ => String::new(),
                    })
                    rx="2"
                    fill=swatch_attr(|s| match s {
                        Shape::Swatch { fill, .. } => fill.clone(),
                        _ => String::new(),
                    })
                />
            }
            .into_any()
        }
        None => ().into_any(),
    }
}
