use std::f64::consts::TAU;

use leptos::{html, prelude::*};
use leptos_use::{use_raf_fn, UseRafFnCallbackArgs};
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::{
    camera::CameraAnimator,
    config::SiteConfig,
    scene::{hero_draw_list, hero_projector, Backdrop, DrawCmd, DrawItem, Projector},
    section::ActiveSection,
    theme::Theme,
};

/// Full-viewport background. The camera eases toward the waypoint of the
/// active section on every animation frame.
#[component]
pub fn BackdropCanvas() -> impl IntoView {
    let active = expect_context::<ActiveSection>();
    let config = expect_context::<SiteConfig>();
    let theme = expect_context::<RwSignal<Theme>>();

    let canvas_ref = NodeRef::<html::Canvas>::new();
    // particle fields are only needed in the browser
    let backdrop = StoredValue::new(None::<Backdrop>);
    let animator = StoredValue::new(CameraAnimator::new(
        config.camera_start,
        config.smoothing(),
    ));
    let fov = config.fov_degrees();

    use_canvas_loop(canvas_ref, move |elapsed, width, height| {
        let section = active.current_untracked();
        let mut pose = None;
        animator.update_value(|a| pose = Some(*a.frame(section)));
        let pose = pose?;
        let projector = Projector::new(&pose, fov, width, height);
        let palette = theme.get_untracked().palette();
        if backdrop.with_value(Option::is_none) {
            backdrop.set_value(Some(Backdrop::new(&config)));
        }
        backdrop
            .try_with_value(|b| {
                b.as_ref()
                    .map(|b| b.draw_list(elapsed, section, &projector, &palette))
            })
            .flatten()
    });

    view! { <canvas node_ref=canvas_ref class="block w-full h-full"></canvas> }
}

/// Small scene floating behind the hero banner.
#[component]
pub fn HeroCanvas() -> impl IntoView {
    let theme = expect_context::<RwSignal<Theme>>();
    let canvas_ref = NodeRef::<html::Canvas>::new();

    use_canvas_loop(canvas_ref, move |elapsed, width, height| {
        let projector = hero_projector(width, height);
        Some(hero_draw_list(
            elapsed,
            &projector,
            &theme.get_untracked().palette(),
        ))
    });

    view! { <canvas node_ref=canvas_ref class="block w-full h-full"></canvas> }
}

/// Drive `draw` from the display's animation frames for as long as the
/// calling component is mounted. `draw` receives seconds since the first
/// frame and the canvas size in CSS pixels.
fn use_canvas_loop<F>(canvas_ref: NodeRef<html::Canvas>, draw: F)
where
    F: Fn(f32, f32, f32) -> Option<Vec<DrawItem>> + 'static,
{
    let started = StoredValue::new(None::<f64>);

    let _ = use_raf_fn(move |args: UseRafFnCallbackArgs| {
        let start = started.get_value().unwrap_or(args.timestamp);
        started.set_value(Some(start));
        let elapsed = ((args.timestamp - start) / 1000.0) as f32;

        let Some(canvas) = canvas_ref.get_untracked() else {
            return;
        };
        let Some(ctx) = context_2d(&canvas) else {
            return;
        };
        let (width, height) = fit_canvas(&canvas, &ctx);
        if width <= 0.0 || height <= 0.0 {
            return;
        }
        if let Some(items) = draw(elapsed, width as f32, height as f32) {
            paint(&ctx, width, height, &items);
        }
    });
}

fn context_2d(canvas: &HtmlCanvasElement) -> Option<CanvasRenderingContext2d> {
    canvas
        .get_context("2d")
        .ok()
        .flatten()?
        .dyn_into::<CanvasRenderingContext2d>()
        .ok()
}

/// Match the backing store to the element size and device pixel ratio.
fn fit_canvas(canvas: &HtmlCanvasElement, ctx: &CanvasRenderingContext2d) -> (f64, f64) {
    let dpr = window().device_pixel_ratio().clamp(1.0, 2.0);
    let width = canvas.client_width() as f64;
    let height = canvas.client_height() as f64;
    let backing_w = (width * dpr) as u32;
    let backing_h = (height * dpr) as u32;
    if canvas.width() != backing_w || canvas.height() != backing_h {
        canvas.set_width(backing_w);
        canvas.set_height(backing_h);
    }
    let _ = ctx.set_transform(dpr, 0.0, 0.0, dpr, 0.0, 0.0);
    (width, height)
}

fn trace(ctx: &CanvasRenderingContext2d, points: &[[f32; 2]]) {
    ctx.begin_path();
    for (i, [x, y]) in points.iter().enumerate() {
        if i == 0 {
            ctx.move_to(*x as f64, *y as f64);
        } else {
            ctx.line_to(*x as f64, *y as f64);
        }
    }
    ctx.close_path();
}

fn paint(ctx: &CanvasRenderingContext2d, width: f64, height: f64, items: &[DrawItem]) {
    ctx.clear_rect(0.0, 0.0, width, height);
    for item in items {
        match &item.cmd {
            DrawCmd::Polygon {
                points,
                fill,
                alpha,
                stroke,
            } => {
                trace(ctx, points);
                ctx.set_global_alpha(*alpha as f64);
                ctx.set_fill_style_str(fill);
                ctx.fill();
                if let Some(stroke) = stroke {
                    ctx.set_global_alpha(0.9);
                    ctx.set_stroke_style_str(stroke);
                    ctx.set_line_width(1.5);
                    ctx.stroke();
                }
            }
            DrawCmd::Disc {
                center: [x, y],
                radius,
                color,
                alpha,
                glow,
            } => {
                let (x, y, r) = (*x as f64, *y as f64, *radius as f64);
                ctx.begin_path();
                let _ = ctx.arc(x, y, r, 0.0, TAU);
                ctx.set_global_alpha(*alpha as f64);
                let gradient = if *glow {
                    ctx.create_radial_gradient(x - r * 0.3, y - r * 0.3, r * 0.1, x, y, r)
                        .ok()
                } else {
                    None
                };
                match gradient {
                    Some(g) => {
                        let _ = g.add_color_stop(0.0, "#ffffff");
                        let _ = g.add_color_stop(0.4, color);
                        let _ = g.add_color_stop(1.0, color);
                        ctx.set_fill_style_canvas_gradient(&g);
                    }
                    None => ctx.set_fill_style_str(color),
                }
                ctx.fill();
            }
            DrawCmd::Ring {
                points,
                width,
                color,
                alpha,
            } => {
                trace(ctx, points);
                ctx.set_global_alpha(*alpha as f64);
                ctx.set_stroke_style_str(color);
                ctx.set_line_width(*width as f64);
                ctx.stroke();
            }
            DrawCmd::Text {
                at: [x, y],
                text,
                size,
                color,
                alpha,
            } => {
                ctx.set_global_alpha(*alpha as f64);
                ctx.set_fill_style_str(color);
                ctx.set_font(&format!("700 {size:.1}px Inter, system-ui, sans-serif"));
                ctx.set_text_align("center");
                ctx.set_text_baseline("middle");
                let _ = ctx.fill_text(text, *x as f64, *y as f64);
            }
            DrawCmd::Dot {
                at: [x, y],
                size,
                color,
                alpha,
            } => {
                let s = *size as f64;
                ctx.set_global_alpha(*alpha as f64);
                ctx.set_fill_style_str(color);
                ctx.fill_rect(*x as f64 - s / 2.0, *y as f64 - s / 2.0, s, s);
            }
        }
    }
    ctx.set_global_alpha(1.0);
}
