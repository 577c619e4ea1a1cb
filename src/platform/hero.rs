//! Hero section: typed headline, particle canvas, pointer glow, footer year

use std::cell::RefCell;
use std::f64::consts::TAU;
use std::rc::Rc;

use glam::Vec2;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, Element, Event, HtmlCanvasElement, HtmlElement, PointerEvent};

use super::dom;
use super::timer::{self, FrameLoop};
use crate::FxConfig;
use crate::fx::{ParticleField, TextCycler};

pub fn setup_typer(config: &FxConfig) -> Result<(), JsValue> {
    let slot = dom::require("typed")?;
    let typer = TextCycler::new(&config.phrases, config.typer_timing());
    log::info!("Typer cycling {} phrases", typer.phrase_count());
    type_next(slot, typer);
    Ok(())
}

fn type_next(slot: Element, mut typer: TextCycler) {
    let frame = typer.tick();
    slot.set_text_content(Some(&frame.text));
    timer::set_timeout(frame.next_delay_ms, move || type_next(slot, typer));
}

/// Start the particle background. `None` if the page has no canvas.
pub fn setup_particles(config: &FxConfig) -> Option<FrameLoop> {
    let canvas: HtmlCanvasElement = dom::by_id_as("particleCanvas")?;
    let ctx = canvas
        .get_context("2d")
        .ok()
        .flatten()?
        .dyn_into::<CanvasRenderingContext2d>()
        .ok()?;

    let size = fit_canvas(&canvas);
    let seed = js_sys::Date::now() as u64;
    let field = Rc::new(RefCell::new(ParticleField::new(
        config.particle_spawn(),
        size,
        seed,
    )));
    log::info!(
        "Particles: {} on {}x{} canvas (seed {})",
        config.particle_count,
        size.x,
        size.y,
        seed
    );

    if let Some(window) = web_sys::window() {
        let canvas = canvas.clone();
        let field = field.clone();
        dom::listen(&window, "resize", move |_: Event| {
            let size = fit_canvas(&canvas);
            field.borrow_mut().resize(size);
        });
    }

    let fill = config.particle_fill.clone();
    Some(FrameLoop::start(move |_time| {
        let mut field = field.borrow_mut();
        field.step();
        draw(&ctx, &field, &fill);
    }))
}

/// Match the canvas backing store to its laid-out size
fn fit_canvas(canvas: &HtmlCanvasElement) -> Vec2 {
    let w = canvas.offset_width().max(0) as u32;
    let h = canvas.offset_height().max(0) as u32;
    canvas.set_width(w);
    canvas.set_height(h);
    Vec2::new(w as f32, h as f32)
}

fn draw(ctx: &CanvasRenderingContext2d, field: &ParticleField, fill: &str) {
    let bounds = field.bounds();
    ctx.clear_rect(0.0, 0.0, bounds.x as f64, bounds.y as f64);
    ctx.set_fill_style_str(fill);
    for p in field.particles() {
        ctx.begin_path();
        let _ = ctx.arc(p.pos.x as f64, p.pos.y as f64, p.radius as f64, 0.0, TAU);
        ctx.fill();
    }
}

/// Feed the pointer position to the hero's glow styling
pub fn setup_glow() {
    let Some(hero) = dom::by_id_as::<HtmlElement>("hero") else {
        return;
    };
    let target = hero.clone();
    dom::listen(&hero, "pointermove", move |e: PointerEvent| {
        dom::set_style(&target, "--mx", &format!("{}px", e.client_x()));
        dom::set_style(&target, "--my", &format!("{}px", e.client_y()));
    });
}

pub fn setup_year() {
    if let Some(slot) = dom::by_id("year") {
        let year = js_sys::Date::new_0().get_full_year();
        slot.set_text_content(Some(&year.to_string()));
    }
}
