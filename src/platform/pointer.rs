//! Pointer-reactive bits: magnetic buttons, tilt cards, custom cursor

use std::cell::RefCell;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Element, HtmlElement, PointerEvent};

use super::dom;
use crate::FxConfig;
use crate::consts::{TILT_MOVE_TRANSITION, TILT_RESET_TRANSITION};
use crate::fx::cursor::HOVER_SELECTORS;
use crate::fx::{HoverTracker, magnetic_offset, magnetic_transform, tilt};

pub fn setup_magnetic(config: &FxConfig) {
    let strength = config.magnet_strength;
    let buttons = dom::query_all_as::<HtmlElement>(".magnetic");
    for btn in &buttons {
        {
            let target = btn.clone();
            dom::listen(btn, "pointermove", move |e: PointerEvent| {
                let offset = magnetic_offset(dom::pointer(&e), &dom::bounds(&target), strength);
                dom::set_style(&target, "transform", &magnetic_transform(offset));
            });
        }
        let target = btn.clone();
        dom::listen(btn, "pointerleave", move |_: PointerEvent| {
            dom::clear_style(&target, "transform");
        });
    }
    log::info!("Magnetic: {} elements", buttons.len());
}

pub fn setup_tilt(config: &FxConfig) {
    let divisor = config.tilt_divisor;
    let cards = dom::query_all_as::<HtmlElement>(".proj");
    for card in &cards {
        {
            let target = card.clone();
            dom::listen(card, "pointermove", move |e: PointerEvent| {
                let t = tilt(dom::pointer(&e), &dom::bounds(&target), divisor);
                dom::set_style(&target, "transform", &t.transform());
                dom::set_style(&target, "transition", TILT_MOVE_TRANSITION);
            });
        }
        let target = card.clone();
        dom::listen(card, "pointerleave", move |_: PointerEvent| {
            dom::clear_style(&target, "transform");
            dom::set_style(&target, "transition", TILT_RESET_TRANSITION);
        });
    }
    log::info!("Tilt: {} cards", cards.len());
}

pub fn setup_cursor() -> Result<(), JsValue> {
    let Some(marker) = dom::by_id_as::<HtmlElement>("cursor") else {
        return Ok(());
    };
    let document = dom::document()?;

    {
        let marker = marker.clone();
        dom::listen(&document, "pointermove", move |e: PointerEvent| {
            dom::set_style(&marker, "left", &format!("{}px", e.client_x()));
            dom::set_style(&marker, "top", &format!("{}px", e.client_y()));
        });
    }

    let selector = HOVER_SELECTORS.join(", ");
    let tracker = std::rc::Rc::new(RefCell::new(HoverTracker::new()));
    {
        let marker = marker.clone();
        let tracker = tracker.clone();
        dom::listen(&document, "pointerover", move |e: PointerEvent| {
            let depth = e
                .target()
                .and_then(|t| t.dyn_into::<Element>().ok())
                .map(|el| matching_ancestors(&el, &selector))
                .unwrap_or(0);
            if let Some(grown) = tracker.borrow_mut().enter(depth) {
                set_grown(&marker, grown);
            }
        });
    }
    // Moving between elements fires `pointerover` on the new one; only leaving
    // the page needs handling here.
    dom::listen(&document, "pointerout", move |e: PointerEvent| {
        if e.related_target().is_none() {
            if let Some(grown) = tracker.borrow_mut().leave_document() {
                set_grown(&marker, grown);
            }
        }
    });

    log::info!("Custom cursor ready");
    Ok(())
}

/// Count `el` and its ancestors that match `selector`
fn matching_ancestors(el: &Element, selector: &str) -> usize {
    let mut count = 0;
    let mut current = el.closest(selector).ok().flatten();
    while let Some(found) = current {
        count += 1;
        current = found
            .parent_element()
            .and_then(|parent| parent.closest(selector).ok().flatten());
    }
    count
}

fn set_grown(marker: &HtmlElement, grown: bool) {
    let classes = marker.class_list();
    let _ = if grown {
        classes.add_1("grow")
    } else {
        classes.remove_1("grow")
    };
}
