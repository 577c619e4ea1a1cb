//! Scroll-driven units: reveal + mood, progress bar + badges, timeline marker

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{
    Document, Event, HtmlElement, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit,
};

use super::dom;
use super::timer;
use crate::badges::UNLOCK_MESSAGE;
use crate::fx::{
    Mood, VisibilityReactor, marker_offset, progress_transform, scroll_fraction, section_progress,
};
use crate::persistence;
use crate::{BadgeBook, FxConfig};

/// Attribute tying an observed element back to its reactor slot
const REVEAL_INDEX_ATTR: &str = "data-reveal-index";

const TOAST_STYLE: [(&str, &str); 8] = [
    ("position", "fixed"),
    ("right", "18px"),
    ("top", "18px"),
    ("background", "linear-gradient(135deg,var(--accent1),var(--accent2))"),
    ("color", "#021224"),
    ("padding", "8px 12px"),
    ("border-radius", "10px"),
    ("box-shadow", "var(--shadow)"),
];

pub fn setup_reveal(config: &FxConfig) -> Result<(), JsValue> {
    let body = dom::body()?;
    let targets = dom::query_all(".reveal");
    if targets.is_empty() {
        return Ok(());
    }
    for (i, el) in targets.iter().enumerate() {
        el.set_attribute(REVEAL_INDEX_ATTR, &i.to_string())?;
    }

    let reactor = RefCell::new(VisibilityReactor::with_len(targets.len()));
    let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
        move |entries: js_sys::Array, _observer: IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                let target = entry.target();
                let Some(index) = target
                    .get_attribute(REVEAL_INDEX_ATTR)
                    .and_then(|v| v.parse::<usize>().ok())
                else {
                    continue;
                };
                let section_id = target
                    .closest("section")
                    .ok()
                    .flatten()
                    .map(|s| s.id())
                    .filter(|id| !id.is_empty());

                let reaction = reactor.borrow_mut().observe(
                    index,
                    entry.is_intersecting(),
                    section_id.as_deref(),
                );
                if reaction.newly_revealed {
                    let _ = target.class_list().add_1("in-view");
                }
                if let Some(mood) = reaction.mood {
                    apply_mood(&body, mood);
                }
            }
        },
    );

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(config.reveal_threshold));
    let observer =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;
    callback.forget();
    for el in &targets {
        observer.observe(el);
    }

    log::info!("Reveal: observing {} elements", targets.len());
    Ok(())
}

/// Replace whatever mood class the body carries
fn apply_mood(body: &HtmlElement, mood: Mood) {
    let classes = body.class_list();
    for other in Mood::ALL {
        if other != mood {
            let _ = classes.remove_1(other.class_name());
        }
    }
    let _ = classes.add_1(mood.class_name());
    log::debug!("Mood: {:?}", mood);
}

pub fn setup_progress(config: &FxConfig) -> Result<(), JsValue> {
    let bar = dom::require_as::<HtmlElement>("progress")?;
    let document = dom::document()?;
    let root = document
        .document_element()
        .ok_or_else(|| JsValue::from_str("no document element"))?;

    let mut store = persistence::open_default();
    let mut book = BadgeBook::load(&*store);
    let toast_ms = config.badge_toast_ms;

    let toast_doc = document.clone();
    let mut update = move || {
        let p = scroll_fraction(
            root.scroll_top() as f64,
            root.scroll_height() as f64,
            root.client_height() as f64,
        );
        dom::set_style(&bar, "transform", &progress_transform(p));

        let fresh = book.record(p);
        if !fresh.is_empty() {
            book.save(&mut *store);
            for _ in &fresh {
                show_toast(&toast_doc, toast_ms);
            }
        }
    };
    update();
    dom::listen_passive(&document, "scroll", true, move |_: Event| update());

    log::info!("Progress bar ready");
    Ok(())
}

/// Transient "Badge unlocked!" notice
fn show_toast(document: &Document, duration_ms: u32) {
    let Some(body) = document.body() else {
        return;
    };
    let Some(toast) = document
        .create_element("div")
        .ok()
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
    else {
        return;
    };
    toast.set_text_content(Some(UNLOCK_MESSAGE));
    let _ = toast.set_attribute("class", "badge-toast");
    for (property, value) in TOAST_STYLE {
        dom::set_style(&toast, property, value);
    }
    if body.append_child(&toast).is_err() {
        return;
    }
    wasm_bindgen_futures::spawn_local(async move {
        timer::sleep(duration_ms).await;
        toast.remove();
    });
}

pub fn setup_timeline(config: &FxConfig) -> Result<(), JsValue> {
    let (Some(about), Some(node), Some(_path)) = (
        dom::by_id("about"),
        dom::by_id_as::<HtmlElement>("timelineNode"),
        dom::by_id("timelinePath"),
    ) else {
        return Ok(());
    };
    let window = dom::window()?;
    let document = dom::document()?;
    let track = config.timeline_track_height;
    let margin = config.timeline_margin;

    let viewport = window.clone();
    let update: Rc<dyn Fn()> = Rc::new(move || {
        let rect = about.get_bounding_client_rect();
        let vh = viewport
            .inner_height()
            .ok()
            .and_then(|v| v.as_f64())
            .unwrap_or(0.0);
        let progress = section_progress(vh, rect.top(), rect.height());
        let y = marker_offset(progress, track, margin);
        dom::set_style(&node, "top", &format!("{}px", y));
    });
    update();

    {
        let update = update.clone();
        dom::listen_passive(&document, "scroll", true, move |_: Event| update());
    }
    dom::listen(&window, "resize", move |_: Event| update());

    log::info!("Timeline marker ready");
    Ok(())
}
