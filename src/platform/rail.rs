//! Project rail scrolling and the case-study modal

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Element, HtmlElement, KeyboardEvent, MouseEvent, Node, WheelEvent};

use super::dom;
use crate::FxConfig;
use crate::fx::{CaseModal, ModalContent, RailController};

pub fn setup_rail(config: &FxConfig) -> Result<(), JsValue> {
    let Some(rail) = dom::by_id("projectsRail") else {
        return Ok(());
    };
    let controller = Rc::new(RefCell::new(RailController::new(config.rail_step)));

    {
        let rail_el = rail.clone();
        let controller = controller.clone();
        dom::listen_passive(&rail, "wheel", false, move |e: WheelEvent| {
            let mut c = controller.borrow_mut();
            sync(&mut c, &rail_el);
            let outcome = c.wheel(e.delta_x(), e.delta_y());
            if outcome.consumed {
                e.prevent_default();
                rail_el.set_scroll_left(outcome.offset.round() as i32);
            }
        });
    }
    {
        let rail_el = rail.clone();
        dom::listen(&rail, "keydown", move |e: KeyboardEvent| {
            let mut c = controller.borrow_mut();
            sync(&mut c, &rail_el);
            if let Some(offset) = c.key(&e.key()) {
                rail_el.set_scroll_left(offset.round() as i32);
            }
        });
    }

    setup_modal()?;
    log::info!("Project rail ready");
    Ok(())
}

/// Pick up offset changes made outside the controller (scrollbar, touch)
fn sync(controller: &mut RailController, rail: &Element) {
    let max = (rail.scroll_width() - rail.client_width()).max(0);
    controller.sync(rail.scroll_left() as f64, max as f64);
}

struct ModalView {
    modal: Element,
    title: Element,
    content: Element,
    body: HtmlElement,
}

impl ModalView {
    fn show(&self, content: &ModalContent) {
        self.title.set_text_content(Some(&content.title));
        self.content.set_text_content(Some(&content.body));
        let _ = self.modal.class_list().add_1("open");
        let _ = self.modal.set_attribute("aria-hidden", "false");
        dom::set_style(&self.body, "overflow", "hidden");
    }

    fn hide(&self) {
        let _ = self.modal.class_list().remove_1("open");
        let _ = self.modal.set_attribute("aria-hidden", "true");
        dom::clear_style(&self.body, "overflow");
    }
}

fn setup_modal() -> Result<(), JsValue> {
    let view = Rc::new(ModalView {
        modal: dom::require("caseModal")?,
        title: dom::require("caseTitle")?,
        content: dom::require("caseContent")?,
        body: dom::body()?,
    });
    let close_btn = dom::require("closeCase")?;
    let state = Rc::new(RefCell::new(CaseModal::new()));

    for btn in dom::query_all(".openCase") {
        let view = view.clone();
        let state = state.clone();
        let source = btn.clone();
        dom::listen(&btn, "click", move |_: MouseEvent| {
            let Some(card) = source.closest(".proj").ok().flatten() else {
                return;
            };
            let data_title = card.get_attribute("data-title");
            let heading = card
                .query_selector("h3")
                .ok()
                .flatten()
                .and_then(|h| h.dyn_into::<HtmlElement>().ok())
                .map(|h| h.inner_text());

            let mut modal = state.borrow_mut();
            let content = modal.open(data_title.as_deref(), heading.as_deref());
            log::debug!("Case study opened: {}", content.title);
            view.show(content);
        });
    }

    {
        let view = view.clone();
        let state = state.clone();
        dom::listen(&close_btn, "click", move |_: MouseEvent| {
            state.borrow_mut().close();
            view.hide();
        });
    }

    // Clicks on the backdrop itself close; clicks inside the content don't
    let backdrop = view.modal.clone();
    dom::listen(&backdrop, "click", move |e: MouseEvent| {
        let on_backdrop = e
            .target()
            .and_then(|t| t.dyn_into::<Node>().ok())
            .is_some_and(|node| view.modal.is_same_node(Some(&node)));
        if on_backdrop {
            state.borrow_mut().close();
            view.hide();
        }
    });

    Ok(())
}
