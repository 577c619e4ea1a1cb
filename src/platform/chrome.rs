//! Page chrome: theme toggle and the chat-style contact form

use std::cell::RefCell;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Event, HtmlButtonElement, HtmlElement, HtmlInputElement, MouseEvent};

use super::{dom, timer};
use crate::fx::contact::CONFIRMATION;
use crate::fx::{ContactEvent, ContactFlow};
use crate::persistence;
use crate::{FxConfig, Theme, ThemeManager};

pub fn setup_theme() -> Result<(), JsValue> {
    let body = dom::body()?;
    let mut store = persistence::open_default();
    let manager = ThemeManager::load(&mut *store);
    apply_theme(&body, manager.current());

    let toggle = dom::require("themeToggle")?;
    let _ = toggle.set_attribute("aria-pressed", manager.current().aria_pressed());

    let state = RefCell::new((manager, store));
    let button = toggle.clone();
    dom::listen(&toggle, "click", move |_: MouseEvent| {
        let mut guard = state.borrow_mut();
        let (manager, store) = &mut *guard;
        let theme = manager.toggle(&mut **store);
        apply_theme(&body, theme);
        let _ = button.set_attribute("aria-pressed", theme.aria_pressed());
    });
    Ok(())
}

fn apply_theme(body: &HtmlElement, theme: Theme) {
    let classes = body.class_list();
    if theme.is_light() {
        let _ = classes.add_1("theme-light");
        let _ = classes.remove_1("theme-dark");
    } else {
        let _ = classes.remove_1("theme-light");
    }
}

pub fn setup_contact(config: &FxConfig) -> Result<(), JsValue> {
    let form = dom::require("chatForm")?;
    let input = dom::require_as::<HtmlInputElement>("chatInput")?;
    let confirm_delay = config.contact_confirm_delay_ms;
    let flow = RefCell::new(ContactFlow::new());

    let source = form.clone();
    dom::listen(&form, "submit", move |e: Event| {
        e.prevent_default();
        let Some(event) = flow.borrow_mut().submit(&input.value()) else {
            return;
        };
        match &event {
            ContactEvent::NameCaptured(name) => {
                echo("respName", name);
                unhide("qEmail");
            }
            ContactEvent::EmailCaptured(email) => {
                echo("respEmail", email);
                unhide("qMsg");
            }
            ContactEvent::MessageCaptured(message) => {
                echo("respMsg", message);
                input.set_disabled(true);
                if let Some(submit) = source
                    .query_selector("button[type=\"submit\"]")
                    .ok()
                    .flatten()
                    .and_then(|b| b.dyn_into::<HtmlButtonElement>().ok())
                {
                    submit.set_disabled(true);
                }
                log::info!("Contact flow complete");
                wasm_bindgen_futures::spawn_local(async move {
                    timer::sleep(confirm_delay).await;
                    if let Some(window) = web_sys::window() {
                        let _ = window.alert_with_message(CONFIRMATION);
                    }
                });
            }
        }
        input.set_value("");
    });

    log::info!("Contact form ready");
    Ok(())
}

/// Show a captured answer in its response bubble
fn echo(id: &str, value: &str) {
    if let Some(el) = dom::by_id_as::<HtmlElement>(id) {
        el.set_text_content(Some(value));
        el.set_hidden(false);
    }
}

fn unhide(id: &str) {
    if let Some(el) = dom::by_id_as::<HtmlElement>(id) {
        el.set_hidden(false);
    }
}
