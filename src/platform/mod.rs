//! Browser platform layer
//!
//! Wires DOM, pointer, scroll and timer events to the `fx` models:
//! - `dom`: lookups, listeners, style helpers
//! - `timer`: timeouts, async sleep, cancellable frame loop
//! - one module per group of page behaviours
//!
//! Every unit is set up independently. A unit whose required elements are
//! missing logs a warning and stays off; the rest of the page still runs.

#[cfg(target_arch = "wasm32")]
pub mod chrome;
#[cfg(target_arch = "wasm32")]
pub mod dom;
#[cfg(target_arch = "wasm32")]
pub mod hero;
#[cfg(target_arch = "wasm32")]
pub mod pointer;
#[cfg(target_arch = "wasm32")]
pub mod rail;
#[cfg(target_arch = "wasm32")]
pub mod scroll;
#[cfg(target_arch = "wasm32")]
pub mod timer;

#[cfg(target_arch = "wasm32")]
pub use web::{boot, teardown};

#[cfg(target_arch = "wasm32")]
mod web {
    use std::cell::RefCell;

    use wasm_bindgen::JsValue;

    use super::timer::FrameLoop;
    use super::{chrome, hero, pointer, rail, scroll};
    use crate::FxConfig;

    /// Long-lived handles owned by the running page
    struct Page {
        particles: Option<FrameLoop>,
    }

    thread_local! {
        static PAGE: RefCell<Option<Page>> = const { RefCell::new(None) };
    }

    /// Initialize every effect on the current document
    pub fn boot() {
        let config = FxConfig::load();

        hero::setup_year();
        run_unit("typer", || hero::setup_typer(&config));
        let particles = hero::setup_particles(&config);
        hero::setup_glow();
        run_unit("reveal", || scroll::setup_reveal(&config));
        pointer::setup_magnetic(&config);
        pointer::setup_tilt(&config);
        run_unit("rail", || rail::setup_rail(&config));
        run_unit("cursor", pointer::setup_cursor);
        run_unit("theme", chrome::setup_theme);
        run_unit("progress", || scroll::setup_progress(&config));
        run_unit("timeline", || scroll::setup_timeline(&config));
        run_unit("contact", || chrome::setup_contact(&config));

        PAGE.with(|page| {
            *page.borrow_mut() = Some(Page { particles });
        });
        log::info!("Portfolio effects running");
    }

    /// Stop the animation loop (for hosts that unmount the page)
    pub fn teardown() {
        PAGE.with(|page| {
            if let Some(page) = page.borrow_mut().take() {
                if let Some(particles) = page.particles {
                    particles.stop();
                }
            }
        });
    }

    fn run_unit(name: &str, setup: impl FnOnce() -> Result<(), JsValue>) {
        if let Err(e) = setup() {
            log::warn!("{} disabled: {:?}", name, e);
        }
    }
}
