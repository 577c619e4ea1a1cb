//! Portfolio FX entry point
//!
//! On the web this boots every page effect. Natively it runs the effect models
//! headless and logs what the page would show.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Info).is_err() {
        web_sys::console::warn_1(&"Logger already initialised".into());
    }
    log::info!("Portfolio FX starting...");
    portfolio_fx::platform::boot();
}

/// Stop running animations; exposed for hosts that unmount the page
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen]
pub fn teardown() {
    portfolio_fx::platform::teardown();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Portfolio FX (native) starting...");
    log::info!("Native mode has no DOM - serve the web build for the real page");

    demo::run();
}

#[cfg(not(target_arch = "wasm32"))]
mod demo {
    use glam::Vec2;

    use portfolio_fx::fx::{
        ContactFlow, ParticleField, RailController, TextCycler, VisibilityReactor,
        scroll_fraction,
    };
    use portfolio_fx::persistence::{MemoryStore, Store};
    use portfolio_fx::{BadgeBook, FxConfig, ThemeManager};

    pub fn run() {
        let config = FxConfig::load();

        // One full phrase cycle of the headline, on simulated time
        let mut typer = TextCycler::new(&config.phrases, config.typer_timing());
        let mut elapsed_ms = 0u64;
        loop {
            let frame = typer.tick();
            elapsed_ms += frame.next_delay_ms as u64;
            log::debug!("{:>6}ms {}", elapsed_ms, frame.text);
            if typer.char_count() == 0 {
                break;
            }
        }
        println!("Typer: first phrase cycled in {}ms", elapsed_ms);

        let mut field = ParticleField::new(config.particle_spawn(), Vec2::new(1280.0, 720.0), 1);
        for _ in 0..600 {
            field.step();
        }
        println!("Particles: {} stepped 600 frames", field.particles().len());

        let mut reactor = VisibilityReactor::with_len(4);
        for (i, section) in ["hero", "about", "projects", "contact"].into_iter().enumerate() {
            reactor.observe(i, true, Some(section));
        }
        println!("Mood after scrolling down: {:?}", reactor.mood());

        let mut rail = RailController::new(config.rail_step);
        rail.sync(0.0, 2400.0);
        rail.wheel(5.0, 40.0);
        rail.key("ArrowRight");
        println!("Rail offset: {}", rail.offset());

        let mut store = MemoryStore::new();
        let mut theme = ThemeManager::load(&mut store);
        theme.toggle(&mut store);
        println!(
            "Theme: {} (stored {:?})",
            theme.current().as_str(),
            store.get(ThemeManager::STORAGE_KEY)
        );

        let mut badges = BadgeBook::load(&store);
        for top in [0.0, 600.0, 1200.0, 900.0, 2000.0] {
            let p = scroll_fraction(top, 3000.0, 800.0);
            for m in badges.record(p) {
                println!("Badge unlocked at {:.0}%: {}", p * 100.0, m.id);
            }
        }
        badges.save(&mut store);

        let mut contact = ContactFlow::new();
        for answer in ["Ada", "", "ada@example.com", "Hello"] {
            contact.submit(answer);
        }
        println!(
            "Contact: done={} name={} email={} message={}",
            contact.is_done(),
            contact.name(),
            contact.email(),
            contact.message()
        );
    }
}
