//! Deterministic effect models
//!
//! Everything that decides *what* the page shows lives here. These modules are
//! pure and platform-free:
//! - No DOM or timer access
//! - Time is passed in (or returned as the next delay)
//! - Seeded RNG only

pub mod contact;
pub mod cursor;
pub mod particles;
pub mod pointer;
pub mod progress;
pub mod rail;
pub mod reveal;
pub mod timeline;
pub mod typer;

pub use contact::{ContactEvent, ContactFlow, ContactStep};
pub use cursor::HoverTracker;
pub use particles::{Particle, ParticleField, Spawn};
pub use pointer::{Tilt, magnetic_offset, magnetic_transform, tilt};
pub use progress::{progress_transform, scroll_fraction};
pub use rail::{CaseModal, ModalContent, RailController, WheelOutcome};
pub use reveal::{Mood, Reaction, VisibilityReactor};
pub use timeline::{marker_offset, section_progress};
pub use typer::{Frame, TextCycler, Timing};
