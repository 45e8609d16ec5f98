//! Frontend boundary
//!
//! The game core talks to the display/input subsystem through `Frontend`:
//! a queue of discrete events, the current pointer position, and one present
//! call per frame. A windowed implementation plugs in here; the crate ships
//! a scripted headless frontend used by the binary and the driver tests.

pub mod headless;

pub use headless::HeadlessFrontend;

use glam::Vec2;

use crate::ui::Scene;

/// Discrete input events, drained once per loop iteration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// Window close request. Terminates the run wherever it arrives.
    Quit,
    /// Any key press; the blocking screens only care that one happened.
    KeyDown,
}

/// Display/input subsystem as seen from the game core.
pub trait Frontend {
    /// Drain pending input events.
    fn poll_events(&mut self) -> Vec<Event>;
    /// Current pointer position in window coordinates.
    fn pointer(&mut self) -> Vec2;
    /// Show one frame.
    fn present(&mut self, scene: &Scene);
}
