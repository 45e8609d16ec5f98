//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One tick per frame, no wall-clock reads (elapsed time is an input)
//! - Seeded RNG only
//! - No rendering or platform dependencies

pub mod body;
pub mod state;
pub mod tick;

pub use body::{Arena, Body, Rect};
pub use state::{Explosion, Hunter, Player, SessionPhase, SessionState, Target};
pub use tick::{TickInput, tick};
