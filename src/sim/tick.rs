//! Per-frame session update
//!
//! One tick per rendered frame. The driver samples the pointer and the level
//! wall clock once per frame and passes both in, which keeps the simulation
//! itself deterministic and easy to script in tests.

use glam::Vec2;

use super::state::{Explosion, SessionPhase, SessionState};

/// Input for a single tick.
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    /// Current pointer position in window coordinates
    pub pointer: Vec2,
    /// Wall-clock seconds since the level started
    pub elapsed_secs: f32,
}

/// Advance the session by one frame.
///
/// Update order matches gameplay: agents move, captures score, a catch ends
/// the round (forfeiting the score), then the timeout check. Explosions
/// advance last so the frame being presented still shows them.
pub fn tick(state: &mut SessionState, input: &TickInput) {
    if state.phase != SessionPhase::Running {
        return;
    }

    let arena = state.arena;
    state.player.update(input.pointer, &arena);
    state.target.update(&arena);
    let player_center = state.player.body.center();
    if let Some(hunter) = state.hunter.as_mut() {
        hunter.update(player_center);
    }

    let player_rect = state.player.body.rect();
    if player_rect.overlaps(&state.target.body.rect()) {
        state.score += state.settings.score_multiplier;
        state.explosions.push(Explosion::new(
            state.target.body.center(),
            state.settings.target_size,
        ));
        state.target.reset_position(&arena, &mut state.rng);
    }

    if let Some(hunter) = &state.hunter {
        if player_rect.overlaps(&hunter.body.rect()) {
            state.phase = SessionPhase::Caught;
            state.score = 0;
        }
    }

    if state.phase == SessionPhase::Running && input.elapsed_secs >= state.duration {
        state.phase = SessionPhase::TimedOut;
    }

    for explosion in &mut state.explosions {
        explosion.advance();
    }
    state.explosions.retain(|e| !e.finished());
}
