//! Presentation data handed to the frontend
//!
//! The simulation side produces sprite rectangles and text lines; fonts,
//! images and layout are the frontend's concern. Text screens (title, level
//! banner, summary) are plain line lists the frontend centers on its own.

use glam::Vec2;

use crate::consts::FAN_SIZE;
use crate::sim::{Rect, SessionState};

/// What a sprite should be drawn as.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SpriteKind {
    Player,
    Target,
    Hunter,
    /// Expanding capture burst; radius of the frame currently showing
    Explosion { radius: f32 },
    /// Fan sprite drawn at the pointer (the native cursor is hidden)
    Cursor,
}

#[derive(Debug, Clone, Copy)]
pub struct Sprite {
    pub kind: SpriteKind,
    pub rect: Rect,
}

/// One frame's worth of drawing: sprites plus text lines.
#[derive(Debug, Clone, Default)]
pub struct Scene {
    pub sprites: Vec<Sprite>,
    pub lines: Vec<String>,
}

impl Scene {
    /// A text-only screen.
    pub fn text(lines: Vec<String>) -> Self {
        Self {
            sprites: Vec::new(),
            lines,
        }
    }
}

/// HUD strings for a running level: score, remaining whole seconds (floored,
/// never negative), level number.
pub fn hud_lines(score: u32, remaining_secs: f32, level: u32) -> Vec<String> {
    vec![
        format!("Score: {score}"),
        format!("Time: {}", remaining_secs.max(0.0) as u32),
        format!("Level: {level}"),
    ]
}

pub fn title_lines() -> Vec<String> {
    vec![
        "Penguin Drift".to_string(),
        "Press any key to start".to_string(),
    ]
}

pub fn level_banner(level: u32) -> Vec<String> {
    vec![format!("Level {level}")]
}

/// Final screen. A run that beat the stored best celebrates instead of
/// repeating the old record.
pub fn summary_lines(total: u32, best: u32, new_record: bool) -> Vec<String> {
    let mut lines = vec!["Game over".to_string(), format!("Your score: {total}")];
    if new_record {
        lines.push("New record!".to_string());
    } else {
        lines.push(format!("Best score: {best}"));
    }
    lines.push("Press any key to continue".to_string());
    lines
}

/// Build the scene for one gameplay frame.
pub fn frame_scene(state: &SessionState, pointer: Vec2, remaining_secs: f32) -> Scene {
    let mut sprites = vec![
        Sprite {
            kind: SpriteKind::Player,
            rect: state.player.body.rect(),
        },
        Sprite {
            kind: SpriteKind::Target,
            rect: state.target.body.rect(),
        },
    ];
    if let Some(hunter) = &state.hunter {
        sprites.push(Sprite {
            kind: SpriteKind::Hunter,
            rect: hunter.body.rect(),
        });
    }
    for explosion in &state.explosions {
        sprites.push(Sprite {
            kind: SpriteKind::Explosion {
                radius: explosion.radius(),
            },
            rect: explosion.rect(),
        });
    }
    sprites.push(Sprite {
        kind: SpriteKind::Cursor,
        rect: Rect::from_center(pointer, Vec2::splat(FAN_SIZE)),
    });

    Scene {
        sprites,
        lines: hud_lines(state.score, remaining_secs, state.level),
    }
}
