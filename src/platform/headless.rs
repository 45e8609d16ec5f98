//! Scripted frontend for windowless runs
//!
//! Plays the game without a display: the pointer orbits the arena center so
//! the fan keeps nudging the penguin, and key presses arrive on their own so
//! the blocking screens advance. Driver tests use the same type with a fixed
//! pointer and queued events.

use std::collections::VecDeque;

use glam::Vec2;

use super::{Event, Frontend};
use crate::consts::{HEIGHT, WIDTH};
use crate::ui::Scene;

/// How far the scripted pointer orbits from the window center.
const ORBIT_RADIUS: f32 = 180.0;
/// Orbit advance per pointer sample (radians).
const ORBIT_STEP: f32 = 0.04;
/// With auto-key on, a key press is synthesized every this many polls.
const AUTO_KEY_POLLS: u32 = 30;

pub struct HeadlessFrontend {
    queued: VecDeque<Event>,
    auto_key: bool,
    polls: u32,
    orbit: Option<f32>,
    pointer: Vec2,
    /// Frames presented so far
    pub frames: u64,
    /// Text-only screens shown, in order (title, banners, summary)
    pub text_screens: Vec<Vec<String>>,
    /// Last scene presented, whatever its kind
    pub last_scene: Option<Scene>,
}

impl HeadlessFrontend {
    /// Demo frontend: orbiting pointer, automatic key presses.
    pub fn new() -> Self {
        Self {
            queued: VecDeque::new(),
            auto_key: true,
            polls: 0,
            orbit: Some(0.0),
            pointer: Vec2::new(WIDTH, HEIGHT) / 2.0,
            frames: 0,
            text_screens: Vec::new(),
            last_scene: None,
        }
    }

    /// Test frontend: pointer pinned to `pointer`, automatic key presses.
    pub fn pinned(pointer: Vec2) -> Self {
        Self {
            orbit: None,
            pointer,
            ..Self::new()
        }
    }

    /// Queue an event ahead of any synthesized key presses.
    pub fn push_event(&mut self, event: Event) {
        self.queued.push_back(event);
    }
}

impl Default for HeadlessFrontend {
    fn default() -> Self {
        Self::new()
    }
}

impl Frontend for HeadlessFrontend {
    fn poll_events(&mut self) -> Vec<Event> {
        self.polls += 1;
        if !self.queued.is_empty() {
            return self.queued.drain(..).collect();
        }
        if self.auto_key && self.polls % AUTO_KEY_POLLS == 0 {
            return vec![Event::KeyDown];
        }
        Vec::new()
    }

    fn pointer(&mut self) -> Vec2 {
        if let Some(angle) = self.orbit.as_mut() {
            *angle += ORBIT_STEP;
            self.pointer = Vec2::new(WIDTH, HEIGHT) / 2.0
                + Vec2::new(angle.cos(), angle.sin()) * ORBIT_RADIUS;
        }
        self.pointer
    }

    fn present(&mut self, scene: &Scene) {
        self.frames += 1;
        if scene.sprites.is_empty() {
            self.text_screens.push(scene.lines.clone());
        }
        self.last_scene = Some(scene.clone());
    }
}
