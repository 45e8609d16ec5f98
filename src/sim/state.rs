//! Session state and entity types
//!
//! One `SessionState` is one timed level round. Entities are concrete types
//! rather than a sprite hierarchy; `tick` drives them in a fixed order.

use glam::Vec2;
use rand::Rng;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::body::{Arena, Body, Rect};
use crate::consts::*;
use crate::tuning::LevelSettings;

/// Where a level round currently stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    /// Frame loop is active
    Running,
    /// Level timer expired, score kept
    TimedOut,
    /// Hunter touched the player, score forfeited
    Caught,
}

/// The fan-blown penguin.
#[derive(Debug, Clone)]
pub struct Player {
    pub body: Body,
}

impl Player {
    /// Player starts centered in the arena with zero velocity.
    pub fn new(arena: &Arena) -> Self {
        Self {
            body: Body::new(
                Rect::from_center(arena.center(), Vec2::splat(PLAYER_SIZE)).pos,
                Vec2::splat(PLAYER_SIZE),
            ),
        }
    }

    /// One tick of fan repulsion, inertia, and wall clamping.
    ///
    /// The push is an acceleration impulse away from the pointer with linear
    /// falloff over `PUSH_DISTANCE`; decay runs every tick whether or not a
    /// push occurred. Velocity is never capped: the impulse/decay equilibrium
    /// bounds it in practice.
    pub fn update(&mut self, pointer: Vec2, arena: &Arena) {
        let delta = pointer - self.body.center();
        let distance = delta.length();

        if distance > 0.0 && distance < PUSH_DISTANCE {
            let speed_multiplier = (1.0 - distance / PUSH_DISTANCE) * MAX_SPEED_MULTIPLIER + 1.0;
            let speed = PLAYER_BASE_SPEED * speed_multiplier;
            self.body.vel += -delta / distance * speed * PUSH_FACTOR;
        }

        self.body.integrate();
        self.body.vel *= INERTIA_DECAY;
        self.body.clamp_to(arena);
    }
}

/// The fish the player scores on.
#[derive(Debug, Clone)]
pub struct Target {
    pub body: Body,
    pub moves: bool,
}

impl Target {
    /// Spawn at a random in-bounds spot. Velocity signs are chosen randomly
    /// once; a non-moving target keeps its velocity but never applies it.
    pub fn new(settings: &LevelSettings, arena: &Arena, rng: &mut Pcg32) -> Self {
        let size = Vec2::splat(settings.target_size);
        let mut body = Body::new(arena.random_pos(size, rng), size);
        body.vel = Vec2::new(
            random_sign(rng) * settings.target_speed,
            random_sign(rng) * settings.target_speed,
        );
        Self {
            body,
            moves: settings.target_moves,
        }
    }

    /// Relocate to a fresh random in-bounds position (spawn and after capture).
    pub fn reset_position(&mut self, arena: &Arena, rng: &mut Pcg32) {
        self.body.pos = arena.random_pos(self.body.size, rng);
    }

    /// Integrate and bounce. The reflection negates exactly the velocity
    /// component whose bound was crossed; the position is not re-clamped.
    pub fn update(&mut self, arena: &Arena) {
        if !self.moves {
            return;
        }
        self.body.integrate();

        let rect = self.body.rect();
        if rect.min().x < arena.bounds.min().x || rect.max().x > arena.bounds.max().x {
            self.body.vel.x = -self.body.vel.x;
        }
        if rect.min().y < arena.bounds.min().y || rect.max().y > arena.bounds.max().y {
            self.body.vel.y = -self.body.vel.y;
        }
    }
}

fn random_sign(rng: &mut Pcg32) -> f32 {
    if rng.random_bool(0.5) { 1.0 } else { -1.0 }
}

/// Constant-speed pursuer, present from level 2 on.
#[derive(Debug, Clone)]
pub struct Hunter {
    pub body: Body,
    pub speed: f32,
}

impl Hunter {
    /// Spawn in bounds, rejection-sampled to keep at least
    /// `MIN_HUNTER_DISTANCE` from the player so the level cannot open with an
    /// instant catch. The retry loop is capped; with the arena much larger
    /// than the minimum distance the cap is never reached in practice.
    pub fn spawn(speed: f32, player_center: Vec2, arena: &Arena, rng: &mut Pcg32) -> Self {
        let size = Vec2::splat(HUNTER_SIZE);
        let mut pos = arena.random_pos(size, rng);
        for _ in 0..HUNTER_SPAWN_ATTEMPTS {
            let center = pos + size / 2.0;
            if center.distance(player_center) >= MIN_HUNTER_DISTANCE {
                break;
            }
            pos = arena.random_pos(size, rng);
        }
        Self {
            body: Body::new(pos, size),
            speed,
        }
    }

    /// Step exactly `speed` pixels toward the player center.
    ///
    /// The hunter is intentionally never clamped back into the arena: chasing
    /// a cornered player can carry it slightly past the wall.
    pub fn update(&mut self, player_center: Vec2) {
        let delta = player_center - self.body.center();
        let distance = delta.length();
        if distance > 0.0 {
            self.body.pos += delta / distance * self.speed;
        }
    }
}

/// Capture burst: an expanding circle played over six frames.
#[derive(Debug, Clone)]
pub struct Explosion {
    pub center: Vec2,
    pub size: f32,
    frames: [f32; EXPLOSION_FRAMES],
    cursor: usize,
    timer: u32,
}

impl Explosion {
    /// Frames are precomputed radii growing to half the captured target size.
    pub fn new(center: Vec2, target_size: f32) -> Self {
        let half = target_size / 2.0;
        let mut frames = [0.0; EXPLOSION_FRAMES];
        for (i, radius) in frames.iter_mut().enumerate() {
            *radius = half * (i + 1) as f32 / EXPLOSION_FRAMES as f32;
        }
        Self {
            center,
            size: target_size,
            frames,
            cursor: 0,
            timer: 0,
        }
    }

    /// Radius of the frame currently showing.
    pub fn radius(&self) -> f32 {
        self.frames[self.cursor.min(EXPLOSION_FRAMES - 1)]
    }

    pub fn rect(&self) -> Rect {
        Rect::from_center(self.center, Vec2::splat(self.size))
    }

    /// Count one tick; move the cursor every `EXPLOSION_FRAME_TICKS` ticks.
    pub fn advance(&mut self) {
        self.timer += 1;
        if self.timer >= EXPLOSION_FRAME_TICKS {
            self.timer = 0;
            self.cursor += 1;
        }
    }

    /// True once every frame has been shown; the session drops it then.
    pub fn finished(&self) -> bool {
        self.cursor >= EXPLOSION_FRAMES
    }
}

/// Complete state of one timed level round.
#[derive(Debug, Clone)]
pub struct SessionState {
    pub level: u32,
    pub settings: LevelSettings,
    pub arena: Arena,
    pub phase: SessionPhase,
    /// Wall-clock length of this round in seconds
    pub duration: f32,
    pub score: u32,
    pub player: Player,
    pub target: Target,
    pub hunter: Option<Hunter>,
    pub explosions: Vec<Explosion>,
    pub rng: Pcg32,
}

impl SessionState {
    /// Build a fresh round: player centered, target random, hunter spawned
    /// only when the level enables it.
    pub fn new(level: u32, settings: LevelSettings, seed: u64) -> Self {
        let arena = Arena::from_window();
        let mut rng = Pcg32::seed_from_u64(seed);

        let player = Player::new(&arena);
        let target = Target::new(&settings, &arena, &mut rng);
        let hunter = settings.hunter_enabled.then(|| {
            Hunter::spawn(settings.hunter_speed, player.body.center(), &arena, &mut rng)
        });

        Self {
            level,
            settings,
            arena,
            phase: SessionPhase::Running,
            duration: LEVEL_DURATION,
            score: 0,
            player,
            target,
            hunter,
            explosions: Vec::new(),
            rng,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tuning;

    fn far_pointer() -> Vec2 {
        // Outside push range of an arena-centered player
        Vec2::new(10_000.0, 10_000.0)
    }

    #[test]
    fn test_decay_shrinks_velocity_without_reversing() {
        let arena = Arena::from_window();
        let mut player = Player::new(&arena);
        player.body.vel = Vec2::new(4.0, -2.5);

        let mut prev = player.body.vel;
        for _ in 0..40 {
            player.update(far_pointer(), &arena);
            let vel = player.body.vel;
            assert!(vel.length() < prev.length());
            assert!(vel.x * prev.x >= 0.0 && vel.y * prev.y >= 0.0);
            assert!((vel - prev * INERTIA_DECAY).length() < 1e-4);
            prev = vel;
        }
    }

    #[test]
    fn test_push_accelerates_away_from_pointer() {
        let arena = Arena::from_window();
        let mut player = Player::new(&arena);
        // Pointer just right of the player center
        let pointer = player.body.center() + Vec2::new(60.0, 0.0);

        player.update(pointer, &arena);
        assert!(player.body.vel.x < 0.0);
        assert_eq!(player.body.vel.y, 0.0);
    }

    #[test]
    fn test_push_strength_scales_with_proximity() {
        let arena = Arena::from_window();

        let mut near = Player::new(&arena);
        let near_pointer = near.body.center() + Vec2::new(20.0, 0.0);
        near.update(near_pointer, &arena);

        let mut far = Player::new(&arena);
        let far_pointer = far.body.center() + Vec2::new(110.0, 0.0);
        far.update(far_pointer, &arena);

        assert!(near.body.vel.length() > far.body.vel.length());
    }

    #[test]
    fn test_pointer_on_center_applies_no_push() {
        let arena = Arena::from_window();
        let mut player = Player::new(&arena);
        player.update(player.body.center(), &arena);
        assert_eq!(player.body.vel, Vec2::ZERO);
    }

    #[test]
    fn test_target_bounce_preserves_speed() {
        let arena = Arena::from_window();
        let settings = tuning::builtin_levels()[2]; // moving target, speed 2
        let mut rng = Pcg32::seed_from_u64(3);
        let mut target = Target::new(&settings, &arena, &mut rng);

        // Park just inside the right wall heading out, well clear of the
        // top/bottom bounds
        target.body.pos = Vec2::new(arena.bounds.max().x - target.body.size.x - 1.0, 300.0);
        target.body.vel = Vec2::new(2.0, 2.0);
        let speed_before = target.body.vel.length();

        target.update(&arena);
        assert_eq!(target.body.vel.x, -2.0);
        assert_eq!(target.body.vel.y, 2.0);
        assert_eq!(target.body.vel.length(), speed_before);
    }

    #[test]
    fn test_stationary_target_never_moves() {
        let arena = Arena::from_window();
        let settings = tuning::builtin_levels()[1]; // static target
        let mut rng = Pcg32::seed_from_u64(3);
        let mut target = Target::new(&settings, &arena, &mut rng);
        let pos = target.body.pos;

        for _ in 0..100 {
            target.update(&arena);
        }
        assert_eq!(target.body.pos, pos);
    }

    #[test]
    fn test_hunter_moves_exactly_its_speed() {
        let arena = Arena::from_window();
        let mut rng = Pcg32::seed_from_u64(11);
        let player_center = arena.center();
        let mut hunter = Hunter::spawn(2.0, player_center, &arena, &mut rng);

        for _ in 0..20 {
            let before = hunter.body.pos;
            hunter.update(player_center);
            let step = (hunter.body.pos - before).length();
            if hunter.body.center().distance(player_center) > 2.0 {
                assert!((step - 2.0).abs() < 1e-3);
            }
        }
    }

    #[test]
    fn test_hunter_spawns_away_from_player() {
        let arena = Arena::from_window();
        let player_center = arena.center();
        for seed in 0..50 {
            let mut rng = Pcg32::seed_from_u64(seed);
            let hunter = Hunter::spawn(1.0, player_center, &arena, &mut rng);
            assert!(hunter.body.center().distance(player_center) >= MIN_HUNTER_DISTANCE);
        }
    }

    #[test]
    fn test_hunter_idles_on_top_of_player() {
        let arena = Arena::from_window();
        let mut rng = Pcg32::seed_from_u64(5);
        let mut hunter = Hunter::spawn(2.0, arena.center(), &arena, &mut rng);
        let on_top = hunter.body.center();
        let pos = hunter.body.pos;

        hunter.update(on_top);
        assert_eq!(hunter.body.pos, pos);
    }

    #[test]
    fn test_explosion_plays_all_frames_then_finishes() {
        let mut explosion = Explosion::new(Vec2::new(100.0, 100.0), 50.0);
        assert_eq!(explosion.radius(), 25.0 / 6.0);

        let mut radii = vec![explosion.radius()];
        while !explosion.finished() {
            explosion.advance();
            if !explosion.finished() {
                radii.push(explosion.radius());
            }
        }
        radii.dedup();

        // Six distinct radii, growing to half the target size
        assert_eq!(radii.len(), EXPLOSION_FRAMES);
        assert!(radii.windows(2).all(|w| w[0] < w[1]));
        assert_eq!(*radii.last().unwrap(), 25.0);
    }

    #[test]
    fn test_session_spawns_hunter_only_when_enabled() {
        let levels = tuning::builtin_levels();
        let level1 = SessionState::new(1, levels[0], 42);
        let level2 = SessionState::new(2, levels[1], 42);

        assert!(level1.hunter.is_none());
        assert!(level2.hunter.is_some());
        assert_eq!(level1.score, 0);
        assert_eq!(level1.phase, SessionPhase::Running);
        assert_eq!(level1.player.body.center(), level1.arena.center());
    }
}
