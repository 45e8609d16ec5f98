//! Kinematic primitives shared by every moving entity
//!
//! Sprites are axis-aligned rectangles addressed by their top-left corner.
//! The arena is the window rectangle inset by the border margin; a sprite is
//! in bounds when its whole rectangle fits inside.

use glam::Vec2;
use rand::Rng;
use rand_pcg::Pcg32;

use crate::consts::{BORDER_SIZE, HEIGHT, WIDTH};

/// Axis-aligned rectangle. `pos` is the top-left corner.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub pos: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub fn new(pos: Vec2, size: Vec2) -> Self {
        Self { pos, size }
    }

    pub fn from_center(center: Vec2, size: Vec2) -> Self {
        Self {
            pos: center - size / 2.0,
            size,
        }
    }

    #[inline]
    pub fn min(&self) -> Vec2 {
        self.pos
    }

    #[inline]
    pub fn max(&self) -> Vec2 {
        self.pos + self.size
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        self.pos + self.size / 2.0
    }

    /// Strict AABB overlap test.
    ///
    /// Rectangles that merely share an edge (zero overlap area) do not count
    /// as overlapping.
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.min().x < other.max().x
            && self.max().x > other.min().x
            && self.min().y < other.max().y
            && self.max().y > other.min().y
    }
}

/// The playable region inside the border margin.
#[derive(Debug, Clone, Copy)]
pub struct Arena {
    pub bounds: Rect,
}

impl Arena {
    /// Arena for the fixed window size, inset by `BORDER_SIZE` on all sides.
    pub fn from_window() -> Self {
        Self {
            bounds: Rect {
                pos: Vec2::splat(BORDER_SIZE),
                size: Vec2::new(WIDTH, HEIGHT) - 2.0 * Vec2::splat(BORDER_SIZE),
            },
        }
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        self.bounds.center()
    }

    /// Largest top-left coordinate a sprite of `size` may occupy.
    fn max_pos(&self, size: Vec2) -> Vec2 {
        self.bounds.max() - size
    }

    /// Snap a sprite's top-left so the whole sprite stays in bounds.
    pub fn clamp_pos(&self, pos: Vec2, size: Vec2) -> Vec2 {
        pos.clamp(self.bounds.min(), self.max_pos(size))
    }

    /// Uniformly random in-bounds top-left for a sprite of `size`.
    pub fn random_pos(&self, size: Vec2, rng: &mut Pcg32) -> Vec2 {
        let min = self.bounds.min();
        let max = self.max_pos(size);
        Vec2::new(
            rng.random_range(min.x..=max.x),
            rng.random_range(min.y..=max.y),
        )
    }
}

/// Position/velocity/size of a moving sprite.
///
/// Velocities are in pixels per tick; the simulation runs one tick per frame
/// at the fixed frame rate.
#[derive(Debug, Clone, Copy)]
pub struct Body {
    pub pos: Vec2,
    pub vel: Vec2,
    pub size: Vec2,
}

impl Body {
    pub fn new(pos: Vec2, size: Vec2) -> Self {
        Self {
            pos,
            vel: Vec2::ZERO,
            size,
        }
    }

    #[inline]
    pub fn rect(&self) -> Rect {
        Rect::new(self.pos, self.size)
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        self.rect().center()
    }

    /// Advance position by one tick of velocity.
    pub fn integrate(&mut self) {
        self.pos += self.vel;
    }

    /// Clamp into the arena. An axis that ends up exactly on a wall has its
    /// velocity zeroed, so the sprite does not build up speed against it.
    pub fn clamp_to(&mut self, arena: &Arena) {
        self.pos = arena.clamp_pos(self.pos, self.size);

        let min = arena.bounds.min();
        let max = arena.max_pos(self.size);
        if self.pos.x == min.x || self.pos.x == max.x {
            self.vel.x = 0.0;
        }
        if self.pos.y == min.y || self.pos.y == max.y {
            self.vel.y = 0.0;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::SeedableRng;

    #[test]
    fn test_overlap_requires_area() {
        let a = Rect::new(Vec2::new(0.0, 0.0), Vec2::splat(10.0));
        let b = Rect::new(Vec2::new(5.0, 5.0), Vec2::splat(10.0));
        let c = Rect::new(Vec2::new(10.0, 0.0), Vec2::splat(10.0));
        let d = Rect::new(Vec2::new(30.0, 30.0), Vec2::splat(10.0));

        assert!(a.overlaps(&b));
        assert!(b.overlaps(&a));
        // Shared edge, zero area: not a collision
        assert!(!a.overlaps(&c));
        assert!(!a.overlaps(&d));
    }

    #[test]
    fn test_clamp_zeroes_velocity_on_wall() {
        let arena = Arena::from_window();
        let mut body = Body::new(Vec2::new(-500.0, 300.0), Vec2::splat(100.0));
        body.vel = Vec2::new(-4.0, 2.0);

        body.clamp_to(&arena);

        assert_eq!(body.pos.x, BORDER_SIZE);
        assert_eq!(body.vel.x, 0.0);
        // Y axis untouched: not on a wall
        assert_eq!(body.vel.y, 2.0);
    }

    #[test]
    fn test_random_pos_in_bounds() {
        let arena = Arena::from_window();
        let size = Vec2::splat(40.0);
        let mut rng = Pcg32::seed_from_u64(7);
        for _ in 0..200 {
            let pos = arena.random_pos(size, &mut rng);
            assert!(pos.x >= arena.bounds.min().x && pos.x <= arena.bounds.max().x - size.x);
            assert!(pos.y >= arena.bounds.min().y && pos.y <= arena.bounds.max().y - size.y);
        }
    }

    proptest! {
        #[test]
        fn prop_clamped_sprite_always_in_bounds(
            x in -2000.0f32..2000.0,
            y in -2000.0f32..2000.0,
            vx in -50.0f32..50.0,
            vy in -50.0f32..50.0,
        ) {
            let arena = Arena::from_window();
            let mut body = Body::new(Vec2::new(x, y), Vec2::splat(100.0));
            body.vel = Vec2::new(vx, vy);
            body.clamp_to(&arena);

            let rect = body.rect();
            prop_assert!(rect.min().x >= arena.bounds.min().x);
            prop_assert!(rect.min().y >= arena.bounds.min().y);
            prop_assert!(rect.max().x <= arena.bounds.max().x);
            prop_assert!(rect.max().y <= arena.bounds.max().y);
        }
    }
}
