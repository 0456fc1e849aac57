//! Actor state: steering, movement, and edge wrapping.

use chomper_types::{Heading, Vec2};

use crate::mouth::MouthOscillator;

/// Full per-frame state of the on-screen actor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Player {
    /// Continuous position in pixels.
    pub pos: Vec2,
    /// Current heading as an axis-aligned unit vector, or zero when idle.
    pub direction: Vec2,
    /// Angle the mouth wedge is centered on, in degrees (0 = right).
    pub facing_deg: f32,
    pub mouth: MouthOscillator,
}

impl Player {
    /// A stationary player facing right with the mouth fully open.
    pub fn new(pos: Vec2) -> Self {
        Self {
            pos,
            direction: Vec2::ZERO,
            facing_deg: 0.0,
            mouth: MouthOscillator::default(),
        }
    }

    /// Apply a steering intent for this frame.
    ///
    /// `None` (no movement key held) keeps the current direction and
    /// facing, so the actor coasts along its last heading.
    pub fn steer(&mut self, intent: Option<Heading>) {
        let Some(heading) = intent else {
            return;
        };

        let mut direction = heading.direction();
        // No diagonals: the horizontal component wins if both axes are set.
        if direction.x != 0.0 && direction.y != 0.0 {
            direction.y = 0.0;
        }

        self.direction = direction;
        self.facing_deg = heading.facing_deg();
    }

    /// Advance one frame along the current direction.
    pub fn advance(&mut self, speed: f32) {
        self.pos.x += speed * self.direction.x;
        self.pos.y += speed * self.direction.y;
    }

    /// Teleport across window edges, independently per axis.
    ///
    /// The wrap triggers once the center is more than two radii outside
    /// the window but re-enters only one radius out, so the actor is
    /// fully hidden before it reappears on the far side.
    pub fn wrap(&mut self, width: f32, height: f32, radius: f32) {
        if self.pos.x < -radius * 2.0 {
            self.pos.x = width + radius;
        } else if self.pos.x > width + radius * 2.0 {
            self.pos.x = -radius;
        }

        if self.pos.y < -radius * 2.0 {
            self.pos.y = height + radius;
        } else if self.pos.y > height + radius * 2.0 {
            self.pos.y = -radius;
        }
    }
}
