//! Player state: eased kinematics with axis-separated wall collision,
//! fire cooldown, and the post-hit invulnerability window.
//!
//! Engine-owned struct, not an ECS entity — only enemies need entity
//! lifecycle.

use glam::DVec2;

use ricochet_core::constants::*;
use ricochet_core::enums::PlayerMode;
use ricochet_core::types::Rect;

#[derive(Debug, Clone)]
pub struct Player {
    pub pos: DVec2,
    /// Eased velocity; the input-derived target is recomputed every tick.
    pub velocity: DVec2,
    pub health: u32,
    pub mode: PlayerMode,
    pub invulnerable: bool,
    invulnerability_timer: f64,
    pub can_fire: bool,
    cooldown_timer: f64,
}

impl Player {
    pub fn new(pos: DVec2) -> Self {
        Self {
            pos,
            velocity: DVec2::ZERO,
            health: PLAYER_MAX_HEALTH,
            mode: PlayerMode::default(),
            invulnerable: false,
            invulnerability_timer: 0.0,
            can_fire: true,
            cooldown_timer: 0.0,
        }
    }

    /// Player collision box centered on the current position.
    pub fn rect(&self) -> Rect {
        Rect::from_center(self.pos, PLAYER_SIZE, PLAYER_SIZE)
    }

    /// Advance kinematics and timers by one tick.
    ///
    /// Movement input is ignored while Aiming (the eased velocity still
    /// decays toward zero, so releasing the fire button mid-slide does not
    /// teleport the momentum back).
    pub fn update(&mut self, dt: f64, move_input: DVec2, walls: &[Rect]) {
        let input = if self.mode == PlayerMode::Maneuvering {
            move_input.normalize_or_zero()
        } else {
            DVec2::ZERO
        };
        let target = input * PLAYER_MAX_VELOCITY;

        self.velocity.x = ease_axis(self.velocity.x, target.x, dt);
        self.velocity.y = ease_axis(self.velocity.y, target.y, dt);

        self.integrate(dt, walls);
        self.update_cooldown(dt);
        self.update_invulnerability(dt);
    }

    /// Axis-separated collision: each axis's candidate position is tested
    /// against every wall independently, so an obstruction on one axis
    /// zeroes only that velocity component and the player slides along
    /// walls instead of stopping dead on a diagonal approach.
    fn integrate(&mut self, dt: f64, walls: &[Rect]) {
        if self.velocity == DVec2::ZERO {
            return;
        }

        let new_x = self.pos.x + self.velocity.x * dt;
        let candidate = Rect::from_center(DVec2::new(new_x, self.pos.y), PLAYER_SIZE, PLAYER_SIZE);
        if walls.iter().any(|w| candidate.overlaps(w)) {
            self.velocity.x = 0.0;
        } else {
            self.pos.x = new_x;
        }

        let new_y = self.pos.y + self.velocity.y * dt;
        let candidate = Rect::from_center(DVec2::new(self.pos.x, new_y), PLAYER_SIZE, PLAYER_SIZE);
        if walls.iter().any(|w| candidate.overlaps(w)) {
            self.velocity.y = 0.0;
        } else {
            self.pos.y = new_y;
        }
    }

    fn update_cooldown(&mut self, dt: f64) {
        if !self.can_fire {
            self.cooldown_timer += dt;
            if self.cooldown_timer >= FIRE_COOLDOWN_SECS {
                self.can_fire = true;
                self.cooldown_timer = 0.0;
            }
        }
    }

    fn update_invulnerability(&mut self, dt: f64) {
        if self.invulnerable {
            self.invulnerability_timer += dt;
            if self.invulnerability_timer >= PLAYER_INVULNERABILITY_SECS {
                self.invulnerable = false;
            }
        }
    }

    /// Consume a shot if the cooldown allows. Returns whether the shot
    /// happened; a cooldown refusal is a silent no-op, not an error.
    pub fn try_fire(&mut self) -> bool {
        if self.can_fire {
            self.can_fire = false;
            self.cooldown_timer = 0.0;
            true
        } else {
            false
        }
    }

    /// Apply contact damage. No-op while invulnerable. Returns whether
    /// health reached zero.
    pub fn take_damage(&mut self) -> bool {
        if self.invulnerable {
            return false;
        }
        self.health = self.health.saturating_sub(1);
        self.health == 0
    }

    pub fn make_invulnerable(&mut self) {
        self.invulnerable = true;
        self.invulnerability_timer = 0.0;
    }

    /// Fraction of the fire cooldown elapsed; 1.0 = ready.
    pub fn cooldown_fraction(&self) -> f64 {
        if self.can_fire {
            1.0
        } else {
            (self.cooldown_timer / FIRE_COOLDOWN_SECS).clamp(0.0, 1.0)
        }
    }
}

/// Ease one velocity component toward its target, accelerating when the
/// target calls for more speed and decelerating (at the slower rate) when
/// it calls for less, clamping at the target to avoid overshoot.
fn ease_axis(current: f64, target: f64, dt: f64) -> f64 {
    let rate = if target.abs() > current.abs() {
        PLAYER_ACCELERATION
    } else {
        PLAYER_DECELERATION
    };
    let step = rate * PLAYER_MAX_VELOCITY * dt;

    if target > current {
        (current + step).min(target)
    } else if target < current {
        (current - step).max(target)
    } else {
        current
    }
}
