//! The reflector: a cursor-steered secondary entity the beam bounces off.
//!
//! Carries a persistent angular offset that is added to every reflection
//! it produces — session state, not per-shot state.

use glam::DVec2;

use ricochet_core::constants::*;
use ricochet_core::geom;

#[derive(Debug, Clone)]
pub struct Reflector {
    pub pos: DVec2,
    /// Cursor position the reflector eases toward.
    pub target: DVec2,
    /// Post-reflection angular offset, degrees in [0, 360).
    pub offset_deg: f64,
}

impl Reflector {
    pub fn new(pos: DVec2) -> Self {
        Self {
            pos,
            target: pos,
            offset_deg: 0.0,
        }
    }

    /// Ease toward the target. The step scales with the remaining distance,
    /// so the follow is fast at range and settles softly; inside the
    /// deadzone the reflector holds still to avoid jitter.
    pub fn update(&mut self, dt: f64) {
        let to_target = self.target - self.pos;
        let dist = to_target.length();
        if dist > REFLECTOR_FOLLOW_DEADZONE {
            self.pos += to_target.normalize_or_zero() * dist * REFLECTOR_FOLLOW_RATE * dt;
        }
    }

    /// Nudge the persistent offset by one fixed increment.
    pub fn nudge_offset(&mut self, clockwise: bool) {
        let delta = if clockwise {
            OFFSET_INCREMENT_DEG
        } else {
            -OFFSET_INCREMENT_DEG
        };
        self.offset_deg = geom::wrap_degrees(self.offset_deg + delta);
    }
}
