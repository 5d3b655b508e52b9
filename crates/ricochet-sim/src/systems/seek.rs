//! Enemy seek system: steer Moving enemies at the player and advance the
//! death animation of Dying ones.

use glam::DVec2;
use hecs::World;

use ricochet_core::components::{EnemyProfile, Position};
use ricochet_core::enums::EnemyPhase;
use ricochet_core::geom;

/// Advance every enemy by one tick.
///
/// Moving enemies re-aim at the player each tick and travel in a straight
/// line at their spawn speed; the vulnerable heading is kept as the exact
/// opposite of the movement heading. Dying enemies stay frozen in place
/// while their animation timer counts up. Idle enemies do nothing.
pub fn run(world: &mut World, dt: f64, player_pos: DVec2) {
    for (_, (pos, profile)) in world.query_mut::<(&mut Position, &mut EnemyProfile)>() {
        match &mut profile.phase {
            EnemyPhase::Idle => {}
            EnemyPhase::Moving {
                heading_deg,
                vulnerable_deg,
            } => {
                let to_player = player_pos - pos.0;
                let dir = to_player.normalize_or_zero();
                if dir != DVec2::ZERO {
                    *heading_deg = geom::angle_of(dir);
                    *vulnerable_deg = geom::wrap_degrees(*heading_deg + 180.0);
                    pos.0 += dir * profile.speed * dt;
                }
            }
            EnemyPhase::Dying { elapsed_secs } => {
                *elapsed_secs += dt;
            }
        }
    }
}
