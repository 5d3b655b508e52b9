//! Player contact detection.

use glam::DVec2;
use hecs::{Entity, World};

use ricochet_core::components::{EnemyProfile, Position};
use ricochet_core::enums::EnemyPhase;
use ricochet_core::types::Rect;

/// A Moving enemy overlapping the player this tick.
#[derive(Debug, Clone, Copy)]
pub struct ContactHit {
    pub entity: Entity,
    pub position: DVec2,
    pub wave: u32,
}

/// Find the nearest Moving enemy whose box overlaps the player's box.
///
/// At most one contact is reported per tick; Dying and Idle enemies deal
/// no damage and are skipped. The engine decides what the contact means
/// (damage, or nothing during the invulnerability window), but either way
/// the touching enemy self-destructs.
pub fn find(world: &World, player_rect: &Rect, player_pos: DVec2) -> Option<ContactHit> {
    let mut nearest: Option<(f64, ContactHit)> = None;

    for (entity, (pos, profile)) in world.query::<(&Position, &EnemyProfile)>().iter() {
        if !matches!(profile.phase, EnemyPhase::Moving { .. }) {
            continue;
        }
        if !pos.enemy_rect().overlaps(player_rect) {
            continue;
        }
        let dist_sq = pos.0.distance_squared(player_pos);
        let hit = ContactHit {
            entity,
            position: pos.0,
            wave: profile.wave,
        };
        match nearest {
            Some((best, _)) if best <= dist_sq => {}
            _ => nearest = Some((dist_sq, hit)),
        }
    }

    nearest.map(|(_, hit)| hit)
}
