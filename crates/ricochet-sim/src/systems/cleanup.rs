//! Enemy lifecycle: the Dying transition and deferred removal.
//!
//! Destruction is two-phase. `mark_destroyed` flips an enemy into Dying
//! (interception and contact both go through it); the entity stays in the
//! world, inert, until its animation timer expires. `collect_expired`
//! gathers finished entities into the despawn buffer and `flush` removes
//! them, so no system ever observes an entity mid-removal within a tick.

use hecs::{Entity, World};

use ricochet_core::components::EnemyProfile;
use ricochet_core::constants::DEATH_ANIM_SECS;
use ricochet_core::enums::EnemyPhase;

/// Begin the death animation for an enemy. Idempotent: marking an enemy
/// already Dying (or already despawned) changes nothing. Returns whether
/// the transition happened.
pub fn mark_destroyed(world: &mut World, entity: Entity) -> bool {
    let Ok(mut profile) = world.get::<&mut EnemyProfile>(entity) else {
        return false;
    };
    if matches!(profile.phase, EnemyPhase::Dying { .. }) {
        return false;
    }
    profile.phase = EnemyPhase::Dying { elapsed_secs: 0.0 };
    true
}

/// Queue every enemy whose death animation has finished for removal.
pub fn collect_expired(world: &World, despawn_buffer: &mut Vec<Entity>) {
    for (entity, profile) in world.query::<&EnemyProfile>().iter() {
        if let EnemyPhase::Dying { elapsed_secs } = profile.phase {
            if elapsed_secs >= DEATH_ANIM_SECS {
                despawn_buffer.push(entity);
            }
        }
    }
}

/// Despawn everything in the buffer. Already-missing entities are ignored.
pub fn flush(world: &mut World, despawn_buffer: &mut Vec<Entity>) {
    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }
}
