//! Snapshot assembly: the read-only projection of the tick's end state.

use hecs::World;

use ricochet_core::components::{EnemyProfile, Position};
use ricochet_core::constants::TOTAL_WAVES;
use ricochet_core::enums::GamePhase;
use ricochet_core::events::GameEvent;
use ricochet_core::state::{
    BeamView, EnemyView, GameSnapshot, PlayerView, ReflectorView, WaveView,
};
use ricochet_core::types::{Rect, SimTime};

use crate::beam::BeamEffect;
use crate::player::Player;
use crate::reflector::Reflector;
use crate::wave::WaveState;

/// Build the complete snapshot for this tick. Purely observational: every
/// gameplay effect has already been applied by the systems that ran before
/// it, and the event list is handed over wholesale.
#[allow(clippy::too_many_arguments)]
pub fn build(
    world: &World,
    time: SimTime,
    phase: GamePhase,
    player: &Player,
    reflector: &Reflector,
    wave: &WaveState,
    beam: Option<&BeamEffect>,
    walls: &[Rect],
    events: Vec<GameEvent>,
) -> GameSnapshot {
    let mut enemies: Vec<EnemyView> = world
        .query::<(&Position, &EnemyProfile)>()
        .iter()
        .map(|(entity, (pos, profile))| EnemyView {
            id: entity.id(),
            position: pos.0,
            wave: profile.wave,
            phase: profile.phase,
        })
        .collect();
    // Stable order for the frontend and for snapshot comparison.
    enemies.sort_by_key(|e| e.id);

    GameSnapshot {
        time,
        phase,
        player: PlayerView {
            position: player.pos,
            health: player.health,
            mode: player.mode,
            invulnerable: player.invulnerable,
            cooldown_fraction: player.cooldown_fraction(),
        },
        reflector: ReflectorView {
            position: reflector.pos,
            target: reflector.target,
            offset_deg: reflector.offset_deg,
        },
        enemies,
        beam: beam.map(|b| BeamView {
            origin: b.resolution.origin,
            first_leg_end: b.resolution.first_leg_end,
            second_leg_end: b.resolution.second_leg_end,
            reached_reflector: b.resolution.reached_reflector,
            age_secs: b.age_secs,
        }),
        wave: WaveView {
            wave: wave.wave,
            total_waves: TOTAL_WAVES,
            remaining_to_spawn: wave.remaining_to_spawn,
            live_enemies: crate::wave::live_enemy_count(world),
            in_transition: wave.in_transition,
            transition_remaining_secs: wave.transition_remaining(),
        },
        walls: walls.to_vec(),
        events,
    }
}
