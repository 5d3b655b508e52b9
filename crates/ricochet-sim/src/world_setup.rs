//! Level construction and enemy spawn factory.

use glam::DVec2;
use hecs::World;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use ricochet_core::components::{Enemy, EnemyProfile, Position};
use ricochet_core::constants::*;
use ricochet_core::enums::EnemyPhase;
use ricochet_core::geom;
use ricochet_core::types::Rect;

/// Build the static collision world: four boundary walls plus the fixed
/// interior obstacles. Immutable for the session.
pub fn level_walls() -> Vec<Rect> {
    vec![
        // Boundary walls.
        Rect::new(0.0, 0.0, WORLD_WIDTH, WALL_THICKNESS),
        Rect::new(0.0, 0.0, WALL_THICKNESS, WORLD_HEIGHT),
        Rect::new(0.0, WORLD_HEIGHT - WALL_THICKNESS, WORLD_WIDTH, WALL_THICKNESS),
        Rect::new(WORLD_WIDTH - WALL_THICKNESS, 0.0, WALL_THICKNESS, WORLD_HEIGHT),
        // Interior obstacles.
        Rect::new(WORLD_WIDTH / 4.0, WORLD_HEIGHT / 3.0, 100.0, 100.0),
        Rect::new(
            WORLD_WIDTH * 3.0 / 4.0 - 100.0,
            WORLD_HEIGHT * 2.0 / 3.0 - 100.0,
            100.0,
            100.0,
        ),
        Rect::new(WORLD_WIDTH / 2.0 - 50.0, WORLD_HEIGHT / 2.0 - 50.0, 100.0, 20.0),
    ]
}

/// Starting player position.
pub fn player_start() -> DVec2 {
    DVec2::new(WORLD_WIDTH / 4.0, WORLD_HEIGHT / 2.0)
}

/// Starting reflector position.
pub fn reflector_start() -> DVec2 {
    DVec2::new(WORLD_WIDTH * 3.0 / 4.0, WORLD_HEIGHT / 2.0)
}

/// Spawn a single enemy at a wave-appropriate position, seeking from a
/// random initial heading (re-aimed at the player on its first update).
pub fn spawn_enemy(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    player_pos: DVec2,
    walls: &[Rect],
    speed: f64,
    wave: u32,
) -> hecs::Entity {
    let pos = pick_spawn_position(rng, player_pos, walls);

    let heading_deg: f64 = rng.gen_range(0.0..360.0);
    let profile = EnemyProfile {
        wave,
        speed,
        phase: EnemyPhase::Moving {
            heading_deg,
            vulnerable_deg: geom::wrap_degrees(heading_deg + 180.0),
        },
    };

    world.spawn((Enemy, Position(pos), profile))
}

/// Pick a spawn position on a random screen edge, rejecting candidates too
/// close to the player or inside a wall. After the attempt budget runs out
/// an unchecked edge position is used — spawning must never stall.
fn pick_spawn_position(rng: &mut ChaCha8Rng, player_pos: DVec2, walls: &[Rect]) -> DVec2 {
    for _ in 0..SPAWN_MAX_ATTEMPTS {
        let pos = random_edge_position(rng);
        if pos.distance(player_pos) < SPAWN_MIN_PLAYER_DIST {
            continue;
        }
        let rect = Rect::from_center(pos, ENEMY_SIZE, ENEMY_SIZE);
        if walls.iter().any(|w| rect.overlaps(w)) {
            continue;
        }
        return pos;
    }

    random_edge_position(rng)
}

/// Uniform position along one of the four screen edges, inset by the
/// spawn margin.
fn random_edge_position(rng: &mut ChaCha8Rng) -> DVec2 {
    let across_x = rng.gen_range(SPAWN_EDGE_MARGIN..WORLD_WIDTH - SPAWN_EDGE_MARGIN);
    let across_y = rng.gen_range(SPAWN_EDGE_MARGIN..WORLD_HEIGHT - SPAWN_EDGE_MARGIN);

    match rng.gen_range(0..4) {
        0 => DVec2::new(across_x, SPAWN_EDGE_MARGIN),
        1 => DVec2::new(WORLD_WIDTH - SPAWN_EDGE_MARGIN, across_y),
        2 => DVec2::new(across_x, WORLD_HEIGHT - SPAWN_EDGE_MARGIN),
        _ => DVec2::new(SPAWN_EDGE_MARGIN, across_y),
    }
}
