//! Wave controller — a two-state machine driving spawn timing and density.
//!
//! *Transition*: count up to the transition duration, then start the next
//! wave (or end the run in victory once the waves are exhausted).
//! *Active*: spawn one enemy per interval until the quota runs out, then
//! wait for the live set to empty before cycling back to Transition.

use hecs::World;
use rand_chacha::ChaCha8Rng;

use glam::DVec2;
use ricochet_core::components::Enemy;
use ricochet_core::constants::*;
use ricochet_core::types::Rect;

use crate::world_setup;

/// Outcome of one wave-controller tick that the engine must react to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WaveOutcome {
    /// A new wave just started spawning.
    Started(u32),
    /// All waves cleared; the run ends in victory.
    Exhausted,
}

#[derive(Debug, Clone)]
pub struct WaveState {
    /// Current wave, 1-based. 0 until the first wave starts.
    pub wave: u32,
    /// Enemies still to spawn this wave.
    pub remaining_to_spawn: u32,
    /// Seconds between spawns this wave.
    pub spawn_interval: f64,
    /// Seek speed for enemies spawned this wave.
    pub enemy_speed: f64,
    pub in_transition: bool,
    spawn_timer: f64,
    transition_timer: f64,
}

impl WaveState {
    /// A fresh run starts in the transition countdown to wave 1.
    pub fn new() -> Self {
        Self {
            wave: 0,
            remaining_to_spawn: 0,
            spawn_interval: SPAWN_INTERVAL_BASE,
            enemy_speed: ENEMY_BASE_SPEED,
            in_transition: true,
            spawn_timer: 0.0,
            transition_timer: 0.0,
        }
    }

    /// Seconds until the next wave starts (0 outside a transition).
    pub fn transition_remaining(&self) -> f64 {
        if self.in_transition {
            (WAVE_TRANSITION_SECS - self.transition_timer).max(0.0)
        } else {
            0.0
        }
    }

    /// Advance the controller by one tick, possibly spawning an enemy.
    pub fn update(
        &mut self,
        dt: f64,
        world: &mut World,
        rng: &mut ChaCha8Rng,
        player_pos: DVec2,
        walls: &[Rect],
    ) -> Option<WaveOutcome> {
        if self.in_transition {
            self.transition_timer += dt;
            if self.transition_timer >= WAVE_TRANSITION_SECS {
                return Some(self.start_next_wave());
            }
            return None;
        }

        if self.remaining_to_spawn == 0 && live_enemy_count(world) == 0 {
            self.in_transition = true;
            self.transition_timer = 0.0;
            return None;
        }

        self.spawn_timer += dt;
        if self.spawn_timer >= self.spawn_interval && self.remaining_to_spawn > 0 {
            world_setup::spawn_enemy(world, rng, player_pos, walls, self.enemy_speed, self.wave);
            self.spawn_timer = 0.0;
            self.remaining_to_spawn -= 1;
        }

        None
    }

    /// Increment the wave counter and compute its quota, interval, and
    /// speed; past the last wave this reports exhaustion instead.
    fn start_next_wave(&mut self) -> WaveOutcome {
        self.wave += 1;
        if self.wave > TOTAL_WAVES {
            return WaveOutcome::Exhausted;
        }

        let step = (self.wave - 1) as f64;
        self.remaining_to_spawn = ENEMY_COUNT_BASE + (self.wave - 1) * ENEMY_COUNT_INCREASE;
        self.spawn_interval =
            (SPAWN_INTERVAL_BASE - step * SPAWN_INTERVAL_DECREASE).max(SPAWN_INTERVAL_FLOOR);
        self.enemy_speed = ENEMY_BASE_SPEED * ENEMY_SPEED_GROWTH.powf(step);

        self.spawn_timer = 0.0;
        self.transition_timer = 0.0;
        self.in_transition = false;

        WaveOutcome::Started(self.wave)
    }
}

impl Default for WaveState {
    fn default() -> Self {
        Self::new()
    }
}

/// Number of live enemies (any phase; Dying ones still hold the wave open
/// only until their animation finishes and cleanup removes them).
pub fn live_enemy_count(world: &World) -> u32 {
    let mut query = world.query::<&Enemy>();
    query.iter().count() as u32
}
