//! Simulation engine — the core of the game.
//!
//! `GameEngine` owns the hecs ECS world, processes player commands, runs
//! all systems at a fixed tick rate, and produces `GameSnapshot`s.
//! Completely headless, enabling deterministic testing.

use std::collections::VecDeque;

use glam::DVec2;
use hecs::World;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use ricochet_core::commands::PlayerCommand;
use ricochet_core::components::{EnemyProfile, Position};
use ricochet_core::constants::ENEMY_SIZE;
use ricochet_core::enums::{EnemyPhase, GamePhase, PlayerMode};
use ricochet_core::events::GameEvent;
use ricochet_core::state::GameSnapshot;
use ricochet_core::types::{Rect, SimTime};

use crate::beam::{self, BeamEffect, InterceptTarget};
use crate::player::Player;
use crate::reflector::Reflector;
use crate::systems;
use crate::wave::{WaveOutcome, WaveState};
use crate::world_setup;

/// Configuration for starting a new simulation.
pub struct SimConfig {
    /// RNG seed for determinism. Same seed = same simulation.
    pub seed: u64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self { seed: 42 }
    }
}

/// The simulation engine. Owns the ECS world and all sim state.
pub struct GameEngine {
    world: World,
    time: SimTime,
    phase: GamePhase,
    rng: ChaCha8Rng,
    walls: Vec<Rect>,
    player: Player,
    reflector: Reflector,
    wave: WaveState,
    /// Latest movement intent; held between ticks like a pressed key.
    move_input: DVec2,
    /// Set by ReleaseFire, consumed by the fire step of the same tick.
    pending_fire: bool,
    beam: Option<BeamEffect>,
    command_queue: VecDeque<PlayerCommand>,
    despawn_buffer: Vec<hecs::Entity>,
    events: Vec<GameEvent>,
}

impl GameEngine {
    /// Create a new engine with the given config. Starts at the main menu;
    /// StartRun begins the run.
    pub fn new(config: SimConfig) -> Self {
        Self {
            world: World::new(),
            time: SimTime::default(),
            phase: GamePhase::default(),
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            walls: world_setup::level_walls(),
            player: Player::new(world_setup::player_start()),
            reflector: Reflector::new(world_setup::reflector_start()),
            wave: WaveState::new(),
            move_input: DVec2::ZERO,
            pending_fire: false,
            beam: None,
            command_queue: VecDeque::new(),
            despawn_buffer: Vec::new(),
            events: Vec::new(),
        }
    }

    /// Queue a player command for processing at the next tick boundary.
    pub fn queue_command(&mut self, command: PlayerCommand) {
        self.command_queue.push_back(command);
    }

    /// Queue multiple commands.
    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = PlayerCommand>) {
        self.command_queue.extend(commands);
    }

    /// Advance the simulation by one tick and return the resulting snapshot.
    pub fn tick(&mut self) -> GameSnapshot {
        self.process_commands();

        if self.phase == GamePhase::Active {
            self.run_systems();
            self.time.advance();
        }

        let events = std::mem::take(&mut self.events);
        systems::snapshot::build(
            &self.world,
            self.time,
            self.phase,
            &self.player,
            &self.reflector,
            &self.wave,
            self.beam.as_ref(),
            &self.walls,
            events,
        )
    }

    /// Get the current game phase.
    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    /// Get the current simulation time.
    pub fn time(&self) -> SimTime {
        self.time
    }

    /// Get a read-only reference to the ECS world.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// Get a read-only reference to the player.
    pub fn player(&self) -> &Player {
        &self.player
    }

    /// Get a read-only reference to the reflector.
    pub fn reflector(&self) -> &Reflector {
        &self.reflector
    }

    /// Get a read-only reference to the wave controller.
    pub fn wave(&self) -> &WaveState {
        &self.wave
    }

    /// Get a mutable reference to the wave controller (for testing).
    #[cfg(test)]
    pub fn wave_mut(&mut self) -> &mut WaveState {
        &mut self.wave
    }

    /// Spawn an enemy directly (for testing).
    #[cfg(test)]
    pub fn spawn_test_enemy(&mut self, pos: DVec2, phase: EnemyPhase) -> hecs::Entity {
        use ricochet_core::components::Enemy;
        self.world.spawn((
            Enemy,
            Position(pos),
            EnemyProfile {
                wave: self.wave.wave.max(1),
                speed: self.wave.enemy_speed,
                phase,
            },
        ))
    }

    /// Process all queued commands.
    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command);
        }
    }

    /// Handle a single player command.
    fn handle_command(&mut self, command: PlayerCommand) {
        match command {
            PlayerCommand::SetMoveInput { x, y } => {
                self.move_input = DVec2::new(x, y);
            }
            PlayerCommand::SetReflectorTarget { x, y } => {
                self.reflector.target = DVec2::new(x, y);
            }
            PlayerCommand::RotateOffset { clockwise } => {
                self.reflector.nudge_offset(clockwise);
            }
            PlayerCommand::BeginAim => {
                if self.phase == GamePhase::Active {
                    self.player.mode = PlayerMode::Aiming;
                }
            }
            PlayerCommand::ReleaseFire => {
                if self.phase == GamePhase::Active && self.player.mode == PlayerMode::Aiming {
                    self.pending_fire = true;
                }
                self.player.mode = PlayerMode::Maneuvering;
            }
            PlayerCommand::StartRun => {
                if matches!(
                    self.phase,
                    GamePhase::MainMenu | GamePhase::Defeat | GamePhase::Victory
                ) {
                    self.reset_run();
                }
            }
            PlayerCommand::ResetRun => {
                self.reset_run();
            }
            PlayerCommand::Pause => {
                if self.phase == GamePhase::Active {
                    self.phase = GamePhase::Paused;
                }
            }
            PlayerCommand::Resume => {
                if self.phase == GamePhase::Paused {
                    self.phase = GamePhase::Active;
                }
            }
        }
    }

    /// Full-state replace: fresh level, player, reflector, and wave state.
    /// The RNG keeps its stream so repeated resets stay deterministic for
    /// a given seed and command sequence.
    fn reset_run(&mut self) {
        self.world = World::new();
        self.time = SimTime::default();
        self.walls = world_setup::level_walls();
        self.player = Player::new(world_setup::player_start());
        self.reflector = Reflector::new(world_setup::reflector_start());
        self.wave = WaveState::new();
        self.move_input = DVec2::ZERO;
        self.pending_fire = false;
        self.beam = None;
        self.despawn_buffer.clear();
        self.phase = GamePhase::Active;
    }

    /// Run all systems in order.
    fn run_systems(&mut self) {
        let dt = self.time.dt();

        // 1. Wave progression and spawning
        match self.wave.update(
            dt,
            &mut self.world,
            &mut self.rng,
            self.player.pos,
            &self.walls,
        ) {
            Some(WaveOutcome::Started(wave)) => {
                self.events.push(GameEvent::WaveStarted { wave });
                // Grace window so a wave can't open on an unavoidable hit.
                self.player.make_invulnerable();
            }
            Some(WaveOutcome::Exhausted) => {
                self.phase = GamePhase::Victory;
                self.events.push(GameEvent::Victory);
                return;
            }
            None => {}
        }

        // 2. Player kinematics, collision, and timers
        self.player.update(dt, self.move_input, &self.walls);

        // 3. Reflector follow
        self.reflector.update(dt);

        // 4. Fire resolution
        if std::mem::take(&mut self.pending_fire) && self.player.try_fire() {
            self.resolve_fire();
        }

        // 5. Beam display timer
        if let Some(effect) = &mut self.beam {
            if !effect.advance(dt) {
                self.beam = None;
            }
        }

        // 6. Enemy seek and death animation
        systems::seek::run(&mut self.world, dt, self.player.pos);

        // 7. Player contact
        self.resolve_contact();

        // 8. Deferred removal of finished death animations
        systems::cleanup::collect_expired(&self.world, &mut self.despawn_buffer);
        systems::cleanup::flush(&mut self.world, &mut self.despawn_buffer);
    }

    /// Resolve a fired beam against the walls and the live enemy set, then
    /// apply its single destruction (if any) and record the visual effect.
    fn resolve_fire(&mut self) {
        let targets: Vec<InterceptTarget> = self
            .world
            .query::<(&Position, &EnemyProfile)>()
            .iter()
            .filter_map(|(entity, (pos, profile))| match profile.phase {
                EnemyPhase::Moving { vulnerable_deg, .. } => Some(InterceptTarget {
                    entity,
                    center: pos.0,
                    radius: ENEMY_SIZE / 2.0,
                    vulnerable_deg,
                }),
                _ => None,
            })
            .collect();

        let resolution = beam::resolve(
            self.player.pos,
            self.reflector.pos,
            self.reflector.offset_deg,
            &self.walls,
            &targets,
        );

        self.events.push(GameEvent::BeamFired {
            reached_reflector: resolution.reached_reflector,
        });

        if let Some(entity) = resolution.destroyed {
            if systems::cleanup::mark_destroyed(&mut self.world, entity) {
                if let Some((position, wave)) = self.enemy_identity(entity) {
                    self.events.push(GameEvent::EnemyDestroyed { position, wave });
                }
            }
        }

        self.beam = Some(BeamEffect::new(resolution));
    }

    /// Apply contact between the player and the nearest overlapping Moving
    /// enemy. The touching enemy always self-destructs; damage only lands
    /// outside the invulnerability window.
    fn resolve_contact(&mut self) {
        let Some(hit) = systems::contact::find(&self.world, &self.player.rect(), self.player.pos)
        else {
            return;
        };

        if !self.player.invulnerable {
            let defeated = self.player.take_damage();
            self.events.push(GameEvent::PlayerHit {
                health_remaining: self.player.health,
            });
            if defeated {
                self.phase = GamePhase::Defeat;
                self.events.push(GameEvent::Defeat);
            } else {
                self.player.make_invulnerable();
            }
        }

        if systems::cleanup::mark_destroyed(&mut self.world, hit.entity) {
            self.events.push(GameEvent::EnemyDestroyed {
                position: hit.position,
                wave: hit.wave,
            });
        }
    }

    fn enemy_identity(&self, entity: hecs::Entity) -> Option<(DVec2, u32)> {
        let pos = self.world.get::<&Position>(entity).ok()?;
        let profile = self.world.get::<&EnemyProfile>(entity).ok()?;
        Some((pos.0, profile.wave))
    }
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::new(SimConfig::default())
    }
}
