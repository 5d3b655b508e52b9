//! Simulation constants and tuning parameters.

/// Simulation tick rate (Hz).
pub const TICK_RATE: u32 = 60;

/// Seconds per tick.
pub const DT: f64 = 1.0 / TICK_RATE as f64;

// --- World ---

/// Playfield width in world units.
pub const WORLD_WIDTH: f64 = 1024.0;

/// Playfield height in world units.
pub const WORLD_HEIGHT: f64 = 768.0;

/// Thickness of the boundary walls.
pub const WALL_THICKNESS: f64 = 20.0;

// --- Player ---

/// Player collision box side length.
pub const PLAYER_SIZE: f64 = 40.0;

/// Player starting (and maximum) health.
pub const PLAYER_MAX_HEALTH: u32 = 3;

/// Acceleration rate (fraction of max velocity gained per second).
pub const PLAYER_ACCELERATION: f64 = 12.0;

/// Deceleration rate (fraction of max velocity shed per second).
/// Lower than acceleration, so stopping feels heavier than starting.
pub const PLAYER_DECELERATION: f64 = 6.0;

/// Maximum player speed (world units per second).
pub const PLAYER_MAX_VELOCITY: f64 = 300.0;

/// Invulnerability window after taking damage (seconds).
pub const PLAYER_INVULNERABILITY_SECS: f64 = 2.0;

/// Minimum time between beam shots (seconds).
pub const FIRE_COOLDOWN_SECS: f64 = 0.5;

// --- Reflector ---

/// Reflector collision box side length.
pub const REFLECTOR_SIZE: f64 = 35.0;

/// Easing rate toward the cursor target (higher = snappier).
pub const REFLECTOR_FOLLOW_RATE: f64 = 2.0;

/// Distance under which the reflector stops chasing its target.
pub const REFLECTOR_FOLLOW_DEADZONE: f64 = 5.0;

/// Angular offset adjustment per RotateOffset command (degrees).
pub const OFFSET_INCREMENT_DEG: f64 = 2.0;

// --- Beam ---

/// Maximum beam travel per leg (world units).
pub const BEAM_MAX_DISTANCE: f64 = 2000.0;

/// How long the beam visual effect persists after firing (seconds).
pub const BEAM_DISPLAY_SECS: f64 = 0.5;

/// A wall hit must be more than this much closer than the reflector to
/// count as blocking the first leg.
pub const BEAM_WALL_TOLERANCE: f64 = 5.0;

/// Extra slack added to the enemy collision radius for beam interception.
pub const BEAM_INTERCEPT_BUFFER: f64 = 2.0;

// --- Enemies ---

/// Enemy collision box side length.
pub const ENEMY_SIZE: f64 = 35.0;

/// Wave-1 enemy speed (world units per second).
pub const ENEMY_BASE_SPEED: f64 = 50.0;

/// Width of the vulnerable arc centered on the enemy's back (degrees).
pub const VULNERABLE_ARC_DEG: f64 = 90.0;

/// Duration of the death animation before removal (seconds).
pub const DEATH_ANIM_SECS: f64 = 0.5;

// --- Waves ---

/// Number of waves in a run.
pub const TOTAL_WAVES: u32 = 5;

/// Countdown between waves (seconds).
pub const WAVE_TRANSITION_SECS: f64 = 3.0;

/// Enemy quota for wave 1.
pub const ENEMY_COUNT_BASE: u32 = 5;

/// Additional enemies per subsequent wave.
pub const ENEMY_COUNT_INCREASE: u32 = 3;

/// Spawn interval for wave 1 (seconds).
pub const SPAWN_INTERVAL_BASE: f64 = 1.5;

/// Spawn interval reduction per subsequent wave (seconds).
pub const SPAWN_INTERVAL_DECREASE: f64 = 0.2;

/// Spawn interval floor (seconds).
pub const SPAWN_INTERVAL_FLOOR: f64 = 0.5;

/// Enemy speed multiplier per wave (compounding).
pub const ENEMY_SPEED_GROWTH: f64 = 1.2;

/// Minimum spawn distance from the player.
pub const SPAWN_MIN_PLAYER_DIST: f64 = 200.0;

/// Inset from the playfield corners when placing along an edge.
pub const SPAWN_EDGE_MARGIN: f64 = 50.0;

/// Placement attempts before falling back to an unchecked edge position.
pub const SPAWN_MAX_ATTEMPTS: u32 = 50;
